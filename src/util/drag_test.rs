use super::*;

#[test]
fn press_on_plain_element_starts_drag() {
    let mut drag = DragState::default();
    assert!(drag.press(100.0, 50.0, "DIV"));
    assert!(drag.is_dragging());
}

#[test]
fn press_on_interactive_controls_is_ignored() {
    for tag in ["INPUT", "TEXTAREA", "SELECT", "BUTTON", "A", "button", "input"] {
        let mut drag = DragState::default();
        assert!(!drag.press(10.0, 10.0, tag), "tag {tag} should not drag");
        assert!(!drag.is_dragging());
    }
}

#[test]
fn moved_applies_offset_from_grab_point() {
    let mut drag = DragState::default();
    drag.press(100.0, 50.0, "DIV");
    drag.moved(130.0, 45.0);
    assert_eq!((drag.x, drag.y), (30.0, -5.0));
}

#[test]
fn moved_without_press_is_a_no_op() {
    let mut drag = DragState::default();
    drag.moved(300.0, 300.0);
    assert_eq!((drag.x, drag.y), (0.0, 0.0));
}

#[test]
fn second_drag_continues_from_current_position() {
    let mut drag = DragState::default();
    drag.press(100.0, 100.0, "DIV");
    drag.moved(120.0, 110.0);
    drag.release();
    assert!(!drag.is_dragging());

    drag.press(200.0, 200.0, "DIV");
    drag.moved(210.0, 190.0);
    assert_eq!((drag.x, drag.y), (30.0, 0.0));
}

#[test]
fn release_stops_tracking_movement() {
    let mut drag = DragState::default();
    drag.press(0.0, 0.0, "DIV");
    drag.moved(10.0, 10.0);
    drag.release();
    drag.moved(500.0, 500.0);
    assert_eq!((drag.x, drag.y), (10.0, 10.0));
}

#[test]
fn transform_formats_css_translate() {
    let mut drag = DragState::default();
    drag.press(0.0, 0.0, "DIV");
    drag.moved(12.0, -7.5);
    assert_eq!(drag.transform(), "translate(12px, -7.5px)");
}
