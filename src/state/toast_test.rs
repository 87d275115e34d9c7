use super::*;

#[test]
fn first_show_is_accepted() {
    let mut toast = ToastState::default();
    let seq = toast.show_at("저장되었습니다", Severity::Success, 1000.0);
    assert_eq!(seq, Some(1));
    assert_eq!(toast.message.as_deref(), Some("저장되었습니다"));
    assert_eq!(toast.severity, Severity::Success);
}

#[test]
fn identical_message_within_window_is_suppressed() {
    let mut toast = ToastState::default();
    let first = toast.show_at("A", Severity::Error, 1000.0);
    let second = toast.show_at("A", Severity::Error, 2500.0);
    assert!(first.is_some());
    assert!(second.is_none());
    // Store state unchanged: timer seq was not reset.
    assert_eq!(toast.timer_seq(), first.unwrap());
}

#[test]
fn identical_message_after_window_is_accepted() {
    let mut toast = ToastState::default();
    toast.show_at("A", Severity::Info, 1000.0);
    let again = toast.show_at("A", Severity::Info, 3001.0);
    assert_eq!(again, Some(2));
}

#[test]
fn distinct_message_within_window_replaces_and_resets_timer() {
    let mut toast = ToastState::default();
    let first = toast.show_at("A", Severity::Info, 1000.0);
    let second = toast.show_at("B", Severity::Error, 1100.0);
    assert_eq!(second, Some(2));
    assert_eq!(toast.message.as_deref(), Some("B"));
    // The old dismissal is now stale.
    toast.expire(first.unwrap());
    assert_eq!(toast.message.as_deref(), Some("B"));
}

#[test]
fn triple_show_scenario_accepts_first_and_third() {
    // show("A") at t=0, t=500, t=2500: 1st and 3rd accepted, 2nd suppressed.
    let mut toast = ToastState::default();
    assert!(toast.show_at("A", Severity::Error, 0.0).is_some());
    assert!(toast.show_at("A", Severity::Error, 500.0).is_none());
    assert!(toast.show_at("A", Severity::Error, 2500.0).is_some());
    assert_eq!(toast.timer_seq(), 2);
}

#[test]
fn current_expire_clears_message_and_dedupe_memory() {
    let mut toast = ToastState::default();
    let seq = toast.show_at("A", Severity::Info, 1000.0).unwrap();
    toast.expire(seq);
    assert!(toast.message.is_none());
    // Dedupe memory cleared: the same message is accepted again immediately.
    assert!(toast.show_at("A", Severity::Info, 1001.0).is_some());
}

#[test]
fn stale_expire_is_a_no_op() {
    let mut toast = ToastState::default();
    let first = toast.show_at("A", Severity::Info, 0.0).unwrap();
    let second = toast.show_at("B", Severity::Info, 100.0).unwrap();
    toast.expire(first);
    assert_eq!(toast.message.as_deref(), Some("B"));
    toast.expire(second);
    assert!(toast.message.is_none());
}

#[test]
fn hide_clears_immediately_and_cancels_pending_dismissal() {
    let mut toast = ToastState::default();
    let seq = toast.show_at("A", Severity::Info, 0.0).unwrap();
    toast.hide();
    assert!(toast.message.is_none());
    // The pending dismissal must not fire against a later toast.
    let next = toast.show_at("B", Severity::Info, 10.0).unwrap();
    toast.expire(seq);
    assert_eq!(toast.message.as_deref(), Some("B"));
    toast.expire(next);
    assert!(toast.message.is_none());
}

#[test]
fn hide_resets_dedupe_memory() {
    let mut toast = ToastState::default();
    toast.show_at("A", Severity::Info, 0.0);
    toast.hide();
    assert!(toast.show_at("A", Severity::Info, 1.0).is_some());
}
