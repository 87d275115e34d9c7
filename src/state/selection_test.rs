use super::*;

fn eligible() -> Vec<String> {
    vec!["a".to_owned(), "b".to_owned(), "c".to_owned()]
}

#[test]
fn toggle_adds_then_removes() {
    let mut selected = HashSet::new();
    toggle(&mut selected, "a");
    assert!(selected.contains("a"));
    toggle(&mut selected, "a");
    assert!(selected.is_empty());
}

#[test]
fn toggle_all_from_empty_selects_everything() {
    let mut selected = HashSet::new();
    toggle_all(&mut selected, &eligible());
    assert_eq!(selected.len(), 3);
    assert!(selected.contains("b"));
}

#[test]
fn toggle_all_from_partial_selects_everything() {
    let mut selected = HashSet::new();
    toggle(&mut selected, "a");
    toggle_all(&mut selected, &eligible());
    assert_eq!(selected.len(), 3);
}

#[test]
fn toggle_all_from_full_empties() {
    let mut selected: HashSet<String> = eligible().into_iter().collect();
    toggle_all(&mut selected, &eligible());
    assert!(selected.is_empty());
}

#[test]
fn toggle_all_with_no_eligible_rows_is_a_no_op() {
    let mut selected = HashSet::new();
    toggle_all(&mut selected, &[]);
    assert!(selected.is_empty());
}

#[test]
fn all_selected_requires_non_empty_eligible_set() {
    let selected = HashSet::new();
    assert!(!all_selected(&selected, &[]));

    let full: HashSet<String> = eligible().into_iter().collect();
    assert!(all_selected(&full, &eligible()));

    let mut partial = HashSet::new();
    partial.insert("a".to_owned());
    assert!(!all_selected(&partial, &eligible()));
}
