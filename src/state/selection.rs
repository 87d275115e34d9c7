//! Multi-select helpers for checkbox tables.

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

use std::collections::HashSet;

/// Toggle a single id in or out of the selection.
pub fn toggle(selected: &mut HashSet<String>, id: &str) {
    if !selected.remove(id) {
        selected.insert(id.to_owned());
    }
}

/// Toggle-all semantics: a full selection empties, anything else selects
/// every eligible id.
pub fn toggle_all(selected: &mut HashSet<String>, eligible: &[String]) {
    if selected.len() == eligible.len() {
        selected.clear();
    } else {
        selected.clear();
        selected.extend(eligible.iter().cloned());
    }
}

/// Whether the header checkbox should render checked.
pub fn all_selected(selected: &HashSet<String>, eligible: &[String]) -> bool {
    !eligible.is_empty() && selected.len() == eligible.len()
}
