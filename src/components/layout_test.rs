use super::*;

#[test]
fn root_item_matches_exactly() {
    assert!(is_active("/", "/"));
    assert!(!is_active("/series", "/"));
}

#[test]
fn section_items_match_by_prefix() {
    assert!(is_active("/series", "/series"));
    assert!(is_active("/activation?series=s1", "/activation"));
    assert!(!is_active("/download", "/series"));
}

#[test]
fn active_label_resolves_known_routes() {
    assert_eq!(active_label("/"), "대시보드");
    assert_eq!(active_label("/series"), "시리즈");
    assert_eq!(active_label("/activation"), "정품등록");
    assert_eq!(active_label("/download"), "다운로드");
    assert_eq!(active_label("/shipments"), "출고 관리");
}

#[test]
fn active_label_falls_back_for_unknown_routes() {
    assert_eq!(active_label("/nowhere"), "Agency Console");
}
