use super::*;

#[test]
fn format_date_parses_iso_prefix() {
    assert_eq!(format_date("2024-01-02T03:04:05.000Z"), "2024. 01. 02.");
    assert_eq!(format_date("2024-12-31"), "2024. 12. 31.");
}

#[test]
fn format_date_falls_back_on_garbage() {
    assert_eq!(format_date(""), "-");
    assert_eq!(format_date("yesterday"), "-");
    assert_eq!(format_date("2024/01/02"), "-");
}

#[test]
fn format_datetime_includes_minutes() {
    assert_eq!(format_datetime("2024-01-02T03:04:05Z"), "2024. 01. 02. 03:04");
}

#[test]
fn format_datetime_degrades_to_date_without_time() {
    assert_eq!(format_datetime("2024-01-02"), "2024. 01. 02.");
    assert_eq!(format_datetime("bogus"), "-");
}

#[test]
fn format_opt_date_renders_dash_for_none() {
    assert_eq!(format_opt_date(None), "-");
    assert_eq!(format_opt_date(Some("2024-01-02")), "2024. 01. 02.");
}
