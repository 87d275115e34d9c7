//! Display formatting for server ISO 8601 timestamps.
//!
//! The server sends `YYYY-MM-DDTHH:MM:SS(.sss)Z` strings; tables and cards
//! only need the Korean-style date (`2024. 01. 02.`) or date-plus-minutes
//! form. Unparseable or missing values render as `-`.

#[cfg(test)]
#[path = "dates_test.rs"]
mod dates_test;

fn digits_at(s: &str, range: core::ops::Range<usize>) -> bool {
    s.get(range)
        .is_some_and(|part| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit()))
}

fn has_date_prefix(iso: &str) -> bool {
    digits_at(iso, 0..4)
        && iso.as_bytes().get(4) == Some(&b'-')
        && digits_at(iso, 5..7)
        && iso.as_bytes().get(7) == Some(&b'-')
        && digits_at(iso, 8..10)
}

/// Format the date part of an ISO timestamp, e.g. `2024. 01. 02.`.
pub fn format_date(iso: &str) -> String {
    if !has_date_prefix(iso) {
        return "-".to_owned();
    }
    format!("{}. {}. {}.", &iso[0..4], &iso[5..7], &iso[8..10])
}

/// Format an ISO timestamp with minutes, e.g. `2024. 01. 02. 03:04`.
pub fn format_datetime(iso: &str) -> String {
    let date = format_date(iso);
    if date == "-" {
        return date;
    }
    let has_time = iso.as_bytes().get(10) == Some(&b'T')
        && digits_at(iso, 11..13)
        && iso.as_bytes().get(13) == Some(&b':')
        && digits_at(iso, 14..16);
    if has_time {
        format!("{date} {}:{}", &iso[11..13], &iso[14..16])
    } else {
        date
    }
}

/// Format an optional timestamp, rendering `-` when absent.
pub fn format_opt_date(iso: Option<&str>) -> String {
    iso.map_or_else(|| "-".to_owned(), format_date)
}
