//! Date/time helpers for the ISO strings the API serves.

use chrono::{Local, NaiveDate, NaiveDateTime};

/// Lenient parse of the datetime shapes the API and `datetime-local` inputs
/// produce: with or without seconds/fraction, or a bare date.
pub fn parse(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M"))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// dd/mm/yyyy, falling back to the raw string when unparseable
pub fn format_date(s: &str) -> String {
    parse(s)
        .map(|d| d.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|| s.to_string())
}

pub fn format_datetime(s: &str) -> String {
    parse(s)
        .map(|d| d.format("%d/%m/%Y %H:%M").to_string())
        .unwrap_or_else(|| s.to_string())
}

pub fn is_past(s: &str) -> bool {
    parse(s).map(|d| d < now()).unwrap_or(false)
}

pub fn is_today(s: &str) -> bool {
    parse(s).map(|d| d.date() == now().date()).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_api_and_input_shapes() {
        assert!(parse("2025-03-10T14:30:00").is_some());
        assert!(parse("2025-03-10T14:30:00.123456").is_some());
        assert!(parse("2025-03-10T14:30").is_some());
        assert!(parse("1992-04-01").is_some());
        assert!(parse("pas une date").is_none());
    }

    #[test]
    fn formats_french_style() {
        assert_eq!(format_date("2025-03-10T14:30:00"), "10/03/2025");
        assert_eq!(format_datetime("2025-03-10T14:30:00"), "10/03/2025 14:30");
        // Unparseable input is shown as-is rather than hidden.
        assert_eq!(format_date("???"), "???");
    }

    #[test]
    fn past_and_today_checks() {
        assert!(is_past("1990-01-01T00:00:00"));
        assert!(!is_past("2990-01-01T00:00:00"));
        assert!(!is_today("1990-01-01T00:00:00"));
        let today = now().format("%Y-%m-%dT%H:%M:%S").to_string();
        assert!(is_today(&today));
    }
}
