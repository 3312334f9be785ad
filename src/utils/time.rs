use chrono::{DateTime, NaiveDate, Utc};

use crate::error::{Error, Result};

const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn now() -> DateTime<Utc> {
    Utc::now()
}

pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
        .map_err(|e| Error::InvalidArgument(format!("Invalid date '{}': {}", s, e)))
}

/// Parses an optional `YYYY-MM-DD` query value, falling back to today.
pub fn date_or_today(s: Option<&str>) -> Result<NaiveDate> {
    match s {
        Some(raw) if !raw.trim().is_empty() => parse_date(raw),
        _ => Ok(today()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_key_is_zero_padded() {
        let d = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(date_key(d), "2024-01-05");
        assert_eq!(parse_date("2024-01-05").unwrap(), d);
    }

    #[test]
    fn rejects_malformed_dates() {
        assert!(matches!(parse_date("2024-13-01"), Err(Error::InvalidArgument(_))));
        assert!(matches!(parse_date("yesterday"), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn blank_falls_back_to_today() {
        assert_eq!(date_or_today(None).unwrap(), today());
        assert_eq!(date_or_today(Some("  ")).unwrap(), today());
    }
}
