use std::fmt::Display;

use chrono::{DateTime, TimeZone};

/// SQLite rowids assigned by `INTEGER PRIMARY KEY AUTOINCREMENT`.
pub type DbId = i64;

/// Wire format for server-assigned creation timestamps (`YYYY-MM-DD HH:MM:SS`).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format a timestamp with [`TIMESTAMP_FORMAT`].
pub fn format_timestamp<Tz>(ts: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    ts.format(TIMESTAMP_FORMAT).to_string()
}

/// Current local wall-clock time in [`TIMESTAMP_FORMAT`].
pub fn now_timestamp() -> String {
    format_timestamp(&chrono::Local::now())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn formats_without_fraction_or_offset() {
        let ts = NaiveDate::from_ymd_opt(2024, 6, 3)
            .unwrap()
            .and_hms_milli_opt(7, 5, 9, 450)
            .unwrap()
            .and_utc();
        assert_eq!(format_timestamp(&ts), "2024-06-03 07:05:09");
    }

    #[test]
    fn now_has_fixed_width() {
        let now = now_timestamp();
        assert_eq!(now.len(), 19);
        assert!(chrono::NaiveDateTime::parse_from_str(&now, TIMESTAMP_FORMAT).is_ok());
    }
}
