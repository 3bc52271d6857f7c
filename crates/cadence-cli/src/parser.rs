use anyhow::Result;
use cadence_core::models::WeekdaySet;
use chrono::{NaiveDate, Weekday};
use chrono_english::{parse_date_string, Dialect};

/// Parses a date in natural or ISO form ("2025-09-01", "next friday"),
/// resolved relative to `today`.
pub fn parse_date(input: &str, today: NaiveDate) -> Result<NaiveDate> {
    let anchor = today
        .and_hms_opt(0, 0, 0)
        .expect("midnight exists on every date")
        .and_utc();
    parse_date_string(input, anchor, Dialect::Us)
        .map(|dt| dt.date_naive())
        .map_err(|e| anyhow::anyhow!("Failed to parse date '{}': {}", input, e))
}

pub fn parse_weekday(input: &str) -> Result<Weekday> {
    input
        .parse::<Weekday>()
        .map_err(|_| anyhow::anyhow!("Invalid weekday: '{}'", input))
}

/// Parses a comma-separated weekday list ("mon,wed,fri").
pub fn parse_weekdays(input: &str) -> Result<WeekdaySet> {
    input
        .split(',')
        .map(|part| parse_weekday(part.trim()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 5).unwrap()
    }

    #[test]
    fn test_parse_iso_date() {
        assert_eq!(
            parse_date("2024-09-01", today()).unwrap(),
            NaiveDate::from_ymd_opt(2024, 9, 1).unwrap()
        );
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        assert!(parse_date("not a date", today()).is_err());
    }

    #[test]
    fn test_parse_weekday_accepts_short_and_full_names() {
        assert_eq!(parse_weekday("mon").unwrap(), Weekday::Mon);
        assert_eq!(parse_weekday("Friday").unwrap(), Weekday::Fri);
        assert!(parse_weekday("noday").is_err());
    }

    #[test]
    fn test_parse_weekday_list() {
        let days = parse_weekdays("mon, wed,fri").unwrap();
        assert_eq!(days.len(), 3);
        assert!(days.contains(Weekday::Wed));
    }
}
