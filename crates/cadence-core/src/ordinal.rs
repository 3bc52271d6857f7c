//! Nth-weekday-in-month resolution and its inverses.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::calendar::{add_months, days_in_month, month_end, month_start};
use crate::models::Ordinal;

/// Locates the `ordinal` occurrence of `weekday` within the month containing
/// `month`.
///
/// Counted ordinals scan the month forward and return the date at which the
/// running count reaches the ordinal's rank, or `None` when the month holds
/// fewer occurrences. `Last` scans backward from the month's final day. The
/// scan never leaves the month.
pub fn resolve(month: NaiveDate, ordinal: Ordinal, weekday: Weekday) -> Option<NaiveDate> {
    let first = month_start(month);
    match ordinal.rank() {
        Some(rank) => {
            let mut seen = 0;
            for offset in 0..days_in_month(first) {
                let date = first + Duration::days(i64::from(offset));
                if date.weekday() == weekday {
                    seen += 1;
                    if seen == rank {
                        return Some(date);
                    }
                }
            }
            None
        }
        None => {
            let mut date = month_end(first);
            while date.weekday() != weekday {
                date = date.pred_opt()?;
            }
            Some(date)
        }
    }
}

/// Labels `date` with the ordinal it represents for `weekday` within its
/// month.
///
/// Counts the occurrences of `weekday` up to and including `date`; the final
/// occurrence is reported as `Last` even when it is also the fourth. Inverse
/// of [`resolve`] when called with the date's own weekday.
pub fn classify(date: NaiveDate, weekday: Weekday) -> Ordinal {
    // A week later landing in another month means no later occurrence exists.
    let next_week = date + Duration::days(7);
    if next_week.month() != date.month() {
        return Ordinal::Last;
    }
    let seen = (1..=date.day())
        .filter_map(|day| date.with_day(day))
        .filter(|d| d.weekday() == weekday)
        .count() as u32;
    Ordinal::from_rank(seen)
}

/// Next date on or after `from` that is the `ordinal` `weekday` of its month.
///
/// Tries `from`'s month first, then the following month. The final fallback
/// returns `from` itself; it exists only for ordinal/weekday combinations no
/// Gregorian month can produce, and callers must treat it as a soft failure
/// rather than a real occurrence.
pub fn next_occurrence(from: NaiveDate, ordinal: Ordinal, weekday: Weekday) -> NaiveDate {
    if let Some(date) = resolve(from, ordinal, weekday) {
        if date >= from {
            return date;
        }
    }
    match resolve(add_months(month_start(from), 1), ordinal, weekday) {
        Some(date) => date,
        None => {
            debug_assert!(false, "no {} {} in two consecutive months", ordinal, weekday);
            from
        }
    }
}

/// Whether `date` is exactly the `ordinal` `weekday` of its month.
pub fn matches(date: NaiveDate, ordinal: Ordinal, weekday: Weekday) -> bool {
    date.weekday() == weekday && resolve(date, ordinal, weekday) == Some(date)
}
