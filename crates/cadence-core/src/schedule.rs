//! Weekly anchoring, end-date bounds, and end-date eligibility.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::calendar::next_weekday_on_or_after;
use crate::models::{Ordinal, Pattern, WeekdaySet};
use crate::ordinal;

/// Date to anchor a weekly rule on, given the selected days.
///
/// Days are evaluated in Monday-first priority order and the first candidate
/// on or after `from` wins. A lower-priority day is therefore skipped even
/// when it falls chronologically sooner: with Monday and Friday selected and
/// `from` on a Wednesday, the result is the coming Monday, not the nearer
/// Friday. The editor's re-anchoring relies on this order. An empty set
/// yields `from`.
pub fn nearest_future_date(from: NaiveDate, days: WeekdaySet) -> NaiveDate {
    for day in days.iter() {
        let candidate = next_weekday_on_or_after(from, day);
        if candidate >= from {
            return candidate;
        }
    }
    from
}

/// Earliest end date a rule may legally carry.
///
/// Weekly rules must run at least one full interval past the start; every
/// other pattern only has to reach the later of the start date and today.
pub fn minimum_end_date(pattern: &Pattern, start: NaiveDate, today: NaiveDate) -> NaiveDate {
    match pattern {
        Pattern::Weekly { interval, .. } => start + Duration::weeks(i64::from(*interval)),
        _ => start.max(today),
    }
}

/// Whether `candidate` may be offered as the end date of a weekly rule.
///
/// The candidate must fall on a selected day, and for intervals above one it
/// must lie a whole number of intervals past the first occurrence after the
/// start date. The start date itself is always eligible.
pub fn allowed_for_weekly(
    candidate: NaiveDate,
    days: WeekdaySet,
    start: NaiveDate,
    interval: u32,
) -> bool {
    if !days.is_empty() && !days.contains(candidate.weekday()) {
        return false;
    }
    if candidate == start || interval == 1 {
        return true;
    }
    let days_from_start = (candidate - start).num_days();
    (days_from_start - 7)
        .div_euclid(7)
        .rem_euclid(i64::from(interval))
        == 0
}

/// Whether `candidate` may be offered as the end date of a monthly rule.
pub fn allowed_for_monthly(candidate: NaiveDate, ordinal: Ordinal, weekday: Weekday) -> bool {
    ordinal::matches(candidate, ordinal, weekday)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PatternKind;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    mod nearest_future_date_tests {
        use super::*;

        #[test]
        fn test_priority_order_beats_chronology() {
            // 2024-06-05 is a Wednesday. Friday the 7th is sooner, but Monday
            // has higher priority and the coming Monday is the 10th.
            let days: WeekdaySet = vec![Weekday::Mon, Weekday::Fri].into_iter().collect();
            assert_eq!(nearest_future_date(date(2024, 6, 5), days), date(2024, 6, 10));
        }

        #[test]
        fn test_same_day_is_on_or_after() {
            let days = WeekdaySet::single(Weekday::Wed);
            assert_eq!(nearest_future_date(date(2024, 6, 5), days), date(2024, 6, 5));
        }

        #[test]
        fn test_empty_set_returns_from() {
            assert_eq!(
                nearest_future_date(date(2024, 6, 5), WeekdaySet::new()),
                date(2024, 6, 5)
            );
        }

        #[test]
        fn test_result_weekday_is_selected() {
            let days: WeekdaySet = vec![Weekday::Sat, Weekday::Sun].into_iter().collect();
            let anchored = nearest_future_date(date(2024, 6, 5), days);
            assert!(anchored >= date(2024, 6, 5));
            assert!(days.contains(anchored.weekday()));
        }
    }

    mod minimum_end_date_tests {
        use super::*;

        #[test]
        fn test_weekly_adds_whole_intervals() {
            let pattern = Pattern::Weekly {
                interval: 2,
                days: WeekdaySet::single(Weekday::Mon),
            };
            assert_eq!(
                minimum_end_date(&pattern, date(2024, 6, 3), date(2024, 6, 1)),
                date(2024, 6, 17)
            );
        }

        #[test]
        fn test_other_patterns_use_later_of_start_and_today() {
            let today = date(2024, 6, 5);
            let pattern = Pattern::default_for(PatternKind::Monthly, today);
            assert_eq!(minimum_end_date(&pattern, date(2024, 6, 1), today), today);
            assert_eq!(
                minimum_end_date(&pattern, date(2024, 7, 1), today),
                date(2024, 7, 1)
            );
        }
    }

    mod allowed_for_weekly_tests {
        use super::*;

        #[test]
        fn test_rejects_unselected_weekday() {
            let days = WeekdaySet::single(Weekday::Mon);
            assert!(!allowed_for_weekly(date(2024, 6, 4), days, date(2024, 6, 3), 1));
        }

        #[test]
        fn test_start_date_always_allowed() {
            let days = WeekdaySet::single(Weekday::Mon);
            assert!(allowed_for_weekly(date(2024, 6, 3), days, date(2024, 6, 3), 3));
        }

        #[test]
        fn test_interval_one_allows_any_selected_day() {
            let days = WeekdaySet::single(Weekday::Mon);
            assert!(allowed_for_weekly(date(2024, 7, 1), days, date(2024, 6, 3), 1));
        }

        #[test]
        fn test_interval_alignment_from_first_occurrence_after_start() {
            // Start Monday 2024-06-03, every 2 weeks: the aligned Mondays are
            // the 10th, the 24th, July 8th, ...
            let days = WeekdaySet::single(Weekday::Mon);
            let start = date(2024, 6, 3);
            assert!(allowed_for_weekly(date(2024, 6, 10), days, start, 2));
            assert!(!allowed_for_weekly(date(2024, 6, 17), days, start, 2));
            assert!(allowed_for_weekly(date(2024, 6, 24), days, start, 2));
            assert!(allowed_for_weekly(date(2024, 7, 8), days, start, 2));
        }

        #[test]
        fn test_empty_days_skips_weekday_check() {
            assert!(allowed_for_weekly(
                date(2024, 6, 10),
                WeekdaySet::new(),
                date(2024, 6, 3),
                2
            ));
        }
    }

    mod allowed_for_monthly_tests {
        use super::*;

        #[test]
        fn test_delegates_to_date_match() {
            assert!(allowed_for_monthly(date(2024, 3, 20), Ordinal::Third, Weekday::Wed));
            assert!(!allowed_for_monthly(date(2024, 3, 13), Ordinal::Third, Weekday::Wed));
        }
    }
}
