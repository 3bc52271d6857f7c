use chrono::{Datelike, Duration, Months, NaiveDate, Weekday};

/// Fixed Sunday-first index for a weekday (Sunday = 0 .. Saturday = 6).
pub fn weekday_index(day: Weekday) -> u32 {
    day.num_days_from_sunday()
}

/// Monday-first priority of a weekday (Monday = 1 .. Sunday = 7).
pub fn weekday_priority(day: Weekday) -> u32 {
    day.num_days_from_monday() + 1
}

/// Full English name for a weekday.
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// First day of the month containing `date`.
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).expect("every month has a day 1")
}

/// Last day of the month containing `date`.
pub fn month_end(date: NaiveDate) -> NaiveDate {
    let next = add_months(month_start(date), 1);
    next.pred_opt().expect("month starts have a predecessor")
}

/// Number of days in the month containing `date`.
pub fn days_in_month(date: NaiveDate) -> u32 {
    month_end(date).day()
}

/// Steps `date` forward by whole months, clamping the day to the target
/// month's length (Jan 31 + 1 month = Feb 28/29).
pub fn add_months(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_add_months(Months::new(months)).unwrap_or(date)
}

/// Smallest date on or after `from` that falls on `day`.
pub fn next_weekday_on_or_after(from: NaiveDate, day: Weekday) -> NaiveDate {
    let offset = (i64::from(day.num_days_from_monday())
        - i64::from(from.weekday().num_days_from_monday()))
    .rem_euclid(7);
    from + Duration::days(offset)
}
