use chrono::Weekday;
use thiserror::Error;

use crate::calendar;
use crate::models::Ordinal;

fn name(day: &Weekday) -> &'static str {
    calendar::weekday_name(*day)
}

/// Why a settings value is not currently savable.
///
/// Every variant is recoverable: the reducer keeps returning a usable settings
/// value and surfaces one of these alongside it instead of failing the
/// session. `Clone + PartialEq` so the current error can live inside the
/// settings value itself.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("start date does not fall on the {ordinal} {} of its month", name(.weekday))]
    DateMismatch { ordinal: Ordinal, weekday: Weekday },

    #[error("a start date is required")]
    MissingStartDate,

    #[error("select at least one day of the week")]
    EmptyWeeklyDays,

    #[error("invalid end configuration: {0}")]
    InvalidEndConfiguration(String),
}
