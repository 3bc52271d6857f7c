//! The edit reducer and validity engine that tie the calendar components
//! together.
//!
//! The external form dispatches one [`Edit`] per user interaction; the
//! reducer consults the lower components to re-derive dependent fields and
//! returns the next settings value together with an optional error. Nothing
//! here performs I/O or touches shared state: `apply` and `validate` are
//! total functions, and [`RecurrenceEditor`] is a thin session wrapper that
//! pins the reference date once at open.

use chrono::{Datelike, Local, NaiveDate, Weekday};

use crate::calendar;
use crate::error::ValidationError;
use crate::models::{
    Edit, EndCondition, EndKind, Ordinal, OrdinalWeekday, PartialSettings, Pattern, PatternKind,
    RecurrenceSettings,
};
use crate::ordinal;
use crate::schedule;

/// Built-in defaults for a freshly opened editor: weekly on today's weekday,
/// starting today, ending on the earliest legal end date.
pub fn default_settings(today: NaiveDate) -> RecurrenceSettings {
    let pattern = Pattern::default_for(PatternKind::Weekly, today);
    let end_date = schedule::minimum_end_date(&pattern, today, today);
    RecurrenceSettings {
        pattern,
        start_date: Some(today),
        end: EndCondition::By {
            date: Some(end_date),
        },
        validation_error: None,
    }
}

/// Merges a caller-supplied partial value field-wise over the defaults.
pub fn merge_initial(today: NaiveDate, initial: PartialSettings) -> RecurrenceSettings {
    let mut settings = default_settings(today);
    if let Some(pattern) = initial.pattern {
        settings.pattern = pattern;
    }
    if let Some(start) = initial.start_date {
        settings.start_date = Some(start);
    }
    if let Some(end) = initial.end {
        settings.end = end;
    }
    settings
}

/// Applies one edit to a settings value and re-derives the fields that depend
/// on it.
///
/// # Arguments
/// * `current` - The settings value being edited
/// * `edit` - The discrete edit to apply
/// * `today` - Reference date used for re-anchoring and resets
///
/// # Returns
/// * `RecurrenceSettings` - The next settings value, possibly carrying a
///   validation error
///
/// # Behavior
/// - Never fails: an edit that produces an inconsistent state records the
///   problem in `validation_error` and returns the state anyway
/// - The start date and the monthly ordinal/weekday selector derive each
///   other along two asymmetric paths: `ChangeStartDate` treats the date as
///   authoritative and reports a mismatch without touching the selector,
///   while `ChangeMonthlyDayOfWeek` treats the selector as authoritative and
///   resets a mismatching start date to today
/// - A `By` end date is re-derived for monthly rules whenever the fields it
///   depends on change
pub fn apply(current: &RecurrenceSettings, edit: Edit, today: NaiveDate) -> RecurrenceSettings {
    let mut next = current.clone();
    match edit {
        Edit::ChangePattern(kind) => change_pattern(&mut next, kind, today),
        Edit::ToggleWeeklyDay { day, selected } => {
            toggle_weekly_day(&mut next, day, selected, today)
        }
        Edit::ChangeStartDate(date) => change_start_date(&mut next, date),
        Edit::ChangeMonthlyDayOfWeek { ordinal, weekday } => {
            change_monthly_day_of_week(&mut next, ordinal, weekday, today)
        }
        Edit::ChangeEndType(kind) => change_end_type(&mut next, kind),
        Edit::ChangeEndDate(date) => {
            if let EndCondition::By { date: end_date } = &mut next.end {
                *end_date = Some(date);
            }
        }
        Edit::ChangeEndAfterCount(count) => {
            let min = next.pattern.min_end_after_count();
            if let EndCondition::After { count: end_count } = &mut next.end {
                // Empty or sub-minimum input is floored, not rejected.
                *end_count = Some(match count {
                    Some(n) if n >= min => n,
                    _ => min,
                });
            }
        }
        Edit::ChangeInterval(interval) => next.pattern.set_interval(interval.max(1)),
    }
    next
}

fn change_pattern(next: &mut RecurrenceSettings, kind: PatternKind, today: NaiveDate) {
    next.pattern = match (&next.pattern, kind) {
        // Staying weekly keeps the selection and makes sure today's weekday
        // is part of it.
        (Pattern::Weekly { interval, days }, PatternKind::Weekly) => {
            let mut days = *days;
            days.insert(today.weekday());
            Pattern::Weekly {
                interval: *interval,
                days,
            }
        }
        (_, kind) => Pattern::default_for(kind, today),
    };
}

fn toggle_weekly_day(next: &mut RecurrenceSettings, day: Weekday, selected: bool, today: NaiveDate) {
    if let Pattern::Weekly { days, .. } = &mut next.pattern {
        if selected {
            days.insert(day);
        } else {
            days.remove(day);
        }
        if !days.is_empty() {
            next.start_date = Some(schedule::nearest_future_date(today, *days));
        }
    }
}

fn change_start_date(next: &mut RecurrenceSettings, date: NaiveDate) {
    next.validation_error = None;
    next.start_date = Some(date);
    match &mut next.pattern {
        Pattern::Weekly { days, .. } => days.insert(date.weekday()),
        Pattern::Monthly { on, .. } => match *on {
            Some(OrdinalWeekday { ordinal, weekday }) => {
                if !ordinal::matches(date, ordinal, weekday) {
                    // The date field is authoritative on this path; the
                    // selector is reported against, not rewritten.
                    next.validation_error =
                        Some(ValidationError::DateMismatch { ordinal, weekday });
                }
            }
            None => {
                *on = Some(OrdinalWeekday {
                    ordinal: ordinal::classify(date, date.weekday()),
                    weekday: date.weekday(),
                });
            }
        },
        _ => {}
    }
    refresh_monthly_end_date(next);
}

fn change_monthly_day_of_week(
    next: &mut RecurrenceSettings,
    ordinal: Ordinal,
    weekday: Weekday,
    today: NaiveDate,
) {
    if let Pattern::Monthly { on, .. } = &mut next.pattern {
        *on = Some(OrdinalWeekday { ordinal, weekday });
    } else {
        return;
    }
    match next.start_date {
        Some(start) if ordinal::matches(start, ordinal, weekday) => {
            next.validation_error = None;
        }
        Some(_) => {
            // The selector is authoritative on this path; the start date is
            // sent back to today and the mismatch reported.
            next.validation_error = Some(ValidationError::DateMismatch { ordinal, weekday });
            next.start_date = Some(today);
        }
        None => {}
    }
    refresh_monthly_end_date(next);
}

fn change_end_type(next: &mut RecurrenceSettings, kind: EndKind) {
    next.end = match kind {
        EndKind::By => EndCondition::By { date: None },
        EndKind::After => EndCondition::After { count: None },
        EndKind::Never => EndCondition::Never,
    };
    if kind == EndKind::By {
        refresh_monthly_end_date(next);
    }
}

/// Re-derives the `By` end date of a monthly rule from the current start date
/// and ordinal/weekday selection: the next matching occurrence on or after
/// one month past the start.
fn refresh_monthly_end_date(next: &mut RecurrenceSettings) {
    let on = match &next.pattern {
        Pattern::Monthly { on: Some(on), .. } => *on,
        _ => return,
    };
    let start = match next.start_date {
        Some(start) => start,
        None => return,
    };
    if let EndCondition::By { .. } = next.end {
        let from = calendar::add_months(start, 1);
        next.end = EndCondition::By {
            date: Some(ordinal::next_occurrence(from, on.ordinal, on.weekday)),
        };
    }
}

/// Checks the six invariants a savable settings value must satisfy, returning
/// the first violation.
///
/// This is a full recomputation; the transient `validation_error` on the
/// value itself is not consulted.
pub fn validate(settings: &RecurrenceSettings, today: NaiveDate) -> Result<(), ValidationError> {
    let start = settings
        .start_date
        .ok_or(ValidationError::MissingStartDate)?;
    match &settings.pattern {
        Pattern::Weekly { days, .. } if days.is_empty() => {
            return Err(ValidationError::EmptyWeeklyDays);
        }
        Pattern::Monthly { on: Some(on), .. } => {
            if !ordinal::matches(start, on.ordinal, on.weekday) {
                return Err(ValidationError::DateMismatch {
                    ordinal: on.ordinal,
                    weekday: on.weekday,
                });
            }
        }
        _ => {}
    }
    match settings.end {
        EndCondition::By { date: None } => Err(ValidationError::InvalidEndConfiguration(
            "an end date is required".to_string(),
        )),
        EndCondition::By { date: Some(date) } => {
            let minimum = schedule::minimum_end_date(&settings.pattern, start, today);
            if date < minimum {
                Err(ValidationError::InvalidEndConfiguration(format!(
                    "end date must be on or after {}",
                    minimum.format("%Y-%m-%d")
                )))
            } else {
                Ok(())
            }
        }
        EndCondition::After { count: None } => Err(ValidationError::InvalidEndConfiguration(
            "an occurrence count is required".to_string(),
        )),
        EndCondition::After { count: Some(count) } => {
            let min = settings.pattern.min_end_after_count();
            if count < min {
                Err(ValidationError::InvalidEndConfiguration(format!(
                    "at least {} occurrences are required",
                    min
                )))
            } else {
                Ok(())
            }
        }
        EndCondition::Never => Ok(()),
    }
}

/// Boolean form of [`validate`]; the gate a caller consults before enabling
/// save.
pub fn is_valid(settings: &RecurrenceSettings, today: NaiveDate) -> bool {
    validate(settings, today).is_ok()
}

/// One editing session: a settings value plus the reference date captured
/// when the editor opened.
///
/// The session owns the only live settings value; the caller renders from
/// whatever [`RecurrenceEditor::apply`] returns and finishes with either
/// [`RecurrenceEditor::save`] or [`RecurrenceEditor::remove`]. Dropping the
/// editor discards the value, which is all cancellation amounts to.
#[derive(Debug, Clone)]
pub struct RecurrenceEditor {
    settings: RecurrenceSettings,
    today: NaiveDate,
}

impl RecurrenceEditor {
    /// Opens an editor on the system date, merging `initial` over the
    /// defaults.
    pub fn open(initial: Option<PartialSettings>) -> Self {
        Self::open_at(Local::now().date_naive(), initial)
    }

    /// Opens an editor pinned to an explicit reference date.
    pub fn open_at(today: NaiveDate, initial: Option<PartialSettings>) -> Self {
        let settings = match initial {
            Some(partial) => merge_initial(today, partial),
            None => default_settings(today),
        };
        RecurrenceEditor { settings, today }
    }

    pub fn settings(&self) -> &RecurrenceSettings {
        &self.settings
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Applies one edit and returns the resulting settings value.
    pub fn apply(&mut self, edit: Edit) -> &RecurrenceSettings {
        self.settings = apply(&self.settings, edit, self.today);
        &self.settings
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate(&self.settings, self.today)
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Finalizes the session, handing the settings value to the caller.
    /// Accepted only while the settings are valid.
    pub fn save(self) -> Result<RecurrenceSettings, ValidationError> {
        validate(&self.settings, self.today)?;
        let mut settings = self.settings;
        settings.validation_error = None;
        Ok(settings)
    }

    /// Ends the session with no recurrence at all. Terminal: the settings
    /// value is discarded.
    pub fn remove(self) {}
}
