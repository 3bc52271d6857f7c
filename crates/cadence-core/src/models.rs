use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::calendar;
use crate::error::ValidationError;

/// Which occurrence of a weekday within a month a rule targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ordinal {
    First,
    Second,
    Third,
    Fourth,
    Last,
}

impl Ordinal {
    /// 1-based rank for the counted ordinals; `Last` has no fixed rank.
    pub fn rank(self) -> Option<u32> {
        match self {
            Ordinal::First => Some(1),
            Ordinal::Second => Some(2),
            Ordinal::Third => Some(3),
            Ordinal::Fourth => Some(4),
            Ordinal::Last => None,
        }
    }

    /// Ordinal for a 1-based occurrence count, saturating at `Fourth`.
    pub fn from_rank(rank: u32) -> Ordinal {
        match rank {
            0 | 1 => Ordinal::First,
            2 => Ordinal::Second,
            3 => Ordinal::Third,
            _ => Ordinal::Fourth,
        }
    }
}

impl fmt::Display for Ordinal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Ordinal::First => "first",
            Ordinal::Second => "second",
            Ordinal::Third => "third",
            Ordinal::Fourth => "fourth",
            Ordinal::Last => "last",
        };
        write!(f, "{}", name)
    }
}

#[derive(Error, Debug, PartialEq)]
#[error("Invalid ordinal: {0}")]
pub struct ParseOrdinalError(String);

impl FromStr for Ordinal {
    type Err = ParseOrdinalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "first" => Ok(Ordinal::First),
            "second" => Ok(Ordinal::Second),
            "third" => Ok(Ordinal::Third),
            "fourth" => Ok(Ordinal::Fourth),
            "last" => Ok(Ordinal::Last),
            _ => Err(ParseOrdinalError(s.to_string())),
        }
    }
}

/// Set of weekdays backed by a bitmask (bit position = Sunday-first index).
///
/// Iteration yields members in Monday-first priority order (Monday = 1 ..
/// Sunday = 7), which is the order the weekly scheduler evaluates candidates
/// in. Serializes as a list of weekday names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Weekday>", into = "Vec<Weekday>")]
pub struct WeekdaySet(u8);

impl WeekdaySet {
    pub fn new() -> Self {
        WeekdaySet(0)
    }

    pub fn single(day: Weekday) -> Self {
        let mut set = WeekdaySet::new();
        set.insert(day);
        set
    }

    pub fn insert(&mut self, day: Weekday) {
        self.0 |= 1 << calendar::weekday_index(day);
    }

    pub fn remove(&mut self, day: Weekday) {
        self.0 &= !(1 << calendar::weekday_index(day));
    }

    pub fn contains(self, day: Weekday) -> bool {
        self.0 & (1 << calendar::weekday_index(day)) != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Members in Monday-first priority order.
    pub fn iter(self) -> impl Iterator<Item = Weekday> {
        [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
            Weekday::Sun,
        ]
        .into_iter()
        .filter(move |day| self.contains(*day))
    }
}

impl fmt::Display for WeekdaySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.iter().map(calendar::weekday_name).collect();
        write!(f, "{}", names.join(", "))
    }
}

impl From<Vec<Weekday>> for WeekdaySet {
    fn from(days: Vec<Weekday>) -> Self {
        days.into_iter().collect()
    }
}

impl From<WeekdaySet> for Vec<Weekday> {
    fn from(set: WeekdaySet) -> Self {
        set.iter().collect()
    }
}

impl FromIterator<Weekday> for WeekdaySet {
    fn from_iter<I: IntoIterator<Item = Weekday>>(iter: I) -> Self {
        let mut set = WeekdaySet::new();
        for day in iter {
            set.insert(day);
        }
        set
    }
}

/// An ordinal/weekday pair ("the third Wednesday").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrdinalWeekday {
    pub ordinal: Ordinal,
    pub weekday: Weekday,
}

/// Recurrence cadence family, without the per-pattern payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternKind {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PatternKind::Daily => "daily",
            PatternKind::Weekly => "weekly",
            PatternKind::Monthly => "monthly",
            PatternKind::Yearly => "yearly",
        };
        write!(f, "{}", name)
    }
}

#[derive(Error, Debug, PartialEq)]
#[error("Invalid recurrence pattern: {0}")]
pub struct ParsePatternError(String);

impl FromStr for PatternKind {
    type Err = ParsePatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "daily" => Ok(PatternKind::Daily),
            "weekly" => Ok(PatternKind::Weekly),
            "monthly" => Ok(PatternKind::Monthly),
            "yearly" => Ok(PatternKind::Yearly),
            _ => Err(ParsePatternError(s.to_string())),
        }
    }
}

/// Recurrence pattern together with the fields that are meaningful for it.
///
/// A sum type keyed on the pattern, so field combinations that make no sense
/// for a pattern cannot be represented at all. The monthly ordinal/weekday
/// pair is optional: `None` means the selector has not been chosen yet and
/// the next start-date edit derives it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Pattern {
    Daily { interval: u32 },
    Weekly { interval: u32, days: WeekdaySet },
    Monthly { interval: u32, on: Option<OrdinalWeekday> },
    Yearly { interval: u32 },
}

impl Pattern {
    /// Fresh pattern of the given kind with its default fields. Weekly starts
    /// with the reference date's weekday selected.
    pub fn default_for(kind: PatternKind, today: NaiveDate) -> Pattern {
        match kind {
            PatternKind::Daily => Pattern::Daily { interval: 1 },
            PatternKind::Weekly => Pattern::Weekly {
                interval: 1,
                days: WeekdaySet::single(today.weekday()),
            },
            PatternKind::Monthly => Pattern::Monthly {
                interval: 1,
                on: None,
            },
            PatternKind::Yearly => Pattern::Yearly { interval: 1 },
        }
    }

    pub fn kind(&self) -> PatternKind {
        match self {
            Pattern::Daily { .. } => PatternKind::Daily,
            Pattern::Weekly { .. } => PatternKind::Weekly,
            Pattern::Monthly { .. } => PatternKind::Monthly,
            Pattern::Yearly { .. } => PatternKind::Yearly,
        }
    }

    pub fn interval(&self) -> u32 {
        match self {
            Pattern::Daily { interval }
            | Pattern::Weekly { interval, .. }
            | Pattern::Monthly { interval, .. }
            | Pattern::Yearly { interval } => *interval,
        }
    }

    pub fn set_interval(&mut self, interval: u32) {
        match self {
            Pattern::Daily { interval: i }
            | Pattern::Weekly { interval: i, .. }
            | Pattern::Monthly { interval: i, .. }
            | Pattern::Yearly { interval: i } => *i = interval,
        }
    }

    /// Minimum occurrence count an `After` end condition may carry.
    pub fn min_end_after_count(&self) -> u32 {
        match self {
            Pattern::Weekly { .. } => 2,
            _ => 1,
        }
    }
}

/// Payload-free discriminant of [`EndCondition`], used by the end-type edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EndKind {
    By,
    After,
    Never,
}

#[derive(Error, Debug, PartialEq)]
#[error("Invalid end type: {0}")]
pub struct ParseEndKindError(String);

impl FromStr for EndKind {
    type Err = ParseEndKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "by" => Ok(EndKind::By),
            "after" => Ok(EndKind::After),
            "never" => Ok(EndKind::Never),
            _ => Err(ParseEndKindError(s.to_string())),
        }
    }
}

/// How the recurrence terminates.
///
/// The payloads are optional so the editor can represent the in-between state
/// where an end type has been chosen but its field not yet filled in;
/// validation reports those states instead of forbidding them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum EndCondition {
    By { date: Option<NaiveDate> },
    After { count: Option<u32> },
    Never,
}

impl EndCondition {
    pub fn kind(&self) -> EndKind {
        match self {
            EndCondition::By { .. } => EndKind::By,
            EndCondition::After { .. } => EndKind::After,
            EndCondition::Never => EndKind::Never,
        }
    }
}

/// The single value an editing session owns: one recurrence rule mid-edit.
///
/// Mutated exclusively through [`crate::editor::apply`], one discrete edit at
/// a time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecurrenceSettings {
    pub pattern: Pattern,
    pub start_date: Option<NaiveDate>,
    pub end: EndCondition,
    /// Error produced by the most recent edit, if any. Transient: not part of
    /// the persisted value.
    #[serde(skip)]
    pub validation_error: Option<ValidationError>,
}

/// Caller-supplied seed merged field-wise over the defaults when an editor
/// opens.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PartialSettings {
    pub pattern: Option<Pattern>,
    pub start_date: Option<NaiveDate>,
    pub end: Option<EndCondition>,
}

impl From<&RecurrenceSettings> for PartialSettings {
    fn from(settings: &RecurrenceSettings) -> Self {
        PartialSettings {
            pattern: Some(settings.pattern.clone()),
            start_date: settings.start_date,
            end: Some(settings.end),
        }
    }
}

/// One discrete edit from the external form, applied by
/// [`crate::editor::apply`].
///
/// The start date and the monthly ordinal/weekday selector derive each other
/// along two deliberately asymmetric paths: [`Edit::ChangeStartDate`] treats
/// the date as authoritative, [`Edit::ChangeMonthlyDayOfWeek`] treats the
/// selector as authoritative.
#[derive(Debug, Clone, PartialEq)]
pub enum Edit {
    ChangePattern(PatternKind),
    ToggleWeeklyDay { day: Weekday, selected: bool },
    ChangeStartDate(NaiveDate),
    ChangeMonthlyDayOfWeek { ordinal: Ordinal, weekday: Weekday },
    ChangeEndType(EndKind),
    ChangeEndDate(NaiveDate),
    ChangeEndAfterCount(Option<u32>),
    ChangeInterval(u32),
}
