//! # Cadence Core Library
//!
//! A recurrence-rule engine: given a recurrence pattern (daily/weekly/
//! monthly/yearly), an interval, a start date, and an end condition, it
//! computes, validates, and keeps mutually consistent the set of dates on
//! which a repeating task occurs.
//!
//! ## Features
//!
//! - **Ordinal Weekday Resolution**: nth-or-last weekday of a month, its
//!   inverse classification, and next-occurrence search
//! - **Schedule Anchoring**: weekly start-date anchoring over a selected set
//!   of weekdays
//! - **End-Date Bounds**: minimum legal end dates and interval-aligned
//!   end-date eligibility for date pickers
//! - **Edit Reducer**: a pure reducer that applies one discrete edit at a
//!   time and re-derives every dependent field
//! - **Recoverable Validation**: invalid intermediate states are representable
//!   and reported, never raised; only saving is gated
//!
//! ## Core Modules
//!
//! - [`calendar`]: weekday naming, month framing, and day arithmetic
//! - [`models`]: the recurrence settings data model and edit variants
//! - [`ordinal`]: ordinal/weekday resolution and classification
//! - [`schedule`]: weekly anchoring, end bounds, and end-date eligibility
//! - [`editor`]: the edit reducer, validator, and editing session
//! - [`error`]: validation error types
//!
//! ## Example Usage
//!
//! ```rust
//! use cadence_core::editor::RecurrenceEditor;
//! use cadence_core::models::{Edit, PatternKind};
//! use chrono::NaiveDate;
//!
//! let today = NaiveDate::from_ymd_opt(2024, 6, 5).unwrap();
//! let mut editor = RecurrenceEditor::open_at(today, None);
//!
//! editor.apply(Edit::ChangePattern(PatternKind::Daily));
//! assert!(editor.is_valid());
//!
//! let settings = editor.save().expect("valid settings are savable");
//! assert_eq!(settings.start_date, Some(today));
//! ```

pub mod calendar;
pub mod editor;
pub mod error;
pub mod models;
pub mod ordinal;
pub mod schedule;
