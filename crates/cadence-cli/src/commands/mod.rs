use anyhow::Result;
use cadence_core::editor::RecurrenceEditor;
use cadence_core::models::{Edit, EndKind, Pattern, RecurrenceSettings};
use chrono::{Local, NaiveDate};
use owo_colors::OwoColorize;
use std::path::Path;

use crate::cli::RuleArgs;
use crate::config::Config;
use crate::parser;
use crate::views;

pub mod check;
pub mod edit;
pub mod new;

/// Resolves the session's reference date: --today when given, the system date
/// otherwise.
pub fn resolve_today(flag: Option<&str>) -> Result<NaiveDate> {
    let system_today = Local::now().date_naive();
    match flag {
        Some(input) => parser::parse_date(input, system_today),
        None => Ok(system_today),
    }
}

/// Applies the shared rule flags as a sequence of reducer edits, in a fixed
/// order: pattern, interval, weekly days, monthly selector, start date, end
/// condition. Later edits see the state the earlier ones produced, exactly as
/// if a user had worked through the form top to bottom.
pub fn apply_rule_args(editor: &mut RecurrenceEditor, args: &RuleArgs) -> Result<()> {
    if let Some(pattern) = &args.pattern {
        editor.apply(Edit::ChangePattern(pattern.parse()?));
    }
    if let Some(every) = args.every {
        editor.apply(Edit::ChangeInterval(every));
    }
    if let Some(on) = &args.on {
        let target = parser::parse_weekdays(on)?;
        let current = match &editor.settings().pattern {
            Pattern::Weekly { days, .. } => *days,
            _ => anyhow::bail!("--on applies to weekly recurrences"),
        };
        for day in target.iter().filter(|day| !current.contains(*day)) {
            editor.apply(Edit::ToggleWeeklyDay {
                day,
                selected: true,
            });
        }
        for day in current.iter().filter(|day| !target.contains(*day)) {
            editor.apply(Edit::ToggleWeeklyDay {
                day,
                selected: false,
            });
        }
    }
    if let (Some(ordinal), Some(weekday)) = (&args.ordinal, &args.weekday) {
        if !matches!(editor.settings().pattern, Pattern::Monthly { .. }) {
            anyhow::bail!("--ordinal/--weekday apply to monthly recurrences");
        }
        editor.apply(Edit::ChangeMonthlyDayOfWeek {
            ordinal: ordinal.parse()?,
            weekday: parser::parse_weekday(weekday)?,
        });
    }
    if let Some(start) = &args.start {
        let date = parser::parse_date(start, editor.today())?;
        editor.apply(Edit::ChangeStartDate(date));
    }
    if let Some(until) = &args.until {
        let date = parser::parse_date(until, editor.today())?;
        editor.apply(Edit::ChangeEndType(EndKind::By));
        editor.apply(Edit::ChangeEndDate(date));
    } else if let Some(count) = args.count {
        editor.apply(Edit::ChangeEndType(EndKind::After));
        editor.apply(Edit::ChangeEndAfterCount(Some(count)));
    } else if args.forever {
        editor.apply(Edit::ChangeEndType(EndKind::Never));
    }
    Ok(())
}

/// Renders the current settings plus validity, and optionally persists them.
pub fn report(
    editor: &RecurrenceEditor,
    json: bool,
    save: Option<&Path>,
    config: &Config,
) -> Result<()> {
    let settings = editor.settings();
    if json {
        println!("{}", serde_json::to_string_pretty(settings)?);
    } else {
        views::table::display_settings(settings, &config.date_format);
        if let Some(err) = &settings.validation_error {
            println!("{} {}", "Note:".yellow().bold(), err);
        }
        match editor.validate() {
            Ok(()) => println!("{}", "Valid.".green()),
            Err(err) => println!("{} {}", "Invalid:".red().bold(), err),
        }
    }
    if let Some(path) = save {
        let saved = editor
            .clone()
            .save()
            .map_err(|e| anyhow::anyhow!("Settings are not savable: {}", e))?;
        std::fs::write(path, serde_json::to_string_pretty(&saved)?)
            .map_err(|e| anyhow::anyhow!("Failed to write '{}': {}", path.display(), e))?;
        if !json {
            println!("Saved to {}.", path.display());
        }
    }
    Ok(())
}

pub fn load_settings(path: &Path) -> Result<RecurrenceSettings> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read '{}': {}", path.display(), e))?;
    let settings: RecurrenceSettings = serde_json::from_str(&raw)
        .map_err(|e| anyhow::anyhow!("Failed to parse '{}': {}", path.display(), e))?;
    Ok(settings)
}
