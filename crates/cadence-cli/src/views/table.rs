use cadence_core::calendar::weekday_name;
use cadence_core::models::{EndCondition, Pattern, PatternKind, RecurrenceSettings};
use chrono::NaiveDate;
use comfy_table::Table;

pub fn display_settings(settings: &RecurrenceSettings, date_format: &str) {
    let mut table = Table::new();
    table.set_header(vec!["Field", "Value"]);
    table.add_row(vec!["Repeats", &describe_pattern(&settings.pattern)]);

    match &settings.pattern {
        Pattern::Weekly { days, .. } => {
            let value = if days.is_empty() {
                "(no days selected)".to_string()
            } else {
                days.to_string()
            };
            table.add_row(vec!["Days", &value]);
        }
        Pattern::Monthly { on: Some(on), .. } => {
            table.add_row(vec![
                "On",
                &format!("the {} {}", on.ordinal, weekday_name(on.weekday)),
            ]);
        }
        Pattern::Monthly { on: None, .. } => {
            table.add_row(vec!["On", "(not chosen yet)"]);
        }
        _ => {}
    }

    table.add_row(vec!["Starts", &display_date(settings.start_date, date_format)]);
    table.add_row(vec!["Ends", &describe_end(&settings.end, date_format)]);
    println!("{table}");
}

fn describe_pattern(pattern: &Pattern) -> String {
    let interval = pattern.interval();
    if interval == 1 {
        return pattern.kind().to_string();
    }
    let unit = match pattern.kind() {
        PatternKind::Daily => "days",
        PatternKind::Weekly => "weeks",
        PatternKind::Monthly => "months",
        PatternKind::Yearly => "years",
    };
    format!("every {} {}", interval, unit)
}

fn display_date(date: Option<NaiveDate>, date_format: &str) -> String {
    match date {
        Some(date) => date.format(date_format).to_string(),
        None => "(not set)".to_string(),
    }
}

fn describe_end(end: &EndCondition, date_format: &str) -> String {
    match end {
        EndCondition::By { date } => format!("by {}", display_date(*date, date_format)),
        EndCondition::After { count: Some(count) } => format!("after {} occurrences", count),
        EndCondition::After { count: None } => "after (no count set)".to_string(),
        EndCondition::Never => "never".to_string(),
    }
}
