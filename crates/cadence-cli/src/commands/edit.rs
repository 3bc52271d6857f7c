use anyhow::Result;
use cadence_core::editor::RecurrenceEditor;
use cadence_core::models::{Edit, PartialSettings};

use crate::cli::EditCommand;
use crate::commands::{apply_rule_args, load_settings, report, resolve_today};
use crate::config::Config;
use crate::parser;

pub fn edit_rule(config: &Config, command: EditCommand) -> Result<()> {
    let today = resolve_today(command.today.as_deref())?;
    let settings = load_settings(&command.file)?;
    let mut editor = RecurrenceEditor::open_at(today, Some(PartialSettings::from(&settings)));

    for day in &command.add_day {
        let day = parser::parse_weekday(day)?;
        editor.apply(Edit::ToggleWeeklyDay {
            day,
            selected: true,
        });
    }
    for day in &command.remove_day {
        let day = parser::parse_weekday(day)?;
        editor.apply(Edit::ToggleWeeklyDay {
            day,
            selected: false,
        });
    }

    apply_rule_args(&mut editor, &command.rule)?;
    report(&editor, command.json, command.save.as_deref(), config)
}
