use anyhow::Result;
use cadence_core::editor::RecurrenceEditor;
use cadence_core::models::Edit;

use crate::cli::NewCommand;
use crate::commands::{apply_rule_args, report, resolve_today};
use crate::config::Config;

pub fn new_rule(config: &Config, command: NewCommand) -> Result<()> {
    let today = resolve_today(command.today.as_deref())?;
    let mut editor = RecurrenceEditor::open_at(today, None);

    // The config file supplies the pattern when the flag is silent.
    if command.rule.pattern.is_none() {
        if let Some(pattern) = &config.default_pattern {
            editor.apply(Edit::ChangePattern(pattern.parse()?));
        }
    }

    apply_rule_args(&mut editor, &command.rule)?;
    report(&editor, command.json, command.save.as_deref(), config)
}
