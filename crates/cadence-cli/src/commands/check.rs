use anyhow::Result;
use cadence_core::editor;
use owo_colors::OwoColorize;

use crate::cli::CheckCommand;
use crate::commands::{load_settings, resolve_today};
use crate::config::Config;
use crate::views;

pub fn check_rule(config: &Config, command: CheckCommand) -> Result<()> {
    let today = resolve_today(command.today.as_deref())?;
    let settings = load_settings(&command.file)?;

    views::table::display_settings(&settings, &config.date_format);
    match editor::validate(&settings, today) {
        Ok(()) => {
            println!("{}", "Valid.".green());
            Ok(())
        }
        Err(err) => Err(anyhow::anyhow!(err)),
    }
}
