use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// A command-line editor for recurrence rules
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Build a recurrence rule starting from the defaults
    New(NewCommand),
    /// Apply edits to a saved recurrence rule
    Edit(EditCommand),
    /// Validate a saved recurrence rule
    Check(CheckCommand),
}

/// Flags shared by `new` and `edit`; each one becomes a reducer edit.
#[derive(Parser, Debug, Clone)]
pub struct RuleArgs {
    /// Recurrence pattern (daily, weekly, monthly, yearly)
    #[clap(short, long)]
    pub pattern: Option<String>,
    /// Repeat interval in pattern units
    #[clap(short, long)]
    pub every: Option<u32>,
    /// Days of week for weekly recurrence (mon,tue,wed,thu,fri,sat,sun)
    #[clap(long)]
    pub on: Option<String>,
    /// Ordinal for monthly recurrence (first, second, third, fourth, last)
    #[clap(long, requires = "weekday")]
    pub ordinal: Option<String>,
    /// Weekday for monthly recurrence
    #[clap(long, requires = "ordinal")]
    pub weekday: Option<String>,
    /// Start date of the recurrence
    #[clap(short, long)]
    pub start: Option<String>,
    /// End the recurrence on this date
    #[clap(long, conflicts_with_all = ["count", "forever"])]
    pub until: Option<String>,
    /// End the recurrence after this many occurrences
    #[clap(long, conflicts_with = "forever")]
    pub count: Option<u32>,
    /// Never end the recurrence
    #[clap(long)]
    pub forever: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct NewCommand {
    #[clap(flatten)]
    pub rule: RuleArgs,
    /// Reference date to treat as today (defaults to the system date)
    #[clap(long)]
    pub today: Option<String>,
    /// Print the resulting settings as JSON instead of a table
    #[clap(long)]
    pub json: bool,
    /// Write the settings to this file when they are valid
    #[clap(long)]
    pub save: Option<PathBuf>,
}

#[derive(Parser, Debug, Clone)]
pub struct EditCommand {
    /// Settings file to edit
    pub file: PathBuf,
    #[clap(flatten)]
    pub rule: RuleArgs,
    /// Select an additional weekday (repeatable)
    #[clap(long, value_name = "DAY")]
    pub add_day: Vec<String>,
    /// Unselect a weekday (repeatable)
    #[clap(long, value_name = "DAY")]
    pub remove_day: Vec<String>,
    /// Reference date to treat as today (defaults to the system date)
    #[clap(long)]
    pub today: Option<String>,
    /// Print the resulting settings as JSON instead of a table
    #[clap(long)]
    pub json: bool,
    /// Write the settings to this file when they are valid
    #[clap(long)]
    pub save: Option<PathBuf>,
}

#[derive(Parser, Debug, Clone)]
pub struct CheckCommand {
    /// Settings file to validate
    pub file: PathBuf,
    /// Reference date to treat as today (defaults to the system date)
    #[clap(long)]
    pub today: Option<String>,
}
