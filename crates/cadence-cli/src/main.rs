use clap::Parser;
use owo_colors::{OwoColorize, Style};
use std::error::Error;

mod cli;
mod commands;
mod config;
mod parser;
mod views;

fn main() {
    let config = config::Config::new().unwrap_or_default();
    let cli = cli::Cli::parse();

    let result = match cli.command {
        cli::Commands::New(command) => commands::new::new_rule(&config, command),
        cli::Commands::Edit(command) => commands::edit::edit_rule(&config, command),
        cli::Commands::Check(command) => commands::check::check_rule(&config, command),
    };

    if let Err(e) = result {
        handle_error(e);
    }
}

fn handle_error(err: anyhow::Error) {
    let error_style = Style::new().red().bold();
    eprintln!("{} {}", "Error:".style(error_style), err);
    if let Some(cause) = err.source() {
        eprintln!("Caused by: {}", cause);
    }
    std::process::exit(1);
}
