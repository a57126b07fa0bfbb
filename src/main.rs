use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use mindful::cli::args::{Cli, Commands, StartArgs};
use mindful::cli::commands;
use mindful::error::MindfulError;
use mindful::session::Preset;
use mindful::tui::{self, App};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let format = cli.output;

    let output = match cli.command {
        None => {
            tui::run(App::new())?;
            String::new()
        }
        Some(Commands::Start(args)) => {
            tui::run(app_from_args(&args)?)?;
            String::new()
        }
        Some(Commands::Presets) => commands::presets(format)?,
        Some(Commands::Completions { shell }) => commands::completions(shell),
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}

/// Build the TUI app from start arguments, resolving the chosen preset.
fn app_from_args(args: &StartArgs) -> Result<App, MindfulError> {
    let preset = match (&args.preset, args.minutes) {
        (Some(name), _) => Some(Preset::by_name(name).ok_or_else(|| {
            MindfulError::InvalidInput(format!(
                "Unknown preset '{name}'. Run 'mindful presets' to list them."
            ))
        })?),
        (None, Some(minutes)) => Some(Preset::by_minutes(minutes).ok_or_else(|| {
            MindfulError::InvalidInput(format!(
                "No preset is {minutes} minutes long. Run 'mindful presets' to list them."
            ))
        })?),
        (None, None) => None,
    };

    Ok(match preset {
        Some(preset) => App::with_preset(preset, args.muted),
        None => {
            let mut app = App::new();
            app.settings.sound_enabled = !args.muted;
            app
        }
    })
}
