use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "mindful")]
#[command(about = "A meditation timer for the terminal")]
#[command(long_about = "mindful - Find your inner peace

A single-screen meditation timer that runs in your terminal.
Pick a preset, start the countdown, and follow the breathing
guide (4s in, 4s hold, 8s out). A chime sounds when the
session completes.

QUICK START:
  mindful                   Open the timer
  mindful start -p \"Deep Focus\"   Open with a preset selected
  mindful presets           List the built-in presets

KEYS (inside the timer):
  Space        Start / pause
  r            Reset
  1-4, j/k     Choose a preset
  s            Settings panel
  q            Quit

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output (default),
    /// or 'json' for machine-readable output suitable for scripting.
    #[arg(short, long, value_enum, default_value = "pretty", global = true)]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the meditation timer
    ///
    /// Launches the interactive timer, optionally with a preset already
    /// selected. Without arguments the default preset (Quick Calm,
    /// 5 minutes) is selected.
    ///
    /// # Examples
    ///
    ///   mindful start
    ///   mindful start --preset "Deep Focus"
    ///   mindful start --minutes 15
    ///   mindful start -p "quick calm" --muted
    #[command(alias = "s")]
    Start(StartArgs),

    /// List the built-in session presets
    ///
    /// Shows the four fixed presets with their durations. Use the name
    /// or duration with 'mindful start' to begin a session.
    ///
    /// # Examples
    ///
    ///   mindful presets
    ///   mindful presets -o json
    #[command(alias = "p")]
    Presets,

    /// Generate shell completion scripts
    ///
    /// Prints a completion script for the given shell to stdout.
    ///
    /// # Examples
    ///
    ///   mindful completions bash > /usr/local/etc/bash_completion.d/mindful
    ///   source <(mindful completions zsh)
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments for the start command.
#[derive(Args)]
pub struct StartArgs {
    /// Preset to select, by name (case-insensitive)
    #[arg(short, long, conflicts_with = "minutes")]
    pub preset: Option<String>,

    /// Preset to select, by duration in minutes (one of 5, 10, 15, 20)
    #[arg(short, long)]
    pub minutes: Option<u32>,

    /// Start with the completion chime muted
    #[arg(long)]
    pub muted: bool,
}
