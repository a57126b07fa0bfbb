//! Output formatting for mindful.
//!
//! This module provides formatters for displaying preset data in various formats.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::error::MindfulError;
use crate::session::Preset;

pub use json::{format_presets_json, to_json};
pub use pretty::format_presets_pretty;

/// Format the preset list based on output format
///
/// # Errors
///
/// Returns `MindfulError::Parse` if JSON serialization fails.
pub fn format_presets(presets: &[Preset], format: OutputFormat) -> Result<String, MindfulError> {
    match format {
        OutputFormat::Pretty => Ok(format_presets_pretty(presets)),
        OutputFormat::Json => format_presets_json(presets),
    }
}
