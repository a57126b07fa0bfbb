//! Preset listing command.

use crate::cli::args::OutputFormat;
use crate::error::MindfulError;
use crate::output::format_presets;
use crate::session::PRESETS;

/// Execute the presets command
///
/// # Errors
///
/// Returns an error if output formatting fails.
pub fn presets(format: OutputFormat) -> Result<String, MindfulError> {
    format_presets(&PRESETS, format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_pretty() {
        let output = presets(OutputFormat::Pretty).unwrap();
        assert!(output.contains("Quick Calm"));
        assert!(output.contains("Stress Relief"));
    }

    #[test]
    fn test_presets_json_is_valid() {
        let output = presets(OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["presets"].as_array().unwrap().len(), 4);
    }
}
