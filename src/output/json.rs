//! JSON output formatting for mindful.

use serde::Serialize;

use crate::error::MindfulError;
use crate::session::Preset;

/// Serialize any value as pretty-printed JSON.
///
/// # Errors
///
/// Returns `MindfulError::Parse` if serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, MindfulError> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Format the preset list as JSON.
///
/// # Errors
///
/// Returns `MindfulError::Parse` if serialization fails.
pub fn format_presets_json(presets: &[Preset]) -> Result<String, MindfulError> {
    #[derive(Serialize)]
    struct PresetList<'a> {
        presets: &'a [Preset],
    }

    to_json(&PresetList { presets })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::PRESETS;

    #[test]
    fn test_format_presets_json() {
        let json = format_presets_json(&PRESETS).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let presets = value["presets"].as_array().unwrap();
        assert_eq!(presets.len(), 4);
        assert_eq!(presets[0]["name"], "Quick Calm");
        assert_eq!(presets[0]["duration_minutes"], 5);
        assert_eq!(presets[3]["name"], "Full Session");
    }
}
