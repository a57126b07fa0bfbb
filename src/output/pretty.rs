use colored::Colorize;

use crate::session::Preset;

/// Format the preset list as a pretty table
pub fn format_presets_pretty(presets: &[Preset]) -> String {
    let mut output = format!("Presets ({} available)\n", presets.len());
    output.push_str(&"─".repeat(40));
    output.push('\n');

    for preset in presets {
        let duration = format!(
            "{} minute{}",
            preset.duration_minutes,
            if preset.duration_minutes == 1 { "" } else { "s" }
        );
        output.push_str(&format!(
            "{}  {}  {}\n",
            preset.icon,
            preset.name.bold(),
            duration.dimmed()
        ));
    }

    output.push('\n');
    output.push_str(&"Run 'mindful start --preset <name>' to begin".dimmed().to_string());
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::PRESETS;

    #[test]
    fn test_format_presets_pretty() {
        let output = format_presets_pretty(&PRESETS);

        assert!(output.contains("Presets (4 available)"));
        assert!(output.contains("Quick Calm"));
        assert!(output.contains("20 minutes"));
    }
}
