//! Human-readable overview of a configuration.

use crate::config::Config;

/// Lists the configured files, then each variant with its tag count and replacements.
pub fn summarize(config: &Config) -> String {
    let mut lines = vec!["Files to be modified:".to_string()];
    lines.extend(config.files.iter().map(|file| format!("- {}", file.display())));

    lines.push("Variants in the config:".to_string());
    for variant in &config.variants {
        lines.push(format!(
            "- Name: {} ({} tag(s))",
            variant.name,
            variant.replacements.len()
        ));
        lines.push("  Replacements:".to_string());
        lines.extend(
            variant
                .replacements
                .iter()
                .map(|(tag, value)| format!("  - {tag}: {value}")),
        );
    }

    lines.join("\n")
}
