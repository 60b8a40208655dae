//! `sitenav check` command implementation.

use clap::Args;
use sitenav_config::SiteConfig;

use super::ConfigArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    #[command(flatten)]
    config: ConfigArgs,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded or is invalid.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.config.load()?;

        if let Some(path) = config.config_path() {
            output.highlight(&format!("Checked {}", path.display()));
        }
        for line in summary(&config) {
            output.info(&line);
        }
        output.success("Configuration is valid");

        Ok(())
    }
}

/// Human-readable summary of a validated configuration.
fn summary(config: &SiteConfig) -> Vec<String> {
    let mut lines = vec![
        format!("Title: {}", config.title()),
        format!("Base: {}", config.base()),
        format!("Navigation items: {}", config.nav().len()),
        format!("Social links: {}", config.social_links().len()),
        format!("Sidebars: {}", config.sidebar().len()),
    ];
    lines.extend(config.sidebar().prefixes().map(|prefix| {
        let groups = config.sidebar().resolve(prefix).len();
        format!("  {prefix} ({groups} groups)")
    }));
    lines.push(match config.diagrams() {
        Some(options) => format!("Diagram plugin: {} options", options.as_map().len()),
        None => "Diagram plugin: not configured".to_owned(),
    });
    lines
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_summary_lists_sidebars_longest_first() {
        let config = SiteConfig::from_toml_str(
            r#"
title = "React Action Guard"

[[nav]]
label = "Guide"
target = "/guide/"

[[sidebar."/"]]
title = "Introduction"

[[sidebar."/packages/"]]
title = "Packages"

[[sidebar."/packages/"]]
title = "Tooling"

[diagrams]
theme = "neutral"
"#,
        )
        .unwrap();

        assert_eq!(
            summary(&config),
            vec![
                "Title: React Action Guard",
                "Base: /",
                "Navigation items: 1",
                "Social links: 0",
                "Sidebars: 2",
                "  /packages/ (2 groups)",
                "  / (1 groups)",
                "Diagram plugin: 1 options",
            ]
        );
    }

    #[test]
    fn test_summary_without_diagrams() {
        let config =
            SiteConfig::from_toml_str("title = \"Docs\"\n[[sidebar.\"/\"]]\ntitle = \"Intro\"")
                .unwrap();

        let lines = summary(&config);

        assert_eq!(lines.last().unwrap(), "Diagram plugin: not configured");
    }
}
