//! CLI command implementations.

pub(crate) mod check;
pub(crate) mod nav;
pub(crate) mod sidebar;

use std::path::PathBuf;

use clap::Args;
use sitenav_config::{CliSettings, SiteConfig};

use crate::error::CliError;

pub(crate) use check::CheckArgs;
pub(crate) use nav::NavArgs;
pub(crate) use sidebar::SidebarArgs;

/// Configuration options shared by every command.
#[derive(Args)]
pub(crate) struct ConfigArgs {
    /// Path to configuration file (default: auto-discover sitenav.toml).
    #[arg(short, long, env = "SITENAV_CONFIG")]
    config: Option<PathBuf>,

    /// Site base path (overrides config).
    #[arg(long)]
    base: Option<String>,
}

impl ConfigArgs {
    /// Load and validate the site configuration.
    pub(crate) fn load(&self) -> Result<SiteConfig, CliError> {
        let cli_settings = CliSettings {
            base: self.base.clone(),
        };
        let config = SiteConfig::load(self.config.as_deref(), Some(&cli_settings))?;
        tracing::debug!(
            path = ?config.config_path(),
            base = config.base(),
            "Site configuration ready"
        );
        Ok(config)
    }
}
