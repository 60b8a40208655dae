//! Site navigation configuration.
//!
//! Parses `sitenav.toml` files with serde, validates them into an immutable
//! [`SiteConfig`] and resolves the sidebar for a page by longest URL path
//! prefix. Config files are auto-discovered in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `title`
//! - `description`
//! - `base`
//! - `social_links[].target`
//!
//! ## Example
//!
//! ```
//! use sitenav_config::SiteConfig;
//!
//! let config = SiteConfig::from_toml_str(r#"
//! title = "React Action Guard"
//!
//! [[sidebar."/"]]
//! title = "Introduction"
//! items = [{ label = "Getting started", target = "/getting-started" }]
//!
//! [[sidebar."/packages/react-action-guard/"]]
//! title = "react-action-guard"
//! items = [{ label = "API", target = "/packages/react-action-guard/api/" }]
//! "#)?;
//!
//! let groups = config.resolve_sidebar("/packages/react-action-guard/api/use-guard");
//! assert_eq!(groups[0].title(), "react-action-guard");
//! # Ok::<(), sitenav_config::ConfigError>(())
//! ```

mod expand;
mod link;
mod sidebar;
mod site_config;

use std::path::{Path, PathBuf};

pub use link::{Link, LinkDefinition};
pub use sidebar::{DEFAULT_SIDEBAR_KEY, SidebarGroup, SidebarGroupDefinition, SidebarMap};
pub use site_config::{
    DEFAULT_BASE, DiagramOptions, NavItem, NavItemDefinition, SiteConfig, SiteDefinition,
    SocialLink, SocialLinkDefinition,
};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override site base path.
    pub base: Option<String>,
}

/// Configuration filename to search for.
pub const CONFIG_FILENAME: &str = "sitenav.toml";

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`social_links[0].target`").
        field: String,
        /// Error message (e.g., "${`REPO_URL`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
pub(crate) fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl SiteConfig {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `sitenav.toml` in current directory and parents.
    ///
    /// CLI settings are applied before validation, so an invalid override is
    /// reported the same way as an invalid file value.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if no file exists, or any parse,
    /// expansion or validation error.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let path = match config_path {
            Some(path) if !path.exists() => {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Some(path) => path.to_path_buf(),
            None => {
                let cwd = std::env::current_dir()?;
                discover_config(&cwd).ok_or_else(|| ConfigError::NotFound(cwd.join(CONFIG_FILENAME)))?
            }
        };
        Self::load_from_file(&path, cli_settings)
    }

    /// Parse and validate configuration from a TOML string.
    ///
    /// Environment variables are expanded; no CLI settings are applied.
    ///
    /// # Errors
    ///
    /// Returns any parse, expansion or validation error.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Self::from_toml_with_settings(content, None)
    }

    fn from_toml_with_settings(
        content: &str,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut definition: SiteDefinition = toml::from_str(content)?;
        expand_env_vars(&mut definition)?;
        if let Some(settings) = cli_settings {
            apply_cli_settings(&mut definition, settings);
        }
        Self::new(definition)
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path, cli_settings: Option<&CliSettings>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_with_settings(&content, cli_settings)?
            .with_config_path(path.to_path_buf());

        tracing::info!(
            path = %path.display(),
            nav_items = config.nav().len(),
            sidebars = config.sidebar().len(),
            "Loaded site configuration"
        );

        Ok(config)
    }
}

/// Search for config file in `start` and its parents.
fn discover_config(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        let candidate = current.join(CONFIG_FILENAME);
        if candidate.exists() {
            return Some(candidate);
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Apply CLI settings to the definition.
fn apply_cli_settings(definition: &mut SiteDefinition, settings: &CliSettings) {
    if let Some(base) = &settings.base {
        definition.base = Some(base.clone());
    }
}

/// Expand environment variable references in configuration strings.
fn expand_env_vars(definition: &mut SiteDefinition) -> Result<(), ConfigError> {
    expand::expand_field(&mut definition.title, "title")?;
    expand::expand_field(&mut definition.description, "description")?;

    if let Some(base) = definition.base.as_mut() {
        expand::expand_field(base, "base")?;
    }

    for (i, link) in definition.social_links.iter_mut().enumerate() {
        expand::expand_field(&mut link.target, &format!("social_links[{i}].target"))?;
    }

    Ok(())
}
