//! Navigation links.
//!
//! A [`Link`] target is either an absolute external URL (anything with a URI
//! scheme such as `https:` or `mailto:`, or a protocol-relative `//host`) or
//! a site-relative path starting with `/`. Anything else is rejected when the
//! link is constructed.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{ConfigError, require_non_empty};

static EXTERNAL_URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[A-Za-z][A-Za-z0-9+.\-]*:|//)").expect("invalid external URL regex")
});

/// Whether a target points outside the site.
pub(crate) fn is_external_target(target: &str) -> bool {
    EXTERNAL_URL_PATTERN.is_match(target)
}

/// Link as written in the configuration file.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LinkDefinition {
    /// Display label.
    pub label: String,
    /// External URL or site-relative path.
    pub target: String,
}

impl LinkDefinition {
    /// Create a link definition from label and target.
    pub fn new(label: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            target: target.into(),
        }
    }
}

/// Validated navigation link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Link {
    label: String,
    target: String,
}

impl Link {
    /// Create a validated link.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if the label is empty or the target is
    /// neither an external URL nor a path starting with `/`.
    pub fn new(label: impl Into<String>, target: impl Into<String>) -> Result<Self, ConfigError> {
        Self::from_definition(LinkDefinition::new(label, target), "link")
    }

    /// Validate a raw definition, naming `field` in error messages.
    pub(crate) fn from_definition(
        definition: LinkDefinition,
        field: &str,
    ) -> Result<Self, ConfigError> {
        require_non_empty(&definition.label, &format!("{field}.label"))?;
        require_link_target(&definition.target, &format!("{field}.target"))?;
        Ok(Self {
            label: definition.label,
            target: definition.target,
        })
    }

    /// Display label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Target exactly as configured.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Whether the target points outside the site.
    pub fn is_external(&self) -> bool {
        is_external_target(&self.target)
    }

    /// Resolve the target against the site base path.
    ///
    /// External targets are returned unchanged. Internal targets get `base`
    /// prepended (`/docs/` + `/guide` = `/docs/guide`).
    pub fn href(&self, base: &str) -> String {
        if self.is_external() {
            return self.target.clone();
        }
        let base = base.trim_end_matches('/');
        format!("{base}{}", self.target)
    }
}

/// Require a target to be an external URL or a site-relative path.
pub(crate) fn require_link_target(target: &str, field: &str) -> Result<(), ConfigError> {
    if is_external_target(target) || target.starts_with('/') {
        return Ok(());
    }
    Err(ConfigError::Validation(format!(
        "{field} \"{target}\" must be an absolute URL or a path starting with /"
    )))
}
