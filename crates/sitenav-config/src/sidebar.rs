//! Sidebar registry keyed by URL path prefix.
//!
//! A [`SidebarMap`] always contains the default `/` entry, so resolution on a
//! constructed map cannot fail. Lookup picks the longest registered prefix of
//! the page path: `/packages/react-action-guard/api/x` resolves to
//! `/packages/react-action-guard/` before `/packages/` or `/`. Paths no key
//! is a prefix of get the `/` groups.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::link::{Link, LinkDefinition};
use crate::{ConfigError, require_non_empty};

/// Key of the fallback sidebar.
pub const DEFAULT_SIDEBAR_KEY: &str = "/";

/// Sidebar group as written in the configuration file.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SidebarGroupDefinition {
    /// Section heading.
    pub title: String,
    /// Collapse state; absent means the group cannot be collapsed.
    #[serde(default)]
    pub collapsed: Option<bool>,
    /// Links in display order.
    #[serde(default)]
    pub items: Vec<LinkDefinition>,
}

/// Validated sidebar section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SidebarGroup {
    title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    collapsed: Option<bool>,
    items: Vec<Link>,
}

impl SidebarGroup {
    /// Create a sidebar group from already validated links.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if the title is empty.
    pub fn new(title: impl Into<String>, items: Vec<Link>) -> Result<Self, ConfigError> {
        let title = title.into();
        require_non_empty(&title, "sidebar group title")?;
        Ok(Self {
            title,
            collapsed: None,
            items,
        })
    }

    /// Make the group collapsible with the given initial state.
    #[must_use]
    pub fn collapsible(mut self, collapsed: bool) -> Self {
        self.collapsed = Some(collapsed);
        self
    }

    pub(crate) fn from_definition(
        definition: SidebarGroupDefinition,
        field: &str,
    ) -> Result<Self, ConfigError> {
        require_non_empty(&definition.title, &format!("{field}.title"))?;
        let items = definition
            .items
            .into_iter()
            .enumerate()
            .map(|(i, item)| Link::from_definition(item, &format!("{field}.items[{i}]")))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            title: definition.title,
            collapsed: definition.collapsed,
            items,
        })
    }

    /// Section heading.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// `None` if not collapsible, otherwise the initial collapse state.
    pub fn collapsed(&self) -> Option<bool> {
        self.collapsed
    }

    /// Links in display order.
    pub fn items(&self) -> &[Link] {
        &self.items
    }
}

/// Path-prefix keyed sidebar registry with a mandatory `/` fallback.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SidebarMap {
    /// Entries sorted by descending prefix length, so the first match is the
    /// longest one. The `/` entry is always last.
    entries: Vec<(String, Vec<SidebarGroup>)>,
}

impl SidebarMap {
    /// Build a sidebar map from prefix/group pairs.
    ///
    /// Prefixes are matched exactly as registered.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if no `/` entry is registered, a
    /// prefix does not start with `/`, or a prefix is registered twice.
    pub fn new<K, I>(entries: I) -> Result<Self, ConfigError>
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Vec<SidebarGroup>)>,
    {
        let mut seen = HashSet::new();
        let mut registered = Vec::new();
        for (key, groups) in entries {
            let prefix: String = key.into();
            if !prefix.starts_with('/') {
                return Err(ConfigError::Validation(format!(
                    "sidebar prefix \"{prefix}\" must start with /"
                )));
            }
            if !seen.insert(prefix.clone()) {
                return Err(ConfigError::Validation(format!(
                    "sidebar prefix \"{prefix}\" is registered twice"
                )));
            }
            registered.push((prefix, groups));
        }

        if !seen.contains(DEFAULT_SIDEBAR_KEY) {
            return Err(ConfigError::Validation(format!(
                "sidebar must register a default \"{DEFAULT_SIDEBAR_KEY}\" entry"
            )));
        }

        registered.sort_by(|(a, _), (b, _)| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        Ok(Self {
            entries: registered,
        })
    }

    pub(crate) fn from_definitions(
        definitions: BTreeMap<String, Vec<SidebarGroupDefinition>>,
    ) -> Result<Self, ConfigError> {
        let entries = definitions
            .into_iter()
            .map(|(key, groups)| {
                let groups = groups
                    .into_iter()
                    .enumerate()
                    .map(|(i, group)| {
                        SidebarGroup::from_definition(group, &format!("sidebar.\"{key}\"[{i}]"))
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Ok((key, groups))
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;
        Self::new(entries)
    }

    /// Groups for the longest registered prefix of `path`.
    pub fn resolve(&self, path: &str) -> &[SidebarGroup] {
        self.resolve_prefix(path).1
    }

    /// Matched prefix and its groups for `path`.
    ///
    /// Falls back to the `/` entry when no registered prefix matches, which
    /// only happens for paths without a leading slash.
    pub fn resolve_prefix(&self, path: &str) -> (&str, &[SidebarGroup]) {
        let (prefix, groups) = self
            .entries
            .iter()
            .find(|(prefix, _)| path.starts_with(prefix.as_str()))
            .unwrap_or_else(|| self.fallback());
        tracing::debug!(path, prefix = %prefix, "Resolved sidebar");
        (prefix.as_str(), groups.as_slice())
    }

    /// Registered prefixes, longest first.
    pub fn prefixes(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(prefix, _)| prefix.as_str())
    }

    /// Number of registered prefixes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: the `/` entry is mandatory.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn fallback(&self) -> &(String, Vec<SidebarGroup>) {
        // Every key starts with "/", so "/" is the shortest and sorts last
        self.entries
            .last()
            .expect("sidebar map always holds the default entry")
    }
}
