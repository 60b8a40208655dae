//! Site configuration: raw definition and validated form.
//!
//! [`SiteDefinition`] mirrors the TOML file and carries no invariants.
//! [`SiteConfig::new`] validates it once; afterwards the configuration is
//! immutable and every lookup on it is infallible.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::link::{Link, LinkDefinition, is_external_target};
use crate::sidebar::{SidebarGroup, SidebarGroupDefinition, SidebarMap};
use crate::{ConfigError, require_non_empty};

/// Site base path used when none is configured.
pub const DEFAULT_BASE: &str = "/";

/// Site configuration as written in `sitenav.toml`.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteDefinition {
    /// Site title.
    pub title: String,
    /// Site description (used for meta tags by the renderer).
    #[serde(default)]
    pub description: String,
    /// URL path the site is deployed under.
    #[serde(default)]
    pub base: Option<String>,
    /// Top navigation bar, in display order.
    #[serde(default)]
    pub nav: Vec<NavItemDefinition>,
    /// Sidebars keyed by URL path prefix.
    #[serde(default)]
    pub sidebar: BTreeMap<String, Vec<SidebarGroupDefinition>>,
    /// Social links shown in the header.
    #[serde(default)]
    pub social_links: Vec<SocialLinkDefinition>,
    /// Options passed through to the diagram plugin.
    #[serde(default)]
    pub diagrams: Option<DiagramOptions>,
}

/// Top navigation entry as written in the configuration file.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavItemDefinition {
    /// Display label.
    pub label: String,
    /// External URL or site-relative path.
    pub target: String,
    /// Regex deciding when the item is highlighted.
    #[serde(default)]
    pub active_match: Option<String>,
}

/// Social link as written in the configuration file.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SocialLinkDefinition {
    /// Icon identifier (e.g. `github`).
    pub icon: String,
    /// External URL.
    pub target: String,
}

/// Opaque diagram plugin options.
///
/// The values are never interpreted here; the renderer hands them to the
/// plugin as-is.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct DiagramOptions(serde_json::Map<String, serde_json::Value>);

impl DiagramOptions {
    /// Look up a single option.
    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.0.get(key)
    }

    /// All options.
    pub fn as_map(&self) -> &serde_json::Map<String, serde_json::Value> {
        &self.0
    }
}

impl From<serde_json::Map<String, serde_json::Value>> for DiagramOptions {
    fn from(map: serde_json::Map<String, serde_json::Value>) -> Self {
        Self(map)
    }
}

/// Validated top navigation entry.
#[derive(Clone, Debug)]
pub struct NavItem {
    link: Link,
    active_match: Option<Regex>,
}

impl NavItem {
    /// Create a navigation entry without an active pattern.
    pub fn new(link: Link) -> Self {
        Self {
            link,
            active_match: None,
        }
    }

    fn from_definition(definition: NavItemDefinition, field: &str) -> Result<Self, ConfigError> {
        let link = Link::from_definition(
            LinkDefinition::new(definition.label, definition.target),
            field,
        )?;
        let active_match = definition
            .active_match
            .map(|pattern| {
                Regex::new(&pattern).map_err(|e| {
                    ConfigError::Validation(format!(
                        "{field}.active_match is not a valid regex: {e}"
                    ))
                })
            })
            .transpose()?;
        Ok(Self { link, active_match })
    }

    /// The underlying link.
    pub fn link(&self) -> &Link {
        &self.link
    }

    /// Configured active pattern, if any.
    pub fn active_match(&self) -> Option<&str> {
        self.active_match.as_ref().map(Regex::as_str)
    }

    /// Whether this entry should be highlighted on the page at `path`.
    ///
    /// With an `active_match` pattern the pattern decides. Otherwise external
    /// links are never active, a target ending in `/` matches every path below
    /// it, and any other target must equal the path.
    pub fn is_active(&self, path: &str) -> bool {
        if let Some(pattern) = &self.active_match {
            return pattern.is_match(path);
        }
        if self.link.is_external() {
            return false;
        }
        let target = self.link.target();
        if target.ends_with('/') {
            path.starts_with(target)
        } else {
            path == target
        }
    }
}

/// Validated social link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    icon: String,
    target: String,
}

impl SocialLink {
    /// Create a validated social link.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if the icon is empty or the target is
    /// not an external URL.
    pub fn new(icon: impl Into<String>, target: impl Into<String>) -> Result<Self, ConfigError> {
        Self::from_definition(
            SocialLinkDefinition {
                icon: icon.into(),
                target: target.into(),
            },
            "social link",
        )
    }

    fn from_definition(
        definition: SocialLinkDefinition,
        field: &str,
    ) -> Result<Self, ConfigError> {
        require_non_empty(&definition.icon, &format!("{field}.icon"))?;
        if !is_external_target(&definition.target) {
            return Err(ConfigError::Validation(format!(
                "{field}.target \"{}\" must be an absolute URL",
                definition.target
            )));
        }
        Ok(Self {
            icon: definition.icon,
            target: definition.target,
        })
    }

    /// Icon identifier.
    pub fn icon(&self) -> &str {
        &self.icon
    }

    /// External URL.
    pub fn target(&self) -> &str {
        &self.target
    }
}

/// Validated, immutable site configuration.
///
/// Built once at startup and shared read-only with every page render.
#[derive(Clone, Debug)]
pub struct SiteConfig {
    title: String,
    description: String,
    base: String,
    nav: Vec<NavItem>,
    sidebar: SidebarMap,
    social_links: Vec<SocialLink>,
    diagrams: Option<DiagramOptions>,
    config_path: Option<PathBuf>,
}

impl SiteConfig {
    /// Validate a site definition.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` naming the first offending field:
    /// a missing `/` sidebar, an invalid link target, an empty label, title or
    /// icon, an invalid base path or an invalid `active_match` regex.
    pub fn new(definition: SiteDefinition) -> Result<Self, ConfigError> {
        require_non_empty(&definition.title, "title")?;

        let base = definition.base.unwrap_or_else(|| DEFAULT_BASE.to_owned());
        require_base_path(&base)?;

        let nav = definition
            .nav
            .into_iter()
            .enumerate()
            .map(|(i, item)| NavItem::from_definition(item, &format!("nav[{i}]")))
            .collect::<Result<Vec<_>, _>>()?;

        let sidebar = SidebarMap::from_definitions(definition.sidebar)?;

        let social_links = definition
            .social_links
            .into_iter()
            .enumerate()
            .map(|(i, link)| SocialLink::from_definition(link, &format!("social_links[{i}]")))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            title: definition.title,
            description: definition.description,
            base,
            nav,
            sidebar,
            social_links,
            diagrams: definition.diagrams,
            config_path: None,
        })
    }

    /// Site title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Site description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// URL path the site is deployed under, always starting and ending with `/`.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Top navigation bar in declaration order.
    pub fn nav(&self) -> &[NavItem] {
        &self.nav
    }

    /// Sidebar registry.
    pub fn sidebar(&self) -> &SidebarMap {
        &self.sidebar
    }

    /// Sidebar groups for the page at `path` (longest-prefix match).
    pub fn resolve_sidebar(&self, path: &str) -> &[SidebarGroup] {
        self.sidebar.resolve(path)
    }

    /// Social links in declaration order.
    pub fn social_links(&self) -> &[SocialLink] {
        &self.social_links
    }

    /// Diagram plugin options; `None` if the plugin is not configured.
    pub fn diagrams(&self) -> Option<&DiagramOptions> {
        self.diagrams.as_ref()
    }

    /// File the configuration was loaded from, if any.
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    pub(crate) fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }
}

/// Require the base path to start and end with `/`.
fn require_base_path(base: &str) -> Result<(), ConfigError> {
    if !base.starts_with('/') || !base.ends_with('/') {
        return Err(ConfigError::Validation(format!(
            "base \"{base}\" must start and end with /"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn definition() -> SiteDefinition {
        let mut sidebar = BTreeMap::new();
        sidebar.insert(
            "/".to_owned(),
            vec![SidebarGroupDefinition {
                title: "Introduction".to_owned(),
                collapsed: None,
                items: vec![LinkDefinition::new("Getting started", "/getting-started")],
            }],
        );
        sidebar.insert(
            "/packages/react-action-guard/".to_owned(),
            vec![SidebarGroupDefinition {
                title: "react-action-guard".to_owned(),
                collapsed: Some(false),
                items: vec![LinkDefinition::new(
                    "API",
                    "/packages/react-action-guard/api/",
                )],
            }],
        );
        SiteDefinition {
            title: "React Action Guard".to_owned(),
            description: "Guard UI actions".to_owned(),
            nav: vec![
                NavItemDefinition {
                    label: "Guide".to_owned(),
                    target: "/guide/".to_owned(),
                    active_match: None,
                },
                NavItemDefinition {
                    label: "Packages".to_owned(),
                    target: "/packages/react-action-guard/".to_owned(),
                    active_match: Some("^/packages/".to_owned()),
                },
            ],
            sidebar,
            ..Default::default()
        }
    }

    #[test]
    fn test_new_valid_definition() {
        let config = SiteConfig::new(definition()).unwrap();

        assert_eq!(config.title(), "React Action Guard");
        assert_eq!(config.description(), "Guard UI actions");
        assert_eq!(config.base(), "/");
        assert_eq!(config.sidebar().len(), 2);
        assert!(config.diagrams().is_none());
        assert!(config.config_path().is_none());
    }

    #[test]
    fn test_nav_preserves_declaration_order() {
        let config = SiteConfig::new(definition()).unwrap();

        let labels: Vec<_> = config.nav().iter().map(|n| n.link().label()).collect();

        assert_eq!(labels, vec!["Guide", "Packages"]);
    }

    #[test]
    fn test_resolve_sidebar_delegates_to_map() {
        let config = SiteConfig::new(definition()).unwrap();

        let groups = config.resolve_sidebar("/packages/react-action-guard/api/use-guard");

        assert_eq!(groups[0].title(), "react-action-guard");
        assert_eq!(config.resolve_sidebar("/getting-started")[0].title(), "Introduction");
    }

    #[test]
    fn test_new_without_default_sidebar_fails() {
        let mut def = definition();
        def.sidebar.remove("/");

        let err = SiteConfig::new(def).unwrap_err();

        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("\"/\""));
    }

    #[test]
    fn test_new_empty_title_fails() {
        let def = SiteDefinition {
            title: String::new(),
            ..definition()
        };

        let err = SiteConfig::new(def).unwrap_err();

        assert!(err.to_string().contains("title"));
    }

    #[test]
    fn test_new_invalid_nav_target_names_field() {
        let mut def = definition();
        def.nav[1].target = "packages".to_owned();

        let err = SiteConfig::new(def).unwrap_err();

        assert!(err.to_string().contains("nav[1].target"), "got: {err}");
    }

    #[test]
    fn test_new_invalid_active_match_fails() {
        let mut def = definition();
        def.nav[0].active_match = Some("^/guide/(".to_owned());

        let err = SiteConfig::new(def).unwrap_err();

        assert!(err.to_string().contains("nav[0].active_match"), "got: {err}");
    }

    #[test]
    fn test_new_invalid_base_fails() {
        for base in ["docs/", "/docs", ""] {
            let def = SiteDefinition {
                base: Some(base.to_owned()),
                ..definition()
            };
            let err = SiteConfig::new(def).unwrap_err();
            assert!(err.to_string().contains("base"), "{base}: {err}");
        }
    }

    #[test]
    fn test_new_social_link_must_be_external() {
        let def = SiteDefinition {
            social_links: vec![SocialLinkDefinition {
                icon: "github".to_owned(),
                target: "/github".to_owned(),
            }],
            ..definition()
        };

        let err = SiteConfig::new(def).unwrap_err();

        assert!(err.to_string().contains("social_links[0].target"), "got: {err}");
    }

    #[test]
    fn test_social_link_requires_icon() {
        let err = SocialLink::new("", "https://github.com/example").unwrap_err();

        assert!(err.to_string().contains("icon"));
    }

    #[test]
    fn test_nav_item_active_by_trailing_slash_prefix() {
        let item = NavItem::new(Link::new("Guide", "/guide/").unwrap());

        assert!(item.is_active("/guide/"));
        assert!(item.is_active("/guide/install"));
        assert!(!item.is_active("/guides"));
    }

    #[test]
    fn test_nav_item_active_exact_target() {
        let item = NavItem::new(Link::new("Changelog", "/changelog").unwrap());

        assert!(item.is_active("/changelog"));
        assert!(!item.is_active("/changelog/2024"));
    }

    #[test]
    fn test_nav_item_active_match_overrides_target() {
        let config = SiteConfig::new(definition()).unwrap();
        let packages = &config.nav()[1];

        assert_eq!(packages.active_match(), Some("^/packages/"));
        assert!(packages.is_active("/packages/other/"));
        assert!(!packages.is_active("/guide/"));
    }

    #[test]
    fn test_external_nav_item_never_active() {
        let item = NavItem::new(Link::new("npm", "https://www.npmjs.com/").unwrap());

        assert!(!item.is_active("/"));
    }

    #[test]
    fn test_diagram_options_are_opaque() {
        let mut map = serde_json::Map::new();
        map.insert("theme".to_owned(), serde_json::json!("forest"));
        map.insert("scale".to_owned(), serde_json::json!(2));
        let options = DiagramOptions::from(map);

        assert_eq!(options.get("theme"), Some(&serde_json::json!("forest")));
        assert_eq!(options.as_map().len(), 2);
        assert!(options.get("missing").is_none());
    }
}
