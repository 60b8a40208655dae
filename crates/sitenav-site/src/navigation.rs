//! Serializable navigation views for the frontend.
//!
//! A [`PageNavigation`] is everything the renderer needs to draw the chrome of
//! one page: the top bar with the active entry marked, the sidebar chosen by
//! longest prefix, and the social links. Hrefs already carry the site base.

use serde::Serialize;
use sitenav_config::{Link, NavItem, SidebarGroup, SiteConfig, SocialLink};

/// Navigation for a single page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageNavigation {
    /// Site title.
    pub title: String,
    /// Top navigation bar.
    pub nav: Vec<NavEntry>,
    /// Sidebar selected for the page.
    pub sidebar: SidebarView,
    /// Header social links.
    pub social_links: Vec<SocialEntry>,
}

/// Rendered link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavEntry {
    /// Display label.
    pub label: String,
    /// Href with the site base applied.
    pub href: String,
    /// Whether the link leaves the site.
    pub external: bool,
    /// Whether the link points at (or contains) the current page.
    pub active: bool,
}

/// Sidebar chosen for a page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SidebarView {
    /// Registered prefix that matched.
    pub prefix: String,
    /// Groups in display order.
    pub groups: Vec<SidebarGroupView>,
}

/// Sidebar group with rendered links.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SidebarGroupView {
    /// Section heading.
    pub title: String,
    /// Initial collapse state, omitted for non-collapsible groups.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collapsed: Option<bool>,
    /// Links in display order.
    pub items: Vec<NavEntry>,
}

/// Rendered social link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SocialEntry {
    /// Icon identifier.
    pub icon: String,
    /// External URL.
    pub href: String,
}

impl PageNavigation {
    /// Build navigation for the page at `path`.
    pub(crate) fn build(config: &SiteConfig, path: &str) -> Self {
        let base = config.base();

        let nav = config
            .nav()
            .iter()
            .map(|item| nav_entry(item, path, base))
            .collect();

        let (prefix, groups) = config.sidebar().resolve_prefix(path);
        let sidebar = SidebarView {
            prefix: prefix.to_owned(),
            groups: groups
                .iter()
                .map(|group| sidebar_group_view(group, path, base))
                .collect(),
        };

        let social_links = config.social_links().iter().map(social_entry).collect();

        Self {
            title: config.title().to_owned(),
            nav,
            sidebar,
            social_links,
        }
    }

    /// The active top navigation entry, if any.
    pub fn active_nav(&self) -> Option<&NavEntry> {
        self.nav.iter().find(|entry| entry.active)
    }
}

fn nav_entry(item: &NavItem, path: &str, base: &str) -> NavEntry {
    NavEntry {
        active: item.is_active(path),
        ..link_entry(item.link(), base)
    }
}

fn sidebar_group_view(group: &SidebarGroup, path: &str, base: &str) -> SidebarGroupView {
    SidebarGroupView {
        title: group.title().to_owned(),
        collapsed: group.collapsed(),
        items: group
            .items()
            .iter()
            .map(|link| NavEntry {
                active: !link.is_external() && link.target() == path,
                ..link_entry(link, base)
            })
            .collect(),
    }
}

fn link_entry(link: &Link, base: &str) -> NavEntry {
    NavEntry {
        label: link.label().to_owned(),
        href: link.href(base),
        external: link.is_external(),
        active: false,
    }
}

fn social_entry(link: &SocialLink) -> SocialEntry {
    SocialEntry {
        icon: link.icon().to_owned(),
        href: link.target().to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_entry_applies_base() {
        let link = Link::new("API", "/api/").unwrap();

        let entry = link_entry(&link, "/docs/");

        assert_eq!(entry.href, "/docs/api/");
        assert!(!entry.external);
        assert!(!entry.active);
    }

    #[test]
    fn test_sidebar_group_marks_current_page() {
        let group = SidebarGroup::new(
            "Guide",
            vec![
                Link::new("Install", "/guide/install").unwrap(),
                Link::new("Usage", "/guide/usage").unwrap(),
            ],
        )
        .unwrap();

        let view = sidebar_group_view(&group, "/guide/usage", "/");

        assert!(!view.items[0].active);
        assert!(view.items[1].active);
        assert_eq!(view.collapsed, None);
    }
}
