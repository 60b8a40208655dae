//! Shared site handle.
//!
//! [`Site`] wraps a validated [`SiteConfig`] in an `Arc` so that any number
//! of concurrent renders can resolve navigation without locking. Nothing in
//! it is mutable after construction.

use std::sync::Arc;

use sitenav_config::{NavItem, SidebarGroup, SiteConfig};

use crate::navigation::PageNavigation;

/// Read-only navigation resolver for a site.
#[derive(Clone, Debug)]
pub struct Site {
    config: Arc<SiteConfig>,
}

impl Site {
    /// Create a site from a validated configuration.
    pub fn new(config: SiteConfig) -> Self {
        Self::from_shared(Arc::new(config))
    }

    /// Create a site from an already shared configuration.
    pub fn from_shared(config: Arc<SiteConfig>) -> Self {
        tracing::debug!(
            title = config.title(),
            sidebars = config.sidebar().len(),
            "Created site"
        );
        Self { config }
    }

    /// Underlying configuration.
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Top navigation bar exactly as declared.
    pub fn nav(&self) -> &[NavItem] {
        self.config.nav()
    }

    /// Sidebar groups for the page at `path`.
    pub fn sidebar(&self, path: &str) -> &[SidebarGroup] {
        self.config.resolve_sidebar(path)
    }

    /// Full navigation view for the page at `path`.
    #[must_use]
    pub fn navigation(&self, path: &str) -> PageNavigation {
        PageNavigation::build(&self.config, path)
    }
}
