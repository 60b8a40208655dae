//! Per-page navigation for a documentation site.
//!
//! This crate provides:
//! - [`Site`]: shareable, read-only handle over a validated
//!   [`SiteConfig`](sitenav_config::SiteConfig)
//! - [`PageNavigation`]: serializable top bar, sidebar and social links for
//!   one page
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use sitenav_config::SiteConfig;
//! use sitenav_site::Site;
//!
//! let config = SiteConfig::load(None, None)?;
//! let site = Site::new(config);
//!
//! // Sidebar for a page
//! let groups = site.sidebar("/packages/react-action-guard/api/use-guard");
//!
//! // Everything the renderer needs for the page chrome
//! let navigation = site.navigation("/packages/react-action-guard/api/use-guard");
//! # Ok(())
//! # }
//! ```

mod navigation;
mod site;

pub use navigation::{NavEntry, PageNavigation, SidebarGroupView, SidebarView, SocialEntry};
pub use site::Site;
