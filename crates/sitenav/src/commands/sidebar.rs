//! `sitenav sidebar` command implementation.

use clap::Args;
use serde::Serialize;
use sitenav_config::{SidebarGroup, SiteConfig};

use super::ConfigArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the sidebar command.
#[derive(Args)]
pub(crate) struct SidebarArgs {
    /// Page path to resolve (e.g. /packages/react-action-guard/api/).
    path: String,

    #[command(flatten)]
    config: ConfigArgs,
}

/// JSON printed by the sidebar command.
#[derive(Serialize)]
struct SidebarResponse<'a> {
    /// Registered prefix that matched.
    prefix: &'a str,
    /// Groups registered under the prefix.
    groups: &'a [SidebarGroup],
}

impl SidebarArgs {
    /// Execute the sidebar command.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded or is invalid.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.config.load()?;
        output.json(&resolve(&config, &self.path))
    }
}

fn resolve<'a>(config: &'a SiteConfig, path: &str) -> SidebarResponse<'a> {
    let (prefix, groups) = config.sidebar().resolve_prefix(path);
    SidebarResponse { prefix, groups }
}
