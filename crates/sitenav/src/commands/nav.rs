//! `sitenav nav` command implementation.

use clap::Args;
use sitenav_site::Site;

use super::ConfigArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the nav command.
#[derive(Args)]
pub(crate) struct NavArgs {
    /// Page path to build navigation for.
    #[arg(default_value = "/")]
    path: String,

    #[command(flatten)]
    config: ConfigArgs,
}

impl NavArgs {
    /// Execute the nav command.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded or is invalid.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let site = Site::new(self.config.load()?);
        output.json(&site.navigation(&self.path))
    }
}
