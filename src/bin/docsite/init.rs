use std::path;

use crate::error::*;

/// Create a new docsite project
#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
pub(crate) struct InitArgs {
    /// Target directory
    #[arg(default_value = "./")]
    pub(crate) directory: path::PathBuf,
}

impl InitArgs {
    pub(crate) fn run(&self) -> Result<()> {
        docsite::create_new_project(&self.directory)?;
        info!("Created new project at {}", self.directory.display());

        Ok(())
    }
}
