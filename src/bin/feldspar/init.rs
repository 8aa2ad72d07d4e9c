use std::path::PathBuf;

use anyhow::Context as _;

/// Create a new feldspar project
#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
pub(crate) struct InitArgs {
    /// Target directory
    #[arg(default_value = "./")]
    directory: PathBuf,
}

impl InitArgs {
    pub(crate) fn run(&self) -> anyhow::Result<()> {
        feldspar::create_new_project(&self.directory).with_context(|| {
            format!(
                "Could not create a new feldspar project in `{}`",
                self.directory.display()
            )
        })?;
        log::info!("Created new project at {}", self.directory.display());

        Ok(())
    }
}
