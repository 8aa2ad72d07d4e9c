use std::path::PathBuf;

use anyhow::Context as _;

use crate::debug;
use crate::init;

#[derive(Debug, clap::Parser)]
#[command(name = "feldspar")]
#[command(version, about = "Site configuration front-end for the feldspar build pipeline")]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Command,

    #[command(flatten)]
    pub(crate) color: colorchoice_clap::Color,

    #[command(flatten)]
    pub(crate) verbose: clap_verbosity_flag::Verbosity<clap_verbosity_flag::InfoLevel>,
}

#[derive(Clone, Debug, clap::Subcommand)]
pub(crate) enum Command {
    Init(init::InitArgs),
    #[command(subcommand)]
    Debug(debug::DebugCommands),
}

#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
pub(crate) struct ConfigArgs {
    /// Config file to use [default: _feldspar.yml]
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
}

impl ConfigArgs {
    pub(crate) fn load_config(&self) -> anyhow::Result<feldspar_config::Config> {
        if let Some(config_path) = self.config.as_deref() {
            feldspar_config::Config::from_file(config_path)
                .map_err(anyhow::Error::new)
                .with_context(|| format!("Error reading config file `{}`", config_path.display()))
        } else {
            let cwd = std::env::current_dir().context("Could not determine current directory")?;
            feldspar_config::Config::from_cwd(cwd).map_err(anyhow::Error::new)
        }
    }
}
