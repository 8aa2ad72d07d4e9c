use crate::args;

/// Print site debug information
#[derive(Clone, Debug, PartialEq, Eq, clap::Subcommand)]
pub(crate) enum DebugCommands {
    /// Print the post-processed config
    Config {
        #[command(flatten, next_help_heading = "Config")]
        config: args::ConfigArgs,
    },

    /// Print resolved integrations, in pipeline order
    Integrations {
        #[command(flatten, next_help_heading = "Config")]
        config: args::ConfigArgs,
    },
}

impl DebugCommands {
    pub(crate) fn run(&self) -> anyhow::Result<()> {
        match self {
            Self::Config { config } => {
                let config = config.load_config()?;
                let config = feldspar::feldspar_model::Config::from_config(config)?;
                println!("{config}");
            }
            Self::Integrations { config } => {
                let config = config.load_config()?;
                let config = feldspar::feldspar_model::Config::from_config(config)?;
                for integration in &config.integrations {
                    println!("{}", integration.name());
                }
            }
        }

        Ok(())
    }
}
