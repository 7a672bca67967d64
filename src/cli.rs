use std::path::PathBuf;

mod apply;
mod show;
mod terminal;
mod validate;

use apply::Apply;
use clap::ArgAction;
use facets::{Config, IdScope};
use show::Show;
use validate::Validate;

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to an engine configuration file (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Override how option IDs are scoped
    #[arg(long, value_name = "SCOPE", global = true)]
    scope: Option<IdScope>,

    #[command(subcommand)]
    command: Command,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        let mut config = self
            .config
            .as_deref()
            .map(Config::load)
            .transpose()
            .map_err(anyhow::Error::msg)?
            .unwrap_or_default();
        if let Some(scope) = self.scope {
            config.id_scope = scope;
        }

        self.command.run(&config)
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

#[derive(Debug, clap::Parser)]
pub enum Command {
    /// Check that a catalog file is well-formed
    Validate(Validate),

    /// Print the categories and options of a catalog
    Show(Show),

    /// Run a sequence of filter actions and print the resulting state
    ///
    /// Actions are applied in order to a fresh session over the catalog.
    Apply(Apply),
}

impl Command {
    fn run(self, config: &Config) -> anyhow::Result<()> {
        match self {
            Self::Validate(command) => command.run(config)?,
            Self::Show(command) => command.run(config)?,
            Self::Apply(command) => command.run(config)?,
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Table,
    Json,
}
