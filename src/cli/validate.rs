use std::{path::PathBuf, process};

use clap::Parser;
use facets::{CategoryCatalog, Config};
use tracing::instrument;

use super::terminal::Colorize;

#[derive(Debug, Parser)]
#[command(about = "Check that a catalog file is well-formed")]
pub struct Validate {
    /// The catalog file (TOML, YAML or JSON)
    catalog: PathBuf,

    /// Suppress all output except errors
    #[arg(long, short)]
    quiet: bool,
}

impl Validate {
    #[instrument(level = "debug", skip(config))]
    pub fn run(self, config: &Config) -> anyhow::Result<()> {
        match CategoryCatalog::load(&self.catalog, config.id_scope) {
            Ok(catalog) => {
                if !self.quiet {
                    println!(
                        "{} {}: {} categories, {} options",
                        "✓".success(),
                        self.catalog.display(),
                        catalog.len(),
                        catalog.option_count()
                    );
                }
                Ok(())
            }
            Err(e) => {
                eprintln!("{} {e}", "✗".warning());
                process::exit(1);
            }
        }
    }
}
