use std::path::PathBuf;

use clap::Parser;
use facets::{CategoryCatalog, Config, FilterCategory};
use tracing::instrument;

use super::{
    OutputFormat,
    terminal::{Colorize, section_marker},
};

#[derive(Debug, Parser)]
#[command(about = "Print the categories and options of a catalog")]
pub struct Show {
    /// The catalog file (TOML, YAML or JSON)
    catalog: PathBuf,

    /// Output format (table, json)
    #[arg(long, value_name = "FORMAT", default_value = "table")]
    output: OutputFormat,
}

impl Show {
    #[instrument(level = "debug", skip(config))]
    pub fn run(self, config: &Config) -> anyhow::Result<()> {
        let catalog = CategoryCatalog::load(&self.catalog, config.id_scope)?;

        match self.output {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(catalog.categories())?);
            }
            OutputFormat::Table => {
                if catalog.is_empty() {
                    println!("Catalog has no categories.");
                }
                for category in catalog.categories() {
                    print_category(category);
                }
            }
        }

        Ok(())
    }
}

fn print_category(category: &FilterCategory) {
    println!(
        "{} {} {}",
        section_marker(category.expanded_by_default()),
        category.label().heading(),
        format!("({})", category.key()).dim()
    );

    let width = category
        .options()
        .iter()
        .map(|option| option.id().len())
        .max()
        .unwrap_or(0);

    for option in category.options() {
        let count = option
            .count()
            .map(|count| format!(" ({count})").dim())
            .unwrap_or_default();
        println!("    {:<width$}  {}{count}", option.id().as_str(), option.label());
    }
}
