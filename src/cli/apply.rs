use std::{fmt, path::PathBuf, str::FromStr};

use anyhow::Context;
use clap::Parser;
use facets::{Config, FilterEngine, SelectionChange};
use tracing::instrument;

use super::{
    OutputFormat,
    terminal::{Colorize, section_marker},
};

/// A single user action, as written on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Action {
    Select(String),
    Deselect(String),
    Section(String),
    ClearAll,
    ClearCategory(String),
    Open,
    Close,
}

impl FromStr for Action {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (verb, argument) = s
            .split_once(':')
            .map_or((s, None), |(verb, argument)| (verb, Some(argument)));

        let required = |argument: Option<&str>| match argument {
            Some(argument) if !argument.is_empty() => Ok(argument.to_string()),
            _ => Err(format!("action '{verb}' needs an argument, e.g. '{verb}:<id>'")),
        };

        match verb {
            "select" => required(argument).map(Self::Select),
            "deselect" => required(argument).map(Self::Deselect),
            "section" => required(argument).map(Self::Section),
            "clear" if argument.is_none() => Ok(Self::ClearAll),
            "clear" => required(argument).map(Self::ClearCategory),
            "open" if argument.is_none() => Ok(Self::Open),
            "close" if argument.is_none() => Ok(Self::Close),
            _ => Err(format!(
                "unknown action '{s}' (expected select:<id>, deselect:<id>, section:<key>, \
                 clear, clear:<key>, open or close)"
            )),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Select(id) => write!(f, "select:{id}"),
            Self::Deselect(id) => write!(f, "deselect:{id}"),
            Self::Section(key) => write!(f, "section:{key}"),
            Self::ClearAll => write!(f, "clear"),
            Self::ClearCategory(key) => write!(f, "clear:{key}"),
            Self::Open => write!(f, "open"),
            Self::Close => write!(f, "close"),
        }
    }
}

impl Action {
    fn apply(&self, engine: &mut FilterEngine) -> Result<(), facets::FilterError> {
        match self {
            Self::Select(id) => engine.toggle_option(id, true).map(drop),
            Self::Deselect(id) => engine.toggle_option(id, false).map(drop),
            Self::Section(key) => engine.toggle_section(key).map(drop),
            Self::ClearAll => {
                engine.clear_all();
                Ok(())
            }
            Self::ClearCategory(key) => engine.clear_category(key).map(drop),
            Self::Open => {
                engine.set_panel_open(true);
                Ok(())
            }
            Self::Close => {
                engine.set_panel_open(false);
                Ok(())
            }
        }
    }
}

fn parse_action(s: &str) -> Result<Action, String> {
    s.parse()
}

#[derive(Debug, Parser)]
#[command(about = "Run filter actions against a catalog and print the resulting state")]
pub struct Apply {
    /// The catalog file (TOML, YAML or JSON)
    catalog: PathBuf,

    /// Actions to apply, in order.
    ///
    /// One of: select:<id>, deselect:<id>, section:<key>, clear, clear:<key>,
    /// open, close
    #[arg(value_parser = parse_action)]
    actions: Vec<Action>,

    /// Output format (table, json)
    #[arg(long, value_name = "FORMAT", default_value = "table")]
    output: OutputFormat,
}

impl Apply {
    #[instrument(level = "debug", skip(config))]
    pub fn run(self, config: &Config) -> anyhow::Result<()> {
        let mut engine = FilterEngine::load(&self.catalog, config)?;

        engine.subscribe(|change: &SelectionChange| {
            tracing::info!(
                "Selection now {} option(s): {}",
                change.total_selected,
                change
                    .selected
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ")
            );
        });

        for action in &self.actions {
            action
                .apply(&mut engine)
                .with_context(|| format!("failed to apply '{action}'"))?;
        }

        match self.output {
            OutputFormat::Json => {
                let output = serde_json::json!({
                    "state": engine.snapshot(),
                    "query": engine.selection_query(),
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
            OutputFormat::Table => print_state(&engine),
        }

        Ok(())
    }
}

fn print_state(engine: &FilterEngine) {
    let panel = if engine.is_panel_open() { "open" } else { "closed" };
    println!("{} {panel}", "Panel:".heading());

    for category in engine.catalog().categories() {
        let expanded = engine.expansion().get(category.key()).unwrap_or(false);
        let selected: Vec<_> = category
            .options()
            .iter()
            .filter(|option| engine.selection().contains(option.id()))
            .map(|option| option.label().success())
            .collect();

        let summary = if selected.is_empty() {
            "-".dim()
        } else {
            selected.join(", ")
        };
        println!(
            "{} {}: {summary}",
            section_marker(expanded),
            category.label().heading()
        );
    }

    if engine.has_active_selection() {
        println!("{} filter(s) active", engine.total_selected_count());
    } else {
        println!("{}", "No filters active".dim());
    }
}
