//! `pantry`: build a shopping list from recipe files.
//!
//! ```bash
//! # One ingredient per line, file stem is the recipe id
//! pantry list pancakes.txt chili.txt
//! pantry list --json recipes/*.txt
//!
//! # Inspect how one line is parsed and keyed
//! pantry parse "2 cups flour, sifted"
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use pantry_aggregator::Aggregator;
use pantry_classifier::CategoryClassifier;
use pantry_cli::{input, render};
use pantry_core::config::{CliOverrides, DisplayUnitPolicy, PantryConfig, ParserBackend};
use pantry_core::errors::{PantryErrorCode, PantryResult};
use pantry_core::traits::IIngredientParser;
use pantry_normalizer::Normalizer;
use pantry_units::UnitTable;
use tracing::warn;

#[derive(Parser)]
#[command(name = "pantry")]
#[command(version)]
#[command(about = "Consolidate recipe ingredients into one shopping list")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (default: pantry.toml in the current directory, if present)
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Parser backend
    #[arg(long, global = true, value_enum)]
    backend: Option<BackendArg>,

    /// Log level when PANTRY_LOG is unset
    #[arg(long, global = true)]
    log_level: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Aggregate recipe files into a shopping list
    List {
        /// Recipe files, one ingredient per line
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// How each item's display unit is chosen
        #[arg(long, value_enum)]
        display_unit: Option<DisplayUnitArg>,
    },

    /// Parse one ingredient line and show its key and category
    Parse {
        /// The ingredient line, e.g. "2 cups flour, sifted"
        line: String,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum BackendArg {
    Local,
    Ollama,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum DisplayUnitArg {
    FirstSeen,
    MostCommon,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        let display_unit = match &self.command {
            Commands::List { display_unit, .. } => display_unit.map(|d| match d {
                DisplayUnitArg::FirstSeen => DisplayUnitPolicy::FirstSeen,
                DisplayUnitArg::MostCommon => DisplayUnitPolicy::MostCommon,
            }),
            Commands::Parse { .. } => None,
        };
        CliOverrides {
            parser_backend: self.backend.map(|b| match b {
                BackendArg::Local => ParserBackend::Local,
                BackendArg::Ollama => ParserBackend::Ollama,
            }),
            display_unit,
            log_level: self.log_level.clone(),
        }
    }

    fn load_config(&self) -> PantryResult<PantryConfig> {
        let overrides = self.overrides();
        let config = match &self.config {
            Some(path) => PantryConfig::load_file(path, Some(&overrides))?,
            None => PantryConfig::load(&std::env::current_dir()?, Some(&overrides))?,
        };
        Ok(config)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = cli.load_config().and_then(|config| {
        pantry_core::tracing::init_tracing_with_level(&config.observability.log_level);
        match &cli.command {
            Commands::List { files, .. } => cmd_list(&config, files, cli.json),
            Commands::Parse { line } => cmd_parse(&config, line, cli.json),
        }
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.json {
                println!("{}", serde_json::json!({ "error": e.to_string(), "code": e.error_code() }));
            } else {
                eprintln!("error [{}]: {}", e.error_code(), e);
            }
            ExitCode::FAILURE
        }
    }
}

fn cmd_list(config: &PantryConfig, files: &[PathBuf], json: bool) -> PantryResult<()> {
    let recipes = input::read_recipe_files(files)?;
    let parser = pantry_parser::build_parser(&config.parser)?;
    let aggregator = Aggregator::new(config)?;
    let list = aggregator.generate_from_lines(&parser, &recipes);
    for event in parser.drain_events() {
        warn!(component = %event.component, failure = %event.failure, fallback = %event.fallback_used, "Parser degraded");
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&list)?);
    } else {
        print!("{}", render::render_list(&list, UnitTable::standard()));
    }
    Ok(())
}

fn cmd_parse(config: &PantryConfig, line: &str, json: bool) -> PantryResult<()> {
    let parser = pantry_parser::build_parser(&config.parser)?;
    let parsed = parser.parse(line)?;
    let key = Normalizer::from_config(&config.normalizer).normalize_parsed(&parsed);
    let category = CategoryClassifier::from_config(&config.categories).classify(&key);

    if json {
        let output = serde_json::json!({
            "parsed": parsed,
            "canonical_key": key.as_str(),
            "category": category,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print!("{}", render::render_parsed(&parsed, &key, category, UnitTable::standard()));
    }
    Ok(())
}
