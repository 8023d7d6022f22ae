//! bibrec CLI - validate and inspect bibliographic records.

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

mod commands;
mod error;
mod input;
mod output;

use commands::{base_field, date, fields, template, types, validate};

#[derive(Parser)]
#[command(name = "bibrec")]
#[command(about = "Validate and inspect bibliographic item, collection and search records")]
struct Cli {
    /// Log debug events to stderr (overridden by RUST_LOG)
    #[arg(long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

/// Record kind accepted by `validate`.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum RecordKind {
    /// Bibliographic item
    Item,
    /// Collection
    Collection,
    /// Saved search
    Search,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate records from a JSON file (a record or an array of records)
    Validate {
        /// Kind of record
        #[arg(value_enum)]
        kind: RecordKind,
        /// Input JSON file (or stdin if not provided)
        input: Option<String>,
        /// Exit with code 2 if any record is degraded
        #[arg(long)]
        strict: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
        /// Do not report unrecognized fields (they are still preserved)
        #[arg(long)]
        no_unknown_warnings: bool,
    },
    /// Print a blank item of the given type
    Template {
        /// Item type tag, e.g. journalArticle
        item_type: String,
    },
    /// Parse or format bibliographic dates
    Date {
        #[command(subcommand)]
        action: DateAction,
    },
    /// List the fields and creator roles of an item type
    Fields {
        /// Item type tag
        item_type: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the fields implementing a base field across item types
    BaseField {
        /// Base field name, e.g. publisher
        base_field: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List every item type
    Types {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
enum DateAction {
    /// Parse free-form text into its structured form
    Parse {
        /// Date text, e.g. "circa 1923"
        text: String,
    },
    /// Format a structured date (JSON) back to display text
    Format {
        /// Structured date, e.g. '{"dateParts":[[1923]],"circa":true}'
        value: String,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Validate {
            kind,
            input,
            strict,
            json,
            no_unknown_warnings,
        } => validate::run(kind, input, strict, json, no_unknown_warnings),
        Commands::Template { item_type } => template::run(item_type),
        Commands::Date { action } => match action {
            DateAction::Parse { text } => date::parse(text),
            DateAction::Format { value } => date::format(value),
        },
        Commands::Fields { item_type, json } => fields::run(item_type, json),
        Commands::BaseField { base_field, json } => base_field::run(base_field, json),
        Commands::Types { json } => types::run(json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
