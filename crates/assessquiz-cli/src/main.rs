//! assessquiz CLI: the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "assessquiz",
    version,
    about = "Clinical assessment selection quiz"
)]
struct Cli {
    /// Catalog TOML file or directory (defaults to the built-in dataset)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List cases
    Cases,

    /// List assessment items grouped by category
    Items,

    /// Print the answer key of a case
    Key {
        /// Case identifier
        #[arg(long)]
        case: String,
    },

    /// Score a selection against a case
    Score {
        /// Case identifier
        #[arg(long)]
        case: String,

        /// Selected item identifiers (comma-separated)
        #[arg(long, value_delimiter = ',')]
        select: Vec<String>,

        /// Output format: text, json, markdown, html
        #[arg(long, default_value = "text")]
        format: String,

        /// Write the report to this file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,

        /// Also save the JSON report under the configured output directory
        #[arg(long)]
        save: bool,
    },

    /// Re-render a saved JSON score report
    Report {
        /// Report JSON written by `score --format json` or `score --save`
        #[arg(long)]
        input: PathBuf,

        /// Output format: text, json, markdown, html
        #[arg(long, default_value = "text")]
        format: String,

        /// Write the report to this file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Play an interactive round on stdin
    Play {
        /// Case to start with
        #[arg(long)]
        case: Option<String>,
    },

    /// Validate a catalog
    Validate,

    /// Create starter config and example catalog
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("assessquiz=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();
    let source = commands::CatalogSource {
        catalog: cli.catalog,
        config: cli.config,
    };

    let result = match cli.command {
        Commands::Cases => commands::cases::execute(&source),
        Commands::Items => commands::items::execute(&source),
        Commands::Key { case } => commands::key::execute(&source, &case),
        Commands::Score {
            case,
            select,
            format,
            output,
            save,
        } => commands::score::execute(&source, &case, &select, &format, output, save),
        Commands::Report {
            input,
            format,
            output,
        } => commands::report::execute(input, &format, output),
        Commands::Play { case } => commands::play::execute(&source, case),
        Commands::Validate => commands::validate::execute(&source),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
