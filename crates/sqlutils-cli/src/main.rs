use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod output;

use commands::*;

#[derive(Parser)]
#[command(
    name = "sqlutils",
    about = "Generate Oracle-style SQL statements from column specs",
    version = "0.1.0",
    long_about = None
)]
pub struct Cli {
    /// Generator config file (JSON)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text", global = true)]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// CREATE TABLE statement
    Create(CreateArgs),

    /// INSERT statement with positional binds
    Insert(InsertArgs),

    /// MERGE (upsert) statement
    Merge(MergeArgs),

    /// TRUNCATE TABLE statement
    Truncate { table: String },

    /// Oracle date format template
    DateTpl(DateTplArgs),

    /// Fill values for missing data per column type
    FillValues(ColumnsArgs),

    /// Hours elapsed between two Unix timestamps
    Elapsed {
        /// Start timestamp in seconds
        #[arg(allow_negative_numbers = true)]
        start: f64,
        /// End timestamp in seconds (defaults to now)
        #[arg(allow_negative_numbers = true)]
        end: Option<f64>,
    },

    /// Print create/insert/merge for a sample STUDENTS table
    Demo,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
    }

    if let Err(e) = run(&cli) {
        output::error(&format!("{:#}", e));
        std::process::exit(1);
    }
    Ok(())
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = load_config(cli)?;

    match &cli.command {
        Commands::Create(args) => generate::create(args, cli),
        Commands::Insert(args) => generate::insert(args, &config, cli),
        Commands::Merge(args) => generate::merge(args, &config, cli),
        Commands::Truncate { table } => generate::truncate(table, cli),
        Commands::DateTpl(args) => generate::date_tpl(args, &config, cli),
        Commands::FillValues(args) => clean::fill_values(args, cli),
        Commands::Elapsed { start, end } => clean::elapsed(*start, *end, cli),
        Commands::Demo => generate::demo(cli),
    }
}
