//! # Pattern Recipe
//!
//! Command-line runner for the pattern catalog.
//!
//! - `pattern-recipe` or `pattern-recipe all [--category <family>]` runs every demo.
//! - `pattern-recipe run <NAME>...` runs the named demos without banners.
//! - `pattern-recipe list [--format text|json]` prints the catalog.

use clap::{Parser, Subcommand, ValueEnum};
use pattern_recipe::framework::{Category, DemoError, IoConsole};
use pattern_recipe::lifecycle::{setup_tracing, PatternSystem};
use std::io::Write;
use std::process::ExitCode;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "pattern-recipe")]
#[command(about = "Runnable catalog of classic design patterns", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run every demo in catalog order
    All {
        /// Only run demos of this family
        #[arg(short, long)]
        category: Option<CategoryArg>,
    },

    /// Run the named demos
    Run {
        /// Demo names (e.g. state, chain-of-responsibility)
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// List the catalog
    List {
        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: FormatArg,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum CategoryArg {
    Behavioral,
    Creational,
    Structural,
}

impl From<CategoryArg> for Category {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Behavioral => Category::Behavioral,
            CategoryArg::Creational => Category::Creational,
            CategoryArg::Structural => Category::Structural,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Text,
    Json,
}

fn main() -> ExitCode {
    setup_tracing();

    let cli = Cli::parse();
    match execute(cli.command.unwrap_or(Commands::All { category: None })) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Run failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn execute(command: Commands) -> Result<(), DemoError> {
    let system = PatternSystem::new();
    let mut out = IoConsole::stdout();

    match command {
        Commands::All { category } => {
            let count = system.run_all(&mut out, category.map(Category::from))?;
            info!(count, "All demos finished");
        }
        Commands::Run { names } => {
            system.run_many(names.as_slice(), &mut out)?;
        }
        Commands::List { format } => {
            let infos = system.catalog().infos();
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            match format {
                FormatArg::Text => {
                    for info in &infos {
                        writeln!(handle, "{:<24} {:<11} {}", info.name, info.category, info.summary)?;
                    }
                }
                FormatArg::Json => {
                    let json = serde_json::to_string_pretty(&infos).map_err(std::io::Error::from)?;
                    writeln!(handle, "{json}")?;
                }
            }
        }
    }

    out.flush()
}
