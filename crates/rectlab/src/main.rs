mod commands;
mod output;

use clap::{Parser, Subcommand};
use log::LevelFilter;

use rectlab_core::config::{self, OutputFormat};
use rectlab_core::logging::LogConfig;

#[derive(Parser)]
#[command(
    name = "rectlab",
    version,
    about = "Inspect how axis-aligned rectangles overlap, contain and touch"
)]
struct Cli {
    /// Print reports as JSON regardless of the configured format
    #[arg(long, global = true)]
    json: bool,
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the default configuration and scene files
    Init,
    /// Compare two rectangles given as x,y,width,height
    Pair(commands::pair::PairArgs),
    /// Evaluate scene rectangles against each other
    Evaluate(commands::evaluate::EvaluateArgs),
    /// List the rectangles of a scene
    List(commands::scene::SceneArgs),
    /// Validate the configuration and scene files
    Check,
}

fn main() {
    let cli = Cli::parse();
    let config = config::load();
    init_logging(&config.logging, cli.verbose);

    let mut output = config.output.clone();
    if cli.json {
        output.format = OutputFormat::Json;
    }

    match cli.command {
        Commands::Init => commands::init::execute(),
        Commands::Pair(args) => commands::pair::execute(&args, &output),
        Commands::Evaluate(args) => commands::evaluate::execute(&args, &output),
        Commands::List(args) => commands::list::execute(&args, &output),
        Commands::Check => commands::check::execute(),
    }
}

/// Installs the stderr logger. `RUST_LOG` overrides the configured level.
fn init_logging(config: &LogConfig, verbose: bool) {
    let filter = if verbose {
        LevelFilter::Debug
    } else {
        config.filter()
    };
    env_logger::Builder::new()
        .filter_level(filter)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}
