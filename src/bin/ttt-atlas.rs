//! ttt-atlas CLI - Draw the minimax-valued tic-tac-toe state graph
//!
//! - Generating the symmetry-reduced state listing
//! - Analyzing game values per ply
//! - Rendering the banded TikZ poster

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ttt-atlas")]
#[command(version, about = "Minimax atlas of tic-tac-toe positions", long_about = None)]
struct Cli {
    /// Log pipeline stages to stderr (RUST_LOG takes precedence)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a state graph as a TikZ document
    Render(ttt_atlas::cli::commands::render::RenderArgs),

    /// Write the canonical state listing
    Generate(ttt_atlas::cli::commands::generate::GenerateArgs),

    /// Summarize game values per ply
    Analyze(ttt_atlas::cli::commands::analyze::AnalyzeArgs),
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Render(args) => ttt_atlas::cli::commands::render::execute(args),
        Commands::Generate(args) => ttt_atlas::cli::commands::generate::execute(args),
        Commands::Analyze(args) => ttt_atlas::cli::commands::analyze::execute(args),
    }
}
