//! Generate command - Write the canonical tic-tac-toe state listing

use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    cli::output::{format_number, print_kv, print_section},
    tictactoe::enumerate_canonical_graph,
};

#[derive(Parser, Debug)]
#[command(about = "Enumerate symmetry-reduced positions and write them as graph input")]
pub struct GenerateArgs {
    /// Output file (stdout when omitted)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

pub fn execute(args: GenerateArgs) -> Result<()> {
    let graph = enumerate_canonical_graph();

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            graph.write_to(&mut writer)?;
            writer
                .flush()
                .with_context(|| format!("writing {}", path.display()))?;

            print_section("Canonical State Graph");
            print_kv("States", &format_number(graph.state_count()));
            print_kv("Moves", &format_number(graph.edge_count()));
            print_kv("Written to", &path.display().to_string());
        }
        None => {
            let stdout = io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            graph.write_to(&mut writer)?;
            writer.flush().context("writing to stdout")?;
        }
    }

    Ok(())
}
