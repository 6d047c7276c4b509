//! Analyze command - Report game values without drawing anything

use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    cli::{
        config::ConfigArgs,
        output::{print_kv, print_section, print_summary},
    },
    pipeline::Atlas,
};

#[derive(Parser, Debug)]
#[command(about = "Evaluate a state graph and summarize outcomes per ply")]
pub struct AnalyzeArgs {
    /// Graph listing: board lines followed by `(i,j)` edge lines
    pub input: PathBuf,

    #[command(flatten)]
    pub config: ConfigArgs,

    /// Export the summary as JSON
    #[arg(long)]
    pub export: Option<PathBuf>,
}

pub fn execute(args: AnalyzeArgs) -> Result<()> {
    let config = args.config.resolve()?;
    let input = fs::read_to_string(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;
    let atlas = Atlas::build(&input, &config)
        .with_context(|| format!("analyzing {}", args.input.display()))?;
    let summary = atlas.summary();

    print_section("State Graph Analysis");
    print_kv("Input", &args.input.display().to_string());
    print_summary(&summary);

    if let Some(path) = &args.export {
        let json = serde_json::to_string_pretty(&summary)?;
        fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
        println!("\nExported summary to {}", path.display());
    }

    Ok(())
}
