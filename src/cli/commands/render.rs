//! Render command - Turn a graph listing into a TikZ document

use std::{fs, io::Write, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::ProgressBar;
use tracing::info;

use crate::{
    cli::{config::ConfigArgs, output::create_spinner},
    config::AtlasConfig,
    pipeline::{Atlas, jitter_rng},
};

#[derive(Parser, Debug)]
#[command(about = "Evaluate a state graph and draw it as a banded TikZ diagram")]
pub struct RenderArgs {
    /// Graph listing: board lines followed by `(i,j)` edge lines
    pub input: PathBuf,

    /// Output .tex file (stdout when omitted)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub config: ConfigArgs,

    /// Show a spinner while the pipeline runs
    #[arg(long)]
    pub progress: bool,
}

/// Build and render the atlas; the spinner is cleared whether or not a
/// stage fails.
fn draw(
    input: &str,
    config: &AtlasConfig,
    spinner: Option<ProgressBar>,
) -> crate::Result<(Atlas, String)> {
    let result = Atlas::build(input, config).and_then(|atlas| {
        if let Some(pb) = &spinner {
            pb.set_message("Drawing...");
        }
        let document = atlas.render(&mut jitter_rng(config))?;
        Ok((atlas, document))
    });

    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }
    result
}

pub fn execute(args: RenderArgs) -> Result<()> {
    let config = args.config.resolve()?;
    let input = fs::read_to_string(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;

    let spinner = if args.progress {
        Some(create_spinner("Evaluating state graph...")?)
    } else {
        None
    };
    let (atlas, document) = draw(&input, &config, spinner)
        .with_context(|| format!("rendering {}", args.input.display()))?;

    // nothing is written until the whole document exists
    match &args.output {
        Some(path) => {
            fs::write(path, &document).with_context(|| format!("writing {}", path.display()))?;
            info!(path = %path.display(), boards = atlas.graph.len(), "wrote atlas");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(document.as_bytes())
                .context("writing to stdout")?;
        }
    }

    Ok(())
}
