//! Configuration flags shared across commands

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use crate::{config::AtlasConfig, graph::GraphShape};

/// Flags that build an [`AtlasConfig`]; explicit flags override the file
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// JSON configuration file
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Random seed for edge routing (reproducible output)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Page width in millimetres
    #[arg(long)]
    pub width: Option<f64>,

    /// Page height in millimetres
    #[arg(long)]
    pub height: Option<f64>,

    /// Number of board lines in the input (inferred when omitted)
    #[arg(long)]
    pub vertices: Option<usize>,

    /// Number of edge lines in the input (inferred when omitted)
    #[arg(long)]
    pub edges: Option<usize>,
}

impl ConfigArgs {
    pub fn resolve(&self) -> Result<AtlasConfig> {
        let mut config = match &self.config {
            Some(path) => AtlasConfig::from_json_file(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => AtlasConfig::default(),
        };

        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if self.width.is_some() || self.height.is_some() {
            let width = self.width.unwrap_or(config.page.width_mm);
            let height = self.height.unwrap_or(config.page.height_mm);
            config = config.with_page(width, height);
        }
        if self.vertices.is_some() || self.edges.is_some() {
            let shape = GraphShape {
                vertices: self.vertices.or(config.graph.vertices),
                edges: self.edges.or(config.graph.edges),
            };
            config = config.with_graph_shape(shape);
        }

        config.validate()?;
        Ok(config)
    }
}
