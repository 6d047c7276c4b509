//! Load → evaluate → lay out → render, in one pass
//!
//! Each stage's result is kept separately so later stages (and tests) can
//! read earlier ones without any stage mutating another's output.

use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    Result,
    config::AtlasConfig,
    graph::GameGraph,
    layout::{Layout, compute_layout},
    minimax::{Evaluation, Outcome, evaluate},
    render::{TikzRenderer, count_edge_classes},
};

/// Outcome tallies for one ply
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlySummary {
    pub ply: usize,
    pub o_wins: usize,
    pub draws: usize,
    pub x_wins: usize,
}

/// Headline numbers for an evaluated graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtlasSummary {
    pub vertices: usize,
    pub edges: usize,
    pub core_edges: usize,
    pub informational_edges: usize,
    pub root_outcome: Option<Outcome>,
    pub plies: Vec<PlySummary>,
}

/// A loaded, evaluated and laid-out graph, ready to render
#[derive(Debug, Clone)]
pub struct Atlas {
    pub graph: GameGraph,
    pub evaluation: Evaluation,
    pub layout: Layout,
    config: AtlasConfig,
}

impl Atlas {
    /// Run every stage except rendering.
    pub fn build(input: &str, config: &AtlasConfig) -> Result<Self> {
        config.validate()?;
        let graph = GameGraph::parse(input, &config.graph)?;
        let evaluation = evaluate(&graph);
        let layout = compute_layout(&graph, &evaluation, config);
        Ok(Self {
            graph,
            evaluation,
            layout,
            config: config.clone(),
        })
    }

    pub fn config(&self) -> &AtlasConfig {
        &self.config
    }

    /// Produce the TikZ document using `rng` for edge jitter.
    pub fn render<R: Rng>(&self, rng: &mut R) -> Result<String> {
        TikzRenderer::new(&self.graph, &self.evaluation, &self.layout, &self.config).render(rng)
    }

    pub fn summary(&self) -> AtlasSummary {
        let (core_edges, informational_edges) = count_edge_classes(&self.graph, &self.evaluation);
        let plies = self
            .evaluation
            .counts_by_ply(&self.graph)
            .iter()
            .enumerate()
            .filter(|(_, counts)| counts.iter().sum::<usize>() > 0)
            .map(|(ply, &[o_wins, draws, x_wins])| PlySummary {
                ply,
                o_wins,
                draws,
                x_wins,
            })
            .collect();

        AtlasSummary {
            vertices: self.graph.len(),
            edges: self.graph.edge_count(),
            core_edges,
            informational_edges,
            root_outcome: self.evaluation.root_outcome(),
            plies,
        }
    }
}

/// Random source for edge jitter: seeded when the config names a seed.
pub fn jitter_rng(config: &AtlasConfig) -> StdRng {
    match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Run the whole pipeline and return the finished document.
///
/// Nothing is returned unless every stage succeeds, so callers never write
/// a partial diagram.
pub fn render_document(input: &str, config: &AtlasConfig) -> Result<String> {
    let atlas = Atlas::build(input, config)?;
    let mut rng = jitter_rng(config);
    let document = atlas.render(&mut rng)?;
    info!(
        seeded = config.seed.is_some(),
        bytes = document.len(),
        "atlas document ready"
    );
    Ok(document)
}
