//! Layered, outcome-banded placement of board glyphs
//!
//! Plies stack top to bottom with the empty board on top. Inside a ply the
//! page is split into three bands (O wins, draw, X wins) and each band's
//! boards are spread evenly after sorting them by where their same-outcome
//! parents sit, so lines of equal-valued play run roughly vertically.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    config::AtlasConfig,
    graph::GameGraph,
    minimax::{Evaluation, Outcome, band_index},
};

/// Highest ply on a 3x3 board
pub const MAX_PLY: usize = 9;

/// Centre and side length of one board glyph, in millimetres
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub x: f64,
    pub y: f64,
    pub size: f64,
}

impl Placement {
    pub fn top(&self) -> f64 {
        self.y + self.size / 2.0
    }

    pub fn bottom(&self) -> f64 {
        self.y - self.size / 2.0
    }

    pub fn left(&self) -> f64 {
        self.x - self.size / 2.0
    }
}

/// Placement per vertex, indexed like the graph
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    placements: Vec<Placement>,
    bands: [(f64, f64); 3],
}

impl Layout {
    pub fn placement(&self, v: usize) -> Placement {
        self.placements[v]
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// `(start, end)` x-range of each band, in `Outcome::ALL` order
    pub fn band_extents(&self) -> [(f64, f64); 3] {
        self.bands
    }

    pub fn band_extent(&self, outcome: Outcome) -> (f64, f64) {
        self.bands[band_index(outcome)]
    }
}

/// Vertical centre of a ply's layer
pub fn layer_y(ply: usize, height: f64) -> f64 {
    (MAX_PLY + 1 - ply) as f64 * height / (MAX_PLY + 2) as f64
}

/// Key used when a board has no children or no same-outcome parent:
/// O wins sort to the far left, X wins to the far right, draws to the centre.
fn sentinel_key(outcome: Outcome, page_width: f64) -> f64 {
    match outcome {
        Outcome::OWins => f64::NEG_INFINITY,
        Outcome::Draw => page_width / 2.0,
        Outcome::XWins => f64::INFINITY,
    }
}

fn sort_key(
    v: usize,
    graph: &GameGraph,
    evaluation: &Evaluation,
    placements: &[Placement],
    page_width: f64,
) -> f64 {
    let outcome = evaluation.outcome(v);
    if graph.children(v).is_empty() {
        return sentinel_key(outcome, page_width);
    }

    let parents: Vec<f64> = graph
        .parents(v)
        .iter()
        .filter(|&&p| evaluation.outcome(p) == outcome)
        .map(|&p| placements[p].x)
        .collect();
    if parents.is_empty() {
        sentinel_key(outcome, page_width)
    } else {
        parents.iter().sum::<f64>() / parents.len() as f64
    }
}

/// Assign a centre and size to every vertex.
///
/// Layers are placed from ply 0 downwards so each board's parents already
/// have positions when its sort key is computed.
pub fn compute_layout(graph: &GameGraph, evaluation: &Evaluation, config: &AtlasConfig) -> Layout {
    let width = config.page.width_mm;
    let height = config.page.height_mm;
    let mut placements = vec![Placement::default(); graph.len()];

    let bands = Outcome::ALL.map(|outcome| {
        let start = width * config.bands.offset(outcome);
        (start, start + width * config.bands.fraction(outcome))
    });

    for ply in 0..=MAX_PLY {
        let layer: Vec<usize> = graph.layer(ply).collect();
        if layer.is_empty() {
            continue;
        }
        let y = layer_y(ply, height);

        for outcome in Outcome::ALL {
            let mut group: Vec<(f64, usize)> = layer
                .iter()
                .filter(|&&v| evaluation.outcome(v) == outcome)
                .map(|&v| (sort_key(v, graph, evaluation, &placements, width), v))
                .collect();
            if group.is_empty() {
                continue;
            }
            group.sort_by(|a, b| a.0.total_cmp(&b.0));

            let (start, end) = bands[band_index(outcome)];
            let band_width = end - start;
            let count = group.len() as f64;
            let dx = band_width / (count + 1.0);
            let size = config
                .max_node_size_mm
                .min(band_width / (config.node_spacing * count));

            let mut x = start + dx;
            for (_, v) in group {
                placements[v] = Placement { x, y, size };
                x += dx;
            }
            debug!(ply, %outcome, boards = count, size, "placed band");
        }
    }

    Layout { placements, bands }
}
