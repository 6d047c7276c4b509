//! Shared fixtures for the integration tests.

use ttt_atlas::{GameGraph, GraphShape, tictactoe::enumerate_canonical_graph};

/// The full symmetry-reduced listing as text
pub fn canonical_listing() -> String {
    enumerate_canonical_graph().to_input_string()
}

/// The full symmetry-reduced listing, loaded
#[allow(dead_code)]
pub fn canonical_graph() -> GameGraph {
    GameGraph::parse(&canonical_listing(), &GraphShape::default())
        .expect("generated listing should load")
}
