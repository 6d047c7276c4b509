//! Enumeration of the canonical tic-tac-toe state graph
//!
//! Produces the board/edge listing consumed by [`crate::graph::GameGraph::parse`]:
//! every position reachable from the empty board with X to move, collapsed
//! under D4 symmetry, plus every distinct canonical move between them.

use std::{
    collections::{BTreeSet, HashMap, VecDeque},
    io::Write,
};

use tracing::{debug, info};

use super::BoardState;

/// Canonical positions and the moves between them
#[derive(Debug, Clone)]
pub struct CanonicalGraph {
    /// Canonical boards in breadth-first discovery order (non-decreasing ply)
    pub states: Vec<BoardState>,
    /// Move edges as 0-based `(from, to)` indices into `states`
    pub edges: Vec<(usize, usize)>,
}

impl CanonicalGraph {
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Write the graph in the input format: one board line per state,
    /// then one `(i,j)` line per edge with 1-based indices.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> crate::Result<()> {
        for state in &self.states {
            writeln!(writer, "{}", state.label())?;
        }
        for &(from, to) in &self.edges {
            writeln!(writer, "({},{})", from + 1, to + 1)?;
        }
        Ok(())
    }

    /// Render the graph in the input format as a string
    pub fn to_input_string(&self) -> String {
        let mut out = String::new();
        for state in &self.states {
            out.push_str(&state.label());
            out.push('\n');
        }
        for &(from, to) in &self.edges {
            out.push_str(&format!("({},{})\n", from + 1, to + 1));
        }
        out
    }
}

/// Build the canonical state graph reachable from the empty board.
///
/// Terminal positions (a completed line or a full board) are not expanded.
pub fn enumerate_canonical_graph() -> CanonicalGraph {
    let root = BoardState::new().canonical();
    let mut states = vec![root];
    let mut index_of: HashMap<String, usize> = HashMap::from([(root.label(), 0)]);
    let mut edges = BTreeSet::new();
    let mut queue = VecDeque::from([0usize]);

    while let Some(idx) = queue.pop_front() {
        let state = states[idx];
        for pos in state.legal_moves() {
            let Ok(next) = state.make_move(pos) else {
                continue;
            };
            let canonical = next.canonical();
            let label = canonical.label();
            let next_idx = match index_of.get(&label) {
                Some(&existing) => existing,
                None => {
                    let new_idx = states.len();
                    states.push(canonical);
                    index_of.insert(label, new_idx);
                    queue.push_back(new_idx);
                    new_idx
                }
            };
            edges.insert((idx, next_idx));
        }
    }

    debug!(states = states.len(), "canonical states discovered");
    let graph = CanonicalGraph {
        states,
        edges: edges.into_iter().collect(),
    };
    info!(
        states = graph.state_count(),
        edges = graph.edge_count(),
        "enumerated canonical state graph"
    );
    graph
}
