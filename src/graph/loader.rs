//! Parser for the board/edge listing
//!
//! The input holds N board lines followed by M edge lines of the form
//! `(i,j)`, where `i` and `j` are 1-based board line numbers.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::{GameGraph, Vertex};
use crate::{Error, Result, tictactoe::BoardState};

/// How many board and edge lines the input holds.
///
/// `None` infers the count: board lines run up to the first line starting
/// with `(`, and every remaining non-blank line is an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GraphShape {
    pub vertices: Option<usize>,
    pub edges: Option<usize>,
}

impl GraphShape {
    /// Counts of the full canonical tic-tac-toe listing
    pub fn canonical() -> Self {
        Self::pinned(765, 2096)
    }

    pub fn pinned(vertices: usize, edges: usize) -> Self {
        Self {
            vertices: Some(vertices),
            edges: Some(edges),
        }
    }

    fn split<'a>(
        &self,
        lines: &'a [(usize, &'a str)],
    ) -> Result<(&'a [(usize, &'a str)], Vec<(usize, &'a str)>)> {
        let (boards, rest): (&[(usize, &str)], Vec<(usize, &str)>) = match self.vertices {
            Some(n) => {
                if lines.len() < n {
                    return Err(Error::MissingBoardLines {
                        expected: n,
                        got: lines.len(),
                    });
                }
                (&lines[..n], lines[n..].to_vec())
            }
            None => {
                let end = lines
                    .iter()
                    .position(|(_, text)| text.trim_start().starts_with('('))
                    .unwrap_or(lines.len());
                let trailing = lines[..end]
                    .iter()
                    .rev()
                    .take_while(|line| is_blank(line))
                    .count();
                (&lines[..end - trailing], lines[end..].to_vec())
            }
        };

        let mut edges: Vec<(usize, &str)> = match self.edges {
            Some(_) => rest,
            None => rest.into_iter().filter(|line| !is_blank(line)).collect(),
        };
        if let Some(m) = self.edges {
            if edges.len() < m {
                return Err(Error::MissingEdgeLines {
                    expected: m,
                    got: edges.len(),
                });
            }
            edges.truncate(m);
        }

        Ok((boards, edges))
    }
}

fn is_blank(line: &(usize, &str)) -> bool {
    line.1.trim().is_empty()
}

/// Parse one `(i,j)` edge line into its 1-based endpoints
fn parse_edge(line: usize, text: &str) -> Result<(usize, usize)> {
    let malformed = || Error::MalformedEdge {
        line,
        content: text.to_string(),
    };
    let number = |digits: &str| -> Result<usize> {
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }
        digits.parse().map_err(|_| malformed())
    };

    let inner = text
        .trim()
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(malformed)?;
    let (from, to) = inner.split_once(',').ok_or_else(malformed)?;
    Ok((number(from)?, number(to)?))
}

impl GameGraph {
    /// Load a graph from its text listing.
    ///
    /// Boards are stably sorted by ply and edge endpoints remapped to the
    /// sorted positions. Each edge is stored from its lower to its higher
    /// sorted position. Cycles and same-ply edges are not detected.
    ///
    /// # Errors
    ///
    /// Any malformed board or edge line, missing lines when the shape pins
    /// the counts, or an edge index outside `1..=N`.
    pub fn parse(input: &str, shape: &GraphShape) -> Result<Self> {
        let numbered: Vec<(usize, &str)> = input
            .lines()
            .enumerate()
            .map(|(i, text)| (i + 1, text))
            .collect();
        let (board_lines, edge_lines) = shape.split(&numbered)?;

        let mut vertices = board_lines
            .iter()
            .enumerate()
            .map(|(original_index, (_, text))| {
                Ok(Vertex {
                    state: BoardState::from_label(text)?,
                    original_index,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        // stable: equal plies keep input order
        vertices.sort_by_key(Vertex::ply);
        let mut sorted_position = vec![0; vertices.len()];
        for (pos, vertex) in vertices.iter().enumerate() {
            sorted_position[vertex.original_index] = pos;
        }

        let vertex_count = vertices.len();
        let mut children = vec![Vec::new(); vertex_count];
        for &(line, text) in &edge_lines {
            let (i, j) = parse_edge(line, text)?;
            for index in [i, j] {
                if index == 0 || index > vertex_count {
                    return Err(Error::EdgeIndexOutOfRange {
                        line,
                        index,
                        vertex_count,
                    });
                }
            }
            let (mut u, mut w) = (sorted_position[i - 1], sorted_position[j - 1]);
            if u > w {
                std::mem::swap(&mut u, &mut w);
            }
            children[u].push(w);
        }
        debug!(
            boards = vertex_count,
            edges = edge_lines.len(),
            "parsed graph listing"
        );

        let graph = GameGraph::from_sorted(vertices, children, sorted_position);
        info!(
            vertices = graph.len(),
            edges = graph.edge_count(),
            "loaded state graph"
        );
        Ok(graph)
    }
}
