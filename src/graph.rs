//! Arena-backed state graph
//!
//! Vertices live in one flat array sorted by ply; edges are index lists.
//! Parent lists are a reverse index derived after all children are known.

pub mod loader;

pub use loader::GraphShape;

use crate::tictactoe::BoardState;

/// One board position in the graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex {
    pub state: BoardState,
    /// 0-based position of the board line in the input
    pub original_index: usize,
}

impl Vertex {
    pub fn ply(&self) -> usize {
        self.state.ply()
    }

    pub fn label(&self) -> String {
        self.state.label()
    }
}

/// Board positions sorted by ascending ply, with move edges between them
#[derive(Debug, Clone, Default)]
pub struct GameGraph {
    vertices: Vec<Vertex>,
    children: Vec<Vec<usize>>,
    parents: Vec<Vec<usize>>,
    sorted_position: Vec<usize>,
}

impl GameGraph {
    pub(crate) fn from_sorted(
        vertices: Vec<Vertex>,
        children: Vec<Vec<usize>>,
        sorted_position: Vec<usize>,
    ) -> Self {
        let mut parents = vec![Vec::new(); vertices.len()];
        for (u, kids) in children.iter().enumerate() {
            for &w in kids {
                parents[w].push(u);
            }
        }
        Self {
            vertices,
            children,
            parents,
            sorted_position,
        }
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn vertex(&self, v: usize) -> &Vertex {
        &self.vertices[v]
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn ply(&self, v: usize) -> usize {
        self.vertices[v].ply()
    }

    pub fn children(&self, v: usize) -> &[usize] {
        &self.children[v]
    }

    pub fn parents(&self, v: usize) -> &[usize] {
        &self.parents[v]
    }

    /// Vertices of one ply, in sorted order
    pub fn layer(&self, ply: usize) -> impl Iterator<Item = usize> + '_ {
        (0..self.len()).filter(move |&v| self.ply(v) == ply)
    }

    /// All `(parent, child)` edges, grouped by parent in sorted order
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.children
            .iter()
            .enumerate()
            .flat_map(|(u, kids)| kids.iter().map(move |&w| (u, w)))
    }

    pub fn edge_count(&self) -> usize {
        self.children.iter().map(Vec::len).sum()
    }

    /// Sorted position of the board that appeared at `original` in the input
    pub fn sorted_position(&self, original: usize) -> Option<usize> {
        self.sorted_position.get(original).copied()
    }

    /// Index of the first vertex with the lowest ply, if any
    pub fn root(&self) -> Option<usize> {
        if self.is_empty() { None } else { Some(0) }
    }
}
