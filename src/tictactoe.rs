//! Tic-Tac-Toe board model and state enumeration

pub mod board;
pub mod enumeration;
pub mod symmetry;

pub use board::{BoardState, Cell, Player};
pub use enumeration::{CanonicalGraph, enumerate_canonical_graph};
pub use symmetry::D4Transform;
