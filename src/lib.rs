//! Minimax atlas of tic-tac-toe positions
//!
//! This crate provides:
//! - A board model with symmetry reduction and canonical state enumeration
//! - A loader for board/edge listings into a ply-sorted state graph
//! - Backward-induction game values for every position
//! - An outcome-banded, layered layout and its TikZ rendering

pub mod cli;
pub mod config;
pub mod error;
pub mod graph;
pub mod layout;
pub mod minimax;
pub mod pipeline;
pub mod render;
pub mod tictactoe;

pub use config::AtlasConfig;
pub use error::{Error, Result};
pub use graph::{GameGraph, GraphShape};
pub use minimax::{Evaluation, Outcome, evaluate};
pub use pipeline::{Atlas, AtlasSummary, render_document};
