//! Command-line interface for the atlas tool
//!
//! `generate` writes the canonical state listing, `analyze` reports game
//! values per ply, and `render` turns a listing into a TikZ diagram.

pub mod commands;
pub mod config;
pub mod output;
