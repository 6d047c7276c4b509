//! Error types for the atlas crate

use thiserror::Error;

/// Main error type for the atlas crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid move: position {position} is already occupied")]
    InvalidMove { position: usize },

    #[error("board line has wrong length: expected {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("expected {expected} board lines, found {got}")]
    MissingBoardLines { expected: usize, got: usize },

    #[error("expected {expected} edge lines, found {got}")]
    MissingEdgeLines { expected: usize, got: usize },

    #[error("malformed edge on line {line}: '{content}' (expected '(i,j)')")]
    MalformedEdge { line: usize, content: String },

    #[error("edge on line {line} references board {index}, but only {vertex_count} boards exist")]
    EdgeIndexOutOfRange {
        line: usize,
        index: usize,
        vertex_count: usize,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("failed to format drawing commands: {0}")]
    Format(#[from] std::fmt::Error),

    #[error("progress bar template error: {message}")]
    ProgressBarTemplate { message: String },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
