use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("unknown neighbourhood rule: {0:?} (expected Moore or Von_Neumann)")]
    UnknownNeighbourhood(String),

    #[error("unknown cell fate rule: {0:?} (expected game_of_life or day_and_night)")]
    UnknownFate(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("grid must be at least 1x1, got {height}x{width}")]
    EmptyGrid { height: usize, width: usize },

    #[error("invalid grid text: {0}")]
    InvalidGridText(String),

    #[error("pattern is {height}x{width} but the board is only {board_size}x{board_size}")]
    PatternTooLarge {
        height: usize,
        width: usize,
        board_size: usize,
    },

    #[error("pattern row {row} has {found} cells, expected {expected}")]
    RaggedPattern {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("pattern contains no cells")]
    EmptyPattern,

    #[error("pattern cell at row {row}, column {col} is not a number: {token:?}")]
    InvalidCell {
        row: usize,
        col: usize,
        token: String,
    },

    #[error("failed to read pattern {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
