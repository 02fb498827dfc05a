use std::path::PathBuf;

use crate::game::Chip;

/// Errors that reject a drop. Checked in declaration order; a rejected drop
/// leaves the board untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("game is already over")]
    GameOver,

    #[error("{0} moved last and cannot move twice in a row")]
    OutOfTurn(Chip),

    #[error("column {0} is outside the board")]
    InvalidColumn(i32),

    #[error("column {0} is full")]
    FullColumn(usize),
}

/// Errors from asking a board for its winning line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PlacementError {
    #[error("game is not over yet")]
    GameNotOver,

    #[error("game ended in a stalemate")]
    Stalemate,
}

/// Errors from parsing textual chip or format names.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unknown chip '{0}' (expected 'red' or 'black')")]
    UnknownChip(String),

    #[error("unknown output format '{0}' (expected 'text' or 'json')")]
    UnknownFormat(String),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read replay config {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid replay config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("cannot render config as TOML: {0}")]
    TomlRender(#[from] toml::ser::Error),

    #[error("replay config rejected: {0}")]
    Validation(String),
}
