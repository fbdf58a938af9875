//! Crate-level error types.

use std::fmt;

/// Errors produced by the tilescape crate.
#[derive(Debug)]
pub enum TilescapeError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// The ingestion input was not a sequence of rows.
    Ingest(String),
    /// A formation name did not match any known formation.
    UnknownFormation(String),
    /// A gallery command could not be parsed.
    BadCommand(String),
    /// A formation was built for a different item count than the context
    /// it was applied to.
    FormationMismatch {
        /// Number of items in the animation context.
        items: usize,
        /// Number of positions in the formation.
        positions: usize,
    },
}

impl fmt::Display for TilescapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Ingest(msg) => write!(f, "ingest error: {msg}"),
            Self::UnknownFormation(name) => {
                write!(f, "unknown formation: {name:?}")
            }
            Self::BadCommand(text) => write!(f, "bad command: {text:?}"),
            Self::FormationMismatch { items, positions } => write!(
                f,
                "formation has {positions} positions but {items} items are \
                 being animated"
            ),
        }
    }
}

impl std::error::Error for TilescapeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for TilescapeError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for TilescapeError {
    fn from(e: serde_json::Error) -> Self {
        Self::Ingest(e.to_string())
    }
}
