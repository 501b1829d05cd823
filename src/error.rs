//! Error types for coalition structures, utilities and stability queries.

use thiserror::Error;

use super::types::Player;

/// Errors raised by the analysis. None of them is transient: each one reports
/// a contract violation by the caller and is returned unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// A player was looked up in a structure that does not contain it.
    #[error("player {0} not found in the coalition structure")]
    PlayerNotFound(Player),

    /// An argument outside its domain, such as an unknown altruism degree.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Groups that do not form a partition (empty or overlapping groups).
    #[error("invalid coalition structure: {0}")]
    InvalidStructure(String),

    /// Two utility vectors of different length were compared.
    #[error("utility vectors have different lengths ({left} and {right})")]
    LengthMismatch { left: usize, right: usize },

    /// A precomputed table was built for another game or degree.
    #[error("utility table mismatch: {0}")]
    TableMismatch(String),

    /// A structure was queried against a table that does not contain it.
    #[error("coalition structure {0} is not in the utility table")]
    StructureNotFound(String),
}

impl GameError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn invalid_structure(msg: impl Into<String>) -> Self {
        Self::InvalidStructure(msg.into())
    }

    pub fn table_mismatch(msg: impl Into<String>) -> Self {
        Self::TableMismatch(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, GameError>;
