//! Error types surfaced by the campaign engine.
//!
//! Every variant is recoverable. Losing a battle is a normal outcome and is
//! reported through [`crate::combat::BattleOutcome`], not through this enum.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("invalid selection {index}: {reason}")]
    InvalidSelection { index: usize, reason: SelectionFault },

    #[error("{expected} picks required, got {got}")]
    PickCount { expected: usize, got: usize },

    #[error("inventory is full ({capacity} items)")]
    CapacityExceeded { capacity: usize },

    #[error("{attacker} has no living target")]
    NoLegalTarget { attacker: String },

    #[error("party is full ({max} heroes)")]
    PartyFull { max: usize },

    #[error("unknown hero class: {0}")]
    UnknownClass(String),
}

/// Why a selection number was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionFault {
    OutOfRange { len: usize },
    Duplicate,
    TooMany { limit: usize },
}

impl std::fmt::Display for SelectionFault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SelectionFault::OutOfRange { len } => write!(f, "expected 1..={}", len),
            SelectionFault::Duplicate => write!(f, "already chosen"),
            SelectionFault::TooMany { limit } => write!(f, "at most {} picks allowed", limit),
        }
    }
}

pub type Result<T> = std::result::Result<T, GameError>;
