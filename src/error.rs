//! Error types for the battle engine.

use thiserror::Error;

use crate::core::{GameId, Side};

/// Failures reported by engine operations.
///
/// Every failing call leaves the addressed game unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Malformed creation request.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Unknown game id.
    #[error("Game not found: {0}")]
    NotFound(GameId),

    /// Operation attempted on a finished game.
    #[error("Game {0} is not in playing state")]
    InvalidState(GameId),

    /// A side acted without owning the turn.
    #[error("It is the {expected} side's turn, not the {actual} side's")]
    WrongTurn { expected: Side, actual: Side },

    /// A deck was empty while the game was still playing.
    #[error("Not enough cards in deck for game {0}")]
    EmptyDeck(GameId),

    /// The game store failed.
    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
