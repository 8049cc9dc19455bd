//! Error types for the game session.

use thiserror::Error;

/// The recoverable failure modes of a game session.
///
/// Every variant is an ordinary response to player input, never fatal; the
/// `Display` strings double as the player-facing messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Wrong length, a non-digit character, or a composite number.
    #[error("\"{guess}\" is not a valid 5-digit prime")]
    InvalidGuess { guess: String },

    /// The attempt budget is spent, or the game already ended.
    #[error("no attempts left")]
    NoAttemptsLeft,

    /// Hints stay locked for the first few attempts.
    #[error("hints unlock after {unlock_after} attempts")]
    HintLocked { unlock_after: usize },

    /// The one hint this session grants has been used.
    #[error("no more hints this game")]
    HintExhausted,
}

/// Result alias used throughout the library.
pub type GameResult<T> = Result<T, GameError>;
