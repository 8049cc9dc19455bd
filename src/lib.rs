//! # Primedle
//!
//! A Wordle-style guessing game where every secret is a five-digit prime.
//!
//! The player has ten guesses; each guess must itself be a five-digit prime
//! and earns per-digit feedback (correct / present / absent) computed with
//! multiset-aware matching. Once three attempts have been made, a single
//! hint can reveal one digit the player has never placed correctly.

pub mod error;
pub mod feedback;
pub mod primes;
pub mod session;

pub use error::{GameError, GameResult};
pub use feedback::{Feedback, FeedbackPattern};
pub use primes::{is_prime, SecretPool};
pub use session::{Attempt, GameSession, Hint, Outcome};

/// Digits per secret and per guess
pub const WORD_LENGTH: usize = 5;

/// Guesses allowed per game
pub const MAX_ATTEMPTS: usize = 10;

/// Attempts required before the hint unlocks
pub const HINT_UNLOCK_ATTEMPTS: usize = 3;

/// Hints granted per game
pub const MAX_HINTS: u32 = 1;
