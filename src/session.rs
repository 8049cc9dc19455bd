//! Game session state and the guess/hint operations.
//!
//! A session is the small record an external store keeps between player
//! interactions: the secret, the attempt log, and the hint counter. The
//! operations here mutate the record and return structured results; rendering
//! and storage stay with the caller.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{GameError, GameResult};
use crate::feedback::{Feedback, FeedbackPattern};
use crate::primes::SecretPool;
use crate::{HINT_UNLOCK_ATTEMPTS, MAX_ATTEMPTS, MAX_HINTS, WORD_LENGTH};

/// Where a session stands after a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// Attempts remain and the secret is still unguessed.
    Ongoing,
    /// The last guess matched the secret.
    Won,
    /// The attempt budget ran out without a match.
    Lost,
}

impl Outcome {
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }
}

/// One guess and the feedback it earned. Appended to the log, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attempt {
    pub guess: String,
    pub feedback: FeedbackPattern,
}

/// A granted hint, or the news that there is nothing left to reveal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Hint {
    /// One digit of the secret, at a position no attempt has placed
    /// correctly. `position` is 0-based; the display string is 1-indexed.
    Reveal { position: usize, digit: char },
    /// Every position has already come back correct in some attempt.
    AllRevealed,
}

impl std::fmt::Display for Hint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Hint::Reveal { position, digit } => {
                write!(f, "Digit {} is {}.", position + 1, digit)
            }
            Hint::AllRevealed => write!(f, "You've already revealed all digits!"),
        }
    }
}

/// A single player's game: the secret, the attempt log, and hint usage.
///
/// This struct serializes to the record an external session store persists
/// between requests. On a terminal outcome the owner drops the record; the
/// next interaction starts over with a fresh secret.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    secret: String,
    attempts: Vec<Attempt>,
    hints_used: u32,
}

impl GameSession {
    /// Start a session around a chosen secret (normally drawn via
    /// [`SecretPool::choose`]; tests may pass a fixed prime).
    pub fn new(secret: impl Into<String>) -> Self {
        let secret = secret.into();
        debug_assert_eq!(secret.len(), WORD_LENGTH);
        debug!(%secret, "session started");
        Self {
            secret,
            attempts: Vec::new(),
            hints_used: 0,
        }
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }

    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    pub fn attempts_left(&self) -> usize {
        MAX_ATTEMPTS.saturating_sub(self.attempts.len())
    }

    pub fn hints_used(&self) -> u32 {
        self.hints_used
    }

    /// Derive the session's state from the attempt log.
    pub fn outcome(&self) -> Outcome {
        if self.attempts.iter().any(|a| a.feedback.is_win()) {
            Outcome::Won
        } else if self.attempts.len() >= MAX_ATTEMPTS {
            Outcome::Lost
        } else {
            Outcome::Ongoing
        }
    }

    /// Which positions some attempt has already gotten right.
    pub fn revealed_positions(&self) -> [bool; WORD_LENGTH] {
        let mut revealed = [false; WORD_LENGTH];
        for attempt in &self.attempts {
            for (i, fb) in attempt.feedback.to_feedbacks().iter().enumerate() {
                if *fb == Feedback::Correct {
                    revealed[i] = true;
                }
            }
        }
        revealed
    }

    /// Score a guess against the secret and append it to the log.
    ///
    /// The budget check runs first: a terminal session refuses every further
    /// guess with [`GameError::NoAttemptsLeft`]. A malformed or composite
    /// guess fails with [`GameError::InvalidGuess`] and leaves the log
    /// untouched.
    pub fn submit_guess(
        &mut self,
        guess: &str,
        pool: &SecretPool,
    ) -> GameResult<(FeedbackPattern, Outcome)> {
        if self.outcome().is_terminal() {
            return Err(GameError::NoAttemptsLeft);
        }
        validate_guess(guess, pool)?;

        let feedback = FeedbackPattern::calculate(guess, &self.secret);
        self.attempts.push(Attempt {
            guess: guess.to_string(),
            feedback,
        });
        let outcome = self.outcome();
        debug!(guess, attempt = self.attempts.len(), ?outcome, "guess scored");
        Ok((feedback, outcome))
    }

    /// Reveal one digit the player has never placed correctly.
    ///
    /// Locked until [`HINT_UNLOCK_ATTEMPTS`](crate::HINT_UNLOCK_ATTEMPTS)
    /// attempts have been made, and spent after
    /// [`MAX_HINTS`](crate::MAX_HINTS) grants. `hints_used` only advances
    /// when a digit is actually revealed; asking once every position is
    /// known costs nothing.
    pub fn request_hint(&mut self, rng: &mut impl Rng) -> GameResult<Hint> {
        if self.attempts.len() < HINT_UNLOCK_ATTEMPTS {
            return Err(GameError::HintLocked {
                unlock_after: HINT_UNLOCK_ATTEMPTS,
            });
        }
        if self.hints_used >= MAX_HINTS {
            return Err(GameError::HintExhausted);
        }

        let revealed = self.revealed_positions();
        let unrevealed: Vec<usize> = (0..WORD_LENGTH).filter(|&i| !revealed[i]).collect();
        match unrevealed.choose(rng) {
            Some(&position) => {
                self.hints_used += 1;
                let digit = self.secret.as_bytes()[position] as char;
                debug!(position, "hint granted");
                Ok(Hint::Reveal { position, digit })
            }
            None => Ok(Hint::AllRevealed),
        }
    }
}

/// A guess must be exactly five ASCII digits naming a pool member.
fn validate_guess(guess: &str, pool: &SecretPool) -> GameResult<()> {
    let well_formed = guess.len() == WORD_LENGTH && guess.bytes().all(|b| b.is_ascii_digit());
    if !well_formed || !pool.contains(guess) {
        return Err(GameError::InvalidGuess {
            guess: guess.to_string(),
        });
    }
    Ok(())
}
