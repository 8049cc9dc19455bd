//! Feedback calculation for guesses.
//!
//! This module handles computing the feedback pattern (green/yellow/gray)
//! for a guessed number against the secret prime.

use crate::WORD_LENGTH;
use serde::{Deserialize, Serialize};

/// Represents the feedback for a single digit position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Feedback {
    /// Correct digit in correct position (green)
    Correct,
    /// Correct digit in wrong position (yellow)
    Present,
    /// Digit not in number (gray)
    Absent,
}

impl Feedback {
    /// Convert to a character for display
    pub fn to_char(self) -> char {
        match self {
            Feedback::Correct => '🟩',
            Feedback::Present => '🟨',
            Feedback::Absent => '⬛',
        }
    }
}

/// A complete feedback pattern for a 5-digit guess.
/// Encoded as a single u8 value (0-242) so persisted session records stay
/// small. Each position can be 0 (absent), 1 (present), or 2 (correct).
/// Pattern = p0 + 3*p1 + 9*p2 + 27*p3 + 81*p4
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FeedbackPattern(pub u8);

impl FeedbackPattern {
    /// The pattern indicating all correct (winning)
    pub const ALL_CORRECT: Self = Self(2 + 2 * 3 + 2 * 9 + 2 * 27 + 2 * 81); // 242

    /// Total number of possible patterns (3^5)
    pub const NUM_PATTERNS: usize = 243;

    /// Create a new pattern from individual feedback values
    pub fn new(feedbacks: [Feedback; WORD_LENGTH]) -> Self {
        let mut pattern: u8 = 0;
        let mut multiplier: u8 = 1;
        for fb in feedbacks {
            let value = match fb {
                Feedback::Absent => 0,
                Feedback::Present => 1,
                Feedback::Correct => 2,
            };
            pattern += value * multiplier;
            multiplier *= 3;
        }
        Self(pattern)
    }

    /// Calculate the feedback pattern for a guess against the secret.
    ///
    /// Two passes, so duplicate digits in the guess are never over-credited
    /// when the secret holds fewer occurrences:
    /// - Pass 1 marks exact positional matches Correct; only the secret's
    ///   unmatched digits are counted.
    /// - Pass 2 marks remaining positions Present while the counted supply
    ///   lasts, Absent otherwise.
    pub fn calculate(guess: &str, secret: &str) -> Self {
        let guess_bytes = guess.as_bytes();
        let secret_bytes = secret.as_bytes();

        debug_assert_eq!(guess_bytes.len(), WORD_LENGTH);
        debug_assert_eq!(secret_bytes.len(), WORD_LENGTH);

        let mut feedback = [Feedback::Absent; WORD_LENGTH];
        let mut secret_remaining = [0u8; 10];

        for i in 0..WORD_LENGTH {
            if guess_bytes[i] == secret_bytes[i] {
                feedback[i] = Feedback::Correct;
            } else {
                let idx = (secret_bytes[i] - b'0') as usize;
                secret_remaining[idx] += 1;
            }
        }

        for i in 0..WORD_LENGTH {
            if feedback[i] != Feedback::Correct {
                let idx = (guess_bytes[i] - b'0') as usize;
                if secret_remaining[idx] > 0 {
                    feedback[i] = Feedback::Present;
                    secret_remaining[idx] -= 1;
                }
            }
        }

        Self::new(feedback)
    }

    /// Convert pattern to array of feedbacks
    pub fn to_feedbacks(self) -> [Feedback; WORD_LENGTH] {
        let mut pattern = self.0;
        let mut feedbacks = [Feedback::Absent; WORD_LENGTH];
        for feedback in feedbacks.iter_mut() {
            *feedback = match pattern % 3 {
                0 => Feedback::Absent,
                1 => Feedback::Present,
                2 => Feedback::Correct,
                _ => unreachable!(),
            };
            pattern /= 3;
        }
        feedbacks
    }

    /// Check if this pattern represents a win (all correct)
    pub fn is_win(self) -> bool {
        self == Self::ALL_CORRECT
    }

    /// Display as emoji string
    pub fn to_emoji_string(self) -> String {
        self.to_feedbacks().iter().map(|f| f.to_char()).collect()
    }
}

impl std::fmt::Display for FeedbackPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_emoji_string())
    }
}
