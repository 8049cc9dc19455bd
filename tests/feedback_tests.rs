use primedle::{Feedback, FeedbackPattern};
use proptest::prelude::*;

#[test]
fn test_all_correct() {
    let pattern = FeedbackPattern::calculate("12343", "12343");
    assert!(pattern.is_win());
    assert_eq!(pattern, FeedbackPattern::ALL_CORRECT);
}

#[test]
fn test_all_absent() {
    let pattern = FeedbackPattern::calculate("67890", "12345");
    let expected = FeedbackPattern::new([
        Feedback::Absent,
        Feedback::Absent,
        Feedback::Absent,
        Feedback::Absent,
        Feedback::Absent,
    ]);
    assert_eq!(pattern, expected);
}

#[test]
fn test_repeated_digit_in_guess() {
    // The secret holds a single '1'; the matched copy in position 0 uses it
    // up, so the second '1' scores Absent rather than Present.
    let pattern = FeedbackPattern::calculate("11234", "12345");
    let feedbacks = pattern.to_feedbacks();
    assert_eq!(feedbacks[0], Feedback::Correct);
    assert_eq!(feedbacks[1], Feedback::Absent);
    assert_eq!(feedbacks[2], Feedback::Present);
    assert_eq!(feedbacks[3], Feedback::Present);
    assert_eq!(feedbacks[4], Feedback::Present);
}

#[test]
fn test_duplicate_digits_limited_by_secret() {
    let pattern = FeedbackPattern::calculate("55551", "12345");
    let feedbacks = pattern.to_feedbacks();
    assert_eq!(feedbacks[0], Feedback::Present);
    assert_eq!(feedbacks[1], Feedback::Absent);
    assert_eq!(feedbacks[2], Feedback::Absent);
    assert_eq!(feedbacks[3], Feedback::Absent);
    assert_eq!(feedbacks[4], Feedback::Present);
}

#[test]
fn test_duplicate_digits_in_secret() {
    let pattern = FeedbackPattern::calculate("31234", "33133");
    let feedbacks = pattern.to_feedbacks();
    assert_eq!(feedbacks[0], Feedback::Correct);
    assert_eq!(feedbacks[1], Feedback::Present);
    assert_eq!(feedbacks[2], Feedback::Absent);
    assert_eq!(feedbacks[3], Feedback::Correct);
    assert_eq!(feedbacks[4], Feedback::Absent);
}

#[test]
fn test_all_present() {
    let pattern = FeedbackPattern::calculate("45123", "12345");
    let feedbacks = pattern.to_feedbacks();
    for feedback in feedbacks {
        assert_eq!(feedback, Feedback::Present);
    }
    assert!(!pattern.is_win());
}

#[test]
fn test_reversal_keeps_center_correct() {
    let pattern = FeedbackPattern::calculate("54321", "12345");
    let feedbacks = pattern.to_feedbacks();
    assert_eq!(feedbacks[0], Feedback::Present);
    assert_eq!(feedbacks[1], Feedback::Present);
    assert_eq!(feedbacks[2], Feedback::Correct);
    assert_eq!(feedbacks[3], Feedback::Present);
    assert_eq!(feedbacks[4], Feedback::Present);
}

#[test]
fn test_pattern_encoding_decoding() {
    for pattern_val in 0..FeedbackPattern::NUM_PATTERNS {
        let pattern = FeedbackPattern(pattern_val as u8);
        let feedbacks = pattern.to_feedbacks();
        let reconstructed = FeedbackPattern::new(feedbacks);
        assert_eq!(pattern, reconstructed);
    }
}

#[test]
fn test_emoji_display() {
    let pattern = FeedbackPattern::new([
        Feedback::Correct,
        Feedback::Present,
        Feedback::Absent,
        Feedback::Absent,
        Feedback::Correct,
    ]);
    assert_eq!(pattern.to_emoji_string(), "🟩🟨⬛⬛🟩");
}

fn digit_count(s: &str, digit: u8) -> usize {
    s.bytes().filter(|&b| b == digit).count()
}

proptest! {
    #[test]
    fn test_guessing_the_secret_wins(secret in "[0-9]{5}") {
        prop_assert!(FeedbackPattern::calculate(&secret, &secret).is_win());
    }

    #[test]
    fn test_win_requires_equality(guess in "[0-9]{5}", secret in "[0-9]{5}") {
        let won = FeedbackPattern::calculate(&guess, &secret).is_win();
        prop_assert_eq!(won, guess == secret);
    }

    #[test]
    fn test_credited_digits_never_exceed_secret_supply(
        guess in "[0-9]{5}",
        secret in "[0-9]{5}",
    ) {
        let feedbacks = FeedbackPattern::calculate(&guess, &secret).to_feedbacks();
        for digit in b'0'..=b'9' {
            let credited = guess
                .bytes()
                .zip(feedbacks.iter())
                .filter(|&(b, fb)| b == digit && *fb != Feedback::Absent)
                .count();
            prop_assert!(credited <= digit_count(&secret, digit));
        }
    }
}
