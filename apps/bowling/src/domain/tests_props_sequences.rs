//! Property tests for roll-sequence validation and scoring.

use proptest::prelude::*;

use crate::domain::frames::SequenceViolation;
use crate::domain::rules::{FRAME_LIMIT, PIN_COUNT};
use crate::domain::scoring::compute_result;
use crate::domain::validation::{check_sequence, is_legal_prefix};
use crate::domain::{test_gens, test_prelude};

/// Cursor-walk scorer used as an oracle: absent look-ahead rolls count 0.
fn cursor_total(pins: &[u8]) -> u16 {
    let at = |i: usize| u16::from(pins.get(i).copied().unwrap_or(0));
    let mut i = 0;
    let mut total = 0;
    for frame in 1..=FRAME_LIMIT {
        if i >= pins.len() {
            break;
        }
        let last = frame == FRAME_LIMIT;
        if pins[i] == PIN_COUNT {
            total += 10 + at(i + 1) + at(i + 2);
            i += if last { 3 } else { 1 };
        } else if at(i) + at(i + 1) == 10 {
            total += 10 + at(i + 2);
            i += if last { 3 } else { 2 };
        } else {
            total += at(i) + at(i + 1);
            i += 2;
        }
    }
    total
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Every prefix of a finished game is legal.
    #[test]
    fn prop_prefixes_of_complete_games_are_legal(game in test_gens::complete_game()) {
        for len in 0..=game.len() {
            prop_assert!(is_legal_prefix(&game[..len]), "prefix {:?}", &game[..len]);
        }
    }

    /// Nothing may follow a finished game.
    #[test]
    fn prop_roll_after_complete_game_is_rejected(
        game in test_gens::complete_game(),
        extra in test_gens::pins(),
    ) {
        let mut pins = game.clone();
        pins.push(extra);
        prop_assert_eq!(
            check_sequence(&pins),
            Err(SequenceViolation::FrameLimitExceeded { roll_index: game.len() })
        );
    }

    /// Finished games report ten frames and completion.
    #[test]
    fn prop_complete_games_are_completed(game in test_gens::complete_game()) {
        let result = compute_result("p", &game);
        prop_assert!(result.completed);
        prop_assert_eq!(result.frames.len(), FRAME_LIMIT as usize);
        prop_assert!(result.frames.iter().all(|f| !f.is_pending()));
        prop_assert!(result.total_score <= 300);
    }

    /// Legality is prefix-closed: if a run is legal, so is every shorter run.
    #[test]
    fn prop_legality_is_prefix_closed(pins in test_gens::any_rolls()) {
        if is_legal_prefix(&pins) {
            for len in 0..pins.len() {
                prop_assert!(is_legal_prefix(&pins[..len]));
            }
        }
    }

    /// Legal runs never exceed ten frames or ten pins in frames 1-9.
    #[test]
    fn prop_legal_prefix_frame_invariants(pins in test_gens::legal_prefix()) {
        let result = compute_result("p", &pins);
        prop_assert!(result.frames.len() <= FRAME_LIMIT as usize);
        for frame in result.frames.iter().filter(|f| f.number < FRAME_LIMIT) {
            let thrown: u16 = frame.rolls.as_slice().iter().map(|&p| u16::from(p)).sum();
            prop_assert!(thrown <= u16::from(PIN_COUNT));
            prop_assert!(frame.rolls.len() <= 2);
        }
        if let Some(last) = result.frames.last() {
            prop_assert_eq!(last.running_total, result.total_score);
        }
    }

    /// Replay scoring agrees with the plain cursor walk on any legal run.
    #[test]
    fn prop_scores_match_cursor_walk(pins in test_gens::legal_prefix()) {
        prop_assert_eq!(compute_result("p", &pins).total_score, cursor_total(&pins));
    }

    /// Scoring the same rolls twice gives the same result.
    #[test]
    fn prop_scoring_is_idempotent(pins in test_gens::any_rolls()) {
        prop_assert_eq!(compute_result("p", &pins), compute_result("p", &pins));
    }
}
