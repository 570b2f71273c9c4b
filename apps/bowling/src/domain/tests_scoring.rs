use crate::domain::frames::{FrameKind, FrameStatus};
use crate::domain::scoring::{compute_frames, compute_result, compute_results, compute_total};

fn zeros_then(n: usize, tail: &[u8]) -> Vec<u8> {
    let mut pins = vec![0; n];
    pins.extend_from_slice(tail);
    pins
}

#[test]
fn no_rolls_no_results() {
    assert!(compute_results(std::iter::empty::<(&str, u8)>()).is_empty());
}

#[test]
fn single_roll_makes_one_frame() {
    let result = compute_result("username", &[6]);
    assert_eq!(result.player_id, "username");
    assert_eq!(result.total_score, 6);
    assert_eq!(result.frames.len(), 1);
    assert_eq!(result.frames[0].rolls.as_slice(), &[6]);
    assert_eq!(result.frames[0].score, 6);
    assert!(!result.completed);
}

#[test]
fn two_rolls_make_one_open_frame() {
    let frames = compute_frames(&[3, 5]);
    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].rolls.as_slice(), &[3, 5]);
    assert_eq!(frames[0].score, 8);
    assert_eq!(frames[0].kind, Some(FrameKind::Open));
}

#[test]
fn strike_then_open_frame() {
    let frames = compute_frames(&[10, 3, 5]);
    assert_eq!(frames.len(), 2);
    assert_eq!(frames[0].rolls.len(), 1);
    assert_eq!(frames[0].score, 18);
    assert_eq!(frames[1].rolls.len(), 2);
    assert_eq!(frames[1].score, 8);
}

#[test]
fn six_strikes_make_six_frames() {
    let frames = compute_frames(&[10; 6]);
    assert_eq!(frames.len(), 6);
    assert!(frames.iter().all(|f| f.is_strike()));
    // The last two still wait on bonus balls.
    assert_eq!(frames[4].status, FrameStatus::AwaitingBonus);
    assert_eq!(frames[5].status, FrameStatus::AwaitingBonus);
    assert_eq!(frames[3].score, 30);
}

#[test]
fn spare_then_open_frame() {
    let frames = compute_frames(&[3, 7, 4, 5]);
    assert_eq!(frames.len(), 2);
    assert_eq!(frames[0].rolls.len(), 2);
    assert_eq!(frames[0].score, 14);
}

#[test]
fn tenth_frame_strike_carries_fill_balls() {
    let result = compute_result("p", &zeros_then(18, &[10, 5, 9]));
    assert_eq!(result.frames.len(), 10);
    let last = result.frames.last().unwrap();
    assert_eq!(last.rolls.len(), 3);
    assert_eq!(last.score, 24);
    assert!(result.completed);
}

#[test]
fn tenth_frame_spare_carries_fill_ball() {
    let result = compute_result("p", &zeros_then(18, &[5, 5, 9]));
    assert_eq!(result.frames.len(), 10);
    let last = result.frames.last().unwrap();
    assert_eq!(last.rolls.as_slice(), &[5, 5, 9]);
    assert_eq!(last.score, 19);
    assert!(result.completed);
}

#[test]
fn perfect_game_is_300() {
    let result = compute_result("p", &[10; 12]);
    assert_eq!(result.total_score, 300);
    assert_eq!(result.frames.len(), 10);
    assert!(result.completed);
    assert_eq!(result.frames[9].running_total, 300);
}

#[test]
fn gutter_balls_score_zero() {
    let result = compute_result("p", &[0; 12]);
    assert_eq!(result.total_score, 0);
    assert_eq!(result.frames.len(), 6);
    assert!(!result.completed);
}

#[test]
fn mixed_game_totals_193() {
    let pins = [10, 3, 7, 6, 1, 10, 10, 10, 2, 8, 9, 0, 7, 3, 10, 10, 10];
    let result = compute_result("p", &pins);
    assert_eq!(result.total_score, 193);
    assert_eq!(compute_total(&result.frames), 193);
    assert!(result.completed);
}

#[test]
fn pending_strike_counts_thrown_rolls_only() {
    let result = compute_result("p", &[10, 4]);
    assert_eq!(result.frames[0].score, 14);
    assert!(result.frames[0].is_pending());
    assert_eq!(result.total_score, 18);
}

#[test]
fn unfinished_tenth_frame_is_not_completed() {
    assert!(!compute_result("p", &zeros_then(18, &[10, 5])).completed);
    assert!(!compute_result("p", &zeros_then(18, &[4, 6])).completed);
    assert!(!compute_result("p", &zeros_then(18, &[4])).completed);
    assert!(compute_result("p", &zeros_then(18, &[4, 5])).completed);
}

#[test]
fn rolls_past_tenth_frame_are_left_out() {
    let result = compute_result("p", &[0; 22]);
    assert_eq!(result.frames.len(), 10);
    assert!(!result.completed);
}

#[test]
fn results_group_by_player_in_first_appearance_order() {
    let rolls = [("bob", 1), ("ann", 4), ("bob", 9), ("ann", 6), ("bob", 5)];
    let results = compute_results(rolls);
    assert_eq!(results.len(), 2);

    assert_eq!(results[0].player_id, "bob");
    assert_eq!(results[0].frames[0].rolls.as_slice(), &[1, 9]);
    assert_eq!(results[0].total_score, 20);

    assert_eq!(results[1].player_id, "ann");
    assert_eq!(results[1].frames[0].rolls.as_slice(), &[4, 6]);
    assert_eq!(results[1].total_score, 10);
}
