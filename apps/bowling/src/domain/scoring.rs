use std::collections::HashMap;

use serde::Serialize;

use crate::domain::frames::{Frame, FrameReplay, SequenceViolation};

/// Scoresheet for one player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerResult {
    pub player_id: String,
    pub frames: Vec<Frame>,
    pub total_score: u16,
    /// Ten frames formed and every roll consumed.
    pub completed: bool,
}

/// Replay for display. Pin overflows are scored as open frames; anything
/// past the tenth frame (or an impossible pin count) stops the replay.
fn replay_for_display(pins: &[u8]) -> FrameReplay {
    let mut replay = FrameReplay::new();
    for &p in pins {
        match replay.push(p) {
            Ok(()) | Err(SequenceViolation::PinOverflow { .. }) => {}
            Err(_) => break,
        }
    }
    replay
}

pub fn compute_frames(pins: &[u8]) -> Vec<Frame> {
    replay_for_display(pins).frames()
}

pub fn compute_total(frames: &[Frame]) -> u16 {
    frames.iter().map(|f| f.score).sum()
}

pub fn compute_result(player_id: impl Into<String>, pins: &[u8]) -> PlayerResult {
    let replay = replay_for_display(pins);
    let completed = replay.is_complete() && replay.rolls_seen() == pins.len();
    let frames = replay.frames();

    PlayerResult {
        player_id: player_id.into(),
        total_score: compute_total(&frames),
        frames,
        completed,
    }
}

/// Score a game's rolls, one result per player.
///
/// Rolls must arrive in creation order. Each player's rolls keep that order,
/// and players are listed in order of their first roll.
pub fn compute_results<'a, I>(rolls: I) -> Vec<PlayerResult>
where
    I: IntoIterator<Item = (&'a str, u8)>,
{
    let mut by_player: Vec<(&'a str, Vec<u8>)> = Vec::new();
    let mut slots: HashMap<&'a str, usize> = HashMap::new();

    for (player_id, pins) in rolls {
        let slot = *slots.entry(player_id).or_insert_with(|| {
            by_player.push((player_id, Vec::new()));
            by_player.len() - 1
        });
        by_player[slot].1.push(pins);
    }

    by_player
        .into_iter()
        .map(|(player_id, pins)| compute_result(player_id, &pins))
        .collect()
}
