use crate::domain::frames::{FrameReplay, SequenceViolation};

/// Check that `pins` is a legal prefix of a ten-pin game.
///
/// The whole prospective history is replayed, not just the newest roll,
/// since frame boundaries depend on everything thrown before. Missing rolls
/// at the end are fine; only rule breaks are rejected.
pub fn check_sequence(pins: &[u8]) -> Result<(), SequenceViolation> {
    let mut replay = FrameReplay::new();
    pins.iter().try_for_each(|&p| replay.push(p))
}

pub fn is_legal_prefix(pins: &[u8]) -> bool {
    check_sequence(pins).is_ok()
}
