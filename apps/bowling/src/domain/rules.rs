use std::ops::RangeInclusive;

/// Frames in a game.
pub const FRAME_LIMIT: u8 = 10;
/// Pins standing at the start of every frame.
pub const PIN_COUNT: u8 = 10;
/// Nine two-roll frames plus a three-roll tenth.
pub const MAX_ROLLS_PER_PLAYER: usize = 21;

pub fn valid_pin_range() -> RangeInclusive<i32> {
    0..=PIN_COUNT as i32
}

/// Convert a raw submitted score into a pin count, rejecting anything a
/// single ball cannot knock down.
pub fn pins_from_score(score: i32) -> Option<u8> {
    if valid_pin_range().contains(&score) {
        u8::try_from(score).ok()
    } else {
        None
    }
}

pub fn is_final_frame(frame_number: u8) -> bool {
    frame_number == FRAME_LIMIT
}
