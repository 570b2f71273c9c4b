//! Domain layer: pure bowling rules, frame replay and scoring.

pub mod frames;
pub mod rules;
pub mod scoring;
pub mod validation;

#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_props_sequences;
#[cfg(test)]
mod tests_scoring;

// Re-exports for ergonomics
pub use frames::{Frame, FrameKind, FrameReplay, FrameRolls, FrameStatus, SequenceViolation};
pub use rules::{pins_from_score, valid_pin_range, FRAME_LIMIT, MAX_ROLLS_PER_PLAYER, PIN_COUNT};
pub use scoring::{compute_frames, compute_result, compute_results, compute_total, PlayerResult};
pub use validation::{check_sequence, is_legal_prefix};
