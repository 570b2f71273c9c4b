//! Frame replay: folds an ordered run of pin counts into bowling frames.
//!
//! The replay is a small state machine driven one roll at a time. Strike and
//! spare frames stay open for bonus credit after they are closed; every later
//! roll is credited to them until their bonus allotment is used up.

use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::domain::rules::{is_final_frame, PIN_COUNT};

const STRIKE_BONUS_ROLLS: u8 = 2;
const SPARE_BONUS_ROLLS: u8 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FrameKind {
    Strike,
    Spare,
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FrameStatus {
    /// Second ball not thrown yet.
    InProgress,
    /// Strike or spare still owed bonus rolls; the score is provisional.
    AwaitingBonus,
    Scored,
}

/// The pin counts of one frame, in throw order. Never more than three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameRolls {
    pins: [u8; FrameRolls::CAPACITY],
    len: u8,
}

impl FrameRolls {
    pub const CAPACITY: usize = 3;

    fn single(pins: u8) -> Self {
        let mut rolls = Self::default();
        rolls.push(pins);
        rolls
    }

    fn push(&mut self, pins: u8) {
        let at = self.len as usize;
        if at < Self::CAPACITY {
            self.pins[at] = pins;
            self.len += 1;
        }
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.pins[..self.len as usize]
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn first(&self) -> Option<u8> {
        self.as_slice().first().copied()
    }
}

impl Serialize for FrameRolls {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.as_slice())
    }
}

/// One scored frame as shown on a scoresheet.
///
/// `score` counts only rolls that have been thrown: a strike or spare still
/// waiting on bonus rolls reports what it has so far and is marked
/// [`FrameStatus::AwaitingBonus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Frame {
    pub number: u8,
    pub rolls: FrameRolls,
    /// `None` until the frame's own balls decide it.
    pub kind: Option<FrameKind>,
    pub score: u16,
    pub running_total: u16,
    pub status: FrameStatus,
    #[serde(skip)]
    bonus_due: u8,
}

impl Frame {
    fn opened(number: u8, pins: u8) -> Self {
        Self {
            number,
            rolls: FrameRolls::single(pins),
            kind: None,
            score: u16::from(pins),
            running_total: 0,
            status: FrameStatus::InProgress,
            bonus_due: 0,
        }
    }

    fn close_as(&mut self, kind: FrameKind) {
        self.kind = Some(kind);
        self.bonus_due = match kind {
            FrameKind::Strike => STRIKE_BONUS_ROLLS,
            FrameKind::Spare => SPARE_BONUS_ROLLS,
            FrameKind::Open => 0,
        };
        self.status = if self.bonus_due > 0 {
            FrameStatus::AwaitingBonus
        } else {
            FrameStatus::Scored
        };
    }

    fn credit_bonus(&mut self, pins: u8) {
        if self.bonus_due == 0 {
            return;
        }
        self.score += u16::from(pins);
        self.bonus_due -= 1;
        if self.bonus_due == 0 {
            self.status = FrameStatus::Scored;
        }
    }

    pub fn is_strike(&self) -> bool {
        self.kind == Some(FrameKind::Strike)
    }

    pub fn is_spare(&self) -> bool {
        self.kind == Some(FrameKind::Spare)
    }

    pub fn is_pending(&self) -> bool {
        self.status != FrameStatus::Scored
    }
}

/// Rule broken by a roll sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SequenceViolation {
    #[error("roll #{roll_index} would start an 11th frame")]
    FrameLimitExceeded { roll_index: usize },
    #[error("frame {frame} knocks down {first} + {second} pins, more than the 10 standing")]
    PinOverflow { frame: u8, first: u8, second: u8 },
    #[error("roll #{roll_index} reports {pins} pins, outside 0..=10")]
    PinsOutOfRange { roll_index: usize, pins: u8 },
}

/// Where the replay stands before the next roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayState {
    AwaitingFirstRoll,
    /// Holds the frame opened by a non-strike first ball.
    AwaitingSecondRoll(Frame),
    /// Tenth frame only: a strike or spare taking its fill balls.
    AwaitingBonusRolls(Frame),
    GameOver,
}

#[derive(Debug, Clone)]
pub struct FrameReplay {
    closed: Vec<Frame>,
    state: ReplayState,
    rolls_seen: usize,
}

impl Default for FrameReplay {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameReplay {
    pub fn new() -> Self {
        Self {
            closed: Vec::with_capacity(10),
            state: ReplayState::AwaitingFirstRoll,
            rolls_seen: 0,
        }
    }

    pub fn state(&self) -> ReplayState {
        self.state
    }

    /// Rolls folded into frames so far.
    pub fn rolls_seen(&self) -> usize {
        self.rolls_seen
    }

    /// True once the tenth frame, fill balls included, is finished.
    pub fn is_complete(&self) -> bool {
        self.state == ReplayState::GameOver
    }

    /// Feed the next roll.
    ///
    /// A pin overflow is reported after the roll has been folded in as an
    /// open frame, so a lenient caller can keep going. Out-of-range pins and
    /// rolls past the tenth frame are refused and leave the replay untouched.
    pub fn push(&mut self, pins: u8) -> Result<(), SequenceViolation> {
        let roll_index = self.rolls_seen;
        if pins > PIN_COUNT {
            return Err(SequenceViolation::PinsOutOfRange { roll_index, pins });
        }

        match std::mem::replace(&mut self.state, ReplayState::GameOver) {
            ReplayState::GameOver => Err(SequenceViolation::FrameLimitExceeded { roll_index }),
            ReplayState::AwaitingFirstRoll => {
                self.accept(pins);
                self.first_roll(pins);
                Ok(())
            }
            ReplayState::AwaitingSecondRoll(frame) => {
                self.accept(pins);
                self.second_roll(frame, pins)
            }
            ReplayState::AwaitingBonusRolls(frame) => {
                self.accept(pins);
                self.fill_roll(frame, pins);
                Ok(())
            }
        }
    }

    /// Snapshot of every frame started so far, with running totals filled in.
    pub fn frames(&self) -> Vec<Frame> {
        let mut frames = self.closed.clone();
        if let ReplayState::AwaitingSecondRoll(frame) | ReplayState::AwaitingBonusRolls(frame) =
            self.state
        {
            frames.push(frame);
        }

        let mut running = 0u16;
        for frame in &mut frames {
            running += frame.score;
            frame.running_total = running;
        }
        frames
    }

    fn accept(&mut self, pins: u8) {
        self.rolls_seen += 1;
        for frame in self.closed.iter_mut().filter(|f| f.bonus_due > 0) {
            frame.credit_bonus(pins);
        }
    }

    fn first_roll(&mut self, pins: u8) {
        let number = self.closed.len() as u8 + 1;
        let mut frame = Frame::opened(number, pins);

        if pins < PIN_COUNT {
            self.state = ReplayState::AwaitingSecondRoll(frame);
            return;
        }

        frame.close_as(FrameKind::Strike);
        self.finish(frame);
    }

    fn second_roll(&mut self, mut frame: Frame, pins: u8) -> Result<(), SequenceViolation> {
        let first = frame.rolls.first().unwrap_or_default();
        frame.rolls.push(pins);
        frame.score += u16::from(pins);

        if first + pins == PIN_COUNT {
            frame.close_as(FrameKind::Spare);
            self.finish(frame);
            return Ok(());
        }

        frame.close_as(FrameKind::Open);
        let number = frame.number;
        self.finish(frame);

        if first + pins > PIN_COUNT {
            return Err(SequenceViolation::PinOverflow {
                frame: number,
                first,
                second: pins,
            });
        }
        Ok(())
    }

    fn fill_roll(&mut self, mut frame: Frame, pins: u8) {
        frame.rolls.push(pins);
        frame.credit_bonus(pins);
        self.finish(frame);
    }

    /// Route a frame whose own balls are done. The tenth frame keeps the
    /// replay busy until its fill balls are in.
    fn finish(&mut self, frame: Frame) {
        if !is_final_frame(frame.number) {
            self.closed.push(frame);
            self.state = ReplayState::AwaitingFirstRoll;
        } else if frame.bonus_due > 0 {
            self.state = ReplayState::AwaitingBonusRolls(frame);
        } else {
            self.closed.push(frame);
            self.state = ReplayState::GameOver;
        }
    }
}
