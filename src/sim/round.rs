//! Round state: brick counter and win/lose phase

use serde::{Deserialize, Serialize};

/// Where the current round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Ball in play
    #[default]
    Running,
    /// Every brick destroyed
    Won,
    /// Ball left through the floor
    Lost,
}

/// Reported by a tick that ended the round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TerminalSignal {
    Won,
    Lost,
}

/// Externally owned round bookkeeping
///
/// The orchestrator is the only writer; the presentation layer reads it to
/// pick the win/lose overlay and to decide when to offer a reset.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RoundState {
    /// Bricks destroyed this round
    pub destroyed: u32,
    /// Bricks that must fall to win; 0 means the round cannot be won
    pub total_bricks: u32,
    pub phase: RoundPhase,
}

impl RoundState {
    pub fn new(total_bricks: u32) -> Self {
        Self {
            destroyed: 0,
            total_bricks,
            phase: RoundPhase::Running,
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.phase == RoundPhase::Running
    }

    /// Count one destroyed brick
    pub(crate) fn record_brick(&mut self) {
        self.destroyed += 1;
    }

    pub(crate) fn mark_lost(&mut self) -> TerminalSignal {
        self.phase = RoundPhase::Lost;
        TerminalSignal::Lost
    }

    /// Flip to `Won` once the counter reaches the total
    pub(crate) fn check_won(&mut self) -> Option<TerminalSignal> {
        if self.is_running() && self.total_bricks > 0 && self.destroyed >= self.total_bricks {
            self.phase = RoundPhase::Won;
            return Some(TerminalSignal::Won);
        }
        None
    }

    /// Counter with the old "-1 means lost" encoding, for display code
    pub fn legacy_count(&self) -> i64 {
        match self.phase {
            RoundPhase::Lost => -1,
            _ => i64::from(self.destroyed),
        }
    }

    pub(crate) fn reset(&mut self, total_bricks: u32) {
        *self = Self::new(total_bricks);
    }
}
