//! The tagline rotator state machine.
//!
//! Two named phases instead of nested timeouts: the current line is
//! held, then fades out, then the next line is swapped in and held
//! again, wrapping from the last entry back to the first. The rotator
//! is advanced with an explicit `now` so tests never wait on real
//! timers.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaglinePhase {
    /// The line is fully visible.
    Hold,
    /// The line is on its way out; the UI renders it dimmed.
    FadingOut,
}

pub struct Rotator {
    lines: Vec<String>,
    index: usize,
    phase: TaglinePhase,
    deadline: Instant,
    hold: Duration,
    fade: Duration,
}

impl Rotator {
    /// Start rotating `lines`, holding the first entry for `first_hold`
    /// before the cycle begins.
    pub fn start(
        lines: Vec<String>,
        hold: Duration,
        fade: Duration,
        first_hold: Duration,
        now: Instant,
    ) -> Self {
        Self {
            lines,
            index: 0,
            phase: TaglinePhase::Hold,
            deadline: now + first_hold,
            // Zero durations would spin the catch-up loop forever.
            hold: hold.max(Duration::from_millis(1)),
            fade: fade.max(Duration::from_millis(1)),
        }
    }

    /// The line to display and its phase, or `None` with no lines.
    pub fn current(&self) -> Option<(&str, TaglinePhase)> {
        self.lines.get(self.index).map(|l| (l.as_str(), self.phase))
    }

    /// Advance past any deadlines that have elapsed by `now`.
    pub fn tick(&mut self, now: Instant) {
        if self.lines.is_empty() {
            return;
        }
        while now >= self.deadline {
            match self.phase {
                TaglinePhase::Hold => {
                    self.phase = TaglinePhase::FadingOut;
                    self.deadline += self.fade;
                }
                TaglinePhase::FadingOut => {
                    self.index = (self.index + 1) % self.lines.len();
                    self.phase = TaglinePhase::Hold;
                    self.deadline += self.hold;
                }
            }
        }
    }
}
