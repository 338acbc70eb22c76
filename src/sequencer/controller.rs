//! The transition controller: a single owned state machine that starts,
//! fades and swaps tracks.

use std::time::Duration;

use rand::Rng;

use crate::error::PlaybackError;

use super::order::{next_index, shuffled_order};

/// One track's transport, as seen by the sequencer.
///
/// The audio thread implements this over rodio sinks; tests implement it
/// with a recording fake so fade phases can be stepped without timers.
pub trait Deck {
    /// Start (or restart) playback from the current position.
    fn begin(&mut self) -> Result<(), PlaybackError>;
    /// Stop playback, rewind to position zero and silence the deck.
    fn halt(&mut self);
    fn set_volume(&mut self, volume: f32);
    fn volume(&self) -> f32;
}

/// Fade configuration: a linear ramp of `step` per `interval` up to
/// `ceiling`.
#[derive(Debug, Clone, Copy)]
pub struct FadePlan {
    pub step: f32,
    pub ceiling: f32,
    pub interval: Duration,
}

impl Default for FadePlan {
    fn default() -> Self {
        Self {
            step: 0.02,
            ceiling: 0.3,
            interval: Duration::from_millis(100),
        }
    }
}

/// Where the sequencer currently is.
///
/// The in-flight fade lives inside the phase, so starting a new
/// transition (which replaces the phase) cancels it by construction:
/// there is never more than one fade at a time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    /// Nothing started yet, or the last start attempt failed.
    Idle,
    /// The current track is ramping up; `level` is the last volume set.
    FadingIn { level: f32 },
    /// The current track reached the volume ceiling.
    Playing,
    /// Torn down; no further transitions.
    Stopped,
}

/// The playback sequencer: a randomized play order, a cursor into it, and
/// the fade phase of the current transition.
pub struct Sequencer {
    order: Vec<usize>,
    cursor: usize,
    phase: Phase,
    fade: FadePlan,
}

impl Sequencer {
    /// Build a sequencer over `track_count` tracks, shuffling the play
    /// order once for the whole session.
    pub fn new<R: Rng>(track_count: usize, fade: FadePlan, rng: &mut R) -> Self {
        Self {
            order: shuffled_order(track_count, rng),
            cursor: 0,
            phase: Phase::Idle,
            fade,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The session play order (every track exactly once).
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// The track currently being faded in or played, if any.
    pub fn current(&self) -> Option<usize> {
        match self.phase {
            Phase::FadingIn { .. } | Phase::Playing => Some(self.order[self.cursor]),
            Phase::Idle | Phase::Stopped => None,
        }
    }

    /// Manual start: the first user interaction of the session. Picks a
    /// random position in the order and fades that track in from zero.
    ///
    /// A start failure is left for the caller to log; the sequencer stays
    /// in [`Phase::Idle`].
    pub fn begin<D: Deck, R: Rng>(
        &mut self,
        decks: &mut [D],
        rng: &mut R,
    ) -> Result<(), PlaybackError> {
        if self.order.is_empty() || self.phase != Phase::Idle {
            return Ok(());
        }
        self.cursor = rng.random_range(0..self.order.len());
        self.start_current(decks)
    }

    /// Move to the next track: used for both natural track completion and
    /// a manual skip. Cancels any in-flight fade, halts the outgoing
    /// track, selects a different track and fades it in from zero.
    pub fn advance<D: Deck, R: Rng>(
        &mut self,
        decks: &mut [D],
        rng: &mut R,
    ) -> Result<(), PlaybackError> {
        if self.order.is_empty() || self.phase == Phase::Stopped {
            return Ok(());
        }
        // Replacing the phase cancels the previous fade before any new
        // one is created.
        self.phase = Phase::Idle;
        decks[self.order[self.cursor]].halt();

        self.cursor = next_index(self.cursor, self.order.len(), rng);
        self.start_current(decks)
    }

    /// Advance the fade ramp one step. Driven by the audio thread on a
    /// fixed `fade.interval` cadence; a no-op outside `FadingIn`.
    pub fn tick<D: Deck>(&mut self, decks: &mut [D]) {
        if let Phase::FadingIn { level } = self.phase {
            let next = (level + self.fade.step).min(self.fade.ceiling);
            decks[self.order[self.cursor]].set_volume(next);
            self.phase = if next >= self.fade.ceiling {
                Phase::Playing
            } else {
                Phase::FadingIn { level: next }
            };
        }
    }

    /// Teardown: halt and silence every deck, no fades.
    pub fn teardown<D: Deck>(&mut self, decks: &mut [D]) {
        for deck in decks.iter_mut() {
            deck.halt();
        }
        self.phase = Phase::Stopped;
    }

    fn start_current<D: Deck>(&mut self, decks: &mut [D]) -> Result<(), PlaybackError> {
        let current = self.order[self.cursor];

        // Invariant: only one track is ever audible. Every other deck is
        // paused, rewound and silenced before the new one starts.
        for (i, deck) in decks.iter_mut().enumerate() {
            if i != current {
                deck.halt();
            }
        }
        debug_assert!(
            decks
                .iter()
                .enumerate()
                .all(|(i, d)| i == current || d.volume() == 0.0),
            "another deck is audible at transition entry"
        );

        let deck = &mut decks[current];
        deck.set_volume(0.0);
        deck.begin()?;
        self.phase = Phase::FadingIn { level: 0.0 };
        Ok(())
    }
}
