//! Session model types: `App`, `Stage` and the now-playing snapshot.

use std::time::{Duration, Instant};

use crate::audio::PlaybackHandle;
use crate::library::Track;
use crate::tagline::Rotator;

/// Where the front page currently is.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Stage {
    /// Warming up behind the loading bar; all input is ignored.
    Loading,
    /// Loading finished; waiting for the unlock interaction.
    Ready,
    /// Unlock triggered; the overlay is transitioning out.
    Unlocking { since: Instant },
    /// The content view is visible and playback has been started.
    Content,
}

/// Snapshot of playback state for drawing, refreshed at the configured
/// progress-debounce cadence rather than per frame.
#[derive(Debug, Clone, Default)]
pub struct NowPlaying {
    pub index: Option<usize>,
    pub elapsed: Duration,
    pub playing: bool,
    pub muted: bool,
}

/// The main application model.
pub struct App {
    pub tracks: Vec<Track>,
    pub stage: Stage,
    pub expanded: bool,
    pub playback_handle: Option<PlaybackHandle>,
    pub now_playing: NowPlaying,
    pub tagline: Option<Rotator>,
}

impl App {
    pub fn new(tracks: Vec<Track>) -> Self {
        Self {
            tracks,
            stage: Stage::Loading,
            expanded: false,
            playback_handle: None,
            now_playing: NowPlaying::default(),
            tagline: None,
        }
    }

    /// Attach a `PlaybackHandle` used to observe playback progress.
    pub fn set_playback_handle(&mut self, h: PlaybackHandle) {
        self.playback_handle = Some(h);
    }

    /// Mark the warm-up as finished; the unlock prompt becomes active.
    pub fn mark_ready(&mut self) {
        if self.stage == Stage::Loading {
            self.stage = Stage::Ready;
        }
    }

    /// Handle an unlock interaction. Returns true when it actually
    /// unlocked; input before ready and repeated input during the
    /// transition are ignored.
    pub fn try_unlock(&mut self, now: Instant) -> bool {
        if self.stage == Stage::Ready {
            self.stage = Stage::Unlocking { since: now };
            true
        } else {
            false
        }
    }

    /// Finish the unlock transition and show the content view.
    pub fn show_content(&mut self) {
        if matches!(self.stage, Stage::Unlocking { .. }) {
            self.stage = Stage::Content;
        }
    }

    /// True while the loading overlay (in any of its stages) is up.
    pub fn is_locked(&self) -> bool {
        self.stage != Stage::Content
    }

    pub fn toggle_expanded(&mut self) {
        self.expanded = !self.expanded;
    }

    /// Refresh the now-playing snapshot from the audio thread.
    pub fn refresh_now_playing(&mut self) {
        let Some(handle) = &self.playback_handle else {
            return;
        };
        if let Ok(info) = handle.lock() {
            self.now_playing = NowPlaying {
                index: info.index,
                elapsed: info.elapsed,
                playing: info.playing,
                muted: info.muted,
            };
        }
    }

    /// The track behind the now-playing snapshot, if any.
    pub fn current_track(&self) -> Option<&Track> {
        self.now_playing.index.and_then(|i| self.tracks.get(i))
    }
}
