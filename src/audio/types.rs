//! Audio-related small types and handles.

use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Debug)]
pub enum AudioCmd {
    /// Begin the session: the manual start triggered by the unlock
    /// interaction. Ignored unless the sequencer is idle.
    Begin,
    /// Manual skip to a different random track.
    Skip,
    /// Toggle the muted flag on the active track.
    ToggleMute,
    /// Jump the active track to `fraction` of its duration (0.0..=1.0).
    SeekTo(f64),
    /// Halt every track and shut down the audio thread. No fades.
    Quit,
}

/// Runtime playback information shared with the UI.
#[derive(Debug, Clone, Default)]
pub struct PlaybackInfo {
    /// Currently playing track index in the playlist (if any).
    pub index: Option<usize>,
    /// Elapsed playback time for the current track.
    pub elapsed: Duration,
    /// Whether playback is currently active.
    pub playing: bool,
    /// Whether the active track is muted.
    pub muted: bool,
}

pub type PlaybackHandle = Arc<Mutex<PlaybackInfo>>;
