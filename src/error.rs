//! Error types shared by the playback layers.

use thiserror::Error;

/// Failure to begin playback of a track.
///
/// This is the only recoverable error class in the player: it is caught
/// where playback is started, logged, and never retried.
#[derive(Error, Debug, Clone)]
pub enum PlaybackError {
    #[error("failed to open {0}")]
    Open(String),

    #[error("failed to decode {0}")]
    Decode(String),

    #[error("audio output rejected playback: {0}")]
    Output(String),
}
