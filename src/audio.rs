//! Audio backend: a worker thread that owns the output device, one deck
//! per track and the sequencer, driven by a command channel whose receive
//! timeout doubles as the fade/advance tick.

mod player;
mod sink;
mod thread;
mod types;

pub use player::AudioPlayer;
pub use types::{AudioCmd, PlaybackHandle, PlaybackInfo};
