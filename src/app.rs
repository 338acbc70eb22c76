//! Application model: the session stage, manual-control flags and the
//! debounced now-playing snapshot shared with the UI.

mod model;

pub use model::*;
