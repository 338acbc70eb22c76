//! Track discovery: scans a directory for audio files and reads their
//! tags. The playlist is fixed for the session; the sequencer only
//! reorders what the scan found.

mod display;
mod model;
mod scan;

pub use display::display_label;
pub use model::Track;
pub use scan::scan;

#[cfg(test)]
mod tests;
