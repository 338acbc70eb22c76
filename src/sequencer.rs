//! The playback sequencer: randomized play order plus the transition
//! state machine that fades tracks in and guarantees only one track is
//! ever audible.
//!
//! The controller in `sequencer::controller` operates on abstract
//! [`Deck`](controller::Deck)s so its phases can be advanced synthetically
//! in tests; the audio thread provides the real rodio-backed decks.

mod controller;
mod order;

pub use controller::*;
pub use order::{next_index, shuffled_order};

#[cfg(test)]
mod tests;
