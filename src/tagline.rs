//! Rotating tagline shown under the header: a cyclic list of short
//! strings with a fade-out/swap/hold choreography.

mod rotator;

pub use rotator::*;

#[cfg(test)]
mod tests;
