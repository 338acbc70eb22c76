//! Configuration loader and schema types.
//!
//! Settings are layered: struct defaults, then an optional TOML file,
//! then environment overrides (prefix `MARQUEE__`).

mod load;
mod schema;

pub use schema::*;
