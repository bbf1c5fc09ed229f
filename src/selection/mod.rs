//! Tile choice per grid cell
//!
//! Combines nearest-neighbor candidates with a randomized anti-repetition
//! policy to reduce visible patterning in the output.

/// Randomized candidate selection with neighbor exclusion
pub mod selector;

pub use selector::TileSelector;
