//! Nearest-neighbor search over tile colors
//!
//! The catalog is queried once per grid cell, which can mean tens of
//! thousands of lookups, so a balanced spatial partition replaces the
//! linear scan that would otherwise dominate the run.

/// Balanced k-d tree over 3-component colors
pub mod kdtree;

pub use kdtree::{ColorIndex, Neighbor};
