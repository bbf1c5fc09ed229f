//! Tile library management
//!
//! Loads library images, normalizes them to a fixed cell size, and computes
//! the representative color used for nearest-neighbor matching.

/// Tile library construction and ownership
pub mod library;
/// Single-tile normalization and color statistics
pub mod tiles;

pub use library::TileCatalog;
pub use tiles::Tile;
