//! Photographic mosaic generation through color-indexed tile matching
//!
//! The pipeline normalizes a library of tile images, indexes their average
//! colors in a k-d tree, maps each cell of a source-derived grid to its area
//! average color, selects a tile per cell with randomized anti-repetition, and
//! composites the result blended against the rescaled original.

#![forbid(unsafe_code)]

/// Tile library loading, normalization, and representative colors
pub mod catalog;
/// Assembly of selected tiles into the output canvas, blending, and sharpening
pub mod compose;
/// Spatial index over tile colors supporting k-nearest-neighbor queries
pub mod index;
/// Input/output operations, configuration, and error handling
pub mod io;
/// Grid sizing and per-cell target color sampling from the source image
pub mod sampler;
/// Per-cell tile choice with anti-repetition policy
pub mod selection;

pub use io::error::{MosaicError, Result};
