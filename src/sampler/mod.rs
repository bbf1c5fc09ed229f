//! Grid sizing and target color sampling
//!
//! Derives the mosaic grid dimensions from the source aspect ratio and maps
//! each grid cell to the area-average color of its source region.

/// Per-cell target color computation
pub mod colors;
/// Grid dimension selection
pub mod grid;

pub use colors::compute_cell_colors;
pub use grid::compute_grid_size;
