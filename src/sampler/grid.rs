//! Mosaic grid dimension selection from source aspect ratio

use crate::io::error::{MosaicError, Result};
use std::path::PathBuf;

/// Choose the mosaic grid dimensions for a source image
///
/// Columns derive from the source width in tile-width units, clamped to the
/// configured density bounds; rows then follow the source aspect ratio with
/// a correction for non-square tiles, so the output is never forced square.
/// Rows are always at least 1.
///
/// # Errors
///
/// Returns an `InvalidImage` error if the source has a zero dimension.
pub fn compute_grid_size(
    source_width: u32,
    source_height: u32,
    tile_width: u32,
    tile_height: u32,
    min_columns: usize,
    max_columns: usize,
) -> Result<(usize, usize)> {
    if source_width == 0 || source_height == 0 {
        return Err(MosaicError::InvalidImage {
            path: PathBuf::from("<source>"),
            width: source_width,
            height: source_height,
        });
    }

    let cols = ((source_width / tile_width.max(1)) as usize).clamp(min_columns, max_columns);

    let aspect = f64::from(source_height) / f64::from(source_width);
    let tile_aspect = f64::from(tile_width) / f64::from(tile_height.max(1));
    let rows = ((cols as f64 * aspect * tile_aspect).round() as usize).max(1);

    Ok((cols, rows))
}
