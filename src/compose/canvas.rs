//! Tile pasting onto the output canvas

use crate::catalog::TileCatalog;
use crate::io::error::{MosaicError, Result};
use image::RgbImage;
use image::imageops;
use ndarray::Array2;

/// Assemble the selected tiles into the output canvas
///
/// The canvas measures cols x tile width by rows x tile height; cells tile
/// it exactly with no gaps or overlap.
///
/// # Errors
///
/// Returns an `InvalidTileIndex` error if the selection references a tile
/// outside the catalog.
pub fn compose(catalog: &TileCatalog, selection: &Array2<usize>) -> Result<RgbImage> {
    let (rows, cols) = selection.dim();
    let tile_width = catalog.tile_width();
    let tile_height = catalog.tile_height();

    let mut canvas = RgbImage::new(cols as u32 * tile_width, rows as u32 * tile_height);

    for ((row, col), &tile_index) in selection.indexed_iter() {
        let tile = catalog
            .tile(tile_index)
            .ok_or(MosaicError::InvalidTileIndex {
                index: tile_index,
                catalog_size: catalog.len(),
            })?;
        imageops::replace(
            &mut canvas,
            tile.pixels(),
            i64::from(col as u32 * tile_width),
            i64::from(row as u32 * tile_height),
        );
    }

    Ok(canvas)
}
