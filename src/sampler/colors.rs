//! Area-average target colors, one per grid cell
//!
//! Each cell color is the mean over the full corresponding source region.
//! Point sampling would be cheaper but produces noisier, less representative
//! targets, so averaging over the region is deliberate.

use crate::io::error::{MosaicError, Result};
use image::RgbImage;
use ndarray::Array2;
use std::path::PathBuf;

/// Downsample the source image to one mean color per grid cell
///
/// The source is partitioned into `cols` x `rows` rectangular regions that
/// tile it exactly; spans that would round to zero pixels are widened to a
/// single pixel so every cell has a defined color.
///
/// # Errors
///
/// Returns an error if:
/// - `cols` or `rows` is zero
/// - The source image has a zero dimension
pub fn compute_cell_colors(
    source: &RgbImage,
    cols: usize,
    rows: usize,
) -> Result<Array2<[f32; 3]>> {
    let (width, height) = source.dimensions();
    if width == 0 || height == 0 {
        return Err(MosaicError::InvalidImage {
            path: PathBuf::from("<source>"),
            width,
            height,
        });
    }
    if cols == 0 || rows == 0 {
        return Err(crate::io::error::invalid_parameter(
            "grid",
            &format!("{cols}x{rows}"),
            &"grid dimensions must be nonzero",
        ));
    }

    let width = width as usize;
    let height = height as usize;

    Ok(Array2::from_shape_fn((rows, cols), |(row, col)| {
        let (x0, x1) = cell_span(col, cols, width);
        let (y0, y1) = cell_span(row, rows, height);
        region_mean(source, x0, x1, y0, y1)
    }))
}

// Integer partition span for one cell; widened to at least one pixel when
// the grid is denser than the source
fn cell_span(cell: usize, cells: usize, extent: usize) -> (usize, usize) {
    let start = (cell * extent) / cells;
    let end = ((cell + 1) * extent) / cells;
    if end <= start {
        (start.min(extent - 1), (start + 1).min(extent))
    } else {
        (start, end)
    }
}

fn region_mean(source: &RgbImage, x0: usize, x1: usize, y0: usize, y1: usize) -> [f32; 3] {
    let mut sums = [0.0f64; 3];
    let mut count = 0u64;

    for y in y0..y1 {
        for x in x0..x1 {
            let image::Rgb(channels) = *source.get_pixel(x as u32, y as u32);
            for (sum, value) in sums.iter_mut().zip(channels) {
                *sum += f64::from(value);
            }
            count += 1;
        }
    }

    if count == 0 {
        return [0.0; 3];
    }

    sums.map(|sum| (sum / count as f64) as f32)
}
