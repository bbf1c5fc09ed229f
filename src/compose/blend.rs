//! Blending the mosaic against the rescaled original

use crate::io::configuration::{ALPHA_BASE, ALPHA_DENSITY_SLOPE, SHARPEN_SIGMA, SHARPEN_THRESHOLD};
use crate::io::error::{MosaicError, Result};
use image::RgbImage;
use image::imageops::{self, FilterType};

/// Blend alpha scaled by grid density
///
/// Dense grids make individual tiles less visible, so the mosaic weight
/// drops gently with cell count before clamping to the configured range.
/// This keeps the balance between tile texture and original-image structure
/// automatic instead of hand-tuned per image. `alpha_min` must not exceed
/// `alpha_max`; configuration validation enforces this before a run.
///
/// # Panics
///
/// Panics if `alpha_min` is greater than `alpha_max`.
pub fn auto_alpha(cols: usize, rows: usize, alpha_min: f32, alpha_max: f32) -> f32 {
    let density = (cols * rows) as f32;
    (ALPHA_BASE - ALPHA_DENSITY_SLOPE * density).clamp(alpha_min, alpha_max)
}

/// Per-pixel linear interpolation between mosaic and original
///
/// `alpha` weights the mosaic; `1 - alpha` weights the rescaled original.
///
/// # Errors
///
/// Returns a `DimensionMismatch` error if the two images differ in size.
pub fn blend(mosaic: &RgbImage, original: &RgbImage, alpha: f32) -> Result<RgbImage> {
    if mosaic.dimensions() != original.dimensions() {
        return Err(MosaicError::DimensionMismatch {
            canvas: mosaic.dimensions(),
            original: original.dimensions(),
        });
    }

    let (width, height) = mosaic.dimensions();
    let mut out = RgbImage::new(width, height);

    for (dst, (mosaic_px, original_px)) in out
        .pixels_mut()
        .zip(mosaic.pixels().zip(original.pixels()))
    {
        let image::Rgb(mosaic_channels) = *mosaic_px;
        let image::Rgb(original_channels) = *original_px;

        let mut blended = [0u8; 3];
        for ((channel, m), o) in blended
            .iter_mut()
            .zip(mosaic_channels)
            .zip(original_channels)
        {
            let value = alpha * f32::from(m) + (1.0 - alpha) * f32::from(o);
            *channel = value.round().clamp(0.0, 255.0) as u8;
        }
        *dst = image::Rgb(blended);
    }

    Ok(out)
}

/// Rescale an image to the given dimensions with Lanczos resampling
pub fn rescale(img: &RgbImage, width: u32, height: u32) -> RgbImage {
    imageops::resize(img, width, height, FilterType::Lanczos3)
}

/// Unsharp mask restoring edge crispness lost in blending
///
/// Last operation before export.
pub fn sharpen(img: &RgbImage) -> RgbImage {
    imageops::unsharpen(img, SHARPEN_SIGMA, SHARPEN_THRESHOLD)
}
