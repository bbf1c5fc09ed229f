//! Tile normalization and representative color computation

use image::RgbImage;
use image::imageops::{self, FilterType};

/// One library image normalized to the catalog's cell size
///
/// The pixel buffer is immutable after construction; its representative color
/// is the per-channel arithmetic mean over the normalized pixels.
#[derive(Debug, Clone)]
pub struct Tile {
    pixels: RgbImage,
    mean_color: [f32; 3],
}

impl Tile {
    /// Normalize a decoded library image into a catalog tile
    ///
    /// Center-crops to the target aspect ratio and resizes with Lanczos
    /// resampling so every tile shares the exact cell dimensions before the
    /// color statistic is computed. Normalizing up front keeps the statistic
    /// stable regardless of the source tile resolution.
    pub fn from_image(img: &RgbImage, width: u32, height: u32) -> Self {
        let pixels = normalize(img, width, height);
        let mean_color = mean_color(&pixels);
        Self { pixels, mean_color }
    }

    /// Normalized pixel buffer
    pub const fn pixels(&self) -> &RgbImage {
        &self.pixels
    }

    /// Representative color, each component in [0, 255]
    pub const fn mean_color(&self) -> [f32; 3] {
        self.mean_color
    }
}

/// Center-crop to the target aspect ratio, then resize to the exact cell size
fn normalize(img: &RgbImage, width: u32, height: u32) -> RgbImage {
    let (src_w, src_h) = img.dimensions();
    if src_w == 0 || src_h == 0 {
        return RgbImage::new(width, height);
    }

    let target_ratio = f64::from(width) / f64::from(height);
    let src_ratio = f64::from(src_w) / f64::from(src_h);

    let (crop_w, crop_h) = if src_ratio > target_ratio {
        let w = (f64::from(src_h) * target_ratio).round() as u32;
        (w.clamp(1, src_w), src_h)
    } else {
        let h = (f64::from(src_w) / target_ratio).round() as u32;
        (src_w, h.clamp(1, src_h))
    };

    let x = (src_w - crop_w) / 2;
    let y = (src_h - crop_h) / 2;
    let cropped = imageops::crop_imm(img, x, y, crop_w, crop_h).to_image();

    imageops::resize(&cropped, width, height, FilterType::Lanczos3)
}

/// Per-channel arithmetic mean over all pixels of an image
///
/// Returns black for an empty image.
pub fn mean_color(img: &RgbImage) -> [f32; 3] {
    let mut sums = [0.0f64; 3];
    let mut count = 0u64;

    for pixel in img.pixels() {
        let image::Rgb(channels) = *pixel;
        for (sum, value) in sums.iter_mut().zip(channels) {
            *sum += f64::from(value);
        }
        count += 1;
    }

    if count == 0 {
        return [0.0; 3];
    }

    sums.map(|sum| (sum / count as f64) as f32)
}
