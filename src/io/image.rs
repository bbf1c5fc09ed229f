//! Source image loading and canvas export with quality control

use crate::io::error::{MosaicError, Result};
use image::RgbImage;
use image::codecs::jpeg::JpegEncoder;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Load an image and force RGB for consistent processing
///
/// # Errors
///
/// Returns a `Decode` error carrying the path if the file cannot be read as
/// an image.
pub fn load_rgb_image(path: &Path) -> Result<RgbImage> {
    let img = image::open(path).map_err(|e| MosaicError::Decode {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(img.to_rgb8())
}

/// Save the finished canvas to disk
///
/// JPEG outputs honor the configured quality; any other extension is
/// encoded by format inference. The parent directory is created if missing.
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The output file cannot be created
/// - Encoding fails
pub fn export_canvas(canvas: &RgbImage, path: &Path, jpeg_quality: u8) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| MosaicError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    let is_jpeg = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("jpg") || ext.eq_ignore_ascii_case("jpeg"));

    if is_jpeg {
        let file = File::create(path).map_err(|e| MosaicError::FileSystem {
            path: path.to_path_buf(),
            operation: "create output file",
            source: e,
        })?;
        let writer = BufWriter::new(file);
        let encoder = JpegEncoder::new_with_quality(writer, jpeg_quality);
        canvas
            .write_with_encoder(encoder)
            .map_err(|e| MosaicError::Export {
                path: path.to_path_buf(),
                source: e,
            })?;
    } else {
        canvas.save(path).map_err(|e| MosaicError::Export {
            path: path.to_path_buf(),
            source: e,
        })?;
    }

    Ok(())
}
