//! Error types for mosaic pipeline operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all mosaic operations
#[derive(Debug)]
pub enum MosaicError {
    /// No usable tile images were found in the library directory
    EmptyLibrary {
        /// Directory that was scanned for tiles
        dir: PathBuf,
        /// Number of files that were found but failed to decode
        skipped: usize,
    },

    /// Failed to decode an image from the filesystem
    Decode {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// Source image has degenerate dimensions
    InvalidImage {
        /// Path to the source image, if known
        path: PathBuf,
        /// Reported width in pixels
        width: u32,
        /// Reported height in pixels
        height: u32,
    },

    /// Color index query with an unusable neighbor count
    InvalidQuery {
        /// Requested number of neighbors
        k: usize,
        /// Number of tiles in the indexed catalog
        catalog_size: usize,
    },

    /// Pipeline parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Selection references a tile outside the catalog
    InvalidTileIndex {
        /// The out-of-range tile index
        index: usize,
        /// Number of tiles in the catalog
        catalog_size: usize,
    },

    /// Images passed to blending have different dimensions
    DimensionMismatch {
        /// Dimensions of the mosaic canvas (width, height)
        canvas: (u32, u32),
        /// Dimensions of the rescaled original (width, height)
        original: (u32, u32),
    },

    /// Failed to save the finished mosaic to disk
    Export {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for MosaicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyLibrary { dir, skipped } => {
                write!(
                    f,
                    "No usable tile images in '{}' ({skipped} file(s) skipped)",
                    dir.display()
                )
            }
            Self::Decode { path, source } => {
                write!(f, "Failed to decode image '{}': {source}", path.display())
            }
            Self::InvalidImage {
                path,
                width,
                height,
            } => {
                write!(
                    f,
                    "Source image '{}' has degenerate dimensions {width}x{height}",
                    path.display()
                )
            }
            Self::InvalidQuery { k, catalog_size } => {
                write!(
                    f,
                    "Invalid color index query: k = {k} (catalog holds {catalog_size} tiles)"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidTileIndex {
                index,
                catalog_size,
            } => {
                write!(
                    f,
                    "Tile index {index} is out of bounds (catalog holds {catalog_size} tiles)"
                )
            }
            Self::DimensionMismatch { canvas, original } => {
                write!(
                    f,
                    "Blend dimension mismatch: canvas {}x{} vs original {}x{}",
                    canvas.0, canvas.1, original.0, original.1
                )
            }
            Self::Export { path, source } => {
                write!(
                    f,
                    "Failed to export mosaic to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for MosaicError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Decode { source, .. } | Self::Export { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for mosaic results
pub type Result<T> = std::result::Result<T, MosaicError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> MosaicError {
    MosaicError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
