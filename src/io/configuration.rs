//! Pipeline constants and runtime configuration defaults

// Tile cell size in output pixels; larger tiles read less noisy
/// Default tile cell width
pub const DEFAULT_TILE_WIDTH: u32 = 40;
/// Default tile cell height
pub const DEFAULT_TILE_HEIGHT: u32 = 40;

// Grid density bounds; columns derive from source width, rows follow aspect
/// Default minimum number of grid columns
pub const DEFAULT_MIN_COLUMNS: usize = 60;
/// Default maximum number of grid columns
pub const DEFAULT_MAX_COLUMNS: usize = 160;

/// Default number of nearest tiles considered per cell
pub const DEFAULT_TOP_K: usize = 50;

// Blend weight of the mosaic layer over the rescaled original
/// Default lower bound for the blend alpha
pub const DEFAULT_ALPHA_MIN: f32 = 0.18;
/// Default upper bound for the blend alpha
pub const DEFAULT_ALPHA_MAX: f32 = 0.45;

// Dense grids make individual tiles less visible, so alpha scales
// down gently with cell count before clamping to the configured range
/// Base alpha before density adjustment
pub const ALPHA_BASE: f32 = 0.42;
/// Alpha reduction per grid cell
pub const ALPHA_DENSITY_SLOPE: f32 = 8e-6;

/// Gaussian sigma for the final unsharp mask
pub const SHARPEN_SIGMA: f32 = 1.5;
/// Channel difference threshold for the final unsharp mask
pub const SHARPEN_THRESHOLD: i32 = 3;

/// Default JPEG encoding quality
pub const DEFAULT_JPEG_QUALITY: u8 = 95;

/// Tile image extensions accepted when scanning the library directory
pub const TILE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "bmp", "tiff", "tif"];

/// Immutable configuration for one mosaic run
///
/// Carries the full tuning surface so components receive explicit values
/// instead of reading global state.
#[derive(Debug, Clone)]
pub struct MosaicConfig {
    /// Tile cell width in pixels
    pub tile_width: u32,
    /// Tile cell height in pixels
    pub tile_height: u32,
    /// Minimum number of grid columns
    pub min_columns: usize,
    /// Maximum number of grid columns
    pub max_columns: usize,
    /// Number of nearest tiles considered per cell
    pub top_k: usize,
    /// Lower bound for the blend alpha
    pub alpha_min: f32,
    /// Upper bound for the blend alpha
    pub alpha_max: f32,
    /// JPEG encoding quality for `.jpg`/`.jpeg` outputs
    pub jpeg_quality: u8,
}

impl Default for MosaicConfig {
    fn default() -> Self {
        Self {
            tile_width: DEFAULT_TILE_WIDTH,
            tile_height: DEFAULT_TILE_HEIGHT,
            min_columns: DEFAULT_MIN_COLUMNS,
            max_columns: DEFAULT_MAX_COLUMNS,
            top_k: DEFAULT_TOP_K,
            alpha_min: DEFAULT_ALPHA_MIN,
            alpha_max: DEFAULT_ALPHA_MAX,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

impl MosaicConfig {
    /// Validate the configuration surface before a run
    ///
    /// # Errors
    ///
    /// Returns an `InvalidParameter` error if any field is outside its
    /// documented range or the bounds are inverted.
    pub fn validate(&self) -> crate::io::error::Result<()> {
        use crate::io::error::invalid_parameter;

        if self.tile_width == 0 || self.tile_height == 0 {
            return Err(invalid_parameter(
                "tile_size",
                &format!("{}x{}", self.tile_width, self.tile_height),
                &"tile dimensions must be nonzero",
            ));
        }
        if self.min_columns == 0 {
            return Err(invalid_parameter(
                "min_columns",
                &self.min_columns,
                &"must be at least 1",
            ));
        }
        if self.min_columns > self.max_columns {
            return Err(invalid_parameter(
                "max_columns",
                &self.max_columns,
                &format!("must be at least min_columns ({})", self.min_columns),
            ));
        }
        if self.top_k == 0 {
            return Err(invalid_parameter("top_k", &self.top_k, &"must be at least 1"));
        }
        if self.alpha_min > self.alpha_max {
            return Err(invalid_parameter(
                "alpha_max",
                &self.alpha_max,
                &format!("must be at least alpha_min ({})", self.alpha_min),
            ));
        }
        Ok(())
    }
}
