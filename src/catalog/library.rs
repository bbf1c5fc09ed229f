//! Tile library construction from a directory of images

use crate::catalog::tiles::Tile;
use crate::io::configuration::TILE_EXTENSIONS;
use crate::io::error::{MosaicError, Result};
use image::RgbImage;
use std::path::{Path, PathBuf};

/// Ordered, immutable set of normalized tiles
///
/// Built once at startup and read-only thereafter; the catalog owns every
/// tile's pixel buffer so the compositor can paste without re-decoding.
#[derive(Debug, Clone)]
pub struct TileCatalog {
    tiles: Vec<Tile>,
    tile_width: u32,
    tile_height: u32,
    skipped_files: usize,
}

impl TileCatalog {
    /// Load all tile images from a directory
    ///
    /// Scans non-recursively for files with recognized image extensions in
    /// sorted path order. Files that fail to decode are skipped and counted
    /// rather than aborting the run.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The directory cannot be read
    /// - No file in the directory decodes to a usable image
    pub fn load(dir: &Path, tile_width: u32, tile_height: u32) -> Result<Self> {
        let mut paths = Vec::new();
        let entries = std::fs::read_dir(dir).map_err(|e| MosaicError::FileSystem {
            path: dir.to_path_buf(),
            operation: "read tile directory",
            source: e,
        })?;
        for entry in entries {
            let path = entry
                .map_err(|e| MosaicError::FileSystem {
                    path: dir.to_path_buf(),
                    operation: "read tile directory",
                    source: e,
                })?
                .path();
            if path.is_file() && has_tile_extension(&path) {
                paths.push(path);
            }
        }
        paths.sort();

        let mut images = Vec::new();
        let mut skipped = 0;
        for path in &paths {
            match image::open(path) {
                Ok(img) => images.push(img.to_rgb8()),
                Err(_) => skipped += 1,
            }
        }

        Self::build(images, tile_width, tile_height, skipped, dir.to_path_buf())
    }

    /// Build a catalog from already-decoded images
    ///
    /// # Errors
    ///
    /// Returns an `EmptyLibrary` error if no images are provided.
    pub fn from_images(images: Vec<RgbImage>, tile_width: u32, tile_height: u32) -> Result<Self> {
        Self::build(images, tile_width, tile_height, 0, PathBuf::from("<memory>"))
    }

    fn build(
        images: Vec<RgbImage>,
        tile_width: u32,
        tile_height: u32,
        skipped_files: usize,
        dir: PathBuf,
    ) -> Result<Self> {
        if images.is_empty() {
            return Err(MosaicError::EmptyLibrary {
                dir,
                skipped: skipped_files,
            });
        }

        let tiles = images
            .iter()
            .map(|img| Tile::from_image(img, tile_width, tile_height))
            .collect();

        Ok(Self {
            tiles,
            tile_width,
            tile_height,
            skipped_files,
        })
    }

    /// Number of tiles in the catalog
    pub const fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the catalog holds no tiles
    ///
    /// Construction guarantees at least one tile, so this only returns true
    /// for catalogs obtained through cloning tricks in tests.
    pub const fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Tile at the given catalog index
    pub fn tile(&self, index: usize) -> Option<&Tile> {
        self.tiles.get(index)
    }

    /// Representative colors in catalog order, one per tile
    pub fn colors(&self) -> Vec<[f32; 3]> {
        self.tiles.iter().map(Tile::mean_color).collect()
    }

    /// Normalized tile width in pixels
    pub const fn tile_width(&self) -> u32 {
        self.tile_width
    }

    /// Normalized tile height in pixels
    pub const fn tile_height(&self) -> u32 {
        self.tile_height
    }

    /// Number of library files that failed to decode during loading
    pub const fn skipped_files(&self) -> usize {
        self.skipped_files
    }
}

// Extension comparison is case-insensitive to match common photo exports
fn has_tile_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            let lower = ext.to_ascii_lowercase();
            TILE_EXTENSIONS.contains(&lower.as_str())
        })
}
