//! Command-line interface for one-shot mosaic generation

use crate::catalog::TileCatalog;
use crate::compose::{auto_alpha, blend, compose, rescale, sharpen};
use crate::index::ColorIndex;
use crate::io::configuration::{
    DEFAULT_ALPHA_MAX, DEFAULT_ALPHA_MIN, DEFAULT_JPEG_QUALITY, DEFAULT_MAX_COLUMNS,
    DEFAULT_MIN_COLUMNS, DEFAULT_TILE_HEIGHT, DEFAULT_TILE_WIDTH, DEFAULT_TOP_K, MosaicConfig,
};
use crate::io::error::{MosaicError, Result};
use crate::io::image::{export_canvas, load_rgb_image};
use crate::io::progress::ProgressManager;
use crate::sampler::{compute_cell_colors, compute_grid_size};
use crate::selection::TileSelector;
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "photomosaic")]
#[command(
    author,
    version,
    about = "Generate a photographic mosaic from a library of tile images"
)]
/// Command-line arguments for the mosaic generator
pub struct Cli {
    /// Source image to reproduce as a mosaic
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,

    /// Directory containing tile images
    #[arg(short, long)]
    pub tiles: PathBuf,

    /// Output image path
    #[arg(short, long)]
    pub output: PathBuf,

    /// Tile cell width in pixels
    #[arg(long, default_value_t = DEFAULT_TILE_WIDTH)]
    pub tile_width: u32,

    /// Tile cell height in pixels
    #[arg(long, default_value_t = DEFAULT_TILE_HEIGHT)]
    pub tile_height: u32,

    /// Minimum number of grid columns
    #[arg(long, default_value_t = DEFAULT_MIN_COLUMNS)]
    pub min_cols: usize,

    /// Maximum number of grid columns
    #[arg(long, default_value_t = DEFAULT_MAX_COLUMNS)]
    pub max_cols: usize,

    /// Number of nearest tiles considered per cell
    #[arg(short = 'k', long, default_value_t = DEFAULT_TOP_K)]
    pub top_k: usize,

    /// Lower bound for the mosaic blend alpha
    #[arg(long, default_value_t = DEFAULT_ALPHA_MIN)]
    pub alpha_min: f32,

    /// Upper bound for the mosaic blend alpha
    #[arg(long, default_value_t = DEFAULT_ALPHA_MAX)]
    pub alpha_max: f32,

    /// JPEG quality for .jpg/.jpeg outputs
    #[arg(long, default_value_t = DEFAULT_JPEG_QUALITY)]
    pub quality: u8,

    /// Random seed for reproducible tile selection
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Suppress progress and summary output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Collect the tuning surface into an immutable run configuration
    pub const fn config(&self) -> MosaicConfig {
        MosaicConfig {
            tile_width: self.tile_width,
            tile_height: self.tile_height,
            min_columns: self.min_cols,
            max_columns: self.max_cols,
            top_k: self.top_k,
            alpha_min: self.alpha_min,
            alpha_max: self.alpha_max,
            jpeg_quality: self.quality,
        }
    }
}

/// Runs the full mosaic pipeline for a parsed command line
pub struct MosaicProcessor {
    cli: Cli,
    progress: Option<ProgressManager>,
}

impl MosaicProcessor {
    /// Create a processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress = cli.should_show_progress().then(ProgressManager::new);
        Self { cli, progress }
    }

    /// Execute the pipeline end to end
    ///
    /// Stages run sequentially: load source and tile library, build the
    /// color index, sample the grid, select tiles, composite, blend,
    /// sharpen, and export. Any failure aborts before the output file is
    /// written.
    ///
    /// # Errors
    ///
    /// Returns an error if parameter validation, any load or decode, grid
    /// sampling, selection, or export fails.
    pub fn process(&mut self) -> Result<()> {
        let config = self.cli.config();
        config.validate()?;

        // An explicit seed makes the run reproducible; otherwise draw one
        // and report it so the run can be replayed
        let seed = self.cli.seed.unwrap_or_else(rand::random);

        self.stage("loading source image");
        let source = load_rgb_image(&self.cli.source)?;
        let (source_width, source_height) = source.dimensions();
        if source_width == 0 || source_height == 0 {
            return Err(MosaicError::InvalidImage {
                path: self.cli.source.clone(),
                width: source_width,
                height: source_height,
            });
        }

        self.stage("loading tile library");
        let catalog = TileCatalog::load(&self.cli.tiles, config.tile_width, config.tile_height)?;

        self.stage("building color index");
        let index = ColorIndex::build(&catalog.colors());

        self.stage("sampling source grid");
        let (cols, rows) = compute_grid_size(
            source_width,
            source_height,
            config.tile_width,
            config.tile_height,
            config.min_columns,
            config.max_columns,
        )?;
        let cells = compute_cell_colors(&source, cols, rows)?;

        self.stage("selecting tiles");
        let mut selector = TileSelector::new(&index, config.top_k, StdRng::seed_from_u64(seed));
        let selection = selector.select_all(&cells)?;

        self.stage("compositing");
        let canvas = compose(&catalog, &selection)?;
        let original = rescale(&source, canvas.width(), canvas.height());
        let alpha = auto_alpha(cols, rows, config.alpha_min, config.alpha_max);
        let blended = blend(&canvas, &original, alpha)?;
        let final_image = sharpen(&blended);

        self.stage("exporting");
        export_canvas(&final_image, &self.cli.output, config.jpeg_quality)?;

        if let Some(ref pm) = self.progress {
            pm.finish();
        }
        self.report(cols, rows, &final_image, alpha, seed, catalog.skipped_files());

        Ok(())
    }

    fn stage(&self, message: &'static str) {
        if let Some(ref pm) = self.progress {
            pm.stage(message);
        }
    }

    // Allow print for user feedback after the run completes
    #[allow(clippy::print_stderr)]
    fn report(
        &self,
        cols: usize,
        rows: usize,
        final_image: &image::RgbImage,
        alpha: f32,
        seed: u64,
        skipped: usize,
    ) {
        if self.cli.quiet {
            return;
        }

        eprintln!("Saved: {}", self.cli.output.display());
        eprintln!("Grid: {cols} x {rows} tiles");
        eprintln!(
            "Output size: {} x {} px",
            final_image.width(),
            final_image.height()
        );
        eprintln!("Blend alpha (mosaic strength): {alpha:.3}");
        eprintln!("Seed: {seed}");
        if skipped > 0 {
            eprintln!("Skipped {skipped} unreadable tile file(s)");
        }
    }
}
