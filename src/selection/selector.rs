//! Per-cell tile selection with anti-repetition
//!
//! Cells are visited in row-major order. For each cell the color index
//! supplies the nearest candidates, and one is chosen uniformly at random
//! after excluding the tiles already placed in the immediate left and top
//! neighbors. The exclusion window is deliberately fixed to left+top so
//! selection stays deterministic for a given seed; it reduces adjacent
//! repeats rather than guaranteeing their absence.

use crate::index::ColorIndex;
use crate::io::error::Result;
use ndarray::Array2;
use rand::{Rng, rngs::StdRng};

/// Seeded selector mapping cell colors to catalog tile indices
///
/// Holds a reference to the immutable color index and owns the run's RNG;
/// a fixed seed yields an identical selection grid across runs.
pub struct TileSelector<'a> {
    index: &'a ColorIndex,
    top_k: usize,
    rng: StdRng,
}

impl<'a> TileSelector<'a> {
    /// Create a selector over the given color index
    ///
    /// `top_k` is the candidate pool size per cell; pools larger than the
    /// catalog are silently clamped to the catalog size, trading variety
    /// for correctness rather than erroring.
    pub const fn new(index: &'a ColorIndex, top_k: usize, rng: StdRng) -> Self {
        Self { index, top_k, rng }
    }

    /// Choose one tile per cell for the whole grid
    ///
    /// # Errors
    ///
    /// Returns an error if the color index rejects the candidate query,
    /// which indicates a configuration bug (`top_k` of zero or an empty
    /// catalog).
    pub fn select_all(&mut self, cells: &Array2<[f32; 3]>) -> Result<Array2<usize>> {
        let (rows, cols) = cells.dim();
        let k = self.top_k.min(self.index.len());

        let mut chosen = Array2::<usize>::zeros((rows, cols));

        for row in 0..rows {
            for col in 0..cols {
                let target = cells.get((row, col)).copied().unwrap_or([0.0; 3]);
                let candidates = self.index.query(target, k)?;

                let left = (col > 0)
                    .then(|| chosen.get((row, col - 1)).copied())
                    .flatten();
                let top = (row > 0)
                    .then(|| chosen.get((row - 1, col)).copied())
                    .flatten();

                let pool: Vec<usize> = candidates
                    .iter()
                    .map(|neighbor| neighbor.index)
                    .filter(|&index| Some(index) != left && Some(index) != top)
                    .collect();

                // All candidates excluded: fall back to the single nearest
                // match regardless of recency
                let pick = if pool.is_empty() {
                    candidates.first().map_or(0, |neighbor| neighbor.index)
                } else {
                    let slot = self.rng.random_range(0..pool.len());
                    pool.get(slot).copied().unwrap_or(0)
                };

                if let Some(cell) = chosen.get_mut((row, col)) {
                    *cell = pick;
                }
            }
        }

        Ok(chosen)
    }
}
