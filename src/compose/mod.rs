//! Output assembly, blending, and sharpening
//!
//! Pastes the selected tiles into the output canvas, blends it against the
//! rescaled original with an automatically scaled alpha, and applies a final
//! unsharp mask.

/// Alpha computation, linear blending, and sharpening
pub mod blend;
/// Tile pasting onto the output canvas
pub mod canvas;

pub use blend::{auto_alpha, blend, rescale, sharpen};
pub use canvas::compose;
