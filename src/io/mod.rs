//! Input/output operations and pipeline orchestration

/// Command-line interface and run orchestration
pub mod cli;
/// Pipeline constants and configuration defaults
pub mod configuration;
/// Error types and result alias
pub mod error;
/// Source loading and canvas export
pub mod image;
/// Stage progress display
pub mod progress;
