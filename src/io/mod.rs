//! Input/output operations, CLI driver, and error handling

/// Command-line interface and pipeline driver
pub mod cli;
/// Defaults and tuning constants
pub mod configuration;
/// Error types for mosaic operations
pub mod error;
/// Filesystem collaborators: enumerate, load, and save images
pub mod image;
/// Per-image progress display
pub mod progress;
