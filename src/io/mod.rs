/// Command-line interface and batch pipeline
pub mod cli;
/// Processing constants and run settings
pub mod configuration;
/// Recursive map image discovery
pub mod discovery;
/// Error types and context helpers
pub mod error;
/// PNG decoding and tile image export
pub mod image;
/// Progress bars for long phases
pub mod progress;
