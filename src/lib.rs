//! Tile catalog and reveal-rule generation for tabletop dungeon maps
//!
//! Map images are sliced into fixed-size terrain tiles, identical tiles are
//! collapsed under a keyed content digest, and each narratable tile's exits
//! are turned into instructions telling players which neighbor to reveal.

#![forbid(unsafe_code)]

/// Tile connectivity analysis from edge probes
pub mod analysis;
/// Tile identity and the cross-map catalog
pub mod catalog;
/// Input/output operations and error handling
pub mod io;
/// Reveal-rule outline and rendering
pub mod rules;
/// Tiles, maps and the dataset of decoded maps
pub mod spatial;
/// Terrain states and pixel classification
pub mod terrain;

pub use io::error::{ProcessingError, Result};
