//! Spatial data structures for tiles and maps
//!
//! This module contains spatial-related functionality including:
//! - Tile matrices and their canonical form
//! - Decoding map images into tile grids
//! - The ordered dataset of all maps in a run

/// Ordered dataset of decoded maps
pub mod dataset;
/// Map grids and the pixel-buffer decoder
pub mod map;
/// Tile matrices and tile shapes
pub mod tile;

pub use dataset::Dataset;
pub use map::{Map, MapDecoder, MapShape};
pub use tile::{Tile, TileShape};
