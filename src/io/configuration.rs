//! Processing constants and runtime configuration defaults

use crate::spatial::map::MapShape;
use crate::spatial::tile::TileShape;
use std::path::PathBuf;

// Observed board layout: 7x5 grid of 4x8 pixel tiles
/// Pixel rows per tile
pub const TILE_ROWS: usize = 4;
/// Pixel columns per tile
pub const TILE_COLS: usize = 8;
/// Tile rows per map
pub const MAP_ROWS: usize = 7;
/// Tile columns per map
pub const MAP_COLS: usize = 5;

// Palette, all fully opaque
/// Background color for empty terrain
pub const EMPTY_COLOR: [u8; 4] = [255, 255, 255, 255];
/// Wall color
pub const WALL_COLOR: [u8; 4] = [0, 0, 0, 255];
/// Walkable path color
pub const PATH_COLOR: [u8; 4] = [0, 0, 255, 255];
/// Starting area color
pub const START_COLOR: [u8; 4] = [255, 0, 0, 255];

/// Shared secret keying the tile digest when none is supplied
pub const DEFAULT_HASH_SECRET: &str = "dungeontiles";
/// Context string for deriving the digest key from the secret
pub const KEY_DERIVATION_CONTEXT: &str = "dungeontiles 2024-06-01 tile identity key";
/// Number of hex characters in a displayed tile id
pub const TILE_ID_HEX_LEN: usize = 8;

/// Pixel block size of the enlarged tile export
pub const EXPORT_SCALE: u32 = 100;
/// Board origin as (row, col) offset; displayed positions are 1-based
pub const BOARD_ORIGIN: [i64; 2] = [-1, -1];

// Output layout
/// Default output directory
pub const DEFAULT_OUTPUT_DIR: &str = "output";
/// Catalog report file name
pub const CATALOG_REPORT_FILE: &str = "catalog.txt";
/// Rule script file name
pub const RULES_FILE: &str = "rules.txt";
/// Directory holding exported tile images
pub const TILES_DIR: &str = "tiles";
/// Extension of accepted map images
pub const MAP_EXTENSION: &str = "png";

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

/// Effective settings for one processing run
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Map image file or directory to scan
    pub target: PathBuf,
    /// Directory receiving all artifacts
    pub output_dir: PathBuf,
    /// Secret keying the tile digest
    pub secret: String,
    /// Explicit start tile id in hex, overriding detection
    pub start_tile: Option<String>,
    /// Pixel dimensions of one tile
    pub tile_shape: TileShape,
    /// Tile dimensions of one map
    pub map_shape: MapShape,
    /// Whether tile images are written
    pub export_images: bool,
    /// Whether progress bars are drawn
    pub show_progress: bool,
}

impl PipelineConfig {
    /// Default settings for the given target
    pub fn new(target: PathBuf) -> Self {
        Self {
            target,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            secret: DEFAULT_HASH_SECRET.to_string(),
            start_tile: None,
            tile_shape: TileShape::default(),
            map_shape: MapShape::default(),
            export_images: true,
            show_progress: false,
        }
    }
}
