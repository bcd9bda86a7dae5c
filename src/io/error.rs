//! Error types and context management for tile processing operations

use crate::analysis::connectivity::Direction;
use crate::catalog::hasher::TileId;
use std::fmt;
use std::path::{Path, PathBuf};

/// Main error type for all processing operations
#[derive(Debug)]
pub enum ProcessingError {
    /// Failed to load source image from filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save a tile image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// A pixel color is outside the accepted four-color palette
    UnknownPixel {
        /// Source image, when known
        path: Option<PathBuf>,
        /// Pixel coordinate as (x, y)
        pixel: (usize, usize),
        /// Observed RGBA color
        color: [u8; 4],
    },

    /// A terrain state code has no corresponding state
    UnknownState {
        /// The rejected code
        value: u8,
    },

    /// Pixel buffer does not match the expected map dimensions
    MalformedImage {
        /// Source image, when known
        path: Option<PathBuf>,
        /// Description of the mismatch
        reason: String,
    },

    /// Maps in one dataset disagree on tile-grid shape
    InconsistentMapDimensions {
        /// Index of the offending map in dataset order
        map_index: usize,
        /// Grid shape of the first map (rows, cols)
        expected: (usize, usize),
        /// Grid shape of the offending map (rows, cols)
        found: (usize, usize),
    },

    /// Two distinct tile contents truncate to the same display id
    TileIdCollision {
        /// The shared truncated id
        id: TileId,
        /// Canonical content already in the catalog
        existing: String,
        /// Canonical content that collided with it
        incoming: String,
    },

    /// More than one distinct tile carries a start pixel
    AmbiguousStartTile {
        /// Every tile id containing a start pixel
        candidates: Vec<TileId>,
    },

    /// A tile id was requested that the catalog does not contain
    UnknownTile {
        /// The missing id
        id: TileId,
    },

    /// An open exit points outside the map grid
    BoundaryExit {
        /// Tile whose exit leaves the grid
        id: TileId,
        /// Map index (dataset order)
        map_index: usize,
        /// Grid position as [row, col]
        position: [usize; 2],
        /// Direction of the exit
        direction: Direction,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },
}

impl fmt::Display for ProcessingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::UnknownPixel { path, pixel, color } => {
                write!(
                    f,
                    "Unknown pixel color {color:?} at ({}, {}) in '{}'",
                    pixel.0,
                    pixel.1,
                    display_path(path.as_deref())
                )
            }
            Self::UnknownState { value } => {
                write!(f, "Unknown terrain state code {value}")
            }
            Self::MalformedImage { path, reason } => {
                write!(
                    f,
                    "Malformed map image '{}': {reason}",
                    display_path(path.as_deref())
                )
            }
            Self::InconsistentMapDimensions {
                map_index,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Map {map_index} has a {}x{} tile grid, expected {}x{}",
                    found.0, found.1, expected.0, expected.1
                )
            }
            Self::TileIdCollision {
                id,
                existing,
                incoming,
            } => {
                write!(
                    f,
                    "Tile id {id} collides: '{existing}' and '{incoming}' share a truncated digest"
                )
            }
            Self::AmbiguousStartTile { candidates } => {
                let ids: Vec<String> = candidates.iter().map(ToString::to_string).collect();
                write!(
                    f,
                    "Several distinct tiles contain a start pixel: {}",
                    ids.join(", ")
                )
            }
            Self::UnknownTile { id } => write!(f, "Tile {id} is not in the catalog"),
            Self::BoundaryExit {
                id,
                map_index,
                position,
                direction,
            } => {
                write!(
                    f,
                    "Tile {id} in map {map_index} at [{}, {}] exits {direction} off the grid",
                    position[0], position[1]
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
        }
    }
}

fn display_path(path: Option<&Path>) -> String {
    path.map_or_else(|| "<unknown>".to_string(), |p| p.display().to_string())
}

impl std::error::Error for ProcessingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for processing results
pub type Result<T> = std::result::Result<T, ProcessingError>;

/// Attaches the source image path to errors raised while decoding it
pub trait WithPath<T> {
    /// Fill in the path of path-aware errors that do not carry one yet
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path applied
    fn with_path(self, path: &Path) -> Result<T>;
}

impl<T, E> WithPath<T> for std::result::Result<T, E>
where
    E: Into<ProcessingError>,
{
    fn with_path(self, path: &Path) -> Result<T> {
        self.map_err(|e| {
            let mut error = e.into();
            // Only decode errors are raised without knowing their file
            match &mut error {
                ProcessingError::UnknownPixel { path: slot, .. }
                | ProcessingError::MalformedImage { path: slot, .. } => {
                    if slot.is_none() {
                        *slot = Some(path.to_path_buf());
                    }
                }
                _ => {}
            }
            error
        })
    }
}

impl From<image::ImageError> for ProcessingError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for ProcessingError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> ProcessingError {
    ProcessingError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a malformed image error without a known path
pub fn malformed_image(reason: &impl ToString) -> ProcessingError {
    ProcessingError::MalformedImage {
        path: None,
        reason: reason.to_string(),
    }
}
