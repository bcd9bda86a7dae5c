//! Fixed-size terrain tiles and their canonical text form

use crate::io::configuration::{TILE_COLS, TILE_ROWS};
use crate::io::error::{Result, invalid_parameter};
use crate::terrain::State;
use ndarray::Array2;

/// Pixel dimensions shared by every tile of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileShape {
    /// Pixel rows per tile
    pub rows: usize,
    /// Pixel columns per tile
    pub cols: usize,
}

impl Default for TileShape {
    fn default() -> Self {
        Self {
            rows: TILE_ROWS,
            cols: TILE_COLS,
        }
    }
}

impl TileShape {
    /// Create a tile shape
    ///
    /// # Errors
    ///
    /// Returns an error if the tile is too small to carry distinct edge probes
    /// (fewer than 2 rows or 4 columns)
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows < 2 {
            return Err(invalid_parameter("tile_rows", &rows, &"must be at least 2"));
        }
        if cols < 4 {
            return Err(invalid_parameter("tile_cols", &cols, &"must be at least 4"));
        }
        Ok(Self { rows, cols })
    }

    /// Number of pixels in one tile
    pub const fn pixel_count(&self) -> usize {
        self.rows * self.cols
    }
}

/// A matrix of terrain states; equal matrices are the same logical tile
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tile {
    cells: Array2<State>,
}

impl Tile {
    /// Wrap a state matrix
    pub const fn new(cells: Array2<State>) -> Self {
        Self { cells }
    }

    /// A tile of one uniform state
    pub fn filled(shape: TileShape, state: State) -> Self {
        Self::new(Array2::from_elem((shape.rows, shape.cols), state))
    }

    /// Build a tile from row-major states
    ///
    /// # Errors
    ///
    /// Returns an error if `states` does not hold exactly `rows * cols` entries
    pub fn from_states(shape: TileShape, states: Vec<State>) -> Result<Self> {
        let len = states.len();
        Array2::from_shape_vec((shape.rows, shape.cols), states)
            .map(Self::new)
            .map_err(|_shape_error| {
                invalid_parameter(
                    "tile states",
                    &len,
                    &format!("expected {} states", shape.pixel_count()),
                )
            })
    }

    /// Parse the canonical digit string produced by [`Tile::canonical`]
    ///
    /// # Errors
    ///
    /// Returns `UnknownState` for a non-state digit, or an error if the length
    /// does not match the shape
    pub fn from_canonical(shape: TileShape, text: &str) -> Result<Self> {
        let states = text
            .chars()
            .map(State::from_digit)
            .collect::<Result<Vec<_>>>()?;
        Self::from_states(shape, states)
    }

    /// Dimensions of this tile
    pub fn shape(&self) -> TileShape {
        let (rows, cols) = self.cells.dim();
        TileShape { rows, cols }
    }

    /// State at a local pixel, if inside the tile
    pub fn get(&self, row: usize, col: usize) -> Option<State> {
        self.cells.get((row, col)).copied()
    }

    /// Underlying state matrix
    pub const fn cells(&self) -> &Array2<State> {
        &self.cells
    }

    /// Whether every pixel is empty background
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&state| state == State::Empty)
    }

    /// Whether any pixel belongs to the starting area
    pub fn contains_start(&self) -> bool {
        self.cells.iter().any(|&state| state == State::Start)
    }

    /// Row-major digit string; the hashed identity of the tile
    pub fn canonical(&self) -> String {
        self.cells.iter().map(|state| state.digit()).collect()
    }
}
