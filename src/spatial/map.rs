//! Slicing decoded map images into tile grids

use crate::io::configuration::{MAP_COLS, MAP_ROWS};
use crate::io::error::{Result, invalid_parameter, malformed_image};
use crate::spatial::tile::{Tile, TileShape};
use crate::terrain::{Palette, State};
use ndarray::Array2;

/// Tile dimensions shared by every map of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MapShape {
    /// Tile rows per map
    pub rows: usize,
    /// Tile columns per map
    pub cols: usize,
}

impl Default for MapShape {
    fn default() -> Self {
        Self {
            rows: MAP_ROWS,
            cols: MAP_COLS,
        }
    }
}

impl MapShape {
    /// Create a map shape
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(invalid_parameter(
                "map_shape",
                &format!("{rows}x{cols}"),
                &"dimensions must be positive",
            ));
        }
        Ok(Self { rows, cols })
    }

    /// Number of tiles in one map
    pub const fn tile_count(&self) -> usize {
        self.rows * self.cols
    }
}

/// Grid of tiles decoded from one image, addressed by `[row, col]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Map {
    grid: Array2<Tile>,
}

impl Map {
    /// Wrap a tile grid
    pub const fn new(grid: Array2<Tile>) -> Self {
        Self { grid }
    }

    /// Tile grid dimensions as (rows, cols)
    pub fn dim(&self) -> (usize, usize) {
        self.grid.dim()
    }

    /// Tile at a grid position, if inside the map
    pub fn get(&self, position: [usize; 2]) -> Option<&Tile> {
        self.grid.get(position)
    }

    /// Tiles with their positions in row-major order
    pub fn tiles(&self) -> impl Iterator<Item = ([usize; 2], &Tile)> {
        self.grid
            .indexed_iter()
            .map(|((row, col), tile)| ([row, col], tile))
    }
}

/// Converts flat RGBA pixel buffers into tile grids
#[derive(Debug, Clone, Copy, Default)]
pub struct MapDecoder {
    map_shape: MapShape,
    tile_shape: TileShape,
    palette: Palette,
}

impl MapDecoder {
    /// Create a decoder for the given layout
    pub const fn new(map_shape: MapShape, tile_shape: TileShape, palette: Palette) -> Self {
        Self {
            map_shape,
            tile_shape,
            palette,
        }
    }

    /// Map grid dimensions this decoder produces
    pub const fn map_shape(&self) -> MapShape {
        self.map_shape
    }

    /// Tile dimensions this decoder produces
    pub const fn tile_shape(&self) -> TileShape {
        self.tile_shape
    }

    /// Image width in pixels this decoder expects
    pub const fn image_width(&self) -> usize {
        self.map_shape.cols * self.tile_shape.cols
    }

    /// Image height in pixels this decoder expects
    pub const fn image_height(&self) -> usize {
        self.map_shape.rows * self.tile_shape.rows
    }

    /// Decode a row-major pixel buffer into a map
    ///
    /// The pixel at local offset `(a, b)` of the tile at `(row, col)` lives at
    /// `row * width * tile_rows + col * tile_cols + a * width + b`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The buffer length or image width does not match the map layout
    /// - Any pixel color is outside the palette
    pub fn decode(&self, pixels: &[[u8; 4]], image_width: usize) -> Result<Map> {
        if image_width != self.image_width() {
            return Err(malformed_image(&format!(
                "image width {image_width} px, expected {}",
                self.image_width()
            )));
        }
        let expected_len = self.map_shape.rows * self.tile_shape.rows * image_width;
        if pixels.len() != expected_len {
            return Err(malformed_image(&format!(
                "{} pixels, expected {expected_len}",
                pixels.len()
            )));
        }

        let TileShape {
            rows: tile_rows,
            cols: tile_cols,
        } = self.tile_shape;
        let mut tiles = Vec::with_capacity(self.map_shape.tile_count());

        for row in 0..self.map_shape.rows {
            for col in 0..self.map_shape.cols {
                let origin = row * image_width * tile_rows + col * tile_cols;
                let mut states = Vec::with_capacity(self.tile_shape.pixel_count());
                for a in 0..tile_rows {
                    for b in 0..tile_cols {
                        let index = origin + a * image_width + b;
                        let color = pixels.get(index).copied().ok_or_else(|| {
                            malformed_image(&format!("pixel index {index} out of range"))
                        })?;
                        let pixel = (index % image_width, index / image_width);
                        states.push(self.palette.classify_at(color, pixel)?);
                    }
                }
                tiles.push(Tile::from_states(self.tile_shape, states)?);
            }
        }

        let grid = Array2::from_shape_vec((self.map_shape.rows, self.map_shape.cols), tiles)
            .map_err(|_shape_error| malformed_image(&"tile grid does not match map shape"))?;
        Ok(Map::new(grid))
    }

    /// Render a map back into a row-major pixel buffer
    ///
    /// The inverse of [`MapDecoder::decode`]; the pipeline never calls it. It
    /// exists for authoring map fixtures.
    pub fn encode(&self, map: &Map) -> Vec<[u8; 4]> {
        let width = self.image_width();
        let mut pixels = vec![self.palette.to_color(State::Empty); width * self.image_height()];
        for ([row, col], tile) in map.tiles() {
            let origin = row * width * self.tile_shape.rows + col * self.tile_shape.cols;
            for ((a, b), &state) in tile.cells().indexed_iter() {
                if let Some(pixel) = pixels.get_mut(origin + a * width + b) {
                    *pixel = self.palette.to_color(state);
                }
            }
        }
        pixels
    }
}
