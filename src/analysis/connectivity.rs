//! Exit detection and decision-point classification from fixed pixel probes
//!
//! Tiles are never flood-filled. A handful of pixel coordinates near each edge
//! are sampled and tested for `Path`; the coordinates are projected from the
//! tile shape so the same rules hold for other tile sizes. For the 4x8 board
//! tiles the probes are:
//!
//! ```text
//!   col: 0 1 2 3 4 5 6 7
//! row 0  . . N . . N . .      north / northwest + northeast
//! row 1  . . . . . . . .
//! row 2  W . . . . . . E      west / east
//! row 3  C . S . . S . .      south / southwest + southeast, C = corner
//! ```
//!
//! The start tile is exempt: it is open on every edge and always narrated.

use crate::catalog::{Catalog, TileId};
use crate::io::error::Result;
use crate::spatial::{Tile, TileShape};
use crate::terrain::State;
use std::fmt;

/// Cardinal exit direction; rows grow southward, columns grow eastward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// Toward row - 1
    North,
    /// Toward row + 1
    South,
    /// Toward col + 1
    East,
    /// Toward col - 1
    West,
}

impl Direction {
    /// All directions in narration order
    pub const ALL: [Self; 4] = [Self::North, Self::South, Self::East, Self::West];

    /// Grid offset as `[row, col]`
    pub const fn offset(self) -> [isize; 2] {
        match self {
            Self::North => [-1, 0],
            Self::South => [1, 0],
            Self::East => [0, 1],
            Self::West => [0, -1],
        }
    }

    /// Neighboring grid cell, or `None` when it falls outside `(rows, cols)`
    pub fn step(self, position: [usize; 2], dim: (usize, usize)) -> Option<[usize; 2]> {
        let [dr, dc] = self.offset();
        let row = position[0].checked_add_signed(dr)?;
        let col = position[1].checked_add_signed(dc)?;
        (row < dim.0 && col < dim.1).then_some([row, col])
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::North => "north",
            Self::South => "south",
            Self::East => "east",
            Self::West => "west",
        };
        f.write_str(name)
    }
}

/// Labelled probe used when deciding whether a tile is worth narrating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Probe {
    /// Top edge, left opening
    NorthWest,
    /// Top edge, right opening
    NorthEast,
    /// Left edge midpoint
    West,
    /// Right edge midpoint
    East,
    /// Bottom edge, left opening
    SouthWest,
    /// Bottom edge, right opening
    SouthEast,
}

impl Probe {
    /// All decision probes
    pub const ALL: [Self; 6] = [
        Self::NorthWest,
        Self::NorthEast,
        Self::West,
        Self::East,
        Self::SouthWest,
        Self::SouthEast,
    ];

    /// Label has a northern component
    pub const fn is_northern(self) -> bool {
        matches!(self, Self::NorthWest | Self::NorthEast)
    }

    /// Label has a southern component
    pub const fn is_southern(self) -> bool {
        matches!(self, Self::SouthWest | Self::SouthEast)
    }

    /// Label has an eastern component
    pub const fn is_eastern(self) -> bool {
        matches!(self, Self::NorthEast | Self::East | Self::SouthEast)
    }

    /// Label has a western component
    pub const fn is_western(self) -> bool {
        matches!(self, Self::NorthWest | Self::West | Self::SouthWest)
    }
}

/// Pixel coordinates (`[row, col]`) sampled inside a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeLayout {
    north: [[usize; 2]; 2],
    south: [[usize; 2]; 2],
    east: [usize; 2],
    west: [usize; 2],
    corner: [usize; 2],
}

impl Default for ProbeLayout {
    fn default() -> Self {
        Self::for_shape(TileShape::default())
    }
}

impl ProbeLayout {
    /// Project the probes onto a tile shape
    ///
    /// Top and bottom openings sit a quarter of the width in from each side;
    /// side openings sit at row `rows / 2`.
    pub const fn for_shape(shape: TileShape) -> Self {
        let left = shape.cols / 4;
        let right = shape.cols.saturating_sub(1 + left);
        let middle = shape.rows / 2;
        let bottom = shape.rows.saturating_sub(1);
        let edge = shape.cols.saturating_sub(1);
        Self {
            north: [[0, left], [0, right]],
            south: [[bottom, left], [bottom, right]],
            east: [middle, edge],
            west: [middle, 0],
            corner: [bottom, 0],
        }
    }

    /// Probes whose `Path` state opens an exit
    pub const fn exit_probes(&self, direction: Direction) -> &[[usize; 2]] {
        match direction {
            Direction::North => &self.north,
            Direction::South => &self.south,
            Direction::East => std::slice::from_ref(&self.east),
            Direction::West => std::slice::from_ref(&self.west),
        }
    }

    /// Coordinate of a decision probe
    pub const fn probe(&self, probe: Probe) -> [usize; 2] {
        match probe {
            Probe::NorthWest => self.north[0],
            Probe::NorthEast => self.north[1],
            Probe::West => self.west,
            Probe::East => self.east,
            Probe::SouthWest => self.south[0],
            Probe::SouthEast => self.south[1],
        }
    }

    /// South-west corner probe that breaks ambiguous two-way ties
    pub const fn corner(&self) -> [usize; 2] {
        self.corner
    }
}

fn is_path(tile: &Tile, [row, col]: [usize; 2]) -> bool {
    tile.get(row, col) == Some(State::Path)
}

/// Exits of a tile judged purely from its pixels
pub fn open_directions_of(tile: &Tile, layout: &ProbeLayout) -> Vec<Direction> {
    Direction::ALL
        .into_iter()
        .filter(|&direction| {
            layout
                .exit_probes(direction)
                .iter()
                .any(|&coordinate| is_path(tile, coordinate))
        })
        .collect()
}

/// Decision probes of a tile that read `Path`
pub fn matched_probes(tile: &Tile, layout: &ProbeLayout) -> Vec<Probe> {
    Probe::ALL
        .into_iter()
        .filter(|&probe| is_path(tile, layout.probe(probe)))
        .collect()
}

/// Whether revealing this tile's neighbors tells the player anything new,
/// judged purely from its pixels
///
/// Rules apply in order:
/// 1. more than two openings: junction
/// 2. exactly one: dead end
/// 3. all openings on the north edge: U-turn, nothing to reveal
/// 4. all openings on the south edge: likewise
/// 5. all openings on the east side: reveal
/// 6. all openings on the west side: reveal
/// 7. otherwise the south-west corner decides
pub fn is_decision_point_of(tile: &Tile, layout: &ProbeLayout) -> bool {
    let matched = matched_probes(tile, layout);

    if matched.len() > 2 {
        return true;
    }
    if matched.len() == 1 {
        return false;
    }
    // An empty set falls through here as a pass-through
    if matched.iter().all(|probe| probe.is_northern()) {
        return false;
    }
    if matched.iter().all(|probe| probe.is_southern()) {
        return false;
    }
    if matched.iter().all(|probe| probe.is_eastern()) {
        return true;
    }
    if matched.iter().all(|probe| probe.is_western()) {
        return true;
    }
    is_path(tile, layout.corner())
}

/// Connectivity queries over catalogued tiles, honoring the start tile
#[derive(Debug, Clone, Copy)]
pub struct ConnectivityAnalyzer<'a> {
    catalog: &'a Catalog,
    layout: ProbeLayout,
}

impl<'a> ConnectivityAnalyzer<'a> {
    /// Create an analyzer over a catalog
    pub const fn new(catalog: &'a Catalog, layout: ProbeLayout) -> Self {
        Self { catalog, layout }
    }

    /// Probe layout in use
    pub const fn layout(&self) -> &ProbeLayout {
        &self.layout
    }

    /// Edges through which a neighbor can be reached
    ///
    /// # Errors
    ///
    /// Returns `UnknownTile` if the id is neither the start tile nor catalogued
    pub fn open_directions(&self, id: TileId) -> Result<Vec<Direction>> {
        if self.catalog.is_start(id) {
            return Ok(Direction::ALL.to_vec());
        }
        let entry = self.catalog.require(id)?;
        Ok(open_directions_of(entry.tile(), &self.layout))
    }

    /// Whether the tile's neighbors should be narrated
    ///
    /// # Errors
    ///
    /// Returns `UnknownTile` if the id is neither the start tile nor catalogued
    pub fn is_decision_point(&self, id: TileId) -> Result<bool> {
        if self.catalog.is_start(id) {
            return Ok(true);
        }
        let entry = self.catalog.require(id)?;
        Ok(is_decision_point_of(entry.tile(), &self.layout))
    }
}
