//! Cross-map catalog of distinct tiles and their usage
//!
//! One sequential pass over the dataset records, per distinct tile id, a
//! representative tile, the highest number of copies any single map needs, and
//! every `(map, position)` where it occurs. The fully-empty tile is never
//! entered; its id is still kept in the per-map id grids so neighbor lookups
//! stay total.

use crate::catalog::hasher::{TileDigest, TileHasher, TileId};
use crate::io::error::{ProcessingError, Result, malformed_image};
use crate::spatial::{Dataset, Tile, TileShape};
use crate::terrain::State;
use log::{debug, warn};
use ndarray::Array2;
use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, HashMap};

/// Positions of one tile id within one map, in row-major order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occurrence {
    /// Map index in dataset order
    pub map_index: usize,
    /// Grid positions as `[row, col]`
    pub positions: Vec<[usize; 2]>,
}

/// Everything the catalog knows about one distinct tile
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    tile: Tile,
    digest: TileDigest,
    max_per_map: usize,
    occurrences: Vec<Occurrence>,
}

impl CatalogEntry {
    fn new(tile: Tile, digest: TileDigest) -> Self {
        Self {
            tile,
            digest,
            max_per_map: 0,
            occurrences: Vec::new(),
        }
    }

    fn record(&mut self, map_index: usize, position: [usize; 2]) {
        match self.occurrences.last_mut() {
            Some(last) if last.map_index == map_index => last.positions.push(position),
            _ => self.occurrences.push(Occurrence {
                map_index,
                positions: vec![position],
            }),
        }
    }

    /// Representative tile content
    pub const fn tile(&self) -> &Tile {
        &self.tile
    }

    /// Full digest of the tile content
    pub const fn digest(&self) -> TileDigest {
        self.digest
    }

    /// Highest number of copies needed by any single map
    pub const fn max_per_map(&self) -> usize {
        self.max_per_map
    }

    /// Occurrences grouped by map, in map order
    pub fn occurrences(&self) -> &[Occurrence] {
        &self.occurrences
    }
}

/// Deduplicated index of every non-empty tile across all maps
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: BTreeMap<TileId, CatalogEntry>,
    id_grids: Vec<Array2<TileId>>,
    empty_id: TileId,
    start_id: Option<TileId>,
}

impl Catalog {
    /// Build the catalog in one pass over the dataset
    ///
    /// The start tile is `start_override` when given, otherwise the one
    /// distinct tile containing a start pixel.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Two different tile contents share a truncated id
    /// - Several distinct tiles contain a start pixel and no override is given
    pub fn build(
        dataset: &Dataset,
        hasher: &TileHasher,
        start_override: Option<TileId>,
    ) -> Result<Self> {
        let tile_shape = dataset
            .maps()
            .first()
            .and_then(|map| map.get([0, 0]))
            .map_or_else(TileShape::default, Tile::shape);
        let empty_digest = hasher.digest(&Tile::filled(tile_shape, State::Empty));
        let empty_id = empty_digest.id();

        let mut entries: BTreeMap<TileId, CatalogEntry> = BTreeMap::new();
        let mut id_grids = Vec::with_capacity(dataset.len());

        for (map_index, map) in dataset.maps().iter().enumerate() {
            let (rows, cols) = map.dim();
            let mut counts: HashMap<TileId, usize> = HashMap::new();
            let mut ids = Vec::with_capacity(rows * cols);

            for (position, tile) in map.tiles() {
                let digest = hasher.digest(tile);
                let id = digest.id();
                ids.push(id);

                if id == empty_id {
                    if digest != empty_digest {
                        return Err(collision(id, &Tile::filled(tile_shape, State::Empty), tile));
                    }
                    continue;
                }

                let entry = match entries.entry(id) {
                    Entry::Vacant(slot) => slot.insert(CatalogEntry::new(tile.clone(), digest)),
                    Entry::Occupied(slot) => slot.into_mut(),
                };
                if entry.digest != digest {
                    return Err(collision(id, &entry.tile, tile));
                }
                entry.record(map_index, position);
                *counts.entry(id).or_default() += 1;
            }

            for (id, count) in counts {
                if let Some(entry) = entries.get_mut(&id) {
                    entry.max_per_map = entry.max_per_map.max(count);
                }
            }

            let grid = Array2::from_shape_vec((rows, cols), ids)
                .map_err(|_shape_error| malformed_image(&"tile id grid does not match map"))?;
            id_grids.push(grid);
            debug!("Catalogued map {map_index}: {} distinct tiles so far", entries.len());
        }

        let start_id = match start_override {
            Some(id) => {
                if !entries.contains_key(&id) {
                    warn!("Start tile {id} does not occur in any map");
                }
                Some(id)
            }
            None => detect_start(&entries)?,
        };

        Ok(Self {
            entries,
            id_grids,
            empty_id,
            start_id,
        })
    }

    /// Entry for a tile id
    pub fn get(&self, id: TileId) -> Option<&CatalogEntry> {
        self.entries.get(&id)
    }

    /// Entry for a tile id, failing when absent
    ///
    /// # Errors
    ///
    /// Returns `UnknownTile` if the id is not catalogued
    pub fn require(&self, id: TileId) -> Result<&CatalogEntry> {
        self.get(id).ok_or(ProcessingError::UnknownTile { id })
    }

    /// Entries in ascending id order
    pub fn entries(&self) -> impl Iterator<Item = (TileId, &CatalogEntry)> {
        self.entries.iter().map(|(&id, entry)| (id, entry))
    }

    /// Number of distinct non-empty tiles
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no non-empty tile was found
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Physical tile copies needed to play every map
    pub fn total(&self) -> usize {
        self.entries.values().map(CatalogEntry::max_per_map).sum()
    }

    /// Reserved id of the fully-empty tile
    pub const fn empty_id(&self) -> TileId {
        self.empty_id
    }

    /// Reserved id of the start tile, if any
    pub const fn start_id(&self) -> Option<TileId> {
        self.start_id
    }

    /// Whether `id` is the start tile
    pub fn is_start(&self, id: TileId) -> bool {
        self.start_id == Some(id)
    }

    /// Tile id at a grid position of a map
    pub fn id_at(&self, map_index: usize, position: [usize; 2]) -> Option<TileId> {
        self.id_grids
            .get(map_index)
            .and_then(|grid| grid.get(position))
            .copied()
    }

    /// Tile grid dimensions of a map as (rows, cols)
    pub fn grid_dim(&self, map_index: usize) -> Option<(usize, usize)> {
        self.id_grids.get(map_index).map(|grid| grid.dim())
    }
}

fn collision(id: TileId, existing: &Tile, incoming: &Tile) -> ProcessingError {
    ProcessingError::TileIdCollision {
        id,
        existing: existing.canonical(),
        incoming: incoming.canonical(),
    }
}

fn detect_start(entries: &BTreeMap<TileId, CatalogEntry>) -> Result<Option<TileId>> {
    let candidates: Vec<TileId> = entries
        .iter()
        .filter(|(_, entry)| entry.tile.contains_start())
        .map(|(&id, _)| id)
        .collect();

    match candidates.len() {
        0 => {
            warn!("No tile contains a start pixel; rules will have no starting point");
            Ok(None)
        }
        1 => Ok(candidates.first().copied()),
        _ => Err(ProcessingError::AmbiguousStartTile { candidates }),
    }
}
