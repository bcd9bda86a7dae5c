//! Ordered, shape-checked collection of decoded maps

use crate::io::error::{ProcessingError, Result};
use crate::spatial::map::Map;
use std::path::{Path, PathBuf};

/// Maps in stable source order; immutable once built
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    maps: Vec<Map>,
    sources: Vec<PathBuf>,
}

impl Dataset {
    /// Build a dataset from `(source, map)` pairs
    ///
    /// Pairs are sorted by source path so downstream numbering never depends on
    /// decode completion order.
    ///
    /// # Errors
    ///
    /// Returns `InconsistentMapDimensions` if any map's tile grid differs in
    /// shape from the first map
    pub fn new(mut decoded: Vec<(PathBuf, Map)>) -> Result<Self> {
        decoded.sort_by(|a, b| a.0.cmp(&b.0));

        if let Some((_, first)) = decoded.first() {
            let expected = first.dim();
            for (map_index, (_, map)) in decoded.iter().enumerate() {
                let found = map.dim();
                if found != expected {
                    return Err(ProcessingError::InconsistentMapDimensions {
                        map_index,
                        expected,
                        found,
                    });
                }
            }
        }

        let (sources, maps) = decoded.into_iter().unzip();
        Ok(Self { maps, sources })
    }

    /// Build a dataset from maps already in order, naming them by index
    ///
    /// # Errors
    ///
    /// Returns `InconsistentMapDimensions` on mismatched grid shapes
    pub fn from_maps(maps: Vec<Map>) -> Result<Self> {
        Self::new(
            maps.into_iter()
                .enumerate()
                .map(|(index, map)| (PathBuf::from(format!("{index:06}")), map))
                .collect(),
        )
    }

    /// Maps in dataset order
    pub fn maps(&self) -> &[Map] {
        &self.maps
    }

    /// Map at an index
    pub fn map(&self, index: usize) -> Option<&Map> {
        self.maps.get(index)
    }

    /// Source path of the map at an index
    pub fn source(&self, index: usize) -> Option<&Path> {
        self.sources.get(index).map(PathBuf::as_path)
    }

    /// Number of maps
    pub fn len(&self) -> usize {
        self.maps.len()
    }

    /// Whether the dataset has no maps
    pub fn is_empty(&self) -> bool {
        self.maps.is_empty()
    }
}
