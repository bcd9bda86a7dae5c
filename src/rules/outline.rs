//! Structural reveal-rule outline, independent of wording
//!
//! For every narratable tile the outline lists, per map and per placement,
//! which neighbor becomes visible through each open edge.

use crate::analysis::connectivity::{ConnectivityAnalyzer, Direction};
use crate::catalog::{Catalog, TileId};
use crate::io::error::{ProcessingError, Result, invalid_parameter};
use crate::spatial::{Dataset, Map};
use log::{debug, info, warn};

/// One neighbor to reveal when leaving through an edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reveal {
    /// Edge the player leaves through
    pub direction: Direction,
    /// Tile to reveal on the other side
    pub tile: TileId,
}

/// A single placement of a tile within a map
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    /// Grid position as `[row, col]`
    pub position: [usize; 2],
    /// Neighbors to reveal, in direction order
    pub reveals: Vec<Reveal>,
}

/// Placements of a tile within one map
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissionRules {
    /// Map index in dataset order
    pub map_index: usize,
    /// Placements in row-major order
    pub placements: Vec<Placement>,
}

/// All rules for one narratable tile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileRules {
    /// Tile the rules belong to
    pub id: TileId,
    /// Whether this is the start tile
    pub is_start: bool,
    /// Rules per map, in map order
    pub missions: Vec<MissionRules>,
}

/// Complete rule outline: start tile first, then ascending ids
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleBook {
    /// Sections in narration order
    pub sections: Vec<TileRules>,
}

/// Catalog ids in narration order: the start tile, then the rest ascending
pub fn narration_order(catalog: &Catalog) -> Vec<TileId> {
    let start = catalog
        .start_id()
        .filter(|&id| catalog.get(id).is_some());
    start
        .into_iter()
        .chain(
            catalog
                .entries()
                .map(|(id, _)| id)
                .filter(|&id| !catalog.is_start(id) && id != catalog.empty_id()),
        )
        .collect()
}

/// Walk every narratable tile occurrence and collect its reveals
///
/// # Errors
///
/// Returns an error if:
/// - A pixel-inferred exit leads off the map grid (`BoundaryExit`)
/// - The catalog does not describe a map of the dataset
pub fn generate(
    dataset: &Dataset,
    catalog: &Catalog,
    analyzer: &ConnectivityAnalyzer<'_>,
) -> Result<RuleBook> {
    let mut sections = Vec::new();

    for id in narration_order(catalog) {
        if !analyzer.is_decision_point(id)? {
            continue;
        }
        let entry = catalog.require(id)?;
        let directions = analyzer.open_directions(id)?;
        let is_start = catalog.is_start(id);

        let mut missions = Vec::with_capacity(entry.occurrences().len());
        for occurrence in entry.occurrences() {
            let dim = dataset
                .map(occurrence.map_index)
                .map(Map::dim)
                .ok_or_else(|| {
                    invalid_parameter(
                        "map_index",
                        &occurrence.map_index,
                        &"catalog refers to a map outside the dataset",
                    )
                })?;

            let mut placements = Vec::with_capacity(occurrence.positions.len());
            for &position in &occurrence.positions {
                let mut reveals = Vec::new();
                for &direction in &directions {
                    let Some(neighbor) = direction.step(position, dim) else {
                        // Start exits are assumed, not observed; only real exits must stay on the board
                        if is_start {
                            warn!(
                                "Start tile {id} in map {} at [{}, {}] has no neighbor {direction}; exit left out",
                                occurrence.map_index, position[0], position[1]
                            );
                            continue;
                        }
                        return Err(ProcessingError::BoundaryExit {
                            id,
                            map_index: occurrence.map_index,
                            position,
                            direction,
                        });
                    };
                    let tile = catalog
                        .id_at(occurrence.map_index, neighbor)
                        .ok_or(ProcessingError::BoundaryExit {
                            id,
                            map_index: occurrence.map_index,
                            position,
                            direction,
                        })?;
                    if catalog.is_start(tile) {
                        continue;
                    }
                    reveals.push(Reveal { direction, tile });
                }
                placements.push(Placement { position, reveals });
            }
            missions.push(MissionRules {
                map_index: occurrence.map_index,
                placements,
            });
        }

        debug!("Tile {id}: {} map(s) narrated", missions.len());
        sections.push(TileRules {
            id,
            is_start,
            missions,
        });
    }

    info!("Generated reveal rules for {} tile(s)", sections.len());
    Ok(RuleBook { sections })
}
