//! Tests for the structural rule outline

#[cfg(test)]
mod tests {
    use dungeontiles::ProcessingError;
    use dungeontiles::analysis::connectivity::{ConnectivityAnalyzer, Direction, ProbeLayout};
    use dungeontiles::catalog::{Catalog, TileHasher, TileId};
    use dungeontiles::rules::outline::{Reveal, generate, narration_order};
    use dungeontiles::spatial::{Dataset, Map, Tile, TileShape};
    use dungeontiles::terrain::State;
    use ndarray::Array2;

    fn tile_with_paths(paths: &[[usize; 2]]) -> Tile {
        let shape = TileShape::default();
        let mut states = vec![State::Wall; shape.pixel_count()];
        for &[row, col] in paths {
            states[row * shape.cols + col] = State::Path;
        }
        Tile::from_states(shape, states).unwrap()
    }

    /// Open north, south and east
    fn junction() -> Tile {
        tile_with_paths(&[[0, 2], [2, 7], [3, 2]])
    }

    /// Open north and south, bending across the tile; not a decision point
    fn corridor() -> Tile {
        tile_with_paths(&[[0, 5], [3, 2]])
    }

    fn start() -> Tile {
        Tile::filled(TileShape::default(), State::Start)
    }

    fn map_with(rows: usize, cols: usize, placements: &[([usize; 2], Tile)]) -> Map {
        let mut grid = Array2::from_elem((rows, cols), tile_with_paths(&[]));
        for (position, tile) in placements {
            grid[*position] = tile.clone();
        }
        Map::new(grid)
    }

    struct Fixture {
        dataset: Dataset,
        catalog: Catalog,
        hasher: TileHasher,
    }

    impl Fixture {
        fn new(maps: Vec<Map>) -> Self {
            let dataset = Dataset::from_maps(maps).unwrap();
            let hasher = TileHasher::new("test");
            let catalog = Catalog::build(&dataset, &hasher, None).unwrap();
            Self {
                dataset,
                catalog,
                hasher,
            }
        }

        fn id(&self, tile: &Tile) -> TileId {
            self.hasher.hash(tile)
        }

        fn generate(&self) -> dungeontiles::Result<dungeontiles::rules::RuleBook> {
            let analyzer = ConnectivityAnalyzer::new(&self.catalog, ProbeLayout::default());
            generate(&self.dataset, &self.catalog, &analyzer)
        }
    }

    // Tests the start tile leads and the rest follow in ascending id order
    // Verified by sorting the start tile with the others
    #[test]
    fn test_narration_order() {
        let fixture = Fixture::new(vec![map_with(
            3,
            3,
            &[([1, 1], start()), ([0, 0], junction()), ([2, 2], corridor())],
        )]);

        let order = narration_order(&fixture.catalog);

        assert_eq!(order.first(), Some(&fixture.id(&start())));
        assert_eq!(order.len(), 4);
        assert!(order[1..].windows(2).all(|pair| pair[0] < pair[1]));
    }

    // Tests only decision points get sections and reveals name the neighbors
    // Verified by emitting sections for pass-through tiles
    #[test]
    fn test_junction_reveals_neighbors() {
        let fixture = Fixture::new(vec![map_with(
            3,
            3,
            &[([1, 1], junction()), ([0, 1], corridor()), ([2, 1], start())],
        )]);

        let book = fixture.generate().unwrap();
        let junction_id = fixture.id(&junction());

        assert_eq!(book.sections.len(), 2);
        assert!(book.sections[0].is_start);
        let section = &book.sections[1];
        assert_eq!(section.id, junction_id);
        assert_eq!(section.missions.len(), 1);
        let placement = &section.missions[0].placements[0];
        assert_eq!(placement.position, [1, 1]);
        // South leads to the start tile and is not narrated
        assert_eq!(
            placement.reveals,
            vec![
                Reveal {
                    direction: Direction::North,
                    tile: fixture.id(&corridor()),
                },
                Reveal {
                    direction: Direction::East,
                    tile: fixture.id(&tile_with_paths(&[])),
                },
            ]
        );
    }

    // Tests a real exit leaving the grid is reported
    // Verified by skipping out-of-grid neighbors
    #[test]
    fn test_boundary_exit_error() {
        let fixture = Fixture::new(vec![map_with(2, 2, &[([0, 1], junction())])]);

        let err = fixture.generate().unwrap_err();

        match err {
            ProcessingError::BoundaryExit {
                map_index,
                position,
                direction,
                ..
            } => {
                assert_eq!(map_index, 0);
                assert_eq!(position, [0, 1]);
                assert_eq!(direction, Direction::North);
            }
            other => unreachable!("Expected BoundaryExit, got {other}"),
        }
    }

    // Tests the start tile on the board edge skips its off-grid sides
    // Verified by raising BoundaryExit for the start tile
    #[test]
    fn test_start_on_edge() {
        let fixture = Fixture::new(vec![map_with(2, 2, &[([0, 0], start())])]);

        let book = fixture.generate().unwrap();

        let placement = &book.sections[0].missions[0].placements[0];
        let directions: Vec<Direction> = placement.reveals.iter().map(|r| r.direction).collect();
        assert_eq!(directions, vec![Direction::South, Direction::East]);
    }

    // Tests occurrences are grouped per map in map order
    // Verified by merging occurrences across maps
    #[test]
    fn test_missions_follow_map_order() {
        let fixture = Fixture::new(vec![
            map_with(3, 3, &[([1, 1], junction()), ([1, 0], junction())]),
            map_with(3, 3, &[([1, 2], junction())]),
        ]);

        let book = fixture.generate();

        // Junction at [1, 2] exits east off the grid
        assert!(matches!(book, Err(ProcessingError::BoundaryExit { .. })));

        let fixture = Fixture::new(vec![
            map_with(3, 3, &[([1, 1], junction()), ([1, 0], junction())]),
            map_with(3, 3, &[([1, 0], junction())]),
        ]);
        let book = fixture.generate().unwrap();
        let section = &book.sections[0];

        assert_eq!(section.missions.len(), 2);
        assert_eq!(section.missions[0].map_index, 0);
        let positions: Vec<[usize; 2]> = section.missions[0]
            .placements
            .iter()
            .map(|p| p.position)
            .collect();
        assert_eq!(positions, vec![[1, 0], [1, 1]]);
        assert_eq!(section.missions[1].map_index, 1);
    }
}
