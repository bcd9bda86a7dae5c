//! Tests for map PNG loading and tile image export

#[cfg(test)]
mod tests {
    use dungeontiles::io::image::{export_tile_png, load_map_pixels, render_tile, save_pixels};
    use dungeontiles::spatial::{Tile, TileShape};
    use dungeontiles::terrain::{Palette, State};
    use tempfile::TempDir;

    fn striped_tile() -> Tile {
        let shape = TileShape::default();
        let states = (0..shape.pixel_count())
            .map(|i| if i % 2 == 0 { State::Wall } else { State::Path })
            .collect();
        Tile::from_states(shape, states).unwrap()
    }

    // Tests the enlarged render keeps the tile aspect and fills whole blocks
    // Verified by scaling only the width
    #[test]
    fn test_render_tile_scaled() {
        let palette = Palette::default();

        let img = render_tile(&striped_tile(), &palette, 100);

        assert_eq!(img.dimensions(), (800, 400));
        assert_eq!(img.get_pixel(0, 0).0, palette.to_color(State::Wall));
        assert_eq!(img.get_pixel(99, 99).0, palette.to_color(State::Wall));
        assert_eq!(img.get_pixel(100, 0).0, palette.to_color(State::Path));
    }

    // Tests scale one reproduces the tile pixel for pixel
    // Verified by transposing rows and columns
    #[test]
    fn test_render_tile_unscaled() {
        let palette = Palette::default();
        let tile = striped_tile();

        let img = render_tile(&tile, &palette, 1);

        assert_eq!(img.dimensions(), (8, 4));
        assert_eq!(
            img.get_pixel(7, 3).0,
            palette.to_color(tile.get(3, 7).unwrap())
        );
    }

    // Tests export creates missing parent directories
    // Verified by disabling directory creation
    #[test]
    fn test_export_creates_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("tiles/1x/abcd0123.png");

        export_tile_png(&striped_tile(), &Palette::default(), 1, &path).unwrap();

        assert!(path.exists());
        let loaded = load_map_pixels(&path).unwrap();
        assert_eq!((loaded.width, loaded.height), (8, 4));
    }

    // Tests saved pixel buffers load back unchanged
    // Verified by dropping the alpha channel on save
    #[test]
    fn test_save_and_load_pixels() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("map.png");
        let palette = Palette::default();
        let pixels: Vec<[u8; 4]> = State::ALL
            .iter()
            .cycle()
            .take(6)
            .map(|&state| palette.to_color(state))
            .collect();

        save_pixels(&pixels, 3, 2, &path).unwrap();
        let loaded = load_map_pixels(&path).unwrap();

        assert_eq!(loaded.pixels, pixels);
        assert_eq!((loaded.width, loaded.height), (3, 2));
    }

    // Tests a buffer that does not fill the image is rejected
    // Verified by padding short buffers
    #[test]
    fn test_save_pixels_short_buffer() {
        let temp_dir = TempDir::new().unwrap();

        let result = save_pixels(&[[0, 0, 0, 255]; 5], 3, 2, &temp_dir.path().join("short.png"));

        assert!(result.is_err());
    }

    // Tests loading a missing file fails
    // Verified by returning an empty buffer on failure
    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();

        assert!(load_map_pixels(&temp_dir.path().join("missing.png")).is_err());
    }
}
