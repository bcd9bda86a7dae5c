//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use dungeontiles::ProcessingError;
    use dungeontiles::analysis::connectivity::Direction;
    use dungeontiles::catalog::TileId;
    use dungeontiles::io::error::{WithPath, invalid_parameter, malformed_image};
    use std::error::Error;
    use std::path::{Path, PathBuf};

    const ID: TileId = TileId::from_bytes([0xde, 0xad, 0xbe, 0xef]);

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = ProcessingError::FileSystem {
            path: "/tmp/out".into(),
            operation: "write",
            source: io_error,
        };

        assert!(error.source().is_some());
        assert!(error.to_string().contains("write"));
        assert!(ProcessingError::UnknownTile { id: ID }.source().is_none());
    }

    // Tests unknown pixel messages carry position, color and file
    // Verified by omitting the pixel coordinate from message
    #[test]
    fn test_unknown_pixel_error() {
        let error = ProcessingError::UnknownPixel {
            path: Some(PathBuf::from("maps/one.png")),
            pixel: (12, 3),
            color: [1, 2, 3, 255],
        };

        let message = error.to_string();
        assert!(message.contains("(12, 3)"));
        assert!(message.contains("[1, 2, 3, 255]"));
        assert!(message.contains("maps/one.png"));
    }

    // Tests boundary exits name tile, map, position and direction
    // Verified by omitting the direction from message
    #[test]
    fn test_boundary_exit_error() {
        let error = ProcessingError::BoundaryExit {
            id: ID,
            map_index: 2,
            position: [0, 4],
            direction: Direction::North,
        };

        let message = error.to_string();
        assert!(message.contains("deadbeef"));
        assert!(message.contains("map 2"));
        assert!(message.contains("[0, 4]"));
        assert!(message.contains("north"));
    }

    // Tests ambiguous start tiles list every candidate
    // Verified by printing only the first candidate
    #[test]
    fn test_ambiguous_start_error() {
        let error = ProcessingError::AmbiguousStartTile {
            candidates: vec![ID, TileId::from_bytes([0, 0, 0, 1])],
        };

        assert!(error.to_string().contains("deadbeef, 00000001"));
    }

    // Tests InvalidParameter error contains all fields
    // Verified by omitting value from message
    #[test]
    fn test_invalid_parameter_error() {
        let message = invalid_parameter("tile id", &"xyz", &"expected 8 hex characters").to_string();

        assert!(message.contains("tile id"));
        assert!(message.contains("xyz"));
        assert!(message.contains("expected 8 hex characters"));
    }

    // Tests with_path keeps an existing path and fills a missing one
    // Verified by overwriting paths that are already set
    #[test]
    fn test_with_path() {
        let missing: Result<(), ProcessingError> = Err(malformed_image(&"short"));
        let filled = missing.with_path(Path::new("a.png")).unwrap_err();
        assert!(filled.to_string().contains("a.png"));

        let set: Result<(), ProcessingError> = Err(ProcessingError::UnknownPixel {
            path: Some(PathBuf::from("b.png")),
            pixel: (0, 0),
            color: [9, 9, 9, 9],
        });
        let kept = set.with_path(Path::new("a.png")).unwrap_err();
        assert!(kept.to_string().contains("b.png"));
    }

    // Tests ImageExport error with IO source
    // Verified by excluding source error from message
    #[test]
    fn test_image_export_error() {
        let image_error = image::ImageError::IoError(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "access denied",
        ));

        let error = ProcessingError::ImageExport {
            path: PathBuf::from("/restricted/tiles/1x/deadbeef.png"),
            source: image_error,
        };

        let message = error.to_string();
        assert!(message.contains("/restricted/tiles/1x/deadbeef.png"));
        assert!(message.contains("access denied"));
        assert!(error.source().is_some());
    }
}
