//! Tests for recursive map discovery

#[cfg(test)]
mod tests {
    use dungeontiles::ProcessingError;
    use dungeontiles::io::discovery::collect_map_files;
    use std::fs;
    use tempfile::TempDir;

    // Tests nested directories are walked and results come back sorted
    // Verified by returning files in directory order
    #[test]
    fn test_collects_nested_pngs_sorted() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("b/deeper")).unwrap();
        fs::create_dir_all(root.join("a")).unwrap();
        for file in ["b/deeper/02.png", "a/01.PNG", "b/03.png", "notes.txt", "a/04.gif"] {
            fs::write(root.join(file), "").unwrap();
        }

        let files = collect_map_files(root).unwrap();

        assert_eq!(
            files,
            vec![
                root.join("a/01.PNG"),
                root.join("b/03.png"),
                root.join("b/deeper/02.png"),
            ]
        );
    }

    // Tests a single PNG file target is returned as-is
    // Verified by requiring directory targets
    #[test]
    fn test_single_file_target() {
        let temp_dir = TempDir::new().unwrap();
        let png = temp_dir.path().join("level.png");
        fs::write(&png, "").unwrap();

        assert_eq!(collect_map_files(&png).unwrap(), vec![png]);
    }

    // Tests non-PNG files and missing paths are rejected
    // Verified by returning an empty list for bad targets
    #[test]
    fn test_bad_targets() {
        let temp_dir = TempDir::new().unwrap();
        let txt = temp_dir.path().join("level.txt");
        fs::write(&txt, "").unwrap();

        assert!(matches!(
            collect_map_files(&txt),
            Err(ProcessingError::InvalidParameter { .. })
        ));
        assert!(matches!(
            collect_map_files(&temp_dir.path().join("missing")),
            Err(ProcessingError::InvalidParameter { .. })
        ));
    }

    // Tests an empty directory yields no maps
    // Verified by treating empty directories as errors
    #[test]
    fn test_empty_directory() {
        let temp_dir = TempDir::new().unwrap();

        assert!(collect_map_files(temp_dir.path()).unwrap().is_empty());
    }
}
