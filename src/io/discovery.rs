//! Recursive discovery of map images

use crate::io::configuration::MAP_EXTENSION;
use crate::io::error::{ProcessingError, Result, invalid_parameter};
use log::debug;
use std::path::{Path, PathBuf};

fn is_map_image(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(MAP_EXTENSION))
}

/// Collect map images under `target`, sorted by path
///
/// A file target must itself be a map image; a directory is walked
/// recursively.
///
/// # Errors
///
/// Returns an error if the target is neither a map image nor a directory, or
/// a directory cannot be read
pub fn collect_map_files(target: &Path) -> Result<Vec<PathBuf>> {
    if target.is_file() {
        if is_map_image(target) {
            return Ok(vec![target.to_path_buf()]);
        }
        return Err(invalid_parameter(
            "target",
            &target.display(),
            &"file must be a PNG image",
        ));
    }
    if !target.is_dir() {
        return Err(invalid_parameter(
            "target",
            &target.display(),
            &"must be a PNG file or directory",
        ));
    }

    let mut files = Vec::new();
    walk(target, &mut files)?;
    files.sort();
    debug!("Found {} map image(s) under {}", files.len(), target.display());
    Ok(files)
}

fn walk(dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    let read_error = |source| ProcessingError::FileSystem {
        path: dir.to_path_buf(),
        operation: "read directory",
        source,
    };
    for entry in std::fs::read_dir(dir).map_err(read_error)? {
        let path = entry.map_err(read_error)?.path();
        if path.is_dir() {
            walk(&path, files)?;
        } else if is_map_image(&path) {
            files.push(path);
        }
    }
    Ok(())
}
