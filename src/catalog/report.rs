//! Plain-text catalog report

use crate::catalog::hasher::TileId;
use crate::catalog::index::Catalog;
use std::fmt::Write;

/// Catalog rows sorted by descending copy count, ties by ascending id
pub fn ranked_entries(catalog: &Catalog) -> Vec<(TileId, usize)> {
    let mut rows: Vec<(TileId, usize)> = catalog
        .entries()
        .map(|(id, entry)| (id, entry.max_per_map()))
        .collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    rows
}

/// Render the report: `total: N`, a blank line, then one `id: count` per tile
pub fn render(catalog: &Catalog) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail
    let _ = writeln!(out, "total: {}", catalog.total());
    let _ = writeln!(out);
    for (id, count) in ranked_entries(catalog) {
        let _ = writeln!(out, "{id}: {count}");
    }
    out
}
