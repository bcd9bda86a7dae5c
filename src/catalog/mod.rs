//! Content-addressed tile identity and the cross-map tile catalog

/// Keyed tile digests and display ids
pub mod hasher;
/// Catalog construction over a dataset
pub mod index;
/// Plain-text catalog report
pub mod report;

pub use hasher::{TileDigest, TileHasher, TileId};
pub use index::{Catalog, CatalogEntry, Occurrence};
