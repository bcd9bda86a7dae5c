//! Terrain classification of map pixels

/// Terrain states and the color palette
pub mod state;

pub use state::{Palette, State};
