//! Tile connectivity analysis

/// Exit detection and decision-point classification
pub mod connectivity;
