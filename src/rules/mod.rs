//! Reveal-rule generation
//!
//! [`outline`] decides which neighbor each exit reveals; [`wording`] turns the
//! outline into the booklet's text.

/// Structural rule outline
pub mod outline;
/// Literal templates and rendering
pub mod wording;

pub use outline::{RuleBook, generate};
pub use wording::{BookletWording, Wording, render};
