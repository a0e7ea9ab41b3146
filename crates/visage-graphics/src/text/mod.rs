//! Fonts, text runs and text measurement.
//!
//! Glyph rasterization is a backend concern; this module only measures,
//! through fontdue's layout engine.

mod font;
pub mod layout;
mod text;

pub use font::{DEJAVU_SANS, DEJAVU_SANS_MONO, Font, FontLoadError};
pub use text::{Direction, InvalidDirection, Justification, Text};
