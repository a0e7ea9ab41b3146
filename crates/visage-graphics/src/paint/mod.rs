//! Paint model shared between the canvas and backends.
//!
//! Scope:
//! - color representation (straight alpha, B/G/R/A storage, HDR multiplier)
//! - sampled gradients
//! - brushes (solid or gradient paint sources)
//!
//! Geometry types remain in `coords`.

pub mod brush;
pub mod color;
pub mod gradient;

pub use brush::{Brush, BrushKind, BrushMode, BrushModeMismatch};
pub use color::{Channel, Color, ColorParseError, NUM_CHANNELS};
pub use gradient::{Gradient, IndexOutOfRange};
