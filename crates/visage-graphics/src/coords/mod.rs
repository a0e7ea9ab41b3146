//! Coordinate and geometry types shared by the canvas, draw list and backends.
//!
//! Canonical canvas space:
//! - native pixels once the canvas transform is applied
//! - origin top-left
//! - +X right, +Y down

mod corner_radii;
mod rect;
mod vec2;

pub use corner_radii::CornerRadii;
pub use rect::Rect;
pub use vec2::Vec2;
