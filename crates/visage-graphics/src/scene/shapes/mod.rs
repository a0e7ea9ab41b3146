pub(crate) mod arc;
pub(crate) mod circle;
pub(crate) mod curve;
pub(crate) mod graph;
pub(crate) mod rect;
pub(crate) mod rounded_rect;
pub(crate) mod squircle;
pub(crate) mod text;
pub(crate) mod triangle;

pub use arc::ArcCmd;
pub use circle::CircleCmd;
pub use curve::{QuadraticCmd, SegmentCmd};
pub use graph::{GraphFillCmd, GraphLineCmd};
pub use rect::RectCmd;
pub use rounded_rect::{DiamondCmd, RoundedRectCmd};
pub use squircle::SquircleCmd;
pub use text::TextCmd;
pub use triangle::TriangleCmd;

/// How a closed shape is painted.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub enum ShapeStyle {
    /// Solid interior.
    #[default]
    Fill,
    /// Only a band of `thickness` pixels along the inside of the edge.
    Border { thickness: f32 },
    /// Soft falloff of `blur` pixels around the edge.
    Shadow { blur: f32 },
}
