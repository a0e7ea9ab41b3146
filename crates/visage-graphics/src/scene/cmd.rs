use crate::scene::shapes::arc::ArcCmd;
use crate::scene::shapes::circle::CircleCmd;
use crate::scene::shapes::curve::{QuadraticCmd, SegmentCmd};
use crate::scene::shapes::graph::{GraphFillCmd, GraphLineCmd};
use crate::scene::shapes::rect::RectCmd;
use crate::scene::shapes::rounded_rect::{DiamondCmd, RoundedRectCmd};
use crate::scene::shapes::squircle::SquircleCmd;
use crate::scene::shapes::text::TextCmd;
use crate::scene::shapes::triangle::TriangleCmd;

/// Backend-agnostic draw command stream.
///
/// Extending the scene:
/// - add a new shape module under `scene::shapes::*`
/// - add a new variant here
/// - implement push helpers inside that shape module
/// - add a matching canvas primitive
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Rect(RectCmd),
    RoundedRect(RoundedRectCmd),
    Diamond(DiamondCmd),
    Circle(CircleCmd),
    Squircle(SquircleCmd),
    Arc(ArcCmd),
    Segment(SegmentCmd),
    Quadratic(QuadraticCmd),
    Triangle(TriangleCmd),
    GraphLine(GraphLineCmd),
    GraphFill(GraphFillCmd),
    Text(TextCmd),
}

impl DrawCmd {
    /// Short family name, used in trace logs and backend statistics.
    pub fn family(&self) -> &'static str {
        match self {
            DrawCmd::Rect(_) => "rect",
            DrawCmd::RoundedRect(_) => "rounded_rect",
            DrawCmd::Diamond(_) => "diamond",
            DrawCmd::Circle(_) => "circle",
            DrawCmd::Squircle(_) => "squircle",
            DrawCmd::Arc(_) => "arc",
            DrawCmd::Segment(_) => "segment",
            DrawCmd::Quadratic(_) => "quadratic",
            DrawCmd::Triangle(_) => "triangle",
            DrawCmd::GraphLine(_) => "graph_line",
            DrawCmd::GraphFill(_) => "graph_fill",
            DrawCmd::Text(_) => "text",
        }
    }
}
