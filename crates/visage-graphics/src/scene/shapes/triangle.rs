use crate::coords::Vec2;
use crate::scene::{DrawCmd, DrawList};

use super::ShapeStyle;

/// Triangle draw payload. `rounding` of 0 gives sharp corners.
#[derive(Debug, Clone, PartialEq)]
pub struct TriangleCmd {
    pub points: [Vec2; 3],
    pub rounding: f32,
    pub style: ShapeStyle,
}

impl DrawList {
    #[inline]
    pub fn push_triangle(&mut self, points: [Vec2; 3], rounding: f32, style: ShapeStyle) {
        self.push(DrawCmd::Triangle(TriangleCmd { points, rounding, style }));
    }
}
