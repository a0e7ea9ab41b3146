use crate::coords::Vec2;
use crate::scene::{DrawCmd, DrawList};

/// Straight stroke from `a` to `b`.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentCmd {
    pub a: Vec2,
    pub b: Vec2,
    pub thickness: f32,
    pub rounded: bool,
}

/// Quadratic Bézier stroke from `a` to `c` with control point `b`.
#[derive(Debug, Clone, PartialEq)]
pub struct QuadraticCmd {
    pub a: Vec2,
    pub b: Vec2,
    pub c: Vec2,
    pub thickness: f32,
}

impl DrawList {
    #[inline]
    pub fn push_segment(&mut self, a: Vec2, b: Vec2, thickness: f32, rounded: bool) {
        self.push(DrawCmd::Segment(SegmentCmd { a, b, thickness, rounded }));
    }

    #[inline]
    pub fn push_quadratic(&mut self, a: Vec2, b: Vec2, c: Vec2, thickness: f32) {
        self.push(DrawCmd::Quadratic(QuadraticCmd { a, b, c, thickness }));
    }
}
