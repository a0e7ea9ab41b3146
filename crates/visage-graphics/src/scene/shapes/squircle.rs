use crate::coords::Rect;
use crate::scene::{DrawCmd, DrawList};

use super::ShapeStyle;

/// Superellipse `|x/a|^p + |y/b|^p = 1` inscribed in `rect`.
///
/// A squircle is the square-bounds case.
#[derive(Debug, Clone, PartialEq)]
pub struct SquircleCmd {
    pub rect: Rect,
    pub power: f32,
    pub style: ShapeStyle,
}

impl DrawList {
    #[inline]
    pub fn push_squircle(&mut self, rect: Rect, power: f32, style: ShapeStyle) {
        self.push(DrawCmd::Squircle(SquircleCmd { rect, power, style }));
    }
}
