use crate::coords::Rect;
use crate::scene::{DrawCmd, DrawList};

use super::ShapeStyle;

/// Axis-aligned rectangle draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct RectCmd {
    pub rect: Rect,
    pub style: ShapeStyle,
    /// `false` for pixel-aligned fills that skip edge smoothing.
    pub antialias: bool,
}

impl DrawList {
    /// Records an antialiased rectangle.
    #[inline]
    pub fn push_rect(&mut self, rect: Rect, style: ShapeStyle) {
        self.push(DrawCmd::Rect(RectCmd { rect, style, antialias: true }));
    }

    /// Records a hard-edged solid fill.
    #[inline]
    pub fn push_fill(&mut self, rect: Rect) {
        self.push(DrawCmd::Rect(RectCmd {
            rect,
            style: ShapeStyle::Fill,
            antialias: false,
        }));
    }
}
