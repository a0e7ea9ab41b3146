use crate::coords::{CornerRadii, Rect};
use crate::scene::{DrawCmd, DrawList};

use super::ShapeStyle;

/// Rounded rectangle draw payload. Corners may round independently.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundedRectCmd {
    pub rect: Rect,
    pub radii: CornerRadii,
    pub style: ShapeStyle,
}

/// Square rotated 45° inside `rect`, with rounded tips.
#[derive(Debug, Clone, PartialEq)]
pub struct DiamondCmd {
    pub rect: Rect,
    pub rounding: f32,
}

impl DrawList {
    /// Records a rounded rectangle draw command.
    #[inline]
    pub fn push_rounded_rect(&mut self, rect: Rect, radii: CornerRadii, style: ShapeStyle) {
        self.push(DrawCmd::RoundedRect(RoundedRectCmd { rect, radii, style }));
    }

    #[inline]
    pub fn push_diamond(&mut self, rect: Rect, rounding: f32) {
        self.push(DrawCmd::Diamond(DiamondCmd { rect, rounding }));
    }
}
