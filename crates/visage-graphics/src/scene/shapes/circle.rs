use crate::coords::Vec2;
use crate::scene::{DrawCmd, DrawList};

use super::ShapeStyle;

/// Circle draw payload.
///
/// A ring is a circle with [`ShapeStyle::Border`]; a fade circle uses
/// [`ShapeStyle::Shadow`] with the fade width as blur.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleCmd {
    pub center: Vec2,
    pub radius: f32,
    pub style: ShapeStyle,
}

impl DrawList {
    /// Records a circle draw command.
    #[inline]
    pub fn push_circle(&mut self, center: Vec2, radius: f32, style: ShapeStyle) {
        self.push(DrawCmd::Circle(CircleCmd { center, radius, style }));
    }
}
