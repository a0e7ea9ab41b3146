use crate::coords::{Rect, Vec2};
use crate::paint::Brush;

/// Unit of the coordinates passed to drawing calls.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum PixelScale {
    /// Coordinates are device pixels.
    #[default]
    Native,
    /// Coordinates are logical pixels, multiplied by the DPI scale.
    Logical,
}

/// What `save_state` captures and `restore_state` puts back.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SavedState {
    pub brush: Brush,
    pub offset: Vec2,
    pub pixel_scale: PixelScale,
    pub clip: Option<Rect>,
}
