/// Per-corner radii for a rounded rectangle (pixels).
///
/// Corners follow CSS convention: top-left, top-right, bottom-right, bottom-left.
/// Negative values are treated as zero by backends.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct CornerRadii {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_right: f32,
    pub bottom_left: f32,
}

impl CornerRadii {
    #[inline]
    pub const fn new(top_left: f32, top_right: f32, bottom_right: f32, bottom_left: f32) -> Self {
        Self { top_left, top_right, bottom_right, bottom_left }
    }

    /// Uniform radius on all four corners.
    #[inline]
    pub const fn all(r: f32) -> Self {
        Self { top_left: r, top_right: r, bottom_right: r, bottom_left: r }
    }

    /// Rounds the two left corners only.
    #[inline]
    pub const fn left(r: f32) -> Self {
        Self::new(r, 0.0, 0.0, r)
    }

    /// Rounds the two right corners only.
    #[inline]
    pub const fn right(r: f32) -> Self {
        Self::new(0.0, r, r, 0.0)
    }

    /// Rounds the two top corners only.
    #[inline]
    pub const fn top(r: f32) -> Self {
        Self::new(r, r, 0.0, 0.0)
    }

    /// Rounds the two bottom corners only.
    #[inline]
    pub const fn bottom(r: f32) -> Self {
        Self::new(0.0, 0.0, r, r)
    }

    /// Multiplies every radius by `s`.
    #[inline]
    pub fn scaled(self, s: f32) -> Self {
        Self::new(self.top_left * s, self.top_right * s, self.bottom_right * s, self.bottom_left * s)
    }
}
