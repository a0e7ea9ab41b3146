use std::fmt;

use crate::coords::Vec2;

use super::{Color, Gradient};

/// Error returned when two brushes with different paint modes are interpolated.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct BrushModeMismatch {
    pub from: BrushKind,
    pub to: BrushKind,
}

impl fmt::Display for BrushModeMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot interpolate {:?} brush with {:?} brush", self.from, self.to)
    }
}

impl std::error::Error for BrushModeMismatch {}

/// Discriminant of [`BrushMode`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum BrushKind {
    Solid,
    Horizontal,
    Vertical,
    Linear,
}

/// How a brush maps colors onto geometry.
#[derive(Debug, Clone, PartialEq)]
pub enum BrushMode {
    /// One color everywhere.
    Solid(Color),
    /// Gradient runs left to right across the shape bounds.
    Horizontal(Gradient),
    /// Gradient runs top to bottom across the shape bounds.
    Vertical(Gradient),
    /// Gradient runs from `from` to `to` in canvas coordinates.
    Linear { gradient: Gradient, from: Vec2, to: Vec2 },
}

impl BrushMode {
    #[inline]
    pub fn kind(&self) -> BrushKind {
        match self {
            BrushMode::Solid(_) => BrushKind::Solid,
            BrushMode::Horizontal(_) => BrushKind::Horizontal,
            BrushMode::Vertical(_) => BrushKind::Vertical,
            BrushMode::Linear { .. } => BrushKind::Linear,
        }
    }
}

/// Paint source for canvas shapes.
///
/// Each builder method replaces the whole brush. Gradients are copied in, so a
/// brush never aliases a gradient owned elsewhere.
#[derive(Debug, Clone, PartialEq)]
pub struct Brush {
    mode: BrushMode,
}

impl Brush {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn from_color(color: Color) -> Self {
        Self {
            mode: BrushMode::Solid(color),
        }
    }

    #[inline]
    pub fn mode(&self) -> &BrushMode {
        &self.mode
    }

    #[inline]
    pub fn kind(&self) -> BrushKind {
        self.mode.kind()
    }

    pub fn solid(&mut self, color: Color) {
        self.mode = BrushMode::Solid(color);
    }

    pub fn horizontal(&mut self, gradient: &Gradient) {
        self.mode = BrushMode::Horizontal(gradient.clone());
    }

    pub fn horizontal_from_two(&mut self, left: Color, right: Color) {
        self.mode = BrushMode::Horizontal(Gradient::from_two(left, right));
    }

    pub fn vertical(&mut self, gradient: &Gradient) {
        self.mode = BrushMode::Vertical(gradient.clone());
    }

    pub fn vertical_from_two(&mut self, top: Color, bottom: Color) {
        self.mode = BrushMode::Vertical(Gradient::from_two(top, bottom));
    }

    pub fn linear(&mut self, gradient: &Gradient, from: Vec2, to: Vec2) {
        self.mode = BrushMode::Linear {
            gradient: gradient.clone(),
            from,
            to,
        };
    }

    pub fn linear_from_two(&mut self, from_color: Color, to_color: Color, from: Vec2, to: Vec2) {
        self.mode = BrushMode::Linear {
            gradient: Gradient::from_two(from_color, to_color),
            from,
            to,
        };
    }

    /// Blends toward `other` by `t`.
    ///
    /// Only brushes of the same kind blend. Mixed kinds return an error and
    /// leave `self` unchanged.
    pub fn interpolate_with(&mut self, other: &Brush, t: f32) -> Result<(), BrushModeMismatch> {
        match (&mut self.mode, &other.mode) {
            (BrushMode::Solid(a), BrushMode::Solid(b)) => {
                *a = Color::interpolate(a, b, t);
            }
            (BrushMode::Horizontal(a), BrushMode::Horizontal(b))
            | (BrushMode::Vertical(a), BrushMode::Vertical(b)) => {
                a.interpolate_with(b, t);
            }
            (
                BrushMode::Linear { gradient, from, to },
                BrushMode::Linear {
                    gradient: other_gradient,
                    from: other_from,
                    to: other_to,
                },
            ) => {
                gradient.interpolate_with(other_gradient, t);
                *from = from.lerp(*other_from, t);
                *to = to.lerp(*other_to, t);
            }
            (mode, other_mode) => {
                return Err(BrushModeMismatch {
                    from: mode.kind(),
                    to: other_mode.kind(),
                });
            }
        }
        Ok(())
    }

    pub fn multiply_alpha(&mut self, mult: f32) {
        match &mut self.mode {
            BrushMode::Solid(c) => c.multiply_alpha(mult),
            BrushMode::Horizontal(g) | BrushMode::Vertical(g) => g.multiply_alpha(mult),
            BrushMode::Linear { gradient, .. } => gradient.multiply_alpha(mult),
        }
    }

    /// Conservative opacity check: true only when every color is fully opaque.
    pub fn is_opaque(&self) -> bool {
        match &self.mode {
            BrushMode::Solid(c) => c.alpha() >= 1.0,
            BrushMode::Horizontal(g) | BrushMode::Vertical(g) | BrushMode::Linear { gradient: g, .. } => {
                g.resolution() > 0 && g.colors().iter().all(|c| c.alpha() >= 1.0)
            }
        }
    }
}

impl Default for Brush {
    fn default() -> Self {
        Self::from_color(Color::BLACK)
    }
}

impl From<Color> for Brush {
    fn from(color: Color) -> Self {
        Brush::from_color(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders_overwrite_previous_mode() {
        let mut b = Brush::new();
        assert_eq!(b.kind(), BrushKind::Solid);

        b.horizontal_from_two(Color::BLACK, Color::WHITE);
        assert_eq!(b.kind(), BrushKind::Horizontal);

        b.linear_from_two(Color::BLACK, Color::WHITE, Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0));
        assert_eq!(b.kind(), BrushKind::Linear);

        b.solid(Color::WHITE);
        assert_eq!(b.mode(), &BrushMode::Solid(Color::WHITE));
    }

    #[test]
    fn brush_owns_a_copy_of_the_gradient() {
        let mut g = Gradient::from_two(Color::BLACK, Color::WHITE);
        let mut b = Brush::new();
        b.vertical(&g);
        g.multiply_alpha(0.0);

        let BrushMode::Vertical(inner) = b.mode() else {
            panic!("expected vertical brush");
        };
        assert_eq!(inner.color(0), Some(Color::BLACK));
    }

    #[test]
    fn solid_interpolation() {
        let mut a = Brush::from_color(Color::BLACK);
        let b = Brush::from_color(Color::WHITE);
        a.interpolate_with(&b, 1.0).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn linear_interpolation_moves_endpoints() {
        let mut a = Brush::new();
        a.linear_from_two(Color::BLACK, Color::BLACK, Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0));
        let mut b = Brush::new();
        b.linear_from_two(Color::WHITE, Color::WHITE, Vec2::new(10.0, 10.0), Vec2::new(20.0, 0.0));

        a.interpolate_with(&b, 0.5).unwrap();
        let BrushMode::Linear { from, to, gradient } = a.mode() else {
            panic!("expected linear brush");
        };
        assert_eq!(*from, Vec2::new(5.0, 5.0));
        assert_eq!(*to, Vec2::new(15.0, 0.0));
        assert_eq!(gradient.resolution(), 2);
    }

    #[test]
    fn cross_mode_interpolation_is_rejected() {
        let mut a = Brush::from_color(Color::BLACK);
        let before = a.clone();
        let mut b = Brush::new();
        b.horizontal_from_two(Color::WHITE, Color::WHITE);

        let err = a.interpolate_with(&b, 0.5).unwrap_err();
        assert_eq!(err, BrushModeMismatch { from: BrushKind::Solid, to: BrushKind::Horizontal });
        assert_eq!(a, before);

        let mut v = Brush::new();
        v.vertical_from_two(Color::WHITE, Color::BLACK);
        assert!(b.interpolate_with(&v, 0.5).is_err());
    }

    #[test]
    fn multiply_alpha_reaches_gradient_colors() {
        let mut b = Brush::new();
        b.vertical_from_two(Color::WHITE, Color::BLACK);
        assert!(b.is_opaque());
        b.multiply_alpha(0.25);
        assert!(!b.is_opaque());
    }
}
