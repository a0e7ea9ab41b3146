use core::cmp::Ordering;
use std::fmt;

use super::Color;

/// Error returned when a gradient slot index is past its resolution.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct IndexOutOfRange {
    pub index: usize,
    pub len: usize,
}

impl fmt::Display for IndexOutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "index {} out of range for gradient of resolution {}", self.index, self.len)
    }
}

impl std::error::Error for IndexOutOfRange {}

/// Evenly spaced color samples.
///
/// Semantics:
/// - slot `i` of `n` sits at normalized position `i / (n - 1)` (a single slot sits at 0)
/// - sampling clamps `t` to `[0, 1]` and interpolates between the two neighbouring slots
/// - an empty gradient samples to [`Color::TRANSPARENT`]
#[derive(Debug, Clone, Default)]
pub struct Gradient {
    colors: Vec<Color>,
}

impl Gradient {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_colors(colors: &[Color]) -> Self {
        Self {
            colors: colors.to_vec(),
        }
    }

    /// Two-slot gradient from `from` to `to`.
    pub fn from_two(from: Color, to: Color) -> Self {
        Self {
            colors: vec![from, to],
        }
    }

    /// Fills `resolution` slots by calling `sample` at each slot's normalized position.
    pub fn from_sample_function<F>(resolution: usize, mut sample: F) -> Self
    where
        F: FnMut(f32) -> Color,
    {
        let colors = (0..resolution)
            .map(|i| sample(slot_position(i, resolution)))
            .collect();
        Self { colors }
    }

    #[inline]
    pub fn resolution(&self) -> usize {
        self.colors.len()
    }

    /// Resizes the gradient. Existing slots are kept, new slots are transparent.
    pub fn set_resolution(&mut self, resolution: usize) {
        self.colors.resize(resolution, Color::TRANSPARENT);
    }

    #[inline]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    #[inline]
    pub fn color(&self, index: usize) -> Option<Color> {
        self.colors.get(index).copied()
    }

    pub fn set_color(&mut self, index: usize, color: Color) -> Result<(), IndexOutOfRange> {
        let len = self.colors.len();
        let slot = self
            .colors
            .get_mut(index)
            .ok_or(IndexOutOfRange { index, len })?;
        *slot = color;
        Ok(())
    }

    /// Samples the gradient at `t`, clamped to `[0, 1]`.
    pub fn sample(&self, t: f32) -> Color {
        match self.colors.as_slice() {
            [] => Color::TRANSPARENT,
            [only] => *only,
            colors => {
                let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
                let position = t * (colors.len() - 1) as f32;
                let index = (position as usize).min(colors.len() - 2);
                let local = position - index as f32;
                Color::interpolate(&colors[index], &colors[index + 1], local)
            }
        }
    }

    /// Blends toward `other` by `t`.
    ///
    /// The result has the larger of the two resolutions; each slot blends both
    /// gradients sampled at that slot's position.
    pub fn interpolate_with(&mut self, other: &Gradient, t: f32) {
        let resolution = self.resolution().max(other.resolution());
        let blended = (0..resolution)
            .map(|i| {
                let p = slot_position(i, resolution);
                Color::interpolate(&self.sample(p), &other.sample(p), t)
            })
            .collect();
        self.colors = blended;
    }

    /// Returns a blended copy without modifying `self`.
    pub fn interpolated(&self, other: &Gradient, t: f32) -> Gradient {
        let mut out = self.clone();
        out.interpolate_with(other, t);
        out
    }

    pub fn multiply_alpha(&mut self, mult: f32) {
        for c in &mut self.colors {
            c.multiply_alpha(mult);
        }
    }
}

#[inline]
fn slot_position(index: usize, resolution: usize) -> f32 {
    if resolution <= 1 {
        0.0
    } else {
        index as f32 / (resolution - 1) as f32
    }
}

impl Ord for Gradient {
    /// Channel-wise over the shared prefix, then by resolution.
    fn cmp(&self, other: &Self) -> Ordering {
        self.colors
            .iter()
            .zip(other.colors.iter())
            .map(|(a, b)| a.cmp(b))
            .find(|o| *o != Ordering::Equal)
            .unwrap_or_else(|| self.resolution().cmp(&other.resolution()))
    }
}

impl PartialOrd for Gradient {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Gradient {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Gradient {}

#[cfg(test)]
mod tests {
    use super::*;

    fn red() -> Color {
        Color::from_argb(0xffff0000)
    }

    fn blue() -> Color {
        Color::from_argb(0xff0000ff)
    }

    // ── sampling ──────────────────────────────────────────────────────────

    #[test]
    fn sample_endpoints_match_stored_colors() {
        let g = Gradient::from_colors(&[red(), Color::WHITE, blue()]);
        assert_eq!(g.sample(0.0), red());
        assert_eq!(g.sample(1.0), blue());
        assert_eq!(g.sample(0.5), Color::WHITE);
    }

    #[test]
    fn sample_clamps_outside_unit_range() {
        let g = Gradient::from_two(red(), blue());
        assert_eq!(g.sample(-3.0), red());
        assert_eq!(g.sample(7.5), blue());
    }

    #[test]
    fn two_color_sampling_is_monotonic() {
        let g = Gradient::from_two(Color::TRANSPARENT, Color::WHITE);
        let mut last = -1.0;
        for i in 0..=20 {
            let a = g.sample(i as f32 / 20.0).alpha();
            assert!(a >= last);
            last = a;
        }
    }

    #[test]
    fn degenerate_gradients() {
        assert_eq!(Gradient::new().sample(0.3), Color::TRANSPARENT);
        assert_eq!(Gradient::from_colors(&[red()]).sample(0.9), red());
    }

    // ── slots ─────────────────────────────────────────────────────────────

    #[test]
    fn set_resolution_keeps_prefix() {
        let mut g = Gradient::from_two(red(), blue());
        g.set_resolution(3);
        assert_eq!(g.color(0), Some(red()));
        assert_eq!(g.color(1), Some(blue()));
        assert_eq!(g.color(2), Some(Color::TRANSPARENT));
        g.set_resolution(1);
        assert_eq!(g.resolution(), 1);
    }

    #[test]
    fn set_color_out_of_range() {
        let mut g = Gradient::from_two(red(), blue());
        assert_eq!(g.set_color(2, red()), Err(IndexOutOfRange { index: 2, len: 2 }));
        assert!(g.set_color(1, red()).is_ok());
        assert_eq!(g.color(1), Some(red()));
        assert_eq!(g.color(5), None);
    }

    #[test]
    fn from_sample_function_positions() {
        let g = Gradient::from_sample_function(5, |t| Color::new(t, 0.0, 0.0, 0.0));
        let alphas: Vec<f32> = g.colors().iter().map(|c| c.alpha()).collect();
        assert_eq!(alphas, vec![0.0, 0.25, 0.5, 0.75, 1.0]);

        let single = Gradient::from_sample_function(1, |t| Color::new(t + 0.5, 0.0, 0.0, 0.0));
        assert_eq!(single.color(0).map(|c| c.alpha()), Some(0.5));
    }

    // ── blending ──────────────────────────────────────────────────────────

    #[test]
    fn interpolate_with_takes_larger_resolution() {
        let mut a = Gradient::from_two(red(), red());
        let b = Gradient::from_colors(&[blue(), blue(), blue()]);
        a.interpolate_with(&b, 1.0);
        assert_eq!(a.resolution(), 3);
        assert!(a.colors().iter().all(|c| *c == blue()));
    }

    #[test]
    fn interpolate_with_zero_is_identity() {
        let a = Gradient::from_colors(&[red(), Color::WHITE, blue()]);
        let b = Gradient::from_two(blue(), red());
        assert_eq!(a.interpolated(&b, 0.0), a);
    }

    #[test]
    fn multiply_alpha_scales_every_slot() {
        let mut g = Gradient::from_two(red(), blue());
        g.multiply_alpha(0.5);
        assert!(g.colors().iter().all(|c| c.alpha() == 0.5));
    }

    // ── ordering ──────────────────────────────────────────────────────────

    #[test]
    fn ordering_channels_then_resolution() {
        let short = Gradient::from_colors(&[red()]);
        let long = Gradient::from_two(red(), red());
        assert!(short < long);

        let a = Gradient::from_two(red(), blue());
        let b = Gradient::from_two(blue(), red());
        // red has blue channel 0, blue has blue channel 1
        assert!(a < b);
        assert_eq!(a.clone(), a);
    }

    #[test]
    fn ordering_with_nan_slot_is_transitive() {
        let nan = Color::new(1.0, 0.0, 0.0, f32::NAN);
        let a = Gradient::from_two(red(), red());
        let b = Gradient::from_two(red(), nan);
        let c = Gradient::from_two(red(), blue());

        assert!(a < c);
        assert!(c < b);
        assert!(a < b);
        assert_ne!(a, b);
        assert_eq!(b.clone(), b);
    }
}
