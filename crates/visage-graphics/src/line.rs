//! Value-graph polyline.

/// A polyline of `n` points, each with an x, y and value coordinate.
///
/// The three coordinate arrays are always the same length. `set_num_points`
/// may reallocate them, so any raw pointer into the arrays handed out earlier
/// must not be used afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    x: Vec<f32>,
    y: Vec<f32>,
    values: Vec<f32>,
    line_value_scale: f32,
    fill_value_scale: f32,
}

impl Line {
    pub fn new(points: usize) -> Self {
        Self {
            x: vec![0.0; points],
            y: vec![0.0; points],
            values: vec![0.0; points],
            line_value_scale: 1.0,
            fill_value_scale: 1.0,
        }
    }

    #[inline]
    pub fn num_points(&self) -> usize {
        self.x.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Resizes all three arrays. Added points start at zero.
    pub fn set_num_points(&mut self, points: usize) {
        self.x.resize(points, 0.0);
        self.y.resize(points, 0.0);
        self.values.resize(points, 0.0);
    }

    #[inline]
    pub fn x(&self) -> &[f32] {
        &self.x
    }

    #[inline]
    pub fn y(&self) -> &[f32] {
        &self.y
    }

    #[inline]
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    #[inline]
    pub fn x_mut(&mut self) -> &mut [f32] {
        &mut self.x
    }

    #[inline]
    pub fn y_mut(&mut self) -> &mut [f32] {
        &mut self.y
    }

    #[inline]
    pub fn values_mut(&mut self) -> &mut [f32] {
        &mut self.values
    }

    /// Writes point `index`. Returns `false` when the index is past the end.
    pub fn set_point(&mut self, index: usize, x: f32, y: f32, value: f32) -> bool {
        if index >= self.num_points() {
            return false;
        }
        self.x[index] = x;
        self.y[index] = y;
        self.values[index] = value;
        true
    }

    #[inline]
    pub fn line_value_scale(&self) -> f32 {
        self.line_value_scale
    }

    #[inline]
    pub fn set_line_value_scale(&mut self, scale: f32) {
        self.line_value_scale = scale;
    }

    #[inline]
    pub fn fill_value_scale(&self) -> f32 {
        self.fill_value_scale
    }

    #[inline]
    pub fn set_fill_value_scale(&mut self, scale: f32) {
        self.fill_value_scale = scale;
    }
}

impl Default for Line {
    fn default() -> Self {
        Self::new(0)
    }
}
