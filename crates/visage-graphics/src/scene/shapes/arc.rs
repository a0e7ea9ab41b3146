use crate::coords::Vec2;
use crate::scene::{DrawCmd, DrawList};

/// Circular arc stroke draw payload.
///
/// The arc is centered on `center_radians` and spans `radians` in total.
#[derive(Debug, Clone, PartialEq)]
pub struct ArcCmd {
    pub center: Vec2,
    pub radius: f32,
    pub thickness: f32,
    pub center_radians: f32,
    pub radians: f32,
    /// Round caps instead of flat ones.
    pub rounded: bool,
    /// Shadow falloff width, `None` for a plain arc.
    pub shadow: Option<f32>,
}

impl DrawList {
    #[inline]
    pub fn push_arc(&mut self, arc: ArcCmd) {
        self.push(DrawCmd::Arc(arc));
    }
}
