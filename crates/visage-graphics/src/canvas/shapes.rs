//! Shape primitives. Each call records exactly one draw item (text without a
//! font records none) using the current brush, clamp bounds and transform.

use crate::coords::{CornerRadii, Vec2};
use crate::line::Line;
use crate::scene::shapes::{ArcCmd, ShapeStyle};
use crate::text::{Direction, Text};

use super::Canvas;

impl Canvas {
    // ── rectangles ────────────────────────────────────────────────────────

    /// Hard-edged fill, for backgrounds.
    pub fn fill(&mut self, x: f32, y: f32, width: f32, height: f32) {
        let rect = self.rect(x, y, width, height);
        self.list_mut().push_fill(rect);
    }

    pub fn rectangle(&mut self, x: f32, y: f32, width: f32, height: f32) {
        let rect = self.rect(x, y, width, height);
        self.list_mut().push_rect(rect, ShapeStyle::Fill);
    }

    pub fn rectangle_border(&mut self, x: f32, y: f32, width: f32, height: f32, thickness: f32) {
        let rect = self.rect(x, y, width, height);
        let thickness = self.length(thickness);
        self.list_mut().push_rect(rect, ShapeStyle::Border { thickness });
    }

    pub fn rectangle_shadow(&mut self, x: f32, y: f32, width: f32, height: f32, blur_radius: f32) {
        let rect = self.rect(x, y, width, height);
        let blur = self.length(blur_radius);
        self.list_mut().push_rect(rect, ShapeStyle::Shadow { blur });
    }

    fn rounded(&mut self, x: f32, y: f32, width: f32, height: f32, radii: CornerRadii, style: ShapeStyle) {
        let rect = self.rect(x, y, width, height);
        let radii = radii.scaled(self.geometry_scale());
        self.list_mut().push_rounded_rect(rect, radii, style);
    }

    pub fn rounded_rectangle(&mut self, x: f32, y: f32, width: f32, height: f32, rounding: f32) {
        self.rounded(x, y, width, height, CornerRadii::all(rounding), ShapeStyle::Fill);
    }

    pub fn left_rounded_rectangle(&mut self, x: f32, y: f32, width: f32, height: f32, rounding: f32) {
        self.rounded(x, y, width, height, CornerRadii::left(rounding), ShapeStyle::Fill);
    }

    pub fn right_rounded_rectangle(&mut self, x: f32, y: f32, width: f32, height: f32, rounding: f32) {
        self.rounded(x, y, width, height, CornerRadii::right(rounding), ShapeStyle::Fill);
    }

    pub fn top_rounded_rectangle(&mut self, x: f32, y: f32, width: f32, height: f32, rounding: f32) {
        self.rounded(x, y, width, height, CornerRadii::top(rounding), ShapeStyle::Fill);
    }

    pub fn bottom_rounded_rectangle(&mut self, x: f32, y: f32, width: f32, height: f32, rounding: f32) {
        self.rounded(x, y, width, height, CornerRadii::bottom(rounding), ShapeStyle::Fill);
    }

    pub fn rounded_rectangle_shadow(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        rounding: f32,
        blur_radius: f32,
    ) {
        let blur = self.length(blur_radius);
        self.rounded(x, y, width, height, CornerRadii::all(rounding), ShapeStyle::Shadow { blur });
    }

    pub fn rounded_rectangle_border(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        rounding: f32,
        thickness: f32,
    ) {
        let thickness = self.length(thickness);
        self.rounded(x, y, width, height, CornerRadii::all(rounding), ShapeStyle::Border { thickness });
    }

    /// Square rotated 45° inside the `width`-sided box at `(x, y)`.
    pub fn diamond(&mut self, x: f32, y: f32, width: f32, rounding: f32) {
        let rect = self.rect(x, y, width, width);
        let rounding = self.length(rounding);
        self.list_mut().push_diamond(rect, rounding);
    }

    // ── circles & superellipses ───────────────────────────────────────────

    /// Center and radius of the circle inscribed in the `width`-sided box at `(x, y)`.
    fn inscribed(&self, x: f32, y: f32, width: f32) -> (Vec2, f32) {
        let r = width * 0.5;
        (self.point(x + r, y + r), self.length(r))
    }

    pub fn circle(&mut self, x: f32, y: f32, width: f32) {
        let (center, radius) = self.inscribed(x, y, width);
        self.list_mut().push_circle(center, radius, ShapeStyle::Fill);
    }

    /// Circle whose edge fades out over `pixel_width`.
    pub fn fade_circle(&mut self, x: f32, y: f32, width: f32, pixel_width: f32) {
        let (center, radius) = self.inscribed(x, y, width);
        let blur = self.length(pixel_width);
        self.list_mut().push_circle(center, radius, ShapeStyle::Shadow { blur });
    }

    pub fn ring(&mut self, x: f32, y: f32, width: f32, thickness: f32) {
        let (center, radius) = self.inscribed(x, y, width);
        let thickness = self.length(thickness);
        self.list_mut().push_circle(center, radius, ShapeStyle::Border { thickness });
    }

    pub fn squircle(&mut self, x: f32, y: f32, width: f32, power: f32) {
        let rect = self.rect(x, y, width, width);
        self.list_mut().push_squircle(rect, power, ShapeStyle::Fill);
    }

    pub fn squircle_border(&mut self, x: f32, y: f32, width: f32, power: f32, thickness: f32) {
        let rect = self.rect(x, y, width, width);
        let thickness = self.length(thickness);
        self.list_mut().push_squircle(rect, power, ShapeStyle::Border { thickness });
    }

    pub fn super_ellipse(&mut self, x: f32, y: f32, width: f32, height: f32, power: f32) {
        let rect = self.rect(x, y, width, height);
        self.list_mut().push_squircle(rect, power, ShapeStyle::Fill);
    }

    // ── arcs ──────────────────────────────────────────────────────────────

    #[allow(clippy::too_many_arguments)]
    fn arc_cmd(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        thickness: f32,
        center_radians: f32,
        radians: f32,
        rounded: bool,
        shadow: Option<f32>,
    ) {
        let (center, radius) = self.inscribed(x, y, width);
        let arc = ArcCmd {
            center,
            radius,
            thickness: self.length(thickness),
            center_radians,
            radians,
            rounded,
            shadow: shadow.map(|w| self.length(w)),
        };
        self.list_mut().push_arc(arc);
    }

    #[allow(clippy::too_many_arguments)]
    pub fn arc(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        thickness: f32,
        center_radians: f32,
        radians: f32,
        rounded: bool,
    ) {
        self.arc_cmd(x, y, width, thickness, center_radians, radians, rounded, None);
    }

    pub fn rounded_arc(&mut self, x: f32, y: f32, width: f32, thickness: f32, center_radians: f32, radians: f32) {
        self.arc(x, y, width, thickness, center_radians, radians, true);
    }

    pub fn flat_arc(&mut self, x: f32, y: f32, width: f32, thickness: f32, center_radians: f32, radians: f32) {
        self.arc(x, y, width, thickness, center_radians, radians, false);
    }

    #[allow(clippy::too_many_arguments)]
    pub fn rounded_arc_shadow(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        thickness: f32,
        center_radians: f32,
        radians: f32,
        shadow_width: f32,
    ) {
        self.arc_cmd(x, y, width, thickness, center_radians, radians, true, Some(shadow_width));
    }

    #[allow(clippy::too_many_arguments)]
    pub fn flat_arc_shadow(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        thickness: f32,
        center_radians: f32,
        radians: f32,
        shadow_width: f32,
    ) {
        self.arc_cmd(x, y, width, thickness, center_radians, radians, false, Some(shadow_width));
    }

    // ── curves ────────────────────────────────────────────────────────────

    pub fn segment(&mut self, a_x: f32, a_y: f32, b_x: f32, b_y: f32, thickness: f32, rounded: bool) {
        let (a, b) = (self.point(a_x, a_y), self.point(b_x, b_y));
        let thickness = self.length(thickness);
        self.list_mut().push_segment(a, b, thickness, rounded);
    }

    #[allow(clippy::too_many_arguments)]
    pub fn quadratic(&mut self, a_x: f32, a_y: f32, b_x: f32, b_y: f32, c_x: f32, c_y: f32, thickness: f32) {
        let (a, b, c) = (self.point(a_x, a_y), self.point(b_x, b_y), self.point(c_x, c_y));
        let thickness = self.length(thickness);
        self.list_mut().push_quadratic(a, b, c, thickness);
    }

    // ── triangles ─────────────────────────────────────────────────────────

    #[allow(clippy::too_many_arguments)]
    fn triangle_cmd(
        &mut self,
        a_x: f32,
        a_y: f32,
        b_x: f32,
        b_y: f32,
        c_x: f32,
        c_y: f32,
        rounding: f32,
        style: ShapeStyle,
    ) {
        let points = [self.point(a_x, a_y), self.point(b_x, b_y), self.point(c_x, c_y)];
        let rounding = self.length(rounding);
        self.list_mut().push_triangle(points, rounding, style);
    }

    pub fn triangle(&mut self, a_x: f32, a_y: f32, b_x: f32, b_y: f32, c_x: f32, c_y: f32) {
        self.triangle_cmd(a_x, a_y, b_x, b_y, c_x, c_y, 0.0, ShapeStyle::Fill);
    }

    #[allow(clippy::too_many_arguments)]
    pub fn triangle_border(&mut self, a_x: f32, a_y: f32, b_x: f32, b_y: f32, c_x: f32, c_y: f32, thickness: f32) {
        let thickness = self.length(thickness);
        self.triangle_cmd(a_x, a_y, b_x, b_y, c_x, c_y, 0.0, ShapeStyle::Border { thickness });
    }

    #[allow(clippy::too_many_arguments)]
    pub fn rounded_triangle(&mut self, a_x: f32, a_y: f32, b_x: f32, b_y: f32, c_x: f32, c_y: f32, rounding: f32) {
        self.triangle_cmd(a_x, a_y, b_x, b_y, c_x, c_y, rounding, ShapeStyle::Fill);
    }

    #[allow(clippy::too_many_arguments)]
    pub fn rounded_triangle_border(
        &mut self,
        a_x: f32,
        a_y: f32,
        b_x: f32,
        b_y: f32,
        c_x: f32,
        c_y: f32,
        rounding: f32,
        thickness: f32,
    ) {
        let thickness = self.length(thickness);
        self.triangle_cmd(a_x, a_y, b_x, b_y, c_x, c_y, rounding, ShapeStyle::Border { thickness });
    }

    /// Points left; the tip sits at `(x, y + width)`, the base is `2 * width` tall.
    pub fn triangle_left(&mut self, x: f32, y: f32, width: f32) {
        self.triangle(x + width, y, x + width, y + 2.0 * width, x, y + width);
    }

    /// Points right; the tip sits at `(x + width, y + width)`.
    pub fn triangle_right(&mut self, x: f32, y: f32, width: f32) {
        self.triangle(x, y, x, y + 2.0 * width, x + width, y + width);
    }

    /// Points up; the tip sits at `(x + width, y)`, the base is `2 * width` wide.
    pub fn triangle_up(&mut self, x: f32, y: f32, width: f32) {
        self.triangle(x, y + width, x + 2.0 * width, y + width, x + width, y);
    }

    /// Points down; the tip sits at `(x + width, y + width)`.
    pub fn triangle_down(&mut self, x: f32, y: f32, width: f32) {
        self.triangle(x, y, x + 2.0 * width, y, x + width, y + width);
    }

    // ── graphs & text ─────────────────────────────────────────────────────

    /// Strokes `line` as a value graph inside the box. The line is copied.
    pub fn line(&mut self, line: &Line, x: f32, y: f32, width: f32, height: f32, line_width: f32) {
        let rect = self.rect(x, y, width, height);
        let line_width = self.length(line_width);
        self.list_mut().push_graph_line(rect, line, line_width);
    }

    /// Fills between `line` and the horizontal at `fill_position` (box-relative).
    pub fn line_fill(&mut self, line: &Line, x: f32, y: f32, width: f32, height: f32, fill_position: f32) {
        let rect = self.rect(x, y, width, height);
        let fill_position = self.length(fill_position);
        self.list_mut().push_graph_fill(rect, line, fill_position);
    }

    /// Lays out `text` in the box and records it.
    ///
    /// Multi-line text wraps against the box width for horizontal flow and the
    /// box height for vertical flow. Text without a font is skipped.
    pub fn text(&mut self, text: &Text, x: f32, y: f32, width: f32, height: f32, direction: Direction) {
        if text.font().is_none() {
            log::warn!("canvas text skipped: no font set");
            return;
        }

        let rect = self.rect(x, y, width, height);
        let extent = if direction.is_vertical() { rect.height() } else { rect.width() };
        let lines = text.line_ranges(extent);
        self.list_mut().push_text(text, rect, direction, lines);
    }
}
