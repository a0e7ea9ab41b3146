use crate::coords::Rect;
use crate::paint::Brush;

use super::DrawCmd;

/// A single draw item: insertion order + command + the paint state it was recorded with.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub order: u32,
    pub cmd: DrawCmd,
    pub brush: Brush,
    /// Clamp rect in native pixels. `None` = no clipping (draw everywhere).
    pub clip: Option<Rect>,
}

/// Recorded draw stream for one submit.
///
/// Items are painted in insertion order. `push()` stamps each command with the
/// current brush and clip, so shape helpers only carry geometry.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    next_order: u32,

    brush: Brush,
    clip: Option<Rect>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops recorded items. Keeps allocated capacity and the current paint state.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_order = 0;
    }

    /// Returns items in insertion (paint) order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn brush(&self) -> &Brush {
        &self.brush
    }

    #[inline]
    pub fn set_brush(&mut self, brush: Brush) {
        self.brush = brush;
    }

    #[inline]
    pub fn clip(&self) -> Option<Rect> {
        self.clip
    }

    #[inline]
    pub fn set_clip(&mut self, clip: Option<Rect>) {
        self.clip = clip;
    }

    /// Narrows the current clip to its overlap with `rect`.
    ///
    /// Without an active clip, `rect` becomes the clip. Disjoint rects leave a
    /// zero-area clip so later items are skipped by the backend.
    pub fn trim_clip(&mut self, rect: Rect) {
        let effective = match self.clip {
            None => rect.normalized(),
            Some(current) => current.clipped_to(rect),
        };
        self.clip = Some(effective);
    }

    /// Records a draw command with the current brush and clip.
    #[inline]
    pub fn push(&mut self, cmd: DrawCmd) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);

        self.items.push(DrawItem {
            order,
            cmd,
            brush: self.brush.clone(),
            clip: self.clip,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::paint::Color;
    use crate::scene::shapes::ShapeStyle;

    #[test]
    fn items_keep_insertion_order_and_paint_state() {
        let mut list = DrawList::new();
        list.set_brush(Brush::from_color(Color::WHITE));
        list.push_rect(Rect::new(0.0, 0.0, 10.0, 10.0), ShapeStyle::Fill);

        list.set_brush(Brush::from_color(Color::BLACK));
        list.set_clip(Some(Rect::new(0.0, 0.0, 5.0, 5.0)));
        list.push_circle(Vec2::new(5.0, 5.0), 2.0, ShapeStyle::Fill);

        let items = list.items();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].order, 0);
        assert_eq!(items[1].order, 1);
        assert_eq!(items[0].brush, Brush::from_color(Color::WHITE));
        assert_eq!(items[0].clip, None);
        assert_eq!(items[1].brush, Brush::from_color(Color::BLACK));
        assert_eq!(items[1].clip, Some(Rect::new(0.0, 0.0, 5.0, 5.0)));
    }

    #[test]
    fn clear_resets_order_but_keeps_state() {
        let mut list = DrawList::new();
        list.set_brush(Brush::from_color(Color::WHITE));
        list.push_rect(Rect::new(0.0, 0.0, 1.0, 1.0), ShapeStyle::Fill);
        list.clear();
        assert!(list.is_empty());

        list.push_rect(Rect::new(0.0, 0.0, 1.0, 1.0), ShapeStyle::Fill);
        assert_eq!(list.items()[0].order, 0);
        assert_eq!(list.brush(), &Brush::from_color(Color::WHITE));
    }

    #[test]
    fn trim_clip_intersects() {
        let mut list = DrawList::new();
        list.trim_clip(Rect::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(list.clip(), Some(Rect::new(0.0, 0.0, 10.0, 10.0)));

        list.trim_clip(Rect::new(5.0, 5.0, 10.0, 10.0));
        assert_eq!(list.clip(), Some(Rect::new(5.0, 5.0, 5.0, 5.0)));

        list.trim_clip(Rect::new(50.0, 50.0, 1.0, 1.0));
        assert!(list.clip().is_some_and(|c| c.is_empty()));
    }
}
