use raw_window_handle::HasWindowHandle;

use crate::coords::{Rect, Vec2};
use crate::paint::{Brush, Color};
use crate::render::{Frame, NullBackend, RenderBackend, RenderTarget, Screenshot};
use crate::scene::{DrawItem, DrawList};
use crate::time::CanvasClock;

use super::state::{PixelScale, SavedState};
use super::{CanvasError, CanvasTarget, NativeWindow};

/// The draw-call sink.
///
/// Drawing calls only record commands; nothing reaches the backend until
/// [`submit`](Self::submit). Geometry is transformed at record time by the
/// position offset and the geometry scale (1 for native pixels, the DPI scale
/// for logical pixels), so draw items are always in native pixels.
pub struct Canvas {
    backend: Box<dyn RenderBackend>,
    target: CanvasTarget,
    width: u32,
    height: u32,

    dpi_scale: f32,
    pixel_scale: PixelScale,
    offset: Vec2,

    list: DrawList,
    saved: Vec<SavedState>,

    clock: CanvasClock,
    screenshot_requested: bool,
    screenshot: Option<Screenshot>,
}

impl Canvas {
    /// Canvas backed by [`NullBackend`].
    pub fn new() -> Self {
        Self::with_backend(Box::new(NullBackend::new()))
    }

    pub fn with_backend(backend: Box<dyn RenderBackend>) -> Self {
        Self {
            backend,
            target: CanvasTarget::Unbound,
            width: 0,
            height: 0,
            dpi_scale: 1.0,
            pixel_scale: PixelScale::Native,
            offset: Vec2::zero(),
            list: DrawList::new(),
            saved: Vec::new(),
            clock: CanvasClock::new(),
            screenshot_requested: false,
            screenshot: None,
        }
    }

    #[inline]
    pub fn backend_name(&self) -> &str {
        self.backend.name()
    }

    // ── binding ───────────────────────────────────────────────────────────

    #[inline]
    pub fn target(&self) -> CanvasTarget {
        self.target
    }

    pub fn pair_to_window(&mut self, window: NativeWindow, width: u32, height: u32) {
        log::debug!("canvas paired to window {:?} ({width}x{height})", window.raw());
        self.target = CanvasTarget::Window(window);
        self.set_dimensions(width, height);
    }

    /// Pairs to any window exposing a native handle (winit, SDL, ...).
    pub fn pair_to_window_handle(
        &mut self,
        window: &impl HasWindowHandle,
        width: u32,
        height: u32,
    ) -> Result<(), CanvasError> {
        let handle = window.window_handle().map_err(CanvasError::WindowHandle)?;
        self.pair_to_window(NativeWindow::new(handle.as_raw()), width, height);
        Ok(())
    }

    /// Renders to an off-screen target of the given size.
    pub fn set_windowless(&mut self, width: u32, height: u32) {
        log::debug!("canvas set windowless ({width}x{height})");
        self.target = CanvasTarget::Windowless;
        self.set_dimensions(width, height);
    }

    pub fn remove_from_window(&mut self) {
        self.target = CanvasTarget::Removed;
    }

    #[inline]
    pub fn set_dimensions(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    // ── scale & position ──────────────────────────────────────────────────

    #[inline]
    pub fn set_dpi_scale(&mut self, scale: f32) {
        self.dpi_scale = scale;
    }

    #[inline]
    pub fn dpi_scale(&self) -> f32 {
        self.dpi_scale
    }

    /// Drawing coordinates are device pixels.
    #[inline]
    pub fn set_native_pixel_scale(&mut self) {
        self.pixel_scale = PixelScale::Native;
    }

    /// Drawing coordinates are logical pixels.
    #[inline]
    pub fn set_logical_pixel_scale(&mut self) {
        self.pixel_scale = PixelScale::Logical;
    }

    #[inline]
    pub fn pixel_scale(&self) -> PixelScale {
        self.pixel_scale
    }

    /// Multiplier from drawing coordinates to native pixels.
    #[inline]
    pub fn geometry_scale(&self) -> f32 {
        match self.pixel_scale {
            PixelScale::Native => 1.0,
            PixelScale::Logical => self.dpi_scale,
        }
    }

    /// Moves the drawing origin by `(x, y)` in drawing coordinates.
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.offset = self.offset + Vec2::new(x, y) * self.geometry_scale();
    }

    /// Current drawing origin in native pixels.
    #[inline]
    pub fn position(&self) -> Vec2 {
        self.offset
    }

    #[inline]
    pub(crate) fn point(&self, x: f32, y: f32) -> Vec2 {
        self.offset + Vec2::new(x, y) * self.geometry_scale()
    }

    #[inline]
    pub(crate) fn rect(&self, x: f32, y: f32, width: f32, height: f32) -> Rect {
        Rect::from_origin_size(self.point(x, y), Vec2::new(width, height) * self.geometry_scale())
    }

    #[inline]
    pub(crate) fn length(&self, v: f32) -> f32 {
        v * self.geometry_scale()
    }

    // ── paint state ───────────────────────────────────────────────────────

    pub fn set_color(&mut self, color: Color) {
        self.list.set_brush(Brush::from_color(color));
    }

    pub fn set_brush(&mut self, brush: &Brush) {
        self.list.set_brush(brush.clone());
    }

    #[inline]
    pub fn brush(&self) -> &Brush {
        self.list.brush()
    }

    /// Replaces the clamp rect. Items drawn afterwards are clipped to it.
    pub fn set_clamp_bounds(&mut self, x: f32, y: f32, width: f32, height: f32) {
        let rect = self.rect(x, y, width, height).normalized();
        self.list.set_clip(Some(rect));
    }

    /// Narrows the clamp rect to its overlap with the given rect.
    pub fn trim_clamp_bounds(&mut self, x: f32, y: f32, width: f32, height: f32) {
        let rect = self.rect(x, y, width, height);
        self.list.trim_clip(rect);
    }

    /// Active clamp rect in native pixels.
    #[inline]
    pub fn clamp_bounds(&self) -> Option<Rect> {
        self.list.clip()
    }

    /// Pushes brush, position, pixel scale and clamp bounds.
    pub fn save_state(&mut self) {
        self.saved.push(SavedState {
            brush: self.list.brush().clone(),
            offset: self.offset,
            pixel_scale: self.pixel_scale,
            clip: self.list.clip(),
        });
    }

    /// Pops the last saved state. With nothing saved, the current state is kept.
    pub fn restore_state(&mut self) -> Result<(), CanvasError> {
        let state = self.saved.pop().ok_or(CanvasError::StateStackEmpty)?;
        self.list.set_brush(state.brush);
        self.list.set_clip(state.clip);
        self.offset = state.offset;
        self.pixel_scale = state.pixel_scale;
        Ok(())
    }

    #[inline]
    pub fn saved_state_depth(&self) -> usize {
        self.saved.len()
    }

    // ── draw list ─────────────────────────────────────────────────────────

    #[inline]
    pub(crate) fn list_mut(&mut self) -> &mut DrawList {
        &mut self.list
    }

    /// Commands recorded since the last submit or clear.
    #[inline]
    pub fn pending(&self) -> &[DrawItem] {
        self.list.items()
    }

    pub fn clear_drawn_shapes(&mut self) {
        self.list.clear();
    }

    /// Hands the pending commands to the backend as pass `pass`.
    ///
    /// On success the pending list is emptied and the frame count advances by
    /// one. On failure both are left as they were.
    pub fn submit(&mut self, pass: i32) -> Result<(), CanvasError> {
        let target = match self.target {
            CanvasTarget::Window(window) => RenderTarget::Window(window.raw()),
            CanvasTarget::Windowless => RenderTarget::Windowless,
            CanvasTarget::Unbound | CanvasTarget::Removed => return Err(CanvasError::NotBound),
        };

        let frame = Frame {
            pass,
            target,
            width: self.width,
            height: self.height,
            dpi_scale: self.dpi_scale,
            time: self.clock.snapshot(),
            items: self.list.items(),
            screenshot_requested: self.screenshot_requested,
        };

        let screenshot = self.backend.submit(&frame).map_err(CanvasError::Backend)?;

        log::trace!(
            "canvas submit: pass {pass}, {} items via {}",
            self.list.len(),
            self.backend.name()
        );

        self.list.clear();
        self.clock.advance_frame();
        if self.screenshot_requested {
            self.screenshot_requested = false;
            self.screenshot = screenshot;
        }
        Ok(())
    }

    // ── time ──────────────────────────────────────────────────────────────

    pub fn update_time(&mut self, time: f64) {
        self.clock.update(time);
    }

    #[inline]
    pub fn time(&self) -> f64 {
        self.clock.time()
    }

    #[inline]
    pub fn delta_time(&self) -> f64 {
        self.clock.delta_time()
    }

    #[inline]
    pub fn frame_count(&self) -> u64 {
        self.clock.frame_index()
    }

    // ── screenshots ───────────────────────────────────────────────────────

    /// Asks the backend to capture the next submitted frame.
    pub fn request_screenshot(&mut self) {
        self.screenshot_requested = true;
    }

    /// Last captured frame, if any.
    #[inline]
    pub fn screenshot(&self) -> Option<&Screenshot> {
        self.screenshot.as_ref()
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}
