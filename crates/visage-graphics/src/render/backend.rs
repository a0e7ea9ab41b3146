use std::fmt;

use raw_window_handle::RawWindowHandle;

use crate::scene::DrawItem;
use crate::time::FrameTime;

/// Where a frame is presented.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum RenderTarget {
    /// A native window; the handle is only valid while the window lives.
    Window(RawWindowHandle),
    /// Off-screen target owned by the backend.
    Windowless,
}

/// Everything a backend needs to draw one submit.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    /// Compositing stage the items belong to.
    pub pass: i32,
    pub target: RenderTarget,
    /// Target size in native pixels.
    pub width: u32,
    pub height: u32,
    pub dpi_scale: f32,
    /// Canvas time; `frame_index` counts frames submitted before this one.
    pub time: FrameTime,
    pub items: &'a [DrawItem],
    /// Return the presented pixels along with the result.
    pub screenshot_requested: bool,
}

/// Captured pixels of a presented frame, RGBA8, tightly packed rows.
#[derive(Clone, PartialEq, Eq)]
pub struct Screenshot {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl Screenshot {
    /// Fully transparent image of the given size.
    pub fn blank(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize * 4],
        }
    }

    /// RGBA bytes of pixel `(x, y)`, `None` outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let at = (y as usize * self.width as usize + x as usize) * 4;
        let px = self.pixels.get(at..at + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

impl fmt::Debug for Screenshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Screenshot")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("len", &self.pixels.len())
            .finish()
    }
}

/// Core backend interface. Calls occur on the thread that owns the canvas.
pub trait RenderBackend {
    fn name(&self) -> &str;

    /// Draws and presents `frame`.
    ///
    /// Returns a screenshot when `frame.screenshot_requested` is set and the
    /// backend can capture one.
    fn submit(&mut self, frame: &Frame<'_>) -> anyhow::Result<Option<Screenshot>>;
}
