use raw_window_handle::RawWindowHandle;

/// A native window a canvas presents to.
///
/// The handle is borrowed from the host; the host keeps the window alive for
/// as long as the canvas is paired to it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct NativeWindow(RawWindowHandle);

impl NativeWindow {
    #[inline]
    pub fn new(raw: RawWindowHandle) -> Self {
        Self(raw)
    }

    #[inline]
    pub fn raw(self) -> RawWindowHandle {
        self.0
    }
}

/// Binding state of a canvas.
///
/// `Unbound → Window | Windowless → Removed`. A bound canvas may be re-paired
/// to another window or switched to windowless at any time, and a removed
/// canvas may be bound again.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub enum CanvasTarget {
    #[default]
    Unbound,
    Window(NativeWindow),
    Windowless,
    Removed,
}

impl CanvasTarget {
    #[inline]
    pub fn is_bound(self) -> bool {
        matches!(self, CanvasTarget::Window(_) | CanvasTarget::Windowless)
    }
}
