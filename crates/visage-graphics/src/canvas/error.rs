use std::fmt;

/// Errors reported by [`Canvas`](super::Canvas) operations.
#[derive(Debug)]
pub enum CanvasError {
    /// `submit` on a canvas that is not paired to a window or windowless target.
    NotBound,
    /// `restore_state` without a matching `save_state`.
    StateStackEmpty,
    /// The window did not expose a native handle.
    WindowHandle(raw_window_handle::HandleError),
    /// The backend rejected the frame.
    Backend(anyhow::Error),
}

impl fmt::Display for CanvasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CanvasError::NotBound => write!(f, "canvas is not bound to a target"),
            CanvasError::StateStackEmpty => write!(f, "restore_state called with no saved state"),
            CanvasError::WindowHandle(err) => write!(f, "window handle unavailable: {err}"),
            CanvasError::Backend(err) => write!(f, "backend submit failed: {err}"),
        }
    }
}

impl std::error::Error for CanvasError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CanvasError::WindowHandle(err) => Some(err),
            CanvasError::Backend(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}
