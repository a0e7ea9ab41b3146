//! Time subsystem.
//!
//! Canvas timing is host-driven: the caller reports the current time once per
//! frame and the canvas counts submitted frames.
//! Intended usage:
//! - one `CanvasClock` per canvas
//! - call `update()` before drawing, `advance_frame()` after a successful submit

mod canvas_clock;

pub use canvas_clock::{CanvasClock, FrameTime};
