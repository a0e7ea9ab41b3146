//! Backend seam.
//!
//! A canvas records a `scene::DrawList` and hands it to a [`RenderBackend`] as a
//! [`Frame`] on submit. Backends own every GPU/CPU resource they need; the
//! canvas never talks to the GPU directly.
//!
//! Convention:
//! - geometry in a frame is in native pixels (top-left origin, +Y down)
//! - items are painted in slice order

mod backend;
mod null;

pub use backend::{Frame, RenderBackend, RenderTarget, Screenshot};
pub use null::{NullBackend, PassStats};
