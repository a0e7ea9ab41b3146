//! Canvas: paint state, transform, target binding and submission.

#[allow(clippy::module_inception)]
mod canvas;
mod error;
mod shapes;
mod state;
mod target;

pub use canvas::Canvas;
pub use error::CanvasError;
pub use state::PixelScale;
pub use target::{CanvasTarget, NativeWindow};
