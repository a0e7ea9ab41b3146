//! Flat C ABI over `visage-graphics`.
//!
//! Every exported symbol is prefixed with the entity it operates on
//! (`VisageCanvas_fill`, `VisageColor_toARGB`, ...) and declared in
//! `include/visage_graphics_c.h`.
//!
//! Conventions:
//! - handles are heap objects created by `*_new` / `*_copy` and released by
//!   `*_delete` (`VisageCanvas_destroy` for canvases)
//! - functions producing a color write it through a trailing out pointer
//! - nothing panics across the boundary; bad input becomes a sentinel value
//!   and a `warn` log line
//! - using a handle after releasing it, or releasing it twice, is undefined;
//!   debug builds detect it and abort

#![allow(non_snake_case)]
#![allow(clippy::too_many_arguments)]

mod handle;
mod native;

pub mod brush;
pub mod canvas;
pub mod color;
pub mod font;
pub mod gradient;
pub mod line;
pub mod logging;
pub mod renderer;
pub mod text;

pub use handle::{VisageBrush, VisageCanvas, VisageFont, VisageGradient, VisageLine, VisageText};
