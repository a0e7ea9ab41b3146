//! visage-graphics engine crate.
//!
//! A retained 2-D drawing model: colors, gradients, brushes, value-graph
//! lines, fonts and text, recorded by a [`Canvas`](canvas::Canvas) into a draw
//! list and handed to a pluggable [`RenderBackend`](render::RenderBackend) on
//! submit. The process-wide GPU capability check lives in [`device`].

pub mod canvas;
pub mod coords;
pub mod device;
pub mod line;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
pub mod text;
pub mod time;
