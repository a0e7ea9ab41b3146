//! GPU capability probing.
//!
//! This module is responsible for:
//! - the process-wide renderer singleton
//! - probing wgpu for an adapter, a presentable surface and a device, once

mod init;
mod renderer;

pub use init::RendererInit;
pub use renderer::{SurfaceTarget, Renderer, RendererStatus};
