//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store backend-agnostic draw commands in submission order
//! - stamp every command with the paint state (brush + clip) active when it was recorded
//! - keep shape-specific payloads and push helpers isolated per file under `scene::shapes`

mod cmd;
mod list;

pub mod shapes;

pub use cmd::DrawCmd;
pub use list::{DrawItem, DrawList};
