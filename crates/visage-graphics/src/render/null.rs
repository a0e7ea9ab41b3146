use std::collections::BTreeMap;

use super::{Frame, RenderBackend, Screenshot};

/// Per-pass totals recorded by [`NullBackend`].
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct PassStats {
    pub frames: u64,
    pub items: u64,
}

/// Backend that draws nothing.
///
/// It accepts every frame, keeps per-pass statistics and answers screenshot
/// requests with a blank image of the target size.
#[derive(Debug, Default)]
pub struct NullBackend {
    passes: BTreeMap<i32, PassStats>,
}

impl NullBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pass_stats(&self, pass: i32) -> PassStats {
        self.passes.get(&pass).copied().unwrap_or_default()
    }

    pub fn total_frames(&self) -> u64 {
        self.passes.values().map(|s| s.frames).sum()
    }
}

impl RenderBackend for NullBackend {
    fn name(&self) -> &str {
        "NullBackend"
    }

    fn submit(&mut self, frame: &Frame<'_>) -> anyhow::Result<Option<Screenshot>> {
        let stats = self.passes.entry(frame.pass).or_default();
        stats.frames += 1;
        stats.items += frame.items.len() as u64;

        log::trace!(
            "null backend: pass {} frame {} ({} items, {}x{})",
            frame.pass,
            frame.time.frame_index,
            frame.items.len(),
            frame.width,
            frame.height
        );
        if log::log_enabled!(log::Level::Trace) {
            for item in frame.items {
                log::trace!("  #{} {}", item.order, item.cmd.family());
            }
        }

        Ok(frame
            .screenshot_requested
            .then(|| Screenshot::blank(frame.width, frame.height)))
    }
}
