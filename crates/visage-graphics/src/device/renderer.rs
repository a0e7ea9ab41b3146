use anyhow::{Context, Result};
use raw_window_handle::{HasDisplayHandle, HasWindowHandle};
use state::InitCell;

use super::RendererInit;

/// Anything the check can create a surface for (a native window).
pub trait SurfaceTarget: HasWindowHandle + HasDisplayHandle {}

impl<T: HasWindowHandle + HasDisplayHandle + ?Sized> SurfaceTarget for T {}

/// Result of the one-time capability check.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RendererStatus {
    /// A usable GPU adapter exists.
    pub supported: bool,
    /// The adapter can present to the checked window.
    pub swap_chain_supported: bool,
    /// A logical device was created.
    pub initialized: bool,
    /// First failure encountered, if any.
    pub error: Option<String>,
}

/// Process-wide renderer status.
///
/// The check runs at most once per `Renderer`; later `check_initialization`
/// calls return immediately. Every query is `false` until the check ran.
pub struct Renderer {
    status: InitCell<RendererStatus>,
}

static INSTANCE: Renderer = Renderer::new();

impl Renderer {
    pub const fn new() -> Self {
        Self {
            status: InitCell::new(),
        }
    }

    /// The shared instance used by every canvas in the process.
    pub fn instance() -> &'static Renderer {
        &INSTANCE
    }

    /// Checks the GPU with the default [`RendererInit`].
    ///
    /// With `target`, the check also checks that the adapter can present to
    /// that window.
    pub fn check_initialization(&self, target: Option<&dyn SurfaceTarget>) {
        self.check_initialization_with(&RendererInit::default(), target);
    }

    pub fn check_initialization_with(&self, init: &RendererInit, target: Option<&dyn SurfaceTarget>) {
        self.initialize_with(|| check_capabilities(init, target));
    }

    /// Stores the result of `check` unless a status is already present.
    pub fn initialize_with<F>(&self, check: F) -> &RendererStatus
    where
        F: FnOnce() -> RendererStatus,
    {
        self.status.get_or_init(check)
    }

    /// The check result, `None` before the first check.
    #[inline]
    pub fn status(&self) -> Option<&RendererStatus> {
        self.status.try_get()
    }

    pub fn supported(&self) -> bool {
        self.status().is_some_and(|s| s.supported)
    }

    pub fn swap_chain_supported(&self) -> bool {
        self.status().is_some_and(|s| s.swap_chain_supported)
    }

    pub fn initialized(&self) -> bool {
        self.status().is_some_and(|s| s.initialized)
    }

    pub fn error_message(&self) -> Option<&str> {
        self.status().and_then(|s| s.error.as_deref())
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

fn check_capabilities(init: &RendererInit, target: Option<&dyn SurfaceTarget>) -> RendererStatus {
    let mut status = RendererStatus::default();
    if let Err(err) = pollster::block_on(run_checks(init, target, &mut status)) {
        log::warn!("renderer check failed: {err:#}");
        status.error = Some(format!("{err:#}"));
    }
    log::info!(
        "renderer: supported={} swap_chain={} initialized={}",
        status.supported,
        status.swap_chain_supported,
        status.initialized
    );
    status
}

/// Instance → optional surface → adapter → device. Fills `status` as steps succeed.
async fn run_checks(
    init: &RendererInit,
    target: Option<&dyn SurfaceTarget>,
    status: &mut RendererStatus,
) -> Result<()> {
    let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
        backends: init.backends,
        ..Default::default()
    });

    let surface = target.and_then(|window| match create_surface(&instance, window) {
        Ok(surface) => Some(surface),
        Err(err) => {
            log::warn!("renderer check continues without a surface: {err:#}");
            status.error = Some(format!("{err:#}"));
            None
        }
    });

    let adapter = instance
        .request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: init.power_preference,
            compatible_surface: surface.as_ref(),
            force_fallback_adapter: init.force_fallback_adapter,
        })
        .await
        .context("failed to find a suitable GPU adapter")?;
    status.supported = true;
    log::info!("renderer adapter: {}", adapter.get_info().name);

    if let Some(surface) = &surface {
        let caps = surface.get_capabilities(&adapter);
        if let Some(format) = choose_surface_format(&caps, init.prefer_srgb) {
            status.swap_chain_supported = adapter.is_surface_supported(surface);
            log::debug!("renderer swap chain format: {format:?}");
        }
    }

    let (_device, _queue) = adapter
        .request_device(&wgpu::DeviceDescriptor {
            label: Some("visage-graphics check device"),
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::default(),
            experimental_features: wgpu::ExperimentalFeatures::disabled(),
            memory_hints: wgpu::MemoryHints::Performance,
            trace: wgpu::Trace::Off,
        })
        .await
        .context("failed to create wgpu device/queue")?;
    status.initialized = true;

    Ok(())
}

fn create_surface(instance: &wgpu::Instance, window: &dyn SurfaceTarget) -> Result<wgpu::Surface<'static>> {
    // SAFETY: the surface is dropped before the check returns, while the
    // caller still holds the window.
    let target = unsafe { wgpu::SurfaceTargetUnsafe::from_window(&window) }
        .context("window has no usable native handle")?;
    let surface = unsafe { instance.create_surface_unsafe(target) }
        .context("failed to create wgpu surface")?;
    Ok(surface)
}

fn choose_surface_format(
    caps: &wgpu::SurfaceCapabilities,
    prefer_srgb: bool,
) -> Option<wgpu::TextureFormat> {
    if caps.formats.is_empty() {
        return None;
    }

    if prefer_srgb {
        let preferred = [
            wgpu::TextureFormat::Bgra8UnormSrgb,
            wgpu::TextureFormat::Rgba8UnormSrgb,
        ];
        for f in preferred {
            if caps.formats.contains(&f) {
                return Some(f);
            }
        }
    }

    Some(caps.formats[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn ok_status() -> RendererStatus {
        RendererStatus {
            supported: true,
            swap_chain_supported: false,
            initialized: true,
            error: None,
        }
    }

    #[test]
    fn queries_are_false_before_check() {
        let renderer = Renderer::new();
        assert!(renderer.status().is_none());
        assert!(!renderer.supported());
        assert!(!renderer.swap_chain_supported());
        assert!(!renderer.initialized());
        assert_eq!(renderer.error_message(), None);
    }

    #[test]
    fn check_runs_once() {
        let renderer = Renderer::new();
        let calls = Cell::new(0);

        renderer.initialize_with(|| {
            calls.set(calls.get() + 1);
            ok_status()
        });
        renderer.initialize_with(|| {
            calls.set(calls.get() + 1);
            RendererStatus::default()
        });

        assert_eq!(calls.get(), 1);
        assert!(renderer.supported());
        assert!(renderer.initialized());
        assert!(!renderer.swap_chain_supported());
    }

    #[test]
    fn failure_is_queryable() {
        let renderer = Renderer::new();
        renderer.initialize_with(|| RendererStatus {
            error: Some("no adapter".into()),
            ..RendererStatus::default()
        });
        assert!(!renderer.supported());
        assert_eq!(renderer.error_message(), Some("no adapter"));
    }

    #[test]
    fn surface_format_prefers_srgb() {
        let caps = |formats| wgpu::SurfaceCapabilities {
            formats,
            present_modes: vec![wgpu::PresentMode::Fifo],
            alpha_modes: vec![wgpu::CompositeAlphaMode::Opaque],
            usages: wgpu::TextureUsages::RENDER_ATTACHMENT,
        };
        let both = caps(vec![wgpu::TextureFormat::Bgra8Unorm, wgpu::TextureFormat::Bgra8UnormSrgb]);
        assert_eq!(choose_surface_format(&both, true), Some(wgpu::TextureFormat::Bgra8UnormSrgb));
        assert_eq!(choose_surface_format(&both, false), Some(wgpu::TextureFormat::Bgra8Unorm));
        assert_eq!(choose_surface_format(&caps(Vec::new()), true), None);
    }
}
