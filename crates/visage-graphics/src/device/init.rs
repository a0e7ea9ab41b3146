/// Parameters for the renderer capability check.
///
/// Keep this structure minimal. Add fields only when a concrete platform
/// requirement exists.
#[derive(Debug, Clone)]
pub struct RendererInit {
    /// Backends wgpu may choose from.
    pub backends: wgpu::Backends,

    /// Adapter preference.
    pub power_preference: wgpu::PowerPreference,

    /// Accept a software adapter when no hardware adapter is found.
    pub force_fallback_adapter: bool,

    /// Prefer an sRGB surface format when reporting the swap chain format.
    pub prefer_srgb: bool,
}

impl Default for RendererInit {
    fn default() -> Self {
        Self {
            backends: wgpu::Backends::all(),
            power_preference: wgpu::PowerPreference::HighPerformance,
            force_fallback_adapter: false,
            prefer_srgb: true,
        }
    }
}
