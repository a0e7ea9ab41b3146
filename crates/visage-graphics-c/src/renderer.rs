use std::ffi::c_void;

use visage_graphics::device::Renderer;

use crate::native::HostWindow;

/// Checks the GPU once per process. A null `window` checks without a surface.
#[unsafe(no_mangle)]
pub extern "C" fn VisageRenderer_checkInitialization(window: *mut c_void, display: *mut c_void) {
    match HostWindow::new(window, display) {
        Some(host) => Renderer::instance().check_initialization(Some(&host)),
        None => Renderer::instance().check_initialization(None),
    }
}

#[unsafe(no_mangle)]
pub extern "C" fn VisageRenderer_supported() -> bool {
    Renderer::instance().supported()
}

#[unsafe(no_mangle)]
pub extern "C" fn VisageRenderer_swapChainSupported() -> bool {
    Renderer::instance().swap_chain_supported()
}

#[unsafe(no_mangle)]
pub extern "C" fn VisageRenderer_initialized() -> bool {
    Renderer::instance().initialized()
}
