//! Native window/display handles from the untyped pointers C hosts pass in.
//!
//! On X11 the window pointer carries the XID and the display pointer is the
//! `Display*`. On Windows the window pointer is the `HWND`; on macOS it is the
//! `NSView*`.

use std::ffi::c_void;

use raw_window_handle::{
    DisplayHandle, HandleError, HasDisplayHandle, HasWindowHandle, RawDisplayHandle,
    RawWindowHandle, WindowHandle,
};

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
pub(crate) fn window_handle(window: *mut c_void) -> Option<RawWindowHandle> {
    use raw_window_handle::XlibWindowHandle;
    if window.is_null() {
        return None;
    }
    Some(RawWindowHandle::Xlib(XlibWindowHandle::new(window as std::ffi::c_ulong)))
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
pub(crate) fn display_handle(display: *mut c_void) -> RawDisplayHandle {
    use raw_window_handle::XlibDisplayHandle;
    RawDisplayHandle::Xlib(XlibDisplayHandle::new(std::ptr::NonNull::new(display), 0))
}

#[cfg(target_os = "windows")]
pub(crate) fn window_handle(window: *mut c_void) -> Option<RawWindowHandle> {
    use raw_window_handle::Win32WindowHandle;
    let hwnd = std::num::NonZeroIsize::new(window as isize)?;
    Some(RawWindowHandle::Win32(Win32WindowHandle::new(hwnd)))
}

#[cfg(target_os = "windows")]
pub(crate) fn display_handle(_display: *mut c_void) -> RawDisplayHandle {
    RawDisplayHandle::Windows(raw_window_handle::WindowsDisplayHandle::new())
}

#[cfg(target_os = "macos")]
pub(crate) fn window_handle(window: *mut c_void) -> Option<RawWindowHandle> {
    use raw_window_handle::AppKitWindowHandle;
    let view = std::ptr::NonNull::new(window)?;
    Some(RawWindowHandle::AppKit(AppKitWindowHandle::new(view)))
}

#[cfg(target_os = "macos")]
pub(crate) fn display_handle(_display: *mut c_void) -> RawDisplayHandle {
    RawDisplayHandle::AppKit(raw_window_handle::AppKitDisplayHandle::new())
}

/// A host-owned window seen through raw handles.
pub(crate) struct HostWindow {
    window: RawWindowHandle,
    display: RawDisplayHandle,
}

impl HostWindow {
    pub(crate) fn new(window: *mut c_void, display: *mut c_void) -> Option<Self> {
        Some(Self {
            window: window_handle(window)?,
            display: display_handle(display),
        })
    }
}

impl HasWindowHandle for HostWindow {
    fn window_handle(&self) -> Result<WindowHandle<'_>, HandleError> {
        // SAFETY: the host keeps the window alive for the duration of the call
        // that built this value.
        Ok(unsafe { WindowHandle::borrow_raw(self.window) })
    }
}

impl HasDisplayHandle for HostWindow {
    fn display_handle(&self) -> Result<DisplayHandle<'_>, HandleError> {
        Ok(unsafe { DisplayHandle::borrow_raw(self.display) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_window_has_no_handle() {
        assert!(window_handle(std::ptr::null_mut()).is_none());
        assert!(HostWindow::new(std::ptr::null_mut(), std::ptr::null_mut()).is_none());
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    #[test]
    fn xid_is_carried_in_the_pointer() {
        let Some(RawWindowHandle::Xlib(handle)) = window_handle(0x2a00007 as *mut c_void) else {
            panic!("expected an xlib handle");
        };
        assert_eq!(handle.window, 0x2a00007);
    }
}
