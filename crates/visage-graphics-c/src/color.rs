//! `VisageColor` marshaling.
//!
//! `VisageColor` has the exact layout of the engine's `Color`, so conversion
//! is a plain `bytemuck` cast.

use std::ffi::{CStr, c_char};

use bytemuck::{Pod, Zeroable};
use visage_graphics::paint::{Color, NUM_CHANNELS};

use crate::handle::write_out;

/// C view of a color: B, G, R, A channels plus the HDR multiplier.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct VisageColor {
    pub values: [f32; NUM_CHANNELS],
    pub hdr: f32,
}

impl From<Color> for VisageColor {
    #[inline]
    fn from(color: Color) -> Self {
        bytemuck::cast(color)
    }
}

impl From<VisageColor> for Color {
    #[inline]
    fn from(color: VisageColor) -> Self {
        bytemuck::cast(color)
    }
}

/// Reads a color behind a const pointer; null reads as transparent.
///
/// # Safety
/// `color` must be null or valid for reads.
pub(crate) unsafe fn read_color(color: *const VisageColor) -> Color {
    unsafe { color.as_ref() }.map_or(Color::TRANSPARENT, |c| Color::from(*c))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageColor_fromAHSV_inner(
    alpha: f32,
    hue: f32,
    saturation: f32,
    value: f32,
    return_value: *mut VisageColor,
) {
    let color = Color::from_ahsv(alpha, hue, saturation, value);
    unsafe { write_out(return_value, color.into()) };
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageColor_fromABGR_inner(abgr: u32, return_value: *mut VisageColor) {
    unsafe { write_out(return_value, Color::from_abgr(abgr).into()) };
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageColor_fromARGB_inner(argb: u32, return_value: *mut VisageColor) {
    unsafe { write_out(return_value, Color::from_argb(argb).into()) };
}

/// Parses `#RGB`, `#ARGB`, `#RRGGBB` or `#AARRGGBB` (the `#` is optional).
///
/// Malformed or null input yields transparent black.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageColor_fromHexString_inner(str: *const c_char, return_value: *mut VisageColor) {
    let color = if str.is_null() {
        log::warn!("VisageColor_fromHexString: null string");
        Color::TRANSPARENT
    } else {
        let text = unsafe { CStr::from_ptr(str) }.to_string_lossy();
        Color::from_hex_str(&text).unwrap_or_else(|err| {
            log::warn!("VisageColor_fromHexString: {err}");
            Color::TRANSPARENT
        })
    };
    unsafe { write_out(return_value, color.into()) };
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageColor_toABGR(color: *const VisageColor) -> u32 {
    unsafe { read_color(color) }.to_abgr()
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageColor_toARGB(color: *const VisageColor) -> u32 {
    unsafe { read_color(color) }.to_argb()
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageColor_toRGB(color: *const VisageColor) -> u32 {
    unsafe { read_color(color) }.to_rgb()
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageColor_saturation(color: *const VisageColor) -> f32 {
    unsafe { read_color(color) }.saturation()
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageColor_hue(color: *const VisageColor) -> f32 {
    unsafe { read_color(color) }.hue()
}

#[cfg(test)]
mod tests {
    use std::ffi::CString;

    use super::*;

    fn hex(s: &str) -> VisageColor {
        let s = CString::new(s).unwrap();
        let mut out = VisageColor::zeroed();
        unsafe { VisageColor_fromHexString_inner(s.as_ptr(), &mut out) };
        out
    }

    fn argb(v: u32) -> VisageColor {
        let mut out = VisageColor::zeroed();
        unsafe { VisageColor_fromARGB_inner(v, &mut out) };
        out
    }

    #[test]
    fn layout_matches_header() {
        assert_eq!(size_of::<VisageColor>(), 5 * size_of::<f32>());
        assert_eq!(size_of::<VisageColor>(), size_of::<Color>());
    }

    #[test]
    fn hex_red_is_full_red() {
        let red = hex("#ff0000");
        // B, G, R, A
        assert_eq!(red.values, [0.0, 0.0, 1.0, 1.0]);
        assert_eq!(red.hdr, 1.0);
    }

    #[test]
    fn malformed_hex_is_transparent_black() {
        for bad in ["", "#", "#12345", "zzzzzz", "#ff00ff00ff"] {
            let c = hex(bad);
            assert_eq!(c.values, [0.0; 4], "input {bad:?}");
            assert_eq!(c.hdr, 1.0);
        }
        let mut out = argb(0xffffffff);
        unsafe { VisageColor_fromHexString_inner(std::ptr::null(), &mut out) };
        assert_eq!(out.values, [0.0; 4]);
    }

    #[test]
    fn argb_round_trip() {
        for v in [0xff000066u32, 0x80ff7f01, 0x00000000, 0xffffffff] {
            let c = argb(v);
            assert_eq!(unsafe { VisageColor_toARGB(&c) }, v);
        }
        let c = argb(0x11223344);
        assert_eq!(unsafe { VisageColor_toABGR(&c) }, 0x11443322);
        assert_eq!(unsafe { VisageColor_toRGB(&c) }, 0x223344);
    }

    #[test]
    fn hsv_queries() {
        let mut c = VisageColor::zeroed();
        unsafe { VisageColor_fromAHSV_inner(1.0, 120.0, 1.0, 1.0, &mut c) };
        // pure green
        assert_eq!(c.values, [0.0, 1.0, 0.0, 1.0]);
        assert!((unsafe { VisageColor_hue(&c) } - 120.0).abs() < 1e-3);
        assert!((unsafe { VisageColor_saturation(&c) } - 1.0).abs() < 1e-6);
        assert_eq!(unsafe { VisageColor_toARGB(std::ptr::null()) }, 0);
    }
}
