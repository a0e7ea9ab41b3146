use std::ffi::{c_char, c_int};
use std::{ptr, slice};

use visage_graphics::text::Font;

use crate::handle::{VisageFont, c_count, count, into_handle, release, with_ref, write_out};

/// Reads `len` UTF-32 codepoints. Null or empty input yields an empty vector;
/// invalid scalar values become U+FFFD.
///
/// # Safety
/// `string` must be null or valid for `len` reads.
pub(crate) unsafe fn read_codepoints(string: *const u32, len: i32) -> Vec<char> {
    let len = count(len);
    if string.is_null() || len == 0 {
        return Vec::new();
    }
    unsafe { slice::from_raw_parts(string, len) }
        .iter()
        .map(|&c| char::from_u32(c).unwrap_or(char::REPLACEMENT_CHARACTER))
        .collect()
}

/// `0` means no override.
pub(crate) fn override_char(character: i32) -> Option<char> {
    match character {
        0 => None,
        c => Some(u32::try_from(c).ok().and_then(char::from_u32).unwrap_or(char::REPLACEMENT_CHARACTER)),
    }
}

/// Copies up to `capacity` break indices into `out` and returns the full count.
///
/// # Safety
/// `out` must be null or valid for `capacity` writes.
unsafe fn copy_breaks(breaks: &[usize], out: *mut c_int, capacity: i32) -> i32 {
    let n = breaks.len().min(count(capacity));
    if !out.is_null() && n > 0 {
        let dst = unsafe { slice::from_raw_parts_mut(out, n) };
        for (slot, &b) in dst.iter_mut().zip(breaks) {
            *slot = c_count(b);
        }
    }
    c_count(breaks.len())
}

/// Parses `data_size` bytes of TrueType/OpenType data. Returns null when the
/// data is missing or cannot be parsed.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageFont_new(
    size: f32,
    font_data: *const c_char,
    data_size: i32,
    dpi_scale: f32,
) -> *mut VisageFont {
    let len = count(data_size);
    if font_data.is_null() || len == 0 {
        log::warn!("VisageFont_new: no font data");
        return ptr::null_mut();
    }
    let bytes = unsafe { slice::from_raw_parts(font_data.cast::<u8>(), len) };
    match Font::from_bytes(size, bytes, dpi_scale) {
        Ok(font) => into_handle(font),
        Err(err) => {
            log::warn!("VisageFont_new: {err}");
            ptr::null_mut()
        }
    }
}

/// Wraps an embedded face, or returns null if it fails to load.
fn embedded(name: &str, font: Result<Font, visage_graphics::text::FontLoadError>) -> *mut VisageFont {
    match font {
        Ok(font) => into_handle(font),
        Err(err) => {
            log::warn!("{name}: {err}");
            ptr::null_mut()
        }
    }
}

#[unsafe(no_mangle)]
pub extern "C" fn VisageFont_DejaVuSans(size: f32, dpi_scale: f32) -> *mut VisageFont {
    embedded("VisageFont_DejaVuSans", Font::sans(size, dpi_scale))
}

#[unsafe(no_mangle)]
pub extern "C" fn VisageFont_DejaVuSansMono(size: f32, dpi_scale: f32) -> *mut VisageFont {
    embedded("VisageFont_DejaVuSansMono", Font::mono(size, dpi_scale))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageFont_copy(font: *const VisageFont) -> *mut VisageFont {
    unsafe { with_ref(font, ptr::null_mut(), |f| into_handle(f.clone())) }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageFont_withDpiScale(font: *const VisageFont, dpi_scale: f32) -> *mut VisageFont {
    unsafe { with_ref(font, ptr::null_mut(), |f| into_handle(f.with_dpi_scale(dpi_scale))) }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageFont_delete(font: *mut VisageFont) {
    unsafe { release(font) };
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageFont_getDpiScale(font: *const VisageFont) -> f32 {
    unsafe { with_ref(font, 0.0, Font::dpi_scale) }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageFont_widthOverflowIndex(
    font: *const VisageFont,
    string: *const u32,
    string_length: i32,
    width: f32,
    round: bool,
    character_override: i32,
) -> i32 {
    let chars = unsafe { read_codepoints(string, string_length) };
    let over = override_char(character_override);
    unsafe { with_ref(font, 0, |f| c_count(f.width_overflow_index(&chars, width, round, over))) }
}

/// Writes at most `line_breaks_length` break indices and returns how many
/// there are in total, so a caller can size its buffer with a first call.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageFont_lineBreaks(
    font: *const VisageFont,
    string: *const u32,
    string_length: i32,
    width: f32,
    line_breaks: *mut c_int,
    line_breaks_length: i32,
) -> i32 {
    let chars = unsafe { read_codepoints(string, string_length) };
    let breaks = unsafe { with_ref(font, Vec::new(), |f| f.line_breaks(&chars, width)) };
    unsafe { copy_breaks(&breaks, line_breaks, line_breaks_length) }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageFont_stringWidth(
    font: *const VisageFont,
    string: *const u32,
    string_length: i32,
    character_override: i32,
) -> f32 {
    let chars = unsafe { read_codepoints(string, string_length) };
    let over = override_char(character_override);
    unsafe { with_ref(font, 0.0, |f| f.string_width(&chars, over)) }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageFont_lineHeight(font: *const VisageFont) -> f32 {
    unsafe { with_ref(font, 0.0, Font::line_height) }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageFont_capitalHeight(font: *const VisageFont) -> f32 {
    unsafe { with_ref(font, 0.0, Font::capital_height) }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageFont_lowerDipHeight(font: *const VisageFont) -> f32 {
    unsafe { with_ref(font, 0.0, Font::lower_dip_height) }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageFont_size(font: *const VisageFont) -> f32 {
    unsafe { with_ref(font, 0.0, Font::size) }
}

/// Borrowed view of the bytes the font was created from. Valid while `font` lives.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageFont_fontData(font: *const VisageFont, data_size: *mut i32) -> *const c_char {
    let (data, len) = unsafe {
        with_ref(font, (ptr::null(), 0), |f| {
            let bytes = f.font_data();
            (bytes.as_ptr().cast::<c_char>(), c_count(bytes.len()))
        })
    };
    unsafe { write_out(data_size, len) };
    data
}
