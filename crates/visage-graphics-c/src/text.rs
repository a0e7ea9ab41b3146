use std::ffi::{CStr, c_char};
use std::{ptr, slice};

use visage_graphics::text::{Font, Justification, Text};

use crate::font::{override_char, read_codepoints};
use crate::handle::{VisageFont, VisageText, c_count, count, into_handle, release, with_mut, with_ref, write_out};

#[unsafe(no_mangle)]
pub extern "C" fn VisageText_new() -> *mut VisageText {
    into_handle(Text::new())
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageText_copy(text: *const VisageText) -> *mut VisageText {
    let copy = unsafe { with_ref(text, Text::new(), Text::clone) };
    into_handle(copy)
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageText_delete(text: *mut VisageText) {
    unsafe { release(text) };
}

/// NUL-terminated UTF-8. Null clears the text.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageText_setText(text: *mut VisageText, s: *const c_char) {
    let bytes = if s.is_null() { &[][..] } else { unsafe { CStr::from_ptr(s) }.to_bytes() };
    unsafe { with_mut(text, (), |t| t.set_text_bytes(bytes)) };
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageText_setTextWithLength(text: *mut VisageText, s: *const c_char, length: i32) {
    let len = count(length);
    let bytes = if s.is_null() || len == 0 {
        &[][..]
    } else {
        unsafe { slice::from_raw_parts(s.cast::<u8>(), len) }
    };
    unsafe { with_mut(text, (), |t| t.set_text_bytes(bytes)) };
}

/// NUL-terminated UTF-32.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageText_setTextU32(text: *mut VisageText, s: *const u32) {
    let mut len = 0usize;
    if !s.is_null() {
        while unsafe { *s.add(len) } != 0 {
            len += 1;
        }
    }
    let chars = unsafe { read_codepoints(s, c_count(len)) };
    unsafe { with_mut(text, (), |t| t.set_chars(chars)) };
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageText_setTextU32WithLength(text: *mut VisageText, s: *const u32, length: i32) {
    let chars = unsafe { read_codepoints(s, length) };
    unsafe { with_mut(text, (), |t| t.set_chars(chars)) };
}

/// NUL-terminated UTF-32 view of the text, valid until the text is next modified.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageText_getTextU32(text: *const VisageText, string_length: *mut i32) -> *const u32 {
    let (chars, len) = unsafe {
        with_ref(text, (ptr::null(), 0), |t| {
            (t.chars_with_nul().as_ptr().cast::<u32>(), c_count(t.len()))
        })
    };
    unsafe { write_out(string_length, len) };
    chars
}

/// Copies `font` into the text. Null removes the font.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageText_setFont(text: *mut VisageText, font: *const VisageFont) {
    let font = unsafe { with_ref(font, None, |f| Some(f.clone())) };
    unsafe { with_mut(text, (), |t| t.set_font(font)) };
}

/// Borrowed pointer to the text's own font, or null. Do not delete it.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageText_getFont(text: *const VisageText) -> *const VisageFont {
    unsafe { with_ref(text, ptr::null(), |t| t.font().map_or(ptr::null(), |f| f as *const Font)) }
}

/// Unknown bits are dropped.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageText_setJustification(text: *mut VisageText, justification: i32) {
    let justification = Justification::from_bits_truncate(justification as u32);
    unsafe { with_mut(text, (), |t| t.set_justification(justification)) };
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageText_getJustification(text: *const VisageText) -> i32 {
    unsafe { with_ref(text, 0, |t| t.justification().bits() as i32) }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageText_setMultiLine(text: *mut VisageText, multi_line: bool) {
    unsafe { with_mut(text, (), |t| t.set_multi_line(multi_line)) };
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageText_getMultiLine(text: *const VisageText) -> bool {
    unsafe { with_ref(text, false, Text::multi_line) }
}

/// `0` turns the override off.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageText_setCharacterOverride(text: *mut VisageText, character: i32) {
    let c = override_char(character);
    unsafe { with_mut(text, (), |t| t.set_character_override(c)) };
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageText_getCharacterOverride(text: *const VisageText) -> i32 {
    unsafe { with_ref(text, 0, |t| t.character_override().map_or(0, |c| u32::from(c) as i32)) }
}
