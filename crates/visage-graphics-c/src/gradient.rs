use core::cmp::Ordering;
use core::ptr;

use visage_graphics::paint::{Color, Gradient};

use crate::color::VisageColor;
use crate::handle::{VisageGradient, c_count, count, into_handle, release, with_mut, with_ref, write_out};

/// Callback filling one gradient slot: `(position, out_color)`.
pub type VisageSampleFunction = Option<unsafe extern "C" fn(f32, *mut VisageColor)>;

#[unsafe(no_mangle)]
pub extern "C" fn VisageGradient_new() -> *mut VisageGradient {
    into_handle(Gradient::new())
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageGradient_copy(gradient: *const VisageGradient) -> *mut VisageGradient {
    let copy = unsafe { with_ref(gradient, Gradient::new(), Gradient::clone) };
    into_handle(copy)
}

/// Builds a gradient by calling `sample_function` once per slot.
///
/// Slots the callback leaves untouched are transparent.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageGradient_fromSampleFunction(
    resolution: i32,
    sample_function: VisageSampleFunction,
) -> *mut VisageGradient {
    let Some(sample) = sample_function else {
        log::warn!("VisageGradient_fromSampleFunction: null callback");
        return into_handle(Gradient::new());
    };
    let gradient = Gradient::from_sample_function(count(resolution), |t| {
        let mut out = VisageColor::from(Color::TRANSPARENT);
        unsafe { sample(t, &mut out) };
        Color::from(out)
    });
    into_handle(gradient)
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageGradient_delete(gradient: *mut VisageGradient) {
    unsafe { release(gradient) };
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageGradient_getResolution(gradient: *const VisageGradient) -> i32 {
    unsafe { with_ref(gradient, 0, |g| c_count(g.resolution())) }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageGradient_setResolution(gradient: *mut VisageGradient, resolution: i32) {
    unsafe { with_mut(gradient, (), |g| g.set_resolution(count(resolution))) };
}

/// Writes slot `index`, or transparent when the index is out of range.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageGradient_getColor(
    gradient: *const VisageGradient,
    index: i32,
    return_value: *mut VisageColor,
) {
    let color = unsafe {
        with_ref(gradient, None, |g| usize::try_from(index).ok().and_then(|i| g.color(i)))
    };
    let color = color.unwrap_or_else(|| {
        log::warn!("VisageGradient_getColor: index {index} out of range");
        Color::TRANSPARENT
    });
    unsafe { write_out(return_value, color.into()) };
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageGradient_setColor(gradient: *mut VisageGradient, index: i32, color: VisageColor) {
    unsafe {
        with_mut(gradient, (), |g| {
            let result = match usize::try_from(index) {
                Ok(i) => g.set_color(i, color.into()).map_err(|e| e.to_string()),
                Err(_) => Err(format!("negative index {index}")),
            };
            if let Err(err) = result {
                log::warn!("VisageGradient_setColor: {err}");
            }
        })
    };
}

/// Blends toward `other`. Blending a gradient with itself leaves it unchanged.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageGradient_interpolateWith(
    gradient: *mut VisageGradient,
    other: *const VisageGradient,
    t: f32,
) {
    if ptr::eq(gradient.cast_const(), other) {
        return;
    }
    let Some(other) = (unsafe { other.as_ref() }) else {
        return;
    };
    unsafe { with_mut(gradient, (), |g| g.interpolate_with(other, t)) };
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageGradient_sample(
    gradient: *const VisageGradient,
    t: f32,
    return_value: *mut VisageColor,
) {
    let color = unsafe { with_ref(gradient, Color::TRANSPARENT, |g| g.sample(t)) };
    unsafe { write_out(return_value, color.into()) };
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageGradient_multiplyAlpha(gradient: *mut VisageGradient, mult: f32) {
    unsafe { with_mut(gradient, (), |g| g.multiply_alpha(mult)) };
}

/// `-1`, `0` or `1`. A null gradient orders before any other.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageGradient_compare(a: *const VisageGradient, b: *const VisageGradient) -> i32 {
    let ordering = match unsafe { (a.as_ref(), b.as_ref()) } {
        (Some(a), Some(b)) => a.cmp(b),
        (a, b) => a.is_some().cmp(&b.is_some()),
    };
    match ordering {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}
