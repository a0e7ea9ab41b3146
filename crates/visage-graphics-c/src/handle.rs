//! Opaque handle plumbing.
//!
//! A handle is a `Box` turned into a raw pointer. Debug builds additionally
//! track live handle addresses so that a double release or a mutating call on
//! a released handle aborts instead of corrupting memory.

use visage_graphics::canvas::Canvas;
use visage_graphics::line::Line;
use visage_graphics::paint::{Brush, Gradient};
use visage_graphics::text::{Font, Text};

pub type VisageGradient = Gradient;
pub type VisageBrush = Brush;
pub type VisageLine = Line;
pub type VisageFont = Font;
pub type VisageText = Text;
pub type VisageCanvas = Canvas;

#[cfg(debug_assertions)]
mod live {
    use std::collections::BTreeSet;
    use std::sync::{Mutex, PoisonError};

    static LIVE: Mutex<BTreeSet<usize>> = Mutex::new(BTreeSet::new());

    pub fn insert(addr: usize) {
        LIVE.lock().unwrap_or_else(PoisonError::into_inner).insert(addr);
    }

    pub fn remove(addr: usize, what: &str) {
        if !LIVE.lock().unwrap_or_else(PoisonError::into_inner).remove(&addr) {
            log::error!("{what} {addr:#x} released twice or never created");
            std::process::abort();
        }
    }

    pub fn check(addr: usize, what: &str) {
        if !LIVE.lock().unwrap_or_else(PoisonError::into_inner).contains(&addr) {
            log::error!("{what} {addr:#x} used after release");
            std::process::abort();
        }
    }
}

/// Moves `value` to the heap and returns the owning handle.
pub(crate) fn into_handle<T>(value: T) -> *mut T {
    let ptr = Box::into_raw(Box::new(value));
    #[cfg(debug_assertions)]
    live::insert(ptr as usize);
    ptr
}

/// Drops the object behind `ptr`. Null is ignored.
///
/// # Safety
/// `ptr` must come from [`into_handle`] with the same `T` and not be released yet.
pub(crate) unsafe fn release<T>(ptr: *mut T) {
    if ptr.is_null() {
        return;
    }
    #[cfg(debug_assertions)]
    live::remove(ptr as usize, std::any::type_name::<T>());
    drop(unsafe { Box::from_raw(ptr) });
}

/// Runs `f` on a shared borrow, or returns `default` for null.
///
/// Shared handles may also point inside another object (`VisageText_getFont`),
/// so they are not checked against the live set.
///
/// # Safety
/// `ptr` must be null or point to a live `T`.
pub(crate) unsafe fn with_ref<T, R>(ptr: *const T, default: R, f: impl FnOnce(&T) -> R) -> R {
    match unsafe { ptr.as_ref() } {
        Some(value) => f(value),
        None => default,
    }
}

/// Runs `f` on an exclusive borrow, or returns `default` for null.
///
/// # Safety
/// `ptr` must be null or a live handle from [`into_handle`], not aliased elsewhere.
pub(crate) unsafe fn with_mut<T, R>(ptr: *mut T, default: R, f: impl FnOnce(&mut T) -> R) -> R {
    if ptr.is_null() {
        return default;
    }
    #[cfg(debug_assertions)]
    live::check(ptr as usize, std::any::type_name::<T>());
    f(unsafe { &mut *ptr })
}

/// Writes `value` through `out` unless it is null.
///
/// # Safety
/// `out` must be null or valid for a write of `T`.
pub(crate) unsafe fn write_out<T>(out: *mut T, value: T) {
    if let Some(slot) = unsafe { out.as_mut() } {
        *slot = value;
    }
}

/// Converts a C count to `usize`; negative counts become zero.
#[inline]
pub(crate) fn count(n: i32) -> usize {
    usize::try_from(n).unwrap_or(0)
}

/// Converts a Rust count to the C `int32_t` range, saturating.
#[inline]
pub(crate) fn c_count(n: usize) -> i32 {
    i32::try_from(n).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handles_round_trip() {
        let ptr = into_handle(Line::new(3));
        let n = unsafe { with_mut(ptr, 0, |l| l.num_points()) };
        assert_eq!(n, 3);
        unsafe { release(ptr) };
    }

    #[test]
    fn null_handles_use_defaults() {
        let n = unsafe { with_ref(std::ptr::null::<Line>(), 7, |l| l.num_points()) };
        assert_eq!(n, 7);
        unsafe { release(std::ptr::null_mut::<Line>()) };
        unsafe { write_out(std::ptr::null_mut::<i32>(), 5) };
    }

    #[test]
    fn count_conversions() {
        assert_eq!(count(-4), 0);
        assert_eq!(count(12), 12);
        assert_eq!(c_count(usize::MAX), i32::MAX);
    }
}
