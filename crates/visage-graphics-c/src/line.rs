use std::ptr;

use visage_graphics::line::Line;

use crate::handle::{VisageLine, c_count, count, into_handle, release, with_mut, with_ref};

#[unsafe(no_mangle)]
pub extern "C" fn VisageLine_new(points: i32) -> *mut VisageLine {
    into_handle(Line::new(count(points)))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageLine_copy(line: *const VisageLine) -> *mut VisageLine {
    let copy = unsafe { with_ref(line, Line::default(), Line::clone) };
    into_handle(copy)
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageLine_delete(line: *mut VisageLine) {
    unsafe { release(line) };
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageLine_getNumPoints(line: *const VisageLine) -> i32 {
    unsafe { with_ref(line, 0, |l| c_count(l.num_points())) }
}

/// Resizes all three arrays. Pointers from the value accessors are invalidated.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageLine_setNumPoints(line: *mut VisageLine, points: i32) {
    unsafe { with_mut(line, (), |l| l.set_num_points(count(points))) };
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageLine_getLineValueScale(line: *const VisageLine) -> f32 {
    unsafe { with_ref(line, 0.0, Line::line_value_scale) }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageLine_setLineValueScale(line: *mut VisageLine, line_value_scale: f32) {
    unsafe { with_mut(line, (), |l| l.set_line_value_scale(line_value_scale)) };
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageLine_getFillValueScale(line: *const VisageLine) -> f32 {
    unsafe { with_ref(line, 0.0, Line::fill_value_scale) }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageLine_setFillValueScale(line: *mut VisageLine, fill_value_scale: f32) {
    unsafe { with_mut(line, (), |l| l.set_fill_value_scale(fill_value_scale)) };
}

fn slice_ptr(values: &mut [f32]) -> *mut f32 {
    if values.is_empty() {
        ptr::null_mut()
    } else {
        values.as_mut_ptr()
    }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageLine_xValues(line: *mut VisageLine) -> *mut f32 {
    unsafe { with_mut(line, ptr::null_mut(), |l| slice_ptr(l.x_mut())) }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageLine_yValues(line: *mut VisageLine) -> *mut f32 {
    unsafe { with_mut(line, ptr::null_mut(), |l| slice_ptr(l.y_mut())) }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageLine_values(line: *mut VisageLine) -> *mut f32 {
    unsafe { with_mut(line, ptr::null_mut(), |l| slice_ptr(l.values_mut())) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrays_are_writable_through_the_pointers() {
        unsafe {
            let line = VisageLine_new(4);
            assert_eq!(VisageLine_getNumPoints(line), 4);

            let ys = VisageLine_yValues(line);
            assert!(!ys.is_null());
            for i in 0..4 {
                *ys.add(i) = i as f32 * 0.25;
            }
            assert_eq!((*line).y(), &[0.0, 0.25, 0.5, 0.75]);

            let copy = VisageLine_copy(line);
            VisageLine_setNumPoints(line, 0);
            assert!(VisageLine_xValues(line).is_null());
            assert!(VisageLine_values(line).is_null());
            assert_eq!(VisageLine_getNumPoints(copy), 4);

            VisageLine_delete(line);
            VisageLine_delete(copy);
        }
    }

    #[test]
    fn scales_and_negative_counts() {
        unsafe {
            let line = VisageLine_new(-3);
            assert_eq!(VisageLine_getNumPoints(line), 0);

            VisageLine_setLineValueScale(line, 2.0);
            VisageLine_setFillValueScale(line, 0.5);
            assert_eq!(VisageLine_getLineValueScale(line), 2.0);
            assert_eq!(VisageLine_getFillValueScale(line), 0.5);

            assert_eq!(VisageLine_getNumPoints(ptr::null()), 0);
            VisageLine_delete(line);
        }
    }
}
