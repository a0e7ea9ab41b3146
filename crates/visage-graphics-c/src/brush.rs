use std::ptr;

use visage_graphics::coords::Vec2;
use visage_graphics::paint::Brush;

use crate::color::{VisageColor, read_color};
use crate::handle::{VisageBrush, VisageGradient, into_handle, release, with_mut, with_ref};

#[unsafe(no_mangle)]
pub extern "C" fn VisageBrush_new() -> *mut VisageBrush {
    into_handle(Brush::new())
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageBrush_copy(brush: *const VisageBrush) -> *mut VisageBrush {
    let copy = unsafe { with_ref(brush, Brush::new(), Brush::clone) };
    into_handle(copy)
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageBrush_delete(brush: *mut VisageBrush) {
    unsafe { release(brush) };
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageBrush_solid(brush: *mut VisageBrush, color: *const VisageColor) {
    let color = unsafe { read_color(color) };
    unsafe { with_mut(brush, (), |b| b.solid(color)) };
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageBrush_horizontal(brush: *mut VisageBrush, gradient: *const VisageGradient) {
    let Some(gradient) = (unsafe { gradient.as_ref() }) else {
        return;
    };
    unsafe { with_mut(brush, (), |b| b.horizontal(gradient)) };
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageBrush_horizontalFromTwo(brush: *mut VisageBrush, left: VisageColor, right: VisageColor) {
    unsafe { with_mut(brush, (), |b| b.horizontal_from_two(left.into(), right.into())) };
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageBrush_vertical(brush: *mut VisageBrush, gradient: *const VisageGradient) {
    let Some(gradient) = (unsafe { gradient.as_ref() }) else {
        return;
    };
    unsafe { with_mut(brush, (), |b| b.vertical(gradient)) };
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageBrush_verticalFromTwo(brush: *mut VisageBrush, top: VisageColor, bottom: VisageColor) {
    unsafe { with_mut(brush, (), |b| b.vertical_from_two(top.into(), bottom.into())) };
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageBrush_linear(
    brush: *mut VisageBrush,
    gradient: *const VisageGradient,
    from_x: f32,
    from_y: f32,
    to_x: f32,
    to_y: f32,
) {
    let Some(gradient) = (unsafe { gradient.as_ref() }) else {
        return;
    };
    let (from, to) = (Vec2::new(from_x, from_y), Vec2::new(to_x, to_y));
    unsafe { with_mut(brush, (), |b| b.linear(gradient, from, to)) };
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageBrush_linearFromTwo(
    brush: *mut VisageBrush,
    from_color: VisageColor,
    to_color: VisageColor,
    from_x: f32,
    from_y: f32,
    to_x: f32,
    to_y: f32,
) {
    let (from, to) = (Vec2::new(from_x, from_y), Vec2::new(to_x, to_y));
    unsafe {
        with_mut(brush, (), |b| {
            b.linear_from_two(from_color.into(), to_color.into(), from, to)
        })
    };
}

/// Blends toward `other`. Brushes of different kinds, and a brush blended
/// with itself, are left unchanged.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageBrush_interpolateWith(brush: *mut VisageBrush, other: *const VisageBrush, t: f32) {
    if ptr::eq(brush.cast_const(), other) {
        return;
    }
    let Some(other) = (unsafe { other.as_ref() }) else {
        return;
    };
    unsafe {
        with_mut(brush, (), |b| {
            if let Err(err) = b.interpolate_with(other, t) {
                log::warn!("VisageBrush_interpolateWith: {err}");
            }
        })
    };
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageBrush_multiplyAlpha(brush: *mut VisageBrush, t: f32) {
    unsafe { with_mut(brush, (), |b| b.multiply_alpha(t)) };
}

#[cfg(test)]
mod tests {
    use visage_graphics::paint::{BrushKind, BrushMode, Color};

    use super::*;
    use crate::gradient::{VisageGradient_delete, VisageGradient_new, VisageGradient_setColor, VisageGradient_setResolution};

    #[test]
    fn builders_replace_the_mode() {
        unsafe {
            let b = VisageBrush_new();
            assert_eq!((*b).kind(), BrushKind::Solid);

            let g = VisageGradient_new();
            VisageGradient_setResolution(g, 2);
            VisageGradient_setColor(g, 0, Color::WHITE.into());
            VisageBrush_linear(b, g, 0.0, 0.0, 10.0, 0.0);
            VisageGradient_delete(g);

            // the brush kept its own copy of the gradient
            let BrushMode::Linear { gradient, to, .. } = (*b).mode() else {
                panic!("expected linear brush");
            };
            assert_eq!(gradient.color(0), Some(Color::WHITE));
            assert_eq!(*to, Vec2::new(10.0, 0.0));

            let white = VisageColor::from(Color::WHITE);
            VisageBrush_solid(b, &white);
            assert_eq!((*b).mode(), &BrushMode::Solid(Color::WHITE));
            VisageBrush_delete(b);
        }
    }

    #[test]
    fn cross_kind_interpolation_is_a_noop() {
        unsafe {
            let a = VisageBrush_new();
            let b = VisageBrush_new();
            VisageBrush_verticalFromTwo(b, Color::WHITE.into(), Color::WHITE.into());

            VisageBrush_interpolateWith(a, b, 0.5);
            assert_eq!(*a, Brush::new());

            let c = VisageBrush_copy(b);
            VisageBrush_multiplyAlpha(c, 0.5);
            VisageBrush_interpolateWith(c, b, 1.0);
            assert_eq!(*c, *b);

            for brush in [a, b, c] {
                VisageBrush_delete(brush);
            }
        }
    }

    #[test]
    fn interpolating_with_itself_is_a_noop() {
        unsafe {
            let b = VisageBrush_new();
            VisageBrush_verticalFromTwo(b, Color::WHITE.into(), Color::BLACK.into());
            let before = VisageBrush_copy(b);

            VisageBrush_interpolateWith(b, b, 0.5);
            assert_eq!(*b, *before);

            VisageBrush_delete(b);
            VisageBrush_delete(before);
        }
    }
}
