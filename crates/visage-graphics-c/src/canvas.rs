use std::ffi::c_void;
use std::ptr;

use visage_graphics::canvas::{Canvas, NativeWindow};
use visage_graphics::text::Direction;

use crate::color::VisageColor;
use crate::handle::{
    VisageBrush, VisageCanvas, VisageLine, VisageText, c_count, into_handle, release, with_mut, with_ref, write_out,
};
use crate::native;

#[inline]
fn dimension(n: i32) -> u32 {
    u32::try_from(n).unwrap_or(0)
}

#[unsafe(no_mangle)]
pub extern "C" fn VisageCanvas_new() -> *mut VisageCanvas {
    into_handle(Canvas::new())
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageCanvas_destroy(canvas: *mut VisageCanvas) {
    unsafe { release(canvas) };
}

// ── binding ───────────────────────────────────────────────────────────────

/// `window_handle` is the platform window (XID, `HWND` or `NSView*`).
#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageCanvas_pairToWindow(
    canvas: *mut VisageCanvas,
    window_handle: *mut c_void,
    width: i32,
    height: i32,
) {
    let Some(raw) = native::window_handle(window_handle) else {
        log::warn!("VisageCanvas_pairToWindow: null window handle");
        return;
    };
    unsafe {
        with_mut(canvas, (), |c| {
            c.pair_to_window(NativeWindow::new(raw), dimension(width), dimension(height))
        })
    };
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageCanvas_setDimensions(canvas: *mut VisageCanvas, width: i32, height: i32) {
    unsafe { with_mut(canvas, (), |c| c.set_dimensions(dimension(width), dimension(height))) };
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageCanvas_setWindowless(canvas: *mut VisageCanvas, width: i32, height: i32) {
    unsafe { with_mut(canvas, (), |c| c.set_windowless(dimension(width), dimension(height))) };
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageCanvas_removeFromWindow(canvas: *mut VisageCanvas) {
    unsafe { with_mut(canvas, (), Canvas::remove_from_window) };
}

// ── scale & frame ─────────────────────────────────────────────────────────

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageCanvas_setDpiScale(canvas: *mut VisageCanvas, scale: f32) {
    unsafe { with_mut(canvas, (), |c| c.set_dpi_scale(scale)) };
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageCanvas_dpiScale(canvas: *mut VisageCanvas) -> f32 {
    unsafe { with_ref(canvas.cast_const(), 0.0, Canvas::dpi_scale) }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageCanvas_setNativePixelScale(canvas: *mut VisageCanvas) {
    unsafe { with_mut(canvas, (), Canvas::set_native_pixel_scale) };
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageCanvas_setLogicalPixelScale(canvas: *mut VisageCanvas) {
    unsafe { with_mut(canvas, (), Canvas::set_logical_pixel_scale) };
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageCanvas_clearDrawnShapes(canvas: *mut VisageCanvas) {
    unsafe { with_mut(canvas, (), Canvas::clear_drawn_shapes) };
}

/// Failures are logged; the pending shapes stay queued.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageCanvas_submit(canvas: *mut VisageCanvas, submit_pass: i32) {
    unsafe {
        with_mut(canvas, (), |c| {
            if let Err(err) = c.submit(submit_pass) {
                log::warn!("VisageCanvas_submit: {err}");
            }
        })
    };
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageCanvas_updateTime(canvas: *mut VisageCanvas, time: f64) {
    unsafe { with_mut(canvas, (), |c| c.update_time(time)) };
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageCanvas_time(canvas: *mut VisageCanvas) -> f64 {
    unsafe { with_ref(canvas.cast_const(), 0.0, Canvas::time) }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageCanvas_deltaTime(canvas: *mut VisageCanvas) -> f64 {
    unsafe { with_ref(canvas.cast_const(), 0.0, Canvas::delta_time) }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageCanvas_frameCount(canvas: *mut VisageCanvas) -> i32 {
    unsafe { with_ref(canvas.cast_const(), 0, |c| i32::try_from(c.frame_count()).unwrap_or(i32::MAX)) }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageCanvas_requestScreenshot(canvas: *mut VisageCanvas) {
    unsafe { with_mut(canvas, (), Canvas::request_screenshot) };
}

/// RGBA8 pixels of the last captured frame, or null when nothing was captured.
/// Valid until the next captured submit or the canvas is destroyed.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageCanvas_screenshot(
    canvas: *mut VisageCanvas,
    width: *mut i32,
    height: *mut i32,
) -> *const u8 {
    let (pixels, w, h) = unsafe {
        with_ref(canvas.cast_const(), (ptr::null(), 0, 0), |c| match c.screenshot() {
            Some(shot) => (
                shot.pixels.as_ptr(),
                c_count(shot.width as usize),
                c_count(shot.height as usize),
            ),
            None => (ptr::null(), 0, 0),
        })
    };
    unsafe {
        write_out(width, w);
        write_out(height, h);
    }
    pixels
}

// ── paint state ───────────────────────────────────────────────────────────

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageCanvas_setColor(canvas: *mut VisageCanvas, color: VisageColor) {
    unsafe { with_mut(canvas, (), |c| c.set_color(color.into())) };
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageCanvas_setBrush(canvas: *mut VisageCanvas, brush: *const VisageBrush) {
    let Some(brush) = (unsafe { brush.as_ref() }) else {
        return;
    };
    unsafe { with_mut(canvas, (), |c| c.set_brush(brush)) };
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageCanvas_saveState(canvas: *mut VisageCanvas) {
    unsafe { with_mut(canvas, (), Canvas::save_state) };
}

/// Restoring with nothing saved is logged and ignored.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageCanvas_restoreState(canvas: *mut VisageCanvas) {
    unsafe {
        with_mut(canvas, (), |c| {
            if let Err(err) = c.restore_state() {
                log::warn!("VisageCanvas_restoreState: {err}");
            }
        })
    };
}

/// Moves the drawing origin by `(x, y)`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageCanvas_setPosition(canvas: *mut VisageCanvas, x: f32, y: f32) {
    unsafe { with_mut(canvas, (), |c| c.set_position(x, y)) };
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageCanvas_setClampBounds(
    canvas: *mut VisageCanvas,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
) {
    unsafe { with_mut(canvas, (), |c| c.set_clamp_bounds(x, y, width, height)) };
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageCanvas_trimClampBounds(
    canvas: *mut VisageCanvas,
    x: i32,
    y: i32,
    width: i32,
    height: i32,
) {
    unsafe {
        with_mut(canvas, (), |c| {
            c.trim_clamp_bounds(x as f32, y as f32, width as f32, height as f32)
        })
    };
}

// ── shapes ────────────────────────────────────────────────────────────────

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageCanvas_fill(canvas: *mut VisageCanvas, x: f32, y: f32, width: f32, height: f32) {
    unsafe { with_mut(canvas, (), |c| c.fill(x, y, width, height)) };
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageCanvas_circle(canvas: *mut VisageCanvas, x: f32, y: f32, width: f32) {
    unsafe { with_mut(canvas, (), |c| c.circle(x, y, width)) };
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageCanvas_fadeCircle(
    canvas: *mut VisageCanvas,
    x: f32,
    y: f32,
    width: f32,
    pixel_width: f32,
) {
    unsafe { with_mut(canvas, (), |c| c.fade_circle(x, y, width, pixel_width)) };
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageCanvas_ring(canvas: *mut VisageCanvas, x: f32, y: f32, width: f32, thickness: f32) {
    unsafe { with_mut(canvas, (), |c| c.ring(x, y, width, thickness)) };
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageCanvas_squircle(canvas: *mut VisageCanvas, x: f32, y: f32, width: f32, power: f32) {
    unsafe { with_mut(canvas, (), |c| c.squircle(x, y, width, power)) };
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageCanvas_squircleBorder(
    canvas: *mut VisageCanvas,
    x: f32,
    y: f32,
    width: f32,
    power: f32,
    thickness: f32,
) {
    unsafe { with_mut(canvas, (), |c| c.squircle_border(x, y, width, power, thickness)) };
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageCanvas_superEllipse(
    canvas: *mut VisageCanvas,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    power: f32,
) {
    unsafe { with_mut(canvas, (), |c| c.super_ellipse(x, y, width, height, power)) };
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageCanvas_roundedArc(
    canvas: *mut VisageCanvas,
    x: f32,
    y: f32,
    width: f32,
    thickness: f32,
    center_radians: f32,
    radians: f32,
) {
    unsafe { with_mut(canvas, (), |c| c.rounded_arc(x, y, width, thickness, center_radians, radians)) };
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageCanvas_flatArc(
    canvas: *mut VisageCanvas,
    x: f32,
    y: f32,
    width: f32,
    thickness: f32,
    center_radians: f32,
    radians: f32,
) {
    unsafe { with_mut(canvas, (), |c| c.flat_arc(x, y, width, thickness, center_radians, radians)) };
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageCanvas_arc(
    canvas: *mut VisageCanvas,
    x: f32,
    y: f32,
    width: f32,
    thickness: f32,
    center_radians: f32,
    radians: f32,
    rounded: bool,
) {
    unsafe { with_mut(canvas, (), |c| c.arc(x, y, width, thickness, center_radians, radians, rounded)) };
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageCanvas_roundedArcShadow(
    canvas: *mut VisageCanvas,
    x: f32,
    y: f32,
    width: f32,
    thickness: f32,
    center_radians: f32,
    radians: f32,
    shadow_width: f32,
) {
    unsafe {
        with_mut(canvas, (), |c| {
            c.rounded_arc_shadow(x, y, width, thickness, center_radians, radians, shadow_width)
        })
    };
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageCanvas_flatArcShadow(
    canvas: *mut VisageCanvas,
    x: f32,
    y: f32,
    width: f32,
    thickness: f32,
    center_radians: f32,
    radians: f32,
    shadow_width: f32,
) {
    unsafe {
        with_mut(canvas, (), |c| {
            c.flat_arc_shadow(x, y, width, thickness, center_radians, radians, shadow_width)
        })
    };
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageCanvas_segment(
    canvas: *mut VisageCanvas,
    a_x: f32,
    a_y: f32,
    b_x: f32,
    b_y: f32,
    thickness: f32,
    rounded: bool,
) {
    unsafe { with_mut(canvas, (), |c| c.segment(a_x, a_y, b_x, b_y, thickness, rounded)) };
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageCanvas_quadratic(
    canvas: *mut VisageCanvas,
    a_x: f32,
    a_y: f32,
    b_x: f32,
    b_y: f32,
    c_x: f32,
    c_y: f32,
    thickness: f32,
) {
    unsafe { with_mut(canvas, (), |c| c.quadratic(a_x, a_y, b_x, b_y, c_x, c_y, thickness)) };
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageCanvas_rectangle(canvas: *mut VisageCanvas, x: f32, y: f32, width: f32, height: f32) {
    unsafe { with_mut(canvas, (), |c| c.rectangle(x, y, width, height)) };
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageCanvas_rectangleBorder(
    canvas: *mut VisageCanvas,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    thickness: f32,
) {
    unsafe { with_mut(canvas, (), |c| c.rectangle_border(x, y, width, height, thickness)) };
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageCanvas_roundedRectangle(
    canvas: *mut VisageCanvas,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    rounding: f32,
) {
    unsafe { with_mut(canvas, (), |c| c.rounded_rectangle(x, y, width, height, rounding)) };
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageCanvas_diamond(canvas: *mut VisageCanvas, x: f32, y: f32, width: f32, rounding: f32) {
    unsafe { with_mut(canvas, (), |c| c.diamond(x, y, width, rounding)) };
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageCanvas_leftRoundedRectangle(
    canvas: *mut VisageCanvas,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    rounding: f32,
) {
    unsafe { with_mut(canvas, (), |c| c.left_rounded_rectangle(x, y, width, height, rounding)) };
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageCanvas_rightRoundedRectangle(
    canvas: *mut VisageCanvas,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    rounding: f32,
) {
    unsafe { with_mut(canvas, (), |c| c.right_rounded_rectangle(x, y, width, height, rounding)) };
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageCanvas_topRoundedRectangle(
    canvas: *mut VisageCanvas,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    rounding: f32,
) {
    unsafe { with_mut(canvas, (), |c| c.top_rounded_rectangle(x, y, width, height, rounding)) };
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageCanvas_bottomRoundedRectangle(
    canvas: *mut VisageCanvas,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    rounding: f32,
) {
    unsafe { with_mut(canvas, (), |c| c.bottom_rounded_rectangle(x, y, width, height, rounding)) };
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageCanvas_rectangleShadow(
    canvas: *mut VisageCanvas,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    blur_radius: f32,
) {
    unsafe { with_mut(canvas, (), |c| c.rectangle_shadow(x, y, width, height, blur_radius)) };
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageCanvas_roundedRectangleShadow(
    canvas: *mut VisageCanvas,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    rounding: f32,
    blur_radius: f32,
) {
    unsafe {
        with_mut(canvas, (), |c| {
            c.rounded_rectangle_shadow(x, y, width, height, rounding, blur_radius)
        })
    };
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageCanvas_roundedRectangleBorder(
    canvas: *mut VisageCanvas,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    rounding: f32,
    thickness: f32,
) {
    unsafe {
        with_mut(canvas, (), |c| {
            c.rounded_rectangle_border(x, y, width, height, rounding, thickness)
        })
    };
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageCanvas_triangle(
    canvas: *mut VisageCanvas,
    a_x: f32,
    a_y: f32,
    b_x: f32,
    b_y: f32,
    c_x: f32,
    c_y: f32,
) {
    unsafe { with_mut(canvas, (), |c| c.triangle(a_x, a_y, b_x, b_y, c_x, c_y)) };
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageCanvas_triangleBorder(
    canvas: *mut VisageCanvas,
    a_x: f32,
    a_y: f32,
    b_x: f32,
    b_y: f32,
    c_x: f32,
    c_y: f32,
    thickness: f32,
) {
    unsafe { with_mut(canvas, (), |c| c.triangle_border(a_x, a_y, b_x, b_y, c_x, c_y, thickness)) };
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageCanvas_roundedTriangleBorder(
    canvas: *mut VisageCanvas,
    a_x: f32,
    a_y: f32,
    b_x: f32,
    b_y: f32,
    c_x: f32,
    c_y: f32,
    rounding: f32,
    thickness: f32,
) {
    unsafe {
        with_mut(canvas, (), |c| {
            c.rounded_triangle_border(a_x, a_y, b_x, b_y, c_x, c_y, rounding, thickness)
        })
    };
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageCanvas_roundedTriangle(
    canvas: *mut VisageCanvas,
    a_x: f32,
    a_y: f32,
    b_x: f32,
    b_y: f32,
    c_x: f32,
    c_y: f32,
    rounding: f32,
) {
    unsafe { with_mut(canvas, (), |c| c.rounded_triangle(a_x, a_y, b_x, b_y, c_x, c_y, rounding)) };
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageCanvas_triangleLeft(
    canvas: *mut VisageCanvas,
    triangle_x: f32,
    triangle_y: f32,
    triangle_width: f32,
) {
    unsafe { with_mut(canvas, (), |c| c.triangle_left(triangle_x, triangle_y, triangle_width)) };
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageCanvas_triangleRight(
    canvas: *mut VisageCanvas,
    triangle_x: f32,
    triangle_y: f32,
    triangle_width: f32,
) {
    unsafe { with_mut(canvas, (), |c| c.triangle_right(triangle_x, triangle_y, triangle_width)) };
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageCanvas_triangleUp(
    canvas: *mut VisageCanvas,
    triangle_x: f32,
    triangle_y: f32,
    triangle_width: f32,
) {
    unsafe { with_mut(canvas, (), |c| c.triangle_up(triangle_x, triangle_y, triangle_width)) };
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageCanvas_triangleDown(
    canvas: *mut VisageCanvas,
    triangle_x: f32,
    triangle_y: f32,
    triangle_width: f32,
) {
    unsafe { with_mut(canvas, (), |c| c.triangle_down(triangle_x, triangle_y, triangle_width)) };
}

// ── lines & text ──────────────────────────────────────────────────────────

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageCanvas_line(
    canvas: *mut VisageCanvas,
    line: *mut VisageLine,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    line_width: f32,
) {
    let Some(line) = (unsafe { line.cast_const().as_ref() }) else {
        return;
    };
    unsafe { with_mut(canvas, (), |c| c.line(line, x, y, width, height, line_width)) };
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageCanvas_lineFill(
    canvas: *mut VisageCanvas,
    line: *mut VisageLine,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    fill_position: f32,
) {
    let Some(line) = (unsafe { line.cast_const().as_ref() }) else {
        return;
    };
    unsafe { with_mut(canvas, (), |c| c.line_fill(line, x, y, width, height, fill_position)) };
}

/// `direction` is 0 left, 1 up, 2 right, 3 down. Other values draw nothing.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn VisageCanvas_text(
    canvas: *mut VisageCanvas,
    text: *mut VisageText,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    direction: i32,
) {
    let direction = match Direction::try_from(direction) {
        Ok(d) => d,
        Err(err) => {
            log::warn!("VisageCanvas_text: {err}");
            return;
        }
    };
    let Some(text) = (unsafe { text.cast_const().as_ref() }) else {
        return;
    };
    unsafe { with_mut(canvas, (), |c| c.text(text, x, y, width, height, direction)) };
}

#[cfg(test)]
mod tests {
    use visage_graphics::paint::Color;
    use visage_graphics::scene::DrawCmd;

    use super::*;
    use crate::line::{VisageLine_delete, VisageLine_new};
    use crate::text::{VisageText_delete, VisageText_new};

    #[test]
    fn windowless_frame_round_trip() {
        unsafe {
            let canvas = VisageCanvas_new();
            VisageCanvas_setWindowless(canvas, 800, 600);

            VisageCanvas_setColor(canvas, Color::from_argb(0xff000066).into());
            VisageCanvas_fill(canvas, 0.0, 0.0, 800.0, 600.0);
            VisageCanvas_setColor(canvas, Color::from_argb(0xff00ffff).into());
            VisageCanvas_circle(canvas, 340.0, 240.0, 120.0);

            let pending = (*canvas).pending();
            assert_eq!(pending.len(), 2);
            let DrawCmd::Circle(circle) = &pending[1].cmd else {
                panic!("expected a circle");
            };
            assert_eq!((circle.center.x, circle.center.y, circle.radius), (400.0, 300.0, 60.0));

            let before = VisageCanvas_frameCount(canvas);
            VisageCanvas_submit(canvas, 0);
            assert!((*canvas).pending().is_empty());
            assert_eq!(VisageCanvas_frameCount(canvas), before + 1);

            VisageCanvas_destroy(canvas);
        }
    }

    #[test]
    fn unbound_submit_keeps_shapes() {
        unsafe {
            let canvas = VisageCanvas_new();
            VisageCanvas_rectangle(canvas, 0.0, 0.0, 10.0, 10.0);
            VisageCanvas_submit(canvas, 0);
            assert_eq!((*canvas).pending().len(), 1);
            assert_eq!(VisageCanvas_frameCount(canvas), 0);

            VisageCanvas_pairToWindow(canvas, ptr::null_mut(), 100, 100);
            assert!(!(*canvas).target().is_bound());
            VisageCanvas_destroy(canvas);
        }
    }

    #[test]
    fn restore_on_empty_stack_is_ignored() {
        unsafe {
            let canvas = VisageCanvas_new();
            VisageCanvas_setPosition(canvas, 5.0, 5.0);
            VisageCanvas_restoreState(canvas);
            assert_eq!((*canvas).position().x, 5.0);

            VisageCanvas_saveState(canvas);
            VisageCanvas_setPosition(canvas, 5.0, 0.0);
            VisageCanvas_restoreState(canvas);
            assert_eq!((*canvas).position().x, 5.0);
            VisageCanvas_destroy(canvas);
        }
    }

    #[test]
    fn bad_direction_and_null_arguments_draw_nothing() {
        unsafe {
            let canvas = VisageCanvas_new();
            let text = VisageText_new();
            VisageCanvas_text(canvas, text, 0.0, 0.0, 10.0, 10.0, 9);
            VisageCanvas_line(canvas, ptr::null_mut(), 0.0, 0.0, 10.0, 10.0, 1.0);
            VisageCanvas_text(canvas, ptr::null_mut(), 0.0, 0.0, 10.0, 10.0, 2);
            assert!((*canvas).pending().is_empty());

            let line = VisageLine_new(3);
            VisageCanvas_line(canvas, line, 0.0, 0.0, 10.0, 10.0, 1.0);
            assert_eq!((*canvas).pending().len(), 1);

            VisageLine_delete(line);
            VisageText_delete(text);
            VisageCanvas_destroy(canvas);
        }
    }

    #[test]
    fn screenshot_after_requested_submit() {
        unsafe {
            let canvas = VisageCanvas_new();
            let (mut w, mut h) = (-1, -1);
            assert!(VisageCanvas_screenshot(canvas, &mut w, &mut h).is_null());
            assert_eq!((w, h), (0, 0));

            VisageCanvas_setWindowless(canvas, 4, 2);
            VisageCanvas_requestScreenshot(canvas);
            VisageCanvas_submit(canvas, 0);
            assert!(!VisageCanvas_screenshot(canvas, &mut w, &mut h).is_null());
            assert_eq!((w, h), (4, 2));
            VisageCanvas_destroy(canvas);
        }
    }

    #[test]
    fn time_and_scale() {
        unsafe {
            let canvas = VisageCanvas_new();
            VisageCanvas_updateTime(canvas, 1.0);
            VisageCanvas_updateTime(canvas, 1.5);
            assert_eq!(VisageCanvas_time(canvas), 1.5);
            assert_eq!(VisageCanvas_deltaTime(canvas), 0.5);

            VisageCanvas_setDpiScale(canvas, 2.0);
            assert_eq!(VisageCanvas_dpiScale(canvas), 2.0);
            VisageCanvas_destroy(canvas);
        }
    }
}
