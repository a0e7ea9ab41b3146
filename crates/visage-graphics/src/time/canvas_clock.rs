/// Timing snapshot handed to backends.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameTime {
    /// Caller-supplied time, in seconds.
    pub time: f64,

    /// Difference between the last two `update` times, in seconds.
    pub dt: f64,

    /// Number of frames submitted so far.
    pub frame_index: u64,
}

/// Per-canvas clock.
///
/// Time is driven by the host (`update`), not sampled from the system clock,
/// so animations stay in step with whatever timeline the caller renders.
/// The frame index only moves when a frame is actually submitted.
#[derive(Debug, Clone, Default)]
pub struct CanvasClock {
    time: f64,
    dt: f64,
    frame_index: u64,
}

impl CanvasClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the current time and derives the delta from the previous one.
    pub fn update(&mut self, time: f64) {
        self.dt = time - self.time;
        self.time = time;
    }

    /// Counts one submitted frame and returns the new count.
    pub fn advance_frame(&mut self) -> u64 {
        self.frame_index = self.frame_index.wrapping_add(1);
        self.frame_index
    }

    #[inline]
    pub fn time(&self) -> f64 {
        self.time
    }

    #[inline]
    pub fn delta_time(&self) -> f64 {
        self.dt
    }

    #[inline]
    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    #[inline]
    pub fn snapshot(&self) -> FrameTime {
        FrameTime {
            time: self.time,
            dt: self.dt,
            frame_index: self.frame_index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_is_difference_of_updates() {
        let mut clock = CanvasClock::new();
        clock.update(1.5);
        assert_eq!(clock.time(), 1.5);
        assert_eq!(clock.delta_time(), 1.5);

        clock.update(1.75);
        assert_eq!(clock.delta_time(), 0.25);

        // rewinding gives a negative delta rather than clamping
        clock.update(1.0);
        assert_eq!(clock.delta_time(), -0.75);
    }

    #[test]
    fn frames_advance_independently_of_time() {
        let mut clock = CanvasClock::new();
        assert_eq!(clock.advance_frame(), 1);
        assert_eq!(clock.advance_frame(), 2);
        clock.update(3.0);
        assert_eq!(
            clock.snapshot(),
            FrameTime { time: 3.0, dt: 3.0, frame_index: 2 }
        );
    }
}
