pub const WHEEL_TRIGGER_DELTA: f32 = 100.0;
pub const WHEEL_TRIGGER_INTERVAL_MS: f64 = 1000.0;
pub const JUMP_COOLDOWN_MS: u32 = 1200;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JumpDirection {
    Up,
    Down,
}

impl JumpDirection {
    pub fn from_delta(delta_y: f32) -> Self {
        if delta_y > 0.0 {
            JumpDirection::Down
        } else {
            JumpDirection::Up
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WheelDecision {
    /// Delta recorded, nothing else to do this event.
    Accumulate,
    /// A jump would have triggered but the cool-down window is still open.
    Suppressed,
    Trigger { direction: JumpDirection },
}

/// Converts a continuous wheel stream into discrete jump triggers.
///
/// A trigger arms when the accumulated delta passes `WHEEL_TRIGGER_DELTA`
/// or more than `WHEEL_TRIGGER_INTERVAL_MS` has passed since the last
/// trigger, whichever comes first. Timing is injected through `now_ms` so
/// the machine runs the same under a test clock as under `Date::now()`.
#[derive(Clone, Copy, Debug)]
pub struct WheelPager {
    accumulator: f32,
    last_trigger_ms: f64,
    cooling: bool,
}

impl WheelPager {
    pub fn new() -> Self {
        Self {
            accumulator: 0.0,
            last_trigger_ms: 0.0,
            cooling: false,
        }
    }

    pub fn on_wheel(&mut self, delta_y: f32, now_ms: f64) -> WheelDecision {
        self.accumulator += delta_y;
        let should_trigger = self.accumulator.abs() > WHEEL_TRIGGER_DELTA
            || now_ms - self.last_trigger_ms > WHEEL_TRIGGER_INTERVAL_MS;
        if !should_trigger {
            return WheelDecision::Accumulate;
        }
        // Deltas landing inside the cool-down keep accumulating; they are
        // consumed by the next trigger, not dropped.
        if self.cooling {
            return WheelDecision::Suppressed;
        }
        self.last_trigger_ms = now_ms;
        self.accumulator = 0.0;
        WheelDecision::Trigger {
            direction: JumpDirection::from_delta(delta_y),
        }
    }

    /// Engaged only once a jump actually starts. A trigger that resolves
    /// to no movement (already at the first or last section) leaves the
    /// pager ready for the next gesture.
    pub fn begin_jump(&mut self) {
        self.cooling = true;
    }

    pub fn end_cooldown(&mut self) {
        self.cooling = false;
    }

    pub fn is_cooling(&self) -> bool {
        self.cooling
    }
}

impl Default for WheelPager {
    fn default() -> Self {
        Self::new()
    }
}
