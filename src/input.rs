//! Button edge detection and joystick deadzone handling.
//!
//! Buttons are wired active-low with pull-ups, so the board layer reports a
//! button as pressed while its pin reads low. An edge fires once per press:
//! holding a button never repeats, and a new press within the debounce
//! window of the last accepted one is dropped.

use crate::config::Calibration;

/// Instantaneous button state, `true` while held.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonLevels {
    /// Button B.
    pub reset: bool,
    /// Button A.
    pub start: bool,
    /// Joystick click.
    pub pause: bool,
}

impl ButtonLevels {
    pub const fn any(&self) -> bool {
        self.reset || self.start || self.pause
    }
}

/// Buttons that went from released to pressed on this tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonEdges {
    pub reset: bool,
    pub start: bool,
    pub pause: bool,
}

/// Rising-edge latch for one button with a cooldown after each accepted press.
#[derive(Debug, Clone, Copy, Default)]
struct EdgeLatch {
    held: bool,
    ready_at: u64,
}

impl EdgeLatch {
    fn update(&mut self, pressed: bool, now_ms: u64, cooldown_ms: u64) -> bool {
        let edge = pressed && !self.held && now_ms >= self.ready_at;
        if edge {
            self.ready_at = now_ms.saturating_add(cooldown_ms);
        }
        self.held = pressed;
        edge
    }
}

/// One analog axis after calibration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AxisReading {
    pub raw: u16,
    /// Displacement to apply this tick; `0` inside the deadzone.
    pub delta: i32,
}

impl AxisReading {
    pub fn new(raw: u16, center: u16, calibration: &Calibration) -> Self {
        let offset = raw as i32 - center as i32;
        let delta = if offset.unsigned_abs() > calibration.deadzone as u32 {
            offset * calibration.move_scale / calibration.move_divisor
        } else {
            0
        };
        Self { raw, delta }
    }
}

/// Everything the state machine consumes on one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    pub edges: ButtonEdges,
    /// Absent when the axes were not sampled (the game was not Running).
    pub axes: Option<(AxisReading, AxisReading)>,
}

impl InputSnapshot {
    /// Player displacement for this tick, with the X inversion applied.
    pub fn movement(&self, calibration: &Calibration) -> (i32, i32) {
        match self.axes {
            Some((x, y)) if calibration.invert_x => (-x.delta, y.delta),
            Some((x, y)) => (x.delta, y.delta),
            None => (0, 0),
        }
    }
}

/// Turns raw pin levels and ADC samples into [`InputSnapshot`]s.
#[derive(Debug, Clone)]
pub struct InputSampler {
    calibration: Calibration,
    debounce_ms: u64,
    reset: EdgeLatch,
    start: EdgeLatch,
    pause: EdgeLatch,
}

impl InputSampler {
    pub fn new(calibration: Calibration, debounce_ms: u64) -> Self {
        Self {
            calibration,
            debounce_ms,
            reset: EdgeLatch::default(),
            start: EdgeLatch::default(),
            pause: EdgeLatch::default(),
        }
    }

    /// Must be called every tick, even when no action is expected, so
    /// releases are observed.
    pub fn buttons(&mut self, levels: ButtonLevels, now_ms: u64) -> ButtonEdges {
        let cooldown = self.debounce_ms;
        ButtonEdges {
            reset: self.reset.update(levels.reset, now_ms, cooldown),
            start: self.start.update(levels.start, now_ms, cooldown),
            pause: self.pause.update(levels.pause, now_ms, cooldown),
        }
    }

    pub fn axes(&self, raw_x: u16, raw_y: u16) -> (AxisReading, AxisReading) {
        (
            AxisReading::new(raw_x, self.calibration.center_x, &self.calibration),
            AxisReading::new(raw_y, self.calibration.center_y, &self.calibration),
        )
    }

    pub fn sample(
        &mut self,
        levels: ButtonLevels,
        raw_axes: Option<(u16, u16)>,
        now_ms: u64,
    ) -> InputSnapshot {
        InputSnapshot {
            edges: self.buttons(levels, now_ms),
            axes: raw_axes.map(|(x, y)| self.axes(x, y)),
        }
    }
}
