//! Tunable constants, grouped by concern.
//!
//! `Default` carries the values measured on the original board (128×64
//! panel area, analog stick on the 12-bit ADC). Anything hardware specific
//! lives in [`Calibration`] so a different stick can be re-centered without
//! touching game code.

/// Playfield and sprite sizes, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub screen_w: i32,
    pub screen_h: i32,
    pub player_size: i32,
    pub enemy_size: i32,
}

impl Default for Geometry {
    fn default() -> Self {
        Self {
            screen_w: 128,
            screen_h: 64,
            player_size: 8,
            enemy_size: 4,
        }
    }
}

/// Joystick calibration.
///
/// A sample moves the player only when `|raw - center| > deadzone`; the
/// displacement is then `(raw - center) * move_scale / move_divisor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Calibration {
    /// Resting X reading of the stick.
    pub center_x: u16,
    /// Resting Y reading of the stick.
    pub center_y: u16,
    /// Noise band around the center that counts as "no input".
    pub deadzone: u16,
    pub move_scale: i32,
    pub move_divisor: i32,
    /// Pushing the stick towards larger X readings moves the player left.
    /// The board has always shipped with this wiring quirk.
    pub invert_x: bool,
}

impl Default for Calibration {
    fn default() -> Self {
        Self {
            center_x: 1929,
            center_y: 2019,
            deadzone: 100,
            move_scale: 5,
            move_divisor: 2048,
            invert_x: true,
        }
    }
}

/// Loop pacing and feedback hold times, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    /// Sleep after a Running tick.
    pub frame_ms: u64,
    /// Sleep after an Idle or Paused tick.
    pub idle_ms: u64,
    /// Sleep after a Won or Lost tick.
    pub restart_poll_ms: u64,
    /// Minimum gap between two accepted presses of the same button.
    pub debounce_ms: u64,
    /// How long the "restarting" banner stays up.
    pub restart_banner_ms: u32,
    /// How long the win banner stays up before the restart prompt.
    pub win_banner_ms: u32,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            frame_ms: 20,
            idle_ms: 200,
            restart_poll_ms: 100,
            debounce_ms: 30,
            restart_banner_ms: 1000,
            win_banner_ms: 2000,
        }
    }
}

/// Scoring and difficulty limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    pub win_score: u32,
    pub max_speed: i32,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            win_score: 10,
            max_speed: 10,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    pub geometry: Geometry,
    pub calibration: Calibration,
    pub timing: Timing,
    pub rules: Rules,
}
