//! What the player sees and hears for each game event.
//!
//! Everything here is a pure function of the event and the game it came
//! from. The scheduler applies the resulting [`Cue`]s in order.

use heapless::Vec;

use crate::config::Timing;
use crate::entity::Rect;
use crate::game::{Event, Game, GameMode};

/// Full-scale PWM level for one LED channel.
pub const LED_MAX: u16 = 4095;
const LED_HALF: u16 = 2048;

/// RGB LED duty levels, `0..=LED_MAX` per channel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RgbLevels {
    pub red: u16,
    pub green: u16,
    pub blue: u16,
}

impl RgbLevels {
    pub const OFF: Self = Self::new(0, 0, 0);
    pub const RED: Self = Self::new(LED_MAX, 0, 0);
    pub const GREEN: Self = Self::new(0, LED_MAX, 0);
    pub const BLUE: Self = Self::new(0, 0, LED_MAX);
    /// Reset in progress.
    pub const PINK: Self = Self::new(LED_MAX, 0, LED_HALF);
    pub const YELLOW: Self = Self::new(LED_HALF, LED_MAX, 0);

    pub const fn new(red: u16, green: u16, blue: u16) -> Self {
        Self { red, green, blue }
    }
}

/// A buzzer request. Playback blocks the loop for `duration_ms`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tone {
    pub frequency_hz: u32,
    pub duration_ms: u32,
}

impl Tone {
    pub const WIN: Self = Self {
        frequency_hz: 1000,
        duration_ms: 500,
    };
    pub const LOSS: Self = Self {
        frequency_hz: 500,
        duration_ms: 500,
    };
}

/// Full-screen status messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Banner {
    PressStart,
    Restarting,
    Started,
    Stopped,
    Paused,
    Won,
    RestartPrompt,
    Lost,
}

impl Banner {
    /// Text lines and their top-left positions in playfield pixels.
    pub const fn lines(self) -> &'static [(&'static str, i32, i32)] {
        match self {
            Banner::PressStart => &[("Press A", 10, 28), ("to start", 10, 40)],
            Banner::Restarting => &[("Restarting...", 20, 28)],
            Banner::Started => &[("Game started!", 10, 28)],
            Banner::Stopped => &[("Game off!", 10, 28)],
            Banner::Paused => &[("Paused", 20, 28)],
            Banner::Won => &[("You won!", 20, 28)],
            Banner::RestartPrompt => &[("Press", 20, 28), ("A or B to", 20, 40), ("restart", 20, 52)],
            Banner::Lost => &[("Game over", 30, 28), ("Waiting", 30, 40), ("restart", 30, 50)],
        }
    }
}

/// Live playfield contents while running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hud {
    pub player: Rect,
    pub enemy: Rect,
    pub score: u32,
    pub speed: i32,
}

impl Hud {
    pub fn of(game: &Game) -> Self {
        let geometry = &game.config().geometry;
        Self {
            player: game.player().rect(geometry),
            enemy: game.enemy().rect(geometry),
            score: game.score(),
            speed: game.enemy().speed,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Banner(Banner),
    Playfield(Hud),
}

/// One output bundle. Every part is optional; `None` leaves that output as is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cue {
    pub led: Option<RgbLevels>,
    pub screen: Option<Screen>,
    pub tone: Option<Tone>,
    /// Keep this cue on screen before continuing, in milliseconds.
    pub hold_ms: u32,
}

impl Cue {
    const fn banner(banner: Banner) -> Self {
        Self {
            led: None,
            screen: Some(Screen::Banner(banner)),
            tone: None,
            hold_ms: 0,
        }
    }

    const fn with_led(mut self, led: RgbLevels) -> Self {
        self.led = Some(led);
        self
    }

    const fn with_tone(mut self, tone: Tone) -> Self {
        self.tone = Some(tone);
        self
    }

    const fn held(mut self, hold_ms: u32) -> Self {
        self.hold_ms = hold_ms;
        self
    }
}

pub type Cues = Vec<Cue, 2>;

/// Boot screen: LED dark, start prompt.
pub fn boot() -> Cue {
    Cue::banner(Banner::PressStart).with_led(RgbLevels::OFF)
}

/// Cues for `event`, in playback order.
pub fn for_event(event: Event, timing: &Timing) -> Cues {
    let started = Cue::banner(Banner::Started).with_led(RgbLevels::BLUE);
    let (first, then) = match event {
        Event::Restarted => (
            Some(
                Cue::banner(Banner::Restarting)
                    .with_led(RgbLevels::PINK)
                    .held(timing.restart_banner_ms),
            ),
            Some(started),
        ),
        Event::Started => (Some(started), None),
        Event::Stopped => (Some(Cue::banner(Banner::Stopped).with_led(RgbLevels::OFF)), None),
        Event::Paused => (Some(Cue::banner(Banner::Paused).with_led(RgbLevels::YELLOW)), None),
        Event::Resumed => (
            Some(Cue {
                led: Some(RgbLevels::BLUE),
                ..Cue::default()
            }),
            None,
        ),
        Event::Scored => (None, None),
        Event::Won => (
            Some(
                Cue::banner(Banner::Won)
                    .with_led(RgbLevels::GREEN)
                    .with_tone(Tone::WIN)
                    .held(timing.win_banner_ms),
            ),
            Some(Cue::banner(Banner::RestartPrompt)),
        ),
        Event::Lost => (
            Some(
                Cue::banner(Banner::Lost)
                    .with_led(RgbLevels::RED)
                    .with_tone(Tone::LOSS),
            ),
            None,
        ),
    };
    first.into_iter().chain(then).collect()
}

/// Per-frame playfield while running, `None` otherwise.
pub fn frame(game: &Game) -> Option<Cue> {
    (game.mode() == GameMode::Running).then(|| Cue {
        screen: Some(Screen::Playfield(Hud::of(game))),
        ..Cue::default()
    })
}
