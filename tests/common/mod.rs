#![allow(dead_code)]

use std::convert::Infallible;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use joystick_dodge::config::Calibration;
use joystick_dodge::entity::Player;
use joystick_dodge::feedback::{RgbLevels, Tone};
use joystick_dodge::input::{ButtonEdges, ButtonLevels, InputSampler, InputSnapshot};
use joystick_dodge::{Board, Event, Game};

pub const W: usize = 128;
pub const H: usize = 64;

/// In-memory stand-in for the board: buttons and stick are plain fields,
/// outputs are recorded, sleeping advances a fake clock.
pub struct FakeBoard {
    pub levels: ButtonLevels,
    pub axes: (u16, u16),
    pub axis_reads: usize,
    pub led: Option<RgbLevels>,
    pub led_history: Vec<RgbLevels>,
    pub tones: Vec<Tone>,
    pub sleeps: Vec<u64>,
    pub now: u64,
}

impl FakeBoard {
    pub fn new() -> Self {
        let c = Calibration::default();
        Self {
            levels: ButtonLevels::default(),
            axes: (c.center_x, c.center_y),
            axis_reads: 0,
            led: None,
            led_history: Vec::new(),
            tones: Vec::new(),
            sleeps: Vec::new(),
            now: 0,
        }
    }
}

impl Board for FakeBoard {
    fn button_levels(&mut self) -> ButtonLevels {
        self.levels
    }

    async fn read_axes(&mut self) -> (u16, u16) {
        self.axis_reads += 1;
        self.axes
    }

    fn set_led(&mut self, levels: RgbLevels) {
        self.led = Some(levels);
        self.led_history.push(levels);
    }

    async fn play_tone(&mut self, tone: Tone) {
        self.tones.push(tone);
        self.now += tone.duration_ms as u64;
    }

    async fn sleep_ms(&mut self, ms: u64) {
        self.sleeps.push(ms);
        self.now += ms;
    }

    fn now_ms(&self) -> u64 {
        self.now
    }
}

pub struct Canvas {
    pixels: Vec<Rgb565>,
}

impl Canvas {
    pub fn new() -> Self {
        Self {
            pixels: vec![Rgb565::BLACK; W * H],
        }
    }

    pub fn at(&self, x: usize, y: usize) -> Rgb565 {
        self.pixels[y * W + x]
    }

    pub fn count(&self, color: Rgb565) -> usize {
        self.pixels.iter().filter(|&&c| c == color).count()
    }
}

impl OriginDimensions for Canvas {
    fn size(&self) -> Size {
        Size::new(W as u32, H as u32)
    }
}

impl DrawTarget for Canvas {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(p, color) in pixels {
            if (0..W as i32).contains(&p.x) && (0..H as i32).contains(&p.y) {
                self.pixels[p.y as usize * W + p.x as usize] = color;
            }
        }
        Ok(())
    }
}

/// A tick with the stick at rest and no buttons.
pub fn centered_stick() -> InputSnapshot {
    let c = Calibration::default();
    let sampler = InputSampler::new(c, 0);
    InputSnapshot {
        edges: ButtonEdges::default(),
        axes: Some(sampler.axes(c.center_x, c.center_y)),
    }
}

pub fn edges(reset: bool, start: bool, pause: bool) -> InputSnapshot {
    InputSnapshot {
        edges: ButtonEdges {
            reset,
            start,
            pause,
        },
        axes: None,
    }
}

/// Keep the enemy clear of a player parked on the left edge and tick until
/// something happens.
pub fn dodge_one(game: &mut Game) -> Event {
    game.set_player(Player { x: 0, y: 28 });
    loop {
        let mut enemy = *game.enemy();
        enemy.x = 100;
        game.set_enemy(enemy);
        if let Some(event) = game.tick(&centered_stick()) {
            return event;
        }
    }
}
