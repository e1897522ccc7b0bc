//! The fixed-tick loop tying input, game, feedback and rendering together.

use core::fmt::Debug;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use crate::config::{Config, Geometry};
use crate::feedback::{self, Cue};
use crate::game::{Event, Game, GameMode};
use crate::hal::Board;
use crate::input::InputSampler;
use crate::render;

pub struct FrameScheduler {
    game: Game,
    sampler: InputSampler,
    seeded: bool,
}

impl FrameScheduler {
    pub fn new(config: Config) -> Self {
        Self {
            sampler: InputSampler::new(config.calibration, config.timing.debounce_ms),
            game: Game::new(config),
            seeded: false,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut Game {
        &mut self.game
    }

    /// Sleep after a tick, picked from the mode the tick left the game in.
    pub fn interval_ms(&self) -> u64 {
        let timing = &self.game.config().timing;
        match self.game.mode() {
            GameMode::Running => timing.frame_ms,
            GameMode::Won | GameMode::Lost => timing.restart_poll_ms,
            GameMode::Idle | GameMode::Paused => timing.idle_ms,
        }
    }

    /// Show the start prompt.
    pub async fn boot<B, D>(&mut self, board: &mut B, display: &mut D) -> Result<(), D::Error>
    where
        B: Board,
        D: DrawTarget<Color = Rgb565>,
    {
        let geometry = self.game.config().geometry;
        apply(board, display, &feedback::boot(), &geometry).await?;
        log::info!("idle, waiting for start");
        Ok(())
    }

    /// Run one tick, including its trailing sleep.
    pub async fn step<B, D>(
        &mut self,
        board: &mut B,
        display: &mut D,
    ) -> Result<Option<Event>, D::Error>
    where
        B: Board,
        D: DrawTarget<Color = Rgb565>,
    {
        let now = board.now_ms();
        let levels = board.button_levels();
        if !self.seeded && levels.any() {
            self.game.reseed(now as u32);
            self.seeded = true;
        }

        let raw_axes = if self.game.mode() == GameMode::Running {
            Some(board.read_axes().await)
        } else {
            None
        };
        let input = self.sampler.sample(levels, raw_axes, now);
        let event = self.game.tick(&input);

        let config = *self.game.config();
        let mut screen_drawn = false;
        if let Some(event) = event {
            for cue in feedback::for_event(event, &config.timing) {
                screen_drawn |= cue.screen.is_some();
                apply(board, display, &cue, &config.geometry).await?;
            }
        }
        // A banner raised this tick stays up until the next one.
        if !screen_drawn {
            if let Some(cue) = feedback::frame(&self.game) {
                apply(board, display, &cue, &config.geometry).await?;
            }
        }

        board.sleep_ms(self.interval_ms()).await;
        Ok(event)
    }

    /// Boot, then tick forever. Draw failures are logged and skipped.
    pub async fn run<B, D>(&mut self, board: &mut B, display: &mut D)
    where
        B: Board,
        D: DrawTarget<Color = Rgb565>,
        D::Error: Debug,
    {
        if let Err(e) = self.boot(board, display).await {
            log::warn!("boot screen failed: {:?}", e);
        }
        loop {
            if let Err(e) = self.step(board, display).await {
                log::warn!("frame dropped: {:?}", e);
            }
        }
    }
}

async fn apply<B, D>(
    board: &mut B,
    display: &mut D,
    cue: &Cue,
    geometry: &Geometry,
) -> Result<(), D::Error>
where
    B: Board,
    D: DrawTarget<Color = Rgb565>,
{
    if let Some(led) = cue.led {
        board.set_led(led);
    }
    if let Some(screen) = &cue.screen {
        render::draw(display, screen, geometry)?;
    }
    if let Some(tone) = cue.tone {
        board.play_tone(tone).await;
    }
    if cue.hold_ms > 0 {
        board.sleep_ms(cue.hold_ms as u64).await;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pacing_follows_mode() {
        let mut scheduler = FrameScheduler::new(Config::default());
        assert_eq!(scheduler.interval_ms(), 200);
        scheduler.game_mut().full_reset();
        assert_eq!(scheduler.interval_ms(), 20);
    }
}
