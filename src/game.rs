//! Game modes, score and the per-tick update.
//!
//! [`Game`] owns every piece of mutable game state. The scheduler feeds it one
//! [`InputSnapshot`] per tick and forwards the returned [`Event`] to the
//! feedback layer.

use crate::config::Config;
use crate::entity::{Enemy, Player, Rng};
use crate::input::InputSnapshot;

const DEFAULT_SEED: u32 = 12345;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Powered on or switched off, waiting for start.
    Idle,
    Running,
    Paused,
    /// Score limit reached; only a restart leaves this mode.
    Won,
    /// Player hit the enemy; only a restart leaves this mode.
    Lost,
}

/// A state change worth telling the player about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Full reset from the reset button, or from either button after a win/loss.
    Restarted,
    /// Full reset from the start button while idle.
    Started,
    /// Start button while running or paused.
    Stopped,
    Paused,
    Resumed,
    /// Enemy left the bottom edge and a new one was spawned.
    Scored,
    Won,
    Lost,
}

#[derive(Debug, Clone)]
pub struct Game {
    config: Config,
    mode: GameMode,
    score: u32,
    player: Player,
    enemy: Enemy,
    rng: Rng,
}

impl Game {
    /// Idle game with the enemy already spawned.
    pub fn new(config: Config) -> Self {
        let mut rng = Rng::new(DEFAULT_SEED);
        let enemy = Enemy::spawn(&mut rng, 0, config.rules.max_speed, &config.geometry);
        Self {
            player: Player::centered(&config.geometry),
            config,
            mode: GameMode::Idle,
            score: 0,
            enemy,
            rng,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn enemy(&self) -> &Enemy {
        &self.enemy
    }

    pub fn reseed(&mut self, seed: u32) {
        self.rng = Rng::new(seed);
    }

    /// Back to the start of a run: score zero, player centered, fresh enemy.
    pub fn full_reset(&mut self) {
        self.score = 0;
        self.player = Player::centered(&self.config.geometry);
        self.spawn_enemy();
        self.mode = GameMode::Running;
    }

    /// One scheduler tick.
    ///
    /// Button edges are handled first, reset before start before pause, and
    /// at most one of them acts. A tick that acted on a button does not move
    /// anything.
    pub fn tick(&mut self, input: &InputSnapshot) -> Option<Event> {
        if let Some(event) = self.handle_buttons(input) {
            log::info!("{:?} -> {:?}", event, self.mode);
            return Some(event);
        }
        if self.mode != GameMode::Running {
            return None;
        }
        let (dx, dy) = input.movement(&self.config.calibration);
        self.advance(dx, dy)
    }

    fn handle_buttons(&mut self, input: &InputSnapshot) -> Option<Event> {
        let edges = input.edges;
        if edges.reset {
            self.full_reset();
            return Some(Event::Restarted);
        }
        if edges.start {
            return Some(match self.mode {
                GameMode::Idle => {
                    self.full_reset();
                    Event::Started
                }
                GameMode::Running | GameMode::Paused => {
                    self.mode = GameMode::Idle;
                    Event::Stopped
                }
                GameMode::Won | GameMode::Lost => {
                    self.full_reset();
                    Event::Restarted
                }
            });
        }
        if edges.pause {
            match self.mode {
                GameMode::Running => {
                    self.mode = GameMode::Paused;
                    return Some(Event::Paused);
                }
                GameMode::Paused => {
                    self.mode = GameMode::Running;
                    return Some(Event::Resumed);
                }
                GameMode::Idle | GameMode::Won | GameMode::Lost => {}
            }
        }
        None
    }

    /// Physics for one Running tick: move, descend, score, collide.
    ///
    /// A replacement enemy takes its speed from the score before the point it
    /// earns is counted.
    fn advance(&mut self, dx: i32, dy: i32) -> Option<Event> {
        let geometry = self.config.geometry;
        self.player.shift(dx, dy, &geometry);
        self.enemy.descend();

        let mut event = None;
        if self.enemy.passed_bottom(&geometry) {
            self.spawn_enemy();
            self.score += 1;
            if self.score >= self.config.rules.win_score {
                self.mode = GameMode::Won;
                log::info!("won with score {}", self.score);
                return Some(Event::Won);
            }
            log::debug!("score {} speed {}", self.score, self.enemy.speed);
            event = Some(Event::Scored);
        }

        if self
            .player
            .rect(&geometry)
            .overlaps(&self.enemy.rect(&geometry))
        {
            self.mode = GameMode::Lost;
            log::info!("lost with score {}", self.score);
            return Some(Event::Lost);
        }
        event
    }

    fn spawn_enemy(&mut self) {
        self.enemy = Enemy::spawn(
            &mut self.rng,
            self.score,
            self.config.rules.max_speed,
            &self.config.geometry,
        );
    }

    /// Place the enemy directly. Used to stage collisions.
    pub fn set_enemy(&mut self, enemy: Enemy) {
        self.enemy = enemy;
    }

    /// Place the player directly, clamped to the playfield.
    pub fn set_player(&mut self, mut player: Player) {
        player.clamp(&self.config.geometry);
        self.player = player;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::ButtonEdges;

    fn press(reset: bool, start: bool, pause: bool) -> InputSnapshot {
        InputSnapshot {
            edges: ButtonEdges {
                reset,
                start,
                pause,
            },
            axes: None,
        }
    }

    fn still() -> InputSnapshot {
        InputSnapshot {
            edges: ButtonEdges::default(),
            axes: Some(Default::default()),
        }
    }

    fn running() -> Game {
        let mut game = Game::new(Config::default());
        game.tick(&press(false, true, false));
        game
    }

    #[test]
    fn boots_idle_with_enemy() {
        let game = Game::new(Config::default());
        assert_eq!(game.mode(), GameMode::Idle);
        assert_eq!(game.enemy().y, 0);
        assert_eq!(game.enemy().speed, 1);
    }

    #[test]
    fn idle_ignores_ticks_and_pause() {
        let mut game = Game::new(Config::default());
        let enemy = *game.enemy();
        assert_eq!(game.tick(&still()), None);
        assert_eq!(game.tick(&press(false, false, true)), None);
        assert_eq!(game.mode(), GameMode::Idle);
        assert_eq!(*game.enemy(), enemy);
    }

    #[test]
    fn start_and_stop() {
        let mut game = Game::new(Config::default());
        assert_eq!(game.tick(&press(false, true, false)), Some(Event::Started));
        assert_eq!(game.mode(), GameMode::Running);
        assert_eq!(game.tick(&press(false, true, false)), Some(Event::Stopped));
        assert_eq!(game.mode(), GameMode::Idle);
    }

    #[test]
    fn reset_wins_over_start() {
        let mut game = Game::new(Config::default());
        assert_eq!(game.tick(&press(true, true, true)), Some(Event::Restarted));
        assert_eq!(game.mode(), GameMode::Running);
    }

    #[test]
    fn start_while_paused_stops() {
        let mut game = running();
        game.tick(&press(false, false, true));
        assert_eq!(game.mode(), GameMode::Paused);
        assert_eq!(game.tick(&press(false, true, false)), Some(Event::Stopped));
        assert_eq!(game.mode(), GameMode::Idle);
    }

    #[test]
    fn pause_freezes_everything() {
        let mut game = running();
        game.tick(&still());
        let (player, enemy, score) = (*game.player(), *game.enemy(), game.score());

        assert_eq!(game.tick(&press(false, false, true)), Some(Event::Paused));
        for _ in 0..20 {
            assert_eq!(game.tick(&still()), None);
        }
        assert_eq!(game.tick(&press(false, false, true)), Some(Event::Resumed));
        assert_eq!(game.mode(), GameMode::Running);
        assert_eq!(*game.player(), player);
        assert_eq!(*game.enemy(), enemy);
        assert_eq!(game.score(), score);
    }

    #[test]
    fn enemy_descends_by_speed() {
        let mut game = running();
        game.set_player(Player { x: 0, y: 0 });
        game.set_enemy(Enemy {
            x: 100,
            y: 10,
            speed: 3,
        });
        game.tick(&still());
        assert_eq!(game.enemy().y, 13);
    }

    #[test]
    fn crossing_bottom_respawns_then_scores() {
        let mut game = running();
        game.set_player(Player { x: 0, y: 56 });
        game.set_enemy(Enemy {
            x: 100,
            y: 64,
            speed: 1,
        });
        game.score = 1;
        assert_eq!(game.tick(&still()), Some(Event::Scored));
        assert_eq!(game.score(), 2);
        assert_eq!(game.enemy().y, 0);
        assert_eq!(game.enemy().speed, 1);

        game.set_enemy(Enemy {
            x: 100,
            y: 64,
            speed: 1,
        });
        assert_eq!(game.tick(&still()), Some(Event::Scored));
        assert_eq!(game.score(), 3);
        assert_eq!(game.enemy().speed, 2);
    }

    #[test]
    fn reset_mid_run_starts_over() {
        for pause_first in [false, true] {
            let mut game = running();
            game.score = 4;
            game.set_player(Player { x: 0, y: 0 });
            game.set_enemy(Enemy {
                x: 100,
                y: 30,
                speed: 3,
            });
            if pause_first {
                game.tick(&press(false, false, true));
                assert_eq!(game.mode(), GameMode::Paused);
            }
            assert_eq!(game.tick(&press(true, false, false)), Some(Event::Restarted));
            assert_eq!(game.mode(), GameMode::Running);
            assert_eq!(game.score(), 0);
            assert_eq!(*game.player(), Player::centered(&game.config().geometry));
            assert_eq!(game.enemy().y, 0);
            assert_eq!(game.enemy().speed, 1);
        }
    }

    #[test]
    fn collision_loses() {
        let mut game = running();
        let player = *game.player();
        game.set_enemy(Enemy {
            x: player.x + 2,
            y: player.y - 4,
            speed: 1,
        });
        assert_eq!(game.tick(&still()), Some(Event::Lost));
        assert_eq!(game.mode(), GameMode::Lost);
    }

    #[test]
    fn lost_only_leaves_on_restart() {
        let mut game = running();
        let player = *game.player();
        game.set_enemy(Enemy {
            x: player.x,
            y: player.y,
            speed: 1,
        });
        game.tick(&still());
        assert_eq!(game.tick(&press(false, false, true)), None);
        assert_eq!(game.tick(&still()), None);
        assert_eq!(game.mode(), GameMode::Lost);
        assert_eq!(game.tick(&press(false, true, false)), Some(Event::Restarted));
        assert_eq!(game.mode(), GameMode::Running);
        assert_eq!(game.score(), 0);
    }

    #[test]
    fn button_tick_does_not_move() {
        let mut game = running();
        let enemy = *game.enemy();
        game.tick(&InputSnapshot {
            edges: ButtonEdges {
                pause: true,
                ..Default::default()
            },
            axes: Some(Default::default()),
        });
        game.tick(&press(false, false, true));
        assert_eq!(*game.enemy(), enemy);
    }
}
