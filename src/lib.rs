//! # joystick_dodge
//!
//! Game core for a joystick-driven dodge game on an RP2040 board: steer a
//! square away from a falling enemy, score a point each time it leaves the
//! screen, win at ten.
//!
//! - **input**: button edge latching and joystick deadzone
//! - **difficulty**: score to enemy speed
//! - **entity**: player/enemy squares, clamping, collision
//! - **game**: modes, score and the per-tick update
//! - **feedback**: LED, buzzer and screen cues per event
//! - **render**: embedded-graphics drawing of those screens
//! - **scheduler**: the paced loop over a [`hal::Board`]
//!
//! Everything is `no_std`; the firmware binary supplies the board.

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod difficulty;
pub mod entity;
pub mod feedback;
pub mod game;
pub mod hal;
pub mod input;
pub mod render;
pub mod scheduler;

pub use config::Config;
pub use game::{Event, Game, GameMode};
pub use hal::Board;
pub use scheduler::FrameScheduler;
