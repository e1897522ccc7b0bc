//! Draws [`Screen`]s with embedded-graphics.
//!
//! Coordinates are playfield pixels; the firmware translates the playfield
//! onto the panel.

use core::fmt::Write as _;

use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Baseline, Text};

use crate::config::Geometry;
use crate::entity::Rect;
use crate::feedback::{Banner, Hud, Screen};

const BACKGROUND: Rgb565 = Rgb565::BLACK;
const PLAYER_COLOR: Rgb565 = Rgb565::CYAN;
const ENEMY_COLOR: Rgb565 = Rgb565::RED;
const HUD_COLOR: Rgb565 = Rgb565::WHITE;
const SPEED_X: i32 = 70;

pub fn draw<D>(display: &mut D, screen: &Screen, geometry: &Geometry) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    clear_playfield(display, geometry)?;
    match screen {
        Screen::Banner(banner) => draw_banner(display, *banner),
        Screen::Playfield(hud) => draw_playfield(display, hud),
    }
}

fn clear_playfield<D>(display: &mut D, geometry: &Geometry) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    Rectangle::new(
        Point::zero(),
        Size::new(geometry.screen_w as u32, geometry.screen_h as u32),
    )
    .into_styled(PrimitiveStyle::with_fill(BACKGROUND))
    .draw(display)
}

fn banner_color(banner: Banner) -> Rgb565 {
    match banner {
        Banner::Won => Rgb565::GREEN,
        Banner::Lost => Rgb565::RED,
        Banner::Paused => Rgb565::YELLOW,
        Banner::Restarting => Rgb565::MAGENTA,
        _ => Rgb565::WHITE,
    }
}

fn draw_banner<D>(display: &mut D, banner: Banner) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let style = MonoTextStyle::new(&FONT_6X10, banner_color(banner));
    for &(text, x, y) in banner.lines() {
        Text::with_baseline(text, Point::new(x, y), style, Baseline::Top).draw(display)?;
    }
    Ok(())
}

fn fill<D>(display: &mut D, rect: &Rect, color: Rgb565) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    Rectangle::new(
        Point::new(rect.x, rect.y),
        Size::new(rect.w as u32, rect.h as u32),
    )
    .into_styled(PrimitiveStyle::with_fill(color))
    .draw(display)
}

fn draw_playfield<D>(display: &mut D, hud: &Hud) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    fill(display, &hud.enemy, ENEMY_COLOR)?;
    fill(display, &hud.player, PLAYER_COLOR)?;

    let style = MonoTextStyle::new(&FONT_6X10, HUD_COLOR);
    let mut buf = heapless::String::<16>::new();
    core::write!(buf, "Score:{}", hud.score).ok();
    Text::with_baseline(&buf, Point::new(0, 0), style, Baseline::Top).draw(display)?;

    buf.clear();
    core::write!(buf, "Speed:{}", hud.speed).ok();
    Text::with_baseline(&buf, Point::new(SPEED_X, 0), style, Baseline::Top).draw(display)?;
    Ok(())
}
