//! Hardware seams. The firmware implements [`Board`] on top of embassy-rp;
//! tests implement it with plain fields.

use crate::feedback::{RgbLevels, Tone};
use crate::input::ButtonLevels;

#[allow(async_fn_in_trait)]
pub trait Board {
    /// Current button levels, `true` while the (active-low) pin reads low.
    fn button_levels(&mut self) -> ButtonLevels;

    /// Raw `(x, y)` joystick samples in the 12-bit ADC range.
    async fn read_axes(&mut self) -> (u16, u16);

    fn set_led(&mut self, levels: RgbLevels);

    /// Play `tone`, returning once it has finished.
    async fn play_tone(&mut self, tone: Tone);

    async fn sleep_ms(&mut self, ms: u64);

    /// Milliseconds since boot.
    fn now_ms(&self) -> u64;
}
