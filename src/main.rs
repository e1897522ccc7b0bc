//! Raspberry Pi Pico - "Joystick Dodge" firmware
//!
//! Analog stick: X on GP26 (ADC0), Y on GP27 (ADC1), click on GP22 = pause
//! Buttons: A (GP5) = start/stop, B (GP6) = reset
//! RGB LED: R GP13, G GP11, B GP12 (PWM). Buzzer: GP21 (PWM)
//! ST7789 panel (Pico Display Pack) on SPI0, playfield centered on it

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{self, Adc, Channel};
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::peripherals::USB;
use embassy_rp::pwm::{self, Pwm};
use embassy_rp::spi::{self, Spi};
use embassy_rp::usb::{Driver, InterruptHandler as UsbInterruptHandler};
use embassy_time::{Delay, Duration, Instant, Timer};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_hal_bus::spi::ExclusiveDevice;
use joystick_dodge::config::Calibration;
use joystick_dodge::feedback::{LED_MAX, RgbLevels, Tone};
use joystick_dodge::input::ButtonLevels;
use joystick_dodge::{Board, Config, FrameScheduler};
use mipidsi::Builder;
use mipidsi::models::ST7789;
use mipidsi::options::{ColorInversion, Orientation, Rotation};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

// --- Panel ---
const PANEL_W: i32 = 240;
const PANEL_H: i32 = 135;

// --- Buzzer PWM ---
const SYS_CLOCK_HZ: u32 = 125_000_000;
const TONE_DIVIDER: u8 = 64;

// --- Embassy bindings ---
bind_interrupts!(struct Irqs {
    USBCTRL_IRQ => UsbInterruptHandler<USB>;
    ADC_IRQ_FIFO => adc::InterruptHandler;
});

#[embassy_executor::task]
async fn logger_task(driver: Driver<'static, USB>) {
    embassy_usb_logger::run!(1024, log::LevelFilter::Info, driver);
}

/// Joystick, buttons, RGB LED and buzzer of the board.
struct PicoBoard<'d> {
    adc: Adc<'d, adc::Async>,
    axis_x: Channel<'d>,
    axis_y: Channel<'d>,
    calibration: Calibration,
    btn_reset: Input<'d>,
    btn_start: Input<'d>,
    btn_pause: Input<'d>,
    /// Slice 6: A = blue (GP12), B = red (GP13).
    led_blue_red: Pwm<'d>,
    led_blue_red_cfg: pwm::Config,
    /// Slice 5: B = green (GP11).
    led_green: Pwm<'d>,
    led_green_cfg: pwm::Config,
    /// Slice 2: B = buzzer (GP21).
    buzzer: Pwm<'d>,
}

fn led_config() -> pwm::Config {
    let mut config = pwm::Config::default();
    config.top = LED_MAX;
    config
}

impl Board for PicoBoard<'_> {
    fn button_levels(&mut self) -> ButtonLevels {
        ButtonLevels {
            reset: self.btn_reset.is_low(),
            start: self.btn_start.is_low(),
            pause: self.btn_pause.is_low(),
        }
    }

    async fn read_axes(&mut self) -> (u16, u16) {
        let x = match self.adc.read(&mut self.axis_x).await {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("ADC X read failed: {:?}", e);
                self.calibration.center_x
            }
        };
        let y = match self.adc.read(&mut self.axis_y).await {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("ADC Y read failed: {:?}", e);
                self.calibration.center_y
            }
        };
        (x, y)
    }

    fn set_led(&mut self, levels: RgbLevels) {
        self.led_blue_red_cfg.compare_a = levels.blue;
        self.led_blue_red_cfg.compare_b = levels.red;
        self.led_blue_red.set_config(&self.led_blue_red_cfg);
        self.led_green_cfg.compare_b = levels.green;
        self.led_green.set_config(&self.led_green_cfg);
    }

    async fn play_tone(&mut self, tone: Tone) {
        let top = (SYS_CLOCK_HZ / TONE_DIVIDER as u32 / tone.frequency_hz.max(1))
            .min(u16::MAX as u32) as u16;
        let mut config = pwm::Config::default();
        config.divider = TONE_DIVIDER.into();
        config.top = top;
        config.compare_b = top / 2;
        self.buzzer.set_config(&config);

        Timer::after_millis(tone.duration_ms as u64).await;

        config.enable = false;
        config.compare_b = 0;
        self.buzzer.set_config(&config);
    }

    async fn sleep_ms(&mut self, ms: u64) {
        Timer::after_millis(ms).await;
    }

    fn now_ms(&self) -> u64 {
        Instant::now().as_millis()
    }
}

// --- Main ---
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_rp::init(Default::default());

    // USB serial logger
    let usb_driver = Driver::new(p.USB, Irqs);
    unwrap!(spawner.spawn(logger_task(usb_driver)));
    Timer::after(Duration::from_secs(2)).await;
    log::info!("=== Joystick Dodge ===");

    let config = Config::default();

    // ST7789 display (Pico Display Pack)
    let _bl = Output::new(p.PIN_20, Level::High);
    let mut spi_config = spi::Config::default();
    spi_config.frequency = 62_500_000;
    let spi_bus = Spi::new_blocking_txonly(p.SPI0, p.PIN_18, p.PIN_19, spi_config);
    let cs_display = Output::new(p.PIN_17, Level::High);
    let dc = Output::new(p.PIN_16, Level::Low);
    let spi_device = ExclusiveDevice::new_no_delay(spi_bus, cs_display).unwrap();
    static DISPLAY_BUF: StaticCell<[u8; 1024]> = StaticCell::new();
    let display_buf = DISPLAY_BUF.init([0u8; 1024]);
    let di = mipidsi::interface::SpiInterface::new(spi_device, dc, display_buf);
    let mut display = Builder::new(ST7789, di)
        .display_size(135, 240)
        .display_offset(52, 40)
        .invert_colors(ColorInversion::Inverted)
        .orientation(Orientation::new().rotate(Rotation::Deg90))
        .init(&mut Delay)
        .unwrap();
    display.clear(Rgb565::BLACK).unwrap();

    // Playfield frame, drawn once; the game only paints inside it
    let origin = Point::new(
        (PANEL_W - config.geometry.screen_w) / 2,
        (PANEL_H - config.geometry.screen_h) / 2,
    );
    Rectangle::new(
        origin - Point::new(1, 1),
        Size::new(
            config.geometry.screen_w as u32 + 2,
            config.geometry.screen_h as u32 + 2,
        ),
    )
    .into_styled(PrimitiveStyle::with_stroke(Rgb565::new(4, 8, 4), 1))
    .draw(&mut display)
    .unwrap();
    let mut playfield = display.translated(origin);
    log::info!("Display ready!");

    // Joystick
    let adc = Adc::new(p.ADC, Irqs, adc::Config::default());
    let axis_x = Channel::new_pin(p.PIN_26, Pull::None);
    let axis_y = Channel::new_pin(p.PIN_27, Pull::None);

    // Buttons (active-low, pull-up)
    let btn_start = Input::new(p.PIN_5, Pull::Up);
    let btn_reset = Input::new(p.PIN_6, Pull::Up);
    let btn_pause = Input::new(p.PIN_22, Pull::Up);

    // RGB LED + buzzer
    let led_blue_red_cfg = led_config();
    let led_green_cfg = led_config();
    let led_blue_red = Pwm::new_output_ab(
        p.PWM_SLICE6,
        p.PIN_12,
        p.PIN_13,
        led_blue_red_cfg.clone(),
    );
    let led_green = Pwm::new_output_b(p.PWM_SLICE5, p.PIN_11, led_green_cfg.clone());
    let mut buzzer_cfg = pwm::Config::default();
    buzzer_cfg.enable = false;
    let buzzer = Pwm::new_output_b(p.PWM_SLICE2, p.PIN_21, buzzer_cfg);
    log::info!("Inputs and PWM ready!");

    let mut board = PicoBoard {
        adc,
        axis_x,
        axis_y,
        calibration: config.calibration,
        btn_reset,
        btn_start,
        btn_pause,
        led_blue_red,
        led_blue_red_cfg,
        led_green,
        led_green_cfg,
        buzzer,
    };

    info!("Entering game loop");
    let mut scheduler = FrameScheduler::new(config);
    scheduler.run(&mut board, &mut playfield).await;
}
