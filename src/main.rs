//! Irrigator Firmware — Main Entry Point
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                    Adapters (outer ring)                     │
//! │                                                              │
//! │  HardwareAdapter            EspMoistureSensors  LogEventSink │
//! │  (InputPort + OutputPort)   (MoistureSource)    (EventSink)  │
//! │                                                              │
//! │  ─────────────── Port Trait Boundary ─────────────────       │
//! │                                                              │
//! │   ┌──────────────────────────────────────────────────────┐   │
//! │   │            ControlService (pure logic)               │   │
//! │   │   edge detection · pump state machine · counter      │   │
//! │   └──────────────────────────────────────────────────────┘   │
//! │                                                              │
//! │   TickScheduler (FreeRtos delay) · Watchdog                  │
//! └──────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::{Result, ensure};
use esp_idf_hal::adc::oneshot::AdcDriver;
use esp_idf_hal::delay::FreeRtos;
use esp_idf_hal::gpio::{AnyIOPin, IOPin, Input, OutputPin, PinDriver, Pull};
use esp_idf_hal::peripherals::Peripherals;
use log::info;

use irrigator::adapters::esp_adc::EspMoistureSensors;
use irrigator::adapters::hardware::HardwareAdapter;
use irrigator::adapters::log_sink::LogEventSink;
use irrigator::app::service::ControlService;
use irrigator::config::IrrigatorConfig;
use irrigator::drivers::watchdog::Watchdog;
use irrigator::pins;
use irrigator::scheduler::TickScheduler;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  Irrigator v{}                    ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    // ── 2. Configuration ──────────────────────────────────────
    let mut control = ControlService::new(IrrigatorConfig::default())?;
    info!("Config: {}", serde_json::to_string(control.config())?);

    // ── 3. Peripherals ────────────────────────────────────────
    let peripherals = Peripherals::take()?;
    let p = peripherals.pins;

    let system_button = button(p.gpio4.downgrade(), pins::SYSTEM_BUTTON_GPIO)?;
    let pump_1_button = button(p.gpio16.downgrade(), pins::PUMP_1_BUTTON_GPIO)?;
    let pump_2_button = button(p.gpio17.downgrade(), pins::PUMP_2_BUTTON_GPIO)?;

    let pump_1 = PinDriver::output(p.gpio25.downgrade_output())?;
    let pump_2 = PinDriver::output(p.gpio26.downgrade_output())?;
    ensure!(pump_1.pin() == pins::PUMP_1_GPIO, "pump 1 pin mismatch");
    ensure!(pump_2.pin() == pins::PUMP_2_GPIO, "pump 2 pin mismatch");

    let adc = AdcDriver::new(peripherals.adc1)?;
    let moisture = EspMoistureSensors::new(&adc, p.gpio32, p.gpio33)?;
    info!(
        "Pins: buttons={}/{}/{} pumps={}/{} moisture={}/{}",
        pins::SYSTEM_BUTTON_GPIO,
        pins::PUMP_1_BUTTON_GPIO,
        pins::PUMP_2_BUTTON_GPIO,
        pins::PUMP_1_GPIO,
        pins::PUMP_2_GPIO,
        pins::MOISTURE_1_ADC_GPIO,
        pins::MOISTURE_2_ADC_GPIO,
    );

    let mut hw = HardwareAdapter::new(
        system_button,
        [pump_1_button, pump_2_button],
        [pump_1, pump_2],
        moisture,
    );
    let mut sink = LogEventSink::new();

    // ── 4. Prime inputs, pumps low ────────────────────────────
    control.start(&mut hw, &mut sink);

    // ── 5. Control loop ───────────────────────────────────────
    let mut watchdog = Watchdog::new();
    let mut scheduler = TickScheduler::from_config(FreeRtos, control.config());

    info!("System ready. Entering control loop.");
    scheduler.run_forever(|| {
        control.tick(&mut hw, &mut sink);
        watchdog.feed();
    })
}

/// Active-low push-button with the internal pull-up enabled.
fn button(pin: AnyIOPin, expected_gpio: i32) -> Result<PinDriver<'static, AnyIOPin, Input>> {
    let mut driver = PinDriver::input(pin)?;
    driver.set_pull(Pull::Up)?;
    ensure!(
        driver.pin() == expected_gpio,
        "button on GPIO {} expected on GPIO {}",
        driver.pin(),
        expected_gpio
    );
    Ok(driver)
}
