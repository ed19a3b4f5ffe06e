//! Hardware adapter — bridges real pins to domain port traits.
//!
//! Owns the three button inputs, both pump outputs, and the moisture
//! source, exposing them through [`InputPort`] and [`OutputPort`].  Pins
//! are anything implementing the `embedded-hal` 1.0 digital traits, so the
//! same adapter runs against `esp-idf-hal` drivers on the board and
//! against in-memory pins on the host.
//!
//! ## Fault policy
//!
//! The control loop assumes reads and writes always succeed.  When a pin
//! call does fail it is logged here and replaced with the safe value:
//!
//! | Failure        | Reported as            | Effect                    |
//! |----------------|------------------------|---------------------------|
//! | button read    | `High` (released)      | never synthesises a press |
//! | moisture read  | `0` (saturated / wet)  | never triggers watering   |
//! | pump write     | logged only            | state keeps commanded value |

use embedded_hal::digital::{InputPin, OutputPin};
use log::{error, warn};

use crate::app::ports::{InputPort, InputSample, OutputPort};
use crate::control::{Level, PumpId};
use crate::error::{ActuatorError, Error, Result, SensorError};
use crate::pins;

/// Source of raw soil-moisture readings, already scaled to 0 – 1023.
pub trait MoistureSource {
    fn read(&mut self, pump: PumpId) -> Result<u16>;
}

/// Scale a native ADC sample down to the 10-bit range thresholds use.
pub fn scale_adc(raw: u16) -> u16 {
    let max = (1u16 << pins::ADC_NATIVE_BITS) - 1;
    raw.min(max) >> (pins::ADC_NATIVE_BITS - pins::MOISTURE_SCALE_BITS)
}

/// Concrete adapter that combines all hardware behind port traits.
pub struct HardwareAdapter<B, P, M> {
    system_button: B,
    pump_buttons: [B; PumpId::COUNT],
    pump_outputs: [P; PumpId::COUNT],
    moisture: M,
}

impl<B, P, M> HardwareAdapter<B, P, M>
where
    B: InputPin,
    P: OutputPin,
    M: MoistureSource,
{
    pub fn new(
        system_button: B,
        pump_buttons: [B; PumpId::COUNT],
        pump_outputs: [P; PumpId::COUNT],
        moisture: M,
    ) -> Self {
        Self {
            system_button,
            pump_buttons,
            pump_outputs,
            moisture,
        }
    }

    fn read_button(pin: &mut B, name: &str) -> Level {
        match pin.is_high() {
            Ok(high) => Level::from_high(high),
            Err(e) => {
                warn!(
                    "{} button: {} ({:?})",
                    name,
                    Error::from(SensorError::GpioReadFailed),
                    e
                );
                Level::High
            }
        }
    }
}

// ── InputPort implementation ──────────────────────────────────

impl<B, P, M> InputPort for HardwareAdapter<B, P, M>
where
    B: InputPin,
    P: OutputPin,
    M: MoistureSource,
{
    fn sample(&mut self) -> InputSample {
        let system_button = Self::read_button(&mut self.system_button, "system");
        let [b1, b2] = &mut self.pump_buttons;
        let pump_buttons = [
            Self::read_button(b1, "pump 1"),
            Self::read_button(b2, "pump 2"),
        ];

        let moisture = PumpId::ALL.map(|id| {
            self.moisture.read(id).unwrap_or_else(|e| {
                warn!("{} moisture: {}", id, e);
                0
            })
        });

        InputSample {
            system_button,
            pump_buttons,
            moisture,
        }
    }
}

// ── OutputPort implementation ─────────────────────────────────

impl<B, P, M> OutputPort for HardwareAdapter<B, P, M>
where
    B: InputPin,
    P: OutputPin,
    M: MoistureSource,
{
    fn write_pump(&mut self, pump: PumpId, level: Level) {
        let pin = &mut self.pump_outputs[pump.index()];
        let result = if level.is_high() {
            pin.set_high()
        } else {
            pin.set_low()
        };
        if let Err(e) = result {
            error!(
                "{} -> {:?}: {} ({:?})",
                pump,
                level,
                Error::from(ActuatorError::GpioWriteFailed),
                e
            );
        }
    }
}
