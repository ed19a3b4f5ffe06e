//! Port traits — the hexagonal boundary between the control loop and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ ControlService (domain)
//! ```
//!
//! Driven adapters (pins, ADC, log output) implement these traits.  The
//! [`ControlService`](super::service::ControlService) consumes them via
//! generics, so the control loop never touches hardware directly.
//!
//! Ports are infallible on purpose: inputs are assumed always readable and
//! outputs always writable.  Adapters absorb and log their own faults.

use crate::control::{Level, PumpId};

// ───────────────────────────────────────────────────────────────
// Input port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// One tick's worth of raw inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputSample {
    pub system_button: Level,
    /// Indexed by [`PumpId::index`].
    pub pump_buttons: [Level; PumpId::COUNT],
    /// Raw moisture readings (0 – 1023), indexed by [`PumpId::index`].
    pub moisture: [u16; PumpId::COUNT],
}

impl Default for InputSample {
    /// Buttons released, sensors reading fully wet.
    fn default() -> Self {
        Self {
            system_button: Level::High,
            pump_buttons: [Level::High; PumpId::COUNT],
            moisture: [0; PumpId::COUNT],
        }
    }
}

/// Read-side port: the domain calls this once per tick.
pub trait InputPort {
    /// Read every button and sensor line.
    fn sample(&mut self) -> InputSample;
}

// ───────────────────────────────────────────────────────────────
// Output port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the domain calls this to drive pump outputs.
pub trait OutputPort {
    fn write_pump(&mut self, pump: PumpId, level: Level);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging)
// ───────────────────────────────────────────────────────────────

/// The domain emits [`ControlEvent`](super::events::ControlEvent)s
/// through this port.  Adapters decide where they go.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::ControlEvent);
}
