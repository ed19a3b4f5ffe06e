//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing control events to the `log` facade
//! (which goes to the UART console in production).

use log::{info, warn};

use crate::app::events::ControlEvent;
use crate::app::ports::EventSink;
use crate::control::pump::StopReason;
use crate::control::{ArmState, SystemState};

/// Adapter that logs every [`ControlEvent`] to the serial console.
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &ControlEvent) {
        match event {
            ControlEvent::Started(system) => {
                info!("START | system={:?}", system);
            }
            ControlEvent::SystemToggled(SystemState::Enabled) => {
                info!("SYSTEM | on");
            }
            ControlEvent::SystemToggled(SystemState::Disabled) => {
                info!("SYSTEM | shutting down");
            }
            ControlEvent::PumpArmToggled { pump, state } => {
                let verb = match state {
                    ArmState::Armed => "armed",
                    ArmState::Disarmed => "disarmed",
                };
                info!("ARM | {} {}", pump, verb);
            }
            ControlEvent::PumpStarted {
                pump,
                moisture,
                tick,
            } => {
                info!("PUMP | running {} (moisture={}, tick={})", pump, moisture, tick);
            }
            ControlEvent::PumpStopped { pump, reason, tick } => {
                let why = match reason {
                    StopReason::RunDurationElapsed => "run duration elapsed",
                    StopReason::SystemDisabled => "system disabled",
                };
                info!("PUMP | shutting off {} ({}, tick={})", pump, why, tick);
            }
            ControlEvent::CounterWrapped { ceiling } => {
                warn!("TICK | restarting counter at {} to prevent overflow", ceiling);
            }
            ControlEvent::Status(s) => match serde_json::to_string(s) {
                Ok(json) => info!("STATUS | {}", json),
                Err(e) => warn!("STATUS | {:?} (encode failed: {})", s, e),
            },
        }
    }
}
