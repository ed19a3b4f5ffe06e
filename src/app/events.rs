//! Outbound control events.
//!
//! The [`ControlService`](super::service::ControlService) emits these
//! through the [`EventSink`](super::ports::EventSink) port.  They are
//! purely observational and never feed back into control flow.

use serde::Serialize;

use crate::config::Tick;
use crate::control::pump::{PumpOutput, StopReason};
use crate::control::{ArmState, PumpId, SystemState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlEvent {
    /// The service primed its inputs and is about to run its first tick.
    Started(SystemState),

    /// The system button toggled the master enable.
    SystemToggled(SystemState),

    /// A pump button toggled that pump's arm flag.
    PumpArmToggled { pump: PumpId, state: ArmState },

    /// A pump turned on.
    PumpStarted { pump: PumpId, moisture: u16, tick: Tick },

    /// A running pump turned off.
    PumpStopped {
        pump: PumpId,
        reason: StopReason,
        tick: Tick,
    },

    /// The tick counter wrapped and activation stamps were rebased.
    CounterWrapped { ceiling: Tick },

    /// Periodic status snapshot.
    Status(StatusData),
}

/// A point-in-time view of the control loop suitable for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusData {
    pub tick: Tick,
    pub system: SystemState,
    pub arms: [ArmState; PumpId::COUNT],
    pub outputs: [PumpOutput; PumpId::COUNT],
    pub moisture: [u16; PumpId::COUNT],
}
