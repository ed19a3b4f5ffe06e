//! Mutable state threaded through every control tick.
//!
//! `ControlContext` is the single struct the control service reads from
//! and writes to: button edge trackers, the logical toggles, both pump
//! channels, the latest moisture readings, and the tick counter.  It has
//! exactly one owner and is never shared.

use super::edge::ButtonEdge;
use super::pump::PumpChannel;
use super::tick_counter::TickCounter;
use super::{ArmState, PumpId, SystemState};
use crate::config::Tick;

pub struct ControlContext {
    // -- Logical state --
    pub system: SystemState,
    /// Indexed by [`PumpId::index`].
    pub arms: [ArmState; PumpId::COUNT],

    // -- Buttons --
    pub system_button: ButtonEdge,
    pub pump_buttons: [ButtonEdge; PumpId::COUNT],

    // -- Pumps --
    pub pumps: [PumpChannel; PumpId::COUNT],

    // -- Sensor data --
    /// Latest raw moisture readings.  Overwritten every tick.
    pub moisture: [u16; PumpId::COUNT],

    // -- Timing --
    pub ticks: TickCounter,
}

impl ControlContext {
    /// Power-on state: disabled, both pumps disarmed and off.
    pub fn new(tick_ceiling: Tick) -> Self {
        Self {
            system: SystemState::Disabled,
            arms: [ArmState::Disarmed; PumpId::COUNT],
            system_button: ButtonEdge::default(),
            pump_buttons: [ButtonEdge::default(), ButtonEdge::default()],
            pumps: PumpId::ALL.map(PumpChannel::new),
            moisture: [0; PumpId::COUNT],
            ticks: TickCounter::new(tick_ceiling),
        }
    }

    pub fn pump(&self, id: PumpId) -> &PumpChannel {
        &self.pumps[id.index()]
    }

    pub fn arm(&self, id: PumpId) -> ArmState {
        self.arms[id.index()]
    }
}
