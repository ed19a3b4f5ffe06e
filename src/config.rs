//! System configuration parameters
//!
//! All tunable parameters for the irrigator control loop.  Values are
//! fixed at start-up; nothing in the loop mutates them at runtime.

use core::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Tick index type.  Bounded by [`IrrigatorConfig::tick_ceiling`].
pub type Tick = u32;

/// Core system configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IrrigatorConfig {
    // --- Timing ---
    /// Length of one control tick (milliseconds)
    pub tick_period_ms: u32,
    /// Counter value at which the tick counter wraps back to zero
    pub tick_ceiling: Tick,

    // --- Moisture ---
    /// Raw sensor reading (0-1023) above which soil counts as too dry
    pub dryness_threshold: u16,

    // --- Pump timing ---
    /// Ticks a pump may stay on before it is forced off
    pub run_duration_ticks: Tick,
    /// Extra ticks added to the run duration before a pump may restart
    pub cooldown_extra_ticks: Tick,

    // --- Telemetry ---
    /// Ticks between status log lines (0 = disabled)
    pub status_interval_ticks: Tick,
}

impl Default for IrrigatorConfig {
    fn default() -> Self {
        Self {
            // Timing
            tick_period_ms: 50, // 20 Hz
            tick_ceiling: 32_000,

            // Moisture (wilting point of the test soil)
            dryness_threshold: 432,

            // Pump timing
            run_duration_ticks: 200,   // 10 s at 50 ms/tick
            cooldown_extra_ticks: 200, // restart allowed 20 s after start

            // Telemetry
            status_interval_ticks: 200,
        }
    }
}

impl IrrigatorConfig {
    /// Minimum ticks between two activations of the same pump.
    pub fn cooldown_ticks(&self) -> Tick {
        self.run_duration_ticks
            .saturating_add(self.cooldown_extra_ticks)
    }

    /// Tick period as a [`Duration`].
    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(u64::from(self.tick_period_ms))
    }

    /// Reject parameter combinations that break the timing invariants.
    pub fn validate(&self) -> Result<()> {
        if self.tick_period_ms == 0 {
            return Err(Error::Config("tick_period_ms must be non-zero"));
        }
        if self.run_duration_ticks == 0 {
            return Err(Error::Config("run_duration_ticks must be non-zero"));
        }
        // A zero buffer would let a pump restart on the tick it times out.
        if self.cooldown_extra_ticks == 0 {
            return Err(Error::Config("cooldown_extra_ticks must be non-zero"));
        }
        if self.tick_ceiling <= self.cooldown_ticks() {
            return Err(Error::Config(
                "tick_ceiling must exceed run duration plus cooldown buffer",
            ));
        }
        Ok(())
    }
}
