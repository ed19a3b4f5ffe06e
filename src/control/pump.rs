//! Per-pump ON/OFF state machine with run-duration and cooldown timing.
//!
//! ## Rules (evaluated every tick, in order)
//!
//! | Step | Condition                                                  | Result            |
//! |------|------------------------------------------------------------|-------------------|
//! | 1    | system disabled                                            | forced `Off`      |
//! | 2    | `On` and `now − last_activation > run_duration`            | `Off` (timed out) |
//! | 3    | `Off`, armed, `moisture > threshold`, `now − last > cooldown` | `On`, stamp `now` |
//!
//! Step 1 short-circuits steps 2 and 3.  Steps 2 and 3 both run on an
//! enabled tick, but a pump that times out at step 2 cannot restart at
//! step 3: both compare against the same activation stamp and the
//! cooldown is strictly longer than the run duration.
//!
//! Before the first activation there is no stamp and the cooldown counts
//! as elapsed.

use serde::Serialize;

use crate::config::{IrrigatorConfig, Tick};

use super::{ArmState, Level, PumpId, SystemState};

/// Timing and threshold parameters shared by both pumps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PumpTiming {
    pub run_duration: Tick,
    pub cooldown: Tick,
    pub dryness_threshold: u16,
}

impl PumpTiming {
    pub fn from_config(config: &IrrigatorConfig) -> Self {
        Self {
            run_duration: config.run_duration_ticks,
            cooldown: config.cooldown_ticks(),
            dryness_threshold: config.dryness_threshold,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum PumpOutput {
    #[default]
    Off,
    On,
}

impl PumpOutput {
    /// Level to drive on the pump's output pin.
    pub fn level(self) -> Level {
        match self {
            Self::Off => Level::Low,
            Self::On => Level::High,
        }
    }

    pub fn is_on(self) -> bool {
        self == Self::On
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The pump ran past its run duration.
    RunDurationElapsed,
    /// The system was switched off while the pump ran.
    SystemDisabled,
}

/// What changed on one pump during one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PumpStep {
    pub stopped: Option<StopReason>,
    pub started: bool,
}

pub struct PumpChannel {
    id: PumpId,
    output: PumpOutput,
    last_activation: Option<Tick>,
}

impl PumpChannel {
    pub fn new(id: PumpId) -> Self {
        Self {
            id,
            output: PumpOutput::Off,
            last_activation: None,
        }
    }

    /// Run all three rules for one tick.
    pub fn update(
        &mut self,
        system: SystemState,
        arm: ArmState,
        moisture: u16,
        now: Tick,
        timing: &PumpTiming,
    ) -> PumpStep {
        if !system.is_enabled() {
            return PumpStep {
                stopped: self.force_off(),
                started: false,
            };
        }

        let stopped = self.check_run_duration(now, timing);
        let started = self.try_activate(arm, moisture, now, timing);
        PumpStep { stopped, started }
    }

    /// Rule 1.  Returns `Some` only if the pump was running.
    pub fn force_off(&mut self) -> Option<StopReason> {
        let was_on = self.output.is_on();
        self.output = PumpOutput::Off;
        was_on.then_some(StopReason::SystemDisabled)
    }

    /// Rule 2.
    pub fn check_run_duration(&mut self, now: Tick, timing: &PumpTiming) -> Option<StopReason> {
        if !self.output.is_on() {
            return None;
        }
        let expired = self
            .ticks_since_activation(now)
            .is_some_and(|elapsed| elapsed > timing.run_duration);
        if expired {
            self.output = PumpOutput::Off;
            Some(StopReason::RunDurationElapsed)
        } else {
            None
        }
    }

    /// Rule 3.  Returns `true` if the pump turned on.
    pub fn try_activate(
        &mut self,
        arm: ArmState,
        moisture: u16,
        now: Tick,
        timing: &PumpTiming,
    ) -> bool {
        if self.output.is_on() || !arm.is_armed() || moisture <= timing.dryness_threshold {
            return false;
        }
        let cooled = self
            .ticks_since_activation(now)
            .is_none_or(|elapsed| elapsed > timing.cooldown);
        if !cooled {
            return false;
        }
        self.output = PumpOutput::On;
        self.last_activation = Some(now);
        true
    }

    /// Rebase the activation stamp after the tick counter wraps to zero.
    pub fn reset_epoch(&mut self) {
        self.last_activation = Some(0);
    }

    fn ticks_since_activation(&self, now: Tick) -> Option<Tick> {
        self.last_activation.map(|t| now.saturating_sub(t))
    }

    pub fn id(&self) -> PumpId {
        self.id
    }

    pub fn output(&self) -> PumpOutput {
        self.output
    }

    pub fn last_activation(&self) -> Option<Tick> {
        self.last_activation
    }
}
