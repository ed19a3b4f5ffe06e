//! Control service — the hexagonal core.
//!
//! [`ControlService`] owns the [`ControlContext`] and runs one full control
//! cycle per call to [`tick`](ControlService::tick).  All I/O flows through
//! port traits injected at call sites, so the whole loop is testable with
//! mock adapters.
//!
//! ```text
//!   InputPort ──▶ ┌──────────────────────────┐ ──▶ EventSink
//!                 │      ControlService      │
//!  OutputPort ◀── │ edges · pumps · counter  │
//!                 └──────────────────────────┘
//! ```

use log::{debug, info};

use crate::config::{IrrigatorConfig, Tick};
use crate::control::context::ControlContext;
use crate::control::pump::{PumpOutput, PumpTiming};
use crate::control::{ArmState, Level, PumpId, SystemState};
use crate::error::Result;

use super::events::{ControlEvent, StatusData};
use super::ports::{EventSink, InputPort, InputSample, OutputPort};

pub struct ControlService {
    ctx: ControlContext,
    config: IrrigatorConfig,
    timing: PumpTiming,
}

impl ControlService {
    /// Validate `config` and build the power-on state.
    ///
    /// Does **not** touch hardware — call [`start`](Self::start) next.
    pub fn new(config: IrrigatorConfig) -> Result<Self> {
        config.validate()?;
        let timing = PumpTiming::from_config(&config);
        let ctx = ControlContext::new(config.tick_ceiling);
        Ok(Self {
            ctx,
            config,
            timing,
        })
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Drive both pumps low and seed the edge detectors from a fresh
    /// sample, so buttons held during boot do not register as presses.
    pub fn start(&mut self, hw: &mut (impl InputPort + OutputPort), sink: &mut impl EventSink) {
        for id in PumpId::ALL {
            hw.write_pump(id, Level::Low);
        }
        let sample = hw.sample();
        self.prime(&sample);
        sink.emit(&ControlEvent::Started(self.ctx.system));
        info!("ControlService started ({:?})", self.ctx.system);
    }

    /// Seed the previous button levels without toggling anything.
    pub fn prime(&mut self, sample: &InputSample) {
        self.ctx.system_button.prime(sample.system_button);
        for id in PumpId::ALL {
            self.ctx.pump_buttons[id.index()].prime(sample.pump_buttons[id.index()]);
        }
        self.ctx.moisture = sample.moisture;
    }

    // ── Per-tick orchestration ────────────────────────────────

    /// Run one control cycle: sample → edges → pumps → counter.
    ///
    /// The `hw` parameter satisfies **both** [`InputPort`] and
    /// [`OutputPort`] — one adapter owns every pin.
    pub fn tick(&mut self, hw: &mut (impl InputPort + OutputPort), sink: &mut impl EventSink) {
        let now = self.ctx.ticks.advance();

        // 1. Input sampler
        let sample = hw.sample();
        self.ctx.moisture = sample.moisture;

        // 2. Edge detector
        self.apply_edges(&sample, sink);

        // 3. Pump state machine
        self.update_pumps(now, hw, sink);

        // 4. Periodic status
        let interval = self.config.status_interval_ticks;
        if interval != 0 && now % interval == 0 {
            sink.emit(&ControlEvent::Status(self.status()));
        }

        // 5. Tick counter housekeeping
        if self.ctx.ticks.wrap_if_due() {
            for pump in &mut self.ctx.pumps {
                pump.reset_epoch();
            }
            sink.emit(&ControlEvent::CounterWrapped {
                ceiling: self.ctx.ticks.ceiling(),
            });
        }
    }

    fn apply_edges(&mut self, sample: &InputSample, sink: &mut impl EventSink) {
        if self.ctx.system_button.sample(sample.system_button) {
            self.ctx.system = self.ctx.system.toggled();
            sink.emit(&ControlEvent::SystemToggled(self.ctx.system));
        }

        for id in PumpId::ALL {
            let i = id.index();
            if self.ctx.pump_buttons[i].sample(sample.pump_buttons[i]) {
                self.ctx.arms[i] = self.ctx.arms[i].toggled();
                sink.emit(&ControlEvent::PumpArmToggled {
                    pump: id,
                    state: self.ctx.arms[i],
                });
            }
        }
    }

    fn update_pumps(&mut self, now: Tick, hw: &mut impl OutputPort, sink: &mut impl EventSink) {
        let system = self.ctx.system;

        for pump in &mut self.ctx.pumps {
            let id = pump.id();
            let i = id.index();
            let step = pump.update(
                system,
                self.ctx.arms[i],
                self.ctx.moisture[i],
                now,
                &self.timing,
            );

            // While disabled the output is held low on every tick, not
            // just on the transition.
            if !system.is_enabled() || step.stopped.is_some() {
                hw.write_pump(id, Level::Low);
            }
            if let Some(reason) = step.stopped {
                sink.emit(&ControlEvent::PumpStopped {
                    pump: id,
                    reason,
                    tick: now,
                });
            }

            if step.started {
                hw.write_pump(id, Level::High);
                sink.emit(&ControlEvent::PumpStarted {
                    pump: id,
                    moisture: self.ctx.moisture[i],
                    tick: now,
                });
            }
        }

        debug!(
            "tick {} | moisture={:?} | outputs={:?}",
            now,
            self.ctx.moisture,
            self.ctx.pumps.each_ref().map(|p| p.output()),
        );
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn status(&self) -> StatusData {
        StatusData {
            tick: self.ctx.ticks.current(),
            system: self.ctx.system,
            arms: self.ctx.arms,
            outputs: self.ctx.pumps.each_ref().map(|p| p.output()),
            moisture: self.ctx.moisture,
        }
    }

    pub fn system_state(&self) -> SystemState {
        self.ctx.system
    }

    pub fn arm_state(&self, pump: PumpId) -> ArmState {
        self.ctx.arm(pump)
    }

    pub fn pump_output(&self, pump: PumpId) -> PumpOutput {
        self.ctx.pump(pump).output()
    }

    pub fn last_activation(&self, pump: PumpId) -> Option<Tick> {
        self.ctx.pump(pump).last_activation()
    }

    /// Index of the most recent tick (0 before the first tick and right
    /// after a wrap).
    pub fn tick_count(&self) -> Tick {
        self.ctx.ticks.current()
    }

    pub fn config(&self) -> &IrrigatorConfig {
        &self.config
    }
}
