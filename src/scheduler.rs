//! Fixed-period tick scheduler.
//!
//! Runs the control body, then blocks for one tick period, forever.  The
//! body's own execution time is not subtracted: tick length is
//! `body + period`, matching a plain polling loop with a trailing delay.
//!
//! ```text
//!  ┌──────────┐    ┌───────────────────┐
//!  │  body()  │──▶ │ delay_ms(period)  │──┐
//!  └──────────┘    └───────────────────┘  │
//!       ▲                                 │
//!       └─────────────────────────────────┘
//! ```
//!
//! The delay is any `embedded-hal` [`DelayNs`]: `FreeRtos` on the board,
//! a recording stub in tests.

use embedded_hal::delay::DelayNs;

use crate::config::IrrigatorConfig;

pub struct TickScheduler<D> {
    delay: D,
    period_ms: u32,
    ticks_run: u64,
}

impl<D: DelayNs> TickScheduler<D> {
    pub fn new(delay: D, period_ms: u32) -> Self {
        Self {
            delay,
            period_ms,
            ticks_run: 0,
        }
    }

    pub fn from_config(delay: D, config: &IrrigatorConfig) -> Self {
        Self::new(delay, config.tick_period_ms)
    }

    /// Run exactly `n` ticks, then return.
    pub fn run_ticks(&mut self, n: u64, mut body: impl FnMut()) {
        for _ in 0..n {
            self.step(&mut body);
        }
    }

    /// Run until power-off.
    pub fn run_forever(&mut self, mut body: impl FnMut()) -> ! {
        loop {
            self.step(&mut body);
        }
    }

    fn step(&mut self, body: &mut impl FnMut()) {
        body();
        self.delay.delay_ms(self.period_ms);
        self.ticks_run = self.ticks_run.wrapping_add(1);
    }

    /// Ticks completed since construction (diagnostic only; wraps at `u64::MAX`).
    pub fn ticks_run(&self) -> u64 {
        self.ticks_run
    }

    pub fn period_ms(&self) -> u32 {
        self.period_ms
    }
}
