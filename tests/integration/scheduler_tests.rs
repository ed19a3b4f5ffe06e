//! Scheduler driving the control service end to end.

use embedded_hal::delay::DelayNs;

use irrigator::app::service::ControlService;
use irrigator::config::IrrigatorConfig;
use irrigator::control::pump::PumpOutput;
use irrigator::control::{Level, PumpId, SystemState};
use irrigator::scheduler::TickScheduler;

use crate::mock_hw::{MockHardware, RecordingSink};

#[derive(Default)]
struct SimClock {
    elapsed_ns: u64,
}

impl DelayNs for SimClock {
    fn delay_ns(&mut self, ns: u32) {
        self.elapsed_ns += u64::from(ns);
    }
}

#[test]
fn scheduler_ticks_match_service_ticks() {
    let mut svc = ControlService::new(IrrigatorConfig::default()).unwrap();
    let mut hw = MockHardware::new();
    let mut sink = RecordingSink::new();
    svc.start(&mut hw, &mut sink);

    let mut clock = SimClock::default();
    let mut sched = TickScheduler::from_config(&mut clock, svc.config());
    assert_eq!(sched.period_ms(), 50);
    sched.run_ticks(120, || svc.tick(&mut hw, &mut sink));

    assert_eq!(sched.ticks_run(), 120);
    assert_eq!(svc.tick_count(), 120);
    drop(sched);
    // 120 ticks × 50 ms = 6 s of simulated time.
    assert_eq!(clock.elapsed_ns, 6_000_000_000);
}

#[test]
fn ten_second_run_at_default_period() {
    let config = IrrigatorConfig::default();
    let mut svc = ControlService::new(config.clone()).unwrap();
    let mut hw = MockHardware::new();
    let mut sink = RecordingSink::new();
    svc.start(&mut hw, &mut sink);

    hw.set_moisture(PumpId::One, 900);
    hw.set_system_button(Level::Low);
    hw.set_pump_button(PumpId::One, Level::Low);

    let mut clock = SimClock::default();
    let mut sched = TickScheduler::from_config(&mut clock, &config);
    sched.run_ticks(1, || svc.tick(&mut hw, &mut sink));
    hw.release_all();

    assert_eq!(svc.system_state(), SystemState::Enabled);
    assert_eq!(svc.pump_output(PumpId::One), PumpOutput::On);

    // The default run duration is 200 ticks, ten seconds at 50 ms.  The
    // pump is still on 200 ticks after activation and off on the next.
    sched.run_ticks(200, || svc.tick(&mut hw, &mut sink));
    assert_eq!(svc.tick_count(), 201);
    assert_eq!(svc.pump_output(PumpId::One), PumpOutput::On);

    sched.run_ticks(1, || svc.tick(&mut hw, &mut sink));
    assert_eq!(svc.pump_output(PumpId::One), PumpOutput::Off);
    assert_eq!(
        config.tick_period() * svc.tick_count(),
        std::time::Duration::from_millis(10_100)
    );
}

#[test]
fn custom_period_is_honoured() {
    let config = IrrigatorConfig {
        tick_period_ms: 10,
        ..IrrigatorConfig::default()
    };
    let mut clock = SimClock::default();
    let mut sched = TickScheduler::from_config(&mut clock, &config);
    let mut bodies = 0u32;
    sched.run_ticks(4, || bodies += 1);
    drop(sched);

    assert_eq!(bodies, 4);
    assert_eq!(clock.elapsed_ns, 40_000_000);
}
