//! Tick counter wraparound and its effect on pump timing.

use irrigator::app::events::ControlEvent;
use irrigator::app::service::ControlService;
use irrigator::config::IrrigatorConfig;
use irrigator::control::pump::{PumpOutput, StopReason};
use irrigator::control::{Level, PumpId};

use crate::mock_hw::{MockHardware, RecordingSink};

const DRY: u16 = 700;

fn short_ceiling() -> IrrigatorConfig {
    IrrigatorConfig {
        tick_ceiling: 1_000,
        status_interval_ticks: 0,
        ..IrrigatorConfig::default()
    }
}

/// Started service with the system enabled and both pumps armed on tick 1.
fn armed_service(config: IrrigatorConfig) -> (ControlService, MockHardware, RecordingSink) {
    let mut svc = ControlService::new(config).unwrap();
    let mut hw = MockHardware::new();
    let mut sink = RecordingSink::new();
    svc.start(&mut hw, &mut sink);

    hw.set_system_button(Level::Low);
    hw.set_pump_button(PumpId::One, Level::Low);
    hw.set_pump_button(PumpId::Two, Level::Low);
    svc.tick(&mut hw, &mut sink);
    hw.release_all();
    sink.events.clear();
    (svc, hw, sink)
}

fn run_until(svc: &mut ControlService, hw: &mut MockHardware, sink: &mut RecordingSink, t: u32) {
    while svc.tick_count() != t {
        svc.tick(hw, sink);
    }
}

#[test]
fn counter_wraps_to_zero_at_default_ceiling() {
    let mut svc = ControlService::new(IrrigatorConfig::default()).unwrap();
    let mut hw = MockHardware::new();
    let mut sink = RecordingSink::new();
    svc.start(&mut hw, &mut sink);

    for _ in 0..31_999 {
        svc.tick(&mut hw, &mut sink);
    }
    assert_eq!(svc.tick_count(), 31_999);

    svc.tick(&mut hw, &mut sink);
    assert_eq!(svc.tick_count(), 0);
    assert!(
        sink.events
            .contains(&ControlEvent::CounterWrapped { ceiling: 32_000 })
    );

    svc.tick(&mut hw, &mut sink);
    assert_eq!(svc.tick_count(), 1);
}

#[test]
fn wrap_rebases_both_activation_stamps() {
    let (mut svc, mut hw, mut sink) = armed_service(short_ceiling());
    assert_eq!(svc.last_activation(PumpId::Two), None);

    run_until(&mut svc, &mut hw, &mut sink, 999);
    svc.tick(&mut hw, &mut sink);

    assert_eq!(svc.tick_count(), 0);
    assert_eq!(svc.last_activation(PumpId::One), Some(0));
    assert_eq!(svc.last_activation(PumpId::Two), Some(0));
    assert_eq!(
        sink.take(),
        vec![ControlEvent::CounterWrapped { ceiling: 1_000 }]
    );
}

#[test]
fn pump_running_across_wrap_gets_a_full_run_after_it() {
    let (mut svc, mut hw, mut sink) = armed_service(short_ceiling());

    run_until(&mut svc, &mut hw, &mut sink, 949);
    hw.set_moisture(PumpId::One, DRY);
    svc.tick(&mut hw, &mut sink);
    assert_eq!(svc.last_activation(PumpId::One), Some(950));

    run_until(&mut svc, &mut hw, &mut sink, 0);
    assert_eq!(svc.pump_output(PumpId::One), PumpOutput::On);
    sink.events.clear();

    // No spurious shutoff from the rebased stamp.
    for t in 1..=200 {
        svc.tick(&mut hw, &mut sink);
        assert_eq!(svc.pump_output(PumpId::One), PumpOutput::On, "tick {t}");
    }

    svc.tick(&mut hw, &mut sink);
    assert_eq!(svc.tick_count(), 201);
    assert_eq!(svc.pump_output(PumpId::One), PumpOutput::Off);
    assert_eq!(hw.pin(PumpId::One), Level::Low);
    assert_eq!(
        sink.take(),
        vec![ControlEvent::PumpStopped {
            pump: PumpId::One,
            reason: StopReason::RunDurationElapsed,
            tick: 201
        }]
    );

    // Cooldown is measured from the rebased stamp too.
    run_until(&mut svc, &mut hw, &mut sink, 400);
    assert_eq!(svc.pump_output(PumpId::One), PumpOutput::Off);
    svc.tick(&mut hw, &mut sink);
    assert_eq!(svc.pump_output(PumpId::One), PumpOutput::On);
    assert_eq!(svc.last_activation(PumpId::One), Some(401));
}

#[test]
fn pump_that_never_ran_is_held_off_after_wrap() {
    let (mut svc, mut hw, mut sink) = armed_service(short_ceiling());

    run_until(&mut svc, &mut hw, &mut sink, 999);
    svc.tick(&mut hw, &mut sink);
    assert_eq!(svc.tick_count(), 0);

    hw.set_moisture(PumpId::Two, DRY);
    for t in 1..=400 {
        svc.tick(&mut hw, &mut sink);
        assert_eq!(svc.pump_output(PumpId::Two), PumpOutput::Off, "tick {t}");
    }

    svc.tick(&mut hw, &mut sink);
    assert_eq!(svc.tick_count(), 401);
    assert_eq!(svc.pump_output(PumpId::Two), PumpOutput::On);
    assert_eq!(hw.pin(PumpId::Two), Level::High);
}

#[test]
fn wrap_while_disabled_still_rebases() {
    let mut svc = ControlService::new(short_ceiling()).unwrap();
    let mut hw = MockHardware::new();
    let mut sink = RecordingSink::new();
    svc.start(&mut hw, &mut sink);

    run_until(&mut svc, &mut hw, &mut sink, 999);
    svc.tick(&mut hw, &mut sink);
    assert_eq!(svc.tick_count(), 0);
    assert_eq!(svc.last_activation(PumpId::One), Some(0));
    assert_eq!(svc.last_activation(PumpId::Two), Some(0));
}
