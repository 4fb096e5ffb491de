//! Integration tests: full gas path on the reference maps.

use ts_core::numeric::{Tolerances, nearly_equal};
use ts_core::units::{kgps, m, rpm};
use ts_engine::{
    EngineAssembly, EngineError, RunOptions, SimPhase, StandardAtmosphere, TickInputs, run_ticks,
};

fn inputs(fuel: f64) -> TickInputs {
    TickInputs {
        altitude: m(0.0),
        mach: 0.0,
        gas_generator_speed: rpm(24_000.0),
        power_turbine_speed: rpm(20_000.0),
        throttle: 0.0,
        fuel_flow: kgps(fuel),
    }
}

fn ready_engine() -> EngineAssembly {
    let mut engine = EngineAssembly::reference();
    engine.initialize(SimPhase::Init).unwrap();
    engine
}

#[test]
fn sea_level_reference_point() {
    let atm = StandardAtmosphere::new();
    let mut engine = ready_engine();

    let snap = engine
        .update(SimPhase::Running, &atm, &inputs(0.015))
        .unwrap()
        .clone();

    let tol = Tolerances::default();
    assert!(nearly_equal(snap.pressure_ratio, 2.2, tol));
    assert!(nearly_equal(snap.compressor_corrected_rpm, 24_000.0, tol));
    assert!(nearly_equal(
        snap.compressor_face.total_pressure_pa,
        0.96 * 101_325.0,
        tol
    ));
    assert!(
        snap.free_turbine_power_w > 0.0,
        "free turbine should deliver power, got {}",
        snap.free_turbine_power_w
    );
    assert!(snap.power_surplus_w > 0.0);
    assert!(snap.combustor_exit.total_temperature_k > 1000.0);
    assert!(snap.turbine_exit.total_pressure_pa > 101_325.0);
    assert_eq!(snap.exhaust.total_pressure_pa, 101_325.0);
    assert_eq!(snap.tick, 1);
}

#[test]
fn settled_updates_are_idempotent() {
    let atm = StandardAtmosphere::new();
    let mut engine = ready_engine();

    engine.update(SimPhase::Running, &atm, &inputs(0.015)).unwrap();
    let mut first = engine
        .update(SimPhase::Running, &atm, &inputs(0.015))
        .unwrap()
        .clone();
    let second = engine
        .update(SimPhase::Running, &atm, &inputs(0.015))
        .unwrap()
        .clone();

    assert_eq!(second.tick, first.tick + 1);
    first.tick = second.tick;
    assert_eq!(first, second);
}

#[test]
fn failed_tick_holds_last_state() {
    let atm = StandardAtmosphere::new();
    let mut held = ready_engine();
    let mut clean = ready_engine();

    held.update(SimPhase::Running, &atm, &inputs(0.0)).unwrap();
    clean.update(SimPhase::Running, &atm, &inputs(0.0)).unwrap();
    let before = held.snapshot().clone();

    let err = held
        .update(SimPhase::Running, &atm, &inputs(-0.01))
        .unwrap_err();
    assert!(matches!(
        err,
        EngineError::Stage {
            stage: "combustor",
            ..
        }
    ));
    assert_eq!(*held.snapshot(), before);
    assert_eq!(held.ticks(), 1);

    let a = held
        .update(SimPhase::Running, &atm, &inputs(0.015))
        .unwrap()
        .clone();
    let b = clean
        .update(SimPhase::Running, &atm, &inputs(0.015))
        .unwrap()
        .clone();
    assert_eq!(a, b);
}

#[test]
fn engines_do_not_share_combustor_state() {
    let atm = StandardAtmosphere::new();
    let mut a = ready_engine();
    let mut b = ready_engine();

    a.update(SimPhase::Running, &atm, &inputs(0.0)).unwrap();
    a.update(SimPhase::Running, &atm, &inputs(0.015)).unwrap();
    b.update(SimPhase::Running, &atm, &inputs(0.015)).unwrap();

    // b seeds straight to the target; a is still lagging from the cold tick
    assert!(
        a.snapshot().combustor_exit.total_temperature_k
            < b.snapshot().combustor_exit.total_temperature_k
    );
    assert_eq!(
        b.snapshot().combustor_exit.total_temperature_k,
        b.snapshot().combustor_target_temperature_k
    );
}

#[test]
fn altitude_reduces_mass_flow() {
    let atm = StandardAtmosphere::new();
    let mut low = ready_engine();
    let mut high = ready_engine();

    low.update(SimPhase::Running, &atm, &inputs(0.015)).unwrap();
    let high_inputs = TickInputs {
        altitude: m(5_000.0),
        ..inputs(0.015)
    };
    high.update(SimPhase::Running, &atm, &high_inputs).unwrap();

    assert!(
        high.snapshot().compressor_exit.mass_flow_kg_s
            < low.snapshot().compressor_exit.mass_flow_kg_s
    );
    // colder inlet reads a higher corrected speed
    assert!(high.snapshot().compressor_corrected_rpm > low.snapshot().compressor_corrected_rpm);
}

#[test]
fn fuel_step_run_settles_monotonically() {
    let atm = StandardAtmosphere::new();
    let mut engine = EngineAssembly::reference();
    let opts = RunOptions {
        ticks: 200,
        dt: 0.02,
        record_every: 10,
    };

    let record = run_ticks(
        &mut engine,
        &atm,
        |tick, _| inputs(if tick == 1 { 0.0 } else { 0.015 }),
        &opts,
    )
    .unwrap();

    assert_eq!(record.len(), 20);
    assert_eq!(record.t.len(), record.snapshots.len());
    assert!((record.t[0] - 0.2).abs() < 1e-12);

    let temps: Vec<f64> = record
        .snapshots
        .iter()
        .map(|s| s.combustor_exit.total_temperature_k)
        .collect();
    assert!(temps.windows(2).all(|w| w[1] >= w[0]));

    let last = record.last().unwrap();
    assert_eq!(last.tick, 200);
    assert!((last.combustor_exit.total_temperature_k - last.combustor_target_temperature_k).abs() < 1e-6);
    assert!(last.free_turbine_power_w > 0.0);
}

#[test]
fn snapshot_serialises_to_json() {
    let atm = StandardAtmosphere::new();
    let mut engine = ready_engine();
    let snap = engine
        .update(SimPhase::Running, &atm, &inputs(0.015))
        .unwrap();

    let json = serde_json::to_value(snap).unwrap();
    assert!(json["combustor_exit"]["total_temperature_k"].as_f64().unwrap() > 1000.0);
    assert!(json["exhaust"]["velocity_m_s"].is_null());
}
