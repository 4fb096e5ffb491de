use ts_config::*;
use ts_maps::MapError;

#[test]
fn rejects_unknown_version() {
    let mut config = EngineConfig::reference();
    config.version = 7;
    assert!(matches!(
        validate_config(&config),
        Err(ValidationError::UnsupportedVersion { version: 7 })
    ));
}

#[test]
fn rejects_non_monotonic_axis() {
    let mut config = EngineConfig::reference();
    config.compressor_map.speed_rpm.swap(2, 3);
    assert!(matches!(
        validate_config(&config),
        Err(ValidationError::Table(MapError::NotIncreasing { .. }))
    ));
}

#[test]
fn rejects_short_and_mismatched_tables() {
    let mut config = EngineConfig::reference();
    config.turbine_map.speed_rpm.truncate(1);
    config.turbine_map.expansion_ratio.truncate(1);
    assert!(matches!(
        validate_config(&config),
        Err(ValidationError::Table(MapError::TooShort { .. }))
    ));

    let mut config = EngineConfig::reference();
    config.compressor_map.efficiency.pop();
    assert!(matches!(
        validate_config(&config),
        Err(ValidationError::Table(MapError::LengthMismatch { .. }))
    ));
}

#[test]
fn rejects_zero_efficiency_entry() {
    let mut config = EngineConfig::reference();
    config.compressor_map.efficiency[0] = 0.0;
    assert!(validate_config(&config).is_err());
}

#[test]
fn rejects_bad_constants_and_stages() {
    let mut config = EngineConfig::reference();
    config.constants.turbine_exit_area_m2 = 0.0;
    assert!(matches!(
        validate_config(&config),
        Err(ValidationError::Table(MapError::InvalidConstant { .. }))
    ));

    let mut config = EngineConfig::reference();
    config.stages.combustor_lag_gain = 0.0;
    let err = validate_config(&config).unwrap_err();
    assert!(err.to_string().contains("combustor_lag_gain"));
}

#[test]
fn rejects_bad_scenario() {
    let mut config = EngineConfig::reference();
    if let Some(s) = config.scenario.as_mut() {
        s.throttle = 1.2;
    }
    let err = validate_config(&config).unwrap_err();
    assert!(err.to_string().contains("scenario.throttle"));

    let mut config = EngineConfig::reference();
    if let Some(s) = config.scenario.as_mut() {
        s.record_every = 0;
    }
    assert!(validate_config(&config).is_err());
}

#[test]
fn rejects_sea_level_temperature_too_cold_for_lapse_rate() {
    let mut config = EngineConfig::reference();
    if let Some(s) = config.scenario.as_mut() {
        s.sea_level_temperature_k = Some(60.0);
    }
    let err = validate_config(&config).unwrap_err();
    assert!(err.to_string().contains("scenario.sea_level_temperature_k"));
    assert!(err.to_string().contains("lapse rate"));

    // 71.5 K is lost up to the tropopause, so a cold but positive day passes
    let mut config = EngineConfig::reference();
    if let Some(s) = config.scenario.as_mut() {
        s.sea_level_temperature_k = Some(200.0);
    }
    assert!(validate_config(&config).is_ok());
    let scenario = config.scenario.as_ref().unwrap();
    assert!(scenario.atmosphere().is_ok());
}

#[test]
fn reference_config_builds_a_running_engine() {
    use ts_engine::{SimPhase, StandardAtmosphere};

    let config = EngineConfig::reference();
    let scenario = config.scenario.clone().unwrap();
    let mut engine = config.build_engine().unwrap();
    engine.initialize(SimPhase::Init).unwrap();

    let fuel = config
        .fuel_flow(scenario.throttle, scenario.fuel_flow_kg_s)
        .unwrap();
    let snap = engine
        .update(
            SimPhase::Running,
            &StandardAtmosphere::new(),
            &scenario.tick_inputs(fuel),
        )
        .unwrap();
    assert!(snap.free_turbine_power_w > 0.0);
}
