use ts_config::*;

#[test]
fn roundtrip_yaml_reference_config() {
    let config = EngineConfig::reference();
    validate_config(&config).unwrap();

    let path = std::env::temp_dir().join("ts_config_roundtrip_reference.yaml");
    save_yaml(&path, &config).unwrap();
    let loaded = load_yaml(&path).unwrap();

    assert_eq!(config, loaded);
}

#[test]
fn roundtrip_json_with_fuel_schedule() {
    let mut config = EngineConfig::reference();
    config.fuel_schedule = Some(FuelScheduleDef {
        throttle: vec![0.0, 0.5, 1.0],
        fuel_flow_kg_s: vec![0.008, 0.018, 0.035],
    });
    config.stages.turbine_exit_pressure = TurbineExitPressureDef::MapExpansion;
    if let Some(scenario) = config.scenario.as_mut() {
        scenario.fuel_flow_kg_s = None;
        scenario.throttle = 0.5;
    }

    let path = std::env::temp_dir().join("ts_config_roundtrip_schedule.json");
    save_json(&path, &config).unwrap();
    let loaded = load_json(&path).unwrap();

    assert_eq!(config, loaded);
    assert_eq!(loaded.fuel_flow(0.5, None).unwrap(), 0.018);
}

#[test]
fn minimal_yaml_gets_stage_defaults() {
    let yaml = r#"
version: 1
name: minimal
constants:
  combustion_efficiency: 0.96
  fuel_heating_value_j_per_kg: 41868000.0
  cp_gas_j_per_kg_k: 1172.3
  compressor_inlet_area_m2: 0.08
  compressor_outlet_area_m2: 0.006
  turbine_exit_area_m2: 0.03
compressor_map:
  speed_rpm: [20000.0, 40000.0]
  pressure_ratio: [2.0, 5.0]
  efficiency: [0.75, 0.8]
  corrected_mass_flow_kg_s: [0.7, 2.0]
turbine_map:
  speed_rpm: [10000.0, 30000.0]
  expansion_ratio: [1.6, 2.6]
"#;
    let config: EngineConfig = serde_yaml::from_str(yaml).unwrap();
    validate_config(&config).unwrap();

    assert_eq!(config.stages, StagesDef::default());
    assert_eq!(
        config.stages.turbine_exit_pressure,
        TurbineExitPressureDef::TemperatureRatio
    );
    assert!(config.scenario.is_none());
    assert!(config.fuel_schedule.is_none());
}

#[test]
fn bundled_configs_load() {
    let crate_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let root = crate_dir
        .parent()
        .and_then(|p| p.parent())
        .expect("workspace root");

    for rel in ["configs/reference.yaml", "configs/hot_day_scheduled.yaml"] {
        let path = root.join(rel);
        let result = load_yaml(&path);
        assert!(
            result.is_ok(),
            "config failed validation: {} => {:?}",
            path.display(),
            result.err()
        );
    }

    let reference = load_yaml(&root.join("configs/reference.yaml")).unwrap();
    assert_eq!(reference, EngineConfig::reference());
}
