//! Conversion from configuration into engine objects.

use crate::schema::{
    CompressorMapDef, ConstantsDef, EngineConfig, ScenarioDef, StagesDef, TurbineExitPressureDef,
    TurbineMapDef,
};
use crate::{ConfigError, ConfigResult};
use ts_components::TurbinePressureMethod;
use ts_core::units::{k, kgps, m, m2, pa, rpm};
use ts_engine::{EngineAssembly, EngineOptions, RunOptions, StandardAtmosphere, TickInputs};
use ts_maps::reference::{
    COMPRESSOR_EFFICIENCY, COMPRESSOR_MASS_FLOW_KGPS, COMPRESSOR_PRESSURE_RATIO,
    COMPRESSOR_SPEED_RPM, TURBINE_EXPANSION_RATIO, TURBINE_SPEED_RPM,
};
use ts_maps::{
    CompressorMap, FuelSchedule, GasPathConstants, MapResult, PerformanceMapStore, TurbineMap,
};

/// Build the map store through the validating `ts-maps` constructors.
pub fn build_store(config: &EngineConfig) -> MapResult<PerformanceMapStore> {
    let c = &config.constants;
    let constants = GasPathConstants {
        combustion_efficiency: c.combustion_efficiency,
        fuel_heating_value: c.fuel_heating_value_j_per_kg,
        cp_gas: c.cp_gas_j_per_kg_k,
        compressor_inlet_area: m2(c.compressor_inlet_area_m2),
        compressor_outlet_area: m2(c.compressor_outlet_area_m2),
        turbine_exit_area: m2(c.turbine_exit_area_m2),
    };
    let cm = &config.compressor_map;
    let compressor = CompressorMap::new(
        cm.speed_rpm.clone(),
        cm.pressure_ratio.clone(),
        cm.efficiency.clone(),
        cm.corrected_mass_flow_kg_s.clone(),
    )?;
    let turbine = TurbineMap::new(
        config.turbine_map.speed_rpm.clone(),
        config.turbine_map.expansion_ratio.clone(),
    )?;

    let store = PerformanceMapStore::new(compressor, turbine, constants)?;
    match &config.fuel_schedule {
        Some(fs) => {
            let schedule = FuelSchedule::new(fs.throttle.clone(), fs.fuel_flow_kg_s.clone())?;
            Ok(store.with_fuel_schedule(schedule))
        }
        None => Ok(store),
    }
}

pub fn engine_options(stages: &StagesDef) -> EngineOptions {
    EngineOptions {
        intake_recovery: stages.intake_recovery,
        combustor_pressure_loss: stages.combustor_pressure_loss,
        combustor_lag_gain: stages.combustor_lag_gain,
        turbine_efficiency: stages.turbine_efficiency,
        turbine_pressure_method: match stages.turbine_exit_pressure {
            TurbineExitPressureDef::TemperatureRatio => TurbinePressureMethod::TemperatureRatio,
            TurbineExitPressureDef::MapExpansion => TurbinePressureMethod::MapExpansion,
        },
        exhaust_pressure: pa(stages.exhaust_pressure_pa),
    }
}

impl EngineConfig {
    /// The built-in reference engine with a sea-level demonstration scenario.
    pub fn reference() -> Self {
        let constants = GasPathConstants::reference();
        Self {
            version: crate::validate::LATEST_VERSION,
            name: "reference turboshaft".to_string(),
            constants: ConstantsDef {
                combustion_efficiency: constants.combustion_efficiency,
                fuel_heating_value_j_per_kg: constants.fuel_heating_value,
                cp_gas_j_per_kg_k: constants.cp_gas,
                compressor_inlet_area_m2: constants.compressor_inlet_area.value,
                compressor_outlet_area_m2: constants.compressor_outlet_area.value,
                turbine_exit_area_m2: constants.turbine_exit_area.value,
            },
            compressor_map: CompressorMapDef {
                speed_rpm: COMPRESSOR_SPEED_RPM.to_vec(),
                pressure_ratio: COMPRESSOR_PRESSURE_RATIO.to_vec(),
                efficiency: COMPRESSOR_EFFICIENCY.to_vec(),
                corrected_mass_flow_kg_s: COMPRESSOR_MASS_FLOW_KGPS.to_vec(),
            },
            turbine_map: TurbineMapDef {
                speed_rpm: TURBINE_SPEED_RPM.to_vec(),
                expansion_ratio: TURBINE_EXPANSION_RATIO.to_vec(),
            },
            fuel_schedule: None,
            stages: StagesDef::default(),
            scenario: Some(ScenarioDef {
                altitude_m: 0.0,
                mach: 0.0,
                gas_generator_rpm: COMPRESSOR_SPEED_RPM[0],
                power_turbine_rpm: 20_000.0,
                throttle: 0.0,
                fuel_flow_kg_s: Some(0.015),
                ticks: 100,
                dt_s: 0.02,
                record_every: 10,
                sea_level_temperature_k: None,
                sea_level_pressure_pa: None,
            }),
        }
    }

    pub fn to_store(&self) -> ConfigResult<PerformanceMapStore> {
        Ok(build_store(self)?)
    }

    pub fn engine_options(&self) -> EngineOptions {
        engine_options(&self.stages)
    }

    /// Assemble an (uninitialised) engine from this configuration.
    pub fn build_engine(&self) -> ConfigResult<EngineAssembly> {
        let store = self.to_store()?;
        Ok(EngineAssembly::new(store, self.engine_options())?)
    }

    /// Fuel flow for a tick: `explicit` wins, otherwise the fuel schedule is
    /// read at `throttle`.
    ///
    /// # Errors
    /// [`ConfigError::MissingFuelFlow`] when neither is available.
    pub fn fuel_flow(&self, throttle: f64, explicit: Option<f64>) -> ConfigResult<f64> {
        if let Some(q) = explicit {
            return Ok(q);
        }
        match &self.fuel_schedule {
            Some(fs) => {
                let schedule = FuelSchedule::new(fs.throttle.clone(), fs.fuel_flow_kg_s.clone())?;
                Ok(schedule.fuel_flow(throttle))
            }
            None => Err(ConfigError::MissingFuelFlow),
        }
    }
}

impl ScenarioDef {
    pub fn tick_inputs(&self, fuel_flow_kg_s: f64) -> TickInputs {
        TickInputs {
            altitude: m(self.altitude_m),
            mach: self.mach,
            gas_generator_speed: rpm(self.gas_generator_rpm),
            power_turbine_speed: rpm(self.power_turbine_rpm),
            throttle: self.throttle,
            fuel_flow: kgps(fuel_flow_kg_s),
        }
    }

    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            ticks: self.ticks,
            dt: self.dt_s,
            record_every: self.record_every,
        }
    }

    /// Standard atmosphere, shifted to the scenario's sea-level state if given.
    pub fn atmosphere(&self) -> ConfigResult<StandardAtmosphere> {
        match (self.sea_level_temperature_k, self.sea_level_pressure_pa) {
            (None, None) => Ok(StandardAtmosphere::new()),
            (t0, p0) => {
                let standard = StandardAtmosphere::new();
                let t0 = t0.map(k).unwrap_or(standard.sea_level_temperature());
                let p0 = p0.map(pa).unwrap_or(standard.sea_level_pressure());
                Ok(StandardAtmosphere::with_sea_level(t0, p0)?)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FuelScheduleDef;

    #[test]
    fn reference_config_builds_reference_store() {
        let store = EngineConfig::reference().to_store().unwrap();
        assert_eq!(store, PerformanceMapStore::reference());
    }

    #[test]
    fn default_stages_give_default_options() {
        assert_eq!(
            EngineConfig::reference().engine_options(),
            EngineOptions::default()
        );
    }

    #[test]
    fn fuel_flow_resolution() {
        let mut config = EngineConfig::reference();
        assert_eq!(config.fuel_flow(0.5, Some(0.02)).unwrap(), 0.02);
        assert!(matches!(
            config.fuel_flow(0.5, None),
            Err(ConfigError::MissingFuelFlow)
        ));

        config.fuel_schedule = Some(FuelScheduleDef {
            throttle: vec![0.0, 1.0],
            fuel_flow_kg_s: vec![0.01, 0.03],
        });
        assert!((config.fuel_flow(0.5, None).unwrap() - 0.02).abs() < 1e-15);
        assert!(config.to_store().unwrap().fuel_schedule().is_some());
    }

    #[test]
    fn scenario_conversion() {
        let config = EngineConfig::reference();
        let scenario = config.scenario.as_ref().unwrap();
        let inputs = scenario.tick_inputs(0.015);
        assert!((inputs.gas_generator_speed.value - rpm(24_000.0).value).abs() < 1e-12);
        assert_eq!(inputs.fuel_flow.value, 0.015);
        assert_eq!(scenario.run_options().record_every, 10);
        assert_eq!(scenario.atmosphere().unwrap(), StandardAtmosphere::new());
    }

    #[test]
    fn hot_day_scenario_atmosphere() {
        let mut scenario = EngineConfig::reference().scenario.unwrap();
        scenario.sea_level_temperature_k = Some(308.15);
        let atm = scenario.atmosphere().unwrap();
        assert_eq!(atm.sea_level_temperature().value, 308.15);
        assert_eq!(atm.sea_level_pressure().value, 101_325.0);
    }
}
