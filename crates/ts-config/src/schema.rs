//! Engine configuration schema.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EngineConfig {
    pub version: u32,
    pub name: String,
    pub constants: ConstantsDef,
    pub compressor_map: CompressorMapDef,
    pub turbine_map: TurbineMapDef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuel_schedule: Option<FuelScheduleDef>,
    #[serde(default)]
    pub stages: StagesDef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scenario: Option<ScenarioDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConstantsDef {
    pub combustion_efficiency: f64,
    pub fuel_heating_value_j_per_kg: f64,
    pub cp_gas_j_per_kg_k: f64,
    pub compressor_inlet_area_m2: f64,
    pub compressor_outlet_area_m2: f64,
    pub turbine_exit_area_m2: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompressorMapDef {
    pub speed_rpm: Vec<f64>,
    pub pressure_ratio: Vec<f64>,
    pub efficiency: Vec<f64>,
    pub corrected_mass_flow_kg_s: Vec<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TurbineMapDef {
    pub speed_rpm: Vec<f64>,
    pub expansion_ratio: Vec<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FuelScheduleDef {
    pub throttle: Vec<f64>,
    pub fuel_flow_kg_s: Vec<f64>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TurbineExitPressureDef {
    #[default]
    TemperatureRatio,
    MapExpansion,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StagesDef {
    #[serde(default = "default_intake_recovery")]
    pub intake_recovery: f64,
    #[serde(default = "default_combustor_pressure_loss")]
    pub combustor_pressure_loss: f64,
    #[serde(default = "default_combustor_lag_gain")]
    pub combustor_lag_gain: f64,
    #[serde(default = "default_turbine_efficiency")]
    pub turbine_efficiency: f64,
    #[serde(default)]
    pub turbine_exit_pressure: TurbineExitPressureDef,
    #[serde(default = "default_exhaust_pressure_pa")]
    pub exhaust_pressure_pa: f64,
}

impl Default for StagesDef {
    fn default() -> Self {
        Self {
            intake_recovery: default_intake_recovery(),
            combustor_pressure_loss: default_combustor_pressure_loss(),
            combustor_lag_gain: default_combustor_lag_gain(),
            turbine_efficiency: default_turbine_efficiency(),
            turbine_exit_pressure: TurbineExitPressureDef::default(),
            exhaust_pressure_pa: default_exhaust_pressure_pa(),
        }
    }
}

fn default_intake_recovery() -> f64 {
    ts_components::intake::DEFAULT_PRESSURE_RECOVERY
}

fn default_combustor_pressure_loss() -> f64 {
    ts_components::combustor::DEFAULT_PRESSURE_LOSS
}

fn default_combustor_lag_gain() -> f64 {
    ts_components::combustor::DEFAULT_LAG_GAIN
}

fn default_turbine_efficiency() -> f64 {
    ts_components::turbine::DEFAULT_EFFICIENCY
}

fn default_exhaust_pressure_pa() -> f64 {
    ts_core::units::constants::P_REF_PA
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScenarioDef {
    #[serde(default)]
    pub altitude_m: f64,
    #[serde(default)]
    pub mach: f64,
    pub gas_generator_rpm: f64,
    pub power_turbine_rpm: f64,
    #[serde(default)]
    pub throttle: f64,
    /// Fuel flow; when absent it is read from the fuel schedule at `throttle`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuel_flow_kg_s: Option<f64>,
    #[serde(default = "default_ticks")]
    pub ticks: u64,
    #[serde(default = "default_dt_s")]
    pub dt_s: f64,
    #[serde(default = "default_record_every")]
    pub record_every: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sea_level_temperature_k: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sea_level_pressure_pa: Option<f64>,
}

fn default_ticks() -> u64 {
    100
}

fn default_dt_s() -> f64 {
    0.02
}

fn default_record_every() -> u64 {
    10
}
