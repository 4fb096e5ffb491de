//! Configuration validation.

use crate::schema::{EngineConfig, ScenarioDef, StagesDef};
use ts_maps::MapError;

pub const LATEST_VERSION: u32 = 1;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid table: {0}")]
    Table(#[from] MapError),
}

/// Check everything the engine would reject, without building it.
pub fn validate_config(config: &EngineConfig) -> Result<(), ValidationError> {
    if config.version == 0 || config.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: config.version,
        });
    }

    // tables and constants go through the same constructors the engine uses
    crate::convert::build_store(config)?;

    validate_stages(&config.stages)?;
    if let Some(scenario) = &config.scenario {
        validate_scenario(scenario)?;
    }
    Ok(())
}

fn validate_stages(stages: &StagesDef) -> Result<(), ValidationError> {
    unit_interval("stages.intake_recovery", stages.intake_recovery)?;
    unit_interval(
        "stages.combustor_pressure_loss",
        stages.combustor_pressure_loss,
    )?;
    unit_interval("stages.combustor_lag_gain", stages.combustor_lag_gain)?;
    unit_interval("stages.turbine_efficiency", stages.turbine_efficiency)?;
    positive("stages.exhaust_pressure_pa", stages.exhaust_pressure_pa)?;
    Ok(())
}

fn validate_scenario(scenario: &ScenarioDef) -> Result<(), ValidationError> {
    finite("scenario.altitude_m", scenario.altitude_m)?;
    non_negative("scenario.mach", scenario.mach)?;
    non_negative("scenario.gas_generator_rpm", scenario.gas_generator_rpm)?;
    non_negative("scenario.power_turbine_rpm", scenario.power_turbine_rpm)?;
    if !(0.0..=1.0).contains(&scenario.throttle) {
        return Err(invalid(
            "scenario.throttle",
            scenario.throttle,
            "must be in [0, 1]",
        ));
    }
    if let Some(fuel) = scenario.fuel_flow_kg_s {
        non_negative("scenario.fuel_flow_kg_s", fuel)?;
    }
    positive("scenario.dt_s", scenario.dt_s)?;
    if scenario.record_every == 0 {
        return Err(invalid(
            "scenario.record_every",
            scenario.record_every,
            "must be positive",
        ));
    }
    if let Some(t0) = scenario.sea_level_temperature_k {
        positive("scenario.sea_level_temperature_k", t0)?;
    }
    if let Some(p0) = scenario.sea_level_pressure_pa {
        positive("scenario.sea_level_pressure_pa", p0)?;
    }
    // the lapse rate must leave a positive temperature at the tropopause
    if let Err(err) = scenario.atmosphere() {
        return Err(invalid(
            "scenario.sea_level_temperature_k",
            scenario.sea_level_temperature_k.unwrap_or_default(),
            &err.to_string(),
        ));
    }
    Ok(())
}

fn invalid(field: &str, value: impl ToString, reason: &str) -> ValidationError {
    ValidationError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

fn finite(field: &str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(invalid(field, value, "must be finite"))
    }
}

fn positive(field: &str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid(field, value, "must be positive"))
    }
}

fn non_negative(field: &str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(invalid(field, value, "must be non-negative"))
    }
}

fn unit_interval(field: &str, value: f64) -> Result<(), ValidationError> {
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(invalid(field, value, "must be in (0, 1]"))
    }
}
