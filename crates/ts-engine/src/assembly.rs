//! The assembled gas path.

use crate::atmosphere::Atmosphere;
use crate::error::{EngineError, EngineResult, in_stage};
use crate::inputs::TickInputs;
use crate::phase::SimPhase;
use crate::snapshot::{EngineSnapshot, StationSnapshot};
use tracing::{debug, info, warn};
use ts_components::combustor::{DEFAULT_LAG_GAIN, DEFAULT_PRESSURE_LOSS};
use ts_components::intake::DEFAULT_PRESSURE_RECOVERY;
use ts_components::turbine::DEFAULT_EFFICIENCY;
use ts_components::{
    CombustionChamber, Compressor, FreeTurbine, Intake, Turbine, TurbinePressureMethod,
};
use ts_core::units::Pressure;
use ts_core::units::constants::{RAD_S_TO_RPM, p_ref};
use ts_maps::PerformanceMapStore;

/// Stage parameters fixed at assembly time.
#[derive(Clone, Debug, PartialEq)]
pub struct EngineOptions {
    pub intake_recovery: f64,
    pub combustor_pressure_loss: f64,
    pub combustor_lag_gain: f64,
    pub turbine_efficiency: f64,
    pub turbine_pressure_method: TurbinePressureMethod,
    pub exhaust_pressure: Pressure,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            intake_recovery: DEFAULT_PRESSURE_RECOVERY,
            combustor_pressure_loss: DEFAULT_PRESSURE_LOSS,
            combustor_lag_gain: DEFAULT_LAG_GAIN,
            turbine_efficiency: DEFAULT_EFFICIENCY,
            turbine_pressure_method: TurbinePressureMethod::default(),
            exhaust_pressure: p_ref(),
        }
    }
}

/// Free-turbine turboshaft: intake, compressor, combustor, gas-generator
/// turbine and free turbine, evaluated once per tick in that order.
///
/// The assembly owns its map store and every stage. Each engine instance is
/// independent; nothing is shared between instances.
#[derive(Clone, Debug)]
pub struct EngineAssembly {
    maps: PerformanceMapStore,
    options: EngineOptions,
    intake: Intake,
    compressor: Compressor,
    combustor: CombustionChamber,
    turbine: Turbine,
    free_turbine: FreeTurbine,
    initialized: bool,
    snapshot: EngineSnapshot,
}

impl EngineAssembly {
    /// Build every stage in gas-path order.
    ///
    /// # Errors
    /// Returns error if any stage rejects its parameters.
    pub fn new(maps: PerformanceMapStore, options: EngineOptions) -> EngineResult<Self> {
        let intake =
            Intake::with_pressure_recovery(options.intake_recovery).map_err(in_stage("intake"))?;
        let combustor = CombustionChamber::with_params(
            options.combustor_pressure_loss,
            options.combustor_lag_gain,
        )
        .map_err(in_stage("combustor"))?;
        let turbine = Turbine::new()
            .with_efficiency(options.turbine_efficiency)
            .map_err(in_stage("turbine"))?
            .with_pressure_method(options.turbine_pressure_method);
        let free_turbine = FreeTurbine::with_exhaust_pressure(options.exhaust_pressure)
            .map_err(in_stage("free turbine"))?;

        Ok(Self {
            maps,
            options,
            intake,
            compressor: Compressor::new(),
            combustor,
            turbine,
            free_turbine,
            initialized: false,
            snapshot: EngineSnapshot::default(),
        })
    }

    /// Engine on the built-in reference maps with default stage parameters.
    pub fn reference() -> Self {
        Self::new(PerformanceMapStore::reference(), EngineOptions::default())
            .expect("default engine options are valid")
    }

    /// Reset every stage, including the combustor temperature lag.
    ///
    /// # Errors
    /// Returns error unless `phase` is [`SimPhase::Init`].
    pub fn initialize(&mut self, phase: SimPhase) -> EngineResult<()> {
        if phase != SimPhase::Init {
            return Err(EngineError::WrongPhase {
                operation: "initialize",
                expected: SimPhase::Init,
                actual: phase,
            });
        }
        self.intake.reset();
        self.compressor.reset();
        self.combustor.reset();
        self.turbine.reset();
        self.free_turbine.reset();
        self.snapshot = EngineSnapshot::default();
        self.initialized = true;
        info!(
            compressor_points = self.maps.compressor().len(),
            turbine_points = self.maps.turbine().len(),
            "engine initialized"
        );
        Ok(())
    }

    /// Run the gas path for one tick.
    ///
    /// The atmosphere is queried once. Stages are evaluated on working copies
    /// and committed together, so a failing tick leaves the engine, the
    /// combustor lag and the last snapshot unchanged.
    ///
    /// # Errors
    /// Returns error if `phase` is not [`SimPhase::Running`], the engine has
    /// not been initialised, the inputs are invalid, or a stage fails.
    pub fn update(
        &mut self,
        phase: SimPhase,
        atmosphere: &dyn Atmosphere,
        inputs: &TickInputs,
    ) -> EngineResult<&EngineSnapshot> {
        if phase != SimPhase::Running {
            return Err(EngineError::WrongPhase {
                operation: "update",
                expected: SimPhase::Running,
                actual: phase,
            });
        }
        if !self.initialized {
            return Err(EngineError::NotInitialized);
        }
        inputs.validate()?;

        let ambient = atmosphere.ambient(inputs.altitude);
        let maps = &self.maps;

        let mut intake = self.intake.clone();
        let mut compressor = self.compressor.clone();
        let mut combustor = self.combustor.clone();
        let mut turbine = self.turbine.clone();
        let mut free_turbine = self.free_turbine.clone();

        let face = intake
            .update(ambient.temperature, ambient.pressure, inputs.mach)
            .map_err(in_stage("intake"))?;
        let p2 = compressor
            .update(maps, &face, inputs.gas_generator_speed)
            .map_err(in_stage("compressor"))?;
        let p3 = combustor
            .update(maps, &p2, inputs.fuel_flow)
            .map_err(in_stage("combustor"))?;
        let p4 = turbine
            .update(maps, &p3, inputs.gas_generator_speed)
            .map_err(in_stage("turbine"))?;
        let shaft_power = free_turbine
            .update(maps, &p4, inputs.power_turbine_speed)
            .map_err(in_stage("free turbine"))?;

        let surplus = turbine.power().value - compressor.power().value;
        if surplus < 0.0 {
            warn!(
                turbine_power = turbine.power().value,
                compressor_power = compressor.power().value,
                "gas-generator turbine cannot drive the compressor"
            );
        }

        let tick = self.snapshot.tick + 1;
        let air = p2.mass_flow.value;
        let snapshot = EngineSnapshot {
            tick,
            altitude_m: inputs.altitude.value,
            mach: inputs.mach,
            gas_generator_rpm: inputs.gas_generator_speed.value * RAD_S_TO_RPM,
            power_turbine_rpm: inputs.power_turbine_speed.value * RAD_S_TO_RPM,
            throttle: inputs.throttle,
            fuel_flow_kg_s: inputs.fuel_flow.value,
            freestream: StationSnapshot {
                total_temperature_k: face.total_temperature.value,
                total_pressure_pa: intake.freestream_total_pressure().value,
                velocity_m_s: Some(inputs.mach * ambient.speed_of_sound.value),
                mass_flow_kg_s: air,
            },
            compressor_face: StationSnapshot::from_face(&face, air),
            compressor_exit: StationSnapshot::from_station(&p2),
            combustor_exit: StationSnapshot::from_station(&p3),
            turbine_exit: StationSnapshot::from_station(&p4),
            exhaust: StationSnapshot {
                total_temperature_k: free_turbine.total_temperature().value,
                total_pressure_pa: free_turbine.total_pressure().value,
                velocity_m_s: free_turbine.velocity().map(|c| c.value),
                mass_flow_kg_s: free_turbine.mass_flow().value,
            },
            compressor_corrected_rpm: compressor.corrected_rpm(),
            pressure_ratio: compressor.pressure_ratio(),
            compressor_efficiency: compressor.efficiency(),
            combustor_target_temperature_k: combustor.target_temperature().value,
            fuel_air_ratio: combustor.fuel_air_ratio(),
            turbine_corrected_rpm: turbine.corrected_rpm(),
            expansion_ratio: turbine.expansion_ratio(),
            turbine_exit_mach: turbine.exit_mach(),
            turbine_exit_static_pressure_pa: turbine.exit_static_pressure().value,
            compressor_power_w: compressor.power().value,
            turbine_power_w: turbine.power().value,
            power_surplus_w: surplus,
            free_turbine_power_w: shaft_power.value,
            free_turbine_torque_nm: free_turbine.torque().value,
        };

        debug!(
            tick,
            pressure_ratio = snapshot.pressure_ratio,
            t3 = p3.total_temperature.value,
            p4 = p4.total_pressure.value,
            power_surplus = surplus,
            shaft_power = shaft_power.value,
            "engine tick"
        );

        self.intake = intake;
        self.compressor = compressor;
        self.combustor = combustor;
        self.turbine = turbine;
        self.free_turbine = free_turbine;
        self.snapshot = snapshot;
        Ok(&self.snapshot)
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Successful ticks since the last [`EngineAssembly::initialize`].
    pub fn ticks(&self) -> u64 {
        self.snapshot.tick
    }

    /// Last successful tick, or the zeroed snapshot before the first one.
    pub fn snapshot(&self) -> &EngineSnapshot {
        &self.snapshot
    }

    pub fn maps(&self) -> &PerformanceMapStore {
        &self.maps
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    pub fn intake(&self) -> &Intake {
        &self.intake
    }

    pub fn compressor(&self) -> &Compressor {
        &self.compressor
    }

    pub fn combustor(&self) -> &CombustionChamber {
        &self.combustor
    }

    pub fn turbine(&self) -> &Turbine {
        &self.turbine
    }

    pub fn free_turbine(&self) -> &FreeTurbine {
        &self.free_turbine
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atmosphere::StandardAtmosphere;
    use ts_core::units::{kgps, pa, rpm};

    fn sea_level_inputs(fuel: f64) -> TickInputs {
        TickInputs {
            gas_generator_speed: rpm(24_000.0),
            power_turbine_speed: rpm(20_000.0),
            fuel_flow: kgps(fuel),
            ..TickInputs::default()
        }
    }

    #[test]
    fn default_options_match_reference_engine() {
        let built = EngineAssembly::new(PerformanceMapStore::reference(), EngineOptions::default())
            .unwrap();
        let reference = EngineAssembly::reference();
        assert_eq!(built.options(), reference.options());
        assert_eq!(built.turbine().efficiency(), 0.89);
        assert_eq!(built.combustor().lag_gain(), 0.1);
        assert_eq!(built.intake().pressure_recovery(), 0.96);
        assert_eq!(reference.combustor().pressure_loss(), built.combustor().pressure_loss());
        assert_eq!(
            reference.free_turbine().exhaust_pressure(),
            built.free_turbine().exhaust_pressure()
        );
    }

    #[test]
    fn reference_engine_ticks_like_default_build() {
        let atm = StandardAtmosphere::new();
        let mut built =
            EngineAssembly::new(PerformanceMapStore::reference(), EngineOptions::default())
                .unwrap();
        let mut reference = EngineAssembly::reference();
        built.initialize(SimPhase::Init).unwrap();
        reference.initialize(SimPhase::Init).unwrap();

        let inputs = sea_level_inputs(0.015);
        let a = built.update(SimPhase::Running, &atm, &inputs).unwrap().clone();
        let b = reference.update(SimPhase::Running, &atm, &inputs).unwrap();
        assert_eq!(&a, b);
    }

    #[test]
    fn rejects_bad_options() {
        let options = EngineOptions {
            turbine_efficiency: 0.0,
            ..EngineOptions::default()
        };
        let err = EngineAssembly::new(PerformanceMapStore::reference(), options).unwrap_err();
        assert!(matches!(err, EngineError::Stage { stage: "turbine", .. }));

        let options = EngineOptions {
            exhaust_pressure: pa(-1.0),
            ..EngineOptions::default()
        };
        assert!(EngineAssembly::new(PerformanceMapStore::reference(), options).is_err());
    }

    #[test]
    fn initialize_only_in_init() {
        let mut engine = EngineAssembly::reference();
        let err = engine.initialize(SimPhase::Running).unwrap_err();
        assert_eq!(
            err,
            EngineError::WrongPhase {
                operation: "initialize",
                expected: SimPhase::Init,
                actual: SimPhase::Running,
            }
        );
        assert!(!engine.is_initialized());
        engine.initialize(SimPhase::Init).unwrap();
        assert!(engine.is_initialized());
    }

    #[test]
    fn update_requires_running_and_initialized() {
        let atm = StandardAtmosphere::new();
        let mut engine = EngineAssembly::reference();

        assert_eq!(
            engine
                .update(SimPhase::Running, &atm, &sea_level_inputs(0.015))
                .unwrap_err(),
            EngineError::NotInitialized
        );

        engine.initialize(SimPhase::Init).unwrap();
        for phase in [SimPhase::Idle, SimPhase::Init, SimPhase::Paused, SimPhase::Stopped] {
            assert!(matches!(
                engine.update(phase, &atm, &sea_level_inputs(0.015)),
                Err(EngineError::WrongPhase { .. })
            ));
        }
        assert_eq!(engine.ticks(), 0);
    }

    #[test]
    fn tick_counter_and_reinitialize() {
        let atm = StandardAtmosphere::new();
        let mut engine = EngineAssembly::reference();
        engine.initialize(SimPhase::Init).unwrap();

        for _ in 0..3 {
            engine
                .update(SimPhase::Running, &atm, &sea_level_inputs(0.015))
                .unwrap();
        }
        assert_eq!(engine.ticks(), 3);
        assert!(engine.combustor().is_seeded());

        engine.initialize(SimPhase::Init).unwrap();
        assert_eq!(engine.ticks(), 0);
        assert!(!engine.combustor().is_seeded());
        assert_eq!(*engine.snapshot(), EngineSnapshot::default());
    }
}
