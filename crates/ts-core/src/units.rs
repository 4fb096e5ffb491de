// ts-core/src/units.rs

use uom::si::f64::{
    AngularVelocity as UomAngularVelocity, Area as UomArea, Length as UomLength,
    MassDensity as UomMassDensity, MassRate as UomMassRate, Power as UomPower,
    Pressure as UomPressure, ThermodynamicTemperature as UomThermodynamicTemperature,
    Torque as UomTorque, Velocity as UomVelocity,
};

// Public canonical unit types (SI, f64)
pub type AngVel = UomAngularVelocity;
pub type Area = UomArea;
pub type Length = UomLength;
pub type Density = UomMassDensity;
pub type MassRate = UomMassRate;
pub type Power = UomPower;
pub type Pressure = UomPressure;
pub type Temperature = UomThermodynamicTemperature;
pub type Torque = UomTorque;
pub type Velocity = UomVelocity;

#[inline]
pub fn pa(v: f64) -> Pressure {
    use uom::si::pressure::pascal;
    Pressure::new::<pascal>(v)
}

#[inline]
pub fn k(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::kelvin;
    Temperature::new::<kelvin>(v)
}

#[inline]
pub fn kgps(v: f64) -> MassRate {
    use uom::si::mass_rate::kilogram_per_second;
    MassRate::new::<kilogram_per_second>(v)
}

#[inline]
pub fn kgpm3(v: f64) -> Density {
    use uom::si::mass_density::kilogram_per_cubic_meter;
    Density::new::<kilogram_per_cubic_meter>(v)
}

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn m2(v: f64) -> Area {
    use uom::si::area::square_meter;
    Area::new::<square_meter>(v)
}

#[inline]
pub fn mps(v: f64) -> Velocity {
    use uom::si::velocity::meter_per_second;
    Velocity::new::<meter_per_second>(v)
}

#[inline]
pub fn rad_s(v: f64) -> AngVel {
    use uom::si::angular_velocity::radian_per_second;
    AngVel::new::<radian_per_second>(v)
}

/// Shaft speed from revolutions per minute.
#[inline]
pub fn rpm(v: f64) -> AngVel {
    rad_s(v * constants::RPM_TO_RAD_S)
}

#[inline]
pub fn watt(v: f64) -> Power {
    use uom::si::power::watt;
    Power::new::<watt>(v)
}

#[inline]
pub fn nm(v: f64) -> Torque {
    use uom::si::torque::newton_meter;
    Torque::new::<newton_meter>(v)
}

/// Gas properties and reference conditions shared by every stage.
pub mod constants {
    use super::*;

    /// Ratio of specific heats for air.
    pub const GAMMA_AIR: f64 = 1.4;
    /// Ratio of specific heats for combustion products.
    pub const GAMMA_GAS: f64 = 1.33;
    /// Gas constant for air (J/kg/K).
    pub const R_AIR: f64 = 287.14;
    /// Gas constant for combustion products (J/kg/K).
    pub const R_GAS: f64 = 287.43;
    /// Reference (ISA sea level) pressure (Pa).
    pub const P_REF_PA: f64 = 101_325.0;
    /// Reference (ISA sea level) temperature (K).
    pub const T_REF_K: f64 = 288.15;
    /// Reference (ISA sea level) density (kg/m³).
    pub const RHO_REF_KGPM3: f64 = 1.2255;

    pub const RAD_S_TO_RPM: f64 = 30.0 / std::f64::consts::PI;
    pub const RPM_TO_RAD_S: f64 = std::f64::consts::PI / 30.0;

    /// Specific heat at constant pressure for air, `γR/(γ-1)` (J/kg/K).
    pub const CP_AIR: f64 = GAMMA_AIR * R_AIR / (GAMMA_AIR - 1.0);

    #[inline]
    pub fn p_ref() -> Pressure {
        pa(P_REF_PA)
    }
}
