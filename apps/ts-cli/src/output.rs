//! Plain-text rendering of engine snapshots.

use ts_engine::{EngineSnapshot, RunRecord};

pub fn print_snapshot(snap: &EngineSnapshot) {
    println!(
        "tick {}  alt {:.0} m  M {:.3}  N_gg {:.0} rpm  N_pt {:.0} rpm  throttle {:.2}  fuel {:.4} kg/s",
        snap.tick,
        snap.altitude_m,
        snap.mach,
        snap.gas_generator_rpm,
        snap.power_turbine_rpm,
        snap.throttle,
        snap.fuel_flow_kg_s
    );
    println!();
    println!(
        "  {:<20} {:>10} {:>11} {:>9} {:>10}",
        "station", "Tt [K]", "pt [kPa]", "c [m/s]", "mdot [kg/s]"
    );
    for (label, st) in snap.stations() {
        let velocity = st
            .velocity_m_s
            .map(|c| format!("{c:.1}"))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "  {:<20} {:>10.1} {:>11.2} {:>9} {:>10.4}",
            label,
            st.total_temperature_k,
            st.total_pressure_pa / 1000.0,
            velocity,
            st.mass_flow_kg_s
        );
    }
    println!();
    println!(
        "  compressor: N_corr {:.0} rpm, pi {:.3}, eta {:.3}, power {:.1} kW",
        snap.compressor_corrected_rpm,
        snap.pressure_ratio,
        snap.compressor_efficiency,
        snap.compressor_power_w / 1000.0
    );
    println!(
        "  combustor:  target {:.1} K, FAR {:.5}",
        snap.combustor_target_temperature_k, snap.fuel_air_ratio
    );
    println!(
        "  turbine:    N_corr {:.0} rpm, eps {:.3}, exit Mach {:.3}, power {:.1} kW",
        snap.turbine_corrected_rpm,
        snap.expansion_ratio,
        snap.turbine_exit_mach,
        snap.turbine_power_w / 1000.0
    );
    println!(
        "  surplus:    {:.1} kW",
        snap.power_surplus_w / 1000.0
    );
    println!(
        "  shaft:      {:.1} kW, {:.1} N·m",
        snap.free_turbine_power_w / 1000.0,
        snap.free_turbine_torque_nm
    );
}

pub fn print_record(record: &RunRecord) {
    println!(
        "{:>8} {:>6} {:>9} {:>8} {:>9} {:>9} {:>10} {:>10}",
        "t [s]", "tick", "fuel", "pi", "T3 [K]", "T4 [K]", "surp [kW]", "shaft [kW]"
    );
    for (t, snap) in record.t.iter().zip(&record.snapshots) {
        println!(
            "{:>8.3} {:>6} {:>9.4} {:>8.3} {:>9.1} {:>9.1} {:>10.2} {:>10.2}",
            t,
            snap.tick,
            snap.fuel_flow_kg_s,
            snap.pressure_ratio,
            snap.combustor_exit.total_temperature_k,
            snap.turbine_exit.total_temperature_k,
            snap.power_surplus_w / 1000.0,
            snap.free_turbine_power_w / 1000.0
        );
    }
}
