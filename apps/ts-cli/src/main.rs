mod error;
mod output;

use clap::{Parser, Subcommand};
use error::{CliError, CliResult};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;
use ts_config::{EngineConfig, ScenarioDef, load_json, load_yaml, save_yaml};
use ts_engine::{RunOptions, run_ticks};

/// Ticks used to let the combustor lag settle for a single operating point.
const SETTLE_TICKS: u64 = 300;

#[derive(Parser)]
#[command(name = "ts-cli")]
#[command(about = "Turboshaft gas-path model - operating points and tick runs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate an engine configuration file
    Validate {
        /// Path to the engine YAML (or .json) file
        config_path: PathBuf,
    },
    /// Compute one settled operating point
    Point {
        /// Engine config (defaults to the built-in reference engine)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Pressure altitude in metres
        #[arg(long, default_value_t = 0.0)]
        altitude: f64,
        /// Flight Mach number
        #[arg(long, default_value_t = 0.0)]
        mach: f64,
        /// Gas-generator shaft speed in rpm
        #[arg(long)]
        gas_generator_rpm: f64,
        /// Power-turbine shaft speed in rpm
        #[arg(long)]
        power_turbine_rpm: f64,
        /// Throttle position in [0, 1]
        #[arg(long, default_value_t = 0.0)]
        throttle: f64,
        /// Fuel flow in kg/s (otherwise read from the config's fuel schedule)
        #[arg(long)]
        fuel_flow: Option<f64>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Run the config's scenario block
    Run {
        /// Engine config (defaults to the built-in reference engine)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Override the number of ticks
        #[arg(long)]
        ticks: Option<u64>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Write the built-in reference configuration
    ReferenceConfig {
        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> CliResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { config_path } => cmd_validate(&config_path),
        Commands::Point {
            config,
            altitude,
            mach,
            gas_generator_rpm,
            power_turbine_rpm,
            throttle,
            fuel_flow,
            json,
        } => {
            let scenario = ScenarioDef {
                altitude_m: altitude,
                mach,
                gas_generator_rpm,
                power_turbine_rpm,
                throttle,
                fuel_flow_kg_s: fuel_flow,
                ticks: SETTLE_TICKS,
                dt_s: 0.02,
                record_every: SETTLE_TICKS,
                sea_level_temperature_k: None,
                sea_level_pressure_pa: None,
            };
            cmd_point(config.as_deref(), scenario, json)
        }
        Commands::Run {
            config,
            ticks,
            json,
        } => cmd_run(config.as_deref(), ticks, json),
        Commands::ReferenceConfig { output } => cmd_reference_config(output.as_deref()),
    }
}

fn load_config(path: &Path) -> CliResult<EngineConfig> {
    let config = match path.extension().and_then(|e| e.to_str()) {
        Some("json") => load_json(path)?,
        _ => load_yaml(path)?,
    };
    Ok(config)
}

fn config_or_reference(path: Option<&Path>) -> CliResult<EngineConfig> {
    match path {
        Some(p) => load_config(p),
        None => Ok(EngineConfig::reference()),
    }
}

fn cmd_validate(config_path: &Path) -> CliResult<()> {
    println!("Validating config: {}", config_path.display());
    let config = load_config(config_path)?;
    println!("✓ Config is valid");
    println!("  Name: {}", config.name);
    println!(
        "  Compressor map: {} points, {:.0}-{:.0} rpm",
        config.compressor_map.speed_rpm.len(),
        config.compressor_map.speed_rpm.first().copied().unwrap_or_default(),
        config.compressor_map.speed_rpm.last().copied().unwrap_or_default()
    );
    println!(
        "  Turbine map: {} points, {:.0}-{:.0} rpm",
        config.turbine_map.speed_rpm.len(),
        config.turbine_map.speed_rpm.first().copied().unwrap_or_default(),
        config.turbine_map.speed_rpm.last().copied().unwrap_or_default()
    );
    match &config.fuel_schedule {
        Some(fs) => println!("  Fuel schedule: {} points", fs.throttle.len()),
        None => println!("  Fuel schedule: none"),
    }
    match &config.scenario {
        Some(s) => println!("  Scenario: {} ticks of {:.3} s", s.ticks, s.dt_s),
        None => println!("  Scenario: none"),
    }
    Ok(())
}

fn cmd_point(config_path: Option<&Path>, scenario: ScenarioDef, json: bool) -> CliResult<()> {
    let config = config_or_reference(config_path)?;
    let fuel = config.fuel_flow(scenario.throttle, scenario.fuel_flow_kg_s)?;
    let inputs = scenario.tick_inputs(fuel);
    inputs.validate()?;

    let mut engine = config.build_engine()?;
    let atmosphere = scenario.atmosphere()?;
    let record = run_ticks(
        &mut engine,
        &atmosphere,
        |_, _| inputs,
        &scenario.run_options(),
    )?;
    let snap = record
        .last()
        .ok_or_else(|| CliError::InvalidInput("operating point produced no ticks".to_string()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(snap)?);
    } else {
        output::print_snapshot(snap);
    }
    Ok(())
}

fn cmd_run(config_path: Option<&Path>, ticks: Option<u64>, json: bool) -> CliResult<()> {
    let config = config_or_reference(config_path)?;
    let mut scenario = config
        .scenario
        .clone()
        .ok_or_else(|| CliError::MissingScenario {
            path: config_path.map(Path::to_path_buf).unwrap_or_default(),
        })?;
    if let Some(n) = ticks {
        scenario.ticks = n;
    }

    let fuel = config.fuel_flow(scenario.throttle, scenario.fuel_flow_kg_s)?;
    let inputs = scenario.tick_inputs(fuel);
    let opts: RunOptions = scenario.run_options();
    info!(name = %config.name, ticks = opts.ticks, fuel, "running scenario");

    let mut engine = config.build_engine()?;
    let atmosphere = scenario.atmosphere()?;
    let record = run_ticks(&mut engine, &atmosphere, |_, _| inputs, &opts)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        output::print_record(&record);
        if let Some(last) = record.last() {
            println!();
            output::print_snapshot(last);
        }
    }
    Ok(())
}

fn cmd_reference_config(output: Option<&Path>) -> CliResult<()> {
    let config = EngineConfig::reference();
    match output {
        Some(path) => {
            save_yaml(path, &config)?;
            println!("✓ Wrote reference config to {}", path.display());
        }
        None => print!("{}", serde_yaml::to_string(&config)?),
    }
    Ok(())
}
