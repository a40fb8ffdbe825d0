//! Head mouse application: hands-free cursor control from head tracking.

use anyhow::Result;
use clap::Parser;
use head_mouse::{
    config::Config,
    constants::{DEFAULT_SWEEP_AMPLITUDE_M, DEFAULT_SWEEP_PERIOD_S},
    cursor_control::CursorController,
    sensor::SweepSource,
    session::{LogDisplay, TrackingSession},
};
use log::info;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file (YAML format)
    #[arg(short = 'C', long)]
    config: Option<String>,

    /// Mapping strategy (zone, linear)
    #[arg(short, long)]
    mapper: Option<String>,

    /// Sensitivity multiplier
    #[arg(short, long)]
    sensitivity: Option<f64>,

    /// Disable cursor enforcement
    #[arg(long)]
    no_enforcement: bool,

    /// Sweep amplitude in meters for the synthetic head source
    #[arg(long, default_value_t = DEFAULT_SWEEP_AMPLITUDE_M)]
    sweep_amplitude: f32,

    /// Sweep period in seconds for the synthetic head source
    #[arg(long, default_value_t = DEFAULT_SWEEP_PERIOD_S)]
    sweep_period: f64,

    /// Stop after this many seconds (runs until interrupted by default)
    #[arg(short = 't', long)]
    duration: Option<u64>,

    /// Print the example configuration and exit
    #[arg(long)]
    print_config: bool,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.debug {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("debug"));
    } else {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    }

    if args.print_config {
        print!("{}", head_mouse::config::EXAMPLE_CONFIG);
        return Ok(());
    }

    info!("Head Mouse - hands-free cursor control");

    // Load configuration if provided
    let mut config = if let Some(config_path) = &args.config {
        info!("Loading configuration from: {}", config_path);
        Config::from_file(config_path)?
    } else {
        Config::default()
    };

    // Command line overrides
    if let Some(mapper) = args.mapper {
        config.mapping.variant = mapper;
    }
    if let Some(sensitivity) = args.sensitivity {
        config.mapping.sensitivity = sensitivity;
    }
    if args.no_enforcement {
        config.enforcement.enabled = false;
    }

    config.validate()?;

    let cursor = CursorController::new()?;
    // No sensor runtime is wired in yet; drive the pipeline with the
    // synthetic sweep source.
    let sensor = SweepSource::new(args.sweep_amplitude, args.sweep_period);

    let mut session = TrackingSession::new(
        config,
        Box::new(sensor),
        Box::new(cursor),
        Box::new(LogDisplay),
    )?;

    let duration = args.duration.map(Duration::from_secs);
    session.run(duration)?;

    Ok(())
}
