use std::path::PathBuf;

use anyhow::Context;
use clap::{
    Args,
    Parser,
    Subcommand
};

use trainsim::benchmark::benchmark::{
    Benchmark,
    BenchmarkReport
};
use trainsim::configuration::{
    Configuration,
    SimulationConfig
};
use trainsim::math::quadrature::quadraturerule::QuadratureRule;
use trainsim::simulation::simulator::Simulator;
use trainsim::source::accelerationsource::AccelerationSource;
use trainsim::source::csvsource::CsvSource;

/// Runs "train" simulations of an acceleration profile and reports the final
/// velocity and position of the train
#[derive(Debug, Parser)]
#[command(name = "trainsim")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct App {
    /// number of worker threads, 1 runs the sequential pipeline
    #[arg(short, long)]
    threads: Option<usize>,

    /// quadrature rule used for every integration
    #[arg(short, long, value_enum)]
    rule: Option<QuadratureRule>,

    /// number of subdivisions within each one second interval
    #[arg(short, long)]
    subdivisions: Option<u32>,

    /// number of times to run the simulation, for benchmarking
    #[arg(short, long)]
    iterations: Option<u32>,

    /// json file with named simulation presets
    #[arg(long, requires = "preset")]
    config: Option<PathBuf>,

    /// preset to start from, command line options override it
    #[arg(long, requires = "config")]
    preset: Option<String>,

    /// print the report as json
    #[arg(long)]
    json: bool,

    /// log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: log::LevelFilter,

    #[command(subcommand)]
    source: SourceKind,
}

#[derive(Debug, Subcommand)]
enum SourceKind {
    /// loads the acceleration profile from a csv file
    Csv(CsvArgs),
}

#[derive(Debug, Args)]
struct CsvArgs {
    /// header of the column holding acceleration, the file is read without
    /// headers when omitted
    #[arg(long)]
    column: Option<String>,

    /// csv file to load
    path: PathBuf,
}

impl App {
    fn simulation_config(&self) -> anyhow::Result<SimulationConfig> {
        let mut config = match (&self.config, &self.preset) {
            (Some(path), Some(name)) => {
                let configuration = Configuration::new();
                configuration
                    .from_path(path)
                    .with_context(|| format!("failed to load presets from {}", path.display()))?;
                configuration.preset(name)?
            },
            _ => SimulationConfig::default()
        };

        if let Some(threads) = self.threads {
            config = config.with_thread_count(threads)?;
        }
        if let Some(rule) = self.rule {
            config = config.with_rule(rule);
        }
        if let Some(subdivisions) = self.subdivisions {
            config = config.with_subdivisions(subdivisions)?;
        }
        if let Some(iterations) = self.iterations {
            config = config.with_iterations(iterations)?;
        }
        Ok(config)
    }
}

fn print_report(report: &BenchmarkReport, as_json: bool) -> anyhow::Result<()> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        println!("final velocity: {:+}", report.kinematics.final_velocity);
        println!("final position: {:+}", report.kinematics.final_position);
        println!(
            "min: {:.9}\nmax: {:.9}\navg: {:.9}\ntot: {:.9}",
            report.timing.min_secs,
            report.timing.max_secs,
            report.timing.avg_secs,
            report.timing.total_secs);
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let app = App::parse();

    env_logger::Builder::new()
        .filter_level(app.log_level)
        .parse_default_env()
        .init();

    let config = app.simulation_config()?;

    let acceleration = match &app.source {
        SourceKind::Csv(args) => CsvSource::new(&args.path, args.column.clone())
            .load()
            .context("failed to load acceleration profile")?
    };

    let simulator = Simulator::new(config).context("failed to set up simulation")?;
    let report = Benchmark::new(simulator)
        .run(&acceleration)
        .context("simulation failed")?;

    print_report(&report, app.json)
}
