use std::io::Write;

use approx::assert_relative_eq;
use tempfile::NamedTempFile;

use trainsim::benchmark::benchmark::Benchmark;
use trainsim::configuration::Configuration;
use trainsim::manager::configerror::ConfigError;
use trainsim::math::quadrature::quadraturerule::QuadratureRule;
use trainsim::source::accelerationsource::AccelerationSource;
use trainsim::source::csvsource::CsvSource;
use trainsim::source::sourceerror::SourceError;

fn write_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn csv_profile_through_preset() {
    let csv = write_file("time,accel\n0,0\n1,1\n2,2\n3,3\n");
    let presets = write_file(r#"{
        "simulation": [
            { "name": "coarse", "threads": 2, "rule": "left-riemann", "subdivisions": 1, "iterations": 4 }
        ]
    }"#);

    let configuration = Configuration::new();
    configuration.from_path(presets.path()).unwrap();
    let config = configuration.preset("coarse").unwrap();
    assert_eq!(config.rule(), QuadratureRule::LeftRiemann);

    let acceleration = CsvSource::new(csv.path(), Some("accel".to_owned())).load().unwrap();
    let report = Benchmark::from_config(config).unwrap().run(&acceleration).unwrap();

    assert_eq!(report.pipeline, "parallel");
    assert_eq!(report.timing.iterations, 4);
    assert_eq!(report.kinematics.final_velocity, 3.0);
    assert_relative_eq!(report.kinematics.final_position, 1.0);
}

#[test]
fn headerless_csv() {
    let csv = write_file("2.0\n2.0\n2.0\n");

    let acceleration = CsvSource::new(csv.path(), None).load().unwrap();

    assert_eq!(acceleration.samples(), &[2.0, 2.0, 2.0]);
}

#[test]
fn missing_csv_file() {
    let dir = tempfile::tempdir().unwrap();
    let source = CsvSource::new(dir.path().join("missing.csv"), None);

    assert!(matches!(source.load(), Err(SourceError::IOError(_))));
}

#[test]
fn in_memory_profile() {
    assert_eq!(vec![1.0_f64, 2.0].load().unwrap().len(), 2);
    assert!(matches!(Vec::<f64>::new().load(), Err(SourceError::Empty)));
}

#[test]
fn malformed_preset_file() {
    let presets = write_file("{ \"simulation\": [ { \"threads\": 2 } ] }");

    let configuration = Configuration::new();

    assert!(matches!(
        configuration.from_path(presets.path()),
        Err(ConfigError::JsonParseError(_))));
}
