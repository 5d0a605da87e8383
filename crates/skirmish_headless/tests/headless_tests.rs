//! Scenario loading and full-run integration tests.

use std::io::Write;
use std::path::Path;

use skirmish_headless::runner::{RunConfig, Runner};
use skirmish_headless::scenario::{self, ScenarioError};

#[test]
fn test_bundled_demo_file_matches_builtin() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("scenarios/demo.ron");
    let loaded = scenario::load_scenario(&path).expect("bundled scenario loads");

    let mut builtin = scenario::demo();
    // The file pins the seed the builtin leaves to the runner default
    builtin.seed = Some(42);
    assert_eq!(loaded, builtin);
}

#[test]
fn test_load_scenario_from_temp_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(
        file,
        "(units: [(side: Red, cell: (x: 0, y: 0)), (side: Blue, cell: (x: 1, y: 0))])"
    )
    .expect("write");

    let scenario = scenario::load_scenario(file.path()).expect("parse");
    assert_eq!(scenario.units.len(), 2);
    assert!(scenario.units[0].side.is_enemy_of(scenario.units[1].side));
}

#[test]
fn test_missing_file_reports_io_error() {
    let error = scenario::load_scenario(Path::new("/nonexistent/battle.ron"))
        .expect_err("load must fail");
    assert!(matches!(error, ScenarioError::Io { .. }));
}

#[test]
fn test_malformed_file_reports_parse_error() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(file, "(units: [oops").expect("write");

    let error = scenario::load_scenario(file.path()).expect_err("parse must fail");
    assert!(matches!(error, ScenarioError::Parse { .. }));
}

#[test]
fn test_zero_cell_size_is_rejected_not_run() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(
        file,
        "(grid: (cell_size: 0, width: 800, height: 600), units: [(side: Red, cell: (x: 0, y: 0))])"
    )
    .expect("write");

    // Parses fine; validation must catch it before the runner divides
    // by the cell size
    let error = scenario::load_scenario(file.path()).expect_err("load must fail");
    assert!(matches!(error, ScenarioError::Invalid { .. }));
}

#[test]
fn test_inverted_damage_range_is_rejected_not_run() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(
        file,
        "(units: [(side: Red, cell: (x: 0, y: 0), min_damage: 30, max_damage: 5), (side: Blue, cell: (x: 1, y: 0))])"
    )
    .expect("write");

    // An empty damage range would panic at the first roll
    let error = scenario::load_scenario(file.path()).expect_err("load must fail");
    assert!(matches!(error, ScenarioError::Invalid { .. }));
}

#[test]
fn test_out_of_bounds_spawn_is_rejected() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(file, "(units: [(side: Red, cell: (x: -1, y: 3))])").expect("write");

    let error = scenario::load_scenario(file.path()).expect_err("load must fail");
    assert!(matches!(error, ScenarioError::Invalid { .. }));
}

#[test]
fn test_adjacent_duel_resolves() {
    let scenario: scenario::Scenario = ron::from_str(
        "(seed: Some(9), units: [(side: Red, cell: (x: 0, y: 0)), (side: Blue, cell: (x: 1, y: 0))])",
    )
    .expect("parse");

    // 15 simulated seconds is far beyond the worst-case duel length
    let config = RunConfig {
        frames: 1000,
        dt_ms: 16,
        render_every: 0,
    };
    let mut runner = Runner::new(&scenario);
    let summary = runner.run(&config, |_, _| {});

    assert!(summary.deaths >= 1);
    assert!(summary.red_alive == 0 || summary.blue_alive == 0);
    assert!(summary.total_damage >= 100);
}

#[test]
fn test_scripted_march_closes_and_engages() {
    let mut runner = Runner::new(&scenario::demo());
    let config = RunConfig {
        frames: 600,
        dt_ms: 16,
        render_every: 0,
    };
    let summary = runner.run(&config, |_, _| {});

    // The scripted red lead walks into blue's radius and combat breaks out
    assert!(summary.total_damage > 0, "script never engaged");
}
