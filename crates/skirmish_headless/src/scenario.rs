//! Scenario definitions and RON loading.
//!
//! A scenario describes the playfield, the spawn list and an optional
//! command script (commands applied at given frame numbers). Loading
//! is the one place real errors exist; everything inside the core
//! stays status-returning.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use skirmish_core::prelude::*;

/// Errors raised while loading a scenario file.
#[derive(Debug, Error)]
pub enum ScenarioError {
    /// The scenario file could not be read.
    #[error("failed to read scenario '{path}': {source}")]
    Io {
        /// Path to the file that failed to load.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// The scenario file is not valid RON.
    #[error("failed to parse scenario '{path}': {source}")]
    Parse {
        /// Path to the file that failed to parse.
        path: PathBuf,
        /// Underlying parse error with position information.
        source: ron::error::SpannedError,
    },

    /// The scenario parsed but describes a battle the simulation
    /// cannot run.
    #[error("invalid scenario '{path}': {reason}")]
    Invalid {
        /// Path to the offending file.
        path: PathBuf,
        /// What is wrong with it.
        reason: String,
    },
}

/// A command applied at a given frame of the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptedCommand {
    /// Frame number (0-based) at which to apply the command,
    /// before that frame's simulation tick.
    pub tick: u64,
    /// The command to apply.
    pub command: Command,
}

/// A complete battle setup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    /// Playfield configuration.
    #[serde(default)]
    pub grid: GridConfig,
    /// Damage-roll seed; the runner falls back to the core default.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Units to spawn, in registry order.
    pub units: Vec<UnitParams>,
    /// Commands to apply at scheduled frames.
    #[serde(default)]
    pub script: Vec<ScriptedCommand>,
}

/// Load a scenario from a RON file.
///
/// Validates the parsed scenario, so callers never hand the simulation
/// a playfield or unit profile it would panic on.
pub fn load_scenario(path: &Path) -> Result<Scenario, ScenarioError> {
    let text = std::fs::read_to_string(path).map_err(|source| ScenarioError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let scenario: Scenario = ron::from_str(&text).map_err(|source| ScenarioError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    validate(&scenario).map_err(|reason| ScenarioError::Invalid {
        path: path.to_path_buf(),
        reason,
    })?;

    Ok(scenario)
}

/// Check a parsed scenario for values the simulation cannot run with:
/// a degenerate grid, inverted damage ranges, or out-of-bounds spawns.
fn validate(scenario: &Scenario) -> Result<(), String> {
    if scenario.grid.cell_size == 0 {
        return Err("grid cell_size must be non-zero".into());
    }
    if scenario.grid.cols() < 1 || scenario.grid.rows() < 1 {
        return Err("playfield is smaller than one grid cell".into());
    }

    for (index, unit) in scenario.units.iter().enumerate() {
        if unit.min_damage > unit.max_damage {
            return Err(format!(
                "unit {index}: min_damage {} exceeds max_damage {}",
                unit.min_damage, unit.max_damage
            ));
        }
        if !scenario.grid.in_bounds(unit.cell) {
            return Err(format!(
                "unit {index}: spawn cell ({}, {}) is out of bounds",
                unit.cell.x, unit.cell.y
            ));
        }
    }

    Ok(())
}

/// The bundled demo: two squads facing each other across the field,
/// with a short opening script marching red's lead unit forward.
#[must_use]
pub fn demo() -> Scenario {
    let red = |x, y| UnitParams {
        side: Side::Red,
        cell: GridPos::new(x, y),
        ..UnitParams::default()
    };
    let blue = |x, y| UnitParams {
        side: Side::Blue,
        cell: GridPos::new(x, y),
        ..UnitParams::default()
    };

    Scenario {
        grid: GridConfig::default(),
        seed: None,
        units: vec![red(6, 6), red(6, 8), blue(9, 6), blue(9, 8)],
        script: vec![
            ScriptedCommand {
                tick: 0,
                command: Command::SelectOrdinal(1),
            },
            ScriptedCommand {
                tick: 0,
                command: Command::ToggleGrid,
            },
            ScriptedCommand {
                tick: 30,
                command: Command::Move(Direction::Right),
            },
            ScriptedCommand {
                tick: 60,
                command: Command::Move(Direction::DownRight),
            },
            ScriptedCommand {
                tick: 90,
                command: Command::Move(Direction::Right),
            },
        ],
    }
}
