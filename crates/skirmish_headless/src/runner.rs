//! The frame-driving loop.
//!
//! Owns the simulation, the drag-selection tracker and the scenario
//! script, and enforces the one contract the core cannot enforce for
//! itself: within each frame the simulation tick completes before the
//! render snapshot is captured.

use skirmish_core::prelude::*;
use skirmish_core::simulation::DEFAULT_SEED;

use crate::scenario::{Scenario, ScriptedCommand};

/// Loop parameters.
#[derive(Debug, Clone, Copy)]
pub struct RunConfig {
    /// Number of frames to run.
    pub frames: u64,
    /// Simulation timestep per frame, in milliseconds.
    pub dt_ms: u32,
    /// Capture a render snapshot every N frames (0 disables).
    pub render_every: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        // ~10 seconds of simulated time at a 60 Hz timestep.
        Self {
            frames: 600,
            dt_ms: 16,
            render_every: 60,
        }
    }
}

/// Aggregate results of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    /// Frames actually simulated.
    pub frames: u64,
    /// Red units alive at the end.
    pub red_alive: usize,
    /// Blue units alive at the end.
    pub blue_alive: usize,
    /// Total damage dealt across the run.
    pub total_damage: u64,
    /// Units that died during the run.
    pub deaths: usize,
}

/// Drives one scenario to completion.
#[derive(Debug)]
pub struct Runner {
    sim: Simulation,
    drag: DragSelect,
    script: Vec<ScriptedCommand>,
}

impl Runner {
    /// Build a runner from a scenario: seed the simulation, spawn the
    /// units and schedule the script.
    #[must_use]
    pub fn new(scenario: &Scenario) -> Self {
        let seed = scenario.seed.unwrap_or(DEFAULT_SEED);
        let mut sim = Simulation::with_seed(scenario.grid, seed);
        for params in &scenario.units {
            sim.spawn(*params);
        }

        let mut script = scenario.script.clone();
        script.sort_by_key(|entry| entry.tick);

        Self {
            sim,
            drag: DragSelect::new(),
            script,
        }
    }

    /// The simulation under the runner (read access for assertions).
    #[must_use]
    pub fn simulation(&self) -> &Simulation {
        &self.sim
    }

    /// Run the loop, invoking `on_frame` with each captured render
    /// snapshot.
    ///
    /// Per frame: scripted commands first (they stand in for the
    /// asynchronous input handlers and only issue commands, never
    /// touch combat state), then the simulation tick, then the render
    /// capture. Stops early when only one side remains.
    pub fn run<F>(&mut self, config: &RunConfig, mut on_frame: F) -> RunSummary
    where
        F: FnMut(u64, &RenderState),
    {
        let mut summary = RunSummary::default();
        let mut next_scripted = 0;

        for frame in 0..config.frames {
            while next_scripted < self.script.len() && self.script[next_scripted].tick <= frame {
                let entry = self.script[next_scripted];
                let applied = self.sim.apply_command(entry.command);
                tracing::debug!(frame, command = ?entry.command, applied, "scripted command");
                next_scripted += 1;
            }

            let events = self.sim.tick(config.dt_ms);
            summary.frames = frame + 1;
            summary.deaths += events.deaths.len();
            summary.total_damage += events
                .damage_events
                .iter()
                .map(|event| u64::from(event.damage))
                .sum::<u64>();

            if config.render_every > 0 && frame % config.render_every == 0 {
                let state = RenderState::capture(&self.sim, &self.drag);
                on_frame(frame, &state);
            }

            let (red, blue) = self.count_sides();
            if red == 0 || blue == 0 {
                tracing::info!(frame, red, blue, "one side eliminated, stopping");
                break;
            }
        }

        let (red, blue) = self.count_sides();
        summary.red_alive = red;
        summary.blue_alive = blue;
        summary
    }

    fn count_sides(&self) -> (usize, usize) {
        let red = self
            .sim
            .units()
            .iter()
            .filter(|unit| unit.side == Side::Red)
            .count();
        (red, self.sim.units().len() - red)
    }
}
