//! The live unit registry and the per-tick control flow.
//!
//! [`Simulation`] owns the ordered sequence of live units (insertion
//! order = spawn order), the keyboard-controlled active index, the UI
//! flags, and the seeded damage RNG. One call to [`Simulation::tick`]
//! runs the whole simulation step: movement interpolation, combat
//! resolution, then death removal with active-index bookkeeping.
//!
//! # Determinism
//!
//! Given the same spawn sequence, commands and tick cadence, two
//! simulations constructed with the same seed produce identical state:
//! positions are fixed-point, iteration order is the registry order,
//! and damage rolls come from a seeded [`ChaCha8Rng`].
//!
//! # Time base
//!
//! The simulation clock is in **milliseconds** and drives the combat
//! cooldown; movement interpolation uses second-scale `dt` derived as
//! `dt_ms / 1000` (conversion factor 1000).

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::combat::{self, DamageEvent};
use crate::command::Command;
use crate::components::{Unit, UnitParams};
use crate::grid::GridConfig;
use crate::math::Fixed;
use crate::movement;

/// Default RNG seed for damage rolls when none is supplied.
pub const DEFAULT_SEED: u64 = 42;

/// Overlay flags toggled by the player.
///
/// Explicit state passed to the render layer each frame instead of
/// implicit globals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UiState {
    /// Draw the grid overlay.
    pub show_grid: bool,
    /// Draw each unit's damage radius.
    pub show_damage_radius: bool,
}

/// Events generated during a simulation tick.
///
/// The external layer uses these to trigger effects, sounds and logs.
#[derive(Debug, Clone, Default)]
pub struct TickEvents {
    /// Damage dealt this tick, in resolution order. Indices refer to
    /// registry positions before any removal.
    pub damage_events: Vec<DamageEvent>,
    /// Registry positions (pre-removal) of units that died this tick,
    /// in ascending order.
    pub deaths: Vec<usize>,
}

/// The authoritative collection of live units plus interaction state.
#[derive(Debug, Clone)]
pub struct Simulation {
    clock_ms: u64,
    grid: GridConfig,
    units: Vec<Unit>,
    active: usize,
    ui: UiState,
    rng: ChaCha8Rng,
}

impl Simulation {
    /// Create an empty simulation over the given playfield, seeded
    /// with [`DEFAULT_SEED`].
    #[must_use]
    pub fn new(grid: GridConfig) -> Self {
        Self::with_seed(grid, DEFAULT_SEED)
    }

    /// Create an empty simulation with an explicit damage-roll seed.
    #[must_use]
    pub fn with_seed(grid: GridConfig, seed: u64) -> Self {
        Self {
            clock_ms: 0,
            grid,
            units: Vec::new(),
            active: 0,
            ui: UiState::default(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Current simulation time in milliseconds.
    #[must_use]
    pub const fn clock_ms(&self) -> u64 {
        self.clock_ms
    }

    /// The playfield configuration.
    #[must_use]
    pub const fn grid(&self) -> GridConfig {
        self.grid
    }

    /// The live unit sequence, in spawn order.
    #[must_use]
    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    /// Mutable access to the live unit sequence for the input layer
    /// (drag selection writes the `selected` marker through this).
    pub fn units_mut(&mut self) -> &mut [Unit] {
        &mut self.units
    }

    /// Registry position of the keyboard-controlled unit.
    ///
    /// `None` only while the registry is empty; otherwise always a
    /// valid index.
    #[must_use]
    pub fn active_index(&self) -> Option<usize> {
        (!self.units.is_empty()).then_some(self.active)
    }

    /// Current overlay flags.
    #[must_use]
    pub const fn ui(&self) -> UiState {
        self.ui
    }

    /// Spawn a unit at full health and return its registry position.
    pub fn spawn(&mut self, params: UnitParams) -> usize {
        debug_assert!(
            self.grid.in_bounds(params.cell),
            "spawn cell out of bounds"
        );
        self.units.push(params.build(&self.grid));
        tracing::debug!(
            side = ?params.side,
            cell = ?params.cell,
            index = self.units.len() - 1,
            "unit spawned"
        );
        self.units.len() - 1
    }

    /// Apply a player command.
    ///
    /// Returns whether the command had any effect. Illegal moves,
    /// unknown ordinals and commands aimed at dead units are silent
    /// no-ops per the error-handling contract.
    pub fn apply_command(&mut self, command: Command) -> bool {
        match command {
            Command::Move(direction) => {
                let grid = self.grid;
                match self.units.get_mut(self.active) {
                    Some(unit) => movement::request_move_direction(unit, &grid, direction),
                    None => false,
                }
            }
            Command::SelectOrdinal(ordinal) => {
                if !(1..=9).contains(&ordinal) {
                    return false;
                }
                let index = usize::from(ordinal - 1);
                match self.units.get(index) {
                    Some(unit) if unit.is_alive() => {
                        self.active = index;
                        true
                    }
                    _ => false,
                }
            }
            Command::ToggleGrid => {
                self.ui.show_grid = !self.ui.show_grid;
                true
            }
            Command::ToggleDamageRadius => {
                self.ui.show_damage_radius = !self.ui.show_damage_radius;
                true
            }
        }
    }

    /// Advance the simulation by `dt_ms` milliseconds.
    ///
    /// Control flow per tick:
    /// 1. advance every unit's movement interpolation (and decay the
    ///    cosmetic hit flash);
    /// 2. resolve combat: each live unit whose cooldown has elapsed
    ///    strikes every opposing live unit inside its radius, and its
    ///    cooldown timestamp advances once iff at least one hit landed;
    /// 3. commit removals: dead units leave the registry after the
    ///    full pass, and the active index is adjusted from the set of
    ///    removed positions.
    pub fn tick(&mut self, dt_ms: u32) -> TickEvents {
        self.clock_ms += u64::from(dt_ms);
        let now = self.clock_ms;
        let dt_secs = Fixed::from_num(dt_ms) / Fixed::from_num(1000);

        let mut events = TickEvents::default();

        // 1. Movement interpolation and flash decay
        for unit in &mut self.units {
            movement::advance(unit, dt_secs);
            unit.flash.advance(dt_ms);
        }

        // 2. Combat resolution
        events.damage_events = self.run_combat_pass(now);

        // 3. Two-phase removal: mark dead, then commit after the pass
        events.deaths = self.remove_dead();

        #[cfg(debug_assertions)]
        self.check_invariants();

        events
    }

    /// Resolve one combat pass over the registry.
    fn run_combat_pass(&mut self, now: u64) -> Vec<DamageEvent> {
        let mut damage_events = Vec::new();

        for attacker_idx in 0..self.units.len() {
            // A unit that died earlier in this same pass deals no damage
            if !self.units[attacker_idx].is_alive() {
                continue;
            }
            if !self.units[attacker_idx].combat.ready(now) {
                continue;
            }

            let attacker = self.units[attacker_idx].clone();
            let mut struck = false;

            for target_idx in 0..self.units.len() {
                if target_idx == attacker_idx {
                    continue;
                }
                let target = &mut self.units[target_idx];
                if !combat::in_range(&attacker, target) {
                    continue;
                }

                let damage = combat::apply_damage(&attacker.combat, target, &mut self.rng);
                damage_events.push(DamageEvent {
                    attacker: attacker_idx,
                    target: target_idx,
                    damage,
                });
                struck = true;
            }

            // The cooldown only starts consuming once an enemy was
            // actually in range; an idle expiry keeps re-checking
            // every tick until a target appears.
            if struck {
                self.units[attacker_idx].combat.record_attack(now);
            }
        }

        damage_events
    }

    /// Remove every dead unit and adjust the active index.
    ///
    /// For each removed position `k` against the current active index
    /// `i`: `k < i` and `k == i > 0` both decrement; `k > i` leaves it
    /// unchanged. Positions are committed in descending order so the
    /// comparisons never race with the shifting sequence; the index is
    /// clamped after the pass.
    fn remove_dead(&mut self) -> Vec<usize> {
        let dead: Vec<usize> = self
            .units
            .iter()
            .enumerate()
            .filter(|(_, unit)| !unit.is_alive())
            .map(|(index, _)| index)
            .collect();

        for &position in dead.iter().rev() {
            self.units.remove(position);
            if position < self.active || (position == self.active && self.active > 0) {
                self.active -= 1;
            }
            tracing::debug!(position, "unit removed");
        }

        if self.active >= self.units.len() {
            self.active = self.units.len().saturating_sub(1);
        }

        dead
    }

    /// Debug-build invariant checks; a violation here is a logic
    /// defect, not a recoverable condition.
    #[cfg(debug_assertions)]
    fn check_invariants(&self) {
        for (index, unit) in self.units.iter().enumerate() {
            debug_assert!(unit.is_alive(), "dead unit {index} survived removal");
            debug_assert!(
                self.grid.in_bounds(unit.cell),
                "unit {index} has out-of-bounds cell {:?}",
                unit.cell
            );
            debug_assert!(unit.health.current <= unit.health.max);
        }
        debug_assert!(self.units.is_empty() || self.active < self.units.len());
    }
}
