//! Test fixtures and helpers.
//!
//! Pre-built unit configurations and small battle setups for
//! consistent testing.

use fixed::types::I32F32;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use skirmish_core::prelude::*;

/// Create a fixed-point number from an integer.
#[must_use]
pub fn fixed(n: i32) -> I32F32 {
    I32F32::from_num(n)
}

/// Create a fixed-point number from a float (for tests only).
///
/// Note: in real simulation code, never use floats.
/// This is only for convenient test setup.
#[must_use]
pub fn fixed_f(n: f64) -> I32F32 {
    I32F32::from_num(n)
}

/// A seeded RNG for deterministic damage rolls in tests.
#[must_use]
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// The playfield used throughout the tests: 800x600 with 40-unit
/// cells, matching the demo scenario.
#[must_use]
pub fn test_grid() -> GridConfig {
    GridConfig::new(40, 800, 600)
}

/// Baseline unit parameters on the given side and cell.
#[must_use]
pub fn basic_unit(side: Side, x: i32, y: i32) -> UnitParams {
    UnitParams {
        side,
        cell: GridPos::new(x, y),
        ..UnitParams::default()
    }
}

/// A simulation with one red and one blue unit in adjacent cells,
/// inside each other's damage radius.
#[must_use]
pub fn duel_sim(seed: u64) -> Simulation {
    let mut sim = Simulation::with_seed(test_grid(), seed);
    sim.spawn(basic_unit(Side::Red, 0, 0));
    sim.spawn(basic_unit(Side::Blue, 1, 0));
    sim
}
