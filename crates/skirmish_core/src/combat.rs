//! Radius-based combat resolution.
//!
//! Damage is dealt in passes gated by an attacker-side cooldown: when
//! a unit's cooldown has elapsed, every opposing live unit inside its
//! damage radius is struck in the same pass. Damage amounts are
//! uniform random rolls drawn from a caller-supplied [`Rng`], so tests
//! inject a seeded generator for determinism.

use rand::Rng;

use crate::components::{CombatStats, Unit};

/// Damage dealt by one attack, reported to the external layer for
/// effects and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DamageEvent {
    /// Registry position of the attacking unit at the time of the hit.
    pub attacker: usize,
    /// Registry position of the victim at the time of the hit.
    pub target: usize,
    /// Damage rolled.
    pub damage: u32,
}

/// Check whether `target` is a valid victim inside `attacker`'s radius.
///
/// Always false for same-side pairs (no friendly fire) and for dead
/// targets. Otherwise true iff the Euclidean distance between the
/// continuous positions is at most `attacker.combat.radius`. Uses the
/// squared-distance comparison to avoid a sqrt.
#[must_use]
pub fn in_range(attacker: &Unit, target: &Unit) -> bool {
    if !attacker.side.is_enemy_of(target.side) {
        return false;
    }
    if target.health.is_dead() {
        return false;
    }

    let dist_sq = attacker.pos.distance_squared(target.pos);
    dist_sq <= attacker.combat.radius * attacker.combat.radius
}

/// Roll a uniform random damage amount in
/// `[min_damage, max_damage]` inclusive.
#[must_use]
pub fn roll_damage<R: Rng>(stats: &CombatStats, rng: &mut R) -> u32 {
    debug_assert!(stats.min_damage <= stats.max_damage);
    rng.gen_range(stats.min_damage..=stats.max_damage)
}

/// Apply one rolled hit from an attacker's stats to a target.
///
/// Subtracts the roll from the target's health (clamped at zero),
/// triggers the victim's hit flash, and returns the rolled amount.
pub fn apply_damage<R: Rng>(attacker: &CombatStats, target: &mut Unit, rng: &mut R) -> u32 {
    let damage = roll_damage(attacker, rng);
    target.health.apply_damage(damage);
    target.flash.trigger();

    tracing::debug!(
        side = ?target.side,
        damage,
        health = target.health.current,
        "unit took damage"
    );

    damage
}
