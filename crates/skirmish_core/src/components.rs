//! Unit state definitions.
//!
//! A [`Unit`] is a plain struct composed of small component structs.
//! Components are pure data; the behavior lives once in the
//! [`movement`](crate::movement), [`combat`](crate::combat) and
//! [`simulation`](crate::simulation) modules and is parameterized over
//! the unit value, never attached per instance.

use serde::{Deserialize, Serialize};

use crate::grid::{GridConfig, GridPos};
use crate::math::{fixed_serde, Fixed, Vec2Fixed};

/// Edge length of a unit's square bounding box, in world units.
pub const UNIT_SIZE: u32 = 20;

/// Duration of the cosmetic hit flash, in milliseconds.
pub const FLASH_DURATION_MS: u32 = 200;

/// One of the two opposing teams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Side {
    /// The red team.
    #[default]
    Red,
    /// The blue team.
    Blue,
}

impl Side {
    /// Check whether another side is hostile to this one.
    #[must_use]
    pub const fn is_enemy_of(self, other: Self) -> bool {
        !matches!(
            (self, other),
            (Side::Red, Side::Red) | (Side::Blue, Side::Blue)
        )
    }
}

/// Health component for damageable units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    /// Current health points.
    pub current: u32,
    /// Maximum health points.
    pub max: u32,
}

impl Health {
    /// Create new health component at full health.
    #[must_use]
    pub const fn new(max: u32) -> Self {
        Self { current: max, max }
    }

    /// Check if the unit is dead (health == 0).
    #[must_use]
    pub const fn is_dead(&self) -> bool {
        self.current == 0
    }

    /// Apply damage, returning actual health lost.
    /// Uses saturating subtraction so health never goes below zero.
    pub fn apply_damage(&mut self, amount: u32) -> u32 {
        let actual = amount.min(self.current);
        self.current = self.current.saturating_sub(actual);
        actual
    }

    /// Get health as a percentage (0-100) for health-bar rendering.
    #[must_use]
    pub fn percentage(&self) -> u32 {
        if self.max == 0 {
            0
        } else {
            (self.current * 100) / self.max
        }
    }
}

/// Target-seeking interpolation state.
///
/// While `moving`, the continuous position lags behind the already
/// committed grid cell and converges on `target` at `speed` world
/// units per second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveState {
    /// Continuous destination the position interpolates toward.
    pub target: Vec2Fixed,
    /// Whether interpolation is in progress.
    pub moving: bool,
    /// Movement speed in world units per second.
    #[serde(with = "fixed_serde")]
    pub speed: Fixed,
}

impl MoveState {
    /// Create an idle movement state resting at the given position.
    #[must_use]
    pub const fn at_rest(position: Vec2Fixed, speed: Fixed) -> Self {
        Self {
            target: position,
            moving: false,
            speed,
        }
    }
}

/// Proximity combat statistics.
///
/// The cooldown is attacker-side: `last_attack_ms` records when this
/// unit last struck anything, so one expiry can strike several enemies
/// in the same pass while each victim still takes hits from other
/// attackers independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatStats {
    /// Radius within which damage is dealt.
    #[serde(with = "fixed_serde")]
    pub radius: Fixed,
    /// Minimum damage per hit (inclusive).
    pub min_damage: u32,
    /// Maximum damage per hit (inclusive).
    pub max_damage: u32,
    /// Simulation time of the last successful attack, if any.
    /// A unit that has never attacked is immediately eligible.
    pub last_attack_ms: Option<u64>,
    /// Cooldown between attack passes, in milliseconds.
    pub interval_ms: u64,
}

impl CombatStats {
    /// Check whether the attack cooldown has elapsed.
    #[must_use]
    pub fn ready(&self, now_ms: u64) -> bool {
        match self.last_attack_ms {
            Some(last) => now_ms.saturating_sub(last) >= self.interval_ms,
            None => true,
        }
    }

    /// Record that an attack landed this pass.
    ///
    /// The timestamp only advances forward; a stale `now` is ignored.
    pub fn record_attack(&mut self, now_ms: u64) {
        match self.last_attack_ms {
            Some(last) if last > now_ms => {}
            _ => self.last_attack_ms = Some(now_ms),
        }
    }
}

/// Cosmetic hit-flash countdown. Never affects movement or combat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FlashState {
    /// Remaining flash time in milliseconds.
    pub remaining_ms: u32,
}

impl FlashState {
    /// Start (or restart) the flash.
    pub fn trigger(&mut self) {
        self.remaining_ms = FLASH_DURATION_MS;
    }

    /// Advance the countdown by the tick's elapsed time.
    pub fn advance(&mut self, dt_ms: u32) {
        self.remaining_ms = self.remaining_ms.saturating_sub(dt_ms);
    }

    /// Whether the flash is currently visible.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.remaining_ms > 0
    }
}

/// A live unit in the simulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    /// Team this unit fights for.
    pub side: Side,
    /// Continuous position (top-left corner of the bounding box).
    pub pos: Vec2Fixed,
    /// Committed grid cell. Updated immediately on a move command, so
    /// it diverges from `pos` while interpolation is in progress.
    pub cell: GridPos,
    /// Movement interpolation state.
    pub movement: MoveState,
    /// Health points.
    pub health: Health,
    /// Combat statistics and cooldown bookkeeping.
    pub combat: CombatStats,
    /// Cosmetic hit flash.
    pub flash: FlashState,
    /// Drag-selection marker written by the selection engine.
    pub selected: bool,
}

impl Unit {
    /// Check if the unit is alive.
    #[must_use]
    pub const fn is_alive(&self) -> bool {
        !self.health.is_dead()
    }
}

/// Parameters for spawning a new unit.
///
/// Defaults describe the baseline infantry profile; override only the
/// fields a scenario cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnitParams {
    /// Team the unit fights for.
    pub side: Side,
    /// Spawn cell.
    pub cell: GridPos,
    /// Movement speed in world units per second.
    pub speed: u32,
    /// Maximum (and starting) health.
    pub max_health: u32,
    /// Damage radius in world units.
    pub radius: u32,
    /// Minimum damage per hit.
    pub min_damage: u32,
    /// Maximum damage per hit.
    pub max_damage: u32,
    /// Attack cooldown in milliseconds.
    pub interval_ms: u64,
}

impl Default for UnitParams {
    fn default() -> Self {
        Self {
            side: Side::Red,
            cell: GridPos::new(0, 0),
            speed: 200,
            max_health: 100,
            radius: 60,
            min_damage: 10,
            max_damage: 25,
            interval_ms: 1000,
        }
    }
}

impl UnitParams {
    /// Materialize a unit at rest on its spawn cell.
    #[must_use]
    pub fn build(self, grid: &GridConfig) -> Unit {
        debug_assert!(self.min_damage <= self.max_damage);
        let pos = grid.to_world(self.cell);
        Unit {
            side: self.side,
            pos,
            cell: self.cell,
            movement: MoveState::at_rest(pos, Fixed::from_num(self.speed)),
            health: Health::new(self.max_health),
            combat: CombatStats {
                radius: Fixed::from_num(self.radius),
                min_damage: self.min_damage,
                max_damage: self.max_damage,
                last_attack_ms: None,
                interval_ms: self.interval_ms,
            },
            flash: FlashState::default(),
            selected: false,
        }
    }
}
