//! Keyboard-driven commands for the active unit and UI flags.
//!
//! The input layer maps discrete key events onto these commands and
//! hands them to [`Simulation::apply_command`]. Every command is
//! fallible-but-silent: commanding a dead or nonexistent unit, or an
//! illegal move, reports failure through the return value and changes
//! nothing.
//!
//! [`Simulation::apply_command`]: crate::simulation::Simulation::apply_command

use serde::{Deserialize, Serialize};

use crate::movement::Direction;

/// A single player command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Step the active unit one cell in the given direction.
    Move(Direction),
    /// Select a unit by ordinal (1-9 map to registry index 0-8).
    /// Ignored unless that index exists and the unit is alive.
    SelectOrdinal(u8),
    /// Toggle the grid overlay flag.
    ToggleGrid,
    /// Toggle the damage-radius overlay flag.
    ToggleDamageRadius,
}
