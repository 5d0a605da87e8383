//! # Skirmish Core
//!
//! Deterministic tactical skirmish simulation core.
//!
//! This crate contains **only** simulation logic:
//! - No rendering
//! - No IO
//! - No system randomness (damage rolls come from a seeded RNG)
//! - No floating-point math in simulation state (uses fixed-point)
//!
//! Grid-aligned units on two opposing sides move with smooth
//! interpolation, deal periodic radius-based damage, and die; the
//! player drives one unit at a time by keyboard and selects groups by
//! drag rectangle. An external frame driver calls [`Simulation::tick`]
//! once per frame and captures a [`view::RenderState`] strictly
//! afterwards.
//!
//! ## Crate Structure
//!
//! - [`math`] - Fixed-point math utilities
//! - [`grid`] - Grid/world coordinate conversion and bounds
//! - [`components`] - Unit state definitions
//! - [`movement`] - Grid-constrained movement with interpolation
//! - [`combat`] - Radius-based damage resolution
//! - [`selection`] - Drag-rectangle selection engine
//! - [`command`] - Keyboard-driven player commands
//! - [`simulation`] - The live unit registry and tick loop
//! - [`view`] - Render-facing state snapshots
//!
//! [`Simulation::tick`]: simulation::Simulation::tick

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

pub mod combat;
pub mod command;
pub mod components;
pub mod grid;
pub mod math;
pub mod movement;
pub mod selection;
pub mod simulation;
pub mod view;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::combat::DamageEvent;
    pub use crate::command::Command;
    pub use crate::components::{Side, Unit, UnitParams, UNIT_SIZE};
    pub use crate::grid::{GridConfig, GridPos};
    pub use crate::math::{Fixed, Vec2Fixed};
    pub use crate::movement::Direction;
    pub use crate::selection::{DragSelect, Rect};
    pub use crate::simulation::{Simulation, TickEvents, UiState};
    pub use crate::view::{RenderState, UnitView};
}
