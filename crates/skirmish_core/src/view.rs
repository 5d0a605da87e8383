//! Render-facing state snapshots.
//!
//! The core never draws anything; each render tick the external layer
//! captures a [`RenderState`] and turns it into pixels (or ASCII)
//! however it likes. Capturing is read-only and must happen strictly
//! after the frame's simulation tick.

use serde::{Deserialize, Serialize};

use crate::components::Side;
use crate::grid::GridPos;
use crate::math::{option_fixed_serde, Fixed, Vec2Fixed};
use crate::selection::{DragSelect, Rect};
use crate::simulation::Simulation;

/// Renderable state of one unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitView {
    /// Continuous position (top-left of the bounding box).
    pub pos: Vec2Fixed,
    /// Committed grid cell, for the cell-highlight overlay.
    pub cell: GridPos,
    /// Team color source.
    pub side: Side,
    /// Whether the unit is in the drag-selected set (highlight).
    pub selected: bool,
    /// Whether the hit flash is currently visible.
    pub flashing: bool,
    /// Whether interpolation is in progress.
    pub moving: bool,
    /// Health as a percentage (0-100) for the health-bar overlay.
    pub health_percent: u32,
    /// Damage radius to draw, present only while the overlay flag is
    /// on.
    #[serde(with = "option_fixed_serde")]
    pub damage_radius: Option<Fixed>,
}

/// Everything the render layer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderState {
    /// Renderable units, in registry order.
    pub units: Vec<UnitView>,
    /// The in-progress selection rectangle, while dragging.
    pub selection_rect: Option<Rect>,
    /// Whether to draw the grid overlay.
    pub show_grid: bool,
    /// Registry position of the keyboard-active unit.
    pub active_index: Option<usize>,
}

impl RenderState {
    /// Capture a snapshot of the simulation and drag state.
    #[must_use]
    pub fn capture(sim: &Simulation, drag: &DragSelect) -> Self {
        let ui = sim.ui();
        let units = sim
            .units()
            .iter()
            .map(|unit| UnitView {
                pos: unit.pos,
                cell: unit.cell,
                side: unit.side,
                selected: unit.selected,
                flashing: unit.flash.is_active(),
                moving: unit.movement.moving,
                health_percent: unit.health.percentage(),
                damage_radius: ui.show_damage_radius.then_some(unit.combat.radius),
            })
            .collect();

        Self {
            units,
            selection_rect: drag.current_rect(),
            show_grid: ui.show_grid,
            active_index: sim.active_index(),
        }
    }
}
