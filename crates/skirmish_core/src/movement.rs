//! Grid-constrained movement with smooth interpolation.
//!
//! Move commands commit the destination cell immediately; the
//! continuous position then interpolates toward it over the following
//! ticks. Combat always reads the continuous position, so a unit in
//! transit fights from wherever it visually is, not from the cell it
//! has already claimed.

use serde::{Deserialize, Serialize};

use crate::components::Unit;
use crate::grid::{GridConfig, GridPos};
use crate::math::Fixed;

/// Snap threshold: once the remaining distance to the target drops
/// below this, the position snaps exactly onto it. The threshold
/// bounds overshoot error instead of hard-clamping the step.
pub const SNAP_THRESHOLD: u32 = 2;

/// The eight directions a unit can step in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// One cell up.
    Up,
    /// One cell down.
    Down,
    /// One cell left.
    Left,
    /// One cell right.
    Right,
    /// Diagonal up-left.
    UpLeft,
    /// Diagonal up-right.
    UpRight,
    /// Diagonal down-left.
    DownLeft,
    /// Diagonal down-right.
    DownRight,
}

impl Direction {
    /// Grid-cell delta for this direction as `(dx, dy)`.
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::UpLeft => (-1, -1),
            Direction::UpRight => (1, -1),
            Direction::DownLeft => (-1, 1),
            Direction::DownRight => (1, 1),
        }
    }
}

/// Request a move to a target grid cell.
///
/// Fails (returns `false`, no state change) if the unit is already
/// moving, is dead, or the target cell is out of bounds. On success
/// the grid cell is committed immediately, the continuous target is
/// derived from it, and interpolation starts.
pub fn request_move(unit: &mut Unit, grid: &GridConfig, target: GridPos) -> bool {
    if unit.movement.moving || unit.health.is_dead() {
        return false;
    }

    if !grid.in_bounds(target) {
        return false;
    }

    unit.cell = target;
    unit.movement.target = grid.to_world(target);
    unit.movement.moving = true;
    true
}

/// Request a one-cell step in the given direction.
///
/// Computes the 8-neighbor target cell and delegates to
/// [`request_move`].
pub fn request_move_direction(unit: &mut Unit, grid: &GridConfig, direction: Direction) -> bool {
    let (dx, dy) = direction.delta();
    request_move(unit, grid, unit.cell.offset(dx, dy))
}

/// Advance interpolation by `dt` seconds.
///
/// No-op unless the unit is moving. Snaps exactly onto the target once
/// the remaining distance drops below [`SNAP_THRESHOLD`], otherwise
/// steps `speed * dt` along the normalized direction vector.
pub fn advance(unit: &mut Unit, dt_secs: Fixed) {
    if !unit.movement.moving {
        return;
    }

    let target = unit.movement.target;
    let dist_sq = unit.pos.distance_squared(target);
    let snap_sq = Fixed::from_num(SNAP_THRESHOLD * SNAP_THRESHOLD);

    if dist_sq < snap_sq {
        unit.pos = target;
        unit.movement.moving = false;
    } else {
        let direction = (target - unit.pos).normalize();
        let step = unit.movement.speed * dt_secs;
        unit.pos = unit.pos + direction.scale(step);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::UnitParams;
    use crate::math::Vec2Fixed;

    fn grid() -> GridConfig {
        GridConfig::new(40, 800, 600)
    }

    fn unit_at(x: i32, y: i32) -> Unit {
        UnitParams {
            cell: GridPos::new(x, y),
            ..UnitParams::default()
        }
        .build(&grid())
    }

    #[test]
    fn test_request_move_commits_cell_immediately() {
        let grid = grid();
        let mut unit = unit_at(2, 2);

        assert!(request_move(&mut unit, &grid, GridPos::new(5, 3)));
        assert_eq!(unit.cell, GridPos::new(5, 3));
        assert_eq!(unit.movement.target, grid.to_world(GridPos::new(5, 3)));
        assert!(unit.movement.moving);
        // Continuous position has not moved yet
        assert_eq!(unit.pos, grid.to_world(GridPos::new(2, 2)));
    }

    #[test]
    fn test_request_move_rejected_while_moving() {
        let grid = grid();
        let mut unit = unit_at(2, 2);

        assert!(request_move(&mut unit, &grid, GridPos::new(5, 3)));
        let target_before = unit.movement.target;

        assert!(!request_move(&mut unit, &grid, GridPos::new(1, 1)));
        assert_eq!(unit.movement.target, target_before);
        assert_eq!(unit.cell, GridPos::new(5, 3));
    }

    #[test]
    fn test_request_move_rejected_out_of_bounds() {
        let grid = grid();
        let mut unit = unit_at(0, 0);
        let before = unit.clone();

        assert!(!request_move(&mut unit, &grid, GridPos::new(-1, 0)));
        assert!(!request_move(&mut unit, &grid, GridPos::new(0, 99)));
        assert_eq!(unit, before);
    }

    #[test]
    fn test_request_move_rejected_when_dead() {
        let grid = grid();
        let mut unit = unit_at(2, 2);
        unit.health.current = 0;

        assert!(!request_move(&mut unit, &grid, GridPos::new(3, 2)));
        assert!(!unit.movement.moving);
    }

    #[test]
    fn test_direction_deltas_cover_all_neighbors() {
        let grid = grid();
        let cases = [
            (Direction::Up, (5, 4)),
            (Direction::Down, (5, 6)),
            (Direction::Left, (4, 5)),
            (Direction::Right, (6, 5)),
            (Direction::UpLeft, (4, 4)),
            (Direction::UpRight, (6, 4)),
            (Direction::DownLeft, (4, 6)),
            (Direction::DownRight, (6, 6)),
        ];

        for (direction, (x, y)) in cases {
            let mut unit = unit_at(5, 5);
            assert!(request_move_direction(&mut unit, &grid, direction));
            assert_eq!(unit.cell, GridPos::new(x, y), "{direction:?}");
        }
    }

    #[test]
    fn test_direction_step_off_the_edge_fails() {
        let grid = grid();
        let mut unit = unit_at(0, 0);
        assert!(!request_move_direction(&mut unit, &grid, Direction::Left));
        assert!(!request_move_direction(&mut unit, &grid, Direction::UpRight));
        assert!(request_move_direction(&mut unit, &grid, Direction::Down));
    }

    #[test]
    fn test_advance_converges_and_snaps() {
        let grid = grid();
        let mut unit = unit_at(0, 0);
        assert!(request_move(&mut unit, &grid, GridPos::new(1, 0)));

        // 40 world units at 200/s: done within a few 16 ms steps
        let dt = Fixed::from_num(16) / Fixed::from_num(1000);
        for _ in 0..20 {
            advance(&mut unit, dt);
        }

        assert!(!unit.movement.moving);
        assert_eq!(unit.pos, grid.to_world(GridPos::new(1, 0)));
    }

    #[test]
    fn test_advance_is_idempotent_once_snapped() {
        let grid = grid();
        let mut unit = unit_at(0, 0);
        assert!(request_move(&mut unit, &grid, GridPos::new(1, 0)));

        let dt = Fixed::from_num(16) / Fixed::from_num(1000);
        for _ in 0..20 {
            advance(&mut unit, dt);
        }
        let settled = unit.clone();

        advance(&mut unit, dt);
        advance(&mut unit, Fixed::from_num(1));
        assert_eq!(unit, settled);
        assert!(!unit.movement.moving);
    }

    #[test]
    fn test_advance_noop_when_idle() {
        let mut unit = unit_at(3, 3);
        let before = unit.pos;
        advance(&mut unit, Fixed::from_num(1));
        assert_eq!(unit.pos, before);
    }

    #[test]
    fn test_diagonal_advance_follows_normalized_direction() {
        let grid = grid();
        let mut unit = unit_at(0, 0);
        assert!(request_move_direction(&mut unit, &grid, Direction::DownRight));

        let dt = Fixed::from_num(16) / Fixed::from_num(1000);
        advance(&mut unit, dt);

        // One step along a 45° diagonal moves x and y equally
        let moved = unit.pos - Vec2Fixed::ZERO;
        let diff = (moved.x - moved.y).abs();
        assert!(diff < Fixed::from_num(1) / Fixed::from_num(100), "{moved:?}");
        assert!(moved.x > Fixed::ZERO);
    }
}
