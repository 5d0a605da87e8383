//! Drag-rectangle selection engine.
//!
//! Tracks a pointer drag gesture and, on completion, selects every
//! live unit whose bounding box intersects the normalized drag
//! rectangle. Drag selection marks a *set* of units; it is independent
//! of the registry's single keyboard-controlled active index and the
//! two are never merged.

use serde::{Deserialize, Serialize};

use crate::components::{Unit, UNIT_SIZE};
use crate::math::{Fixed, Vec2Fixed};

/// An axis-aligned rectangle with normalized corners
/// (`min.x <= max.x`, `min.y <= max.y`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner.
    pub min: Vec2Fixed,
    /// Bottom-right corner.
    pub max: Vec2Fixed,
}

impl Rect {
    /// Build a normalized rectangle from two arbitrary corners.
    ///
    /// The result always has non-negative width and height regardless
    /// of drag direction.
    #[must_use]
    pub fn from_corners(a: Vec2Fixed, b: Vec2Fixed) -> Self {
        Self {
            min: Vec2Fixed::new(a.x.min(b.x), a.y.min(b.y)),
            max: Vec2Fixed::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Standard AABB overlap test: the rectangles intersect iff they
    /// are not separated on either axis. Touching edges count.
    #[must_use]
    pub fn intersects(&self, other: &Rect) -> bool {
        !(other.min.x > self.max.x
            || other.max.x < self.min.x
            || other.min.y > self.max.y
            || other.max.y < self.min.y)
    }
}

/// Bounding box of a unit (square of edge [`UNIT_SIZE`] anchored at
/// the unit's continuous position).
#[must_use]
pub fn unit_bounds(unit: &Unit) -> Rect {
    let size = Fixed::from_num(UNIT_SIZE);
    Rect {
        min: unit.pos,
        max: Vec2Fixed::new(unit.pos.x + size, unit.pos.y + size),
    }
}

/// Continuous drag-rectangle tracking.
///
/// Ephemeral state owned by the input layer: active only while a
/// pointer gesture is in progress and reset when it completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DragSelect {
    start: Vec2Fixed,
    end: Vec2Fixed,
    dragging: bool,
}

impl DragSelect {
    /// Create an idle drag tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a drag gesture is in progress.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// The rectangle dragged so far, for render overlays.
    /// `None` when no gesture is in progress.
    #[must_use]
    pub fn current_rect(&self) -> Option<Rect> {
        self.dragging
            .then(|| Rect::from_corners(self.start, self.end))
    }

    /// Pointer-down: begin a gesture at `point` and clear the previous
    /// selection (deselected units drop their highlight immediately).
    pub fn begin(&mut self, point: Vec2Fixed, units: &mut [Unit]) {
        self.start = point;
        self.end = point;
        self.dragging = true;

        for unit in units.iter_mut() {
            unit.selected = false;
        }
    }

    /// Pointer-move: update the gesture endpoint. Ignored when no
    /// gesture is in progress.
    pub fn update(&mut self, point: Vec2Fixed) {
        if self.dragging {
            self.end = point;
        }
    }

    /// Pointer-up: end the gesture and commit the selection.
    ///
    /// Marks every live unit whose bounding box intersects the
    /// normalized drag rectangle. Returns the number of units
    /// selected; zero when no gesture was in progress.
    pub fn finish(&mut self, units: &mut [Unit]) -> usize {
        if !self.dragging {
            return 0;
        }
        self.dragging = false;

        let rect = Rect::from_corners(self.start, self.end);
        let mut selected = 0;

        for unit in units.iter_mut() {
            if unit.is_alive() && rect.intersects(&unit_bounds(unit)) {
                unit.selected = true;
                selected += 1;
            }
        }

        tracing::debug!(selected, "drag selection committed");
        selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{Side, UnitParams};
    use crate::grid::{GridConfig, GridPos};

    fn vec2(x: i32, y: i32) -> Vec2Fixed {
        Vec2Fixed::new(Fixed::from_num(x), Fixed::from_num(y))
    }

    fn unit_at(x: i32, y: i32) -> Unit {
        UnitParams {
            side: Side::Red,
            cell: GridPos::new(x, y),
            ..UnitParams::default()
        }
        .build(&GridConfig::new(40, 800, 600))
    }

    #[test]
    fn test_rect_normalizes_any_drag_direction() {
        let down_right = Rect::from_corners(vec2(10, 10), vec2(50, 40));
        let up_left = Rect::from_corners(vec2(50, 40), vec2(10, 10));
        assert_eq!(down_right, up_left);
        assert_eq!(down_right.min, vec2(10, 10));
        assert_eq!(down_right.max, vec2(50, 40));
    }

    #[test]
    fn test_rect_touching_edges_intersect() {
        let a = Rect::from_corners(vec2(0, 0), vec2(10, 10));
        let touching = Rect::from_corners(vec2(10, 0), vec2(20, 10));
        let apart = Rect::from_corners(vec2(11, 0), vec2(20, 10));
        assert!(a.intersects(&touching));
        assert!(touching.intersects(&a));
        assert!(!a.intersects(&apart));
    }

    #[test]
    fn test_drag_selects_intersecting_units() {
        // Units at world (0,0) and (80,80), each 20x20
        let mut units = vec![unit_at(0, 0), unit_at(2, 2)];
        let mut drag = DragSelect::new();

        drag.begin(vec2(-5, -5), &mut units);
        drag.update(vec2(30, 30));
        assert_eq!(drag.finish(&mut units), 1);

        assert!(units[0].selected);
        assert!(!units[1].selected);
    }

    #[test]
    fn test_drag_boundary_touch_selects() {
        // Unit occupies [0,20]x[0,20]; rectangle starting exactly at
        // x=20 still touches it
        let mut units = vec![unit_at(0, 0)];
        let mut drag = DragSelect::new();

        drag.begin(vec2(20, 0), &mut units);
        drag.update(vec2(60, 60));
        assert_eq!(drag.finish(&mut units), 1);
        assert!(units[0].selected);
    }

    #[test]
    fn test_begin_clears_previous_selection() {
        let mut units = vec![unit_at(0, 0)];
        units[0].selected = true;

        let mut drag = DragSelect::new();
        drag.begin(vec2(500, 500), &mut units);
        assert!(!units[0].selected);

        // Finishing far away leaves it deselected
        assert_eq!(drag.finish(&mut units), 0);
        assert!(!units[0].selected);
    }

    #[test]
    fn test_dead_units_are_not_selectable() {
        let mut units = vec![unit_at(0, 0)];
        units[0].health.current = 0;

        let mut drag = DragSelect::new();
        drag.begin(vec2(-5, -5), &mut units);
        drag.update(vec2(100, 100));
        assert_eq!(drag.finish(&mut units), 0);
        assert!(!units[0].selected);
    }

    #[test]
    fn test_update_and_finish_ignored_when_idle() {
        let mut units = vec![unit_at(0, 0)];
        let mut drag = DragSelect::new();

        drag.update(vec2(100, 100));
        assert!(drag.current_rect().is_none());
        assert_eq!(drag.finish(&mut units), 0);
    }

    #[test]
    fn test_current_rect_tracks_gesture() {
        let mut units: Vec<Unit> = Vec::new();
        let mut drag = DragSelect::new();

        drag.begin(vec2(10, 10), &mut units);
        assert_eq!(
            drag.current_rect(),
            Some(Rect::from_corners(vec2(10, 10), vec2(10, 10)))
        );

        drag.update(vec2(2, 50));
        assert_eq!(
            drag.current_rect(),
            Some(Rect::from_corners(vec2(2, 10), vec2(10, 50)))
        );

        drag.finish(&mut units);
        assert!(drag.current_rect().is_none());
    }
}
