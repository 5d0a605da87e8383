//! ASCII rendering of a captured frame.
//!
//! One character per grid cell: `r`/`b` for units (uppercase while
//! drag-selected), `*` during the hit flash, `@` for the
//! keyboard-active unit. Units are placed by their *visual* position,
//! so interpolation shows up as a unit sliding across cells.

use skirmish_core::prelude::*;

/// Render a frame snapshot onto the playfield grid.
#[must_use]
pub fn render_ascii(state: &RenderState, grid: GridConfig) -> String {
    let cols = grid.cols() as usize;
    let rows = grid.rows() as usize;
    let empty = if state.show_grid { '.' } else { ' ' };
    let mut board = vec![vec![empty; cols]; rows];

    for (index, unit) in state.units.iter().enumerate() {
        let cell = grid.to_grid(unit.pos);
        if !grid.in_bounds(cell) {
            continue;
        }
        let glyph = if state.active_index == Some(index) {
            '@'
        } else if unit.flashing {
            '*'
        } else {
            match (unit.side, unit.selected) {
                (Side::Red, false) => 'r',
                (Side::Red, true) => 'R',
                (Side::Blue, false) => 'b',
                (Side::Blue, true) => 'B',
            }
        };
        board[cell.y as usize][cell.x as usize] = glyph;
    }

    let mut out = String::with_capacity(rows * (cols + 1) + 64);
    for row in board {
        out.extend(row);
        out.push('\n');
    }

    for (index, unit) in state.units.iter().enumerate() {
        let marker = if state.active_index == Some(index) {
            '@'
        } else {
            ' '
        };
        out.push_str(&format!(
            "{marker}{index}: {:?} hp {:3}%{}\n",
            unit.side,
            unit.health_percent,
            if unit.moving { " (moving)" } else { "" },
        ));
    }

    if state.selection_rect.is_some() {
        out.push_str("[drag in progress]\n");
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use skirmish_core::simulation::Simulation;

    fn small_sim() -> Simulation {
        let mut sim = Simulation::new(GridConfig::new(40, 200, 120));
        sim.spawn(UnitParams {
            side: Side::Red,
            cell: GridPos::new(0, 0),
            ..UnitParams::default()
        });
        sim.spawn(UnitParams {
            side: Side::Blue,
            cell: GridPos::new(4, 2),
            ..UnitParams::default()
        });
        sim
    }

    #[test]
    fn test_board_shape_and_glyphs() {
        let sim = small_sim();
        let state = RenderState::capture(&sim, &DragSelect::new());
        let out = render_ascii(&state, sim.grid());
        let lines: Vec<&str> = out.lines().collect();

        // 3 board rows (120/40) then one status line per unit
        assert_eq!(lines[0].len(), 5);
        // Active unit renders as '@', the other by side letter
        assert_eq!(&lines[0][0..1], "@");
        assert_eq!(&lines[2][4..5], "b");
    }

    #[test]
    fn test_selected_unit_renders_uppercase() {
        let mut sim = small_sim();
        sim.units_mut()[1].selected = true;
        let state = RenderState::capture(&sim, &DragSelect::new());
        let out = render_ascii(&state, sim.grid());
        assert!(out.lines().nth(2).unwrap().contains('B'));
    }
}
