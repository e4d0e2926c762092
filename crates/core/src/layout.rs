//! Grid placement for graph nodes.
//!
//! Positions depend only on a member's index in the input list. There is no
//! collision avoidance and no attempt to follow the relationship topology, so
//! the same list in a different order lays out differently.

use serde::{Deserialize, Serialize};

/// Number of nodes per grid row.
pub const GRID_COLUMNS: usize = 3;

/// Offset of the first cell from the canvas origin, on both axes.
pub const GRID_ORIGIN: f64 = 100.0;

/// Distance between neighbouring cells, on both axes.
pub const GRID_SPACING: f64 = 200.0;

/// Canvas coordinates of a node.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Position of the node at zero-based `index`.
pub fn position_for(index: usize) -> Position {
    let column = index % GRID_COLUMNS;
    let row = index / GRID_COLUMNS;
    Position {
        x: GRID_ORIGIN + column as f64 * GRID_SPACING,
        y: GRID_ORIGIN + row as f64 * GRID_SPACING,
    }
}

/// Positions for `count` nodes, in index order.
pub fn assign_positions(count: usize) -> Vec<Position> {
    (0..count).map(position_for).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_row_steps_along_x() {
        assert_eq!(position_for(0), Position { x: 100.0, y: 100.0 });
        assert_eq!(position_for(1), Position { x: 300.0, y: 100.0 });
        assert_eq!(position_for(2), Position { x: 500.0, y: 100.0 });
    }

    #[test]
    fn fourth_node_wraps_to_second_row() {
        assert_eq!(position_for(3), Position { x: 100.0, y: 300.0 });
        assert_eq!(position_for(5), Position { x: 500.0, y: 300.0 });
        assert_eq!(position_for(6), Position { x: 100.0, y: 500.0 });
    }

    #[test]
    fn matches_grid_formula() {
        for i in 0..50 {
            let p = position_for(i);
            assert_eq!(p.x, 100.0 + (i % 3) as f64 * 200.0);
            assert_eq!(p.y, 100.0 + (i / 3) as f64 * 200.0);
        }
    }

    #[test]
    fn assign_positions_is_deterministic() {
        assert!(assign_positions(0).is_empty());
        assert_eq!(assign_positions(7), assign_positions(7));
        assert_eq!(assign_positions(7).len(), 7);
    }
}
