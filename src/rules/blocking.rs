//! Wall blocking geometry
//!
//! Pure predicate deciding whether a single step between two adjacent cells
//! crosses a placed wall. Everything else in the crate — reachability, move
//! generation, search — funnels through this one check, so it stays an O(1)
//! test per wall with no grid materialization.

use crate::board::{Cell, Orientation, Wall};

/// Whether the step from `from` to `to` crosses a wall.
///
/// `from` and `to` must be orthogonally adjacent; bounds are the caller's
/// concern. The step is normalized to its low endpoint so a single check
/// covers both traversal directions:
/// - a horizontal wall anchored `(wr, wc)` blocks the row `wr`/`wr+1`
///   boundary at columns `wc` and `wc + 1`
/// - a vertical wall anchored `(wr, wc)` blocks the column `wc`/`wc+1`
///   boundary at rows `wr` and `wr + 1`
#[must_use]
pub fn is_movement_blocked(from: Cell, to: Cell, walls: &[Wall]) -> bool {
    debug_assert_eq!(
        from.row.abs_diff(to.row) + from.col.abs_diff(to.col),
        1,
        "blocking test requires adjacent cells"
    );

    if from.col == to.col {
        // Vertical step across the boundary below `row`
        let row = from.row.min(to.row);
        let col = from.col;
        walls.iter().any(|w| {
            w.orientation == Orientation::Horizontal
                && w.row == row
                && (w.col == col || w.col + 1 == col)
        })
    } else {
        // Horizontal step across the boundary right of `col`
        let row = from.row;
        let col = from.col.min(to.col);
        walls.iter().any(|w| {
            w.orientation == Orientation::Vertical
                && w.col == col
                && (w.row == row || w.row + 1 == row)
        })
    }
}
