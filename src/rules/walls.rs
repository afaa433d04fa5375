//! Wall placement legality
//!
//! A candidate wall must fit the grid (bounds, no duplicate, no run-axis
//! neighbor, no crossing) and must leave every pawn a route to its goal
//! row. Illegality is an ordinary `false`, never an error: rejected
//! placements are routine during interactive play and inside the search.

use crate::board::{GameState, Orientation, Wall};

use super::path::has_path;

/// Structural half of wall legality: the checks that need no path search.
///
/// Checked in order, short-circuiting on the first failure:
/// 1. anchor within `[0, board_size - 2]` on both axes
/// 2. no existing wall in the identical slot
/// 3. no same-orientation wall whose anchor is adjacent along the
///    candidate's run axis — horizontal walls run along columns, vertical
///    walls along rows. Two such walls would overlap a blocked boundary
///    and read as a doubled or triple-length barrier.
/// 4. no opposite-orientation wall sharing the anchor (crossing)
#[must_use]
pub fn fits_grid(candidate: &Wall, walls: &[Wall], board_size: u8) -> bool {
    let limit = board_size - 2;
    if candidate.row > limit || candidate.col > limit {
        return false;
    }

    for w in walls {
        if w.same_slot(candidate) {
            return false;
        }
        if w.orientation == candidate.orientation {
            let adjacent = match candidate.orientation {
                Orientation::Horizontal => {
                    w.row == candidate.row && w.col.abs_diff(candidate.col) == 1
                }
                Orientation::Vertical => {
                    w.col == candidate.col && w.row.abs_diff(candidate.row) == 1
                }
            };
            if adjacent {
                return false;
            }
        } else if w.row == candidate.row && w.col == candidate.col {
            return false;
        }
    }

    true
}

/// Full wall legality: [`fits_grid`] plus the no-stranding invariant.
///
/// The reachability check runs against a scratch wall list; the committed
/// state is never touched, so calling this any number of times with the
/// same inputs yields the same verdict.
#[must_use]
pub fn is_legal_wall(candidate: &Wall, state: &GameState) -> bool {
    if !fits_grid(candidate, state.walls(), state.board_size()) {
        return false;
    }

    let mut scratch = Vec::with_capacity(state.walls().len() + 1);
    scratch.extend_from_slice(state.walls());
    scratch.push(*candidate);

    [crate::board::PlayerId::One, crate::board::PlayerId::Two]
        .into_iter()
        .all(|id| has_path(state.player(id), &scratch, state.board_size()))
}
