//! Legal move generation
//!
//! Pawn moves cover the four orthogonal steps plus the jump and side-step
//! rules used when the opponent stands in the way. Wall moves are the full
//! anchor enumeration filtered through the legality validator; the search
//! keeps its own pruned candidate set but both only ever yield walls that
//! would be accepted at commit time.

use crate::board::{GameState, Move, Orientation, PlayerId, Wall};

use super::blocking::is_movement_blocked;
use super::path::NEIGHBORS;
use super::walls::is_legal_wall;

/// All legal pawn destinations for the player, in fixed scan order.
///
/// For each direction: an open adjacent cell is a target; a cell occupied by
/// the opponent is traversed by the straight jump when the far cell is open,
/// otherwise by the two side-step cells next to the opponent. An empty
/// result means the pawn cannot act — the caller reports it, nothing panics.
#[must_use]
pub fn legal_pawn_moves(player_id: PlayerId, state: &GameState) -> Vec<Move> {
    let board_size = state.board_size();
    let walls = state.walls();
    let cell = state.player(player_id).cell;
    let opponent_cell = state.player(player_id.opponent()).cell;

    let mut moves = Vec::with_capacity(4);

    for (dr, dc) in NEIGHBORS {
        let Some(next) = cell.step(dr, dc, board_size) else {
            continue;
        };
        if is_movement_blocked(cell, next, walls) {
            continue;
        }

        if next != opponent_cell {
            moves.push(Move::Pawn { to: next });
            continue;
        }

        // Opponent in the way: straight jump first
        if let Some(landing) = next.step(dr, dc, board_size) {
            if !is_movement_blocked(next, landing, walls) && !state.is_occupied(landing) {
                moves.push(Move::Pawn { to: landing });
                continue;
            }
        }

        // Jump blocked or off-grid: side-steps around the opponent
        let sides: [(i32, i32); 2] = if dr != 0 { [(0, -1), (0, 1)] } else { [(-1, 0), (1, 0)] };
        for (sr, sc) in sides {
            let Some(side) = next.step(sr, sc, board_size) else {
                continue;
            };
            if !is_movement_blocked(next, side, walls) && !state.is_occupied(side) {
                moves.push(Move::Pawn { to: side });
            }
        }
    }

    moves
}

/// Every legal wall placement for the player.
///
/// Exhaustive scan over anchors and orientations — the right tool for
/// validating a proposed move or enumerating at the root; the search prunes
/// this to hot-spot candidates internally.
#[must_use]
pub fn legal_wall_moves(player_id: PlayerId, state: &GameState) -> Vec<Move> {
    if state.player(player_id).walls_remaining == 0 {
        return Vec::new();
    }

    let limit = state.board_size() - 1;
    let mut moves = Vec::new();
    for row in 0..limit {
        for col in 0..limit {
            for orientation in [Orientation::Horizontal, Orientation::Vertical] {
                let candidate = Wall::new(row, col, orientation, player_id);
                if is_legal_wall(&candidate, state) {
                    moves.push(Move::Wall {
                        row,
                        col,
                        orientation,
                    });
                }
            }
        }
    }
    moves
}

/// All legal moves for the player: pawn moves first, then wall placements.
#[must_use]
pub fn legal_moves(player_id: PlayerId, state: &GameState) -> Vec<Move> {
    let mut moves = legal_pawn_moves(player_id, state);
    moves.extend(legal_wall_moves(player_id, state));
    moves
}
