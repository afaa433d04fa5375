//! Heuristic evaluation of Quoridor positions
//!
//! Scores a state from one player's perspective:
//! - shortest-path differential (dominant; a missing path costs the finite
//!   sentinel, not an infinity)
//! - remaining-wall differential
//! - pawn mobility differential
//! - column centrality differential
//!
//! Each term is a mine-minus-theirs differential, so the score is exactly
//! negated under a perspective swap — the property the negamax search
//! depends on. Shortening the opponent's path never raises the score, and
//! shortening one's own never lowers it.

use crate::board::{GameState, PlayerId};
use crate::rules::{legal_pawn_moves, shortest_path_length};

use super::weights::EvalWeights;

/// Evaluate the state from the perspective of the given player.
/// Higher is better for that player; `±EvalWeights::WIN` marks a decided
/// game.
#[must_use]
pub fn evaluate(state: &GameState, perspective: PlayerId) -> i32 {
    let opponent = perspective.opponent();

    // Terminal positions short-circuit the heuristic sum
    if state.is_win(perspective) {
        return EvalWeights::WIN;
    }
    if state.is_win(opponent) {
        return -EvalWeights::WIN;
    }

    let board_size = state.board_size();
    let walls = state.walls();
    let me = state.player(perspective);
    let them = state.player(opponent);

    let my_len = shortest_path_length(me, walls, board_size)
        .map_or(EvalWeights::NO_PATH_SENTINEL, |d| d as i32);
    let their_len = shortest_path_length(them, walls, board_size)
        .map_or(EvalWeights::NO_PATH_SENTINEL, |d| d as i32);
    let path_score = (their_len - my_len) * EvalWeights::PATH_WEIGHT;

    let wall_score = (i32::from(me.walls_remaining) - i32::from(them.walls_remaining))
        * EvalWeights::WALL_WEIGHT;

    let mobility_score = (legal_pawn_moves(perspective, state).len() as i32
        - legal_pawn_moves(opponent, state).len() as i32)
        * EvalWeights::MOBILITY_WEIGHT;

    let center = i32::from(board_size / 2);
    let my_center_dist = (i32::from(me.cell.col) - center).abs();
    let their_center_dist = (i32::from(them.cell.col) - center).abs();
    let center_score = (their_center_dist - my_center_dist) * EvalWeights::CENTER_WEIGHT;

    path_score + wall_score + mobility_score + center_score
}
