//! Main AI engine integrating the search components
//!
//! [`AiEngine::choose_move`] is the single entry point the game layer calls
//! when it is the AI's turn. The decision runs through a short priority
//! ladder before any deep search:
//!
//! 1. **Game already over**: nothing to choose, `None`
//! 2. **Immediate win**: a pawn step onto the goal row is played instantly
//! 3. **Difficulty profile**: random-biased, greedy, or full alpha-beta
//! 4. **Fallback**: the first legal move, so a live game always gets one
//!
//! Difficulty is a data-driven profile (depth, wall bias, budgets) feeding
//! one engine — not parallel engine implementations.

use std::time::Duration;

use log::info;
use rand::prelude::IndexedRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::board::{GameState, GoalSide, Move, Orientation, Player, PlayerId, Wall};
use crate::rules::{
    is_legal_wall, legal_pawn_moves, legal_wall_moves, shortest_path_length,
};
use crate::search::{SearchLimits, Searcher};

/// Playing strength levels exposed to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    /// Random-biased: random pawn steps, occasional random wall
    Easy,
    /// Heuristic-only: greedy race along the shortest path, occasional
    /// blocking wall on the opponent's route
    Medium,
    /// Full iterative-deepening alpha-beta
    Hard,
}

/// Resolved knobs for one difficulty level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SearchProfile {
    /// Base search depth (searched profiles only)
    pub max_depth: i8,
    /// Probability of preferring a wall over a pawn step (Easy/Medium)
    pub wall_bias: f64,
    /// Soft wall-clock budget per move
    pub time_budget_ms: u64,
    /// Soft node ceiling per move
    pub node_budget: u64,
}

impl Difficulty {
    /// The profile this level resolves to.
    #[must_use]
    pub fn profile(self) -> SearchProfile {
        match self {
            Difficulty::Easy => SearchProfile {
                max_depth: 0,
                wall_bias: 0.3,
                time_budget_ms: 0,
                node_budget: 0,
            },
            Difficulty::Medium => SearchProfile {
                max_depth: 0,
                wall_bias: 0.2,
                time_budget_ms: 0,
                node_budget: 0,
            },
            Difficulty::Hard => SearchProfile {
                max_depth: 4,
                wall_bias: 0.0,
                time_budget_ms: 2_000,
                node_budget: 500_000,
            },
        }
    }
}

/// AI engine for Quoridor.
///
/// Owns the searcher (and through it the transposition table), so keeping
/// one engine per game lets later turns reuse earlier search effort.
pub struct AiEngine {
    searcher: Searcher,
}

impl AiEngine {
    /// Engine with the default 16 MB transposition table.
    #[must_use]
    pub fn new() -> Self {
        Self::with_tt_size(16)
    }

    /// Engine with a custom transposition table size in megabytes.
    #[must_use]
    pub fn with_tt_size(tt_size_mb: usize) -> Self {
        Self {
            searcher: Searcher::new(tt_size_mb),
        }
    }

    /// Drop cached search results, for a fresh game.
    pub fn reset(&mut self) {
        self.searcher.reset();
    }

    /// Pick a move for `player` at the given difficulty.
    ///
    /// Returns `None` only when the game is already decided or the player
    /// genuinely has no legal move; the caller reports that state rather
    /// than crashing.
    pub fn choose_move(
        &mut self,
        state: &GameState,
        player: PlayerId,
        difficulty: Difficulty,
    ) -> Option<Move> {
        if state.winner().is_some() {
            return None;
        }

        let goal_row = state.player(player).goal.goal_row(state.board_size());
        let pawn_moves = legal_pawn_moves(player, state);

        // A step onto the goal row ends the game; no profile passes it up
        if let Some(win) = pawn_moves
            .iter()
            .copied()
            .find(|m| matches!(m, Move::Pawn { to } if to.row == goal_row))
        {
            info!("{player:?} plays the winning step {win:?}");
            return Some(win);
        }

        let profile = difficulty.profile();
        let chosen = match difficulty {
            Difficulty::Easy => self.choose_random(state, player, &profile),
            Difficulty::Medium => self.choose_greedy(state, player, &profile),
            Difficulty::Hard => self.choose_searched(state, player, &profile),
        };

        let chosen = chosen
            .or_else(|| pawn_moves.first().copied())
            .or_else(|| legal_wall_moves(player, state).first().copied());
        match chosen {
            Some(mv) => info!("{player:?} ({difficulty:?}) plays {mv:?}"),
            None => info!("{player:?} has no legal move"),
        }
        chosen
    }

    /// Easy: uniform random pawn step, with a wall-placement bias.
    fn choose_random(
        &mut self,
        state: &GameState,
        player: PlayerId,
        profile: &SearchProfile,
    ) -> Option<Move> {
        let mut rng = rand::rng();

        if state.player(player).walls_remaining > 0 && rng.random::<f64>() < profile.wall_bias {
            let walls = legal_wall_moves(player, state);
            if let Some(mv) = walls.choose(&mut rng) {
                return Some(*mv);
            }
        }

        legal_pawn_moves(player, state).choose(&mut rng).copied()
    }

    /// Medium: race greedily; sometimes drop a wall across the opponent's
    /// forward row instead.
    fn choose_greedy(
        &mut self,
        state: &GameState,
        player: PlayerId,
        profile: &SearchProfile,
    ) -> Option<Move> {
        let mut rng = rand::rng();

        if state.player(player).walls_remaining > 0 && rng.random::<f64>() < profile.wall_bias {
            if let Some(mv) = strategic_wall(state, player) {
                return Some(mv);
            }
        }

        best_pawn_step(state, player)
    }

    /// Hard: iterative-deepening alpha-beta, deeper as walls run out.
    fn choose_searched(
        &mut self,
        state: &GameState,
        player: PlayerId,
        profile: &SearchProfile,
    ) -> Option<Move> {
        let total_walls = state.total_walls_remaining();

        // With no walls left the game is a pure race; the shortest path
        // already is the optimal policy and needs no tree.
        if total_walls == 0 {
            return best_pawn_step(state, player);
        }

        // Endgame depths are cheap (few wall candidates), so look further
        let mut max_depth = profile.max_depth;
        if total_walls <= 4 {
            max_depth += 2;
        }

        let limits = SearchLimits {
            max_depth,
            time_budget: Some(Duration::from_millis(profile.time_budget_ms)),
            node_budget: Some(profile.node_budget),
        };
        let result = self.searcher.search(state, player, &limits);
        info!(
            "search for {player:?}: depth {} score {} over {} nodes",
            result.depth, result.score, result.nodes
        );
        result.best_move
    }
}

impl Default for AiEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// The pawn step that leaves the mover with the shortest remaining path,
/// first candidate winning ties.
fn best_pawn_step(state: &GameState, player: PlayerId) -> Option<Move> {
    let me = state.player(player);
    let mut best: Option<(Move, u32)> = None;

    for mv in legal_pawn_moves(player, state) {
        let Move::Pawn { to } = mv else { continue };
        let moved = Player { cell: to, ..*me };
        let len = shortest_path_length(&moved, state.walls(), state.board_size())
            .unwrap_or(u32::MAX);
        if best.map_or(true, |(_, b)| len < b) {
            best = Some((mv, len));
        }
    }

    best.map(|(mv, _)| mv)
}

/// First legal horizontal wall fencing the row the opponent wants to cross
/// next. Cheap blocking heuristic for the Medium profile.
fn strategic_wall(state: &GameState, player: PlayerId) -> Option<Move> {
    let them = state.player(player.opponent());
    let anchor_row = match them.goal {
        GoalSide::Top => them.cell.row.checked_sub(1)?,
        GoalSide::Bottom => them.cell.row,
    };
    if anchor_row > state.board_size() - 2 {
        return None;
    }

    for col in 0..=state.board_size() - 2 {
        let wall = Wall::new(anchor_row, col, Orientation::Horizontal, player);
        if is_legal_wall(&wall, state) {
            return Some(Move::Wall {
                row: anchor_row,
                col,
                orientation: Orientation::Horizontal,
            });
        }
    }
    None
}
