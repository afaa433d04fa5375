//! Alpha-beta search with iterative deepening and transposition table
//!
//! Negamax formulation of depth-bounded minimax with alpha-beta pruning over
//! the combined pawn/wall move space. The searcher deepens one ply at a time
//! and honors a soft deadline and a node budget: when either runs out it
//! keeps the best move from the last completed iteration — budget expiry is
//! an answer, never an error.
//!
//! Each explored branch works on its own successor state, so the caller's
//! state is only ever read. Wall candidates inside the tree come from a
//! hot-spot set (anchors touching the opponent's shortest path and the
//! pawns) rather than the exhaustive scan, and every candidate passes the
//! full legality check before it is searched — the tree never contains a
//! state that could not be reached in a real game.

use std::time::{Duration, Instant};

use log::debug;

use crate::board::{GameState, Move, Orientation, Player, PlayerId, Wall, MAX_BOARD_SIZE};
use crate::eval::{evaluate, EvalWeights};
use crate::rules::{fits_grid, legal_pawn_moves, shortest_path, shortest_path_length};

use super::tt::{EntryType, TranspositionTable};
use super::zobrist::ZobristTable;

/// Infinity for alpha-beta bounds, above any win score the tree can produce
const INF: i32 = EvalWeights::WIN + 1_000;

/// Ordering score for the transposition-table move
const ORDER_TT: i32 = 1_000_000;
/// Ordering score for a pawn step onto the goal row
const ORDER_WINNING_PAWN: i32 = 900_000;
/// Ordering base for pawn steps, adjusted by path shortening
const ORDER_PAWN: i32 = 10_000;
/// Ordering base for wall placements, adjusted by path deltas
const ORDER_WALL: i32 = 5_000;

/// External bounds on one search request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    /// Deepest iteration to attempt (>= 1)
    pub max_depth: i8,
    /// Soft wall-clock budget; the best completed answer is returned on expiry
    pub time_budget: Option<Duration>,
    /// Soft node ceiling, same expiry behavior
    pub node_budget: Option<u64>,
}

impl SearchLimits {
    /// Depth-only limits
    #[must_use]
    pub fn depth(max_depth: i8) -> Self {
        Self {
            max_depth,
            time_budget: None,
            node_budget: None,
        }
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self::depth(4)
    }
}

/// Result of a search: the chosen move and how hard it was to find.
#[derive(Debug, Clone, Copy)]
pub struct SearchResult {
    /// Best move found, `None` when the player has no legal move
    pub best_move: Option<Move>,
    /// Score of the best move from the mover's perspective
    pub score: i32,
    /// Deepest fully completed iteration
    pub depth: i8,
    /// Nodes expanded across all iterations
    pub nodes: u64,
}

/// Iterative-deepening alpha-beta searcher with a transposition table.
///
/// One instance serves one game at a time; the table persists between move
/// requests so later turns reuse earlier work.
pub struct Searcher {
    zobrist: ZobristTable,
    tt: TranspositionTable,
    nodes: u64,
    stopped: bool,
    deadline: Option<Instant>,
    node_budget: u64,
}

impl Searcher {
    /// Create a searcher with the given transposition table size in MB.
    #[must_use]
    pub fn new(tt_size_mb: usize) -> Self {
        Self {
            zobrist: ZobristTable::new(),
            tt: TranspositionTable::new(tt_size_mb),
            nodes: 0,
            stopped: false,
            deadline: None,
            node_budget: u64::MAX,
        }
    }

    /// Forget cached results, for a fresh game.
    pub fn reset(&mut self) {
        self.tt.clear();
    }

    /// Find the best move for `to_move` within the limits.
    ///
    /// Deterministic for a given state and limits (ignoring deadline
    /// expiry): candidate order is a pure function of the state, and among
    /// equal scores the first candidate wins.
    pub fn search(
        &mut self,
        state: &GameState,
        to_move: PlayerId,
        limits: &SearchLimits,
    ) -> SearchResult {
        self.nodes = 0;
        self.stopped = false;
        self.deadline = limits.time_budget.map(|b| Instant::now() + b);
        self.node_budget = limits.node_budget.unwrap_or(u64::MAX);

        let root_hash = self.zobrist.hash(state, to_move);
        let mut best = SearchResult {
            best_move: None,
            score: -INF,
            depth: 0,
            nodes: 0,
        };

        for depth in 1..=limits.max_depth.max(1) {
            let result = self.search_root(state, to_move, depth, root_hash);
            if self.stopped {
                // Partial iteration: keep the previous completed answer
                break;
            }
            best = result;
            debug!(
                "depth {depth} complete: best {:?} score {} ({} nodes)",
                best.best_move, best.score, self.nodes
            );
            if best.score.abs() >= EvalWeights::WIN {
                // Forced outcome proven; deeper iterations cannot change it
                break;
            }
        }

        best.nodes = self.nodes;
        best
    }

    /// Root iteration: full window, no cutoff, records the principal move.
    fn search_root(
        &mut self,
        state: &GameState,
        to_move: PlayerId,
        depth: i8,
        hash: u64,
    ) -> SearchResult {
        let mut alpha = -INF;
        let beta = INF;

        let tt_move = self.tt.get_best_move(hash);
        let moves = self.ordered_moves(state, to_move, tt_move);

        let mut best_move = None;
        let mut best_score = -INF;

        for mv in moves {
            let child = state.apply_move(to_move, mv);
            let child_hash = self.zobrist.update_move(hash, state, to_move, mv);
            let score =
                -self.alpha_beta(&child, to_move.opponent(), depth - 1, -beta, -alpha, child_hash);

            if self.stopped {
                break;
            }

            // Strict improvement only: equal scores keep the earlier move
            if score > best_score {
                best_score = score;
                best_move = Some(mv);
            }
            alpha = alpha.max(score);
        }

        if !self.stopped && best_move.is_some() {
            self.tt
                .store(hash, depth, best_score, EntryType::Exact, best_move);
        }

        SearchResult {
            best_move,
            score: best_score,
            depth,
            nodes: self.nodes,
        }
    }

    /// Recursive negamax alpha-beta.
    fn alpha_beta(
        &mut self,
        state: &GameState,
        to_move: PlayerId,
        depth: i8,
        mut alpha: i32,
        beta: i32,
        hash: u64,
    ) -> i32 {
        self.nodes += 1;
        // Nodes are BFS-heavy here, so a fine-grained budget check is cheap
        // relative to the work between checks.
        if self.nodes & 63 == 0 {
            self.check_budget();
        }
        if self.stopped {
            return 0;
        }

        // Only the player who just moved can have ended the game; the
        // depth term prefers quicker wins over slower ones.
        let opponent = to_move.opponent();
        if state.is_win(opponent) {
            return -(EvalWeights::WIN + i32::from(depth));
        }
        if state.is_win(to_move) {
            return EvalWeights::WIN + i32::from(depth);
        }

        if depth <= 0 {
            return evaluate(state, to_move);
        }

        if let Some(score) = self.tt.probe(hash, depth, alpha, beta) {
            return score;
        }
        let tt_move = self.tt.get_best_move(hash);

        let moves = self.ordered_moves(state, to_move, tt_move);
        if moves.is_empty() {
            // Pawn boxed in with no walls to spend: score it as it stands
            return evaluate(state, to_move);
        }

        let mut best_score = -INF;
        let mut best_move = None;
        let mut entry_type = EntryType::UpperBound;

        for mv in moves {
            let child = state.apply_move(to_move, mv);
            let child_hash = self.zobrist.update_move(hash, state, to_move, mv);
            let score =
                -self.alpha_beta(&child, opponent, depth - 1, -beta, -alpha, child_hash);

            if self.stopped {
                return 0;
            }

            if score > best_score {
                best_score = score;
                best_move = Some(mv);
            }
            if score >= beta {
                entry_type = EntryType::LowerBound;
                break;
            }
            if score > alpha {
                alpha = score;
                entry_type = EntryType::Exact;
            }
        }

        self.tt.store(hash, depth, best_score, entry_type, best_move);
        best_score
    }

    #[inline]
    fn check_budget(&mut self) {
        if self.nodes >= self.node_budget {
            self.stopped = true;
            return;
        }
        if let Some(deadline) = self.deadline {
            if Instant::now() >= deadline {
                self.stopped = true;
            }
        }
    }

    /// Candidate moves for one node, best-first.
    ///
    /// Pawn moves are scored by how much they shorten the mover's own path
    /// (a step onto the goal row outranks everything but the TT move).
    /// Wall candidates come from [`Self::wall_candidates`] scored by the
    /// path-length swing they cause. Stable sort keeps equal scores in
    /// generation order, which makes tie-breaking deterministic.
    fn ordered_moves(
        &self,
        state: &GameState,
        to_move: PlayerId,
        tt_move: Option<Move>,
    ) -> Vec<Move> {
        let board_size = state.board_size();
        let walls = state.walls();
        let me = state.player(to_move);
        let goal_row = me.goal.goal_row(board_size);
        let my_len_before = shortest_path_length(me, walls, board_size)
            .map_or(EvalWeights::NO_PATH_SENTINEL, |d| d as i32);

        let mut scored: Vec<(Move, i32)> = Vec::new();

        for mv in legal_pawn_moves(to_move, state) {
            let Move::Pawn { to } = mv else { unreachable!() };
            let score = if tt_move == Some(mv) {
                ORDER_TT
            } else if to.row == goal_row {
                ORDER_WINNING_PAWN
            } else {
                let moved = Player { cell: to, ..*me };
                let len_after = shortest_path_length(&moved, walls, board_size)
                    .map_or(EvalWeights::NO_PATH_SENTINEL, |d| d as i32);
                ORDER_PAWN + (my_len_before - len_after) * 1_000
            };
            scored.push((mv, score));
        }

        for (mv, score) in self.wall_candidates(state, to_move) {
            let score = if tt_move == Some(mv) { ORDER_TT } else { score };
            scored.push((mv, score));
        }

        scored.sort_by(|a, b| b.1.cmp(&a.1));
        scored.into_iter().map(|(mv, _)| mv).collect()
    }

    /// Hot-spot wall candidates: anchors whose segment touches a cell of
    /// the opponent's shortest path or either pawn. Every returned wall has
    /// passed the full legality check (grid fit plus no-stranding), and its
    /// score is the shortest-path swing it causes, so walls that hurt the
    /// opponent most are searched first.
    fn wall_candidates(&self, state: &GameState, to_move: PlayerId) -> Vec<(Move, i32)> {
        let me = state.player(to_move);
        if me.walls_remaining == 0 {
            return Vec::new();
        }

        let board_size = state.board_size();
        let walls = state.walls();
        let them = state.player(to_move.opponent());

        let my_len_before = shortest_path_length(me, walls, board_size)
            .map_or(EvalWeights::NO_PATH_SENTINEL, |d| d as i32);
        let their_len_before = shortest_path_length(them, walls, board_size)
            .map_or(EvalWeights::NO_PATH_SENTINEL, |d| d as i32);

        let mut hot_cells = shortest_path(them, walls, board_size).unwrap_or_default();
        hot_cells.push(me.cell);
        hot_cells.push(them.cell);

        let mut seen = [[[false; 2]; MAX_BOARD_SIZE - 1]; MAX_BOARD_SIZE - 1];
        let mut scratch = Vec::with_capacity(walls.len() + 1);
        scratch.extend_from_slice(walls);

        let mut out = Vec::new();
        let limit = i32::from(board_size) - 2;

        for cell in hot_cells {
            for dr in -1i32..=0 {
                for dc in -1i32..=0 {
                    let row = i32::from(cell.row) + dr;
                    let col = i32::from(cell.col) + dc;
                    if row < 0 || row > limit || col < 0 || col > limit {
                        continue;
                    }
                    let (row, col) = (row as u8, col as u8);

                    for orientation in [Orientation::Horizontal, Orientation::Vertical] {
                        if seen[row as usize][col as usize][orientation.index()] {
                            continue;
                        }
                        seen[row as usize][col as usize][orientation.index()] = true;

                        let candidate = Wall::new(row, col, orientation, to_move);
                        if !fits_grid(&candidate, walls, board_size) {
                            continue;
                        }

                        scratch.push(candidate);
                        let my_after = shortest_path_length(me, &scratch, board_size);
                        let their_after = shortest_path_length(them, &scratch, board_size);
                        scratch.pop();

                        // A wall that strands either player is illegal
                        let (Some(my_after), Some(their_after)) = (my_after, their_after) else {
                            continue;
                        };

                        let score = ORDER_WALL
                            + (their_after as i32 - their_len_before) * 500
                            - (my_after as i32 - my_len_before) * 250;
                        out.push((
                            Move::Wall {
                                row,
                                col,
                                orientation,
                            },
                            score,
                        ));
                    }
                }
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Cell, GoalSide};
    use crate::rules::{is_legal_wall, legal_moves};

    fn state_with(a: (u8, u8, u8), b: (u8, u8, u8), walls: Vec<Wall>) -> GameState {
        GameState::from_parts(
            9,
            [
                Player {
                    id: PlayerId::One,
                    cell: Cell::new(a.0, a.1),
                    goal: GoalSide::Bottom,
                    walls_remaining: a.2,
                },
                Player {
                    id: PlayerId::Two,
                    cell: Cell::new(b.0, b.1),
                    goal: GoalSide::Top,
                    walls_remaining: b.2,
                },
            ],
            walls,
        )
    }

    #[test]
    fn finds_the_winning_step_at_depth_one() {
        let state = state_with((7, 4, 10), (4, 0, 10), Vec::new());
        let mut searcher = Searcher::new(1);
        let result = searcher.search(&state, PlayerId::One, &SearchLimits::depth(1));
        assert_eq!(
            result.best_move,
            Some(Move::Pawn {
                to: Cell::new(8, 4)
            })
        );
        assert!(result.score >= EvalWeights::WIN);
    }

    #[test]
    fn winning_step_beats_any_wall_at_depth_three() {
        // One step from the goal, walls in hand: the wall must never win
        let state = state_with((7, 2, 10), (4, 4, 10), Vec::new());
        let mut searcher = Searcher::new(1);
        let result = searcher.search(&state, PlayerId::One, &SearchLimits::depth(3));
        assert_eq!(
            result.best_move,
            Some(Move::Pawn {
                to: Cell::new(8, 2)
            })
        );
    }

    #[test]
    fn chosen_move_is_always_legal() {
        let mut state = GameState::new(9);
        let mut searcher = Searcher::new(1);
        let mut to_move = PlayerId::One;
        for _ in 0..6 {
            let result = searcher.search(&state, to_move, &SearchLimits::depth(2));
            let mv = result.best_move.expect("a live game always has a move");
            assert!(
                legal_moves(to_move, &state).contains(&mv),
                "illegal move {mv:?}"
            );
            if let Move::Wall {
                row,
                col,
                orientation,
            } = mv
            {
                assert!(is_legal_wall(&Wall::new(row, col, orientation, to_move), &state));
            }
            state = state.apply_move(to_move, mv);
            if state.winner().is_some() {
                break;
            }
            to_move = to_move.opponent();
        }
    }

    #[test]
    fn search_does_not_mutate_the_input_state() {
        let state = GameState::new(9);
        let snapshot = state.clone();
        let mut searcher = Searcher::new(1);
        let _ = searcher.search(&state, PlayerId::One, &SearchLimits::depth(2));
        assert_eq!(state, snapshot);
    }

    #[test]
    fn search_is_deterministic() {
        let state = GameState::new(9);
        let a = Searcher::new(1).search(&state, PlayerId::One, &SearchLimits::depth(3));
        let b = Searcher::new(1).search(&state, PlayerId::One, &SearchLimits::depth(3));
        assert_eq!(a.best_move, b.best_move);
        assert_eq!(a.score, b.score);
    }

    #[test]
    fn node_budget_still_yields_a_move() {
        let state = GameState::new(9);
        let mut searcher = Searcher::new(1);
        let limits = SearchLimits {
            max_depth: 8,
            time_budget: None,
            node_budget: Some(2_000),
        };
        let result = searcher.search(&state, PlayerId::One, &limits);
        assert!(result.best_move.is_some(), "budget expiry must not lose the answer");
        assert!(result.depth >= 1);
    }

    #[test]
    fn time_budget_is_honored() {
        let state = GameState::new(9);
        let mut searcher = Searcher::new(1);
        let limits = SearchLimits {
            max_depth: 16,
            time_budget: Some(Duration::from_millis(50)),
            node_budget: None,
        };
        let start = Instant::now();
        let result = searcher.search(&state, PlayerId::One, &limits);
        // Generous bound: one node interval past the deadline at worst
        assert!(start.elapsed() < Duration::from_secs(5));
        assert!(result.best_move.is_some());
    }

    #[test]
    fn blocked_race_prefers_the_blocking_wall() {
        // Player two is much closer to its goal; with search depth 2 the
        // engine should reach for a wall (or at least not pick a move that
        // lets the race be lost outright). We only require legality and
        // that the score reflects the bad position.
        let state = state_with((1, 4, 10), (2, 4, 10), Vec::new());
        let mut searcher = Searcher::new(1);
        let result = searcher.search(&state, PlayerId::One, &SearchLimits::depth(2));
        assert!(result.best_move.is_some());
        assert!(result.score < EvalWeights::WIN);
    }

    #[test]
    fn wall_candidates_are_all_legal_and_deduplicated() {
        let state = GameState::new(9).apply_move(
            PlayerId::One,
            Move::Wall {
                row: 4,
                col: 4,
                orientation: Orientation::Horizontal,
            },
        );
        let searcher = Searcher::new(1);
        let candidates = searcher.wall_candidates(&state, PlayerId::Two);
        assert!(!candidates.is_empty());
        for (i, (mv, _)) in candidates.iter().enumerate() {
            let Move::Wall {
                row,
                col,
                orientation,
            } = *mv
            else {
                unreachable!()
            };
            assert!(is_legal_wall(
                &Wall::new(row, col, orientation, PlayerId::Two),
                &state
            ));
            for (other, _) in &candidates[i + 1..] {
                assert_ne!(mv, other, "duplicate candidate");
            }
        }
    }
}
