//! Quoridor rules engine and AI
//!
//! A core engine for a two-player Quoridor-style board game: a 9×9 grid
//! where each player races a pawn to the opposite edge row and may instead
//! spend one of a limited stock of walls to block movement — under the
//! invariant that every pawn must always keep some path to its goal row.
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: value types and the per-game [`GameState`]
//! - [`rules`]: blocking geometry, BFS reachability, wall legality, move
//!   generation
//! - [`eval`]: heuristic position evaluation
//! - [`search`]: alpha-beta search with transposition table
//! - [`engine`]: the [`AiEngine`] front door with difficulty profiles
//!
//! # Quick start
//!
//! ```
//! use quoridor::{AiEngine, Difficulty, GameState, PlayerId};
//!
//! let mut state = GameState::new(9);
//! let mut engine = AiEngine::with_tt_size(1);
//!
//! if let Some(mv) = engine.choose_move(&state, PlayerId::One, Difficulty::Medium) {
//!     state = state.apply_move(PlayerId::One, mv);
//! }
//! assert!(state.winner().is_none());
//! ```
//!
//! # Scope
//!
//! The crate holds no game sessions and speaks no wire protocol: the caller
//! passes a [`GameState`] in, gets moves and verdicts back, and owns
//! persistence and transport. All rule violations are ordinary `false`/
//! `None` outcomes; only caller contract violations fail fast.

pub mod board;
pub mod engine;
pub mod eval;
pub mod rules;
pub mod search;

// Re-export the external interface at the crate root
pub use board::{
    Cell, GameState, GoalSide, Move, Orientation, Player, PlayerId, Wall, DEFAULT_BOARD_SIZE,
    DEFAULT_WALL_COUNT,
};
pub use engine::{AiEngine, Difficulty, SearchProfile};
pub use eval::evaluate;
pub use rules::{
    has_path, is_legal_wall, is_movement_blocked, legal_moves, legal_pawn_moves, legal_wall_moves,
    shortest_path, shortest_path_length,
};
pub use search::{SearchLimits, SearchResult, Searcher};
