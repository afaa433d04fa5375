//! Search module for the Quoridor AI
//!
//! Contains:
//! - Zobrist hashing for state identification
//! - Transposition table for caching search results
//! - Alpha-beta search with iterative deepening and budget handling

pub mod alphabeta;
pub mod tt;
pub mod zobrist;

pub use alphabeta::{SearchLimits, SearchResult, Searcher};
pub use tt::{EntryType, TTEntry, TTStats, TranspositionTable};
pub use zobrist::ZobristTable;
