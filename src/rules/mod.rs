//! Game rules for Quoridor
//!
//! This module implements the rule set:
//! - Wall blocking geometry (which wall stops which step)
//! - Reachability (BFS to the goal row)
//! - Wall placement legality
//! - Legal move generation (pawn steps, jumps, side-steps, walls)

pub mod blocking;
pub mod moves;
pub mod path;
pub mod walls;

// Re-exports for convenient access
pub use blocking::is_movement_blocked;
pub use moves::{legal_moves, legal_pawn_moves, legal_wall_moves};
pub use path::{has_path, shortest_path, shortest_path_length};
pub use walls::{fits_grid, is_legal_wall};
