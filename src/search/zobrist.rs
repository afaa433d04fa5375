//! Zobrist hashing for state identification
//!
//! Zobrist hashing gives O(1) incremental hash updates when a pawn steps or
//! a wall lands, which is what makes transposition-table lookups affordable
//! during search. The hash covers everything that distinguishes two states
//! for search purposes: pawn cells, the wall set, both walls-remaining
//! counts and the side to move.

use crate::board::{GameState, Move, PlayerId, Wall, DEFAULT_WALL_COUNT, MAX_BOARD_SIZE, MAX_CELLS};

/// Anchor slots per orientation
const MAX_ANCHORS: usize = (MAX_BOARD_SIZE - 1) * (MAX_BOARD_SIZE - 1);
/// Distinct walls-remaining values, 0 through the full allotment
const WALL_COUNTS: usize = DEFAULT_WALL_COUNT as usize + 1;

/// Zobrist hash table for Quoridor states.
///
/// XOR-based hashing with precomputed pseudo-random values per
/// (pawn, cell), (orientation, anchor), (player, walls-remaining) and the
/// side to move.
pub struct ZobristTable {
    /// Pawn-position values, per player
    pawns: [[u64; MAX_CELLS]; 2],
    /// Wall-slot values, per orientation
    walls: [[u64; MAX_ANCHORS]; 2],
    /// Walls-remaining values, per player
    wall_counts: [[u64; WALL_COUNTS]; 2],
    /// XORed in when player one is to move
    one_to_move: u64,
}

impl ZobristTable {
    /// Create a table with deterministic pseudo-random values.
    ///
    /// A fixed-seed LCG (Knuth's MMIX constants) keeps hashes reproducible
    /// across runs, which the tests rely on.
    #[must_use]
    pub fn new() -> Self {
        let mut seed: u64 = 0x9E37_79B9_7F4A_7C15;
        let mut next_rand = || {
            seed = seed
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            seed
        };

        let mut pawns = [[0u64; MAX_CELLS]; 2];
        for table in &mut pawns {
            for v in table.iter_mut() {
                *v = next_rand();
            }
        }

        let mut walls = [[0u64; MAX_ANCHORS]; 2];
        for table in &mut walls {
            for v in table.iter_mut() {
                *v = next_rand();
            }
        }

        let mut wall_counts = [[0u64; WALL_COUNTS]; 2];
        for table in &mut wall_counts {
            for v in table.iter_mut() {
                *v = next_rand();
            }
        }

        Self {
            pawns,
            walls,
            wall_counts,
            one_to_move: next_rand(),
        }
    }

    /// Compute the full hash of a state.
    ///
    /// Iterates the whole state; during search use [`Self::update_move`]
    /// on the parent hash instead.
    #[must_use]
    pub fn hash(&self, state: &GameState, side_to_move: PlayerId) -> u64 {
        let mut h = 0u64;

        for id in [PlayerId::One, PlayerId::Two] {
            let p = state.player(id);
            h ^= self.pawns[id.index()][p.cell.to_index()];
            h ^= self.wall_counts[id.index()][usize::from(p.walls_remaining).min(WALL_COUNTS - 1)];
        }

        for wall in state.walls() {
            h ^= self.wall_value(wall);
        }

        if side_to_move == PlayerId::One {
            h ^= self.one_to_move;
        }

        h
    }

    /// Incrementally update `hash` for `mover` playing `mv` on `state`.
    ///
    /// `state` is the position *before* the move. O(1); equals the full
    /// hash of the successor with the side to move flipped.
    #[must_use]
    pub fn update_move(&self, hash: u64, state: &GameState, mover: PlayerId, mv: Move) -> u64 {
        let mut h = hash ^ self.one_to_move;
        match mv {
            Move::Pawn { to } => {
                let from = state.player(mover).cell;
                h ^= self.pawns[mover.index()][from.to_index()];
                h ^= self.pawns[mover.index()][to.to_index()];
            }
            Move::Wall {
                row,
                col,
                orientation,
            } => {
                let wall = Wall::new(row, col, orientation, mover);
                h ^= self.wall_value(&wall);
                let before = usize::from(state.player(mover).walls_remaining).min(WALL_COUNTS - 1);
                debug_assert!(before > 0);
                h ^= self.wall_counts[mover.index()][before];
                h ^= self.wall_counts[mover.index()][before - 1];
            }
        }
        h
    }

    #[inline]
    fn wall_value(&self, wall: &Wall) -> u64 {
        self.walls[wall.orientation.index()][wall.anchor_index()]
    }
}

impl Default for ZobristTable {
    fn default() -> Self {
        Self::new()
    }
}
