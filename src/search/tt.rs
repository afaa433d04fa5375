//! Transposition table for caching search results
//!
//! Search results are stored indexed by state hash so that positions reached
//! through different move orders are evaluated once. Entries are plain value
//! lookups; the search never mutates a stored entry, it only replaces whole
//! slots under the depth-preferred policy. The search is single-threaded
//! (one move request, one recursion), so no interior locking is needed.

use crate::board::Move;

/// Entry type for score interpretation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryType {
    /// Exact score - the search completed inside the window
    Exact,
    /// Lower bound - score >= stored value (beta cutoff)
    LowerBound,
    /// Upper bound - score <= stored value (alpha fail-low)
    UpperBound,
}

/// Transposition table entry
#[derive(Debug, Clone, Copy)]
pub struct TTEntry {
    /// Zobrist hash of the state
    pub hash: u64,
    /// Search depth for this entry
    pub depth: i8,
    /// Evaluation score
    pub score: i32,
    /// Type of score (exact, lower bound, upper bound)
    pub entry_type: EntryType,
    /// Best move found for this state
    pub best_move: Option<Move>,
}

/// Direct-mapped transposition table.
///
/// Each hash maps to exactly one slot; collisions are resolved by the
/// replacement policy (deeper or same-position entries win).
pub struct TranspositionTable {
    entries: Vec<Option<TTEntry>>,
    size: usize,
}

impl TranspositionTable {
    /// Create a table with the given size in megabytes (minimum 1024 slots).
    #[must_use]
    pub fn new(size_mb: usize) -> Self {
        let entry_size = std::mem::size_of::<Option<TTEntry>>();
        let size = ((size_mb * 1024 * 1024) / entry_size).max(1024);

        Self {
            entries: vec![None; size],
            size,
        }
    }

    /// Probe for a usable score.
    ///
    /// Returns the stored score only when the entry is at least `depth` deep
    /// and its bound type resolves against the current window. Use
    /// [`Self::get_best_move`] for ordering when the score is not usable.
    #[must_use]
    pub fn probe(&self, hash: u64, depth: i8, alpha: i32, beta: i32) -> Option<i32> {
        let idx = (hash as usize) % self.size;
        let entry = self.entries[idx]?;

        if entry.hash != hash || entry.depth < depth {
            return None;
        }

        match entry.entry_type {
            EntryType::Exact => Some(entry.score),
            EntryType::LowerBound if entry.score >= beta => Some(entry.score),
            EntryType::UpperBound if entry.score <= alpha => Some(entry.score),
            _ => None,
        }
    }

    /// Best move recorded for the state, for move ordering, regardless of
    /// whether the stored score is usable at the current depth.
    #[must_use]
    pub fn get_best_move(&self, hash: u64) -> Option<Move> {
        let idx = (hash as usize) % self.size;
        self.entries[idx].and_then(|e| if e.hash == hash { e.best_move } else { None })
    }

    /// Store a result, replacing the slot when it is empty, holds the same
    /// state, or holds a shallower search.
    pub fn store(
        &mut self,
        hash: u64,
        depth: i8,
        score: i32,
        entry_type: EntryType,
        best_move: Option<Move>,
    ) {
        let idx = (hash as usize) % self.size;

        let should_replace = match &self.entries[idx] {
            None => true,
            Some(e) => e.hash == hash || e.depth <= depth,
        };

        if should_replace {
            self.entries[idx] = Some(TTEntry {
                hash,
                depth,
                score,
                entry_type,
                best_move,
            });
        }
    }

    /// Drop every entry, for a fresh game.
    pub fn clear(&mut self) {
        self.entries.fill(None);
    }

    /// Occupancy statistics.
    #[must_use]
    pub fn stats(&self) -> TTStats {
        let used = self.entries.iter().filter(|e| e.is_some()).count();
        TTStats {
            size: self.size,
            used,
        }
    }
}

/// Transposition table usage counters.
#[derive(Debug, Clone, Copy)]
pub struct TTStats {
    /// Total number of slots
    pub size: usize,
    /// Occupied slots
    pub used: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Cell, Move};

    fn pawn(row: u8, col: u8) -> Option<Move> {
        Some(Move::Pawn {
            to: Cell::new(row, col),
        })
    }

    #[test]
    fn store_then_probe_exact() {
        let mut tt = TranspositionTable::new(1);
        let hash = 0x1234_5678_9ABC_DEF0;

        tt.store(hash, 5, 100, EntryType::Exact, pawn(4, 4));

        assert_eq!(tt.probe(hash, 5, -1000, 1000), Some(100));
        assert_eq!(tt.get_best_move(hash), pawn(4, 4));
    }

    #[test]
    fn shallow_entry_score_is_not_usable() {
        let mut tt = TranspositionTable::new(1);
        let hash = 0x1234_5678_9ABC_DEF0;

        tt.store(hash, 3, 100, EntryType::Exact, pawn(2, 2));

        assert_eq!(tt.probe(hash, 5, -1000, 1000), None);
        // Best move still flows back for ordering
        assert_eq!(tt.get_best_move(hash), pawn(2, 2));
    }

    #[test]
    fn lower_bound_respects_beta() {
        let mut tt = TranspositionTable::new(1);
        let hash = 0x1111;

        tt.store(hash, 5, 200, EntryType::LowerBound, None);

        assert_eq!(tt.probe(hash, 5, -1000, 150), Some(200)); // 200 >= 150
        assert_eq!(tt.probe(hash, 5, -1000, 300), None); // 200 < 300
    }

    #[test]
    fn upper_bound_respects_alpha() {
        let mut tt = TranspositionTable::new(1);
        let hash = 0x2222;

        tt.store(hash, 5, 50, EntryType::UpperBound, None);

        assert_eq!(tt.probe(hash, 5, 100, 1000), Some(50)); // 50 <= 100
        assert_eq!(tt.probe(hash, 5, 30, 1000), None); // 50 > 30
    }

    #[test]
    fn hash_mismatch_misses() {
        let mut tt = TranspositionTable::new(1);
        tt.store(0xAAAA, 5, 100, EntryType::Exact, pawn(1, 1));

        assert_eq!(tt.probe(0xBBBB, 5, -1000, 1000), None);
        assert_eq!(tt.get_best_move(0xBBBB), None);
    }

    #[test]
    fn deeper_entry_replaces_shallower() {
        let mut tt = TranspositionTable::new(1);
        let hash = 0x3333;

        tt.store(hash, 3, 100, EntryType::Exact, pawn(1, 1));
        tt.store(hash, 5, 200, EntryType::Exact, pawn(2, 2));

        assert_eq!(tt.probe(hash, 5, -1000, 1000), Some(200));
    }

    #[test]
    fn same_position_always_refreshes() {
        let mut tt = TranspositionTable::new(1);
        let hash = 0x4444;

        tt.store(hash, 5, 100, EntryType::Exact, pawn(1, 1));
        tt.store(hash, 3, 200, EntryType::Exact, pawn(2, 2));

        // Shallower same-hash write replaced the slot, so a depth-5 probe
        // now misses but the fresher move remains available.
        assert_eq!(tt.probe(hash, 5, -1000, 1000), None);
        assert_eq!(tt.get_best_move(hash), pawn(2, 2));
    }

    #[test]
    fn clear_empties_the_table() {
        let mut tt = TranspositionTable::new(1);
        tt.store(0x5555, 5, 100, EntryType::Exact, None);
        tt.clear();
        assert_eq!(tt.probe(0x5555, 5, -1000, 1000), None);
        assert_eq!(tt.stats().used, 0);
    }

    #[test]
    fn stats_count_occupancy() {
        let mut tt = TranspositionTable::new(1);
        assert_eq!(tt.stats().used, 0);
        tt.store(0x111, 5, 100, EntryType::Exact, None);
        tt.store(0x222, 5, 100, EntryType::Exact, None);
        let stats = tt.stats();
        assert_eq!(stats.used, 2);
        assert!(stats.size >= 1024);
    }
}
