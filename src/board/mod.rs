//! Board representation for Quoridor
//!
//! Value types shared by the rules, evaluation and search modules: cells,
//! wall segments, players and moves. All of them are cheap `Copy` data; the
//! aggregate [`GameState`] lives in [`state`].

pub mod state;


// Re-exports
pub use state::{GameState, Player};

use serde::{Deserialize, Serialize};

/// Largest supported board edge length. Hash tables are sized for this;
/// individual games may use any size from 2 up to it.
pub const MAX_BOARD_SIZE: usize = 9;
pub const MAX_CELLS: usize = MAX_BOARD_SIZE * MAX_BOARD_SIZE; // 81

/// Conventional board edge length.
pub const DEFAULT_BOARD_SIZE: u8 = 9;
/// Conventional wall allotment per player.
pub const DEFAULT_WALL_COUNT: u8 = 10;

/// The two players of a game.
///
/// A closed enum rather than a runtime-checked integer id: an unknown
/// player cannot be expressed, so validators never need to reject one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    /// Get the other player
    #[inline]
    pub fn opponent(self) -> PlayerId {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// Array index for per-player tables
    #[inline]
    pub fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }
}

/// Which edge row a player is racing toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GoalSide {
    /// Row 0
    Top,
    /// Row `board_size - 1`
    Bottom,
}

impl GoalSide {
    /// The goal row for a board of the given size
    #[inline]
    pub fn goal_row(self, board_size: u8) -> u8 {
        match self {
            GoalSide::Top => 0,
            GoalSide::Bottom => board_size - 1,
        }
    }
}

/// Orientation of a wall segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// Lies along a row boundary, blocking vertical movement
    Horizontal,
    /// Lies along a column boundary, blocking horizontal movement
    Vertical,
}

impl Orientation {
    /// Array index for per-orientation tables
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Orientation::Horizontal => 0,
            Orientation::Vertical => 1,
        }
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub row: u8,
    pub col: u8,
}

impl Cell {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!(row < MAX_BOARD_SIZE as u8 && col < MAX_BOARD_SIZE as u8);
        Self { row, col }
    }

    /// Flat index into `MAX_BOARD_SIZE`-wide tables
    #[inline]
    pub fn to_index(self) -> usize {
        self.row as usize * MAX_BOARD_SIZE + self.col as usize
    }

    #[inline]
    pub fn in_bounds(row: i32, col: i32, board_size: u8) -> bool {
        row >= 0 && row < i32::from(board_size) && col >= 0 && col < i32::from(board_size)
    }

    /// The neighbor one step away, or `None` when it would leave the board.
    #[inline]
    pub fn step(self, dr: i32, dc: i32, board_size: u8) -> Option<Cell> {
        let r = i32::from(self.row) + dr;
        let c = i32::from(self.col) + dc;
        if Cell::in_bounds(r, c, board_size) {
            Some(Cell::new(r as u8, c as u8))
        } else {
            None
        }
    }
}

/// A placed wall segment.
///
/// The anchor `(row, col)` names the grid intersection the segment hangs
/// from, with `0 <= anchor <= board_size - 2` on both axes. A horizontal
/// wall blocks crossing between rows `row` and `row + 1` at columns `col`
/// and `col + 1`; a vertical wall blocks crossing between columns `col` and
/// `col + 1` at rows `row` and `row + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Wall {
    pub row: u8,
    pub col: u8,
    pub orientation: Orientation,
    pub placed_by: PlayerId,
}

impl Wall {
    #[inline]
    pub fn new(row: u8, col: u8, orientation: Orientation, placed_by: PlayerId) -> Self {
        Self {
            row,
            col,
            orientation,
            placed_by,
        }
    }

    /// Whether two walls occupy the same slot, ignoring who placed them
    #[inline]
    pub fn same_slot(&self, other: &Wall) -> bool {
        self.row == other.row && self.col == other.col && self.orientation == other.orientation
    }

    /// Flat index into `(MAX_BOARD_SIZE - 1)`-wide anchor tables
    #[inline]
    pub fn anchor_index(&self) -> usize {
        self.row as usize * (MAX_BOARD_SIZE - 1) + self.col as usize
    }
}

/// A single ply: step the pawn or spend a wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Move the pawn to `to` (adjacent step, jump, or side-step)
    Pawn { to: Cell },
    /// Place a wall anchored at `(row, col)`
    Wall {
        row: u8,
        col: u8,
        orientation: Orientation,
    },
}

impl Move {
    /// `true` for the wall-placement variant
    #[inline]
    pub fn is_wall(&self) -> bool {
        matches!(self, Move::Wall { .. })
    }
}
