//! Game state and the turn model

use serde::{Deserialize, Serialize};

use super::{Cell, GoalSide, Move, PlayerId, Wall, DEFAULT_WALL_COUNT, MAX_BOARD_SIZE};

/// One player's pawn position, goal direction and wall budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub cell: Cell,
    pub goal: GoalSide,
    pub walls_remaining: u8,
}

impl Player {
    /// Whether the pawn stands on its goal row
    #[inline]
    pub fn has_reached_goal(&self, board_size: u8) -> bool {
        self.cell.row == self.goal.goal_row(board_size)
    }
}

/// Aggregate state of one game: board size, both players, placed walls.
///
/// States are cheap to copy — two `Copy` players plus a short wall vector —
/// so the search produces an independent successor per explored branch and
/// never touches the caller's state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board_size: u8,
    players: [Player; 2],
    walls: Vec<Wall>,
}

impl GameState {
    /// A fresh game: pawns centered on opposite edge rows, full wall budgets.
    /// Player one starts on row 0 heading for the bottom edge, player two on
    /// the last row heading for the top.
    pub fn new(board_size: u8) -> Self {
        debug_assert!((2..=MAX_BOARD_SIZE as u8).contains(&board_size));
        let mid = board_size / 2;
        Self {
            board_size,
            players: [
                Player {
                    id: PlayerId::One,
                    cell: Cell::new(0, mid),
                    goal: GoalSide::Bottom,
                    walls_remaining: DEFAULT_WALL_COUNT,
                },
                Player {
                    id: PlayerId::Two,
                    cell: Cell::new(board_size - 1, mid),
                    goal: GoalSide::Top,
                    walls_remaining: DEFAULT_WALL_COUNT,
                },
            ],
            walls: Vec::new(),
        }
    }

    /// A game with explicit player setups, for callers restoring a position.
    /// Wall legality is the caller's responsibility here; walls obtained from
    /// a prior validated game satisfy it by construction.
    pub fn from_parts(board_size: u8, players: [Player; 2], walls: Vec<Wall>) -> Self {
        debug_assert!((2..=MAX_BOARD_SIZE as u8).contains(&board_size));
        debug_assert!(players[0].id == PlayerId::One && players[1].id == PlayerId::Two);
        Self {
            board_size,
            players,
            walls,
        }
    }

    #[inline]
    pub fn board_size(&self) -> u8 {
        self.board_size
    }

    #[inline]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    #[inline]
    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    /// Whether any placed wall occupies the given slot
    #[inline]
    pub fn has_wall_slot(&self, row: u8, col: u8, orientation: super::Orientation) -> bool {
        self.walls
            .iter()
            .any(|w| w.row == row && w.col == col && w.orientation == orientation)
    }

    /// Whether either pawn stands on the cell
    #[inline]
    pub fn is_occupied(&self, cell: Cell) -> bool {
        self.players.iter().any(|p| p.cell == cell)
    }

    /// Combined wall budget of both players, used for depth scheduling
    #[inline]
    pub fn total_walls_remaining(&self) -> u8 {
        self.players[0].walls_remaining + self.players[1].walls_remaining
    }

    /// Whether the player stands on its goal row
    #[inline]
    pub fn is_win(&self, id: PlayerId) -> bool {
        self.player(id).has_reached_goal(self.board_size)
    }

    /// The player on its goal row, if any
    pub fn winner(&self) -> Option<PlayerId> {
        self.players
            .iter()
            .find(|p| p.has_reached_goal(self.board_size))
            .map(|p| p.id)
    }

    /// Produce the successor state for an accepted move.
    ///
    /// Trusts its caller: the move must already have been validated (pawn
    /// target via move generation, wall via `is_legal_wall`). Only the cheap
    /// structural half of that contract is re-checked, in debug builds.
    #[must_use]
    pub fn apply_move(&self, mover: PlayerId, mv: Move) -> GameState {
        let mut next = self.clone();
        match mv {
            Move::Pawn { to } => {
                debug_assert!(Cell::in_bounds(
                    i32::from(to.row),
                    i32::from(to.col),
                    self.board_size
                ));
                debug_assert!(!self.is_occupied(to));
                next.players[mover.index()].cell = to;
            }
            Move::Wall {
                row,
                col,
                orientation,
            } => {
                debug_assert!(self.player(mover).walls_remaining > 0);
                debug_assert!(row <= self.board_size - 2 && col <= self.board_size - 2);
                debug_assert!(!self.has_wall_slot(row, col, orientation));
                next.walls.push(Wall::new(row, col, orientation, mover));
                next.players[mover.index()].walls_remaining -= 1;
            }
        }
        next
    }
}
