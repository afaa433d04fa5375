//! Reachability via breadth-first search
//!
//! Quoridor's central invariant — every pawn keeps a route to its goal row —
//! and the evaluation's dominant term both reduce to the same question:
//! what is the shortest unblocked path from a pawn to *any* cell of its goal
//! row? BFS over the 4-neighbor grid answers it in O(cells) with the wall
//! list consulted per edge; no per-call grid rebuild.
//!
//! The boolean answer and the path length are independent of visitation
//! order. The concrete cell sequence returned by [`shortest_path`] is one of
//! possibly several minimal paths and follows the fixed neighbor order
//! (up, down, left, right).

use std::collections::VecDeque;

use crate::board::{Cell, Player, Wall, MAX_CELLS};

use super::blocking::is_movement_blocked;

/// Neighbor offsets, scanned in this order everywhere in the crate
pub(crate) const NEIGHBORS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Whether the player can still reach its goal row.
#[must_use]
pub fn has_path(player: &Player, walls: &[Wall], board_size: u8) -> bool {
    bfs_distance(player, walls, board_size).is_some()
}

/// Length in steps of the shortest route to the goal row, or `None` when
/// every route is walled off.
#[must_use]
pub fn shortest_path_length(player: &Player, walls: &[Wall], board_size: u8) -> Option<u32> {
    bfs_distance(player, walls, board_size)
}

/// The cells of one shortest route, starting at the pawn's cell and ending
/// on the goal row. `None` when the goal row is unreachable.
#[must_use]
pub fn shortest_path(player: &Player, walls: &[Wall], board_size: u8) -> Option<Vec<Cell>> {
    let goal_row = player.goal.goal_row(board_size);
    let start = player.cell;

    let mut visited = [false; MAX_CELLS];
    // Parent chain for path reconstruction; usize::MAX marks the start
    let mut parent = [usize::MAX; MAX_CELLS];
    let mut queue = VecDeque::new();

    visited[start.to_index()] = true;
    queue.push_back(start);

    while let Some(cell) = queue.pop_front() {
        if cell.row == goal_row {
            let mut path = Vec::new();
            let mut idx = cell.to_index();
            let mut cur = cell;
            loop {
                path.push(cur);
                if parent[idx] == usize::MAX {
                    break;
                }
                idx = parent[idx];
                cur = Cell::new(
                    (idx / crate::board::MAX_BOARD_SIZE) as u8,
                    (idx % crate::board::MAX_BOARD_SIZE) as u8,
                );
            }
            path.reverse();
            return Some(path);
        }

        for (dr, dc) in NEIGHBORS {
            let Some(next) = cell.step(dr, dc, board_size) else {
                continue;
            };
            if visited[next.to_index()] || is_movement_blocked(cell, next, walls) {
                continue;
            }
            visited[next.to_index()] = true;
            parent[next.to_index()] = cell.to_index();
            queue.push_back(next);
        }
    }

    None
}

/// Distance-only BFS; cheaper than [`shortest_path`] and the work-horse for
/// wall validation and evaluation.
fn bfs_distance(player: &Player, walls: &[Wall], board_size: u8) -> Option<u32> {
    let goal_row = player.goal.goal_row(board_size);
    let start = player.cell;

    let mut visited = [false; MAX_CELLS];
    let mut queue = VecDeque::new();

    visited[start.to_index()] = true;
    queue.push_back((start, 0u32));

    while let Some((cell, dist)) = queue.pop_front() {
        if cell.row == goal_row {
            return Some(dist);
        }

        for (dr, dc) in NEIGHBORS {
            let Some(next) = cell.step(dr, dc, board_size) else {
                continue;
            };
            if visited[next.to_index()] || is_movement_blocked(cell, next, walls) {
                continue;
            }
            visited[next.to_index()] = true;
            queue.push_back((next, dist + 1));
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{GameState, GoalSide, Orientation, PlayerId};

    fn player_at(row: u8, col: u8, goal: GoalSide) -> Player {
        Player {
            id: PlayerId::One,
            cell: Cell::new(row, col),
            goal,
            walls_remaining: 10,
        }
    }

    #[test]
    fn fresh_board_distances_are_full_crossings() {
        let state = GameState::new(9);
        let walls = state.walls();
        assert_eq!(
            shortest_path_length(state.player(PlayerId::One), walls, 9),
            Some(8)
        );
        assert_eq!(
            shortest_path_length(state.player(PlayerId::Two), walls, 9),
            Some(8)
        );
    }

    #[test]
    fn pawn_on_goal_row_has_zero_distance() {
        let p = player_at(0, 4, GoalSide::Top);
        assert_eq!(shortest_path_length(&p, &[], 9), Some(0));
        assert_eq!(shortest_path(&p, &[], 9).unwrap(), vec![Cell::new(0, 4)]);
    }

    #[test]
    fn any_goal_row_cell_is_accepted() {
        // A wall fence forces the pawn to reach the goal row far from its
        // own column; the length must reflect the detour, not a fixed target.
        let p = player_at(0, 0, GoalSide::Bottom);
        let walls = [
            Wall::new(7, 0, Orientation::Horizontal, PlayerId::Two),
            Wall::new(7, 2, Orientation::Horizontal, PlayerId::Two),
            Wall::new(7, 4, Orientation::Horizontal, PlayerId::Two),
            Wall::new(7, 6, Orientation::Horizontal, PlayerId::Two),
        ];
        // Columns 0..=7 are fenced at the 7/8 boundary; only col 8 passes.
        let len = shortest_path_length(&p, &walls, 9).unwrap();
        assert_eq!(len, 16); // 8 right + 8 down
        let path = shortest_path(&p, &walls, 9).unwrap();
        assert_eq!(path.len() as u32, len + 1);
        assert_eq!(path.first().copied(), Some(Cell::new(0, 0)));
        assert_eq!(path.last().unwrap().row, 8);
    }

    #[test]
    fn walled_off_pawn_has_no_path() {
        // Pocket in the top-left corner: the pawn cannot leave it.
        let p = player_at(0, 0, GoalSide::Bottom);
        let walls = [
            Wall::new(0, 0, Orientation::Horizontal, PlayerId::Two),
            Wall::new(0, 1, Orientation::Vertical, PlayerId::Two),
        ];
        // Down from (0,0) and (0,1) blocked by the horizontal wall; right
        // from (0,1) blocked by the vertical wall.
        assert!(!has_path(&p, &walls, 9));
        assert!(shortest_path(&p, &walls, 9).is_none());
        assert_eq!(shortest_path_length(&p, &walls, 9), None);
    }

    #[test]
    fn path_length_matches_path_cells() {
        let state = GameState::new(9);
        let p = state.player(PlayerId::One);
        let len = shortest_path_length(p, state.walls(), 9).unwrap();
        let path = shortest_path(p, state.walls(), 9).unwrap();
        assert_eq!(path.len() as u32, len + 1);
        // Consecutive cells are adjacent and unblocked
        for pair in path.windows(2) {
            let d = pair[0].row.abs_diff(pair[1].row) + pair[0].col.abs_diff(pair[1].col);
            assert_eq!(d, 1);
            assert!(!is_movement_blocked(pair[0], pair[1], state.walls()));
        }
    }

    /// Exhaustive DFS over simple paths, for cross-checking BFS on tiny boards.
    fn brute_force_min(
        player: &Player,
        walls: &[Wall],
        board_size: u8,
        cell: Cell,
        seen: &mut Vec<Cell>,
        best: &mut Option<u32>,
    ) {
        if cell.row == player.goal.goal_row(board_size) {
            let dist = seen.len() as u32;
            *best = Some(best.map_or(dist, |b: u32| b.min(dist)));
            return;
        }
        for (dr, dc) in NEIGHBORS {
            let Some(next) = cell.step(dr, dc, board_size) else {
                continue;
            };
            if seen.contains(&next) || is_movement_blocked(cell, next, walls) {
                continue;
            }
            seen.push(next);
            brute_force_min(player, walls, board_size, next, seen, best);
            seen.pop();
        }
    }

    #[test]
    fn bfs_agrees_with_brute_force_on_small_boards() {
        let wall_sets: [&[Wall]; 3] = [
            &[],
            &[Wall::new(1, 1, Orientation::Horizontal, PlayerId::Two)],
            &[
                Wall::new(0, 0, Orientation::Horizontal, PlayerId::Two),
                Wall::new(1, 2, Orientation::Vertical, PlayerId::Two),
                Wall::new(2, 1, Orientation::Horizontal, PlayerId::Two),
            ],
        ];
        for board_size in 3u8..=5 {
            for walls in wall_sets {
                let walls: Vec<Wall> = walls
                    .iter()
                    .filter(|w| w.row <= board_size - 2 && w.col <= board_size - 2)
                    .copied()
                    .collect();
                for col in 0..board_size {
                    let p = player_at(0, col, GoalSide::Bottom);
                    let mut best = None;
                    let mut seen = vec![p.cell];
                    brute_force_min(&p, &walls, board_size, p.cell, &mut seen, &mut best);
                    // seen starts with the pawn cell, so lengths align
                    let brute = best.map(|b| b - 1);
                    assert_eq!(
                        shortest_path_length(&p, &walls, board_size),
                        brute,
                        "size {board_size} col {col} walls {walls:?}"
                    );
                }
            }
        }
    }
}
