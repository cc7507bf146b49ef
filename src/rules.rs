//! Move legality and capture resolution.
//!
//! This module provides the rules layer of the engine:
//! - Group liberty search and flood removal of captured groups
//! - Legality checking (bounds, occupancy, suicide) on a probe copy
//! - Move execution with prisoner accounting
//!
//! A group is the maximal set of same-colored stones connected through
//! 4-adjacency. It is never materialized; every operation here discovers it
//! on demand with an explicit-stack flood traversal.

use std::fmt;

use crate::board::{Board, Color, Move, Point};

/// Stones captured by each side so far. Counts never decrease.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Prisoners {
    pub black: u32,
    pub white: u32,
}

impl Prisoners {
    /// Captures taken by `color`.
    pub fn get(&self, color: Color) -> u32 {
        match color {
            Color::Black => self.black,
            Color::White => self.white,
        }
    }

    /// Credit `n` captured stones to `color`.
    pub fn add(&mut self, color: Color, n: u32) {
        match color {
            Color::Black => self.black += n,
            Color::White => self.white += n,
        }
    }
}

/// Why a move was rejected.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveError {
    /// Target point lies outside the board
    OutOfBounds,
    /// Target point already holds a stone
    Occupied,
    /// Placement would leave its own group without liberties and captures nothing
    Suicide,
    /// The game has already finished
    GameOver,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::OutOfBounds => write!(f, "point is outside the board"),
            MoveError::Occupied => write!(f, "point is not empty"),
            MoveError::Suicide => write!(f, "move would be suicide"),
            MoveError::GameOver => write!(f, "the game is already over"),
        }
    }
}

impl std::error::Error for MoveError {}

/// Whether the same-color group through `pt` has at least one liberty.
///
/// Floods the group with an explicit stack and a visited set, returning as
/// soon as any empty neighbor turns up. `pt` is taken to belong to the
/// group of `color` whatever the cell currently holds, so a legality probe
/// can ask about a stone it has just placed. O(group size) time and space.
pub fn has_liberty(board: &Board, pt: Point, color: Color) -> bool {
    let size = board.size();
    let idx = |(row, col): Point| row * size + col;
    let mut stack = vec![pt];
    let mut visited = vec![false; size * size];

    while let Some(p) = stack.pop() {
        if visited[idx(p)] {
            continue;
        }
        visited[idx(p)] = true;
        for n in board.neighbors(p) {
            match board.get(n) {
                None => return true,
                Some(c) if c == color => stack.push(n),
                Some(_) => {}
            }
        }
    }
    false
}

/// Flood-remove the group of `color` through `pt`, returning how many stones
/// came off. Clearing cells as it goes doubles as the visited set.
///
/// The caller must already have confirmed the group has no liberties; this
/// does not re-check.
pub fn remove_group(board: &mut Board, pt: Point, color: Color) -> u32 {
    let mut stack = vec![pt];
    let mut removed = 0;

    while let Some(p) = stack.pop() {
        if board.get(p) != Some(color) {
            continue;
        }
        board.set(p, None);
        removed += 1;
        for n in board.neighbors(p) {
            if board.get(n) == Some(color) {
                stack.push(n);
            }
        }
    }
    removed
}

/// Capture every adjacent opponent group left without liberties by the stone
/// just placed at `pt`, crediting the total to `color`'s prisoner tally.
///
/// Each of the up to 4 neighbors is checked in turn; the scan never stops at
/// the first capture, so one placement can take several distinct groups. A
/// group adjacent at two points cannot be counted twice: it is removed the
/// moment it is found, and a cleared cell no longer holds the opponent color.
pub fn capture_adjacent(
    board: &mut Board,
    pt: Point,
    color: Color,
    prisoners: &mut Prisoners,
) -> u32 {
    let opp = color.other();
    let mut captured = 0;

    for n in board.neighbors(pt) {
        if board.get(n) == Some(opp) && !has_liberty(board, n, opp) {
            captured += remove_group(board, n, opp);
        }
    }
    if captured > 0 {
        prisoners.add(color, captured);
    }
    captured
}

/// Validate a placement for `color` without touching the caller's board.
///
/// Bounds and occupancy are checked directly. The suicide rule runs on a
/// probe copy: place the stone, and the move stands if it captures at least
/// one adjacent opponent group, or failing that if the placed stone's own
/// group keeps a liberty. Captures come first, so a stone that fills its own
/// last liberty while taking the opponent's group is legal.
pub fn check_move(board: &Board, pt: Point, color: Color) -> Result<(), MoveError> {
    if !board.in_bounds(pt) {
        return Err(MoveError::OutOfBounds);
    }
    if board.get(pt).is_some() {
        return Err(MoveError::Occupied);
    }

    let mut probe = board.clone();
    probe.set(pt, Some(color));

    let opp = color.other();
    for n in probe.neighbors(pt) {
        if probe.get(n) == Some(opp) && !has_liberty(&probe, n, opp) {
            return Ok(());
        }
    }
    if has_liberty(&probe, pt, color) {
        Ok(())
    } else {
        Err(MoveError::Suicide)
    }
}

/// Boolean form of [`check_move`]. Pass is always legal.
pub fn is_legal(board: &Board, mv: Move, color: Color) -> bool {
    match mv {
        Move::Pass => true,
        Move::Place(pt) => check_move(board, pt, color).is_ok(),
    }
}

/// Execute a move already known to be legal, returning the number of stones
/// it captured. Pass changes nothing and captures nothing.
///
/// Legality is the caller's contract ([`check_move`] first); an off-board
/// placement panics rather than corrupting the grid.
pub fn apply(board: &mut Board, mv: Move, color: Color, prisoners: &mut Prisoners) -> u32 {
    match mv {
        Move::Pass => 0,
        Move::Place(pt) => {
            board.set(pt, Some(color));
            capture_adjacent(board, pt, color, prisoners)
        }
    }
}

/// Whether `color` has at least one legal placement anywhere on the board.
///
/// Scans cells in row-major order and short-circuits on the first hit.
/// Pass is not counted: a position with no placeable cell is "no valid
/// moves" even though Pass itself stays legal.
pub fn has_any_legal_move(board: &Board, color: Color) -> bool {
    board.points().any(|pt| check_move(board, pt, color).is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from(rows: &[&str]) -> Board {
        let mut board = Board::new(rows.len());
        for (row, line) in rows.iter().enumerate() {
            for (col, ch) in line.split_whitespace().enumerate() {
                let cell = match ch {
                    "X" => Some(Color::Black),
                    "O" => Some(Color::White),
                    "." => None,
                    other => panic!("unexpected cell {other:?}"),
                };
                board.set((row, col), cell);
            }
        }
        board
    }

    #[test]
    fn test_lone_stone_has_liberties() {
        let board = board_from(&[
            ". . .",
            ". X .",
            ". . .",
        ]);
        assert!(has_liberty(&board, (1, 1), Color::Black));
    }

    #[test]
    fn test_surrounded_stone_has_none() {
        let board = board_from(&[
            ". O .",
            "O X O",
            ". O .",
        ]);
        assert!(!has_liberty(&board, (1, 1), Color::Black));
    }

    #[test]
    fn test_group_shares_liberties() {
        // The black pair's only liberty is (0, 2), reachable from either stone.
        let board = board_from(&[
            "X X .",
            "O O O",
            ". . .",
        ]);
        assert!(has_liberty(&board, (0, 0), Color::Black));
        assert!(has_liberty(&board, (0, 1), Color::Black));
    }

    #[test]
    fn test_liberty_probe_for_unplaced_stone() {
        // Asking about an empty point treats it as a stone of the given
        // color, which is how the legality probe uses it.
        let board = board_from(&[
            ". X .",
            "X . X",
            ". X .",
        ]);
        assert!(!has_liberty(&board, (1, 1), Color::White));
        assert!(has_liberty(&board, (1, 1), Color::Black));
    }

    #[test]
    fn test_remove_group_clears_every_stone() {
        let mut board = board_from(&[
            "O O .",
            "O . .",
            ". . X",
        ]);
        let removed = remove_group(&mut board, (0, 0), Color::White);
        assert_eq!(removed, 3);
        assert_eq!(board.get((0, 0)), None);
        assert_eq!(board.get((0, 1)), None);
        assert_eq!(board.get((1, 0)), None);
        assert_eq!(board.get((2, 2)), Some(Color::Black), "other stones stay");
    }

    #[test]
    fn test_capture_counts_group_once_despite_double_adjacency() {
        // The white L-group touches the placed stone at two neighbors.
        let mut board = board_from(&[
            "O O X",
            "O . .",
            "X . .",
        ]);
        board.set((1, 1), Some(Color::Black));
        let mut prisoners = Prisoners::default();
        let captured = capture_adjacent(&mut board, (1, 1), Color::Black, &mut prisoners);
        assert_eq!(captured, 3);
        assert_eq!(prisoners.black, 3);
        assert_eq!(board.get((0, 0)), None);
        assert_eq!(board.get((0, 1)), None);
        assert_eq!(board.get((1, 0)), None);
    }

    #[test]
    fn test_capture_leaves_survivors_alone() {
        let mut board = board_from(&[
            ". X O",
            "X O .",
            ". . .",
        ]);
        board.set((0, 0), Some(Color::White));
        let mut prisoners = Prisoners::default();
        let captured = capture_adjacent(&mut board, (0, 0), Color::White, &mut prisoners);
        // Only the stone at (0, 1) is out of liberties; (1, 0) keeps (2, 0).
        assert_eq!(captured, 1);
        assert_eq!(board.get((0, 1)), None);
        assert_eq!(board.get((1, 0)), Some(Color::Black));
        assert_eq!(prisoners.white, 1);
    }

    #[test]
    fn test_check_move_rejects_out_of_bounds() {
        let board = Board::new(3);
        assert_eq!(
            check_move(&board, (3, 0), Color::Black),
            Err(MoveError::OutOfBounds)
        );
        assert_eq!(
            check_move(&board, (0, 9), Color::Black),
            Err(MoveError::OutOfBounds)
        );
    }

    #[test]
    fn test_check_move_rejects_occupied() {
        let mut board = Board::new(3);
        board.set((1, 1), Some(Color::White));
        assert_eq!(
            check_move(&board, (1, 1), Color::Black),
            Err(MoveError::Occupied)
        );
    }

    #[test]
    fn test_check_move_rejects_pure_suicide() {
        let board = board_from(&[
            ". X .",
            "X O .",
            ". . .",
        ]);
        assert_eq!(
            check_move(&board, (0, 0), Color::White),
            Err(MoveError::Suicide)
        );
    }

    #[test]
    fn test_capturing_into_zero_liberties_is_legal() {
        // White at (0, 0) has no liberties of its own but captures (0, 1).
        let board = board_from(&[
            ". X O",
            "X O .",
            ". . .",
        ]);
        assert_eq!(check_move(&board, (0, 0), Color::White), Ok(()));
    }

    #[test]
    fn test_check_move_leaves_board_untouched() {
        let board = board_from(&[
            ". X .",
            "X O .",
            ". . .",
        ]);
        let before = board.clone();
        let _ = check_move(&board, (0, 0), Color::White);
        let _ = check_move(&board, (2, 2), Color::Black);
        let _ = check_move(&board, (0, 1), Color::White);
        assert_eq!(board, before);
    }

    #[test]
    fn test_apply_pass_is_a_no_op() {
        let board_before = board_from(&[
            "X .",
            ". O",
        ]);
        let mut board = board_before.clone();
        let mut prisoners = Prisoners::default();
        let captured = apply(&mut board, Move::Pass, Color::Black, &mut prisoners);
        assert_eq!(captured, 0);
        assert_eq!(board, board_before);
        assert_eq!(prisoners, Prisoners::default());
    }

    #[test]
    fn test_apply_places_and_captures() {
        let mut board = board_from(&[
            "X O .",
            ". . .",
            "X O .",
        ]);
        let mut prisoners = Prisoners::default();
        // One white placement takes both single-stone black groups.
        let captured = apply(&mut board, Move::Place((1, 0)), Color::White, &mut prisoners);
        assert_eq!(captured, 2);
        assert_eq!(prisoners.white, 2);
        assert_eq!(board.get((0, 0)), None);
        assert_eq!(board.get((2, 0)), None);
        assert_eq!(board.get((1, 0)), Some(Color::White));
    }

    #[test]
    fn test_has_any_legal_move_sees_the_capture() {
        // Black has filled every liberty of its own ring: placing in the
        // center is suicide for Black, but White captures the ring with it.
        let board = board_from(&[
            "X X X",
            "X . X",
            "X X X",
        ]);
        assert!(!has_any_legal_move(&board, Color::Black));
        assert!(has_any_legal_move(&board, Color::White));
    }

    #[test]
    fn test_has_any_legal_move_on_open_board() {
        let board = Board::new(2);
        assert!(has_any_legal_move(&board, Color::Black));
        assert!(has_any_legal_move(&board, Color::White));
    }

    #[test]
    fn test_move_error_messages() {
        assert_eq!(MoveError::Occupied.to_string(), "point is not empty");
        assert_eq!(MoveError::Suicide.to_string(), "move would be suicide");
    }

    #[test]
    fn test_prisoner_tally_reads_back_by_color() {
        let mut prisoners = Prisoners::default();
        prisoners.add(Color::Black, 2);
        prisoners.add(Color::White, 1);
        prisoners.add(Color::Black, 1);
        assert_eq!(prisoners.get(Color::Black), 3);
        assert_eq!(prisoners.get(Color::White), 1);
        assert_eq!((prisoners.black, prisoners.white), (3, 1));
    }
}
