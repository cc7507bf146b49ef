//! Area scoring: prisoners plus exclusively enclosed empty regions.

use crate::board::{Board, Color, Point};
use crate::rules::Prisoners;

/// Final point totals for both sides.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Score {
    pub black: u32,
    pub white: u32,
}

impl Score {
    /// Points for `color`.
    pub fn get(&self, color: Color) -> u32 {
        match color {
            Color::Black => self.black,
            Color::White => self.white,
        }
    }
}

/// Score the position: each side counts its prisoners plus one point per
/// empty region it exclusively encloses.
///
/// A maximal connected region of empty cells scores a single point, not one
/// per cell, and only when every stone adjacent to it is the same color, at
/// least one such stone exists, and no cell of the region lies on the outer
/// ring of the board. Regions bordering both colors, touching the board
/// edge, or touching no stones at all score for nobody. Each region is
/// flooded exactly once; the visited set is global across the pass.
pub fn score(board: &Board, prisoners: &Prisoners) -> Score {
    let size = board.size();
    let idx = |(row, col): Point| row * size + col;
    let mut visited = vec![false; size * size];
    let mut totals = Score {
        black: prisoners.black,
        white: prisoners.white,
    };

    for start in board.points() {
        if visited[idx(start)] || board.get(start).is_some() {
            continue;
        }

        // Flood one empty region, recording which colors border it and
        // whether it reaches the outer ring.
        let mut stack = vec![start];
        let mut touches_edge = false;
        let mut bordering: Option<Color> = None;
        let mut mixed = false;

        while let Some(p) = stack.pop() {
            if visited[idx(p)] {
                continue;
            }
            visited[idx(p)] = true;

            let (row, col) = p;
            if row == 0 || col == 0 || row + 1 == size || col + 1 == size {
                touches_edge = true;
            }
            for n in board.neighbors(p) {
                match board.get(n) {
                    None => stack.push(n),
                    Some(c) => match bordering {
                        None => bordering = Some(c),
                        Some(b) if b != c => mixed = true,
                        Some(_) => {}
                    },
                }
            }
        }

        if touches_edge || mixed {
            continue;
        }
        if let Some(owner) = bordering {
            match owner {
                Color::Black => totals.black += 1,
                Color::White => totals.white += 1,
            }
        }
    }

    totals
}
