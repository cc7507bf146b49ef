//! Board state: a square grid of cells with neighbor enumeration and
//! rendering. Pure data; move legality lives in [`crate::rules`].

use std::fmt;

/// Stone color. Black moves first.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Color {
    Black,
    White,
}

impl Color {
    /// The opposing color.
    pub fn other(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ch = match self {
            Color::Black => 'X',
            Color::White => 'O',
        };
        write!(f, "{ch}")
    }
}

/// A board coordinate as (row, col), both 0-indexed.
pub type Point = (usize, usize);

/// A player action: place a stone, or decline the turn.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Move {
    Place(Point),
    Pass,
}

/// A square grid of cells, stored row-major. `None` is an empty cell.
///
/// Cloning yields an independent deep copy; that is how legality probes and
/// the search explore hypothetical moves without touching the live game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Option<Color>>,
}

impl Board {
    /// Create an empty board with the given side length.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    fn idx(&self, (row, col): Point) -> usize {
        assert!(
            row < self.size && col < self.size,
            "point ({row}, {col}) is outside the {0}x{0} board",
            self.size
        );
        row * self.size + col
    }

    /// Whether the point lies on the board.
    pub fn in_bounds(&self, (row, col): Point) -> bool {
        row < self.size && col < self.size
    }

    /// The cell at `pt`. Panics if `pt` is off the board; callers with
    /// untrusted coordinates go through [`in_bounds`](Self::in_bounds) first.
    pub fn get(&self, pt: Point) -> Option<Color> {
        self.cells[self.idx(pt)]
    }

    /// Overwrite the cell at `pt`. Panics if `pt` is off the board.
    pub fn set(&mut self, pt: Point, cell: Option<Color>) {
        let i = self.idx(pt);
        self.cells[i] = cell;
    }

    /// The orthogonal neighbors of `pt`, clipped to the board.
    ///
    /// Returned by value so the caller may mutate the board while walking
    /// the list, as capture resolution does.
    pub fn neighbors(&self, (row, col): Point) -> Vec<Point> {
        let mut v = Vec::with_capacity(4);
        if row > 0 {
            v.push((row - 1, col));
        }
        if row + 1 < self.size {
            v.push((row + 1, col));
        }
        if col > 0 {
            v.push((row, col - 1));
        }
        if col + 1 < self.size {
            v.push((row, col + 1));
        }
        v
    }

    /// Every coordinate on the board, in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |col| (row, col)))
    }

    /// Number of empty cells left.
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Every label and cell shares the width of the largest index, so
        // columns stay aligned on boards past size 10.
        let width = self.size.saturating_sub(1).to_string().len();
        write!(f, "{:width$}", "")?;
        for col in 0..self.size {
            write!(f, " {col:>width$}")?;
        }
        writeln!(f)?;
        for row in 0..self.size {
            write!(f, "{row:>width$}")?;
            for col in 0..self.size {
                let ch = match self.get((row, col)) {
                    Some(Color::Black) => 'X',
                    Some(Color::White) => 'O',
                    None => '.',
                };
                write!(f, " {ch:>width$}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
