//! Full-game state machine: turn alternation, pass tracking, termination.

use crate::board::{Board, Color, Move};
use crate::rules::{self, MoveError, Prisoners};
use crate::scoring::{self, Score};

/// Whether a game is still being played, and if not, why it stopped.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Status {
    InProgress,
    Finished(EndReason),
}

/// Why a finished game ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EndReason {
    /// Both players passed in a row.
    BothPassed,
    /// The side to move has no legal placement left.
    NoMoves(Color),
}

/// One full game: the authoritative board, prisoner tally, and turn state.
///
/// Moves go through [`play`](Self::play), which validates, executes, flips
/// the turn, and watches for termination. Everything else is read access.
pub struct Game {
    board: Board,
    prisoners: Prisoners,
    to_move: Color,
    consecutive_passes: u32,
    status: Status,
}

impl Game {
    /// Start a fresh game on an empty board, Black to move.
    pub fn new(size: usize) -> Self {
        Self {
            board: Board::new(size),
            prisoners: Prisoners::default(),
            to_move: Color::Black,
            consecutive_passes: 0,
            status: Status::InProgress,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn prisoners(&self) -> Prisoners {
        self.prisoners
    }

    pub fn to_move(&self) -> Color {
        self.to_move
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.status, Status::Finished(_))
    }

    pub fn consecutive_passes(&self) -> u32 {
        self.consecutive_passes
    }

    /// Validate and execute a move for the side to move, returning how many
    /// stones it captured.
    ///
    /// A pass is always accepted and a second pass in a row ends the game.
    /// A placement is checked against the rules first; rejection leaves the
    /// whole state untouched. After any accepted move the turn flips, and
    /// the game also ends when the new side to move has no legal placement.
    pub fn play(&mut self, mv: Move) -> Result<u32, MoveError> {
        if self.is_finished() {
            return Err(MoveError::GameOver);
        }

        let captured = match mv {
            Move::Pass => {
                self.consecutive_passes += 1;
                0
            }
            Move::Place(pt) => {
                rules::check_move(&self.board, pt, self.to_move)?;
                self.consecutive_passes = 0;
                rules::apply(&mut self.board, mv, self.to_move, &mut self.prisoners)
            }
        };

        self.to_move = self.to_move.other();
        if self.consecutive_passes >= 2 {
            self.status = Status::Finished(EndReason::BothPassed);
        } else if !rules::has_any_legal_move(&self.board, self.to_move) {
            self.status = Status::Finished(EndReason::NoMoves(self.to_move));
        }
        Ok(captured)
    }

    /// Current score: prisoners plus enclosed territory.
    pub fn score(&self) -> Score {
        scoring::score(&self.board, &self.prisoners)
    }

    /// Swap in an arbitrary mid-game position. Test scaffolding only.
    #[cfg(test)]
    fn set_position_for_test(&mut self, board: Board, prisoners: Prisoners, to_move: Color) {
        self.board = board;
        self.prisoners = prisoners;
        self.to_move = to_move;
        self.consecutive_passes = 0;
        self.status = Status::InProgress;
    }
}
