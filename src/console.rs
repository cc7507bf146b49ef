//! Interactive console front-end: input parsing, rendering, and the session
//! loop that drives a human seat against a policy seat.

use std::io::{self, BufRead, Write};

use anyhow::Result;

use crate::board::{Color, Move};
use crate::game::{EndReason, Game, Status};
use crate::search::Policy;

/// Parse one line of player input.
///
/// Accepts `pass` in any case, or two whitespace-separated cell indices as
/// `row col`. Anything else is `None`. Range checking is not the parser's
/// job: an off-board pair still parses and gets rejected by the rules.
pub fn parse_move(input: &str) -> Option<Move> {
    let input = input.trim();
    if input.eq_ignore_ascii_case("pass") {
        return Some(Move::Pass);
    }
    let mut parts = input.split_whitespace();
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Move::Place((row, col)))
}

/// An interactive game session: one human seat, one policy seat.
pub struct ConsoleGame {
    game: Game,
    human: Color,
    ai: Box<dyn Policy>,
}

impl ConsoleGame {
    pub fn new(size: usize, human: Color, ai: Box<dyn Policy>) -> Self {
        Self {
            game: Game::new(size),
            human,
            ai,
        }
    }

    /// Run the session until the game finishes or stdin closes.
    pub fn run(&mut self) -> Result<()> {
        let stdin = io::stdin();
        let mut lines = stdin.lock().lines();

        while !self.game.is_finished() {
            self.render_position();

            let to_move = self.game.to_move();
            let mv = if to_move == self.human {
                match self.prompt_human(&mut lines)? {
                    Some(mv) => mv,
                    // Stdin is gone; leave the game unfinished.
                    None => return Ok(()),
                }
            } else {
                let mv = self
                    .ai
                    .choose_move(self.game.board(), &self.game.prisoners(), to_move);
                if let Move::Place((row, col)) = mv {
                    println!("AI {to_move} plays at ({row}, {col})");
                }
                mv
            };

            match self.game.play(mv) {
                Ok(_) => {
                    if mv == Move::Pass {
                        println!("Player {to_move} passes.");
                    }
                }
                Err(err) => println!("Invalid move: {err}. Try again."),
            }
        }

        self.report_result();
        Ok(())
    }

    /// Print the board and the running capture counts.
    fn render_position(&self) {
        println!("{}", self.game.board());
        let prisoners = self.game.prisoners();
        println!(
            "Prisoners - X: {}, O: {}",
            prisoners.get(Color::Black),
            prisoners.get(Color::White)
        );
    }

    /// Prompt until a line parses. `None` means stdin was closed.
    fn prompt_human<I>(&self, lines: &mut I) -> Result<Option<Move>>
    where
        I: Iterator<Item = io::Result<String>>,
    {
        loop {
            print!(
                "Player {}, enter your move (row col) or 'pass' to skip: ",
                self.human
            );
            io::stdout().flush()?;

            let Some(line) = lines.next() else {
                return Ok(None);
            };
            match parse_move(&line?) {
                Some(mv) => return Ok(Some(mv)),
                None => println!("Invalid input! Please enter row and column numbers or 'pass'."),
            }
        }
    }

    fn report_result(&self) {
        match self.game.status() {
            Status::Finished(EndReason::BothPassed) => {
                println!("Both players passed. Game over!");
            }
            Status::Finished(EndReason::NoMoves(color)) => {
                println!("No valid moves left for {color}. Game over!");
            }
            Status::InProgress => {}
        }

        self.render_position();

        let score = self.game.score();
        println!("Final Scores: X: {}, O: {}", score.black, score.white);
    }
}
