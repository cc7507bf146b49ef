//! Torigo: a simplified capture-Go engine.
//!
//! Two players alternate placing stones on a square grid. Orthogonally
//! connected stones form groups; a group whose last adjacent empty cell is
//! filled is captured and removed. A placement that would leave its own
//! group without liberties is suicide and illegal, unless it captures
//! first. The game ends after two consecutive passes or when the side to
//! move has no legal placement, and each side then scores its prisoners
//! plus one point per empty region it exclusively encloses.
//!
//! ## Modules
//!
//! - [`board`] - Grid state, coordinates, rendering
//! - [`rules`] - Liberties, captures, move legality, execution
//! - [`scoring`] - Prisoner and territory counting
//! - [`search`] - Move policies: random and minimax with alpha-beta
//! - [`game`] - Full-game state machine (turns, passes, termination)
//! - [`console`] - Interactive front-end used by the binary
//!
//! ## Example
//!
//! ```
//! use torigo::board::Move;
//! use torigo::game::Game;
//!
//! let mut game = Game::new(5);
//!
//! // Black takes the center, White answers.
//! game.play(Move::Place((2, 2)))?;
//! game.play(Move::Place((1, 2)))?;
//!
//! // Two passes in a row end the game.
//! game.play(Move::Pass)?;
//! game.play(Move::Pass)?;
//! assert!(game.is_finished());
//!
//! let score = game.score();
//! assert_eq!((score.black, score.white), (0, 0));
//! # Ok::<(), torigo::rules::MoveError>(())
//! ```

pub mod board;
pub mod console;
pub mod game;
pub mod rules;
pub mod scoring;
pub mod search;
