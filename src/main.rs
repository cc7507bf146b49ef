//! Torigo: a simplified capture-Go game for the console.
//!
//! ## Usage
//!
//! - `torigo` - Watch a random-vs-minimax self-play demo
//! - `torigo play` - Play Black against the minimax engine
//! - `torigo play --color white --ai random` - Other seats and policies
//! - `torigo demo --size 7 --depth 3` - Bigger demo board, deeper search

use anyhow::{Result, ensure};
use clap::{Parser, Subcommand, ValueEnum};

use torigo::board::{Color, Move};
use torigo::console::ConsoleGame;
use torigo::game::Game;
use torigo::search::{MinimaxPolicy, Policy, RandomPolicy, pick_best_move};

/// Torigo: a simplified capture-Go engine
#[derive(Parser)]
#[command(name = "torigo")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game against the engine
    Play {
        /// Board side length
        #[arg(long, default_value_t = 9)]
        size: usize,
        /// Policy the engine plays with
        #[arg(long, value_enum, default_value = "minimax")]
        ai: PolicyKind,
        /// Search depth in plies, for the minimax policy
        #[arg(long, default_value_t = 2)]
        depth: u32,
        /// Color of the human seat
        #[arg(long, value_enum, default_value = "black")]
        color: Seat,
    },
    /// Run a random-vs-minimax self-play demo
    Demo {
        /// Board side length
        #[arg(long, default_value_t = 5)]
        size: usize,
        /// Search depth in plies for the minimax side
        #[arg(long, default_value_t = 2)]
        depth: u32,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum PolicyKind {
    Random,
    Minimax,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Seat {
    Black,
    White,
}

impl From<Seat> for Color {
    fn from(seat: Seat) -> Color {
        match seat {
            Seat::Black => Color::Black,
            Seat::White => Color::White,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Play {
            size,
            ai,
            depth,
            color,
        }) => {
            check_size(size)?;
            let policy: Box<dyn Policy> = match ai {
                PolicyKind::Random => Box::new(RandomPolicy::new()),
                PolicyKind::Minimax => Box::new(MinimaxPolicy::new(depth)),
            };
            ConsoleGame::new(size, color.into(), policy).run()
        }
        Some(Commands::Demo { size, depth }) => {
            check_size(size)?;
            run_demo(size, depth)
        }
        None => run_demo(5, 2),
    }
}

fn check_size(size: usize) -> Result<()> {
    ensure!(
        (2..=19).contains(&size),
        "board size must be between 2 and 19, got {size}"
    );
    Ok(())
}

/// Self-play demo: random policy as Black, minimax as White.
fn run_demo(size: usize, depth: u32) -> Result<()> {
    let mut random = RandomPolicy::new();
    let minimax = MinimaxPolicy::new(depth);
    println!(
        "Self-play demo: {} (X) vs {} (O), {size}x{size} board\n",
        random.name(),
        minimax.name()
    );

    let mut game = Game::new(size);

    // Random-vs-minimax games can trade captures for a very long time on
    // an open board. The demo stops after a fixed cap.
    let move_cap = 3 * size * size;
    for _ in 0..move_cap {
        if game.is_finished() {
            break;
        }
        let to_move = game.to_move();
        let (mv, eval) = if to_move == Color::Black {
            let mv = random.choose_move(game.board(), &game.prisoners(), to_move);
            (mv, None)
        } else {
            let (mv, value) = pick_best_move(game.board(), &game.prisoners(), to_move, depth);
            (mv, Some(value))
        };

        match mv {
            Move::Place((row, col)) => print!("{to_move} plays {row} {col}"),
            Move::Pass => print!("{to_move} passes"),
        }
        if let Some(value) = eval {
            print!(" (eval {value:+})");
        }
        let captured = game.play(mv)?;
        if captured > 0 {
            print!(", capturing {captured}");
        }
        println!();
    }

    println!("\n{}", game.board());
    let prisoners = game.prisoners();
    println!("Prisoners - X: {}, O: {}", prisoners.black, prisoners.white);
    let score = game.score();
    println!("Final Scores: X: {}, O: {}", score.black, score.white);
    Ok(())
}
