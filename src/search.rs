//! Move selection policies: uniform random play and depth-bounded negamax
//! with alpha-beta pruning.
//!
//! Both policies consume only the position (board, prisoner tally, color to
//! move) and return a move that is either `Pass` or a legal placement; the
//! game loop never has to re-validate what a policy hands back. The search
//! explores on cloned boards, so the live game state is never touched.

use crate::board::{Board, Color, Move};
use crate::rules::{self, Prisoners};
use crate::scoring;

/// Flat penalty subtracted from the value of passing during search. Keeps
/// either side from passing when an equally good placement exists.
const PASS_PENALTY: i32 = 1;

/// Pass probability of the random policy, in percent.
const RANDOM_PASS_PERCENT: u32 = 1;

/// A move chooser for one side.
pub trait Policy {
    /// Pick a move for `color` in the given position.
    fn choose_move(&mut self, board: &Board, prisoners: &Prisoners, color: Color) -> Move;

    /// Short name for demo and log output.
    fn name(&self) -> &str;
}

/// Uniform random placement, with a 1% chance of passing outright.
///
/// Candidate cells are sampled blindly and checked for legality. On a
/// crowded board blind probing goes nowhere, so after `2 * size * size`
/// failed probes the policy enumerates the legal cells once and picks among
/// them; only when that list is empty does it fall back to `Pass`.
pub struct RandomPolicy {
    rng: fastrand::Rng,
}

impl RandomPolicy {
    pub fn new() -> Self {
        Self {
            rng: fastrand::Rng::new(),
        }
    }

    /// Seeded variant for reproducible games.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }
}

impl Default for RandomPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl Policy for RandomPolicy {
    fn choose_move(&mut self, board: &Board, _prisoners: &Prisoners, color: Color) -> Move {
        if self.rng.u32(0..100) < RANDOM_PASS_PERCENT {
            return Move::Pass;
        }

        let size = board.size();
        for _ in 0..2 * size * size {
            let pt = (self.rng.usize(0..size), self.rng.usize(0..size));
            if rules::check_move(board, pt, color).is_ok() {
                return Move::Place(pt);
            }
        }

        let legal: Vec<_> = board
            .points()
            .filter(|&pt| rules::check_move(board, pt, color).is_ok())
            .collect();
        match self.rng.choice(legal) {
            Some(pt) => Move::Place(pt),
            None => Move::Pass,
        }
    }

    fn name(&self) -> &str {
        "random"
    }
}

/// Depth-bounded negamax with alpha-beta pruning.
pub struct MinimaxPolicy {
    depth: u32,
}

impl MinimaxPolicy {
    /// Create a policy searching `depth` plies ahead, clamped to at least 1.
    pub fn new(depth: u32) -> Self {
        Self {
            depth: depth.max(1),
        }
    }
}

impl Policy for MinimaxPolicy {
    fn choose_move(&mut self, board: &Board, prisoners: &Prisoners, color: Color) -> Move {
        pick_best_move(board, prisoners, color, self.depth).0
    }

    fn name(&self) -> &str {
        "minimax"
    }
}

/// Search `depth` plies ahead and return the best move for `color` together
/// with its evaluation from `color`'s point of view.
///
/// Pass is evaluated first and stands as the incumbent: a placement must
/// score strictly higher to displace it, so a position where nothing gains
/// anything defaults to passing. Placements are tried in row-major order and
/// ties keep the earliest, which makes results deterministic.
pub fn pick_best_move(
    board: &Board,
    prisoners: &Prisoners,
    color: Color,
    depth: u32,
) -> (Move, i32) {
    let mut alpha = i32::MIN / 2;
    let beta = i32::MAX / 2;
    let child_depth = depth.saturating_sub(1);

    let mut best_move = Move::Pass;
    let mut best =
        -negamax(board, prisoners, color.other(), child_depth, -beta, -alpha) - PASS_PENALTY;
    if best > alpha {
        alpha = best;
    }

    for pt in board.points() {
        if rules::check_move(board, pt, color).is_err() {
            continue;
        }
        let mut child = board.clone();
        let mut caps = *prisoners;
        rules::apply(&mut child, Move::Place(pt), color, &mut caps);
        let value = -negamax(&child, &caps, color.other(), child_depth, -beta, -alpha);
        if value > best {
            best = value;
            best_move = Move::Place(pt);
            if best > alpha {
                alpha = best;
            }
        }
    }

    (best_move, best)
}

/// Negamax over cloned positions. The returned value is always from the
/// perspective of `to_move`, so one negation per ply keeps the maximizing
/// convention straight for both colors.
///
/// Cutoff nodes (depth exhausted, or no legal placement left for the side
/// to move) are valued by the static score margin.
fn negamax(
    board: &Board,
    prisoners: &Prisoners,
    to_move: Color,
    depth: u32,
    mut alpha: i32,
    beta: i32,
) -> i32 {
    if depth == 0 || !rules::has_any_legal_move(board, to_move) {
        return evaluate(board, prisoners, to_move);
    }

    // Pass first: the do-nothing baseline every placement has to beat.
    let mut best =
        -negamax(board, prisoners, to_move.other(), depth - 1, -beta, -alpha) - PASS_PENALTY;
    if best > alpha {
        alpha = best;
    }
    if alpha >= beta {
        return best;
    }

    for pt in board.points() {
        if rules::check_move(board, pt, to_move).is_err() {
            continue;
        }
        let mut child = board.clone();
        let mut caps = *prisoners;
        rules::apply(&mut child, Move::Place(pt), to_move, &mut caps);
        let value = -negamax(&child, &caps, to_move.other(), depth - 1, -beta, -alpha);
        if value > best {
            best = value;
            if best > alpha {
                alpha = best;
            }
            if alpha >= beta {
                break;
            }
        }
    }

    best
}

/// Static evaluation: the final-score margin from `to_move`'s point of view.
fn evaluate(board: &Board, prisoners: &Prisoners, to_move: Color) -> i32 {
    let s = scoring::score(board, prisoners);
    s.get(to_move) as i32 - s.get(to_move.other()) as i32
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
    fn test_evaluate_is_antisymmetric() {
        let board = board_from(&[
            "X O .",
            ". . .",
            "X O .",
        ]);
        let prisoners = Prisoners { black: 2, white: 5 };
        let black = evaluate(&board, &prisoners, Color::Black);
        let white = evaluate(&board, &prisoners, Color::White);
        assert_eq!(black, -white);
        assert_eq!(white, 3);
    }

    #[test]
    fn test_depth_one_finds_the_capture() {
        let board = board_from(&[
            "X O .",
            ". . .",
            ". . .",
        ]);
        let (mv, value) = pick_best_move(&board, &Prisoners::default(), Color::White, 1);
        assert_eq!(mv, Move::Place((1, 0)));
        assert_eq!(value, 1);
    }

    #[test]
    fn test_depth_two_still_prefers_the_capture() {
        let board = board_from(&[
            "X O .",
            ". . .",
            ". . .",
        ]);
        let (mv, _) = pick_best_move(&board, &Prisoners::default(), Color::White, 2);
        assert_eq!(mv, Move::Place((1, 0)));
    }

    #[test]
    fn test_even_placements_beat_the_pass_penalty() {
        // Nothing captures or encloses anything at this depth, so every
        // placement evaluates to 0 while passing costs the penalty. The
        // first cell scanned wins the tie.
        let board = Board::new(2);
        let (mv, value) = pick_best_move(&board, &Prisoners::default(), Color::Black, 1);
        assert_eq!(mv, Move::Place((0, 0)));
        assert_eq!(value, 0);
    }

    #[test]
    fn test_passes_when_no_placement_exists() {
        let board = board_from(&[
            "X X X",
            "X . X",
            "X X X",
        ]);
        let (mv, _) = pick_best_move(&board, &Prisoners::default(), Color::Black, 2);
        assert_eq!(mv, Move::Pass);
    }

    #[test]
    fn test_minimax_policy_clamps_depth_to_one() {
        let board = board_from(&[
            "X O .",
            ". . .",
            ". . .",
        ]);
        let mut policy = MinimaxPolicy::new(0);
        let mv = policy.choose_move(&board, &Prisoners::default(), Color::White);
        assert_eq!(mv, Move::Place((1, 0)));
    }

    #[test]
    fn test_random_policy_is_deterministic_under_a_seed() {
        let board = board_from(&[
            "X O .",
            ". . .",
            ". X .",
        ]);
        let mut a = RandomPolicy::with_seed(42);
        let mut b = RandomPolicy::with_seed(42);
        for _ in 0..50 {
            let ma = a.choose_move(&board, &Prisoners::default(), Color::White);
            let mb = b.choose_move(&board, &Prisoners::default(), Color::White);
            assert_eq!(ma, mb);
        }
    }

    #[test]
    fn test_random_policy_only_returns_legal_moves() {
        let board = board_from(&[
            ". X .",
            "X O .",
            ". . .",
        ]);
        let mut policy = RandomPolicy::with_seed(7);
        for _ in 0..200 {
            let mv = policy.choose_move(&board, &Prisoners::default(), Color::White);
            assert!(rules::is_legal(&board, mv, Color::White), "illegal {mv:?}");
        }
    }

    #[test]
    fn test_random_policy_passes_when_nothing_is_playable() {
        let board = board_from(&[
            "X X X",
            "X . X",
            "X X X",
        ]);
        let mut policy = RandomPolicy::with_seed(3);
        for _ in 0..20 {
            let mv = policy.choose_move(&board, &Prisoners::default(), Color::Black);
            assert_eq!(mv, Move::Pass);
        }
    }

    #[test]
    fn test_policy_names_distinguish_the_engines() {
        let policies: Vec<Box<dyn Policy>> = vec![
            Box::new(RandomPolicy::with_seed(1)),
            Box::new(MinimaxPolicy::new(2)),
        ];
        let names: Vec<&str> = policies.iter().map(|p| p.name()).collect();
        assert_eq!(names, ["random", "minimax"]);
    }
}
