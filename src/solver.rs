//! Search strategies for line puzzles.

pub mod backtracking;
pub mod evaluator;
pub mod genetic;
pub mod validator;

use crate::puzzle::grid::Puzzle;
use crate::puzzle::path::Path;

/// A puzzle-solving strategy.
///
/// `None` means the search exhausted its space or budget without finding a
/// solution; it is a normal outcome, not an error.
pub trait Solver {
    fn solve(&mut self, puzzle: &Puzzle) -> Option<Path>;
}
