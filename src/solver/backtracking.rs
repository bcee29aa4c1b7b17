//! Exhaustive depth-first search over puzzle paths.

use tracing::debug;

use crate::puzzle::grid::{EdgeValue, PointValue, Puzzle};
use crate::puzzle::path::{Move, Path};
use crate::solver::validator::Validator;
use crate::solver::Solver;

const DIRECTIONS: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];

/// One suspended position in the search: a cell and the next direction to
/// try from it.
#[derive(Debug, Clone, Copy)]
struct Frame {
    row: usize,
    col: usize,
    next_dir: usize,
}

/// Exhaustive backtracking search.
///
/// Explores moves in the fixed order up, down, left, right, so results are
/// deterministic; the first valid solution wins. The search runs on an
/// explicit frame stack rather than call-stack recursion, with one visited
/// array shared across the whole search and unmarked on backtrack.
#[derive(Debug, Default)]
pub struct BacktrackingSolver {
    validator: Validator,
}

impl BacktrackingSolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of full-path validations performed so far.
    pub fn evaluations(&self) -> u64 {
        self.validator.evaluations()
    }

    fn search(
        &mut self,
        puzzle: &Puzzle,
        path: &mut Path,
        row: usize,
        col: usize,
        visited: &mut [bool],
    ) -> bool {
        let mut stack = vec![Frame {
            row,
            col,
            next_dir: 0,
        }];
        visited[puzzle.point_index(row, col)] = true;

        while let Some(&top) = stack.last() {
            // An end cell is a leaf: check the accumulated path, never
            // extend past it.
            if puzzle.point(top.row, top.col) == PointValue::End {
                if self.validator.evaluate(puzzle, path) {
                    return true;
                }
                Self::backtrack(puzzle, path, visited, &mut stack);
                continue;
            }

            if top.next_dir >= DIRECTIONS.len() {
                Self::backtrack(puzzle, path, visited, &mut stack);
                continue;
            }
            stack.last_mut().expect("stack is non-empty").next_dir += 1;

            let dir = DIRECTIONS[top.next_dir];
            if let Some((next_row, next_col)) = legal_move(puzzle, top.row, top.col, dir, visited) {
                path.push(dir);
                visited[puzzle.point_index(next_row, next_col)] = true;
                stack.push(Frame {
                    row: next_row,
                    col: next_col,
                    next_dir: 0,
                });
            }
        }

        false
    }

    fn backtrack(puzzle: &Puzzle, path: &mut Path, visited: &mut [bool], stack: &mut Vec<Frame>) {
        let frame = stack.pop().expect("backtrack requires a frame");
        visited[puzzle.point_index(frame.row, frame.col)] = false;
        path.pop();
    }
}

/// Checks one candidate move. Legal when the destination is in bounds,
/// neither the destination point nor the connecting edge is blocked, and the
/// destination is unvisited.
fn legal_move(
    puzzle: &Puzzle,
    row: usize,
    col: usize,
    dir: Move,
    visited: &[bool],
) -> Option<(usize, usize)> {
    let (next_row, next_col) = match dir {
        Move::Up if row > 0 => (row - 1, col),
        Move::Down if row + 1 < puzzle.height() => (row + 1, col),
        Move::Left if col > 0 => (row, col - 1),
        Move::Right if col + 1 < puzzle.width() => (row, col + 1),
        _ => return None,
    };

    if puzzle.point(next_row, next_col) == PointValue::Blocked {
        return None;
    }
    let edge = if next_row < row || next_col < col {
        puzzle.edge(next_row, next_col, row, col)
    } else {
        puzzle.edge(row, col, next_row, next_col)
    };
    if edge == EdgeValue::Blocked {
        return None;
    }
    if visited[puzzle.point_index(next_row, next_col)] {
        return None;
    }
    Some((next_row, next_col))
}

impl Solver for BacktrackingSolver {
    fn solve(&mut self, puzzle: &Puzzle) -> Option<Path> {
        let mut path = Path::new(puzzle.num_points());
        let mut visited = vec![false; puzzle.num_points()];

        // Launch a search from each start cell in row-major order; the
        // first one that succeeds wins.
        for row in 0..puzzle.height() {
            for col in 0..puzzle.width() {
                if puzzle.point(row, col) != PointValue::Start {
                    continue;
                }
                path.clear();
                path.set_start_point(puzzle.point_index(row, col));
                visited.iter_mut().for_each(|v| *v = false);

                if self.search(puzzle, &mut path, row, col, &mut visited) {
                    debug!(start = path.start_point(), moves = %path, "solution found");
                    return Some(path);
                }
            }
        }

        debug!("search space exhausted without a solution");
        None
    }
}
