//! Decides whether a path solves a puzzle.
//!
//! A valid solution starts on a start point, walks only unblocked edges to
//! unblocked, unvisited points, finishes on an end point, covers every dot
//! waypoint, and never leaves a white space and a black space connected in
//! the same partition of the grid's spaces.

use crate::puzzle::grid::{EdgeValue, PointValue, Puzzle, SpaceValue};
use crate::puzzle::path::{Move, Path};

/// Validates candidate solutions.
///
/// Stateless apart from a monotonically increasing evaluation counter kept
/// for diagnostics.
#[derive(Debug, Default)]
pub struct Validator {
    evaluations: u64,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of evaluations performed so far.
    pub fn evaluations(&self) -> u64 {
        self.evaluations
    }

    /// Returns `true` iff `path` is a complete, valid solution of `puzzle`.
    pub fn evaluate(&mut self, puzzle: &Puzzle, path: &Path) -> bool {
        self.evaluations += 1;

        let start = path.start_point();
        if start >= puzzle.num_points() || puzzle.point_at(start) != PointValue::Start {
            return false;
        }

        let mut walk = Walk::new(puzzle, start);
        for i in 0..path.len() {
            if !walk.step(path.get(i)) {
                return false;
            }
        }

        // The partition constraint is only meaningful once the walk itself
        // is complete and every waypoint is covered.
        walk.at_end() && walk.all_dots_cleared() && walk.partition_conflicts() == 0
    }
}

/// An in-progress traversal of a puzzle.
///
/// Shared between the validator (which rejects on the first illegal move)
/// and the batch fitness evaluator (which truncates there and scores the
/// consumed prefix).
pub(crate) struct Walk<'a> {
    puzzle: &'a Puzzle,
    row: usize,
    col: usize,
    visited_points: Vec<bool>,
    traversed_edges: Vec<bool>,
    point_dots: Vec<bool>,
    edge_dots: Vec<bool>,
    initial_dots: usize,
    dots_remaining: usize,
}

impl<'a> Walk<'a> {
    pub(crate) fn new(puzzle: &'a Puzzle, start_index: usize) -> Self {
        let point_dots: Vec<bool> = (0..puzzle.num_points())
            .map(|i| puzzle.point_at(i) == PointValue::Dot)
            .collect();
        let edge_dots: Vec<bool> = (0..puzzle.num_edges())
            .map(|i| puzzle.edge_at(i) == EdgeValue::Dot)
            .collect();
        let initial_dots = point_dots.iter().filter(|d| **d).count()
            + edge_dots.iter().filter(|d| **d).count();
        Self {
            puzzle,
            row: puzzle.point_row(start_index),
            col: puzzle.point_col(start_index),
            visited_points: vec![false; puzzle.num_points()],
            traversed_edges: vec![false; puzzle.num_edges()],
            point_dots,
            edge_dots,
            initial_dots,
            dots_remaining: initial_dots,
        }
    }

    /// Attempts one move from the current cell.
    ///
    /// Returns `false` without changing position when the destination is out
    /// of bounds, the destination point or the connecting edge is blocked,
    /// or the destination was already visited. On success the current point
    /// is marked visited, the edge marked traversed, and pending dots on
    /// both are cleared.
    pub(crate) fn step(&mut self, value: Move) -> bool {
        let here = self.puzzle.point_index(self.row, self.col);
        self.visited_points[here] = true;
        if self.point_dots[here] {
            self.point_dots[here] = false;
            self.dots_remaining -= 1;
        }

        let (next_row, next_col) = match value {
            Move::Up if self.row > 0 => (self.row - 1, self.col),
            Move::Down if self.row + 1 < self.puzzle.height() => (self.row + 1, self.col),
            Move::Left if self.col > 0 => (self.row, self.col - 1),
            Move::Right if self.col + 1 < self.puzzle.width() => (self.row, self.col + 1),
            _ => return false,
        };

        let dest = self.puzzle.point_index(next_row, next_col);
        if self.puzzle.point_at(dest) == PointValue::Blocked || self.visited_points[dest] {
            return false;
        }

        // Edge indices take the upper/left point first.
        let edge = if next_row < self.row || next_col < self.col {
            self.puzzle
                .edge_index(next_row, next_col, self.row, self.col)
        } else {
            self.puzzle
                .edge_index(self.row, self.col, next_row, next_col)
        };
        if self.puzzle.edge_at(edge) == EdgeValue::Blocked {
            return false;
        }

        self.traversed_edges[edge] = true;
        if self.edge_dots[edge] {
            self.edge_dots[edge] = false;
            self.dots_remaining -= 1;
        }
        self.row = next_row;
        self.col = next_col;
        true
    }

    /// Whether the walk currently rests on an end point.
    pub(crate) fn at_end(&self) -> bool {
        self.puzzle.point(self.row, self.col) == PointValue::End
    }

    pub(crate) fn all_dots_cleared(&self) -> bool {
        self.dots_remaining == 0
    }

    /// Waypoints covered so far.
    pub(crate) fn dots_cleared(&self) -> usize {
        self.initial_dots - self.dots_remaining
    }

    /// Counts partitions of the space grid that contain both a white and a
    /// black space.
    ///
    /// Spaces are nodes; two grid-adjacent spaces are connected unless the
    /// edge between them was traversed. The flood fill uses an explicit
    /// stack so memory stays bounded on large grids.
    pub(crate) fn partition_conflicts(&self) -> usize {
        let space_cols = self.puzzle.width() - 1;
        let space_rows = self.puzzle.height() - 1;
        let mut assigned = vec![false; self.puzzle.num_spaces()];
        let mut stack = Vec::new();
        let mut conflicts = 0;

        for seed in 0..self.puzzle.num_spaces() {
            if assigned[seed] {
                continue;
            }
            let mut has_white = false;
            let mut has_black = false;
            assigned[seed] = true;
            stack.push(seed);

            while let Some(space) = stack.pop() {
                match self.puzzle.space_at(space) {
                    SpaceValue::White => has_white = true,
                    SpaceValue::Black => has_black = true,
                    SpaceValue::Blank => {}
                }

                let row = self.puzzle.space_row(space);
                let col = self.puzzle.space_col(space);

                // Left/right neighbours are separated by a vertical edge,
                // up/down neighbours by a horizontal one.
                if col > 0 && !self.traversed_edges[self.puzzle.edge_index(row, col, row + 1, col)]
                {
                    self.visit(row, col - 1, &mut assigned, &mut stack);
                }
                if col + 1 < space_cols
                    && !self.traversed_edges[self
                        .puzzle
                        .edge_index(row, col + 1, row + 1, col + 1)]
                {
                    self.visit(row, col + 1, &mut assigned, &mut stack);
                }
                if row > 0 && !self.traversed_edges[self.puzzle.edge_index(row, col, row, col + 1)]
                {
                    self.visit(row - 1, col, &mut assigned, &mut stack);
                }
                if row + 1 < space_rows
                    && !self.traversed_edges[self
                        .puzzle
                        .edge_index(row + 1, col, row + 1, col + 1)]
                {
                    self.visit(row + 1, col, &mut assigned, &mut stack);
                }
            }

            if has_white && has_black {
                conflicts += 1;
            }
        }

        conflicts
    }

    fn visit(&self, row: usize, col: usize, assigned: &mut [bool], stack: &mut Vec<usize>) {
        let index = self.puzzle.space_index(row, col);
        if !assigned[index] {
            assigned[index] = true;
            stack.push(index);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::reader;

    fn path_of(puzzle: &Puzzle, start: usize, moves: &[Move]) -> Path {
        let mut path = Path::new(puzzle.num_points());
        path.set_start_point(start);
        for &m in moves {
            path.push(m);
        }
        path
    }

    #[test]
    fn accepts_the_only_route_through_the_two_by_two() {
        let puzzle = reader::parse("2 2\ns o o\nx w o\no o e\n").unwrap();
        let mut validator = Validator::new();
        let path = path_of(&puzzle, 0, &[Move::Right, Move::Down]);
        assert!(validator.evaluate(&puzzle, &path));
    }

    #[test]
    fn rejects_the_route_through_the_blocked_edge() {
        let puzzle = reader::parse("2 2\ns o o\nx w o\no o e\n").unwrap();
        let mut validator = Validator::new();
        let path = path_of(&puzzle, 0, &[Move::Down, Move::Right]);
        assert!(!validator.evaluate(&puzzle, &path));
    }

    #[test]
    fn rejects_paths_that_stop_short_of_the_end() {
        let puzzle = reader::parse("2 2\ns o o\nx w o\no o e\n").unwrap();
        let mut validator = Validator::new();
        assert!(!validator.evaluate(&puzzle, &path_of(&puzzle, 0, &[Move::Right])));
        assert!(!validator.evaluate(&puzzle, &path_of(&puzzle, 0, &[])));
    }

    #[test]
    fn rejects_paths_not_starting_on_a_start_point() {
        let puzzle = reader::parse("2 2\ns o o\nx w o\no o e\n").unwrap();
        let mut validator = Validator::new();
        assert!(!validator.evaluate(&puzzle, &path_of(&puzzle, 1, &[Move::Down])));
        assert!(!validator.evaluate(&puzzle, &path_of(&puzzle, 99, &[])));
    }

    #[test]
    fn rejects_revisiting_a_point() {
        let puzzle = reader::parse("2 2\ns o o\no w o\no o e\n").unwrap();
        let mut validator = Validator::new();
        let path = path_of(
            &puzzle,
            0,
            &[Move::Right, Move::Left, Move::Right, Move::Down],
        );
        assert!(!validator.evaluate(&puzzle, &path));
    }

    #[test]
    fn requires_every_dot_waypoint() {
        // Dot on the bottom-left point and on the bottom edge; only the
        // long way round covers both.
        let puzzle = reader::parse("2 2\ns o o\no w o\n. . e\n").unwrap();
        let mut validator = Validator::new();
        let direct = path_of(&puzzle, 0, &[Move::Right, Move::Down]);
        assert!(!validator.evaluate(&puzzle, &direct));
        let full = path_of(&puzzle, 0, &[Move::Down, Move::Right]);
        assert!(validator.evaluate(&puzzle, &full));
    }

    #[test]
    fn single_space_puzzle_cannot_violate_partitions() {
        let puzzle = reader::parse("2 2\ns o o\nx w o\no o e\n").unwrap();
        let mut validator = Validator::new();
        let path = path_of(&puzzle, 0, &[Move::Right, Move::Down]);
        assert!(validator.evaluate(&puzzle, &path));
    }

    #[test]
    fn partition_wall_separating_colours_is_accepted() {
        // 3x3 grid, start top-middle, end bottom-middle. Walking straight
        // down fences white spaces off from black ones.
        let puzzle = reader::parse(
            "3 3\n\
             o o s o o\n\
             o w o b o\n\
             o o o o o\n\
             o w o b o\n\
             o o e o o\n",
        )
        .unwrap();
        let mut validator = Validator::new();
        let path = path_of(&puzzle, 1, &[Move::Down, Move::Down]);
        assert!(validator.evaluate(&puzzle, &path));
    }

    #[test]
    fn partition_mixing_colours_is_rejected() {
        // Same wall, but each side now holds one white and one black space.
        let puzzle = reader::parse(
            "3 3\n\
             o o s o o\n\
             o w o b o\n\
             o o o o o\n\
             o b o w o\n\
             o o e o o\n",
        )
        .unwrap();
        let mut validator = Validator::new();
        let path = path_of(&puzzle, 1, &[Move::Down, Move::Down]);
        assert!(!validator.evaluate(&puzzle, &path));
    }

    #[test]
    fn evaluation_is_idempotent_apart_from_the_counter() {
        let puzzle = reader::parse("2 2\ns o o\nx w o\no o e\n").unwrap();
        let mut validator = Validator::new();
        let path = path_of(&puzzle, 0, &[Move::Right, Move::Down]);
        let first = validator.evaluate(&puzzle, &path);
        let second = validator.evaluate(&puzzle, &path);
        assert_eq!(first, second);
        assert_eq!(validator.evaluations(), 2);
    }
}
