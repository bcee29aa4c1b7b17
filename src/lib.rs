//! Linewalk solves single-stroke line puzzles on a rectangular grid.
//!
//! A puzzle is a grid of intersection points joined by edges, with spaces
//! enclosed between them. A solution is a non-self-intersecting path from a
//! start point to an end point that passes through every dot-marked point and
//! edge, and whose traversed edges split the spaces into regions that never
//! mix white and black.
//!
//! # Core Concepts
//!
//! - **[`Puzzle`]**: the immutable grid geometry and value lookup.
//! - **[`Path`]**: a bounded sequence of moves with a start point.
//! - **[`Validator`]**: decides whether a path solves a puzzle.
//! - **[`Solver`]**: the one-method capability implemented by both search
//!   strategies: [`BacktrackingSolver`] (exhaustive DFS) and
//!   [`GeneticSolver`] (population search with data-parallel fitness
//!   evaluation).
//!
//! # Example: a 2x2 puzzle
//!
//! The grid below has a start at the top left, an end at the bottom right, a
//! white space in its single cell, and a blocked edge on the left side, so
//! the only route is right-then-down.
//!
//! ```
//! use linewalk::puzzle::path::Move;
//! use linewalk::puzzle::reader;
//! use linewalk::solver::{backtracking::BacktrackingSolver, Solver};
//!
//! let puzzle = reader::parse(
//!     "2 2\n\
//!      s o o\n\
//!      x w o\n\
//!      o o e\n",
//! )
//! .unwrap();
//!
//! let mut solver = BacktrackingSolver::new();
//! let path = solver.solve(&puzzle).unwrap();
//!
//! assert_eq!(path.start_point(), 0);
//! assert_eq!(path.moves(), &[Move::Right, Move::Down]);
//! ```
//!
//! [`Puzzle`]: puzzle::grid::Puzzle
//! [`Path`]: puzzle::path::Path
//! [`Validator`]: solver::validator::Validator
//! [`Solver`]: solver::Solver
//! [`BacktrackingSolver`]: solver::backtracking::BacktrackingSolver
//! [`GeneticSolver`]: solver::genetic::GeneticSolver

pub mod error;
pub mod puzzle;
pub mod solver;
