//! Batch fitness evaluation for the genetic solver.
//!
//! A population is a contiguous buffer of fixed-length byte genomes, one per
//! member. Evaluation decodes each genome into moves, walks the puzzle until
//! the first byte that is not a legal move, and scores the consumed prefix.
//! Members are independent, so implementations are free to evaluate them in
//! parallel, but a batch is a single blocking operation: the caller sees all
//! scores at once.

use rayon::prelude::*;

use crate::puzzle::grid::{EdgeValue, PointValue, Puzzle};
use crate::puzzle::path::Move;
use crate::solver::validator::Walk;

/// The evaluation result for one population member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberScore {
    /// Partial-credit fitness, in `0..=max_fitness(puzzle)`.
    pub fitness: i32,
    /// The start point the evaluator chose for this member.
    pub start_point: usize,
    /// The decoded moves actually consumed before the genome terminated or
    /// produced an illegal move.
    pub moves: Vec<Move>,
}

/// Evaluates a whole population in one synchronous batch.
///
/// `population` holds `genome_len` bytes per member. Implementations must
/// score members exactly as [`score_member`] does; the trait exists so the
/// execution mechanism (serial loop, thread pool, compute kernel) can be
/// swapped without touching the generation loop.
pub trait BatchEvaluator: Send + Sync {
    fn evaluate(&self, puzzle: &Puzzle, population: &[u8], genome_len: usize)
        -> Vec<MemberScore>;
}

/// The highest fitness any member of a population can score: one point for
/// reaching the end plus one per dot waypoint.
///
/// Partition violations only ever subtract, so they do not appear here.
pub fn max_fitness(puzzle: &Puzzle) -> i32 {
    let mut fitness = 1;
    for i in 0..puzzle.num_points() {
        if puzzle.point_at(i) == PointValue::Dot {
            fitness += 1;
        }
    }
    for i in 0..puzzle.num_edges() {
        if puzzle.edge_at(i) == EdgeValue::Dot {
            fitness += 1;
        }
    }
    fitness
}

/// Scores a single genome.
///
/// A genome carries no start field; the evaluator is responsible for picking
/// the start cell, and this implementation uses the first start point in
/// row-major order. The walk consumes bytes until one fails to decode or the
/// decoded move is illegal. Fitness is the number of waypoints covered, plus
/// one for finishing on an end point, minus one per partition mixing white
/// and black spaces, clamped at zero. It equals [`max_fitness`] exactly when
/// the validator would accept the decoded path.
pub fn score_member(puzzle: &Puzzle, start_point: usize, genome: &[u8]) -> MemberScore {
    let mut walk = Walk::new(puzzle, start_point);
    let mut moves = Vec::new();

    for &byte in genome {
        let Some(value) = Move::from_byte(byte) else {
            break;
        };
        if !walk.step(value) {
            break;
        }
        moves.push(value);
    }

    let mut fitness = walk.dots_cleared() as i32;
    if walk.at_end() {
        fitness += 1;
    }
    fitness -= walk.partition_conflicts() as i32;

    MemberScore {
        fitness: fitness.max(0),
        start_point,
        moves,
    }
}

/// Plain sequential evaluator.
#[derive(Debug, Default)]
pub struct SerialEvaluator;

impl BatchEvaluator for SerialEvaluator {
    fn evaluate(
        &self,
        puzzle: &Puzzle,
        population: &[u8],
        genome_len: usize,
    ) -> Vec<MemberScore> {
        let start = puzzle.first_start_point().unwrap_or(0);
        population
            .chunks(genome_len)
            .map(|genome| score_member(puzzle, start, genome))
            .collect()
    }
}

/// Data-parallel evaluator backed by the rayon thread pool.
///
/// Members share no state, so the batch splits cleanly across threads and
/// produces bit-identical results to [`SerialEvaluator`].
#[derive(Debug, Default)]
pub struct RayonEvaluator;

impl BatchEvaluator for RayonEvaluator {
    fn evaluate(
        &self,
        puzzle: &Puzzle,
        population: &[u8],
        genome_len: usize,
    ) -> Vec<MemberScore> {
        let start = puzzle.first_start_point().unwrap_or(0);
        population
            .par_chunks(genome_len)
            .map(|genome| score_member(puzzle, start, genome))
            .collect()
    }
}
