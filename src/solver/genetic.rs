//! Population-based search with a seeded, reproducible generation loop.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::puzzle::grid::Puzzle;
use crate::puzzle::path::Path;
use crate::solver::evaluator::{max_fitness, BatchEvaluator, MemberScore, RayonEvaluator};
use crate::solver::Solver;

/// Parameters of a genetic search.
///
/// The same seed, puzzle, and parameters reproduce the same generation
/// trajectory: the solver owns a single sequential PRNG stream consumed in a
/// fixed order (population init; then per slot crossover-decision,
/// mate-draw, crossover-point; then per byte mutation-decision,
/// mutation-value).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneticConfig {
    pub population_size: usize,
    pub max_generations: usize,
    /// Probability that a population slot is replaced by crossover.
    pub crossover_rate: f32,
    /// Probability that any single genome byte is randomised.
    pub mutation_rate: f32,
    pub seed: u64,
}

impl Default for GeneticConfig {
    fn default() -> Self {
        Self {
            population_size: 256,
            max_generations: 10_000,
            crossover_rate: 0.7,
            mutation_rate: 0.01,
            seed: 0,
        }
    }
}

/// Genetic-algorithm solver.
///
/// Each generation submits the whole population to a [`BatchEvaluator`] as
/// one blocking batch, returns immediately if any member reaches the
/// puzzle's maximum fitness, and otherwise breeds the next population with
/// fitness-proportionate crossover followed by per-byte mutation. Running
/// out of generations is a normal `None` outcome.
pub struct GeneticSolver {
    config: GeneticConfig,
    evaluator: Box<dyn BatchEvaluator>,
    generations: usize,
}

impl GeneticSolver {
    /// Creates a solver using the rayon-backed evaluator.
    pub fn new(config: GeneticConfig) -> Self {
        Self::with_evaluator(config, Box::new(RayonEvaluator))
    }

    /// Creates a solver with a caller-supplied evaluation backend.
    pub fn with_evaluator(config: GeneticConfig, evaluator: Box<dyn BatchEvaluator>) -> Self {
        Self {
            config,
            evaluator,
            generations: 0,
        }
    }

    /// Generations consumed by the most recent [`Solver::solve`] call,
    /// including the one that found the winner.
    pub fn generations(&self) -> usize {
        self.generations
    }

    fn rebuild_path(winner: &MemberScore, genome_len: usize) -> Path {
        let mut path = Path::new(genome_len);
        path.set_start_point(winner.start_point);
        for &value in &winner.moves {
            path.push(value);
        }
        path
    }

    /// Breeds the next population in place.
    ///
    /// Fitness values are normalised to `fitness - min + 1` so every member
    /// keeps a nonzero chance of selection. Mates are drawn by roulette
    /// wheel over the normalised weights; the mate contributes the gene
    /// prefix up to and including the crossover point, since it is biased
    /// toward higher fitness.
    fn crossover(
        &self,
        rng: &mut ChaCha8Rng,
        population: &mut [u8],
        genome_len: usize,
        scores: &[MemberScore],
        min_fitness: i32,
    ) {
        let total_weight: i64 = scores
            .iter()
            .map(|s| i64::from(s.fitness - min_fitness + 1))
            .sum();

        for slot in 0..self.config.population_size {
            let crossover_decision: f32 = rng.gen();
            if crossover_decision > self.config.crossover_rate {
                continue;
            }

            let draw = rng.gen::<f32>() * total_weight as f32;
            let mut mate = 0;
            let mut cumulative = 0.0f32;
            while mate < self.config.population_size - 1 {
                cumulative += (scores[mate].fitness - min_fitness + 1) as f32;
                if cumulative >= draw {
                    break;
                }
                mate += 1;
            }

            let crossover_point = rng.gen_range(0..genome_len);
            for gene in 0..=crossover_point {
                population[slot * genome_len + gene] = population[mate * genome_len + gene];
            }
        }
    }

    fn mutate(&self, rng: &mut ChaCha8Rng, population: &mut [u8]) {
        for byte in population.iter_mut() {
            let mutation_decision: f32 = rng.gen();
            if mutation_decision <= self.config.mutation_rate {
                *byte = rng.gen();
            }
        }
    }
}

impl Solver for GeneticSolver {
    fn solve(&mut self, puzzle: &Puzzle) -> Option<Path> {
        self.generations = 0;
        if self.config.population_size == 0 {
            return None;
        }

        let genome_len = puzzle.num_points();
        let target_fitness = max_fitness(puzzle);
        debug!(target_fitness, "starting genetic search");

        let mut rng = ChaCha8Rng::seed_from_u64(self.config.seed);
        let mut population = vec![0u8; self.config.population_size * genome_len];
        for byte in population.iter_mut() {
            *byte = rng.gen();
        }

        for generation in 0..self.config.max_generations {
            let scores = self
                .evaluator
                .evaluate(puzzle, &population, genome_len);
            self.generations = generation + 1;

            if let Some(winner) = scores.iter().find(|s| s.fitness == target_fitness) {
                debug!(generation, "maximum-fitness member found");
                return Some(Self::rebuild_path(winner, genome_len));
            }

            let min_fitness = scores.iter().map(|s| s.fitness).min().unwrap_or(0);
            if generation % 100 == 0 {
                let best = scores.iter().map(|s| s.fitness).max().unwrap_or(0);
                debug!(generation, best, target_fitness, "generation complete");
            }

            self.crossover(&mut rng, &mut population, genome_len, &scores, min_fitness);
            self.mutate(&mut rng, &mut population);
        }

        debug!(
            generations = self.generations,
            "generation budget exhausted without a solution"
        );
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::path::Move;
    use crate::puzzle::reader;
    use crate::solver::evaluator::SerialEvaluator;
    use crate::solver::validator::Validator;

    fn two_by_two() -> Puzzle {
        reader::parse("2 2\ns o o\nx w o\no o e\n").unwrap()
    }

    /// 3x2 grid solvable with the single move RIGHT.
    fn one_move_puzzle() -> Puzzle {
        reader::parse("3 2\ns o e o o\no _ o _ o\no o o o o\n").unwrap()
    }

    #[test]
    fn single_member_full_mutation_eventually_solves_a_one_move_puzzle() {
        let _ = tracing_subscriber::fmt::try_init();
        let config = GeneticConfig {
            population_size: 1,
            max_generations: 5_000,
            crossover_rate: 0.0,
            mutation_rate: 1.0,
            seed: 7,
        };
        let puzzle = one_move_puzzle();
        let mut solver = GeneticSolver::new(config);
        let path = solver
            .solve(&puzzle)
            .expect("full mutation explores the one-byte space");
        assert_eq!(path.start_point(), 0);
        assert_eq!(path.moves()[0], Move::Right);
        assert!(solver.generations() <= 5_000);
    }

    #[test]
    fn found_solutions_validate() {
        let config = GeneticConfig {
            population_size: 64,
            max_generations: 2_000,
            crossover_rate: 0.7,
            mutation_rate: 0.05,
            seed: 42,
        };
        let puzzle = two_by_two();
        let mut solver = GeneticSolver::new(config);
        if let Some(path) = solver.solve(&puzzle) {
            let mut validator = Validator::new();
            assert!(validator.evaluate(&puzzle, &path));
        }
    }

    #[test]
    fn same_seed_reproduces_the_same_trajectory() {
        let config = GeneticConfig {
            population_size: 16,
            max_generations: 200,
            crossover_rate: 0.6,
            mutation_rate: 0.1,
            seed: 1234,
        };
        let puzzle = two_by_two();

        let mut first = GeneticSolver::new(config.clone());
        let mut second =
            GeneticSolver::with_evaluator(config, Box::new(SerialEvaluator));

        let path_a = first.solve(&puzzle);
        let path_b = second.solve(&puzzle);
        assert_eq!(path_a, path_b);
        assert_eq!(first.generations(), second.generations());
    }

    #[test]
    fn generation_budget_exhaustion_is_a_normal_outcome() {
        // Unsolvable: both edges into the end are blocked.
        let puzzle = reader::parse("2 2\ns o o\no w x\no x e\n").unwrap();
        let config = GeneticConfig {
            population_size: 8,
            max_generations: 50,
            crossover_rate: 0.7,
            mutation_rate: 0.1,
            seed: 5,
        };
        let mut solver = GeneticSolver::new(config);
        assert!(solver.solve(&puzzle).is_none());
        assert_eq!(solver.generations(), 50);
    }

    #[test]
    fn empty_population_returns_none() {
        let config = GeneticConfig {
            population_size: 0,
            ..GeneticConfig::default()
        };
        let mut solver = GeneticSolver::new(config);
        assert!(solver.solve(&two_by_two()).is_none());
        assert_eq!(solver.generations(), 0);
    }
}
