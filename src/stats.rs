//! Per-generation statistics
//!
//! Observability for evolutionary runs: fitness summary and timing per
//! generation, plus an append-only history. Not required for correctness.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::candidate::Candidate;

/// Timing information for one generation
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TimingStats {
    /// Time spent on fitness evaluation (ms)
    pub evaluation_ms: f64,
    /// Mean per-candidate fitness-evaluation time (ms)
    pub mean_evaluation_ms: f64,
    /// Total generation time (ms)
    pub total_ms: f64,
}

impl TimingStats {
    /// Create new timing stats
    pub fn new() -> Self {
        Self::default()
    }

    /// Set evaluation time over `evaluations` fitness calls
    pub fn with_evaluation(mut self, duration: Duration, evaluations: usize) -> Self {
        self.evaluation_ms = duration.as_secs_f64() * 1000.0;
        if evaluations > 0 {
            self.mean_evaluation_ms = self.evaluation_ms / evaluations as f64;
        }
        self
    }

    /// Set total generation time
    pub fn with_total(mut self, duration: Duration) -> Self {
        self.total_ms = duration.as_secs_f64() * 1000.0;
        self
    }
}

/// Statistics for a single generation
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GenerationStats {
    /// Generation number
    pub generation: usize,
    /// Fitness evaluations performed in this generation
    pub evaluations: usize,
    /// Best fitness in this generation
    pub best_fitness: f64,
    /// Worst fitness in this generation
    pub worst_fitness: f64,
    /// Mean fitness
    pub mean_fitness: f64,
    /// Timing information
    pub timing: TimingStats,
}

impl GenerationStats {
    /// Compute statistics from a population sorted ascending by fitness
    pub fn from_sorted_population(
        population: &[Candidate],
        generation: usize,
        evaluations: usize,
    ) -> Self {
        let best = population.last().map(|c| c.fitness_f64());
        let worst = population.first().map(|c| c.fitness_f64());
        let mean = if population.is_empty() {
            0.0
        } else {
            population.iter().map(|c| c.fitness_f64()).sum::<f64>() / population.len() as f64
        };

        Self {
            generation,
            evaluations,
            best_fitness: best.unwrap_or(f64::NEG_INFINITY),
            worst_fitness: worst.unwrap_or(f64::INFINITY),
            mean_fitness: mean,
            timing: TimingStats::default(),
        }
    }

    /// Attach timing information
    pub fn with_timing(mut self, timing: TimingStats) -> Self {
        self.timing = timing;
        self
    }
}

/// Accumulated statistics for an evolutionary run
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct EvolutionStats {
    /// Per-generation statistics, in order
    pub generations: Vec<GenerationStats>,
}

impl EvolutionStats {
    /// Create empty run statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record statistics for one generation
    pub fn record(&mut self, stats: GenerationStats) {
        self.generations.push(stats);
    }

    /// Number of recorded generations
    pub fn num_generations(&self) -> usize {
        self.generations.len()
    }

    /// Best fitness per generation, in order
    pub fn best_fitness_history(&self) -> Vec<f64> {
        self.generations.iter().map(|g| g.best_fitness).collect()
    }
}
