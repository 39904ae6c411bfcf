//! Population engine
//!
//! Owns the population of candidates and drives generational evolution:
//! weighted roulette selection, uniform per-gene crossover, uniform replacement
//! mutation and elitism. The population is sorted ascending by fitness (worst
//! first, best last) after every public operation, and its size never changes.

use std::time::Instant;

use rand::Rng;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::candidate::Candidate;
use crate::config::EngineConfig;
use crate::error::Result;
use crate::scoring::Scorer;
use crate::selection::SelectionWeights;
use crate::stats::{EvolutionStats, GenerationStats, TimingStats};

/// Generational evolutionary engine over a fixed-size candidate population
pub struct Engine<S: Scorer> {
    config: EngineConfig,
    scorer: S,
    /// Sorted ascending by fitness; the best candidate is the last element
    population: Vec<Candidate>,
    generation: usize,
    stats: EvolutionStats,
}

impl<S: Scorer> Engine<S> {
    /// Create an engine with a freshly scored random population
    ///
    /// Validates the configuration, draws `population_size` random candidates,
    /// evaluates each one and sorts the population ascending by fitness.
    pub fn new<R: Rng>(config: EngineConfig, scorer: S, rng: &mut R) -> Result<Self> {
        config.validate()?;

        let eval_start = Instant::now();
        let mut population: Vec<Candidate> = (0..config.population_size)
            .map(|_| Candidate::random(config.gene_count, rng))
            .collect();
        evaluate_all(&mut population, &scorer);
        let eval_time = eval_start.elapsed();

        sort_by_fitness(&mut population);

        let evaluations = population.len();
        let mut stats = EvolutionStats::new();
        stats.record(
            GenerationStats::from_sorted_population(&population, 0, evaluations).with_timing(
                TimingStats::new()
                    .with_evaluation(eval_time, evaluations)
                    .with_total(eval_time),
            ),
        );

        Ok(Self {
            config,
            scorer,
            population,
            generation: 0,
            stats,
        })
    }

    /// Advance exactly one generation
    ///
    /// Builds the selection distribution from current fitnesses, carries the
    /// top elites forward unchanged, breeds the remaining slots from distinct
    /// parent pairs, evaluates the children and replaces the population.
    /// Returns the new generation's best candidate and its fitness.
    pub fn advance<R: Rng>(&mut self, rng: &mut R) -> Result<(Candidate, f64)> {
        let gen_start = Instant::now();

        let fitnesses: Vec<f64> = self.population.iter().map(|c| c.fitness_f64()).collect();
        let weights = SelectionWeights::from_fitnesses(&fitnesses);

        let size = self.config.population_size;
        let elite_count = self.config.elite_count();

        // Elites are cloned, never aliased with the outgoing generation.
        let mut new_population: Vec<Candidate> = Vec::with_capacity(size);
        new_population.extend(self.population[size - elite_count..].iter().cloned());

        let mut children: Vec<Candidate> = Vec::with_capacity(size - elite_count);
        for _ in 0..size - elite_count {
            let (first, second) = weights.select_distinct_pair(rng)?;
            children.push(self.breed(first, second, rng));
        }

        let eval_start = Instant::now();
        evaluate_all(&mut children, &self.scorer);
        let eval_time = eval_start.elapsed();
        let evaluations = children.len();

        new_population.append(&mut children);
        sort_by_fitness(&mut new_population);
        self.population = new_population;
        self.generation += 1;

        self.stats.record(
            GenerationStats::from_sorted_population(&self.population, self.generation, evaluations)
                .with_timing(
                    TimingStats::new()
                        .with_evaluation(eval_time, evaluations)
                        .with_total(gen_start.elapsed()),
                ),
        );

        let best = self.best();
        Ok((best.clone(), best.fitness_f64()))
    }

    /// Breed one child from the parents at the given population indices
    ///
    /// The lower-fitness parent is primary; a crossover draw below the rate
    /// takes the secondary (higher-fitness) parent's gene. Mutation then
    /// replaces each gene with a fresh uniform value at the mutation rate.
    fn breed<R: Rng>(&self, first: usize, second: usize, rng: &mut R) -> Candidate {
        let (primary, secondary) = if self.population[first].fitness_f64()
            <= self.population[second].fitness_f64()
        {
            (&self.population[first], &self.population[second])
        } else {
            (&self.population[second], &self.population[first])
        };

        let mut genes: Vec<f64> = (0..self.config.gene_count)
            .map(|i| {
                if rng.gen::<f64>() < self.config.crossover_rate {
                    secondary.genes()[i]
                } else {
                    primary.genes()[i]
                }
            })
            .collect();

        for gene in &mut genes {
            if rng.gen::<f64>() < self.config.mutation_rate {
                *gene = rng.gen::<f64>();
            }
        }

        Candidate::new(genes)
    }

    /// Current population, sorted ascending by fitness
    pub fn population(&self) -> &[Candidate] {
        &self.population
    }

    /// Best candidate of the current generation
    pub fn best(&self) -> &Candidate {
        self.population
            .last()
            .expect("Population is never empty after construction")
    }

    /// Best fitness of the current generation
    pub fn best_fitness(&self) -> f64 {
        self.best().fitness_f64()
    }

    /// Current generation number (0 after construction)
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Accumulated run statistics, one entry per generation
    pub fn stats(&self) -> &EvolutionStats {
        &self.stats
    }

    /// Engine configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

/// Sort ascending by fitness: worst first, best last. Stable, so ties keep
/// their breeding order.
fn sort_by_fitness(population: &mut [Candidate]) {
    population.sort_by(|a, b| {
        a.fitness_f64()
            .partial_cmp(&b.fitness_f64())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}

#[cfg(feature = "parallel")]
fn evaluate_all<S: Scorer>(candidates: &mut [Candidate], scorer: &S) {
    candidates
        .par_iter_mut()
        .for_each(|candidate| candidate.evaluate(scorer));
}

#[cfg(not(feature = "parallel"))]
fn evaluate_all<S: Scorer>(candidates: &mut [Candidate], scorer: &S) {
    for candidate in candidates.iter_mut() {
        candidate.evaluate(scorer);
    }
}
