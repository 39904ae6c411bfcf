//! Engine configuration
//!
//! Configuration is immutable for the engine's lifetime and validated eagerly
//! at construction.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Configuration for the evolutionary engine
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Number of genes per candidate, fixed for the engine's lifetime
    pub gene_count: usize,
    /// Number of candidates per generation
    pub population_size: usize,
    /// Per-gene probability that a child inherits the secondary parent's gene
    pub crossover_rate: f64,
    /// Per-gene probability that an inherited gene is replaced with a fresh
    /// uniform random value
    pub mutation_rate: f64,
    /// Fraction of the population carried forward unchanged each generation
    pub elitism_rate: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            gene_count: 1,
            population_size: 200,
            crossover_rate: 0.5,
            mutation_rate: 0.1,
            elitism_rate: 0.05,
        }
    }
}

impl EngineConfig {
    /// Create a configuration with the given gene count and defaults otherwise
    pub fn new(gene_count: usize) -> Self {
        Self {
            gene_count,
            ..Self::default()
        }
    }

    /// Set the population size
    pub fn population_size(mut self, size: usize) -> Self {
        self.population_size = size;
        self
    }

    /// Set the crossover rate
    pub fn crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate;
        self
    }

    /// Set the mutation rate
    pub fn mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Set the elitism rate
    pub fn elitism_rate(mut self, rate: f64) -> Self {
        self.elitism_rate = rate;
        self
    }

    /// Validate the configuration
    ///
    /// Requires `gene_count >= 1`, `population_size >= 2` (breeding needs two
    /// distinct parents) and all rates in [0, 1].
    pub fn validate(&self) -> Result<()> {
        if self.gene_count < 1 {
            return Err(Error::Configuration(
                "gene_count must be at least 1".to_string(),
            ));
        }
        if self.population_size < 2 {
            return Err(Error::Configuration(
                "population_size must be at least 2".to_string(),
            ));
        }
        for (name, rate) in [
            ("crossover_rate", self.crossover_rate),
            ("mutation_rate", self.mutation_rate),
            ("elitism_rate", self.elitism_rate),
        ] {
            if !(0.0..=1.0).contains(&rate) {
                return Err(Error::Configuration(format!(
                    "{} must be in [0, 1], got {}",
                    name, rate
                )));
            }
        }
        Ok(())
    }

    /// Number of elite candidates carried forward each generation
    ///
    /// `ceil(elitism_rate * population_size)`, never above the population size.
    pub fn elite_count(&self) -> usize {
        let count = (self.elitism_rate * self.population_size as f64).ceil() as usize;
        count.min(self.population_size)
    }
}
