//! Candidate type
//!
//! A candidate is a fixed-length vector of genes in [0, 1] plus a lazily
//! evaluated scalar fitness. Gene count is set at construction and never
//! changes.

use std::cmp::Ordering;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::scoring::Scorer;

/// One point in the search space: genes plus fitness
///
/// Fitness is `None` until [`Candidate::evaluate`] is called, so candidates can
/// be bred without redundant scoring.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Candidate {
    genes: Vec<f64>,
    fitness: Option<f64>,
}

impl Candidate {
    /// Create a candidate with the given genes, fitness unset
    pub fn new(genes: Vec<f64>) -> Self {
        Self {
            genes,
            fitness: None,
        }
    }

    /// Create a candidate with a known fitness
    pub fn with_fitness(genes: Vec<f64>, fitness: f64) -> Self {
        Self {
            genes,
            fitness: Some(fitness),
        }
    }

    /// Create a candidate with `gene_count` independent uniform draws in [0, 1]
    pub fn random<R: Rng>(gene_count: usize, rng: &mut R) -> Self {
        let genes = (0..gene_count).map(|_| rng.gen::<f64>()).collect();
        Self {
            genes,
            fitness: None,
        }
    }

    /// Score this candidate and store the result
    ///
    /// Invokes the scorer on the gene vector. A panicking scorer propagates
    /// uncaught; the scoring contract is total over the unit hypercube.
    pub fn evaluate<S: Scorer>(&mut self, scorer: &S) {
        self.fitness = Some(scorer.score(&self.genes));
    }

    /// Check if this candidate has been evaluated
    pub fn is_evaluated(&self) -> bool {
        self.fitness.is_some()
    }

    /// Get the fitness, if evaluated
    pub fn fitness(&self) -> Option<f64> {
        self.fitness
    }

    /// Get the fitness, panicking if not evaluated
    pub fn fitness_f64(&self) -> f64 {
        self.fitness.expect("Candidate has not been evaluated")
    }

    /// Get the genes
    pub fn genes(&self) -> &[f64] {
        &self.genes
    }

    /// Get mutable access to the genes
    pub fn genes_mut(&mut self) -> &mut [f64] {
        &mut self.genes
    }

    /// Number of genes
    pub fn gene_count(&self) -> usize {
        self.genes.len()
    }

    /// Take the genes out of this candidate
    pub fn into_genes(self) -> Vec<f64> {
        self.genes
    }

    /// Check if this candidate is better than another
    pub fn is_better_than(&self, other: &Self) -> bool {
        match (self.fitness, other.fitness) {
            (Some(a), Some(b)) => a > b,
            (Some(_), None) => true,
            (None, _) => false,
        }
    }
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.genes == other.genes && self.fitness == other.fitness
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self.fitness, other.fitness) {
            (Some(a), Some(b)) => a.partial_cmp(&b),
            (Some(_), None) => Some(Ordering::Greater),
            (None, Some(_)) => Some(Ordering::Less),
            (None, None) => Some(Ordering::Equal),
        }
    }
}
