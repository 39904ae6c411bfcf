//! Weighted roulette-wheel selection
//!
//! Parents are drawn with probability proportional to range-normalized fitness
//! via an explicit cumulative distribution. A population with zero fitness
//! spread (all candidates tied) selects uniformly instead of dividing by zero.

use rand::Rng;

use crate::error::{Error, Result};

/// Weighted redraws of parent 2 before falling back to a uniform draw over the
/// remaining indices. Covers the case where a single candidate holds all the
/// selection weight.
const MAX_DISTINCT_RETRIES: usize = 64;

#[derive(Clone, Debug)]
enum Weights {
    /// Prefix sums of normalized fitness, ending at 1.0 up to fp tolerance
    Cumulative(Vec<f64>),
    /// Degenerate fitness range: every candidate equally likely
    Uniform,
}

/// Selection distribution over a population's candidate indices
#[derive(Clone, Debug)]
pub struct SelectionWeights {
    weights: Weights,
    len: usize,
}

impl SelectionWeights {
    /// Build the selection distribution from raw fitness values
    ///
    /// Fitnesses are normalized to [0, 1] over the population's range, scaled
    /// to sum to one, and accumulated into prefix sums. A zero range falls back
    /// to uniform selection.
    ///
    /// # Panics
    /// Panics if `fitnesses` is empty. The engine never constructs weights for
    /// an empty population.
    pub fn from_fitnesses(fitnesses: &[f64]) -> Self {
        assert!(!fitnesses.is_empty(), "Fitness slice cannot be empty");

        let min = fitnesses.iter().copied().fold(f64::INFINITY, f64::min);
        let max = fitnesses.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let range = max - min;

        if range <= 0.0 {
            return Self {
                weights: Weights::Uniform,
                len: fitnesses.len(),
            };
        }

        let normalized: Vec<f64> = fitnesses.iter().map(|f| (f - min) / range).collect();
        // At least the max-fitness candidate normalizes to 1.0, so the sum is
        // strictly positive.
        let total: f64 = normalized.iter().sum();

        let mut cumulative = Vec::with_capacity(normalized.len());
        let mut acc = 0.0;
        for weight in &normalized {
            acc += weight / total;
            cumulative.push(acc);
        }

        Self {
            weights: Weights::Cumulative(cumulative),
            len: fitnesses.len(),
        }
    }

    /// Number of candidates covered by this distribution
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check whether the distribution is empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Check whether the degenerate-range uniform fallback is active
    pub fn is_uniform(&self) -> bool {
        matches!(self.weights, Weights::Uniform)
    }

    /// Select one candidate index by weighted roulette
    ///
    /// Draws a uniform value in [0, 1) and returns the first index whose
    /// cumulative probability strictly exceeds it. Failure to find one is a
    /// fatal internal-consistency error, not a recoverable condition.
    pub fn select<R: Rng>(&self, rng: &mut R) -> Result<usize> {
        match &self.weights {
            Weights::Uniform => Ok(rng.gen_range(0..self.len)),
            Weights::Cumulative(cumulative) => {
                let draw = rng.gen::<f64>();
                cumulative
                    .iter()
                    .position(|&odds| draw < odds)
                    .ok_or(Error::SelectionConsistency { draw })
            }
        }
    }

    /// Select two distinct parent indices
    ///
    /// Parent 2 is redrawn until it differs from parent 1 by index; candidates
    /// with identical genes in different slots are distinct. After
    /// [`MAX_DISTINCT_RETRIES`] weighted redraws, parent 2 is drawn uniformly
    /// from the remaining indices so selection always terminates.
    ///
    /// # Panics
    /// Panics if the distribution covers fewer than two candidates; the engine
    /// requires `population_size >= 2`.
    pub fn select_distinct_pair<R: Rng>(&self, rng: &mut R) -> Result<(usize, usize)> {
        assert!(self.len >= 2, "Need at least two candidates to pick parents");

        let first = self.select(rng)?;
        for _ in 0..MAX_DISTINCT_RETRIES {
            let second = self.select(rng)?;
            if second != first {
                return Ok((first, second));
            }
        }

        // Uniform over all indices except `first`.
        let offset = rng.gen_range(0..self.len - 1);
        let second = if offset >= first { offset + 1 } else { offset };
        Ok((first, second))
    }
}
