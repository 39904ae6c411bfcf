//! Scoring-function boundary
//!
//! The engine treats the scoring function as an opaque oracle: a pure,
//! deterministic, total map from a gene vector in the unit hypercube to a
//! scalar where larger is better. Auxiliary arguments are carried by closure
//! capture.

/// Scoring oracle for gene vectors (higher = better)
///
/// Implementations must be pure and deterministic for a given gene vector and
/// must not fail anywhere in the unit hypercube. A panicking scorer propagates
/// to the caller; the engine performs no retry or recovery.
#[cfg(feature = "parallel")]
pub trait Scorer: Send + Sync {
    /// Score a gene vector
    fn score(&self, genes: &[f64]) -> f64;
}

/// Scoring oracle for gene vectors (higher = better)
///
/// Implementations must be pure and deterministic for a given gene vector and
/// must not fail anywhere in the unit hypercube. A panicking scorer propagates
/// to the caller; the engine performs no retry or recovery.
#[cfg(not(feature = "parallel"))]
pub trait Scorer {
    /// Score a gene vector
    fn score(&self, genes: &[f64]) -> f64;
}

/// A simple function wrapper for scoring
pub struct FnScorer<F>
where
    F: Fn(&[f64]) -> f64,
{
    f: F,
}

impl<F> FnScorer<F>
where
    F: Fn(&[f64]) -> f64,
{
    /// Create a new function-based scorer
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

#[cfg(feature = "parallel")]
impl<F> Scorer for FnScorer<F>
where
    F: Fn(&[f64]) -> f64 + Send + Sync,
{
    fn score(&self, genes: &[f64]) -> f64 {
        (self.f)(genes)
    }
}

#[cfg(not(feature = "parallel"))]
impl<F> Scorer for FnScorer<F>
where
    F: Fn(&[f64]) -> f64,
{
    fn score(&self, genes: &[f64]) -> f64 {
        (self.f)(genes)
    }
}

/// Centered sphere: f(g) = -Σ(gᵢ - 0.5)²
///
/// Unimodal on the unit hypercube, optimum 0.0 at all genes = 0.5. Negated so
/// the maximizing engine drives it toward zero.
#[derive(Clone, Debug, Default)]
pub struct CenteredSphere;

impl CenteredSphere {
    /// Create a new centered sphere scorer
    pub fn new() -> Self {
        Self
    }
}

impl Scorer for CenteredSphere {
    fn score(&self, genes: &[f64]) -> f64 {
        -genes.iter().map(|g| (g - 0.5) * (g - 0.5)).sum::<f64>()
    }
}

/// Gene sum: f(g) = Σgᵢ
///
/// Optimum at all genes = 1.0. Monotone in every gene, useful for checking
/// selection pressure.
#[derive(Clone, Debug, Default)]
pub struct GeneSum;

impl GeneSum {
    /// Create a new gene-sum scorer
    pub fn new() -> Self {
        Self
    }
}

impl Scorer for GeneSum {
    fn score(&self, genes: &[f64]) -> f64 {
        genes.iter().sum()
    }
}
