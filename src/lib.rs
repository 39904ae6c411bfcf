//! # genalg
//!
//! A fitness-driven evolutionary search engine over fixed-length real-valued
//! chromosomes.
//!
//! Given an arbitrary scoring function over gene vectors in the unit
//! hypercube, the engine maintains a fixed-size population of candidates and
//! improves its best score across generations with weighted roulette
//! selection, uniform per-gene crossover, uniform replacement mutation and
//! elitism. The scoring function is an opaque oracle: the engine never
//! inspects the meaning of individual genes.
//!
//! ## Quick Start
//!
//! ```rust
//! use genalg::prelude::*;
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//!
//! let config = EngineConfig::new(5)
//!     .population_size(50)
//!     .crossover_rate(0.5)
//!     .mutation_rate(0.1)
//!     .elitism_rate(0.05);
//!
//! let mut engine = Engine::new(config, CenteredSphere::new(), &mut rng)?;
//! for _ in 0..100 {
//!     let (_best, fitness) = engine.advance(&mut rng)?;
//!     assert!(fitness <= 0.0);
//! }
//! # Ok::<(), genalg::Error>(())
//! ```

pub mod candidate;
pub mod config;
pub mod engine;
pub mod error;
pub mod scoring;
pub mod selection;
pub mod stats;

pub use crate::error::{Error, Result};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::candidate::Candidate;
    pub use crate::config::EngineConfig;
    pub use crate::engine::Engine;
    pub use crate::error::{Error, Result};
    pub use crate::scoring::{CenteredSphere, FnScorer, GeneSum, Scorer};
    pub use crate::selection::SelectionWeights;
    pub use crate::stats::{EvolutionStats, GenerationStats, TimingStats};
}
