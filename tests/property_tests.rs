//! Property-based tests for genalg
//!
//! Uses proptest to verify engine invariants across randomized configurations
//! and seeds.

use genalg::prelude::*;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

proptest! {
    // ==================== Candidate properties ====================

    #[test]
    fn candidate_gene_count_preserved(gene_count in 1usize..50, seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let candidate = Candidate::random(gene_count, &mut rng);
        prop_assert_eq!(candidate.gene_count(), gene_count);
    }

    #[test]
    fn candidate_random_genes_within_unit_interval(
        gene_count in 1usize..50,
        seed in any::<u64>()
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let candidate = Candidate::random(gene_count, &mut rng);
        for gene in candidate.genes() {
            prop_assert!((0.0..=1.0).contains(gene));
        }
    }

    // ==================== Selection properties ====================

    #[test]
    fn selection_returns_valid_indices(
        fitnesses in prop::collection::vec(-100.0..100.0f64, 2..40),
        seed in any::<u64>()
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let weights = SelectionWeights::from_fitnesses(&fitnesses);
        for _ in 0..50 {
            let idx = weights.select(&mut rng).unwrap();
            prop_assert!(idx < fitnesses.len());
        }
    }

    #[test]
    fn selected_parents_are_distinct(
        fitnesses in prop::collection::vec(-100.0..100.0f64, 2..40),
        seed in any::<u64>()
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let weights = SelectionWeights::from_fitnesses(&fitnesses);
        for _ in 0..50 {
            let (a, b) = weights.select_distinct_pair(&mut rng).unwrap();
            prop_assert_ne!(a, b);
        }
    }

    #[test]
    fn tied_fitnesses_use_uniform_fallback(
        value in -100.0..100.0f64,
        len in 2usize..40
    ) {
        let fitnesses = vec![value; len];
        let weights = SelectionWeights::from_fitnesses(&fitnesses);
        prop_assert!(weights.is_uniform());
    }

    // ==================== Engine invariants ====================

    #[test]
    fn population_size_constant_across_generations(
        gene_count in 1usize..8,
        population_size in 2usize..30,
        elitism_rate in 0.0..1.0f64,
        seed in any::<u64>()
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let config = EngineConfig::new(gene_count)
            .population_size(population_size)
            .elitism_rate(elitism_rate);
        let mut engine = Engine::new(config, GeneSum, &mut rng).unwrap();

        for _ in 0..3 {
            engine.advance(&mut rng).unwrap();
            prop_assert_eq!(engine.population().len(), population_size);
        }
    }

    #[test]
    fn population_sorted_ascending_with_best_last(
        gene_count in 1usize..8,
        population_size in 2usize..30,
        seed in any::<u64>()
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let config = EngineConfig::new(gene_count).population_size(population_size);
        let mut engine = Engine::new(config, CenteredSphere::new(), &mut rng).unwrap();

        for _ in 0..3 {
            engine.advance(&mut rng).unwrap();
            let population = engine.population();
            for pair in population.windows(2) {
                prop_assert!(pair[0].fitness_f64() <= pair[1].fitness_f64());
            }
            prop_assert_eq!(
                engine.best_fitness(),
                population.last().unwrap().fitness_f64()
            );
        }
    }

    #[test]
    fn all_genes_in_unit_interval_every_generation(
        gene_count in 1usize..8,
        population_size in 2usize..30,
        crossover_rate in 0.0..1.0f64,
        mutation_rate in 0.0..1.0f64,
        seed in any::<u64>()
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let config = EngineConfig::new(gene_count)
            .population_size(population_size)
            .crossover_rate(crossover_rate)
            .mutation_rate(mutation_rate);
        let mut engine = Engine::new(config, GeneSum, &mut rng).unwrap();

        for _ in 0..3 {
            engine.advance(&mut rng).unwrap();
            for candidate in engine.population() {
                for gene in candidate.genes() {
                    prop_assert!((0.0..=1.0).contains(gene));
                }
            }
        }
    }

    #[test]
    fn best_fitness_monotone_with_elitism(
        gene_count in 1usize..8,
        population_size in 4usize..30,
        seed in any::<u64>()
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let config = EngineConfig::new(gene_count)
            .population_size(population_size)
            .elitism_rate(0.1);
        let mut engine = Engine::new(config, CenteredSphere::new(), &mut rng).unwrap();

        let mut previous = engine.best_fitness();
        for _ in 0..5 {
            let (_, best) = engine.advance(&mut rng).unwrap();
            prop_assert!(best >= previous);
            previous = best;
        }
    }

    #[test]
    fn degenerate_fitness_range_completes(
        gene_count in 1usize..8,
        population_size in 2usize..30,
        seed in any::<u64>()
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let scorer = FnScorer::new(|_: &[f64]| 7.5);
        let config = EngineConfig::new(gene_count).population_size(population_size);
        let mut engine = Engine::new(config, scorer, &mut rng).unwrap();

        engine.advance(&mut rng).unwrap();
        prop_assert_eq!(engine.population().len(), population_size);
    }

    #[test]
    fn full_crossover_children_reproduce_parent_vectors(
        gene_count in 1usize..8,
        population_size in 2usize..20,
        seed in any::<u64>()
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let config = EngineConfig::new(gene_count)
            .population_size(population_size)
            .crossover_rate(1.0)
            .mutation_rate(0.0)
            .elitism_rate(0.0);
        let mut engine = Engine::new(config, GeneSum, &mut rng).unwrap();

        let old_genes: Vec<Vec<f64>> = engine
            .population()
            .iter()
            .map(|c| c.genes().to_vec())
            .collect();
        engine.advance(&mut rng).unwrap();

        for child in engine.population() {
            prop_assert!(old_genes.iter().any(|genes| genes == child.genes()));
        }
    }
}
