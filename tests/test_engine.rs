use nqueens_ga::{
    breeding::OffspringCount,
    error::GeneticError,
    evolution::{EvolutionLauncher, EvolutionOptions, LogLevel, RunState},
    fitness::FitnessConvention,
    genome::Genome,
    report::{render_board, summary_line, FitnessTrajectory},
    rng::RandomNumberGenerator,
    selection::SelectionMethod,
};

fn four_queens(convention: FitnessConvention, selection: SelectionMethod) -> EvolutionOptions {
    EvolutionOptions::builder()
        .dimension(4)
        .population_size(20)
        .num_generations(50)
        .mutation_rate(0.1)
        .selection(selection)
        .convention(convention)
        .build()
}

fn count_solved(options: &EvolutionOptions) -> usize {
    let launcher = EvolutionLauncher::default();
    (0..100u64)
        .filter(|&seed| {
            let mut rng = RandomNumberGenerator::from_seed(seed);
            let result = launcher.evolve(options, &mut rng).unwrap();
            result.best.genome.conflicts() == 0
        })
        .count()
}

#[test]
fn test_four_queens_conflict_count_is_solved_reliably() {
    let options = four_queens(
        FitnessConvention::ConflictCount,
        SelectionMethod::Truncation { elite_ratio: 0.5 },
    );
    let solved = count_solved(&options);
    assert!(solved >= 90, "only {} of 100 runs reached 0 conflicts", solved);
}

#[test]
fn test_four_queens_non_attacking_pairs_is_solved_reliably() {
    let options = four_queens(
        FitnessConvention::NonAttackingPairs,
        SelectionMethod::Truncation { elite_ratio: 0.5 },
    );
    let solved = count_solved(&options);
    assert!(solved >= 90, "only {} of 100 runs reached 6 pairs", solved);
}

#[test]
fn test_four_queens_roulette_is_solved_reliably() {
    let options = four_queens(FitnessConvention::NonAttackingPairs, SelectionMethod::Roulette);
    let solved = count_solved(&options);
    assert!(solved >= 90, "only {} of 100 runs reached 6 pairs", solved);
}

#[test]
fn test_solution_is_reported_in_both_conventions() {
    let launcher = EvolutionLauncher::default();
    let options = four_queens(
        FitnessConvention::NonAttackingPairs,
        SelectionMethod::Truncation { elite_ratio: 0.5 },
    );
    let result = launcher
        .evolve(&options, &mut RandomNumberGenerator::from_seed(2024))
        .unwrap();

    let best = &result.best;
    assert_eq!(best.score, FitnessConvention::NonAttackingPairs.score(&best.genome));
    assert_eq!(
        best.genome.conflicts() + best.genome.non_attacking_pairs(),
        6
    );
}

#[test]
fn test_eight_queens_improves_over_initial_population() {
    let launcher = EvolutionLauncher::default();
    let options = EvolutionOptions::builder()
        .dimension(8)
        .population_size(100)
        .num_generations(100)
        .mutation_rate(0.05)
        .build();
    let mut rng = RandomNumberGenerator::from_seed(8);

    let mut run = launcher.start(&options, &mut rng).unwrap();
    let initial = run.best().score;
    let records: Vec<_> = run.by_ref().map(|r| r.unwrap()).collect();

    assert_eq!(records.len(), 100);
    assert_eq!(run.state(), RunState::Completed);
    assert!(run.best().score <= initial);
    assert!(run.best().score <= 2, "best = {}", run.best().score);
}

#[test]
fn test_invalid_configurations_are_rejected() {
    let launcher = EvolutionLauncher::default();
    let cases = vec![
        EvolutionOptions::builder().dimension(0).build(),
        EvolutionOptions::builder().population_size(0).build(),
        EvolutionOptions::builder().population_size(1).build(),
        EvolutionOptions::builder().mutation_rate(-0.01).build(),
        EvolutionOptions::builder().mutation_rate(1.01).build(),
        EvolutionOptions::builder()
            .selection(SelectionMethod::Truncation { elite_ratio: 1.5 })
            .build(),
        EvolutionOptions::builder()
            .population_size(11)
            .offspring_per_mating(OffspringCount::Two)
            .build(),
    ];

    for options in cases {
        let mut rng = RandomNumberGenerator::from_seed(0);
        assert!(matches!(
            launcher.start(&options, &mut rng),
            Err(GeneticError::InvalidConfiguration(_))
        ));
    }
}

#[test]
fn test_small_unsolvable_boards_still_run() {
    let launcher = EvolutionLauncher::default();
    for dimension in [2, 3] {
        let options = EvolutionOptions::builder()
            .dimension(dimension)
            .population_size(10)
            .num_generations(20)
            .build();
        let result = launcher
            .evolve(&options, &mut RandomNumberGenerator::from_seed(dimension as u64))
            .unwrap();

        assert_eq!(result.records.len(), 20);
        // No placement of 2 or 3 queens is conflict-free
        assert!(result.best.score > 0);
    }
}

#[test]
fn test_logging_levels_do_not_change_the_run() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();

    let launcher = EvolutionLauncher::default();
    let mut results = Vec::new();
    for level in [LogLevel::None, LogLevel::Minimal, LogLevel::Verbose] {
        let options = EvolutionOptions::builder()
            .dimension(5)
            .population_size(10)
            .num_generations(5)
            .log_level(level)
            .build();
        results.push(
            launcher
                .evolve(&options, &mut RandomNumberGenerator::from_seed(77))
                .unwrap(),
        );
    }

    assert_eq!(results[0], results[1]);
    assert_eq!(results[1], results[2]);
}

#[test]
fn test_reporting_consumes_records() {
    let launcher = EvolutionLauncher::default();
    let options = EvolutionOptions::builder()
        .dimension(6)
        .population_size(30)
        .num_generations(12)
        .build();
    let result = launcher
        .evolve(&options, &mut RandomNumberGenerator::from_seed(12))
        .unwrap();

    let trajectory = FitnessTrajectory::from_records(&result.records);
    assert_eq!(trajectory.len(), 12);
    assert_eq!(trajectory.best_ever.last(), Some(&result.best.score));

    let (low, high) = trajectory.y_range().unwrap();
    assert!(low < high);

    let line = summary_line(&result.records[0]);
    assert!(line.starts_with("Generation: 0 |"));

    let board = render_board(&result.best.genome);
    assert_eq!(board.matches('♛').count(), 6);
    assert_eq!(board, result.best.genome.to_string());
}

#[test]
fn test_genome_constructor_validates_columns() {
    assert!(Genome::new(vec![0, 1, 2]).is_ok());
    assert!(matches!(
        Genome::new(vec![0, 3, 1]),
        Err(GeneticError::InvalidConfiguration(_))
    ));
}

#[cfg(feature = "serde")]
#[test]
fn test_records_serialize() {
    let launcher = EvolutionLauncher::default();
    let options = EvolutionOptions::builder()
        .dimension(4)
        .population_size(4)
        .num_generations(2)
        .build();
    let result = launcher
        .evolve(&options, &mut RandomNumberGenerator::from_seed(1))
        .unwrap();

    let json = serde_json::to_string(&result).unwrap();
    let back: nqueens_ga::EvolutionResult = serde_json::from_str(&json).unwrap();
    assert_eq!(back, result);

    let options_json = serde_json::to_string(&options).unwrap();
    let options_back: EvolutionOptions = serde_json::from_str(&options_json).unwrap();
    assert_eq!(options_back, options);
}
