use nqueens_ga::{
    evolution::{EvolutionLauncher, EvolutionOptions, LogLevel},
    fitness::FitnessConvention,
    report::{summary_line, FitnessTrajectory},
    rng::RandomNumberGenerator,
    selection::SelectionMethod,
};

fn main() -> nqueens_ga::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let options = EvolutionOptions::builder()
        .dimension(8)
        .population_size(100)
        .num_generations(100)
        .mutation_rate(0.05)
        .selection(SelectionMethod::Truncation { elite_ratio: 0.5 })
        .convention(FitnessConvention::ConflictCount)
        .log_level(LogLevel::Minimal)
        .build();

    let launcher = EvolutionLauncher::default();
    let mut rng = RandomNumberGenerator::from_seed(42);
    let result = launcher.evolve(&options, &mut rng)?;

    for record in &result.records {
        println!("{}", summary_line(record));
    }

    println!();
    println!(
        "Best placement ({} conflicts): {:?}",
        result.best.genome.conflicts(),
        result.best.genome.genes()
    );
    println!("{}", result.best.genome);

    let trajectory = FitnessTrajectory::from_records(&result.records);
    if let Some((low, high)) = trajectory.y_range() {
        println!(
            "Fitness over {} generations spans {:.1} to {:.1}",
            trajectory.len(),
            low,
            high
        );
    }

    Ok(())
}
