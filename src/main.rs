use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use u_sequencing::annealing::AnnealingConfig;
use u_sequencing::ga::GeneticConfig;
use u_sequencing::harness::Harness;
use u_sequencing::models::JobSet;
use u_sequencing::resources::DEFAULT_ELEMENT_SIZE;

#[derive(Parser)]
#[command(
    name = "u-sequencing",
    about = "Compare exhaustive search and simulated annealing for single-machine job sequencing",
    version
)]
struct Cli {
    /// Processing times, comma-separated
    #[arg(short, long, value_delimiter = ',', default_values_t = [1.0, 2.0, 3.0, 4.0])]
    jobs: Vec<f64>,

    /// Seed for the stochastic solvers (random if omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Annealing start temperature
    #[arg(long, default_value_t = 1000.0)]
    initial_temperature: f64,

    /// Annealing cooling factor, in (0, 1)
    #[arg(long, default_value_t = 0.995)]
    cooling_rate: f64,

    /// Annealing iteration budget
    #[arg(long, default_value_t = 1000)]
    max_iterations: u64,

    /// Bytes per job for space estimates
    #[arg(long, default_value_t = DEFAULT_ELEMENT_SIZE)]
    element_size: usize,

    /// Skip exhaustive search above this many jobs
    #[arg(long)]
    exact_limit: Option<usize>,

    /// Also run the genetic search
    #[arg(long)]
    genetic: bool,

    /// Genetic population size
    #[arg(long, default_value_t = 100)]
    population_size: usize,

    /// Genetic generation count
    #[arg(long, default_value_t = 1000)]
    generations: u64,

    /// Genetic per-child mutation probability
    #[arg(long, default_value_t = 0.1)]
    mutation_rate: f64,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("u_sequencing=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let jobs = JobSet::new(cli.jobs).context("invalid job list")?;
    let annealing = AnnealingConfig::default()
        .with_initial_temperature(cli.initial_temperature)
        .with_cooling_rate(cli.cooling_rate)
        .with_max_iterations(cli.max_iterations);

    let mut harness = Harness::new(jobs)
        .with_annealing(annealing)
        .with_element_size(cli.element_size);
    if let Some(seed) = cli.seed {
        harness = harness.with_seed(seed);
    }
    if let Some(limit) = cli.exact_limit {
        harness = harness.with_exact_job_limit(limit);
    }
    if cli.genetic {
        let population = cli.population_size;
        harness = harness.with_genetic(
            GeneticConfig::default()
                .with_population_size(population)
                .with_generations(cli.generations)
                .with_mutation_rate(cli.mutation_rate)
                .with_elite_count(population.min(10))
                .with_parent_pool(population.min(50)),
        );
    }

    let report = harness.run().context("comparison failed")?;

    match cli.format {
        Format::Text => print!("{report}"),
        Format::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}
