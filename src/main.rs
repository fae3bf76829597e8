//! tsp-evo: search a city file for a short round trip.
//!
//! ```text
//! tsp-evo cities1000.txt --strategy mutation --pop-size 750 --max-iter 10000 --output best.txt
//! ```

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing::Level;

use tsp_evo::ga::{ParentSelection, SearchConfig, SearchRunner, Strategy};
use tsp_evo::io::{load_cities, write_report, Report};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StrategyArg {
    /// Elitist swap-mutation hill-climb
    Mutation,
    /// Top half kept, rest filled by PMX offspring
    Crossover,
    /// Best of independent random tours
    Random,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Mutation => Strategy::Mutation,
            StrategyArg::Crossover => Strategy::Crossover,
            StrategyArg::Random => Strategy::Random,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "tsp-evo")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// City file: one `<id> <x> <y>` line per city
    cities: PathBuf,

    /// Generational loop to run
    #[arg(short, long, value_enum, default_value_t = StrategyArg::Mutation)]
    strategy: StrategyArg,

    /// Tours per generation
    #[arg(short, long, default_value_t = 750)]
    pop_size: usize,

    /// Number of generations
    #[arg(short, long, default_value_t = 10_000)]
    max_iter: usize,

    /// Tournament size for crossover parent selection; uniform sampling when omitted
    #[arg(short, long)]
    tournament: Option<usize>,

    /// Random seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Write the result report to this file
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Log every improving generation
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::INFO })
        .init();

    let cities = load_cities(&args.cities)
        .with_context(|| format!("failed to load cities from {}", args.cities.display()))?;

    let mut config = SearchConfig::default()
        .with_strategy(args.strategy.into())
        .with_population_size(args.pop_size)
        .with_max_generations(args.max_iter);
    if let Some(k) = args.tournament {
        config = config.with_selection(ParentSelection::Tournament(k));
    }
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let result = SearchRunner::run(&cities, &config).context("search failed")?;

    println!(
        "After {} generations of {} tours ({}), the best is:",
        result.generations, result.population_size, result.strategy
    );
    print!("{}", Report::from(&result));

    if let Some(path) = &args.output {
        write_report(path, &result)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
    }

    Ok(())
}
