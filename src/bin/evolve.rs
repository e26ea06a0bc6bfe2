//! Command-line driver: evolves bridge hands and prints the progress.

use card_evolution::evolution::{Evolution, EvolutionConfig, GenerationReport, BEST_HANDS_REPORTED};
use card_evolution::stats::ScoreHistogram;
use card_evolution::Result;
use clap::Parser;
use std::process::ExitCode;

/// Evolve contract-bridge hands toward a target point count
#[derive(Parser, Debug)]
#[command(name = "evolve")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Maximum number of generations
    #[arg(short = 'g', long, default_value = "500")]
    max_generations: usize,

    /// Hands kept per generation
    #[arg(short, long, default_value = "50")]
    population: usize,

    /// Per-card mutation probability (default: 1/13)
    #[arg(short, long)]
    mutation_rate: Option<f64>,

    /// Reproduce by crossover instead of budding
    #[arg(long)]
    sexual: bool,

    /// Children of a hand scoring at the population mean
    #[arg(long, default_value = "4")]
    children_baseline: usize,

    /// Sensitivity of brood size to score
    #[arg(long, default_value = "1.0")]
    reproduction_pressure: f64,

    /// Share of surplus children removed by rank rather than at random
    #[arg(long, default_value = "0.8")]
    selection_pressure: f64,

    /// Score that ends the run (default: 37)
    #[arg(short, long)]
    fitness_goal: Option<f64>,

    /// Random seed (default: random)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print a summary after every generation
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn config(&self) -> EvolutionConfig {
        let mut config = EvolutionConfig::default()
            .with_population_size(self.population)
            .with_sexual(self.sexual)
            .with_children_baseline(self.children_baseline)
            .with_reproduction_pressure(self.reproduction_pressure)
            .with_selection_pressure(self.selection_pressure);
        if let Some(rate) = self.mutation_rate {
            config = config.with_mutation_rate(rate);
        }
        if let Some(goal) = self.fitness_goal {
            config = config.with_fitness_goal(goal);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        config
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match execute(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(2)
        }
    }
}

fn execute(args: &Args) -> Result<bool> {
    let config = args.config();
    print_properties(&config);

    let mut evolution = Evolution::new(config)?;
    let verbose = args.verbose;
    let outcome = evolution.run_with_callback(args.max_generations, None, |report, counters| {
        if verbose {
            print_report(report, counters.hands_created);
        }
    })?;

    println!();
    println!("Generation 0 results:");
    if let Some(stats) = evolution.initial_stats() {
        println!("{stats}");
    }

    println!();
    println!("Run complete.  Success = {}", outcome.success);
    println!();
    println!("Generation {} results", outcome.generations);
    println!(
        "    number of hands dealt (cumulative): {}",
        evolution.counters().hands_created
    );
    if let Some(stats) = evolution.latest_stats() {
        println!("{stats}");
    }

    let fitness = evolution.fitness();
    if outcome.success {
        println!("Hands meeting fitness goal: {}", outcome.best.len());
    } else {
        println!("Best hands");
    }
    for hand in outcome.best.iter().take(BEST_HANDS_REPORTED) {
        println!("     {hand}");
        if args.verbose {
            println!("     {}", fitness.breakdown(hand.expressed()));
        }
    }

    Ok(outcome.success)
}

fn print_properties(config: &EvolutionConfig) {
    println!();
    println!("Simulation properties: ");
    println!("    population                : {}", config.population_size);
    println!("    mutation rate             : {}", config.mutation_rate);
    println!("    sexual reproduction       : {}", config.sexual);
    println!("    # children - baseline     : {}", config.children_baseline);
    println!("    selection pressures:");
    println!("      reproduction            : {}", config.reproduction_pressure);
    println!("      survival                : {}", config.selection_pressure);
}

fn print_report(report: &GenerationReport, hands_created: u64) {
    println!();
    println!("Generation: {} results", report.generation);
    println!("number of hands dealt (cumulative): {hands_created}");

    println!();
    println!("Reproduction summary:");
    if report.degenerate_mean {
        println!("mean score not positive: baseline children for every parent");
    }
    for entry in &report.reproduction {
        println!(
            "{}  parents with score  {}  produced  {}  children each",
            entry.parents, entry.score, entry.children_each
        );
    }

    println!();
    println!("Children summary: count =  {}", report.children);
    println!("{}", report.children_stats);

    match &report.selection_stats {
        Some(stats) => {
            println!();
            println!("Results after fitness selection: count =  {}", report.survivors);
            println!("{stats}");
        }
        None => println!("No fitness selection applied."),
    }

    if report.bottlenecked {
        println!();
        println!("Results after random bottleneck selection:");
        println!("{}", report.stats);
    } else {
        println!("No random bottleneck selection applied.");
    }
    print_histogram(&report.histogram);
}

fn print_histogram(histogram: &ScoreHistogram) {
    println!();
    println!("{histogram}");
}
