//! Benchmark runner for the sorting and searching algorithms
//!
//! Outputs JSON results on stdout; logs go to stderr.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use sort_search::config::HarnessConfig;
use sort_search::dataset::{self, Pattern};
use sort_search::harness::{self, Algorithm};
use sort_search::validate::check_sorted;
use sort_search::HarnessError;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "benchmark",
    about = "Time and validate radix, quick, heap and merge sorts and the search families",
    version
)]
struct Cli {
    /// JSON config file; flags given on the command line override its values
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Sort generated or loaded data with every selected algorithm
    Sort {
        #[command(flatten)]
        data: DataArgs,

        /// Algorithms to run, comma separated
        #[arg(long, value_enum, value_delimiter = ',')]
        algorithms: Option<Vec<Algorithm>>,

        /// Timed runs per algorithm
        #[arg(long)]
        runs: Option<u32>,

        /// Base for radix-lsd
        #[arg(long)]
        lsd_base: Option<u64>,

        /// Power of two for radix-lsd-pow2 (derived from the data when omitted)
        #[arg(long)]
        radix_power: Option<u32>,

        /// Write the sorted sequence here, one integer per line
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Write random data to a file, one integer per line
    Generate {
        #[command(flatten)]
        data: DataArgs,

        /// Destination file
        output: PathBuf,
    },

    /// Report out-of-order pairs in a newline-delimited integer file
    Validate {
        /// File to check
        input: PathBuf,

        /// Maximum number of discrepancies to list
        #[arg(long)]
        instances: Option<usize>,
    },

    /// Range-search keys with binary and exponential search and compare them
    Search {
        #[command(flatten)]
        data: DataArgs,

        /// Keys to search for, comma separated
        #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
        keys: Vec<i64>,

        /// Additionally draw this many keys at random
        #[arg(long, default_value_t = 0)]
        random_keys: usize,
    },
}

#[derive(Args)]
struct DataArgs {
    /// Load data from this file instead of generating it
    #[arg(long)]
    input: Option<PathBuf>,

    /// Number of generated elements
    #[arg(long)]
    size: Option<usize>,

    /// Generated values lie in [0, 2^power)
    #[arg(long)]
    power: Option<u32>,

    /// Seed for the random generator
    #[arg(long)]
    seed: Option<u64>,

    /// Arrangement of generated data
    #[arg(long, value_enum)]
    pattern: Option<Pattern>,
}

impl DataArgs {
    fn apply(&self, config: &mut HarnessConfig) {
        if let Some(size) = self.size {
            config.size = size;
        }
        if let Some(power) = self.power {
            config.power = power;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(pattern) = self.pattern {
            config.pattern = pattern;
        }
    }

    fn load(&self, config: &HarnessConfig) -> Result<Vec<i64>, HarnessError> {
        match &self.input {
            Some(path) => dataset::load(path),
            None => dataset::generate(config.size, config.power, config.seed, config.pattern),
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), HarnessError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run(cli: Cli) -> Result<bool, HarnessError> {
    let mut config = match &cli.config {
        Some(path) => HarnessConfig::from_file(path)?,
        None => HarnessConfig::default(),
    };

    match cli.command {
        Command::Sort {
            data,
            algorithms,
            runs,
            lsd_base,
            radix_power,
            output,
        } => {
            data.apply(&mut config);
            if let Some(algorithms) = algorithms {
                config.algorithms = algorithms;
            }
            if let Some(runs) = runs {
                config.runs = runs;
            }
            if let Some(base) = lsd_base {
                config.lsd_base = base;
            }
            if radix_power.is_some() {
                config.radix_power = radix_power;
            }
            config.validate()?;

            let input = data.load(&config)?;
            let run = harness::run_benchmark(&config, &input)?;
            if let (Some(path), Some(sorted)) = (output, &run.output) {
                dataset::write(&path, sorted)?;
                info!(path = %path.display(), "wrote sorted output");
            }
            print_json(&run.report)?;
            Ok(run.report.correctness)
        }

        Command::Generate { data, output } => {
            data.apply(&mut config);
            config.validate()?;
            let values = dataset::generate(config.size, config.power, config.seed, config.pattern)?;
            dataset::write(&output, &values)?;
            info!(path = %output.display(), size = values.len(), "generated data");
            Ok(true)
        }

        Command::Validate { input, instances } => {
            let values = dataset::load(&input)?;
            let cap = instances.unwrap_or(config.report_instances);
            let report = check_sorted(&values, Some(cap));
            print_json(&report)?;
            Ok(report.is_sorted())
        }

        Command::Search {
            data,
            mut keys,
            random_keys,
        } => {
            data.apply(&mut config);
            config.validate()?;
            let values = data.load(&config)?;
            keys.extend(harness::sample_keys(&values, random_keys, config.seed));
            let report = harness::run_search_probe(&values, &keys);
            print_json(&report)?;
            Ok(report.is_ok())
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("sort_search=info,benchmark=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(2),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}
