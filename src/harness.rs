//! Timing and checking harness behind the `benchmark` binary.
//!
//! Each selected algorithm sorts a fresh copy of the input once per run; the
//! last output is checked for sortedness and for being a permutation of the
//! input. Failures are recorded in the report instead of aborting the run.

use std::fmt;
use std::hint::black_box;
use std::str::FromStr;
use std::time::{Duration, Instant};

use clap::ValueEnum;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::HarnessConfig;
use crate::error::{HarnessError, SortError};
use crate::mergesort::mergesort;
use crate::radix::suggested_power;
use crate::search::{BinarySearch, ExponentialSearch, RangeOutcome, Searcher};
use crate::validate::{check_sorted, is_permutation};
use crate::{HeapSort, MergeSort, QuickSort, RadixLsb, RadixLsd, RadixLsdPow2, Sorter};

/// Sorting algorithms selectable from the harness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum Algorithm {
    #[serde(rename = "radix-lsb")]
    #[value(name = "radix-lsb")]
    RadixLsb,
    #[serde(rename = "radix-lsd")]
    #[value(name = "radix-lsd")]
    RadixLsd,
    #[serde(rename = "radix-lsd-pow2")]
    #[value(name = "radix-lsd-pow2")]
    RadixLsdPow2,
    #[serde(rename = "quicksort")]
    #[value(name = "quicksort")]
    QuickSort,
    #[serde(rename = "heapsort")]
    #[value(name = "heapsort")]
    HeapSort,
    #[serde(rename = "mergesort")]
    #[value(name = "mergesort")]
    MergeSort,
}

impl Algorithm {
    pub const ALL: [Algorithm; 6] = [
        Algorithm::RadixLsb,
        Algorithm::RadixLsd,
        Algorithm::RadixLsdPow2,
        Algorithm::QuickSort,
        Algorithm::HeapSort,
        Algorithm::MergeSort,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::RadixLsb => "radix-lsb",
            Algorithm::RadixLsd => "radix-lsd",
            Algorithm::RadixLsdPow2 => "radix-lsd-pow2",
            Algorithm::QuickSort => "quicksort",
            Algorithm::HeapSort => "heapsort",
            Algorithm::MergeSort => "mergesort",
        }
    }

    /// Build the sorter, resolving radix parameters from `config`.
    ///
    /// Without an explicit `radix_power` the power-of-two variant uses
    /// [`suggested_power`] for the largest value in `data`.
    pub fn sorter(&self, config: &HarnessConfig, data: &[i64]) -> Box<dyn Sorter> {
        match self {
            Algorithm::RadixLsb => Box::new(RadixLsb),
            Algorithm::RadixLsd => Box::new(RadixLsd {
                base: config.lsd_base,
            }),
            Algorithm::RadixLsdPow2 => {
                let power = config.radix_power.unwrap_or_else(|| {
                    let max = data.iter().copied().max().unwrap_or(0).max(0);
                    suggested_power(max as u64)
                });
                Box::new(RadixLsdPow2 { power })
            }
            Algorithm::QuickSort => Box::new(QuickSort),
            Algorithm::HeapSort => Box::new(HeapSort),
            Algorithm::MergeSort => Box::new(MergeSort),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = HarnessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|a| a.name() == s)
            .ok_or_else(|| HarnessError::UnknownAlgorithm(s.to_string()))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AlgorithmResult {
    pub name: String,
    pub stable: bool,
    pub runs: u32,
    pub avg_ns: f64,
    pub min_ns: u128,
    pub ops_per_second: f64,
    pub sorted: bool,
    pub permutation: bool,
    pub discrepancies: usize,
    pub error: Option<String>,
}

impl AlgorithmResult {
    fn failed(sorter: &dyn Sorter, err: &SortError) -> Self {
        AlgorithmResult {
            name: sorter.name().to_string(),
            stable: sorter.is_stable(),
            runs: 0,
            avg_ns: f64::INFINITY,
            min_ns: 0,
            ops_per_second: 0.0,
            sorted: false,
            permutation: false,
            discrepancies: 0,
            error: Some(err.to_string()),
        }
    }

    pub fn is_correct(&self) -> bool {
        self.error.is_none() && self.sorted && self.permutation
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BenchmarkReport {
    pub size: usize,
    pub results: Vec<AlgorithmResult>,
    pub correctness: bool,
}

/// Report plus the sorted output of the last algorithm that succeeded.
#[derive(Debug, Clone)]
pub struct BenchmarkRun {
    pub report: BenchmarkReport,
    pub output: Option<Vec<i64>>,
}

struct Timing {
    total: Duration,
    min: Duration,
}

/// Time every algorithm selected in `config` on `data`.
pub fn run_benchmark(config: &HarnessConfig, data: &[i64]) -> Result<BenchmarkRun, HarnessError> {
    config.validate()?;

    let mut reference = data.to_vec();
    reference.sort_unstable();

    let mut results = Vec::with_capacity(config.algorithms.len());
    let mut output = None;

    for algorithm in &config.algorithms {
        let sorter = algorithm.sorter(config, data);
        info!(algorithm = sorter.name(), size = data.len(), runs = config.runs, "starting sort");

        let (timing, sorted) = match time_sorter(sorter.as_ref(), data, config.runs) {
            Ok(timed) => timed,
            Err(err) => {
                warn!(algorithm = sorter.name(), %err, "sort failed");
                results.push(AlgorithmResult::failed(sorter.as_ref(), &err));
                continue;
            }
        };

        let report = check_sorted(&sorted, Some(config.report_instances));
        let permutation = sorted == reference || is_permutation(data, &sorted);
        let avg_ns = timing.total.as_nanos() as f64 / f64::from(config.runs);
        let ops_per_second = if avg_ns > 0.0 {
            1_000_000_000.0 / avg_ns
        } else {
            f64::INFINITY
        };

        info!(
            algorithm = sorter.name(),
            avg_ns,
            min_ns = timing.min.as_nanos() as u64,
            "sort completed"
        );
        if !report.is_sorted() || !permutation {
            warn!(
                algorithm = sorter.name(),
                discrepancies = report.discrepancies,
                permutation,
                "output failed validation"
            );
        }

        results.push(AlgorithmResult {
            name: sorter.name().to_string(),
            stable: sorter.is_stable(),
            runs: config.runs,
            avg_ns,
            min_ns: timing.min.as_nanos(),
            ops_per_second,
            sorted: report.is_sorted(),
            permutation,
            discrepancies: report.discrepancies,
            error: None,
        });
        output = Some(sorted);
    }

    let correctness = results.iter().all(AlgorithmResult::is_correct);
    Ok(BenchmarkRun {
        report: BenchmarkReport {
            size: data.len(),
            results,
            correctness,
        },
        output,
    })
}

fn time_sorter(
    sorter: &dyn Sorter,
    data: &[i64],
    runs: u32,
) -> Result<(Timing, Vec<i64>), SortError> {
    let mut timing = Timing {
        total: Duration::ZERO,
        min: Duration::MAX,
    };
    let mut last = Vec::new();

    for _ in 0..runs {
        let mut copy = data.to_vec();
        let start = Instant::now();
        sorter.sort(black_box(&mut copy))?;
        let elapsed = start.elapsed();

        timing.total += elapsed;
        timing.min = timing.min.min(elapsed);
        last = copy;
    }
    Ok((timing, last))
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchProbe {
    pub key: i64,
    pub binary: RangeOutcome,
    pub exponential: RangeOutcome,
    /// Bounds found by a linear scan.
    pub expected: Option<(usize, usize)>,
    pub agree: bool,
    pub correct: bool,
}

impl SearchProbe {
    fn new(
        key: i64,
        binary: RangeOutcome,
        exponential: RangeOutcome,
        expected: Option<(usize, usize)>,
    ) -> Self {
        SearchProbe {
            key,
            binary,
            exponential,
            expected,
            agree: binary.bounds == exponential.bounds,
            correct: binary.bounds == expected && exponential.bounds == expected,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchReport {
    pub size: usize,
    pub probes: Vec<SearchProbe>,
    pub all_agree: bool,
    pub all_correct: bool,
}

impl SearchReport {
    fn new(size: usize, probes: Vec<SearchProbe>) -> Self {
        let all_agree = probes.iter().all(|p| p.agree);
        let all_correct = probes.iter().all(|p| p.correct);
        if !all_agree {
            warn!("binary and exponential search disagree");
        }
        if !all_correct {
            warn!("search results differ from a linear scan");
        }
        SearchReport {
            size,
            probes,
            all_agree,
            all_correct,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.all_agree && self.all_correct
    }
}

fn linear_range(data: &[i64], key: i64) -> Option<(usize, usize)> {
    let first = data.iter().position(|&v| v == key)?;
    let last = data.iter().rposition(|&v| v == key)?;
    Some((first, last))
}

/// Sort a copy of `data`, then range-search every key with both search
/// families and check their answers against a linear scan.
pub fn run_search_probe(data: &[i64], keys: &[i64]) -> SearchReport {
    let mut sorted = data.to_vec();
    mergesort(&mut sorted);

    let probes: Vec<SearchProbe> = keys
        .iter()
        .map(|&key| {
            let binary = BinarySearch.range(&sorted, key);
            let exponential = ExponentialSearch.range(&sorted, key);
            debug!(
                key,
                binary_iterations = binary.iterations,
                exponential_iterations = exponential.iterations,
                "probed key"
            );
            SearchProbe::new(key, binary, exponential, linear_range(&sorted, key))
        })
        .collect();

    SearchReport::new(data.len(), probes)
}

/// Draw `count` keys: alternately a stored value and a value anywhere in
/// `[min - 1, max + 1]`, so roughly half the keys miss.
pub fn sample_keys(data: &[i64], count: usize, seed: u64) -> Vec<i64> {
    let (Some(&min), Some(&max)) = (data.iter().min(), data.iter().max()) else {
        return Vec::new();
    };
    let low = min.saturating_sub(1);
    let high = max.saturating_add(1);

    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    (0..count)
        .map(|i| {
            if i % 2 == 0 {
                data[rng.gen_range(0..data.len())]
            } else {
                rng.gen_range(low..=high)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{generate, Pattern};

    #[test]
    fn test_algorithm_names_roundtrip() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.name().parse::<Algorithm>().unwrap(), algorithm);
            assert_eq!(algorithm.to_string(), algorithm.name());
        }
        assert!(matches!(
            "bogosort".parse::<Algorithm>(),
            Err(HarnessError::UnknownAlgorithm(_))
        ));
    }

    #[test]
    fn test_sorter_names_match() {
        let config = HarnessConfig::default();
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.sorter(&config, &[1, 2]).name(), algorithm.name());
        }
    }

    #[test]
    fn test_benchmark_all_correct() {
        let config = HarnessConfig {
            size: 300,
            runs: 2,
            ..HarnessConfig::default()
        };
        let data = generate(config.size, config.power, config.seed, Pattern::Random).unwrap();
        let run = run_benchmark(&config, &data).unwrap();

        assert!(run.report.correctness);
        assert_eq!(run.report.size, 300);
        assert_eq!(run.report.results.len(), Algorithm::ALL.len());
        for result in &run.report.results {
            assert!(result.is_correct(), "{}", result.name);
            assert_eq!(result.runs, 2);
            assert_eq!(result.discrepancies, 0);
        }

        let output = run.output.unwrap();
        assert!(crate::validate::is_sorted(&output));
        assert_eq!(output.len(), 300);
    }

    #[test]
    fn test_benchmark_records_radix_failure() {
        let config = HarnessConfig {
            algorithms: vec![Algorithm::RadixLsb, Algorithm::MergeSort],
            runs: 1,
            ..HarnessConfig::default()
        };
        let run = run_benchmark(&config, &[3, -1, 2]).unwrap();

        assert!(!run.report.correctness);
        let radix = &run.report.results[0];
        assert!(radix.error.as_deref().unwrap().contains("non-negative"));
        assert!(run.report.results[1].is_correct());
        assert_eq!(run.output, Some(vec![-1, 2, 3]));
    }

    #[test]
    fn test_benchmark_rejects_invalid_config() {
        let config = HarnessConfig {
            runs: 0,
            ..HarnessConfig::default()
        };
        assert!(run_benchmark(&config, &[1]).is_err());
    }

    #[test]
    fn test_search_probe() {
        let report = run_search_probe(&[7, 3, 1, 3, 5, 3], &[3, 4]);
        assert!(report.is_ok());
        assert_eq!(report.probes[0].binary.bounds, Some((1, 3)));
        assert_eq!(report.probes[0].expected, Some((1, 3)));
        assert_eq!(report.probes[1].exponential.bounds, None);
        assert_eq!(report.probes[1].expected, None);
    }

    #[test]
    fn test_matching_wrong_answers_are_not_correct() {
        let wrong = RangeOutcome {
            bounds: Some((0, 1)),
            iterations: 2,
        };
        let probe = SearchProbe::new(3, wrong, wrong, Some((1, 3)));
        assert!(probe.agree);
        assert!(!probe.correct);

        let none = RangeOutcome::not_found(1);
        let missed = SearchProbe::new(4, none, none, Some((2, 2)));
        assert!(!missed.correct);

        let report = SearchReport::new(6, vec![probe, missed]);
        assert!(report.all_agree);
        assert!(!report.all_correct);
        assert!(!report.is_ok());
    }

    #[test]
    fn test_sample_keys() {
        let data = vec![10, 20, 30];
        let keys = sample_keys(&data, 6, 3);
        assert_eq!(keys.len(), 6);
        assert!(keys.iter().step_by(2).all(|k| data.contains(k)));
        assert!(keys.iter().all(|&k| (9..=31).contains(&k)));
        assert!(sample_keys(&[], 5, 3).is_empty());
    }
}
