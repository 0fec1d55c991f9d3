//! Input data for the harness: seeded random generation and newline-delimited
//! integer files.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use clap::ValueEnum;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::HarnessError;

/// Largest accepted value-range power; values are drawn from `[0, 2^power)`.
pub const MAX_VALUE_POWER: u32 = 62;

/// Shape of generated data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Pattern {
    /// Uniform random values.
    #[default]
    Random,
    /// Ascending order.
    Sorted,
    /// Descending order.
    Reversed,
    /// Ascending with a tenth of the positions swapped at random.
    NearlySorted,
}

impl Pattern {
    pub fn name(&self) -> &'static str {
        match self {
            Pattern::Random => "random",
            Pattern::Sorted => "sorted",
            Pattern::Reversed => "reversed",
            Pattern::NearlySorted => "nearly-sorted",
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Generate `size` values in `[0, 2^power)` arranged according to `pattern`.
///
/// The same seed always produces the same sequence.
pub fn generate(
    size: usize,
    power: u32,
    seed: u64,
    pattern: Pattern,
) -> Result<Vec<i64>, HarnessError> {
    if power == 0 || power > MAX_VALUE_POWER {
        return Err(HarnessError::InvalidConfig(format!(
            "value power must be in 1..={MAX_VALUE_POWER}, got {power}"
        )));
    }

    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    let upper = 1i64 << power;
    let mut data: Vec<i64> = (0..size).map(|_| rng.gen_range(0..upper)).collect();

    match pattern {
        Pattern::Random => {}
        Pattern::Sorted => data.sort_unstable(),
        Pattern::Reversed => {
            data.sort_unstable();
            data.reverse();
        }
        Pattern::NearlySorted => {
            data.sort_unstable();
            if size > 1 {
                for _ in 0..size / 10 {
                    let i = rng.gen_range(0..size);
                    let j = rng.gen_range(0..size);
                    data.swap(i, j);
                }
            }
        }
    }

    debug!(size, power, seed, %pattern, "generated dataset");
    Ok(data)
}

/// Read one integer per line. Blank lines are skipped; surrounding whitespace
/// is ignored.
pub fn load(path: impl AsRef<Path>) -> Result<Vec<i64>, HarnessError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| HarnessError::io(path, e))?;
    let reader = BufReader::new(file);

    let mut data = Vec::new();
    for (number, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| HarnessError::io(path, e))?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let value = trimmed.parse::<i64>().map_err(|_| HarnessError::Parse {
            path: path.to_path_buf(),
            line: number + 1,
            content: trimmed.to_string(),
        })?;
        data.push(value);
    }

    debug!(path = %path.display(), len = data.len(), "loaded dataset");
    Ok(data)
}

/// Write one integer per line, replacing any existing file.
pub fn write(path: impl AsRef<Path>, data: &[i64]) -> Result<(), HarnessError> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| HarnessError::io(path, e))?;
    let mut writer = BufWriter::new(file);

    for value in data {
        writeln!(writer, "{value}").map_err(|e| HarnessError::io(path, e))?;
    }
    writer.flush().map_err(|e| HarnessError::io(path, e))?;

    debug!(path = %path.display(), len = data.len(), "wrote dataset");
    Ok(())
}
