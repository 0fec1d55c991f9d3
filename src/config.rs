//! Harness configuration.
//!
//! Values come from the defaults below, then an optional JSON file, then
//! command-line flags; later sources win.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dataset::{Pattern, MAX_VALUE_POWER};
use crate::error::HarnessError;
use crate::harness::Algorithm;
use crate::radix::MAX_RADIX_POWER;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HarnessConfig {
    /// Number of generated elements.
    pub size: usize,
    /// Generated values lie in `[0, 2^power)`.
    pub power: u32,
    pub seed: u64,
    pub pattern: Pattern,
    /// Timed runs per algorithm.
    pub runs: u32,
    pub algorithms: Vec<Algorithm>,
    /// Base for `radix-lsd`.
    pub lsd_base: u64,
    /// Power for `radix-lsd-pow2`; derived from the data maximum when unset.
    pub radix_power: Option<u32>,
    /// Cap on the discrepancies listed in sortedness reports.
    pub report_instances: usize,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        HarnessConfig {
            size: 1000,
            power: 31,
            seed: 12345,
            pattern: Pattern::Random,
            runs: 3,
            algorithms: Algorithm::ALL.to_vec(),
            lsd_base: 10,
            radix_power: None,
            report_instances: 10,
        }
    }
}

impl HarnessConfig {
    pub fn from_json(text: &str) -> Result<Self, HarnessError> {
        let config: HarnessConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, HarnessError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| HarnessError::io(path, e))?;
        let config = Self::from_json(&text)?;
        debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), HarnessError> {
        let invalid = |msg: String| -> Result<(), HarnessError> {
            Err(HarnessError::InvalidConfig(msg))
        };

        if self.size == 0 {
            return invalid("size must be positive".into());
        }
        if self.runs == 0 {
            return invalid("runs must be positive".into());
        }
        if self.power == 0 || self.power > MAX_VALUE_POWER {
            return invalid(format!(
                "power must be in 1..={MAX_VALUE_POWER}, got {}",
                self.power
            ));
        }
        if self.lsd_base < 2 {
            return invalid(format!("lsd_base must be at least 2, got {}", self.lsd_base));
        }
        if let Some(power) = self.radix_power {
            if power == 0 || power > MAX_RADIX_POWER {
                return invalid(format!(
                    "radix_power must be in 1..={MAX_RADIX_POWER}, got {power}"
                ));
            }
        }
        if self.algorithms.is_empty() {
            return invalid("at least one algorithm must be selected".into());
        }
        Ok(())
    }
}
