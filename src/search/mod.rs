//! Searches over sequences sorted in ascending order.
//!
//! Every search reports how many probe iterations it took alongside the
//! result. Results on unsorted input are unspecified but never panic.

pub mod binary;
pub mod exponential;

use serde::Serialize;

pub use binary::{
    binary_search_greatest, binary_search_greatest_in, binary_search_least,
    binary_search_least_in, binary_search_range, binary_search_range_in,
};
pub use exponential::{
    exponential_search_greatest, exponential_search_least, exponential_search_range,
};

/// Result of a point search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchOutcome {
    /// Matching index, `None` when the key is absent.
    pub index: Option<usize>,
    pub iterations: usize,
}

impl SearchOutcome {
    pub fn found(index: usize, iterations: usize) -> Self {
        SearchOutcome { index: Some(index), iterations }
    }

    pub fn not_found(iterations: usize) -> Self {
        SearchOutcome { index: None, iterations }
    }
}

/// Result of a range search: first and last index holding the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RangeOutcome {
    pub bounds: Option<(usize, usize)>,
    pub iterations: usize,
}

impl RangeOutcome {
    pub fn not_found(iterations: usize) -> Self {
        RangeOutcome { bounds: None, iterations }
    }

    /// Number of occurrences of the key.
    pub fn count(&self) -> usize {
        self.bounds.map_or(0, |(first, last)| last - first + 1)
    }
}

/// A family of searches sharing one probing strategy.
pub trait Searcher {
    fn name(&self) -> &'static str;

    /// Greatest index holding `key`.
    fn greatest(&self, data: &[i64], key: i64) -> SearchOutcome;

    /// Least index holding `key`.
    fn least(&self, data: &[i64], key: i64) -> SearchOutcome;

    /// First and last index holding `key`.
    fn range(&self, data: &[i64], key: i64) -> RangeOutcome;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BinarySearch;

impl Searcher for BinarySearch {
    fn name(&self) -> &'static str {
        "binary"
    }

    fn greatest(&self, data: &[i64], key: i64) -> SearchOutcome {
        binary_search_greatest(data, key)
    }

    fn least(&self, data: &[i64], key: i64) -> SearchOutcome {
        binary_search_least(data, key)
    }

    fn range(&self, data: &[i64], key: i64) -> RangeOutcome {
        binary_search_range(data, key)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ExponentialSearch;

impl Searcher for ExponentialSearch {
    fn name(&self) -> &'static str {
        "exponential"
    }

    fn greatest(&self, data: &[i64], key: i64) -> SearchOutcome {
        exponential_search_greatest(data, key)
    }

    fn least(&self, data: &[i64], key: i64) -> SearchOutcome {
        exponential_search_least(data, key)
    }

    fn range(&self, data: &[i64], key: i64) -> RangeOutcome {
        exponential_search_range(data, key)
    }
}
