//! Exponential (galloping) search.
//!
//! Probes indices 1, 2, 4, ... until the probed value brackets the key, then
//! runs the matching binary search over `[bound / 2, bound]`. Cost grows with
//! the log of the match position rather than the sequence length. A bound that
//! runs past the end is clamped to the last index.

use super::binary::{greatest_in, least_in};
use super::{RangeOutcome, SearchOutcome};
use crate::primitives::Span;

/// Greatest index holding `key` in the sorted `data`.
pub fn exponential_search_greatest(data: &[i64], key: i64) -> SearchOutcome {
    // The last occurrence sits below the first probe holding a larger value.
    search(data, key, |probe| probe > key, greatest_in)
}

/// Least index holding `key` in the sorted `data`.
pub fn exponential_search_least(data: &[i64], key: i64) -> SearchOutcome {
    // The first occurrence sits at or below the first probe not smaller than the key.
    search(data, key, |probe| probe >= key, least_in)
}

/// First and last index holding `key` in the sorted `data`.
pub fn exponential_search_range(data: &[i64], key: i64) -> RangeOutcome {
    let least = exponential_search_least(data, key);
    let Some(first) = least.index else {
        return RangeOutcome::not_found(least.iterations);
    };

    let greatest = exponential_search_greatest(data, key);
    RangeOutcome {
        bounds: greatest.index.map(|last| (first, last)),
        iterations: least.iterations + greatest.iterations,
    }
}

fn search<P, B>(data: &[i64], key: i64, stop: P, bounded: B) -> SearchOutcome
where
    P: Fn(i64) -> bool,
    B: Fn(&[i64], i64, Span) -> SearchOutcome,
{
    let Some(last) = data.len().checked_sub(1) else {
        return SearchOutcome::not_found(0);
    };
    if key > data[last] {
        return SearchOutcome::not_found(1);
    }

    let (span, probes) = bracket(data, stop);
    let inner = bounded(data, key, span);
    SearchOutcome {
        index: inner.index,
        iterations: probes + inner.iterations,
    }
}

/// Double the probe index until `stop` holds or the sequence runs out.
/// Returns the bracket and the number of probes taken.
fn bracket<P>(data: &[i64], stop: P) -> (Span, usize)
where
    P: Fn(i64) -> bool,
{
    let len = data.len();
    let mut bound = 1;
    let mut probes = 0;

    while bound < len {
        probes += 1;
        if stop(data[bound]) {
            break;
        }
        bound *= 2;
    }
    (Span::new(bound / 2, bound.min(len - 1)), probes)
}
