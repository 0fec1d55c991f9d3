//! Binary search for the greatest or least index holding a key.
//!
//! Both variants keep narrowing after a match so they land on the extreme
//! occurrence instead of an arbitrary one. The `_in` forms restrict the
//! search to a span of the sequence.

use super::{RangeOutcome, SearchOutcome};
use crate::error::SearchError;
use crate::primitives::Span;

/// Greatest index holding `key` in the sorted `data`.
pub fn binary_search_greatest(data: &[i64], key: i64) -> SearchOutcome {
    match Span::of_len(data.len()) {
        Some(span) => greatest_in(data, key, span),
        None => SearchOutcome::not_found(0),
    }
}

/// Greatest index holding `key` within `span`.
pub fn binary_search_greatest_in(
    data: &[i64],
    key: i64,
    span: Span,
) -> Result<SearchOutcome, SearchError> {
    check_span(data, span)?;
    Ok(greatest_in(data, key, span))
}

/// Least index holding `key` in the sorted `data`.
pub fn binary_search_least(data: &[i64], key: i64) -> SearchOutcome {
    match Span::of_len(data.len()) {
        Some(span) => least_in(data, key, span),
        None => SearchOutcome::not_found(0),
    }
}

/// Least index holding `key` within `span`.
pub fn binary_search_least_in(
    data: &[i64],
    key: i64,
    span: Span,
) -> Result<SearchOutcome, SearchError> {
    check_span(data, span)?;
    Ok(least_in(data, key, span))
}

/// First and last index holding `key` in the sorted `data`.
pub fn binary_search_range(data: &[i64], key: i64) -> RangeOutcome {
    match Span::of_len(data.len()) {
        Some(span) => range_in(data, key, span),
        None => RangeOutcome::not_found(0),
    }
}

/// First and last index holding `key` within `span`.
pub fn binary_search_range_in(
    data: &[i64],
    key: i64,
    span: Span,
) -> Result<RangeOutcome, SearchError> {
    check_span(data, span)?;
    Ok(range_in(data, key, span))
}

fn check_span(data: &[i64], span: Span) -> Result<(), SearchError> {
    if span.fits(data.len()) {
        Ok(())
    } else {
        Err(SearchError::SpanOutOfBounds {
            left: span.left,
            right: span.right,
            len: data.len(),
        })
    }
}

/// Caller guarantees `span` fits `data`. An empty span finds nothing.
pub(crate) fn greatest_in(data: &[i64], key: i64, span: Span) -> SearchOutcome {
    if span.is_empty() {
        return SearchOutcome::not_found(0);
    }
    // Half-open [low, high) over the span.
    let (mut low, mut high) = (span.left, span.right + 1);
    let mut index = None;
    let mut iterations = 0;

    while low < high {
        iterations += 1;
        let mid = low + (high - low) / 2;
        if key < data[mid] {
            high = mid;
        } else {
            if data[mid] == key {
                index = Some(mid);
            }
            low = mid + 1;
        }
    }
    index.map_or(SearchOutcome::not_found(iterations), |i| {
        SearchOutcome::found(i, iterations)
    })
}

/// Caller guarantees `span` fits `data`. An empty span finds nothing.
pub(crate) fn least_in(data: &[i64], key: i64, span: Span) -> SearchOutcome {
    if span.is_empty() {
        return SearchOutcome::not_found(0);
    }
    let (mut low, mut high) = (span.left, span.right + 1);
    let mut index = None;
    let mut iterations = 0;

    while low < high {
        iterations += 1;
        let mid = low + (high - low) / 2;
        if key > data[mid] {
            low = mid + 1;
        } else {
            if data[mid] == key {
                index = Some(mid);
            }
            high = mid;
        }
    }
    index.map_or(SearchOutcome::not_found(iterations), |i| {
        SearchOutcome::found(i, iterations)
    })
}

fn range_in(data: &[i64], key: i64, span: Span) -> RangeOutcome {
    let least = least_in(data, key, span);
    let Some(first) = least.index else {
        return RangeOutcome::not_found(least.iterations);
    };

    // The last occurrence can't precede the first.
    let greatest = greatest_in(data, key, Span::new(first, span.right));
    RangeOutcome {
        bounds: greatest.index.map(|last| (first, last)),
        iterations: least.iterations + greatest.iterations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greatest_and_least() {
        let data = [1, 2, 2, 2, 2, 3, 9];
        assert_eq!(binary_search_greatest(&data, 2).index, Some(4));
        assert_eq!(binary_search_least(&data, 2).index, Some(1));
        assert_eq!(binary_search_greatest(&data, 9).index, Some(6));
        assert_eq!(binary_search_least(&data, 1).index, Some(0));
    }

    #[test]
    fn test_iterations_are_logarithmic() {
        let data: Vec<i64> = (0..1024).collect();
        let outcome = binary_search_greatest(&data, 700);
        assert_eq!(outcome.index, Some(700));
        assert!(outcome.iterations <= 11, "took {}", outcome.iterations);
        assert!(outcome.iterations > 0);
    }

    #[test]
    fn test_span_restricts_search() {
        let data = [1, 3, 3, 3, 5, 7];
        let outcome = binary_search_range_in(&data, 3, Span::new(2, 5)).unwrap();
        assert_eq!(outcome.bounds, Some((2, 3)));

        let outcome = binary_search_greatest_in(&data, 3, Span::new(0, 1)).unwrap();
        assert_eq!(outcome.index, Some(1));

        let outcome = binary_search_least_in(&data, 1, Span::new(1, 5)).unwrap();
        assert_eq!(outcome.index, None);
    }

    #[test]
    fn test_empty_span() {
        let data = [1, 2, 3];
        let outcome = binary_search_greatest_in(&data, 2, Span::new(2, 1)).unwrap();
        assert_eq!(outcome, SearchOutcome::not_found(0));
    }

    #[test]
    fn test_span_out_of_bounds() {
        let data = [1, 2, 3];
        assert_eq!(
            binary_search_least_in(&data, 2, Span::new(1, 3)),
            Err(SearchError::SpanOutOfBounds { left: 1, right: 3, len: 3 })
        );
        assert!(binary_search_range_in(&[], 2, Span::new(0, 0)).is_err());
    }

    #[test]
    fn test_range_iterations_combined() {
        let data = [1, 3, 3, 3, 5, 7];
        let least = binary_search_least(&data, 3);
        let range = binary_search_range(&data, 3);
        assert!(range.iterations > least.iterations);

        let missing = binary_search_range(&data, 4);
        assert_eq!(missing.bounds, None);
        assert_eq!(missing.iterations, binary_search_least(&data, 4).iterations);
    }
}
