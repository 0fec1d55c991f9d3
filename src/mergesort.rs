//! Top-down mergesort.
//!
//! Stable: when the fronts of both halves compare equal the left one is taken
//! first. Every merge in one call shares a single buffer allocated up front.

use crate::error::SortError;
use crate::primitives::Span;
use crate::Sorter;

/// Sort the whole slice in place.
pub fn mergesort(data: &mut [i64]) {
    mergesort_by_key(data, |&v| v);
}

/// Sort `data[span.left..=span.right]` in place, leaving the rest untouched.
pub fn mergesort_span(data: &mut [i64], span: Span) -> Result<(), SortError> {
    if !span.fits(data.len()) {
        return Err(SortError::SpanOutOfBounds {
            left: span.left,
            right: span.right,
            len: data.len(),
        });
    }
    if !span.is_empty() {
        let mut buffer = Vec::with_capacity(span.len());
        sort_range(data, &mut buffer, span.left, span.right, &|&v: &i64| v);
    }
    Ok(())
}

/// Sort records by an integer key, preserving the order of equal keys.
pub fn mergesort_by_key<T, F>(data: &mut [T], key: F)
where
    T: Clone,
    F: Fn(&T) -> i64,
{
    if let Some(span) = Span::of_len(data.len()) {
        let mut buffer = Vec::with_capacity(data.len());
        sort_range(data, &mut buffer, span.left, span.right, &key);
    }
}

fn sort_range<T, F>(data: &mut [T], buffer: &mut Vec<T>, left: usize, right: usize, key: &F)
where
    T: Clone,
    F: Fn(&T) -> i64,
{
    if left >= right {
        return;
    }
    let mid = left + (right - left) / 2;
    sort_range(data, buffer, left, mid, key);
    sort_range(data, buffer, mid + 1, right, key);
    merge(data, buffer, left, mid, right, key);
}

/// Merge the sorted runs `[left, mid]` and `[mid + 1, right]`.
fn merge<T, F>(data: &mut [T], buffer: &mut Vec<T>, left: usize, mid: usize, right: usize, key: &F)
where
    T: Clone,
    F: Fn(&T) -> i64,
{
    buffer.clear();
    let (mut i, mut j) = (left, mid + 1);

    while i <= mid && j <= right {
        if key(&data[i]) <= key(&data[j]) {
            buffer.push(data[i].clone());
            i += 1;
        } else {
            buffer.push(data[j].clone());
            j += 1;
        }
    }
    // At most one of the halves has anything left.
    buffer.extend_from_slice(&data[i..=mid]);
    buffer.extend_from_slice(&data[j..=right]);

    data[left..=right].clone_from_slice(buffer);
}

/// Stable top-down mergesort.
#[derive(Debug, Clone, Copy, Default)]
pub struct MergeSort;

impl Sorter for MergeSort {
    fn name(&self) -> &'static str {
        "mergesort"
    }

    fn is_stable(&self) -> bool {
        true
    }

    fn sort(&self, data: &mut [i64]) -> Result<(), SortError> {
        mergesort(data);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_runs() {
        let mut data = vec![1, 4, 9, 2, 3, 10];
        let mut buffer = Vec::new();
        merge(&mut data, &mut buffer, 0, 2, 5, &|&v: &i64| v);
        assert_eq!(data, vec![1, 2, 3, 4, 9, 10]);
    }

    #[test]
    fn test_stability() {
        let mut data = vec![(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd'), (0, 'e'), (2, 'f')];
        mergesort_by_key(&mut data, |r| r.0);
        assert_eq!(
            data,
            vec![(0, 'e'), (1, 'b'), (1, 'd'), (2, 'a'), (2, 'c'), (2, 'f')]
        );
    }

    #[test]
    fn test_span_only() {
        let mut data = vec![9, 5, 3, 4, 1, 0];
        mergesort_span(&mut data, Span::new(0, 3)).unwrap();
        assert_eq!(data, vec![3, 4, 5, 9, 1, 0]);
    }

    #[test]
    fn test_span_out_of_bounds() {
        let mut data = vec![1];
        assert!(mergesort_span(&mut data, Span::new(0, 1)).is_err());
        assert!(mergesort_span(&mut data, Span::new(1, 0)).is_ok());
    }

    #[test]
    fn test_negatives() {
        let mut data = vec![5, -3, 0, -3, i64::MIN];
        mergesort(&mut data);
        assert_eq!(data, vec![i64::MIN, -3, -3, 0, 5]);
    }
}
