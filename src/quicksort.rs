//! Iterative quicksort with Lomuto partitioning about the rightmost element.
//!
//! Pending spans live on an explicit stack instead of the call stack. The
//! pivot is always `data[right]`, with no randomisation or median-of-three,
//! so already-sorted, reverse-sorted and all-equal inputs take quadratic time.

use crate::error::SortError;
use crate::primitives::{peek, swap, Span};
use crate::Sorter;

/// Sort the whole slice in place.
pub fn quicksort(data: &mut [i64]) {
    if let Some(span) = Span::of_len(data.len()) {
        sort_spans(data, span);
    }
}

/// Sort `data[span.left..=span.right]` in place, leaving the rest untouched.
pub fn quicksort_span(data: &mut [i64], span: Span) -> Result<(), SortError> {
    if !span.fits(data.len()) {
        return Err(SortError::SpanOutOfBounds {
            left: span.left,
            right: span.right,
            len: data.len(),
        });
    }
    if !span.is_empty() {
        sort_spans(data, span);
    }
    Ok(())
}

fn sort_spans(data: &mut [i64], initial: Span) {
    let mut stack = vec![initial];

    while let Some(&Span { left, right }) = peek(&stack) {
        stack.pop();
        let boundary = partition(data, left, right);

        // Only spans of two or more elements go back on the stack.
        if boundary > left + 1 {
            stack.push(Span::new(left, boundary - 1));
        }
        if boundary + 1 < right {
            stack.push(Span::new(boundary + 1, right));
        }
    }
}

/// Move everything below `data[right]` in front of it; return its final index.
#[inline]
fn partition(data: &mut [i64], left: usize, right: usize) -> usize {
    let pivot = data[right];
    let mut boundary = left;

    for i in left..right {
        if data[i] < pivot {
            swap(data, i, boundary);
            boundary += 1;
        }
    }
    swap(data, boundary, right);
    boundary
}

/// Iterative rightmost-pivot quicksort.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuickSort;

impl Sorter for QuickSort {
    fn name(&self) -> &'static str {
        "quicksort"
    }

    fn is_stable(&self) -> bool {
        false
    }

    fn sort(&self, data: &mut [i64]) -> Result<(), SortError> {
        quicksort(data);
        Ok(())
    }
}
