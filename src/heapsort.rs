//! Heapsort over an implicit max-heap. In place and not stable.

use crate::error::SortError;
use crate::primitives::swap;
use crate::Sorter;

/// In-place heapsort: build a max-heap, then repeatedly move the root behind
/// the shrinking heap region.
pub fn heapsort(data: &mut [i64]) {
    let n = data.len();
    if n <= 1 {
        return;
    }

    for node in (0..n / 2).rev() {
        heapify(data, node, n);
    }

    for bound in (1..n).rev() {
        swap(data, 0, bound);
        heapify(data, 0, bound);
    }
}

/// Sift `node` down within the heap region `[0, bound)`.
#[inline]
fn heapify(data: &mut [i64], mut node: usize, bound: usize) {
    loop {
        let mut largest = node;
        let left = 2 * node + 1;
        let right = 2 * node + 2;

        if left < bound && data[left] > data[largest] {
            largest = left;
        }
        if right < bound && data[right] > data[largest] {
            largest = right;
        }
        if largest == node {
            return;
        }
        swap(data, node, largest);
        node = largest;
    }
}

/// Binary max-heap sort.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeapSort;

impl Sorter for HeapSort {
    fn name(&self) -> &'static str {
        "heapsort"
    }

    fn is_stable(&self) -> bool {
        false
    }

    fn sort(&self, data: &mut [i64]) -> Result<(), SortError> {
        heapsort(data);
        Ok(())
    }
}
