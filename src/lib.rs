//! Sorting and Searching over Integer Arrays
//!
//! Radix (LSB, LSD, power-of-two LSD), quick, heap and merge sorts working in
//! place on `i64` slices, plus greatest/least-index binary and exponential
//! searches. The `dataset`, `validate` and `harness` modules wrap the
//! algorithms in the data generation, timing and checking used by the
//! `benchmark` binary.

pub mod config;
pub mod dataset;
pub mod error;
pub mod harness;
pub mod heapsort;
pub mod mergesort;
pub mod primitives;
pub mod quicksort;
pub mod radix;
pub mod search;
pub mod validate;

pub use error::{HarnessError, SearchError, SortError};
pub use heapsort::{heapsort, HeapSort};
pub use mergesort::{mergesort, mergesort_by_key, mergesort_span, MergeSort};
pub use primitives::Span;
pub use quicksort::{quicksort, quicksort_span, QuickSort};
pub use radix::{
    radix_lsb, radix_lsb_by_key, radix_lsd, radix_lsd_by_key, radix_lsd_pow2,
    radix_lsd_pow2_by_key, suggested_power, RadixLsb, RadixLsd, RadixLsdPow2,
};
pub use search::{BinarySearch, ExponentialSearch, RangeOutcome, SearchOutcome, Searcher};

/// Trait for sorting implementations
pub trait Sorter {
    /// Short identifier used in reports.
    fn name(&self) -> &'static str;

    /// Whether equal elements keep their input order.
    fn is_stable(&self) -> bool;

    /// Sort `data` ascending in place.
    ///
    /// On error the slice is left as it was.
    fn sort(&self, data: &mut [i64]) -> Result<(), SortError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::{is_permutation, is_sorted};
    use rand::{Rng, SeedableRng};
    use rand_xoshiro::Xoshiro256PlusPlus;

    fn sorted_copy<S: Sorter>(s: &S, data: &[i64]) -> Vec<i64> {
        let mut out = data.to_vec();
        s.sort(&mut out).unwrap();
        assert!(is_sorted(&out), "{} left {:?} unsorted", s.name(), out);
        assert!(is_permutation(data, &out), "{} lost elements", s.name());
        out
    }

    fn test_sorter<S: Sorter>(s: &S) {
        // Empty
        assert_eq!(sorted_copy(s, &[]), Vec::<i64>::new());

        // Single element
        assert_eq!(sorted_copy(s, &[42]), vec![42]);

        // Already sorted
        assert_eq!(sorted_copy(s, &[1, 2, 3, 4, 5]), vec![1, 2, 3, 4, 5]);

        // Reverse sorted
        assert_eq!(sorted_copy(s, &[5, 4, 3, 2, 1]), vec![1, 2, 3, 4, 5]);

        // Mixed
        assert_eq!(sorted_copy(s, &[5, 3, 1, 4, 2]), vec![1, 2, 3, 4, 5]);
        sorted_copy(s, &[3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5]);

        // Duplicates
        assert_eq!(sorted_copy(s, &[7, 7, 7]), vec![7, 7, 7]);
        assert_eq!(sorted_copy(s, &[0, 0, 0]), vec![0, 0, 0]);

        // Large random
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(7);
        let data: Vec<i64> = (0..1000).map(|_| rng.gen_range(0..1 << 31)).collect();
        sorted_copy(s, &data);
    }

    #[test]
    fn test_radix_lsb() {
        test_sorter(&RadixLsb);
    }

    #[test]
    fn test_radix_lsd() {
        test_sorter(&RadixLsd::default());
        test_sorter(&RadixLsd { base: 2 });
        test_sorter(&RadixLsd { base: 256 });
    }

    #[test]
    fn test_radix_lsd_pow2() {
        test_sorter(&RadixLsdPow2::default());
        test_sorter(&RadixLsdPow2 { power: 1 });
        test_sorter(&RadixLsdPow2 { power: 5 });
    }

    #[test]
    fn test_quicksort() {
        test_sorter(&QuickSort);
    }

    #[test]
    fn test_heapsort() {
        test_sorter(&HeapSort);
    }

    #[test]
    fn test_mergesort() {
        test_sorter(&MergeSort);
    }

    #[test]
    fn test_sorter_objects() {
        let sorters: Vec<Box<dyn Sorter>> = vec![
            Box::new(RadixLsb),
            Box::new(RadixLsd::default()),
            Box::new(RadixLsdPow2::default()),
            Box::new(QuickSort),
            Box::new(HeapSort),
            Box::new(MergeSort),
        ];
        for sorter in &sorters {
            let mut data = vec![9, 2, 7, 2];
            sorter.sort(&mut data).unwrap();
            assert_eq!(data, vec![2, 2, 7, 9], "{}", sorter.name());
        }
    }
}
