//! Search checks against a linear scan over seeded random sorted inputs.

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use sort_search::search::{
    binary_search_greatest, binary_search_least, binary_search_range, binary_search_range_in,
    exponential_search_greatest, exponential_search_least, exponential_search_range,
};
use sort_search::{BinarySearch, ExponentialSearch, RangeOutcome, Searcher, Span};

fn linear_range(data: &[i64], key: i64) -> Option<(usize, usize)> {
    let first = data.iter().position(|&v| v == key)?;
    let last = data.iter().rposition(|&v| v == key)?;
    Some((first, last))
}

fn sorted_random(rng: &mut Xoshiro256PlusPlus, len: usize, low: i64, high: i64) -> Vec<i64> {
    let mut data: Vec<i64> = (0..len).map(|_| rng.gen_range(low..high)).collect();
    data.sort_unstable();
    data
}

#[test]
fn test_scenarios() {
    let data = [1, 3, 3, 3, 5, 7];
    let searchers: [&dyn Searcher; 2] = [&BinarySearch, &ExponentialSearch];
    for searcher in searchers {
        assert_eq!(searcher.range(&data, 3).bounds, Some((1, 3)), "{}", searcher.name());
        assert_eq!(searcher.range(&data, 4).bounds, None, "{}", searcher.name());
    }
}

#[test]
fn test_matches_linear_scan() {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(8);
    for _ in 0..60 {
        let len = rng.gen_range(0..200);
        let data = sorted_random(&mut rng, len, -40, 40);

        for key in -45..45 {
            let expected = linear_range(&data, key);

            assert_eq!(binary_search_range(&data, key).bounds, expected, "key {key}");
            assert_eq!(exponential_search_range(&data, key).bounds, expected, "key {key}");

            assert_eq!(binary_search_least(&data, key).index, expected.map(|r| r.0));
            assert_eq!(binary_search_greatest(&data, key).index, expected.map(|r| r.1));
            assert_eq!(exponential_search_least(&data, key).index, expected.map(|r| r.0));
            assert_eq!(exponential_search_greatest(&data, key).index, expected.map(|r| r.1));
        }
    }
}

#[test]
fn test_range_bounds_are_tight() {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(19);
    let data = sorted_random(&mut rng, 1000, 0, 60);

    for key in 0..60 {
        let RangeOutcome { bounds: Some((first, last)), .. } = binary_search_range(&data, key) else {
            continue;
        };
        assert!(data[first..=last].iter().all(|&v| v == key));
        if first > 0 {
            assert_ne!(data[first - 1], key);
        }
        if last + 1 < data.len() {
            assert_ne!(data[last + 1], key);
        }
    }
}

#[test]
fn test_sub_span_search() {
    let data = [2, 4, 4, 4, 4, 6, 8];
    let outcome = binary_search_range_in(&data, 4, Span::new(3, 6)).unwrap();
    assert_eq!(outcome.bounds, Some((3, 4)));

    let outcome = binary_search_range_in(&data, 2, Span::new(1, 6)).unwrap();
    assert_eq!(outcome.bounds, None);

    assert!(binary_search_range_in(&data, 4, Span::new(0, 7)).is_err());
}

#[test]
fn test_iterations_reported() {
    let data: Vec<i64> = (0..4096).collect();
    let binary = binary_search_range(&data, 100);
    let exponential = exponential_search_range(&data, 100);
    assert_eq!(binary.bounds, Some((100, 100)));
    assert_eq!(exponential.bounds, Some((100, 100)));
    assert!(binary.iterations > 0);
    assert!(exponential.iterations > 0);

    // A key past the end costs exponential search a single comparison.
    assert_eq!(exponential_search_range(&data, 5000), RangeOutcome::not_found(1));
}
