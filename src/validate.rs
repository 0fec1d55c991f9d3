//! Sortedness checks used as an external oracle for the sorts.

use serde::Serialize;

/// Adjacent pair found out of order: `data[index] < data[index - 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Discrepancy {
    pub index: usize,
    pub previous: i64,
    pub current: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SortednessReport {
    pub length: usize,
    /// Total number of out-of-order adjacent pairs.
    pub discrepancies: usize,
    /// The first few of those pairs, up to the requested cap.
    pub instances: Vec<Discrepancy>,
}

impl SortednessReport {
    pub fn is_sorted(&self) -> bool {
        self.discrepancies == 0
    }
}

pub fn is_sorted(data: &[i64]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}

/// Whether `candidate` holds exactly the same multiset of values as `original`.
pub fn is_permutation(original: &[i64], candidate: &[i64]) -> bool {
    if original.len() != candidate.len() {
        return false;
    }
    let mut a = original.to_vec();
    let mut b = candidate.to_vec();
    a.sort_unstable();
    b.sort_unstable();
    a == b
}

/// Scan adjacent pairs, counting every descent and recording up to
/// `max_instances` of them (all of them when `None`).
pub fn check_sorted(data: &[i64], max_instances: Option<usize>) -> SortednessReport {
    let cap = max_instances.unwrap_or(usize::MAX);
    let mut discrepancies = 0;
    let mut instances = Vec::new();

    for (offset, pair) in data.windows(2).enumerate() {
        if pair[1] < pair[0] {
            discrepancies += 1;
            if instances.len() < cap {
                instances.push(Discrepancy {
                    index: offset + 1,
                    previous: pair[0],
                    current: pair[1],
                });
            }
        }
    }

    SortednessReport {
        length: data.len(),
        discrepancies,
        instances,
    }
}
