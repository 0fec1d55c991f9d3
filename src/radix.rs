//! Least-significant-digit radix sorts.
//!
//! All three variants distribute elements into buckets keyed by one digit per
//! pass and concatenate the buckets in ascending digit order. Each pass is a
//! stable partition, which is what makes the result correct after the last
//! (most significant) digit has been processed.
//!
//! Values must be non-negative. The pass count comes from the bit length of
//! the maximum, so an all-zero input needs no passes at all and returns
//! without touching the data.

use crate::error::SortError;
use crate::Sorter;

/// Largest accepted power for [`radix_lsd_pow2`] (1M buckets).
pub const MAX_RADIX_POWER: u32 = 20;

/// Number of bits needed to represent `value`; zero for zero.
#[inline]
pub fn bit_length(value: u64) -> u32 {
    u64::BITS - value.leading_zeros()
}

/// Half the bit length of `max`, rounded up.
///
/// Splits the key into two passes of roughly equal width. Measured as a
/// reasonable default for uniformly random 31-bit data, nothing more; callers
/// with other distributions should pick their own power.
pub fn suggested_power(max: u64) -> u32 {
    bit_length(max).div_ceil(2).clamp(1, MAX_RADIX_POWER)
}

/// Radix sort on individual bits, two buckets per pass.
pub fn radix_lsb(data: &mut [i64]) -> Result<(), SortError> {
    radix_lsb_by_key(data, |&v| v)
}

/// [`radix_lsb`] for records sorted by an integer key.
pub fn radix_lsb_by_key<T, F>(data: &mut [T], key: F) -> Result<(), SortError>
where
    T: Clone,
    F: Fn(&T) -> i64,
{
    let max = max_key(data, &key)?;
    let bits = bit_length(max);
    let mut buckets: [Vec<T>; 2] = [Vec::new(), Vec::new()];

    for bit in 0..bits {
        distribute(data, &mut buckets, |item| (((key(item) as u64) >> bit) & 1) as usize);
    }
    Ok(())
}

/// Radix sort with an arbitrary base, digits extracted with division.
pub fn radix_lsd(data: &mut [i64], base: u64) -> Result<(), SortError> {
    radix_lsd_by_key(data, base, |&v| v)
}

/// [`radix_lsd`] for records sorted by an integer key.
pub fn radix_lsd_by_key<T, F>(data: &mut [T], base: u64, key: F) -> Result<(), SortError>
where
    T: Clone,
    F: Fn(&T) -> i64,
{
    if base < 2 {
        return Err(SortError::InvalidBase(base));
    }
    let max = max_key(data, &key)?;
    if max == 0 {
        return Ok(());
    }

    // A digit never exceeds the maximum itself, so small inputs with a huge
    // base don't need `base` buckets.
    let bucket_count = base.min(max + 1) as usize;
    let mut buckets: Vec<Vec<T>> = vec![Vec::new(); bucket_count];

    let mut place: u64 = 1;
    while place <= max {
        distribute(data, &mut buckets, |item| {
            ((key(item) as u64 / place) % base) as usize
        });
        place = match place.checked_mul(base) {
            Some(next) => next,
            None => break,
        };
    }
    Ok(())
}

/// Radix sort with base `2^power`, digits extracted with shifts and masks.
pub fn radix_lsd_pow2(data: &mut [i64], power: u32) -> Result<(), SortError> {
    radix_lsd_pow2_by_key(data, power, |&v| v)
}

/// [`radix_lsd_pow2`] for records sorted by an integer key.
pub fn radix_lsd_pow2_by_key<T, F>(data: &mut [T], power: u32, key: F) -> Result<(), SortError>
where
    T: Clone,
    F: Fn(&T) -> i64,
{
    if power == 0 || power > MAX_RADIX_POWER {
        return Err(SortError::InvalidPower {
            power,
            max: MAX_RADIX_POWER,
        });
    }
    let max = max_key(data, &key)?;
    let bits = bit_length(max);
    if bits == 0 {
        return Ok(());
    }

    let mask = (1u64 << power) - 1;
    let bucket_count = (mask.min(max) + 1) as usize;
    let mut buckets: Vec<Vec<T>> = vec![Vec::new(); bucket_count];

    // The shift advances by `power` instead of being recomputed as pass * power.
    let mut shift = 0;
    while shift < bits {
        distribute(data, &mut buckets, |item| (((key(item) as u64) >> shift) & mask) as usize);
        shift += power;
    }
    Ok(())
}

/// Maximum key as `u64`, rejecting the first negative key.
fn max_key<T, F>(data: &[T], key: &F) -> Result<u64, SortError>
where
    F: Fn(&T) -> i64,
{
    let mut max = 0u64;
    for (index, item) in data.iter().enumerate() {
        let value = key(item);
        if value < 0 {
            return Err(SortError::NegativeValue { index, value });
        }
        max = max.max(value as u64);
    }
    Ok(max)
}

/// One stable pass: scatter into buckets by `digit`, then gather in order.
fn distribute<T, D>(data: &mut [T], buckets: &mut [Vec<T>], digit: D)
where
    T: Clone,
    D: Fn(&T) -> usize,
{
    for bucket in buckets.iter_mut() {
        bucket.clear();
    }
    for item in data.iter() {
        buckets[digit(item)].push(item.clone());
    }

    let mut start = 0;
    for bucket in buckets.iter() {
        let end = start + bucket.len();
        data[start..end].clone_from_slice(bucket);
        start = end;
    }
}

/// Bitwise radix sort, two buckets.
#[derive(Debug, Clone, Copy, Default)]
pub struct RadixLsb;

impl Sorter for RadixLsb {
    fn name(&self) -> &'static str {
        "radix-lsb"
    }

    fn is_stable(&self) -> bool {
        true
    }

    fn sort(&self, data: &mut [i64]) -> Result<(), SortError> {
        radix_lsb(data)
    }
}

/// Arithmetic radix sort with a configurable base.
#[derive(Debug, Clone, Copy)]
pub struct RadixLsd {
    pub base: u64,
}

impl Default for RadixLsd {
    fn default() -> Self {
        RadixLsd { base: 10 }
    }
}

impl Sorter for RadixLsd {
    fn name(&self) -> &'static str {
        "radix-lsd"
    }

    fn is_stable(&self) -> bool {
        true
    }

    fn sort(&self, data: &mut [i64]) -> Result<(), SortError> {
        radix_lsd(data, self.base)
    }
}

/// Bitmask radix sort with base `2^power`.
#[derive(Debug, Clone, Copy)]
pub struct RadixLsdPow2 {
    pub power: u32,
}

impl Default for RadixLsdPow2 {
    fn default() -> Self {
        RadixLsdPow2 { power: 16 }
    }
}

impl Sorter for RadixLsdPow2 {
    fn name(&self) -> &'static str {
        "radix-lsd-pow2"
    }

    fn is_stable(&self) -> bool {
        true
    }

    fn sort(&self, data: &mut [i64]) -> Result<(), SortError> {
        radix_lsd_pow2(data, self.power)
    }
}
