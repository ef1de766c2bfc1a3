//! LSD radix sort over non-negative integers.
//!
//! Each pass distributes the working sequence into buckets by one digit, least
//! significant first, and concatenates the buckets in ascending order:
//! 1. Assigns every value its bucket for this pass.
//! 2. Counts bucket sizes (histogram).
//! 3. Computes prefix sums to find where each bucket starts.
//! 4. Scatters values into a fresh buffer, keeping their relative order.
//!
//! Because every pass is stable, the sequence is fully ordered after the pass
//! for the most significant digit.

use crate::bucket::{DEFAULT_BUCKETS, DecimalDigits, Modular};
use crate::core::{Bucketer, RadixKey};
use crate::error::{Result, SortError};

/// Sorts non-negative integers with the modular bucketer and 8 buckets.
///
/// Returns [`SortError::NegativeKey`] if any value is negative.
///
/// # Examples
///
/// ```
/// use sortlab::radix_sort;
///
/// let sorted = radix_sort(vec![315u32, 2, 11012, 80, 654, 100000]).unwrap();
/// assert_eq!(sorted, vec![2, 80, 315, 654, 11012, 100000]);
/// ```
pub fn radix_sort<K: RadixKey>(input: Vec<K>) -> Result<Vec<K>> {
    radix_sort_with_buckets(input, DEFAULT_BUCKETS)
}

/// Sorts non-negative integers with the modular bucketer and `bucket_count` buckets.
///
/// The bucketing strategy is chosen once from the largest value. Maxima beyond
/// `u64` switch to wide arithmetic rather than losing precision.
///
/// # Errors
///
/// - [`SortError::NegativeKey`] if any value is negative.
/// - [`SortError::InvalidBucketCount`] if `bucket_count` is below 2 or above
///   [`MAX_BUCKETS`](crate::bucket::MAX_BUCKETS).
pub fn radix_sort_with_buckets<K: RadixKey>(input: Vec<K>, bucket_count: usize) -> Result<Vec<K>> {
    let keys = magnitudes(&input)?;
    let bucketer = Modular::for_keys(&keys, bucket_count)?;
    Ok(restore(radix_sort_with(keys, &bucketer)))
}

/// Sorts non-negative integers using decimal digits read from each value's text.
///
/// Returns [`SortError::NegativeKey`] if any value is negative.
///
/// # Examples
///
/// ```
/// use sortlab::radix_sort_decimal;
///
/// assert_eq!(radix_sort_decimal(vec![30u64, 25, 100]).unwrap(), vec![25, 30, 100]);
/// ```
pub fn radix_sort_decimal<K: RadixKey>(input: Vec<K>) -> Result<Vec<K>> {
    let keys = magnitudes(&input)?;
    let bucketer = DecimalDigits::for_keys(&keys);
    Ok(restore(radix_sort_with(keys, &bucketer)))
}

/// Runs `bucketer.passes()` stable distribution passes over `keys`.
///
/// The bucketer must have been planned for these keys (or a superset with the
/// same maximum).
pub fn radix_sort_with<B: Bucketer>(mut keys: Vec<u128>, bucketer: &B) -> Vec<u128> {
    if keys.len() <= 1 {
        return keys;
    }

    let mut digits = vec![0usize; keys.len()];
    for pass in 0..bucketer.passes() {
        keys = distribute(keys, &mut digits, bucketer, pass);
    }
    keys
}

/// One stable pass. Consumes the previous buffer so at most two live at once.
fn distribute<B: Bucketer>(keys: Vec<u128>, digits: &mut [usize], bucketer: &B, pass: u32) -> Vec<u128> {
    let mut counts = bucketer.counts();
    let counts = counts.as_mut();

    // 1. Assign buckets and count frequencies
    keys.iter().zip(digits.iter_mut()).for_each(|(&key, digit)| {
        *digit = bucketer.bucket_of(key, pass);
        counts[*digit] += 1;
    });

    // 2. Turn counts into start offsets (exclusive prefix sum)
    let mut sum = 0;
    counts.iter_mut().for_each(|count| {
        let size = *count;
        *count = sum;
        sum += size;
    });

    // 3. Scatter in input order
    let mut output = vec![0u128; keys.len()];
    keys.iter().zip(digits.iter()).for_each(|(&key, &digit)| {
        output[counts[digit]] = key;
        counts[digit] += 1;
    });
    output
}

/// Validates that every key is non-negative and widens it.
fn magnitudes<K: RadixKey>(input: &[K]) -> Result<Vec<u128>> {
    input
        .iter()
        .enumerate()
        .map(|(index, key)| key.magnitude().ok_or(SortError::NegativeKey { index }))
        .collect()
}

fn restore<K: RadixKey>(keys: Vec<u128>) -> Vec<K> {
    keys.into_iter().map(K::from_magnitude).collect()
}
