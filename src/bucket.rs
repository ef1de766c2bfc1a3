//! Bucket assignment for radix sorting.
//!
//! Two families of [`Bucketer`] are provided:
//! - [`DecimalDigits`]: reads decimal digits out of each value's base-10 text.
//!   Always 10 buckets.
//! - [`Modular`]: computes `floor(value / bucket_count^pass) mod bucket_count` for
//!   any bucket count, using the cheapest exact [`BucketStrategy`] for the input.

use crate::core::{Bucketer, SAFE_BITWISE_MAX};
use crate::error::{Result, SortError};
use cuneiform::cuneiform;

/// Number of buckets for decimal digit extraction.
pub const DECIMAL_BUCKETS: usize = 10;

/// Default bucket count for [`crate::radix_sort`].
pub const DEFAULT_BUCKETS: usize = 8;

/// Largest bucket count [`Modular`] accepts. Bounds the per-pass histogram at 128 MiB.
pub const MAX_BUCKETS: usize = 1 << 24;

// Cache-aligned decimal histogram.
#[cuneiform]
#[derive(Debug, Clone)]
pub struct DecimalCounts {
    data: [usize; DECIMAL_BUCKETS],
}

impl AsMut<[usize]> for DecimalCounts {
    fn as_mut(&mut self) -> &mut [usize] {
        &mut self.data
    }
}

/// String-indexed decimal bucketer.
///
/// # Examples
///
/// ```
/// use sortlab::bucket::DecimalDigits;
/// use sortlab::core::Bucketer;
///
/// let digits = DecimalDigits::for_keys(&[30, 25, 100]);
/// assert_eq!(digits.passes(), 3);
/// assert_eq!(digits.bucket_of(315, 0), 5);
/// assert_eq!(digits.bucket_of(315, 2), 3);
/// assert_eq!(digits.bucket_of(315, 7), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecimalDigits {
    passes: u32,
}

impl DecimalDigits {
    /// Plans a decimal sort: one pass per digit of the longest value.
    pub fn for_keys(keys: &[u128]) -> Self {
        let passes = keys
            .iter()
            .max()
            .map_or(0, |max| max.to_string().len() as u32);
        Self { passes }
    }
}

impl Bucketer for DecimalDigits {
    type Counts = DecimalCounts;

    fn bucket_count(&self) -> usize {
        DECIMAL_BUCKETS
    }

    fn passes(&self) -> u32 {
        self.passes
    }

    /// Digit `pass` places from the right of the value's decimal text, or 0 past its end.
    fn bucket_of(&self, value: u128, pass: u32) -> usize {
        let text = value.to_string();
        let digits = text.as_bytes();
        let pass = pass as usize;
        if pass >= digits.len() {
            return 0;
        }
        (digits[digits.len() - 1 - pass] - b'0') as usize
    }

    fn counts(&self) -> Self::Counts {
        DecimalCounts {
            data: [0; DECIMAL_BUCKETS],
        }
    }
}

/// Reference bucket formula: `floor(value / bucket_count^pass) mod bucket_count`.
///
/// A divisor that does not fit in `u128` means every supported value lies in
/// bucket 0 for that pass.
///
/// `bucket_count` must be at least 2.
///
/// # Examples
///
/// ```
/// use sortlab::bucket::bucket_index;
///
/// assert_eq!(bucket_index(315, 0, 8), 3);
/// assert_eq!(bucket_index(315, 1, 8), 7);
/// assert_eq!(bucket_index(315, 2, 8), 4);
/// ```
#[inline]
pub fn bucket_index(value: u128, pass: u32, bucket_count: usize) -> usize {
    debug_assert!(bucket_count >= 2);
    let base = bucket_count as u128;
    match base.checked_pow(pass) {
        Some(divisor) => (value / divisor % base) as usize,
        None => 0,
    }
}

/// Arithmetic used by [`Modular`], selected once per sort from the input maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BucketStrategy {
    /// `(value >> bits * pass) & (bucket_count - 1)` on native `u64`.
    /// Requires a power-of-two bucket count and `max <= SAFE_BITWISE_MAX`.
    Shift { bits: u32 },
    /// Division and remainder on native `u64`. Any bucket count, `max <= SAFE_BITWISE_MAX`.
    Divide,
    /// The reference formula in `u128`, for maxima above `SAFE_BITWISE_MAX`.
    Wide,
}

impl BucketStrategy {
    /// Picks the strategy for a sort whose largest value is `max`.
    pub fn select(max: u128, bucket_count: usize) -> Self {
        if max > SAFE_BITWISE_MAX {
            BucketStrategy::Wide
        } else if bucket_count.is_power_of_two() {
            BucketStrategy::Shift {
                bits: bucket_count.trailing_zeros(),
            }
        } else {
            BucketStrategy::Divide
        }
    }

    /// Bucket of `value` for `pass`. `value` must not exceed the maximum the
    /// strategy was selected for.
    #[inline(always)]
    pub fn bucket_of(self, value: u128, pass: u32, bucket_count: usize) -> usize {
        match self {
            BucketStrategy::Shift { bits } => {
                let shifted = (value as u64)
                    .checked_shr(bits.saturating_mul(pass))
                    .unwrap_or(0);
                (shifted & (bucket_count as u64 - 1)) as usize
            }
            BucketStrategy::Divide => {
                let base = bucket_count as u64;
                match base.checked_pow(pass) {
                    Some(divisor) => ((value as u64) / divisor % base) as usize,
                    None => 0,
                }
            }
            BucketStrategy::Wide => bucket_index(value, pass, bucket_count),
        }
    }
}

/// Modular bucketer with a fixed bucket count.
///
/// # Examples
///
/// ```
/// use sortlab::bucket::{BucketStrategy, Modular};
/// use sortlab::core::Bucketer;
///
/// let plan = Modular::for_keys(&[315, 2, 11012, 80, 654, 100000], 8).unwrap();
/// assert_eq!(plan.passes(), 6);
/// assert_eq!(plan.max(), 100000);
/// assert_eq!(plan.strategy(), BucketStrategy::Shift { bits: 3 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Modular {
    bucket_count: usize,
    passes: u32,
    max: u128,
    strategy: BucketStrategy,
}

impl Modular {
    /// Plans a sort of `keys` into `bucket_count` buckets per pass.
    ///
    /// Returns [`SortError::InvalidBucketCount`] unless `2 <= bucket_count <= MAX_BUCKETS`.
    pub fn for_keys(keys: &[u128], bucket_count: usize) -> Result<Self> {
        if !(2..=MAX_BUCKETS).contains(&bucket_count) {
            return Err(SortError::InvalidBucketCount {
                count: bucket_count,
            });
        }

        let max = keys.iter().copied().max().unwrap_or(0);
        Ok(Self {
            bucket_count,
            passes: required_passes(max, bucket_count),
            max,
            strategy: BucketStrategy::select(max, bucket_count),
        })
    }

    /// Largest value in the planned input.
    pub fn max(&self) -> u128 {
        self.max
    }

    /// Arithmetic selected for this input.
    pub fn strategy(&self) -> BucketStrategy {
        self.strategy
    }
}

impl Bucketer for Modular {
    type Counts = Vec<usize>;

    fn bucket_count(&self) -> usize {
        self.bucket_count
    }

    fn passes(&self) -> u32 {
        self.passes
    }

    #[inline(always)]
    fn bucket_of(&self, value: u128, pass: u32) -> usize {
        self.strategy.bucket_of(value, pass, self.bucket_count)
    }

    fn counts(&self) -> Self::Counts {
        vec![0; self.bucket_count]
    }
}

/// `floor(log_bucket_count(max)) + 1`, or 0 when `max` is 0.
///
/// Computed by repeated division; float logarithms misround at exact powers.
fn required_passes(max: u128, bucket_count: usize) -> u32 {
    let base = bucket_count as u128;
    let mut rest = max;
    let mut passes = 0;
    while rest > 0 {
        rest /= base;
        passes += 1;
    }
    passes
}
