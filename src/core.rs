//! Core traits and types for radix sorting.
//!
//! This module defines:
//! - [`RadixKey`]: integer types the radix sorters accept.
//! - [`Bucketer`]: the per-pass bucket assignment a radix sort is driven by.

/// Largest magnitude for which native `u64` shifts and divisions stay exact.
///
/// Maxima above this force the wide (`u128`) bucketing path.
pub const SAFE_BITWISE_MAX: u128 = u64::MAX as u128;

/// An integer type that can be radix sorted.
///
/// Keys are sorted through their non-negative magnitude. Signed types report
/// `None` for negative values, which the sorters reject.
///
/// # Examples
///
/// ```
/// use sortlab::core::RadixKey;
///
/// assert_eq!(42u16.magnitude(), Some(42));
/// assert_eq!((-1i32).magnitude(), None);
/// assert_eq!(i64::from_magnitude(7), 7);
/// ```
pub trait RadixKey: Copy {
    /// Returns the value as an unsigned magnitude, or `None` when negative.
    fn magnitude(self) -> Option<u128>;

    /// Rebuilds a key from a magnitude previously produced by [`magnitude`](Self::magnitude).
    fn from_magnitude(magnitude: u128) -> Self;
}

macro_rules! impl_radix_key_unsigned {
    ($($t:ty),*) => {
        $(
            impl RadixKey for $t {
                #[inline(always)]
                fn magnitude(self) -> Option<u128> {
                    Some(self as u128)
                }

                #[inline(always)]
                fn from_magnitude(magnitude: u128) -> Self {
                    magnitude as $t
                }
            }
        )*
    };
}

macro_rules! impl_radix_key_signed {
    ($($t:ty),*) => {
        $(
            impl RadixKey for $t {
                #[inline(always)]
                fn magnitude(self) -> Option<u128> {
                    (self >= 0).then_some(self as u128)
                }

                #[inline(always)]
                fn from_magnitude(magnitude: u128) -> Self {
                    magnitude as $t
                }
            }
        )*
    };
}

impl_radix_key_unsigned!(u8, u16, u32, u64, u128, usize);
impl_radix_key_signed!(i8, i16, i32, i64, i128, isize);

/// Assigns every value to a bucket for each pass of an LSD radix sort.
///
/// A bucketer is planned from the input up front, so pass count and arithmetic
/// strategy are fixed for the whole sort.
pub trait Bucketer {
    /// Histogram storage for one pass. Its length must equal [`bucket_count`](Self::bucket_count).
    type Counts: AsMut<[usize]>;

    /// Number of buckets per pass.
    fn bucket_count(&self) -> usize;

    /// Number of passes needed to order the planned input.
    fn passes(&self) -> u32;

    /// Returns the bucket of `value` for `pass`, in `0..bucket_count()`.
    fn bucket_of(&self, value: u128, pass: u32) -> usize;

    /// Returns a zeroed histogram.
    fn counts(&self) -> Self::Counts;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsigned_magnitude() {
        assert_eq!(0u8.magnitude(), Some(0));
        assert_eq!(u64::MAX.magnitude(), Some(u64::MAX as u128));
        assert_eq!(u128::MAX.magnitude(), Some(u128::MAX));
    }

    #[test]
    fn test_signed_magnitude() {
        assert_eq!(0i8.magnitude(), Some(0));
        assert_eq!(i64::MAX.magnitude(), Some(i64::MAX as u128));
        assert_eq!(i128::MIN.magnitude(), None);
        assert_eq!((-1isize).magnitude(), None);
    }

    #[test]
    fn test_round_trip_extremes() {
        assert_eq!(i32::from_magnitude(i32::MAX as u128), i32::MAX);
        assert_eq!(u128::from_magnitude(u128::MAX), u128::MAX);
        assert_eq!(usize::from_magnitude(0), 0);
    }
}
