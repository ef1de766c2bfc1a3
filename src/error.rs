//! Error types for sortlab operations.

use thiserror::Error;

/// Result type alias for sortlab operations.
pub type Result<T> = std::result::Result<T, SortError>;

/// Error type for sortlab operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SortError {
    /// Radix sort is only defined for non-negative integers.
    #[error("Negative key at index {index}: radix sort requires non-negative integers")]
    NegativeKey {
        /// Position of the first negative element in the input.
        index: usize,
    },

    /// The modular bucketer needs at least two buckets to make progress, and its
    /// histogram must stay allocatable.
    #[error(
        "Invalid bucket count {count} (must be between 2 and {})",
        crate::bucket::MAX_BUCKETS
    )]
    InvalidBucketCount {
        /// The rejected bucket count.
        count: usize,
    },

    /// Threshold search ran out of input sizes before crossing its bound.
    #[error("Input size overflow while doubling from {size}")]
    SizeOverflow {
        /// Last size that was measured.
        size: usize,
    },
}
