//! # Sortlab
//!
//! `sortlab` implements two sorting strategies and the instrumentation used to
//! check their complexity empirically:
//!
//! - **Merge sort**: recursive top-down merge sort over any type, ordered by a
//!   `before(a, b)` predicate.
//! - **Radix sort**: LSD radix sort over non-negative integers, with two ways of
//!   assigning buckets:
//!   - decimal digits read from each value's text (always 10 buckets);
//!   - modular arithmetic with any bucket count, using bit shifts when the bucket
//!     count is a power of two and wide arithmetic when values exceed `u64`.
//! - **Analysis**: comparison counting, timing sweeps and a doubling threshold
//!   search. See [`analysis`].
//!
//! ## Usage
//!
//! ### Merge sort
//!
//! ```rust
//! use sortlab::{merge_sort, merge_sort_by};
//!
//! assert_eq!(merge_sort(vec![5, 4, 3, 2, 1]), vec![1, 2, 3, 4, 5]);
//!
//! // Descending order through a custom comparator.
//! let sorted = merge_sort_by(vec![50, 45, 3, 25, 11], |a, b| a > b);
//! assert_eq!(sorted, vec![50, 45, 25, 11, 3]);
//! ```
//!
//! ### Radix sort
//!
//! ```rust
//! use sortlab::{SortError, radix_sort, radix_sort_decimal, radix_sort_with_buckets};
//!
//! let input = vec![315u64, 2, 11012, 80, 654, 100000];
//! let expected = vec![2, 80, 315, 654, 11012, 100000];
//!
//! assert_eq!(radix_sort(input.clone()).unwrap(), expected);
//! assert_eq!(radix_sort_with_buckets(input.clone(), 16384).unwrap(), expected);
//! assert_eq!(radix_sort_decimal(input).unwrap(), expected);
//!
//! // Negative values are rejected, not silently misordered.
//! assert_eq!(radix_sort(vec![3i32, -1]), Err(SortError::NegativeKey { index: 1 }));
//! ```
//!
//! ### Counting comparisons
//!
//! ```rust
//! use sortlab::{CountingComparator, merge_sort_by};
//!
//! let mut counter = CountingComparator::new(|a: &u32, b: &u32| a < b);
//! let input: Vec<u32> = (0..1000).rev().collect();
//! merge_sort_by(input, counter.as_before());
//! println!("{} comparisons", counter.count());
//! counter.reset();
//! ```
//!
//! ## Performance Characteristics
//!
//! - **Merge sort**: `O(n log n)` comparisons; every merge allocates its output.
//! - **Radix sort**: `O(passes * (n + buckets))`, with `passes = floor(log_buckets(max)) + 1`.
//!   One extra buffer of `n` values is alive per pass.

pub mod analysis;
pub mod bucket;
pub mod config;
pub mod core;
pub mod counter;
pub mod error;
pub mod merge;
pub mod radix;

pub use config::AnalysisConfig;
pub use counter::CountingComparator;
pub use error::{Result, SortError};
pub use merge::{merge, merge_sort, merge_sort_by};
pub use radix::{radix_sort, radix_sort_decimal, radix_sort_with, radix_sort_with_buckets};

pub mod prelude {
    pub use crate::core::{Bucketer, RadixKey};
    pub use crate::counter::CountingComparator;
    pub use crate::error::SortError;
    pub use crate::merge::{merge, merge_sort, merge_sort_by};
    pub use crate::radix::{radix_sort, radix_sort_decimal, radix_sort_with_buckets};
}
