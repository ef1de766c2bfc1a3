//! Parameters for the analysis procedures.

use std::time::Duration;

/// Settings shared by the [`crate::analysis`] procedures.
///
/// `Default` reproduces the reference measurement setup; the `with_*` setters
/// override one field at a time.
///
/// # Examples
///
/// ```
/// use sortlab::AnalysisConfig;
/// use std::time::Duration;
///
/// let config = AnalysisConfig::default()
///     .with_bound(Duration::from_millis(50))
///     .with_merge_seed(1_000);
///
/// assert_eq!(config.merge_seed, 1_000);
/// assert_eq!(config.bound, Duration::from_millis(50));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisConfig {
    /// Input sizes for the comparison-count sweep.
    pub sweep_sizes: Vec<usize>,
    /// Starting size for the merge sort threshold search. Doubled before the first run.
    pub merge_seed: usize,
    /// Starting size for the radix sort threshold search. Doubled before the first run.
    pub radix_seed: usize,
    /// Elapsed time at which a threshold search stops.
    pub bound: Duration,
    /// Buckets per pass for radix threshold search and baseline comparison.
    pub radix_buckets: usize,
    /// Exclusive upper bound of random values for the radix threshold search.
    pub radix_max: u64,
    /// Rounds of the bucketer comparison. Round `x` sorts `x * 5000` values below `10^x`.
    pub bucketer_rounds: u32,
    /// Input sizes for the baseline comparison.
    pub baseline_sizes: Vec<usize>,
    /// Exclusive upper bound of random values for the baseline comparison.
    pub baseline_max: u64,
    /// Input sizes for the bucket-size search.
    pub bucket_search_sizes: Vec<usize>,
    /// Candidate bucket counts for the bucket-size search.
    pub bucket_counts: Vec<usize>,
    /// Exclusive upper bound of random values for the bucket-size search.
    pub bucket_search_max: u128,
}

/// Upper bound for large-value runs: the 31-bit shift limit scaled by 1000.
const REFERENCE_WIDE_MAX: u64 = ((1u64 << 31) - 1) * 1000;

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            sweep_sizes: (1..20).map(|x| x * 500).collect(),
            merge_seed: 20_500,
            radix_seed: 10_000,
            bound: Duration::from_millis(1000),
            radix_buckets: 16_384,
            radix_max: REFERENCE_WIDE_MAX,
            bucketer_rounds: 9,
            baseline_sizes: (1..10).map(|x| x * 250_000).collect(),
            baseline_max: 10_000,
            bucket_search_sizes: std::iter::successors(Some(1_000usize), |n| Some(n * 8))
                .take_while(|&n| n < 10_000_000)
                .collect(),
            bucket_counts: (9..17).map(|x| 1usize << x).collect(),
            bucket_search_max: REFERENCE_WIDE_MAX as u128,
        }
    }
}

impl AnalysisConfig {
    /// Sets the comparison sweep sizes.
    pub fn with_sweep_sizes(mut self, sizes: Vec<usize>) -> Self {
        self.sweep_sizes = sizes;
        self
    }

    /// Sets the merge sort threshold starting size.
    pub fn with_merge_seed(mut self, seed: usize) -> Self {
        self.merge_seed = seed;
        self
    }

    /// Sets the radix sort threshold starting size.
    pub fn with_radix_seed(mut self, seed: usize) -> Self {
        self.radix_seed = seed;
        self
    }

    /// Sets the threshold search time bound.
    pub fn with_bound(mut self, bound: Duration) -> Self {
        self.bound = bound;
        self
    }

    /// Sets the bucket count for radix threshold and baseline runs.
    pub fn with_radix_buckets(mut self, buckets: usize) -> Self {
        self.radix_buckets = buckets;
        self
    }

    /// Sets the value bound for the radix threshold search.
    pub fn with_radix_max(mut self, max: u64) -> Self {
        self.radix_max = max;
        self
    }

    /// Sets the number of bucketer comparison rounds.
    pub fn with_bucketer_rounds(mut self, rounds: u32) -> Self {
        self.bucketer_rounds = rounds;
        self
    }

    /// Sets the baseline comparison sizes.
    pub fn with_baseline_sizes(mut self, sizes: Vec<usize>) -> Self {
        self.baseline_sizes = sizes;
        self
    }

    /// Sets the value bound for the baseline comparison.
    pub fn with_baseline_max(mut self, max: u64) -> Self {
        self.baseline_max = max;
        self
    }

    /// Sets the bucket-size search sizes.
    pub fn with_bucket_search_sizes(mut self, sizes: Vec<usize>) -> Self {
        self.bucket_search_sizes = sizes;
        self
    }

    /// Sets the candidate bucket counts.
    pub fn with_bucket_counts(mut self, counts: Vec<usize>) -> Self {
        self.bucket_counts = counts;
        self
    }

    /// Sets the value bound for the bucket-size search. Values above `u64::MAX` exercise wide bucketing.
    pub fn with_bucket_search_max(mut self, max: u128) -> Self {
        self.bucket_search_max = max;
        self
    }
}
