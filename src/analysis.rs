//! Empirical complexity measurements.
//!
//! Every procedure returns its raw measurements; formatting them is left to the
//! caller. Random inputs are drawn from the supplied [`Rng`] so runs can be made
//! reproducible with a seeded generator.
//!
//! - [`comparison_sweep`]: comparator calls of merge sort against `n log2 n`.
//! - [`find_threshold`]: doubling search for the size whose run crosses a time bound.
//! - [`baseline_comparison`]: modular radix sort against `slice::sort_unstable`.
//! - [`bucketer_comparison`]: modular against decimal bucketing.
//! - [`bucket_size_search`]: fastest bucket count per input size.

use crate::bucket::DEFAULT_BUCKETS;
use crate::config::AnalysisConfig;
use crate::counter::CountingComparator;
use crate::error::{Result, SortError};
use crate::merge::{merge_sort, merge_sort_by};
use crate::radix::{radix_sort_decimal, radix_sort_with_buckets};
use log::debug;
use rand::Rng;
use std::time::{Duration, Instant};

/// Runs `f` and returns its output together with the wall-clock time it took.
pub fn timed<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let output = f();
    (output, start.elapsed())
}

/// `size` uniformly random values in `0..max`. A `max` of 0 yields all zeros.
pub fn random_values<R: Rng>(size: usize, max: u64, rng: &mut R) -> Vec<u64> {
    let max = max.max(1);
    (0..size).map(|_| rng.random_range(0..max)).collect()
}

/// `size` uniformly random values in `0..max`, which may exceed `u64`. A `max` of 0
/// yields all zeros.
pub fn random_wide_values<R: Rng>(size: usize, max: u128, rng: &mut R) -> Vec<u128> {
    let max = max.max(1);
    (0..size).map(|_| rng.random_range(0..max)).collect()
}

/// `size` uniformly random floats in `[0, 1)`.
pub fn random_floats<R: Rng>(size: usize, rng: &mut R) -> Vec<f64> {
    (0..size).map(|_| rng.random::<f64>()).collect()
}

/// `ceil(log2(n))`, with `ceil_log2(0) == ceil_log2(1) == 0`.
fn ceil_log2(n: usize) -> u64 {
    if n <= 1 {
        return 0;
    }
    u64::from(usize::BITS - (n - 1).leading_zeros())
}

/// One merge sort run of the comparison sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComparisonSample {
    pub size: usize,
    pub elapsed: Duration,
    /// Comparator invocations during the run.
    pub comparisons: u64,
    /// `size * log2(size)`.
    pub n_log2_n: f64,
}

impl ComparisonSample {
    /// The K constant: observed comparisons over `n log2 n`.
    pub fn k(&self) -> f64 {
        if self.n_log2_n == 0.0 {
            0.0
        } else {
            self.comparisons as f64 / self.n_log2_n
        }
    }

    /// Loose worst case for merge sort: `n * ceil(log2 n) + n`.
    pub fn upper_bound(&self) -> u64 {
        let n = self.size as u64;
        n * ceil_log2(self.size) + n
    }
}

/// Sorts random floats of each size with a counting comparator.
///
/// The counter is reset before every run so samples are independent.
pub fn comparison_sweep<R: Rng>(sizes: &[usize], rng: &mut R) -> Vec<ComparisonSample> {
    let mut counter = CountingComparator::new(|a: &f64, b: &f64| a < b);
    let mut samples = Vec::with_capacity(sizes.len());

    for &size in sizes {
        counter.reset();
        let input = random_floats(size, rng);
        let (_, elapsed) = timed(|| merge_sort_by(input, counter.as_before()));

        let n = size as f64;
        let n_log2_n = if size == 0 { 0.0 } else { n * n.log2() };
        let sample = ComparisonSample {
            size,
            elapsed,
            comparisons: counter.count(),
            n_log2_n,
        };
        debug!(
            "{} elements: {:?}, {} compares, {:.2} is n * log2(n), {:.2} is K",
            size,
            elapsed,
            sample.comparisons,
            n_log2_n,
            sample.k()
        );
        samples.push(sample);
    }
    samples
}

/// One measured size of a threshold search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThresholdRun {
    pub size: usize,
    pub elapsed: Duration,
}

/// Outcome of [`find_threshold`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThresholdReport {
    /// First size whose run reached the bound.
    pub size: usize,
    pub elapsed: Duration,
    /// The run before it, at half the size. `None` if the first run already reached the bound.
    pub previous: Option<ThresholdRun>,
}

/// Doubles the input size until `run(size)` takes at least `bound`.
///
/// The size is doubled before every run, so the first run measures `2 * seed`
/// (a `seed` of 0 is treated as 1). Returns [`SortError::SizeOverflow`] if the
/// size would exceed `usize::MAX` before the bound is reached.
///
/// # Examples
///
/// ```
/// use sortlab::analysis::find_threshold;
/// use std::time::Duration;
///
/// // A fake workload taking one microsecond per element.
/// let report = find_threshold(1_000, Duration::from_millis(10), |size| {
///     Ok(Duration::from_micros(size as u64))
/// })
/// .unwrap();
///
/// assert_eq!(report.size, 16_000);
/// assert_eq!(report.previous.map(|run| run.size), Some(8_000));
/// ```
pub fn find_threshold<F>(seed: usize, bound: Duration, mut run: F) -> Result<ThresholdReport>
where
    F: FnMut(usize) -> Result<Duration>,
{
    let mut size = seed.max(1);
    let mut previous = None;

    loop {
        size = size.checked_mul(2).ok_or(SortError::SizeOverflow { size })?;
        let elapsed = run(size)?;
        debug!("{} elements: {:?}", size, elapsed);

        if elapsed >= bound {
            return Ok(ThresholdReport {
                size,
                elapsed,
                previous,
            });
        }
        previous = Some(ThresholdRun { size, elapsed });
    }
}

/// Threshold search for merge sort over random floats.
pub fn merge_sort_threshold<R: Rng>(config: &AnalysisConfig, rng: &mut R) -> Result<ThresholdReport> {
    find_threshold(config.merge_seed, config.bound, |size| {
        let input = random_floats(size, rng);
        Ok(timed(|| merge_sort(input)).1)
    })
}

/// Threshold search for the modular radix sort with `config.radix_buckets` buckets.
pub fn radix_sort_threshold<R: Rng>(config: &AnalysisConfig, rng: &mut R) -> Result<ThresholdReport> {
    find_threshold(config.radix_seed, config.bound, |size| {
        let input = random_values(size, config.radix_max, rng);
        let (sorted, elapsed) = timed(|| radix_sort_with_buckets(input, config.radix_buckets));
        sorted?;
        Ok(elapsed)
    })
}

/// Total and average of a series of timings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    pub total: Duration,
    pub average: Duration,
}

impl Summary {
    /// Sums `durations` and averages them. Both are zero for an empty series.
    pub fn of<I: IntoIterator<Item = Duration>>(durations: I) -> Self {
        let (total, count) = durations
            .into_iter()
            .fold((Duration::ZERO, 0u32), |(total, count), d| (total + d, count + 1));
        let average = if count == 0 { Duration::ZERO } else { total / count };
        Self { total, average }
    }
}

/// Radix sort and native sort timings for one input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaselineSample {
    pub size: usize,
    pub radix: Duration,
    pub baseline: Duration,
}

/// Times the modular radix sort and `slice::sort_unstable` on the same random input.
pub fn baseline_comparison<R: Rng>(
    sizes: &[usize],
    bucket_count: usize,
    max: u64,
    rng: &mut R,
) -> Result<Vec<BaselineSample>> {
    let mut samples = Vec::with_capacity(sizes.len());
    for &size in sizes {
        let input = random_values(size, max, rng);

        let (sorted, radix) = timed(|| radix_sort_with_buckets(input.clone(), bucket_count));
        sorted?;

        let mut native = input;
        let ((), baseline) = timed(|| native.sort_unstable());

        debug!("{} elements, {} max: radix {:?}, native {:?}", size, max, radix, baseline);
        samples.push(BaselineSample {
            size,
            radix,
            baseline,
        });
    }
    Ok(samples)
}

/// Modular and decimal radix sort timings for one input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BucketerSample {
    pub size: usize,
    /// Exclusive upper bound of the input values.
    pub max: u64,
    pub modular: Duration,
    pub decimal: Duration,
}

/// Round `x` in `1..=rounds` sorts `x * 5000` values below `10^x` with both bucketers.
pub fn bucketer_comparison<R: Rng>(rounds: u32, rng: &mut R) -> Result<Vec<BucketerSample>> {
    let mut samples = Vec::with_capacity(rounds as usize);
    for x in 1..=rounds {
        let size = x as usize * 5_000;
        let max = 10u64.saturating_pow(x);
        let input = random_values(size, max, rng);

        let (sorted, modular) = timed(|| radix_sort_with_buckets(input.clone(), DEFAULT_BUCKETS));
        sorted?;
        let (sorted, decimal) = timed(|| radix_sort_decimal(input));
        sorted?;

        debug!("{} elements, {} max: modulo {:?}, string {:?}", size, max, modular, decimal);
        samples.push(BucketerSample {
            size,
            max,
            modular,
            decimal,
        });
    }
    Ok(samples)
}

/// Fastest bucket count observed for one input size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BucketSizeReport {
    pub size: usize,
    pub best_bucket_count: usize,
    pub best_time: Duration,
    /// Average over every bucket count tried.
    pub average: Duration,
}

/// For each size, times the modular radix sort with every candidate bucket count.
///
/// Each candidate gets a fresh random input below `max`. A `max` above `u64::MAX`
/// measures the wide bucketing strategy. Sizes are skipped entirely when
/// `bucket_counts` is empty.
pub fn bucket_size_search<R: Rng>(
    sizes: &[usize],
    bucket_counts: &[usize],
    max: u128,
    rng: &mut R,
) -> Result<Vec<BucketSizeReport>> {
    let mut reports = Vec::with_capacity(sizes.len());
    for &size in sizes {
        let mut timings = Vec::with_capacity(bucket_counts.len());
        let mut best: Option<(usize, Duration)> = None;

        for &bucket_count in bucket_counts {
            let input = random_wide_values(size, max, rng);
            let (sorted, elapsed) = timed(|| radix_sort_with_buckets(input, bucket_count));
            sorted?;
            debug!("{} buckets {:?} ({} elements, {} max)", bucket_count, elapsed, size, max);

            if best.is_none_or(|(_, best_time)| elapsed < best_time) {
                best = Some((bucket_count, elapsed));
            }
            timings.push(elapsed);
        }

        if let Some((best_bucket_count, best_time)) = best {
            reports.push(BucketSizeReport {
                size,
                best_bucket_count,
                best_time,
                average: Summary::of(timings).average,
            });
        }
    }
    Ok(reports)
}
