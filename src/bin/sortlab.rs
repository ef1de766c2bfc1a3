#![deny(unsafe_code)]

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use env_logger::Env;
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use sortlab::AnalysisConfig;
use sortlab::analysis::{self, Summary, ThresholdReport};
use std::time::Duration;

/// Empirical analysis of merge sort and radix sort.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Seed for the input generator. Random when omitted.
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Count merge sort comparisons against n * log2(n).
    Comparisons {
        /// Input sizes to sort.
        #[arg(long, value_delimiter = ',')]
        sizes: Option<Vec<usize>>,
    },
    /// Double the input size until one sort takes longer than the bound.
    Threshold {
        #[arg(long, value_enum, default_value_t = Algorithm::Merge)]
        algorithm: Algorithm,
        /// Starting size; doubled before the first run.
        #[arg(long)]
        seed_size: Option<usize>,
        /// Time bound in milliseconds.
        #[arg(long)]
        bound_ms: Option<u64>,
        /// Buckets per pass for the radix sort.
        #[arg(long)]
        buckets: Option<usize>,
    },
    /// Compare radix sort with the standard library's unstable sort.
    Baseline {
        #[arg(long, value_delimiter = ',')]
        sizes: Option<Vec<usize>>,
        #[arg(long)]
        buckets: Option<usize>,
        /// Exclusive upper bound of the random values.
        #[arg(long)]
        max: Option<u64>,
    },
    /// Compare modular and decimal bucketing.
    Bucketers {
        #[arg(long)]
        rounds: Option<u32>,
    },
    /// Find the fastest bucket count for each input size.
    BucketSizes {
        #[arg(long, value_delimiter = ',')]
        sizes: Option<Vec<usize>>,
        #[arg(long, value_delimiter = ',')]
        buckets: Option<Vec<usize>>,
        /// Exclusive upper bound of the random values; may exceed u64.
        #[arg(long)]
        max: Option<u128>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Algorithm {
    Merge,
    Radix,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut config = AnalysisConfig::default();

    match args.command {
        Command::Comparisons { sizes } => {
            if let Some(sizes) = sizes {
                config = config.with_sweep_sizes(sizes);
            }
            info!("counting comparisons and timing");
            for sample in analysis::comparison_sweep(&config.sweep_sizes, &mut rng) {
                info!(
                    "{} elements: {:.2} ms, {} compares, {:.2} is n * log2(n), {:.2} is K",
                    sample.size,
                    millis(sample.elapsed),
                    sample.comparisons,
                    sample.n_log2_n,
                    sample.k()
                );
            }
        }
        Command::Threshold {
            algorithm,
            seed_size,
            bound_ms,
            buckets,
        } => {
            if let Some(bound_ms) = bound_ms {
                config = config.with_bound(Duration::from_millis(bound_ms));
            }
            if let Some(buckets) = buckets {
                config = config.with_radix_buckets(buckets);
            }
            let report = match algorithm {
                Algorithm::Merge => {
                    if let Some(seed_size) = seed_size {
                        config = config.with_merge_seed(seed_size);
                    }
                    analysis::merge_sort_threshold(&config, &mut rng)?
                }
                Algorithm::Radix => {
                    if let Some(seed_size) = seed_size {
                        config = config.with_radix_seed(seed_size);
                    }
                    analysis::radix_sort_threshold(&config, &mut rng)?
                }
            };
            report_threshold(&report);
        }
        Command::Baseline { sizes, buckets, max } => {
            let sizes = sizes.unwrap_or(config.baseline_sizes);
            let buckets = buckets.unwrap_or(config.radix_buckets);
            let max = max.unwrap_or(config.baseline_max);

            let samples = analysis::baseline_comparison(&sizes, buckets, max, &mut rng)?;
            for sample in &samples {
                info!("{} elements, {} max", sample.size, max);
                info!("radix:\t {:.2} ms", millis(sample.radix));
                info!("native:\t {:.2} ms", millis(sample.baseline));
            }
            let radix = Summary::of(samples.iter().map(|s| s.radix));
            let native = Summary::of(samples.iter().map(|s| s.baseline));
            info!(
                "radix total {:.2} ms, average {:.2} ms; native total {:.2} ms, average {:.2} ms",
                millis(radix.total),
                millis(radix.average),
                millis(native.total),
                millis(native.average)
            );
        }
        Command::Bucketers { rounds } => {
            let rounds = rounds.unwrap_or(config.bucketer_rounds);
            let samples = analysis::bucketer_comparison(rounds, &mut rng)?;
            for sample in &samples {
                info!("{} elements, {} max", sample.size, sample.max);
                info!("modulo:\t {:.2} ms", millis(sample.modular));
                info!("string:\t {:.2} ms", millis(sample.decimal));
            }
            let modular = Summary::of(samples.iter().map(|s| s.modular));
            let decimal = Summary::of(samples.iter().map(|s| s.decimal));
            info!(
                "modulo total {:.2} ms, average {:.2} ms; string total {:.2} ms, average {:.2} ms",
                millis(modular.total),
                millis(modular.average),
                millis(decimal.total),
                millis(decimal.average)
            );
        }
        Command::BucketSizes { sizes, buckets, max } => {
            let sizes = sizes.unwrap_or(config.bucket_search_sizes);
            let buckets = buckets.unwrap_or(config.bucket_counts);
            let max = max.unwrap_or(config.bucket_search_max);

            for report in analysis::bucket_size_search(&sizes, &buckets, max, &mut rng)? {
                info!(
                    "{} elements: best {} buckets at {:.2} ms, average {:.2} ms",
                    report.size,
                    report.best_bucket_count,
                    millis(report.best_time),
                    millis(report.average)
                );
            }
        }
    }

    Ok(())
}

fn report_threshold(report: &ThresholdReport) {
    if let Some(previous) = report.previous {
        info!("{} elements: {:.2} ms", previous.size, millis(previous.elapsed));
    }
    info!(
        "{} elements: {:.2} ms (bound reached)",
        report.size,
        millis(report.elapsed)
    );
}

fn millis(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}
