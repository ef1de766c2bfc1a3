use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use sortlab::prelude::*;

fn is_ordered_by<T, F: FnMut(&T, &T) -> bool>(items: &[T], mut before: F) -> bool {
    // No later element may strictly precede an earlier one.
    items.windows(2).all(|w| !before(&w[1], &w[0]))
}

fn multiset<T: Ord + Clone>(items: &[T]) -> Vec<T> {
    let mut sorted = items.to_vec();
    sorted.sort();
    sorted
}

#[test]
fn test_reference_scenarios() {
    assert_eq!(merge(vec![1, 3, 5], vec![2, 4, 6], |a, b| a < b), vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(merge_sort(vec![5, 4, 3, 2, 1]), vec![1, 2, 3, 4, 5]);
    assert_eq!(
        merge_sort_by(vec![50, 45, 3, 25, 11], |a, b| a > b),
        vec![50, 45, 25, 11, 3]
    );
    assert_eq!(radix_sort_decimal(vec![30u32, 25, 100]).unwrap(), vec![25, 30, 100]);
    assert_eq!(
        radix_sort_with_buckets(vec![315u32, 2, 11012, 80, 654, 100000], 8).unwrap(),
        vec![2, 80, 315, 654, 11012, 100000]
    );
}

#[test]
fn test_fuzz_merge_sort_permutation_and_order() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..500 {
        let len = rng.random_range(0..200);
        let input: Vec<i32> = (0..len).map(|_| rng.random_range(-50..50)).collect();

        let ascending = merge_sort(input.clone());
        assert!(is_ordered_by(&ascending, |a, b| a < b));
        assert_eq!(multiset(&ascending), multiset(&input));

        let descending = merge_sort_by(input.clone(), |a, b| a > b);
        assert!(is_ordered_by(&descending, |a, b| a > b));
        assert_eq!(multiset(&descending), multiset(&input));
    }
}

#[test]
fn test_fuzz_merge_lengths_and_multiset() {
    let mut rng = rand::rng();

    for _ in 0..500 {
        let mut a: Vec<u16> = (0..rng.random_range(0..50)).map(|_| rng.random()).collect();
        let mut b: Vec<u16> = (0..rng.random_range(0..50)).map(|_| rng.random()).collect();
        a.sort();
        b.sort();

        let merged = merge(a.clone(), b.clone(), |x, y| x < y);
        assert_eq!(merged.len(), a.len() + b.len());
        assert!(is_ordered_by(&merged, |x, y| x < y));

        let mut union = a;
        union.extend(b);
        assert_eq!(multiset(&merged), multiset(&union));
    }
}

#[test]
fn test_fuzz_all_sorts_agree() {
    let mut rng = rand::rng();

    for _ in 0..200 {
        let len = rng.random_range(0..500);
        let max = 10u64.pow(rng.random_range(1..12));
        let input: Vec<u64> = (0..len).map(|_| rng.random_range(0..max)).collect();

        let mut expected = input.clone();
        expected.sort();

        assert_eq!(merge_sort(input.clone()), expected);
        assert_eq!(radix_sort(input.clone()).unwrap(), expected);
        assert_eq!(radix_sort_decimal(input.clone()).unwrap(), expected);

        let buckets = rng.random_range(2..300);
        assert_eq!(radix_sort_with_buckets(input, buckets).unwrap(), expected);
    }
}

#[test]
fn test_full_range_u64() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut input: Vec<u64> = (0..5_000).map(|_| rng.random()).collect();
    input.extend([0, u64::MAX, u64::MAX - 1, 1]);

    let mut expected = input.clone();
    expected.sort();

    for buckets in [2, 8, 10, 256, 16384] {
        assert_eq!(radix_sort_with_buckets(input.clone(), buckets).unwrap(), expected);
    }
    assert_eq!(radix_sort_decimal(input).unwrap(), expected);
}

#[test]
fn test_values_beyond_u64() {
    let mut rng = StdRng::seed_from_u64(99);
    let input: Vec<u128> = (0..2_000)
        .map(|i| if i % 2 == 0 { rng.random() } else { u128::from(rng.random::<u32>()) })
        .collect();

    let mut expected = input.clone();
    expected.sort();

    assert_eq!(radix_sort(input.clone()).unwrap(), expected);
    assert_eq!(radix_sort_with_buckets(input.clone(), 16384).unwrap(), expected);
    assert_eq!(radix_sort_with_buckets(input.clone(), 1000).unwrap(), expected);
    assert_eq!(radix_sort_decimal(input).unwrap(), expected);
}

#[test]
fn test_idempotent() {
    let sorted: Vec<u32> = (0..1_000).map(|i| i * 3).collect();
    assert_eq!(merge_sort(sorted.clone()), sorted);
    assert_eq!(radix_sort(sorted.clone()).unwrap(), sorted);
    assert_eq!(radix_sort_decimal(sorted.clone()).unwrap(), sorted);

    let once = merge_sort(vec![9, 1, 8, 2, 7, 3]);
    assert_eq!(merge_sort(once.clone()), once);
}

#[test]
fn test_edge_cases() {
    // 1. Empty
    assert!(merge_sort(Vec::<i32>::new()).is_empty());
    assert!(radix_sort(Vec::<u8>::new()).unwrap().is_empty());
    assert!(radix_sort_decimal(Vec::<u8>::new()).unwrap().is_empty());

    // 2. Singleton
    assert_eq!(merge_sort(vec![42]), vec![42]);
    assert_eq!(radix_sort(vec![42u8]).unwrap(), vec![42]);
    assert_eq!(radix_sort_decimal(vec![42u8]).unwrap(), vec![42]);

    // 3. All same
    let same = vec![7u32; 50];
    assert_eq!(merge_sort(same.clone()), same);
    assert_eq!(radix_sort(same.clone()).unwrap(), same);

    // 4. All zero
    let zeros = vec![0u64; 50];
    assert_eq!(radix_sort(zeros.clone()).unwrap(), zeros);
    assert_eq!(radix_sort_decimal(zeros.clone()).unwrap(), zeros);

    // 5. Reversed
    let reversed: Vec<u16> = (0..500).rev().collect();
    let expected: Vec<u16> = (0..500).collect();
    assert_eq!(merge_sort(reversed.clone()), expected);
    assert_eq!(radix_sort(reversed).unwrap(), expected);
}

#[test]
fn test_negative_keys_rejected() {
    let input = vec![5i64, 3, 0, -7, 2];
    assert_eq!(radix_sort(input.clone()), Err(SortError::NegativeKey { index: 3 }));
    assert_eq!(radix_sort_decimal(input.clone()), Err(SortError::NegativeKey { index: 3 }));
    assert_eq!(
        radix_sort_with_buckets(input, 16),
        Err(SortError::NegativeKey { index: 3 })
    );

    // Non-negative signed input is fine.
    assert_eq!(radix_sort(vec![5i8, 0, 127, 3]).unwrap(), vec![0, 3, 5, 127]);
}

#[test]
fn test_comparison_count_bound() {
    let mut counter = CountingComparator::new(|a: &u32, b: &u32| a < b);

    for n in [1usize, 2, 3, 7, 64, 100, 1_000, 4_097] {
        counter.reset();
        let input: Vec<u32> = (0..n as u32).rev().collect();
        let sorted = merge_sort_by(input, counter.as_before());
        assert_eq!(sorted.len(), n);

        let ceil_log2 = (n as f64).log2().ceil() as u64;
        let bound = n as u64 * ceil_log2 + n as u64;
        assert!(counter.count() <= bound, "{} compares for n = {}", counter.count(), n);
    }
}

#[test]
fn test_custom_bucketer() {
    // Two buckets per pass over a single bit.
    struct Bits(u32);

    impl Bucketer for Bits {
        type Counts = [usize; 2];

        fn bucket_count(&self) -> usize {
            2
        }

        fn passes(&self) -> u32 {
            self.0
        }

        fn bucket_of(&self, value: u128, pass: u32) -> usize {
            ((value >> pass) & 1) as usize
        }

        fn counts(&self) -> Self::Counts {
            [0; 2]
        }
    }

    let sorted = sortlab::radix_sort_with(vec![6, 3, 7, 0, 5, 1], &Bits(3));
    assert_eq!(sorted, vec![0, 1, 3, 5, 6, 7]);
}

#[test]
fn test_unallocatable_bucket_counts_rejected() {
    use sortlab::bucket::MAX_BUCKETS;

    for count in [0, 1, MAX_BUCKETS + 1, usize::MAX / 4 + 1, usize::MAX] {
        assert_eq!(
            radix_sort_with_buckets(vec![3u64, 1, 2], count),
            Err(SortError::InvalidBucketCount { count })
        );
    }

    // The limit itself is a valid bucket count.
    assert_eq!(radix_sort_with_buckets(vec![3u64, 1, 2], MAX_BUCKETS).unwrap(), vec![1, 2, 3]);
}
