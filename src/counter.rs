//! Comparator instrumentation.

/// Wraps a `before(a, b)` comparator and counts how many times it is invoked.
///
/// The count lives in the wrapper itself, so each measurement owns its counter
/// and nothing is shared between runs. Call [`reset`](Self::reset) before reusing
/// the same instance for another measurement.
///
/// # Examples
///
/// ```
/// use sortlab::{CountingComparator, merge_sort_by};
///
/// let mut counter = CountingComparator::new(|a: &i32, b: &i32| a < b);
/// let sorted = merge_sort_by(vec![5, 4, 3, 2, 1], counter.as_before());
///
/// assert_eq!(sorted, vec![1, 2, 3, 4, 5]);
/// assert!(counter.count() > 0);
/// ```
#[derive(Debug, Clone)]
pub struct CountingComparator<F> {
    base: F,
    count: u64,
}

impl<F> CountingComparator<F> {
    /// Wraps `base` with a counter starting at zero.
    pub fn new(base: F) -> Self {
        Self { base, count: 0 }
    }

    /// Number of comparisons since construction or the last reset.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Sets the count back to zero.
    pub fn reset(&mut self) {
        self.count = 0;
    }

    /// Evaluates the wrapped comparator and bumps the counter.
    #[inline]
    pub fn compare<T>(&mut self, a: &T, b: &T) -> bool
    where
        F: FnMut(&T, &T) -> bool,
    {
        self.count += 1;
        (self.base)(a, b)
    }

    /// Borrows the instrument as a plain comparator closure.
    pub fn as_before<T>(&mut self) -> impl FnMut(&T, &T) -> bool + '_
    where
        F: FnMut(&T, &T) -> bool,
    {
        move |a: &T, b: &T| self.compare(a, b)
    }
}
