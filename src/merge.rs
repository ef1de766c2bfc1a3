//! Top-down merge sort.
//!
//! The comparator is a `before(a, b)` predicate: it returns `true` when `a` must
//! precede `b`. [`merge`] only takes from the left input when that predicate holds
//! strictly, so elements that compare equal are emitted from the right input first.

/// Merges two sequences that are already sorted under `before`.
///
/// Runs in `O(a.len() + b.len())` and allocates the output once.
///
/// # Examples
///
/// ```
/// use sortlab::merge;
///
/// let merged = merge(vec![1, 3, 5], vec![2, 4, 6], |a, b| a < b);
/// assert_eq!(merged, vec![1, 2, 3, 4, 5, 6]);
/// ```
pub fn merge<T, F>(a: Vec<T>, b: Vec<T>, mut before: F) -> Vec<T>
where
    F: FnMut(&T, &T) -> bool,
{
    merge_with(a, b, &mut before)
}

fn merge_with<T, F>(a: Vec<T>, b: Vec<T>, before: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> bool,
{
    let mut result = Vec::with_capacity(a.len() + b.len());
    let mut left = a.into_iter().peekable();
    let mut right = b.into_iter().peekable();

    loop {
        let take_left = match (left.peek(), right.peek()) {
            (Some(x), Some(y)) => before(x, y),
            _ => break,
        };
        let next = if take_left { left.next() } else { right.next() };
        result.extend(next);
    }

    // At most one side still has elements.
    result.extend(left);
    result.extend(right);
    result
}

/// Sorts `input` in ascending order.
///
/// # Examples
///
/// ```
/// use sortlab::merge_sort;
///
/// assert_eq!(merge_sort(vec![5, 4, 3, 2, 1]), vec![1, 2, 3, 4, 5]);
/// ```
pub fn merge_sort<T: PartialOrd>(input: Vec<T>) -> Vec<T> {
    merge_sort_by(input, |a, b| a < b)
}

/// Sorts `input` so that no adjacent pair violates `before`.
///
/// The input is split at `len / 2`, both halves are sorted recursively and then
/// merged. Recursion depth is `O(log n)`.
///
/// # Examples
///
/// ```
/// use sortlab::merge_sort_by;
///
/// let sorted = merge_sort_by(vec![50, 45, 3, 25, 11], |a, b| a > b);
/// assert_eq!(sorted, vec![50, 45, 25, 11, 3]);
/// ```
pub fn merge_sort_by<T, F>(input: Vec<T>, mut before: F) -> Vec<T>
where
    F: FnMut(&T, &T) -> bool,
{
    sort_recursive(input, &mut before)
}

fn sort_recursive<T, F>(mut input: Vec<T>, before: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> bool,
{
    if input.len() <= 1 {
        return input;
    }

    let right = input.split_off(input.len() / 2);
    let left = sort_recursive(input, before);
    let right = sort_recursive(right, before);
    merge_with(left, right, before)
}
