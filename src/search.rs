//! Search routines over slices.

use std::cmp::Ordering;

/// Binary search over a slice sorted in ascending order, returning whether
/// the target occurs in it. `O(lg N)`.
///
/// The usual lo/hi/mid narrowing, with a half-open upper bound so the
/// bounds never underflow.
///
/// The slice must already be sorted; the result is meaningless otherwise.
///
/// # Examples
///
/// ```
/// use dsa::search::binary_search;
///
/// let sorted = [1, 3, 5, 8];
///
/// assert!(binary_search(&sorted, &5));
/// assert!(!binary_search(&sorted, &4));
/// ```
pub fn binary_search<T: Ord>(sorted: &[T], target: &T) -> bool {
    let mut lo = 0;
    let mut hi = sorted.len();

    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        match sorted[mid].cmp(target) {
            Ordering::Equal => return true,
            Ordering::Less => lo = mid + 1,
            Ordering::Greater => hi = mid,
        }
    }

    false
}

/// Linear scan over a slice, returning whether the target occurs in it.
/// Stops at the first match; `O(N)`.
///
/// The scan covers the whole slice, last element included.
///
/// # Examples
///
/// ```
/// use dsa::search::linear_search;
///
/// assert!(linear_search(&[3, 1, 2], &2));
/// assert!(!linear_search(&[3, 1, 2], &4));
/// ```
pub fn linear_search<T: PartialEq>(items: &[T], target: &T) -> bool {
    items.iter().any(|item| item == target)
}
