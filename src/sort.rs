//! In-place sorting routines over slices.

/// Bubble sort: in-place, ascending, stable. `O(N²)`.
///
/// Each pass swaps adjacent out-of-order pairs, floating the largest
/// unsorted element to the end of the unsorted region. A pass with no
/// swaps means the slice is sorted and the remaining passes are skipped.
///
/// # Examples
///
/// ```
/// use dsa::sort::bubble_sort;
///
/// let mut items = [5, 3, 1, 4, 2];
/// bubble_sort(&mut items);
/// assert_eq!(items, [1, 2, 3, 4, 5]);
/// ```
pub fn bubble_sort<T: Ord>(items: &mut [T]) {
    for pass in 0..items.len() {
        let mut swapped = false;
        for i in 1..items.len() - pass {
            if items[i - 1] > items[i] {
                items.swap(i - 1, i);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}

/// Quick sort: in-place, ascending, using a Lomuto partition with the last
/// element of each range as the pivot. `O(N lg N)` expected, `O(N²)` on
/// adversarial input.
///
/// # Examples
///
/// ```
/// use dsa::sort::quick_sort;
///
/// let mut items = [8, 7, 6, 4, 5];
/// quick_sort(&mut items);
/// assert_eq!(items, [4, 5, 6, 7, 8]);
/// ```
pub fn quick_sort<T: Ord>(items: &mut [T]) {
    if items.len() > 1 {
        sort_range(items, 0, items.len() - 1);
    }
}

fn sort_range<T: Ord>(items: &mut [T], lo: usize, hi: usize) {
    if lo >= hi {
        return;
    }

    let pivot = partition(items, lo, hi);
    // Recurse on both sides, excluding the pivot itself: it is already in
    // its final position.
    if pivot > lo {
        sort_range(items, lo, pivot - 1);
    }
    sort_range(items, pivot + 1, hi);
}

/// Partitions `items[lo..=hi]` around `items[hi]` and returns the pivot's
/// final index. Afterward everything left of that index is `<=` the pivot
/// and everything right of it is `>` the pivot.
fn partition<T: Ord>(items: &mut [T], lo: usize, hi: usize) -> usize {
    // `idx` is one past the region of elements known to be <= the pivot.
    // Each small element found gets swapped into that region, pushing the
    // large elements back.
    let mut idx = lo;
    for i in lo..hi {
        if items[i] <= items[hi] {
            items.swap(i, idx);
            idx += 1;
        }
    }

    // Swap the pivot into the first slot after the small region.
    items.swap(idx, hi);
    idx
}
