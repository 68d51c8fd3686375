//! tml-sort - allocation-free, in-place introsort.
//!
//! The engine sorts a caller-owned slice under any
//! [`Compare`](tml_cmp::Compare) implementation:
//!
//! - short ranges (< [`SMALL_SORT_THRESHOLD`]) are insertion sorted, with an
//!   optional O(n) exit for exactly reversed input;
//! - longer ranges are probed for ascending / descending order, then
//!   partitioned three ways around a ninther (or median-of-five) pivot;
//! - the smaller partition goes onto a fixed [`STACK_CAPACITY`]-frame stack
//!   while work continues on the larger one, so there is no recursion;
//! - a sub-range whose depth reaches `2 * floor(log2(n))` is heapsorted,
//!   bounding the worst case at O(n log n).
//!
//! Equal elements may be reordered.
//!
//! ```
//! let mut v = [5, 4, 3, 1, 2];
//! tml_sort::sort(&mut v);
//! assert_eq!(v, [1, 2, 3, 4, 5]);
//! ```

mod heap;
mod insertion;
mod introsort;
mod options;
pub mod partition;
pub mod pivot;
pub mod probe;
mod verify;

use std::cmp::Ordering;

use tml_cmp::{Less, Natural};

pub use heap::heapsort;
pub use insertion::{insertion_sort, insertion_sort_by, insertion_sort_by_key, insertion_sort_with};
pub use introsort::{depth_limit, introsort, introsort_with_options, SMALL_SORT_THRESHOLD, STACK_CAPACITY};
pub use options::SortOptions;
pub use verify::{is_sorted_with, verify_sorted, SortError};

/// Sorts `v` by `T: Ord`.
pub fn sort<T: Ord>(v: &mut [T]) {
    introsort(v, &Natural);
}

/// Sorts `v` with a three-way comparator closure.
///
/// ```
/// let mut v = vec![1, 5, 2, 4, 3];
/// tml_sort::sort_by(&mut v, |a, b| b.cmp(a));
/// assert_eq!(v, vec![5, 4, 3, 2, 1]);
/// ```
pub fn sort_by<T, F>(v: &mut [T], compare: F)
where
    F: Fn(&T, &T) -> Ordering,
{
    introsort(v, &compare);
}

/// Sorts `v` with a boolean less-than closure.
///
/// ```
/// let mut v = vec![5, 4, 3, 1, 2];
/// tml_sort::sort_by_less(&mut v, |a, b| a < b);
/// assert_eq!(v, vec![1, 2, 3, 4, 5]);
/// ```
pub fn sort_by_less<T, F>(v: &mut [T], less: F)
where
    F: Fn(&T, &T) -> bool,
{
    introsort(v, &Less(less));
}

/// Sorts `v` by a derived key. The key function runs on every comparison.
pub fn sort_by_key<T, K, F>(v: &mut [T], key: F)
where
    K: Ord,
    F: Fn(&T) -> K,
{
    introsort(v, &|a: &T, b: &T| key(a).cmp(&key(b)));
}

/// Sorts `v` with a comparator that receives a shared context value.
///
/// ```
/// let weights = [30, 10, 20];
/// let mut ids = vec![0usize, 1, 2];
/// tml_sort::sort_with_arg(&mut ids, |a, b, w: &[i32; 3]| w[*a].cmp(&w[*b]), &weights);
/// assert_eq!(ids, vec![1, 2, 0]);
/// ```
pub fn sort_with_arg<T, A, F>(v: &mut [T], compare: F, arg: &A)
where
    A: ?Sized,
    F: Fn(&T, &T, &A) -> Ordering,
{
    introsort(v, &|a: &T, b: &T| compare(a, b, arg));
}
