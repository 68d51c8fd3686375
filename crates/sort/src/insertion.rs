use std::cmp::Ordering;

use tml_cmp::{Compare, Natural};

/// Insertion sort for slices with natural ordering.
///
/// Used by the introsort driver for every range shorter than
/// [`SMALL_SORT_THRESHOLD`](crate::SMALL_SORT_THRESHOLD).
///
/// An ordered run costs one comparison per element and no swaps; anything
/// else is quadratic, so callers keep ranges short.
///
/// ```
/// use tml_sort::insertion_sort;
///
/// let mut leftovers = vec![12, -4, 7, 7, 0];
/// insertion_sort(&mut leftovers);
/// assert_eq!(leftovers, vec![-4, 0, 7, 7, 12]);
/// ```
pub fn insertion_sort<T: Ord>(arr: &mut [T]) {
    insertion_sort_with(arr, &Natural);
}

/// Insertion sort with a custom three-way comparator closure.
///
/// # Examples
///
/// ```
/// use tml_sort::insertion_sort_by;
///
/// let mut words = vec!["pear", "fig", "banana"];
/// insertion_sort_by(&mut words, |a, b| a.len().cmp(&b.len()));
/// assert_eq!(words, vec!["fig", "pear", "banana"]);
/// ```
pub fn insertion_sort_by<T, F>(arr: &mut [T], compare: F)
where
    F: Fn(&T, &T) -> Ordering,
{
    insertion_sort_with(arr, &compare);
}

/// Insertion sort with a key extraction function.
///
/// # Examples
///
/// ```
/// use tml_sort::insertion_sort_by_key;
///
/// let mut arr = vec!["banana", "apple", "cherry"];
/// insertion_sort_by_key(&mut arr, |s| s.len());
/// assert_eq!(arr, vec!["apple", "banana", "cherry"]);
/// ```
pub fn insertion_sort_by_key<T, K, F>(arr: &mut [T], key: F)
where
    K: Ord,
    F: Fn(&T) -> K,
{
    insertion_sort_with(arr, &|a: &T, b: &T| key(a).cmp(&key(b)));
}

/// Insertion sort over any [`Compare`] implementation.
///
/// Each element sinks left while it is strictly less than its neighbour, so
/// equal elements never cross each other here.
pub fn insertion_sort_with<T, C>(arr: &mut [T], cmp: &C)
where
    C: Compare<T> + ?Sized,
{
    let len = arr.len();
    for i in 1..len {
        let mut j = i;
        while j > 0 && cmp.less(&arr[j], &arr[j - 1]) {
            arr.swap(j - 1, j);
            j -= 1;
        }
    }
}
