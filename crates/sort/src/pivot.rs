//! Pivot selection.
//!
//! Both strategies only compare elements; the chosen index is then moved to
//! the midpoint of the range by [`choose_pivot`].

use tml_cmp::Compare;

/// Ranges longer than this use [`ninther`], shorter ones [`median_of_five`].
pub const NINTHER_THRESHOLD: usize = 40;

/// Index of the median of `v[a]`, `v[b]`, `v[c]`.
///
/// Ties resolve towards `b`, so for an all-equal triple `b` is returned.
#[inline]
pub fn median3<T, C>(v: &[T], a: usize, b: usize, c: usize, cmp: &C) -> usize
where
    C: Compare<T> + ?Sized,
{
    if cmp.less(&v[a], &v[b]) {
        if cmp.less(&v[c], &v[b]) {
            if cmp.less(&v[a], &v[c]) {
                c
            } else {
                a
            }
        } else {
            b
        }
    } else if cmp.less(&v[a], &v[c]) {
        a
    } else if cmp.less(&v[b], &v[c]) {
        c
    } else {
        b
    }
}

/// Median of three medians over nine evenly spaced points (stride `n / 8`).
///
/// Requires `v.len() >= 9`.
pub fn ninther<T, C>(v: &[T], cmp: &C) -> usize
where
    C: Compare<T> + ?Sized,
{
    let n = v.len();
    let delta = n / 8;
    let lo = 0;
    let hi = n - 1;
    let a = lo + delta;
    let b = a + delta;
    let c = b + delta;
    let mid = c + delta;
    let d = mid + delta;
    let e = d + delta;
    let f = e + delta;

    let m1 = median3(v, lo, a, b, cmp);
    let m2 = median3(v, c, mid, d, cmp);
    let m3 = median3(v, e, f, hi, cmp);
    median3(v, m1, m2, m3, cmp)
}

/// Median of three over five points: the median of the lower half's
/// endpoints and quarter point is paired with `mid` and `hi`.
///
/// Requires `v.len() >= 4`.
pub fn median_of_five<T, C>(v: &[T], cmp: &C) -> usize
where
    C: Compare<T> + ?Sized,
{
    let n = v.len();
    let delta = n >> 2;
    let lo = 0;
    let mid = n >> 1;
    let hi = n - 1;
    let a = median3(v, lo, lo + delta, mid + delta, cmp);
    median3(v, a, mid, hi, cmp)
}

/// Picks the pivot for `v` and moves it to `v.len() / 2`, returning that
/// index.
pub fn choose_pivot<T, C>(v: &mut [T], cmp: &C) -> usize
where
    C: Compare<T> + ?Sized,
{
    let mid = v.len() >> 1;
    let pivot = if v.len() > NINTHER_THRESHOLD {
        ninther(v, cmp)
    } else {
        median_of_five(v, cmp)
    };
    v.swap(pivot, mid);
    mid
}

#[cfg(test)]
mod tests {
    use super::*;
    use tml_cmp::Natural;

    #[test]
    fn test_median3_all_orders() {
        let perms = [
            [1, 2, 3],
            [1, 3, 2],
            [2, 1, 3],
            [2, 3, 1],
            [3, 1, 2],
            [3, 2, 1],
        ];
        for p in perms {
            let m = median3(&p, 0, 1, 2, &Natural);
            assert_eq!(p[m], 2, "median of {p:?}");
        }
    }

    #[test]
    fn test_median3_ties_prefer_middle_slot() {
        let v = [5, 5, 5];
        assert_eq!(median3(&v, 0, 1, 2, &Natural), 1);
    }

    #[test]
    fn test_ninther_on_sorted_input_hits_middle() {
        let v: Vec<u32> = (0..81).collect();
        let p = ninther(&v, &Natural);
        assert_eq!(v[p], 40);
    }

    #[test]
    fn test_median_of_five_within_bounds() {
        for n in 4..=40 {
            let v: Vec<usize> = (0..n).rev().collect();
            let p = median_of_five(&v, &Natural);
            assert!(p < n);
        }
    }

    #[test]
    fn test_choose_pivot_moves_to_midpoint() {
        let mut v: Vec<i32> = (0..50).rev().collect();
        let mid = choose_pivot(&mut v, &Natural);
        assert_eq!(mid, 25);
        // Ninther on a reversed run picks a central value.
        assert!((15..35).contains(&v[mid]));
    }
}
