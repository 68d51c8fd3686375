//! Cheap sortedness probes run before the partitioning loop starts.
//!
//! Both probes only ever conclude "already in order" or "exactly reversed"
//! after a full linear scan. Sampling exists to bail out early on random
//! input without paying that scan.

use tml_cmp::Compare;

/// Outcome of [`probe_sorted`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Probe {
    /// The range is non-decreasing; nothing left to do.
    Ascending,
    /// The range was non-increasing and has been reversed in place.
    Reversed,
    /// `v[len / 2]` is the median of the first, middle and last elements and
    /// can be used as the first pivot directly.
    PivotAtMid,
    /// No usable pivot information; run the regular pivot selection.
    SearchPivot,
}

/// Number of sample buckets for a range of `n` elements.
#[inline]
pub fn sample_buckets(n: usize) -> usize {
    if n < 40 {
        8
    } else if n < 1000 {
        12
    } else if n < 1_000_000 {
        14
    } else {
        16
    }
}

/// Detects a fully ascending or fully descending range.
///
/// Compares the first, middle and last elements, then pairs of evenly
/// spaced sample points, then every neighbour pair. A descending range is
/// reversed in place. Expects `v.len() >= 2`.
pub fn probe_sorted<T, C>(v: &mut [T], cmp: &C) -> Probe
where
    C: Compare<T> + ?Sized,
{
    let n = v.len();
    let lo = 0;
    let mid = n >> 1;
    let hi = n - 1;
    let delta = (n / sample_buckets(n)).max(1);

    if !cmp.less(&v[hi], &v[lo]) {
        if cmp.less(&v[hi], &v[mid]) || cmp.less(&v[mid], &v[lo]) {
            return Probe::SearchPivot;
        }
        let mut x = lo;
        while x + delta < n {
            if cmp.less(&v[x + delta], &v[x]) {
                return Probe::PivotAtMid;
            }
            x += delta;
        }
        for i in 1..n {
            if cmp.less(&v[i], &v[i - 1]) {
                return Probe::PivotAtMid;
            }
        }
        Probe::Ascending
    } else {
        if cmp.less(&v[lo], &v[mid]) || cmp.less(&v[mid], &v[hi]) {
            return Probe::SearchPivot;
        }
        let mut x = lo;
        while x + delta < n {
            if cmp.less(&v[x], &v[x + delta]) {
                return Probe::PivotAtMid;
            }
            x += delta;
        }
        for i in 1..n {
            if cmp.less(&v[i - 1], &v[i]) {
                return Probe::PivotAtMid;
            }
        }
        v.reverse();
        Probe::Reversed
    }
}

/// Reverses a short, fully non-increasing range in place.
///
/// Only ranges with more than 7 elements are considered (the probe points
/// are offsets 0, 2, 4, 6 and the last element). Returns `true` when the
/// range was reversed, leaving it sorted.
pub fn micro_reverse<T, C>(v: &mut [T], cmp: &C) -> bool
where
    C: Compare<T> + ?Sized,
{
    let n = v.len();
    if n <= 7 {
        return false;
    }
    let last = n - 1;
    if !cmp.less(&v[last], &v[0]) {
        return false;
    }
    for x in [0, 2, 4] {
        if cmp.less(&v[x], &v[x + 2]) {
            return false;
        }
    }
    if cmp.less(&v[6], &v[last]) {
        return false;
    }
    for i in (1..n).rev() {
        if cmp.less(&v[i - 1], &v[i]) {
            return false;
        }
    }
    v.reverse();
    true
}
