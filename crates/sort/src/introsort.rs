use tml_cmp::Compare;

use crate::heap::heapsort;
use crate::insertion::insertion_sort_with;
use crate::options::SortOptions;
use crate::partition::dutch_flag;
use crate::pivot::choose_pivot;
use crate::probe::{micro_reverse, probe_sorted, Probe};

/// Ranges shorter than this are insertion sorted.
pub const SMALL_SORT_THRESHOLD: usize = 17;

/// Capacity of the explicit work stack.
///
/// Only the smaller side of a partition is ever pushed, so every frame
/// covers at most half of the frame below it and the stack never holds more
/// than `log2(len)` entries.
pub const STACK_CAPACITY: usize = 64;

#[derive(Clone, Copy, Debug, Default)]
struct WorkItem {
    start: usize,
    len: usize,
    depth: u32,
}

/// Partitioning depth after which a sub-range is handed to heapsort:
/// `2 * floor(log2(len))`.
#[inline]
pub fn depth_limit(len: usize) -> u32 {
    if len == 0 {
        0
    } else {
        len.ilog2() << 1
    }
}

/// Sorts `v` ascending under `cmp` with the default [`SortOptions`].
pub fn introsort<T, C>(v: &mut [T], cmp: &C)
where
    C: Compare<T> + ?Sized,
{
    introsort_with_options(v, cmp, &SortOptions::default());
}

/// Sorts `v` ascending under `cmp`.
///
/// In place, without heap allocation, not stable. Worst case
/// O(n log n) comparisons.
pub fn introsort_with_options<T, C>(v: &mut [T], cmp: &C, options: &SortOptions)
where
    C: Compare<T> + ?Sized,
{
    let n = v.len();
    if n < SMALL_SORT_THRESHOLD {
        if options.micro_reverse && micro_reverse(v, cmp) {
            return;
        }
        insertion_sort_with(v, cmp);
        return;
    }

    let mut pivot_at_mid = false;
    if options.probe_sorted {
        match probe_sorted(v, cmp) {
            Probe::Ascending => {
                log::trace!("introsort: {n} elements already ascending");
                return;
            }
            Probe::Reversed => {
                log::trace!("introsort: {n} elements were descending, reversed");
                return;
            }
            Probe::PivotAtMid => pivot_at_mid = true,
            Probe::SearchPivot => {}
        }
    }

    partition_loop(v, cmp, depth_limit(n), pivot_at_mid);
}

/// Drives partitioning over an explicit work stack until every sub-range is
/// sorted. With `pivot_at_mid` the first partition uses `v[len / 2]` as its
/// pivot as-is.
fn partition_loop<T, C>(v: &mut [T], cmp: &C, depth_limit: u32, mut pivot_at_mid: bool)
where
    C: Compare<T> + ?Sized,
{
    let mut stack = [WorkItem::default(); STACK_CAPACITY];
    let mut top = 0;
    let mut item = WorkItem {
        start: 0,
        len: v.len(),
        depth: 0,
    };

    loop {
        let range = &mut v[item.start..item.start + item.len];

        if item.len < SMALL_SORT_THRESHOLD {
            insertion_sort_with(range, cmp);
        } else if item.depth >= depth_limit {
            log::trace!(
                "introsort: depth limit {depth_limit} reached, heapsorting {} elements at {}",
                item.len,
                item.start
            );
            heapsort(range, cmp);
        } else {
            let pivot = if pivot_at_mid {
                pivot_at_mid = false;
                item.len >> 1
            } else {
                choose_pivot(range, cmp)
            };
            let (left_len, right_len) = dutch_flag(range, pivot, cmp);

            let left = WorkItem {
                start: item.start,
                len: left_len,
                depth: item.depth + 1,
            };
            let right = WorkItem {
                start: item.start + item.len - right_len,
                len: right_len,
                depth: item.depth + 1,
            };
            let (smaller, larger) = if left_len <= right_len {
                (left, right)
            } else {
                (right, left)
            };

            if smaller.len > 1 {
                assert!(
                    top < STACK_CAPACITY,
                    "introsort work stack overflow at {} frames",
                    STACK_CAPACITY
                );
                stack[top] = smaller;
                top += 1;
            }
            if larger.len > 1 {
                item = larger;
                continue;
            }
        }

        if top == 0 {
            break;
        }
        top -= 1;
        item = stack[top];
    }
}
