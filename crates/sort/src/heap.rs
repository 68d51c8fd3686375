use tml_cmp::Compare;

/// Sorts `v` with heapsort, which guarantees *O*(*n* \* log(*n*)) worst-case.
///
/// This is the fallback for sub-ranges whose partitioning depth exceeded the
/// introsort depth limit. It is kept out of line because it is not expected
/// to run on well-behaved input.
#[inline(never)]
pub fn heapsort<T, C>(v: &mut [T], cmp: &C)
where
    C: Compare<T> + ?Sized,
{
    // Build the heap in linear time.
    for i in (0..v.len() / 2).rev() {
        sift_down(v, i, cmp);
    }

    // Pop maximal elements from the heap.
    for i in (1..v.len()).rev() {
        v.swap(0, i);
        sift_down(&mut v[..i], 0, cmp);
    }
}

// Max-heap: `parent >= child`.
fn sift_down<T, C>(v: &mut [T], mut node: usize, cmp: &C)
where
    C: Compare<T> + ?Sized,
{
    loop {
        let mut child = 2 * node + 1;
        if child >= v.len() {
            break;
        }

        if child + 1 < v.len() && cmp.less(&v[child], &v[child + 1]) {
            child += 1;
        }

        if !cmp.less(&v[node], &v[child]) {
            break;
        }

        v.swap(node, child);
        node = child;
    }
}
