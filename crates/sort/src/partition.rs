//! Three-way (dutch-flag) partitioning.
//!
//! Bentley–McIlroy layout: while scanning, keys equal to the pivot are
//! parked at both ends of the range and swapped into the middle once the
//! scan is done. The equal block is excluded from further work, which keeps
//! inputs with heavy duplicate runs linear per level.

use tml_cmp::Compare;

/// Partitions `v` around the element at `pivot`.
///
/// Returns `(left_len, right_len)`: afterwards `v[..left_len]` holds the
/// elements less than the pivot, `v[v.len() - right_len..]` those greater
/// than it, and everything in between is equal to it.
///
/// `v` must not be empty.
pub fn dutch_flag<T, C>(v: &mut [T], pivot: usize, cmp: &C) -> (usize, usize)
where
    C: Compare<T> + ?Sized,
{
    let n = v.len();
    v.swap(0, pivot);

    // v[0..a] == p, v[a..b] < p, v[c + 1..=d] > p, v[d + 1..] == p
    let mut a = 1;
    let mut b = 1;
    let mut c = n - 1;
    let mut d = n - 1;
    loop {
        while b <= c && !cmp.less(&v[0], &v[b]) {
            if !cmp.less(&v[b], &v[0]) {
                v.swap(a, b);
                a += 1;
            }
            b += 1;
        }
        while c >= b && !cmp.less(&v[c], &v[0]) {
            if !cmp.less(&v[0], &v[c]) {
                v.swap(c, d);
                d -= 1;
            }
            c -= 1;
        }
        if b > c {
            break;
        }
        v.swap(b, c);
        b += 1;
        c -= 1;
    }

    let s = a.min(b - a);
    swap_blocks(v, 0, b - s, s);
    let s = (d - c).min(n - 1 - d);
    swap_blocks(v, b, n - s, s);

    (b - a, d - c)
}

/// Swaps `v[x..x + len]` with `v[y..y + len]` element by element.
#[inline]
fn swap_blocks<T>(v: &mut [T], x: usize, y: usize, len: usize) {
    for i in 0..len {
        v.swap(x + i, y + i);
    }
}
