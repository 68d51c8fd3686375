//! Key lookups. Every function takes a probe key `&Q` and a
//! [`KeyCompare<Q, N>`] ordering the probe against elements, and returns the
//! matching node index.

use std::cmp::Ordering;

use tml_cmp::KeyCompare;

use crate::types::Node;

#[inline]
fn compare_at<Q, N, C>(arena: &[N], key: &Q, idx: u32, cmp: &C) -> Ordering
where
    Q: ?Sized,
    C: KeyCompare<Q, N> + ?Sized,
{
    cmp.compare_key(key, &arena[idx as usize])
}

/// Any node equal to `key`.
pub fn find<Q, N, C>(arena: &[N], root: Option<u32>, key: &Q, cmp: &C) -> Option<u32>
where
    Q: ?Sized,
    N: Node,
    C: KeyCompare<Q, N> + ?Sized,
{
    let mut curr = root;
    while let Some(i) = curr {
        curr = match compare_at(arena, key, i, cmp) {
            Ordering::Less => arena[i as usize].l(),
            Ordering::Greater => arena[i as usize].r(),
            Ordering::Equal => return Some(i),
        };
    }
    None
}

/// Smallest node not less than `key`.
pub fn lower_bound<Q, N, C>(arena: &[N], root: Option<u32>, key: &Q, cmp: &C) -> Option<u32>
where
    Q: ?Sized,
    N: Node,
    C: KeyCompare<Q, N> + ?Sized,
{
    let mut res = None;
    let mut curr = root;
    while let Some(i) = curr {
        if compare_at(arena, key, i, cmp) != Ordering::Greater {
            res = Some(i);
            curr = arena[i as usize].l();
        } else {
            curr = arena[i as usize].r();
        }
    }
    res
}

/// Smallest node strictly greater than `key`.
pub fn upper_bound<Q, N, C>(arena: &[N], root: Option<u32>, key: &Q, cmp: &C) -> Option<u32>
where
    Q: ?Sized,
    N: Node,
    C: KeyCompare<Q, N> + ?Sized,
{
    let mut res = None;
    let mut curr = root;
    while let Some(i) = curr {
        if compare_at(arena, key, i, cmp) == Ordering::Less {
            res = Some(i);
            curr = arena[i as usize].l();
        } else {
            curr = arena[i as usize].r();
        }
    }
    res
}

/// Leftmost node equal to `key`.
pub fn first<Q, N, C>(arena: &[N], root: Option<u32>, key: &Q, cmp: &C) -> Option<u32>
where
    Q: ?Sized,
    N: Node,
    C: KeyCompare<Q, N> + ?Sized,
{
    lower_bound(arena, root, key, cmp).filter(|&i| compare_at(arena, key, i, cmp) == Ordering::Equal)
}

/// Rightmost node equal to `key`.
pub fn last<Q, N, C>(arena: &[N], root: Option<u32>, key: &Q, cmp: &C) -> Option<u32>
where
    Q: ?Sized,
    N: Node,
    C: KeyCompare<Q, N> + ?Sized,
{
    let mut res = None;
    let mut curr = root;
    while let Some(i) = curr {
        if compare_at(arena, key, i, cmp) == Ordering::Less {
            curr = arena[i as usize].l();
        } else {
            res = Some(i);
            curr = arena[i as usize].r();
        }
    }
    res.filter(|&i| compare_at(arena, key, i, cmp) == Ordering::Equal)
}

/// Rightmost node equal to `key`, otherwise the largest node less than it.
pub fn floor<Q, N, C>(arena: &[N], root: Option<u32>, key: &Q, cmp: &C) -> Option<u32>
where
    Q: ?Sized,
    N: Node,
    C: KeyCompare<Q, N> + ?Sized,
{
    let mut below = None;
    let mut equal = None;
    let mut curr = root;
    while let Some(i) = curr {
        match compare_at(arena, key, i, cmp) {
            Ordering::Less => curr = arena[i as usize].l(),
            Ordering::Greater => {
                below = Some(i);
                curr = arena[i as usize].r();
            }
            Ordering::Equal => {
                equal = Some(i);
                curr = arena[i as usize].r();
            }
        }
    }
    equal.or(below)
}

/// Leftmost node equal to `key`, otherwise the smallest node greater than it.
pub fn ceiling<Q, N, C>(arena: &[N], root: Option<u32>, key: &Q, cmp: &C) -> Option<u32>
where
    Q: ?Sized,
    N: Node,
    C: KeyCompare<Q, N> + ?Sized,
{
    let mut above = None;
    let mut equal = None;
    let mut curr = root;
    while let Some(i) = curr {
        match compare_at(arena, key, i, cmp) {
            Ordering::Greater => curr = arena[i as usize].r(),
            Ordering::Less => {
                above = Some(i);
                curr = arena[i as usize].l();
            }
            Ordering::Equal => {
                equal = Some(i);
                curr = arena[i as usize].l();
            }
        }
    }
    equal.or(above)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::red_black::insert;
    use crate::types::RbNode;

    type N = RbNode<i32, ()>;

    fn key_cmp(k: &i32, n: &N) -> Ordering {
        k.cmp(&n.k)
    }

    fn odd_tree() -> (Vec<N>, Option<u32>) {
        let mut arena: Vec<N> = [1, 3, 5, 7].into_iter().map(|k| RbNode::new(k, ())).collect();
        let mut root = None;
        for i in 0..4 {
            insert(&mut arena, &mut root, i, &|a: &N, b: &N| a.k.cmp(&b.k));
        }
        (arena, root)
    }

    fn key_of(arena: &[N], idx: Option<u32>) -> Option<i32> {
        idx.map(|i| arena[i as usize].k)
    }

    #[test]
    fn test_bounds_on_odd_keys() {
        let (arena, root) = odd_tree();
        let q = |idx: Option<u32>| key_of(&arena, idx);
        assert_eq!(q(find(&arena, root, &4, &key_cmp)), None);
        assert_eq!(q(find(&arena, root, &5, &key_cmp)), Some(5));
        assert_eq!(q(lower_bound(&arena, root, &4, &key_cmp)), Some(5));
        assert_eq!(q(lower_bound(&arena, root, &5, &key_cmp)), Some(5));
        assert_eq!(q(lower_bound(&arena, root, &8, &key_cmp)), None);
        assert_eq!(q(upper_bound(&arena, root, &5, &key_cmp)), Some(7));
        assert_eq!(q(upper_bound(&arena, root, &0, &key_cmp)), Some(1));
        assert_eq!(q(upper_bound(&arena, root, &7, &key_cmp)), None);
        assert_eq!(q(floor(&arena, root, &5, &key_cmp)), Some(5));
        assert_eq!(q(floor(&arena, root, &4, &key_cmp)), Some(3));
        assert_eq!(q(floor(&arena, root, &0, &key_cmp)), None);
        assert_eq!(q(ceiling(&arena, root, &4, &key_cmp)), Some(5));
        assert_eq!(q(ceiling(&arena, root, &7, &key_cmp)), Some(7));
        assert_eq!(q(ceiling(&arena, root, &8, &key_cmp)), None);
        assert_eq!(q(first(&arena, root, &3, &key_cmp)), Some(3));
        assert_eq!(q(last(&arena, root, &2, &key_cmp)), None);
    }

    #[test]
    fn test_empty_tree() {
        let arena: Vec<N> = vec![];
        assert_eq!(find(&arena, None, &1, &key_cmp), None);
        assert_eq!(lower_bound(&arena, None, &1, &key_cmp), None);
        assert_eq!(floor(&arena, None, &1, &key_cmp), None);
    }
}
