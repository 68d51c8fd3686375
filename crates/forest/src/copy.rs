use crate::types::{Link, Node};
use crate::util::{get_l, get_p, get_r, set_l, set_r};

fn clone_one<N, M, F>(src: &[N], dst: &mut Vec<M>, s: u32, parent: Option<u32>, duplicate: &mut F) -> u32
where
    N: Node,
    M: Node,
    F: FnMut(&mut Vec<M>, u32, &N) -> u32,
{
    let node = &src[s as usize];
    let d = duplicate(dst, s, node);
    *dst[d as usize].link_mut() = Link {
        p: parent,
        l: None,
        r: None,
        color: node.color(),
    };
    d
}

/// Copies the tree under `root` into `dst`, node by node in pre-order, and
/// returns the new root. Shape and colours are reproduced exactly.
///
/// `duplicate(dst, src_index, src_node)` stores a copy of `src_node` in `dst`
/// and returns its index there; its link is overwritten afterwards.
///
/// ```
/// use tml_forest::types::RbNode;
/// use tml_forest::{copy, insert, InOrder};
///
/// let mut src: Vec<RbNode<u8, ()>> = (0..5).map(|k| RbNode::new(k, ())).collect();
/// let mut root = None;
/// for i in 0..5 {
///     insert(&mut src, &mut root, i, &|a: &RbNode<u8, ()>, b: &RbNode<u8, ()>| a.k.cmp(&b.k));
/// }
///
/// let mut dst: Vec<RbNode<String, ()>> = Vec::new();
/// let copied = copy(&src, root, &mut dst, |dst, _, n| {
///     dst.push(RbNode::new(n.k.to_string(), ()));
///     (dst.len() - 1) as u32
/// });
/// let keys: Vec<&str> = InOrder::new(&dst, copied).map(|i| dst[i as usize].k.as_str()).collect();
/// assert_eq!(keys, ["0", "1", "2", "3", "4"]);
/// ```
pub fn copy<N, M, F>(src: &[N], root: Option<u32>, dst: &mut Vec<M>, mut duplicate: F) -> Option<u32>
where
    N: Node,
    M: Node,
    F: FnMut(&mut Vec<M>, u32, &N) -> u32,
{
    let root = root?;
    let new_root = clone_one(src, dst, root, None, &mut duplicate);

    let (mut s, mut d) = (root, new_root);
    loop {
        if let (Some(sl), None) = (get_l(src, s), get_l(dst, d)) {
            let dl = clone_one(src, dst, sl, Some(d), &mut duplicate);
            set_l(dst, d, Some(dl));
            (s, d) = (sl, dl);
            continue;
        }
        if let (Some(sr), None) = (get_r(src, s), get_r(dst, d)) {
            let dr = clone_one(src, dst, sr, Some(d), &mut duplicate);
            set_r(dst, d, Some(dr));
            (s, d) = (sr, dr);
            continue;
        }
        if s == root {
            break;
        }
        s = get_p(src, s).expect("non-root node has a parent");
        d = get_p(dst, d).expect("copied node has a parent");
    }

    Some(new_root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::red_black::insert;
    use crate::types::{Color, RbNode};

    #[test]
    fn test_copy_empty() {
        let src: Vec<Link> = vec![];
        let mut dst: Vec<Link> = vec![];
        let mut calls = 0;
        let out = copy(&src, None, &mut dst, |_, _, _| {
            calls += 1;
            0
        });
        assert_eq!(out, None);
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_copy_visits_in_preorder() {
        let mut src: Vec<RbNode<i32, ()>> = (0..7).map(|k| RbNode::new(k, ())).collect();
        let mut root = None;
        for i in [3, 1, 5, 0, 2, 4, 6] {
            insert(&mut src, &mut root, i, &|a: &RbNode<i32, ()>, b: &RbNode<i32, ()>| a.k.cmp(&b.k));
        }

        let mut order = vec![];
        let mut dst: Vec<Link> = vec![];
        copy(&src, root, &mut dst, |dst, s, _| {
            order.push(s);
            dst.push(Link::new());
            (dst.len() - 1) as u32
        });
        assert_eq!(order, vec![3, 1, 0, 2, 5, 4, 6]);
        assert_eq!(dst[0].color, Color::Black);
    }
}
