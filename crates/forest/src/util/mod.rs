//! Link-walking helpers shared by every tree operation.
//!
//! Nothing in here compares keys: these functions only follow `p` / `l` / `r`
//! links, so they work on any arena of [`Node`]s regardless of ordering.

pub mod iter;

use crate::types::{Color, Node};

pub use iter::{InOrder, PostOrder};

#[inline]
pub(crate) fn get_p<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].p()
}

#[inline]
pub(crate) fn get_l<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].l()
}

#[inline]
pub(crate) fn get_r<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].r()
}

#[inline]
pub(crate) fn set_p<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_p(v);
}

#[inline]
pub(crate) fn set_l<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_l(v);
}

#[inline]
pub(crate) fn set_r<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_r(v);
}

#[inline]
pub(crate) fn color<N: Node>(arena: &[N], idx: u32) -> Color {
    arena[idx as usize].color()
}

#[inline]
pub(crate) fn set_color<N: Node>(arena: &mut [N], idx: u32, c: Color) {
    arena[idx as usize].set_color(c);
}

/// `true` for a red node; an absent child counts as black.
#[inline]
pub(crate) fn is_red<N: Node>(arena: &[N], idx: Option<u32>) -> bool {
    idx.is_some_and(|i| color(arena, i) == Color::Red)
}

/// Leftmost node in the tree.
pub fn first<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(l) = get_l(arena, curr) {
        curr = l;
    }
    Some(curr)
}

/// Rightmost node in the tree.
pub fn last<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(r) = get_r(arena, curr) {
        curr = r;
    }
    Some(curr)
}

/// In-order successor.
pub fn next<N: Node>(arena: &[N], mut curr: u32) -> Option<u32> {
    if let Some(r) = get_r(arena, curr) {
        let mut c = r;
        while let Some(l) = get_l(arena, c) {
            c = l;
        }
        return Some(c);
    }
    let mut p = get_p(arena, curr);
    while let Some(pi) = p {
        if get_r(arena, pi) == Some(curr) {
            curr = pi;
            p = get_p(arena, pi);
        } else {
            return Some(pi);
        }
    }
    None
}

/// In-order predecessor.
pub fn prev<N: Node>(arena: &[N], mut curr: u32) -> Option<u32> {
    if let Some(l) = get_l(arena, curr) {
        let mut c = l;
        while let Some(r) = get_r(arena, c) {
            c = r;
        }
        return Some(c);
    }
    let mut p = get_p(arena, curr);
    while let Some(pi) = p {
        if get_l(arena, pi) == Some(curr) {
            curr = pi;
            p = get_p(arena, pi);
        } else {
            return Some(pi);
        }
    }
    None
}

fn left_deepest<N: Node>(arena: &[N], mut curr: u32) -> u32 {
    loop {
        if let Some(l) = get_l(arena, curr) {
            curr = l;
        } else if let Some(r) = get_r(arena, curr) {
            curr = r;
        } else {
            return curr;
        }
    }
}

/// First node in post-order (children before parents).
pub fn postorder_first<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    root.map(|r| left_deepest(arena, r))
}

/// Post-order successor. The root is visited last.
///
/// Never reads nodes that precede `curr` in post-order, so a caller tearing
/// a tree down may reset each node's link once its successor is known.
pub fn postorder_next<N: Node>(arena: &[N], curr: u32) -> Option<u32> {
    let p = get_p(arena, curr)?;
    if get_l(arena, p) == Some(curr) {
        if let Some(r) = get_r(arena, p) {
            return Some(left_deepest(arena, r));
        }
    }
    Some(p)
}

fn size_inner<N: Node>(arena: &[N], root: u32) -> usize {
    1 + get_l(arena, root).map_or(0, |l| size_inner(arena, l))
        + get_r(arena, root).map_or(0, |r| size_inner(arena, r))
}

/// Number of nodes under `root`.
pub fn size<N: Node>(arena: &[N], root: Option<u32>) -> usize {
    root.map_or(0, |r| size_inner(arena, r))
}
