use std::cmp::Ordering;

use tml_cmp::Compare;

use crate::error::TreeError;
use crate::types::{Color, Link, Node};
use crate::util::{color, first, get_l, get_p, get_r, is_red, next, set_color, set_l, set_p, set_r};

#[path = "util/print.rs"]
mod print_impl;

pub use print_impl::print;

/// Points whatever referenced `old` (its parent's child slot, or the root
/// handle) at `new`.
#[inline]
fn replace_in_parent<N: Node>(
    arena: &mut [N],
    parent: Option<u32>,
    old: u32,
    new: Option<u32>,
    root: &mut Option<u32>,
) {
    match parent {
        Some(p) => {
            if get_l(arena, p) == Some(old) {
                set_l(arena, p, new);
            } else {
                set_r(arena, p, new);
            }
        }
        None => *root = new,
    }
}

/// Exchanges parent and colour between `a` and `b`.
#[inline]
fn swap_parent_color<N: Node>(arena: &mut [N], a: u32, b: u32) {
    let (ap, ac) = (get_p(arena, a), color(arena, a));
    let (bp, bc) = (get_p(arena, b), color(arena, b));
    set_p(arena, a, bp);
    set_color(arena, a, bc);
    set_p(arena, b, ap);
    set_color(arena, b, ac);
}

/// Left rotation around `a`. The new subtree root takes over `a`'s colour
/// and `a` takes the new root's old colour.
pub fn rotate_left<N: Node>(arena: &mut [N], a: u32, root: &mut Option<u32>) {
    let new_root = get_r(arena, a).expect("rotate_left requires a right child");
    swap_parent_color(arena, a, new_root);
    let parent = get_p(arena, new_root);
    replace_in_parent(arena, parent, a, Some(new_root), root);

    let inner = get_l(arena, new_root);
    set_l(arena, new_root, Some(a));
    set_p(arena, a, Some(new_root));
    set_r(arena, a, inner);
    if let Some(inner) = inner {
        set_p(arena, inner, Some(a));
    }
}

/// Mirror image of [`rotate_left`].
pub fn rotate_right<N: Node>(arena: &mut [N], a: u32, root: &mut Option<u32>) {
    let new_root = get_l(arena, a).expect("rotate_right requires a left child");
    swap_parent_color(arena, a, new_root);
    let parent = get_p(arena, new_root);
    replace_in_parent(arena, parent, a, Some(new_root), root);

    let inner = get_r(arena, new_root);
    set_r(arena, new_root, Some(a));
    set_p(arena, a, Some(new_root));
    set_l(arena, a, inner);
    if let Some(inner) = inner {
        set_p(arena, inner, Some(a));
    }
}

fn assert_detached<N: Node>(arena: &[N], root: Option<u32>, n: u32) {
    assert!(
        root != Some(n) && arena[n as usize].link().is_detached(),
        "node {n} is already linked into a tree"
    );
}

/// Inserts node `n` in unique mode.
///
/// Returns `false`, leaving the tree untouched, when an element comparing
/// equal to `n` is already present.
///
/// # Panics
///
/// If `n` is already linked into a tree.
pub fn insert<N, C>(arena: &mut [N], root: &mut Option<u32>, n: u32, cmp: &C) -> bool
where
    N: Node,
    C: Compare<N> + ?Sized,
{
    assert_detached(arena, *root, n);
    let Some(mut curr) = *root else {
        *root = Some(n);
        fix_insert(arena, root, n, None);
        return true;
    };

    loop {
        let ord = cmp.compare(&arena[n as usize], &arena[curr as usize]);
        let child = match ord {
            Ordering::Less => get_l(arena, curr),
            Ordering::Greater => get_r(arena, curr),
            Ordering::Equal => {
                log::trace!("insert: node {n} duplicates node {curr}, rejected");
                return false;
            }
        };
        match child {
            Some(c) => curr = c,
            None => {
                if ord == Ordering::Less {
                    set_l(arena, curr, Some(n));
                } else {
                    set_r(arena, curr, Some(n));
                }
                fix_insert(arena, root, n, Some(curr));
                return true;
            }
        }
    }
}

/// Inserts node `n` allowing duplicates. Elements comparing equal are
/// ordered by arena index, so a run of equal keys is laid out in index order.
///
/// # Panics
///
/// If `n` is already linked into a tree.
pub fn insert_multi<N, C>(arena: &mut [N], root: &mut Option<u32>, n: u32, cmp: &C) -> bool
where
    N: Node,
    C: Compare<N> + ?Sized,
{
    assert_detached(arena, *root, n);
    let Some(mut curr) = *root else {
        *root = Some(n);
        fix_insert(arena, root, n, None);
        return true;
    };

    loop {
        let ord = cmp
            .compare(&arena[n as usize], &arena[curr as usize])
            .then(n.cmp(&curr));
        let child = match ord {
            Ordering::Less => get_l(arena, curr),
            Ordering::Greater => get_r(arena, curr),
            Ordering::Equal => return false,
        };
        match child {
            Some(c) => curr = c,
            None => {
                if ord == Ordering::Less {
                    set_l(arena, curr, Some(n));
                } else {
                    set_r(arena, curr, Some(n));
                }
                fix_insert(arena, root, n, Some(curr));
                return true;
            }
        }
    }
}

/// Links `n` as a red leaf under `parent` (already pointing at `n`) and
/// restores the colour invariants.
fn fix_insert<N: Node>(arena: &mut [N], root: &mut Option<u32>, n: u32, parent: Option<u32>) {
    *arena[n as usize].link_mut() = Link {
        p: parent,
        ..Link::new()
    };

    let mut node = n;
    loop {
        let Some(parent) = get_p(arena, node) else {
            set_color(arena, node, Color::Black);
            break;
        };
        if color(arena, parent) == Color::Black {
            break;
        }
        // A red parent is never the root.
        let grandparent = get_p(arena, parent).expect("red node has a parent");
        if get_l(arena, grandparent) == Some(parent) {
            if let Some(uncle) = get_r(arena, grandparent) {
                if color(arena, uncle) == Color::Red {
                    set_color(arena, grandparent, Color::Red);
                    set_color(arena, parent, Color::Black);
                    set_color(arena, uncle, Color::Black);
                    node = grandparent;
                    continue;
                }
            }
            if get_r(arena, parent) == Some(node) {
                rotate_left(arena, parent, root);
            }
            rotate_right(arena, grandparent, root);
        } else {
            if let Some(uncle) = get_l(arena, grandparent) {
                if color(arena, uncle) == Color::Red {
                    set_color(arena, grandparent, Color::Red);
                    set_color(arena, parent, Color::Black);
                    set_color(arena, uncle, Color::Black);
                    node = grandparent;
                    continue;
                }
            }
            if get_l(arena, parent) == Some(node) {
                rotate_right(arena, parent, root);
            }
            rotate_left(arena, grandparent, root);
        }
        break;
    }
}

fn assert_member<N: Node>(arena: &[N], root: Option<u32>, n: u32) {
    let linked = match get_p(arena, n) {
        None => root == Some(n),
        Some(p) => get_l(arena, p) == Some(n) || get_r(arena, p) == Some(n),
    };
    assert!(linked, "node {n} is not linked into this tree");
}

/// Puts `child` where `node` was, inheriting its parent and colour.
fn replace_node_with_child<N: Node>(arena: &mut [N], child: u32, node: u32, root: &mut Option<u32>) {
    let parent = get_p(arena, node);
    replace_in_parent(arena, parent, node, Some(child), root);
    set_p(arena, child, parent);
    set_color(arena, child, color(arena, node));
}

/// Unlinks node `n` from the tree. A node with two children is replaced by
/// its in-order successor. The removed node's links are reset.
///
/// # Panics
///
/// If `n` is not linked into the tree rooted at `root`.
pub fn erase<N: Node>(arena: &mut [N], root: &mut Option<u32>, n: u32) -> bool {
    assert_member(arena, *root, n);
    let parent = get_p(arena, n);
    let left = get_l(arena, n);
    let right = get_r(arena, n);

    match (left, right) {
        (None, Some(r)) | (Some(r), None) => replace_node_with_child(arena, r, n, root),
        (None, None) => match parent {
            Some(p) => {
                replace_in_parent(arena, Some(p), n, None, root);
                if color(arena, n) == Color::Black {
                    fix_erase(arena, root, p, None);
                }
            }
            None => *root = None,
        },
        (Some(l), Some(r)) => {
            if get_l(arena, r).is_none() {
                let black = color(arena, r) == Color::Black;
                replace_node_with_child(arena, r, n, root);
                set_l(arena, r, Some(l));
                set_p(arena, l, Some(r));
                match get_r(arena, r) {
                    Some(rr) => set_color(arena, rr, Color::Black),
                    None if black => fix_erase(arena, root, r, None),
                    None => {}
                }
            } else {
                let mut successor = r;
                while let Some(sl) = get_l(arena, successor) {
                    successor = sl;
                }
                let mut black = color(arena, successor) == Color::Black;
                let s_right = get_r(arena, successor);
                let s_parent = get_p(arena, successor).expect("successor has a parent");
                set_l(arena, s_parent, s_right);
                if let Some(sr) = s_right {
                    set_color(arena, sr, Color::Black);
                    set_p(arena, sr, Some(s_parent));
                    black = false;
                }
                replace_node_with_child(arena, successor, n, root);
                set_l(arena, successor, Some(l));
                set_p(arena, l, Some(successor));
                set_r(arena, successor, Some(r));
                set_p(arena, r, Some(successor));
                if black {
                    fix_erase(arena, root, s_parent, None);
                }
            }
        }
    }

    *arena[n as usize].link_mut() = Link::new();
    true
}

/// Restores black height after a black node vanished from under `parent`,
/// on the side currently occupied by `node`.
fn fix_erase<N: Node>(arena: &mut [N], root: &mut Option<u32>, mut parent: u32, mut node: Option<u32>) {
    loop {
        if get_r(arena, parent) != node {
            let mut sibling = get_r(arena, parent).expect("short side has a sibling");
            if color(arena, sibling) == Color::Red {
                rotate_left(arena, parent, root);
                sibling = get_r(arena, parent).expect("short side has a sibling");
            }
            if is_red(arena, get_r(arena, sibling)) {
                let far = get_r(arena, sibling).expect("red nephew");
                set_color(arena, far, Color::Black);
                rotate_left(arena, parent, root);
            } else if is_red(arena, get_l(arena, sibling)) {
                rotate_right(arena, sibling, root);
                rotate_left(arena, parent, root);
                set_color(arena, sibling, Color::Black);
            } else {
                set_color(arena, sibling, Color::Red);
                match get_p(arena, parent) {
                    Some(gp) if color(arena, parent) == Color::Black => {
                        node = Some(parent);
                        parent = gp;
                        continue;
                    }
                    _ => set_color(arena, parent, Color::Black),
                }
            }
        } else {
            let mut sibling = get_l(arena, parent).expect("short side has a sibling");
            if color(arena, sibling) == Color::Red {
                rotate_right(arena, parent, root);
                sibling = get_l(arena, parent).expect("short side has a sibling");
            }
            if is_red(arena, get_l(arena, sibling)) {
                let far = get_l(arena, sibling).expect("red nephew");
                set_color(arena, far, Color::Black);
                rotate_right(arena, parent, root);
            } else if is_red(arena, get_r(arena, sibling)) {
                rotate_left(arena, sibling, root);
                rotate_right(arena, parent, root);
                set_color(arena, sibling, Color::Black);
            } else {
                set_color(arena, sibling, Color::Red);
                match get_p(arena, parent) {
                    Some(gp) if color(arena, parent) == Color::Black => {
                        node = Some(parent);
                        parent = gp;
                        continue;
                    }
                    _ => set_color(arena, parent, Color::Black),
                }
            }
        }
        break;
    }
}

/// Checks every red-black invariant plus in-order sortedness under `cmp`.
pub fn assert_red_black_tree<N, C>(arena: &[N], root: Option<u32>, cmp: &C) -> Result<(), TreeError>
where
    N: Node,
    C: Compare<N> + ?Sized,
{
    let Some(root) = root else {
        return Ok(());
    };

    if get_p(arena, root).is_some() {
        return Err(TreeError::RootHasParent(root));
    }
    if color(arena, root) != Color::Black {
        return Err(TreeError::RootNotBlack(root));
    }

    fn black_height<N: Node>(arena: &[N], node: Option<u32>) -> Result<usize, TreeError> {
        let Some(node) = node else {
            return Ok(0);
        };

        let l = get_l(arena, node);
        let r = get_r(arena, node);
        for child in [l, r].into_iter().flatten() {
            if get_p(arena, child) != Some(node) {
                return Err(TreeError::BrokenParentLink { parent: node, child });
            }
        }

        if color(arena, node) == Color::Red && (is_red(arena, l) || is_red(arena, r)) {
            return Err(TreeError::RedRed(node));
        }

        let left = black_height(arena, l)?;
        let right = black_height(arena, r)?;
        if left != right {
            return Err(TreeError::BlackHeight { node, left, right });
        }

        Ok(left + usize::from(color(arena, node) == Color::Black))
    }

    black_height(arena, Some(root))?;

    let mut prev = match first(arena, Some(root)) {
        Some(i) => i,
        None => return Ok(()),
    };
    let mut curr = next(arena, prev);
    while let Some(i) = curr {
        if cmp.less(&arena[i as usize], &arena[prev as usize]) {
            return Err(TreeError::OutOfOrder(i));
        }
        prev = i;
        curr = next(arena, i);
    }

    Ok(())
}
