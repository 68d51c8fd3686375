use crate::types::Node;

use super::{first, last, next, postorder_first, postorder_next};

/// Borrowing in-order iterator over the node indices of the subtree at
/// `root`. Stops at the subtree's last node rather than climbing past it.
///
/// ```
/// use tml_forest::types::RbNode;
/// use tml_forest::{insert, InOrder};
///
/// let mut arena: Vec<RbNode<i32, ()>> = [3, 1, 2].into_iter().map(|k| RbNode::new(k, ())).collect();
/// let mut root = None;
/// let by_key = |a: &RbNode<i32, ()>, b: &RbNode<i32, ()>| a.k.cmp(&b.k);
/// for i in 0..3 {
///     insert(&mut arena, &mut root, i, &by_key);
/// }
/// let keys: Vec<i32> = InOrder::new(&arena, root).map(|i| arena[i as usize].k).collect();
/// assert_eq!(keys, vec![1, 2, 3]);
/// ```
pub struct InOrder<'a, N> {
    arena: &'a [N],
    curr: Option<u32>,
    end: Option<u32>,
}

impl<'a, N: Node> InOrder<'a, N> {
    pub fn new(arena: &'a [N], root: Option<u32>) -> Self {
        Self {
            arena,
            curr: first(arena, root),
            end: last(arena, root),
        }
    }
}

impl<N: Node> Iterator for InOrder<'_, N> {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        let curr = self.curr?;
        self.curr = if Some(curr) == self.end {
            None
        } else {
            next(self.arena, curr)
        };
        Some(curr)
    }
}

/// Borrowing post-order iterator: children are yielded before their parent,
/// and `root` comes last.
pub struct PostOrder<'a, N> {
    arena: &'a [N],
    curr: Option<u32>,
    root: Option<u32>,
}

impl<'a, N: Node> PostOrder<'a, N> {
    pub fn new(arena: &'a [N], root: Option<u32>) -> Self {
        Self {
            arena,
            curr: postorder_first(arena, root),
            root,
        }
    }
}

impl<N: Node> Iterator for PostOrder<'_, N> {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        let curr = self.curr?;
        self.curr = if Some(curr) == self.root {
            None
        } else {
            postorder_next(self.arena, curr)
        };
        Some(curr)
    }
}
