//! tml-forest - intrusive, arena-indexed red-black trees.
//!
//! Elements live in a caller-owned slice and embed a [`Link`]; every
//! "pointer" is an `Option<u32>` index into that slice and the caller holds
//! the root handle. The engine never allocates: it only rewires links.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`types`] | [`Color`], [`Link`], the [`Node`] trait, a ready-made [`RbNode`] |
//! [`red_black`] | `insert`, `insert_multi`, `erase`, rotations, validation, `print` |
//! [`search`] | `find`, `first`, `last`, `lower_bound`, `upper_bound`, `floor`, `ceiling` |
//! [`util`] | `first`, `last`, `next`, `prev`, post-order walk, `size`, iterators |
//! [`copy`](mod@copy) | structural copy into another arena |
//! [`string_map`] | [`CaseInsensitiveMap`] |
//!
//! ```
//! use tml_forest::types::RbNode;
//! use tml_forest::{erase, insert, InOrder};
//!
//! let mut arena: Vec<RbNode<i32, ()>> = [5, 4, 3, 1, 2].into_iter().map(|k| RbNode::new(k, ())).collect();
//! let by_key = |a: &RbNode<i32, ()>, b: &RbNode<i32, ()>| a.k.cmp(&b.k);
//! let mut root = None;
//! for i in 0..5 {
//!     assert!(insert(&mut arena, &mut root, i, &by_key));
//! }
//! erase(&mut arena, &mut root, 2);
//! let keys: Vec<i32> = InOrder::new(&arena, root).map(|i| arena[i as usize].k).collect();
//! assert_eq!(keys, vec![1, 2, 4, 5]);
//! ```

pub mod copy;
pub mod error;
pub mod red_black;
pub mod search;
pub mod string_map;
pub mod types;
pub mod util;

pub use copy::copy;
pub use error::TreeError;
pub use red_black::{assert_red_black_tree, erase, insert, insert_multi, print};
pub use search::{ceiling, find, floor, lower_bound, upper_bound};
pub use string_map::CaseInsensitiveMap;
pub use types::{Color, Link, Node, RbNode};
pub use util::{first, last, next, postorder_first, postorder_next, prev, size, InOrder, PostOrder};
