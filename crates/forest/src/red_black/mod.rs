//! Red-black tree engine: insertion, erasure, rotations, validation and a
//! debug printer over an arena of [`Node`](crate::types::Node)s.

pub mod util;

pub use util::{assert_red_black_tree, erase, insert, insert_multi, print, rotate_left, rotate_right};
