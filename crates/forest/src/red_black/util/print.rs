use std::fmt::Debug;

use crate::types::{Color, Node};

/// Renders the subtree under `node` for debugging, one node per line with
/// its index, colour and whatever `label` extracts from the element.
pub fn print<N, F, D>(arena: &[N], node: Option<u32>, tab: &str, label: &F) -> String
where
    N: Node,
    F: Fn(&N) -> D,
    D: Debug,
{
    match node {
        None => "∅".to_string(),
        Some(i) => {
            let n = &arena[i as usize];
            let color = match n.color() {
                Color::Red => "red",
                Color::Black => "black",
            };
            let child_tab = format!("{tab}  ");
            let left = print(arena, n.l(), &child_tab, label);
            let right = print(arena, n.r(), &child_tab, label);
            format!("Node[{i}] {color} {:?}\n{tab}L={left}\n{tab}R={right}", label(n))
        }
    }
}
