use std::cmp::Ordering;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;
use tml_forest::red_black::{assert_red_black_tree, erase, insert, insert_multi};
use tml_forest::search::{find, first, last};
use tml_forest::types::{Link, RbNode};
use tml_forest::util::{size, InOrder};

type N = RbNode<i32, i32>;

fn rb_cmp(a: &N, b: &N) -> Ordering {
    a.k.cmp(&b.k)
}

fn rb_key(k: &i32, n: &N) -> Ordering {
    k.cmp(&n.k)
}

fn insert_value(arena: &mut Vec<N>, root: &mut Option<u32>, value: i32) -> bool {
    arena.push(RbNode::new(value, value));
    let idx = (arena.len() - 1) as u32;
    let inserted = insert(arena, root, idx, &rb_cmp);
    if let Err(err) = assert_red_black_tree(arena, *root, &rb_cmp) {
        panic!("invalid red-black tree after insert({value}): {err}");
    }
    inserted
}

fn delete_value(arena: &mut [N], root: &mut Option<u32>, value: i32) -> bool {
    let Some(idx) = find(arena, *root, &value, &rb_key) else {
        return false;
    };
    erase(arena, root, idx);
    if let Err(err) = assert_red_black_tree(arena, *root, &rb_cmp) {
        panic!("invalid red-black tree after delete({value}): {err}");
    }
    true
}

fn keys(arena: &[N], root: Option<u32>) -> Vec<i32> {
    InOrder::new(arena, root).map(|i| arena[i as usize].k).collect()
}

fn links(arena: &[N]) -> Vec<Link> {
    arena.iter().map(|n| n.link).collect()
}

#[test]
fn rb_util_scenario_b_matrix() {
    let mut arena = Vec::new();
    let mut root = None;
    for value in [5, 4, 3, 1, 2] {
        assert!(insert_value(&mut arena, &mut root, value));
    }
    assert_eq!(keys(&arena, root), vec![1, 2, 3, 4, 5]);

    assert!(delete_value(&mut arena, &mut root, 3));
    assert_eq!(keys(&arena, root), vec![1, 2, 4, 5]);
}

#[test]
fn rb_util_insert_delete_various_numbers_matrix() {
    let mut arena = Vec::new();
    let mut root = None;

    for value in [10, 11, 12, 50, 60, 25, 100, 88, 33, 22, 55, 59, 51] {
        insert_value(&mut arena, &mut root, value);
    }
    assert_eq!(size(&arena, root), 13);

    delete_value(&mut arena, &mut root, 100);
    assert_eq!(size(&arena, root), 12);

    assert!(delete_value(&mut arena, &mut root, 33));
    assert!(!delete_value(&mut arena, &mut root, 33));
    assert_eq!(size(&arena, root), 11);

    for value in [10, 60, 22] {
        delete_value(&mut arena, &mut root, value);
    }
    assert_eq!(keys(&arena, root), vec![11, 12, 25, 50, 51, 55, 59, 88]);
}

#[test]
fn rb_util_numbers_from_0_to_100_matrix() {
    let mut arena = Vec::new();
    let mut root = None;

    for i in 0..=100 {
        insert_value(&mut arena, &mut root, i);
        assert_eq!(size(&arena, root), (i + 1) as usize);
    }
    for i in 0..=100 {
        delete_value(&mut arena, &mut root, i);
        assert_eq!(size(&arena, root), (100 - i) as usize);
    }
    assert_eq!(root, None);
}

#[test]
fn rb_util_numbers_both_directions_matrix() {
    let mut arena = Vec::new();
    let mut root = None;

    for i in (0..=100).rev() {
        insert_value(&mut arena, &mut root, i);
    }
    for i in (0..=100).rev().step_by(2) {
        delete_value(&mut arena, &mut root, i);
    }
    assert_eq!(keys(&arena, root), (1..100).step_by(2).collect::<Vec<_>>());
    for i in (1..100).step_by(2) {
        delete_value(&mut arena, &mut root, i);
    }
    assert_eq!(root, None);
}

#[test]
fn rb_util_duplicate_leaves_structure_unchanged_matrix() {
    let mut arena = Vec::new();
    let mut root = None;
    for value in [8, 3, 10, 1, 6, 14, 4, 7, 13] {
        insert_value(&mut arena, &mut root, value);
    }
    let before = links(&arena);
    let root_before = root;

    for value in [8, 1, 13, 6] {
        assert!(!insert_value(&mut arena, &mut root, value));
        let rejected = arena.pop().unwrap();
        assert!(rejected.link.is_detached());
        assert_eq!(links(&arena), before);
        assert_eq!(root, root_before);
    }
}

#[test]
fn rb_util_random_insert_erase_matrix() {
    let mut rng = Xoshiro256StarStar::seed_from_u64(0x5eed);
    for round in 0..20 {
        let mut arena: Vec<N> = Vec::new();
        let mut root = None;
        let mut model = std::collections::BTreeSet::new();

        for step in 0..600 {
            let value = rng.gen_range(0..200);
            if rng.gen_bool(0.6) {
                assert_eq!(
                    insert_value(&mut arena, &mut root, value),
                    model.insert(value),
                    "round {round} step {step} insert {value}"
                );
            } else {
                assert_eq!(
                    delete_value(&mut arena, &mut root, value),
                    model.remove(&value),
                    "round {round} step {step} delete {value}"
                );
            }
        }
        assert_eq!(keys(&arena, root), model.into_iter().collect::<Vec<_>>());
    }
}

#[test]
fn rb_util_erase_in_shuffled_order_matrix() {
    let mut rng = Xoshiro256StarStar::seed_from_u64(42);
    let mut values: Vec<i32> = (0..1_000).collect();
    values.shuffle(&mut rng);

    let mut arena = Vec::new();
    let mut root = None;
    for &v in &values {
        insert_value(&mut arena, &mut root, v);
    }
    values.shuffle(&mut rng);
    for (removed, &v) in values.iter().enumerate() {
        assert!(delete_value(&mut arena, &mut root, v));
        assert_eq!(size(&arena, root), 1_000 - removed - 1);
    }
    assert_eq!(root, None);
}

#[test]
fn rb_util_reinsert_erased_nodes_matrix() {
    let mut arena: Vec<N> = (0..64).map(|k| RbNode::new(k, k)).collect();
    let mut root = None;
    for i in 0..64 {
        insert(&mut arena, &mut root, i, &rb_cmp);
    }
    for i in (0..64).step_by(3) {
        erase(&mut arena, &mut root, i);
    }
    for i in (0..64).step_by(3) {
        assert!(arena[i as usize].link.is_detached());
        assert!(insert(&mut arena, &mut root, i, &rb_cmp));
    }
    assert_red_black_tree(&arena, root, &rb_cmp).unwrap();
    assert_eq!(keys(&arena, root), (0..64).collect::<Vec<_>>());
}

#[test]
fn rb_util_multimap_matrix() {
    let mut arena: Vec<N> = Vec::new();
    let mut root = None;
    let input = [5, 1, 5, 3, 5, 1, 9, 5];
    for (i, &k) in input.iter().enumerate() {
        arena.push(RbNode::new(k, i as i32));
        assert!(insert_multi(&mut arena, &mut root, i as u32, &rb_cmp));
        assert_red_black_tree(&arena, root, &rb_cmp).unwrap();
    }
    assert_eq!(keys(&arena, root), vec![1, 1, 3, 5, 5, 5, 5, 9]);

    // equal keys sit in insertion (index) order
    let fives: Vec<u32> = InOrder::new(&arena, root)
        .filter(|&i| arena[i as usize].k == 5)
        .collect();
    assert_eq!(fives, vec![0, 2, 4, 7]);
    assert_eq!(first(&arena, root, &5, &rb_key), Some(0));
    assert_eq!(last(&arena, root, &5, &rb_key), Some(7));
    assert_eq!(first(&arena, root, &1, &rb_key), Some(1));
    assert_eq!(last(&arena, root, &1, &rb_key), Some(5));
    assert_eq!(first(&arena, root, &4, &rb_key), None);

    erase(&mut arena, &mut root, 2);
    assert_red_black_tree(&arena, root, &rb_cmp).unwrap();
    assert_eq!(keys(&arena, root), vec![1, 1, 3, 5, 5, 5, 9]);
    assert_eq!(first(&arena, root, &5, &rb_key), Some(0));
}
