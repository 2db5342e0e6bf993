use binarytree::Tree;

use std::collections::{BTreeMap, HashSet};

use quickcheck_macros::quickcheck;

use crate::Op;

/// Every value of the model in sorted order, repeated as many times as it was inserted.
fn expand<T: Clone>(counts: &BTreeMap<T, usize>) -> Vec<T> {
    counts
        .iter()
        .flat_map(|(v, count)| std::iter::repeat(v.clone()).take(*count))
        .collect()
}

/// Applies a set of operations to a tree and to a map counting how many copies of each value
/// should be in it. Returns `false` as soon as the tree's iterator disagrees with the model.
fn do_ops<T>(ops: &[Op<T>], bst: &mut Tree<T>, counts: &mut BTreeMap<T, usize>) -> bool
where
    T: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(v) => {
                bst.insert(v.clone());
                *counts.entry(v.clone()).or_insert(0) += 1;
            }
            Op::Remove(v) => {
                bst.remove(v);
                if let Some(count) = counts.get_mut(v) {
                    *count -= 1;
                    if *count == 0 {
                        counts.remove(v);
                    }
                }
            }
            Op::Iter => {
                if !bst.iter().eq(expand(counts).iter()) {
                    return false;
                }
            }
        }
    }
    true
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut counts = BTreeMap::new();

    if !do_ops(&ops, &mut tree, &mut counts) {
        return false;
    }

    let mut in_order = Vec::new();
    tree.in_order(|v| in_order.push(*v));

    in_order == expand(&counts) && counts.keys().all(|v| tree.search(v))
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.search(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.search(x))
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    for delete in &deletes {
        // We may have inserted the same value multiple times - delete each one.
        while tree.remove(delete).is_some() {}
    }

    let mut still_present = xs;
    still_present.retain(|x| !deletes.contains(x));

    deletes.iter().all(|x| !tree.search(x))
        && still_present.iter().all(|x| tree.search(x))
        && tree.len() == still_present.len()
}

#[quickcheck]
fn traversals_visit_every_node_once(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let mut sorted = xs;
    sorted.sort_unstable();

    let mut orders: [Vec<i8>; 4] = Default::default();
    tree.in_order(|v| orders[0].push(*v));
    tree.pre_order(|v| orders[1].push(*v));
    tree.post_order(|v| orders[2].push(*v));
    tree.level_order(|v| orders[3].push(*v));

    orders[0] == sorted
        && orders[1..].iter_mut().all(|order| {
            order.sort_unstable();
            *order == sorted
        })
}

#[quickcheck]
fn round_trip(xs: Vec<i16>, removes: Vec<i16>) -> bool {
    let mut tree: Tree<_> = xs.into_iter().collect();
    for remove in &removes {
        tree.remove(remove);
    }

    let mut text = Vec::new();
    tree.write_to(&mut text).unwrap();
    let read_back: Tree<i16> = Tree::read_from(text.as_slice()).unwrap();

    let mut expected = Vec::new();
    tree.level_order(|v| expected.push(*v));
    let mut actual = Vec::new();
    read_back.level_order(|v| actual.push(*v));

    actual == expected && read_back == tree
}
