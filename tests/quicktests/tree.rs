use bst_map::{Order, Tree};

use std::collections::{BTreeMap, HashSet};

use crate::common::init_tracing;
use crate::Op;

/// Applies a set of operations to a tree and a `BTreeMap`, checking every return value and the
/// tree's invariants along the way. Returns `false` as soon as they disagree.
fn do_ops<K, V>(ops: &[Op<K, V>], bst: &mut Tree<K, V>, map: &mut BTreeMap<K, V>) -> bool
where
    K: Clone + Ord,
    V: Clone + PartialEq,
{
    for op in ops {
        let agrees = match op {
            Op::Insert(k, v) => bst.insert(k.clone(), v.clone()) == map.insert(k.clone(), v.clone()),
            Op::Remove(k) => bst.remove(k) == map.remove(k),
            Op::Iter => {
                let mut entries = Vec::new();
                bst.traverse_inorder(|k, v| entries.push((k.clone(), v.clone())));
                entries.len() == map.len()
                    && entries.iter().zip(map.iter()).all(|((k, v), (mk, mv))| k == mk && v == mv)
            }
        };
        if !agrees || bst.len() != map.len() || bst.validate().is_err() {
            return false;
        }
    }
    true
}

quickcheck::quickcheck! {
    fn fuzz_multiple_operations_i8(ops: Vec<Op<i8, i8>>) -> bool {
        init_tracing();
        let mut tree = Tree::new();
        let mut map = BTreeMap::new();

        do_ops(&ops, &mut tree, &mut map)
            && map.keys().all(|key| tree.get(key) == map.get(key))
    }
}

quickcheck::quickcheck! {
    fn contains(xs: Vec<i8>) -> bool {
        let mut tree = Tree::new();
        for x in &xs {
            tree.insert(*x, *x);
        }

        xs.iter().all(|x| tree.get(x) == Some(x))
    }
}

quickcheck::quickcheck! {
    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let mut tree = Tree::new();
        for x in &xs {
            tree.insert(*x, *x);
        }
        let added: HashSet<_> = xs.into_iter().collect();
        let nots: HashSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| tree.get(x).is_none())
    }
}

quickcheck::quickcheck! {
    fn removing_missing_key_changes_nothing(xs: Vec<i16>, missing: i16) -> bool {
        let mut tree: Tree<_, _> = xs.iter().filter(|&&x| x != missing).map(|&x| (x, x)).collect();
        let walk = |tree: &Tree<i16, i16>, order| {
            let mut keys = Vec::new();
            tree.traverse(order, |k, _| keys.push(*k));
            keys
        };
        let levels = walk(&tree, Order::Levelorder);
        let len = tree.len();

        tree.remove(&missing).is_none()
            && tree.len() == len
            && walk(&tree, Order::Levelorder) == levels
    }
}

quickcheck::quickcheck! {
    fn removal_only_drops_that_key(xs: Vec<i16>, pick: usize) -> bool {
        if xs.is_empty() {
            return true;
        }
        let victim = xs[pick % xs.len()];
        let mut tree: Tree<_, _> = xs.iter().map(|&x| (x, i32::from(x) * 3)).collect();

        let mut before = Vec::new();
        tree.traverse_inorder(|k, v| before.push((*k, *v)));
        before.retain(|(k, _)| *k != victim);

        let removed = tree.remove(&victim);
        let mut after = Vec::new();
        tree.traverse_inorder(|k, v| after.push((*k, *v)));

        removed == Some(i32::from(victim) * 3) && after == before && tree.validate().is_ok()
    }
}
