use std::collections::{BTreeMap, HashSet};

use dsa::recursive::Tree;

use crate::Op;

/// Applies a set of operations to a tree and a count map.
/// This way we can ensure that after a random smattering of inserts
/// and removes we hold the same multiset of values.
fn do_ops(ops: &[Op<i8>], tree: &mut Tree<i8>, counts: &mut BTreeMap<i8, usize>) {
    for op in ops {
        match op {
            Op::Insert(v) => {
                tree.insert(*v);
                *counts.entry(*v).or_insert(0) += 1;
            }
            Op::Remove(v) => {
                let expected = match counts.get_mut(v) {
                    Some(count) if *count > 0 => {
                        *count -= 1;
                        true
                    }
                    _ => false,
                };
                assert_eq!(tree.remove(v).is_some(), expected);
            }
        }
    }
}

quickcheck::quickcheck! {
    fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
        let mut tree = Tree::new();
        let mut counts = BTreeMap::new();

        do_ops(&ops, &mut tree, &mut counts);
        counts
            .iter()
            .all(|(value, count)| (*count > 0) == tree.find(value).is_some())
    }

    fn contains(xs: Vec<i8>) -> bool {
        let mut tree = Tree::new();
        for x in &xs {
            tree.insert(*x);
        }

        xs.iter().all(|x| tree.find(x) == Some(x))
    }

    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let mut tree = Tree::new();
        for x in &xs {
            tree.insert(*x);
        }
        let added: HashSet<_> = xs.into_iter().collect();
        let nots: HashSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| tree.find(x) == None)
    }

    fn with_removals(xs: Vec<i8>, removes: Vec<i8>) -> bool {
        let mut tree = Tree::new();
        for x in &xs {
            tree.insert(*x);
        }

        // Each remove takes out at most one occurrence.
        let mut still_present = xs;
        for remove in &removes {
            match still_present.iter().position(|x| x == remove) {
                Some(pos) => {
                    still_present.swap_remove(pos);
                    assert_eq!(tree.remove(remove), Some(*remove));
                }
                None => assert_eq!(tree.remove(remove), None),
            }
        }

        still_present.iter().all(|x| tree.find(x).is_some())
    }

    fn breadth_first_agrees_with_find(xs: Vec<i8>, probes: Vec<i8>) -> bool {
        let mut tree = Tree::new();
        for x in &xs {
            tree.insert(*x);
        }

        probes
            .iter()
            .all(|p| tree.contains_breadth_first(p) == tree.find(p).is_some())
    }
}
