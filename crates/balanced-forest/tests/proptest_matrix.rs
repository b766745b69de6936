use std::collections::BTreeMap;

use balanced_forest::{AvlTree, BstTree, RbTree, Strategy as Balancing, Tree};
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Op {
    Insert(i16, u8),
    Remove(i16),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (-64i16..64, any::<u8>()).prop_map(|(k, v)| Op::Insert(k, v)),
        2 => (-64i16..64).prop_map(Op::Remove),
    ]
}

fn replay<S>(mut tree: Tree<i16, u8, S>, ops: &[Op]) -> Result<(), TestCaseError>
where
    S: Balancing<i16, u8>,
{
    let mut model = BTreeMap::new();
    for op in ops {
        match *op {
            Op::Insert(k, v) => {
                let inserted = tree.insert_or_update(k, v);
                if v == 0 {
                    prop_assert!(!inserted);
                } else {
                    prop_assert_eq!(inserted, model.insert(k, v).is_none());
                }
            }
            Op::Remove(k) => {
                prop_assert_eq!(tree.remove(&k), model.remove(&k).is_some());
                prop_assert_eq!(*tree.find(&k), 0);
            }
        }
        prop_assert_eq!(tree.validate(), Ok(()));
    }

    prop_assert_eq!(tree.len(), model.len());
    prop_assert_eq!(tree.iter().count(), tree.len());
    let keys: Vec<i16> = tree.keys().copied().collect();
    prop_assert!(keys.windows(2).all(|w| w[0] < w[1]));
    let entries: Vec<(i16, u8)> = tree.iter().map(|(k, v)| (*k, *v)).collect();
    prop_assert_eq!(entries, model.into_iter().collect::<Vec<_>>());
    Ok(())
}

proptest! {
    #[test]
    fn bst_keeps_order_and_size(ops in prop::collection::vec(op(), 0..200)) {
        replay(BstTree::new(0), &ops)?;
    }

    #[test]
    fn avl_keeps_heights_balanced(ops in prop::collection::vec(op(), 0..200)) {
        replay(AvlTree::new(0), &ops)?;
    }

    #[test]
    fn red_black_keeps_color_rules(ops in prop::collection::vec(op(), 0..200)) {
        replay(RbTree::new(0), &ops)?;
    }

    #[test]
    fn merge_produces_union(
        left in prop::collection::btree_map(-100i16..0, 1u8..=255, 0..40),
        right in prop::collection::btree_map(0i16..100, 1u8..=255, 0..40),
    ) {
        let mut dst = AvlTree::new(0u8);
        let mut src = RbTree::new(0u8);
        for (k, v) in &left {
            dst.insert_or_update(*k, *v);
        }
        for (k, v) in &right {
            src.insert_or_update(*k, *v);
        }
        prop_assert_eq!(dst.try_merge(&mut src), Ok(right.len()));
        prop_assert!(src.is_empty());
        prop_assert_eq!(dst.validate(), Ok(()));

        let mut union = left.clone();
        union.extend(right.iter().map(|(k, v)| (*k, *v)));
        let entries: Vec<(i16, u8)> = dst.iter().map(|(k, v)| (*k, *v)).collect();
        prop_assert_eq!(entries, union.into_iter().collect::<Vec<_>>());
    }
}
