use balanced_forest::{AvlTree, BstTree, RbTree};

#[test]
fn bst_insert_find_remove_round_trip_matrix() {
    let mut tree = BstTree::new("none");
    for (k, v) in [(5, "five"), (3, "three"), (8, "eight"), (1, "one")] {
        assert!(tree.insert_or_update(k, v));
        assert_eq!(*tree.find(&k), v);
    }
    assert_eq!(tree.len(), 4);

    assert!(tree.remove(&3));
    assert_eq!(*tree.find(&3), "none");
    assert!(!tree.remove(&3));
    assert_eq!(tree.len(), 3);
    assert_eq!(tree.get(&3), None);
    assert!(!tree.contains_key(&3));
    tree.validate().unwrap();
}

#[test]
fn bst_update_in_place_matrix() {
    let mut tree = BstTree::new(0);
    tree.insert_or_update(2, 20);
    tree.insert_or_update(1, 10);
    let before = tree.to_ordered_string(false);
    assert!(!tree.insert_or_update(2, 21));
    assert_eq!(tree.to_ordered_string(false), before);
    assert_eq!(tree.to_ordered_string(true), "2:21:ROOT/1:10:2L");

    if let Some(v) = tree.get_mut(&1) {
        *v += 1;
    }
    assert_eq!(*tree.find(&1), 11);
}

#[test]
fn bst_absent_value_is_never_stored_matrix() {
    let mut tree = BstTree::new(-1);
    assert!(!tree.insert_or_update(4, -1));
    assert!(tree.is_empty());

    tree.insert_or_update(4, 40);
    assert!(!tree.insert_or_update(4, -1));
    assert_eq!(*tree.find(&4), 40);
    assert_eq!(tree.len(), 1);
}

#[test]
fn bst_only_child_suffix_matrix() {
    let mut tree = BstTree::new(0);
    for k in [10, 5, 3, 7, 20, 25] {
        tree.insert_or_update(k, k);
    }
    assert_eq!(
        tree.to_ordered_string(false),
        "10:ROOT/5:10/20:10/3:5/7:5/25:20R"
    );
    assert!(tree.remove(&25));
    assert!(tree.remove(&7));
    assert_eq!(tree.to_ordered_string(false), "10:ROOT/5:10/20:10/3:5L");
}

#[test]
fn bst_remove_two_children_uses_successor_matrix() {
    let mut tree = BstTree::new(0);
    for k in [50, 30, 70, 60, 80, 65] {
        tree.insert_or_update(k, k);
    }
    assert!(tree.remove(&50));
    assert_eq!(tree.to_ordered_string(true), "60:60:ROOT/30:30:60/70:70:60/65:65:70/80:80:70");
    tree.validate().unwrap();
}

#[test]
fn bst_from_keys_matrix() {
    let tree = BstTree::from_keys([3, 1, 2, 3, 1], "DF", "");
    assert_eq!(tree.len(), 3);
    assert_eq!(tree.to_ordered_string(true), "3:DF:ROOT/1:DF:3L/2:DF:1R");

    let empty = AvlTree::from_keys([1, 2, 3], "", "");
    assert!(empty.is_empty());
    assert_eq!(*empty.find(&1), "");

    let rb = RbTree::from_keys(0..100, 1u8, 0u8);
    assert_eq!(rb.len(), 100);
    rb.validate().unwrap();
}

#[test]
fn bst_clear_keeps_absent_value_matrix() {
    let mut tree = RbTree::new('?');
    for k in 0..10 {
        tree.insert_or_update(k, 'x');
    }
    tree.clear();
    assert!(tree.is_empty());
    assert_eq!(tree.len(), 0);
    assert_eq!(*tree.find(&3), '?');
    assert_eq!(*tree.absent_value(), '?');
    assert!(tree.insert_or_update(3, 'y'));
    tree.validate().unwrap();
}

#[test]
fn bst_ordered_queries_matrix() {
    let mut tree = AvlTree::new(0);
    assert_eq!(tree.first(), None);
    assert_eq!(tree.height(), -1);
    for k in [10, 20, 30, 40] {
        tree.insert_or_update(k, k / 10);
    }
    assert_eq!(tree.first(), Some((&10, &1)));
    assert_eq!(tree.last(), Some((&40, &4)));
    assert_eq!(tree.get_or_next_lower(&25), Some((&20, &2)));
    assert_eq!(tree.get_or_next_lower(&30), Some((&30, &3)));
    assert_eq!(tree.get_or_next_lower(&5), None);
    assert_eq!(tree.values().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    assert_eq!(
        tree.breadth_first(),
        vec![(&20, &2), (&10, &1), (&30, &3), (&40, &4)]
    );
}

#[test]
fn bst_debug_and_default_matrix() {
    let mut tree: BstTree<i32, i32> = BstTree::default();
    assert_eq!(*tree.absent_value(), 0);
    tree.insert_or_update(2, 4);
    tree.insert_or_update(1, 2);
    assert_eq!(format!("{tree:?}"), "{1: 2, 2: 4}");
    assert_eq!(BstTree::<i32, i32>::new(0).print(), "bst (size 0)\n└─ ∅");
    assert_eq!(tree.print(), "bst (size 2)\n└─ 2 = 4\n   └─ 1 = 2");
}

#[test]
fn bst_degenerate_chain_matrix() {
    const N: i32 = 40_000;
    let mut tree = BstTree::new(0);
    for k in 1..=N {
        tree.insert_or_update(k, k);
    }
    assert_eq!(tree.height(), N - 1);
    assert_eq!(tree.validate(), Ok(()));
    assert_eq!(tree.iter().count(), N as usize);
    assert_eq!(tree.last(), Some((&N, &N)));

    assert!(tree.remove(&1));
    assert_eq!(tree.height(), N - 2);
    assert_eq!(tree.validate(), Ok(()));

    let mut rb = RbTree::new(0);
    assert_eq!(rb.try_merge(&mut tree), Ok(N as usize - 1));
    assert!(tree.is_empty());
    assert_eq!(rb.validate(), Ok(()));
}
