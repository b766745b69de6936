use balanced_forest::{AvlTree, BstTree};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn avl_fixture_rotation_path_matrix() {
    let mut tree = AvlTree::new("");
    for k in [-5, 8, -1, 2, -2, 7, 0] {
        assert!(tree.insert_or_update(k, "DF"));
    }
    assert_eq!(
        tree.to_ordered_string(false),
        "-1:ROOT/-5:-1/7:-1/-2:-5R/2:7/8:7/0:2L"
    );
    assert_eq!(tree.len(), 7);
    assert_eq!(tree.validate(), Ok(()));
}

#[test]
fn avl_fixture_with_values_matrix() {
    let mut tree = AvlTree::new("");
    for k in [-5, 8, -1, 2, -2, 7, 0] {
        tree.insert_or_update(k, "DF");
    }
    assert_eq!(
        tree.to_ordered_string(true),
        "-1:DF:ROOT/-5:DF:-1/7:DF:-1/-2:DF:-5R/2:DF:7/8:DF:7/0:DF:2L"
    );
}

#[test]
fn avl_single_rotations_matrix() {
    let mut right = AvlTree::new(0);
    for k in [1, 2, 3] {
        right.insert_or_update(k, k);
    }
    assert_eq!(right.to_ordered_string(false), "2:ROOT/1:2/3:2");

    let mut left = AvlTree::new(0);
    for k in [3, 2, 1] {
        left.insert_or_update(k, k);
    }
    assert_eq!(left.to_ordered_string(false), "2:ROOT/1:2/3:2");
}

#[test]
fn avl_double_rotations_matrix() {
    let mut right_left = AvlTree::new(0);
    for k in [1, 3, 2] {
        right_left.insert_or_update(k, k);
    }
    assert_eq!(right_left.to_ordered_string(false), "2:ROOT/1:2/3:2");

    let mut left_right = AvlTree::new(0);
    for k in [3, 1, 2] {
        left_right.insert_or_update(k, k);
    }
    assert_eq!(left_right.to_ordered_string(false), "2:ROOT/1:2/3:2");
}

#[test]
fn avl_ladder_insert_delete_matrix() {
    let mut tree = AvlTree::new(-1);
    for i in 0..300 {
        tree.insert_or_update(i, i);
        tree.validate().unwrap();
    }
    assert_eq!(tree.len(), 300);
    assert!(tree.height() <= 12);

    for i in (0..300).step_by(3) {
        assert!(tree.remove(&i));
        tree.validate().unwrap();
    }
    assert_eq!(tree.len(), 200);

    for i in 0..300 {
        let expected = if i % 3 == 0 { -1 } else { i };
        assert_eq!(*tree.find(&i), expected);
    }
}

#[test]
fn avl_stays_shallower_than_bst_matrix() {
    let mut avl = AvlTree::new(0);
    let mut bst = BstTree::new(0);
    for i in 1..=64 {
        avl.insert_or_update(i, i);
        bst.insert_or_update(i, i);
    }
    assert_eq!(bst.height(), 63);
    assert_eq!(avl.height(), 6);
    assert!(avl.entries_eq(&bst));
    assert!(avl != bst);
}

#[test]
fn avl_random_trace_matrix() {
    let mut rng = StdRng::seed_from_u64(0x5eed_a71);
    let mut tree = AvlTree::new(0u32);
    let mut model = std::collections::BTreeMap::new();

    for _ in 0..2_000 {
        let key: i32 = rng.gen_range(-200..200);
        if rng.gen_bool(0.6) {
            let value: u32 = rng.gen_range(1..1_000);
            let inserted = tree.insert_or_update(key, value);
            assert_eq!(inserted, model.insert(key, value).is_none());
        } else {
            assert_eq!(tree.remove(&key), model.remove(&key).is_some());
        }
        tree.validate().unwrap();
    }

    assert_eq!(tree.len(), model.len());
    let entries: Vec<(i32, u32)> = tree.iter().map(|(k, v)| (*k, *v)).collect();
    let expected: Vec<(i32, u32)> = model.into_iter().collect();
    assert_eq!(entries, expected);
}

#[test]
fn avl_print_shows_heights_matrix() {
    let mut tree = AvlTree::new(0);
    for k in [2, 1, 3] {
        tree.insert_or_update(k, k * 10);
    }
    assert_eq!(
        tree.print(),
        "avl (size 3)\n└─ 2 = 20 [h=1]\n   ├─ 1 = 10 [h=0]\n   └─ 3 = 30 [h=0]"
    );
}
