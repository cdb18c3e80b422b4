//! Ordered Index Tests
//!
//! Scenario tests for the public `OrderedIndex` API: ordered insertion,
//! node splitting, overwrite on duplicate keys and leaf-chain traversal.

use pagetree::OrderedIndex;
use proptest::prelude::*;

fn filled(keys: impl IntoIterator<Item = i32>) -> OrderedIndex<i32, String> {
    keys.into_iter().map(|k| (k, format!("value-{}", k))).collect()
}

// ============================================================================
// Basic operations
// ============================================================================

#[test]
fn test_empty_tree_search() {
    let index: OrderedIndex<i32, String> = OrderedIndex::new();
    assert_eq!(index.search(&1), None);
    assert!(index.is_empty());
}

#[test]
fn test_single_node_operations() {
    let mut index = OrderedIndex::new();
    index.insert(1, "one");
    assert_eq!(index.search(&1), Some(&"one"));
    assert_eq!(index.search(&2), None);
}

#[test]
fn test_multiple_insertions() {
    let values = ["one", "two", "three", "four", "five"];
    let mut index = OrderedIndex::new();
    for (i, v) in values.iter().enumerate() {
        index.insert(i + 1, *v);
    }

    for (i, v) in values.iter().enumerate() {
        assert_eq!(index.search(&(i + 1)), Some(v));
    }
    assert_eq!(index.height(), 1);
}

// ============================================================================
// Splitting
// ============================================================================

#[test]
fn test_node_splitting_one_to_ten() {
    let mut index = OrderedIndex::new();
    for i in 1..=7 {
        index.insert(i, format!("value-{}", i));
    }
    assert_eq!(index.height(), 1);

    // The eighth key overflows the root leaf: one separator, two leaves.
    index.insert(8, "value-8".to_string());
    assert_eq!(index.height(), 2);

    index.insert(9, "value-9".to_string());
    index.insert(10, "value-10".to_string());

    for i in 1..=10 {
        assert_eq!(index.search(&i), Some(&format!("value-{}", i)));
    }
    assert_eq!(index.search(&0), None);
    assert_eq!(index.search(&11), None);
}

#[test]
fn test_random_insertions() {
    let keys = [5, 2, 8, 1, 9, 3, 7, 4, 6, 10];
    let index = filled(keys);

    for key in keys {
        assert_eq!(index.search(&key), Some(&format!("value-{}", key)));
    }
    let ordered: Vec<i32> = index.keys().copied().collect();
    assert_eq!(ordered, (1..=10).collect::<Vec<_>>());
}

#[test]
fn test_large_number_of_insertions() {
    let index = filled(0..1000);

    assert_eq!(index.len(), 1000);
    for key in (0..1000).step_by(37) {
        assert_eq!(index.search(&key), Some(&format!("value-{}", key)));
    }
    // 1000 keys at fan-out 8 need more than two levels.
    assert!(index.height() >= 3);
}

#[test]
fn test_sequential_and_reverse_access() {
    let forward = filled(0..100);
    let reverse = filled((0..100).rev());

    for i in 0..100 {
        assert_eq!(forward.search(&i), reverse.search(&i));
    }
    assert!(forward.iter().eq(reverse.iter()));
}

// ============================================================================
// Key edge cases
// ============================================================================

#[test]
fn test_negative_keys() {
    let mut index = OrderedIndex::new();
    index.insert(-1, "negative one");
    index.insert(-5, "negative five");
    index.insert(-3, "negative three");

    assert_eq!(index.search(&-1), Some(&"negative one"));
    assert_eq!(index.search(&-5), Some(&"negative five"));
    assert_eq!(index.search(&-3), Some(&"negative three"));
}

#[test]
fn test_boundary_values() {
    let mut index = OrderedIndex::new();
    index.insert(i32::MAX, "max value");
    index.insert(i32::MIN, "min value");
    index.insert(0, "zero");

    assert_eq!(index.search(&i32::MAX), Some(&"max value"));
    assert_eq!(index.search(&i32::MIN), Some(&"min value"));
    assert_eq!(index.search(&0), Some(&"zero"));
}

#[test]
fn test_optional_values() {
    let mut index: OrderedIndex<i32, Option<&str>> = OrderedIndex::new();
    index.insert(1, None);

    // A stored `None` is a hit, distinct from a missing key.
    assert_eq!(index.search(&1), Some(&None));
    assert_eq!(index.search(&2), None);
}

#[test]
fn test_string_keys() {
    let mut index = OrderedIndex::new();
    for word in ["pear", "apple", "fig", "kiwi", "plum", "date", "lime", "mango", "cherry"] {
        index.insert(word.to_string(), word.len());
    }

    assert_eq!(index.search("mango"), Some(&5));
    assert_eq!(index.search("banana"), None);
    let first = index.keys().next().map(String::as_str);
    assert_eq!(first, Some("apple"));
}

// ============================================================================
// Duplicate keys
// ============================================================================

#[test]
fn test_duplicate_keys_overwrite() {
    let mut index = OrderedIndex::new();
    assert_eq!(index.insert(1, "original"), None);
    assert_eq!(index.insert(1, "duplicate"), Some("original"));

    assert_eq!(index.search(&1), Some(&"duplicate"));
    assert_eq!(index.len(), 1);
}

#[test]
fn test_duplicate_keys_across_splits() {
    let mut index = filled(0..200);
    for k in (0..200).step_by(3) {
        index.insert(k, format!("updated-{}", k));
    }

    assert_eq!(index.len(), 200);
    for k in 0..200 {
        let expected = if k % 3 == 0 {
            format!("updated-{}", k)
        } else {
            format!("value-{}", k)
        };
        assert_eq!(index.search(&k), Some(&expected));
    }
}

// ============================================================================
// Leaf chain traversal
// ============================================================================

#[test]
fn test_iter_follows_leaf_chain() {
    let index = filled([30, 10, 50, 20, 40, 60, 70, 80, 90, 15, 25, 35]);

    let keys: Vec<i32> = index.iter().map(|(k, _)| *k).collect();
    assert_eq!(keys, vec![10, 15, 20, 25, 30, 35, 40, 50, 60, 70, 80, 90]);
    assert_eq!(index.iter().len(), 12);
}

#[test]
fn test_range_scan() {
    let index = filled(0..500);

    let keys: Vec<i32> = index.range(100..110).map(|(k, _)| *k).collect();
    assert_eq!(keys, (100..110).collect::<Vec<_>>());

    let tail: Vec<i32> = index.range(495..).map(|(k, _)| *k).collect();
    assert_eq!(tail, vec![495, 496, 497, 498, 499]);
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_iteration_is_strictly_ascending(keys in prop::collection::vec(any::<i64>(), 0..500)) {
        let index: OrderedIndex<i64, ()> = keys.iter().map(|&k| (k, ())).collect();

        let walked: Vec<i64> = index.keys().copied().collect();
        prop_assert!(walked.windows(2).all(|w| w[0] < w[1]));

        let mut expected = keys.clone();
        expected.sort_unstable();
        expected.dedup();
        prop_assert_eq!(walked, expected);
    }

    #[test]
    fn prop_search_completeness(
        keys in prop::collection::hash_set(0u32..10_000, 0..400),
        probes in prop::collection::vec(0u32..10_000, 0..100),
    ) {
        let index: OrderedIndex<u32, u32> = keys.iter().map(|&k| (k, k.wrapping_mul(31))).collect();

        for k in &keys {
            prop_assert_eq!(index.search(k), Some(&k.wrapping_mul(31)));
        }
        for p in probes.iter().filter(|p| !keys.contains(*p)) {
            prop_assert_eq!(index.search(p), None);
        }
    }
}
