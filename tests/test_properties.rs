use proptest::prelude::*;
use randomized_bst::randomized_tree::RandomizedSet;
use std::collections::BTreeSet;

#[derive(Debug, Clone)]
enum Operation {
    Insert(u8),
    Remove(u8),
    Contains(u8),
}

fn seeded_set(seed: u32) -> RandomizedSet<u8> {
    let rng: rand::XorShiftRng = rand::SeedableRng::from_seed([seed, 1, 1, 1]);
    RandomizedSet::with_rng(rng)
}

proptest! {
    #[test]
    fn test_randomized_set_matches_std_set(
        seed in any::<u32>(),
        ops in proptest::collection::vec(
            prop_oneof![
                any::<u8>().prop_map(Operation::Insert),
                any::<u8>().prop_map(Operation::Remove),
                any::<u8>().prop_map(Operation::Contains),
            ],
            1..200
        )
    ) {
        let mut std_set = BTreeSet::new();
        let mut set = seeded_set(seed);

        for op in ops {
            match op {
                Operation::Insert(k) => {
                    prop_assert_eq!(set.insert(k), std_set.insert(k), "insert mismatch for key {}", k);
                }
                Operation::Remove(k) => {
                    prop_assert_eq!(set.remove(&k), std_set.take(&k), "remove mismatch for key {}", k);
                }
                Operation::Contains(k) => {
                    prop_assert_eq!(set.contains(&k), std_set.contains(&k), "contains mismatch for key {}", k);
                }
            }
            prop_assert_eq!(set.len(), std_set.len());
            prop_assert_eq!(set.is_empty(), std_set.is_empty());
        }

        let actual = set.iter().cloned().collect::<Vec<u8>>();
        let expected = std_set.iter().cloned().collect::<Vec<u8>>();
        prop_assert_eq!(actual, expected);
        prop_assert!(set.height() <= set.len());
    }

    #[test]
    fn test_insert_is_idempotent(seed in any::<u32>(), keys in proptest::collection::vec(any::<u8>(), 0..100)) {
        let mut set = seeded_set(seed);
        set.extend(keys.iter().cloned());
        let before = set.iter().cloned().collect::<Vec<u8>>();

        for key in &keys {
            prop_assert!(!set.insert(*key));
        }
        prop_assert_eq!(set.iter().cloned().collect::<Vec<u8>>(), before);
    }

    #[test]
    fn test_remove_absent_is_noop(seed in any::<u32>(), keys in proptest::collection::vec(0u8..100, 0..100), absent in 100u8..=255) {
        let mut set = seeded_set(seed);
        set.extend(keys.iter().cloned());
        let before = set.iter().cloned().collect::<Vec<u8>>();

        prop_assert_eq!(set.remove(&absent), None);
        prop_assert_eq!(set.iter().cloned().collect::<Vec<u8>>(), before);
    }

    #[test]
    fn test_remove_joins_disjoint_ranges(seed in any::<u32>(), low in proptest::collection::btree_set(0u8..128, 0..60), high in proptest::collection::btree_set(129u8..=255, 0..60)) {
        // removing the separator key joins the two ranges around it
        let mut set = seeded_set(seed);
        set.extend(low.iter().cloned());
        set.insert(128);
        set.extend(high.iter().cloned());

        prop_assert_eq!(set.remove(&128), Some(128));
        let expected = low.iter().chain(high.iter()).cloned().collect::<Vec<u8>>();
        prop_assert_eq!(set.len(), low.len() + high.len());
        prop_assert_eq!(set.into_iter().collect::<Vec<u8>>(), expected);
    }
}
