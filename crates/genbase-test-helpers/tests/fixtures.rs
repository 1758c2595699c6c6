//! Integration tests for the randomized fixture helpers and the text
//! environment.

use std::collections::BTreeSet;

use rand::rngs::StdRng;
use rand::SeedableRng;

use genbase_test_helpers::fixtures::punctuation::{
    test_environment, test_instances, test_labels, NO_PUNCTUATION, PUNCTUATION, TEST_PROVIDER,
};
use genbase_test_helpers::fixtures::{corrupt, corrupt_all, random_combinations, TextEnvironment};
use genbase_test_helpers::instances::{InstanceProvider, LabelProvider};
use genbase_test_helpers::DatasetError;

fn rng() -> StdRng {
    StdRng::seed_from_u64(0x5eed)
}

// ---------------------------------------------------------------------------
// corrupt
// ---------------------------------------------------------------------------

#[test]
fn test_corrupt_keeps_name_as_suffix() {
    let mut rng = rng();
    let corrupted = corrupt("abc", &mut rng);
    assert_eq!(corrupted.len(), 4);
    assert!(corrupted.ends_with("abc"));
}

#[test]
fn test_corrupt_empty_name() {
    let corrupted = corrupt("", &mut rng());
    assert_eq!(corrupted.len(), 1);
}

#[test]
fn test_corrupt_all_preserves_order() {
    let names = vec!["alpha".to_string(), "beta".to_string(), "gamma".to_string()];
    let corrupted = corrupt_all(&names, &mut rng());
    assert_eq!(corrupted.len(), names.len());
    for (original, changed) in names.iter().zip(&corrupted) {
        assert_eq!(changed.len(), original.len() + 1);
        assert_eq!(&changed[1..], original);
    }
}

#[test]
fn test_corrupt_uses_lowercase_and_digits_only() {
    let mut rng = rng();
    let prefixes: BTreeSet<char> = (0..2000)
        .map(|_| corrupt("", &mut rng).chars().next().unwrap())
        .collect();
    assert!(prefixes
        .iter()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    // 2000 draws over 36 symbols should hit every one of them.
    assert_eq!(prefixes.len(), 36);
}

// ---------------------------------------------------------------------------
// random_combinations
// ---------------------------------------------------------------------------

#[test]
fn test_random_combinations_of_empty_input() {
    let empty: [u8; 0] = [];
    assert_eq!(random_combinations(&empty, 1, &mut rng()), vec![Vec::<u8>::new()]);
}

#[test]
fn test_random_combinations_one_per_size() {
    let items = [1, 2, 3];
    let combos = random_combinations(&items, 1, &mut rng());
    let sizes: Vec<usize> = combos.iter().map(Vec::len).collect();
    assert_eq!(sizes, vec![1, 2, 3]);
    for combo in &combos {
        assert!(combo.windows(2).all(|w| w[0] < w[1]), "{:?} not in input order", combo);
        assert!(combo.iter().all(|v| items.contains(v)));
    }
    assert_eq!(combos[2], vec![1, 2, 3]);
}

#[test]
fn test_random_combinations_start_is_capped() {
    let items = ["a", "b"];
    assert_eq!(random_combinations(&items, 10, &mut rng()), vec![vec!["a", "b"]]);
    let from_zero = random_combinations(&items, 0, &mut rng());
    assert_eq!(from_zero.len(), 3);
    assert!(from_zero[0].is_empty());
}

#[test]
fn test_random_combinations_keep_relative_order() {
    let items: Vec<char> = "abcdefghij".chars().collect();
    let mut rng = rng();
    for _ in 0..20 {
        for combo in random_combinations(&items, 1, &mut rng) {
            let positions: Vec<usize> = combo
                .iter()
                .map(|c| items.iter().position(|i| i == c).unwrap())
                .collect();
            assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }
    }
}

// ---------------------------------------------------------------------------
// TextEnvironment
// ---------------------------------------------------------------------------

#[test]
fn test_punctuation_environment() {
    let env = test_environment().unwrap();
    assert_eq!(env.dataset().len(), test_instances().len());
    assert_eq!(
        env.target_labels(),
        &BTreeSet::from([PUNCTUATION.to_string(), NO_PUNCTUATION.to_string()])
    );

    let named = env.get_named_provider(TEST_PROVIDER).unwrap();
    assert_eq!(named.keys(), env.dataset().keys());
    assert_eq!(env.named_providers().collect::<Vec<_>>(), vec![TEST_PROVIDER]);
    assert!(env.get_named_provider("train").is_none());

    let truth = test_labels();
    for key in env.dataset().keys() {
        assert_eq!(env.labels().get_labels(&key), truth[key]);
    }
    assert_eq!(env.dataset().get(&10).map(|ins| ins.data.as_str()), Some("a"));
    assert_eq!(
        env.labels()
            .get_instances_by_label(&PUNCTUATION.to_string())
            .len(),
        32
    );
}

#[test]
fn test_environment_rejects_mismatched_lengths() {
    let err = TextEnvironment::from_data(
        BTreeSet::from(["x"]),
        vec![0u32, 1],
        vec!["a".to_string()],
        vec![BTreeSet::from(["x"]), BTreeSet::from(["x"])],
    )
    .unwrap_err();
    assert_eq!(
        err,
        DatasetError::LengthMismatch {
            field: "data",
            expected: 2,
            found: 1
        }
    );
}

#[test]
fn test_environment_rejects_duplicate_keys_and_foreign_labels() {
    let duplicate = TextEnvironment::from_data(
        BTreeSet::from(["x"]),
        vec![3u32, 3],
        vec!["a".to_string(), "b".to_string()],
        vec![BTreeSet::from(["x"]), BTreeSet::from(["x"])],
    )
    .unwrap_err();
    assert_eq!(duplicate, DatasetError::DuplicateKey("3".to_string()));

    let foreign = TextEnvironment::from_data(
        BTreeSet::from(["x"]),
        vec![1u32],
        vec!["a".to_string()],
        vec![BTreeSet::from(["y"])],
    )
    .unwrap_err();
    assert_eq!(foreign, DatasetError::UnknownLabel("\"y\"".to_string()));
}
