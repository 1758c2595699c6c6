//! The punctuation dataset: every printable ASCII character as its own
//! instance, labelled by whether it is punctuation.
use std::collections::BTreeSet;

use anyhow::Result;

use crate::error::{ClassifierError, DatasetError};
use crate::fixtures::TextEnvironment;
use crate::models::deterministic::DeterministicTextClassifier;

pub const PUNCTUATION: &str = "punctuation";
pub const NO_PUNCTUATION: &str = "no_punctuation";

/// Name under which `test_environment` registers a copy of the dataset.
pub const TEST_PROVIDER: &str = "test";

/// Digits, letters, ASCII punctuation and whitespace, in that order.
pub const PRINTABLE: &str = concat!(
    "0123456789",
    "abcdefghijklmnopqrstuvwxyz",
    "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
    "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~",
    " \t\n\r\x0b\x0c",
);

/// Characters that make `predict_fn` answer "punctuation". Deliberately not
/// the same set as ASCII punctuation.
const PREDICTED_PUNCTUATION: &str = "!\"#$%&()*+,-./:;<=>?@[^_`~aA";

/// Column order of `test_model`.
pub fn target_labels() -> Vec<String> {
    vec![PUNCTUATION.to_string(), NO_PUNCTUATION.to_string()]
}

pub fn test_instances() -> Vec<String> {
    PRINTABLE.chars().map(String::from).collect()
}

/// Ground truth for `test_instances`.
pub fn test_labels() -> Vec<BTreeSet<String>> {
    test_instances()
        .iter()
        .map(|item| {
            let label = if item.chars().any(|c| c.is_ascii_punctuation()) {
                PUNCTUATION
            } else {
                NO_PUNCTUATION
            };
            BTreeSet::from([label.to_string()])
        })
        .collect()
}

/// Environment over the punctuation dataset keyed by position, with the
/// full dataset also registered as the named provider `"test"`.
pub fn test_environment() -> Result<TextEnvironment<usize, String>, DatasetError> {
    let instances = test_instances();
    let mut environment = TextEnvironment::from_data(
        target_labels().into_iter().collect(),
        (0..instances.len()).collect(),
        instances,
        test_labels(),
    )?;
    let dataset = environment.dataset().clone();
    environment.set_named_provider(TEST_PROVIDER, dataset);
    Ok(environment)
}

/// Scores `[punctuation, no_punctuation]` for one text.
pub fn predict_fn(instance: &str) -> Vec<f32> {
    if instance.chars().any(|c| PREDICTED_PUNCTUATION.contains(c)) {
        vec![0.7, 0.3]
    } else {
        vec![0.3, 0.7]
    }
}

pub fn test_model() -> Result<DeterministicTextClassifier<String>, ClassifierError> {
    DeterministicTextClassifier::from_callable(
        |instance: &String| -> Result<Vec<f32>> { Ok(predict_fn(instance)) },
        target_labels(),
    )
}
