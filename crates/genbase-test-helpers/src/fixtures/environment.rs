use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

use crate::error::DatasetError;
use crate::instances::{
    InstanceProvider, LabelProvider, MemoryLabelProvider, MemoryProvider, TextInstance,
};

/// A small labelled text dataset held entirely in memory.
///
/// Besides the full dataset, an environment keeps named providers so tests
/// can refer to subsets (or copies) of the data by name.
#[derive(Debug, Clone)]
pub struct TextEnvironment<K, L>
where
    K: Clone + Hash + Eq,
{
    dataset: MemoryProvider<TextInstance<K>>,
    labels: MemoryLabelProvider<K, L>,
    named_providers: BTreeMap<String, MemoryProvider<TextInstance<K>>>,
}

impl<K, L> TextEnvironment<K, L>
where
    K: Clone + Hash + Eq + Ord + Debug,
    L: Clone + Ord + Debug,
{
    /// Build an environment from parallel `indices`, `data` and
    /// `ground_truth` vectors.
    ///
    /// # Errors
    ///
    /// * `LengthMismatch` when `data` or `ground_truth` differ in length from
    ///   `indices`.
    /// * `DuplicateKey` when an index repeats.
    /// * `UnknownLabel` when a ground truth label is not a target label.
    pub fn from_data(
        target_labels: BTreeSet<L>,
        indices: Vec<K>,
        data: Vec<String>,
        ground_truth: Vec<BTreeSet<L>>,
    ) -> Result<Self, DatasetError> {
        if data.len() != indices.len() {
            return Err(DatasetError::LengthMismatch {
                field: "data",
                expected: indices.len(),
                found: data.len(),
            });
        }
        if ground_truth.len() != indices.len() {
            return Err(DatasetError::LengthMismatch {
                field: "ground_truth",
                expected: indices.len(),
                found: ground_truth.len(),
            });
        }

        let mut seen = HashSet::with_capacity(indices.len());
        for key in &indices {
            if !seen.insert(key) {
                return Err(DatasetError::DuplicateKey(format!("{:?}", key)));
            }
        }
        if let Some(label) = ground_truth
            .iter()
            .flatten()
            .find(|label| !target_labels.contains(*label))
        {
            return Err(DatasetError::UnknownLabel(format!("{:?}", label)));
        }

        let dataset = MemoryProvider::from_instances(
            indices
                .iter()
                .cloned()
                .zip(data)
                .map(|(key, text)| TextInstance::new(key, text)),
        );
        let labels = MemoryLabelProvider::from_data(target_labels, indices, ground_truth)?;
        log::debug!("Built text environment with {} instances", dataset.len());

        Ok(Self {
            dataset,
            labels,
            named_providers: BTreeMap::new(),
        })
    }

    pub fn dataset(&self) -> &MemoryProvider<TextInstance<K>> {
        &self.dataset
    }

    /// Ground truth labels.
    pub fn labels(&self) -> &MemoryLabelProvider<K, L> {
        &self.labels
    }

    pub fn target_labels(&self) -> &BTreeSet<L> {
        self.labels.labelset()
    }

    /// Register `provider` under `name`, replacing any earlier one.
    pub fn set_named_provider(
        &mut self,
        name: impl Into<String>,
        provider: MemoryProvider<TextInstance<K>>,
    ) {
        self.named_providers.insert(name.into(), provider);
    }

    pub fn get_named_provider(&self, name: &str) -> Option<&MemoryProvider<TextInstance<K>>> {
        self.named_providers.get(name)
    }

    /// Names of the registered providers, sorted.
    pub fn named_providers(&self) -> impl Iterator<Item = &str> + '_ {
        self.named_providers.keys().map(String::as_str)
    }
}
