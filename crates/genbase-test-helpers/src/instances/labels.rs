use std::collections::{BTreeSet, HashMap};
use std::hash::Hash;

use crate::error::DatasetError;

/// Ground-truth (or model-assigned) labels for instance keys.
pub trait LabelProvider<K, L> {
    /// Every label that may be assigned.
    fn labelset(&self) -> &BTreeSet<L>;

    /// Labels of `key`; empty when the key has none.
    fn get_labels(&self, key: &K) -> BTreeSet<L>;

    /// Keys carrying `label`.
    fn get_instances_by_label(&self, label: &L) -> BTreeSet<K>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct MemoryLabelProvider<K, L>
where
    K: Hash + Eq,
{
    labelset: BTreeSet<L>,
    labels: HashMap<K, BTreeSet<L>>,
}

impl<K, L> MemoryLabelProvider<K, L>
where
    K: Clone + Hash + Eq + Ord,
    L: Clone + Ord,
{
    pub fn new(labelset: BTreeSet<L>) -> Self {
        Self {
            labelset,
            labels: HashMap::new(),
        }
    }

    /// Build a provider from keys and their label sets, paired by position.
    pub fn from_data(
        labelset: BTreeSet<L>,
        keys: Vec<K>,
        labels: Vec<BTreeSet<L>>,
    ) -> Result<Self, DatasetError> {
        if keys.len() != labels.len() {
            return Err(DatasetError::LengthMismatch {
                field: "labels",
                expected: keys.len(),
                found: labels.len(),
            });
        }
        let mut provider = Self::new(labelset);
        for (key, key_labels) in keys.into_iter().zip(labels) {
            provider.set_labels(key, key_labels);
        }
        Ok(provider)
    }

    /// Replace the labels of `key`.
    pub fn set_labels(&mut self, key: K, labels: BTreeSet<L>) {
        self.labels.insert(key, labels);
    }

    pub fn add_labels(&mut self, key: K, labels: impl IntoIterator<Item = L>) {
        self.labels.entry(key).or_default().extend(labels);
    }

    pub fn remove_labels(&mut self, key: &K, labels: &[L]) {
        if let Some(current) = self.labels.get_mut(key) {
            for label in labels {
                current.remove(label);
            }
        }
    }
}

impl<K, L> LabelProvider<K, L> for MemoryLabelProvider<K, L>
where
    K: Clone + Hash + Eq + Ord,
    L: Clone + Ord,
{
    fn labelset(&self) -> &BTreeSet<L> {
        &self.labelset
    }

    fn get_labels(&self, key: &K) -> BTreeSet<L> {
        self.labels.get(key).cloned().unwrap_or_default()
    }

    fn get_instances_by_label(&self, label: &L) -> BTreeSet<K> {
        self.labels
            .iter()
            .filter(|(_, labels)| labels.contains(label))
            .map(|(key, _)| key.clone())
            .collect()
    }
}
