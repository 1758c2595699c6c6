//! Instances and the providers that hold them.
//!
//! Classifiers only read an instance's identifier and data. Providers keep
//! instances in insertion order so that iterating `values()` twice yields the
//! same sequence.
pub mod labels;
pub mod provider;

pub use labels::{LabelProvider, MemoryLabelProvider};
pub use provider::{InstanceProvider, MemoryProvider};

use serde::{Deserialize, Serialize};

pub trait Instance {
    type Key: Clone;
    type Data;

    fn identifier(&self) -> Self::Key;

    fn data(&self) -> &Self::Data;
}

/// Plain in-memory instance.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MemoryInstance<K, D> {
    pub identifier: K,
    pub data: D,
}

/// Instance carrying a text payload.
pub type TextInstance<K> = MemoryInstance<K, String>;

impl<K, D> MemoryInstance<K, D> {
    pub fn new(identifier: K, data: D) -> Self {
        Self { identifier, data }
    }
}

impl<K: Clone, D> Instance for MemoryInstance<K, D> {
    type Key = K;
    type Data = D;

    fn identifier(&self) -> K {
        self.identifier.clone()
    }

    fn data(&self) -> &D {
        &self.data
    }
}
