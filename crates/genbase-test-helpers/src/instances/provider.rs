use std::collections::HashMap;
use std::hash::Hash;

use super::Instance;

/// An ordered collection of instances addressable by key.
pub trait InstanceProvider<I: Instance> {
    /// Instances in a stable order.
    fn values(&self) -> Box<dyn Iterator<Item = &I> + '_>;

    fn keys(&self) -> Vec<I::Key> {
        self.values().map(|ins| ins.identifier()).collect()
    }

    fn get(&self, key: &I::Key) -> Option<&I>;

    fn contains(&self, key: &I::Key) -> bool {
        self.get(key).is_some()
    }

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Insertion-ordered provider backed by a `Vec` and a key index.
#[derive(Debug, Clone)]
pub struct MemoryProvider<I: Instance> {
    instances: Vec<I>,
    index: HashMap<I::Key, usize>,
}

impl<I> MemoryProvider<I>
where
    I: Instance,
    I::Key: Hash + Eq,
{
    pub fn new() -> Self {
        Self {
            instances: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Collect instances; a later instance replaces an earlier one with the
    /// same key without changing its position.
    pub fn from_instances<T>(instances: T) -> Self
    where
        T: IntoIterator<Item = I>,
    {
        let mut provider = Self::new();
        for instance in instances {
            provider.add(instance);
        }
        provider
    }

    pub fn add(&mut self, instance: I) {
        let key = instance.identifier();
        match self.index.get(&key) {
            Some(&position) => self.instances[position] = instance,
            None => {
                self.index.insert(key, self.instances.len());
                self.instances.push(instance);
            }
        }
    }
}

impl<I> Default for MemoryProvider<I>
where
    I: Instance,
    I::Key: Hash + Eq,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<I> InstanceProvider<I> for MemoryProvider<I>
where
    I: Instance,
    I::Key: Hash + Eq,
{
    fn values(&self) -> Box<dyn Iterator<Item = &I> + '_> {
        Box::new(self.instances.iter())
    }

    fn get(&self, key: &I::Key) -> Option<&I> {
        self.index.get(key).map(|&position| &self.instances[position])
    }

    fn len(&self) -> usize {
        self.instances.len()
    }
}
