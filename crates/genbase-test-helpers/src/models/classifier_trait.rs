use std::collections::BTreeSet;
use std::fmt::Debug;

use anyhow::{Context, Result};

use crate::instances::{Instance, InstanceProvider, LabelProvider};
use crate::labels::LabelProbabilities;
use crate::math::Array2;
use crate::models::utils::divide_in_batches;

/// Key of an instance with the single label predicted for it.
pub type Prediction<K, L> = (K, BTreeSet<L>);

/// Key of an instance with the score of every target label.
pub type ProbaPrediction<K, L> = (K, LabelProbabilities<L>);

/// Keys of one batch with the undecoded score matrix, rows aligned to keys.
pub type RawBatch<K> = (Vec<K>, Array2<f32>);

/// Capability set shared by the classifiers of an active learning loop.
///
/// Implementations provide the per-batch hooks (`predict_batch`,
/// `predict_proba_batch`, `predict_proba_batch_raw`); batching over instance
/// slices and providers is supplied here and always keeps input order.
pub trait Classifier<I: Instance> {
    type Label: Clone + Ord + Debug;

    fn fit_instances(&mut self, instances: &[I], labels: &[BTreeSet<Self::Label>]) -> Result<()>;

    fn fit_provider(
        &mut self,
        provider: &dyn InstanceProvider<I>,
        labels: &dyn LabelProvider<I::Key, Self::Label>,
        batch_size: usize,
    ) -> Result<()>;

    fn predict_proba_batch_raw(&self, batch: &[&I]) -> Result<RawBatch<I::Key>>;

    fn predict_proba_batch(
        &self,
        batch: &[&I],
    ) -> Result<Vec<ProbaPrediction<I::Key, Self::Label>>>;

    fn predict_batch(&self, batch: &[&I]) -> Result<Vec<Prediction<I::Key, Self::Label>>>;

    /// Whether the classifier can predict.
    fn fitted(&self) -> bool;

    /// Human readable name for diagnostics.
    fn name(&self) -> &str {
        "classifier"
    }

    /// Replace the label <-> column mapping.
    fn set_target_labels(&mut self, labels: Vec<Self::Label>) -> Result<()>;

    fn get_label_column_index(&self, label: &Self::Label) -> Result<usize>;

    fn predict_instances(
        &self,
        instances: &[I],
        batch_size: usize,
    ) -> Result<Vec<Prediction<I::Key, Self::Label>>> {
        let refs: Vec<&I> = instances.iter().collect();
        collect_batches(refs.as_slice(), batch_size, |batch| self.predict_batch(batch))
    }

    fn predict_proba_instances(
        &self,
        instances: &[I],
        batch_size: usize,
    ) -> Result<Vec<ProbaPrediction<I::Key, Self::Label>>> {
        let refs: Vec<&I> = instances.iter().collect();
        collect_batches(refs.as_slice(), batch_size, |batch| self.predict_proba_batch(batch))
    }

    fn predict_proba_instances_raw(
        &self,
        instances: &[I],
        batch_size: usize,
    ) -> Result<Vec<RawBatch<I::Key>>> {
        let refs: Vec<&I> = instances.iter().collect();
        raw_batches(refs.as_slice(), batch_size, |batch| self.predict_proba_batch_raw(batch))
    }

    fn predict_provider(
        &self,
        provider: &dyn InstanceProvider<I>,
        batch_size: usize,
    ) -> Result<Vec<Prediction<I::Key, Self::Label>>> {
        let refs: Vec<&I> = provider.values().collect();
        collect_batches(refs.as_slice(), batch_size, |batch| self.predict_batch(batch))
    }

    fn predict_proba_provider(
        &self,
        provider: &dyn InstanceProvider<I>,
        batch_size: usize,
    ) -> Result<Vec<ProbaPrediction<I::Key, Self::Label>>> {
        let refs: Vec<&I> = provider.values().collect();
        collect_batches(refs.as_slice(), batch_size, |batch| self.predict_proba_batch(batch))
    }

    fn predict_proba_provider_raw(
        &self,
        provider: &dyn InstanceProvider<I>,
        batch_size: usize,
    ) -> Result<Vec<RawBatch<I::Key>>> {
        let refs: Vec<&I> = provider.values().collect();
        raw_batches(refs.as_slice(), batch_size, |batch| self.predict_proba_batch_raw(batch))
    }

    /// Predict the label set of a single instance.
    fn predict(&self, instance: &I) -> Result<BTreeSet<Self::Label>> {
        self.predict_batch(&[instance])?
            .into_iter()
            .next()
            .map(|(_, labels)| labels)
            .context("classifier returned no prediction for the instance")
    }

    /// Predict the label scores of a single instance.
    fn predict_proba(&self, instance: &I) -> Result<LabelProbabilities<Self::Label>> {
        self.predict_proba_batch(&[instance])?
            .into_iter()
            .next()
            .map(|(_, scores)| scores)
            .context("classifier returned no probabilities for the instance")
    }
}

fn collect_batches<'a, I, T, F>(
    instances: &[&'a I],
    batch_size: usize,
    mut predict: F,
) -> Result<Vec<T>>
where
    F: FnMut(&[&'a I]) -> Result<Vec<T>>,
{
    let mut results = Vec::with_capacity(instances.len());
    for batch in divide_in_batches(instances, batch_size)? {
        results.extend(predict(batch)?);
    }
    Ok(results)
}

fn raw_batches<'a, I, K, F>(
    instances: &[&'a I],
    batch_size: usize,
    predict: F,
) -> Result<Vec<RawBatch<K>>>
where
    F: FnMut(&[&'a I]) -> Result<RawBatch<K>>,
{
    divide_in_batches(instances, batch_size)?.map(predict).collect()
}
