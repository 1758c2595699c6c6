//! A classifier that never learns.
//!
//! `DeterministicClassifier` answers every prediction by calling a function
//! supplied at construction and decoding its score matrix with a
//! `DictionaryEncoder`. Fitting is a no-op, so tests can assert exact outputs
//! without training anything.
use std::collections::BTreeSet;
use std::fmt::Debug;

use anyhow::Result;

use crate::config::ClassifierConfig;
use crate::error::ClassifierError;
use crate::instances::{Instance, InstanceProvider, LabelProvider};
use crate::labels::DictionaryEncoder;
use crate::math::Array2;
use crate::models::classifier_trait::{Classifier, Prediction, ProbaPrediction, RawBatch};

/// Scores a batch of data payloads: one row per payload, one column per
/// target label.
pub type BatchPredictFn<D> = Box<dyn Fn(&[&D]) -> Result<Array2<f32>>>;

pub struct DeterministicClassifier<D, L> {
    predict_function: BatchPredictFn<D>,
    encoder: DictionaryEncoder<L>,
    config: ClassifierConfig,
}

/// Deterministic classifier over text payloads.
pub type DeterministicTextClassifier<L> = DeterministicClassifier<String, L>;

impl<D, L> DeterministicClassifier<D, L>
where
    L: Clone + Ord + Debug,
{
    /// Wrap a batched prediction function.
    ///
    /// The columns of the returned matrices are read in the order of
    /// `target_labels`.
    ///
    /// # Errors
    ///
    /// Fails when `target_labels` is empty or repeats a label.
    pub fn new<F, T>(predict_function: F, target_labels: T) -> Result<Self, ClassifierError>
    where
        F: Fn(&[&D]) -> Result<Array2<f32>> + 'static,
        T: IntoIterator<Item = L>,
    {
        Ok(Self {
            predict_function: Box::new(predict_function),
            encoder: DictionaryEncoder::from_labels(target_labels)?,
            config: ClassifierConfig::default(),
        })
    }

    /// Wrap a per-instance prediction function. Rows are stacked in input
    /// order; score vectors of differing lengths are a shape error.
    pub fn from_callable<F, T>(
        predict_function: F,
        target_labels: T,
    ) -> Result<Self, ClassifierError>
    where
        F: Fn(&D) -> Result<Vec<f32>> + 'static,
        T: IntoIterator<Item = L>,
    {
        Self::new(
            move |batch: &[&D]| {
                let rows = batch
                    .iter()
                    .map(|&data| predict_function(data))
                    .collect::<Result<Vec<_>>>()?;
                Ok(Array2::from_rows(rows).map_err(ClassifierError::from)?)
            },
            target_labels,
        )
    }

    pub fn from_batched_callable<F, T>(
        predict_function: F,
        target_labels: T,
    ) -> Result<Self, ClassifierError>
    where
        F: Fn(&[&D]) -> Result<Array2<f32>> + 'static,
        T: IntoIterator<Item = L>,
    {
        Self::new(predict_function, target_labels)
    }

    pub fn with_config(mut self, config: ClassifierConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    pub fn encoder(&self) -> &DictionaryEncoder<L> {
        &self.encoder
    }

    /// Always `true`: there is nothing to train.
    pub fn fitted(&self) -> bool {
        true
    }

    pub fn name(&self) -> &str {
        "DeterministicClassifier"
    }

    /// Rebuild the encoder from `labels`, discarding the previous mapping.
    ///
    /// The prediction function is not touched, so its columns must already
    /// follow the new order.
    pub fn set_target_labels<T>(&mut self, labels: T) -> Result<(), ClassifierError>
    where
        T: IntoIterator<Item = L>,
    {
        let encoder = DictionaryEncoder::from_labels(labels)?;
        if self.config.warn_on_rebind && encoder.labels() != self.encoder.labels() {
            log::warn!(
                "Target labels changed from {:?} to {:?}; prediction functions written for the previous column order will be misread",
                self.encoder.labels(),
                encoder.labels()
            );
        }
        self.encoder = encoder;
        Ok(())
    }

    pub fn get_label_column_index(&self, label: &L) -> Result<usize, ClassifierError> {
        self.encoder.get_label_column_index(label)
    }

    /// `predict_instances` with the configured batch size.
    pub fn predict_all<I>(&self, instances: &[I]) -> Result<Vec<Prediction<I::Key, L>>>
    where
        I: Instance<Data = D>,
    {
        Classifier::<I>::predict_instances(self, instances, self.config.batch_size)
    }

    /// `predict_proba_instances` with the configured batch size.
    pub fn predict_proba_all<I>(
        &self,
        instances: &[I],
    ) -> Result<Vec<ProbaPrediction<I::Key, L>>>
    where
        I: Instance<Data = D>,
    {
        Classifier::<I>::predict_proba_instances(self, instances, self.config.batch_size)
    }

    pub fn predict_provider_all<I>(
        &self,
        provider: &dyn InstanceProvider<I>,
    ) -> Result<Vec<Prediction<I::Key, L>>>
    where
        I: Instance<Data = D>,
    {
        Classifier::<I>::predict_provider(self, provider, self.config.batch_size)
    }

    pub fn predict_proba_provider_all<I>(
        &self,
        provider: &dyn InstanceProvider<I>,
    ) -> Result<Vec<ProbaPrediction<I::Key, L>>>
    where
        I: Instance<Data = D>,
    {
        Classifier::<I>::predict_proba_provider(self, provider, self.config.batch_size)
    }

    fn score_batch<I>(&self, batch: &[&I]) -> Result<RawBatch<I::Key>>
    where
        I: Instance<Data = D>,
    {
        let keys: Vec<I::Key> = batch.iter().map(|ins| ins.identifier()).collect();
        let data: Vec<&D> = batch.iter().map(|ins| ins.data()).collect();
        log::debug!("Scoring batch of {} instances", data.len());

        let scores = (self.predict_function)(data.as_slice())?;
        if scores.nrows() != keys.len() || scores.ncols() != self.encoder.len() {
            return Err(ClassifierError::PredictionShape {
                rows: scores.nrows(),
                cols: scores.ncols(),
                expected_rows: keys.len(),
                expected_cols: self.encoder.len(),
            }
            .into());
        }
        Ok((keys, scores))
    }
}

impl<I, L> Classifier<I> for DeterministicClassifier<I::Data, L>
where
    I: Instance,
    L: Clone + Ord + Debug,
{
    type Label = L;

    fn fit_instances(&mut self, instances: &[I], _labels: &[BTreeSet<L>]) -> Result<()> {
        log::trace!("Ignoring fit on {} instances", instances.len());
        Ok(())
    }

    fn fit_provider(
        &mut self,
        provider: &dyn InstanceProvider<I>,
        _labels: &dyn LabelProvider<I::Key, L>,
        _batch_size: usize,
    ) -> Result<()> {
        log::trace!("Ignoring fit on provider with {} instances", provider.len());
        Ok(())
    }

    fn predict_proba_batch_raw(&self, batch: &[&I]) -> Result<RawBatch<I::Key>> {
        self.score_batch(batch)
    }

    fn predict_proba_batch(&self, batch: &[&I]) -> Result<Vec<ProbaPrediction<I::Key, L>>> {
        let (keys, scores) = self.score_batch(batch)?;
        let decoded = self.encoder.decode_proba_matrix(&scores)?;
        Ok(keys.into_iter().zip(decoded).collect())
    }

    fn predict_batch(&self, batch: &[&I]) -> Result<Vec<Prediction<I::Key, L>>> {
        let (keys, scores) = self.score_batch(batch)?;
        let columns = scores
            .argmax_rows()
            .ok_or(ClassifierError::PredictionShape {
                rows: scores.nrows(),
                cols: scores.ncols(),
                expected_rows: keys.len(),
                expected_cols: self.encoder.len(),
            })?;
        let decoded = self.encoder.decode_matrix(&columns)?;
        Ok(keys.into_iter().zip(decoded).collect())
    }

    fn fitted(&self) -> bool {
        DeterministicClassifier::fitted(self)
    }

    fn name(&self) -> &str {
        DeterministicClassifier::name(self)
    }

    fn set_target_labels(&mut self, labels: Vec<L>) -> Result<()> {
        Ok(DeterministicClassifier::set_target_labels(self, labels)?)
    }

    fn get_label_column_index(&self, label: &L) -> Result<usize> {
        Ok(DeterministicClassifier::get_label_column_index(self, label)?)
    }
}
