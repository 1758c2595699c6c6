//! genbase-test-helpers: deterministic classifiers and fixtures for testing
//! active learning code.
//!
//! The central piece is `DeterministicClassifier`, which satisfies the
//! `Classifier` capability set by calling a prediction function supplied by
//! the test instead of training a model. The `fixtures` module carries the
//! randomized data helpers (`corrupt`, `random_combinations`) and a small
//! labelled text environment.
pub mod config;
pub mod error;
pub mod fixtures;
pub mod instances;
pub mod labels;
pub mod math;
pub mod models;

pub use config::{ClassifierConfig, DEFAULT_BATCH_SIZE};
pub use error::{ClassifierError, DatasetError};
pub use models::classifier_trait::Classifier;
pub use models::deterministic::{DeterministicClassifier, DeterministicTextClassifier};
