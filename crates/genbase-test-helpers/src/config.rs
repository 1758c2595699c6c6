use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::ClassifierError;

/// Batch size used when a caller has no preference.
pub const DEFAULT_BATCH_SIZE: usize = 200;

/// Runtime settings for the deterministic classifiers.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Number of instances handed to the prediction function per call by the
    /// `predict_*_all` methods of `DeterministicClassifier`.
    pub batch_size: usize,

    /// Log a warning when `set_target_labels` changes the column layout.
    pub warn_on_rebind: bool,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            warn_on_rebind: true,
        }
    }
}

impl ClassifierConfig {
    pub fn new(batch_size: usize, warn_on_rebind: bool) -> Self {
        Self {
            batch_size,
            warn_on_rebind,
        }
    }

    pub fn validate(&self) -> Result<(), ClassifierError> {
        if self.batch_size == 0 {
            return Err(ClassifierError::InvalidBatchSize(self.batch_size));
        }
        Ok(())
    }
}

/// Read a `ClassifierConfig` from a JSON file. Missing fields take their
/// default values.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<ClassifierConfig> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let config: ClassifierConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    config
        .validate()
        .with_context(|| format!("Invalid config: {}", path.as_ref().display()))?;
    Ok(config)
}
