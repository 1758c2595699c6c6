pub mod classifier_trait;
pub mod deterministic;
pub mod utils;
