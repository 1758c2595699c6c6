pub mod encoder;

pub use encoder::{DictionaryEncoder, LabelProbabilities};
