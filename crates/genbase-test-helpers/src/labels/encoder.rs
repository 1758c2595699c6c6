//! Mapping between labels and score matrix columns.
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Debug;

use crate::error::ClassifierError;
use crate::math::Array2;

/// Labels paired with their score, in column order.
pub type LabelProbabilities<L> = Vec<(L, f32)>;

/// Bijective label <-> column index mapping.
///
/// Column indices follow the order in which labels were supplied and are
/// contiguous from zero.
#[derive(Debug, Clone, PartialEq)]
pub struct DictionaryEncoder<L> {
    mapping: BTreeMap<L, usize>,
    labels: Vec<L>,
}

impl<L> DictionaryEncoder<L>
where
    L: Clone + Ord + Debug,
{
    /// Build an encoder from an ordered label collection.
    ///
    /// # Errors
    ///
    /// `EmptyLabelSet` if no label is given, `DuplicateLabel` if a label is
    /// repeated.
    pub fn from_labels<T>(labels: T) -> Result<Self, ClassifierError>
    where
        T: IntoIterator<Item = L>,
    {
        let mut mapping = BTreeMap::new();
        let mut ordered = Vec::new();
        for label in labels {
            if mapping.contains_key(&label) {
                return Err(ClassifierError::DuplicateLabel(format!("{:?}", label)));
            }
            mapping.insert(label.clone(), ordered.len());
            ordered.push(label);
        }
        if ordered.is_empty() {
            return Err(ClassifierError::EmptyLabelSet);
        }
        Ok(Self {
            mapping,
            labels: ordered,
        })
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Labels in column order.
    pub fn labels(&self) -> &[L] {
        &self.labels
    }

    pub fn get_label_column_index(&self, label: &L) -> Result<usize, ClassifierError> {
        self.mapping
            .get(label)
            .copied()
            .ok_or_else(|| ClassifierError::UnknownLabel(format!("{:?}", label)))
    }

    pub fn get_label(&self, column: usize) -> Result<&L, ClassifierError> {
        self.labels
            .get(column)
            .ok_or(ClassifierError::UnknownColumn(column))
    }

    /// Decode column indices (one per instance) into single-label sets.
    pub fn decode_matrix(&self, columns: &[usize]) -> Result<Vec<BTreeSet<L>>, ClassifierError> {
        columns
            .iter()
            .map(|&column| {
                let label = self.get_label(column)?;
                Ok::<_, ClassifierError>(BTreeSet::from([label.clone()]))
            })
            .collect()
    }

    /// Decode every row of a score matrix into `(label, score)` pairs.
    pub fn decode_proba_matrix(
        &self,
        matrix: &Array2<f32>,
    ) -> Result<Vec<LabelProbabilities<L>>, ClassifierError> {
        if matrix.ncols() != self.len() {
            return Err(ClassifierError::PredictionShape {
                rows: matrix.nrows(),
                cols: matrix.ncols(),
                expected_rows: matrix.nrows(),
                expected_cols: self.len(),
            });
        }
        Ok(matrix
            .rows()
            .map(|row| self.labels.iter().cloned().zip(row.iter().copied()).collect())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encoder() -> DictionaryEncoder<String> {
        DictionaryEncoder::from_labels(["spam".to_string(), "ham".to_string(), "eggs".to_string()])
            .unwrap()
    }

    #[test]
    fn test_columns_follow_input_order() {
        let enc = encoder();
        assert_eq!(enc.get_label_column_index(&"spam".to_string()).unwrap(), 0);
        assert_eq!(enc.get_label_column_index(&"ham".to_string()).unwrap(), 1);
        assert_eq!(enc.get_label_column_index(&"eggs".to_string()).unwrap(), 2);
        assert_eq!(enc.get_label(1).unwrap(), "ham");
    }

    #[test]
    fn test_unknown_label() {
        let err = encoder()
            .get_label_column_index(&"bacon".to_string())
            .unwrap_err();
        assert!(matches!(err, ClassifierError::UnknownLabel(ref l) if l == "\"bacon\""));
    }

    #[test]
    fn test_empty_and_duplicate_labels_rejected() {
        assert!(matches!(
            DictionaryEncoder::<u8>::from_labels(Vec::new()),
            Err(ClassifierError::EmptyLabelSet)
        ));
        assert!(matches!(
            DictionaryEncoder::from_labels([1u8, 2, 1]),
            Err(ClassifierError::DuplicateLabel(_))
        ));
    }

    #[test]
    fn test_decode_matrix() {
        let enc = encoder();
        let decoded = enc.decode_matrix(&[2, 0]).unwrap();
        assert_eq!(decoded[0], BTreeSet::from(["eggs".to_string()]));
        assert_eq!(decoded[1], BTreeSet::from(["spam".to_string()]));
        assert!(matches!(
            enc.decode_matrix(&[3]),
            Err(ClassifierError::UnknownColumn(3))
        ));
    }

    #[test]
    fn test_decode_proba_matrix_checks_width() {
        let enc = encoder();
        let m = Array2::from_rows(vec![vec![0.1f32, 0.2, 0.7]]).unwrap();
        let decoded = enc.decode_proba_matrix(&m).unwrap();
        assert_eq!(
            decoded[0],
            vec![
                ("spam".to_string(), 0.1),
                ("ham".to_string(), 0.2),
                ("eggs".to_string(), 0.7)
            ]
        );

        let narrow = Array2::from_rows(vec![vec![0.1f32, 0.9]]).unwrap();
        assert!(matches!(
            enc.decode_proba_matrix(&narrow),
            Err(ClassifierError::PredictionShape { cols: 2, expected_cols: 3, .. })
        ));
    }
}
