use std::ops::Index;

use thiserror::Error;

#[derive(Clone, Debug, PartialEq)]
pub struct Array2<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T> Array2<T> {
    pub fn from_shape_vec(shape: (usize, usize), data: Vec<T>) -> Result<Self, ShapeError> {
        let (rows, cols) = shape;
        if data.len() != rows * cols {
            return Err(ShapeError::Buffer {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Stack equally sized rows into a matrix, keeping their order.
    ///
    /// An empty iterator yields a `(0, 0)` matrix.
    pub fn from_rows(rows: impl IntoIterator<Item = Vec<T>>) -> Result<Self, ShapeError> {
        let mut data = Vec::new();
        let mut cols = None;
        let mut n_rows = 0;
        for row in rows {
            match cols {
                None => cols = Some(row.len()),
                Some(expected) if expected != row.len() => {
                    return Err(ShapeError::RaggedRow {
                        row: n_rows,
                        expected,
                        found: row.len(),
                    });
                }
                Some(_) => {}
            }
            data.extend(row);
            n_rows += 1;
        }
        Ok(Self {
            data,
            rows: n_rows,
            cols: cols.unwrap_or(0),
        })
    }

    pub fn nrows(&self) -> usize {
        self.rows
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    pub fn row_slice(&self, row: usize) -> &[T] {
        let start = self.offset(row, 0);
        &self.data[start..start + self.cols]
    }

    /// Iterate over rows in order.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        (0..self.rows).map(move |row| self.row_slice(row))
    }
}

impl Array2<f32> {
    /// Column index of the largest value in each row.
    ///
    /// Ties resolve to the lowest column and a NaN counts as the maximum (the
    /// first NaN wins), the same rule numpy's `argmax` applies. Rows of a
    /// matrix without columns have no argmax, so `None` is returned.
    pub fn argmax_rows(&self) -> Option<Vec<usize>> {
        if self.cols == 0 && self.rows > 0 {
            return None;
        }
        Some(self.rows().map(argmax).collect())
    }
}

fn argmax(row: &[f32]) -> usize {
    let mut best = 0;
    for (col, &value) in row.iter().enumerate().skip(1) {
        if row[best].is_nan() {
            break;
        }
        if value.is_nan() || value > row[best] {
            best = col;
        }
    }
    best
}

impl<T> Index<(usize, usize)> for Array2<T> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        let offset = self.offset(index.0, index.1);
        &self.data[offset]
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShapeError {
    #[error("invalid shape ({rows}, {cols}) for buffer of length {len}")]
    Buffer { rows: usize, cols: usize, len: usize },

    #[error("row {row} has {found} columns, expected {expected}")]
    RaggedRow { row: usize, expected: usize, found: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argmax_prefers_lowest_column_on_ties() {
        let m = Array2::from_rows(vec![vec![0.5f32, 0.5], vec![0.2, 0.8], vec![0.9, 0.1]]).unwrap();
        assert_eq!(m.argmax_rows(), Some(vec![0, 1, 0]));
    }

    #[test]
    fn test_argmax_treats_nan_as_maximum() {
        let m = Array2::from_rows(vec![
            vec![0.1f32, f32::NAN, 0.9],
            vec![f32::NAN, 1.0, f32::NAN],
        ])
        .unwrap();
        assert_eq!(m.argmax_rows(), Some(vec![1, 0]));
    }

    #[test]
    fn test_argmax_without_columns() {
        let m: Array2<f32> = Array2::from_shape_vec((2, 0), vec![]).unwrap();
        assert_eq!(
            Array2::from_shape_vec((2, 2), vec![1.0f32]).unwrap_err().to_string(),
            "invalid shape (2, 2) for buffer of length 1"
        );
        assert_eq!(m.argmax_rows(), None);
        let empty: Array2<f32> = Array2::from_rows(Vec::<Vec<f32>>::new()).unwrap();
        assert_eq!(empty.argmax_rows(), Some(vec![]));
    }

    #[test]
    fn test_from_rows_rejects_ragged_input() {
        let err = Array2::from_rows(vec![vec![1.0f32, 2.0], vec![3.0]]).unwrap_err();
        assert_eq!(
            err,
            ShapeError::RaggedRow {
                row: 1,
                expected: 2,
                found: 1
            }
        );
        assert_eq!(err.to_string(), "row 1 has 1 columns, expected 2");
    }
}
