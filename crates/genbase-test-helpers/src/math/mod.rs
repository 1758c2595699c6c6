//! Dense score matrices.
//!
//! `Array2` is the row-major container prediction functions return: one row
//! per instance, one column per target label. It carries only what batching
//! and decoding need (row stacking, row access and row-wise argmax).
pub mod matrix;

pub use matrix::{Array2, ShapeError};
