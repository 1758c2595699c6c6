use crate::error::ClassifierError;

/// Split `items` into contiguous batches of at most `batch_size` elements.
///
/// Batches keep the input order and together cover every element once. An
/// empty input produces no batches.
pub fn divide_in_batches<T>(
    items: &[T],
    batch_size: usize,
) -> Result<std::slice::Chunks<'_, T>, ClassifierError> {
    if batch_size == 0 {
        return Err(ClassifierError::InvalidBatchSize(batch_size));
    }
    Ok(items.chunks(batch_size))
}
