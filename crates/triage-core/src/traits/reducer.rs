use crate::errors::TriageResult;

/// Maps a batch of vectors to a lower-dimensional batch.
pub trait IDimensionReducer {
    /// Reduce `vectors`. The output has one row per input row, in order.
    /// Degenerate batches (zero or one row) pass through unchanged.
    fn reduce(&self, vectors: Vec<Vec<f32>>) -> TriageResult<Vec<Vec<f32>>>;

    fn name(&self) -> &str;
}
