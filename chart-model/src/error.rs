/// Failures surfaced by the chart value model.
#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    /// A required value was structurally absent. Always a caller bug,
    /// never a recoverable runtime condition.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// A caller required a recorded elapsed time and none was present.
    /// Raised by calling code after inspecting the model, not by the
    /// model itself.
    #[error("missing fractional time: {0}")]
    MissingFractionalTime(String),
}
