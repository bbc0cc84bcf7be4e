use thiserror::Error;

/// Errors raised while fitting, evaluating or querying a spam classifier.
#[derive(Debug, Error)]
pub enum ClassifierError {
    /// The training data cannot produce a meaningful model (empty set,
    /// empty vocabulary or a single label class).
    #[error("invalid training data: {0}")]
    InvalidTrainingData(String),

    #[error("length mismatch: {rows} feature rows but {labels} labels")]
    LengthMismatch { rows: usize, labels: usize },

    #[error("model '{0}' must be fitted before predicting")]
    NotFitted(String),

    #[error("cannot evaluate on an empty dataset")]
    EmptyEvaluationSet,

    #[error("vectorizer error: {0}")]
    Vectorizer(String),

    /// Error reported by the underlying learning library.
    #[error("failed to fit '{model}': {reason}")]
    Fit { model: String, reason: String },
}
