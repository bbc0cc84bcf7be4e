use ndarray::Array2;

use crate::error::ClassifierError;

/// Column of the ham probability in `predict_proba` output.
pub const HAM: usize = 0;
/// Column of the spam probability in `predict_proba` output.
pub const SPAM: usize = 1;

/// A small trait abstraction for the spam classifiers. The evaluator and the
/// interactive predictor are written against this contract, never against a
/// concrete backend.
pub trait ClassifierModel {
    /// Fit the model on a feature matrix and spam (`true`) / ham (`false`) labels.
    ///
    /// Fails with `InvalidTrainingData` on an empty set or when only one class
    /// is present.
    fn fit(&mut self, x: &Array2<f64>, y: &[bool]) -> Result<(), ClassifierError>;

    /// Class probabilities with shape `(n_samples, 2)`; column [`HAM`] then
    /// column [`SPAM`]. Every row sums to 1.
    fn predict_proba(&self, x: &Array2<f64>) -> Result<Array2<f64>, ClassifierError>;

    /// Discrete predictions, spam when P(spam) > P(ham).
    fn predict(&self, x: &Array2<f64>) -> Result<Vec<bool>, ClassifierError> {
        let proba = self.predict_proba(x)?;
        Ok(proba
            .rows()
            .into_iter()
            .map(|row| row[SPAM] > row[HAM])
            .collect())
    }

    /// Optional human readable name for the model
    fn name(&self) -> &str {
        "classifier"
    }
}
