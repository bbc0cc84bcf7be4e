use std::fmt::Display;

use ndarray::{Array1, Array2};

use crate::config::ModelType;
use crate::error::ClassifierError;
use crate::models::classifier_trait::{HAM, SPAM};

/// Reject training data that cannot produce a two-class model.
pub fn validate_training_data(
    model: &str,
    x: &Array2<f64>,
    y: &[bool],
) -> Result<(), ClassifierError> {
    if x.nrows() == 0 || y.is_empty() {
        return Err(ClassifierError::InvalidTrainingData(format!(
            "{} cannot be fit on an empty training set",
            model
        )));
    }
    if x.nrows() != y.len() {
        return Err(ClassifierError::LengthMismatch {
            rows: x.nrows(),
            labels: y.len(),
        });
    }
    if x.ncols() == 0 {
        return Err(ClassifierError::InvalidTrainingData(format!(
            "{} cannot be fit on a feature matrix without columns",
            model
        )));
    }

    let n_spam = y.iter().filter(|&&label| label).count();
    if n_spam == 0 || n_spam == y.len() {
        return Err(ClassifierError::InvalidTrainingData(format!(
            "{} needs both spam and ham examples, got {} spam out of {}",
            model,
            n_spam,
            y.len()
        )));
    }

    Ok(())
}

/// Convert boolean labels to the `usize` class indices used by linfa (ham = 0, spam = 1).
pub fn to_class_labels(y: &[bool]) -> Array1<usize> {
    y.iter().map(|&is_spam| if is_spam { SPAM } else { HAM }).collect()
}

/// Build an `(n, 2)` probability matrix from per-row spam probabilities.
pub fn probabilities_from_spam<I>(p_spam: I) -> Array2<f64>
where
    I: ExactSizeIterator<Item = f64>,
{
    let mut proba = Array2::zeros((p_spam.len(), 2));
    for (mut row, p) in proba.rows_mut().into_iter().zip(p_spam) {
        let p = p.clamp(0.0, 1.0);
        row[HAM] = 1.0 - p;
        row[SPAM] = p;
    }
    proba
}

pub(crate) fn fit_error<E: Display>(model: &str, error: E) -> ClassifierError {
    ClassifierError::Fit {
        model: model.to_string(),
        reason: error.to_string(),
    }
}

pub(crate) fn unexpected_params(model: &str, model_type: &ModelType) -> ClassifierError {
    ClassifierError::Fit {
        model: model.to_string(),
        reason: format!("expected {} parameters, got {:?}", model, model_type),
    }
}
