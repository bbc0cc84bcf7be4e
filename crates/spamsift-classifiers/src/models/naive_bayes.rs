use linfa::traits::Fit;
use linfa::Dataset;
use linfa_bayes::{MultinomialNb, NaiveBayes};
use ndarray::Array2;

use crate::config::ModelType;
use crate::error::ClassifierError;
use crate::models::classifier_trait::ClassifierModel;
use crate::models::utils::{fit_error, to_class_labels, unexpected_params, validate_training_data};

/// Multinomial Naive Bayes with additive (Lidstone) smoothing.
pub struct NaiveBayesClassifier {
    model: Option<MultinomialNb<f64, usize>>,
    params: ModelType,
}

impl NaiveBayesClassifier {
    pub fn new(params: ModelType) -> Self {
        NaiveBayesClassifier {
            model: None,
            params,
        }
    }
}

impl ClassifierModel for NaiveBayesClassifier {
    fn fit(&mut self, x: &Array2<f64>, y: &[bool]) -> Result<(), ClassifierError> {
        validate_training_data(self.name(), x, y)?;

        let ModelType::NaiveBayes { alpha } = &self.params else {
            return Err(unexpected_params(self.name(), &self.params));
        };

        let dataset = Dataset::new(x.to_owned(), to_class_labels(y));
        let model = MultinomialNb::params()
            .alpha(*alpha)
            .fit(&dataset)
            .map_err(|e| fit_error(self.name(), e))?;

        self.model = Some(model);
        Ok(())
    }

    fn predict_proba(&self, x: &Array2<f64>) -> Result<Array2<f64>, ClassifierError> {
        let model = self
            .model
            .as_ref()
            .ok_or_else(|| ClassifierError::NotFitted(self.name().to_string()))?;

        // Columns come back in sorted class order, which is ham (0) then spam (1)
        // for a model fit on both classes; map them explicitly anyway.
        let (proba, classes) = model.predict_proba(x.view());
        let mut out = Array2::zeros((x.nrows(), 2));
        for (col, class) in classes.iter().enumerate() {
            out.column_mut(**class).assign(&proba.column(col));
        }
        Ok(out)
    }

    fn name(&self) -> &str {
        "naive_bayes"
    }
}
