use linfa::traits::{Fit, Predict};
use linfa::Dataset;
use linfa_trees::{DecisionTree, SplitQuality};
use ndarray::{Array1, Array2};

use crate::config::ModelType;
use crate::error::ClassifierError;
use crate::models::classifier_trait::{ClassifierModel, SPAM};
use crate::models::utils::{
    fit_error, probabilities_from_spam, to_class_labels, unexpected_params,
    validate_training_data,
};

/// Single decision tree (Gini impurity) classifier.
///
/// A tree grown without depth limit ends in pure leaves, so probabilities are
/// the hard 0/1 vote of the leaf a sample falls into.
pub struct DecisionTreeClassifier {
    model: Option<DecisionTree<f64, usize>>,
    params: ModelType,
}

impl DecisionTreeClassifier {
    pub fn new(params: ModelType) -> Self {
        DecisionTreeClassifier {
            model: None,
            params,
        }
    }
}

impl ClassifierModel for DecisionTreeClassifier {
    fn fit(&mut self, x: &Array2<f64>, y: &[bool]) -> Result<(), ClassifierError> {
        validate_training_data(self.name(), x, y)?;

        let ModelType::DecisionTree {
            max_depth,
            min_weight_split,
        } = &self.params
        else {
            return Err(unexpected_params(self.name(), &self.params));
        };

        let dataset = Dataset::new(x.to_owned(), to_class_labels(y));
        let model = DecisionTree::params()
            .split_quality(SplitQuality::Gini)
            .max_depth(*max_depth)
            .min_weight_split(*min_weight_split)
            .fit(&dataset)
            .map_err(|e| fit_error(self.name(), e))?;

        log::debug!(
            "Fitted decision tree with depth {} and {} leaves",
            model.max_depth(),
            model.num_leaves()
        );
        self.model = Some(model);
        Ok(())
    }

    fn predict_proba(&self, x: &Array2<f64>) -> Result<Array2<f64>, ClassifierError> {
        let model = self
            .model
            .as_ref()
            .ok_or_else(|| ClassifierError::NotFitted(self.name().to_string()))?;

        let labels: Array1<usize> = model.predict(x);
        Ok(probabilities_from_spam(
            labels
                .iter()
                .map(|&label| if label == SPAM { 1.0 } else { 0.0 }),
        ))
    }

    fn name(&self) -> &str {
        "decision_tree"
    }
}
