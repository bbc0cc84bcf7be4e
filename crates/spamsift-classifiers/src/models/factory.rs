use crate::config::ModelType;
use crate::models::classifier_trait::ClassifierModel;
use crate::models::decision_tree::DecisionTreeClassifier;
use crate::models::naive_bayes::NaiveBayesClassifier;
use crate::models::random_forest::RandomForestClassifier;

/// Build a boxed, unfitted classifier from a `ModelType`.
///
/// Every call returns a fresh instance; nothing is shared between models.
pub fn build_model(model_type: &ModelType) -> Box<dyn ClassifierModel> {
    match model_type {
        ModelType::DecisionTree { .. } => Box::new(DecisionTreeClassifier::new(model_type.clone())),
        ModelType::RandomForest { .. } => Box::new(RandomForestClassifier::new(model_type.clone())),
        ModelType::NaiveBayes { .. } => Box::new(NaiveBayesClassifier::new(model_type.clone())),
    }
}
