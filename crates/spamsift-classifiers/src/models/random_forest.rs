use linfa::traits::Fit;
use linfa::Dataset;
use linfa_ensemble::{EnsembleLearner, EnsembleLearnerParams};
use linfa_trees::DecisionTree;
use ndarray::{Array1, Array2, Axis};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::ModelType;
use crate::error::ClassifierError;
use crate::models::classifier_trait::{ClassifierModel, SPAM};
use crate::models::utils::{
    fit_error, probabilities_from_spam, to_class_labels, unexpected_params,
    validate_training_data,
};

/// Bagged ensemble of decision trees.
///
/// Bootstrap sampling is driven by a seeded RNG so that fitting the same data
/// twice yields the same forest. P(spam) is the share of trees voting spam.
pub struct RandomForestClassifier {
    model: Option<EnsembleLearner<DecisionTree<f64, usize>>>,
    params: ModelType,
}

impl RandomForestClassifier {
    pub fn new(params: ModelType) -> Self {
        RandomForestClassifier {
            model: None,
            params,
        }
    }

    pub fn n_trees(&self) -> usize {
        self.model.as_ref().map_or(0, |m| m.models.len())
    }
}

impl ClassifierModel for RandomForestClassifier {
    fn fit(&mut self, x: &Array2<f64>, y: &[bool]) -> Result<(), ClassifierError> {
        validate_training_data(self.name(), x, y)?;

        let ModelType::RandomForest {
            n_trees,
            bootstrap_proportion,
            max_depth,
            seed,
        } = &self.params
        else {
            return Err(unexpected_params(self.name(), &self.params));
        };

        if *n_trees == 0 {
            return Err(fit_error(self.name(), "ensemble needs at least one tree"));
        }

        let dataset = Dataset::new(x.to_owned(), to_class_labels(y));
        let model = EnsembleLearnerParams::new_fixed_rng(
            DecisionTree::params().max_depth(*max_depth),
            StdRng::seed_from_u64(*seed),
        )
        .ensemble_size(*n_trees)
        .bootstrap_proportion(*bootstrap_proportion)
        .fit(&dataset)
        .map_err(|e| fit_error(self.name(), e))?;

        log::debug!(
            "Fitted random forest with {} trees (seed {})",
            model.models.len(),
            seed
        );
        self.model = Some(model);
        Ok(())
    }

    fn predict_proba(&self, x: &Array2<f64>) -> Result<Array2<f64>, ClassifierError> {
        let model = self
            .model
            .as_ref()
            .ok_or_else(|| ClassifierError::NotFitted(self.name().to_string()))?;

        let sub_datas: Vec<Array2<f64>> = model
            .model_features
            .iter()
            .map(|feat| x.select(Axis(1), feat))
            .collect();
        let votes: Vec<Array1<usize>> = model.generate_predictions(&sub_datas).collect();
        let n_trees = votes.len().max(1) as f64;

        let mut spam_votes = vec![0usize; x.nrows()];
        for tree_votes in &votes {
            for (count, &label) in spam_votes.iter_mut().zip(tree_votes.iter()) {
                if label == SPAM {
                    *count += 1;
                }
            }
        }

        Ok(probabilities_from_spam(
            spam_votes.into_iter().map(|count| count as f64 / n_trees),
        ))
    }

    fn name(&self) -> &str {
        "random_forest"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toy_data() -> (Array2<f64>, Vec<bool>) {
        let x = Array2::from_shape_vec(
            (8, 2),
            vec![
                1.0, 0.0, 0.0, 1.0, 0.9, 0.1, 0.1, 0.9, 1.1, 0.0, 0.0, 1.2, 0.8, 0.2, 0.2, 0.8,
            ],
        )
        .unwrap();
        let y = vec![true, false, true, false, true, false, true, false];
        (x, y)
    }

    #[test]
    fn same_seed_gives_same_probabilities() {
        let (x, y) = toy_data();
        let params = ModelType::RandomForest {
            n_trees: 15,
            bootstrap_proportion: 1.0,
            max_depth: None,
            seed: 7,
        };

        let mut first = RandomForestClassifier::new(params.clone());
        first.fit(&x, &y).unwrap();
        let mut second = RandomForestClassifier::new(params);
        second.fit(&x, &y).unwrap();

        assert_eq!(first.n_trees(), 15);
        assert_eq!(
            first.predict_proba(&x).unwrap(),
            second.predict_proba(&x).unwrap()
        );
    }

    #[test]
    fn zero_trees_is_rejected() {
        let (x, y) = toy_data();
        let mut forest = RandomForestClassifier::new(ModelType::RandomForest {
            n_trees: 0,
            bootstrap_proportion: 1.0,
            max_depth: None,
            seed: 1,
        });
        assert!(matches!(forest.fit(&x, &y), Err(ClassifierError::Fit { .. })));
    }
}
