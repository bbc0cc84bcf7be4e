//! One independent spam detection branch: vectorizer + classifier.
//!
//! Each `SpamDetector` owns its fitted vectorizer (and through it, its
//! normalizer) and its fitted classifier. Evaluation and interactive
//! prediction both go through [`FittedTextVectorizer::transform`], so the text
//! seen at inference is prepared exactly like the training text.
use crate::config::ModelConfig;
use crate::error::ClassifierError;
use crate::features::{FittedTextVectorizer, TextVectorizer};
use crate::io::EmailDataset;
use crate::models::classifier_trait::{ClassifierModel, HAM, SPAM};
use crate::models::factory::build_model;
use crate::report::metrics::{evaluate, EvaluationReport};
use crate::text::Normalizer;

/// Verdict for a single email.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictionResult {
    pub is_spam: bool,
    pub probability_spam: f64,
    pub probability_ham: f64,
    /// Probability of the predicted class, `max(probability_spam, probability_ham)`.
    pub confidence: f64,
}

impl PredictionResult {
    /// Builds a result from raw class probabilities, renormalizing them so
    /// they sum to one.
    pub fn from_probabilities(probability_ham: f64, probability_spam: f64) -> Self {
        let sum = probability_ham + probability_spam;
        let (probability_ham, probability_spam) = if sum > 0.0 && sum.is_finite() {
            (probability_ham / sum, probability_spam / sum)
        } else {
            (0.5, 0.5)
        };
        PredictionResult {
            is_spam: probability_spam > probability_ham,
            probability_spam,
            probability_ham,
            confidence: probability_spam.max(probability_ham),
        }
    }
}

/// Classify one raw email with an already fitted vectorizer and model.
pub fn predict_one(
    vectorizer: &FittedTextVectorizer,
    model: &dyn ClassifierModel,
    raw_text: &str,
) -> Result<PredictionResult, ClassifierError> {
    let x = vectorizer.transform_one(raw_text);
    let proba = model.predict_proba(&x)?;
    if proba.nrows() != 1 {
        return Err(ClassifierError::LengthMismatch {
            rows: proba.nrows(),
            labels: 1,
        });
    }
    Ok(PredictionResult::from_probabilities(
        proba[(0, HAM)],
        proba[(0, SPAM)],
    ))
}

pub struct SpamDetector {
    name: String,
    vectorizer: FittedTextVectorizer,
    model: Box<dyn ClassifierModel>,
}

impl SpamDetector {
    /// Fit a fresh vectorizer and classifier on the training set.
    pub fn train(config: &ModelConfig, training: &EmailDataset) -> Result<Self, ClassifierError> {
        let labels = training.labels();
        let n_spam = labels.iter().filter(|&&l| l).count();
        if training.is_empty() || n_spam == 0 || n_spam == labels.len() {
            return Err(ClassifierError::InvalidTrainingData(format!(
                "training set has {} rows with {} spam; both classes are required",
                labels.len(),
                n_spam
            )));
        }

        let normalizer = Normalizer::new(config.normalizer.clone());
        let texts = training.texts();
        let vectorizer =
            TextVectorizer::new(config.vectorizer_config(), normalizer).fit(&texts)?;
        let x = vectorizer.transform(&texts);

        log::info!(
            "Training {} on {} emails ({} features)",
            config.model_type.display_name(),
            x.nrows(),
            x.ncols()
        );

        let mut model = build_model(&config.model_type);
        model.fit(&x, &labels)?;

        Ok(SpamDetector {
            name: config.model_type.display_name().to_string(),
            vectorizer,
            model,
        })
    }

    /// Score the detector on a held-out dataset.
    pub fn evaluate(&self, dataset: &EmailDataset) -> Result<EvaluationReport, ClassifierError> {
        if dataset.is_empty() {
            return Err(ClassifierError::EmptyEvaluationSet);
        }
        let x = self.vectorizer.transform(&dataset.texts());
        let proba = self.model.predict_proba(&x)?;
        let predicted: Vec<bool> = proba
            .rows()
            .into_iter()
            .map(|row| row[SPAM] > row[HAM])
            .collect();

        evaluate(&dataset.labels(), &predicted, Some(&proba))
    }

    pub fn predict_one(&self, raw_text: &str) -> Result<PredictionResult, ClassifierError> {
        predict_one(&self.vectorizer, self.model.as_ref(), raw_text)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn model_name(&self) -> &str {
        self.model.name()
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vectorizer.vocabulary_size()
    }

    pub fn vectorizer(&self) -> &FittedTextVectorizer {
        &self.vectorizer
    }
}
