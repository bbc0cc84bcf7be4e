//! Binary classification metrics.
//!
//! Class order is fixed: ham (0) first, spam (1) second. The confusion matrix
//! is laid out as rows = true class, columns = predicted class:
//! `[[TN, FP], [FN, TP]]`.
use ndarray::Array2;

use crate::error::ClassifierError;
use crate::models::classifier_trait::{HAM, SPAM};

/// Probabilities are clipped to `[EPS, 1 - EPS]` before taking logs.
const LOG_LOSS_EPS: f64 = 1e-15;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConfusionMatrix {
    pub true_negative: usize,
    pub false_positive: usize,
    pub false_negative: usize,
    pub true_positive: usize,
}

impl ConfusionMatrix {
    pub fn from_labels(y_true: &[bool], y_pred: &[bool]) -> Self {
        let mut cm = ConfusionMatrix::default();
        for (&truth, &pred) in y_true.iter().zip(y_pred) {
            match (truth, pred) {
                (false, false) => cm.true_negative += 1,
                (false, true) => cm.false_positive += 1,
                (true, false) => cm.false_negative += 1,
                (true, true) => cm.true_positive += 1,
            }
        }
        cm
    }

    /// `[[TN, FP], [FN, TP]]`
    pub fn as_array(&self) -> [[usize; 2]; 2] {
        [
            [self.true_negative, self.false_positive],
            [self.false_negative, self.true_positive],
        ]
    }

    pub fn total(&self) -> usize {
        self.true_negative + self.false_positive + self.false_negative + self.true_positive
    }

    pub fn correct(&self) -> usize {
        self.true_negative + self.true_positive
    }
}

/// Precision, recall and F1 for one class. Ratios with a zero denominator are 0.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ClassMetrics {
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    pub support: usize,
}

impl ClassMetrics {
    fn from_counts(true_pos: usize, false_pos: usize, false_neg: usize) -> Self {
        let precision = ratio(true_pos, true_pos + false_pos);
        let recall = ratio(true_pos, true_pos + false_neg);
        let f1 = if precision + recall > 0.0 {
            2.0 * precision * recall / (precision + recall)
        } else {
            0.0
        };
        ClassMetrics {
            precision,
            recall,
            f1,
            support: true_pos + false_neg,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationReport {
    pub accuracy: f64,
    pub confusion_matrix: ConfusionMatrix,
    pub ham: ClassMetrics,
    pub spam: ClassMetrics,
    pub macro_avg: ClassMetrics,
    pub weighted_avg: ClassMetrics,
    /// Mean negative log-likelihood of the true class, when probabilities were supplied.
    pub log_loss: Option<f64>,
    pub total: usize,
}

/// Score predictions against the true labels.
pub fn evaluate(
    y_true: &[bool],
    y_pred: &[bool],
    probabilities: Option<&Array2<f64>>,
) -> Result<EvaluationReport, ClassifierError> {
    if y_true.len() != y_pred.len() {
        return Err(ClassifierError::LengthMismatch {
            rows: y_pred.len(),
            labels: y_true.len(),
        });
    }
    if y_true.is_empty() {
        return Err(ClassifierError::EmptyEvaluationSet);
    }

    let cm = ConfusionMatrix::from_labels(y_true, y_pred);
    let total = cm.total();

    let ham = ClassMetrics::from_counts(cm.true_negative, cm.false_negative, cm.false_positive);
    let spam = ClassMetrics::from_counts(cm.true_positive, cm.false_positive, cm.false_negative);

    let macro_avg = ClassMetrics {
        precision: (ham.precision + spam.precision) / 2.0,
        recall: (ham.recall + spam.recall) / 2.0,
        f1: (ham.f1 + spam.f1) / 2.0,
        support: total,
    };
    let weighted = |f: fn(&ClassMetrics) -> f64| {
        (f(&ham) * ham.support as f64 + f(&spam) * spam.support as f64) / total as f64
    };
    let weighted_avg = ClassMetrics {
        precision: weighted(|m| m.precision),
        recall: weighted(|m| m.recall),
        f1: weighted(|m| m.f1),
        support: total,
    };

    let log_loss = match probabilities {
        Some(proba) => Some(log_loss(y_true, proba)?),
        None => None,
    };

    Ok(EvaluationReport {
        accuracy: cm.correct() as f64 / total as f64,
        confusion_matrix: cm,
        ham,
        spam,
        macro_avg,
        weighted_avg,
        log_loss,
        total,
    })
}

fn log_loss(y_true: &[bool], proba: &Array2<f64>) -> Result<f64, ClassifierError> {
    if proba.nrows() != y_true.len() || proba.ncols() != 2 {
        return Err(ClassifierError::LengthMismatch {
            rows: proba.nrows(),
            labels: y_true.len(),
        });
    }

    let total: f64 = y_true
        .iter()
        .zip(proba.rows())
        .map(|(&is_spam, row)| {
            let p = if is_spam { row[SPAM] } else { row[HAM] };
            -p.clamp(LOG_LOSS_EPS, 1.0 - LOG_LOSS_EPS).ln()
        })
        .sum();
    Ok(total / y_true.len() as f64)
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}
