//! Train, evaluate and compare every configured model branch.
//!
//! Branches are independent: each owns its detector, and a branch that fails
//! to train or evaluate is logged and skipped while the others continue.
use anyhow::{bail, Context, Result};

use spamsift_classifiers::config::{ModelConfig, ModelType};
use spamsift_classifiers::detector::SpamDetector;
use spamsift_classifiers::io::{read_dataset, DatasetReaderConfig, EmailDataset};
use spamsift_classifiers::report::{render_comparison, render_model_section, EvaluationReport};

use crate::run::input::RunConfig;
use crate::util::validate_csv_file;

/// A branch that trained and evaluated successfully.
pub struct TrainedBranch {
    pub detector: SpamDetector,
    pub report: EvaluationReport,
}

#[derive(Debug, Clone)]
pub struct BranchFailure {
    pub model_type: ModelType,
    pub reason: String,
}

pub struct RunSummary {
    pub branches: Vec<TrainedBranch>,
    pub failures: Vec<BranchFailure>,
}

impl RunSummary {
    /// `(display name, accuracy)` for every successful branch, in run order.
    pub fn accuracies(&self) -> Vec<(String, f64)> {
        self.branches
            .iter()
            .map(|b| (b.detector.name().to_string(), b.report.accuracy))
            .collect()
    }

    pub fn best(&self) -> Option<&TrainedBranch> {
        self.branches.iter().fold(None, |best: Option<&TrainedBranch>, b| match best {
            Some(current) if current.report.accuracy >= b.report.accuracy => Some(current),
            _ => Some(b),
        })
    }

    /// The detector named by `model_name`, or the most accurate one if that
    /// branch failed or was not run.
    pub fn interactive_detector(&self, model_name: &str) -> Option<&SpamDetector> {
        if let Some(branch) = self
            .branches
            .iter()
            .find(|b| b.detector.model_name() == model_name)
        {
            return Some(&branch.detector);
        }

        let fallback = self.best()?;
        log::warn!(
            "Model '{}' is not available for interactive use; falling back to {}",
            model_name,
            fallback.detector.name()
        );
        Some(&fallback.detector)
    }
}

/// Read and summarize the training and evaluation datasets.
pub fn load_datasets(config: &RunConfig) -> Result<(EmailDataset, EmailDataset)> {
    validate_csv_file(&config.train_data)?;
    validate_csv_file(&config.eval_data)?;

    let training = read_dataset(&config.train_data, &DatasetReaderConfig::training())
        .context("Failed to load training data")?;
    let evaluation = read_dataset(&config.eval_data, &DatasetReaderConfig::evaluation())
        .context("Failed to load evaluation data")?;

    training.log_input_data_summary("Training");
    evaluation.log_input_data_summary("Evaluation");

    Ok((training, evaluation))
}

fn run_branch(
    branch: &ModelConfig,
    training: &EmailDataset,
    evaluation: &EmailDataset,
) -> Result<TrainedBranch> {
    let model_type = &branch.model_type;
    let detector = SpamDetector::train(branch, training)
        .with_context(|| format!("Training {} failed", model_type.display_name()))?;
    let report = detector
        .evaluate(evaluation)
        .with_context(|| format!("Evaluating {} failed", model_type.display_name()))?;
    Ok(TrainedBranch { detector, report })
}

/// Run every configured branch and print its report followed by the comparison.
pub fn run_all(config: &RunConfig) -> Result<RunSummary> {
    if config.models.is_empty() {
        bail!("No models selected");
    }

    let (training, evaluation) = load_datasets(config)?;

    let mut summary = RunSummary {
        branches: Vec::new(),
        failures: Vec::new(),
    };

    for branch in &config.models {
        let model_type = &branch.model_type;
        log::info!("[spamsift] Running {}", model_type.display_name());
        match run_branch(branch, &training, &evaluation) {
            Ok(branch) => {
                println!(
                    "{}",
                    render_model_section(branch.detector.name(), &branch.report)
                );
                summary.branches.push(branch);
            }
            Err(e) => {
                log::error!("{:#}", e);
                summary.failures.push(BranchFailure {
                    model_type: model_type.clone(),
                    reason: format!("{:#}", e),
                });
            }
        }
    }

    if summary.branches.is_empty() {
        bail!("All {} model branches failed", summary.failures.len());
    }

    println!("{}", render_comparison(&summary.accuracies()));
    Ok(summary)
}
