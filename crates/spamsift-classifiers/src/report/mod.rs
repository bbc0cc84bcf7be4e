//! Evaluation metrics and console rendering of model reports.
pub mod metrics;
pub mod render;

pub use metrics::{evaluate, ClassMetrics, ConfusionMatrix, EvaluationReport};
pub use render::{render_comparison, render_model_section};
