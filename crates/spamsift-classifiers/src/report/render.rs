//! Human readable rendering of evaluation reports.
use std::fmt::{self, Write};

use crate::report::metrics::{ClassMetrics, EvaluationReport};

const SEPARATOR: &str = "--------------------------------------------------------------";

fn write_row(f: &mut impl Write, label: &str, m: &ClassMetrics) -> fmt::Result {
    writeln!(
        f,
        "{:>14} {:>10.4} {:>10.4} {:>10.4} {:>10}",
        label, m.precision, m.recall, m.f1, m.support
    )
}

impl fmt::Display for EvaluationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Classification Report:")?;
        writeln!(
            f,
            "{:>14} {:>10} {:>10} {:>10} {:>10}",
            "", "precision", "recall", "f1-score", "support"
        )?;
        writeln!(f)?;
        write_row(f, "ham (0)", &self.ham)?;
        write_row(f, "spam (1)", &self.spam)?;
        writeln!(f)?;
        writeln!(
            f,
            "{:>14} {:>10} {:>10} {:>10.4} {:>10}",
            "accuracy", "", "", self.accuracy, self.total
        )?;
        write_row(f, "macro avg", &self.macro_avg)?;
        write_row(f, "weighted avg", &self.weighted_avg)?;
        writeln!(f)?;

        let [[tn, fp], [fn_, tp]] = self.confusion_matrix.as_array();
        writeln!(f, "Confusion Matrix:")?;
        writeln!(f, "{:>14} {:>10} {:>10}", "", "pred ham", "pred spam")?;
        writeln!(f, "{:>14} {:>10} {:>10}", "true ham", tn, fp)?;
        writeln!(f, "{:>14} {:>10} {:>10}", "true spam", fn_, tp)?;
        writeln!(f)?;

        write!(f, "Accuracy: {:.4}", self.accuracy)?;
        if let Some(loss) = self.log_loss {
            write!(f, "\nLog loss: {:.4}", loss)?;
        }
        Ok(())
    }
}

/// One report section with a banner naming the model.
pub fn render_model_section(name: &str, report: &EvaluationReport) -> String {
    format!("{}\n{}\n{}\n{}\n", SEPARATOR, name, SEPARATOR, report)
}

fn write_comparison(out: &mut impl Write, ranked: &[&(String, f64)]) -> fmt::Result {
    writeln!(out, "{}", SEPARATOR)?;
    writeln!(out, "Model Comparison")?;
    writeln!(out, "{}", SEPARATOR)?;
    for (rank, (name, accuracy)) in ranked.iter().enumerate() {
        writeln!(out, "{:>2}. {:<32} accuracy {:.4}", rank + 1, name, accuracy)?;
    }
    if let Some((best, accuracy)) = ranked.first() {
        writeln!(out, "\nBest model: {} ({:.4})", best, accuracy)?;
    }
    Ok(())
}

/// Rank models by accuracy, best first, and name the winner.
pub fn render_comparison(results: &[(String, f64)]) -> String {
    let mut ranked: Vec<&(String, f64)> = results.iter().collect();
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    let mut out = String::new();
    if write_comparison(&mut out, &ranked).is_err() {
        log::warn!("Failed to render model comparison");
    }
    out
}
