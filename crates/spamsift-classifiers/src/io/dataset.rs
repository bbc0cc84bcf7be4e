//! Labeled email CSV reader.
//!
//! The training and evaluation datasets come from two independent sources and
//! name their label column differently (`spam` vs `label_num`). Both readers
//! assume the same encoding, spam = 1 and ham = 0; each column is validated to
//! contain only those two values, but nothing here can prove that the two
//! sources mean the same thing by them.
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use csv::StringRecord;

/// One email with its spam/ham label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledEmail {
    pub text: String,
    pub is_spam: bool,
}

/// Ordered, read-only collection of labeled emails from a single file.
#[derive(Debug, Clone, Default)]
pub struct EmailDataset {
    pub path: PathBuf,
    pub label_column: String,
    /// Number of columns in the source file header.
    pub n_columns: usize,
    pub emails: Vec<LabeledEmail>,
}

/// Configuration for reading a labeled email CSV file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetReaderConfig {
    /// Column holding the raw email text.
    pub text_column: String,
    /// Column holding the 0/1 label.
    pub label_column: String,
    pub delimiter: u8,
}

impl DatasetReaderConfig {
    /// Training dataset layout: `text`, `spam`.
    pub fn training() -> Self {
        Self {
            text_column: "text".to_string(),
            label_column: "spam".to_string(),
            delimiter: b',',
        }
    }

    /// Evaluation dataset layout: `text`, `label_num`.
    pub fn evaluation() -> Self {
        Self {
            text_column: "text".to_string(),
            label_column: "label_num".to_string(),
            delimiter: b',',
        }
    }
}

impl EmailDataset {
    pub fn new(emails: Vec<LabeledEmail>) -> Self {
        let n_columns = 2;
        EmailDataset {
            emails,
            n_columns,
            ..Default::default()
        }
    }

    /// Builds a dataset from `(text, is_spam)` pairs.
    pub fn from_pairs<S: Into<String>>(pairs: impl IntoIterator<Item = (S, bool)>) -> Self {
        EmailDataset::new(
            pairs
                .into_iter()
                .map(|(text, is_spam)| LabeledEmail {
                    text: text.into(),
                    is_spam,
                })
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.emails.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.emails.is_empty()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.emails.iter().map(|e| e.text.as_str()).collect()
    }

    pub fn labels(&self) -> Vec<bool> {
        self.emails.iter().map(|e| e.is_spam).collect()
    }

    /// Returns `(ham, spam)` counts.
    pub fn class_counts(&self) -> (usize, usize) {
        let spam = self.emails.iter().filter(|e| e.is_spam).count();
        (self.emails.len() - spam, spam)
    }

    pub fn log_input_data_summary(&self, name: &str) {
        let (ham, spam) = self.class_counts();
        let total = self.len().max(1) as f64;
        println!("----- {} Data Summary -----", name);
        println!("Info: source {}", self.path.display());
        println!("Info: {} rows, {} columns", self.len(), self.n_columns);
        println!(
            "Info: {} spam ({}=1, {:.2}%) and {} ham ({}=0, {:.2}%)",
            spam,
            self.label_column,
            spam as f64 / total * 100.0,
            ham,
            self.label_column,
            ham as f64 / total * 100.0
        );
        println!("-------------------------------");
    }
}

/// Read a labeled email CSV file.
pub fn read_dataset<P: AsRef<Path>>(path: P, config: &DatasetReaderConfig) -> Result<EmailDataset> {
    let path = path.as_ref();
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(config.delimiter)
        .has_headers(true)
        .flexible(false)
        .from_path(path)
        .with_context(|| format!("Failed to open dataset: {}", path.display()))?;

    let headers = reader
        .headers()
        .with_context(|| format!("Failed to read header row of {}", path.display()))?
        .clone();

    let text_idx = find_column(&headers, &config.text_column).ok_or_else(|| {
        anyhow!(
            "Missing text column '{}' in {}",
            config.text_column,
            path.display()
        )
    })?;
    let label_idx = find_column(&headers, &config.label_column).ok_or_else(|| {
        anyhow!(
            "Missing label column '{}' in {}",
            config.label_column,
            path.display()
        )
    })?;

    let mut emails = Vec::new();
    for (row_idx, result) in reader.records().enumerate() {
        let record = result.with_context(|| {
            format!("Failed to read row {} of {}", row_idx + 1, path.display())
        })?;

        let text = record
            .get(text_idx)
            .ok_or_else(|| anyhow!("Missing text value at row {}", row_idx + 1))?
            .to_string();
        let raw_label = record
            .get(label_idx)
            .ok_or_else(|| anyhow!("Missing label value at row {}", row_idx + 1))?;
        let is_spam = parse_label(raw_label).with_context(|| {
            format!(
                "Invalid '{}' label at row {} of {}",
                config.label_column,
                row_idx + 1,
                path.display()
            )
        })?;

        emails.push(LabeledEmail { text, is_spam });
    }

    log::debug!(
        "Loaded {} rows from {} (label column '{}')",
        emails.len(),
        path.display(),
        config.label_column
    );

    Ok(EmailDataset {
        path: path.to_path_buf(),
        label_column: config.label_column.clone(),
        n_columns: headers.len(),
        emails,
    })
}

fn parse_label(value: &str) -> Result<bool> {
    match value.trim() {
        "1" => Ok(true),
        "0" => Ok(false),
        other => bail!("expected 0 or 1, found '{}'", other),
    }
}

fn find_column(headers: &StringRecord, name: &str) -> Option<usize> {
    headers
        .iter()
        .position(|header| header.trim().eq_ignore_ascii_case(name))
}
