//! IO utilities for loading labeled email datasets.

pub mod dataset;

pub use dataset::{read_dataset, DatasetReaderConfig, EmailDataset, LabeledEmail};
