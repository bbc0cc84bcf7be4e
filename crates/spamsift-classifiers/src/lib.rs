//! spamsift-classifiers: spam/ham email classification helpers.
//!
//! This crate provides a single text normalizer, a TF-IDF feature extractor,
//! thin wrappers around three off-the-shelf classifiers (decision tree, bagged
//! random forest, multinomial Naive Bayes) behind one `ClassifierModel` trait,
//! dataset loading, evaluation metrics and console reporting.
//!
//! Every model branch owns its own fitted vectorizer and classifier so that
//! branches can be trained, evaluated and fail independently.
pub mod config;
pub mod detector;
pub mod error;
pub mod features;
pub mod interactive;
pub mod io;
pub mod models;
pub mod report;
pub mod text;
