//! Email text normalization shared by training and inference.
pub mod normalizer;
pub mod stopwords;

pub use normalizer::{normalize, Normalizer};
pub use stopwords::ENGLISH_STOP_WORDS;
