//! TF-IDF feature extraction on normalized email text.
//!
//! The fitted vectorizer owns the [`Normalizer`] it was fitted with and runs
//! every input through it before projecting onto the learned vocabulary, so
//! training, evaluation and interactive prediction share one code path.
use linfa_preprocessing::tf_idf_vectorization::{FittedTfIdfVectorizer, TfIdfVectorizer};
use ndarray::{Array1, Array2};

use crate::config::VectorizerConfig;
use crate::error::ClassifierError;
use crate::text::{Normalizer, ENGLISH_STOP_WORDS};

/// Unfitted vectorizer: configuration plus the normalizer to apply.
#[derive(Debug, Clone)]
pub struct TextVectorizer {
    config: VectorizerConfig,
    normalizer: Normalizer,
}

/// Vectorizer with a fixed vocabulary learned from the training texts.
pub struct FittedTextVectorizer {
    normalizer: Normalizer,
    tfidf: FittedTfIdfVectorizer,
}

impl TextVectorizer {
    pub fn new(config: VectorizerConfig, normalizer: Normalizer) -> Self {
        TextVectorizer { config, normalizer }
    }

    fn tfidf_params(&self) -> TfIdfVectorizer {
        let (min_n, max_n) = self.config.ngram_range;
        let params = TfIdfVectorizer::default()
            .convert_to_lowercase(true)
            .n_gram_range(min_n, max_n)
            .document_frequency(self.config.min_df, self.config.max_df)
            .max_features(self.config.max_features);

        if self.config.builtin_stopwords {
            params.stopwords(ENGLISH_STOP_WORDS)
        } else {
            params
        }
    }

    /// Normalize `texts` and learn the TF-IDF vocabulary from them.
    pub fn fit<T: AsRef<str>>(&self, texts: &[T]) -> Result<FittedTextVectorizer, ClassifierError> {
        if texts.is_empty() {
            return Err(ClassifierError::InvalidTrainingData(
                "cannot fit a vectorizer on zero documents".to_string(),
            ));
        }

        let normalized = self.normalizer.normalize_all(texts);
        if normalized.iter().all(|doc| doc.is_empty()) {
            return Err(ClassifierError::InvalidTrainingData(
                "every document is empty after normalization".to_string(),
            ));
        }

        let documents = Array1::from_vec(normalized);
        let tfidf = self
            .tfidf_params()
            .fit(&documents)
            .map_err(|e| ClassifierError::Vectorizer(e.to_string()))?;

        if tfidf.nentries() == 0 {
            return Err(ClassifierError::InvalidTrainingData(
                "no vocabulary terms survived normalization".to_string(),
            ));
        }

        log::debug!(
            "Fitted TF-IDF vocabulary with {} terms from {} documents",
            tfidf.nentries(),
            texts.len()
        );

        Ok(FittedTextVectorizer {
            normalizer: self.normalizer.clone(),
            tfidf,
        })
    }
}

impl FittedTextVectorizer {
    pub fn vocabulary_size(&self) -> usize {
        self.tfidf.nentries()
    }

    pub fn vocabulary(&self) -> &[String] {
        self.tfidf.vocabulary()
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    /// Project `texts` onto the fitted vocabulary. Terms never seen during
    /// fitting contribute nothing.
    pub fn transform<T: AsRef<str>>(&self, texts: &[T]) -> Array2<f64> {
        let documents = Array1::from_vec(self.normalizer.normalize_all(texts));
        self.tfidf
            .transform(&documents)
            .expect("tokenizer is always set on a freshly fitted vectorizer")
            .to_dense()
    }

    /// Single-row feature matrix for one raw email.
    pub fn transform_one(&self, text: &str) -> Array2<f64> {
        self.transform(&[text])
    }
}

impl std::fmt::Debug for FittedTextVectorizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FittedTextVectorizer")
            .field("normalizer", &self.normalizer)
            .field("vocabulary_size", &self.vocabulary_size())
            .finish()
    }
}
