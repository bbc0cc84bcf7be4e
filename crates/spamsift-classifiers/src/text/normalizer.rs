//! Email text normalizer.
//!
//! Maps raw email text to a cleaned, space separated token string:
//!
//! 1. lowercase
//! 2. strip a leading `subject:` header
//! 3. replace URLs with the `url` placeholder
//! 4. replace email addresses with the `email` placeholder
//! 5. strip HTML-like tags
//! 6. replace anything that is not `a-z`, `0-9` or whitespace with a space
//! 7. collapse whitespace and trim
//! 8. drop stopwords
//!
//! Steps 3 and 4 can be turned off through [`NormalizerConfig`]. The output
//! only contains ASCII lowercase letters, digits and single spaces, which makes
//! the transformation idempotent.
use std::collections::HashSet;

use regex::Regex;

use crate::config::NormalizerConfig;
use crate::text::stopwords::ENGLISH_STOP_WORDS;

const URL_PLACEHOLDER: &str = " url ";
const EMAIL_PLACEHOLDER: &str = " email ";

#[derive(Debug, Clone)]
pub struct Normalizer {
    config: NormalizerConfig,
    subject_header: Regex,
    url: Regex,
    email: Regex,
    html_tag: Regex,
    non_alphanumeric: Regex,
    stopwords: HashSet<&'static str>,
}

impl Normalizer {
    pub fn new(config: NormalizerConfig) -> Self {
        Normalizer {
            config,
            subject_header: Regex::new(r"^subject:").expect("valid subject pattern"),
            url: Regex::new(r"http\S+|www\S+|https\S+").expect("valid url pattern"),
            email: Regex::new(r"\S+@\S+").expect("valid email pattern"),
            html_tag: Regex::new(r"<.*?>").expect("valid html pattern"),
            non_alphanumeric: Regex::new(r"[^a-z0-9\s]").expect("valid character class"),
            stopwords: ENGLISH_STOP_WORDS.iter().copied().collect(),
        }
    }

    pub fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    pub fn is_stopword(&self, token: &str) -> bool {
        self.stopwords.contains(token)
    }

    /// Normalize one raw email. Empty or whitespace-only input yields an empty string.
    pub fn normalize(&self, raw_text: &str) -> String {
        let lowered = raw_text.to_lowercase();
        let mut text = self.subject_header.replace(&lowered, "").into_owned();

        if self.config.substitute_placeholders {
            text = self.url.replace_all(&text, URL_PLACEHOLDER).into_owned();
            text = self.email.replace_all(&text, EMAIL_PLACEHOLDER).into_owned();
        }

        let text = self.html_tag.replace_all(&text, " ");
        let text = self.non_alphanumeric.replace_all(&text, " ");

        text.split_whitespace()
            .filter(|token| !self.is_stopword(token))
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn normalize_all<T: AsRef<str>>(&self, texts: &[T]) -> Vec<String> {
        texts.iter().map(|t| self.normalize(t.as_ref())).collect()
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Normalizer::new(NormalizerConfig::default())
    }
}

/// Normalize with the default configuration.
///
/// Builds a fresh [`Normalizer`] on every call; pipelines should hold on to a
/// single instance instead.
pub fn normalize(raw_text: &str) -> String {
    Normalizer::default().normalize(raw_text)
}
