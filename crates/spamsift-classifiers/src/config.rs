use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Central configuration for one model branch: how text is normalized,
/// how it is vectorized and which classifier is fit on top.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct ModelConfig {
    #[serde(default)]
    pub normalizer: NormalizerConfig,

    /// Vectorizer settings for this branch. When absent the model type's own
    /// defaults apply, see [`ModelType::default_vectorizer`].
    #[serde(default)]
    pub vectorizer: Option<VectorizerConfig>,

    pub model_type: ModelType,
}

/// Supported model types and their hyper-parameters.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum ModelType {
    DecisionTree {
        max_depth: Option<usize>,
        min_weight_split: f32,
    },
    RandomForest {
        n_trees: usize,
        bootstrap_proportion: f64,
        max_depth: Option<usize>,
        seed: u64,
    },
    NaiveBayes {
        alpha: f64,
    },
}

impl Default for ModelType {
    fn default() -> Self {
        ModelType::NaiveBayes { alpha: 0.1 }
    }
}

impl ModelType {
    /// Default hyper-parameters for every supported model, in report order.
    pub fn all() -> Vec<ModelType> {
        vec![
            ModelType::decision_tree(),
            ModelType::random_forest(),
            ModelType::naive_bayes(),
        ]
    }

    pub fn decision_tree() -> Self {
        ModelType::DecisionTree {
            max_depth: None,
            min_weight_split: 2.0,
        }
    }

    pub fn random_forest() -> Self {
        ModelType::RandomForest {
            n_trees: 100,
            bootstrap_proportion: 1.0,
            max_depth: None,
            seed: 42,
        }
    }

    pub fn naive_bayes() -> Self {
        ModelType::NaiveBayes { alpha: 0.1 }
    }

    /// Short machine name, also accepted by `FromStr`.
    pub fn name(&self) -> &'static str {
        match self {
            ModelType::DecisionTree { .. } => "decision_tree",
            ModelType::RandomForest { .. } => "random_forest",
            ModelType::NaiveBayes { .. } => "naive_bayes",
        }
    }

    /// TF-IDF settings a branch of this model type uses unless configured
    /// otherwise. The random forest gets a smaller vocabulary since it fits
    /// many trees over the dense feature matrix; Naive Bayes adds bigrams and
    /// drops terms found in more than 70% of documents.
    pub fn default_vectorizer(&self) -> VectorizerConfig {
        match self {
            ModelType::DecisionTree { .. } => VectorizerConfig::default(),
            ModelType::RandomForest { .. } => VectorizerConfig {
                max_features: Some(1000),
                ..VectorizerConfig::default()
            },
            ModelType::NaiveBayes { .. } => VectorizerConfig {
                ngram_range: (1, 2),
                max_df: 0.7,
                ..VectorizerConfig::default()
            },
        }
    }

    /// Human readable name used in report banners.
    pub fn display_name(&self) -> &'static str {
        match self {
            ModelType::DecisionTree { .. } => "Decision Tree Classifier",
            ModelType::RandomForest { .. } => "Random Forest Classifier",
            ModelType::NaiveBayes { .. } => "Multinomial Naive Bayes",
        }
    }
}

impl fmt::Display for ModelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ModelType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "decision_tree" | "dt" => Ok(ModelType::decision_tree()),
            "random_forest" | "rf" => Ok(ModelType::random_forest()),
            "naive_bayes" | "nb" => Ok(ModelType::naive_bayes()),
            _ => Err(format!(
                "Unknown model type: {}. Valid options are: decision_tree, random_forest, naive_bayes",
                s
            )),
        }
    }
}

/// Text normalization options.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct NormalizerConfig {
    /// Replace URLs and email addresses with the `url` / `email` placeholder tokens.
    pub substitute_placeholders: bool,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            substitute_placeholders: true,
        }
    }
}

/// TF-IDF vectorizer options.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct VectorizerConfig {
    /// Vocabulary cap, keeping the most frequent terms.
    pub max_features: Option<usize>,
    /// Inclusive n-gram range.
    pub ngram_range: (usize, usize),
    /// Relative document frequency bounds in `[0, 1]`.
    pub min_df: f32,
    pub max_df: f32,
    /// Also apply the vectorizer's own English stopword list.
    pub builtin_stopwords: bool,
}

impl Default for VectorizerConfig {
    fn default() -> Self {
        Self {
            max_features: Some(5000),
            ngram_range: (1, 1),
            min_df: 0.0,
            max_df: 1.0,
            builtin_stopwords: true,
        }
    }
}

impl ModelConfig {
    pub fn new(model_type: ModelType) -> Self {
        Self {
            model_type,
            ..Default::default()
        }
    }

    /// Effective vectorizer settings for this branch.
    pub fn vectorizer_config(&self) -> VectorizerConfig {
        self.vectorizer
            .clone()
            .unwrap_or_else(|| self.model_type.default_vectorizer())
    }
}
