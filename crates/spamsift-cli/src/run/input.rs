use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::ArgMatches;
use serde::{Deserialize, Serialize};

use spamsift_classifiers::config::{ModelConfig, ModelType};

/// Settings for one full train / evaluate / prompt run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub train_data: PathBuf,
    pub eval_data: PathBuf,
    /// Model branches to train, in report order. Each branch carries its own
    /// normalizer and vectorizer settings.
    pub models: Vec<ModelConfig>,
    /// Model answering the interactive prompt.
    pub interactive_model: String,
    pub interactive: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            train_data: PathBuf::from("emails.csv"),
            eval_data: PathBuf::from("spam_ham_dataset.csv"),
            models: ModelType::all().into_iter().map(ModelConfig::new).collect(),
            interactive_model: String::from("naive_bayes"),
            interactive: true,
        }
    }
}

impl RunConfig {
    /// Load the JSON config if one is given, then apply CLI overrides.
    pub fn from_arguments(config_path: Option<&PathBuf>, matches: &ArgMatches) -> Result<Self> {
        let mut config = match config_path {
            Some(path) => load_run_config(path)?,
            None => RunConfig::default(),
        };

        if let Some(train_data) = matches.get_one::<String>("train_data") {
            config.train_data = PathBuf::from(train_data);
        }

        if let Some(eval_data) = matches.get_one::<String>("eval_data") {
            config.eval_data = PathBuf::from(eval_data);
        }

        if let Some(models) = matches.get_many::<String>("model") {
            let selected = models
                .map(|m| ModelType::from_str(m).map_err(anyhow::Error::msg))
                .collect::<Result<Vec<_>>>()?;
            config.models = config.select_models(&selected);
        }

        if let Some(model) = matches.get_one::<String>("interactive_model") {
            config.interactive_model = model.clone();
        }

        if matches.get_flag("no_interactive") {
            config.interactive = false;
        }

        // Normalize aliases such as "nb" to the canonical model name.
        config.interactive_model = ModelType::from_str(&config.interactive_model)
            .map_err(anyhow::Error::msg)?
            .name()
            .to_string();

        Ok(config)
    }

    /// Branches for the selected model types, in selection order. A branch
    /// already configured for a type keeps its settings; others get defaults.
    pub fn select_models(&self, selected: &[ModelType]) -> Vec<ModelConfig> {
        selected
            .iter()
            .map(|model_type| {
                self.models
                    .iter()
                    .find(|branch| branch.model_type.name() == model_type.name())
                    .cloned()
                    .unwrap_or_else(|| ModelConfig::new(model_type.clone()))
            })
            .collect()
    }
}

/// Load a run configuration from a JSON file.
pub fn load_run_config<P: AsRef<Path>>(path: P) -> Result<RunConfig> {
    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let config: RunConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    Ok(config)
}
