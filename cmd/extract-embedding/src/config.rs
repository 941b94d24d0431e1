//! Configuration management for extract_embedding.
//!
//! Settings are read from ~/.vembed/extract-embedding/config.yaml when it
//! exists, or from the file given with `--config`. Command line flags take
//! precedence over the file, and the file over built-in defaults.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::Deserialize;
use vembed_embedding::PipelineConfig;

/// Default base configuration directory name.
pub const DEFAULT_BASE_DIR: &str = ".vembed";
/// Application directory under the base directory.
pub const APP_NAME: &str = "extract-embedding";
/// Default configuration filename.
pub const DEFAULT_CONFIG_FILE: &str = "config.yaml";
/// Model artifact used when neither the flag nor the config names one.
pub const DEFAULT_MODEL: &str = "models/extractor.onnx";

/// extract_embedding configuration file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Config {
    /// Extractor model artifact path.
    #[serde(default)]
    pub model: Option<PathBuf>,

    /// Silence trim threshold (absolute amplitude).
    #[serde(default)]
    pub silence_threshold: Option<f32>,

    /// Minimum preprocessed length in samples.
    #[serde(default)]
    pub min_samples: Option<usize>,

    /// Maximum preprocessed length in samples.
    #[serde(default)]
    pub max_samples: Option<usize>,
}

impl Config {
    /// Gets the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| {
            home.join(DEFAULT_BASE_DIR)
                .join(APP_NAME)
                .join(DEFAULT_CONFIG_FILE)
        })
    }

    /// Resolves the model artifact: flag, then config, then default.
    pub fn model_path(&self, flag: Option<&Path>) -> PathBuf {
        flag.map(Path::to_path_buf)
            .or_else(|| self.model.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_MODEL))
    }

    /// Builds the pipeline configuration, filling gaps with defaults.
    pub fn pipeline_config(&self) -> PipelineConfig {
        let mut cfg = PipelineConfig::default();
        if let Some(t) = self.silence_threshold {
            cfg.preprocess.silence_threshold = t;
        }
        if let Some(n) = self.max_samples {
            cfg.preprocess.max_samples = n;
        }
        if let Some(n) = self.min_samples {
            cfg.min_samples = n;
        }
        cfg
    }

    fn validate(&self) -> anyhow::Result<()> {
        if let Some(t) = self.silence_threshold {
            if !t.is_finite() || t < 0.0 {
                anyhow::bail!("silence_threshold must be a non-negative number, got {t}");
            }
        }
        let cfg = self.pipeline_config();
        if cfg.min_samples > cfg.preprocess.max_samples {
            anyhow::bail!(
                "min_samples ({}) exceeds max_samples ({})",
                cfg.min_samples,
                cfg.preprocess.max_samples
            );
        }
        Ok(())
    }
}

/// Loads configuration.
///
/// An explicit path must exist. Without one, the default path is used if
/// present; otherwise built-in defaults apply.
pub fn load_config(custom_path: Option<&Path>) -> anyhow::Result<Config> {
    let path = match custom_path {
        Some(p) => p.to_path_buf(),
        None => match Config::default_config_path() {
            Some(p) if p.exists() => p,
            _ => return Ok(Config::default()),
        },
    };

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("read config {}", path.display()))?;
    let cfg: Config = if content.trim().is_empty() {
        Config::default()
    } else {
        serde_yaml::from_str(&content)
            .with_context(|| format!("parse config {}", path.display()))?
    };
    cfg.validate()
        .with_context(|| format!("invalid config {}", path.display()))?;

    tracing::debug!(path = %path.display(), "loaded config");
    Ok(cfg)
}
