use crate::composer::{GenerationMode, GenerationSettings};
use crate::error::BriefingError;
use briefing_llm_sdk::gemini::client::DEFAULT_BASE_URL;
use briefing_llm_sdk::models::gemini::DEFAULT_MODEL;
use config::builder::DefaultState;
use config::{Config as ConfigBuilder, ConfigBuilder as Builder, Environment, File, FileFormat};
use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "briefing.toml";
pub const ENV_PREFIX: &str = "SITE_BRIEFING";

/// Checked in order when `llm.api_key` is not configured
pub const API_KEY_FALLBACK_VARS: [&str; 2] = ["GEM_API_KEY", "GEMINI_API_KEY"];

#[derive(Debug, Clone, Deserialize)]
pub struct LlmConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub max_output_tokens: u32,
    pub temperature: Option<f32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerationConfig {
    pub mode: GenerationMode,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub dir: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

/// Process-wide settings, read once at startup and passed down explicitly
#[derive(Debug, Clone, Deserialize)]
pub struct BriefingConfig {
    pub llm: LlmConfig,
    pub generation: GenerationConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

impl BriefingConfig {
    /// Load layered configuration.
    ///
    /// Later sources override earlier ones: defaults, `./briefing.toml`,
    /// `{config_dir}/site-briefing/briefing.toml`, the explicit file, then
    /// `SITE_BRIEFING_*` environment variables (`SITE_BRIEFING_LLM__MODEL`).
    pub fn load(explicit: Option<&Path>) -> Result<Self, BriefingError> {
        let mut settings = defaults()?;

        if let Ok(current_dir) = env::current_dir() {
            let config_path = current_dir.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                tracing::debug!(path = %config_path.display(), "Loading config file");
                settings = settings.add_source(File::from(config_path));
            }
        }

        if let Some(config_dir) = dirs::config_dir() {
            let config_path = config_dir.join("site-briefing").join(CONFIG_FILE_NAME);
            settings = settings.add_source(File::from(config_path).required(false));
        }

        if let Some(path) = explicit {
            tracing::debug!(path = %path.display(), "Loading explicit config file");
            settings = settings.add_source(File::from(path.to_path_buf()));
        }

        let settings = settings.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__"),
        );

        Ok(settings.build()?.try_deserialize()?)
    }

    /// Defaults overlaid with a TOML document, no files or environment
    pub fn from_toml_str(toml: &str) -> Result<Self, BriefingError> {
        let settings = defaults()?.add_source(File::from_str(toml, FileFormat::Toml));
        Ok(settings.build()?.try_deserialize()?)
    }

    /// Configured key, else the first non-empty fallback variable
    pub fn api_key(&self) -> Option<String> {
        resolve_api_key(self.llm.api_key.as_deref(), |name| env::var(name).ok())
    }

    pub fn generation_settings(&self) -> GenerationSettings {
        GenerationSettings {
            model: self.llm.model.clone(),
            max_output_tokens: self.llm.max_output_tokens,
            temperature: self.llm.temperature,
        }
    }
}

fn defaults() -> Result<Builder<DefaultState>, BriefingError> {
    Ok(ConfigBuilder::builder()
        .set_default("llm.model", DEFAULT_MODEL)?
        .set_default("llm.base_url", DEFAULT_BASE_URL)?
        .set_default("llm.max_output_tokens", 8192)?
        .set_default("generation.mode", "briefing_with_proposal")?
        .set_default("output.dir", ".")?
        .set_default("logging.level", "info")?)
}

fn resolve_api_key<F>(configured: Option<&str>, lookup: F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    let non_empty = |key: &str| {
        let key = key.trim();
        (!key.is_empty()).then(|| key.to_string())
    };

    configured.and_then(non_empty).or_else(|| {
        API_KEY_FALLBACK_VARS
            .iter()
            .find_map(|name| lookup(name).as_deref().and_then(non_empty))
    })
}
