//! Full submission: normalize, generate, display and save

use crate::cli::SourceArgs;
use crate::console::ConsoleReporter;
use crate::error::CliError;
use briefing_llm_sdk::gemini::GeminiClient;
use site_briefing::config::{BriefingConfig, API_KEY_FALLBACK_VARS};
use site_briefing::submission::submit_answers;
use site_briefing::{BriefingComposer, GenerationMode};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Overrides `generation.mode`
    pub mode: Option<GenerationMode>,
    /// Overrides `output.dir`
    pub output_dir: Option<PathBuf>,
    /// Save the markdown file
    pub download: bool,
}

pub async fn generate(
    config: &BriefingConfig,
    source: &SourceArgs,
    options: GenerateOptions,
) -> Result<(), CliError> {
    // Validate before the client exists; a missing key must not hide missing fields
    let answers = source.load()?.normalize()?;

    let mode = options.mode.unwrap_or(config.generation.mode);
    let output_dir = options
        .download
        .then(|| options.output_dir.unwrap_or_else(|| config.output.dir.clone()));

    let client = gemini_client(config)?;
    let reporter = Arc::new(ConsoleReporter::stdout(output_dir));
    let composer = BriefingComposer::new(
        Arc::new(client),
        config.generation_settings(),
        reporter.clone(),
    );

    let today = chrono::Local::now().date_naive();
    match submit_answers(answers, mode, &composer, reporter.as_ref(), today).await {
        Some(outcome) => {
            tracing::debug!(
                proposal = outcome.documents.proposal.is_some(),
                saved = reporter.saved_files().len(),
                "Generate command finished"
            );
            Ok(())
        }
        None => Err(CliError::Submission("Nenhum briefing foi gerado".to_string())),
    }
}

fn gemini_client(config: &BriefingConfig) -> Result<GeminiClient, CliError> {
    let api_key = config.api_key().ok_or_else(|| CliError::Config(missing_key_message()))?;

    Ok(GeminiClient::new(api_key)?
        .with_base_url(config.llm.base_url.clone())
        .with_model(config.llm.model.clone()))
}

fn missing_key_message() -> String {
    format!(
        "chave da API do Gemini não encontrada; defina llm.api_key, \
         SITE_BRIEFING_LLM__API_KEY, {}",
        API_KEY_FALLBACK_VARS.join(" ou ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form_source(json: &str) -> (tempfile::TempDir, SourceArgs) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("formulario.json");
        std::fs::write(&path, json).unwrap();
        let source = SourceArgs {
            form: Some(path),
            table: None,
        };
        (dir, source)
    }

    fn options() -> GenerateOptions {
        GenerateOptions {
            mode: None,
            output_dir: None,
            download: false,
        }
    }

    #[tokio::test]
    async fn test_missing_fields_reported_before_api_key_check() {
        let config = BriefingConfig::from_toml_str("").unwrap();
        let (_dir, source) = form_source(r#"{"nome_empresa": "Acme"}"#);

        let err = generate(&config, &source, options()).await.unwrap_err();

        assert_eq!(err.exit_code(), 4);
        let message = err.to_string();
        assert!(message.starts_with("Por favor, preencha todos os campos obrigatórios."));
        assert!(message.contains("nome_responsavel"));
        assert!(message.contains("prazo"));
    }

    #[tokio::test]
    async fn test_unreadable_form_is_input_error() {
        let config = BriefingConfig::from_toml_str("").unwrap();
        let (_dir, source) = form_source("[1, 2]");

        let err = generate(&config, &source, options()).await.unwrap_err();
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn test_missing_key_message_names_every_variable() {
        let message = missing_key_message();
        for name in ["llm.api_key", "SITE_BRIEFING_LLM__API_KEY", "GEM_API_KEY", "GEMINI_API_KEY"] {
            assert!(message.contains(name), "{name} missing from {message}");
        }
    }
}
