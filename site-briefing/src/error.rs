use crate::schema::Field;
use briefing_llm_sdk::error::LlmError;
use thiserror::Error;

/// Errors surfaced while turning a submission into generated documents.
///
/// Display strings are user-facing and written in Portuguese, the language of
/// the questionnaire.
#[derive(Error, Debug)]
pub enum BriefingError {
    /// One or more required fields are empty
    #[error(
        "Por favor, preencha todos os campos obrigatórios. Faltando: {}",
        join_keys(.missing)
    )]
    Validation { missing: Vec<Field> },

    /// Uploaded answers are absent, empty or unusable
    #[error("Erro ao ler as respostas: {message}")]
    Input { message: String },

    /// CSV could not be parsed
    #[error("Erro ao ler a planilha: {source}")]
    Csv {
        #[from]
        source: csv::Error,
    },

    /// Form values could not be parsed
    #[error("Erro ao ler o formulário: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },

    #[error("Erro de leitura/escrita: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// The generation collaborator failed
    #[error("{source}")]
    Generation {
        #[from]
        source: LlmError,
    },

    #[error("Erro de configuração: {source}")]
    Config {
        #[from]
        source: config::ConfigError,
    },
}

impl BriefingError {
    pub fn input<S: Into<String>>(message: S) -> Self {
        Self::Input {
            message: message.into(),
        }
    }

    /// True for errors caused by what the user submitted
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::Validation { .. } | Self::Input { .. } | Self::Csv { .. } | Self::Json { .. }
        )
    }
}

fn join_keys(missing: &[Field]) -> String {
    missing
        .iter()
        .map(|field| field.key())
        .collect::<Vec<_>>()
        .join(", ")
}
