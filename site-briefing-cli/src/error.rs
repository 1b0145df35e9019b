use briefing_llm_sdk::error::LlmError;
use site_briefing::BriefingError;
use std::fmt;

/// Errors that end a `site-briefing` invocation
#[derive(Debug)]
pub enum CliError {
    /// Configuration or logging setup errors
    Config(String),
    /// File I/O errors
    Io(std::io::Error),
    /// Answers could not be read or failed validation
    Input(String),
    /// A submission was processed but produced no documents
    Submission(String),
    /// Generic errors from anyhow
    Other(anyhow::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Config(msg) => write!(f, "Erro de configuração: {msg}"),
            CliError::Io(err) => write!(f, "Erro de leitura/escrita: {err}"),
            CliError::Input(msg) => write!(f, "{msg}"),
            CliError::Submission(msg) => write!(f, "{msg}"),
            CliError::Other(err) => write!(f, "Erro: {err}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(err) => Some(err),
            CliError::Other(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl CliError {
    /// Get the exit code for this error type
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Config(_) => 2,
            CliError::Io(_) => 3,
            CliError::Input(_) => 4,
            CliError::Submission(_) => 5,
            CliError::Other(_) => 1,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Io(err)
    }
}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::Other(err)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::Other(err.into())
    }
}

impl From<LlmError> for CliError {
    fn from(err: LlmError) -> Self {
        CliError::Config(err.to_string())
    }
}

impl From<BriefingError> for CliError {
    fn from(err: BriefingError) -> Self {
        match err {
            BriefingError::Io { source } => CliError::Io(source),
            BriefingError::Config { source } => CliError::Config(source.to_string()),
            err if err.is_input_error() => CliError::Input(err.to_string()),
            err => CliError::Other(err.into()),
        }
    }
}
