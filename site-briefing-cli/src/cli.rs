use clap::{Args, Parser, Subcommand, ValueEnum};
use site_briefing::config::BriefingConfig;
use site_briefing::{AnswerSource, GenerationMode};
use std::path::PathBuf;

use crate::{commands, error::CliError};

#[derive(Debug, Parser)]
#[command(name = "site-briefing")]
#[command(about = "Generate website project briefings and proposals from client answers")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate the briefing (and proposal) and save it as markdown
    Generate {
        #[command(flatten)]
        source: SourceArgs,

        /// Documents to generate (defaults to generation.mode)
        #[arg(short, long, value_enum)]
        mode: Option<ModeArg>,

        /// Directory for the markdown file (defaults to output.dir)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Show the documents without saving a file
        #[arg(long)]
        no_download: bool,
    },

    /// Print the briefing prompt without calling the model
    Prompt {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Print the normalized answers as JSON
    Normalize {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Print a blank CSV template with one column per question
    Template {
        /// Write the template to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Where the answers come from; exactly one is required
#[derive(Debug, Clone, Args)]
#[group(required = true, multiple = false)]
pub struct SourceArgs {
    /// JSON object of form values keyed by field name
    #[arg(long, value_name = "JSON")]
    pub form: Option<PathBuf>,

    /// CSV answers sheet; only the first row is used
    #[arg(long, value_name = "CSV")]
    pub table: Option<PathBuf>,
}

impl SourceArgs {
    pub fn load(&self) -> Result<AnswerSource, CliError> {
        let source = match (&self.form, &self.table) {
            (Some(path), _) => AnswerSource::from_form_file(path)?,
            (None, Some(path)) => AnswerSource::from_table_file(path)?,
            (None, None) => {
                return Err(CliError::Input(
                    "informe --form ou --table".to_string(),
                ))
            }
        };
        Ok(source)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Briefing only
    Briefing,
    /// Briefing followed by a project proposal
    BriefingWithProposal,
}

impl From<ModeArg> for GenerationMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Briefing => GenerationMode::Briefing,
            ModeArg::BriefingWithProposal => GenerationMode::BriefingWithProposal,
        }
    }
}

impl Cli {
    pub fn load_config(&self) -> Result<BriefingConfig, CliError> {
        Ok(BriefingConfig::load(self.config.as_deref())?)
    }

    pub async fn run(&self, config: &BriefingConfig) -> Result<(), CliError> {
        match &self.command {
            Commands::Generate {
                source,
                mode,
                output_dir,
                no_download,
            } => {
                let options = commands::GenerateOptions {
                    mode: mode.map(GenerationMode::from),
                    output_dir: output_dir.clone(),
                    download: !no_download,
                };
                commands::generate(config, source, options).await
            }
            Commands::Prompt { source } => commands::print_prompt(source),
            Commands::Normalize { source } => commands::print_normalized(source),
            Commands::Template { output } => commands::write_template(output.as_deref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_generate_requires_exactly_one_source() {
        assert!(Cli::try_parse_from(["site-briefing", "generate"]).is_err());
        assert!(Cli::try_parse_from([
            "site-briefing",
            "generate",
            "--form",
            "a.json",
            "--table",
            "b.csv"
        ])
        .is_err());

        let cli = Cli::try_parse_from([
            "site-briefing",
            "--verbose",
            "generate",
            "--table",
            "respostas.csv",
            "--mode",
            "briefing-with-proposal",
            "--no-download",
        ])
        .unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::Generate {
                source,
                mode,
                no_download,
                ..
            } => {
                assert_eq!(source.table, Some(PathBuf::from("respostas.csv")));
                assert_eq!(mode, Some(ModeArg::BriefingWithProposal));
                assert!(no_download);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_template_takes_no_source() {
        let cli = Cli::try_parse_from(["site-briefing", "template"]).unwrap();
        assert!(matches!(cli.command, Commands::Template { output: None }));
    }

    #[test]
    fn test_config_failures_exit_with_config_code() {
        let cli = Cli::try_parse_from([
            "site-briefing",
            "--config",
            "/nonexistent/briefing.toml",
            "template",
        ])
        .unwrap();
        let err = cli.load_config().unwrap_err();
        assert_eq!(err.exit_code(), 2);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("briefing.toml");
        std::fs::write(&path, "[llm]\nmax_output_tokens = \"lots\"\n").unwrap();
        let cli = Cli::try_parse_from([
            "site-briefing",
            "--config",
            path.to_str().unwrap(),
            "template",
        ])
        .unwrap();
        let err = cli.load_config().unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
        assert_eq!(err.exit_code(), 2);
    }
}
