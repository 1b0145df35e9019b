//! Briefing and proposal generation over an [`LlmClient`].

use crate::answers::Answers;
use crate::error::BriefingError;
use crate::prompt::{render_briefing_prompt, render_proposal_prompt};
use crate::report::Reporter;
use briefing_llm_sdk::client::LlmClient;
use briefing_llm_sdk::types::CompletionRequest;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Which documents a submission asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationMode {
    /// Briefing only
    Briefing,
    /// Briefing, then a proposal derived from it
    #[default]
    BriefingWithProposal,
}

/// Model parameters injected from configuration
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationSettings {
    pub model: String,
    pub max_output_tokens: u32,
    pub temperature: Option<f32>,
}

/// Generated documents of one submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BriefingDocuments {
    pub briefing: String,
    /// `None` in briefing-only mode or when the proposal call failed
    pub proposal: Option<String>,
}

impl BriefingDocuments {
    /// Briefing, then the proposal after a horizontal rule
    pub fn to_markdown(&self) -> String {
        match &self.proposal {
            Some(proposal) => format!(
                "{}\n\n---\n\n{}\n",
                self.briefing.trim_end(),
                proposal.trim_end()
            ),
            None => format!("{}\n", self.briefing.trim_end()),
        }
    }
}

/// Renders prompts from answers and asks the model for the documents.
///
/// Generation failures never propagate: they are reported through the
/// [`Reporter`] and show up as an absent result.
pub struct BriefingComposer {
    client: Arc<dyn LlmClient>,
    settings: GenerationSettings,
    reporter: Arc<dyn Reporter>,
}

impl BriefingComposer {
    pub fn new(
        client: Arc<dyn LlmClient>,
        settings: GenerationSettings,
        reporter: Arc<dyn Reporter>,
    ) -> Self {
        Self {
            client,
            settings,
            reporter,
        }
    }

    pub fn settings(&self) -> &GenerationSettings {
        &self.settings
    }

    pub async fn generate(
        &self,
        answers: &Answers,
        mode: GenerationMode,
    ) -> Option<BriefingDocuments> {
        match mode {
            GenerationMode::Briefing => {
                self.generate_briefing(answers)
                    .await
                    .map(|briefing| BriefingDocuments {
                        briefing,
                        proposal: None,
                    })
            }
            GenerationMode::BriefingWithProposal => self.generate_with_proposal(answers).await,
        }
    }

    /// One call; `None` when it failed
    pub async fn generate_briefing(&self, answers: &Answers) -> Option<String> {
        let prompt = render_briefing_prompt(answers);
        tracing::info!(
            company = answers.company_name(),
            prompt_chars = prompt.chars().count(),
            "Generating briefing"
        );

        match self.complete(prompt).await {
            Ok(briefing) => Some(briefing),
            Err(e) => {
                tracing::warn!(error = %e, "Briefing generation failed");
                self.reporter
                    .error(&format!("Erro ao gerar o briefing: {}", e));
                None
            }
        }
    }

    /// Briefing then proposal.
    ///
    /// `None` when the briefing failed (the proposal is then not attempted). When
    /// only the proposal failed the briefing is returned with `proposal: None`.
    pub async fn generate_with_proposal(&self, answers: &Answers) -> Option<BriefingDocuments> {
        let briefing = self.generate_briefing(answers).await?;

        let prompt = render_proposal_prompt(&briefing);
        tracing::info!(
            prompt_chars = prompt.chars().count(),
            "Generating proposal from briefing"
        );

        let proposal = match self.complete(prompt).await {
            Ok(proposal) => Some(proposal),
            Err(e) => {
                tracing::warn!(error = %e, "Proposal generation failed");
                self.reporter
                    .error(&format!("Erro ao gerar a proposta: {}", e));
                None
            }
        };

        Some(BriefingDocuments { briefing, proposal })
    }

    async fn complete(&self, prompt: String) -> Result<String, BriefingError> {
        let request = CompletionRequest::prompt(prompt, self.settings.max_output_tokens)
            .with_model(self.settings.model.clone())
            .with_temperature(self.settings.temperature);

        let response = self.client.complete(request).await?;
        tracing::debug!(
            provider = self.client.provider_name(),
            input_tokens = response.usage.input_tokens,
            output_tokens = response.usage.output_tokens,
            "Generation call completed"
        );

        let text = response.text();
        if text.trim().is_empty() {
            return Err(briefing_llm_sdk::error::LlmError::empty_response(
                "the model returned no text",
            )
            .into());
        }
        Ok(text)
    }
}
