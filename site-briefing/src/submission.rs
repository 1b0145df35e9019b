//! One submission from raw answers to displayed documents.

use crate::answers::Answers;
use crate::composer::{BriefingComposer, BriefingDocuments, GenerationMode};
use crate::normalize::AnswerSource;
use crate::report::{Download, Reporter};
use chrono::NaiveDate;

pub const SUCCESS_MESSAGE: &str = "Briefing gerado com sucesso!";
pub const BRIEFING_TITLE: &str = "📄 Briefing Completo para Desenvolvimento de Site";
pub const PROPOSAL_TITLE: &str = "📋 Proposta de Projeto";

/// What a successful submission produced
#[derive(Debug, Clone)]
pub struct SubmissionOutcome {
    pub answers: Answers,
    pub documents: BriefingDocuments,
    pub download: Download,
}

/// Normalize, validate, generate, then report.
///
/// Every failure is reported through `reporter` and yields `None`. A validation
/// or input failure stops before the model is called.
pub async fn submit(
    source: &AnswerSource,
    mode: GenerationMode,
    composer: &BriefingComposer,
    reporter: &dyn Reporter,
    date: NaiveDate,
) -> Option<SubmissionOutcome> {
    tracing::info!(source = source.kind(), ?mode, "Processing submission");

    let answers = match source.normalize() {
        Ok(answers) => answers,
        Err(e) => {
            tracing::warn!(error = %e, "Submission rejected");
            reporter.error(&e.to_string());
            return None;
        }
    };

    submit_answers(answers, mode, composer, reporter, date).await
}

/// Generate and report for answers that already passed validation
pub async fn submit_answers(
    answers: Answers,
    mode: GenerationMode,
    composer: &BriefingComposer,
    reporter: &dyn Reporter,
    date: NaiveDate,
) -> Option<SubmissionOutcome> {
    let documents = composer.generate(&answers, mode).await?;

    reporter.success(SUCCESS_MESSAGE);
    reporter.document(BRIEFING_TITLE, &documents.briefing);
    if let Some(proposal) = &documents.proposal {
        reporter.document(PROPOSAL_TITLE, proposal);
    }

    let download = Download::for_documents(answers.company_name(), date, &documents);
    reporter.download(&download);
    tracing::info!(file_name = %download.file_name, "Submission completed");

    Some(SubmissionOutcome {
        answers,
        documents,
        download,
    })
}
