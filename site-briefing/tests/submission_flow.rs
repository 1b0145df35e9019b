mod common;

use briefing_llm_sdk::error::LlmError;
use common::{fixture, settings, submission_date, Event, FakeClient, RecordingReporter};
use site_briefing::normalize::{parse_form_json, table_template};
use site_briefing::prompt::render_briefing_prompt;
use site_briefing::submission::{
    submit, submit_answers, BRIEFING_TITLE, PROPOSAL_TITLE, SUCCESS_MESSAGE,
};
use site_briefing::{AnswerSource, BriefingComposer, Field, Flag, GenerationMode};
use std::sync::Arc;

fn composer(client: Arc<FakeClient>, reporter: Arc<RecordingReporter>) -> BriefingComposer {
    BriefingComposer::new(client, settings(), reporter)
}

#[test]
fn test_form_fixture_normalizes() {
    let source = AnswerSource::from_form_file(&fixture("formulario_acme.json")).unwrap();
    let answers = source.normalize().unwrap();

    assert_eq!(answers.company_name(), "Acme Ltda");
    assert_eq!(answers.text(Field::Features), "Carrinho, Busca, Rastreamento");
    assert_eq!(answers.text(Field::PageCount), "12");
    assert_eq!(answers.flag(Field::Ssl), Flag::Sim);
    assert_eq!(answers.flag(Field::Seo), Flag::Nao);
    assert_eq!(answers.text(Field::SeoOptimizations), "");
    assert_eq!(answers.text(Field::Budget), "R$ 25.000");
}

#[test]
fn test_form_without_seo_has_no_optimization_line() {
    let answers = AnswerSource::from_form_file(&fixture("formulario_acme.json"))
        .unwrap()
        .normalize()
        .unwrap();
    let prompt = render_briefing_prompt(&answers);

    assert!(prompt.contains("Necessidade de SEO: Não"));
    assert!(!prompt.contains("Otimizações específicas solicitadas"));
    assert!(prompt.contains("Orçamento estimado: R$ 25.000"));
}

#[test]
fn test_table_fixture_normalizes() {
    let source = AnswerSource::from_table_file(&fixture("respostas_sem_hospedagem.csv")).unwrap();
    let answers = source.normalize().unwrap();

    assert_eq!(answers.company_name(), "Padaria Aurora");
    assert_eq!(
        answers.text(Field::PrimaryObjectives),
        "Receber encomendas de bolos; divulgar o cardápio"
    );
    // "Sim, já temos" starts with an affirmative token
    assert_eq!(answers.flag(Field::Ssl), Flag::Sim);
    assert_eq!(answers.flag(Field::MobilePriority), Flag::Sim);
    assert_eq!(answers.flag(Field::DataUsage), Flag::Sim);
    assert_eq!(answers.flag(Field::CookieBanner), Flag::Sim);
    // Column absent from the sheet
    assert_eq!(answers.flag(Field::Hosting), Flag::Nao);
    assert_eq!(answers.flag(Field::ContentReady), Flag::Nao);
    assert_eq!(answers.text(Field::SeoOptimizations), "SEO local");
    assert_eq!(answers.text(Field::TrackingTags), "");
    assert_eq!(answers.text(Field::Budget), "");
    assert_eq!(
        answers.text(Field::FinalConsiderations),
        "Área de pedidos recorrentes\n\nLançar antes do Natal"
    );

    let prompt = render_briefing_prompt(&answers);
    assert!(prompt.contains("Otimizações específicas solicitadas: SEO local"));
    assert!(prompt.contains("Hospedagem: Necessária"));
    assert!(!prompt.contains("Tags específicas"));
    assert!(!prompt.contains("Orçamento estimado"));
}

#[test]
fn test_header_only_table_is_input_error() {
    let source = AnswerSource::from_table_file(&fixture("cabecalho_sem_respostas.csv")).unwrap();
    let err = source.normalize().unwrap_err();
    assert!(err.is_input_error());
}

#[test]
fn test_template_round_trips_through_table_reader() {
    let template = table_template().unwrap();
    let header = template.lines().next().unwrap();
    let mut row: Vec<String> = vec![String::new(); header.split(';').count()];
    for field in Field::required() {
        let position = header
            .split(';')
            .position(|column| column.trim_matches('"') == field.question())
            .unwrap();
        row[position] = format!("valor {}", field.key());
    }
    let csv = format!("{}{}\n", template, row.join(";"));

    let answers = AnswerSource::Table(csv).normalize().unwrap();
    assert_eq!(answers.company_name(), "valor nome_empresa");
    assert!(answers.missing_required().is_empty());
}

#[tokio::test]
async fn test_submission_with_proposal_reports_everything() {
    let client = FakeClient::new(vec![
        Ok("# Briefing Padaria Aurora\n\nResumo executivo".into()),
        Ok("# Proposta Padaria Aurora".into()),
    ]);
    let reporter = Arc::new(RecordingReporter::default());
    let source = AnswerSource::from_table_file(&fixture("respostas_sem_hospedagem.csv")).unwrap();

    let outcome = submit(
        &source,
        GenerationMode::BriefingWithProposal,
        &composer(client.clone(), reporter.clone()),
        reporter.as_ref(),
        submission_date(),
    )
    .await
    .unwrap();

    let prompts = client.prompts();
    assert_eq!(prompts.len(), 2);
    assert!(prompts[0].contains("# Briefing para Desenvolvimento de Site - Padaria Aurora"));
    assert!(prompts[1].contains("Resumo executivo"));

    assert_eq!(
        outcome.download.file_name,
        "briefing_site_Padaria_Aurora_2026-10-16.md"
    );
    assert_eq!(outcome.download.mime_type, "text/markdown");
    assert!(outcome.download.content.contains("\n\n---\n\n# Proposta Padaria Aurora"));

    let events = reporter.events();
    assert_eq!(events[0], Event::Success(SUCCESS_MESSAGE.to_string()));
    assert!(matches!(&events[1], Event::Document { title, .. } if title == BRIEFING_TITLE));
    assert!(matches!(&events[2], Event::Document { title, .. } if title == PROPOSAL_TITLE));
    assert!(matches!(&events[3], Event::Download(d) if d == &outcome.download));
    assert_eq!(events.len(), 4);
}

#[tokio::test]
async fn test_briefing_only_mode() {
    let client = FakeClient::new(vec![Ok("# Briefing Acme".into())]);
    let reporter = Arc::new(RecordingReporter::default());
    let source = AnswerSource::from_form_file(&fixture("formulario_acme.json")).unwrap();

    let outcome = submit(
        &source,
        GenerationMode::Briefing,
        &composer(client.clone(), reporter.clone()),
        reporter.as_ref(),
        submission_date(),
    )
    .await
    .unwrap();

    assert_eq!(client.calls(), 1);
    assert!(outcome.documents.proposal.is_none());
    assert_eq!(outcome.download.content, "# Briefing Acme\n");
    assert_eq!(
        outcome.download.file_name,
        "briefing_site_Acme_Ltda_2026-10-16.md"
    );
}

#[tokio::test]
async fn test_missing_required_fields_never_reach_the_model() {
    let client = FakeClient::new(vec![Ok("não deveria ser chamado".into())]);
    let reporter = Arc::new(RecordingReporter::default());
    let values = parse_form_json(r#"{"nome_empresa": "Acme", "prazo": "  "}"#).unwrap();

    let outcome = submit(
        &AnswerSource::Form(values),
        GenerationMode::BriefingWithProposal,
        &composer(client.clone(), reporter.clone()),
        reporter.as_ref(),
        submission_date(),
    )
    .await;

    assert!(outcome.is_none());
    assert_eq!(client.calls(), 0);
    let errors = reporter.errors();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].starts_with("Por favor, preencha todos os campos obrigatórios. Faltando: "));
    assert!(errors[0].contains("nome_responsavel"));
    assert!(errors[0].contains("prazo"));
    assert!(!errors[0].contains("nome_empresa"));
}

#[tokio::test]
async fn test_briefing_failure_is_reported_once() {
    let client = FakeClient::new(vec![
        Err(LlmError::from_status(429, "Resource has been exhausted".into())),
        Ok("# Proposta".into()),
    ]);
    let reporter = Arc::new(RecordingReporter::default());
    let source = AnswerSource::from_form_file(&fixture("formulario_acme.json")).unwrap();

    let outcome = submit(
        &source,
        GenerationMode::BriefingWithProposal,
        &composer(client.clone(), reporter.clone()),
        reporter.as_ref(),
        submission_date(),
    )
    .await;

    assert!(outcome.is_none());
    assert_eq!(client.calls(), 1);
    let events = reporter.events();
    assert_eq!(events.len(), 1);
    assert!(matches!(&events[0], Event::Error(m) if m.starts_with("Erro ao gerar o briefing: ")));
}

#[tokio::test]
async fn test_proposal_failure_still_delivers_briefing() {
    let client = FakeClient::new(vec![
        Ok("# Briefing Acme".into()),
        Err(LlmError::from_status(500, "internal".into())),
    ]);
    let reporter = Arc::new(RecordingReporter::default());
    let source = AnswerSource::from_form_file(&fixture("formulario_acme.json")).unwrap();

    let outcome = submit(
        &source,
        GenerationMode::BriefingWithProposal,
        &composer(client, reporter.clone()),
        reporter.as_ref(),
        submission_date(),
    )
    .await
    .unwrap();

    assert!(outcome.documents.proposal.is_none());
    assert_eq!(outcome.download.content, "# Briefing Acme\n");

    let events = reporter.events();
    assert!(matches!(&events[0], Event::Error(m) if m.starts_with("Erro ao gerar a proposta: ")));
    assert_eq!(events[1], Event::Success(SUCCESS_MESSAGE.to_string()));
    assert!(!events
        .iter()
        .any(|event| matches!(event, Event::Document { title, .. } if title == PROPOSAL_TITLE)));
}

#[tokio::test]
async fn test_validated_answers_go_straight_to_generation() {
    let answers = AnswerSource::from_form_file(&fixture("formulario_acme.json"))
        .unwrap()
        .normalize()
        .unwrap();
    let client = FakeClient::new(vec![Ok("# Briefing Acme".into())]);
    let reporter = Arc::new(RecordingReporter::default());

    let outcome = submit_answers(
        answers.clone(),
        GenerationMode::Briefing,
        &composer(client.clone(), reporter.clone()),
        reporter.as_ref(),
        submission_date(),
    )
    .await
    .unwrap();

    assert_eq!(client.calls(), 1);
    assert_eq!(outcome.answers, answers);
    assert_eq!(reporter.events()[0], Event::Success(SUCCESS_MESSAGE.to_string()));
}
