//! Prompt templates for the briefing and the proposal.
//!
//! Rendering is a pure function of [`Answers`]: no clock, no randomness.

use crate::answers::Answers;
use crate::schema::Field;

/// Section titles of the briefing template, in order
pub const SECTION_TITLES: [&str; 13] = [
    "Informações Básicas",
    "Descrição do Projeto",
    "Objetivos",
    "Público-Alvo",
    "Análise Competitiva",
    "Requisitos Técnicos e Funcionalidades",
    "Design e Identidade Visual",
    "SEO, Performance e Segurança",
    "Plataforma e Hospedagem",
    "Governança Digital",
    "Integrações",
    "Cronograma e Orçamento",
    "Considerações Adicionais",
];

const BRIEFING_INTRO: &str = "Com base nas seguintes respostas do cliente, gere um briefing profissional e detalhado
para desenvolvimento de um site institucional/empresarial. Organize em seções claras
com títulos destacados e mantenha um tom profissional:";

const BRIEFING_FOOTER: &str = "Por favor, formate este briefing em um documento profissional com:
1. Seções claramente destacadas
2. Listas com marcadores para facilitar a leitura
3. Destaque para informações críticas
4. Linguagem técnica apropriada para desenvolvimento web
5. Resumo executivo no início destacando os pontos mais importantes";

const PROPOSAL_INSTRUCTIONS: &str = "Baseado no briefing gerado abaixo, gere uma proposta de projeto de site, especificando tudo:
desde como o site em si será, até prazo, custo e o detalhamento do projeto inteiro.
Organize a proposta em seções claras (escopo, arquitetura de páginas, funcionalidades,
cronograma por etapas, investimento estimado e condições) e mantenha um tom profissional.";

struct PromptWriter<'a> {
    answers: &'a Answers,
    out: String,
    section: usize,
}

impl<'a> PromptWriter<'a> {
    fn new(answers: &'a Answers) -> Self {
        Self {
            answers,
            out: String::new(),
            section: 0,
        }
    }

    fn line(&mut self, text: impl AsRef<str>) {
        self.out.push_str(text.as_ref());
        self.out.push('\n');
    }

    fn blank(&mut self) {
        self.out.push('\n');
    }

    /// Start the next numbered section, separated by a blank line
    fn section(&mut self) {
        let title = SECTION_TITLES[self.section];
        self.section += 1;
        self.blank();
        self.line(format!("## {}. {}", self.section, title));
    }

    /// Field text, or its placeholder when blank
    fn value(&self, field: Field) -> &'a str {
        let text = self.answers.text(field);
        if text.trim().is_empty() {
            field.placeholder()
        } else {
            text
        }
    }

    fn yes_no(&self, flag: Field, yes: &'static str, no: &'static str) -> &'static str {
        self.answers.flag(flag).choose(yes, no)
    }

    /// Emit `label: value` only when `flag` is Sim
    fn conditional(&mut self, flag: Field, label: &str, field: Field) {
        if self.answers.flag(flag).is_yes() {
            let value = self.value(field);
            self.line(format!("{label}: {value}"));
        }
    }
}

/// Render the briefing prompt for a normalized record
pub fn render_briefing_prompt(answers: &Answers) -> String {
    let mut w = PromptWriter::new(answers);

    w.line(BRIEFING_INTRO);
    w.blank();
    w.line(format!(
        "# Briefing para Desenvolvimento de Site - {}",
        w.value(Field::CompanyName)
    ));

    w.section();
    w.line(format!("- Empresa: {}", w.value(Field::CompanyName)));
    w.line(format!(
        "- Responsável: {} ({})",
        w.value(Field::ContactName),
        w.value(Field::ContactRole)
    ));
    w.line(format!(
        "- Contato: {} | {}",
        w.value(Field::ContactEmail),
        w.value(Field::ContactPhone)
    ));

    w.section();
    w.line(format!("O cliente deseja: {}", w.value(Field::SiteDescription)));

    w.section();
    w.line("Principais objetivos:");
    w.line(format!("- {}", w.value(Field::PrimaryObjectives)));
    w.blank();
    w.line("Objetivos secundários:");
    w.line(format!("- {}", w.value(Field::SecondaryObjectives)));

    w.section();
    w.line(w.value(Field::TargetAudience));
    w.blank();
    w.line("Segmentos específicos:");
    w.line(format!("- {}", w.value(Field::AudienceSegments)));

    w.section();
    w.line(format!("Concorrentes mencionados: {}", w.value(Field::Competitors)));
    w.blank();
    w.line("Pontos positivos observados nos concorrentes:");
    w.line(format!("- {}", w.value(Field::CompetitorStrengths)));
    w.blank();
    w.line("Pontos negativos observados nos concorrentes:");
    w.line(format!("- {}", w.value(Field::CompetitorWeaknesses)));
    w.blank();
    w.line("Diferenciais desejados:");
    w.line(format!("- {}", w.value(Field::Differentiators)));

    w.section();
    w.line("Funcionalidades solicitadas:");
    w.line(format!("- {}", w.value(Field::Features)));
    w.blank();
    w.line("Conteúdo disponível:");
    w.line(format!(
        "- {}",
        w.yes_no(
            Field::ContentReady,
            "Sim, o cliente já possui todo o conteúdo",
            "Não, será necessário criar conteúdo",
        )
    ));
    w.blank();
    w.line(format!("Número estimado de páginas: {}", w.value(Field::PageCount)));
    w.blank();
    w.line("Páginas solicitadas:");
    w.line(format!("- {}", w.value(Field::DesiredPages)));

    w.section();
    w.line(format!(
        "Percepção visual desejada: {}",
        w.value(Field::VisualPerception)
    ));
    w.blank();
    w.line("Referências de design:");
    w.line(format!("- O que gosta: {}", w.value(Field::LikedReferences)));
    w.line(format!("- O que não gosta: {}", w.value(Field::DislikedReferences)));

    w.section();
    w.line(format!(
        "Necessidade de SEO: {}",
        w.answers.flag(Field::Seo)
    ));
    w.conditional(
        Field::Seo,
        "Otimizações específicas solicitadas",
        Field::SeoOptimizations,
    );
    w.blank();
    w.line(format!(
        "Prioridade mobile: {}",
        w.yes_no(Field::MobilePriority, "Alta", "Não especificada")
    ));
    w.line(format!(
        "Certificado SSL: {}",
        w.yes_no(Field::Ssl, "Necessário", "Não solicitado")
    ));

    w.section();
    w.line(format!("Plataforma preferida: {}", w.value(Field::Platform)));
    w.line(format!(
        "Hospedagem: {}",
        w.yes_no(Field::Hosting, "Já possui", "Necessária")
    ));

    w.section();
    w.line(format!("Uso de dados: {}", w.answers.flag(Field::DataUsage)));
    w.line(format!(
        "Banner de consentimento: {}",
        w.yes_no(Field::CookieBanner, "Necessário", "Não necessário")
    ));
    w.line(format!("Tagueamento: {}", w.answers.flag(Field::Tagging)));
    w.conditional(Field::Tagging, "Tags específicas", Field::TrackingTags);

    w.section();
    w.line(format!(
        "Integrações necessárias: {}",
        w.answers.flag(Field::Integrations)
    ));
    w.conditional(
        Field::Integrations,
        "Detalhes das integrações",
        Field::IntegrationDetails,
    );

    w.section();
    w.line(format!("Prazo desejado: {}", w.value(Field::Deadline)));
    w.conditional(Field::HasBudget, "Orçamento estimado", Field::Budget);
    w.line(format!(
        "Manutenção pós-lançamento: {}",
        w.yes_no(Field::Maintenance, "Necessária", "Não solicitada")
    ));

    w.section();
    w.line(w.value(Field::FinalConsiderations).trim());

    w.blank();
    w.line("---");
    w.blank();
    w.line(BRIEFING_FOOTER);

    w.out
}

/// Render the proposal prompt around the extracted briefing text
pub fn render_proposal_prompt(briefing: &str) -> String {
    format!(
        "{PROPOSAL_INSTRUCTIONS}\n\n--- BRIEFING ---\n{}\n--- FIM DO BRIEFING ---\n",
        briefing.trim()
    )
}
