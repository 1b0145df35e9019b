//! Canonical intake schema.
//!
//! Every field of the project questionnaire is a [`Field`] variant. The variant
//! carries its wire key (the form field name), the question text used as a
//! spreadsheet column header, its value domain and, for conditional fields,
//! the flag that governs it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical yes/no answer. Serialized as the literal tokens `"Sim"` and `"Não"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Flag {
    #[serde(rename = "Sim")]
    Sim,
    #[serde(rename = "Não")]
    Nao,
}

impl Flag {
    pub fn as_str(self) -> &'static str {
        match self {
            Flag::Sim => "Sim",
            Flag::Nao => "Não",
        }
    }

    pub fn is_yes(self) -> bool {
        self == Flag::Sim
    }

    /// Pick between two renderings depending on the answer
    pub fn choose<'a>(self, yes: &'a str, no: &'a str) -> &'a str {
        if self.is_yes() {
            yes
        } else {
            no
        }
    }
}

impl From<bool> for Flag {
    fn from(value: bool) -> Self {
        if value {
            Flag::Sim
        } else {
            Flag::Nao
        }
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value domain of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Arbitrary text; empty string means "not provided"
    Text,
    /// Exactly `Sim` or `Não`
    Flag,
}

/// Second spreadsheet question folded into `consideracoes_finais`.
pub const ADDITIONAL_CONSIDERATIONS_QUESTION: &str = "Alguma consideração adicional?";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    CompanyName,
    ContactName,
    ContactRole,
    ContactEmail,
    ContactPhone,
    SiteDescription,
    PrimaryObjectives,
    SecondaryObjectives,
    TargetAudience,
    AudienceSegments,
    Competitors,
    CompetitorStrengths,
    CompetitorWeaknesses,
    Differentiators,
    Features,
    ContentReady,
    PageCount,
    DesiredPages,
    VisualPerception,
    LikedReferences,
    DislikedReferences,
    Seo,
    SeoOptimizations,
    MobilePriority,
    Ssl,
    Platform,
    Hosting,
    DataUsage,
    CookieBanner,
    Tagging,
    TrackingTags,
    Integrations,
    IntegrationDetails,
    Deadline,
    HasBudget,
    Budget,
    Maintenance,
    FinalConsiderations,
}

impl Field {
    /// All fields in questionnaire order
    pub const ALL: [Field; 38] = [
        Field::CompanyName,
        Field::ContactName,
        Field::ContactRole,
        Field::ContactEmail,
        Field::ContactPhone,
        Field::SiteDescription,
        Field::PrimaryObjectives,
        Field::SecondaryObjectives,
        Field::TargetAudience,
        Field::AudienceSegments,
        Field::Competitors,
        Field::CompetitorStrengths,
        Field::CompetitorWeaknesses,
        Field::Differentiators,
        Field::Features,
        Field::ContentReady,
        Field::PageCount,
        Field::DesiredPages,
        Field::VisualPerception,
        Field::LikedReferences,
        Field::DislikedReferences,
        Field::Seo,
        Field::SeoOptimizations,
        Field::MobilePriority,
        Field::Ssl,
        Field::Platform,
        Field::Hosting,
        Field::DataUsage,
        Field::CookieBanner,
        Field::Tagging,
        Field::TrackingTags,
        Field::Integrations,
        Field::IntegrationDetails,
        Field::Deadline,
        Field::HasBudget,
        Field::Budget,
        Field::Maintenance,
        Field::FinalConsiderations,
    ];

    /// (flag, dependent text field) pairs
    pub const CONDITIONAL: [(Field, Field); 4] = [
        (Field::Seo, Field::SeoOptimizations),
        (Field::Tagging, Field::TrackingTags),
        (Field::Integrations, Field::IntegrationDetails),
        (Field::HasBudget, Field::Budget),
    ];

    /// Form field name
    pub fn key(self) -> &'static str {
        match self {
            Field::CompanyName => "nome_empresa",
            Field::ContactName => "nome_responsavel",
            Field::ContactRole => "cargo_responsavel",
            Field::ContactEmail => "email_responsavel",
            Field::ContactPhone => "telefone_responsavel",
            Field::SiteDescription => "descricao_site",
            Field::PrimaryObjectives => "objetivos_principais",
            Field::SecondaryObjectives => "objetivos_secundarios",
            Field::TargetAudience => "publico_alvo",
            Field::AudienceSegments => "segmentos_especificos",
            Field::Competitors => "concorrentes",
            Field::CompetitorStrengths => "gosta_concorrentes",
            Field::CompetitorWeaknesses => "nao_gosta_concorrentes",
            Field::Differentiators => "diferenciais",
            Field::Features => "funcionalidades",
            Field::ContentReady => "conteudo_pronto",
            Field::PageCount => "numero_paginas",
            Field::DesiredPages => "paginas_desejadas",
            Field::VisualPerception => "percepcao_visual",
            Field::LikedReferences => "referencias_gosta",
            Field::DislikedReferences => "referencias_nao_gosta",
            Field::Seo => "seo",
            Field::SeoOptimizations => "otimizacoes_seo",
            Field::MobilePriority => "mobile_prioritario",
            Field::Ssl => "ssl",
            Field::Platform => "plataforma",
            Field::Hosting => "hospedagem",
            Field::DataUsage => "uso_dados",
            Field::CookieBanner => "banner_cookies",
            Field::Tagging => "tagueamento",
            Field::TrackingTags => "tags_especificas",
            Field::Integrations => "integracoes",
            Field::IntegrationDetails => "detalhes_integracoes",
            Field::Deadline => "prazo",
            Field::HasBudget => "tem_orcamento",
            Field::Budget => "orcamento",
            Field::Maintenance => "manutencao",
            Field::FinalConsiderations => "consideracoes_finais",
        }
    }

    pub fn from_key(key: &str) -> Option<Field> {
        Field::ALL.iter().copied().find(|field| field.key() == key)
    }

    /// Question text, also the spreadsheet column header
    pub fn question(self) -> &'static str {
        match self {
            Field::CompanyName => "Nome da empresa/instituição",
            Field::ContactName => "Nome do responsável",
            Field::ContactRole => "Cargo do responsável",
            Field::ContactEmail => "E-mail",
            Field::ContactPhone => "Telefone",
            Field::SiteDescription => "Descreva o site que deseja",
            Field::PrimaryObjectives => "Principais objetivos",
            Field::SecondaryObjectives => "Objetivos secundários",
            Field::TargetAudience => "Quem é o público-alvo do seu site?",
            Field::AudienceSegments => "Há algum segmento específico que precisa ser destacado?",
            Field::Competitors => "Quem são seus principais concorrentes?",
            Field::CompetitorStrengths => "O que você gosta nos sites dos concorrentes?",
            Field::CompetitorWeaknesses => "O que você não gosta nos sites dos concorrentes?",
            Field::Differentiators => "O que você espera que seu site ofereça de diferente?",
            Field::Features => "Quais funcionalidades específicas você gostaria de incluir?",
            Field::ContentReady => {
                "Você já possui todo o conteúdo pronto (textos, imagens, vídeos)?"
            }
            Field::PageCount => "Quantas páginas aproximadamente o site terá?",
            Field::DesiredPages => "Quais páginas você gostaria de incluir no novo site?",
            Field::VisualPerception => "Como você gostaria que o site fosse visualmente percebido?",
            Field::LikedReferences => "Há algum site ou referência visual que você gosta?",
            Field::DislikedReferences => "Há alguma referência visual que você não gosta?",
            Field::Seo => "O site precisa ser otimizado para SEO?",
            Field::SeoOptimizations => "Que tipo de otimização específica você deseja?",
            Field::MobilePriority => "A versão mobile é uma prioridade?",
            Field::Ssl => "Você precisa de certificado SSL?",
            Field::Platform => "Preferência de plataforma para desenvolvimento",
            Field::Hosting => "Você já possui hospedagem?",
            Field::DataUsage => "Deseja usar dados de usuários (cookies, analytics)?",
            Field::CookieBanner => "Precisa de banner de consentimento para cookies?",
            Field::Tagging => "Precisa de tagueamento para monitoramento?",
            Field::TrackingTags => "Quais tags de conversão/tracking precisará?",
            Field::Integrations => "Precisará integrar com plataformas externas ou APIs?",
            Field::IntegrationDetails => "Quais integrações específicas?",
            Field::Deadline => "Expectativa de prazo para lançamento",
            Field::HasBudget => "Já tem um orçamento estimado?",
            Field::Budget => "Qual o orçamento estimado?",
            Field::Maintenance => "Precisará de manutenção contínua após lançamento?",
            Field::FinalConsiderations => "Alguma outra necessidade ou exigência não mencionada?",
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            Field::ContentReady
            | Field::Seo
            | Field::MobilePriority
            | Field::Ssl
            | Field::Hosting
            | Field::DataUsage
            | Field::CookieBanner
            | Field::Tagging
            | Field::Integrations
            | Field::HasBudget
            | Field::Maintenance => FieldKind::Flag,
            _ => FieldKind::Text,
        }
    }

    pub fn is_flag(self) -> bool {
        self.kind() == FieldKind::Flag
    }

    pub fn is_required(self) -> bool {
        matches!(
            self,
            Field::CompanyName
                | Field::ContactName
                | Field::ContactRole
                | Field::ContactEmail
                | Field::ContactPhone
                | Field::SiteDescription
                | Field::PrimaryObjectives
                | Field::TargetAudience
                | Field::Differentiators
                | Field::Features
                | Field::PageCount
                | Field::DesiredPages
                | Field::VisualPerception
                | Field::Deadline
        )
    }

    /// Flag that must be `Sim` for this field to carry a value
    pub fn governing_flag(self) -> Option<Field> {
        Field::CONDITIONAL
            .iter()
            .find(|(_, dependent)| *dependent == self)
            .map(|(flag, _)| *flag)
    }

    /// Phrase rendered in the prompt when a text field is left blank
    pub fn placeholder(self) -> &'static str {
        match self {
            Field::CompanyName => "Empresa não informada",
            Field::ContactName => "Responsável não informado",
            Field::ContactRole => "cargo não informado",
            Field::ContactEmail => "e-mail não informado",
            Field::ContactPhone => "telefone não informado",
            Field::SiteDescription => "Não especificado",
            Field::PrimaryObjectives => "Não especificados",
            Field::SecondaryObjectives => "Não especificado",
            Field::TargetAudience => "Não especificado",
            Field::AudienceSegments => "Não aplicável",
            Field::Competitors => "Não informados",
            Field::CompetitorStrengths => "Nenhum ponto positivo informado",
            Field::CompetitorWeaknesses => "Nenhum ponto negativo informado",
            Field::Differentiators => "Não especificados",
            Field::Features => "Não especificadas",
            Field::PageCount => "Não especificado",
            Field::DesiredPages => "Não especificadas",
            Field::VisualPerception => "Não especificada",
            Field::LikedReferences => "Nenhuma referência informada",
            Field::DislikedReferences => "Nenhuma referência informada",
            Field::SeoOptimizations => "Não especificadas",
            Field::Platform => "Não especificada",
            Field::TrackingTags => "Não especificadas",
            Field::IntegrationDetails => "Não especificados",
            Field::Deadline => "Não especificado",
            Field::Budget => "Não informado",
            Field::FinalConsiderations => "Nenhuma consideração adicional",
            _ => "Não especificado",
        }
    }

    pub fn required() -> impl Iterator<Item = Field> {
        Field::ALL.into_iter().filter(|field| field.is_required())
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
