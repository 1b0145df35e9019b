//! # Site Briefing
//!
//! Turns answers to a website-project questionnaire into a professional
//! briefing, and optionally a project proposal, written by a language model.
//!
//! Answers arrive either as form values or as the first row of an uploaded CSV
//! table. Both are normalized into one [`answers::Answers`] record, rendered
//! into a deterministic Portuguese prompt by [`prompt`] and sent through a
//! [`briefing_llm_sdk::client::LlmClient`] by the [`composer::BriefingComposer`].
//! Results go to a [`report::Reporter`].

pub mod answers;
pub mod composer;
pub mod config;
pub mod error;
pub mod normalize;
pub mod prompt;
pub mod report;
pub mod schema;
pub mod submission;

pub use answers::Answers;
pub use composer::{BriefingComposer, BriefingDocuments, GenerationMode, GenerationSettings};
pub use error::BriefingError;
pub use normalize::AnswerSource;
pub use report::{Download, Reporter};
pub use schema::{Field, Flag};
