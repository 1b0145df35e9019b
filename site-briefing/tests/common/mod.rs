#![allow(dead_code)]

use async_trait::async_trait;
use briefing_llm_sdk::client::LlmClient;
use briefing_llm_sdk::error::LlmError;
use briefing_llm_sdk::types::{CompletionRequest, CompletionResponse, ContentBlock, Role, Usage};
use chrono::NaiveDate;
use site_briefing::report::{Download, Reporter};
use site_briefing::GenerationSettings;
use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub fn submission_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
}

pub fn settings() -> GenerationSettings {
    GenerationSettings {
        model: "gemini-1.5-flash".to_string(),
        max_output_tokens: 8192,
        temperature: None,
    }
}

/// LLM client that answers from a script and records every prompt
pub struct FakeClient {
    replies: Mutex<VecDeque<Result<String, LlmError>>>,
    prompts: Mutex<Vec<String>>,
}

impl FakeClient {
    pub fn new(replies: Vec<Result<String, LlmError>>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.into()),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[async_trait]
impl LlmClient for FakeClient {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let prompt = request
            .messages
            .iter()
            .flat_map(|message| message.content.iter())
            .map(|block| match block {
                ContentBlock::Text { text } => text.as_str(),
            })
            .collect::<String>();
        self.prompts.lock().unwrap().push(prompt);

        let text = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(LlmError::internal("unexpected call")))?;

        Ok(CompletionResponse {
            content: vec![ContentBlock::Text { text }],
            role: Role::Assistant,
            usage: Usage {
                input_tokens: 100,
                output_tokens: 200,
            },
            stop_reason: Some("STOP".to_string()),
        })
    }

    fn provider_name(&self) -> &str {
        "fake"
    }

    fn model_name(&self) -> &str {
        "fake-model"
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Error(String),
    Success(String),
    Document { title: String, markdown: String },
    Download(Download),
}

/// Reporter that keeps every event in order
#[derive(Default)]
pub struct RecordingReporter {
    events: Mutex<Vec<Event>>,
}

impl RecordingReporter {
    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                Event::Error(message) => Some(message),
                _ => None,
            })
            .collect()
    }

    fn push(&self, event: Event) {
        self.events.lock().unwrap().push(event);
    }
}

impl Reporter for RecordingReporter {
    fn error(&self, message: &str) {
        self.push(Event::Error(message.to_string()));
    }

    fn success(&self, message: &str) {
        self.push(Event::Success(message.to_string()));
    }

    fn document(&self, title: &str, markdown: &str) {
        self.push(Event::Document {
            title: title.to_string(),
            markdown: markdown.to_string(),
        });
    }

    fn download(&self, download: &Download) {
        self.push(Event::Download(download.clone()));
    }
}
