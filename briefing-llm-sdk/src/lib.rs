//! # Briefing LLM SDK
//!
//! Text generation client used by the site briefing generator. It exposes a
//! provider-agnostic [`client::LlmClient`] trait and a Google Gemini implementation.
//!
//! ## Example
//!
//! ```rust,no_run
//! use briefing_llm_sdk::client::LlmClient;
//! use briefing_llm_sdk::gemini::{GeminiClient, GEMINI_1_5_FLASH};
//! use briefing_llm_sdk::types::CompletionRequest;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = GeminiClient::new("your-gemini-api-key")?;
//!     let request = CompletionRequest::prompt("Olá, Gemini!", 1024).with_model(GEMINI_1_5_FLASH);
//!     let response = client.complete(request).await?;
//!
//!     println!("Response: {}", response.text());
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod gemini;
pub mod models;
pub mod types;
