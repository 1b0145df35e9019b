//! Google Gemini API client and types
//!
//! Only the `generateContent` text endpoint is covered.

pub mod client;
pub mod types;

pub use client::GeminiClient;
pub use types::*;

// Re-export model constants
pub use crate::models::gemini::*;
