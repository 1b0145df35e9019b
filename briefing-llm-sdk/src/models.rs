//! Model constants for supported providers
//!
//! Model IDs are sourced from official provider documentation.

/// Google Gemini model constants
pub mod gemini {
    /// Gemini 1.5 Flash - fast general-purpose model
    pub const GEMINI_1_5_FLASH_ID: &str = "gemini-1.5-flash";
    pub const GEMINI_1_5_FLASH_NAME: &str = "Gemini 1.5 Flash";

    /// Gemini 2.5 Flash - price-performance model with thinking
    pub const GEMINI_2_5_FLASH_ID: &str = "gemini-2.5-flash";
    pub const GEMINI_2_5_FLASH_NAME: &str = "Gemini 2.5 Flash";

    /// Gemini 2.5 Pro - most capable 2.5 model
    pub const GEMINI_2_5_PRO_ID: &str = "gemini-2.5-pro";
    pub const GEMINI_2_5_PRO_NAME: &str = "Gemini 2.5 Pro";

    pub const GEMINI_1_5_FLASH: &str = GEMINI_1_5_FLASH_ID;
    pub const GEMINI_2_5_FLASH: &str = GEMINI_2_5_FLASH_ID;
    pub const GEMINI_2_5_PRO: &str = GEMINI_2_5_PRO_ID;

    /// Model used when nothing else is configured
    pub const DEFAULT_MODEL: &str = GEMINI_1_5_FLASH_ID;
}
