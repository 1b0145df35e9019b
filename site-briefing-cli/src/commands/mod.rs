//! Command implementations for the site-briefing CLI

pub mod generate;
pub mod inspect;
pub mod template;

pub use generate::*;
pub use inspect::*;
pub use template::*;
