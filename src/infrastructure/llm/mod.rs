//! Generation client implementations

pub mod gemini;

pub use gemini::{GeminiProvider, DEFAULT_GEMINI_MODEL};
