//! HTTP 提供方实现
//!
//! - `GeminiClient`: Google Gemini `generateContent` 接口

pub mod gemini;

pub use gemini::{GeminiClient, DEFAULT_GEMINI_BASE_URL};
