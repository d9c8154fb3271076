//! AI Provider Adapters.
//!
//! Implementations of the AIProvider port.
//!
//! ## Available Adapters
//!
//! - `GeminiProvider` - Google Gemini models via `generateContent`
//! - `MockAIProvider` - Configurable mock for tests and offline demos

mod gemini_provider;
mod mock_provider;

pub use gemini_provider::{GeminiConfig, GeminiProvider, DEFAULT_GEMINI_BASE_URL};
pub use mock_provider::{MockAIProvider, MockError, MockResponse};
