//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `AIProvider` - Hosted language model completions
//! - `SessionRepository` - Live council sessions
//! - `PreferenceStore` - Remembered settings (theme, profile)

mod ai_provider;
mod preference_store;
mod session_repository;

pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, Message,
    MessageRole, ProviderInfo, RequestMetadata, ResponseFormat, TokenUsage,
};
pub use preference_store::{PreferenceStore, PreferenceStoreError};
pub use session_repository::{SessionRepository, SharedSession};
