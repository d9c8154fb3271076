//! Storage Adapters
//!
//! ## Available Adapters
//!
//! - **FilePreferenceStore** - Preferences in a JSON file on disk
//! - **InMemoryPreferenceStore** - Preferences in memory (testing)
//! - **InMemorySessionRepository** - Live council sessions
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FilePreferenceStore, InMemorySessionRepository};
//!
//! let preferences = FilePreferenceStore::open("./data/preferences.json").await?;
//! let sessions = InMemorySessionRepository::new();
//! ```

mod file_preference_store;
mod in_memory_preference_store;
mod in_memory_session_repository;

pub use file_preference_store::FilePreferenceStore;
pub use in_memory_preference_store::InMemoryPreferenceStore;
pub use in_memory_session_repository::InMemorySessionRepository;
