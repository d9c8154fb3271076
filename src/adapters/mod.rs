//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - Gemini and mock model providers
//! - `storage` - Session registry and preference files
//! - `http` - axum REST surface

pub mod ai;
pub mod http;
pub mod storage;
