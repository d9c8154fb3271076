//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (IDs, timestamps, errors, sanitizer)
//! - `scenario` - Scenario text, scenario types and presets
//! - `council` - Personas, the council output and the derived tool outputs
//! - `export` - Decision log and slide outline text
//! - `identity` - Local profile stub and its login form
//! - `preferences` - Theme and other remembered settings
//! - `session` - Per-user session state and tool gating

pub mod council;
pub mod export;
pub mod foundation;
pub mod identity;
pub mod preferences;
pub mod scenario;
pub mod session;
