//! Sustainability Council - multi-persona sustainability decision support.
//!
//! A scenario is put to a council of seven stakeholder personas through a
//! hosted generative model. The reply is a structured CSR assessment that
//! follow-up tools turn into risks, improvements, plain-language summaries,
//! reports and exports.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
