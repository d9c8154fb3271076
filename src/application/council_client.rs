//! CouncilClient - turns council operations into model requests.
//!
//! Every operation builds one templated request, sends it through the
//! `AIProvider` port and parses the reply into a typed value. Provider
//! failures and unparseable replies collapse into two user-facing errors;
//! the detail goes to the log.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use uuid::Uuid;

use super::prompts;
use crate::domain::council::{
    CoachOutput, CouncilOutput, ImprovementOutput, RisksAndOpportunitiesOutput,
    SimpleExplanationOutput,
};
use crate::domain::scenario::Scenario;
use crate::domain::session::SessionError;
use crate::ports::{
    AIError, AIProvider, CompletionRequest, MessageRole, ProviderInfo, RequestMetadata,
};

/// Returned by `generate_report` when the model says nothing.
pub const REPORT_FALLBACK: &str = "Report generation failed.";

/// Returned by `chat` when the model says nothing.
pub const CHAT_FALLBACK: &str = "I'm sorry, I couldn't process that.";

/// Client-level failures.
#[derive(Debug, Error)]
pub enum CouncilError {
    #[error("The council could not be reached. Please try again.")]
    Unreachable(#[source] AIError),

    #[error("Invalid response from expert panel.")]
    InvalidResponse(String),
}

impl From<CouncilError> for SessionError {
    fn from(err: CouncilError) -> Self {
        match err {
            CouncilError::Unreachable(_) => SessionError::CouncilUnreachable,
            CouncilError::InvalidResponse(_) => SessionError::InvalidResponse,
        }
    }
}

/// Models and sampling settings.
#[derive(Debug, Clone)]
pub struct CouncilClientConfig {
    pub debate_model: String,
    pub tool_model: String,
    pub debate_temperature: f32,
}

impl Default for CouncilClientConfig {
    fn default() -> Self {
        Self {
            debate_model: "gemini-3-pro-preview".to_string(),
            tool_model: "gemini-3-flash-preview".to_string(),
            debate_temperature: 0.7,
        }
    }
}

/// Prompted-generation client for the seven council operations.
#[derive(Clone)]
pub struct CouncilClient {
    provider: Arc<dyn AIProvider>,
    config: CouncilClientConfig,
}

impl CouncilClient {
    pub fn new(provider: Arc<dyn AIProvider>, config: CouncilClientConfig) -> Self {
        Self { provider, config }
    }

    pub fn config(&self) -> &CouncilClientConfig {
        &self.config
    }

    /// Name and default model of the provider behind this client.
    pub fn provider_info(&self) -> ProviderInfo {
        self.provider.provider_info()
    }

    /// Convenes the seven personas on a scenario.
    pub async fn run_debate(&self, scenario: &Scenario) -> Result<CouncilOutput, CouncilError> {
        let request = self
            .request("debate", &self.config.debate_model, prompts::debate(scenario))
            .with_system_prompt(prompts::COUNCIL_SYSTEM_PROMPT)
            .with_json_response()
            .with_temperature(self.config.debate_temperature);

        let content = self.send(request).await?;
        parse_json("debate", &content)
    }

    pub async fn extract_risks(
        &self,
        council: &CouncilOutput,
    ) -> Result<RisksAndOpportunitiesOutput, CouncilError> {
        let request = self
            .tool_request("risks", prompts::risks(&council_json(council)?))
            .with_system_prompt(prompts::RISKS_SYSTEM_PROMPT)
            .with_json_response();

        let content = self.send(request).await?;
        parse_json("risks", &content)
    }

    pub async fn propose_improvements(
        &self,
        council: &CouncilOutput,
    ) -> Result<ImprovementOutput, CouncilError> {
        let request = self
            .tool_request("improve", prompts::improve(&council_json(council)?))
            .with_system_prompt(prompts::IMPROVE_SYSTEM_PROMPT)
            .with_json_response();

        let content = self.send(request).await?;
        parse_json("improve", &content)
    }

    pub async fn simplify_explanation(
        &self,
        council: &CouncilOutput,
    ) -> Result<SimpleExplanationOutput, CouncilError> {
        let request = self
            .tool_request("explain", prompts::explain(&council_json(council)?))
            .with_system_prompt(prompts::EXPLAIN_SYSTEM_PROMPT)
            .with_json_response();

        let content = self.send(request).await?;
        parse_json("explain", &content)
    }

    /// One-page plain-text report.
    pub async fn generate_report(&self, council: &CouncilOutput) -> Result<String, CouncilError> {
        let request = self
            .tool_request("report", prompts::report(&council_json(council)?))
            .with_system_prompt(prompts::REPORT_SYSTEM_PROMPT);

        let content = self.send(request).await?;
        Ok(or_fallback(content, REPORT_FALLBACK))
    }

    /// Up to three hints on what the scenario is missing.
    pub async fn coach_scenario(&self, scenario: &Scenario) -> Result<Vec<String>, CouncilError> {
        let request = self
            .tool_request("coach", prompts::coach(scenario.text()))
            .with_system_prompt(prompts::COACH_SYSTEM_PROMPT)
            .with_json_response();

        let content = self.send(request).await?;
        let output: CoachOutput = parse_json("coach", &content)?;
        Ok(output.into_suggestions())
    }

    /// Free-form assistant reply, optionally grounded in a finished debate.
    pub async fn chat(
        &self,
        query: &str,
        context: Option<&CouncilOutput>,
    ) -> Result<String, CouncilError> {
        let context_json = match context {
            Some(council) => council_json(council)?,
            None => to_json(&"None")?,
        };
        let request = self
            .tool_request("chat", prompts::chat(query, &context_json))
            .with_system_prompt(prompts::CHAT_SYSTEM_PROMPT);

        let content = self.send(request).await?;
        Ok(or_fallback(content, CHAT_FALLBACK))
    }

    fn tool_request(&self, operation: &'static str, prompt: String) -> CompletionRequest {
        self.request(operation, &self.config.tool_model, prompt)
    }

    fn request(&self, operation: &'static str, model: &str, prompt: String) -> CompletionRequest {
        CompletionRequest::new(RequestMetadata::new(operation, Uuid::new_v4().to_string()))
            .with_model(model)
            .with_message(MessageRole::User, prompt)
    }

    async fn send(&self, request: CompletionRequest) -> Result<String, CouncilError> {
        let operation = request.metadata.operation;
        let trace_id = request.metadata.trace_id.clone();
        let model = request.model.clone().unwrap_or_default();
        let prompt_len: usize = request.messages.iter().map(|m| m.content.len()).sum();
        let started = Instant::now();

        match self.provider.complete(request).await {
            Ok(response) => {
                tracing::info!(
                    operation,
                    %trace_id,
                    model = %response.model,
                    prompt_len,
                    reply_len = response.content.len(),
                    total_tokens = response.usage.total_tokens,
                    latency_ms = started.elapsed().as_millis() as u64,
                    "Council operation completed"
                );
                Ok(response.content)
            }
            Err(err) => {
                tracing::warn!(
                    operation,
                    %trace_id,
                    %model,
                    error = %err,
                    latency_ms = started.elapsed().as_millis() as u64,
                    "Council operation failed"
                );
                Err(CouncilError::Unreachable(err))
            }
        }
    }
}

fn council_json(council: &CouncilOutput) -> Result<String, CouncilError> {
    to_json(council)
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, CouncilError> {
    serde_json::to_string(value).map_err(|e| CouncilError::InvalidResponse(e.to_string()))
}

fn or_fallback(content: String, fallback: &str) -> String {
    if content.is_empty() {
        fallback.to_string()
    } else {
        content
    }
}

/// Parses a JSON reply. Empty replies read as `{}`; a surrounding
/// Markdown code fence is removed first.
fn parse_json<T: DeserializeOwned>(operation: &'static str, content: &str) -> Result<T, CouncilError> {
    let body = strip_code_fence(content);
    let body = if body.is_empty() { "{}" } else { body };

    serde_json::from_str(body).map_err(|e| {
        tracing::warn!(operation, error = %e, reply_len = content.len(), "Unparseable model reply");
        CouncilError::InvalidResponse(e.to_string())
    })
}

fn strip_code_fence(content: &str) -> &str {
    let trimmed = content.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the info string (e.g. "json") on the opening line.
    let rest = rest.split_once('\n').map_or("", |(_, body)| body);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}
