//! Mock AI Provider for testing and offline demos.
//!
//! Provides a configurable mock implementation of the AIProvider port,
//! allowing tests to run without calling the hosted model.
//!
//! # Features
//!
//! - Pre-configured responses, consumed in order
//! - Sticky per-operation responses used once the queue is empty
//! - Simulated delays for concurrency testing
//! - Error injection for resilience testing
//! - Call tracking for verification
//!
//! # Example
//!
//! ```ignore
//! let provider = MockAIProvider::new()
//!     .with_response(r#"{"suggestions": ["Add a budget"]}"#)
//!     .with_delay(Duration::from_millis(100));
//!
//! let response = provider.complete(request).await?;
//! ```

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::time::sleep;

use crate::ports::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, ProviderInfo,
    TokenUsage,
};

/// Mock AI provider.
#[derive(Debug, Clone)]
pub struct MockAIProvider {
    /// One-shot responses (consumed in order).
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
    /// Responses keyed by request operation, reused on every call.
    by_operation: Arc<Mutex<HashMap<String, MockResponse>>>,
    info: ProviderInfo,
    /// Simulated latency per request.
    delay: Duration,
    /// Whether requests are kept for inspection.
    record_calls: bool,
    calls: Arc<Mutex<Vec<CompletionRequest>>>,
}

/// A configured mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    Success {
        content: String,
        usage: TokenUsage,
        finish_reason: FinishReason,
    },
    Error(MockError),
}

impl MockResponse {
    fn success(content: impl Into<String>) -> Self {
        MockResponse::Success {
            content: content.into(),
            usage: TokenUsage::new(10, 20),
            finish_reason: FinishReason::Stop,
        }
    }
}

/// Mock error types for testing error handling.
#[derive(Debug, Clone)]
pub enum MockError {
    RateLimited { retry_after_secs: u32 },
    ContentFiltered { reason: String },
    Unavailable { message: String },
    AuthenticationFailed,
    Network { message: String },
    Timeout { timeout_secs: u32 },
}

impl From<MockError> for AIError {
    fn from(err: MockError) -> Self {
        match err {
            MockError::RateLimited { retry_after_secs } => AIError::rate_limited(retry_after_secs),
            MockError::ContentFiltered { reason } => AIError::content_filtered(reason),
            MockError::Unavailable { message } => AIError::unavailable(message),
            MockError::AuthenticationFailed => AIError::AuthenticationFailed,
            MockError::Network { message } => AIError::network(message),
            MockError::Timeout { timeout_secs } => AIError::Timeout { timeout_secs },
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl Default for MockAIProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MockAIProvider {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            by_operation: Arc::new(Mutex::new(HashMap::new())),
            info: ProviderInfo::new("mock", "mock-model-1"),
            delay: Duration::ZERO,
            record_calls: true,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A provider that answers every council operation with a canned reply.
    ///
    /// Backs `ai.provider = "mock"` together with `without_call_recording`.
    pub fn demo() -> Self {
        demo::REPLIES
            .iter()
            .fold(Self::new(), |provider, (operation, reply)| {
                provider.with_operation_response(operation, *reply)
            })
    }

    /// Stops keeping requests; `call_count` stays at zero.
    pub fn without_call_recording(mut self) -> Self {
        self.record_calls = false;
        self
    }

    /// Adds a successful response to the queue.
    pub fn with_response(self, content: impl Into<String>) -> Self {
        self.with_response_full(content, TokenUsage::new(10, 20), FinishReason::Stop)
    }

    pub fn with_response_full(
        self,
        content: impl Into<String>,
        usage: TokenUsage,
        finish_reason: FinishReason,
    ) -> Self {
        lock(&self.responses).push_back(MockResponse::Success {
            content: content.into(),
            usage,
            finish_reason,
        });
        self
    }

    /// Adds an error response to the queue.
    pub fn with_error(self, error: MockError) -> Self {
        lock(&self.responses).push_back(MockResponse::Error(error));
        self
    }

    /// Answers every request for `operation` with `content`.
    pub fn with_operation_response(self, operation: &str, content: impl Into<String>) -> Self {
        lock(&self.by_operation).insert(operation.to_string(), MockResponse::success(content));
        self
    }

    /// Fails every request for `operation` with `error`.
    pub fn with_operation_error(self, operation: &str, error: MockError) -> Self {
        lock(&self.by_operation).insert(operation.to_string(), MockResponse::Error(error));
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_provider_info(mut self, info: ProviderInfo) -> Self {
        self.info = info;
        self
    }

    pub fn call_count(&self) -> usize {
        lock(&self.calls).len()
    }

    pub fn get_calls(&self) -> Vec<CompletionRequest> {
        lock(&self.calls).clone()
    }

    /// Operations of all recorded calls, in call order.
    pub fn called_operations(&self) -> Vec<&'static str> {
        lock(&self.calls)
            .iter()
            .map(|call| call.metadata.operation)
            .collect()
    }

    pub fn clear_calls(&self) {
        lock(&self.calls).clear();
    }

    /// Queue first, then the operation table, then a plain default.
    fn next_response(&self, operation: &str) -> MockResponse {
        if let Some(response) = lock(&self.responses).pop_front() {
            return response;
        }
        lock(&self.by_operation)
            .get(operation)
            .cloned()
            .unwrap_or_else(|| MockResponse::success("Mock response"))
    }
}

#[async_trait]
impl AIProvider for MockAIProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError> {
        let operation = request.metadata.operation;
        let model = request.model.clone().unwrap_or_else(|| self.info.model.clone());
        if self.record_calls {
            lock(&self.calls).push(request);
        }

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        match self.next_response(operation) {
            MockResponse::Success {
                content,
                usage,
                finish_reason,
            } => Ok(CompletionResponse {
                content,
                usage,
                model,
                finish_reason,
            }),
            MockResponse::Error(err) => Err(err.into()),
        }
    }

    fn estimate_tokens(&self, text: &str) -> u32 {
        (text.len() / 4).max(1) as u32
    }

    fn provider_info(&self) -> ProviderInfo {
        self.info.clone()
    }
}

mod demo {
    pub const REPLIES: [(&str, &str); 7] = [
        ("debate", DEBATE),
        ("risks", RISKS),
        ("improve", IMPROVE),
        ("explain", EXPLAIN),
        ("report", REPORT),
        ("coach", COACH),
        ("chat", CHAT),
    ];

    const DEBATE: &str = r#"{
  "scenario_summary": "A demonstration council run against the offline mock provider.",
  "assumptions": ["Figures are illustrative", "No live model was consulted"],
  "personas": [
    {"id": "climate_scientist", "title": "Climate Scientist", "primary_concerns": ["long-term climate risk"], "statement": "Design for the worst plausible climate."},
    {"id": "carbon_analyst", "title": "Carbon Footprint Analyst", "primary_concerns": ["lifecycle emissions"], "statement": "Count embodied carbon, not just operations."},
    {"id": "biodiversity_ecologist", "title": "Biodiversity Ecologist", "primary_concerns": ["habitat"], "statement": "Protect existing ecosystems first."},
    {"id": "community_rep", "title": "Community Representative", "primary_concerns": ["equity"], "statement": "Benefits must reach local residents."},
    {"id": "urban_planner", "title": "Urban Planner", "primary_concerns": ["land use"], "statement": "Integrate with transport and housing."},
    {"id": "csr_lead", "title": "Business Strategy / CSR Lead", "primary_concerns": ["reputation"], "statement": "Report progress transparently."},
    {"id": "finance_officer", "title": "Public Finance / Budget Officer", "primary_concerns": ["value for money"], "statement": "Phase spending to limit risk."}
  ],
  "csr_assessment": {
    "environmental": {"rating": "High", "key_points": ["Lower emissions"]},
    "social": {"rating": "Medium", "key_points": ["Local jobs"]},
    "governance_economic": {"rating": "Medium", "key_points": ["Moderate upfront cost"]}
  },
  "options_and_recommendation": {
    "option_summaries": [
      {"option_name": "Status quo", "description": "Keep current arrangements.", "csr_implications": {"environmental": "No improvement", "social": "No change", "governance_economic": "No new spend"}},
      {"option_name": "Phased transition", "description": "Deliver the proposal in stages.", "csr_implications": {"environmental": "Steady gains", "social": "Gradual benefits", "governance_economic": "Spread cost"}}
    ],
    "recommended_option": {"name": "Phased transition", "reasoning": "Balances impact with budget risk."}
  }
}"#;

    const RISKS: &str = r#"{
  "risks": [
    {"label": "Delivery delay", "description": "Stages may slip.", "horizon": "short-term"},
    {"label": "Cost overrun", "description": "Prices may rise.", "horizon": "medium-term"}
  ],
  "opportunities": [
    {"label": "Green finance", "description": "Eligible for sustainability-linked loans.", "horizon": "long-term"}
  ]
}"#;

    const IMPROVE: &str = r#"{
  "intro": "Three ways to strengthen the recommendation.",
  "suggestions": [
    {"text": "Publish an annual impact report.", "dimensions": ["Governance/Economic"]},
    {"text": "Reserve jobs for local residents.", "dimensions": ["Social"], "trade_offs": "Smaller hiring pool"},
    {"text": "Use low-carbon materials.", "dimensions": ["Environmental"]}
  ]
}"#;

    const EXPLAIN: &str = r#"{
  "explanation": "The council suggests doing this step by step so the benefits arrive without a big financial shock.",
  "role_based_summary": "For leadership: approve stage one and review results before committing further."
}"#;

    const REPORT: &str = "Executive Summary\n\nThe council recommends a phased transition.";

    const COACH: &str = r#"{"suggestions": ["State the budget range.", "Name the affected communities.", "Give a timeline."]}"#;

    const CHAT: &str = "I'm a demonstration assistant running without a live model.";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{MessageRole, RequestMetadata};

    fn test_request(operation: &'static str) -> CompletionRequest {
        CompletionRequest::new(RequestMetadata::new(operation, "trace-123"))
            .with_message(MessageRole::User, "Hello")
    }

    #[tokio::test]
    async fn mock_provider_returns_configured_response() {
        let provider = MockAIProvider::new().with_response("Hello from mock!");

        let response = provider.complete(test_request("chat")).await.unwrap();

        assert_eq!(response.content, "Hello from mock!");
        assert_eq!(response.model, "mock-model-1");
        assert_eq!(response.finish_reason, FinishReason::Stop);
    }

    #[tokio::test]
    async fn mock_provider_echoes_requested_model() {
        let provider = MockAIProvider::new();
        let request = test_request("debate").with_model("gemini-3-pro-preview");

        let response = provider.complete(request).await.unwrap();
        assert_eq!(response.model, "gemini-3-pro-preview");
    }

    #[tokio::test]
    async fn mock_provider_returns_responses_in_order() {
        let provider = MockAIProvider::new()
            .with_response("First")
            .with_response("Second");

        let r1 = provider.complete(test_request("chat")).await.unwrap();
        let r2 = provider.complete(test_request("chat")).await.unwrap();
        let r3 = provider.complete(test_request("chat")).await.unwrap();

        assert_eq!(r1.content, "First");
        assert_eq!(r2.content, "Second");
        assert_eq!(r3.content, "Mock response");
    }

    #[tokio::test]
    async fn operation_responses_are_sticky() {
        let provider = MockAIProvider::new()
            .with_operation_response("report", "Report body")
            .with_operation_error("chat", MockError::AuthenticationFailed);

        for _ in 0..2 {
            let response = provider.complete(test_request("report")).await.unwrap();
            assert_eq!(response.content, "Report body");
        }
        assert_eq!(
            provider.complete(test_request("chat")).await.unwrap_err(),
            AIError::AuthenticationFailed
        );
    }

    #[tokio::test]
    async fn queued_response_wins_over_operation_response() {
        let provider = MockAIProvider::new()
            .with_operation_response("report", "sticky")
            .with_response("queued");

        let first = provider.complete(test_request("report")).await.unwrap();
        let second = provider.complete(test_request("report")).await.unwrap();
        assert_eq!(first.content, "queued");
        assert_eq!(second.content, "sticky");
    }

    #[tokio::test]
    async fn mock_provider_returns_configured_error() {
        let provider =
            MockAIProvider::new().with_error(MockError::RateLimited { retry_after_secs: 30 });

        let err = provider.complete(test_request("chat")).await.unwrap_err();

        assert!(err.is_retryable());
        assert!(matches!(err, AIError::RateLimited { retry_after_secs: 30 }));
    }

    #[tokio::test]
    async fn mock_provider_tracks_calls() {
        let provider = MockAIProvider::new();
        assert_eq!(provider.call_count(), 0);

        provider.complete(test_request("debate")).await.unwrap();
        provider.complete(test_request("risks")).await.unwrap();
        assert_eq!(provider.called_operations(), vec!["debate", "risks"]);

        provider.clear_calls();
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn demo_provider_answers_every_operation() {
        let provider = MockAIProvider::demo();
        for (operation, _) in demo::REPLIES {
            let response = provider.complete(test_request(operation)).await.unwrap();
            assert!(!response.content.is_empty());
        }
    }

    #[tokio::test]
    async fn unrecorded_provider_keeps_no_requests() {
        let provider = MockAIProvider::demo().without_call_recording();

        for _ in 0..3 {
            provider.complete(test_request("debate")).await.unwrap();
        }

        assert_eq!(provider.call_count(), 0);
        assert!(provider.get_calls().is_empty());
    }

    #[test]
    fn demo_debate_parses_as_council_output() {
        let council: crate::domain::council::CouncilOutput =
            serde_json::from_str(demo::REPLIES[0].1).unwrap();
        assert_eq!(council.personas.len(), 7);
    }

    #[tokio::test]
    async fn mock_provider_respects_delay() {
        let provider = MockAIProvider::new().with_delay(Duration::from_millis(50));

        let start = std::time::Instant::now();
        provider.complete(test_request("chat")).await.unwrap();

        assert!(start.elapsed() >= Duration::from_millis(50));
    }

    #[test]
    fn mock_error_converts_to_ai_error() {
        let err: AIError = MockError::Timeout { timeout_secs: 30 }.into();
        assert!(matches!(err, AIError::Timeout { timeout_secs: 30 }));

        let err: AIError = MockError::ContentFiltered { reason: "SAFETY".into() }.into();
        assert!(matches!(err, AIError::ContentFiltered { .. }));
    }
}
