//! Analysis provider client.
//!
//! One blocking HTTP call per simulation run. Transport failures retry
//! with linear backoff and then surface `ProviderUnavailable`; a response
//! that arrives but fails schema validation is `MalformedAnalysisResponse`
//! and is not retried (the provider would return the same shape again).
//! There is no deduplication or coalescing: issuing the same input twice
//! performs the external call twice.

use crate::contract::{validate_result, AnalysisRequest, SimulationResult};
use crate::error::SimError;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// External collaborator turning a request into a full simulation result.
pub trait AnalysisProvider {
    fn analyze(&self, request: &AnalysisRequest) -> Result<SimulationResult, SimError>;
}

/// HTTP provider posting the request as JSON to a fixed endpoint.
pub struct HttpAnalysisProvider {
    endpoint: String,
    client: reqwest::blocking::Client,
    max_retries: u32,
    backoff: Duration,
}

impl HttpAnalysisProvider {
    pub fn new(endpoint: impl Into<String>) -> Self {
        HttpAnalysisProvider {
            endpoint: endpoint.into(),
            client: reqwest::blocking::Client::new(),
            max_retries: 3,
            backoff: Duration::from_millis(500),
        }
    }

    pub fn with_retries(mut self, max_retries: u32, backoff: Duration) -> Self {
        self.max_retries = max_retries;
        self.backoff = backoff;
        self
    }

    fn call_once(&self, request: &AnalysisRequest) -> Result<serde_json::Value, SimError> {
        let resp = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .map_err(|e| SimError::ProviderUnavailable(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(SimError::ProviderUnavailable(format!(
                "provider returned HTTP {}",
                resp.status()
            )));
        }

        resp.json()
            .map_err(|e| SimError::ProviderUnavailable(format!("unreadable body: {}", e)))
    }
}

impl AnalysisProvider for HttpAnalysisProvider {
    fn analyze(&self, request: &AnalysisRequest) -> Result<SimulationResult, SimError> {
        let mut attempt = 0;
        let raw = loop {
            match self.call_once(request) {
                Ok(raw) => break raw,
                Err(e) => {
                    attempt += 1;
                    if attempt > self.max_retries {
                        return Err(e);
                    }
                    // Linear backoff between attempts.
                    thread::sleep(self.backoff * attempt);
                }
            }
        };
        validate_result(raw)
    }
}

/// Cancellation handle for an in-flight run. Cloneable; cancelling any
/// clone cancels the run.
#[derive(Debug, Clone, Default)]
pub struct RunToken {
    cancelled: Arc<AtomicBool>,
}

impl RunToken {
    pub fn new() -> Self {
        RunToken::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Run one simulation: call the provider and hand back the validated
/// result, unless the caller abandoned the run while the call was in
/// flight. A late-arriving response after cancellation is discarded (the
/// caller never sees it, so it cannot be inserted into the store), never
/// silently accepted.
pub fn run_simulation(
    provider: &dyn AnalysisProvider,
    request: &AnalysisRequest,
    token: &RunToken,
) -> Result<Option<SimulationResult>, SimError> {
    let result = provider.analyze(request)?;
    if token.is_cancelled() {
        return Ok(None);
    }
    Ok(Some(result))
}
