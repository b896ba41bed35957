pub mod builder;
pub mod transport;

use crate::{
    config::RunwareConfig,
    error::{Result, RunwareError},
    models::{GenerationRecord, ResponseEnvelope, TaskDescriptor, TaskOptions, WireTask},
};
use std::collections::HashSet;
use std::sync::Arc;

pub use builder::{configure, parse_options, OptionMap};
pub use transport::{HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};

/// Client for the image inference endpoint.
///
/// Holds the credential and the most recently configured batch. Each call to
/// [`RunwareClient::generate`] performs exactly one POST with no retries.
#[derive(Clone)]
pub struct RunwareClient {
    api_key: String,
    base_url: String,
    transport: Arc<dyn HttpTransport>,
    tasks: Vec<TaskDescriptor>,
}

impl RunwareClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: crate::config::DEFAULT_BASE_URL.to_string(),
            transport: Arc::new(ReqwestTransport::new()),
            tasks: Vec::new(),
        }
    }

    pub fn from_config(config: RunwareConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .ok_or_else(|| RunwareError::Config("Runware API key is required".into()))?;

        Ok(Self::new(api_key).with_base_url(config.base_url))
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = transport;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Replace the pending batch with tasks built from loosely typed option maps.
    pub fn configure(&mut self, options: &[OptionMap]) -> Result<&mut Self> {
        self.tasks = configure(options)?;
        log::debug!("Configured {} task(s)", self.tasks.len());
        Ok(self)
    }

    /// Replace the pending batch with tasks built from typed options.
    pub fn configure_tasks(&mut self, options: Vec<TaskOptions>) -> Result<&mut Self> {
        self.tasks = options
            .into_iter()
            .map(TaskOptions::build)
            .collect::<Result<Vec<_>>>()?;
        log::debug!("Configured {} task(s)", self.tasks.len());
        Ok(self)
    }

    pub fn tasks(&self) -> &[TaskDescriptor] {
        &self.tasks
    }

    /// Submit the configured batch.
    pub async fn generate(&self) -> Result<Vec<GenerationRecord>> {
        self.submit(&self.tasks).await
    }

    /// Submit `tasks` as one batch and return the generated records in the
    /// order the provider sent them.
    pub async fn submit(&self, tasks: &[TaskDescriptor]) -> Result<Vec<GenerationRecord>> {
        let request = self.build_request(tasks)?;

        log::info!(
            "Submitting {} image inference task(s) to {}",
            tasks.len(),
            self.base_url
        );

        let response = self.transport.send(request).await?;
        normalize_response(response, tasks)
    }

    pub fn build_request(&self, tasks: &[TaskDescriptor]) -> Result<HttpRequest> {
        if tasks.is_empty() {
            return Err(RunwareError::Config("no tasks configured".into()));
        }

        let payload: Vec<WireTask<'_>> = tasks.iter().map(TaskDescriptor::to_wire).collect();
        let body = serde_json::to_vec(&payload)
            .map_err(|e| RunwareError::Serialization(e.to_string()))?;

        log::debug!(
            "Image inference request payload: {}",
            String::from_utf8_lossy(&body)
        );

        Ok(HttpRequest {
            url: self.base_url.clone(),
            headers: vec![
                ("Content-Type".to_string(), "application/json".to_string()),
                ("Authorization".to_string(), format!("Bearer {}", self.api_key)),
            ],
            body,
        })
    }
}

/// Decode the provider envelope. A status of 400 or above fails the whole
/// batch with the provider's own diagnostics; successes in that envelope are
/// dropped.
pub fn normalize_response(
    response: HttpResponse,
    tasks: &[TaskDescriptor],
) -> Result<Vec<GenerationRecord>> {
    let envelope: ResponseEnvelope = serde_json::from_slice(&response.body).map_err(|e| {
        RunwareError::Transport(format!(
            "invalid response body (status {}): {}",
            response.status, e
        ))
    })?;

    if response.status >= 400 {
        log::error!("Request failed with status {}", response.status);
        if !envelope.data.is_empty() {
            log::warn!(
                "Discarding {} generated record(s) from failed batch",
                envelope.data.len()
            );
        }
        return Err(RunwareError::Provider {
            status: response.status,
            errors: envelope.errors,
        });
    }

    for error in &envelope.errors {
        log::warn!(
            "Provider reported {} on {}: {}",
            error.code,
            error.parameter.as_deref().unwrap_or("<no parameter>"),
            error.message
        );
    }

    let submitted: HashSet<&str> = tasks.iter().map(TaskDescriptor::task_uuid).collect();
    for record in &envelope.data {
        if !submitted.contains(record.task_uuid.as_str()) {
            log::warn!("Received record for unknown task {}", record.task_uuid);
        }
    }

    Ok(envelope.data)
}
