//! Backend trait and configuration.
//!
//! The [`Backend`] trait defines the lifecycle for interacting with an
//! execution backend:
//!
//! ```text
//!   capabilities() ──→ validate() ──→ submit() ──→ status() ──→ result()
//!    (sync, &ref)       (async)       (async)      (async)      (async)
//! ```
//!
//! ## Design principles
//!
//! - **Async-native**: all I/O methods are async.
//! - **Thread-safe**: `Send + Sync` bound enables shared ownership.
//! - **Infallible introspection**: `capabilities()` is synchronous and
//!   infallible; a backend that cannot report capabilities without I/O
//!   is not correctly initialized.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use qward_ir::Circuit;

use crate::capability::Capabilities;
use crate::credentials::Credentials;
use crate::error::{HalError, HalResult};
use crate::job::{JobId, JobStatus};
use crate::result::ExecutionResult;

/// Default poll interval for the provided `wait` implementation.
const WAIT_POLL_INTERVAL: Duration = Duration::from_millis(500);
/// Default overall timeout for the provided `wait` implementation.
const WAIT_DEFAULT_TIMEOUT: Duration = Duration::from_secs(300);

/// Configuration for a backend instance.
#[derive(Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Name of the backend.
    pub name: String,
    /// API endpoint URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    /// Credentials for authenticated backends.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credentials: Option<Credentials>,
    /// Additional configuration.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl BackendConfig {
    /// Create a new backend configuration.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            endpoint: None,
            credentials: None,
            extra: serde_json::Map::new(),
        }
    }

    /// Set the endpoint URL.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Set the credentials.
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Add extra configuration.
    pub fn with_extra(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}

impl fmt::Debug for BackendConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackendConfig")
            .field("name", &self.name)
            .field("endpoint", &self.endpoint)
            .field("credentials", &self.credentials)
            .field("extra", &self.extra)
            .finish()
    }
}

/// Trait for execution backends.
///
/// This trait defines the interface every backend MUST implement. It
/// covers the full job lifecycle: introspection, validation,
/// submission, status polling, result retrieval, and cancellation.
///
/// # Contract
///
/// - `capabilities()` MUST be synchronous and infallible. Capabilities
///   MUST be cached at construction time.
/// - `availability()` SHOULD perform a lightweight liveness check.
/// - `validate()` MUST check the circuit against backend constraints
///   before submission.
/// - `submit()` MUST return a `JobId` with initial status `Queued` and
///   MUST reject `shots == 0`.
/// - `result()` MUST only be called when status is `Completed`.
/// - `wait()` has a provided implementation (500ms poll, 5-minute
///   timeout); `wait_timeout()` takes an explicit deadline.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Get the name of this backend.
    fn name(&self) -> &str;

    /// Get the capabilities of this backend.
    fn capabilities(&self) -> &Capabilities;

    /// Check backend availability with queue depth information.
    async fn availability(&self) -> HalResult<BackendAvailability>;

    /// Validate a circuit against backend constraints.
    ///
    /// SHOULD check at minimum:
    /// - Qubit count vs `capabilities().num_qubits`
    /// - Gate support vs `capabilities().gate_set`
    /// - Conditioned gates vs `capabilities().supports_conditional`
    async fn validate(&self, circuit: &Circuit) -> HalResult<ValidationResult>;

    /// Submit a circuit for execution.
    ///
    /// Returns a job ID usable for status checks and result retrieval.
    /// The job MUST start in `Queued` status.
    async fn submit(&self, circuit: &Circuit, shots: u32) -> HalResult<JobId>;

    /// Get the status of a job.
    async fn status(&self, job_id: &JobId) -> HalResult<JobStatus>;

    /// Get the result of a completed job.
    ///
    /// MUST only be called when `status()` returns `Completed`.
    async fn result(&self, job_id: &JobId) -> HalResult<ExecutionResult>;

    /// Cancel a running job.
    async fn cancel(&self, job_id: &JobId) -> HalResult<()>;

    /// Wait for a job to complete and return its result.
    ///
    /// Provided implementation polls every 500ms for up to 5 minutes.
    async fn wait(&self, job_id: &JobId) -> HalResult<ExecutionResult> {
        self.wait_timeout(job_id, WAIT_DEFAULT_TIMEOUT).await
    }

    /// Wait for a job with an explicit timeout.
    ///
    /// On expiry the job is left running; callers deciding to abandon
    /// it should follow up with [`Backend::cancel`].
    async fn wait_timeout(&self, job_id: &JobId, timeout: Duration) -> HalResult<ExecutionResult> {
        use tokio::time::sleep;

        let deadline = tokio::time::Instant::now() + timeout;
        loop {
            let status = self.status(job_id).await?;
            match status {
                JobStatus::Completed => return self.result(job_id).await,
                JobStatus::Failed(msg) => return Err(HalError::JobFailed(msg)),
                JobStatus::Cancelled => return Err(HalError::JobCancelled),
                JobStatus::Queued | JobStatus::Running => {
                    if tokio::time::Instant::now() >= deadline {
                        return Err(HalError::Timeout(job_id.0.clone()));
                    }
                    tracing::trace!("Job {} still pending, polling again", job_id);
                    sleep(WAIT_POLL_INTERVAL).await;
                }
            }
        }
    }
}

/// Backend availability information.
///
/// Richer than a simple boolean: queue depth and estimated wait enable
/// callers to make informed dispatch decisions.
#[derive(Debug, Clone)]
pub struct BackendAvailability {
    /// Whether the backend is currently accepting jobs.
    pub is_available: bool,
    /// Number of jobs currently in queue (if known).
    pub queue_depth: Option<u32>,
    /// Estimated wait time for a new job (if known).
    pub estimated_wait: Option<Duration>,
    /// Human-readable status message.
    pub status_message: Option<String>,
}

impl BackendAvailability {
    /// Create availability for a backend that is always available.
    ///
    /// Typical for simulators: zero queue, zero wait.
    pub fn always_available() -> Self {
        Self {
            is_available: true,
            queue_depth: Some(0),
            estimated_wait: Some(Duration::ZERO),
            status_message: None,
        }
    }

    /// Create availability for an offline backend.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            is_available: false,
            queue_depth: None,
            estimated_wait: None,
            status_message: Some(reason.into()),
        }
    }
}

/// Result of circuit validation against backend constraints.
#[derive(Debug, Clone)]
pub enum ValidationResult {
    /// Circuit is valid and can be submitted directly.
    Valid,
    /// Circuit is invalid for this backend.
    Invalid {
        /// Reasons the circuit is invalid.
        reasons: Vec<String>,
    },
}

impl ValidationResult {
    /// Check if the circuit is valid.
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }
}

/// Trait for creating backends from configuration.
pub trait BackendFactory: Backend + Sized {
    /// Create a backend from configuration.
    fn from_config(config: BackendConfig) -> HalResult<Self>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_config() {
        let config = BackendConfig::new("test")
            .with_endpoint("https://api.example.com")
            .with_credentials(Credentials::new("cloud", "secret-token"))
            .with_extra("timeout", serde_json::json!(30));

        assert_eq!(config.name, "test");
        assert_eq!(config.endpoint, Some("https://api.example.com".to_string()));
        assert!(config.extra.contains_key("timeout"));
        // Token never leaks through Debug.
        let debug = format!("{config:?}");
        assert!(!debug.contains("secret-token"));
    }

    #[test]
    fn test_backend_availability_always_available() {
        let avail = BackendAvailability::always_available();
        assert!(avail.is_available);
        assert_eq!(avail.queue_depth, Some(0));
        assert_eq!(avail.estimated_wait, Some(Duration::ZERO));
        assert!(avail.status_message.is_none());
    }

    #[test]
    fn test_backend_availability_unavailable() {
        let avail = BackendAvailability::unavailable("maintenance");
        assert!(!avail.is_available);
        assert_eq!(avail.status_message, Some("maintenance".to_string()));
    }

    #[test]
    fn test_validation_result_is_valid() {
        assert!(ValidationResult::Valid.is_valid());
        assert!(!ValidationResult::Invalid { reasons: vec![] }.is_valid());
    }

    use std::collections::VecDeque;
    use std::sync::Mutex;

    use crate::result::Counts;

    /// Backend that replays a scripted status sequence, then reports
    /// `Running` forever.
    struct ScriptedBackend {
        caps: Capabilities,
        statuses: Mutex<VecDeque<JobStatus>>,
    }

    impl ScriptedBackend {
        fn new(statuses: impl IntoIterator<Item = JobStatus>) -> Self {
            Self {
                caps: Capabilities::simulator(2),
                statuses: Mutex::new(statuses.into_iter().collect()),
            }
        }
    }

    #[async_trait]
    impl Backend for ScriptedBackend {
        fn name(&self) -> &str {
            "scripted"
        }

        fn capabilities(&self) -> &Capabilities {
            &self.caps
        }

        async fn availability(&self) -> HalResult<BackendAvailability> {
            Ok(BackendAvailability::always_available())
        }

        async fn validate(&self, _circuit: &Circuit) -> HalResult<ValidationResult> {
            Ok(ValidationResult::Valid)
        }

        async fn submit(&self, _circuit: &Circuit, _shots: u32) -> HalResult<JobId> {
            Ok(JobId::new("job-0"))
        }

        async fn status(&self, _job_id: &JobId) -> HalResult<JobStatus> {
            let mut statuses = self.statuses.lock().unwrap();
            Ok(statuses.pop_front().unwrap_or(JobStatus::Running))
        }

        async fn result(&self, job_id: &JobId) -> HalResult<ExecutionResult> {
            let mut counts = Counts::new();
            counts.insert("0", 1);
            Ok(ExecutionResult::new(counts, 1).with_job_id(job_id.clone()))
        }

        async fn cancel(&self, _job_id: &JobId) -> HalResult<()> {
            Ok(())
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_wait_polls_until_completed() {
        let backend = ScriptedBackend::new([
            JobStatus::Queued,
            JobStatus::Running,
            JobStatus::Completed,
        ]);
        let result = backend.wait(&JobId::new("job-0")).await.unwrap();
        assert_eq!(result.shots, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_wait_timeout_expires_on_stuck_job() {
        let backend = ScriptedBackend::new([]);
        let err = backend
            .wait_timeout(&JobId::new("job-0"), Duration::from_secs(2))
            .await
            .unwrap_err();
        assert!(matches!(err, HalError::Timeout(_)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_wait_surfaces_job_failure() {
        let backend = ScriptedBackend::new([JobStatus::Failed("decoherence".into())]);
        let err = backend.wait(&JobId::new("job-0")).await.unwrap_err();
        assert!(matches!(err, HalError::JobFailed(_)));
    }
}
