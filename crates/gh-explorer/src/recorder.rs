//! Favorite recorder capability
//!
//! Recording a favorite is modeled as a trait so the simulated recorder
//! can later be swapped for a real backend call without touching the
//! favorites middleware.

use async_trait::async_trait;
use gh_client::Repository;
use std::time::Duration;

/// Fixed delay of the simulated backend call
pub const SIMULATED_DELAY: Duration = Duration::from_millis(500);

/// Records a repository as a favorite
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow sharing across
/// async tasks and threads.
#[async_trait]
pub trait FavoriteRecorder: Send + Sync {
    /// Record a repository as a favorite, returning the stored record
    async fn record(&self, repo: Repository) -> anyhow::Result<Repository>;
}

/// Stand-in for a future favorites backend
///
/// Waits a fixed delay, then returns the input unchanged. Nothing is
/// stored anywhere and the call never fails; its only observable
/// contracts are the delay and the guaranteed success.
pub struct SimulatedRecorder {
    delay: Duration,
}

impl SimulatedRecorder {
    pub fn new() -> Self {
        Self {
            delay: SIMULATED_DELAY,
        }
    }

    /// Create a recorder with a custom delay
    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedRecorder {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FavoriteRecorder for SimulatedRecorder {
    async fn record(&self, repo: Repository) -> anyhow::Result<Repository> {
        tokio::time::sleep(self.delay).await;
        log::info!("Faking backend call to favorite {}", repo.name);
        Ok(repo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    fn repo() -> Repository {
        Repository {
            id: 207645083,
            name: "query".to_string(),
            description: Some("Powerful asynchronous state management".to_string()),
            stargazers_count: 41000,
            html_url: "https://github.com/TanStack/query".to_string(),
        }
    }

    #[tokio::test]
    async fn test_record_returns_input_unchanged() {
        let recorder = SimulatedRecorder::with_delay(Duration::ZERO);
        let input = repo();
        let output = recorder.record(input.clone()).await.unwrap();
        assert_eq!(output, input);
    }

    #[tokio::test]
    async fn test_record_waits_for_the_configured_delay() {
        let recorder = SimulatedRecorder::with_delay(Duration::from_millis(20));
        let started = Instant::now();
        recorder.record(repo()).await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(20));
    }

    #[test]
    fn test_default_delay() {
        let recorder = SimulatedRecorder::new();
        assert_eq!(recorder.delay, SIMULATED_DELAY);
    }
}
