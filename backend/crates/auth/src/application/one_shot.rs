//! One-Shot Flag
//!
//! Persisted "already done" marker for work that must run at most once per
//! client install, such as clearing demo data.

use std::future::Future;
use std::sync::Arc;

use crate::domain::repository::ClientStorage;
use crate::error::AuthResult;

/// Storage key for the demo data cleanup
pub const DEMO_CLEANUP_KEY: &str = "piads_demo_cleanup_done";

const DONE: &str = "true";

pub struct OneShotFlag<S>
where
    S: ClientStorage + Send + Sync + 'static,
{
    storage: Arc<S>,
    key: String,
}

impl<S> OneShotFlag<S>
where
    S: ClientStorage + Send + Sync + 'static,
{
    pub fn new(storage: Arc<S>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    /// Flag for the demo data cleanup
    pub fn demo_cleanup(storage: Arc<S>) -> Self {
        Self::new(storage, DEMO_CLEANUP_KEY)
    }

    pub async fn is_done(&self) -> AuthResult<bool> {
        Ok(self.storage.get(&self.key).await?.as_deref() == Some(DONE))
    }

    /// Run `task` unless the flag is set; set it after the task succeeds.
    ///
    /// Returns `None` when the task had already run. A failed task leaves the
    /// flag unset so the next start tries again.
    pub async fn run_once<F, Fut, T>(&self, task: F) -> AuthResult<Option<T>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = AuthResult<T>>,
    {
        if self.is_done().await? {
            tracing::debug!(key = %self.key, "One-shot task already done");
            return Ok(None);
        }

        let output = task().await?;
        self.storage.set(&self.key, DONE).await?;
        tracing::info!(key = %self.key, "One-shot task completed");

        Ok(Some(output))
    }
}
