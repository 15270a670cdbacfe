//! Debounced scheduling with latest-request-wins semantics
//!
//! Rapid submissions within the delay window collapse into one: each
//! submit aborts the previously scheduled job and arms a fresh timer.
//! Used by the interactive mode so a burst of input lines produces a
//! single conversion and a single utterance.
use std::future::Future;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use crate::config::constants::DEFAULT_DEBOUNCE_MS;

pub struct Debouncer {
    delay: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: Mutex::new(None),
        }
    }

    /// Build a debouncer from DEBOUNCE_MS, defaulting to 500 ms.
    pub fn from_env() -> Self {
        let millis = std::env::var("DEBOUNCE_MS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(DEFAULT_DEBOUNCE_MS);

        Self::new(Duration::from_millis(millis))
    }

    /// Schedule a job after the delay window, aborting any job that is
    /// still waiting for its window to elapse.
    pub async fn submit<F>(&self, job: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let mut pending = self.pending.lock().await;

        if let Some(handle) = pending.take() {
            handle.abort();
        }

        let delay = self.delay;
        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            job.await;
        }));
    }

    /// Wait for the currently scheduled job, if any, to finish.
    pub async fn flush(&self) {
        let handle = self.pending.lock().await.take();
        if let Some(handle) = handle {
            let _ = handle.await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn counting_job(counter: Arc<AtomicUsize>) -> impl Future<Output = ()> + Send + 'static {
        async move {
            counter.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[tokio::test]
    async fn test_single_submission_runs() {
        let debouncer = Debouncer::new(Duration::from_millis(10));
        let counter = Arc::new(AtomicUsize::new(0));

        debouncer.submit(counting_job(counter.clone())).await;
        debouncer.flush().await;

        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_rapid_submissions_coalesce() {
        let debouncer = Debouncer::new(Duration::from_millis(50));
        let counter = Arc::new(AtomicUsize::new(0));

        for _ in 0..5 {
            debouncer.submit(counting_job(counter.clone())).await;
        }
        debouncer.flush().await;

        // Only the last submission survives the window
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_spaced_submissions_all_run() {
        let debouncer = Debouncer::new(Duration::from_millis(5));
        let counter = Arc::new(AtomicUsize::new(0));

        for _ in 0..3 {
            debouncer.submit(counting_job(counter.clone())).await;
            debouncer.flush().await;
        }

        assert_eq!(counter.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_flush_without_submission_is_noop() {
        let debouncer = Debouncer::new(Duration::from_millis(5));
        debouncer.flush().await;
    }

    #[test]
    fn test_from_env_default() {
        std::env::remove_var("DEBOUNCE_MS");
        let debouncer = Debouncer::from_env();
        assert_eq!(debouncer.delay, Duration::from_millis(DEFAULT_DEBOUNCE_MS));
    }

    #[test]
    fn test_from_env_custom() {
        std::env::set_var("DEBOUNCE_MS", "120");
        let debouncer = Debouncer::from_env();
        assert_eq!(debouncer.delay, Duration::from_millis(120));
        std::env::remove_var("DEBOUNCE_MS");
    }

    #[test]
    fn test_from_env_invalid_falls_back_to_default() {
        std::env::set_var("DEBOUNCE_MS", "soon");
        let debouncer = Debouncer::from_env();
        assert_eq!(debouncer.delay, Duration::from_millis(DEFAULT_DEBOUNCE_MS));
        std::env::remove_var("DEBOUNCE_MS");
    }
}
