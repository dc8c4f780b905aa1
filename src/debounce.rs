use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::{self, JoinHandle};
use tracing::{debug, warn};

/// Single-flight delayed runner for rename-as-you-type.
///
/// Each [`schedule`](Self::schedule) replaces whatever was pending, and the
/// job only runs once the input has been quiet for the configured period.
/// A job that has already started always runs to completion, and a
/// superseded job never starts after a newer one has.
///
/// Scheduling spawns onto the current Tokio runtime.
pub struct RenameDebouncer {
    quiet: Duration,
    generation: Arc<AtomicU64>,
    apply_lock: Arc<Mutex<()>>,
    pending: Option<JoinHandle<()>>,
}

impl RenameDebouncer {
    pub fn new(quiet: Duration) -> Self {
        RenameDebouncer {
            quiet,
            generation: Arc::new(AtomicU64::new(0)),
            apply_lock: Arc::new(Mutex::new(())),
            pending: None,
        }
    }

    pub fn quiet_period(&self) -> Duration {
        self.quiet
    }

    /// Cancels the pending job, if any, and schedules `job` after the quiet period.
    ///
    /// `job` runs on the blocking pool since it is expected to touch the filesystem.
    pub fn schedule<F>(&mut self, job: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }

        let generation = Arc::clone(&self.generation);
        let apply_lock = Arc::clone(&self.apply_lock);
        let quiet = self.quiet;

        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(quiet).await;

            // held until the job returns, even if this task is aborted meanwhile
            let guard = apply_lock.lock_owned().await;
            if generation.load(Ordering::SeqCst) != ticket {
                debug!(ticket, "debounced job superseded");
                return;
            }

            let applied = task::spawn_blocking(move || {
                let _guard = guard;
                job();
            });
            if let Err(err) = applied.await {
                warn!(ticket, error = %err, "debounced job failed");
            }
        }));
    }

    /// Drops the pending job without running it.
    pub fn cancel(&mut self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }

    /// Whether a scheduled job has not finished yet.
    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|pending| !pending.is_finished())
    }
}

impl Drop for RenameDebouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
