//! Owned, cancellable timers.
//!
//! A [`TaskScope`] spawns tokio tasks for one-shot delays and recurring
//! intervals and keeps their abort handles. Cancelling the scope (or
//! dropping it) aborts everything still pending, so no timer outlives the
//! component that started it.

use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::AbortHandle;
use tokio::time::{Instant, MissedTickBehavior};

pub struct TaskScope {
    name: &'static str,
    tasks: Mutex<Vec<AbortHandle>>,
}

impl TaskScope {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            tasks: Mutex::new(Vec::new()),
        }
    }

    /// Run `f` once after `delay`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn after<F>(&self, delay: Duration, f: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            f();
        });
        self.track(handle.abort_handle());
    }

    /// Run `f` every `period`, first after one full period.
    pub fn every<F>(&self, period: Duration, mut f: F)
    where
        F: FnMut() + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                f();
            }
        });
        self.track(handle.abort_handle());
    }

    fn track(&self, handle: AbortHandle) {
        let mut tasks = self.tasks.lock();
        tasks.retain(|t| !t.is_finished());
        tasks.push(handle);
    }

    /// Abort every pending task. The scope stays usable.
    pub fn cancel_all(&self) {
        let tasks = std::mem::take(&mut *self.tasks.lock());
        let pending = tasks.iter().filter(|t| !t.is_finished()).count();
        for task in tasks {
            task.abort();
        }
        if pending > 0 {
            tracing::debug!("Scope '{}' cancelled {} pending task(s)", self.name, pending);
        }
    }

    /// Number of tasks that have not finished yet.
    pub fn pending(&self) -> usize {
        self.tasks.lock().iter().filter(|t| !t.is_finished()).count()
    }
}

impl Drop for TaskScope {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

impl std::fmt::Debug for TaskScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskScope")
            .field("name", &self.name)
            .field("pending", &self.pending())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[tokio::test(start_paused = true)]
    async fn test_after_fires_once() {
        let scope = TaskScope::new("test");
        let hits = Arc::new(AtomicUsize::new(0));

        let h = hits.clone();
        scope.after(Duration::from_millis(250), move || {
            h.fetch_add(1, Ordering::SeqCst);
        });

        tokio::time::sleep(Duration::from_millis(249)).await;
        assert_eq!(hits.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(hits.load(Ordering::SeqCst), 1);

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert_eq!(scope.pending(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_every_repeats_until_cancelled() {
        let scope = TaskScope::new("test");
        let hits = Arc::new(AtomicUsize::new(0));

        let h = hits.clone();
        scope.every(Duration::from_secs(3), move || {
            h.fetch_add(1, Ordering::SeqCst);
        });

        tokio::time::sleep(Duration::from_millis(2_900)).await;
        assert_eq!(hits.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_millis(6_200)).await;
        assert_eq!(hits.load(Ordering::SeqCst), 3);

        scope.cancel_all();
        tokio::time::sleep(Duration::from_secs(30)).await;
        assert_eq!(hits.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_aborts_pending() {
        let hits = Arc::new(AtomicUsize::new(0));
        {
            let scope = TaskScope::new("test");
            let h = hits.clone();
            scope.after(Duration::from_millis(600), move || {
                h.fetch_add(1, Ordering::SeqCst);
            });
            assert_eq!(scope.pending(), 1);
        }

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }
}
