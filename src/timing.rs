//! Debounce and throttle factories
//!
//! Timer-based call coalescing for hosts embedding the form layer outside the
//! GUI event loop. Both types must be used from within a Tokio runtime; the
//! scheduled callbacks run as fire-and-forget tasks.
//!
//! The GUI itself does not use these directly: inside the iced update loop the
//! equivalent is a generation counter plus a deferred `Task` (see
//! `app::handlers::form`), which avoids spawning from outside the runtime.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinHandle;

/// Delays callback invocation until a quiet period has elapsed.
///
/// Each `call` aborts any pending timer before scheduling a new one, so only
/// the last call in a burst fires, `delay` after that call. This abort is the
/// only cancellation primitive in the crate.
#[derive(Debug)]
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

    /// Schedules `callback` to run after the quiet period, replacing any
    /// pending invocation.
    pub fn call<F>(&self, callback: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let delay = self.delay;
        let mut pending = lock_unpoisoned(&self.pending);
        if let Some(handle) = pending.take() {
            handle.abort();
        }
        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            callback();
        }));
    }

    /// Drops the pending invocation, if any, without running it.
    pub fn cancel(&self) {
        if let Some(handle) = lock_unpoisoned(&self.pending).take() {
            handle.abort();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Invokes immediately, then ignores further calls for a fixed window.
#[derive(Debug, Clone)]
pub struct Throttler {
    limit: Duration,
    in_throttle: Arc<AtomicBool>,
}

impl Throttler {
    pub fn new(limit: Duration) -> Self {
        Self {
            limit,
            in_throttle: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Runs `callback` synchronously if the window is open; returns whether it
    /// ran. Calls landing inside the window are ignored, not queued.
    pub fn call<F>(&self, callback: F) -> bool
    where
        F: FnOnce(),
    {
        if self
            .in_throttle
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return false;
        }

        callback();

        let gate = Arc::clone(&self.in_throttle);
        let limit = self.limit;
        tokio::spawn(async move {
            tokio::time::sleep(limit).await;
            gate.store(false, Ordering::SeqCst);
        });
        true
    }
}

/// Recovers the guard from a poisoned mutex; the critical sections here never
/// panic, but the type system cannot see that.
fn lock_unpoisoned<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    match mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[tokio::test(start_paused = true)]
    async fn test_debounce_fires_once_after_burst() {
        let debouncer = Debouncer::new(Duration::from_millis(300));
        let count = Arc::new(AtomicUsize::new(0));

        // 5 calls at 100ms intervals: every call lands inside the previous
        // call's quiet period
        for _ in 0..5 {
            let count = Arc::clone(&count);
            debouncer.call(move || {
                count.fetch_add(1, Ordering::SeqCst);
            });
            tokio::task::yield_now().await;
            tokio::time::advance(Duration::from_millis(100)).await;
        }

        assert_eq!(count.load(Ordering::SeqCst), 0);

        tokio::time::advance(Duration::from_millis(300)).await;
        tokio::task::yield_now().await;
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_debounce_cancel_drops_pending_call() {
        let debouncer = Debouncer::new(Duration::from_millis(100));
        let count = Arc::new(AtomicUsize::new(0));

        {
            let count = Arc::clone(&count);
            debouncer.call(move || {
                count.fetch_add(1, Ordering::SeqCst);
            });
        }
        tokio::task::yield_now().await;
        debouncer.cancel();

        tokio::time::advance(Duration::from_millis(200)).await;
        tokio::task::yield_now().await;
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_throttle_invokes_first_call_only() {
        let throttler = Throttler::new(Duration::from_millis(1000));
        let count = Arc::new(AtomicUsize::new(0));

        for _ in 0..5 {
            let count = Arc::clone(&count);
            throttler.call(move || {
                count.fetch_add(1, Ordering::SeqCst);
            });
        }

        // First call ran synchronously, the rest were ignored
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_throttle_reopens_after_window() {
        let throttler = Throttler::new(Duration::from_millis(1000));
        let count = Arc::new(AtomicUsize::new(0));

        let c = Arc::clone(&count);
        assert!(throttler.call(move || {
            c.fetch_add(1, Ordering::SeqCst);
        }));
        let c = Arc::clone(&count);
        assert!(!throttler.call(move || {
            c.fetch_add(1, Ordering::SeqCst);
        }));

        tokio::task::yield_now().await;
        tokio::time::advance(Duration::from_millis(1000)).await;
        tokio::task::yield_now().await;

        let c = Arc::clone(&count);
        assert!(throttler.call(move || {
            c.fetch_add(1, Ordering::SeqCst);
        }));
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }
}
