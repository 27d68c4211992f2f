//! # Tokio Dismiss Scheduler
//!
//! Runs sling-core dismiss timers as tokio tasks.
//!
//! ## Timer Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  TimedSlot::set ──► schedule(delay, ticket)                             │
//! │                        │                                                │
//! │                        ▼                                                │
//! │            tokio::spawn { sleep_until(now + delay); on_elapsed(ticket) }│
//! │                        │                                                │
//! │        ┌───────────────┴────────────────┐                               │
//! │        ▼                                ▼                               │
//! │  cancel(handle) ── abort()        sleep completes                       │
//! │                                         │                               │
//! │                                         ▼                               │
//! │                     Weak::upgrade ── None (disposed) ──► nothing        │
//! │                            │                                            │
//! │                            ▼                                            │
//! │                 lock state, slot.on_elapsed(ticket)                     │
//! │                 (stale ticket ──► ignored)                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A task that already woke up may still run after `abort()`; the ticket
//! check in the slot turns that late call into a no-op.

use std::sync::{Arc, Mutex, PoisonError, Weak};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::Instant;

use sling_core::{DismissScheduler, DismissTicket};

type ElapsedCallback = Arc<dyn Fn(DismissTicket) + Send + Sync>;

/// [`DismissScheduler`] backed by a tokio runtime.
#[derive(Clone)]
pub struct TokioScheduler {
    runtime: Handle,
    on_elapsed: ElapsedCallback,
}

impl TokioScheduler {
    pub fn new<F>(runtime: Handle, on_elapsed: F) -> Self
    where
        F: Fn(DismissTicket) + Send + Sync + 'static,
    {
        TokioScheduler {
            runtime,
            on_elapsed: Arc::new(on_elapsed),
        }
    }
}

impl DismissScheduler for TokioScheduler {
    type Handle = JoinHandle<()>;

    fn schedule(&mut self, delay: Duration, ticket: DismissTicket) -> JoinHandle<()> {
        let on_elapsed = Arc::clone(&self.on_elapsed);
        // Deadline is fixed now, on the runtime's clock, not when the task
        // is first polled.
        let _entered = self.runtime.enter();
        let deadline = Instant::now() + delay;
        self.runtime.spawn(async move {
            tokio::time::sleep_until(deadline).await;
            on_elapsed(ticket);
        })
    }

    fn cancel(&mut self, handle: JoinHandle<()>) {
        handle.abort();
    }
}

impl std::fmt::Debug for TokioScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokioScheduler").finish_non_exhaustive()
    }
}

/// Builds shared state whose timers call back into it.
///
/// The timer callback only holds a `Weak` reference, so dropping the last
/// `Arc` disposes the state and any timer that still fires does nothing.
pub fn shared_with_timer<U, B, F>(runtime: Handle, build: B, on_fire: F) -> Arc<Mutex<U>>
where
    U: Send + 'static,
    B: FnOnce(TokioScheduler) -> U,
    F: Fn(&mut U, DismissTicket) + Send + Sync + 'static,
{
    Arc::new_cyclic(|weak: &Weak<Mutex<U>>| {
        let weak = weak.clone();
        let scheduler = TokioScheduler::new(runtime, move |ticket| {
            if let Some(shared) = weak.upgrade() {
                let mut state = lock(&shared);
                on_fire(&mut *state, ticket);
            }
        });
        Mutex::new(build(scheduler))
    })
}

/// Locks a state mutex, recovering the data if a previous holder panicked.
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use sling_core::TimedSlot;

    type Slot = TimedSlot<&'static str, TokioScheduler>;

    /// A slot whose timer callback counts how often it reached the state.
    fn slot(delay_ms: u64) -> (Arc<Mutex<Slot>>, Arc<AtomicUsize>) {
        let fired = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&fired);
        let slot = shared_with_timer(
            Handle::current(),
            |scheduler| TimedSlot::new(scheduler, Duration::from_millis(delay_ms)),
            move |slot: &mut Slot, ticket| {
                counter.fetch_add(1, Ordering::SeqCst);
                slot.on_elapsed(ticket);
            },
        );
        (slot, fired)
    }

    async fn advance(ms: u64) {
        tokio::time::advance(Duration::from_millis(ms)).await;
        for _ in 0..4 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_timer_clears_slot() {
        let (slot, fired) = slot(100);
        lock(&slot).set("notice");

        advance(99).await;
        assert!(lock(&slot).is_set());
        assert_eq!(fired.load(Ordering::SeqCst), 0);

        advance(1).await;
        assert!(!lock(&slot).is_set());
        assert!(!lock(&slot).has_pending_timer());
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_replaced_timer_is_aborted() {
        let (slot, fired) = slot(100);
        lock(&slot).set("first");
        advance(60).await;
        lock(&slot).set("second");

        advance(60).await;
        assert_eq!(lock(&slot).current(), Some(&"second"));
        assert_eq!(fired.load(Ordering::SeqCst), 0);

        advance(40).await;
        assert_eq!(lock(&slot).current(), None);
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_timer_never_runs() {
        let (slot, fired) = slot(100);
        lock(&slot).set("kept");
        lock(&slot).cancel_timer();

        advance(500).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);
        assert_eq!(lock(&slot).current(), Some(&"kept"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_state_ignores_timer() {
        let (slot, fired) = slot(100);
        lock(&slot).set("gone");
        drop(slot);

        advance(500).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }
}
