//! # Timer Module
//!
//! A single-slot value with an auto-dismiss timer.
//!
//! ## Slot Discipline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      TimedSlot<T, S>                                    │
//! │                                                                         │
//! │   set(v)        1. cancel pending timer (if any)                        │
//! │                 2. value = Some(v)                                      │
//! │                 3. schedule new timer with a fresh ticket               │
//! │                                                                         │
//! │   clear()       cancel pending timer, value = None                      │
//! │                                                                         │
//! │   on_elapsed(t) ticket == pending ticket?  → value = None              │
//! │                 otherwise (stale / cancelled) → ignored                │
//! │                                                                         │
//! │   drop          cancel pending timer                                    │
//! │                                                                         │
//! │   Live timers owned by one slot: always 0 or 1.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The clock is abstracted by [`DismissScheduler`]. sling-session plugs in
//! tokio; tests use [`ManualScheduler`], a virtual clock.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

// =============================================================================
// Scheduler Abstraction
// =============================================================================

/// Identifies one scheduled dismissal.
///
/// Tickets are never reused within a slot, so a timer that fires after it
/// was replaced carries a ticket that no longer matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DismissTicket(u64);

impl DismissTicket {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Something that can run "call me back with this ticket after `delay`".
pub trait DismissScheduler {
    /// Owned handle for one scheduled timer.
    type Handle;

    /// Schedules delivery of `ticket` back to the slot after `delay`.
    fn schedule(&mut self, delay: Duration, ticket: DismissTicket) -> Self::Handle;

    /// Cancels a timer. Must be safe to call on a timer that already fired.
    fn cancel(&mut self, handle: Self::Handle);
}

struct Pending<H> {
    ticket: DismissTicket,
    handle: H,
}

// =============================================================================
// Timed Slot
// =============================================================================

/// Holds at most one value that clears itself after a fixed delay.
pub struct TimedSlot<T, S: DismissScheduler> {
    value: Option<T>,
    pending: Option<Pending<S::Handle>>,
    next_ticket: u64,
    delay: Duration,
    scheduler: S,
}

impl<T, S: DismissScheduler> TimedSlot<T, S> {
    pub fn new(scheduler: S, delay: Duration) -> Self {
        TimedSlot {
            value: None,
            pending: None,
            next_ticket: 0,
            delay,
            scheduler,
        }
    }

    /// Stores `value` and restarts the dismiss timer.
    ///
    /// The previous timer is cancelled before the new one is scheduled.
    pub fn set(&mut self, value: T) -> DismissTicket {
        self.cancel_pending();
        self.value = Some(value);

        self.next_ticket += 1;
        let ticket = DismissTicket(self.next_ticket);
        let handle = self.scheduler.schedule(self.delay, ticket);
        self.pending = Some(Pending { ticket, handle });
        ticket
    }

    /// Cancels the timer and empties the slot immediately.
    pub fn clear(&mut self) {
        self.cancel_pending();
        self.value = None;
    }

    /// Cancels the pending timer but keeps the current value.
    ///
    /// Used on teardown: the value stays as it was and no later
    /// `on_elapsed` can clear it.
    pub fn cancel_timer(&mut self) {
        self.cancel_pending();
    }

    /// Timer callback entry point.
    ///
    /// Returns `true` if the slot was cleared, `false` for a stale ticket.
    pub fn on_elapsed(&mut self, ticket: DismissTicket) -> bool {
        match &self.pending {
            Some(pending) if pending.ticket == ticket => {
                // Already fired; nothing to cancel.
                self.pending = None;
                self.value = None;
                true
            }
            _ => false,
        }
    }

    pub fn current(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn is_set(&self) -> bool {
        self.value.is_some()
    }

    pub fn has_pending_timer(&self) -> bool {
        self.pending.is_some()
    }

    /// Ticket of the live timer, if any.
    pub fn pending_ticket(&self) -> Option<DismissTicket> {
        self.pending.as_ref().map(|p| p.ticket)
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    fn cancel_pending(&mut self) {
        if let Some(pending) = self.pending.take() {
            self.scheduler.cancel(pending.handle);
        }
    }
}

impl<T, S: DismissScheduler> Drop for TimedSlot<T, S> {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}

impl<T: std::fmt::Debug, S: DismissScheduler> std::fmt::Debug for TimedSlot<T, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimedSlot")
            .field("value", &self.value)
            .field("pending_ticket", &self.pending_ticket())
            .field("delay", &self.delay)
            .finish()
    }
}

// =============================================================================
// Manual Scheduler (virtual clock)
// =============================================================================

/// A virtual clock for deterministic timer tests.
///
/// Clones share the same clock, so a test can keep one clone while the slot
/// owns another.
///
/// ## Example
/// ```rust
/// use std::time::Duration;
/// use sling_core::timer::{ManualScheduler, TimedSlot};
///
/// let clock = ManualScheduler::new();
/// let mut slot = TimedSlot::new(clock.clone(), Duration::from_millis(100));
/// slot.set("tooltip");
///
/// slot.advance(Duration::from_millis(99));
/// assert!(slot.is_set());
/// slot.advance(Duration::from_millis(1));
/// assert!(!slot.is_set());
/// assert_eq!(clock.live_timers(), 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    clock: Rc<RefCell<ManualClock>>,
}

/// Handle for a timer on a [`ManualScheduler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManualTimerHandle(u64);

#[derive(Debug, Default)]
struct ManualClock {
    now: Duration,
    next_handle: u64,
    timers: Vec<ManualTimer>,
}

#[derive(Debug)]
struct ManualTimer {
    handle: ManualTimerHandle,
    due: Duration,
    ticket: DismissTicket,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Virtual time elapsed since the clock was created.
    pub fn now(&self) -> Duration {
        self.clock.borrow().now
    }

    /// Number of scheduled, not yet fired or cancelled timers.
    pub fn live_timers(&self) -> usize {
        self.clock.borrow().timers.len()
    }

    /// Moves the clock forward and returns the tickets that came due, in
    /// due order. Fired timers are removed.
    pub fn advance(&self, by: Duration) -> Vec<DismissTicket> {
        let mut clock = self.clock.borrow_mut();
        clock.now += by;
        let now = clock.now;

        let mut due: Vec<ManualTimer> = Vec::new();
        let mut i = 0;
        while i < clock.timers.len() {
            if clock.timers[i].due <= now {
                due.push(clock.timers.remove(i));
            } else {
                i += 1;
            }
        }
        due.sort_by_key(|timer| timer.due);
        due.into_iter().map(|timer| timer.ticket).collect()
    }
}

impl DismissScheduler for ManualScheduler {
    type Handle = ManualTimerHandle;

    fn schedule(&mut self, delay: Duration, ticket: DismissTicket) -> ManualTimerHandle {
        let mut clock = self.clock.borrow_mut();
        clock.next_handle += 1;
        let handle = ManualTimerHandle(clock.next_handle);
        let due = clock.now + delay;
        clock.timers.push(ManualTimer {
            handle,
            due,
            ticket,
        });
        handle
    }

    fn cancel(&mut self, handle: ManualTimerHandle) {
        self.clock
            .borrow_mut()
            .timers
            .retain(|timer| timer.handle != handle);
    }
}

impl<T> TimedSlot<T, ManualScheduler> {
    /// Advances the shared virtual clock and delivers due tickets.
    pub fn advance(&mut self, by: Duration) {
        for ticket in self.scheduler.advance(by) {
            self.on_elapsed(ticket);
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
