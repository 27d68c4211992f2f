//! # Hover Module
//!
//! Transient tooltip / highlight state for the customizer panel.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │          set_hover(t)                   set_hover(t')                   │
//! │   ┌──────┐ ─────────────► ┌──────────┐ ──────────────┐                  │
//! │   │ Idle │                │ Hovering │ ◄─────────────┘ (timer replaced) │
//! │   └──────┘ ◄───────────── └──────────┘                                  │
//! │        timer fires / clear_hover()                                      │
//! │                                                                         │
//! │   dispose (drop) from any state: pending timer cancelled                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Built on [`TimedSlot`], so at most one dismiss timer is ever live.

use std::time::Duration;

use crate::timer::{DismissScheduler, DismissTicket, TimedSlot};
use crate::types::HoverTarget;

/// Hover target plus its auto-dismiss timer.
#[derive(Debug)]
pub struct TransientUiState<S: DismissScheduler> {
    hover: TimedSlot<HoverTarget, S>,
}

impl<S: DismissScheduler> TransientUiState<S> {
    pub fn new(scheduler: S, dismiss_delay: Duration) -> Self {
        TransientUiState {
            hover: TimedSlot::new(scheduler, dismiss_delay),
        }
    }

    /// Points the tooltip at `target` and restarts the dismiss timer.
    pub fn set_hover(&mut self, target: HoverTarget) -> DismissTicket {
        self.hover.set(target)
    }

    /// Pointer left the tracked region: cancel the timer and hide now.
    pub fn clear_hover(&mut self) {
        self.hover.clear();
    }

    /// Called by the scheduler when a dismiss timer fires.
    pub fn on_dismiss_elapsed(&mut self, ticket: DismissTicket) -> bool {
        self.hover.on_elapsed(ticket)
    }

    pub fn hover_target(&self) -> Option<&HoverTarget> {
        self.hover.current()
    }

    /// Whether `target` is the one currently showing a tooltip.
    pub fn is_hovered(&self, target: &HoverTarget) -> bool {
        self.hover.current() == Some(target)
    }

    pub fn has_pending_timer(&self) -> bool {
        self.hover.has_pending_timer()
    }

    pub fn dismiss_delay(&self) -> Duration {
        self.hover.delay()
    }

    /// Tears the state down, cancelling any pending timer.
    pub fn dispose(self) {
        drop(self);
    }

    /// Cancels the dismiss timer without touching the hover target.
    ///
    /// For owners that cannot drop the state because other handles share it.
    pub fn cancel_dismiss(&mut self) {
        self.hover.cancel_timer();
    }

    pub fn slot(&self) -> &TimedSlot<HoverTarget, S> {
        &self.hover
    }

    pub fn slot_mut(&mut self) -> &mut TimedSlot<HoverTarget, S> {
        &mut self.hover
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::ManualScheduler;
    use crate::DEFAULT_HOVER_DISMISS;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn state() -> (ManualScheduler, TransientUiState<ManualScheduler>) {
        let clock = ManualScheduler::new();
        let ui = TransientUiState::new(clock.clone(), DEFAULT_HOVER_DISMISS);
        (clock, ui)
    }

    fn fabric(id: &str) -> HoverTarget {
        HoverTarget::Fabric(id.to_string())
    }

    #[test]
    fn test_default_delay_is_five_seconds() {
        let (_, ui) = state();
        assert_eq!(ui.dismiss_delay(), ms(5000));
    }

    #[test]
    fn test_idle_to_hovering_to_idle() {
        let (clock, mut ui) = state();
        assert_eq!(ui.hover_target(), None);

        ui.set_hover(fabric("red-grid"));
        assert!(ui.is_hovered(&fabric("red-grid")));
        assert!(ui.has_pending_timer());

        ui.slot_mut().advance(ms(5000));
        assert_eq!(ui.hover_target(), None);
        assert!(!ui.has_pending_timer());
        assert_eq!(clock.live_timers(), 0);
    }

    #[test]
    fn test_second_hover_replaces_first_timer() {
        let (clock, mut ui) = state();
        ui.set_hover(fabric("red-grid"));
        ui.slot_mut().advance(ms(3000));

        ui.set_hover(HoverTarget::Strap("padded-orange".to_string()));
        assert_eq!(clock.live_timers(), 1);

        // 5000 ms after the first hover: first timer is gone, B stays.
        ui.slot_mut().advance(ms(2000));
        assert_eq!(
            ui.hover_target(),
            Some(&HoverTarget::Strap("padded-orange".to_string()))
        );

        // 4999 ms after B.
        ui.slot_mut().advance(ms(2999));
        assert!(ui.hover_target().is_some());

        // 5000 ms after B.
        ui.slot_mut().advance(ms(1));
        assert_eq!(ui.hover_target(), None);
        assert_eq!(clock.live_timers(), 0);
    }

    #[test]
    fn test_late_stale_timer_does_not_clear_newer_target() {
        let (_, mut ui) = state();
        let old = ui.set_hover(fabric("black-carbon"));
        ui.set_hover(fabric("blue-wave"));

        // Old timer callback arrives after it was replaced.
        assert!(!ui.on_dismiss_elapsed(old));
        assert!(ui.is_hovered(&fabric("blue-wave")));
    }

    #[test]
    fn test_clear_hover_cancels_timer() {
        let (clock, mut ui) = state();
        ui.set_hover(HoverTarget::Preview);
        ui.slot_mut().advance(ms(1000));
        ui.clear_hover();

        assert_eq!(ui.hover_target(), None);
        assert_eq!(clock.live_timers(), 0);

        ui.slot_mut().advance(ms(10_000));
        assert_eq!(ui.hover_target(), None);
    }

    #[test]
    fn test_clear_then_hover_again_restarts_window() {
        let (_, mut ui) = state();
        ui.set_hover(fabric("red-grid"));
        ui.slot_mut().advance(ms(4000));
        ui.clear_hover();
        ui.set_hover(fabric("red-grid"));

        ui.slot_mut().advance(ms(4000));
        assert!(ui.is_hovered(&fabric("red-grid")));
        ui.slot_mut().advance(ms(1000));
        assert_eq!(ui.hover_target(), None);
    }

    #[test]
    fn test_dispose_cancels_pending_timer() {
        let (clock, mut ui) = state();
        ui.set_hover(fabric("red-grid"));
        assert_eq!(clock.live_timers(), 1);

        ui.dispose();
        assert_eq!(clock.live_timers(), 0);
        assert!(clock.advance(ms(10_000)).is_empty());
    }

    #[test]
    fn test_cancel_dismiss_keeps_target() {
        let (clock, mut ui) = state();
        let ticket = ui.set_hover(HoverTarget::Preview);

        ui.cancel_dismiss();
        assert_eq!(clock.live_timers(), 0);
        assert!(clock.advance(ms(10_000)).is_empty());
        assert!(!ui.on_dismiss_elapsed(ticket));
        assert_eq!(ui.hover_target(), Some(&HoverTarget::Preview));
    }

    #[test]
    fn test_timer_count_never_exceeds_one() {
        let (clock, mut ui) = state();
        for (i, id) in ["a", "b", "c", "d", "e"].iter().enumerate() {
            ui.set_hover(fabric(id));
            assert_eq!(clock.live_timers(), 1, "after hover #{}", i);
            ui.slot_mut().advance(ms(100));
        }
        ui.clear_hover();
        assert_eq!(clock.live_timers(), 0);
    }
}
