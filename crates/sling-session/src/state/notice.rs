//! # Copied Notice State
//!
//! The short "link copied" confirmation shown after a share link is made.
//! Same single-slot timer discipline as the tooltip: copying again restarts
//! the window, disposing cancels it.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::runtime::Handle;
use tracing::debug;
use uuid::Uuid;

use sling_core::TimedSlot;

use crate::scheduler::{lock, shared_with_timer, TokioScheduler};

/// What the notice shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CopiedNotice {
    pub url: String,
    pub copied_at: DateTime<Utc>,
}

type SharedNotice = Arc<Mutex<TimedSlot<CopiedNotice, TokioScheduler>>>;

#[derive(Debug, Clone)]
pub struct NoticeState {
    inner: SharedNotice,
    session_id: Uuid,
}

impl NoticeState {
    pub fn new(runtime: Handle, duration: Duration, session_id: Uuid) -> Self {
        let inner = shared_with_timer(
            runtime,
            |scheduler| TimedSlot::new(scheduler, duration),
            move |slot: &mut TimedSlot<CopiedNotice, TokioScheduler>, ticket| {
                if slot.on_elapsed(ticket) {
                    debug!(session_id = %session_id, "Copied notice hidden");
                }
            },
        );
        NoticeState { inner, session_id }
    }

    /// Shows the notice for `url`, restarting the timer.
    ///
    /// Returns the notice as stored, read under the same lock that set it.
    pub fn show(&self, url: impl Into<String>) -> CopiedNotice {
        let notice = CopiedNotice {
            url: url.into(),
            copied_at: Utc::now(),
        };
        debug!(session_id = %self.session_id, url = %notice.url, "Showing copied notice");
        lock(&self.inner).set(notice.clone());
        notice
    }

    pub fn hide(&self) {
        lock(&self.inner).clear();
    }

    /// Cancels the hide timer. A shown notice stays as it is.
    pub fn dispose(&self) {
        lock(&self.inner).cancel_timer();
        debug!(session_id = %self.session_id, "Copied notice timer cancelled");
    }

    pub fn has_pending_timer(&self) -> bool {
        lock(&self.inner).has_pending_timer()
    }

    pub fn current(&self) -> Option<CopiedNotice> {
        lock(&self.inner).current().cloned()
    }

    pub fn is_visible(&self) -> bool {
        lock(&self.inner).is_set()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn advance(ms: u64) {
        tokio::time::advance(Duration::from_millis(ms)).await;
        for _ in 0..4 {
            tokio::task::yield_now().await;
        }
    }

    fn state() -> NoticeState {
        NoticeState::new(Handle::current(), Duration::from_millis(2000), Uuid::new_v4())
    }

    #[tokio::test(start_paused = true)]
    async fn test_show_returns_stored_notice() {
        let notice = state();
        let shown = notice.show("http://localhost:8080/bag-preview?config=x");

        assert_eq!(notice.current(), Some(shown.clone()));
        assert_eq!(shown.url, "http://localhost:8080/bag-preview?config=x");

        advance(2000).await;
        assert_eq!(notice.current(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dispose_cancels_timer_for_every_handle() {
        let notice = state();
        let held = notice.clone();
        let shown = notice.show("http://localhost:8080/bag-preview");

        notice.dispose();
        assert!(!held.has_pending_timer());

        advance(5000).await;
        assert_eq!(held.current(), Some(shown));
    }
}
