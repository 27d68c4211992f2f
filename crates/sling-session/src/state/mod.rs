//! # Session State
//!
//! The state one mounted customizer holds, split by concern so each command
//! borrows only what it needs.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  ┌──────────────────┐  ┌──────────────────┐  ┌──────────────────────┐  │
//! │  │  SelectionState  │  │   HoverState     │  │   NoticeState        │  │
//! │  │                  │  │                  │  │                      │  │
//! │  │  Arc<Mutex<      │  │  Arc<Mutex<      │  │  Arc<Mutex<          │  │
//! │  │   SelectionStore │  │   TransientUi    │  │   TimedSlot<         │  │
//! │  │  >>              │  │   State>>        │  │    CopiedNotice>>    │  │
//! │  └──────────────────┘  └──────────────────┘  └──────────────────────┘  │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • Every lock is held for one synchronous transition, never across     │
//! │    an await                                                            │
//! │  • Timer tasks reach Hover/Notice state through a Weak reference       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod hover;
mod notice;
mod selection;

pub use hover::HoverState;
pub use notice::{CopiedNotice, NoticeState};
pub use selection::SelectionState;
