//! # sling-session: Runtime Layer for the Sling Customizer
//!
//! Mounts customizer sessions on top of sling-core and exposes the command
//! functions the presentation layer calls.
//!
//! ## Module Organization
//! ```text
//! sling_session/
//! ├── lib.rs          ◄─── You are here (tracing setup & exports)
//! ├── config.rs       ◄─── customizer.toml + SLING_* overrides
//! ├── error.rs        ◄─── SessionError, serializable ApiError
//! ├── scheduler.rs    ◄─── TokioScheduler (dismiss timers as tasks)
//! ├── session.rs      ◄─── CustomizerSession (mount / dispose)
//! ├── state/
//! │   ├── selection.rs ◄── Arc<Mutex<SelectionStore>>
//! │   ├── hover.rs     ◄── tooltip target + timer
//! │   └── notice.rs    ◄── "link copied" notice + timer
//! └── commands/
//!     ├── selection.rs ◄── get_catalog, get_configuration, select_option
//!     ├── hover.rs     ◄── set_hover, clear_hover, get_hover
//!     ├── share.rs     ◄── create_share_link, open_share_link
//!     └── config.rs    ◄── get_config
//! ```
//!
//! ## Example
//! ```rust,no_run
//! use sling_core::Axis;
//! use sling_session::{commands, CustomizerConfig, CustomizerSession};
//!
//! #[tokio::main]
//! async fn main() {
//!     sling_session::init_tracing();
//!
//!     let session = CustomizerSession::mount(CustomizerConfig::load_or_default(None)).unwrap();
//!     let response = commands::select_option(
//!         session.selection(),
//!         session.config(),
//!         Axis::Strap,
//!         "padded-orange",
//!     )
//!     .unwrap();
//!     println!("{}", response.display_total);
//! }
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod scheduler;
pub mod session;
pub mod state;

pub use config::CustomizerConfig;
pub use error::{ApiError, ErrorCode, SessionError, SessionResult};
pub use scheduler::TokioScheduler;
pub use session::CustomizerSession;

use tracing_subscriber::EnvFilter;

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show every command
/// - `RUST_LOG=sling_session=trace` - Trace for this crate only
/// - Default: INFO, DEBUG for sling_session
///
/// Calling it more than once is harmless; later calls leave the first
/// subscriber in place.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,sling_session=debug"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}
