//! # sling-customizer
//!
//! Mounts one session, applies `axis=id` arguments in order and prints the
//! resulting configuration and share link as JSON.
//!
//! ```text
//! $ sling-customizer strap=padded-orange strapColor=gray
//! { "configuration": { ... }, "displayTotal": "₹11,300.00", ... }
//! ```
//!
//! A `share=<url>` argument restores a shared configuration instead.

use std::process::ExitCode;

use serde::Serialize;
use tracing::{error, info};

use sling_core::Axis;
use sling_session::{commands, init_tracing, ApiError, CustomizerConfig, CustomizerSession};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Output {
    #[serde(flatten)]
    configuration: commands::ConfigurationResponse,
    share_url: String,
}

fn parse_axis(name: &str) -> Option<Axis> {
    match name {
        "fabric" => Some(Axis::Fabric),
        "strap" => Some(Axis::Strap),
        "strapColor" | "strap_color" | "strap-color" => Some(Axis::StrapColor),
        _ => None,
    }
}

fn run(session: &CustomizerSession, args: &[String]) -> Result<Output, ApiError> {
    for arg in args {
        let (key, value) = arg
            .split_once('=')
            .ok_or_else(|| ApiError::validation(format!("Expected axis=id, got '{}'", arg)))?;

        if key == "share" {
            commands::open_share_link(session.selection(), session.config(), value)?;
            continue;
        }

        let axis = parse_axis(key)
            .ok_or_else(|| ApiError::validation(format!("Unknown axis '{}'", key)))?;
        commands::select_option(session.selection(), session.config(), axis, value)?;
    }

    let share = commands::create_share_link(session.selection(), session.notice(), session.config())?;
    Ok(Output {
        configuration: commands::get_configuration(session.selection(), session.config()),
        share_url: share.url,
    })
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let config = CustomizerConfig::load_or_default(None);
    let session = match CustomizerSession::mount(config) {
        Ok(session) => session,
        Err(e) => {
            error!("Failed to mount customizer session: {}", e);
            return ExitCode::FAILURE;
        }
    };
    info!(session_id = %session.id(), "Applying arguments");

    let args: Vec<String> = std::env::args().skip(1).collect();
    let result = run(&session, &args);
    session.dispose();

    match result {
        Ok(output) => match serde_json::to_string_pretty(&output) {
            Ok(json) => {
                println!("{}", json);
                ExitCode::SUCCESS
            }
            Err(e) => {
                error!("Failed to serialize output: {}", e);
                ExitCode::FAILURE
            }
        },
        Err(e) => {
            eprintln!(
                "{}",
                serde_json::to_string(&e).unwrap_or_else(|_| e.to_string())
            );
            ExitCode::FAILURE
        }
    }
}
