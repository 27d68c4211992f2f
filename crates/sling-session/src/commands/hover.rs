//! # Hover Commands
//!
//! Pointer enter / leave on catalog items and the preview area.

use serde::Serialize;
use tracing::debug;

use sling_core::{Axis, Catalogs, HoverTarget};

use crate::error::ApiError;
use crate::state::{HoverState, SelectionState};

/// The tooltip currently shown, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HoverResponse {
    pub target: Option<HoverTarget>,
    /// Option name for catalog targets, absent for the preview area.
    pub tooltip: Option<String>,
}

impl HoverResponse {
    fn idle() -> Self {
        HoverResponse {
            target: None,
            tooltip: None,
        }
    }
}

fn tooltip_for(catalogs: &Catalogs, target: &HoverTarget) -> Result<Option<String>, ApiError> {
    let (axis, id) = match (target.axis(), target.id()) {
        (Some(axis), Some(id)) => (axis, id),
        _ => return Ok(None),
    };
    let name = match axis {
        Axis::Fabric => &catalogs.fabrics.require(id)?.name,
        Axis::Strap => &catalogs.straps.require(id)?.name,
        Axis::StrapColor => &catalogs.strap_colors.require(id)?.name,
    };
    Ok(Some(name.clone()))
}

/// Points the tooltip at `target` and restarts the dismiss timer.
///
/// ## Errors
/// `INVALID_SELECTION` if the target names an id outside its catalog; the
/// hover state is unchanged.
pub fn set_hover(
    hover: &HoverState,
    selection: &SelectionState,
    target: HoverTarget,
) -> Result<HoverResponse, ApiError> {
    debug!(target = %target, "set_hover command");

    let tooltip = selection.with_store(|store| tooltip_for(store.catalogs(), &target))?;
    hover.set_hover(target.clone());

    Ok(HoverResponse {
        target: Some(target),
        tooltip,
    })
}

/// Hides the tooltip and cancels its timer.
pub fn clear_hover(hover: &HoverState) -> HoverResponse {
    debug!("clear_hover command");
    hover.clear_hover();
    HoverResponse::idle()
}

/// Gets the tooltip currently shown.
///
/// ## Errors
/// `INVALID_SELECTION` if the stored target is not in its catalog. Targets
/// only get stored through [`set_hover`], which checks them first.
pub fn get_hover(hover: &HoverState, selection: &SelectionState) -> Result<HoverResponse, ApiError> {
    match hover.hover_target() {
        Some(target) => {
            let tooltip = selection.with_store(|store| tooltip_for(store.catalogs(), &target))?;
            Ok(HoverResponse {
                target: Some(target),
                tooltip,
            })
        }
        None => Ok(HoverResponse::idle()),
    }
}
