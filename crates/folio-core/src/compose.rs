//! Default spatial composition: engine outputs to per-panel styles.

use crate::anchor::SectionAnchor;
use crate::constants::{PANEL_HIDE_BELOW, PANEL_HOVER_SCALE_BOOST, PANEL_MIN_SCALE};
use crate::focus::FocusResult;
use crate::gravity::GravityState;
use glam::Vec3;

#[derive(Clone, Debug, PartialEq)]
pub struct PanelStyle {
    pub id: String,
    pub opacity: f32,
    pub scale: f32,
    pub offset: Vec3,
    pub visible: bool,
    pub active: bool,
    pub hovered: bool,
}

#[inline]
pub fn panel_opacity(weight: f32) -> f32 {
    if weight < PANEL_HIDE_BELOW {
        0.0
    } else {
        weight.min(1.0)
    }
}

#[inline]
pub fn panel_scale(weight: f32, hovered: bool, focus_intensity: f32) -> f32 {
    let base = PANEL_MIN_SCALE + (1.0 - PANEL_MIN_SCALE) * weight.clamp(0.0, 1.0);
    if hovered {
        base * (1.0 + PANEL_HOVER_SCALE_BOOST * (focus_intensity - 1.0).max(0.0))
    } else {
        base
    }
}

/// One style per anchor, in anchor order.
pub fn compose_panels(
    anchors: &[SectionAnchor],
    focus: &FocusResult,
    gravity: &GravityState,
) -> Vec<PanelStyle> {
    anchors
        .iter()
        .enumerate()
        .map(|(i, a)| {
            let weight = focus.weight(&a.id).unwrap_or(0.0) as f32;
            let hovered = gravity.hovered_section_id.as_deref() == Some(a.id.as_str());
            let opacity = panel_opacity(weight);
            PanelStyle {
                id: a.id.clone(),
                opacity,
                scale: panel_scale(weight, hovered, gravity.focus_intensity),
                offset: gravity.displacement(&a.id),
                visible: opacity > 0.0,
                active: focus.active_index == Some(i),
                hovered,
            }
        })
        .collect()
}
