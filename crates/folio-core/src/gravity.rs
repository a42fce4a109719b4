//! Hover "gravity well".
//!
//! Hovering a section pulls the camera slightly toward it and pushes nearby
//! sections away. Every quantity has one target, overwritten by hover
//! events, and one current value that relaxes toward it once per frame, so
//! rapid hover in/out never queues and never snaps.

use crate::anchor::Placement;
use crate::constants::{
    BASE_FOCUS_INTENSITY, GRAVITY_RANGE, GRAVITY_SMOOTHING, HOVERED_FOCUS_INTENSITY,
    HOVER_CAMERA_PULL, MAX_CAMERA_OFFSET, MAX_SECTION_DISPLACEMENT, REPULSION_DAMPING,
};
use crate::error::{in_unit_open_closed, EngineError, Result};
use fnv::FnvHashMap;
use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GravityConfig {
    pub max_camera_offset: f32,
    pub max_section_displacement: f32,
    /// Per-frame lerp factor in (0, 1].
    pub smoothing: f32,
    /// Sections at or beyond this distance from the hovered one stay put.
    pub gravity_range: f32,
    /// Scales the linear repulsion falloff, in (0, 1].
    pub repulsion_damping: f32,
    /// Fraction of the hovered (x, y) used as camera pull, in [0, 1].
    pub camera_pull: f32,
    /// Focus intensity target while something is hovered.
    pub hovered_intensity: f32,
}

impl Default for GravityConfig {
    fn default() -> Self {
        Self {
            max_camera_offset: MAX_CAMERA_OFFSET,
            max_section_displacement: MAX_SECTION_DISPLACEMENT,
            smoothing: GRAVITY_SMOOTHING,
            gravity_range: GRAVITY_RANGE,
            repulsion_damping: REPULSION_DAMPING,
            camera_pull: HOVER_CAMERA_PULL,
            hovered_intensity: HOVERED_FOCUS_INTENSITY,
        }
    }
}

impl GravityConfig {
    pub fn validate(&self) -> Result<()> {
        let non_negative = |field: &'static str, value: f32| {
            if value.is_finite() && value >= 0.0 {
                Ok(())
            } else {
                Err(EngineError::InvalidGravity { field, value })
            }
        };
        non_negative("max_camera_offset", self.max_camera_offset)?;
        non_negative("max_section_displacement", self.max_section_displacement)?;
        if !in_unit_open_closed(self.smoothing) {
            return Err(EngineError::InvalidSmoothing(self.smoothing));
        }
        if !(self.gravity_range.is_finite() && self.gravity_range > 0.0) {
            return Err(EngineError::InvalidGravity {
                field: "gravity_range",
                value: self.gravity_range,
            });
        }
        if !in_unit_open_closed(self.repulsion_damping) {
            return Err(EngineError::InvalidGravity {
                field: "repulsion_damping",
                value: self.repulsion_damping,
            });
        }
        if !(self.camera_pull.is_finite() && (0.0..=1.0).contains(&self.camera_pull)) {
            return Err(EngineError::InvalidGravity {
                field: "camera_pull",
                value: self.camera_pull,
            });
        }
        if !(self.hovered_intensity.is_finite() && self.hovered_intensity >= BASE_FOCUS_INTENSITY)
        {
            return Err(EngineError::InvalidGravity {
                field: "hovered_intensity",
                value: self.hovered_intensity,
            });
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GravityState {
    pub hovered_section_id: Option<String>,
    pub camera_offset: Vec3,
    pub section_displacements: FnvHashMap<String, Vec3>,
    pub focus_intensity: f32,
}

impl Default for GravityState {
    fn default() -> Self {
        Self {
            hovered_section_id: None,
            camera_offset: Vec3::ZERO,
            section_displacements: FnvHashMap::default(),
            focus_intensity: BASE_FOCUS_INTENSITY,
        }
    }
}

impl GravityState {
    #[inline]
    pub fn displacement(&self, id: &str) -> Vec3 {
        self.section_displacements
            .get(id)
            .copied()
            .unwrap_or(Vec3::ZERO)
    }
}

/// Displacement pushing `position` away from `hovered`.
///
/// Linear falloff from `max_displacement * damping` at zero distance down to
/// zero at `range`. Coincident points get a zero vector.
pub fn repulsion(
    position: Vec3,
    hovered: Vec3,
    range: f32,
    max_displacement: f32,
    damping: f32,
) -> Vec3 {
    let away = position - hovered;
    let distance = away.length();
    if distance <= 0.0 || distance >= range {
        return Vec3::ZERO;
    }
    let magnitude = (1.0 - distance / range) * max_displacement * damping;
    away / distance * magnitude
}

pub struct GravityModel {
    config: GravityConfig,
    state: GravityState,
    placements: Vec<Placement>,
    hovered_position: Option<Vec3>,
    target_camera_offset: Vec3,
    target_intensity: f32,
}

impl GravityModel {
    pub fn new(config: GravityConfig, placements: Vec<Placement>) -> Result<Self> {
        config.validate()?;
        let mut state = GravityState::default();
        for p in &placements {
            state.section_displacements.insert(p.id.clone(), Vec3::ZERO);
        }
        Ok(Self {
            config,
            state,
            placements,
            hovered_position: None,
            target_camera_offset: Vec3::ZERO,
            target_intensity: BASE_FOCUS_INTENSITY,
        })
    }

    #[inline]
    pub fn config(&self) -> &GravityConfig {
        &self.config
    }

    #[inline]
    pub fn state(&self) -> &GravityState {
        &self.state
    }

    #[inline]
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    #[inline]
    pub fn target_camera_offset(&self) -> Vec3 {
        self.target_camera_offset
    }

    /// `Some((id, position))` starts (or retargets) a hover, `None` ends it.
    pub fn on_section_hover(&mut self, hovered: Option<(&str, Vec3)>) {
        match hovered {
            Some((id, position)) => {
                if !position.is_finite() {
                    log::warn!("[gravity] ignoring hover on {id} at non-finite position");
                    return;
                }
                self.aim_at(position);
                if self.state.hovered_section_id.as_deref() != Some(id) {
                    log::debug!("[gravity] hover {id}");
                }
                self.state.hovered_section_id = Some(id.to_owned());
            }
            None => {
                if let Some(prev) = self.state.hovered_section_id.take() {
                    log::debug!("[gravity] release {prev}");
                }
                self.target_camera_offset = Vec3::ZERO;
                self.target_intensity = BASE_FOCUS_INTENSITY;
                self.hovered_position = None;
            }
        }
    }

    fn aim_at(&mut self, position: Vec3) {
        let pull = Vec3::new(position.x, position.y, 0.0)
            * self.config.camera_pull
            * self.config.max_camera_offset;
        self.target_camera_offset = pull.clamp_length_max(self.config.max_camera_offset);
        self.target_intensity = self.config.hovered_intensity;
        self.hovered_position = Some(position);
    }

    /// Replace the known placements. Current displacements are kept for ids
    /// that survive so nothing jumps; everything else starts at zero.
    ///
    /// An active hover follows its section to the new position, or is
    /// released if the section is gone.
    pub fn update_displacements(&mut self, placements: Vec<Placement>) {
        let mut next = FnvHashMap::default();
        for p in &placements {
            next.insert(p.id.clone(), self.state.displacement(&p.id));
        }
        self.state.section_displacements = next;
        self.placements = placements;

        let Some(id) = self.state.hovered_section_id.as_deref() else {
            return;
        };
        match self.placements.iter().find(|p| p.id == id).map(|p| p.position) {
            Some(position) if position.is_finite() => self.aim_at(position),
            _ => {
                log::debug!("[gravity] hovered {id} left the layout");
                self.on_section_hover(None);
            }
        }
    }

    /// Per-frame relaxation of every current value toward its target.
    pub fn tick(&mut self) {
        let s = self.config.smoothing;
        self.state.camera_offset = self.state.camera_offset.lerp(self.target_camera_offset, s);
        self.state.focus_intensity += (self.target_intensity - self.state.focus_intensity) * s;

        let hovered_id = self.state.hovered_section_id.as_deref();
        for p in &self.placements {
            let target = match self.hovered_position {
                Some(h) if hovered_id != Some(p.id.as_str()) => repulsion(
                    p.position,
                    h,
                    self.config.gravity_range,
                    self.config.max_section_displacement,
                    self.config.repulsion_damping,
                ),
                _ => Vec3::ZERO,
            };
            let current = self
                .state
                .section_displacements
                .entry(p.id.clone())
                .or_insert(Vec3::ZERO);
            *current = current.lerp(target, s);
        }
    }
}
