//! Frame-driven aggregate over the tracker, focus detector and gravity
//! model.
//!
//! Frontends own the scheduler and the input bindings; they call
//! [`SpatialEngine::frame`] once per animation frame and forward discrete
//! events. After [`SpatialEngine::stop`] every entry point is a no-op, so a
//! late callback racing teardown cannot move anything.

use crate::anchor::{
    anchor_index, placement_position, scatter_placements, Placement, SectionAnchor,
};
use crate::camera::{Camera, CameraPath};
use crate::compose::{compose_panels, PanelStyle};
use crate::constants::DEFAULT_LAYOUT_SEED;
use crate::error::Result;
use crate::focus::{FocusConfig, FocusDetector, FocusResult};
use crate::gravity::{GravityConfig, GravityModel, GravityState};
use crate::nav::{resolve_nav, NavCommand};
use crate::scroll::{ScrollConfig, ScrollDirection, ScrollState, ScrollTracker};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EngineConfig {
    pub scroll: ScrollConfig,
    pub focus: FocusConfig,
    pub gravity: GravityConfig,
    pub path: CameraPath,
    pub layout_seed: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            scroll: ScrollConfig::default(),
            focus: FocusConfig::default(),
            gravity: GravityConfig::default(),
            path: CameraPath::default(),
            layout_seed: DEFAULT_LAYOUT_SEED,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<()> {
        self.scroll.validate()?;
        self.focus.validate()?;
        self.gravity.validate()?;
        self.path.validate()
    }
}

/// Everything presentation needs for one frame.
#[derive(Clone, Debug, Default)]
pub struct FrameOutput {
    pub scroll: ScrollState,
    pub camera_z: f32,
    pub focus: FocusResult,
    pub gravity: GravityState,
    pub panels: Vec<PanelStyle>,
}

impl FrameOutput {
    /// Camera framing for a viewport of the given aspect ratio.
    pub fn camera(&self, aspect: f32) -> Camera {
        Camera::framing(self.camera_z, self.gravity.camera_offset, aspect)
    }
}

pub struct SpatialEngine {
    anchors: Vec<SectionAnchor>,
    path: CameraPath,
    tracker: ScrollTracker,
    focus: FocusDetector,
    gravity: GravityModel,
    running: bool,
    output: FrameOutput,
}

impl SpatialEngine {
    pub fn new(config: EngineConfig, anchors: Vec<SectionAnchor>) -> Result<Self> {
        config.validate()?;
        let placements = scatter_placements(&anchors, config.layout_seed);
        let mut engine = Self {
            path: config.path,
            tracker: ScrollTracker::new(config.scroll)?,
            focus: FocusDetector::new(config.focus)?,
            gravity: GravityModel::new(config.gravity, placements)?,
            anchors,
            running: false,
            output: FrameOutput::default(),
        };
        engine.refresh_output();
        log::info!(
            "[engine] sections={} path=({:.1} -> {:.1}) scroll_distance={}",
            engine.anchors.len(),
            engine.path.start_z,
            engine.path.end_z,
            engine.tracker.config().scroll_distance
        );
        Ok(engine)
    }

    pub fn start(&mut self) {
        if !self.running {
            log::debug!("[engine] start");
        }
        self.running = true;
    }

    pub fn stop(&mut self) {
        if self.running {
            log::debug!("[engine] stop");
        }
        self.running = false;
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[inline]
    pub fn anchors(&self) -> &[SectionAnchor] {
        &self.anchors
    }

    #[inline]
    pub fn placements(&self) -> &[Placement] {
        self.gravity.placements()
    }

    #[inline]
    pub fn path(&self) -> &CameraPath {
        &self.path
    }

    #[inline]
    pub fn output(&self) -> &FrameOutput {
        &self.output
    }

    #[inline]
    pub fn scroll_state(&self) -> &ScrollState {
        self.tracker.state()
    }

    #[inline]
    pub fn camera_z(&self) -> f32 {
        self.path.z_at(self.tracker.smooth_progress())
    }

    pub fn on_raw_input(&mut self, delta: f32, now_ms: f64) {
        if self.running {
            self.tracker.on_raw_input(delta, now_ms);
        }
    }

    pub fn scroll_to_progress(&mut self, target: f32) {
        if self.running {
            self.tracker.scroll_to_progress(target);
        }
    }

    /// Jump to the anchor with `id`. Returns false for unknown ids.
    pub fn scroll_to_section(&mut self, id: &str) -> bool {
        if !self.running {
            return false;
        }
        match anchor_index(&self.anchors, id) {
            Some(i) => {
                self.scroll_to_index(i);
                true
            }
            None => {
                log::warn!("[engine] unknown section {id}");
                false
            }
        }
    }

    pub fn scroll_to_index(&mut self, index: usize) {
        if !self.running {
            return;
        }
        if let Some(a) = self.anchors.get(index) {
            let p = self.path.progress_for_z(a.z_position);
            log::debug!("[engine] navigate to {} (progress {:.3})", a.id, p);
            self.tracker.scroll_to_progress(p);
        }
    }

    /// Move one section forward or backward from the current active one,
    /// stopping at either end.
    pub fn step_section(&mut self, direction: ScrollDirection) {
        let command = match direction {
            ScrollDirection::Forward => NavCommand::Next,
            ScrollDirection::Backward => NavCommand::Previous,
            ScrollDirection::Idle => return,
        };
        self.navigate(command);
    }

    /// Apply a navigation command relative to the section nearest the
    /// camera. Returns false when there is nowhere to go.
    pub fn navigate(&mut self, command: NavCommand) -> bool {
        if !self.running {
            return false;
        }
        let active = self
            .focus
            .compute(&self.anchors, self.camera_z())
            .active_index
            .unwrap_or(0);
        match resolve_nav(command, active, self.anchors.len()) {
            Some(index) => {
                self.scroll_to_index(index);
                true
            }
            None => false,
        }
    }

    /// Hover a section by id using its current placement; `None` releases.
    pub fn on_section_hover(&mut self, id: Option<&str>) {
        if !self.running {
            return;
        }
        match id {
            Some(id) => match placement_position(self.gravity.placements(), id) {
                Some(pos) => self.gravity.on_section_hover(Some((id, pos))),
                None => log::warn!("[engine] hover on unknown section {id}"),
            },
            None => self.gravity.on_section_hover(None),
        }
    }

    pub fn update_displacements(&mut self, placements: Vec<Placement>) {
        if self.running {
            self.gravity.update_displacements(placements);
        }
    }

    /// Re-scatter placements with a new seed.
    pub fn reshuffle(&mut self, seed: u64) {
        let placements = scatter_placements(&self.anchors, seed);
        self.update_displacements(placements);
    }

    /// Ordered per-frame update: scroll, focus, gravity, composition.
    pub fn frame(&mut self) -> &FrameOutput {
        if self.running {
            self.tracker.tick();
            self.gravity.tick();
            self.refresh_output();
        }
        &self.output
    }

    fn refresh_output(&mut self) {
        let camera_z = self.camera_z();
        let focus = self.focus.compute(&self.anchors, camera_z);
        let gravity = self.gravity.state().clone();
        let panels = compose_panels(&self.anchors, &focus, &gravity);
        self.output = FrameOutput {
            scroll: *self.tracker.state(),
            camera_z,
            focus,
            gravity,
            panels,
        };
    }
}
