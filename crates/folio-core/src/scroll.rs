//! Scroll progress tracker.
//!
//! Raw wheel deltas accumulate into an absolute offset clamped to
//! `[0, scroll_distance]`. The normalized raw target jumps with input while
//! `smooth_progress` chases it once per frame, so downstream consumers see a
//! continuous signal. Velocity is tracked separately and decays every frame
//! whether or not input arrives.

use crate::constants::{INERTIA_DECAY, MIN_INPUT_ELAPSED_MS, SCROLL_DISTANCE, SCROLL_SMOOTHING};
use crate::error::{in_unit_open_closed, EngineError, Result};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollConfig {
    /// Raw input magnitude that maps to progress 1.0.
    pub scroll_distance: f32,
    /// Per-frame lerp factor in (0, 1].
    pub smoothing: f32,
    /// Per-frame velocity multiplier in (0, 1].
    pub inertia_decay: f32,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            scroll_distance: SCROLL_DISTANCE,
            smoothing: SCROLL_SMOOTHING,
            inertia_decay: INERTIA_DECAY,
        }
    }
}

impl ScrollConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.scroll_distance.is_finite() && self.scroll_distance > 0.0) {
            return Err(EngineError::InvalidScrollDistance(self.scroll_distance));
        }
        if !in_unit_open_closed(self.smoothing) {
            return Err(EngineError::InvalidSmoothing(self.smoothing));
        }
        if !in_unit_open_closed(self.inertia_decay) {
            return Err(EngineError::InvalidInertiaDecay(self.inertia_decay));
        }
        Ok(())
    }
}

/// Sign of the most recent scroll delta.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScrollDirection {
    Backward,
    #[default]
    Idle,
    Forward,
}

impl ScrollDirection {
    #[inline]
    pub fn from_delta(delta: f32) -> Self {
        if delta > 0.0 {
            Self::Forward
        } else if delta < 0.0 {
            Self::Backward
        } else {
            Self::Idle
        }
    }

    #[inline]
    pub fn signum(self) -> i8 {
        match self {
            Self::Backward => -1,
            Self::Idle => 0,
            Self::Forward => 1,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
    pub raw_target_progress: f32,
    pub smooth_progress: f32,
    /// Raw pixels per millisecond, signed.
    pub velocity: f32,
    pub direction: ScrollDirection,
}

pub struct ScrollTracker {
    config: ScrollConfig,
    state: ScrollState,
    raw_offset: f32,
    last_input_ms: f64,
}

impl ScrollTracker {
    pub fn new(config: ScrollConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            state: ScrollState::default(),
            raw_offset: 0.0,
            last_input_ms: 0.0,
        })
    }

    #[inline]
    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    #[inline]
    pub fn state(&self) -> &ScrollState {
        &self.state
    }

    #[inline]
    pub fn smooth_progress(&self) -> f32 {
        self.state.smooth_progress
    }

    /// Feed one wheel delta observed at `now_ms`, milliseconds on a monotonic
    /// clock that reads 0 when the tracker is built. The first delta measures
    /// its velocity from that origin.
    pub fn on_raw_input(&mut self, delta: f32, now_ms: f64) {
        if !delta.is_finite() {
            log::warn!("[scroll] ignoring non-finite delta {delta}");
            return;
        }
        self.raw_offset = (self.raw_offset + delta).clamp(0.0, self.config.scroll_distance);
        self.state.raw_target_progress = self.raw_offset / self.config.scroll_distance;

        let elapsed = (now_ms - self.last_input_ms).max(MIN_INPUT_ELAPSED_MS);
        self.state.velocity = (delta as f64 / elapsed) as f32;
        self.last_input_ms = now_ms;
        self.state.direction = ScrollDirection::from_delta(delta);
    }

    /// One animation frame: ease toward the raw target and bleed velocity.
    pub fn tick(&mut self) {
        let s = &mut self.state;
        s.smooth_progress += (s.raw_target_progress - s.smooth_progress) * self.config.smoothing;
        s.velocity *= self.config.inertia_decay;
    }

    /// Jump the raw target. `smooth_progress` still converges via `tick`.
    pub fn scroll_to_progress(&mut self, target: f32) {
        if target.is_nan() {
            log::warn!("[scroll] ignoring NaN progress target");
            return;
        }
        let p = target.clamp(0.0, 1.0);
        self.raw_offset = p * self.config.scroll_distance;
        self.state.raw_target_progress = p;
        log::debug!("[scroll] jump to progress {p:.3}");
    }
}
