//! Gaussian focus falloff over section anchors.

use crate::anchor::SectionAnchor;
use crate::constants::FOCUS_THRESHOLD;
use crate::error::{EngineError, Result};
use fnv::FnvHashMap;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FocusConfig {
    /// Standard deviation of the falloff, in world units.
    pub threshold: f32,
}

impl Default for FocusConfig {
    fn default() -> Self {
        Self {
            threshold: FOCUS_THRESHOLD,
        }
    }
}

impl FocusConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.threshold.is_finite() && self.threshold > 0.0) {
            return Err(EngineError::InvalidFocusThreshold(self.threshold));
        }
        Ok(())
    }
}

/// Per-section attention for one camera position.
///
/// For an empty anchor list both maps are empty and there is no active
/// section.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FocusResult {
    /// Kept in `f64`, and floored at the smallest positive value, so a
    /// narrow threshold over a long path never rounds a weight to zero.
    pub section_weights: FnvHashMap<String, f64>,
    pub section_distances: FnvHashMap<String, f32>,
    pub active_section_id: Option<String>,
    pub active_index: Option<usize>,
}

impl FocusResult {
    #[inline]
    pub fn weight(&self, id: &str) -> Option<f64> {
        self.section_weights.get(id).copied()
    }

    #[inline]
    pub fn distance(&self, id: &str) -> Option<f32> {
        self.section_distances.get(id).copied()
    }
}

/// `exp(-d² / 2σ²)`; exactly 1.0 at `d == 0`, never below
/// `f64::MIN_POSITIVE`.
#[inline]
pub fn gaussian_weight(distance: f32, threshold: f32) -> f64 {
    let (d, sigma) = (distance as f64, threshold as f64);
    (-(d * d) / (2.0 * sigma * sigma)).exp().max(f64::MIN_POSITIVE)
}

/// Compute weights, distances and the nearest anchor. Ties on distance go
/// to the anchor listed first.
pub fn compute_focus(
    anchors: &[SectionAnchor],
    camera_z: f32,
    focus_threshold: f32,
) -> Result<FocusResult> {
    FocusConfig {
        threshold: focus_threshold,
    }
    .validate()?;
    Ok(focus_unchecked(anchors, camera_z, focus_threshold))
}

fn focus_unchecked(anchors: &[SectionAnchor], camera_z: f32, threshold: f32) -> FocusResult {
    let mut result = FocusResult::default();
    let mut best: Option<(usize, f32)> = None;
    for (i, a) in anchors.iter().enumerate() {
        let distance = (camera_z - a.z_position).abs();
        result
            .section_weights
            .insert(a.id.clone(), gaussian_weight(distance, threshold));
        result.section_distances.insert(a.id.clone(), distance);
        match best {
            Some((_, bd)) if distance >= bd => {}
            _ => best = Some((i, distance)),
        }
    }
    if let Some((i, _)) = best {
        result.active_index = Some(i);
        result.active_section_id = Some(anchors[i].id.clone());
    }
    result
}

/// Focus detector with a threshold validated once up front.
#[derive(Clone, Copy, Debug)]
pub struct FocusDetector {
    config: FocusConfig,
}

impl FocusDetector {
    pub fn new(config: FocusConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    #[inline]
    pub fn threshold(&self) -> f32 {
        self.config.threshold
    }

    pub fn compute(&self, anchors: &[SectionAnchor], camera_z: f32) -> FocusResult {
        focus_unchecked(anchors, camera_z, self.config.threshold)
    }
}
