//! Section anchors along the travel axis and their 3D placements.
//!
//! Anchors are static content configuration. The engine only ever reads
//! them; placements are the per-session (x, y, z) positions the gravity
//! model works with, and can be re-scattered for visual variety.

use crate::constants::{PLACEMENT_JITTER_X, PLACEMENT_JITTER_Y, PLACEMENT_LATERAL};
use glam::Vec3;
use rand::prelude::*;

/// One content section fixed on the travel axis.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionAnchor {
    pub id: String,
    /// Display name. Never used in computation.
    pub label: String,
    /// More negative is further along the journey.
    pub z_position: f32,
}

impl SectionAnchor {
    pub fn new(id: impl Into<String>, label: impl Into<String>, z_position: f32) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            z_position,
        }
    }
}

/// The six portfolio sections, 15 units apart from 0 down to -75.
pub fn default_anchors() -> Vec<SectionAnchor> {
    [
        ("home", "Home"),
        ("about", "About"),
        ("projects", "Projects"),
        ("experience", "Experience"),
        ("skills", "Skills"),
        ("contact", "Contact"),
    ]
    .iter()
    .enumerate()
    .map(|(i, (id, label))| SectionAnchor::new(*id, *label, -15.0 * i as f32))
    .collect()
}

/// Index of the anchor with `id`, in list order.
#[inline]
pub fn anchor_index(anchors: &[SectionAnchor], id: &str) -> Option<usize> {
    anchors.iter().position(|a| a.id == id)
}

/// World-space position of an anchor's panel.
#[derive(Clone, Debug, PartialEq)]
pub struct Placement {
    pub id: String,
    pub position: Vec3,
}

/// Place every anchor beside the travel axis, alternating sides, with seeded
/// jitter. `z` always equals the anchor's `z_position`.
pub fn scatter_placements(anchors: &[SectionAnchor], seed: u64) -> Vec<Placement> {
    let mut rng = StdRng::seed_from_u64(seed);
    anchors
        .iter()
        .enumerate()
        .map(|(i, a)| {
            let side = if i % 2 == 0 { -1.0 } else { 1.0 };
            let x = side * (PLACEMENT_LATERAL + rng.gen::<f32>() * PLACEMENT_JITTER_X);
            let y = (rng.gen::<f32>() * 2.0 - 1.0) * PLACEMENT_JITTER_Y;
            Placement {
                id: a.id.clone(),
                position: Vec3::new(x, y, a.z_position),
            }
        })
        .collect()
}

#[inline]
pub fn placement_position(placements: &[Placement], id: &str) -> Option<Vec3> {
    placements.iter().find(|p| p.id == id).map(|p| p.position)
}
