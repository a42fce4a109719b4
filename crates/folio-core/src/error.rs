use thiserror::Error;

/// Construction-time configuration failures.
///
/// Steady-state operations never produce these; degenerate runtime input is
/// handled with documented fallbacks instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error("scroll distance must be a finite value > 0, got {0}")]
    InvalidScrollDistance(f32),
    #[error("smoothing must be in (0, 1], got {0}")]
    InvalidSmoothing(f32),
    #[error("inertia decay must be in (0, 1], got {0}")]
    InvalidInertiaDecay(f32),
    #[error("focus threshold must be a finite value > 0, got {0}")]
    InvalidFocusThreshold(f32),
    #[error("gravity setting `{field}` is out of range: {value}")]
    InvalidGravity { field: &'static str, value: f32 },
    #[error("camera path needs distinct finite ends, got start={start} end={end}")]
    InvalidCameraPath { start: f32, end: f32 },
}

pub type Result<T, E = EngineError> = std::result::Result<T, E>;

#[inline]
pub(crate) fn in_unit_open_closed(v: f32) -> bool {
    v.is_finite() && v > 0.0 && v <= 1.0
}
