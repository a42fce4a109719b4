// Mount-root `data-*` overrides. Parsing is pure so host tests can include
// this file; the DOM lookups live in lib.rs.

use folio_core::EngineConfig;

pub const ATTR_SCROLL_DISTANCE: &str = "data-scroll-distance";
pub const ATTR_SCROLL_SMOOTHING: &str = "data-scroll-smoothing";
pub const ATTR_INERTIA_DECAY: &str = "data-inertia-decay";
pub const ATTR_FOCUS_THRESHOLD: &str = "data-focus-threshold";
pub const ATTR_GRAVITY_RANGE: &str = "data-gravity-range";
pub const ATTR_LAYOUT_SEED: &str = "data-layout-seed";

/// Overrides read from markup; `None` keeps the engine default.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ConfigOverrides {
    pub scroll_distance: Option<f32>,
    pub scroll_smoothing: Option<f32>,
    pub inertia_decay: Option<f32>,
    pub focus_threshold: Option<f32>,
    pub gravity_range: Option<f32>,
    pub layout_seed: Option<u64>,
}

impl ConfigOverrides {
    /// Build from an attribute lookup. Unparsable values are reported through
    /// `on_invalid(attr, raw)` and skipped.
    pub fn from_lookup(
        mut get: impl FnMut(&str) -> Option<String>,
        mut on_invalid: impl FnMut(&str, &str),
    ) -> Self {
        let mut f32_attr = |name: &str| -> Option<f32> {
            let raw = get(name)?;
            match parse_f32(&raw) {
                Some(v) => Some(v),
                None => {
                    on_invalid(name, &raw);
                    None
                }
            }
        };
        let scroll_distance = f32_attr(ATTR_SCROLL_DISTANCE);
        let scroll_smoothing = f32_attr(ATTR_SCROLL_SMOOTHING);
        let inertia_decay = f32_attr(ATTR_INERTIA_DECAY);
        let focus_threshold = f32_attr(ATTR_FOCUS_THRESHOLD);
        let gravity_range = f32_attr(ATTR_GRAVITY_RANGE);
        let layout_seed = get(ATTR_LAYOUT_SEED).and_then(|raw| match raw.trim().parse() {
            Ok(v) => Some(v),
            Err(_) => {
                on_invalid(ATTR_LAYOUT_SEED, &raw);
                None
            }
        });
        Self {
            scroll_distance,
            scroll_smoothing,
            inertia_decay,
            focus_threshold,
            gravity_range,
            layout_seed,
        }
    }
}

impl ConfigOverrides {
    /// Merge into `config`. The result still has to pass
    /// `EngineConfig::validate`.
    pub fn apply(&self, config: &mut EngineConfig) {
        if let Some(v) = self.scroll_distance {
            config.scroll.scroll_distance = v;
        }
        if let Some(v) = self.scroll_smoothing {
            config.scroll.smoothing = v;
        }
        if let Some(v) = self.inertia_decay {
            config.scroll.inertia_decay = v;
        }
        if let Some(v) = self.focus_threshold {
            config.focus.threshold = v;
        }
        if let Some(v) = self.gravity_range {
            config.gravity.gravity_range = v;
        }
        if let Some(v) = self.layout_seed {
            config.layout_seed = v;
        }
    }
}

/// Finite floats only; range checks are left to engine validation.
#[inline]
pub fn parse_f32(raw: &str) -> Option<f32> {
    raw.trim().parse::<f32>().ok().filter(|v| v.is_finite())
}
