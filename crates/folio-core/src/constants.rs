// Shared tuning constants used by both web and native frontends.

// Scroll progress
pub const SCROLL_DISTANCE: f32 = 4000.0; // raw wheel pixels that map to progress 1.0
pub const SCROLL_SMOOTHING: f32 = 0.08; // per-frame lerp toward the raw target
pub const INERTIA_DECAY: f32 = 0.92; // per-frame velocity falloff
pub const MIN_INPUT_ELAPSED_MS: f64 = 1.0; // floor for velocity time step

// Travel axis
pub const CAMERA_START_Z: f32 = 8.0;
pub const CAMERA_END_Z: f32 = -75.0;
pub const CAMERA_TRAIL: f32 = 6.0; // eye sits this far behind the travel position
pub const CAMERA_LOOK_AHEAD: f32 = 10.0;

// Focus
pub const FOCUS_THRESHOLD: f32 = 8.0; // gaussian sigma in world units

// Gravity / hover
pub const MAX_CAMERA_OFFSET: f32 = 0.6;
pub const MAX_SECTION_DISPLACEMENT: f32 = 0.8;
pub const GRAVITY_SMOOTHING: f32 = 0.08;
pub const GRAVITY_RANGE: f32 = 20.0;
pub const REPULSION_DAMPING: f32 = 0.3; // keeps the push subtle
pub const HOVER_CAMERA_PULL: f32 = 0.1; // fraction of the hovered (x, y) used as pull
pub const BASE_FOCUS_INTENSITY: f32 = 1.0;
pub const HOVERED_FOCUS_INTENSITY: f32 = 1.5;

// Panel composition
pub const PANEL_MIN_SCALE: f32 = 0.8;
pub const PANEL_HIDE_BELOW: f32 = 0.02; // weights under this render fully transparent
pub const PANEL_HOVER_SCALE_BOOST: f32 = 0.1; // extra scale per unit of intensity above 1.0

// Placement layout
pub const PLACEMENT_LATERAL: f32 = 3.0; // base distance from the travel axis
pub const PLACEMENT_JITTER_X: f32 = 1.5;
pub const PLACEMENT_JITTER_Y: f32 = 1.2;
pub const DEFAULT_LAYOUT_SEED: u64 = 42;

// Picking
pub const PICK_SPHERE_RADIUS: f32 = 2.0;
pub const CAMERA_FOVY_RADIANS: f32 = std::f32::consts::FRAC_PI_4;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 200.0;
