// DOM binding constants for the web frontend.

// Markup contract
pub const SECTION_ATTR: &str = "data-section"; // panels: data-section="<anchor id>"
pub const NAV_TARGET_ATTR: &str = "data-nav-target"; // buttons: data-nav-target="<anchor id>"
pub const ACTIVE_CLASS: &str = "is-active";
pub const HOVERED_CLASS: &str = "is-hovered";

// WheelEvent.deltaMode scaling to pixels
pub const WHEEL_LINE_PX: f32 = 16.0;
pub const WHEEL_PAGE_FALLBACK_PX: f32 = 800.0; // used when the viewport height is unknown
pub const WHEEL_DELTA_CLAMP_PX: f32 = 600.0; // single-event cap against runaway trackpads

// CSS custom properties written on the mount root every frame
pub const CSS_PROGRESS: &str = "--progress";
pub const CSS_CAMERA_Z: &str = "--camera-z";
pub const CSS_FOCUS_INTENSITY: &str = "--focus-intensity";
pub const CSS_CAMERA_OFFSET_X: &str = "--camera-offset-x";
pub const CSS_CAMERA_OFFSET_Y: &str = "--camera-offset-y";
pub const CSS_SCROLL_VELOCITY: &str = "--scroll-velocity";

// Screen pixels per world unit of section displacement
pub const DISPLACEMENT_PX_PER_UNIT: f32 = 40.0;
