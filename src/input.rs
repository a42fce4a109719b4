// Pure input helpers shared by the DOM listeners. No web-sys here so the
// host-side tests can include this file directly.

use folio_core::NavCommand;

/// WheelEvent.deltaMode values.
pub const DOM_DELTA_PIXEL: u32 = 0;
pub const DOM_DELTA_LINE: u32 = 1;
pub const DOM_DELTA_PAGE: u32 = 2;

/// Convert a wheel delta to pixels and cap a single event's contribution.
#[inline]
pub fn normalize_wheel_delta(
    delta: f64,
    delta_mode: u32,
    line_px: f32,
    page_px: f32,
    clamp_px: f32,
) -> f32 {
    let px = match delta_mode {
        DOM_DELTA_PIXEL => delta as f32,
        DOM_DELTA_LINE => delta as f32 * line_px,
        DOM_DELTA_PAGE => delta as f32 * page_px,
        _ => delta as f32,
    };
    if px.is_finite() {
        px.clamp(-clamp_px, clamp_px)
    } else {
        0.0
    }
}

/// Keyboard map for section navigation.
#[inline]
pub fn nav_command_for_key(key: &str) -> Option<NavCommand> {
    match key {
        "ArrowDown" | "PageDown" | " " => Some(NavCommand::Next),
        "ArrowUp" | "PageUp" => Some(NavCommand::Previous),
        "Home" => Some(NavCommand::First),
        "End" => Some(NavCommand::Last),
        _ => match key.as_bytes() {
            [d @ b'1'..=b'9'] => Some(NavCommand::Section((d - b'1') as usize)),
            _ => None,
        },
    }
}
