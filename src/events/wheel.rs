use crate::constants::{WHEEL_DELTA_CLAMP_PX, WHEEL_LINE_PX, WHEEL_PAGE_FALLBACK_PX};
use crate::dom::{self, Listener};
use crate::input;
use folio_core::SpatialEngine;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Capture wheel input on the window and feed it to the tracker. Native page
/// scrolling is suppressed, so the listener must be non-passive.
pub fn wire_wheel(
    window: &web::Window,
    engine: Rc<RefCell<SpatialEngine>>,
    epoch: Instant,
) -> anyhow::Result<Listener> {
    let page_px = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .map(|h| h as f32)
        .filter(|h| *h > 0.0)
        .unwrap_or(WHEEL_PAGE_FALLBACK_PX);

    dom::listen(window, "wheel", Some(false), move |ev: web::WheelEvent| {
        ev.prevent_default();
        let delta = input::normalize_wheel_delta(
            ev.delta_y(),
            ev.delta_mode(),
            WHEEL_LINE_PX,
            page_px,
            WHEEL_DELTA_CLAMP_PX,
        );
        let now_ms = epoch.elapsed().as_secs_f64() * 1000.0;
        engine.borrow_mut().on_raw_input(delta, now_ms);
    })
}
