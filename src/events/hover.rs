use crate::constants::SECTION_ATTR;
use crate::dom::{self, Listener};
use folio_core::SpatialEngine;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Pointer enter/leave on every `[data-section]` panel under `root`.
pub fn wire_section_hover(
    root: &web::Element,
    engine: &Rc<RefCell<SpatialEngine>>,
) -> anyhow::Result<Vec<Listener>> {
    let mut listeners = Vec::new();
    for el in dom::query_all(root, &format!("[{SECTION_ATTR}]")) {
        let Some(id) = el.get_attribute(SECTION_ATTR) else {
            continue;
        };
        if !engine.borrow().anchors().iter().any(|a| a.id == id) {
            log::warn!("[hover] panel {id} has no matching section");
            continue;
        }

        let engine_enter = engine.clone();
        listeners.push(dom::listen(
            &el,
            "pointerenter",
            None,
            move |_: web::PointerEvent| {
                engine_enter.borrow_mut().on_section_hover(Some(id.as_str()));
            },
        )?);

        let engine_leave = engine.clone();
        listeners.push(dom::listen(
            &el,
            "pointerleave",
            None,
            move |_: web::PointerEvent| {
                engine_leave.borrow_mut().on_section_hover(None);
            },
        )?);
    }
    log::info!("[hover] wired {} panels", listeners.len() / 2);
    Ok(listeners)
}
