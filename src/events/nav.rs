use crate::constants::NAV_TARGET_ATTR;
use crate::dom::{self, Listener};
use crate::input;
use folio_core::{NavCommand, SpatialEngine};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub fn handle_nav_key(ev: &web::KeyboardEvent, engine: &Rc<RefCell<SpatialEngine>>) {
    if ev.alt_key() || ev.ctrl_key() || ev.meta_key() {
        return;
    }
    let Some(command) = input::nav_command_for_key(&ev.key()) else {
        return;
    };
    if engine.borrow_mut().navigate(command) {
        ev.prevent_default();
    } else if let NavCommand::Section(i) = command {
        log::debug!("[keys] no section {}", i + 1);
    }
}

pub fn wire_keyboard_nav(
    window: &web::Window,
    engine: Rc<RefCell<SpatialEngine>>,
) -> anyhow::Result<Listener> {
    dom::listen(window, "keydown", None, move |ev: web::KeyboardEvent| {
        handle_nav_key(&ev, &engine);
    })
}

/// Clicks on `[data-nav-target]` jump to the named section.
pub fn wire_nav_buttons(
    root: &web::Element,
    engine: &Rc<RefCell<SpatialEngine>>,
) -> anyhow::Result<Vec<Listener>> {
    let mut listeners = Vec::new();
    for el in dom::query_all(root, &format!("[{NAV_TARGET_ATTR}]")) {
        let Some(target) = el.get_attribute(NAV_TARGET_ATTR) else {
            continue;
        };
        let engine = engine.clone();
        listeners.push(dom::listen(&el, "click", None, move |ev: web::MouseEvent| {
            if engine.borrow_mut().scroll_to_section(&target) {
                ev.prevent_default();
            }
        })?);
    }
    Ok(listeners)
}
