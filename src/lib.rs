#![cfg(target_arch = "wasm32")]
use crate::config::ConfigOverrides;
use crate::constants::SECTION_ATTR;
use folio_core::{default_anchors, EngineConfig, SectionAnchor, SpatialEngine};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod config;
mod constants;
mod dom;
mod events;
mod frame;
mod input;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web loaded");
    Ok(())
}

/// A mounted portfolio scene. Dropping it (or calling `unmount`) stops the
/// frame loop and detaches every listener.
#[wasm_bindgen]
pub struct PortfolioHandle {
    engine: Rc<RefCell<SpatialEngine>>,
    frame_loop: Option<frame::FrameLoop>,
    listeners: Vec<dom::Listener>,
}

#[wasm_bindgen]
impl PortfolioHandle {
    pub fn unmount(&mut self) {
        if let Some(l) = self.frame_loop.take() {
            l.stop();
        }
        self.listeners.clear();
        self.engine.borrow_mut().stop();
        log::info!("folio-web unmounted");
    }

    /// Programmatic navigation, e.g. from a router.
    #[wasm_bindgen(js_name = scrollToSection)]
    pub fn scroll_to_section(&self, id: &str) -> bool {
        self.engine.borrow_mut().scroll_to_section(id)
    }

    #[wasm_bindgen(js_name = scrollToProgress)]
    pub fn scroll_to_progress(&self, progress: f32) {
        self.engine.borrow_mut().scroll_to_progress(progress);
    }

    /// Re-scatter section placements with a new seed.
    pub fn reshuffle(&self, seed: u32) {
        self.engine.borrow_mut().reshuffle(seed as u64);
    }

    #[wasm_bindgen(getter)]
    pub fn progress(&self) -> f32 {
        self.engine.borrow().output().scroll.smooth_progress
    }

    #[wasm_bindgen(getter, js_name = activeSection)]
    pub fn active_section(&self) -> Option<String> {
        self.engine.borrow().output().focus.active_section_id.clone()
    }
}

#[wasm_bindgen]
pub fn mount(root_id: &str) -> Result<PortfolioHandle, JsValue> {
    init(root_id).map_err(|e| {
        log::error!("mount error: {:?}", e);
        JsValue::from_str(&e.to_string())
    })
}

fn read_overrides(root: &web::Element) -> ConfigOverrides {
    ConfigOverrides::from_lookup(
        |name| root.get_attribute(name),
        |name, raw| log::warn!("[config] ignoring {name}={raw:?}"),
    )
}

/// Anchors come from the built-in section list, keeping only sections the
/// markup actually renders. Falls back to every built-in section when the
/// markup declares none.
fn anchors_for(root: &web::Element) -> Vec<SectionAnchor> {
    let present: Vec<String> = dom::query_all(root, &format!("[{SECTION_ATTR}]"))
        .iter()
        .filter_map(|el| el.get_attribute(SECTION_ATTR))
        .collect();
    let all = default_anchors();
    if present.is_empty() {
        return all;
    }
    all.into_iter().filter(|a| present.contains(&a.id)).collect()
}

fn panel_elements(root: &web::Element, anchors: &[SectionAnchor]) -> Vec<Option<web::HtmlElement>> {
    anchors
        .iter()
        .map(|a| {
            root.query_selector(&format!("[{SECTION_ATTR}=\"{}\"]", a.id))
                .ok()
                .flatten()
                .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
        })
        .collect()
}

fn init(root_id: &str) -> anyhow::Result<PortfolioHandle> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let root: web::HtmlElement = document
        .get_element_by_id(root_id)
        .ok_or_else(|| anyhow::anyhow!("missing #{root_id}"))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let mut config = EngineConfig::default();
    read_overrides(&root).apply(&mut config);
    let anchors = anchors_for(&root);
    let panels = panel_elements(&root, &anchors);

    let mut engine = SpatialEngine::new(config, anchors)?;
    engine.start();
    let engine = Rc::new(RefCell::new(engine));
    let epoch = Instant::now();

    let mut listeners = Vec::new();
    listeners.push(events::wire_wheel(&window, engine.clone(), epoch)?);
    listeners.push(events::wire_keyboard_nav(&window, engine.clone())?);
    listeners.extend(events::wire_section_hover(&root, &engine)?);
    listeners.extend(events::wire_nav_buttons(&root, &engine)?);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        engine: engine.clone(),
        root,
        panels,
        last_active: None,
    }));
    let frame_loop = frame::start_loop(frame_ctx);

    Ok(PortfolioHandle {
        engine,
        frame_loop: Some(frame_loop),
        listeners,
    })
}
