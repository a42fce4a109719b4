use crate::constants::{
    ACTIVE_CLASS, CSS_CAMERA_OFFSET_X, CSS_CAMERA_OFFSET_Y, CSS_CAMERA_Z, CSS_FOCUS_INTENSITY,
    CSS_PROGRESS, CSS_SCROLL_VELOCITY, DISPLACEMENT_PX_PER_UNIT, HOVERED_CLASS,
};
use crate::dom;
use folio_core::{FrameOutput, PanelStyle, SpatialEngine};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub engine: Rc<RefCell<SpatialEngine>>,
    pub root: web::HtmlElement,
    /// Panel element per anchor, in anchor order; `None` when the markup
    /// has no panel for that section.
    pub panels: Vec<Option<web::HtmlElement>>,
    pub last_active: Option<usize>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let mut eng = self.engine.borrow_mut();
        let out = eng.frame();
        self.write_root_vars(out);
        for (style, el) in out.panels.iter().zip(&self.panels) {
            if let Some(el) = el {
                apply_panel_style(el, style);
            }
        }
        if out.focus.active_index != self.last_active {
            if let Some(id) = &out.focus.active_section_id {
                log::info!("[frame] active section {id}");
            }
            self.last_active = out.focus.active_index;
        }
    }

    fn write_root_vars(&self, out: &FrameOutput) {
        let offset = out.gravity.camera_offset;
        let vars = [
            (CSS_PROGRESS, out.scroll.smooth_progress),
            (CSS_CAMERA_Z, out.camera_z),
            (CSS_FOCUS_INTENSITY, out.gravity.focus_intensity),
            (CSS_CAMERA_OFFSET_X, offset.x),
            (CSS_CAMERA_OFFSET_Y, offset.y),
            (CSS_SCROLL_VELOCITY, out.scroll.velocity),
        ];
        for (name, value) in vars {
            dom::set_style(&self.root, name, &format!("{value:.4}"));
        }
    }
}

fn apply_panel_style(el: &web::HtmlElement, style: &PanelStyle) {
    let dx = style.offset.x * DISPLACEMENT_PX_PER_UNIT;
    // Screen y grows downward.
    let dy = -style.offset.y * DISPLACEMENT_PX_PER_UNIT;
    dom::set_style(el, "opacity", &format!("{:.3}", style.opacity));
    dom::set_style(
        el,
        "transform",
        &format!("translate3d({dx:.2}px, {dy:.2}px, 0) scale({:.4})", style.scale),
    );
    dom::set_style(
        el,
        "visibility",
        if style.visible { "visible" } else { "hidden" },
    );
    dom::set_style(
        el,
        "pointer-events",
        if style.visible { "auto" } else { "none" },
    );
    dom::toggle_class(el, ACTIVE_CLASS, style.active);
    dom::toggle_class(el, HOVERED_CLASS, style.hovered);
}

/// Owns the self-rescheduling animation-frame callback. `stop` cancels the
/// pending frame and drops the callback; nothing runs after it returns.
pub struct FrameLoop {
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    pending: Rc<Cell<Option<i32>>>,
    stopped: Rc<Cell<bool>>,
}

impl FrameLoop {
    pub fn stop(&self) {
        if self.stopped.replace(true) {
            return;
        }
        if let (Some(id), Some(w)) = (self.pending.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        // Breaks the closure's reference to itself.
        drop(self.tick.borrow_mut().take());
        log::debug!("[frame] loop stopped");
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) -> Option<i32> {
    let w = web::window()?;
    let guard = tick.borrow();
    let closure = guard.as_ref()?;
    w.request_animation_frame(closure.as_ref().unchecked_ref()).ok()
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> FrameLoop {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let pending = Rc::new(Cell::new(None::<i32>));
    let stopped = Rc::new(Cell::new(false));

    let tick_clone = tick.clone();
    let pending_clone = pending.clone();
    let stopped_clone = stopped.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        pending_clone.set(None);
        if stopped_clone.get() {
            return;
        }
        frame_ctx.borrow_mut().frame();
        pending_clone.set(request_frame(&tick_clone));
    }) as Box<dyn FnMut()>));
    pending.set(request_frame(&tick));

    FrameLoop {
        tick,
        pending,
        stopped,
    }
}
