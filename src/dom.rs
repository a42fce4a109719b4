use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// An attached event listener. Dropping it detaches the callback, so a
/// handle that owns its listeners tears them all down with it.
pub struct Listener {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Drop for Listener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}

/// Attach `handler` for events of type `E`. Events that fail the cast are
/// dropped. `passive: Some(false)` is required for handlers that call
/// `prevent_default` on wheel/touch input.
pub fn listen<E>(
    target: &web::EventTarget,
    kind: &'static str,
    passive: Option<bool>,
    mut handler: impl FnMut(E) + 'static,
) -> anyhow::Result<Listener>
where
    E: JsCast + 'static,
{
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        if let Ok(ev) = ev.dyn_into::<E>() {
            handler(ev);
        }
    }) as Box<dyn FnMut(web::Event)>);
    let callback = closure.as_ref().unchecked_ref();
    let attached = match passive {
        Some(p) => {
            let opts = web::AddEventListenerOptions::new();
            opts.set_passive(p);
            target.add_event_listener_with_callback_and_add_event_listener_options(
                kind, callback, &opts,
            )
        }
        None => target.add_event_listener_with_callback(kind, callback),
    };
    attached.map_err(|e| anyhow::anyhow!("add {kind} listener: {:?}", e))?;
    Ok(Listener {
        target: target.clone(),
        kind,
        closure,
    })
}

pub fn query_all(root: &web::Element, selector: &str) -> Vec<web::Element> {
    let Ok(list) = root.query_selector_all(selector) else {
        log::warn!("[dom] bad selector {selector}");
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .collect()
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

#[inline]
pub fn toggle_class(el: &web::Element, class: &str, on: bool) {
    _ = el.class_list().toggle_with_force(class, on);
}
