use super::Navigate;
use crate::dom::Listener;
use crate::input;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Arrow keys while the container (or anything inside it) has focus.
pub fn wire_arrow_keys(container: &web::HtmlElement, navigate: Navigate) -> Listener {
    // a container without tabindex can never receive key events
    if !container.has_attribute("tabindex") {
        container.set_tab_index(0);
    }
    Listener::new(container.as_ref(), "keydown", move |ev: web::Event| {
        let Some(kev) = ev.dyn_ref::<web::KeyboardEvent>() else {
            return;
        };
        if kev.alt_key() || kev.ctrl_key() || kev.meta_key() {
            return;
        }
        if let Some(direction) = input::direction_for_key(&kev.key()) {
            ev.prevent_default();
            navigate(direction);
        }
    })
}
