#![cfg(target_arch = "wasm32")]
use cyl_core::{CarouselError, Direction};
use registry::Registry;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod attrs;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod loader;
mod logging;
mod options;
mod overlay;
mod registry;
mod render;
mod widget;

use widget::Widget;

thread_local! {
    // every live widget; widgets never share state
    static MOUNTED: RefCell<Registry<Widget>> = RefCell::new(Registry::default());
}

fn mounted_on(element: &web::Element) -> Option<Widget> {
    MOUNTED.with(|m| {
        m.borrow()
            .find(|w| w.container().is_same_node(Some(element.as_ref())))
            .cloned()
    })
}

fn mount(element: web::HtmlElement, options: &JsValue) -> anyhow::Result<Widget> {
    if mounted_on(&element).is_some() {
        return Err(CarouselError::invalid("element already hosts a carousel").into());
    }
    let config = options::config_for(&element, options);
    logging::choose_level_once(config.debug_overlay);
    let id = MOUNTED.with(|m| m.borrow_mut().next_id());
    let widget = Widget::mount(id, element, config)?;
    MOUNTED.with(|m| m.borrow_mut().insert(id, widget.clone()));
    Ok(widget)
}

fn mount_all(document: &web::Document) {
    let Ok(nodes) = document.query_selector_all(constants::AUTO_MOUNT_SELECTOR) else {
        return;
    };
    for i in 0..nodes.length() {
        let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<web::HtmlElement>().ok()) else {
            continue;
        };
        if mounted_on(&el).is_some() {
            continue;
        }
        if let Err(e) = mount(el.clone(), &JsValue::UNDEFINED) {
            log::error!("[cyl] auto-mount {} failed: {:#}", i, e);
            overlay::set_status(&el, overlay::Status::Failed);
        }
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("cyl-web starting");

    if let Some(document) = dom::window_document() {
        mount_all(&document);
    }
    Ok(())
}

/// A carousel bound to one container element.
#[wasm_bindgen]
pub struct Cyl {
    widget: Widget,
}

#[wasm_bindgen]
impl Cyl {
    #[wasm_bindgen(constructor)]
    pub fn new(element: web::HtmlElement, options: JsValue) -> Result<Cyl, JsValue> {
        mount(element, &options)
            .map(|widget| Cyl { widget })
            .map_err(|e| JsValue::from_str(&format!("{:#}", e)))
    }

    /// The widget auto-mounted on `element`, if any.
    #[wasm_bindgen(js_name = forElement)]
    pub fn for_element(element: &web::Element) -> Option<Cyl> {
        mounted_on(element).map(|widget| Cyl { widget })
    }

    pub fn next(&self) -> bool {
        self.widget.navigate(Direction::Next)
    }

    pub fn prev(&self) -> bool {
        self.widget.navigate(Direction::Previous)
    }

    #[wasm_bindgen(js_name = currentIndex)]
    pub fn current_index(&self) -> usize {
        self.widget.current_index()
    }

    #[wasm_bindgen(js_name = isTransitioning)]
    pub fn is_transitioning(&self) -> bool {
        self.widget.is_transitioning()
    }

    pub fn caption(&self) -> Option<String> {
        self.widget.caption()
    }

    /// `"loading"`, `"ready"` or `"failed"`.
    pub fn status(&self) -> String {
        format!("{:?}", self.widget.status()).to_lowercase()
    }

    pub fn destroy(&self) {
        self.widget.destroy();
        let id = self.widget.id();
        MOUNTED.with(|m| m.borrow_mut().remove(id));
    }
}
