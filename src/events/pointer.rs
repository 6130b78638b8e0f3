use super::Navigate;
use crate::constants::{NEXT_BUTTON_SELECTOR, PREV_BUTTON_SELECTOR};
use crate::dom::{self, Listener};
use crate::input;
use cyl_core::Direction;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `data-cyl-next` / `data-cyl-prev` controls anywhere inside the container.
pub fn wire_buttons(container: &web::HtmlElement, navigate: Navigate) -> Vec<Listener> {
    let next = navigate.clone();
    let mut listeners = dom::listen_clicks(container, NEXT_BUTTON_SELECTOR, move || {
        next(Direction::Next)
    });
    listeners.extend(dom::listen_clicks(
        container,
        PREV_BUTTON_SELECTOR,
        move || navigate(Direction::Previous),
    ));
    listeners
}

pub fn wire_canvas_halves(canvas: &web::HtmlCanvasElement, navigate: Navigate) -> Listener {
    let canvas_click = canvas.clone();
    Listener::new(canvas.as_ref(), "click", move |ev: web::Event| {
        let Some(mev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let width = canvas_click.client_width() as f64;
        if let Some(direction) = input::direction_for_click(mev.offset_x() as f64, width) {
            navigate(direction);
        }
    })
}
