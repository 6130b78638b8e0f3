mod keyboard;
mod pointer;

use crate::dom::Listener;
use cyl_core::Direction;
use std::rc::Rc;
use web_sys as web;

/// Shared navigation entry point handed to every input source.
pub type Navigate = Rc<dyn Fn(Direction)>;

/// Attach every input source for one widget. Dropping the returned listeners
/// detaches them.
pub fn wire_input_handlers(
    container: &web::HtmlElement,
    canvas: &web::HtmlCanvasElement,
    navigate: Navigate,
) -> Vec<Listener> {
    let mut listeners = pointer::wire_buttons(container, navigate.clone());
    listeners.push(pointer::wire_canvas_halves(canvas, navigate.clone()));
    listeners.push(keyboard::wire_arrow_keys(container, navigate));
    log::debug!("[input] {} listener(s) attached", listeners.len());
    listeners
}
