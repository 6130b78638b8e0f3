use crate::constants::{
    CANVAS_CLASS, CAPTION_SELECTOR, FIGURE_SELECTOR, IMAGE_SELECTOR, MIN_CANVAS_PX,
};
use cyl_core::{CarouselError, FigureSource};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Read every `figure` under `container` in document order.
///
/// Each figure needs an `img` and a `figcaption`; anything else is malformed
/// markup and stops the widget before any image is requested.
pub fn scrape_figures(container: &web::Element) -> Result<Vec<FigureSource>, CarouselError> {
    let figures = container
        .query_selector_all(FIGURE_SELECTOR)
        .map_err(|e| CarouselError::invalid(format!("figure query failed: {e:?}")))?;
    let mut out = Vec::with_capacity(figures.length() as usize);
    for i in 0..figures.length() {
        let Some(fig) = figures.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) else {
            continue;
        };
        let img = fig
            .query_selector(IMAGE_SELECTOR)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<web::HtmlImageElement>().ok())
            .ok_or_else(|| CarouselError::invalid(format!("figure {i} has no <img>")))?;
        let caption = fig
            .query_selector(CAPTION_SELECTOR)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
            .ok_or_else(|| CarouselError::invalid(format!("figure {i} has no <figcaption>")))?;
        out.push(FigureSource::new(img.src(), caption.inner_text()));
    }
    if out.is_empty() {
        return Err(CarouselError::invalid("container holds no <figure> elements"));
    }
    Ok(out)
}

/// Create the render canvas as the last child of `container`.
pub fn create_canvas(
    document: &web::Document,
    container: &web::Element,
) -> anyhow::Result<web::HtmlCanvasElement> {
    let canvas = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    canvas.set_class_name(CANVAS_CLASS);
    let style = canvas.style();
    _ = style.set_property("display", "block");
    _ = style.set_property("width", "100%");
    _ = style.set_property("height", "100%");
    container
        .append_child(&canvas)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(canvas)
}

/// Keep the canvas backing store at CSS size times devicePixelRatio.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        let (w_px, h_px) = (w_px.max(MIN_CANVAS_PX), h_px.max(MIN_CANVAS_PX));
        if canvas.width() != w_px {
            canvas.set_width(w_px);
        }
        if canvas.height() != h_px {
            canvas.set_height(h_px);
        }
    }
}

/// An event listener that stays attached until dropped.
pub struct Listener {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    pub fn new(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Self {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        Self {
            target: target.clone(),
            event,
            closure,
        }
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

/// Listen for clicks on every descendant of `container` matching `selector`.
pub fn listen_clicks(
    container: &web::Element,
    selector: &str,
    handler: impl Fn() + Clone + 'static,
) -> Vec<Listener> {
    let Ok(nodes) = container.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .map(|node| {
            let handler = handler.clone();
            Listener::new(node.as_ref(), "click", move |ev: web::Event| {
                ev.prevent_default();
                handler();
            })
        })
        .collect()
}
