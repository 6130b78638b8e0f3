//! Image loading and the single join that gates layout.
//!
//! Every planned source becomes one `HtmlImageElement` whose `decode()`
//! promise settles independently. The promises are joined with `Promise.all`
//! and raced against the first decode error and a timeout, so the caller sees
//! exactly one outcome for the whole set no matter which image finishes last.

use crate::constants::{CROSS_ORIGIN, LOAD_TIMEOUT_MARKER};
use cyl_core::{CarouselError, ImageDims, SourceSet};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

pub struct LoadedImages {
    pub elements: Vec<web::HtmlImageElement>,
    pub dims: Vec<ImageDims>,
}

/// Load every source and wait for all of them, the first failure, or
/// `timeout_ms`, whichever comes first.
///
/// `timer` holds the pending timeout handle while waiting so a teardown can
/// clear it.
pub async fn load_images(
    window: &web::Window,
    sources: &SourceSet,
    timeout_ms: u32,
    timer: Rc<Cell<Option<i32>>>,
) -> Result<LoadedImages, CarouselError> {
    let mut fail_with: Option<js_sys::Function> = None;
    let first_failure = js_sys::Promise::new(&mut |_resolve, reject| fail_with = Some(reject));
    let fail_with = fail_with.ok_or_else(|| join_failure("promise executor did not run"))?;

    let decodes = js_sys::Array::new();
    let mut elements = Vec::with_capacity(sources.len());
    for (index, src) in sources.entries().iter().enumerate() {
        let img = web::HtmlImageElement::new().map_err(|e| CarouselError::AssetLoadFailure {
            index,
            url: src.url.clone(),
            reason: describe_js_error(&e),
        })?;
        img.set_cross_origin(Some(CROSS_ORIGIN));
        img.set_src(&src.url);

        let reject = fail_with.clone();
        let on_error = Closure::wrap(Box::new(move |reason: JsValue| {
            let tagged = js_sys::Array::of2(&JsValue::from(index as u32), &reason);
            _ = reject.call1(&JsValue::NULL, &tagged);
        }) as Box<dyn FnMut(JsValue)>);
        decodes.push(&img.decode().catch(&on_error));
        // late failures after a timeout still call into this
        on_error.forget();
        elements.push(img);
    }
    log::info!("[loader] waiting for {} image(s)", elements.len());

    let deadline = js_sys::Promise::new(&mut |_resolve, reject| {
        let id = window.set_timeout_with_callback_and_timeout_and_arguments_1(
            &reject,
            timeout_ms.min(i32::MAX as u32) as i32,
            &JsValue::from_str(LOAD_TIMEOUT_MARKER),
        );
        timer.set(id.ok());
    });
    let all_decoded = js_sys::Promise::all(&decodes);
    let race = js_sys::Promise::race(&js_sys::Array::of3(
        &all_decoded,
        &first_failure,
        &deadline,
    ));
    let outcome = JsFuture::from(race).await;
    if let Some(id) = timer.take() {
        window.clear_timeout_with_handle(id);
    }

    if let Err(reason) = outcome {
        if reason.as_string().as_deref() == Some(LOAD_TIMEOUT_MARKER) {
            let pending = elements.iter().filter(|img| !img.complete()).count();
            return Err(CarouselError::AssetLoadTimeout {
                pending,
                timeout_ms,
            });
        }
        let Some(tagged) = reason.dyn_ref::<js_sys::Array>() else {
            return Err(join_failure(&describe_js_error(&reason)));
        };
        let index = tagged.get(0).as_f64().map(|i| i as usize).unwrap_or(0);
        return Err(CarouselError::AssetLoadFailure {
            index,
            url: sources
                .entries()
                .get(index)
                .map(|s| s.url.clone())
                .unwrap_or_default(),
            reason: describe_js_error(&tagged.get(1)),
        });
    }

    let dims = elements
        .iter()
        .map(|img| ImageDims::new(img.natural_width(), img.natural_height()))
        .collect();
    Ok(LoadedImages { elements, dims })
}

fn join_failure(reason: &str) -> CarouselError {
    CarouselError::AssetLoadFailure {
        index: 0,
        url: String::new(),
        reason: reason.to_string(),
    }
}

fn describe_js_error(value: &JsValue) -> String {
    if let Some(s) = value.as_string() {
        return s;
    }
    js_sys::Reflect::get(value, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .unwrap_or_else(|| format!("{:?}", value))
}
