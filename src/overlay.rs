use crate::constants::{CAPTION_TARGET_SELECTOR, CLASS_FAILED, CLASS_LOADING, CLASS_READY};
use web_sys as web;

/// Lifecycle of one widget as shown on its container.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Loading,
    Ready,
    Failed,
}

impl Status {
    #[inline]
    pub fn class_name(self) -> &'static str {
        match self {
            Status::Loading => CLASS_LOADING,
            Status::Ready => CLASS_READY,
            Status::Failed => CLASS_FAILED,
        }
    }
}

/// Swap the container's status class; exactly one is present at a time.
pub fn set_status(container: &web::Element, status: Status) {
    let cl = container.class_list();
    for s in [Status::Loading, Status::Ready, Status::Failed] {
        if s != status {
            _ = cl.remove_1(s.class_name());
        }
    }
    _ = cl.add_1(status.class_name());
}

pub fn clear_status(container: &web::Element) {
    let cl = container.class_list();
    _ = cl.remove_3(CLASS_LOADING, CLASS_READY, CLASS_FAILED);
}

/// Show `caption` in the container's caption element, if it has one.
pub fn show_caption(container: &web::Element, caption: &str) {
    if let Ok(Some(el)) = container.query_selector(CAPTION_TARGET_SELECTOR) {
        el.set_text_content(Some(caption));
    }
}
