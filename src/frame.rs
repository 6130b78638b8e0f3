use crate::constants::RENDER_ERROR_LOG_EVERY;
use crate::logging::RepeatLimiter;
use crate::render;
use cyl_core::CarouselController;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything one animation frame needs. The controller is only read here;
/// navigation state changes happen in event handlers and timers.
pub struct FrameContext {
    pub controller: Rc<RefCell<CarouselController>>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: render::GpuState,
    render_errors: RepeatLimiter,
}

impl FrameContext {
    pub fn new(
        controller: Rc<RefCell<CarouselController>>,
        canvas: web::HtmlCanvasElement,
        gpu: render::GpuState,
    ) -> Self {
        Self {
            controller,
            canvas,
            gpu,
            render_errors: RepeatLimiter::new(RENDER_ERROR_LOG_EVERY),
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let rotation = self.controller.borrow().rotation_at(now) as f32;

        let w = self.canvas.width();
        let h = self.canvas.height();
        self.gpu.resize_if_needed(w, h, rotation);
        match self.gpu.render(rotation) {
            Ok(()) => self.render_errors.reset(),
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("[gpu] surface lost, reconfiguring");
                self.gpu.reconfigure();
            }
            Err(e) => {
                if self.render_errors.hit() {
                    log::error!(
                        "[gpu] render error: {:?} ({} frame(s) in a row)",
                        e,
                        self.render_errors.count()
                    );
                }
            }
        }
    }
}

/// Handle to a running requestAnimationFrame loop.
pub struct FrameLoop {
    handle: Rc<Cell<Option<i32>>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl FrameLoop {
    /// Cancel the pending frame and release the tick closure.
    pub fn stop(&self) {
        if let (Some(id), Some(w)) = (self.handle.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        // breaks the closure's reference to itself
        drop(self.tick.borrow_mut().take());
    }
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>, handle: &Cell<Option<i32>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        handle.set(w.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> FrameLoop {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let handle = Rc::new(Cell::new(None));
    let tick_clone = tick.clone();
    let handle_clone = handle.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        handle_clone.set(None);
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone, &handle_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick, &handle);
    FrameLoop { handle, tick }
}
