//! One mounted carousel: DOM, loading, controller, renderer and timers.
//!
//! Everything a widget owns lives in its `WidgetInner`; nothing is shared
//! between widgets. Event handlers and timers hold a `Weak` so a destroyed
//! widget is simply not found.

use crate::dom::{self, Listener};
use crate::events::{self, Navigate};
use crate::frame::{self, FrameContext, FrameLoop};
use crate::loader;
use crate::overlay::{self, Status};
use crate::render::GpuState;
use cyl_core::{
    assemble_assets, build_carousel_meshes, CarouselConfig, CarouselController, CarouselError,
    Direction, NavigateOutcome, SourceSet, TransitionTicket,
};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

struct WidgetInner {
    id: u32,
    container: web::HtmlElement,
    config: CarouselConfig,
    sources: SourceSet,
    status: Status,
    canvas: Option<web::HtmlCanvasElement>,
    controller: Option<Rc<RefCell<CarouselController>>>,
    listeners: Vec<Listener>,
    frame_loop: Option<FrameLoop>,
    // at most one transition is in flight, so at most one completion timer
    transition_timer: Option<i32>,
    load_timer: Rc<Cell<Option<i32>>>,
    destroyed: bool,
}

#[derive(Clone)]
pub struct Widget {
    inner: Rc<RefCell<WidgetInner>>,
}

impl Widget {
    /// Read the container's figures, create the canvas and start loading.
    ///
    /// Fails synchronously on malformed markup or options; load failures
    /// arrive later and only show up as the `cyl-failed` status.
    pub fn mount(
        id: u32,
        container: web::HtmlElement,
        config: CarouselConfig,
    ) -> anyhow::Result<Self> {
        config.validate()?;
        let figures = dom::scrape_figures(&container)?;
        let sources = SourceSet::plan(figures, &config)?;
        let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
        let canvas = dom::create_canvas(&document, &container)?;
        dom::sync_canvas_backing_size(&canvas);

        log::info!(
            "[cyl] mounting widget {} with {} figure(s), {} segment(s)",
            id,
            sources.original_len(),
            sources.len()
        );
        overlay::set_status(&container, Status::Loading);

        let inner = Rc::new(RefCell::new(WidgetInner {
            id,
            container: container.clone(),
            config,
            sources,
            status: Status::Loading,
            canvas: Some(canvas.clone()),
            controller: None,
            listeners: Vec::new(),
            frame_loop: None,
            transition_timer: None,
            load_timer: Rc::new(Cell::new(None)),
            destroyed: false,
        }));

        let weak = Rc::downgrade(&inner);
        let on_navigate: Navigate = Rc::new(move |direction| {
            navigate(&weak, direction);
        });
        let mut listeners = events::wire_input_handlers(&container, &canvas, on_navigate);
        if let Some(window) = web::window() {
            let canvas_resize = canvas.clone();
            listeners.push(Listener::new(window.as_ref(), "resize", move |_| {
                dom::sync_canvas_backing_size(&canvas_resize);
            }));
        }
        inner.borrow_mut().listeners = listeners;

        let weak = Rc::downgrade(&inner);
        spawn_local(async move {
            if let Err(e) = initialise(weak.clone()).await {
                fail(&weak, &e);
            }
        });
        Ok(Self { inner })
    }

    #[inline]
    pub fn id(&self) -> u32 {
        self.inner.borrow().id
    }

    pub fn container(&self) -> web::HtmlElement {
        self.inner.borrow().container.clone()
    }

    pub fn status(&self) -> Status {
        self.inner.borrow().status
    }

    /// Request a step; `false` when the widget is not ready or a transition
    /// is still running.
    pub fn navigate(&self, direction: Direction) -> bool {
        navigate(&Rc::downgrade(&self.inner), direction)
    }

    pub fn current_index(&self) -> usize {
        self.controller()
            .map(|c| c.borrow().current_index())
            .unwrap_or(0)
    }

    pub fn is_transitioning(&self) -> bool {
        self.controller()
            .map(|c| c.borrow().is_transitioning())
            .unwrap_or(false)
    }

    pub fn caption(&self) -> Option<String> {
        self.controller()
            .map(|c| c.borrow().current_caption().to_string())
    }

    fn controller(&self) -> Option<Rc<RefCell<CarouselController>>> {
        self.inner.borrow().controller.clone()
    }

    /// Stop rendering, cancel timers, detach listeners and remove the canvas.
    pub fn destroy(&self) {
        let mut inner = self.inner.borrow_mut();
        if inner.destroyed {
            return;
        }
        inner.destroyed = true;
        if let Some(frame_loop) = inner.frame_loop.take() {
            frame_loop.stop();
        }
        if let Some(window) = web::window() {
            if let Some(id) = inner.transition_timer.take() {
                window.clear_timeout_with_handle(id);
            }
            if let Some(id) = inner.load_timer.take() {
                window.clear_timeout_with_handle(id);
            }
        }
        inner.listeners.clear();
        if let Some(canvas) = inner.canvas.take() {
            canvas.remove();
        }
        inner.controller = None;
        overlay::clear_status(&inner.container);
        log::info!("[cyl] widget {} destroyed", inner.id);
    }
}

/// Load every image, then build layout, controller and renderer exactly once.
async fn initialise(weak: Weak<RefCell<WidgetInner>>) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let (sources, config, timer) = {
        let Some(inner) = weak.upgrade() else {
            return Ok(());
        };
        let inner = inner.borrow();
        (
            inner.sources.clone(),
            inner.config.clone(),
            inner.load_timer.clone(),
        )
    };

    let loaded = loader::load_images(&window, &sources, config.asset_timeout_ms, timer).await?;
    if is_gone(&weak) {
        return Ok(());
    }
    log::info!("[loader] {} image(s) decoded", loaded.elements.len());

    let assets = assemble_assets(&sources, &loaded.dims)?;
    let controller = CarouselController::new(assets, &config, Instant::now())?;
    let rotation = controller.rotation_at(Instant::now()) as f32;
    let meshes = build_carousel_meshes(controller.layout(), config.radial_segments);

    let Some(canvas) = weak.upgrade().and_then(|i| i.borrow().canvas.clone()) else {
        return Ok(());
    };
    dom::sync_canvas_backing_size(&canvas);
    let gpu = GpuState::new(&canvas, &loaded.elements, meshes, &config, rotation).await?;

    let Some(inner) = weak.upgrade() else {
        return Ok(());
    };
    if inner.borrow().destroyed {
        return Ok(());
    }
    let caption = controller.current_caption().to_string();
    let controller = Rc::new(RefCell::new(controller));
    let frame_ctx = Rc::new(RefCell::new(FrameContext::new(
        controller.clone(),
        canvas,
        gpu,
    )));
    let frame_loop = frame::start_loop(frame_ctx);

    let mut inner = inner.borrow_mut();
    inner.controller = Some(controller);
    inner.frame_loop = Some(frame_loop);
    inner.status = Status::Ready;
    overlay::set_status(&inner.container, Status::Ready);
    overlay::show_caption(&inner.container, &caption);
    log::info!("[cyl] widget {} ready", inner.id);
    Ok(())
}

fn is_gone(weak: &Weak<RefCell<WidgetInner>>) -> bool {
    weak.upgrade().map(|i| i.borrow().destroyed).unwrap_or(true)
}

fn fail(weak: &Weak<RefCell<WidgetInner>>, err: &anyhow::Error) {
    let Some(inner) = weak.upgrade() else {
        return;
    };
    let mut inner = inner.borrow_mut();
    if inner.destroyed {
        return;
    }
    match err.downcast_ref::<CarouselError>() {
        Some(CarouselError::AssetLoadTimeout { pending, timeout_ms }) => log::error!(
            "[cyl] widget {}: {} image(s) still pending after {}ms",
            inner.id,
            pending,
            timeout_ms
        ),
        _ => log::error!("[cyl] widget {} failed: {:#}", inner.id, err),
    }
    inner.status = Status::Failed;
    overlay::set_status(&inner.container, Status::Failed);
}

fn navigate(weak: &Weak<RefCell<WidgetInner>>, direction: Direction) -> bool {
    let Some(inner) = weak.upgrade() else {
        return false;
    };
    let mut inner = inner.borrow_mut();
    let Some(controller) = inner.controller.clone() else {
        log::debug!("[cyl] {:?} ignored, widget {} not ready", direction, inner.id);
        return false;
    };
    let outcome = controller.borrow_mut().navigate(direction, Instant::now());
    let NavigateOutcome::Started(transition) = outcome else {
        return false;
    };
    overlay::show_caption(&inner.container, controller.borrow().current_caption());

    let ms = transition.duration.as_millis().min(i32::MAX as u128) as i32;
    match schedule_finish(weak.clone(), transition.ticket, ms) {
        Some(id) => inner.transition_timer = Some(id),
        None => {
            log::error!("[cyl] could not schedule transition end, finishing now");
            controller.borrow_mut().finish_transition(transition.ticket);
        }
    }
    true
}

/// The timer, not the tween, returns the controller to idle.
fn schedule_finish(
    weak: Weak<RefCell<WidgetInner>>,
    ticket: TransitionTicket,
    ms: i32,
) -> Option<i32> {
    let window = web::window()?;
    let cb = Closure::once_into_js(move || {
        let Some(inner) = weak.upgrade() else {
            return;
        };
        let mut inner = inner.borrow_mut();
        inner.transition_timer = None;
        if let Some(controller) = &inner.controller {
            if controller.borrow_mut().finish_transition(ticket) {
                log::debug!("[cyl] transition {:?} finished", ticket);
            }
        }
    });
    window
        .set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), ms)
        .ok()
}
