//! Browser binding: page markup, timers and event listeners.
//!
//! A mounted [`Slider`] owns every listener it registers, including the
//! window-level mouse listeners that keep a drag alive outside the widget,
//! and every timer its controller schedules. Dropping or destroying the
//! slider releases all of them.

use crate::config::*;
use crate::controller::{PointerKind, SlideController};
use crate::scheduler::{Scheduler, TimerId};
use crate::utils::transition_value;
use crate::view::{Offset, SlideView};
use crate::{SliderError, SliderOptions};
use gloo_events::{EventListener, EventListenerOptions};
use gloo_timers::callback::Timeout;
use log::{info, warn};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, MouseEvent, TouchEvent};

pub type DomController = SlideController<DomView, DomScheduler>;
type SharedController = Rc<RefCell<DomController>>;

// ──────────────────────────────────────────────────────────────────────────────
// View

/// Applies controller output to the wrapper, container and indicators.
pub struct DomView {
    container: HtmlElement,
    wrapper: HtmlElement,
    indicators: Vec<Element>,
    transition_ms: u32,
}

impl DomView {
    /// Drop every inline style the slider wrote.
    fn clear_styles(&self) {
        let wrapper = self.wrapper.style();
        let _ = wrapper.remove_property("transform");
        let _ = wrapper.remove_property("transition");
        let _ = self.container.style().remove_property("cursor");
    }
}

impl SlideView for DomView {
    fn set_active_indicator(&mut self, previous: usize, current: usize) {
        if let Some(indicator) = self.indicators.get(previous) {
            let _ = indicator.class_list().remove_1(ACTIVE_CLASS);
        }
        if let Some(indicator) = self.indicators.get(current) {
            let _ = indicator.class_list().add_1(ACTIVE_CLASS);
        }
    }

    fn set_offset(&mut self, offset: Offset) {
        let _ = self
            .wrapper
            .style()
            .set_property("transform", &offset.to_css_transform());
    }

    fn set_animated(&mut self, animated: bool) {
        let value = if animated {
            transition_value(self.transition_ms)
        } else {
            "none".to_string()
        };
        let _ = self.wrapper.style().set_property("transition", &value);
    }

    fn set_grabbing(&mut self, grabbing: bool) {
        let style = self.container.style();
        if grabbing {
            let _ = style.set_property("cursor", GRABBING_CURSOR);
        } else {
            let _ = style.remove_property("cursor");
        }
    }

    fn container_width(&self) -> f64 {
        self.container.offset_width() as f64
    }
}

// ──────────────────────────────────────────────────────────────────────────────
// Timers

/// [`Scheduler`] backed by `setTimeout` through gloo-timers.
///
/// Fired timers are delivered to the bound controller by id. Cancelling a
/// timer drops its [`Timeout`], which clears it on the JS side.
pub struct DomScheduler {
    next_id: u32,
    pending: HashMap<TimerId, Timeout>,
    controller: Weak<RefCell<DomController>>,
}

impl DomScheduler {
    fn new() -> Self {
        Self {
            next_id: 0,
            pending: HashMap::new(),
            controller: Weak::new(),
        }
    }

    fn bind(&mut self, controller: Weak<RefCell<DomController>>) {
        self.controller = controller;
    }

    /// Forget a timer that has already fired.
    fn release(&mut self, id: TimerId) {
        self.pending.remove(&id);
    }
}

impl Scheduler for DomScheduler {
    fn schedule(&mut self, delay_ms: u32) -> TimerId {
        self.next_id = self.next_id.wrapping_add(1);
        let id = TimerId(self.next_id);
        let controller = self.controller.clone();
        let timeout = Timeout::new(delay_ms, move || {
            let Some(controller) = controller.upgrade() else {
                return;
            };
            with_controller(&controller, |c| {
                c.scheduler_mut().release(id);
                c.on_timer(id);
            });
        });
        self.pending.insert(id, timeout);
        id
    }

    fn cancel(&mut self, id: TimerId) {
        self.pending.remove(&id);
    }
}

fn with_controller<R>(
    controller: &SharedController,
    f: impl FnOnce(&mut DomController) -> R,
) -> Option<R> {
    match controller.try_borrow_mut() {
        Ok(mut c) => Some(f(&mut c)),
        Err(_) => {
            warn!("slider busy, dropping re-entrant event");
            None
        }
    }
}

// ──────────────────────────────────────────────────────────────────────────────
// Slider

/// A slider mounted on existing page markup.
///
/// The container must hold one `.slider-wrapper` and at least one
/// `.slider-item`. Indicator and arrow controls are generated according to
/// the options and removed again on [`destroy`](Slider::destroy).
#[wasm_bindgen]
pub struct Slider {
    mounted: Option<Mounted>,
}

struct Mounted {
    controller: SharedController,
    container: HtmlElement,
    // dropping a listener unregisters it
    listeners: Vec<EventListener>,
    generated: Vec<Element>,
}

#[wasm_bindgen]
impl Slider {
    /// Mount on the first element matching `selector`. `options` may be
    /// `undefined` or a partial options object.
    #[wasm_bindgen(constructor)]
    pub fn new(selector: &str, options: JsValue) -> Result<Slider, JsValue> {
        let options = options_from_js(options)?;
        Ok(Slider::mount(selector, options)?)
    }

    /// Mount on an element the caller already holds.
    #[wasm_bindgen(js_name = attach)]
    pub fn attach_js(container: HtmlElement, options: JsValue) -> Result<Slider, JsValue> {
        let options = options_from_js(options)?;
        Ok(Slider::attach(container, options)?)
    }

    pub fn next(&self) -> bool {
        self.with(|c| c.next()).unwrap_or(false)
    }

    pub fn prev(&self) -> bool {
        self.with(|c| c.prev()).unwrap_or(false)
    }

    #[wasm_bindgen(js_name = goTo)]
    pub fn go_to(&self, index: usize) -> bool {
        self.with(|c| c.go_to(index)).unwrap_or(false)
    }

    #[wasm_bindgen(getter = currentIndex)]
    pub fn current_index(&self) -> usize {
        self.with(|c| c.current_index()).unwrap_or(0)
    }

    #[wasm_bindgen(getter = slideCount)]
    pub fn slide_count(&self) -> usize {
        self.with(|c| c.slide_count()).unwrap_or(0)
    }

    #[wasm_bindgen(getter = isTransitioning)]
    pub fn is_transitioning(&self) -> bool {
        self.with(|c| c.is_transitioning()).unwrap_or(false)
    }

    #[wasm_bindgen(js_name = startAutoplay)]
    pub fn start_autoplay(&self) {
        self.with(|c| c.start_autoplay());
    }

    #[wasm_bindgen(js_name = stopAutoplay)]
    pub fn stop_autoplay(&self) {
        self.with(|c| c.stop_autoplay());
    }

    /// Release timers and listeners and remove generated controls.
    /// Calling it again is a no-op.
    pub fn destroy(&mut self) {
        let Some(mounted) = self.mounted.take() else {
            return;
        };
        with_controller(&mounted.controller, |c| {
            c.teardown();
            c.view().clear_styles();
        });
        drop(mounted.listeners);
        for element in &mounted.generated {
            element.remove();
        }
    }
}

impl Slider {
    /// Mount on the first element matching `selector`.
    pub fn mount(selector: &str, options: SliderOptions) -> Result<Self, SliderError> {
        let document = page_document()?;
        let container = document
            .query_selector(selector)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .ok_or_else(|| SliderError::ContainerNotFound(selector.to_string()))?;
        Slider::attach(container, options)
    }

    /// Mount on `container`, which must already hold the slider markup.
    pub fn attach(container: HtmlElement, options: SliderOptions) -> Result<Self, SliderError> {
        let options = options.validate()?;
        let wrapper = container
            .query_selector(WRAPPER_SELECTOR)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .ok_or(SliderError::WrapperNotFound)?;
        let slide_count = container
            .query_selector_all(SLIDE_SELECTOR)
            .map(|slides| slides.length() as usize)
            .unwrap_or(0);
        if slide_count == 0 {
            return Err(SliderError::NoSlides);
        }

        let document = page_document()?;
        let mut generated = Vec::new();
        let indicators = if options.show_indicators {
            let (controls, indicators) = build_indicators(&document, slide_count)?;
            append(&container, &controls);
            generated.push(controls);
            indicators
        } else {
            Vec::new()
        };
        let arrows = if options.show_arrows {
            let prev = build_arrow(&document, ARROW_PREV_CLASS, ARROW_PREV_GLYPH)?;
            let next = build_arrow(&document, ARROW_NEXT_CLASS, ARROW_NEXT_GLYPH)?;
            append(&container, &prev);
            append(&container, &next);
            generated.push(prev.clone());
            generated.push(next.clone());
            Some((prev, next))
        } else {
            None
        };

        let view = DomView {
            container: container.clone(),
            wrapper,
            indicators: indicators.clone(),
            transition_ms: options.transition_ms,
        };
        let controller = match SlideController::new(slide_count, view, DomScheduler::new(), options)
        {
            Ok(controller) => Rc::new(RefCell::new(controller)),
            Err(err) => {
                for element in &generated {
                    element.remove();
                }
                return Err(err);
            }
        };
        controller
            .borrow_mut()
            .scheduler_mut()
            .bind(Rc::downgrade(&controller));

        let listeners = install_listeners(&controller, &container, &indicators, arrows.as_ref());
        controller.borrow_mut().start();
        info!(
            "slider mounted with {} slides ({} listeners)",
            slide_count,
            listeners.len()
        );

        Ok(Self {
            mounted: Some(Mounted {
                controller,
                container,
                listeners,
                generated,
            }),
        })
    }

    pub fn container(&self) -> Option<&HtmlElement> {
        self.mounted.as_ref().map(|m| &m.container)
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.is_some()
    }

    fn with<R>(&self, f: impl FnOnce(&mut DomController) -> R) -> Option<R> {
        self.mounted
            .as_ref()
            .and_then(|m| with_controller(&m.controller, f))
    }
}

impl Drop for Slider {
    fn drop(&mut self) {
        self.destroy();
    }
}

fn options_from_js(options: JsValue) -> Result<SliderOptions, SliderError> {
    if options.is_undefined() || options.is_null() {
        return Ok(SliderOptions::default());
    }
    let options: SliderOptions = serde_wasm_bindgen::from_value(options)
        .map_err(|e| SliderError::InvalidOptions(e.to_string()))?;
    options.validate()
}

pub(crate) fn page_document() -> Result<Document, SliderError> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or(SliderError::DomUnavailable)
}

fn create_div(document: &Document, class: &str) -> Result<Element, SliderError> {
    let element = document
        .create_element("div")
        .map_err(|_| SliderError::DomUnavailable)?;
    element.set_class_name(class);
    Ok(element)
}

fn append(parent: &HtmlElement, child: &Element) {
    let _ = parent.append_child(child);
}

/// Build the `.slider-controls` strip with one indicator per slide, the
/// first one active.
fn build_indicators(
    document: &Document,
    slide_count: usize,
) -> Result<(Element, Vec<Element>), SliderError> {
    let controls = create_div(document, CONTROLS_CLASS)?;
    let mut indicators = Vec::with_capacity(slide_count);
    for i in 0..slide_count {
        let indicator = create_div(document, INDICATOR_CLASS)?;
        if i == 0 {
            let _ = indicator.class_list().add_1(ACTIVE_CLASS);
        }
        let _ = controls.append_child(&indicator);
        indicators.push(indicator);
    }
    Ok((controls, indicators))
}

fn build_arrow(document: &Document, class: &str, glyph: &str) -> Result<Element, SliderError> {
    let arrow = create_div(document, class)?;
    arrow.set_text_content(Some(glyph));
    Ok(arrow)
}

// ──────────────────────────────────────────────────────────────────────────────
// Input adapters

fn install_listeners(
    controller: &SharedController,
    container: &HtmlElement,
    indicators: &[Element],
    arrows: Option<&(Element, Element)>,
) -> Vec<EventListener> {
    let mut listeners = Vec::new();

    for (index, indicator) in indicators.iter().enumerate() {
        let controller = controller.clone();
        listeners.push(EventListener::new(indicator, "click", move |_event| {
            with_controller(&controller, |c| c.go_to(index));
        }));
    }

    if let Some((prev, next)) = arrows {
        let c = controller.clone();
        listeners.push(EventListener::new(prev, "click", move |_event| {
            with_controller(&c, |c| c.prev());
        }));
        let c = controller.clone();
        listeners.push(EventListener::new(next, "click", move |_event| {
            with_controller(&c, |c| c.next());
        }));
    }

    let options = controller.borrow().options().clone();
    if options.swipe {
        install_touch_listeners(controller, container, &mut listeners);
    }
    if options.drag {
        install_mouse_listeners(controller, container, &mut listeners);
    }
    if options.pause_on_hover {
        let c = controller.clone();
        listeners.push(EventListener::new(container, "mouseenter", move |_event| {
            with_controller(&c, |c| c.pointer_enter());
        }));
        let c = controller.clone();
        listeners.push(EventListener::new(container, "mouseleave", move |_event| {
            with_controller(&c, |c| c.pointer_leave());
        }));
    }

    listeners
}

fn first_touch_x(event: &Event) -> Option<f64> {
    let event = event.dyn_ref::<TouchEvent>()?;
    event.touches().get(0).map(|touch| touch.client_x() as f64)
}

fn install_touch_listeners(
    controller: &SharedController,
    container: &HtmlElement,
    listeners: &mut Vec<EventListener>,
) {
    // start/move never call preventDefault, so they stay passive
    let c = controller.clone();
    listeners.push(EventListener::new(container, "touchstart", move |event| {
        if let Some(x) = first_touch_x(event) {
            with_controller(&c, |c| c.pointer_down(PointerKind::Touch, x));
        }
    }));
    let c = controller.clone();
    listeners.push(EventListener::new(container, "touchmove", move |event| {
        if let Some(x) = first_touch_x(event) {
            with_controller(&c, |c| c.pointer_move(PointerKind::Touch, x));
        }
    }));
    let c = controller.clone();
    listeners.push(EventListener::new(container, "touchend", move |_event| {
        with_controller(&c, |c| c.pointer_up(PointerKind::Touch));
    }));
    let c = controller.clone();
    listeners.push(EventListener::new(container, "touchcancel", move |_event| {
        with_controller(&c, |c| c.pointer_cancel(PointerKind::Touch));
    }));
}

fn install_mouse_listeners(
    controller: &SharedController,
    container: &HtmlElement,
    listeners: &mut Vec<EventListener>,
) {
    let c = controller.clone();
    listeners.push(EventListener::new_with_options(
        container,
        "mousedown",
        EventListenerOptions::enable_prevent_default(),
        move |event| {
            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            if event.button() != 0 {
                return;
            }
            event.prevent_default();
            let x = event.client_x() as f64;
            with_controller(&c, |c| c.pointer_down(PointerKind::Mouse, x));
        },
    ));

    // window-level so a drag keeps tracking outside the container
    let window = gloo_utils::window();
    let c = controller.clone();
    listeners.push(EventListener::new(&window, "mousemove", move |event| {
        let Some(event) = event.dyn_ref::<MouseEvent>() else {
            return;
        };
        let x = event.client_x() as f64;
        with_controller(&c, |c| {
            if c.is_dragging() {
                c.pointer_move(PointerKind::Mouse, x);
            }
        });
    }));
    let c = controller.clone();
    listeners.push(EventListener::new(&window, "mouseup", move |_event| {
        with_controller(&c, |c| c.pointer_up(PointerKind::Mouse));
    }));
}
