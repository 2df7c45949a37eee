//! Paginated slide carousel for web pages.
//!
//! The navigation logic lives in [`controller::SlideController`], which is
//! independent of the browser: it renders through a [`view::SlideView`] and
//! schedules through a [`scheduler::Scheduler`]. The [`dom`] module binds it
//! to existing page markup and is what JavaScript sees as `Slider`.

use std::fmt;
use wasm_bindgen::prelude::*;

pub mod config;
pub mod controller;
pub mod dom;
pub mod gesture;
pub mod registry;
pub mod scheduler;
pub mod utils;
pub mod view;

pub use config::SliderOptions;
pub use controller::{Direction, Phase, PointerKind, SlideController};
pub use dom::Slider;
pub use scheduler::{ManualScheduler, Scheduler, TimerId};
pub use view::{Offset, SlideView};

/// Errors reported while mounting a slider.
#[derive(Debug, Clone, PartialEq)]
pub enum SliderError {
    /// No `window`/`document` is available (not running in a browser page).
    DomUnavailable,
    /// The selector matched no element, or was not a valid selector.
    ContainerNotFound(String),
    /// The container has no `.slider-wrapper` child.
    WrapperNotFound,
    /// The wrapper holds no `.slider-item` elements.
    NoSlides,
    InvalidOptions(String),
}

impl fmt::Display for SliderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SliderError::DomUnavailable => write!(f, "No browser document is available"),
            SliderError::ContainerNotFound(selector) => {
                write!(f, "No slider container matches selector '{}'", selector)
            }
            SliderError::WrapperNotFound => write!(
                f,
                "Slider container has no '{}' element",
                config::WRAPPER_SELECTOR
            ),
            SliderError::NoSlides => write!(
                f,
                "Slider contains no '{}' elements",
                config::SLIDE_SELECTOR
            ),
            SliderError::InvalidOptions(reason) => {
                write!(f, "Invalid slider options: {}", reason)
            }
        }
    }
}

impl std::error::Error for SliderError {}

impl From<SliderError> for JsValue {
    fn from(err: SliderError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

/// Mount every `[data-slider]` element on the page, reading JSON options
/// from the attribute value. Returns how many sliders were mounted.
///
/// Elements that fail to mount are skipped and logged.
#[wasm_bindgen(js_name = mountAll)]
pub fn mount_all() -> Result<usize, JsValue> {
    registry::mount_all().map_err(JsValue::from)
}

/// Tear down every slider mounted by [`mount_all`].
#[wasm_bindgen(js_name = destroyAll)]
pub fn destroy_all() {
    registry::destroy_all();
}
