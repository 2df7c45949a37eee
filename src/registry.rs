//! Thread-local home for sliders mounted from `data-slider` attributes.
//!
//! Sliders created by the host are owned by the host. Auto-mounted ones have
//! no other owner, so they live here until [`destroy_all`] runs.

use crate::config::{AUTO_MOUNT_ATTRIBUTE, AUTO_MOUNT_SELECTOR};
use crate::dom::{page_document, Slider};
use crate::{SliderError, SliderOptions};
use log::warn;
use std::cell::RefCell;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

thread_local! {
    /// Auto-mounted sliders, in mount order.
    /// Thread-local since sliders hold JS handles and never cross threads.
    pub static MOUNTED: RefCell<Vec<Slider>> = const { RefCell::new(Vec::new()) };
}

/// Mount every `[data-slider]` element that is not mounted yet.
pub fn mount_all() -> Result<usize, SliderError> {
    let document = page_document()?;
    let nodes = document
        .query_selector_all(AUTO_MOUNT_SELECTOR)
        .map_err(|_| SliderError::ContainerNotFound(AUTO_MOUNT_SELECTOR.to_string()))?;

    let mut mounted = 0;
    for i in 0..nodes.length() {
        let Some(container) = nodes
            .item(i)
            .and_then(|node| node.dyn_into::<HtmlElement>().ok())
        else {
            continue;
        };
        if is_mounted(&container) {
            continue;
        }
        let raw = container
            .get_attribute(AUTO_MOUNT_ATTRIBUTE)
            .unwrap_or_default();
        match SliderOptions::from_json(&raw)
            .and_then(|options| Slider::attach(container, options))
        {
            Ok(slider) => {
                MOUNTED.with(|m| m.borrow_mut().push(slider));
                mounted += 1;
            }
            Err(err) => warn!("skipping [data-slider] element {}: {}", i, err),
        }
    }
    Ok(mounted)
}

/// Destroy every auto-mounted slider.
pub fn destroy_all() {
    // take first so slider teardown never runs under the registry borrow
    let sliders = MOUNTED.with(|m| std::mem::take(&mut *m.borrow_mut()));
    for mut slider in sliders {
        slider.destroy();
    }
}

/// Number of sliders currently held by the registry.
pub fn mounted_count() -> usize {
    MOUNTED.with(|m| m.borrow().len())
}

fn is_mounted(container: &HtmlElement) -> bool {
    MOUNTED.with(|m| {
        m.borrow()
            .iter()
            .any(|slider| slider.container() == Some(container))
    })
}
