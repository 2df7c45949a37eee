use slider_deck::{Slider, SliderOptions};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::HtmlElement;
use yew::prelude::*;

/// Handle returned by [`use_slider`].
#[derive(Clone)]
pub struct UseSliderHandle {
    slider: Rc<RefCell<Option<Slider>>>,
    /// Why mounting failed, if it did.
    pub error: Option<String>,
}

impl UseSliderHandle {
    pub fn next(&self) -> bool {
        self.slider.borrow().as_ref().is_some_and(|s| s.next())
    }

    pub fn prev(&self) -> bool {
        self.slider.borrow().as_ref().is_some_and(|s| s.prev())
    }

    pub fn go_to(&self, index: usize) -> bool {
        self.slider.borrow().as_ref().is_some_and(|s| s.go_to(index))
    }
}

/// Mount a [`Slider`] on the element behind `node_ref` once it is rendered.
///
/// The slider is destroyed when the component unmounts or when the options
/// change, in which case a new one is mounted with the new options.
#[hook]
pub fn use_slider(node_ref: NodeRef, options: SliderOptions) -> UseSliderHandle {
    let slider = use_mut_ref(|| None::<Slider>);
    let error = use_state_eq(|| None::<String>);

    {
        let slider = slider.clone();
        let error = error.clone();
        use_effect_with((node_ref, options), move |(node_ref, options)| {
            match node_ref.cast::<HtmlElement>() {
                Some(container) => match Slider::attach(container, options.clone()) {
                    Ok(mounted) => {
                        *slider.borrow_mut() = Some(mounted);
                        error.set(None);
                    }
                    Err(err) => error.set(Some(err.to_string())),
                },
                None => error.set(Some("slider container was not rendered".to_string())),
            }

            move || {
                // take before destroying so the RefCell is free during teardown
                let mounted = slider.borrow_mut().take();
                if let Some(mut mounted) = mounted {
                    mounted.destroy();
                }
            }
        });
    }

    UseSliderHandle {
        slider,
        error: (*error).clone(),
    }
}
