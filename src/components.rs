//! Yew view components for the slider demo.
//!
//! [`Carousel`] renders the markup the slider expects and mounts it through
//! [`use_slider`]; everything else here is plain presentational markup.

use crate::hooks::use_slider;
use slider_deck::SliderOptions;
use yew::prelude::*;

/// Wraps each child in a `.slider-item` inside a `.slider-wrapper`.
#[derive(Properties, PartialEq)]
pub struct CarouselProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub options: SliderOptions,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Carousel)]
pub fn carousel(props: &CarouselProps) -> Html {
    let node_ref = use_node_ref();
    let handle = use_slider(node_ref.clone(), props.options.clone());

    // Arrow keys step, Home/End jump to the ends
    let onkeydown = {
        let handle = handle.clone();
        let last = props.children.len().saturating_sub(1);
        Callback::from(move |e: KeyboardEvent| {
            let handled = match e.key().as_str() {
                "ArrowLeft" => handle.prev(),
                "ArrowRight" => handle.next(),
                "Home" => handle.go_to(0),
                "End" => handle.go_to(last),
                _ => return,
            };
            if handled {
                e.prevent_default();
            }
        })
    };

    html! {
        <>
            <div class={classes!("slider", props.class.clone())} ref={node_ref} tabindex="0" {onkeydown}>
                <div class="slider-wrapper">
                    { for props.children.iter().map(|child| html! {
                        <div class="slider-item">{ child }</div>
                    }) }
                </div>
            </div>
            { if let Some(error) = &handle.error {
                html! { <p class="slider-error">{ error.clone() }</p> }
            } else { html! {} } }
        </>
    }
}

/// One demo slide: a colored panel with a heading and a caption.
#[derive(Properties, PartialEq)]
pub struct SlideCardProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub caption: AttrValue,
    #[prop_or(AttrValue::Static("#334155"))]
    pub color: AttrValue,
}

#[function_component(SlideCard)]
pub fn slide_card(props: &SlideCardProps) -> Html {
    html! {
        <div class="slide-card" style={format!("background: {};", props.color)}>
            <h2>{ props.title.clone() }</h2>
            { if props.caption.is_empty() {
                html! {}
            } else {
                html! { <p>{ props.caption.clone() }</p> }
            } }
        </div>
    }
}

/// Section heading with a one-line description of the options in use.
#[derive(Properties, PartialEq)]
pub struct DemoSectionProps {
    pub heading: AttrValue,
    pub options: SliderOptions,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(DemoSection)]
pub fn demo_section(props: &DemoSectionProps) -> Html {
    html! {
        <section class="demo-section">
            <h3>{ props.heading.clone() }</h3>
            <p class="demo-options">{ describe_options(&props.options) }</p>
            <Carousel options={props.options.clone()}>
                { for props.children.iter() }
            </Carousel>
        </section>
    }
}

fn describe_options(options: &SliderOptions) -> String {
    let mut parts = Vec::new();
    if options.autoplay {
        parts.push(format!("autoplay every {} ms", options.interval_ms));
    }
    if options.pause_on_hover {
        parts.push("pauses on hover".to_string());
    }
    if options.show_indicators {
        parts.push("indicators".to_string());
    }
    if options.show_arrows {
        parts.push("arrows".to_string());
    }
    if options.swipe {
        parts.push("swipe".to_string());
    }
    if options.drag {
        parts.push("drag".to_string());
    }
    if parts.is_empty() {
        "no controls".to_string()
    } else {
        parts.join(", ")
    }
}
