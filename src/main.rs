//! Demo page for the slider using Yew.
//! Renders a few carousels with different option sets.

use slider_deck::SliderOptions;
use yew::prelude::*;

mod components;
mod hooks;

use components::{DemoSection, SlideCard};

const PALETTE: [&str; 5] = ["#0f766e", "#1d4ed8", "#7c3aed", "#be123c", "#b45309"];

fn slides(count: usize) -> Vec<Html> {
    (0..count)
        .map(|i| {
            html! {
                <SlideCard
                    title={format!("Slide {}", i + 1)}
                    caption={format!("{} of {}", i + 1, count)}
                    color={PALETTE[i % PALETTE.len()]}
                />
            }
        })
        .collect()
}

/// Primary application component: one section per option set.
#[function_component]
pub fn App() -> Html {
    let autoplay = SliderOptions {
        autoplay: true,
        interval_ms: 3000,
        pause_on_hover: true,
        ..SliderOptions::default()
    };
    let drag_only = SliderOptions {
        show_arrows: false,
        swipe: false,
        ..SliderOptions::default()
    };
    let bare = SliderOptions {
        show_indicators: false,
        show_arrows: false,
        ..SliderOptions::default()
    };

    html! {
        <main class="slider-demo">
            <h1>{ "Slider Deck" }</h1>
            <DemoSection heading="Autoplay, paused on hover" options={autoplay}>
                { for slides(5) }
            </DemoSection>
            <DemoSection heading="Defaults" options={SliderOptions::default()}>
                { for slides(4) }
            </DemoSection>
            <DemoSection heading="Mouse drag only" options={drag_only}>
                { for slides(3) }
            </DemoSection>
            <DemoSection heading="Single slide, no controls" options={bare}>
                { for slides(1) }
            </DemoSection>
        </main>
    }
}

/// Entry point: installs the panic hook, renders the demo, then mounts any
/// static `[data-slider]` markup already on the page.
fn main() {
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
    if let Err(err) = slider_deck::mount_all() {
        log::warn!("auto-mount failed: {:?}", err);
    }
}
