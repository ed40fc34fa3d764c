use yew::prelude::*;
use yew_hooks::use_interval;

use crate::data::integrations::{INTEGRATIONS, MORE_INTEGRATIONS};
use crate::state::carousel::{Carousel, CarouselAction, Stepping};

const ITEMS_PER_VIEW: usize = 6;
const INTERVAL_MS: u32 = 2500;

#[function_component(IntegrationsCarousel)]
pub fn integrations_carousel() -> Html {
    let carousel = use_reducer(|| Carousel::new(INTEGRATIONS.len(), ITEMS_PER_VIEW, Stepping::Paged));

    {
        let dispatcher = carousel.dispatcher();
        let millis = if carousel.windows() > 1 { INTERVAL_MS } else { 0 };
        use_interval(move || dispatcher.dispatch(CarouselAction::Tick), millis);
    }

    let current = carousel.index();
    let visible = &INTEGRATIONS[carousel.window()];

    html! {
        <div class="integrations">
            <h3 class="integrations-heading">{"Intégrations possibles"}</h3>
            <div class="integrations-track">
                <div class="integrations-window">
                    <div key={current} class="integrations-row">
                        { for visible.iter().enumerate().map(|(i, name)| {
                            let class = if *name == MORE_INTEGRATIONS {
                                "integration-item integration-more"
                            } else {
                                "integration-item"
                            };
                            html! {
                                <div
                                    key={format!("{}-{}", current, i)}
                                    class={class}
                                    style={format!("animation-delay: {}ms;", i * 100)}
                                >
                                    {*name}
                                </div>
                            }
                        }) }
                    </div>
                </div>
                <div class="carousel-dots">
                    { for (0..carousel.windows()).map(|i| html! {
                        <span class={classes!("carousel-dot", (i == current).then(|| "active"))}></span>
                    }) }
                </div>
            </div>
        </div>
    }
}
