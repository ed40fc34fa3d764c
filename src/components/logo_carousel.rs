use yew::prelude::*;
use yew_hooks::use_interval;

use crate::components::icon::{Icon, IconGlyph};
use crate::data::integrations::{initials, Logo, LOGOS};
use crate::state::carousel::{Carousel, CarouselAction, Stepping};

const ITEMS_PER_VIEW: usize = 5;

#[derive(Properties, PartialEq)]
pub struct LogoCarouselProps {
    #[prop_or(AttrValue::from("Intégrations Possibles"))]
    pub heading: AttrValue,
    #[prop_or(LOGOS)]
    pub logos: &'static [Logo],
    #[prop_or(3000)]
    pub auto_scroll_ms: u32,
}

fn logo_badge(logo: &Logo) -> Html {
    match logo.image {
        Some(src) => html! { <img class="logo-image" src={src} alt={logo.name} /> },
        None => html! {
            <svg class="logo-badge" width="120" height="40" viewBox="0 0 120 40" xmlns="http://www.w3.org/2000/svg">
                <rect width="120" height="40" rx="6" fill="rgba(59, 130, 246, 0.1)" stroke="#3B82F6" stroke-width="1" />
                <text x="60" y="25" text-anchor="middle" fill="#FFFFFF" font-size="14" font-family="Arial, sans-serif" font-weight="600">
                    {initials(logo.name)}
                </text>
            </svg>
        },
    }
}

/// Sliding logo grid with arrows, dots and pause-on-hover.
#[function_component(LogoCarousel)]
pub fn logo_carousel(props: &LogoCarouselProps) -> Html {
    let logos = props.logos;
    let carousel = use_reducer(|| Carousel::new(logos.len(), ITEMS_PER_VIEW, Stepping::Sliding));

    {
        let dispatcher = carousel.dispatcher();
        let millis = if carousel.is_paused() || carousel.windows() < 2 {
            0
        } else {
            props.auto_scroll_ms
        };
        use_interval(move || dispatcher.dispatch(CarouselAction::Tick), millis);
    }

    let on_enter = {
        let dispatcher = carousel.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(CarouselAction::Hover(true)))
    };
    let on_leave = {
        let dispatcher = carousel.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(CarouselAction::Hover(false)))
    };
    let on_prev = {
        let dispatcher = carousel.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(CarouselAction::Prev))
    };
    let on_next = {
        let dispatcher = carousel.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(CarouselAction::Next))
    };

    let current = carousel.index();
    let slot = 100.0 / ITEMS_PER_VIEW as f64;

    html! {
        <section class="logo-carousel">
            <div class="section-inner">
                <div class="section-header">
                    <h2>{props.heading.clone()}</h2>
                    <p>
                        {"Connectez-vous aux principales plateformes logicielles que les entreprises utilisent quotidiennement. \
                          Intégrations API transparentes disponibles."}
                    </p>
                </div>

                <div class="logo-carousel-frame" onmouseenter={on_enter} onmouseleave={on_leave}>
                    <button class="carousel-arrow left" onclick={on_prev} aria-label="Logos précédents">
                        <IconGlyph icon={Icon::ChevronLeft} />
                    </button>
                    <button class="carousel-arrow right" onclick={on_next} aria-label="Logos suivants">
                        <IconGlyph icon={Icon::ChevronRight} />
                    </button>

                    <div class="logo-viewport">
                        <div
                            class="logo-strip"
                            style={format!("transform: translateX(-{}%);", current as f64 * slot)}
                        >
                            { for logos.iter().map(|logo| html! {
                                <div key={logo.id} class="logo-slot" style={format!("width: {}%;", slot)}>
                                    <div class="logo-card">
                                        <div class="logo-art">{logo_badge(logo)}</div>
                                        <p class="logo-name">{logo.name}</p>
                                    </div>
                                </div>
                            }) }
                        </div>
                    </div>

                    <div class="carousel-dots">
                        { for (0..carousel.windows()).map(|i| {
                            let dispatcher = carousel.dispatcher();
                            html! {
                                <button
                                    class={classes!("carousel-dot", (i == current).then(|| "active"))}
                                    onclick={Callback::from(move |_: MouseEvent| dispatcher.dispatch(CarouselAction::GoTo(i)))}
                                    aria-label={format!("Aller à la diapositive {}", i + 1)}
                                />
                            }
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}
