use yew::prelude::*;
use yew_router::history::{AnyHistory, MemoryHistory};
use yew_router::prelude::*;
use log::{info, warn, Level};
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod api;
mod routes;
mod hooks;
mod data;
mod state {
    pub mod carousel;
    pub mod consultation;
    pub mod rain;
    pub mod timeline;
}
mod components {
    pub mod icon;
    pub mod ui;
    pub mod matrix_rain;
    pub mod text_cycle;
    pub mod integrations_carousel;
    pub mod logo_carousel;
    pub mod workflow_card;
    pub mod use_cases;
    pub mod consultation_modal;
}
mod pages {
    pub mod landing;
    pub mod features;
    pub mod service;
    pub mod about;
    pub mod contact;
}

use components::consultation_modal::ConsultationModal;
use components::icon::{Icon, IconGlyph};
use pages::{
    about::About,
    contact::Contact,
    features::Features,
    landing::Landing,
    service::ServicePage,
};
use routes::{active_entry, Page, Route, NAV_ENTRIES};

/// Scroll offset after which the navbar switches to its solid style.
const SCROLLED_THRESHOLD: f64 = 10.0;

fn switch(route: Route, on_navigate: Callback<Route>, on_open_consultation: Callback<()>) -> Html {
    match route.page() {
        Page::Landing => {
            info!("Rendering Landing page");
            html! { <Landing {on_navigate} {on_open_consultation} /> }
        },
        Page::Features => {
            info!("Rendering Features page");
            html! { <Features {on_navigate} {on_open_consultation} /> }
        },
        Page::About => {
            info!("Rendering About page");
            html! { <About /> }
        },
        Page::Contact => {
            info!("Rendering Contact page");
            html! { <Contact {on_navigate} {on_open_consultation} /> }
        },
        Page::Service(service) => {
            info!("Rendering {:?} service page", service);
            html! { <ServicePage key={format!("{:?}", service)} {service} {on_navigate} {on_open_consultation} /> }
        },
    }
}


#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub current: Route,
    pub on_navigate: Callback<Route>,
    pub on_open_consultation: Callback<()>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { current, on_navigate, on_open_consultation } = props;
    let menu_open = use_state(|| false);
    let is_scrolled = use_state_eq(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();
            let listener = window.clone().map(|window| {
                Closure::wrap(Box::new(move || {
                    let scroll_top = window.scroll_y().unwrap_or(0.0);
                    is_scrolled.set(scroll_top > SCROLLED_THRESHOLD);
                }) as Box<dyn FnMut()>)
            });

            if let (Some(window), Some(callback)) = (&window, &listener) {
                if window
                    .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
                    .is_err()
                {
                    warn!("could not attach navbar scroll listener");
                }
            }

            move || {
                if let (Some(window), Some(callback)) = (window, listener) {
                    let _ = window.remove_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let go_home = {
        let on_navigate = on_navigate.clone();
        let close_menu = close_menu.clone();
        Callback::from(move |e: MouseEvent| {
            close_menu.emit(e);
            on_navigate.emit(Route::Accueil);
        })
    };

    let open_consultation = {
        let on_open_consultation = on_open_consultation.clone();
        let close_menu = close_menu.clone();
        Callback::from(move |e: MouseEvent| {
            close_menu.emit(e);
            on_open_consultation.emit(());
        })
    };

    let highlighted = active_entry(*current);
    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <button class="nav-logo" onclick={go_home}>
                    <IconGlyph icon={Icon::Bot} />
                    <span class="gradient-text">{"AIXPT"}</span>
                </button>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Menu">
                    if *menu_open {
                        <IconGlyph icon={Icon::Close} />
                    } else {
                        <IconGlyph icon={Icon::Menu} />
                    }
                </button>
                <div class={menu_class}>
                    <div class="nav-links">
                        { for NAV_ENTRIES.iter().map(|(label, target)| {
                            let target = *target;
                            let onclick = {
                                let on_navigate = on_navigate.clone();
                                let close_menu = close_menu.clone();
                                Callback::from(move |e: MouseEvent| {
                                    close_menu.emit(e);
                                    on_navigate.emit(target);
                                })
                            };
                            html! {
                                <button
                                    class={classes!("nav-link", (highlighted == Some(target)).then(|| "active"))}
                                    {onclick}
                                >
                                    {*label}
                                </button>
                            }
                        }) }
                    </div>
                    <div class="nav-actions">
                        <a
                            href={config::PORTAL_URL}
                            target="_blank"
                            rel="noopener noreferrer"
                            class="nav-link"
                            onclick={close_menu.clone()}
                        >
                            {"Accéder au Portail"}
                        </a>
                        <button class="nav-cta" onclick={open_consultation}>
                            <IconGlyph icon={Icon::Calendar} />
                            <span>{"Réserver Une Consultation"}</span>
                        </button>
                    </div>
                </div>
            </div>
        </nav>
    }
}


#[derive(Properties, PartialEq)]
struct ShellProps {
    on_open_consultation: Callback<()>,
}

#[function_component(Shell)]
fn shell(props: &ShellProps) -> Html {
    let current = use_route::<Route>().unwrap_or(Route::Accueil);
    let navigator = use_navigator();

    let on_navigate = Callback::from(move |route: Route| {
        match &navigator {
            Some(navigator) => navigator.push(&route),
            None => warn!("no navigator available, staying on {:?}", route),
        }
    });

    html! {
        <>
            <Nav
                {current}
                on_navigate={on_navigate.clone()}
                on_open_consultation={props.on_open_consultation.clone()}
            />
            { switch(current, on_navigate, props.on_open_consultation.clone()) }
        </>
    }
}


#[function_component]
fn App() -> Html {
    // Page identifiers stay in memory; the address bar never changes.
    let history = use_memo(|_| AnyHistory::from(MemoryHistory::new()), ());
    let consultation_open = use_state(|| false);

    let open_consultation = {
        let consultation_open = consultation_open.clone();
        Callback::from(move |_| consultation_open.set(true))
    };
    let close_consultation = {
        let consultation_open = consultation_open.clone();
        Callback::from(move |_| consultation_open.set(false))
    };

    html! {
        <Router history={(*history).clone()}>
            <div class="app">
                <Shell on_open_consultation={open_consultation} />
                if *consultation_open {
                    <ConsultationModal on_close={close_consultation} />
                }
            </div>
        </Router>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    if let Err(e) = console_log::init_with_level(Level::Info) {
        gloo_console::error!(format!("error initializing log: {}", e));
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
