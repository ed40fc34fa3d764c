use yew::prelude::*;

use crate::components::icon::{Icon, IconGlyph};
use crate::components::ui::Button;
use crate::data::services::Service;
use crate::hooks::use_scroll_to_top;
use crate::routes::Route;

#[derive(Properties, PartialEq)]
pub struct ServicePageProps {
    pub service: Service,
    pub on_navigate: Callback<Route>,
    pub on_open_consultation: Callback<()>,
}

/// Shared layout of the four service pages.
#[function_component(ServicePage)]
pub fn service_page(props: &ServicePageProps) -> Html {
    use_scroll_to_top();

    let service = props.service.descriptor();

    let on_back = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(Route::Fonctionnalites))
    };
    let on_cta = {
        let on_open = props.on_open_consultation.clone();
        Callback::from(move |_: MouseEvent| on_open.emit(()))
    };

    html! {
        <div class="page service-page">
            <section class="page-hero">
                <div class="section-inner">
                    <button class="back-link" onclick={on_back}>
                        <IconGlyph icon={Icon::ChevronLeft} />
                        <span>{"Retour aux services"}</span>
                    </button>
                    <div class="service-hero-icon"><IconGlyph icon={service.icon} class={classes!("icon-large")} /></div>
                    <h1>{service.title}</h1>
                    <p class="service-tagline gradient-text">{service.tagline}</p>
                    <p>{service.intro}</p>
                </div>
            </section>

            <section class="service-benefits">
                <div class="section-inner grid-3">
                    { for service.benefits.iter().map(|benefit| html! {
                        <div class="feature-card">
                            <div class="feature-icon"><IconGlyph icon={benefit.icon} /></div>
                            <h3>{benefit.title}</h3>
                            <p>{benefit.text}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section class="service-steps">
                <div class="section-inner">
                    <h2>{"Notre démarche"}</h2>
                    <ol class="steps">
                        { for service.steps.iter().enumerate().map(|(i, step)| html! {
                            <li class="step">
                                <span class="step-number">{i + 1}</span>
                                <span>{*step}</span>
                            </li>
                        }) }
                    </ol>
                </div>
            </section>

            <section class="service-use-cases">
                <div class="section-inner">
                    <h2>{"Idéal pour"}</h2>
                    <div class="workflow-keywords">
                        { for service.use_cases.iter().map(|case| html! {
                            <span class="keyword">{*case}</span>
                        }) }
                    </div>
                </div>
            </section>

            <section class="section-cta">
                <h3>{"Parlons de votre projet"}</h3>
                <Button class={classes!("pill-cta")} onclick={on_cta}>
                    <IconGlyph icon={Icon::Calendar} />
                    <span>{"Réserver Une Consultation"}</span>
                </Button>
            </section>
        </div>
    }
}
