use yew::prelude::*;

use crate::components::icon::{Icon, IconGlyph};
use crate::components::logo_carousel::LogoCarousel;
use crate::components::use_cases::UseCasesSection;
use crate::data::services::Service;
use crate::hooks::use_scroll_to_top;
use crate::routes::{PageProps, Route};

#[function_component(Features)]
pub fn features(props: &PageProps) -> Html {
    use_scroll_to_top();

    html! {
        <div class="page features-page">
            <section class="page-hero">
                <div class="section-inner">
                    <div class="eyebrow">
                        <IconGlyph icon={Icon::Cpu} />
                        <span>{"NOS SERVICES"}</span>
                    </div>
                    <h1>
                        {"Des solutions IA "}
                        <span class="gradient-text">{"sur mesure"}</span>
                    </h1>
                    <p>
                        {"Choisissez le point de départ qui vous ressemble. Chaque service se connecte à vos outils \
                          existants et évolue avec votre entreprise."}
                    </p>
                </div>
            </section>

            <section class="service-grid">
                <div class="section-inner grid-4">
                    { for Service::ALL.iter().map(|service| {
                        let descriptor = service.descriptor();
                        let onclick = {
                            let on_navigate = props.on_navigate.clone();
                            let route = Route::from(*service);
                            Callback::from(move |_: MouseEvent| on_navigate.emit(route))
                        };
                        html! {
                            <button class="service-card" {onclick}>
                                <div class="service-icon"><IconGlyph icon={descriptor.icon} /></div>
                                <h3>{descriptor.title}</h3>
                                <p>{descriptor.summary}</p>
                                <span class="service-more">
                                    {"En savoir plus "}
                                    <IconGlyph icon={Icon::ArrowRight} />
                                </span>
                            </button>
                        }
                    }) }
                </div>
            </section>

            <UseCasesSection on_open_consultation={props.on_open_consultation.clone()} />

            <LogoCarousel />
        </div>
    }
}
