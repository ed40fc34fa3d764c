use yew::prelude::*;

use crate::components::icon::{Icon, IconGlyph};
use crate::hooks::use_scroll_to_top;

const VALUES: [(Icon, &str, &str); 4] = [
    (
        Icon::Target,
        "Résultats concrets",
        "Chaque automatisation est mesurée en heures économisées et en clients mieux servis.",
    ),
    (
        Icon::Handshake,
        "Partenariat",
        "Nous travaillons avec vos équipes, pas à leur place.",
    ),
    (
        Icon::Shield,
        "Confiance",
        "Vos données restent les vôtres. Nos intégrations respectent vos politiques de sécurité.",
    ),
    (
        Icon::Rocket,
        "Innovation",
        "Nous suivons de près les progrès de l'IA pour en faire profiter nos clients sans attendre.",
    ),
];

#[function_component(About)]
pub fn about() -> Html {
    use_scroll_to_top();

    html! {
        <div class="page about-page">
            <section class="page-hero">
                <div class="section-inner">
                    <div class="eyebrow">
                        <IconGlyph icon={Icon::Users} />
                        <span>{"À PROPOS"}</span>
                    </div>
                    <h1>
                        {"Nous rendons l'IA "}
                        <span class="gradient-text">{"accessible"}</span>
                    </h1>
                    <p>
                        {"AIXPT accompagne les PME québécoises dans l'adoption de l'intelligence artificielle. \
                          Notre mission : libérer vos équipes des tâches répétitives pour qu'elles se concentrent \
                          sur ce qui compte vraiment, vos clients."}
                    </p>
                </div>
            </section>

            <section class="about-values">
                <div class="section-inner grid-4">
                    { for VALUES.iter().map(|(icon, title, text)| html! {
                        <div class="feature-card">
                            <div class="feature-icon"><IconGlyph icon={*icon} /></div>
                            <h3>{*title}</h3>
                            <p>{*text}</p>
                        </div>
                    }) }
                </div>
            </section>
        </div>
    }
}
