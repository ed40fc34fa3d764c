use log::info;
use yew::prelude::*;

use crate::components::icon::{Icon, IconGlyph};
use crate::components::integrations_carousel::IntegrationsCarousel;
use crate::components::matrix_rain::MatrixRain;
use crate::components::text_cycle::AnimatedTextCycle;
use crate::components::ui::Button;
use crate::hooks::use_scroll_to_top;
use crate::routes::{PageProps, Route};

const AUTOMATION_WORDS: &[&str] = &[
    "l'IA Automatisée",
    "l'Apprentissage Machine",
    "les Réseaux Neuronaux",
    "les Systèmes Intelligents",
    "l'Intelligence Digitale",
    "l'Informatique Cognitive",
];

const FEATURES: [(Icon, &str, &str); 3] = [
    (
        Icon::Brain,
        "Automatisation Intelligente",
        "Déployez des agents IA qui apprennent et s'adaptent à vos processus métier",
    ),
    (
        Icon::Zap,
        "Vitesse Fulgurante",
        "Traitez des milliers de tâches en quelques secondes avec notre moteur IA optimisé",
    ),
    (
        Icon::Cpu,
        "Intégration Transparente",
        "Connectez-vous sans effort à vos outils et workflows existants",
    ),
];

#[function_component(Landing)]
pub fn landing(props: &PageProps) -> Html {
    use_scroll_to_top();

    let on_start = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| {
            info!("Starting the AI journey");
            on_navigate.emit(Route::Fonctionnalites);
        })
    };

    html! {
        <div class="landing">
            <section class="hero">
                <MatrixRain />
                <div class="hero-overlay"></div>

                <div class="hero-content">
                    <div class="hero-brand">
                        <IconGlyph icon={Icon::Bot} class={classes!("icon-large")} />
                        <span class="gradient-text">{"AIXPT"}</span>
                    </div>

                    <h1 class="hero-title">
                        {"L’automatisation IA qui propulse vos affaires."}
                        <br />
                        <AnimatedTextCycle words={AUTOMATION_WORDS} interval={3000} class={classes!("gradient-text")} />
                    </h1>

                    <p class="hero-subtitle">
                        {"Transformez votre entreprise avec des solutions d'automatisation IA de pointe qui évoluent \
                          avec vos ambitions et révolutionnent votre façon de travailler"}
                    </p>

                    <div class="hero-cta">
                        <Button class={classes!("pill-cta")} onclick={on_start}>
                            <IconGlyph icon={Icon::Bot} />
                            <span>{"Commencer Votre Voyage IA"}</span>
                            <IconGlyph icon={Icon::ArrowRight} />
                        </Button>
                    </div>

                    <div class="feature-cards">
                        { for FEATURES.iter().enumerate().map(|(i, (icon, title, description))| html! {
                            <div class="feature-card" style={format!("animation-delay: {}ms;", 1600 + i * 200)}>
                                <div class="feature-icon"><IconGlyph icon={*icon} /></div>
                                <h3>{*title}</h3>
                                <p>{*description}</p>
                            </div>
                        }) }
                    </div>
                </div>

                <div class="hero-fade"></div>
            </section>

            <IntegrationsCarousel />
        </div>
    }
}
