use yew::prelude::*;

use crate::components::icon::{Icon, IconGlyph};
use crate::components::ui::Button;
use crate::config::{support_phone_href, PORTAL_URL, SUPPORT_EMAIL, SUPPORT_PHONE};
use crate::hooks::use_scroll_to_top;
use crate::routes::PageProps;

#[function_component(Contact)]
pub fn contact(props: &PageProps) -> Html {
    use_scroll_to_top();

    let on_book = {
        let on_open = props.on_open_consultation.clone();
        Callback::from(move |_: MouseEvent| on_open.emit(()))
    };

    html! {
        <div class="page contact-page">
            <section class="page-hero">
                <div class="section-inner">
                    <div class="eyebrow">
                        <IconGlyph icon={Icon::MessageCircle} />
                        <span>{"NOUS CONTACTER"}</span>
                    </div>
                    <h1>
                        {"Parlons de "}
                        <span class="gradient-text">{"votre projet"}</span>
                    </h1>
                    <p>{"Une question, une idée d'automatisation ? Notre équipe vous répond sous 24 heures ouvrables."}</p>
                </div>
            </section>

            <section class="contact-channels">
                <div class="section-inner grid-3">
                    <a class="feature-card contact-card" href={format!("mailto:{}", SUPPORT_EMAIL)}>
                        <div class="feature-icon"><IconGlyph icon={Icon::Mail} /></div>
                        <h3>{"Courriel"}</h3>
                        <p>{SUPPORT_EMAIL}</p>
                    </a>
                    <a class="feature-card contact-card" href={support_phone_href()}>
                        <div class="feature-icon"><IconGlyph icon={Icon::Phone} /></div>
                        <h3>{"Téléphone"}</h3>
                        <p>{SUPPORT_PHONE}</p>
                    </a>
                    <a class="feature-card contact-card" href={PORTAL_URL} target="_blank" rel="noopener noreferrer">
                        <div class="feature-icon"><IconGlyph icon={Icon::Globe} /></div>
                        <h3>{"Portail client"}</h3>
                        <p>{"Accéder au Portail"}</p>
                    </a>
                </div>
            </section>

            <section class="section-cta">
                <h3>{"Prêt à automatiser ?"}</h3>
                <Button class={classes!("pill-cta")} onclick={on_book}>
                    <IconGlyph icon={Icon::Calendar} />
                    <span>{"Réserver Une Consultation"}</span>
                </Button>
            </section>
        </div>
    }
}
