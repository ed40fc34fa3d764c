use gloo_console::log;
use log::error;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::components::icon::{Icon, IconGlyph};
use crate::components::ui::{Button, TextArea, TextInput};
use crate::config::{support_phone_href, SUPPORT_EMAIL, SUPPORT_PHONE};
use crate::state::consultation::{ConsultationSession, Field, FieldKind};

#[derive(Properties, PartialEq)]
pub struct ConsultationModalProps {
    pub on_close: Callback<()>,
}

#[function_component(ConsultationModal)]
pub fn consultation_modal(props: &ConsultationModalProps) -> Html {
    // Lives outside the render cycle so a second submit event fired before
    // the next render still sees the in-flight flag.
    let session = use_mut_ref(ConsultationSession::default);
    let force_update = use_force_update();

    let on_overlay = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let stop_propagation = Callback::from(|e: MouseEvent| e.stop_propagation());
    let on_close_icon = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let on_submit = {
        let session = session.clone();
        let force_update = force_update.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let payload = session.borrow_mut().begin_submit();
            let Some(payload) = payload else {
                log!("consultation already submitted, ignoring");
                return;
            };
            force_update.force_update();

            let session = session.clone();
            let force_update = force_update.clone();
            spawn_local(async move {
                log!("sending consultation request");
                let result = api::send_consultation(&payload).await;
                if let Err(err) = &result {
                    error!("Consultation submission failed: {}", err);
                }
                session.borrow_mut().finish(result);
                force_update.force_update();
            });
        })
    };

    let on_done = {
        let session = session.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            session.borrow_mut().reset();
            on_close.emit(());
        })
    };

    let field_view = |field: Field| -> Html {
        let value = AttrValue::from(session.borrow().draft().get(field).to_string());
        let oninput = {
            let session = session.clone();
            let force_update = force_update.clone();
            Callback::from(move |value: String| {
                session.borrow_mut().set_field(field, value);
                force_update.force_update();
            })
        };
        let control = match field.kind() {
            FieldKind::Text => html! {
                <TextInput {value} {oninput} placeholder={field.placeholder()} required={field.required()} />
            },
            FieldKind::Email => html! {
                <TextInput kind="email" {value} {oninput} placeholder={field.placeholder()} required={field.required()} />
            },
            FieldKind::LongText => html! {
                <TextArea {value} {oninput} placeholder={field.placeholder()} required={field.required()} />
            },
        };
        html! {
            <div class="form-group">
                <label>
                    {field.label()}
                    if field.required() {
                        <span class="required">{" *"}</span>
                    }
                </label>
                {control}
            </div>
        }
    };

    let state = session.borrow();
    let sending = state.is_in_flight();

    html! {
        <div class="modal-overlay" onclick={on_overlay}>
            <div class="modal-content" onclick={stop_propagation}>
                <button class="modal-close" onclick={on_close_icon} aria-label="Fermer">
                    <IconGlyph icon={Icon::Close} />
                </button>

                if state.is_sent() {
                    <div class="modal-success">
                        <div class="success-icon">{"✓"}</div>
                        <h2>{"Merci !"}</h2>
                        <p>
                            {"Votre demande de consultation a bien été envoyée. Notre équipe vous contactera \
                              dans les plus brefs délais."}
                        </p>
                        <div class="success-contact">
                            <p>{"Vous pouvez aussi nous joindre directement :"}</p>
                            <a href={format!("mailto:{}", SUPPORT_EMAIL)}>
                                <IconGlyph icon={Icon::Mail} />
                                <span>{SUPPORT_EMAIL}</span>
                            </a>
                            <a href={support_phone_href()}>
                                <IconGlyph icon={Icon::Phone} />
                                <span>{SUPPORT_PHONE}</span>
                            </a>
                        </div>
                        <Button class={classes!("pill-cta")} onclick={on_done}>{"Fermer"}</Button>
                    </div>
                } else {
                    <form class="consultation-form" onsubmit={on_submit}>
                        <h2 class="modal-title">{"Formulaire de contact"}</h2>

                        <h3 class="form-section">{"Informations Personnelles"}</h3>
                        { for Field::ALL[..3].iter().map(|field| field_view(*field)) }

                        <h3 class="form-section">{"Informations sur le Projet"}</h3>
                        { for Field::ALL[3..].iter().map(|field| field_view(*field)) }

                        if let Some(err) = state.error() {
                            <div class="form-error" role="alert">
                                {"L'envoi a échoué. Veuillez réessayer ou nous écrire à "}
                                <a href={format!("mailto:{}", SUPPORT_EMAIL)}>{SUPPORT_EMAIL}</a>
                                {"."}
                                <span class="form-error-detail">{err.to_string()}</span>
                            </div>
                        }

                        <Button kind="submit" class={classes!("pill-cta", "submit")} disabled={sending}>
                            if sending {
                                {"Envoi en cours..."}
                            } else {
                                {"Réserver votre consultation"}
                            }
                        </Button>
                    </form>
                }
            </div>
        </div>
    }
}
