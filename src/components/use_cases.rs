use yew::prelude::*;

use crate::components::icon::{Icon, IconGlyph};
use crate::components::workflow_card::WorkflowCard;
use crate::data::workflows::WORKFLOWS;

#[derive(Properties, PartialEq)]
pub struct UseCasesSectionProps {
    pub on_open_consultation: Callback<()>,
}

#[function_component(UseCasesSection)]
pub fn use_cases_section(props: &UseCasesSectionProps) -> Html {
    let on_cta = {
        let on_open = props.on_open_consultation.clone();
        Callback::from(move |_: MouseEvent| on_open.emit(()))
    };

    html! {
        <section class="use-cases">
            <div class="section-inner">
                <div class="section-header reveal">
                    <div class="eyebrow">
                        <IconGlyph icon={Icon::Zap} />
                        <span>{"FLUX DE TRAVAIL AUTOMATISÉS IA"}</span>
                    </div>
                    <h2>
                        <span>{"Découvrez nos "}</span>
                        <span class="gradient-text">{"cas d'usage IA"}</span>
                    </h2>
                    <p>
                        {"Ces exemples illustrent comment nos agents IA transforment les opérations dans divers secteurs. \
                          Ce ne sont que quelques possibilités : nous concevons des solutions sur mesure pour répondre \
                          à tous vos besoins spécifiques."}
                    </p>
                </div>

                <div class="workflow-list">
                    { for WORKFLOWS.iter().enumerate().map(|(index, workflow)| html! {
                        <WorkflowCard key={workflow.id} {workflow} {index} />
                    }) }
                </div>

                <div class="section-cta">
                    <h3>{"Prêt à révolutionner votre secteur ?"}</h3>
                    <button class="pill-cta" onclick={on_cta}>
                        <span>{"Personnaliser Vos Solutions"}</span>
                        <IconGlyph icon={Icon::ArrowRight} />
                    </button>
                </div>
            </div>
        </section>
    }
}
