use yew::prelude::*;
use yew_hooks::use_interval;

use crate::components::icon::IconGlyph;
use crate::data::workflows::Workflow;
use crate::hooks::use_in_view;
use crate::state::timeline::{AiPulse, FlowDirection, Timeline, TimelineAction, FRAME_MS};

/// Share of the card that must be on screen for the loop to run.
const VISIBILITY_THRESHOLD: f64 = 0.3;

#[derive(Properties, PartialEq)]
struct FlowLineProps {
    progress: f64,
    direction: FlowDirection,
}

#[function_component(FlowLine)]
fn flow_line(props: &FlowLineProps) -> Html {
    let p = props.progress.clamp(0.0, 1.0);
    let (towards, start, end, stop, clip) = match props.direction {
        FlowDirection::Forward => (
            "to right",
            "#007AFF",
            "#00D9F5",
            p * 100.0,
            format!("inset(0 {}% 0 0)", (1.0 - p) * 100.0),
        ),
        FlowDirection::Backward => (
            "to left",
            "#00D9F5",
            "#007AFF",
            (1.0 - p) * 100.0,
            format!("inset(0 0 0 {}%)", (1.0 - p) * 100.0),
        ),
    };
    let style = format!(
        "background: linear-gradient({}, transparent 0%, {} {}%, {} {}%, transparent 100%); clip-path: {};",
        towards,
        start,
        stop,
        end,
        stop + 10.0,
        clip
    );

    html! {
        <div class="flow-line">
            <div class="flow-line-fill" style={style}></div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct WorkflowCardProps {
    pub workflow: &'static Workflow,
    pub index: usize,
}

#[function_component(WorkflowCard)]
pub fn workflow_card(props: &WorkflowCardProps) -> Html {
    let workflow = props.workflow;
    let card_ref = use_node_ref();
    let in_view = use_in_view(card_ref.clone(), VISIBILITY_THRESHOLD);
    let timeline = use_reducer(|| Timeline::new(workflow.outputs.len()));

    {
        let dispatcher = timeline.dispatcher();
        let index = props.index;
        use_effect_with_deps(
            move |in_view| {
                if *in_view {
                    dispatcher.dispatch(TimelineAction::Enter { index });
                } else {
                    dispatcher.dispatch(TimelineAction::Leave);
                }
                || ()
            },
            in_view,
        );
    }

    {
        let dispatcher = timeline.dispatcher();
        let millis = if in_view { FRAME_MS } else { 0 };
        use_interval(move || dispatcher.dispatch(TimelineAction::Tick(FRAME_MS)), millis);
    }

    let ai_pulse_class = match timeline.ai_pulse() {
        AiPulse::Pulsing => "pulsing",
        AiPulse::Idle => "",
    };
    let (scale, opacity) = timeline.output_emphasis();

    html! {
        <div
            ref={card_ref}
            class="workflow-card"
            style={format!("animation-delay: {}ms;", props.index * 200)}
            data-phase={timeline.phase().index().to_string()}
        >
            <div class="workflow-card-glow" style={format!("background: {};", workflow.gradient)}></div>

            <div class="workflow-industry">
                <span class="workflow-accent" style={format!("background: {};", workflow.accent)}></span>
                <span>{workflow.industry}</span>
            </div>
            <h3 class="workflow-title">{workflow.title}</h3>
            <p class="workflow-description">{workflow.description}</p>

            <div class="workflow-diagram">
                <div class="workflow-node input active">
                    <div class="node-pulse-host">
                        <div key={timeline.input_pulses()} class="node-box input-box pulse-once">
                            <IconGlyph icon={workflow.input_icon} />
                            <div class="node-shimmer"></div>
                        </div>
                    </div>
                    <span class="node-label">{workflow.input_label}</span>
                </div>

                if timeline.input_flow_visible() || timeline.input_to_ai() > 0.0 {
                    <FlowLine progress={timeline.input_to_ai()} direction={timeline.input_direction()} />
                } else {
                    <div class="flow-line"></div>
                }

                <div class={classes!("workflow-node", "ai", timeline.ai_active().then(|| "active"))}>
                    <div
                        class={classes!("node-box", "ai-box", ai_pulse_class)}
                        style={format!("background: {};", workflow.gradient)}
                    >
                        <IconGlyph icon={workflow.ai_icon} class={classes!("icon-large")} />
                        <div class="ai-inner"></div>
                        <div class="ai-ring"></div>
                    </div>
                    <span class="node-label ai-label">{workflow.ai_label}</span>
                </div>

                if timeline.output_flow_visible() || timeline.ai_to_outputs() > 0.0 {
                    <FlowLine progress={timeline.ai_to_outputs()} direction={timeline.output_direction()} />
                } else {
                    <div class="flow-line"></div>
                }

                <div class="workflow-outputs">
                    { for workflow.outputs.iter().enumerate().map(|(i, output)| html! {
                        <div
                            key={i}
                            class="workflow-node output"
                            style={format!("transform: scale({:.3}); opacity: {:.3};", scale, opacity)}
                        >
                            <div class="node-box output-box">
                                <IconGlyph icon={output.icon} />
                                <div class={classes!("output-pulse", timeline.output_pulsing(i).then(|| "pulsing"))}></div>
                            </div>
                            <span class="node-label">{output.label}</span>
                            <span class="node-sublabel">{output.description}</span>
                        </div>
                    }) }
                </div>
            </div>

            <div class="workflow-keywords">
                { for workflow.keywords.iter().map(|keyword| html! {
                    <span class="keyword">{*keyword}</span>
                }) }
            </div>
        </div>
    }
}
