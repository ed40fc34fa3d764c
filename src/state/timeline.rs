//! Animation timeline for a workflow card.
//!
//! The card cycles input -> AI -> outputs -> AI -> input while it is on
//! screen. Every step is a row of [`SEGMENTS`]: an optional flow animation
//! of one progress track, a hold, and the effects fired when the step
//! starts and when its flow completes. A single ticker advances the
//! machine; leaving the viewport resets it.

#[cfg(test)]
#[path = "timeline_test.rs"]
mod timeline_test;

use std::rc::Rc;

use yew::prelude::*;

/// Ticker period while the card is visible.
pub const FRAME_MS: u32 = 40;
pub const HOLD_MS: u32 = 1300;
pub const FINAL_HOLD_MS: u32 = 1500;
pub const FLOW_MS: u32 = 2000;
/// Entry delay per card index so cards do not move in lockstep.
pub const STAGGER_MS: u32 = 200;
pub const OUTPUT_PULSE_STAGGER_MS: u32 = 200;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    AiActive,
    InputToAi,
    AiToOutputs,
    OutputsReturn,
    AiHold,
    InputReturn,
}

impl Phase {
    pub fn index(self) -> u8 {
        self as u8
    }

    fn next(self) -> Self {
        match self {
            Phase::Idle => Phase::AiActive,
            Phase::AiActive => Phase::InputToAi,
            Phase::InputToAi => Phase::AiToOutputs,
            Phase::AiToOutputs => Phase::OutputsReturn,
            Phase::OutputsReturn => Phase::AiHold,
            Phase::AiHold => Phase::InputReturn,
            Phase::InputReturn => Phase::Idle,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FlowDirection {
    #[default]
    Forward,
    Backward,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AiPulse {
    #[default]
    Idle,
    Pulsing,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Track {
    InputToAi,
    AiToOutputs,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    PulseInput,
    Ai(AiPulse),
    InputDirection(FlowDirection),
    StartOutputPulses,
    StopOutputPulses,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Flow {
    pub track: Track,
    pub target: f64,
    pub duration_ms: u32,
}

#[derive(Debug)]
pub struct Segment {
    pub phase: Phase,
    pub flow: Option<Flow>,
    pub hold_ms: u32,
    pub on_enter: &'static [Effect],
    pub on_complete: &'static [Effect],
}

impl Segment {
    pub fn duration_ms(&self) -> u32 {
        self.flow.map_or(0, |flow| flow.duration_ms) + self.hold_ms
    }
}

pub static SEGMENTS: [Segment; 7] = [
    Segment {
        phase: Phase::Idle,
        flow: None,
        hold_ms: 0,
        on_enter: &[],
        on_complete: &[],
    },
    Segment {
        phase: Phase::AiActive,
        flow: None,
        hold_ms: HOLD_MS,
        on_enter: &[],
        on_complete: &[],
    },
    Segment {
        phase: Phase::InputToAi,
        flow: Some(Flow { track: Track::InputToAi, target: 1.0, duration_ms: FLOW_MS }),
        hold_ms: HOLD_MS,
        on_enter: &[Effect::InputDirection(FlowDirection::Forward), Effect::PulseInput],
        on_complete: &[Effect::Ai(AiPulse::Pulsing)],
    },
    Segment {
        phase: Phase::AiToOutputs,
        flow: Some(Flow { track: Track::AiToOutputs, target: 1.0, duration_ms: FLOW_MS }),
        hold_ms: HOLD_MS,
        on_enter: &[],
        on_complete: &[Effect::Ai(AiPulse::Idle), Effect::StartOutputPulses],
    },
    Segment {
        phase: Phase::OutputsReturn,
        flow: Some(Flow { track: Track::AiToOutputs, target: 0.0, duration_ms: FLOW_MS }),
        hold_ms: 0,
        on_enter: &[Effect::InputDirection(FlowDirection::Backward)],
        on_complete: &[Effect::StopOutputPulses],
    },
    Segment {
        phase: Phase::AiHold,
        flow: None,
        hold_ms: HOLD_MS,
        on_enter: &[],
        on_complete: &[],
    },
    Segment {
        phase: Phase::InputReturn,
        flow: Some(Flow { track: Track::InputToAi, target: 0.0, duration_ms: FLOW_MS }),
        hold_ms: FINAL_HOLD_MS,
        on_enter: &[Effect::Ai(AiPulse::Pulsing)],
        on_complete: &[Effect::Ai(AiPulse::Idle), Effect::PulseInput],
    },
];

pub fn segment(phase: Phase) -> &'static Segment {
    &SEGMENTS[phase.index() as usize]
}

/// Smoothstep ease-in-out over `t` in `[0, 1]`.
pub fn ease_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

#[derive(Clone, Debug, PartialEq)]
pub struct Timeline {
    outputs: usize,
    visible: bool,
    started: bool,
    stagger_ms: u32,
    phase: Phase,
    elapsed_ms: u32,
    flow_from: f64,
    flow_done: bool,
    input_to_ai: f64,
    ai_to_outputs: f64,
    input_direction: FlowDirection,
    ai_pulse: AiPulse,
    output_pulse_ms: Option<u32>,
    input_pulses: u32,
}

pub enum TimelineAction {
    Enter { index: usize },
    Leave,
    Tick(u32),
}

impl Timeline {
    pub fn new(outputs: usize) -> Self {
        Self {
            outputs,
            visible: false,
            started: false,
            stagger_ms: 0,
            phase: Phase::Idle,
            elapsed_ms: 0,
            flow_from: 0.0,
            flow_done: false,
            input_to_ai: 0.0,
            ai_to_outputs: 0.0,
            input_direction: FlowDirection::Forward,
            ai_pulse: AiPulse::Idle,
            output_pulse_ms: None,
            input_pulses: 0,
        }
    }

    /// Card scrolled into view: restart from phase 0 after the index stagger.
    pub fn enter(&mut self, index: usize) {
        self.reset();
        self.visible = true;
        self.stagger_ms = STAGGER_MS.saturating_mul(index as u32);
    }

    /// Card left the view: stop everything and zero both tracks.
    pub fn leave(&mut self) {
        self.reset();
    }

    fn reset(&mut self) {
        let input_pulses = self.input_pulses;
        *self = Self::new(self.outputs);
        self.input_pulses = input_pulses;
    }

    pub fn tick(&mut self, dt_ms: u32) {
        if !self.visible {
            return;
        }
        let mut budget = dt_ms;

        if !self.started {
            let used = budget.min(self.stagger_ms);
            self.stagger_ms -= used;
            budget -= used;
            if self.stagger_ms > 0 {
                return;
            }
            self.started = true;
            self.begin(Phase::AiActive);
        }

        loop {
            let seg = segment(self.phase);
            let total = seg.duration_ms();
            let step = budget.min(total - self.elapsed_ms);
            self.elapsed_ms += step;
            budget -= step;
            if let Some(ms) = self.output_pulse_ms.as_mut() {
                *ms += step;
            }
            self.sample(seg);

            if self.elapsed_ms >= total {
                self.begin(self.phase.next());
            }
            if budget == 0 {
                break;
            }
        }
    }

    fn begin(&mut self, phase: Phase) {
        self.phase = phase;
        self.elapsed_ms = 0;
        self.flow_done = false;
        let seg = segment(phase);
        if let Some(flow) = seg.flow {
            self.flow_from = self.track(flow.track);
        }
        self.apply(seg.on_enter);
    }

    fn sample(&mut self, seg: &'static Segment) {
        let Some(flow) = seg.flow else {
            return;
        };
        if self.flow_done {
            return;
        }
        let t = f64::from(self.elapsed_ms.min(flow.duration_ms)) / f64::from(flow.duration_ms);
        let value = self.flow_from + (flow.target - self.flow_from) * ease_in_out(t);
        self.set_track(flow.track, value);
        if self.elapsed_ms >= flow.duration_ms {
            self.flow_done = true;
            self.set_track(flow.track, flow.target);
            self.apply(seg.on_complete);
        }
    }

    fn apply(&mut self, effects: &[Effect]) {
        for effect in effects {
            match *effect {
                Effect::PulseInput => self.input_pulses = self.input_pulses.wrapping_add(1),
                Effect::Ai(pulse) => self.ai_pulse = pulse,
                Effect::InputDirection(direction) => self.input_direction = direction,
                Effect::StartOutputPulses => self.output_pulse_ms = Some(0),
                Effect::StopOutputPulses => self.output_pulse_ms = None,
            }
        }
    }

    fn track(&self, track: Track) -> f64 {
        match track {
            Track::InputToAi => self.input_to_ai,
            Track::AiToOutputs => self.ai_to_outputs,
        }
    }

    fn set_track(&mut self, track: Track, value: f64) {
        match track {
            Track::InputToAi => self.input_to_ai = value,
            Track::AiToOutputs => self.ai_to_outputs = value,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn input_to_ai(&self) -> f64 {
        self.input_to_ai
    }

    pub fn ai_to_outputs(&self) -> f64 {
        self.ai_to_outputs
    }

    pub fn input_direction(&self) -> FlowDirection {
        self.input_direction
    }

    pub fn output_direction(&self) -> FlowDirection {
        if self.phase == Phase::OutputsReturn {
            FlowDirection::Backward
        } else {
            FlowDirection::Forward
        }
    }

    pub fn ai_pulse(&self) -> AiPulse {
        self.ai_pulse
    }

    pub fn ai_active(&self) -> bool {
        self.phase.index() >= Phase::AiActive.index()
    }

    pub fn outputs_active(&self) -> bool {
        self.phase.index() >= Phase::AiToOutputs.index()
    }

    pub fn input_flow_visible(&self) -> bool {
        matches!(self.phase, Phase::InputToAi | Phase::InputReturn)
    }

    pub fn output_flow_visible(&self) -> bool {
        matches!(self.phase, Phase::AiToOutputs | Phase::OutputsReturn)
    }

    /// Output nodes start pulsing one after another once the flow reaches them.
    pub fn output_pulsing(&self, output: usize) -> bool {
        if output >= self.outputs {
            return false;
        }
        let offset = OUTPUT_PULSE_STAGGER_MS.saturating_mul(output as u32);
        self.output_pulse_ms.map_or(false, |ms| ms >= offset)
    }

    /// Bumped on every input pulse; used as a key to replay the CSS animation.
    pub fn input_pulses(&self) -> u32 {
        self.input_pulses
    }

    /// (scale, opacity) of the output nodes.
    pub fn output_emphasis(&self) -> (f64, f64) {
        if self.outputs_active() {
            (0.9 + 0.2 * self.ai_to_outputs, 0.6 + 0.4 * self.ai_to_outputs)
        } else {
            (0.9, 0.6)
        }
    }
}

impl Reducible for Timeline {
    type Action = TimelineAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            TimelineAction::Enter { index } => next.enter(index),
            TimelineAction::Leave => next.leave(),
            TimelineAction::Tick(dt_ms) => next.tick(dt_ms),
        }
        Rc::new(next)
    }
}
