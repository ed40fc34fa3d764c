use super::*;

fn started(outputs: usize) -> Timeline {
    let mut timeline = Timeline::new(outputs);
    timeline.enter(0);
    timeline
}

// =============================================================
// Transition table
// =============================================================

#[test]
fn segments_are_indexed_by_phase() {
    for (i, seg) in SEGMENTS.iter().enumerate() {
        assert_eq!(seg.phase.index() as usize, i);
    }
}

#[test]
fn full_cycle_lasts_fourteen_point_seven_seconds() {
    let total: u32 = SEGMENTS.iter().map(Segment::duration_ms).sum();
    assert_eq!(total, 14_700);
}

#[test]
fn ease_in_out_hits_endpoints_and_midpoint() {
    assert_eq!(ease_in_out(0.0), 0.0);
    assert_eq!(ease_in_out(1.0), 1.0);
    assert_eq!(ease_in_out(0.5), 0.5);
    assert!(ease_in_out(0.25) < 0.25);
    assert!(ease_in_out(0.75) > 0.75);
    assert_eq!(ease_in_out(2.0), 1.0);
}

// =============================================================
// Visibility
// =============================================================

#[test]
fn hidden_timeline_ignores_ticks() {
    let mut timeline = Timeline::new(2);
    timeline.tick(5_000);
    assert_eq!(timeline.phase(), Phase::Idle);
    assert!(!timeline.is_visible());
}

#[test]
fn entry_is_staggered_by_index() {
    let mut timeline = Timeline::new(2);
    timeline.enter(2);
    timeline.tick(399);
    assert_eq!(timeline.phase(), Phase::Idle);
    timeline.tick(1);
    assert_eq!(timeline.phase(), Phase::AiActive);
    assert!(timeline.ai_active());
}

#[test]
fn first_card_starts_on_first_tick() {
    let mut timeline = started(2);
    timeline.tick(FRAME_MS);
    assert_eq!(timeline.phase(), Phase::AiActive);
}

#[test]
fn leaving_resets_phase_progress_and_pulses() {
    let mut timeline = started(2);
    timeline.tick(1_300 + 3_300 + 2_000 + 300);
    assert_eq!(timeline.phase(), Phase::AiToOutputs);
    assert!(timeline.output_pulsing(0));
    assert_eq!(timeline.input_to_ai(), 1.0);

    timeline.leave();
    assert_eq!(timeline.phase(), Phase::Idle);
    assert_eq!(timeline.input_to_ai(), 0.0);
    assert_eq!(timeline.ai_to_outputs(), 0.0);
    assert_eq!(timeline.ai_pulse(), AiPulse::Idle);
    assert!(!timeline.output_pulsing(0));
    assert!(!timeline.is_visible());

    timeline.tick(FRAME_MS);
    assert_eq!(timeline.phase(), Phase::Idle);
}

#[test]
fn reentering_restarts_from_the_beginning() {
    let mut timeline = started(2);
    timeline.tick(6_000);
    timeline.leave();
    timeline.enter(0);
    assert_eq!(timeline.phase(), Phase::Idle);
    timeline.tick(FRAME_MS);
    assert_eq!(timeline.phase(), Phase::AiActive);
    assert_eq!(timeline.input_to_ai(), 0.0);
}

#[test]
fn leave_mid_flow_via_reducer() {
    let timeline = Rc::new(Timeline::new(3));
    let timeline = timeline.reduce(TimelineAction::Enter { index: 0 });
    let timeline = timeline.reduce(TimelineAction::Tick(1_300 + 1_000));
    assert_eq!(timeline.phase(), Phase::InputToAi);
    assert_eq!(timeline.input_to_ai(), 0.5);
    let timeline = timeline.reduce(TimelineAction::Leave);
    assert_eq!(timeline.phase(), Phase::Idle);
    assert_eq!(timeline.input_to_ai(), 0.0);
}

// =============================================================
// Phase walk-through
// =============================================================

#[test]
fn walks_every_phase_with_its_effects() {
    let mut timeline = started(2);

    timeline.tick(1_300);
    assert_eq!(timeline.phase(), Phase::InputToAi);
    assert_eq!(timeline.input_direction(), FlowDirection::Forward);
    assert_eq!(timeline.input_pulses(), 1);
    assert!(timeline.input_flow_visible());
    assert_eq!(timeline.input_to_ai(), 0.0);

    timeline.tick(1_000);
    assert_eq!(timeline.input_to_ai(), 0.5);
    assert_eq!(timeline.ai_pulse(), AiPulse::Idle);

    timeline.tick(1_000);
    assert_eq!(timeline.input_to_ai(), 1.0);
    assert_eq!(timeline.ai_pulse(), AiPulse::Pulsing);

    timeline.tick(1_300);
    assert_eq!(timeline.phase(), Phase::AiToOutputs);
    assert!(timeline.outputs_active());
    assert!(timeline.output_flow_visible());
    assert_eq!(timeline.output_direction(), FlowDirection::Forward);

    timeline.tick(2_000);
    assert_eq!(timeline.ai_to_outputs(), 1.0);
    assert_eq!(timeline.ai_pulse(), AiPulse::Idle);
    assert!(timeline.output_pulsing(0));
    assert!(!timeline.output_pulsing(1));
    assert_eq!(timeline.output_emphasis(), (1.1, 1.0));

    timeline.tick(OUTPUT_PULSE_STAGGER_MS);
    assert!(timeline.output_pulsing(1));
    assert!(!timeline.output_pulsing(2));

    timeline.tick(1_100);
    assert_eq!(timeline.phase(), Phase::OutputsReturn);
    assert_eq!(timeline.output_direction(), FlowDirection::Backward);
    assert_eq!(timeline.input_direction(), FlowDirection::Backward);

    timeline.tick(1_999);
    assert!(timeline.output_pulsing(0));
    timeline.tick(1);
    assert_eq!(timeline.phase(), Phase::AiHold);
    assert_eq!(timeline.ai_to_outputs(), 0.0);
    assert!(!timeline.output_pulsing(0));

    timeline.tick(1_300);
    assert_eq!(timeline.phase(), Phase::InputReturn);
    assert_eq!(timeline.ai_pulse(), AiPulse::Pulsing);
    assert!(timeline.input_flow_visible());

    timeline.tick(2_000);
    assert_eq!(timeline.input_to_ai(), 0.0);
    assert_eq!(timeline.ai_pulse(), AiPulse::Idle);
    assert_eq!(timeline.input_pulses(), 2);

    timeline.tick(1_500);
    assert_eq!(timeline.phase(), Phase::Idle);
    assert!(!timeline.ai_active());

    timeline.tick(FRAME_MS);
    assert_eq!(timeline.phase(), Phase::AiActive);
}

#[test]
fn frame_ticks_visit_phases_in_order_and_loop() {
    let mut timeline = started(2);
    let mut visited: Vec<u8> = Vec::new();
    for _ in 0..390 {
        timeline.tick(FRAME_MS);
        let phase = timeline.phase().index();
        if visited.last() != Some(&phase) {
            visited.push(phase);
        }
    }
    assert_eq!(visited, vec![1, 2, 3, 4, 5, 6, 1]);
}

#[test]
fn outputs_are_dimmed_before_phase_three() {
    let mut timeline = started(2);
    timeline.tick(2_000);
    assert_eq!(timeline.output_emphasis(), (0.9, 0.6));
}
