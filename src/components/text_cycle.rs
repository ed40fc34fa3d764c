use yew::prelude::*;
use yew_hooks::use_interval;

use crate::state::carousel::{Carousel, CarouselAction, Stepping};

#[derive(Properties, PartialEq)]
pub struct AnimatedTextCycleProps {
    pub words: &'static [&'static str],
    #[prop_or(3000)]
    pub interval: u32,
    #[prop_or_default]
    pub class: Classes,
}

/// Swaps one word at a time; the key change replays the fade-in.
#[function_component(AnimatedTextCycle)]
pub fn animated_text_cycle(props: &AnimatedTextCycleProps) -> Html {
    let words = props.words;
    let cycle = use_reducer(|| Carousel::new(words.len(), 1, Stepping::Paged));

    {
        let cycle = cycle.dispatcher();
        let millis = if words.len() > 1 { props.interval } else { 0 };
        use_interval(move || cycle.dispatch(CarouselAction::Tick), millis);
    }

    let index = cycle.index();
    let word = words.get(index).copied().unwrap_or_default();

    html! {
        <span class={classes!("text-cycle", props.class.clone())}>
            <span key={index} class="text-cycle-word">{word}</span>
        </span>
    }
}
