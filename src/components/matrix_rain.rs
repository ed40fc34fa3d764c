use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

use crate::state::rain::{RainConfig, RainField};

const FRAME_MS: u32 = 33;

#[derive(Properties, PartialEq)]
pub struct MatrixRainProps {
    #[prop_or(16.0)]
    pub font_size: f64,
    #[prop_or(AttrValue::from("#0066ff"))]
    pub color: AttrValue,
    #[prop_or("01AIXPT")]
    pub characters: &'static str,
    #[prop_or(0.05)]
    pub fade_opacity: f64,
    #[prop_or(0.8)]
    pub speed: f64,
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
}

fn window_size() -> (f64, f64) {
    let Some(window) = web_sys::window() else {
        return (0.0, 0.0);
    };
    let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (width, height)
}

/// Falling-character background drawn on a canvas behind the hero.
#[function_component(MatrixRain)]
pub fn matrix_rain(props: &MatrixRainProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        let config = RainConfig {
            font_size: props.font_size,
            characters: props.characters,
            speed: props.speed,
        };
        let color = props.color.to_string();
        let fade = format!("rgba(0, 0, 0, {})", props.fade_opacity);
        use_effect_with_deps(
            move |_| {
                let mut interval = None;
                let mut on_resize: Option<Closure<dyn Fn()>> = None;
                match canvas_ref.cast::<HtmlCanvasElement>() {
                    Some(canvas) => match context_2d(&canvas) {
                        Some(ctx) => {
                            let (width, height) = window_size();
                            canvas.set_width(width as u32);
                            canvas.set_height(height as u32);
                            let font = format!("{}px monospace", config.font_size);
                            let field = Rc::new(RefCell::new(RainField::new(config, width, height)));

                            let resize = {
                                let canvas = canvas.clone();
                                let field = field.clone();
                                Closure::wrap(Box::new(move || {
                                    let (width, height) = window_size();
                                    canvas.set_width(width as u32);
                                    canvas.set_height(height as u32);
                                    field.borrow_mut().resize(width, height);
                                }) as Box<dyn Fn()>)
                            };
                            if let Some(window) = web_sys::window() {
                                if window
                                    .add_event_listener_with_callback("resize", resize.as_ref().unchecked_ref())
                                    .is_err()
                                {
                                    log::warn!("matrix rain: could not listen for resize");
                                }
                            }
                            on_resize = Some(resize);

                            interval = Some(Interval::new(FRAME_MS, move || {
                                let (width, height) = (canvas.width() as f64, canvas.height() as f64);
                                ctx.set_fill_style(&JsValue::from_str(&fade));
                                ctx.fill_rect(0.0, 0.0, width, height);
                                ctx.set_fill_style(&JsValue::from_str(&color));
                                ctx.set_font(&font);
                                for glyph in field.borrow_mut().step(js_sys::Math::random) {
                                    let _ = ctx.fill_text(&glyph.ch.to_string(), glyph.x, glyph.y);
                                }
                            }));
                        }
                        None => log::warn!("matrix rain: 2d context unavailable"),
                    },
                    None => log::warn!("matrix rain: canvas not mounted"),
                }
                move || {
                    drop(interval);
                    if let (Some(window), Some(resize)) = (web_sys::window(), on_resize) {
                        let _ = window.remove_event_listener_with_callback("resize", resize.as_ref().unchecked_ref());
                    }
                }
            },
            (),
        );
    }

    html! {
        <canvas ref={canvas_ref} class="matrix-rain" aria-hidden="true"></canvas>
    }
}
