#[cfg(test)]
#[path = "hooks_test.rs"]
mod hooks_test;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

/// Share of an element's height inside a viewport of `viewport_height`,
/// given its bounding rect `top` and `bottom`.
pub fn visible_fraction(top: f64, bottom: f64, viewport_height: f64) -> f64 {
    let height = bottom - top;
    if height <= 0.0 || viewport_height <= 0.0 {
        return 0.0;
    }
    let visible = bottom.min(viewport_height) - top.max(0.0);
    (visible / height).clamp(0.0, 1.0)
}

fn measure(node: &NodeRef, threshold: f64) -> bool {
    let Some(element) = node.cast::<Element>() else {
        return false;
    };
    let viewport_height = web_sys::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    let rect = element.get_bounding_client_rect();
    let fraction = visible_fraction(rect.top(), rect.bottom(), viewport_height);
    fraction > 0.0 && fraction >= threshold
}

/// Tracks whether at least `threshold` of the referenced element is on
/// screen. Re-evaluated on scroll and resize.
#[hook]
pub fn use_in_view(node: NodeRef, threshold: f64) -> bool {
    let in_view = use_state_eq(|| false);

    {
        let in_view = in_view.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let window = web_sys::window();
                let node = node.clone();
                let check = Closure::wrap(Box::new(move || {
                    in_view.set(measure(&node, threshold));
                }) as Box<dyn Fn()>);

                if let Some(window) = &window {
                    for event in ["scroll", "resize"] {
                        if window
                            .add_event_listener_with_callback(event, check.as_ref().unchecked_ref())
                            .is_err()
                        {
                            log::warn!("could not listen for {} events", event);
                        }
                    }
                }
                // Initial measurement once the element is mounted
                let _ = check
                    .as_ref()
                    .unchecked_ref::<js_sys::Function>()
                    .call0(&wasm_bindgen::JsValue::NULL);

                move || {
                    if let Some(window) = window {
                        for event in ["scroll", "resize"] {
                            let _ = window.remove_event_listener_with_callback(
                                event,
                                check.as_ref().unchecked_ref(),
                            );
                        }
                    }
                }
            },
            node,
        );
    }

    *in_view
}

/// Scrolls the window back to the top when the calling page mounts.
#[hook]
pub fn use_scroll_to_top() {
    use_effect_with_deps(
        |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );
}
