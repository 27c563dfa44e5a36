use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{window, Element};
use yew::prelude::*;

use super::platform::{prefers_reduced_motion, scroll_metrics};
use crate::nav::scroll_progress;

/// Selector for elements that enlarge the cursor follower on hover.
const HOVER_TARGETS: &str = ".cursor-hover";

#[function_component(ScrollProgress)]
pub fn scroll_progress_bar() -> Html {
    let progress = use_state_eq(|| 0.0_f64);

    {
        let progress = progress.clone();
        use_effect_with((), move |_| {
            let listener = window().map(|win| {
                EventListener::new(&win, "scroll", move |_| {
                    let (scroll_y, scroll_height, viewport_height) = scroll_metrics();
                    progress.set(scroll_progress(scroll_y, scroll_height, viewport_height));
                })
            });
            move || drop(listener)
        });
    }

    html! {
        <div class="scroll-progress" aria-hidden="true">
            <span
                class="scroll-progress-fill"
                style={format!("transform: scaleX({:.4});", *progress)}
            ></span>
        </div>
    }
}

#[derive(Clone, Copy, PartialEq, Default)]
struct Pointer {
    x: i32,
    y: i32,
    hovering: bool,
    seen: bool,
}

#[function_component(CursorFollower)]
pub fn cursor_follower() -> Html {
    let pointer = use_state_eq(Pointer::default);

    {
        let pointer = pointer.clone();
        use_effect_with((), move |_| {
            let listener = window()
                .filter(|_| !prefers_reduced_motion())
                .map(|win| {
                    EventListener::new(&win, "mousemove", move |event| {
                        let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
                            return;
                        };
                        let hovering = mouse
                            .target()
                            .and_then(|target| target.dyn_into::<Element>().ok())
                            .and_then(|element| element.closest(HOVER_TARGETS).ok().flatten())
                            .is_some();
                        pointer.set(Pointer {
                            x: mouse.client_x(),
                            y: mouse.client_y(),
                            hovering,
                            seen: true,
                        });
                    })
                });
            move || drop(listener)
        });
    }

    if !pointer.seen {
        return Html::default();
    }

    let style = format!(
        "transform: translate3d({}px, {}px, 0) translate(-50%, -50%);",
        pointer.x, pointer.y
    );

    html! {
        <div
            class={classes!("cursor-follower", pointer.hovering.then_some("is-hovering"))}
            style={style}
            aria-hidden="true"
        ></div>
    }
}
