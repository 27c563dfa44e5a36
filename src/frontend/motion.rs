use std::ops::Deref;
use std::rc::Rc;

use js_sys::Array;
use serde_json::json;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};
use yew::prelude::*;

use super::platform::{document, prefers_reduced_motion};
use crate::log::{log_event, LogLevel};
use crate::motion::{Pose, Registration, Trigger, Tween, VisibilityAnimator, VisibilityLatch};

/// Drives tweens with CSS transitions, started by an `IntersectionObserver`.
#[derive(Clone, Copy, Debug, Default)]
pub struct DomAnimator;

fn query_all(selector: &str) -> Vec<HtmlElement> {
    let Some(nodes) = document().and_then(|d| d.query_selector_all(selector).ok()) else {
        return Vec::new();
    };

    (0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

fn query_first(selector: &str) -> Option<Element> {
    document()?.query_selector(selector).ok().flatten()
}

fn set_pose(element: &HtmlElement, pose: &Pose) {
    let style = element.style();
    let _ = style.set_property("transform", &pose.transform());
    let _ = style.set_property("opacity", &pose.opacity_css());
}

fn settle(elements: &[HtmlElement], pose: &Pose) {
    for element in elements {
        let _ = element.style().remove_property("transition");
        set_pose(element, pose);
    }
}

fn prepare(elements: &[HtmlElement], tween: &Tween) {
    for element in elements {
        let _ = element.style().set_property("transition", "none");
        set_pose(element, &tween.from);
    }
}

fn launch(elements: &[HtmlElement], tween: &Tween) {
    let transition = tween.transition_css();
    for (index, element) in elements.iter().enumerate() {
        // Reading layout commits the start pose so the transition runs from it.
        let _ = element.offset_height();
        let style = element.style();
        let _ = style.set_property("transition", &transition);
        let _ = style.set_property(
            "transition-delay",
            &format!("{}ms", tween.start_delay_ms(index)),
        );
        set_pose(element, &tween.to);
    }
}

fn report_missing(selector: &str) {
    log_event(
        LogLevel::Debug,
        "animation_target_missing",
        json!({ "selector": selector }),
    );
}

impl VisibilityAnimator for DomAnimator {
    fn register(&self, targets: &str, trigger: Trigger, tween: Tween) -> Registration {
        let elements = query_all(targets);
        if elements.is_empty() {
            report_missing(targets);
            return Registration::noop();
        }

        if prefers_reduced_motion() {
            settle(&elements, &tween.to);
            return Registration::noop();
        }

        let anchor = match trigger.anchor {
            Some(selector) => query_first(selector),
            None => Some(Element::from(elements[0].clone())),
        };
        let Some(anchor) = anchor else {
            report_missing(trigger.anchor.unwrap_or(targets));
            return Registration::noop();
        };

        prepare(&elements, &tween);

        let mut latch = VisibilityLatch::for_tween(&tween);
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                let intersecting = entries.iter().any(|entry| {
                    entry
                        .unchecked_into::<IntersectionObserverEntry>()
                        .is_intersecting()
                });

                if latch.observe(intersecting) {
                    launch(&elements, &tween);
                } else if !intersecting && !tween.once {
                    prepare(&elements, &tween);
                }

                if latch.is_spent() {
                    observer.disconnect();
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_root_margin(&trigger.root_margin());
        init.set_threshold(&JsValue::from_f64(0.0));

        let Ok(observer) =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
        else {
            return Registration::noop();
        };
        observer.observe(&anchor);

        Registration::new(move || {
            observer.disconnect();
            drop(callback);
        })
    }

    fn play(&self, targets: &str, tween: Tween) {
        let elements = query_all(targets);
        if elements.is_empty() {
            report_missing(targets);
            return;
        }

        if prefers_reduced_motion() {
            settle(&elements, &tween.to);
            return;
        }

        prepare(&elements, &tween);
        launch(&elements, &tween);
    }
}

/// Context value through which sections reach the animation capability.
#[derive(Clone)]
pub struct AnimatorHandle(Rc<dyn VisibilityAnimator>);

impl AnimatorHandle {
    pub fn new(animator: impl VisibilityAnimator + 'static) -> Self {
        Self(Rc::new(animator))
    }
}

impl Default for AnimatorHandle {
    fn default() -> Self {
        Self::new(DomAnimator)
    }
}

impl PartialEq for AnimatorHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for AnimatorHandle {
    type Target = dyn VisibilityAnimator;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

#[hook]
pub fn use_animator() -> AnimatorHandle {
    use_context::<AnimatorHandle>().unwrap_or_default()
}

/// Registers a scroll-triggered tween after mount and drops it on unmount.
#[hook]
pub fn use_scroll_animation(targets: &'static str, trigger: Trigger, tween: Tween) {
    let animator = use_animator();
    use_effect_with((), move |_| {
        let registration = animator.register(targets, trigger, tween);
        move || drop(registration)
    });
}
