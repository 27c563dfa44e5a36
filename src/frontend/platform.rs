use js_sys::{Function, Reflect};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, Document, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, Storage};

use crate::nav::{NavItem, SectionBounds};
use crate::theme::{Theme, ThemeStorage, THEME_KEY};

pub fn document() -> Option<Document> {
    window()?.document()
}

fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok().flatten()
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl ThemeStorage for BrowserStorage {
    fn load(&self) -> Option<String> {
        local_storage()?.get_item(THEME_KEY).ok().flatten()
    }

    fn store(&self, value: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(THEME_KEY, value);
        }
    }
}

pub fn apply_theme(theme: Theme) {
    if let Some(root) = document().and_then(|d| d.document_element()) {
        let _ = root.set_attribute("data-theme", theme.as_str());
    }
}

pub fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| {
            w.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

pub fn apply_theme_with_transition(theme: Theme) {
    if prefers_reduced_motion() {
        apply_theme(theme);
        return;
    }

    let Some(document) = document() else {
        apply_theme(theme);
        return;
    };

    let document_js: JsValue = document.into();
    let Ok(start_view_transition) =
        Reflect::get(&document_js, &JsValue::from_str("startViewTransition"))
    else {
        apply_theme(theme);
        return;
    };

    let Some(start_view_transition) = start_view_transition.dyn_ref::<Function>() else {
        apply_theme(theme);
        return;
    };

    // The browser calls back after this function returns.
    let callback = Closure::once_into_js(move || apply_theme(theme));

    if start_view_transition.call1(&document_js, &callback).is_err() {
        apply_theme(theme);
    }
}

pub fn scroll_to_section(id: &str) {
    let Some(section) = document().and_then(|d| d.get_element_by_id(id)) else {
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(if prefers_reduced_motion() {
        ScrollBehavior::Auto
    } else {
        ScrollBehavior::Smooth
    });
    section.scroll_into_view_with_scroll_into_view_options(&options);
}

pub fn random_unit() -> f64 {
    js_sys::Math::random()
}

pub fn section_bounds(items: &[NavItem]) -> Vec<SectionBounds> {
    let Some(document) = document() else {
        return Vec::new();
    };

    items
        .iter()
        .filter_map(|item| {
            let element = document
                .get_element_by_id(item.id)?
                .dyn_into::<HtmlElement>()
                .ok()?;
            Some(SectionBounds {
                id: item.id,
                top: f64::from(element.offset_top()),
                height: f64::from(element.offset_height()),
            })
        })
        .collect()
}

pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

/// `(scroll_y, scroll_height, viewport_height)` of the page.
pub fn scroll_metrics() -> (f64, f64, f64) {
    let Some(win) = window() else {
        return (0.0, 0.0, 0.0);
    };

    let scroll_height = win
        .document()
        .and_then(|d| d.document_element())
        .map(|root| f64::from(root.scroll_height()))
        .unwrap_or(0.0);
    let viewport_height = win
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0);

    (scroll_y(), scroll_height, viewport_height)
}

pub fn body() -> Option<HtmlElement> {
    document()?.body()
}
