use std::rc::Rc;

use gloo_events::EventListener;
use web_sys::window;
use yew::prelude::*;

use super::motion::use_animator;
use super::platform::{scroll_to_section, scroll_y, section_bounds};
use crate::content::{LOGO_IMAGE, OWNER_NAME};
use crate::gate::HEADER_TWEEN;
use crate::nav::{NavState, SectionBounds, NAV_ITEMS};
use crate::theme::Theme;

pub enum NavAction {
    ToggleMenu,
    Navigate,
    Scrolled {
        scroll_y: f64,
        sections: Vec<SectionBounds>,
    },
}

impl Reducible for NavState {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        match action {
            NavAction::ToggleMenu => next.toggle_menu(),
            NavAction::Navigate => next.navigate(),
            NavAction::Scrolled { scroll_y, sections } => {
                next.observe_scroll(scroll_y, &sections)
            }
        }
        next.into()
    }
}

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub theme: Theme,
    pub on_toggle_theme: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let nav = use_reducer_eq(NavState::default);
    let animator = use_animator();

    use_effect_with((), move |_| {
        animator.play(".site-header", HEADER_TWEEN);
        || ()
    });

    {
        let nav = nav.clone();
        use_effect_with((), move |_| {
            let listener = window().map(|win| {
                EventListener::new(&win, "scroll", move |_| {
                    nav.dispatch(NavAction::Scrolled {
                        scroll_y: scroll_y(),
                        sections: section_bounds(NAV_ITEMS),
                    });
                })
            });
            move || drop(listener)
        });
    }

    let go_to = |id: &'static str| {
        let nav = nav.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            nav.dispatch(NavAction::Navigate);
            scroll_to_section(id);
        })
    };

    let on_toggle_menu = {
        let nav = nav.clone();
        Callback::from(move |_| nav.dispatch(NavAction::ToggleMenu))
    };

    let on_toggle_theme = {
        let on_toggle_theme = props.on_toggle_theme.clone();
        Callback::from(move |_| on_toggle_theme.emit(()))
    };

    let links = NAV_ITEMS
        .iter()
        .map(|item| {
            let class = classes!(
                "nav-link",
                "cursor-hover",
                (nav.active == item.id).then_some("active")
            );
            html! {
                <li key={item.id}>
                    <a href={format!("#{}", item.id)} class={class} onclick={go_to(item.id)}>
                        {item.label}
                    </a>
                </li>
            }
        })
        .collect::<Html>();

    html! {
        <header class="site-header">
            <nav class="nav-container" aria-label="Primary">
                <a href="#home" class="brand cursor-hover" onclick={go_to("home")}>
                    <img src={LOGO_IMAGE} alt={OWNER_NAME} class="brand-logo" />
                </a>

                <ul class={classes!("nav-links", nav.menu_open.then_some("open"))}>
                    {links}
                </ul>

                <div class="nav-actions">
                    <button
                        type="button"
                        class="theme-toggle cursor-hover"
                        onclick={on_toggle_theme}
                        aria-label={props.theme.toggle_label()}
                        title={props.theme.toggle_label()}
                    >
                        <span aria-hidden="true">{props.theme.icon()}</span>
                    </button>
                    <button
                        type="button"
                        class="menu-toggle cursor-hover"
                        onclick={on_toggle_menu}
                        aria-label={if nav.menu_open { "Close menu" } else { "Open menu" }}
                        aria-expanded={nav.menu_open.to_string()}
                    >
                        <span aria-hidden="true">{if nav.menu_open { "✕" } else { "☰" }}</span>
                    </button>
                </div>
            </nav>
        </header>
    }
}
