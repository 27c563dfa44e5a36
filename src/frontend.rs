mod about;
mod contact;
mod gallery;
mod header;
mod hero;
mod loading;
mod motion;
mod overlays;
mod platform;
mod projects;
mod relay;
mod services;
mod skills;

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use serde_json::json;
use web_sys::window;
use yew::prelude::*;

use crate::config::site_config;
use crate::gate::{EntrancePass, LoadingGate, ENTRANCE_TARGETS, ENTRANCE_TWEEN};
use crate::log::{log_event, LogLevel};
use crate::theme::ThemeStore;

use self::about::About;
use self::contact::Contact;
use self::gallery::Gallery;
use self::header::Header;
use self::hero::Hero;
use self::loading::LoadingScreen;
use self::motion::AnimatorHandle;
use self::overlays::{CursorFollower, ScrollProgress};
use self::platform::{apply_theme, apply_theme_with_transition, BrowserStorage};
use self::projects::Projects;
use self::services::Services;
use self::skills::Skills;

pub enum ThemeAction {
    Toggle,
}

impl Reducible for ThemeStore<BrowserStorage> {
    type Action = ThemeAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ThemeAction::Toggle => {
                next.toggle();
            }
        }
        next.into()
    }
}

pub enum GateAction {
    Finish,
}

impl Reducible for LoadingGate {
    type Action = GateAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            GateAction::Finish if !self.is_ready() => self.finish().into(),
            GateAction::Finish => self,
        }
    }
}

#[function_component(App)]
fn app() -> Html {
    let config = site_config();
    let theme = use_reducer(|| ThemeStore::open(BrowserStorage));
    let gate = use_reducer(LoadingGate::default);
    let entrance = use_mut_ref(EntrancePass::default);
    let theme_applied = use_mut_ref(|| false);
    let animator = use_memo((), |_| AnimatorHandle::default());

    {
        let current = theme.get();
        use_effect_with(current, move |current| {
            let mut applied = theme_applied.borrow_mut();
            if *applied {
                apply_theme_with_transition(*current);
            } else {
                apply_theme(*current);
                *applied = true;
            }
            || ()
        });
    }

    {
        let handle = gate.clone();
        use_effect_with((), move |_| {
            let timeout = handle.delay_ms(config).map(|delay| {
                Timeout::new(delay, move || handle.dispatch(GateAction::Finish))
            });
            move || drop(timeout)
        });
    }

    {
        let animator = (*animator).clone();
        use_effect_with(*gate, move |gate| {
            if entrance.borrow_mut().claim(*gate) {
                log_event(LogLevel::Info, "loading_gate_ready", json!({}));
                animator.play(ENTRANCE_TARGETS, ENTRANCE_TWEEN);
            }
            || ()
        });
    }

    if !gate.is_ready() {
        return html! { <LoadingScreen duration_ms={config.loading_gate_ms} /> };
    }

    let on_toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |_| theme.dispatch(ThemeAction::Toggle))
    };

    html! {
        <ContextProvider<AnimatorHandle> context={(*animator).clone()}>
            <a class="skip-link" href="#home">{"Skip to main content"}</a>
            <CursorFollower />
            <ScrollProgress />
            <Header theme={theme.get()} on_toggle_theme={on_toggle_theme} />
            <main id="content">
                <Hero />
                <About />
                <Services />
                <Skills />
                <Projects />
                <Gallery />
                <Contact />
            </main>
        </ContextProvider<AnimatorHandle>>
    }
}

pub fn run() {
    yew::Renderer::<App>::with_root(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
    )
    .render();
}
