use std::rc::Rc;

use gloo_timers::callback::Timeout;
use serde_json::json;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::motion::use_scroll_animation;
use super::relay::EmailJsRelay;
use crate::config::site_config;
use crate::contact::{
    ContactDraft, ContactForm, EmailRelay, Field, RelayError, RelayRequest, SubmissionStatus,
    SUBJECT_OPTIONS,
};
use crate::content::{follow_links, CONTACT_CHANNELS, CONTACT_INTRO};
use crate::log::{log_event, LogLevel};
use crate::motion::{Trigger, Tween};

pub enum ContactAction {
    Edit(Field, String),
    Begin,
    Settle(Result<(), RelayError>),
    Reset,
}

impl Reducible for ContactForm {
    type Action = ContactAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ContactAction::Edit(field, value) => next.edit(field, value),
            ContactAction::Begin => {
                let _ = next.begin_submit();
            }
            ContactAction::Settle(outcome) => next.complete(outcome),
            ContactAction::Reset => next.reset_status(),
        }
        next.into()
    }
}

async fn deliver(params: ContactDraft) -> Result<(), RelayError> {
    let config = &site_config().relay;
    let request = RelayRequest::build(config, params)?;
    EmailJsRelay::new(config).send(&request).await
}

const SECTION_TRIGGER: Trigger = Trigger::top_at(0.8).on(".contact-section");

#[function_component(Contact)]
pub fn contact() -> Html {
    let form = use_reducer_eq(ContactForm::default);

    use_scroll_animation(
        ".contact-content",
        SECTION_TRIGGER,
        Tween::slide_in(0.0, 100.0, 1_000),
    );
    use_scroll_animation(
        ".contact-form",
        SECTION_TRIGGER,
        Tween::slide_in(100.0, 0.0, 1_000),
    );

    {
        let handle = form.clone();
        use_effect_with(form.status(), move |status| {
            let timeout = status.reset_after_ms(site_config()).map(|delay| {
                Timeout::new(delay, move || handle.dispatch(ContactAction::Reset))
            });
            move || drop(timeout)
        });
    }

    let on_input = |field: Field| {
        let form = form.clone();
        Callback::from(move |event: InputEvent| {
            let value = event.target_unchecked_into::<HtmlInputElement>().value();
            form.dispatch(ContactAction::Edit(field, value));
        })
    };

    let on_message = {
        let form = form.clone();
        Callback::from(move |event: InputEvent| {
            let value = event.target_unchecked_into::<HtmlTextAreaElement>().value();
            form.dispatch(ContactAction::Edit(Field::Message, value));
        })
    };

    let on_subject = {
        let form = form.clone();
        Callback::from(move |event: Event| {
            let value = event.target_unchecked_into::<HtmlSelectElement>().value();
            form.dispatch(ContactAction::Edit(Field::Title, value));
        })
    };

    let onsubmit = {
        let form = form.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();

            let mut attempt = (*form).clone();
            let params = match attempt.begin_submit() {
                Ok(params) => params,
                Err(blocked) => {
                    log_event(
                        LogLevel::Debug,
                        "contact_submit_blocked",
                        json!({ "reason": blocked.to_string() }),
                    );
                    return;
                }
            };

            form.dispatch(ContactAction::Begin);
            log_event(LogLevel::Info, "contact_submit_started", json!({}));

            let form = form.clone();
            spawn_local(async move {
                let outcome = deliver(params).await;
                form.dispatch(ContactAction::Settle(outcome));
            });
        })
    };

    let draft = form.draft();
    let status = form.status();

    let channels = CONTACT_CHANNELS
        .iter()
        .map(|channel| {
            html! {
                <a key={channel.title} href={channel.link} class="contact-channel cursor-hover">
                    <span class="channel-glyph" aria-hidden="true">{channel.glyph}</span>
                    <span>
                        <strong>{channel.title}</strong>
                        <span>{channel.value}</span>
                    </span>
                </a>
            }
        })
        .collect::<Html>();

    let follow = follow_links()
        .map(|link| {
            html! {
                <a
                    key={link.label}
                    href={link.href}
                    target="_blank"
                    rel="noopener noreferrer"
                    class="social-link cursor-hover"
                    aria-label={link.label}
                >
                    <span aria-hidden="true">{link.glyph}</span>
                </a>
            }
        })
        .collect::<Html>();

    let subjects = SUBJECT_OPTIONS
        .iter()
        .map(|option| {
            html! {
                <option
                    key={option.value}
                    value={option.value}
                    selected={draft.title == option.value}
                >
                    {option.label}
                </option>
            }
        })
        .collect::<Html>();

    let button_class = classes!(
        "btn",
        "btn-primary",
        "submit-button",
        "cursor-hover",
        match status {
            SubmissionStatus::Success => Some("is-success"),
            SubmissionStatus::Error => Some("is-error"),
            SubmissionStatus::Idle | SubmissionStatus::Pending => None,
        }
    );

    html! {
        <section id="contact" class="contact-section">
            <div class="section-intro fade-in-up">
                <h2 class="section-title">{"Get In "}<span class="gradient-text">{"Touch"}</span></h2>
            </div>

            <div class="contact-grid">
                <div class="contact-content">
                    <h3>{"Let's Connect"}</h3>
                    <p>{CONTACT_INTRO}</p>
                    <div class="contact-channels">{channels}</div>
                    <h4>{"Follow Me"}</h4>
                    <div class="contact-social">{follow}</div>
                </div>

                <form class="contact-form" onsubmit={onsubmit}>
                    <div class="form-row">
                        <label for="contact-name">{"Your Name"}</label>
                        <input
                            id="contact-name"
                            type="text"
                            name={Field::Name.name()}
                            required=true
                            placeholder="Your name"
                            value={draft.name.clone()}
                            oninput={on_input(Field::Name)}
                        />
                    </div>
                    <div class="form-row">
                        <label for="contact-email">{"Email Address"}</label>
                        <input
                            id="contact-email"
                            type="email"
                            name={Field::Email.name()}
                            required=true
                            placeholder="you@example.com"
                            value={draft.email.clone()}
                            oninput={on_input(Field::Email)}
                        />
                    </div>
                    <div class="form-row">
                        <label for="contact-subject">{"Subject"}</label>
                        <select
                            id="contact-subject"
                            name={Field::Title.name()}
                            required=true
                            onchange={on_subject}
                        >
                            <option value="" disabled=true selected={draft.title.is_empty()}>
                                {"Select a subject"}
                            </option>
                            {subjects}
                        </select>
                    </div>
                    <div class="form-row">
                        <label for="contact-message">{"Message"}</label>
                        <textarea
                            id="contact-message"
                            name={Field::Message.name()}
                            rows="5"
                            required=true
                            placeholder="Tell me about your idea..."
                            value={draft.message.clone()}
                            oninput={on_message}
                        />
                    </div>

                    <button type="submit" class={button_class} disabled={form.is_busy()}>
                        {status.button_label()}
                    </button>

                    if let Some(notice) = status.notice() {
                        <p
                            class={classes!("form-notice", (status == SubmissionStatus::Error).then_some("is-error"))}
                            role="status"
                        >
                            {notice}
                        </p>
                    }
                </form>
            </div>
        </section>
    }
}
