use yew::prelude::*;

use super::motion::use_scroll_animation;
use super::platform::body;
use crate::content::{ABOUT_IMAGE, ABOUT_PARAGRAPHS, AWARD, EXPERIENCES, HIGHLIGHTS, OWNER_NAME};
use crate::motion::{Easing, Trigger, Tween};
use crate::overlay::{OverlayPolicy, OverlayTarget};

const SECTION_TRIGGER: Trigger = Trigger::top_at(0.8).on(".about-section");

#[function_component(About)]
pub fn about() -> Html {
    let award_open = use_state(|| false);

    use_scroll_animation(
        ".about-image",
        SECTION_TRIGGER,
        Tween::slide_in(-100.0, 0.0, 1_200).from_scale(0.8),
    );
    use_scroll_animation(
        ".about-content",
        SECTION_TRIGGER,
        Tween::slide_in(100.0, 0.0, 1_000),
    );
    use_scroll_animation(
        ".timeline-entry",
        Trigger::top_at(0.85).on(".timeline"),
        Tween::slide_in(0.0, 40.0, 700)
            .eased(Easing::Power2InOut)
            .staggered(150),
    );

    let on_award = |target: OverlayTarget| {
        let award_open = award_open.clone();
        Callback::from(move |event: MouseEvent| {
            event.stop_propagation();
            if OverlayPolicy::LIGHTBOX.dismisses(target) {
                award_open.set(false);
            }
        })
    };

    let open_award = {
        let award_open = award_open.clone();
        Callback::from(move |_| award_open.set(true))
    };

    let highlights = HIGHLIGHTS
        .iter()
        .map(|highlight| {
            html! {
                <div key={highlight.title} class="highlight-card">
                    <span class="highlight-glyph" aria-hidden="true">{highlight.glyph}</span>
                    <h4>{highlight.title}</h4>
                    <p>{highlight.description}</p>
                </div>
            }
        })
        .collect::<Html>();

    let timeline = EXPERIENCES
        .iter()
        .map(|entry| {
            html! {
                <li key={entry.title} class="timeline-entry">
                    <span class="timeline-period">{entry.period}</span>
                    <h4>{entry.title}</h4>
                    <p class="timeline-org">{entry.organization}</p>
                    <p>{entry.description}</p>
                </li>
            }
        })
        .collect::<Html>();

    let modal = match (*award_open, body()) {
        (true, Some(host)) => create_portal(
            html! {
                <div class="modal-backdrop" onclick={on_award(OverlayTarget::Backdrop)}>
                    <div
                        class="modal-panel award-modal"
                        role="dialog"
                        aria-modal="true"
                        aria-label={AWARD.title}
                        onclick={on_award(OverlayTarget::Panel)}
                    >
                        <button
                            type="button"
                            class="modal-close cursor-hover"
                            aria-label="Close"
                            onclick={on_award(OverlayTarget::CloseControl)}
                        >
                            {"✕"}
                        </button>
                        <img src={AWARD.image} alt={AWARD.title} class="award-image" />
                        <div class="award-body">
                            <span class="award-badge">{AWARD.badge}</span>
                            <h3>{AWARD.title}</h3>
                            <p class="award-subtitle">{AWARD.subtitle}</p>
                            <p>{AWARD.description}</p>
                        </div>
                    </div>
                </div>
            },
            host.into(),
        ),
        _ => Html::default(),
    };

    html! {
        <section id="about" class="about-section">
            <div class="section-intro fade-in-up">
                <h2 class="section-title">{"About "}<span class="gradient-text">{"Me"}</span></h2>
            </div>

            <div class="about-grid">
                <div class="about-image">
                    <img src={ABOUT_IMAGE} alt={OWNER_NAME} />
                </div>

                <div class="about-content">
                    { for ABOUT_PARAGRAPHS.iter().map(|paragraph| html! { <p>{*paragraph}</p> }) }

                    <button type="button" class="award-card cursor-hover" onclick={open_award}>
                        <img src={AWARD.image} alt={AWARD.title} class="award-thumb" />
                        <span class="award-badge">{AWARD.badge}</span>
                        <strong>{AWARD.title}</strong>
                        <span>{AWARD.subtitle}</span>
                    </button>

                    <div class="highlights-grid">{highlights}</div>
                </div>
            </div>

            <h3 class="subsection-title">{"Experience & Leadership"}</h3>
            <ol class="timeline">{timeline}</ol>

            {modal}
        </section>
    }
}
