use gloo_timers::callback::Timeout;
use yew::prelude::*;

use super::motion::use_animator;
use super::platform::{random_unit, scroll_to_section};
use crate::content::{
    HERO_IMAGE, HERO_TAGLINE, OWNER_FIRST_NAME, OWNER_NAME, RESUME_DOWNLOAD_NAME, RESUME_PDF,
    ROLES, SOCIAL_LINKS,
};
use crate::gate::{
    HERO_CTA_TWEEN, HERO_PORTRAIT_TWEEN, HERO_SOCIAL_TWEEN, HERO_SUBTITLE_TWEEN, HERO_TITLE_TWEEN,
};
use crate::typing::{Phase, TypingCycler};

#[function_component(Hero)]
pub fn hero() -> Html {
    let cycler = use_state(|| TypingCycler::new(ROLES));
    let animator = use_animator();

    use_effect_with((), move |_| {
        animator.play(".hero-title", HERO_TITLE_TWEEN);
        animator.play(".hero-subtitle", HERO_SUBTITLE_TWEEN);
        animator.play(".hero-cta", HERO_CTA_TWEEN);
        animator.play(".hero-social a", HERO_SOCIAL_TWEEN);
        animator.play(".hero-portrait", HERO_PORTRAIT_TWEEN);
        || ()
    });

    {
        let handle = cycler.clone();
        use_effect_with((*cycler).clone(), move |current| {
            let mut next = current.clone();
            let timeout = Timeout::new(current.next_delay_ms(random_unit()), move || {
                next.tick();
                handle.set(next);
            });
            move || drop(timeout)
        });
    }

    let on_contact = Callback::from(|event: MouseEvent| {
        event.prevent_default();
        scroll_to_section("contact");
    });

    let typing = matches!(cycler.phase(), Phase::Typing | Phase::Deleting);
    let caret_class = classes!("caret", typing.then_some("is-typing"));

    let socials = SOCIAL_LINKS
        .iter()
        .map(|link| {
            let external = !link.href.starts_with("mailto:");
            html! {
                <a
                    key={link.label}
                    href={link.href}
                    class="social-link cursor-hover"
                    aria-label={link.label}
                    target={external.then_some("_blank")}
                    rel={external.then_some("noopener noreferrer")}
                >
                    <span aria-hidden="true">{link.glyph}</span>
                </a>
            }
        })
        .collect::<Html>();

    html! {
        <section id="home" class="hero-section">
            <div class="hero-backdrop" aria-hidden="true">
                <span class="orb orb-one"></span>
                <span class="orb orb-two"></span>
            </div>

            <div class="hero-grid">
                <div class="hero-copy">
                    <h1 class="hero-title">
                        <span class="hero-greeting">
                            {"Hi, I'm "}
                            <span class="wave" aria-hidden="true">{"👋"}</span>
                        </span>
                        <span class="gradient-text">{OWNER_FIRST_NAME}</span>
                    </h1>

                    <div class="hero-subtitle">
                        <p class="typing-line" aria-live="polite">
                            <span>{cycler.displayed()}</span>
                            <span class={caret_class} aria-hidden="true">{"|"}</span>
                        </p>
                        <p class="hero-tagline">{HERO_TAGLINE}</p>
                    </div>

                    <div class="hero-cta">
                        <a
                            href={RESUME_PDF}
                            download={RESUME_DOWNLOAD_NAME}
                            class="btn btn-primary cursor-hover"
                        >
                            {"Download Resume"}
                        </a>
                        <a href="#contact" class="btn btn-outline cursor-hover" onclick={on_contact}>
                            {"Let's Talk"}
                        </a>
                    </div>

                    <div class="hero-social">{socials}</div>
                </div>

                <div class="hero-portrait">
                    <div class="portrait-ring">
                        <img src={HERO_IMAGE} alt={OWNER_NAME} />
                    </div>
                </div>
            </div>

            <div class="scroll-indicator fade-in-up" aria-hidden="true">
                <span class="scroll-wheel"></span>
            </div>
        </section>
    }
}
