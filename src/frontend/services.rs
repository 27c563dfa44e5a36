use yew::prelude::*;

use super::motion::use_scroll_animation;
use super::platform::scroll_to_section;
use crate::content::SERVICES;
use crate::motion::{Easing, Trigger, Tween};

#[function_component(Services)]
pub fn services() -> Html {
    use_scroll_animation(
        ".service-card",
        Trigger::top_at(0.8).on(".services-section"),
        Tween::slide_in(0.0, 50.0, 800).staggered(100),
    );
    use_scroll_animation(
        ".cta-box",
        Trigger::top_at(0.85),
        Tween::slide_in(0.0, 30.0, 800)
            .from_scale(0.95)
            .eased(Easing::BackOut)
            .delayed(400),
    );

    let on_contact = Callback::from(|event: MouseEvent| {
        event.prevent_default();
        scroll_to_section("contact");
    });

    let cards = SERVICES
        .iter()
        .map(|service| {
            html! {
                <article key={service.title} class={classes!("service-card", service.tone)}>
                    <span class="service-glyph" aria-hidden="true">{service.glyph}</span>
                    <h3>{service.title}</h3>
                    <p>{service.description}</p>
                    <ul class="tag-list">
                        { for service.tags.iter().map(|tag| html! { <li class="tag">{*tag}</li> }) }
                    </ul>
                </article>
            }
        })
        .collect::<Html>();

    html! {
        <section id="services" class="services-section">
            <div class="section-intro fade-in-up">
                <h2 class="section-title">{"What I "}<span class="gradient-text">{"Do"}</span></h2>
                <p class="section-lead">
                    {"From code to community, the work I take on end to end."}
                </p>
            </div>

            <div class="services-grid">{cards}</div>

            <div class="cta-box">
                <h3>{"Have a project in mind?"}</h3>
                <p>{"Let's build something that works and looks good doing it."}</p>
                <a href="#contact" class="btn btn-primary cursor-hover" onclick={on_contact}>
                    {"Start a Conversation"}
                </a>
            </div>
        </section>
    }
}
