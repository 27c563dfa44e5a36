use yew::prelude::*;

use super::motion::use_scroll_animation;
use crate::content::{SkillGroup, FAMILIAR_WITH, META_SKILL_GROUPS, SKILL_GROUPS};
use crate::motion::{Trigger, Tween};

fn skill_card(group: &SkillGroup, class: &'static str) -> Html {
    html! {
        <div key={group.title} class={class}>
            <header class="skill-card-header">
                <span class="skill-glyph" aria-hidden="true">{group.glyph}</span>
                <h3>{group.title}</h3>
            </header>
            <ul class="skill-list">
                { for group.skills.iter().map(|skill| html! {
                    <li key={skill.name}>
                        <strong>{skill.name}</strong>
                        <span>{skill.description}</span>
                    </li>
                }) }
            </ul>
        </div>
    }
}

#[function_component(Skills)]
pub fn skills() -> Html {
    use_scroll_animation(
        ".skill-category",
        Trigger::top_at(0.8).on(".skills-grid"),
        Tween::slide_in(0.0, 50.0, 800).staggered(100),
    );
    use_scroll_animation(
        ".meta-skill-card",
        Trigger::top_at(0.85).on(".meta-skills-container"),
        Tween::slide_in(0.0, 30.0, 800).staggered(150),
    );

    html! {
        <section id="skills" class="skills-section">
            <div class="section-intro fade-in-up">
                <h2 class="section-title">{"Skills & "}<span class="gradient-text">{"Tools"}</span></h2>
            </div>

            <div class="skills-grid">
                { for SKILL_GROUPS.iter().map(|group| skill_card(group, "skill-category")) }
            </div>

            <div class="meta-skills-container">
                { for META_SKILL_GROUPS.iter().map(|group| skill_card(group, "meta-skill-card")) }
            </div>

            <div class="familiar-with">
                <h4>{"Also familiar with"}</h4>
                <ul class="tag-list">
                    { for FAMILIAR_WITH.iter().map(|name| html! { <li key={*name} class="tag">{*name}</li> }) }
                </ul>
            </div>
        </section>
    }
}
