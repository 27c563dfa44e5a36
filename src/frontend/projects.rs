use std::rc::Rc;

use yew::prelude::*;

use super::motion::use_scroll_animation;
use super::platform::body;
use crate::motion::{Trigger, Tween};
use crate::overlay::OverlayTarget;
use crate::projects::{ProjectGroup, ProjectItem, ProjectSelection, TagPreview, CARD_TAG_LIMIT};

pub enum SelectionAction {
    Open(i32),
    Click(OverlayTarget),
}

impl Reducible for ProjectSelection {
    type Action = SelectionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        match action {
            SelectionAction::Open(id) => {
                next.open(id);
                let _ = next.resolve();
            }
            SelectionAction::Click(target) => next.click(target),
        }
        next.into()
    }
}

#[derive(Properties, PartialEq)]
struct CardProps {
    project: &'static ProjectItem,
    on_open: Callback<i32>,
}

#[function_component(ProjectCard)]
fn project_card(props: &CardProps) -> Html {
    let project = props.project;
    let preview = TagPreview::of(project.technologies, CARD_TAG_LIMIT);

    let onclick = {
        let on_open = props.on_open.clone();
        let id = project.id;
        Callback::from(move |_| on_open.emit(id))
    };
    let keep_link = Callback::from(|event: MouseEvent| event.stop_propagation());

    html! {
        <article class="project-card cursor-hover" onclick={onclick}>
            <div class="project-media">
                <img src={project.image} alt={project.title} loading="lazy" />
                if project.featured {
                    <span class="featured-badge">{"Featured"}</span>
                }
            </div>
            <div class="project-body">
                <span class="project-category">{project.category}</span>
                <h4>{project.title}</h4>
                <p class="project-summary">{project.description}</p>
                <ul class="tag-list">
                    { for preview.shown.iter().map(|tag| html! { <li class="tag">{*tag}</li> }) }
                    if let Some(badge) = preview.badge() {
                        <li class="tag tag-more">{badge}</li>
                    }
                </ul>
                <div class="project-links">
                    <a
                        href={project.live_url}
                        target="_blank"
                        rel="noopener noreferrer"
                        class="project-link"
                        onclick={keep_link.clone()}
                    >
                        {"Live"}
                    </a>
                    <a
                        href={project.repo_url}
                        target="_blank"
                        rel="noopener noreferrer"
                        class="project-link"
                        onclick={keep_link}
                    >
                        {"Code"}
                    </a>
                </div>
            </div>
        </article>
    }
}

#[derive(Properties, PartialEq)]
struct ModalProps {
    project: &'static ProjectItem,
    on_click: Callback<OverlayTarget>,
}

#[function_component(ProjectModal)]
fn project_modal(props: &ModalProps) -> Html {
    let project = props.project;
    let forward = |target: OverlayTarget| {
        let on_click = props.on_click.clone();
        Callback::from(move |event: MouseEvent| {
            event.stop_propagation();
            on_click.emit(target);
        })
    };

    html! {
        <div class="modal-backdrop" onclick={forward(OverlayTarget::Backdrop)}>
            <div
                class="modal-panel project-modal"
                role="dialog"
                aria-modal="true"
                aria-label={project.title}
                onclick={forward(OverlayTarget::Panel)}
            >
                <button
                    type="button"
                    class="modal-close cursor-hover"
                    aria-label="Close"
                    onclick={forward(OverlayTarget::CloseControl)}
                >
                    {"✕"}
                </button>
                <img src={project.image} alt={project.title} class="modal-image" />
                <div class="modal-body">
                    <span class="project-category">{project.category}</span>
                    <h3>{project.title}</h3>
                    <p>{project.description}</p>
                    <h4>{"Technologies"}</h4>
                    <ul class="tag-list">
                        { for project.technologies.iter().map(|tag| html! { <li class="tag">{*tag}</li> }) }
                    </ul>
                    <div class="modal-actions">
                        <a
                            href={project.live_url}
                            target="_blank"
                            rel="noopener noreferrer"
                            class="btn btn-primary cursor-hover"
                        >
                            {"View Live"}
                        </a>
                        <a
                            href={project.repo_url}
                            target="_blank"
                            rel="noopener noreferrer"
                            class="btn btn-outline cursor-hover"
                        >
                            {"Source Code"}
                        </a>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[function_component(Projects)]
pub fn projects() -> Html {
    let selection = use_reducer_eq(ProjectSelection::default);

    use_scroll_animation(
        ".project-card",
        Trigger::top_at(0.8).on(".projects-container"),
        Tween::slide_in(0.0, 50.0, 800).staggered(100),
    );

    let on_open = {
        let selection = selection.clone();
        Callback::from(move |id: i32| selection.dispatch(SelectionAction::Open(id)))
    };
    let on_click = {
        let selection = selection.clone();
        Callback::from(move |target: OverlayTarget| {
            selection.dispatch(SelectionAction::Click(target))
        })
    };

    let groups = ProjectGroup::ORDERED
        .into_iter()
        .map(|group| {
            html! {
                <div key={group.heading()} class={classes!("project-group", group.accent_class())}>
                    <header class="project-group-header">
                        <h3>{group.heading()}</h3>
                        <span class="project-group-blurb">{group.blurb()}</span>
                    </header>
                    <div class="projects-grid">
                        { for group.items().iter().map(|project| html! {
                            <ProjectCard key={project.id} project={project} on_open={on_open.clone()} />
                        }) }
                    </div>
                </div>
            }
        })
        .collect::<Html>();

    let mut current = *selection;
    let project = current.is_open().then(|| current.resolve()).flatten();
    let modal = match (project, body()) {
        (Some(project), Some(host)) => create_portal(
            html! { <ProjectModal project={project} on_click={on_click} /> },
            host.into(),
        ),
        _ => Html::default(),
    };

    html! {
        <section id="projects" class="projects-section">
            <div class="section-intro fade-in-up">
                <h2 class="section-title">{"Featured "}<span class="gradient-text">{"Projects"}</span></h2>
                <p class="section-lead">{"Selected work, from social impact platforms to production sites."}</p>
            </div>

            <div class="projects-container">{groups}</div>

            {modal}
        </section>
    }
}
