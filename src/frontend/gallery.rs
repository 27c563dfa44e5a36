use std::rc::Rc;

use yew::prelude::*;

use super::motion::{use_animator, use_scroll_animation};
use super::platform::body;
use crate::gallery::{Category, GalleryItem, GalleryState, GALLERY_ITEMS, ITEM_TWEEN};
use crate::motion::{Trigger, Tween};
use crate::overlay::OverlayTarget;

const ITEM_TARGETS: &str = ".gallery-item";

pub enum GalleryAction {
    Filter(Category),
    Open(i32),
    Click(OverlayTarget),
}

impl Reducible for GalleryState {
    type Action = GalleryAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            GalleryAction::Filter(category) => {
                next.select_category(category);
            }
            GalleryAction::Open(id) => next.open(id),
            GalleryAction::Click(target) => next.click(target),
        }
        next.into()
    }
}

#[derive(Properties, PartialEq)]
struct LightboxProps {
    item: &'static GalleryItem,
    on_click: Callback<OverlayTarget>,
}

#[function_component(Lightbox)]
fn lightbox(props: &LightboxProps) -> Html {
    let item = props.item;
    let caption = item.caption();
    let forward = |target: OverlayTarget| {
        let on_click = props.on_click.clone();
        Callback::from(move |event: MouseEvent| {
            event.stop_propagation();
            on_click.emit(target);
        })
    };

    html! {
        <div class="lightbox-backdrop" onclick={forward(OverlayTarget::Backdrop)}>
            <figure
                class="lightbox-panel"
                role="dialog"
                aria-modal="true"
                aria-label={item.title}
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
                <img src={item.image} alt={item.title} />
                <figcaption>
                    <span class="gallery-category">{caption.category}</span>
                    <h3>{caption.title}</h3>
                    <p>{caption.description}</p>
                    <p class="gallery-meta">
                        <span>{caption.date}</span>
                        <span>{caption.location}</span>
                    </p>
                </figcaption>
            </figure>
        </div>
    }
}

#[function_component(Gallery)]
pub fn gallery() -> Html {
    let gallery = use_reducer_eq(|| GalleryState::new(GALLERY_ITEMS));
    let animator = use_animator();

    use_scroll_animation(
        ".gallery-header",
        Trigger::top_at(0.8).on(".gallery-section"),
        Tween::slide_in(0.0, 50.0, 800),
    );
    use_scroll_animation(ITEM_TARGETS, Trigger::top_at(0.85).on(".gallery-grid"), ITEM_TWEEN);

    use_effect_with(gallery.generation(), move |generation| {
        // The first generation is revealed by the section's own scroll trigger.
        if *generation > 0 {
            animator.play(ITEM_TARGETS, ITEM_TWEEN);
        }
        || ()
    });

    let filters = Category::ORDERED
        .into_iter()
        .map(|category| {
            let onclick = {
                let gallery = gallery.clone();
                Callback::from(move |_| gallery.dispatch(GalleryAction::Filter(category)))
            };
            let active = gallery.active_category() == category;
            html! {
                <button
                    key={category.label()}
                    type="button"
                    class={classes!("filter-button", "cursor-hover", active.then_some("active"))}
                    aria-pressed={active.to_string()}
                    onclick={onclick}
                >
                    {category.label()}
                </button>
            }
        })
        .collect::<Html>();

    let items = gallery
        .visible()
        .into_iter()
        .map(|item| {
            let onclick = {
                let gallery = gallery.clone();
                let id = item.id;
                Callback::from(move |_| gallery.dispatch(GalleryAction::Open(id)))
            };
            html! {
                <button
                    key={item.id}
                    type="button"
                    class="gallery-item cursor-hover"
                    onclick={onclick}
                >
                    <img src={item.image} alt={item.title} loading="lazy" />
                    <span class="gallery-overlay">
                        <strong>{item.title}</strong>
                        <span>{item.date}</span>
                    </span>
                </button>
            }
        })
        .collect::<Html>();

    let on_click = {
        let gallery = gallery.clone();
        Callback::from(move |target: OverlayTarget| gallery.dispatch(GalleryAction::Click(target)))
    };
    let lightbox = match (gallery.selected(), body()) {
        (Some(item), Some(host)) => create_portal(
            html! { <Lightbox item={item} on_click={on_click} /> },
            host.into(),
        ),
        _ => Html::default(),
    };

    html! {
        <section id="gallery" class="gallery-section">
            <div class="gallery-header">
                <h2 class="section-title">{"Moments & "}<span class="gradient-text">{"Events"}</span></h2>
                <p class="section-lead">{"Snapshots from events, sessions and community work."}</p>
            </div>

            <div class="gallery-filters" role="group" aria-label="Filter gallery">{filters}</div>

            <div class="gallery-grid">{items}</div>

            {lightbox}
        </section>
    }
}
