use leptos::prelude::*;

use super::ProjectModal;
use crate::content::projects::Project;
use crate::dom;
use crate::state::filter::{visible_projects, Filter};
use crate::state::gallery::{GalleryView, ScrollLock};
use crate::state::reveal::{stagger_css, RevealProfile, STAGGER_STEP};

/// The filterable project grid and its detail modal. This section owns the
/// only `GalleryView` slot in the app, so at most one modal can be open,
/// and the scroll lock it holds is released on every exit path including
/// section teardown.
#[component]
pub fn Portfolio() -> impl IntoView {
    let (active_filter, set_filter) = signal(Filter::default());
    let selected = RwSignal::new(None::<GalleryView>);
    let scroll_lock = RwSignal::new(ScrollLock::new());

    let filtered = Memo::new(move |_| visible_projects(active_filter.get()));

    // The document-level lock mirrors the state machine exactly.
    Effect::new(move |_| dom::apply_scroll_lock(scroll_lock.get().is_held()));
    on_cleanup(move || {
        let _ = scroll_lock.try_update(ScrollLock::release);
        dom::apply_scroll_lock(false);
    });

    let open_project = move |project: &'static Project| {
        scroll_lock.update(|lock| {
            lock.acquire();
        });
        selected.set(Some(GalleryView::open(project)));
    };
    let close_modal = move || {
        selected.set(None);
        scroll_lock.update(|lock| {
            lock.release();
        });
    };

    view! {
        <section id="portfolio" class="portfolio">
            <div class="container">
                <div class="portfolio-header reveal">
                    <div class="section-label">"Portfolio"</div>
                    <h2 class="section-title">"A Collection of " <em>"Visions"</em></h2>
                    <p class="portfolio-subtitle">
                        "Each project is a dialogue between space, light, and human experience — crafted with intention and brought to life with care."
                    </p>
                </div>

                <div class="portfolio-filters reveal" style:transition-delay="0.1s">
                    {Filter::options()
                        .into_iter()
                        .map(|option| {
                            view! {
                                <button
                                    class=move || {
                                        if active_filter.get() == option {
                                            "filter-btn active"
                                        } else {
                                            "filter-btn"
                                        }
                                    }
                                    id=format!("filter-{}", option.label().to_lowercase())
                                    on:click=move |_| set_filter.set(option)
                                >
                                    {option.label()}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>

                // Keyed by project id so items surviving a filter
                // transition keep their identity.
                <div class="portfolio-grid">
                    <For
                        each=move || filtered.get().into_iter().enumerate()
                        key=|(_, project)| project.id
                        children=move |(index, project)| {
                            view! { <ProjectCard project index on_open=open_project /> }
                        }
                    />
                </div>
            </div>

            <Show when=move || selected.with(Option::is_some)>
                <ProjectModal gallery=selected on_close=move |()| close_modal() />
            </Show>
        </section>
    }
}

#[component]
fn ProjectCard(
    project: &'static Project,
    index: usize,
    #[prop(into)] on_open: Callback<&'static Project>,
) -> impl IntoView {
    let card_ref = NodeRef::<leptos::html::Div>::new();

    // Cards enter the tree on filter transitions, after the page-level
    // sweep has run, so each card watches itself.
    let reveal = StoredValue::new_local(None::<dom::RevealHandle>);
    Effect::new(move |_| {
        if let Some(el) = card_ref.get() {
            reveal.set_value(dom::reveal_once(&el, RevealProfile::CARD));
        }
    });
    on_cleanup(move || reveal.set_value(None));

    let short_description: String = project.description.chars().take(100).collect();

    view! {
        <div
            class="project-card reveal"
            node_ref=card_ref
            style:transition-delay=stagger_css(index, STAGGER_STEP)
            role="button"
            tabindex="0"
            id=format!("project-card-{}", project.id)
            on:click=move |_| on_open.run(project)
            on:keydown=move |ev| {
                if ev.key() == "Enter" {
                    on_open.run(project);
                }
            }
        >
            <div class="card-image" style:background=project.gradient>
                {project
                    .primary_image
                    .map(|src| {
                        view! {
                            <img src=src alt=project.title class="card-img" loading="lazy" />
                        }
                    })}
                <div class="card-image-overlay">
                    <span class="card-zoom-icon">"⊕"</span>
                </div>
                <span class="card-category-badge">{project.category.label()}</span>
                {project
                    .has_gallery()
                    .then(|| {
                        view! {
                            <span class="card-gallery-badge">
                                "⊞ " {project.images.len()} " photos"
                            </span>
                        }
                    })}
                <div class="card-image-text">
                    <span class="card-year">{project.year}</span>
                </div>
            </div>

            <div class="card-body">
                <h3 class="card-title">{project.title}</h3>
                <p class="card-subtitle">{project.subtitle}</p>
                <p class="card-desc">{short_description} "..."</p>
                <div class="card-tags">
                    {project
                        .tags
                        .iter()
                        .take(2)
                        .map(|tag| view! { <span class="card-tag">{*tag}</span> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </div>
    }
}
