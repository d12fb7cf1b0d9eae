use leptos::ev;
use leptos::prelude::*;

use crate::state::gallery::{resolve_drag, GalleryView};

/// Detail overlay for a selected project. Dismissed by the close button,
/// a click outside the card, or Escape; arrow keys page the gallery when
/// the project has one.
#[component]
pub fn ProjectModal(
    gallery: RwSignal<Option<GalleryView>>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let project = move || gallery.with(|g| g.as_ref().map(GalleryView::project));
    let image_count = move || gallery.with(|g| g.as_ref().map_or(0, GalleryView::image_count));

    let keys = window_event_listener(ev::keydown, move |ev| match ev.key().as_str() {
        "Escape" => on_close.run(()),
        "ArrowLeft" => gallery.update(|g| {
            if let Some(view) = g {
                view.advance(-1);
            }
        }),
        "ArrowRight" => gallery.update(|g| {
            if let Some(view) = g {
                view.advance(1);
            }
        }),
        _ => {}
    });
    on_cleanup(move || keys.remove());

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal-card" on:click=|ev| ev.stop_propagation()>
                <button
                    class="modal-close"
                    aria-label="Close modal"
                    id="modal-close-btn"
                    on:click=move |_| on_close.run(())
                >
                    "✕"
                </button>

                {move || {
                    project()
                        .map(|p| {
                            view! {
                                <div class="modal-image" style:background=p.gradient>
                                    {if image_count() > 1 {
                                        view! { <ImageGallery gallery /> }.into_any()
                                    } else if let Some(src) = p.primary_image {
                                        view! {
                                            <img src=src alt=p.title class="modal-img" />
                                            <div class="modal-image-overlay"></div>
                                            <div class="modal-image-content">
                                                <span class="modal-category">
                                                    {p.category.label()}
                                                </span>
                                                <h3 class="modal-image-title">{p.title}</h3>
                                            </div>
                                        }
                                            .into_any()
                                    } else {
                                        view! {
                                            <div class="modal-image-content">
                                                <span class="modal-category">
                                                    {p.category.label()}
                                                </span>
                                                <h3 class="modal-image-title">{p.title}</h3>
                                            </div>
                                        }
                                            .into_any()
                                    }}
                                </div>

                                <div class="modal-body">
                                    {(image_count() > 1)
                                        .then(|| {
                                            view! {
                                                <div class="modal-gallery-header">
                                                    <span class="modal-category-inline">
                                                        {p.category.label()}
                                                    </span>
                                                    <h3 class="modal-title-inline">{p.title}</h3>
                                                </div>
                                            }
                                        })}
                                    <div class="modal-meta">
                                        <ModalMeta label="Location" value=p.subtitle />
                                        <ModalMeta label="Year" value=p.year />
                                        <ModalMeta label="Area" value=p.area />
                                    </div>
                                    <p class="modal-description">{p.description}</p>
                                    <div class="modal-tags">
                                        {p
                                            .tags
                                            .iter()
                                            .map(|tag| {
                                                view! { <span class="modal-tag">{*tag}</span> }
                                            })
                                            .collect::<Vec<_>>()}
                                    </div>
                                </div>
                            }
                        })
                }}
            </div>
        </div>
    }
}

#[component]
fn ModalMeta(label: &'static str, value: &'static str) -> impl IntoView {
    view! {
        <div class="modal-meta-item">
            <span class="meta-label">{label}</span>
            <span class="meta-value">{value}</span>
        </div>
    }
}

/// Swipeable image pager inside the modal: arrows, dots, counter, arrow
/// keys (handled by the modal), and pointer drags past the displacement
/// threshold.
#[component]
fn ImageGallery(gallery: RwSignal<Option<GalleryView>>) -> impl IntoView {
    let index = move || gallery.with(|g| g.as_ref().map_or(0, GalleryView::index));
    let count = move || gallery.with(|g| g.as_ref().map_or(0, GalleryView::image_count));
    let current = move || gallery.with(|g| g.as_ref().and_then(GalleryView::current_image));
    let direction = move || gallery.with(|g| g.as_ref().map_or(0, GalleryView::direction));

    let go = move |dir: i8| {
        gallery.update(|g| {
            if let Some(view) = g {
                view.advance(dir);
            }
        });
    };
    let jump = move |target: usize| {
        gallery.update(|g| {
            if let Some(view) = g {
                view.jump(target);
            }
        });
    };

    // Pointer drags below the threshold snap back with no state change.
    let drag_start = RwSignal::new(None::<f64>);
    let end_drag = move |client_x: i32| {
        if let Some(start) = drag_start.get() {
            if let Some(dir) = resolve_drag(f64::from(client_x) - start) {
                go(dir);
            }
        }
        drag_start.set(None);
    };

    view! {
        <div class="gallery-wrap">
            <div
                class="gallery-viewport"
                on:pointerdown=move |ev| drag_start.set(Some(f64::from(ev.client_x())))
                on:pointerup=move |ev| end_drag(ev.client_x())
                on:pointercancel=move |_| drag_start.set(None)
            >
                // Rebuilt on every index change so the slide-in animation
                // replays, oriented by the last navigation direction.
                {move || {
                    let class = match direction() {
                        1 => "gallery-img slide-from-right",
                        -1 => "gallery-img slide-from-left",
                        _ => "gallery-img",
                    };
                    current()
                        .map(|src| {
                            view! {
                                <img
                                    src=src
                                    alt=format!("View {}", index() + 1)
                                    class=class
                                    draggable="false"
                                />
                            }
                        })
                }}

                <Show when=move || { count() > 1 }>
                    <button
                        class="gallery-arrow gallery-arrow-left"
                        aria-label="Previous image"
                        on:click=move |_| go(-1)
                    >
                        "‹"
                    </button>
                    <button
                        class="gallery-arrow gallery-arrow-right"
                        aria-label="Next image"
                        on:click=move |_| go(1)
                    >
                        "›"
                    </button>
                </Show>

                <div class="gallery-counter">{move || format!("{} / {}", index() + 1, count())}</div>
            </div>

            <Show when=move || { count() > 1 }>
                <div class="gallery-dots">
                    {move || {
                        (0..count())
                            .map(|i| {
                                view! {
                                    <button
                                        class=move || {
                                            if i == index() {
                                                "gallery-dot active"
                                            } else {
                                                "gallery-dot"
                                            }
                                        }
                                        aria-label=format!("Go to image {}", i + 1)
                                        on:click=move |_| jump(i)
                                    ></button>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </Show>
        </div>
    }
}
