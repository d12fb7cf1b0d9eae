use std::time::Duration;

use leptos::ev;
use leptos::prelude::*;

use crate::content::site::{LOGO_INITIALS, LOGO_NAME, NAV_LINKS};
use crate::dom;
use crate::state::reveal::stagger_css;

/// Fixed navigation bar with scroll-spy highlighting and a mobile menu.
/// The active link is the last section whose top sits within 120px above
/// the current scroll position.
#[component]
pub fn Navbar() -> impl IntoView {
    let (scrolled, set_scrolled) = signal(false);
    let (menu_open, set_menu_open) = signal(false);
    let (active_section, set_active) = signal("hero");

    let scroll = window_event_listener(ev::scroll, move |_| {
        let y = dom::scroll_y();
        set_scrolled.set(y > 60.0);

        for link in NAV_LINKS.iter().rev() {
            if let Some(top) = dom::section_top(link.anchor) {
                if y >= top - 120.0 {
                    set_active.set(link.anchor);
                    break;
                }
            }
        }
    });
    on_cleanup(move || scroll.remove());

    let navigate = move |anchor: &'static str| {
        set_menu_open.set(false);
        dom::scroll_to(anchor);
    };

    view! {
        <nav class=move || if scrolled.get() { "navbar scrolled" } else { "navbar" }>
            <div class="navbar-inner">
                <a
                    href="#hero"
                    class="navbar-logo"
                    on:click=move |ev| {
                        ev.prevent_default();
                        navigate("hero");
                    }
                >
                    <span class="logo-initials">{LOGO_INITIALS}</span>
                    <span class="logo-text">{LOGO_NAME}</span>
                </a>

                <ul class="navbar-links">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <li>
                                    <a
                                        href=format!("#{}", link.anchor)
                                        class=move || {
                                            if active_section.get() == link.anchor {
                                                "nav-link active"
                                            } else {
                                                "nav-link"
                                            }
                                        }
                                        on:click=move |ev| {
                                            ev.prevent_default();
                                            navigate(link.anchor);
                                        }
                                    >
                                        {link.label}
                                    </a>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>

                <a
                    href="#contact"
                    class="navbar-cta btn-primary"
                    on:click=move |ev| {
                        ev.prevent_default();
                        navigate("contact");
                    }
                >
                    "Hire Me"
                </a>

                <button
                    class=move || if menu_open.get() { "hamburger open" } else { "hamburger" }
                    aria-label="Toggle menu"
                    id="hamburger-btn"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>

            <Show when=move || menu_open.get()>
                <div class="mobile-menu">
                    {NAV_LINKS
                        .iter()
                        .enumerate()
                        .map(|(i, link)| {
                            view! {
                                <a
                                    href=format!("#{}", link.anchor)
                                    class="mobile-link"
                                    style:transition-delay=stagger_css(i, Duration::from_millis(70))
                                    on:click=move |ev| {
                                        ev.prevent_default();
                                        navigate(link.anchor);
                                    }
                                >
                                    {link.label}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}
                    <a
                        href="#contact"
                        class="btn-primary mobile-cta"
                        on:click=move |ev| {
                            ev.prevent_default();
                            navigate("contact");
                        }
                    >
                        "Hire Me"
                    </a>
                </div>
            </Show>
        </nav>
    }
}
