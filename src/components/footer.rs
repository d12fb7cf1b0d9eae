use leptos::prelude::*;

use crate::content::site::{
    COPYRIGHT_YEAR, EMAIL, FOOTER_SERVICES, FULL_NAME, LOCATION, LOGO_INITIALS, LOGO_NAME,
    NAV_LINKS, PHONE, PHONE_HREF,
};
use crate::dom;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer-top">
                <div class="container footer-top-inner">
                    <div class="footer-brand">
                        <div class="footer-logo">
                            <span class="footer-logo-initials">{LOGO_INITIALS}</span>
                            <span class="footer-logo-name">{LOGO_NAME}</span>
                        </div>
                        <p class="footer-tagline">
                            "Crafting spaces where elegance meets purpose. Every line tells a story."
                        </p>
                        <div class="footer-arabic">
                            <span>"مصممة معمارية وداخلية"</span>
                        </div>
                    </div>

                    <div class="footer-nav">
                        <span class="footer-nav-title">"Navigation"</span>
                        {NAV_LINKS
                            .iter()
                            .map(|link| {
                                view! {
                                    <a
                                        href=format!("#{}", link.anchor)
                                        class="footer-link"
                                        on:click=move |ev| {
                                            ev.prevent_default();
                                            dom::scroll_to(link.anchor);
                                        }
                                    >
                                        {link.label}
                                    </a>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>

                    <div class="footer-nav">
                        <span class="footer-nav-title">"Services"</span>
                        {FOOTER_SERVICES
                            .iter()
                            .map(|service| view! { <span class="footer-service">{*service}</span> })
                            .collect::<Vec<_>>()}
                    </div>

                    <div class="footer-contact-col">
                        <span class="footer-nav-title">"Get In Touch"</span>
                        <a href=format!("mailto:{EMAIL}") class="footer-link">
                            {EMAIL}
                        </a>
                        <a href=PHONE_HREF class="footer-link">
                            {PHONE}
                        </a>
                        <span class="footer-service">{LOCATION}</span>
                    </div>
                </div>
            </div>

            <div class="footer-divider">
                <div class="footer-divider-pattern" aria-hidden="true">
                    {(0..8)
                        .map(|_| view! { <span class="divider-diamond">"◇"</span> })
                        .collect::<Vec<_>>()}
                </div>
            </div>

            <div class="footer-bottom">
                <div class="container footer-bottom-inner">
                    <p class="footer-copy">
                        "© " {COPYRIGHT_YEAR} " " {FULL_NAME} ". All rights reserved."
                    </p>
                    <p class="footer-made">
                        "Designed with " <span class="heart">"♡"</span> " and intention"
                    </p>
                </div>
            </div>
        </footer>
    }
}
