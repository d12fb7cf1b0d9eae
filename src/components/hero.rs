use std::time::Duration;

use leptos::prelude::*;

use crate::content::site::{FULL_NAME, HERO_STATS, ROLE, TAGLINE};
use crate::dom;
use crate::state::reveal::stagger_css;

const INTRO_STEP: Duration = Duration::from_millis(180);

/// Landing section: staggered intro, CTAs scrolling to portfolio/contact,
/// stats row, decorative geometry, scroll indicator.
#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id="hero" class="hero">
            <div class="hero-bg">
                <img src="/hero-section.jpeg" alt="" class="hero-bg-img" aria-hidden="true" />
                <div class="hero-bg-overlay"></div>
            </div>

            <GeoLines />

            <div class="hero-orb hero-orb-1" aria-hidden="true"></div>
            <div class="hero-orb hero-orb-2" aria-hidden="true"></div>
            <div class="hero-orb hero-orb-3" aria-hidden="true"></div>

            <div class="hero-content container">
                <div class="hero-text">
                    <div class="hero-eyebrow hero-item" style:animation-delay=stagger_css(0, INTRO_STEP)>
                        <span class="eyebrow-line"></span>
                        <span>{ROLE}</span>
                        <span class="eyebrow-line"></span>
                    </div>

                    <h1 class="hero-name hero-item" style:animation-delay=stagger_css(1, INTRO_STEP)>
                        <span class="name-first">"Ayshath"</span>
                        <span class="name-last">"Rizwana"</span>
                        <span class="name-suffix">"M A"</span>
                    </h1>

                    <p class="hero-tagline hero-item" style:animation-delay=stagger_css(2, INTRO_STEP)>
                        {TAGLINE}
                    </p>

                    <div class="hero-ctas hero-item" style:animation-delay=stagger_css(3, INTRO_STEP)>
                        <button
                            class="btn-primary"
                            id="hero-view-work-btn"
                            on:click=move |_| dom::scroll_to("portfolio")
                        >
                            "View My Work"
                        </button>
                        <button
                            class="btn-outline"
                            id="hero-contact-btn"
                            on:click=move |_| dom::scroll_to("contact")
                        >
                            "Get In Touch"
                        </button>
                    </div>

                    <div class="hero-stats hero-item" style:animation-delay=stagger_css(4, INTRO_STEP)>
                        {HERO_STATS
                            .iter()
                            .enumerate()
                            .map(|(i, stat)| {
                                view! {
                                    {(i > 0).then(|| view! { <div class="stat-divider"></div> })}
                                    <div class="stat">
                                        <span class="stat-num">{stat.num}</span>
                                        <span class="stat-label">{stat.label}</span>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </div>

                <div class="hero-visual">
                    <div class="hero-portrait-frame">
                        <div class="portrait-inner">
                            <img src="/hero-section.jpeg" alt=FULL_NAME class="portrait-photo" />
                        </div>
                        <div class="portrait-ring portrait-ring-1"></div>
                        <div class="portrait-ring portrait-ring-2"></div>
                        <div class="portrait-badge">
                            <span class="badge-arabic">"مصممة"</span>
                            <span class="badge-text">"Designer"</span>
                        </div>
                    </div>
                </div>
            </div>

            <button
                class="scroll-indicator"
                aria-label="Scroll down"
                id="hero-scroll-btn"
                on:click=move |_| dom::scroll_to("about")
            >
                <span class="scroll-text">"Scroll"</span>
                <span class="scroll-chevron">"⌄"</span>
            </button>
        </section>
    }
}

/// Decorative geometric linework behind the hero.
#[component]
fn GeoLines() -> impl IntoView {
    view! {
        <svg
            class="hero-geo-svg"
            viewBox="0 0 1440 900"
            preserveAspectRatio="xMidYMid slice"
            aria-hidden="true"
        >
            <defs>
                <linearGradient id="lineGrad1" x1="0%" y1="0%" x2="100%" y2="100%">
                    <stop offset="0%" stop-color="#C9737A" stop-opacity="0" />
                    <stop offset="50%" stop-color="#C9737A" stop-opacity="0.25" />
                    <stop offset="100%" stop-color="#C9737A" stop-opacity="0" />
                </linearGradient>
                <linearGradient id="lineGrad2" x1="0%" y1="0%" x2="100%" y2="100%">
                    <stop offset="0%" stop-color="#E8B4B8" stop-opacity="0" />
                    <stop offset="50%" stop-color="#E8B4B8" stop-opacity="0.3" />
                    <stop offset="100%" stop-color="#E8B4B8" stop-opacity="0" />
                </linearGradient>
            </defs>

            // Arabic-inspired geometric octagon
            <g class="geo-rotate-slow">
                <polygon
                    points="1040,200 1100,240 1120,310 1100,380 1040,420 980,380 960,310 980,240"
                    fill="none"
                    stroke="url(#lineGrad1)"
                    stroke-width="1"
                />
                <polygon
                    points="1040,220 1090,254 1107,310 1090,366 1040,400 990,366 973,310 990,254"
                    fill="none"
                    stroke="url(#lineGrad2)"
                    stroke-width="0.5"
                />
                <line x1="1040" y1="200" x2="1040" y2="420" stroke="url(#lineGrad1)" stroke-width="0.5" />
                <line x1="960" y1="310" x2="1120" y2="310" stroke="url(#lineGrad1)" stroke-width="0.5" />
                <line x1="980" y1="240" x2="1100" y2="380" stroke="url(#lineGrad2)" stroke-width="0.5" />
                <line x1="1100" y1="240" x2="980" y2="380" stroke="url(#lineGrad2)" stroke-width="0.5" />
            </g>

            // Flowing curves
            <path
                d="M0,600 Q360,500 720,580 T1440,520"
                fill="none"
                stroke="url(#lineGrad2)"
                stroke-width="1"
                class="geo-drift"
            />
            <path
                d="M0,650 Q400,550 800,630 T1440,570"
                fill="none"
                stroke="url(#lineGrad1)"
                stroke-width="0.6"
                class="geo-drift-slow"
            />

            // Small decorative diamonds
            <g opacity="0.4">
                <rect x="180" y="150" width="12" height="12" fill="none" stroke="#C9737A" stroke-width="1" transform="rotate(45 186 156)" />
                <rect x="1260" y="700" width="10" height="10" fill="none" stroke="#E8B4B8" stroke-width="1" transform="rotate(45 1265 705)" />
                <rect x="80" y="700" width="8" height="8" fill="none" stroke="#C9737A" stroke-width="0.8" transform="rotate(45 84 704)" />
                <rect x="1350" y="200" width="14" height="14" fill="none" stroke="#E8B4B8" stroke-width="1" transform="rotate(45 1357 207)" />
            </g>

            <line x1="0" y1="450" x2="400" y2="450" stroke="#E8B4B8" stroke-width="0.4" opacity="0.3" />
            <line x1="1040" y1="0" x2="1040" y2="180" stroke="#E8B4B8" stroke-width="0.4" opacity="0.3" />
        </svg>
    }
}
