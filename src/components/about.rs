use leptos::prelude::*;

use crate::content::site::QUALITIES;

/// About section: portrait column, introduction copy, quality cards. The
/// page-level reveal sweep drives the entrance of each block.
#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="about">
            <div class="about-bg-accent" aria-hidden="true"></div>

            <div class="container about-grid">
                <div class="about-image-col reveal-left">
                    <div class="about-image-frame">
                        <div class="about-image-inner">
                            <div class="about-portrait">
                                <div class="about-portrait-monogram">"AR"</div>
                                <div class="about-portrait-overlay">
                                    <span class="about-arabic-text">"مصممة معمارية"</span>
                                </div>
                            </div>
                        </div>
                        <div class="about-accent-card">
                            <span class="accent-card-num">"B.Arch"</span>
                            <span class="accent-card-label">"Graduate Designer"</span>
                        </div>
                        <div class="about-corner-deco" aria-hidden="true">
                            <svg width="80" height="80" viewBox="0 0 80 80">
                                <rect x="5" y="5" width="30" height="30" fill="none" stroke="#C9737A" stroke-width="1" opacity="0.4" transform="rotate(45 20 20)" />
                                <rect x="15" y="15" width="20" height="20" fill="none" stroke="#E8B4B8" stroke-width="0.8" opacity="0.3" transform="rotate(45 25 25)" />
                            </svg>
                        </div>
                    </div>
                </div>

                <div class="about-text-col">
                    <div class="reveal">
                        <div class="section-label">"About Me"</div>
                        <h2 class="section-title">"Designing Spaces That " <em>"Breathe"</em></h2>
                    </div>

                    <div class="reveal" style:transition-delay="0.15s">
                        <p class="about-intro">
                            "I am Ayshath Rizwana M A, an architectural and interior design graduate with a deep passion for creating environments that harmonize beauty, function, and cultural identity."
                        </p>
                        <p class="about-body">
                            "My design philosophy is rooted in the belief that every space has a soul — and my role is to awaken it. Drawing inspiration from the graceful geometry of Arabic architecture and the clean lines of contemporary minimalism, I craft interiors and structures that feel both timeless and deeply personal."
                        </p>
                        <p class="about-body">
                            "From residential sanctuaries to conceptual architectural visions, each project is an exploration of light, material, and human experience — designed to evoke emotion and endure through time."
                        </p>
                    </div>

                    <div class="about-qualities reveal" style:transition-delay="0.3s">
                        {QUALITIES
                            .iter()
                            .map(|q| {
                                view! {
                                    <div class="quality-card">
                                        <span class="quality-icon">{q.icon}</span>
                                        <div>
                                            <h4 class="quality-label">{q.label}</h4>
                                            <p class="quality-desc">{q.desc}</p>
                                        </div>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
            </div>

            <div class="container">
                <div class="arabic-divider">
                    <span>"✦"</span>
                    <span>"بسم الله"</span>
                    <span>"✦"</span>
                </div>
            </div>
        </section>
    }
}
