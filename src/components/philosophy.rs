use std::time::Duration;

use leptos::prelude::*;

use crate::content::philosophy::{PILLARS, QUOTE};
use crate::state::reveal::stagger_css;

const PILLAR_STEP: Duration = Duration::from_millis(120);

#[component]
pub fn Philosophy() -> impl IntoView {
    view! {
        <section id="philosophy" class="philosophy">
            <div class="philosophy-bg" aria-hidden="true">
                <svg class="philosophy-geo" viewBox="0 0 800 800" aria-hidden="true">
                    <defs>
                        <linearGradient id="philGrad" x1="0%" y1="0%" x2="100%" y2="100%">
                            <stop offset="0%" stop-color="#C9737A" stop-opacity="0.15" />
                            <stop offset="100%" stop-color="#E8B4B8" stop-opacity="0.05" />
                        </linearGradient>
                    </defs>
                    <polygon
                        points="400,50 600,150 700,350 600,550 400,650 200,550 100,350 200,150"
                        fill="url(#philGrad)"
                        stroke="#C9737A"
                        stroke-width="0.5"
                        opacity="0.4"
                    />
                    <polygon
                        points="400,100 570,185 650,350 570,515 400,600 230,515 150,350 230,185"
                        fill="none"
                        stroke="#E8B4B8"
                        stroke-width="0.5"
                        opacity="0.3"
                    />
                    <polygon
                        points="400,150 450,300 600,300 480,390 530,540 400,450 270,540 320,390 200,300 350,300"
                        fill="none"
                        stroke="#C9737A"
                        stroke-width="0.4"
                        opacity="0.25"
                    />
                </svg>
            </div>

            <div class="container">
                <div class="philosophy-header reveal">
                    <div class="section-label">"Design Philosophy"</div>
                    <h2 class="section-title">"The " <em>"Principles"</em> " That Guide My Hand"</h2>
                    <p class="philosophy-intro">
                        "Design is not decoration. It is the thoughtful orchestration of space, material, light, and human experience — guided by principles that transcend trend."
                    </p>
                </div>

                <div class="philosophy-pillars">
                    {PILLARS
                        .iter()
                        .enumerate()
                        .map(|(i, pillar)| {
                            view! {
                                <div
                                    class="pillar-block reveal"
                                    style:transition-delay=stagger_css(i, PILLAR_STEP)
                                >
                                    <div class="pillar-num">{pillar.num}</div>
                                    <div class="pillar-content">
                                        <div class="pillar-arabic">{pillar.arabic}</div>
                                        <h3 class="pillar-title">{pillar.title}</h3>
                                        <p class="pillar-body">{pillar.body}</p>
                                    </div>
                                    <div class="pillar-line" aria-hidden="true"></div>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>

                <div class="philosophy-quote reveal">
                    <div class="quote-mark">"\u{201c}"</div>
                    <blockquote class="quote-text">{QUOTE.text}</blockquote>
                    <cite class="quote-author">{QUOTE.author}</cite>
                    <div class="quote-arabic">{QUOTE.arabic}</div>
                </div>
            </div>
        </section>
    }
}
