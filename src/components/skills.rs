use leptos::prelude::*;

use crate::content::skills::{SkillBar, DESIGN_SKILLS, SOFT_SKILLS, TECHNICAL_SKILLS};
use crate::dom;
use crate::state::reveal::{stagger_css, RevealProfile, GAUGE_STAGGER_STEP, STAGGER_STEP};

const GAUGE_RADIUS: f64 = 36.0;

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id="skills" class="skills">
            <div class="container">
                <div class="skills-header reveal">
                    <div class="section-label">"Skills"</div>
                    <h2 class="section-title">"Tools of " <em>"Craft"</em></h2>
                    <p class="skills-subtitle">
                        "A blend of technical precision and artistic intuition — the instruments through which visions become reality."
                    </p>
                </div>

                <div class="skills-layout">
                    <div class="skills-bars-col">
                        <h3 class="skills-col-title">"Software & Tools"</h3>
                        <div class="skills-bars">
                            {TECHNICAL_SKILLS
                                .iter()
                                .enumerate()
                                .map(|(i, skill)| view! { <SkillBarRow skill index=i /> })
                                .collect::<Vec<_>>()}
                        </div>
                    </div>

                    <div class="skills-circles-col">
                        <h3 class="skills-col-title">"Design Expertise"</h3>
                        <div class="skills-circles">
                            {DESIGN_SKILLS
                                .iter()
                                .enumerate()
                                .map(|(i, skill)| view! { <CircularSkill skill index=i /> })
                                .collect::<Vec<_>>()}
                        </div>
                    </div>
                </div>

                <div class="soft-skills reveal" style:transition-delay="0.3s">
                    <h3 class="skills-col-title soft-skills-title">"Professional Strengths"</h3>
                    <div class="soft-skills-grid">
                        {SOFT_SKILLS
                            .iter()
                            .map(|s| {
                                view! {
                                    <div class="soft-skill-chip">
                                        <span class="soft-skill-icon">{s.icon}</span>
                                        <span class="soft-skill-label">{s.label}</span>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Horizontal bar whose fill animates to its level once the row reveals.
#[component]
fn SkillBarRow(skill: &'static SkillBar, index: usize) -> impl IntoView {
    let row_ref = NodeRef::<leptos::html::Div>::new();
    let reveal = StoredValue::new_local(None::<dom::RevealHandle>);
    Effect::new(move |_| {
        if let Some(el) = row_ref.get() {
            reveal.set_value(dom::reveal_once(&el, RevealProfile::BAR));
        }
    });
    on_cleanup(move || reveal.set_value(None));

    view! {
        <div
            class="skill-bar-item reveal"
            node_ref=row_ref
            style:transition-delay=stagger_css(index, STAGGER_STEP)
        >
            <div class="skill-bar-header">
                <span class="skill-name">{skill.name}</span>
                <span class="skill-percent">{skill.level} "%"</span>
            </div>
            <div class="skill-bar-track">
                <div
                    class="skill-bar-fill"
                    style=format!("--target-width: {}%", skill.level)
                ></div>
            </div>
        </div>
    }
}

/// Circular gauge; the progress arc draws in once revealed, staggered by
/// index.
#[component]
fn CircularSkill(skill: &'static SkillBar, index: usize) -> impl IntoView {
    let gauge_ref = NodeRef::<leptos::html::Div>::new();
    let reveal = StoredValue::new_local(None::<dom::RevealHandle>);
    Effect::new(move |_| {
        if let Some(el) = gauge_ref.get() {
            reveal.set_value(dom::reveal_once(&el, RevealProfile::BAR));
        }
    });
    on_cleanup(move || reveal.set_value(None));

    let circumference = 2.0 * std::f64::consts::PI * GAUGE_RADIUS;
    let offset = circumference - (f64::from(skill.level) / 100.0) * circumference;

    view! {
        <div
            class="circular-skill reveal"
            node_ref=gauge_ref
            style:transition-delay=stagger_css(index, GAUGE_STAGGER_STEP)
        >
            <div class="circle-wrapper">
                <svg width="90" height="90" viewBox="0 0 90 90">
                    <circle cx="45" cy="45" r=GAUGE_RADIUS fill="none" stroke="var(--sand-dark)" stroke-width="3" />
                    <circle
                        class="circle-progress"
                        cx="45"
                        cy="45"
                        r=GAUGE_RADIUS
                        fill="none"
                        stroke="var(--rose)"
                        stroke-width="3"
                        stroke-linecap="round"
                        stroke-dasharray=format!("{circumference:.3}")
                        stroke-dashoffset=format!("{circumference:.3}")
                        transform="rotate(-90 45 45)"
                        style=format!(
                            "--dash-offset: {offset:.3}; transition-delay: {}",
                            stagger_css(index, GAUGE_STAGGER_STEP),
                        )
                    ></circle>
                </svg>
                <div class="circle-center">
                    <span class="circle-num">{skill.level}</span>
                    <span class="circle-pct">"%"</span>
                </div>
            </div>
            <span class="circle-label">{skill.name}</span>
        </div>
    }
}
