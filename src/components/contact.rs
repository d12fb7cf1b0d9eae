use leptos::prelude::*;

use crate::content::site::{EMAIL, LOCATION, PHONE, PHONE_HREF, SOCIAL_LINKS};
use crate::state::contact::{ContactForm, Field, SUBMIT_DELAY};

/// Contact section: detail column plus the form driven by the
/// `Editing → Submitting → Submitted` machine. Submission is a simulated
/// send with a fixed delay; once submitted the form is replaced by the
/// confirmation panel until the section remounts.
#[component]
pub fn Contact() -> impl IntoView {
    let form = RwSignal::new(ContactForm::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let started = form.try_update(ContactForm::submit).unwrap_or(false);
        if started {
            // try_update so a timer outliving the section is a no-op.
            set_timeout(
                move || {
                    let _ = form.try_update(ContactForm::finish_submission);
                },
                SUBMIT_DELAY,
            );
        }
    };

    view! {
        <section id="contact" class="contact">
            <div class="contact-bg" aria-hidden="true"></div>

            <div class="container">
                <div class="contact-header reveal">
                    <div class="section-label">"Contact"</div>
                    <h2 class="section-title">"Let's Create " <em>"Together"</em></h2>
                    <p class="contact-subtitle">
                        "Whether you have a project in mind, a question to ask, or simply wish to connect — I'd love to hear from you."
                    </p>
                </div>

                <div class="contact-grid">
                    <div class="contact-info reveal-left">
                        <div class="contact-arabic-greeting">
                            <span class="arabic-greeting-text">"أهلاً وسهلاً"</span>
                            <span class="arabic-greeting-sub">"Welcome"</span>
                        </div>

                        <div class="contact-details">
                            <ContactDetail label="Email">
                                <a href=format!("mailto:{EMAIL}") class="detail-value">
                                    {EMAIL}
                                </a>
                            </ContactDetail>
                            <ContactDetail label="Phone">
                                <a href=PHONE_HREF class="detail-value">
                                    {PHONE}
                                </a>
                            </ContactDetail>
                            <ContactDetail label="Location">
                                <span class="detail-value">{LOCATION}</span>
                            </ContactDetail>
                        </div>

                        <div class="contact-socials">
                            <span class="socials-label">"Follow My Journey"</span>
                            <div class="socials-row">
                                {SOCIAL_LINKS
                                    .iter()
                                    .map(|social| {
                                        view! {
                                            <a
                                                href=social.href
                                                class="social-btn"
                                                aria-label=social.label
                                                id=social.id
                                                target="_blank"
                                                rel="noopener noreferrer"
                                            >
                                                {social.label.chars().next().map(String::from)}
                                            </a>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </div>
                        </div>

                        <div class="contact-geo-deco" aria-hidden="true">
                            <svg width="120" height="120" viewBox="0 0 120 120">
                                <polygon
                                    points="60,10 100,35 100,85 60,110 20,85 20,35"
                                    fill="none"
                                    stroke="rgba(201,115,122,0.2)"
                                    stroke-width="1"
                                />
                                <polygon
                                    points="60,25 88,42 88,78 60,95 32,78 32,42"
                                    fill="none"
                                    stroke="rgba(232,180,184,0.15)"
                                    stroke-width="0.8"
                                />
                                <circle cx="60" cy="60" r="8" fill="none" stroke="rgba(201,115,122,0.25)" stroke-width="1" />
                            </svg>
                        </div>
                    </div>

                    <div class="contact-form-col reveal-right">
                        <Show
                            when=move || form.with(ContactForm::is_submitted)
                            fallback=move || {
                                view! {
                                    <form class="contact-form" id="contact-form" on:submit=on_submit>
                                        <div class="form-row">
                                            <FormField form field=Field::Name />
                                            <FormField form field=Field::Email />
                                        </div>
                                        <FormField form field=Field::Subject />
                                        <FormField form field=Field::Message textarea=true />

                                        <button
                                            type="submit"
                                            class="form-submit btn-primary"
                                            id="contact-submit-btn"
                                            disabled=move || form.with(ContactForm::is_submitting)
                                        >
                                            {move || {
                                                if form.with(ContactForm::is_submitting) {
                                                    view! {
                                                        <span class="submit-loading">"Sending..."</span>
                                                    }
                                                        .into_any()
                                                } else {
                                                    view! { <span>"Send Message ✈"</span> }.into_any()
                                                }
                                            }}
                                        </button>
                                    </form>
                                }
                            }
                        >
                            <div class="form-success">
                                <div class="success-icon">"✦"</div>
                                <h3 class="success-title">"Message Received"</h3>
                                <p class="success-text">
                                    "Thank you for reaching out. I'll be in touch with you shortly, inshallah."
                                </p>
                                <span class="success-arabic">"شكراً جزيلاً"</span>
                            </div>
                        </Show>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactDetail(label: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="contact-detail-item">
            <div class="detail-icon-wrap">"◈"</div>
            <div>
                <span class="detail-label">{label}</span>
                {children()}
            </div>
        </div>
    }
}

/// One labelled input wired to the form machine; `focused`/`filled`
/// classes float the label.
#[component]
fn FormField(
    form: RwSignal<ContactForm>,
    field: Field,
    #[prop(default = false)] textarea: bool,
) -> impl IntoView {
    let group_class = move || {
        form.with(|f| {
            let mut class = String::from("form-group");
            if f.focused() == Some(field) {
                class.push_str(" focused");
            }
            if !f.field(field).is_empty() {
                class.push_str(" filled");
            }
            class
        })
    };
    let value = move || form.with(|f| f.field(field).to_string());
    let on_input = move |ev| form.update(|f| f.set_field(field, event_target_value(&ev)));
    let on_focus = move |_| form.update(|f| f.focus(field));
    let on_blur = move |_| form.update(ContactForm::blur);

    view! {
        <div class=group_class>
            <label for=field.input_id()>{field.label()}</label>
            {if textarea {
                view! {
                    <textarea
                        id=field.input_id()
                        name=field.input_id()
                        rows="5"
                        prop:value=value
                        on:input=on_input
                        on:focus=on_focus
                        on:blur=on_blur
                        required
                    ></textarea>
                }
                    .into_any()
            } else {
                view! {
                    <input
                        type=if field == Field::Email { "email" } else { "text" }
                        id=field.input_id()
                        name=field.input_id()
                        prop:value=value
                        on:input=on_input
                        on:focus=on_focus
                        on:blur=on_blur
                        required
                    />
                }
                    .into_any()
            }}
            <div class="input-line"></div>
        </div>
    }
}
