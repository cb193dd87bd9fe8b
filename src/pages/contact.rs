use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos::web_sys;

use crate::models::contact::{FieldErrors, SubmissionOutcome, OBJECTIVE_OPTIONS};
use crate::models::site::{SITE_EMAIL, SITE_LOCATION, SITE_PHONE};
use crate::server_fns::SubmitInquiry;

#[component]
pub fn ContactPage() -> impl IntoView {
    let submit = ServerAction::<SubmitInquiry>::new();

    let field_errors = Memo::new(move |_| match submit.value().get() {
        Some(Ok(SubmissionOutcome::Rejected { field_errors })) => field_errors,
        _ => FieldErrors::new(),
    });
    let failure_message = move || match submit.value().get() {
        Some(Ok(SubmissionOutcome::Failed { message })) => Some(message),
        Some(Err(_)) => Some("Something went wrong. Please try again.".to_owned()),
        _ => None,
    };
    let accepted = move || matches!(submit.value().get(), Some(Ok(SubmissionOutcome::Accepted)));

    let error_for = move |field: &'static str| {
        field_errors.with(|errors| errors.get(field).and_then(|msgs| msgs.first()).cloned())
    };

    view! {
        <div class="contact-page">
            <section class="contact-intro">
                <h1>"Get in Touch"</h1>
                <p>
                    "Ready to put AI to work for your business? "
                    "Tell us about your project and we'll respond within 24 hours."
                </p>

                <div class="contact-cards">
                    <div class="contact-card">
                        <span class="label">"Email"</span>
                        <a href=format!("mailto:{SITE_EMAIL}")>{SITE_EMAIL}</a>
                    </div>
                    <div class="contact-card">
                        <span class="label">"Phone"</span>
                        <a href=format!("tel:{SITE_PHONE}")>{SITE_PHONE}</a>
                    </div>
                    <div class="contact-card">
                        <span class="label">"Office"</span>
                        <span>{SITE_LOCATION}</span>
                    </div>
                </div>
            </section>

            <section class="contact-form-section">
                <Show
                    when=move || !accepted()
                    fallback=|| {
                        view! {
                            <div class="form-success">
                                <h3>"Message Received"</h3>
                                <p>"Thanks for reaching out. Expect a response within 24 hours."</p>
                                <button class="btn btn-secondary" on:click=|_| reload_contact_page()>
                                    "Send Another Message"
                                </button>
                            </div>
                        }
                    }
                >
                    <ActionForm action=submit attr:class="contact-form">
                        {move || {
                            failure_message()
                                .map(|message| view! { <div class="form-error">{message}</div> })
                        }}

                        <div class="form-group">
                            <label for="name">"Name *"</label>
                            <input type="text" id="name" name="name" placeholder="Full name"/>
                            {move || {
                                error_for("name").map(|m| view! { <p class="field-error">{m}</p> })
                            }}
                        </div>

                        <div class="form-group">
                            <label for="email">"Email *"</label>
                            <input
                                type="email"
                                id="email"
                                name="email"
                                placeholder="your@email.com"
                            />
                            {move || {
                                error_for("email").map(|m| view! { <p class="field-error">{m}</p> })
                            }}
                        </div>

                        <div class="form-group">
                            <label for="organization">"Organization"</label>
                            <input
                                type="text"
                                id="organization"
                                name="organization"
                                placeholder="Company name"
                            />
                        </div>

                        <div class="form-group">
                            <label for="objective">"Objective"</label>
                            <select id="objective" name="objective">
                                {OBJECTIVE_OPTIONS
                                    .iter()
                                    .map(|option| view! { <option value=*option>{*option}</option> })
                                    .collect_view()}
                            </select>
                        </div>

                        <div class="form-group">
                            <label for="message">"Message *"</label>
                            <textarea
                                id="message"
                                name="message"
                                rows="4"
                                placeholder="Project details..."
                            ></textarea>
                            {move || {
                                error_for("message")
                                    .map(|m| view! { <p class="field-error">{m}</p> })
                            }}
                        </div>

                        <button
                            type="submit"
                            class="btn btn-primary"
                            disabled=move || submit.pending().get()
                        >
                            {move || if submit.pending().get() { "Sending..." } else { "Send Message" }}
                        </button>
                    </ActionForm>
                </Show>
            </section>
        </div>
    }
}

// Full navigation clears the action state the same way a fresh visit would
fn reload_contact_page() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href("/contact");
        }
    }
}
