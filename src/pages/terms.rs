use leptos::prelude::*;

use crate::models::site::{SITE_EMAIL, SITE_NAME};

#[component]
pub fn TermsPage() -> impl IntoView {
    view! {
        <div class="legal-page">
            <section class="page-header">
                <h1>"Terms & Conditions"</h1>
                <p class="updated">"Last updated: January 2026"</p>
            </section>

            <section class="legal-body">
                <h2>"1. Services"</h2>
                <p>
                    {SITE_NAME}
                    " provides AI consulting, development, and automation services under "
                    "individually negotiated statements of work. These terms govern use of "
                    "this website and initial inquiries."
                </p>

                <h2>"2. Intellectual Property"</h2>
                <p>
                    "All content on this website is the property of " {SITE_NAME}
                    ". Deliverables produced under a client engagement belong to the client "
                    "as set out in the applicable contract."
                </p>

                <h2>"3. Inquiries"</h2>
                <p>
                    "Information submitted through the contact form is used solely to respond "
                    "to your inquiry. Submitting the form creates no engagement or obligation "
                    "on either side."
                </p>

                <h2>"4. Liability"</h2>
                <p>
                    "This website is provided as-is. " {SITE_NAME}
                    " accepts no liability for decisions made on the basis of material "
                    "published here."
                </p>

                <h2>"5. Contact"</h2>
                <p>
                    "Questions about these terms: "
                    <a href=format!("mailto:{SITE_EMAIL}")>{SITE_EMAIL}</a>
                </p>
            </section>
        </div>
    }
}
