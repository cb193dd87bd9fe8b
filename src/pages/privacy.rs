use leptos::prelude::*;

use crate::models::site::{SITE_EMAIL, SITE_NAME};

#[component]
pub fn PrivacyPage() -> impl IntoView {
    view! {
        <div class="legal-page">
            <section class="page-header">
                <h1>"Privacy Policy"</h1>
                <p class="updated">"Last updated: January 2026"</p>
            </section>

            <section class="legal-body">
                <h2>"1. What We Collect"</h2>
                <p>
                    "The only personal data this site collects is what you submit through the "
                    "contact form: your name, email address, and optionally your organization, "
                    "objective, and message."
                </p>

                <h2>"2. How We Use It"</h2>
                <p>
                    "Submissions are stored in a private spreadsheet accessible only to the "
                    {SITE_NAME}
                    " team and used exclusively to respond to your inquiry. We do not sell or "
                    "share your data with third parties."
                </p>

                <h2>"3. Retention"</h2>
                <p>
                    "Inquiry records are retained while relevant to an ongoing conversation and "
                    "deleted on request."
                </p>

                <h2>"4. Your Rights"</h2>
                <p>
                    "You may request a copy or deletion of your submitted data at any time by "
                    "writing to "
                    <a href=format!("mailto:{SITE_EMAIL}")>{SITE_EMAIL}</a> "."
                </p>
            </section>
        </div>
    }
}
