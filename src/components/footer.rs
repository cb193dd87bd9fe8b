use leptos::prelude::*;
use leptos_router::components::A;

use crate::models::site::{SERVICES, SITE_EMAIL, SITE_LOCATION, SITE_NAME, SITE_TAGLINE, SOCIAL_LINKS};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div class="footer-brand">
                    <h3>{SITE_NAME}</h3>
                    <p>{SITE_TAGLINE}</p>
                    <p class="footer-contact">
                        <a href=format!("mailto:{SITE_EMAIL}")>{SITE_EMAIL}</a>
                        <br/>
                        {SITE_LOCATION}
                    </p>
                </div>

                <div class="footer-col">
                    <h4>"Services"</h4>
                    {SERVICES
                        .iter()
                        .map(|s| view! { <A href=format!("/services/{}", s.slug)>{s.name}</A> })
                        .collect_view()}
                </div>

                <div class="footer-col">
                    <h4>"Company"</h4>
                    <A href="/about">"About"</A>
                    <A href="/work">"Portfolio"</A>
                    <A href="/contact">"Contact"</A>
                </div>

                <div class="footer-col">
                    <h4>"Legal"</h4>
                    <A href="/terms">"Terms & Conditions"</A>
                    <A href="/privacy">"Privacy Policy"</A>
                </div>
            </div>

            <div class="footer-bottom">
                <div class="footer-social">
                    {SOCIAL_LINKS
                        .iter()
                        .map(|(name, url)| {
                            view! { <a href=*url target="_blank" rel="noopener">{*name}</a> }
                        })
                        .collect_view()}
                </div>
                <p>"© 2026 " {SITE_NAME} ". All rights reserved."</p>
            </div>
        </footer>
    }
}
