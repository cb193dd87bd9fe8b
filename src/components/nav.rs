use leptos::prelude::*;
use leptos_router::components::A;

use crate::models::site::SITE_NAME;

#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="main-nav">
            <div class="nav-brand">
                <A href="/">{SITE_NAME}</A>
            </div>

            <div class="nav-links">
                <A href="/services">"Services"</A>
                <A href="/work">"Portfolio"</A>
                <A href="/about">"About"</A>
                <A href="/contact" attr:class="btn btn-small">"Contact"</A>
            </div>
        </nav>
    }
}
