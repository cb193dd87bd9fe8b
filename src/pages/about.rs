use leptos::prelude::*;
use leptos_router::components::A;

use crate::models::site::{COMPANY_STORY, COMPANY_VALUES, STATS};

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="about-page">
            <section class="page-header">
                <h1>"We build AI that works"</h1>
            </section>

            <section class="story">
                {COMPANY_STORY
                    .iter()
                    .map(|paragraph| view! { <p>{*paragraph}</p> })
                    .collect_view()}
            </section>

            <section class="values">
                <h2>"What We Stand For"</h2>
                <div class="grid">
                    {COMPANY_VALUES
                        .iter()
                        .map(|value| {
                            view! {
                                <div class="value-card">
                                    <h3>{value.title}</h3>
                                    <p>{value.description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="team">
                <h2>"World-class AI engineers"</h2>
                <p>
                    "Our team combines deep technical expertise with business acumen: "
                    "machine learning engineers, AI researchers, full-stack developers, "
                    "DevOps engineers, and product managers, working from Dhaka and remote."
                </p>
            </section>

            <section class="stats">
                {STATS
                    .iter()
                    .map(|(value, label)| {
                        view! {
                            <div class="stat">
                                <span class="stat-value">{*value}</span>
                                <span class="stat-label">{*label}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </section>

            <section class="cta-banner">
                <h2>"Work with us"</h2>
                <A href="/contact" attr:class="btn btn-primary">"Get in Touch"</A>
            </section>
        </div>
    }
}
