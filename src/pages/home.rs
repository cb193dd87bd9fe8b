use leptos::prelude::*;
use leptos_router::components::A;

use crate::models::site::{CLIENTS, SERVICES, SITE_TAGLINE, STATS, TESTIMONIALS};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <section class="hero">
                <h1>"DeltaFlow"</h1>
                <p class="subtitle">{SITE_TAGLINE}</p>
                <p class="description">
                    "Custom AI development agency building intelligent solutions "
                    "for forward-thinking companies."
                </p>
                <div class="cta-buttons">
                    <A href="/contact" attr:class="btn btn-primary">"Start Your Project"</A>
                    <A href="/work" attr:class="btn btn-secondary">"See Our Work"</A>
                </div>
            </section>

            <section class="client-strip">
                <p class="strip-label">"Trusted by"</p>
                <div class="client-logos">
                    {CLIENTS
                        .iter()
                        .map(|client| view! { <span class="client-name">{*client}</span> })
                        .collect_view()}
                </div>
            </section>

            <section class="services-grid">
                <h2>"What We Build"</h2>
                <div class="grid">
                    {SERVICES
                        .iter()
                        .map(|service| {
                            view! {
                                <div class="service-card">
                                    <h3>{service.name}</h3>
                                    <p class="tagline">{service.tagline}</p>
                                    <p>{service.description}</p>
                                    <A href=format!("/services/{}", service.slug)>"Learn more"</A>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
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

            <section class="testimonials">
                <h2>"What Clients Say"</h2>
                <div class="grid">
                    {TESTIMONIALS
                        .iter()
                        .map(|t| {
                            view! {
                                <blockquote class="testimonial">
                                    <p>{t.quote}</p>
                                    <footer>{t.author} " — " {t.role}</footer>
                                </blockquote>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="cta-banner">
                <h2>"Ready to put AI to work?"</h2>
                <p>"Tell us about your project and we'll get back to you within 24 hours."</p>
                <A href="/contact" attr:class="btn btn-primary">"Get in Touch"</A>
            </section>
        </div>
    }
}
