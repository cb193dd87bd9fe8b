use leptos::prelude::*;
use leptos_router::components::A;

use crate::models::site::SERVICES;

#[component]
pub fn ServicesPage() -> impl IntoView {
    view! {
        <div class="services-page">
            <section class="page-header">
                <h1>"Services"</h1>
                <p>"End-to-end AI capability, from strategy to production systems."</p>
            </section>

            <section class="services-list">
                {SERVICES
                    .iter()
                    .map(|service| {
                        view! {
                            <div class="service-card">
                                <h2>{service.name}</h2>
                                <p class="tagline">{service.tagline}</p>
                                <p>{service.long_description}</p>
                                <ul class="benefits">
                                    {service
                                        .benefits
                                        .iter()
                                        .map(|b| view! { <li>{*b}</li> })
                                        .collect_view()}
                                </ul>
                                <A
                                    href=format!("/services/{}", service.slug)
                                    attr:class="btn btn-secondary"
                                >
                                    "Explore "
                                    {service.name}
                                </A>
                            </div>
                        }
                    })
                    .collect_view()}
            </section>
        </div>
    }
}
