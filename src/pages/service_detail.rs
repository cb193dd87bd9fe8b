use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::models::site::service_by_slug;

#[component]
pub fn ServiceDetailPage() -> impl IntoView {
    let params = use_params_map();
    let slug = move || params.read().get("slug").unwrap_or_default();

    view! {
        <div class="service-detail-page">
            {move || {
                match service_by_slug(&slug()) {
                    Some(service) => {
                        view! {
                            <section class="page-header">
                                <h1>{service.name}</h1>
                                <p class="tagline">{service.tagline}</p>
                                <p>{service.long_description}</p>
                            </section>

                            <section class="benefits">
                                <h2>"What You Get"</h2>
                                <ul>
                                    {service
                                        .benefits
                                        .iter()
                                        .map(|b| view! { <li>{*b}</li> })
                                        .collect_view()}
                                </ul>
                            </section>

                            <section class="use-cases">
                                <h2>"Use Cases"</h2>
                                <div class="grid">
                                    {service
                                        .use_cases
                                        .iter()
                                        .map(|(title, description)| {
                                            view! {
                                                <div class="use-case-card">
                                                    <h3>{*title}</h3>
                                                    <p>{*description}</p>
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </section>

                            <section class="process">
                                <h2>"How We Work"</h2>
                                <ol>
                                    {service
                                        .process
                                        .iter()
                                        .map(|step| view! { <li>{*step}</li> })
                                        .collect_view()}
                                </ol>
                            </section>

                            <section class="technologies">
                                <h2>"Technologies"</h2>
                                <div class="tech-tags">
                                    {service
                                        .technologies
                                        .iter()
                                        .map(|t| view! { <span class="tag">{*t}</span> })
                                        .collect_view()}
                                </div>
                            </section>

                            <section class="cta-banner">
                                <A href="/contact" attr:class="btn btn-primary">
                                    "Discuss Your Project"
                                </A>
                            </section>
                        }
                            .into_any()
                    }
                    None => {
                        view! {
                            <section class="page-header">
                                <h1>"Service Not Found"</h1>
                                <p>"We don't offer a service under that name."</p>
                                <A href="/services" attr:class="btn btn-secondary">
                                    "Browse All Services"
                                </A>
                            </section>
                        }
                            .into_any()
                    }
                }
            }}
        </div>
    }
}
