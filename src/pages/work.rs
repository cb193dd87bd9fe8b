use leptos::prelude::*;
use leptos_router::components::A;

use crate::models::site::CASE_STUDIES;

#[component]
pub fn WorkPage() -> impl IntoView {
    view! {
        <div class="work-page">
            <section class="page-header">
                <h1>"Portfolio"</h1>
                <p>"Selected engagements across finance, healthcare, and retail."</p>
            </section>

            <section class="case-studies">
                {CASE_STUDIES
                    .iter()
                    .map(|study| {
                        view! {
                            <article class="case-study">
                                <header>
                                    <span class="industry">{study.industry}</span>
                                    <h2>{study.title}</h2>
                                    <p class="client">{study.client}</p>
                                </header>

                                <div class="case-body">
                                    <h3>"Challenge"</h3>
                                    <p>{study.challenge}</p>
                                    <h3>"Solution"</h3>
                                    <p>{study.solution}</p>
                                </div>

                                <div class="results">
                                    {study
                                        .results
                                        .iter()
                                        .map(|(metric, label)| {
                                            view! {
                                                <div class="result">
                                                    <span class="metric">{*metric}</span>
                                                    <span class="label">{*label}</span>
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>

                                <div class="tech-tags">
                                    {study
                                        .technologies
                                        .iter()
                                        .map(|t| view! { <span class="tag">{*t}</span> })
                                        .collect_view()}
                                </div>

                                <blockquote class="testimonial">
                                    <p>{study.quote}</p>
                                    <footer>{study.quote_author}</footer>
                                </blockquote>
                            </article>
                        }
                    })
                    .collect_view()}
            </section>

            <section class="cta-banner">
                <h2>"Your project could be next"</h2>
                <A href="/contact" attr:class="btn btn-primary">"Start a Conversation"</A>
            </section>
        </div>
    }
}
