use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::components::{Footer, Nav};
use crate::pages::*;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/deltaflow.css"/>
        <Title text="DeltaFlow - Synchronizing Intelligence with Business"/>
        <Meta name="description" content="Custom AI development agency building intelligent solutions for forward-thinking companies"/>

        <Router>
            <Nav/>
            <main>
                <Routes fallback=|| view! { <h1>"404 - Page Not Found"</h1> }>
                    <Route path=path!("/") view=HomePage/>
                    <Route path=path!("/services") view=ServicesPage/>
                    <Route path=path!("/services/:slug") view=ServiceDetailPage/>
                    <Route path=path!("/work") view=WorkPage/>
                    <Route path=path!("/about") view=AboutPage/>
                    <Route path=path!("/contact") view=ContactPage/>
                    <Route path=path!("/terms") view=TermsPage/>
                    <Route path=path!("/privacy") view=PrivacyPage/>
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}
