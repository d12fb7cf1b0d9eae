use leptos::prelude::*;
use leptos_meta::{provide_meta_context, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    StaticSegment,
};

use crate::components::{About, Contact, Footer, Hero, Navbar, Philosophy, Portfolio, Skills};
use crate::content::site::FULL_NAME;
use crate::dom;
use crate::state::reveal::RevealProfile;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // injects a stylesheet into the document <head>
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/rizwana.css"/>

        <Title text=FULL_NAME/>

        <Router>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    // One sweep over every element carrying a reveal class; cards that
    // enter later (filter transitions) watch themselves. Dropping the
    // handle on teardown cancels all outstanding observations.
    let reveal = StoredValue::new_local(None::<dom::RevealObserver>);
    Effect::new(move |_| {
        reveal.set_value(dom::RevealObserver::watch(RevealProfile::PAGE));
    });
    on_cleanup(move || reveal.set_value(None));

    view! {
        <div class="app">
            <Navbar />
            <Hero />
            <About />
            <Portfolio />
            <Philosophy />
            <Skills />
            <Contact />
            <Footer />
        </div>
    }
}
