use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::core::ClientConfig;
use crate::ui::auth::provide_session_context;
use crate::ui::pages::{AgentsPage, DocsPage, EmailPage, LandingPage, LoginPage, NotFoundPage};

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
        <Stylesheet id="leptos" href="/pkg/agenticos.css"/>

        // sets the document title
        <Title text="AgenticOS - AI Agents for Everyday Work"/>

        <Router>
            <AppRoutes/>
        </Router>
    }
}

/// Routes plus the app-wide session, which needs the router's navigator
#[component]
fn AppRoutes() -> impl IntoView {
    provide_session_context(&ClientConfig::from_build_env());

    view! {
        <main class="min-h-screen">
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=path!("/") view=LandingPage/>
                <Route path=path!("/login") view=LoginPage/>
                <Route path=path!("/agents") view=AgentsPage/>
                <Route path=path!("/email") view=EmailPage/>
                <Route path=path!("/docs") view=DocsPage/>
            </Routes>
        </main>
    }
}
