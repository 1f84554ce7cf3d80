//! Login page component
//!
//! Leaves for the home page as soon as a session exists, whether it was
//! restored from storage or just created by the form.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::core::AuthPhase;
use crate::ui::auth::{LoginForm, use_session_context};
use crate::ui::layout::{PageFooter, PageHeader};

const AFTER_LOGIN_PATH: &str = "/";

/// Where the login page should send the user, if anywhere
pub fn login_redirect(phase: &AuthPhase) -> Option<&'static str> {
    phase.is_authenticated().then_some(AFTER_LOGIN_PATH)
}

/// Login page component
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session_context();
    let navigate = use_navigate();

    // Single redirect point for both restored and fresh sessions
    Effect::new(move |_| {
        if let Some(path) = session.phase.with(login_redirect) {
            navigate(path, Default::default());
        }
    });

    view! {
        <div class="min-h-screen bg-theme-primary flex flex-col">
            <PageHeader />

            <main class="flex-1 flex items-center justify-center p-4">
                <div class="w-full max-w-md">
                    <LoginForm />
                </div>
            </main>

            <PageFooter />
        </div>
    }
}
