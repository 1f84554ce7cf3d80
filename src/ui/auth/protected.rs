//! Route gate for pages that need a session

use leptos::prelude::*;

use super::context::use_session_context;
use crate::ui::common::LoadingScreen;

/// Renders its children only for authenticated visitors.
///
/// Shows a spinner until storage has been checked, then redirects
/// unauthenticated visitors to the login page.
#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let session = use_session_context();

    // Decide once the phase is known; never while still loading.
    // Later logouts navigate on their own.
    Effect::new(move |decided: Option<bool>| {
        if decided == Some(true) {
            return true;
        }
        if session.is_loading() {
            return false;
        }
        session.require_auth();
        true
    });

    move || {
        if session.is_loading() {
            view! { <LoadingScreen /> }.into_any()
        } else if session.is_authenticated() {
            children().into_any()
        } else {
            // Redirecting
            view! { <div class="min-h-screen bg-theme-primary"></div> }.into_any()
        }
    }
}
