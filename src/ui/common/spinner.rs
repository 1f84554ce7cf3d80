//! Loading indicators

use leptos::prelude::*;

use crate::ui::icon::{Icon, icons};

/// Full-screen spinner shown while the session is being checked
#[component]
pub fn LoadingScreen(
    /// Text under the spinner
    #[prop(default = "Checking your session...")]
    message: &'static str,
) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-theme-primary flex flex-col items-center justify-center gap-3" role="status" aria-live="polite">
            <Icon name=icons::LOADER class="animate-spin w-10 h-10 text-accent-primary" />
            <p class="text-sm text-theme-secondary">{message}</p>
        </div>
    }
}
