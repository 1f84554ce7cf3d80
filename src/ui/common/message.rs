//! Inline status messages for form results

use crate::ui::{Icon, icons};
use leptos::prelude::*;

/// Error message component
/// Displays an error message with an alert icon
#[component]
pub fn ErrorMessage(
    /// Error signal - shows message when Some, hidden when None
    #[prop(into)]
    error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some()>
            <div class="error-message">
                <Icon name=icons::ALERT_CIRCLE class="icon-text"/>
                <span>{move || error.get().unwrap_or_default()}</span>
            </div>
        </Show>
    }
}

/// Success message component
#[component]
pub fn SuccessMessage(
    /// Success message signal - shows when Some, hidden when None
    #[prop(into)]
    message: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <div class="success-message">
                <Icon name=icons::CHECK_CIRCLE class="icon-text"/>
                <span>{move || message.get().unwrap_or_default()}</span>
            </div>
        </Show>
    }
}

/// Shown when the backend needs the user to authorize a third-party
/// service (Gmail, Google Docs) before it can act
#[component]
pub fn AuthorizationPrompt(
    /// OAuth URL signal - shows the prompt when Some
    #[prop(into)]
    oauth_url: Signal<Option<String>>,
    /// Name of the service to authorize
    service: &'static str,
) -> impl IntoView {
    view! {
        <Show when=move || oauth_url.get().is_some()>
            <div class="warning-message flex-col items-start gap-2">
                <div class="flex items-center gap-2">
                    <Icon name=icons::WARNING class="icon-text"/>
                    <span>{format!("{} authorization required", service)}</span>
                </div>
                <a
                    href=move || oauth_url.get().unwrap_or_default()
                    target="_blank"
                    rel="noopener noreferrer"
                    class="inline-flex items-center gap-1 text-accent-primary hover:text-accent-primary-hover font-medium"
                >
                    {format!("Connect {}", service)}
                    <Icon name=icons::EXTERNAL_LINK class="w-4 h-4"/>
                </a>
            </div>
        </Show>
    }
}
