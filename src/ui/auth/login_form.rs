//! Login form component
//!
//! Exchanges an OpenAI API key for a backend session.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::context::use_session_context;
use crate::ui::icon::{Icon, icons};

/// Only emptiness is checked here; the backend judges the key itself
pub fn validate_api_key(value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err("API key is required".to_string())
    } else {
        Ok(())
    }
}

/// Login form component.
/// A successful login flips the session phase; the page reacts to that.
#[component]
pub fn LoginForm() -> impl IntoView {
    let session = use_session_context();

    // Form state
    let api_key = RwSignal::new(String::new());
    let show_key = RwSignal::new(false);
    let key_error = RwSignal::new(None::<String>);

    let validate = move || match validate_api_key(&api_key.get()) {
        Ok(()) => {
            key_error.set(None);
            true
        }
        Err(e) => {
            key_error.set(Some(e));
            false
        }
    };

    // Handle form submission
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        session.clear_error();

        if !validate() {
            return;
        }

        let key = api_key.get().trim().to_string();

        spawn_local(async move {
            // Errors are already set in the session context
            let _ = session.login_with_api_key(key).await;
        });
    };

    view! {
        <div class="w-full max-w-md mx-auto bg-theme-primary rounded-xl shadow-lg p-6 border border-theme">
            <form on:submit=on_submit class="space-y-6">
                // Header
                <div class="text-center">
                    <div class="mx-auto mb-4 w-14 h-14 bg-accent-primary rounded-xl flex items-center justify-center">
                        <Icon name=icons::SPARKLES class="w-7 h-7" />
                    </div>
                    <h2 class="text-2xl font-bold text-theme-primary">
                        "Welcome to AgenticOS"
                    </h2>
                    <p class="mt-2 text-sm text-theme-secondary">
                        "Enter your OpenAI API key to get started"
                    </p>
                </div>

                // Global error message
                {move || {
                    session.error.get().map(|error| {
                        view! {
                            <div class="p-3 bg-red-100 dark:bg-red-900/30 border border-red-300 dark:border-red-700 rounded-lg">
                                <p class="text-sm text-red-700 dark:text-red-300">{error}</p>
                            </div>
                        }
                    })
                }}

                // API key field
                <div>
                    <label for="api-key" class="flex items-center gap-2 text-sm font-medium text-theme-primary mb-1">
                        <Icon name=icons::KEY class="w-4 h-4" />
                        "OpenAI API Key"
                    </label>
                    <div class="relative">
                        <input
                            type=move || if show_key.get() { "text" } else { "password" }
                            id="api-key"
                            name="api-key"
                            autocomplete="off"
                            placeholder="sk-..."
                            class="w-full px-3 py-2 pr-16 bg-theme-secondary border border-theme rounded-lg
                                   text-theme-primary placeholder-theme-tertiary
                                   focus:outline-none focus:ring-2 focus:ring-accent-primary focus:border-transparent
                                   transition-colors"
                            class:border-red-500=move || key_error.get().is_some()
                            prop:value=move || api_key.get()
                            on:input=move |ev| {
                                api_key.set(event_target_value(&ev));
                                key_error.set(None);
                            }
                            on:blur=move |_| {
                                if !api_key.get().is_empty() {
                                    validate();
                                }
                            }
                        />
                        <button
                            type="button"
                            class="absolute inset-y-0 right-0 pr-3 flex items-center text-xs text-theme-tertiary hover:text-theme-secondary"
                            on:click=move |_| show_key.update(|v| *v = !*v)
                        >
                            {move || if show_key.get() { "Hide" } else { "Show" }}
                        </button>
                    </div>
                    {move || {
                        key_error.get().map(|error| {
                            view! {
                                <p class="mt-1 text-sm text-red-500">{error}</p>
                            }
                        })
                    }}
                </div>

                // Storage notice
                <div class="rounded-lg p-4 border border-theme bg-theme-secondary text-sm text-theme-secondary space-y-1">
                    <div class="flex items-center gap-2 font-medium text-theme-primary">
                        <Icon name=icons::SHIELD class="w-4 h-4" />
                        "Your API key stays with the backend"
                    </div>
                    <p>"Only the session token is stored in this browser."</p>
                </div>

                // Submit button
                <button
                    type="submit"
                    class="w-full py-2.5 px-4 bg-accent-primary hover:bg-accent-primary-hover
                           text-white font-medium rounded-lg
                           focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-accent-primary
                           disabled:opacity-50 disabled:cursor-not-allowed
                           transition-colors"
                    disabled=move || session.loading.get() || api_key.get().is_empty()
                >
                    {move || {
                        if session.loading.get() {
                            view! {
                                <span class="flex items-center justify-center">
                                    <Icon name=icons::LOADER class="animate-spin -ml-1 mr-2 h-4 w-4 text-white" />
                                    "Verifying API key..."
                                </span>
                            }.into_any()
                        } else {
                            view! {
                                <span class="flex items-center justify-center gap-2">
                                    "Get Started"
                                    <Icon name=icons::ARROW_RIGHT class="w-4 h-4" />
                                </span>
                            }.into_any()
                        }
                    }}
                </button>
            </form>
        </div>
    }
}
