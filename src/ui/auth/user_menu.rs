//! User menu component
//!
//! Shown in page headers. Displays a sign-in link when logged out, or the
//! current user id and a logout button when logged in.

use leptos::prelude::*;
use leptos_router::components::A;

use super::context::use_session_context;
use crate::core::{AuthPhase, LOGIN_PATH};
use crate::ui::icon::{Icon, icons};

/// User menu component for the header
#[component]
pub fn UserMenu() -> impl IntoView {
    let session = use_session_context();

    view! {
        <div class="relative">
            {move || {
                match session.phase.get() {
                    AuthPhase::Loading => {
                        view! {
                            <div class="w-8 h-8 rounded-full bg-theme-secondary animate-pulse"></div>
                        }.into_any()
                    }
                    AuthPhase::Unauthenticated => {
                        view! {
                            <A
                                href=LOGIN_PATH
                                attr:class="px-3 py-1.5 text-sm font-medium text-theme-secondary hover:text-theme-primary transition-colors"
                            >
                                "Sign In"
                            </A>
                        }.into_any()
                    }
                    AuthPhase::Authenticated(current) => {
                        view! {
                            <div class="flex items-center gap-3">
                                <div class="flex items-center gap-2 text-sm text-theme-secondary">
                                    <Icon name=icons::USER class="w-4 h-4" />
                                    <span class="font-mono truncate max-w-[10rem]">{current.user_id}</span>
                                </div>
                                <button
                                    class="flex items-center gap-1 px-3 py-1.5 text-sm font-medium text-theme-secondary
                                           hover:text-theme-primary transition-colors"
                                    on:click=move |_| session.logout()
                                    title="Sign out"
                                >
                                    <Icon name=icons::LOG_OUT class="w-4 h-4" />
                                    "Sign Out"
                                </button>
                            </div>
                        }.into_any()
                    }
                }
            }}
        </div>
    }
}
