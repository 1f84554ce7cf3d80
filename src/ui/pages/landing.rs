//! Landing page component

use leptos::prelude::*;
use leptos_meta::{Meta, Title};
use leptos_router::hooks::use_navigate;

use super::agents::{AGENTS, AgentCardView};
use crate::core::LOGIN_PATH;
use crate::ui::auth::use_session_context;
use crate::ui::layout::{PageFooter, PageHeader};

/// Landing page component
#[component]
pub fn LandingPage() -> impl IntoView {
    let session = use_session_context();
    let navigate = use_navigate();

    let on_get_started = move |_| {
        let target = if session.is_authenticated() {
            "/agents"
        } else {
            LOGIN_PATH
        };
        navigate(target, Default::default());
    };

    view! {
        <Title text="AgenticOS - AI agents that get work done"/>
        <Meta
            name="description"
            content="AgenticOS runs AI agents that write emails and generate documents for you."
        />

        <div class="min-h-screen bg-theme-primary flex flex-col">
            <PageHeader />

            <section class="flex-1 flex items-center justify-center px-4 py-24">
                <div class="text-center max-w-3xl mx-auto">
                    <h1 class="text-5xl sm:text-6xl font-bold text-theme-primary mb-6 tracking-tight">
                        "AgenticOS"
                    </h1>
                    <p class="text-xl text-theme-secondary mb-10 leading-relaxed">
                        "Hand routine work to AI agents. Send emails, research topics and produce documents from a single prompt."
                    </p>
                    <button
                        class="px-8 py-4 bg-accent-primary hover:bg-accent-primary-hover text-white font-semibold rounded-lg transition-colors"
                        on:click=on_get_started
                    >
                        "Get Started"
                    </button>
                </div>
            </section>

            <section class="max-w-5xl w-full mx-auto px-4 pb-24">
                <div class="grid gap-6 sm:grid-cols-2">
                    {AGENTS.iter().map(|card| view! { <AgentCardView card=*card /> }).collect_view()}
                </div>
            </section>

            <PageFooter />
        </div>
    }
}
