//! Fallback for unknown routes

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use super::agents::AGENTS;
use crate::ui::icon::{Icon, icons};
use crate::ui::layout::{PageFooter, PageHeader};

/// Suggested destinations: every agent page, then the agents hub
pub fn suggested_links() -> Vec<(&'static str, &'static str)> {
    AGENTS
        .iter()
        .map(|agent| (agent.title, agent.href))
        .chain(std::iter::once(("All agents", "/agents")))
        .collect()
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Title text="No such page - AgenticOS"/>
        <div class="min-h-screen bg-theme-primary flex flex-col">
            <PageHeader back_href="/" />
            <main class="flex-1 max-w-xl w-full mx-auto px-4 py-16">
                <div class="flex items-center gap-3 mb-4 text-theme-tertiary">
                    <Icon name=icons::WARNING class="w-6 h-6" />
                    <span class="font-mono text-sm">"404"</span>
                </div>
                <h1 class="text-3xl font-bold text-theme-primary mb-3">
                    "No agent lives at this address"
                </h1>
                <p class="text-theme-secondary mb-8">
                    "The link may be outdated. Pick one of the agents below instead."
                </p>
                <ul class="divide-y divide-theme border border-theme rounded-xl bg-theme-primary">
                    {suggested_links().into_iter().map(|(label, href)| view! {
                        <li>
                            <A
                                href=href
                                attr:class="flex items-center justify-between px-5 py-4 text-theme-primary hover:bg-theme-secondary transition-colors"
                            >
                                <span class="font-medium">{label}</span>
                                <Icon name=icons::ARROW_RIGHT class="w-4 h-4" />
                            </A>
                        </li>
                    }).collect_view()}
                </ul>
            </main>
            <PageFooter />
        </div>
    }
}
