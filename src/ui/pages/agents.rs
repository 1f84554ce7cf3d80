//! Agents hub page

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::ui::auth::ProtectedRoute;
use crate::ui::icon::{Icon, icons};
use crate::ui::layout::{PageFooter, PageHeader};

/// An agent offered on the hub
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgentCard {
    pub title: &'static str,
    pub description: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
    pub features: &'static [&'static str],
}

pub const AGENTS: &[AgentCard] = &[
    AgentCard {
        title: "Email Agent",
        description: "Write and send emails from just a recipient and a subject line",
        href: "/email",
        icon: icons::MAIL,
        features: &["Gmail integration", "Generated body", "Send history"],
    },
    AgentCard {
        title: "Document Agent",
        description: "Research a topic from the web and produce a formatted document",
        href: "/docs",
        icon: icons::FILE_TEXT,
        features: &["Source URLs", "Markdown, HTML, PDF, DOCX", "Downloads"],
    },
];

/// Card linking to one agent
#[component]
pub fn AgentCardView(card: AgentCard) -> impl IntoView {
    view! {
        <A
            href=card.href
            attr:class="block p-6 rounded-xl border border-theme bg-theme-primary hover:bg-theme-secondary shadow-sm transition-colors"
        >
            <div class="w-12 h-12 mb-4 bg-accent-primary rounded-lg flex items-center justify-center">
                <Icon name=card.icon class="w-6 h-6" />
            </div>
            <h3 class="text-lg font-semibold text-theme-primary mb-2">{card.title}</h3>
            <p class="text-sm text-theme-secondary mb-4">{card.description}</p>
            <ul class="space-y-1">
                {card.features.iter().map(|feature| view! {
                    <li class="flex items-center gap-2 text-xs text-theme-tertiary">
                        <Icon name=icons::CHECK class="w-3 h-3" />
                        {*feature}
                    </li>
                }).collect_view()}
            </ul>
        </A>
    }
}

/// Agents hub page
#[component]
pub fn AgentsPage() -> impl IntoView {
    view! {
        <Title text="Agents - AgenticOS"/>
        <ProtectedRoute>
            <div class="min-h-screen bg-theme-primary flex flex-col">
                <PageHeader back_href="/" />
                <main class="flex-1 max-w-5xl w-full mx-auto px-4 py-12">
                    <h1 class="text-3xl font-bold text-theme-primary mb-2">"Choose an agent"</h1>
                    <p class="text-theme-secondary mb-8">
                        "Each agent runs on the backend with your API key."
                    </p>
                    <div class="grid gap-6 sm:grid-cols-2">
                        {AGENTS.iter().map(|card| view! { <AgentCardView card=*card /> }).collect_view()}
                    </div>
                </main>
                <PageFooter />
            </div>
        </ProtectedRoute>
    }
}
