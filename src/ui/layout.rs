//! Shared page chrome

use leptos::prelude::*;
use leptos_router::components::A;

use crate::ui::auth::UserMenu;
use crate::ui::icon::{Icon, icons};

/// Top bar with the product name, an optional back link and the user menu
#[component]
pub fn PageHeader(
    /// Target of the back link, if any
    #[prop(optional)]
    back_href: Option<&'static str>,
) -> impl IntoView {
    view! {
        <header class="border-b border-theme">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    <div class="flex items-center gap-4">
                        {back_href.map(|href| view! {
                            <A href=href attr:class="p-2 rounded-lg hover:bg-theme-secondary transition-colors">
                                <Icon name=icons::ARROW_LEFT class="w-5 h-5" />
                            </A>
                        })}
                        <A href="/" attr:class="flex items-center gap-3 hover:opacity-80 transition-opacity">
                            <div class="w-8 h-8 bg-accent-primary rounded-lg flex items-center justify-center">
                                <Icon name=icons::SPARKLES class="w-5 h-5" />
                            </div>
                            <span class="text-xl font-bold text-theme-primary">"AgenticOS"</span>
                        </A>
                    </div>
                    <UserMenu />
                </div>
            </div>
        </header>
    }
}

/// Page footer
#[component]
pub fn PageFooter() -> impl IntoView {
    view! {
        <footer class="py-4 border-t border-theme">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <p class="text-center text-sm text-theme-tertiary">
                    "© 2025 AgenticOS"
                </p>
            </div>
        </footer>
    }
}
