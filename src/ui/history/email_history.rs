//! Email history panel

use leptos::prelude::*;

use super::context::use_history_context;
use crate::core::{EmailRecord, HistoryEntry};
use crate::ui::icon::{Icon, icons};

/// Longest error text shown on a history row
const ERROR_PREVIEW_CHARS: usize = 80;

/// Recently sent emails. Hidden while the history is empty.
#[component]
pub fn EmailHistory() -> impl IntoView {
    let history = use_history_context::<EmailRecord>();

    view! {
        <Show when=move || !history.is_empty()>
            <section class="mt-8 rounded-xl border border-theme bg-theme-primary shadow-lg">
                <header class="flex items-center gap-3 px-6 py-4 border-b border-theme">
                    <Icon name=icons::CLOCK class="w-5 h-5" />
                    <h2 class="text-xl font-semibold text-theme-primary">"Email History"</h2>
                </header>
                <ul class="p-6 space-y-4">
                    <For
                        each=move || history.entries.get()
                        key=|entry| entry.id.clone()
                        children=move |entry| view! { <EmailHistoryRow entry=entry /> }
                    />
                </ul>
            </section>
        </Show>
    }
}

#[component]
fn EmailHistoryRow(entry: HistoryEntry<EmailRecord>) -> impl IntoView {
    let status_icon = if entry.success {
        icons::CHECK_CIRCLE
    } else {
        icons::X_CIRCLE
    };
    let badge_class = if entry.success {
        "badge badge-success"
    } else {
        "badge badge-error"
    };
    let status_label = if entry.success { "Sent" } else { "Failed" };
    let error = entry.error_preview(ERROR_PREVIEW_CHARS);
    let time = entry
        .timestamp
        .with_timezone(&chrono::Local)
        .format("%H:%M")
        .to_string();

    view! {
        <li class="flex items-center justify-between gap-4 p-4 rounded-xl border border-theme bg-theme-secondary">
            <div class="flex items-center gap-4 flex-1 min-w-0">
                <Icon name=status_icon class="w-6 h-6 flex-shrink-0" />
                <div class="flex-1 min-w-0">
                    <div class="flex items-center gap-2 mb-1">
                        <Icon name=icons::USER class="w-4 h-4" />
                        <span class="text-sm text-theme-secondary truncate font-medium">{entry.record.to}</span>
                    </div>
                    <div class="flex items-center gap-2">
                        <Icon name=icons::MAIL class="w-4 h-4" />
                        <span class="text-sm text-theme-primary truncate">{entry.record.subject}</span>
                    </div>
                    {error.map(|error| view! {
                        <p class="mt-2 text-xs text-red-500 truncate">{error}</p>
                    })}
                </div>
            </div>
            <div class="flex flex-col items-end gap-2 flex-shrink-0">
                <span class=badge_class>{status_label}</span>
                <span class="text-xs text-theme-tertiary font-mono">{time}</span>
            </div>
        </li>
    }
}
