//! Document history panel

use leptos::logging::error;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::context::use_history_context;
use crate::core::{DocumentRecord, HistoryEntry};
use crate::ui::auth::use_session_context;
use crate::ui::icon::{Icon, icons};

const ERROR_PREVIEW_CHARS: usize = 80;

/// Recently generated documents. Hidden while the history is empty.
#[component]
pub fn DocumentHistory() -> impl IntoView {
    let history = use_history_context::<DocumentRecord>();

    view! {
        <Show when=move || !history.is_empty()>
            <section class="mt-8 rounded-xl border border-theme bg-theme-primary shadow-lg">
                <header class="flex items-center gap-3 px-6 py-4 border-b border-theme">
                    <Icon name=icons::CLOCK class="w-5 h-5" />
                    <h2 class="text-xl font-semibold text-theme-primary">"Document History"</h2>
                </header>
                <ul class="p-6 space-y-4">
                    <For
                        each=move || history.entries.get()
                        key=|entry| entry.id.clone()
                        children=move |entry| view! { <DocumentHistoryRow entry=entry /> }
                    />
                </ul>
            </section>
        </Show>
    }
}

#[component]
fn DocumentHistoryRow(entry: HistoryEntry<DocumentRecord>) -> impl IntoView {
    let session = use_session_context();
    let downloading = RwSignal::new(false);

    let status_icon = if entry.success {
        icons::CHECK_CIRCLE
    } else {
        icons::X_CIRCLE
    };
    let error_text = entry.error_preview(ERROR_PREVIEW_CHARS);
    let file_name = entry.record.file_name().map(str::to_string);
    let format = entry.record.output_format.display_name();
    let url_count = entry.record.urls.len();
    let time = entry
        .timestamp
        .with_timezone(&chrono::Local)
        .format("%H:%M")
        .to_string();

    let download = move |name: String| {
        downloading.set(true);
        spawn_local(async move {
            let result = session
                .api()
                .download_document(session.get_token(), &name)
                .await
                .map_err(|e| e.to_string())
                .and_then(|bytes| super::download::save_file(&bytes, &name));
            if let Err(e) = result {
                error!("Download of {} failed: {}", name, e);
            }
            downloading.set(false);
        });
    };

    view! {
        <li class="flex items-center justify-between gap-4 p-4 rounded-xl border border-theme bg-theme-secondary">
            <div class="flex items-center gap-4 flex-1 min-w-0">
                <Icon name=status_icon class="w-6 h-6 flex-shrink-0" />
                <div class="flex-1 min-w-0">
                    <div class="flex items-center gap-2 mb-1">
                        <Icon name=icons::FILE_TEXT class="w-4 h-4" />
                        <span class="text-sm text-theme-primary truncate font-medium">{entry.record.topic}</span>
                    </div>
                    <div class="flex items-center gap-3 text-xs text-theme-tertiary">
                        <span>{format}</span>
                        {(url_count > 0).then(|| view! {
                            <span class="flex items-center gap-1">
                                <Icon name=icons::GLOBE class="w-3 h-3" />
                                {format!("{} source{}", url_count, if url_count == 1 { "" } else { "s" })}
                            </span>
                        })}
                    </div>
                    {error_text.map(|e| view! {
                        <p class="mt-2 text-xs text-red-500 truncate">{e}</p>
                    })}
                </div>
            </div>
            <div class="flex flex-col items-end gap-2 flex-shrink-0">
                {file_name.map(|name| view! {
                    <button
                        class="flex items-center gap-1 text-xs text-accent-primary hover:text-accent-primary-hover disabled:opacity-50"
                        disabled=move || downloading.get()
                        on:click=move |_| download(name.clone())
                        title="Download"
                    >
                        <Icon name=icons::DOWNLOAD class="w-4 h-4" />
                        "Download"
                    </button>
                })}
                <span class="text-xs text-theme-tertiary font-mono">{time}</span>
            </div>
        </li>
    }
}
