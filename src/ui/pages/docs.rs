//! Document agent page

use leptos::logging::error;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;

use crate::core::api::{GenerateDocumentRequest, outcome_of};
use crate::core::document::parse_url_list;
use crate::core::{DocumentRecord, Envelope, Outcome, OutputFormat};
use crate::ui::auth::{ProtectedRoute, use_session_context};
use crate::ui::common::{AuthorizationPrompt, ErrorMessage, SuccessMessage};
use crate::ui::history::{DocumentHistory, provide_history_context, use_history_context};
use crate::ui::icon::{Icon, icons};
use crate::ui::layout::{PageFooter, PageHeader};

/// Document agent page
#[component]
pub fn DocsPage() -> impl IntoView {
    provide_history_context::<DocumentRecord>();

    view! {
        <Title text="Document Agent - AgenticOS"/>
        <ProtectedRoute>
            <div class="min-h-screen bg-theme-primary flex flex-col">
                <PageHeader back_href="/agents" />
                <main class="flex-1 max-w-3xl w-full mx-auto px-4 py-12">
                    <DocumentGenerator />
                    <DocumentHistory />
                </main>
                <PageFooter />
            </div>
        </ProtectedRoute>
    }
}

#[component]
fn DocumentGenerator() -> impl IntoView {
    let session = use_session_context();
    let history = use_history_context::<DocumentRecord>();

    let topic = RwSignal::new(String::new());
    let urls = RwSignal::new(String::new());
    let format = RwSignal::new(OutputFormat::default());
    let generating = RwSignal::new(false);
    let result = RwSignal::new(None::<String>);
    let error_msg = RwSignal::new(None::<String>);
    let oauth_url = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let topic_text = topic.get().trim().to_string();
        result.set(None);
        oauth_url.set(None);
        if topic_text.is_empty() {
            error_msg.set(Some("Topic is required".to_string()));
            return;
        }
        error_msg.set(None);
        generating.set(true);

        let request = GenerateDocumentRequest {
            topic: topic_text,
            urls: parse_url_list(&urls.get()),
            output_format: format.get(),
        };

        spawn_local(async move {
            let response = session
                .api()
                .generate_document(session.get_token(), &request)
                .await;
            let outcome = outcome_of(&response);
            let mut record = DocumentRecord {
                topic: request.topic,
                urls: request.urls,
                output_format: request.output_format,
                file_path: None,
            };

            match &response {
                Ok(generated) => {
                    oauth_url.set(generated.pending_authorization().map(str::to_string));
                    record.file_path = generated.file_path.clone();
                    if outcome.is_success() {
                        let message = if generated.needs_input {
                            "The agent needs more details about this topic"
                        } else {
                            "Document generated successfully"
                        };
                        result.set(Some(
                            generated.result.clone().unwrap_or_else(|| message.to_string()),
                        ));
                    }
                }
                Err(e) => error!("Document generation failed: {}", e),
            }
            if let Outcome::Failure(reason) = &outcome {
                error_msg.set(Some(reason.clone()));
            }

            history.append(record, outcome);
            generating.set(false);
        });
    };

    view! {
        <section class="rounded-xl border border-theme bg-theme-primary shadow-lg p-6">
            <div class="flex items-center gap-3 mb-6">
                <div class="w-10 h-10 bg-accent-primary rounded-lg flex items-center justify-center">
                    <Icon name=icons::FILE_TEXT class="w-5 h-5" />
                </div>
                <div>
                    <h1 class="text-2xl font-bold text-theme-primary">"Document Agent"</h1>
                    <p class="text-sm text-theme-secondary">
                        "Describe a topic and optionally list sources to research."
                    </p>
                </div>
            </div>

            <form on:submit=on_submit class="space-y-4">
                <div>
                    <label for="doc-topic" class="block text-sm font-medium text-theme-primary mb-1">"Topic"</label>
                    <input
                        type="text"
                        id="doc-topic"
                        placeholder="State of WebAssembly in 2026"
                        class="w-full px-3 py-2 bg-theme-secondary border border-theme rounded-lg text-theme-primary focus:outline-none focus:ring-2 focus:ring-accent-primary"
                        prop:value=move || topic.get()
                        on:input=move |ev| topic.set(event_target_value(&ev))
                    />
                </div>
                <div>
                    <label for="doc-urls" class="flex items-center gap-2 text-sm font-medium text-theme-primary mb-1">
                        <Icon name=icons::GLOBE class="w-4 h-4" />
                        "Source URLs"
                        <span class="text-xs text-theme-tertiary font-normal">"(optional, one per line)"</span>
                    </label>
                    <textarea
                        id="doc-urls"
                        rows="3"
                        placeholder="https://example.com/article"
                        class="w-full px-3 py-2 bg-theme-secondary border border-theme rounded-lg text-theme-primary font-mono text-sm focus:outline-none focus:ring-2 focus:ring-accent-primary"
                        prop:value=move || urls.get()
                        on:input=move |ev| urls.set(event_target_value(&ev))
                    ></textarea>
                </div>
                <div>
                    <label for="doc-format" class="block text-sm font-medium text-theme-primary mb-1">"Output format"</label>
                    <select
                        id="doc-format"
                        class="w-full px-3 py-2 bg-theme-secondary border border-theme rounded-lg text-theme-primary focus:outline-none focus:ring-2 focus:ring-accent-primary"
                        on:change=move |ev| format.set(OutputFormat::from_str(&event_target_value(&ev)))
                    >
                        {OutputFormat::ALL.into_iter().map(|option| view! {
                            <option
                                value=option.to_string()
                                selected=move || format.get() == option
                            >
                                {option.display_name()}
                            </option>
                        }).collect_view()}
                    </select>
                </div>

                <ErrorMessage error=error_msg />
                <SuccessMessage message=result />
                <AuthorizationPrompt oauth_url=oauth_url service="Google Docs" />

                <button
                    type="submit"
                    class="w-full py-2.5 px-4 bg-accent-primary hover:bg-accent-primary-hover text-white font-medium rounded-lg disabled:opacity-50 disabled:cursor-not-allowed transition-colors"
                    disabled=move || generating.get()
                >
                    {move || if generating.get() {
                        view! {
                            <span class="flex items-center justify-center gap-2">
                                <Icon name=icons::LOADER class="animate-spin w-4 h-4" />
                                "Generating..."
                            </span>
                        }.into_any()
                    } else {
                        view! {
                            <span class="flex items-center justify-center gap-2">
                                <Icon name=icons::SPARKLES class="w-4 h-4" />
                                "Generate Document"
                            </span>
                        }.into_any()
                    }}
                </button>
            </form>
        </section>
    }
}
