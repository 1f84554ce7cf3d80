//! Email agent page

use leptos::logging::error;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;

use crate::core::api::{GENERATED_EMAIL_BODY, SendEmailRequest, outcome_of};
use crate::core::{EmailRecord, Envelope, Outcome};
use crate::ui::auth::{ProtectedRoute, use_session_context};
use crate::ui::common::{AuthorizationPrompt, ErrorMessage, SuccessMessage};
use crate::ui::history::{EmailHistory, provide_history_context, use_history_context};
use crate::ui::icon::{Icon, icons};
use crate::ui::layout::{PageFooter, PageHeader};

/// Check the composer fields before calling the backend
pub fn validate_email_form(to: &str, subject: &str) -> Result<(), String> {
    let to = to.trim();
    if to.is_empty() {
        return Err("Recipient is required".to_string());
    }
    if !to.contains('@') || !to.contains('.') {
        return Err("Please enter a valid email address".to_string());
    }
    if subject.trim().is_empty() {
        return Err("Subject is required".to_string());
    }
    Ok(())
}

/// Email agent page
#[component]
pub fn EmailPage() -> impl IntoView {
    provide_history_context::<EmailRecord>();

    view! {
        <Title text="Email Agent - AgenticOS"/>
        <ProtectedRoute>
            <div class="min-h-screen bg-theme-primary flex flex-col">
                <PageHeader back_href="/agents" />
                <main class="flex-1 max-w-3xl w-full mx-auto px-4 py-12">
                    <EmailComposer />
                    <EmailHistory />
                </main>
                <PageFooter />
            </div>
        </ProtectedRoute>
    }
}

#[component]
fn EmailComposer() -> impl IntoView {
    let session = use_session_context();
    let history = use_history_context::<EmailRecord>();

    let to = RwSignal::new(String::new());
    let subject = RwSignal::new(String::new());
    let sending = RwSignal::new(false);
    let result = RwSignal::new(None::<String>);
    let error_msg = RwSignal::new(None::<String>);
    let oauth_url = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let recipient = to.get().trim().to_string();
        let subject_line = subject.get().trim().to_string();

        result.set(None);
        oauth_url.set(None);
        if let Err(e) = validate_email_form(&recipient, &subject_line) {
            error_msg.set(Some(e));
            return;
        }
        error_msg.set(None);
        sending.set(true);

        spawn_local(async move {
            let request = SendEmailRequest {
                to: recipient.clone(),
                subject: subject_line.clone(),
                body: GENERATED_EMAIL_BODY.to_string(),
            };
            let response = session
                .api()
                .send_email(session.get_token(), &request)
                .await;
            let outcome = outcome_of(&response);

            match &response {
                Ok(sent) => {
                    oauth_url.set(sent.pending_authorization().map(str::to_string));
                    if outcome.is_success() {
                        result.set(Some(
                            sent.result
                                .clone()
                                .unwrap_or_else(|| "Email sent successfully".to_string()),
                        ));
                        to.set(String::new());
                        subject.set(String::new());
                    }
                }
                Err(e) => error!("Send email failed: {}", e),
            }
            if let Outcome::Failure(reason) = &outcome {
                error_msg.set(Some(reason.clone()));
            }

            history.append(EmailRecord::new(recipient, subject_line), outcome);
            sending.set(false);
        });
    };

    view! {
        <section class="rounded-xl border border-theme bg-theme-primary shadow-lg p-6">
            <div class="flex items-center gap-3 mb-6">
                <div class="w-10 h-10 bg-accent-primary rounded-lg flex items-center justify-center">
                    <Icon name=icons::MAIL class="w-5 h-5" />
                </div>
                <div>
                    <h1 class="text-2xl font-bold text-theme-primary">"Email Agent"</h1>
                    <p class="text-sm text-theme-secondary">
                        "Give a recipient and a subject, the agent writes and sends the email."
                    </p>
                </div>
            </div>

            <form on:submit=on_submit class="space-y-4">
                <div>
                    <label for="email-to" class="block text-sm font-medium text-theme-primary mb-1">"To"</label>
                    <input
                        type="email"
                        id="email-to"
                        placeholder="recipient@example.com"
                        class="w-full px-3 py-2 bg-theme-secondary border border-theme rounded-lg text-theme-primary focus:outline-none focus:ring-2 focus:ring-accent-primary"
                        prop:value=move || to.get()
                        on:input=move |ev| to.set(event_target_value(&ev))
                    />
                </div>
                <div>
                    <label for="email-subject" class="block text-sm font-medium text-theme-primary mb-1">"Subject"</label>
                    <input
                        type="text"
                        id="email-subject"
                        placeholder="Quarterly update"
                        class="w-full px-3 py-2 bg-theme-secondary border border-theme rounded-lg text-theme-primary focus:outline-none focus:ring-2 focus:ring-accent-primary"
                        prop:value=move || subject.get()
                        on:input=move |ev| subject.set(event_target_value(&ev))
                    />
                </div>

                <ErrorMessage error=error_msg />
                <SuccessMessage message=result />
                <AuthorizationPrompt oauth_url=oauth_url service="Gmail" />

                <button
                    type="submit"
                    class="w-full py-2.5 px-4 bg-accent-primary hover:bg-accent-primary-hover text-white font-medium rounded-lg disabled:opacity-50 disabled:cursor-not-allowed transition-colors"
                    disabled=move || sending.get()
                >
                    {move || if sending.get() {
                        view! {
                            <span class="flex items-center justify-center gap-2">
                                <Icon name=icons::LOADER class="animate-spin w-4 h-4" />
                                "Sending..."
                            </span>
                        }.into_any()
                    } else {
                        view! {
                            <span class="flex items-center justify-center gap-2">
                                <Icon name=icons::MAIL class="w-4 h-4" />
                                "Send Email"
                            </span>
                        }.into_any()
                    }}
                </button>
            </form>
        </section>
    }
}
