//! Session context for the component tree
//!
//! This module provides a reactive wrapper around [`SessionGuard`]:
//! - One guard per app, shared by every protected page
//! - An `AuthPhase` signal mirroring the guard for rendering
//! - API-key login against the backend
//! - Storage is checked once, after hydration

use leptos::logging::warn;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::core::{
    ApiClient, AuthPhase, BrowserStorage, ClientConfig, Navigator, Session, SessionGuard,
};

/// Session context providing authentication state and actions
#[derive(Clone, Copy)]
pub struct SessionContext {
    /// Current authentication phase
    pub phase: RwSignal<AuthPhase>,
    /// Login request in flight
    pub loading: RwSignal<bool>,
    /// Error message from the last login attempt
    pub error: RwSignal<Option<String>>,
    guard: StoredValue<SessionGuard<BrowserStorage>>,
    api: StoredValue<ApiClient>,
    navigator: StoredValue<Box<dyn Navigator>, LocalStorage>,
}

impl SessionContext {
    /// Check if storage has not been read yet
    pub fn is_loading(&self) -> bool {
        self.phase.get().is_loading()
    }

    /// Check if user is authenticated
    pub fn is_authenticated(&self) -> bool {
        self.phase.get().is_authenticated()
    }

    /// Get current session (if authenticated)
    pub fn session(&self) -> Option<Session> {
        self.phase.get().session().cloned()
    }

    /// Backend client
    pub fn api(&self) -> ApiClient {
        self.api.get_value()
    }

    /// Persisted bearer token.
    /// Reads storage directly, so it is safe outside reactive contexts.
    pub fn get_token(&self) -> Option<String> {
        self.guard.with_value(|guard| guard.get_token())
    }

    /// Re-read the session from storage
    pub fn check_auth(&self) {
        self.guard.update_value(|guard| {
            guard.check_auth();
        });
        self.sync();
    }

    /// Store credentials returned by the backend
    pub fn login(&self, token: &str, user_id: &str) {
        let result = self.guard.try_update_value(|guard| guard.login(token, user_id));
        if let Some(Err(e)) = result {
            warn!("Session will not survive a reload: {}", e);
        }
        self.sync();
    }

    /// Clear the session and go to the login page
    pub fn logout(&self) {
        self.navigator.with_value(|navigator| {
            self.guard
                .update_value(|guard| guard.logout(&|path: &str| navigator.navigate(path)));
        });
        self.sync();
    }

    /// Gate for protected pages, see [`SessionGuard::require_auth`]
    pub fn require_auth(&self) -> bool {
        self.navigator.with_value(|navigator| {
            self.guard
                .with_value(|guard| guard.require_auth(&|path: &str| navigator.navigate(path)))
        })
    }

    /// Clear error message
    pub fn clear_error(&self) {
        self.error.set(None);
    }

    /// Exchange an OpenAI API key for a backend session and store it
    pub async fn login_with_api_key(&self, api_key: String) -> Result<Session, String> {
        self.loading.set(true);
        self.error.set(None);

        let result = self
            .api()
            .login(&api_key)
            .await
            .map(|response| {
                self.login(&response.access_token, &response.user_id);
                Session {
                    token: response.access_token,
                    user_id: response.user_id,
                }
            })
            .map_err(|e| e.to_string());

        self.loading.set(false);

        if let Err(ref e) = result {
            self.error.set(Some(e.clone()));
        }

        result
    }

    fn sync(&self) {
        let phase = self.guard.with_value(|guard| guard.phase().clone());
        self.phase.set(phase);
    }
}

/// Navigator backed by the router
pub fn router_navigator() -> impl Navigator {
    let navigate = use_navigate();
    move |path: &str| navigate(path, Default::default())
}

/// Provide session context to the component tree.
/// Must be called inside the `<Router>`.
pub fn provide_session_context(config: &ClientConfig) -> SessionContext {
    // Loading on both server and client to avoid hydration mismatch
    let ctx = SessionContext {
        phase: RwSignal::new(AuthPhase::Loading),
        loading: RwSignal::new(false),
        error: RwSignal::new(None::<String>),
        guard: StoredValue::new(SessionGuard::new(BrowserStorage, config.session_policy)),
        api: StoredValue::new(ApiClient::new(config.api_base_url.clone())),
        navigator: StoredValue::new_local(Box::new(router_navigator()) as Box<dyn Navigator>),
    };

    // Read storage once hydration is complete (client-side only)
    #[cfg(feature = "hydrate")]
    {
        Effect::new(move |_| {
            ctx.check_auth();
        });
    }

    provide_context(ctx);
    ctx
}

/// Get session context from the component tree
pub fn use_session_context() -> SessionContext {
    expect_context::<SessionContext>()
}
