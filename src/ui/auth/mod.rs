//! Authentication UI module
//!
//! Session context, route gate and login components.

mod context;
mod login_form;
mod protected;
mod user_menu;

pub use context::{
    SessionContext, provide_session_context, router_navigator, use_session_context,
};
pub use login_form::LoginForm;
pub use protected::ProtectedRoute;
pub use user_menu::UserMenu;
