//! Application pages module
//!
//! - Landing page (home)
//! - Login page
//! - Agents hub
//! - Email and document agents

mod agents;
mod docs;
mod email;
mod landing;
mod login;
mod not_found;

pub use agents::AgentsPage;
pub use docs::DocsPage;
pub use email::EmailPage;
pub use landing::LandingPage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
