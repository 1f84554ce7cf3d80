//! Common reusable UI components

pub mod message;
pub mod spinner;

pub use message::{AuthorizationPrompt, ErrorMessage, SuccessMessage};
pub use spinner::LoadingScreen;
