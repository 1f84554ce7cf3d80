use leptos::prelude::*;

/// SVG icon served from `/icons/{name}.svg`
#[component]
pub fn Icon(
    /// Icon name, without the `.svg` extension
    name: &'static str,
    /// CSS classes
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=name
            draggable=false
        />
    }
}

/// Icon names used across the pages
pub mod icons {
    pub const ALERT_CIRCLE: &str = "alert-circle";
    pub const ARROW_LEFT: &str = "arrow-left";
    pub const ARROW_RIGHT: &str = "arrow-right";
    pub const CHECK: &str = "check";
    pub const CHECK_CIRCLE: &str = "check-circle";
    pub const CLOCK: &str = "clock";
    pub const DOWNLOAD: &str = "download";
    pub const EXTERNAL_LINK: &str = "external-link";
    pub const FILE_TEXT: &str = "file-text";
    pub const GLOBE: &str = "globe";
    pub const KEY: &str = "key";
    pub const LOADER: &str = "loader";
    pub const LOG_OUT: &str = "log-out";
    pub const MAIL: &str = "mail";
    pub const SHIELD: &str = "shield";
    pub const SPARKLES: &str = "sparkles";
    pub const USER: &str = "user";
    pub const WARNING: &str = "warning";
    pub const X_CIRCLE: &str = "x-circle";
}
