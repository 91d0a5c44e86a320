//! Body class for the active theme.

use widgets::theme::DARK_MODE_CLASS;

/// Add or remove the dark-mode class on `<body>`.
pub fn apply_body_class(dark: bool) {
    #[cfg(feature = "csr")]
    {
        let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
            return;
        };
        if let Err(e) = body.class_list().toggle_with_force(DARK_MODE_CLASS, dark) {
            leptos::logging::warn!("failed to set {DARK_MODE_CLASS}: {e:?}");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (DARK_MODE_CLASS, dark);
    }
}
